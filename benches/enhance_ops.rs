use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use image_enhance_rs::enhance::{RasterImage, ops};

fn generate_test_image(width: usize, height: usize) -> RasterImage {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) % 256) as u8;
            pixels.push(v);
            pixels.push(v.wrapping_mul(3));
            pixels.push(255 - v);
        }
    }
    RasterImage::new(width, height, pixels).unwrap()
}

fn benchmark_equalize_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("equalize_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let image = generate_test_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| ops::equalize_histogram(black_box(image)));
        });
    }

    group.finish();
}

fn benchmark_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations_500x500");
    let image = generate_test_image(500, 500);

    group.bench_function("brightness", |b| {
        b.iter(|| ops::brightness(black_box(&image), 1.5).unwrap());
    });

    group.bench_function("contrast", |b| {
        b.iter(|| ops::contrast(black_box(&image), 1.5).unwrap());
    });

    group.bench_function("negative", |b| {
        b.iter(|| ops::negative(black_box(&image)));
    });

    group.bench_function("gamma_correct", |b| {
        b.iter(|| ops::gamma_correct(black_box(&image), 1.5).unwrap());
    });

    group.bench_function("contrast_stretch", |b| {
        b.iter(|| ops::contrast_stretch(black_box(&image)));
    });

    group.bench_function("equalize_histogram", |b| {
        b.iter(|| ops::equalize_histogram(black_box(&image)));
    });

    group.finish();
}

fn benchmark_histogram_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_report");
    let image = generate_test_image(500, 500);

    group.bench_function("compute_500x500", |b| {
        b.iter(|| ops::ChannelHistogram::compute(black_box(&image)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_equalize_by_size,
    benchmark_operations,
    benchmark_histogram_report
);
criterion_main!(benches);

use image_enhance_rs::enhance::{EnhanceConfig, EnhancementPipeline, Operation};
use image_enhance_rs::logger;

use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    info!("Starting image_enhance...");

    let config = EnhanceConfig::builder()
        .contrast_factor(1.5)
        .gamma(1.5)
        .build();
    let mut pipeline = EnhancementPipeline::new(config);

    info!("Enhancement pipeline initialized");
    info!("Contrast factor: {}", pipeline.config().contrast_factor);
    info!("Gamma: {}", pipeline.config().gamma);

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.png".to_string());

    if let Err(e) = pipeline.load_file(&input) {
        error!("Failed to load {}: {}", input, e);
        return Ok(());
    }

    for operation in [
        Operation::Brightness { factor: 1.2 },
        Operation::Contrast { factor: 1.5 },
        Operation::Negative,
        Operation::ContrastStretch,
        Operation::HistogramEqualize,
        Operation::GammaCorrect { gamma: 1.5 },
    ] {
        match pipeline.apply(operation) {
            Ok(processed) => info!(
                "{:?}: produced {}x{} buffer",
                operation,
                processed.width(),
                processed.height()
            ),
            Err(e) => error!("{:?} failed: {}", operation, e),
        }
    }

    match pipeline.histogram() {
        Ok(histogram) => info!(
            "Histogram computed, {} pixels per channel",
            histogram.red.iter().sum::<u32>()
        ),
        Err(e) => error!("Histogram failed: {}", e),
    }

    Ok(())
}

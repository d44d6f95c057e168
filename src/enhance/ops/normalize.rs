//! Per-channel statistical remapping
//!
//! Two-pass operations: a statistics sweep over the whole image followed by
//! a lookup-table remap. Channels are treated independently with no
//! cross-channel coupling, so either operation can shift hue on colorful
//! inputs. That trade-off is intentional.

use tracing::debug;

use crate::enhance::ops::histogram::ChannelHistogram;
use crate::enhance::raster::types::{CHANNELS, Channel, RasterImage};

/// Remaps one channel through a value table, leaving the others untouched.
fn apply_channel_lut(pixels: &mut [u8], channel: Channel, lut: &[u8; 256]) {
    for px in pixels.chunks_exact_mut(CHANNELS) {
        let v = &mut px[channel.index()];
        *v = lut[*v as usize];
    }
}

fn channel_bounds(image: &RasterImage, channel: Channel) -> (u8, u8) {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for px in image.pixels().chunks_exact(CHANNELS) {
        let v = px[channel.index()];
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

/// Linearly remaps each channel so its values span the full [0, 255] range.
///
/// A constant channel has no range to stretch and passes through unchanged;
/// every non-constant channel ends with min 0 and max 255.
pub fn contrast_stretch(image: &RasterImage) -> RasterImage {
    let mut pixels = image.pixels().to_vec();

    for channel in Channel::ALL {
        let (min, max) = channel_bounds(image, channel);
        if min == max {
            debug!(
                "{:?} channel constant at {}, skipping stretch",
                channel, min
            );
            continue;
        }

        let low = min as f32;
        let range = (max - min) as f32;
        let mut lut = [0u8; 256];
        for (v, out) in lut.iter_mut().enumerate() {
            *out = ((v as f32 - low) / range * 255.0).round().clamp(0.0, 255.0) as u8;
        }
        apply_channel_lut(&mut pixels, channel, &lut);
    }

    image.with_pixels(pixels)
}

/// Equalizes each channel's histogram via its cumulative distribution.
///
/// Uses the classical remap where the lowest occupied value maps to 0 and
/// the cumulative count above it is scaled to [0, 255]:
/// `lut[v] = round((cdf[v] - cdf_min) * 255 / (total - cdf_min))`.
/// The table is monotonic non-decreasing, and a constant channel passes
/// through unchanged.
pub fn equalize_histogram(image: &RasterImage) -> RasterImage {
    let histogram = ChannelHistogram::compute(image);
    let total = image.pixel_count() as u32;
    let mut pixels = image.pixels().to_vec();

    for channel in Channel::ALL {
        match equalize_lut(histogram.channel(channel), total) {
            Some(lut) => apply_channel_lut(&mut pixels, channel, &lut),
            None => debug!("{:?} channel constant, skipping equalization", channel),
        }
    }

    image.with_pixels(pixels)
}

/// Builds the equalization table for one channel, or `None` when the
/// channel is constant and must pass through.
fn equalize_lut(hist: &[u32; 256], total: u32) -> Option<[u8; 256]> {
    let first = hist.iter().position(|&count| count > 0)?;
    let cdf_min = hist[first];
    if cdf_min == total {
        return None;
    }

    let scale = 255.0 / (total - cdf_min) as f32;
    let mut lut = [0u8; 256];
    let mut cdf = 0u32;
    for (v, &count) in hist.iter().enumerate().skip(first) {
        cdf += count;
        lut[v] = (((cdf - cdf_min) as f32) * scale).round().clamp(0.0, 255.0) as u8;
    }
    Some(lut)
}

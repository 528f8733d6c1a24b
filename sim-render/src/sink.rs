//! PNG output for rendered images.

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};
use sim_core::image::ColorBuffer;
use std::{fs::File, io::BufWriter, path::Path};

/// Writes `image` to `path` as a lossless 8-bit RGB PNG.
pub fn save_png(path: &Path, image: &ColorBuffer) -> Result<(), image::ImageError> {
    let output = BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new(output);

    encoder.write_image(
        &image.as_rgb_bytes(),
        image.width() as u32,
        image.height() as u32,
        ExtendedColorType::Rgb8,
    )?;

    Ok(())
}

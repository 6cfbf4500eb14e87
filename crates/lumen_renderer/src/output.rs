//! Image file output.
//!
//! Binary PPM (P6) is written by hand so the bytes are exactly
//! `P6\n<width> <height>\n255\n` followed by packed RGB triples. PNG goes
//! through the `image` crate. Both quantize with [`color_to_rgb`].
//!
//! [`color_to_rgb`]: crate::color_to_rgb

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use thiserror::Error;

use crate::Framebuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Framebuffer holds {actual} pixels, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Encode a framebuffer as binary PPM into `writer`.
pub fn write_ppm<W: Write>(image: &Framebuffer, mut writer: W) -> OutputResult<()> {
    check_size(image)?;
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()?;
    Ok(())
}

/// Save a framebuffer as a binary PPM file.
pub fn save_ppm<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    let file = File::create(path.as_ref())?;
    write_ppm(image, BufWriter::new(file))
}

/// Save a framebuffer as an 8-bit PNG file.
pub fn save_png<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    check_size(image)?;
    let rgb = RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
        OutputError::SizeMismatch {
            expected: image.width as usize * image.height as usize,
            actual: image.pixels.len(),
        },
    )?;
    rgb.save_with_format(path.as_ref(), ImageFormat::Png)?;
    Ok(())
}

/// Save a framebuffer, picking the format from the file extension.
///
/// `.ppm` writes binary PPM, `.png` writes PNG.
pub fn save_image<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_ppm(image, path)?,
        "png" => save_png(image, path)?,
        _ => return Err(OutputError::UnsupportedFormat(path.display().to_string())),
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

fn check_size(image: &Framebuffer) -> OutputResult<()> {
    let expected = image.width as usize * image.height as usize;
    if image.pixels.len() != expected {
        return Err(OutputError::SizeMismatch {
            expected,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

//! PPM (P3) format support - ASCII, indexed/RGB rasters
//!
//! Header: `P3`, optional `#`-comment lines, width, height, and the
//! maximum component level (at most 255). Body: whitespace-separated
//! `R G B` ASCII triplets per pixel, row-major, each component in
//! `[0, max_level]`. Every triplet goes through the image's LUT
//! allocator, so loading may exhaust the LUT on wildly colorful input.

use crate::error::{IoError, IoResult};
use crate::scan::{expect_magic, next_value};
use lutimg_core::{Image, Rgb};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read an ASCII PPM image from a reader.
///
/// # Errors
///
/// [`IoError::InvalidData`] on a wrong magic, malformed dimensions, a
/// max level outside `1..=255`, an out-of-range component, or a short
/// body; [`IoError::Core`] if the image needs more distinct colors
/// than the LUT can hold. No partially built image is returned.
pub fn read_ppm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    expect_magic(&mut reader, b"P3")?;
    let width = next_value(&mut reader, "width")?;
    let height = next_value(&mut reader, "height")?;
    let max_level = next_value(&mut reader, "max level")?;
    if max_level == 0 || max_level > 255 {
        return Err(IoError::InvalidData(format!(
            "invalid max level: {max_level}"
        )));
    }

    let mut img = Image::new(width, height)?;

    for v in 0..height {
        for u in 0..width {
            let r = next_component(&mut reader, max_level, u, v)?;
            let g = next_component(&mut reader, max_level, u, v)?;
            let b = next_component(&mut reader, max_level, u, v)?;
            let label = img.alloc_color(Rgb::new(r, g, b))?;
            img.set_pixel(u, v, label);
        }
    }
    Ok(img)
}

fn next_component<R: BufRead>(reader: &mut R, max_level: u32, u: u32, v: u32) -> IoResult<u8> {
    let value = next_value(reader, "pixel component")?;
    if value > max_level {
        return Err(IoError::InvalidData(format!(
            "pixel ({u}, {v}) component {value} exceeds max level {max_level}"
        )));
    }
    Ok(value as u8)
}

/// Write an image as ASCII PPM with max level 255.
///
/// # Errors
///
/// [`IoError::Io`] on write failures, which may leave a partial stream
/// behind.
pub fn write_ppm<W: Write>(img: &Image, writer: &mut W) -> IoResult<()> {
    write!(writer, "P3\n{} {}\n255\n", img.width(), img.height())?;
    for v in 0..img.height() {
        for u in 0..img.width() {
            let color = img.decode_pixel(u, v);
            write!(writer, "  {:3} {:3} {:3}", color.r, color.g, color.b)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Load an ASCII PPM file.
pub fn load_ppm<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path)?;
    read_ppm(BufReader::new(file))
}

/// Save an image to an ASCII PPM file.
///
/// On failure a partial file may be left behind.
pub fn save_ppm<P: AsRef<Path>>(img: &Image, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(img, &mut writer)?;
    writer.flush()?;
    Ok(())
}

//! PBM (P4) format support - binary, two-color rasters
//!
//! Header: `P4`, optional `#`-comment lines, width and height as ASCII
//! decimal, then a single whitespace byte. Body: row-major pixels,
//! MSB-first bit-packed, every row padded to a whole byte. Bit 1 is
//! black (label 1), bit 0 white (label 0); padding bits carry the
//! background.

use crate::error::{IoError, IoResult};
use crate::scan::{expect_magic, next_value};
use lutimg_core::Image;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read a binary PBM image from a reader.
///
/// # Errors
///
/// [`IoError::InvalidData`] on a wrong magic, malformed dimensions, or
/// a body shorter than `height` padded rows; [`IoError::Io`] on reader
/// failures. No partially built image is returned.
pub fn read_pbm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    expect_magic(&mut reader, b"P4")?;
    let width = next_value(&mut reader, "width")?;
    let height = next_value(&mut reader, "height")?;

    let mut img = Image::new(width, height)?;

    let row_bytes = (width as usize).div_ceil(8);
    let mut row = vec![0u8; row_bytes];
    for v in 0..height {
        reader.read_exact(&mut row).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                IoError::InvalidData(format!("short pixel data at row {v}"))
            } else {
                IoError::Io(e)
            }
        })?;
        for u in 0..width {
            let byte = row[(u / 8) as usize];
            if (byte >> (7 - (u % 8))) & 1 == 1 {
                img.set_pixel(u, v, 1);
            }
        }
    }
    Ok(img)
}

/// Write an image as binary PBM.
///
/// # Errors
///
/// [`IoError::NotBilevel`] unless the image holds exactly the two
/// fixed colors; [`IoError::Io`] on write failures, which may leave a
/// partial stream behind.
pub fn write_pbm<W: Write>(img: &Image, writer: &mut W) -> IoResult<()> {
    if img.colors() != 2 {
        return Err(IoError::NotBilevel {
            colors: img.colors(),
        });
    }

    let width = img.width();
    let height = img.height();
    write!(writer, "P4\n{width} {height}\n")?;

    let row_bytes = (width as usize).div_ceil(8);
    let mut row = vec![0u8; row_bytes];
    for v in 0..height {
        // Zeroed bytes double as background-colored padding bits.
        row.fill(0);
        for u in 0..width {
            if img.get_pixel(u, v) != 0 {
                row[(u / 8) as usize] |= 0x80 >> (u % 8);
            }
        }
        writer.write_all(&row)?;
    }
    Ok(())
}

/// Load a binary PBM file.
pub fn load_pbm<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let file = File::open(path)?;
    read_pbm(BufReader::new(file))
}

/// Save an image to a binary PBM file.
///
/// On failure a partial file may be left behind.
pub fn save_pbm<P: AsRef<Path>>(img: &Image, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pbm(img, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_simple() {
        // 2x2, pixels (0,0) and (1,1) black: rows 0b10000000, 0b01000000
        let data = b"P4\n2 2\n\x80\x40".to_vec();
        let img = read_pbm(Cursor::new(data)).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.get_pixel(0, 0), 1);
        assert_eq!(img.get_pixel(1, 0), 0);
        assert_eq!(img.get_pixel(0, 1), 0);
        assert_eq!(img.get_pixel(1, 1), 1);
    }

    #[test]
    fn test_read_with_comments() {
        let data = b"P4\n# made by hand\n2 # width\n2\n\x80\x40".to_vec();
        let img = read_pbm(Cursor::new(data)).unwrap();
        assert_eq!(img.get_pixel(1, 1), 1);
    }

    #[test]
    fn test_read_rejects_wrong_magic() {
        let err = read_pbm(Cursor::new(b"P3\n2 2\n".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::InvalidData(_)));
    }

    #[test]
    fn test_read_rejects_short_body() {
        let err = read_pbm(Cursor::new(b"P4\n2 2\n\x80".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::InvalidData(msg) if msg.contains("short pixel data")));
    }

    #[test]
    fn test_read_rejects_zero_dimension() {
        let err = read_pbm(Cursor::new(b"P4\n0 2\n".to_vec())).unwrap_err();
        assert!(matches!(
            err,
            IoError::Core(lutimg_core::Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_roundtrip_unaligned_width() {
        // Width 10 forces 6 padding bits per row.
        let mut img = Image::new(10, 3).unwrap();
        img.set_pixel(0, 0, 1);
        img.set_pixel(9, 0, 1);
        img.set_pixel(5, 2, 1);

        let mut buf = Vec::new();
        write_pbm(&img, &mut buf).unwrap();
        // Header + 3 rows of 2 bytes each
        assert!(buf.starts_with(b"P4\n10 3\n"));
        assert_eq!(buf.len(), b"P4\n10 3\n".len() + 6);

        let back = read_pbm(Cursor::new(buf)).unwrap();
        assert!(back.equal(&img));
    }

    #[test]
    fn test_write_rejects_multicolor() {
        let mut img = Image::new(2, 2).unwrap();
        img.alloc_color(lutimg_core::Rgb::new(1, 2, 3)).unwrap();
        let mut buf = Vec::new();
        let err = write_pbm(&img, &mut buf).unwrap_err();
        assert!(matches!(err, IoError::NotBilevel { colors: 3 }));
    }
}

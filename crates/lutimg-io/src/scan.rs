//! ASCII header/body scanning shared by the PBM and PPM codecs
//!
//! Netpbm headers are whitespace-separated ASCII decimal values with
//! optional `#`-comment lines between tokens. The scanner consumes
//! exactly one whitespace byte after each value, which is what the
//! binary PBM body relies on.

use crate::error::{IoError, IoResult};
use std::io::BufRead;

fn read_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(IoError::Io(e)),
        }
    }
}

fn skip_comment<R: BufRead>(reader: &mut R) -> IoResult<()> {
    while let Some(b) = read_byte(reader)? {
        if b == b'\n' {
            break;
        }
    }
    Ok(())
}

/// Read the next unsigned ASCII decimal value, skipping leading
/// whitespace and comment lines.
///
/// `what` names the value for error messages. Any non-digit byte
/// inside the token (a sign, a letter, a stray binary byte) makes the
/// whole load fail.
pub(crate) fn next_value<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let mut token: u64 = 0;
    let mut seen_digit = false;

    loop {
        let Some(b) = read_byte(reader)? else {
            if seen_digit {
                break;
            }
            return Err(IoError::InvalidData(format!(
                "unexpected end of file reading {what}"
            )));
        };
        match b {
            b'#' if !seen_digit => skip_comment(reader)?,
            b if b.is_ascii_whitespace() => {
                if seen_digit {
                    // The single whitespace terminator is consumed here.
                    break;
                }
            }
            b'0'..=b'9' => {
                seen_digit = true;
                token = token * 10 + u64::from(b - b'0');
                if token > u64::from(u32::MAX) {
                    return Err(IoError::InvalidData(format!("{what} out of range")));
                }
            }
            b => {
                return Err(IoError::InvalidData(format!(
                    "invalid {what}: unexpected byte {b:#04x}"
                )));
            }
        }
    }
    Ok(token as u32)
}

/// Check the two magic bytes that open every netpbm file.
pub(crate) fn expect_magic<R: BufRead>(reader: &mut R, magic: &[u8; 2]) -> IoResult<()> {
    let mut got = [0u8; 2];
    reader.read_exact(&mut got).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            IoError::InvalidData("file too short for a netpbm magic".into())
        } else {
            IoError::Io(e)
        }
    })?;
    if &got != magic {
        return Err(IoError::InvalidData(format!(
            "invalid file format: expected {}{}, got {:?}",
            magic[0] as char, magic[1] as char, got
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_next_value_plain() {
        let mut r = Cursor::new(b"  42 7".to_vec());
        assert_eq!(next_value(&mut r, "a").unwrap(), 42);
        assert_eq!(next_value(&mut r, "b").unwrap(), 7);
    }

    #[test]
    fn test_next_value_skips_comments() {
        let mut r = Cursor::new(b"# first\n# second\n12 ".to_vec());
        assert_eq!(next_value(&mut r, "width").unwrap(), 12);
    }

    #[test]
    fn test_next_value_rejects_sign() {
        let mut r = Cursor::new(b"-3 ".to_vec());
        assert!(next_value(&mut r, "width").is_err());
    }

    #[test]
    fn test_next_value_eof() {
        let mut r = Cursor::new(Vec::new());
        assert!(next_value(&mut r, "width").is_err());
        // EOF right after digits still yields the value
        let mut r = Cursor::new(b"9".to_vec());
        assert_eq!(next_value(&mut r, "width").unwrap(), 9);
    }

    #[test]
    fn test_expect_magic() {
        let mut r = Cursor::new(b"P4\n".to_vec());
        assert!(expect_magic(&mut r, b"P4").is_ok());
        let mut r = Cursor::new(b"P5\n".to_vec());
        assert!(expect_magic(&mut r, b"P4").is_err());
        let mut r = Cursor::new(b"P".to_vec());
        assert!(expect_magic(&mut r, b"P4").is_err());
    }
}

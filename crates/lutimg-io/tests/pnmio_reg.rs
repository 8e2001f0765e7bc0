//! Regression tests for the PBM/PPM codecs
//!
//! In-memory round-trips across the crates plus file-based load/save
//! through the path conveniences.

use lutimg_core::{Image, Rgb};
use lutimg_io::{load_pbm, load_ppm, read_pbm, read_ppm, save_pbm, save_ppm, write_pbm, write_ppm};
use std::io::Cursor;

fn make_bilevel() -> Image {
    let mut img = Image::new_chess(16, 8, 4, Rgb::BLACK).unwrap();
    // Chess with black dedupes onto the seeded palette: still 2 colors
    assert_eq!(img.colors(), 2);
    img.set_pixel(13, 5, 1);
    img
}

#[test]
fn test_pbm_roundtrip_bilevel_chess() {
    let img = make_bilevel();
    let mut buf = Vec::new();
    write_pbm(&img, &mut buf).unwrap();
    let back = read_pbm(Cursor::new(buf)).unwrap();
    assert!(back.equal(&img));
}

#[test]
fn test_ppm_roundtrip_multicolor() {
    let mut img = Image::new_chess(12, 12, 3, Rgb::new(250, 120, 0)).unwrap();
    let extra = img.alloc_color(Rgb::new(0, 99, 99)).unwrap();
    img.set_pixel(0, 11, extra);

    let mut buf = Vec::new();
    write_ppm(&img, &mut buf).unwrap();
    let back = read_ppm(Cursor::new(buf)).unwrap();
    assert!(back.equal(&img));
}

#[test]
fn test_ppm_accepts_pbm_shaped_image() {
    // PPM writes any indexed image, including two-color ones.
    let img = make_bilevel();
    let mut buf = Vec::new();
    write_ppm(&img, &mut buf).unwrap();
    let back = read_ppm(Cursor::new(buf)).unwrap();
    assert!(back.equal(&img));
}

#[test]
fn test_pbm_file_roundtrip() {
    let img = make_bilevel();
    let path = std::env::temp_dir().join("lutimg_pnmio_reg_test.pbm");
    save_pbm(&img, &path).unwrap();
    let back = load_pbm(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(back.equal(&img));
}

#[test]
fn test_ppm_file_roundtrip() {
    let mut img = Image::new(5, 4).unwrap();
    let teal = img.alloc_color(Rgb::new(0, 128, 128)).unwrap();
    img.set_pixel(4, 3, teal);
    let path = std::env::temp_dir().join("lutimg_pnmio_reg_test.ppm");
    save_ppm(&img, &path).unwrap();
    let back = load_ppm(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(back.equal(&img));
}

#[test]
fn test_load_missing_file() {
    assert!(load_pbm("/nonexistent/lutimg.pbm").is_err());
    assert!(load_ppm("/nonexistent/lutimg.ppm").is_err());
}

#[test]
fn test_cross_format_equality() {
    // The same picture through both codecs decodes to equal images.
    let img = make_bilevel();
    let mut pbm = Vec::new();
    write_pbm(&img, &mut pbm).unwrap();
    let mut ppm = Vec::new();
    write_ppm(&img, &mut ppm).unwrap();

    let from_pbm = read_pbm(Cursor::new(pbm)).unwrap();
    let from_ppm = read_ppm(Cursor::new(ppm)).unwrap();
    assert!(from_pbm.equal(&from_ppm));
}

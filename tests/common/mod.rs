//! JPEG fixtures encoded on the fly.
//!
//! Shared by the integration tests (`mod common;`) and the unit tests
//! (`src/test_helpers.rs` includes this file by path). Depends on nothing
//! but the `image` crate.

#![allow(dead_code)]

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, Rgb, RgbImage};

pub const TAG_DATE_TIME: u16 = 0x0132;
pub const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
pub const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;
pub const TAG_OFFSET_TIME: u16 = 0x9010;
pub const TAG_OFFSET_TIME_ORIGINAL: u16 = 0x9011;
pub const TAG_OFFSET_TIME_DIGITIZED: u16 = 0x9012;

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const ENTRY_SIZE: usize = 12;

/// A baseline JPEG with a gradient so the encoder has something to chew on.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_with_encoder(JpegEncoder::new_with_quality(&mut buf, 90))
        .unwrap();
    buf
}

/// A JPEG whose only EXIF field is IFD0 `DateTime` (`YYYY:MM:DD HH:MM:SS`).
pub fn jpeg_with_exif_datetime(width: u32, height: u32, datetime: &str) -> Vec<u8> {
    jpeg_with_exif(width, height, &[(TAG_DATE_TIME, datetime)], &[])
}

/// A JPEG carrying an EXIF APP1 segment with ASCII fields in IFD0 and, when
/// `exif_fields` is non-empty, in an Exif sub-IFD linked from IFD0.
///
/// Fields are written in the order given. Every value must be longer than
/// four bytes including its terminating NUL, so it lives in the data area.
pub fn jpeg_with_exif(
    width: u32,
    height: u32,
    ifd0_fields: &[(u16, &str)],
    exif_fields: &[(u16, &str)],
) -> Vec<u8> {
    let jpeg = jpeg_bytes(width, height);
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "missing SOI");

    let tiff = tiff_block(ifd0_fields, exif_fields);
    let segment_len = u16::try_from(2 + 6 + tiff.len()).unwrap();

    let mut out = Vec::with_capacity(jpeg.len() + 4 + 6 + tiff.len());
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(&tiff);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Little-endian TIFF: header, IFD0, optional Exif IFD, then string data.
fn tiff_block(ifd0_fields: &[(u16, &str)], exif_fields: &[(u16, &str)]) -> Vec<u8> {
    let has_exif = !exif_fields.is_empty();
    let ifd_size = |entries: usize| 2 + ENTRY_SIZE * entries + 4;

    let ifd0_start = 8;
    let exif_start = ifd0_start + ifd_size(ifd0_fields.len() + usize::from(has_exif));
    let data_start = exif_start + if has_exif { ifd_size(exif_fields.len()) } else { 0 };

    let mut data = Vec::new();
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&(ifd0_start as u32).to_le_bytes());

    let pointer = has_exif.then_some(exif_start as u32);
    write_ifd(&mut tiff, ifd0_fields, pointer, &mut data, data_start);
    if has_exif {
        write_ifd(&mut tiff, exif_fields, None, &mut data, data_start);
    }
    assert_eq!(tiff.len(), data_start);

    tiff.extend_from_slice(&data);
    tiff
}

fn write_ifd(
    tiff: &mut Vec<u8>,
    fields: &[(u16, &str)],
    exif_pointer: Option<u32>,
    data: &mut Vec<u8>,
    data_start: usize,
) {
    let count = fields.len() + usize::from(exif_pointer.is_some());
    tiff.extend_from_slice(&(count as u16).to_le_bytes());

    for &(tag, text) in fields {
        let mut value = text.as_bytes().to_vec();
        value.push(0);
        assert!(value.len() > 4, "{text:?} would be stored inline");

        tiff.extend_from_slice(&tag.to_le_bytes());
        tiff.extend_from_slice(&TYPE_ASCII.to_le_bytes());
        tiff.extend_from_slice(&(value.len() as u32).to_le_bytes());
        tiff.extend_from_slice(&((data_start + data.len()) as u32).to_le_bytes());
        data.extend_from_slice(&value);
    }
    if let Some(offset) = exif_pointer {
        tiff.extend_from_slice(&TAG_EXIF_IFD_POINTER.to_le_bytes());
        tiff.extend_from_slice(&TYPE_LONG.to_le_bytes());
        tiff.extend_from_slice(&1u32.to_le_bytes());
        tiff.extend_from_slice(&offset.to_le_bytes());
    }
    tiff.extend_from_slice(&0u32.to_le_bytes());
}

//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PGM/PNG/etc. into an owned gray buffer
//!   that remembers the source's declared maximum sample value.
//! - `load_unit_image`: read a file straight into an `ImageF32` in [0, 1].
//! - `save_pgm_f32`: write a unit-interval `ImageF32` as binary PGM (`P5`).
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Graymaps (`P5`, `P2`) are read sample-exact: the header is parsed by the
//! `image` crate's PNM decoder and the raster is taken as stored, so samples
//! are divided by the header's maxval rather than rescaled to 8 bits first.
//! Other formats go through the generic decoder as 8-bit luma.
use super::{ImageF32, ImageU8};
use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageEncoder};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Maximum sample value of buffers decoded through the generic 8-bit path.
pub const MAX_SAMPLE_U8: u16 = 255;

#[derive(Clone, Debug)]
enum Samples {
    Bytes(Vec<u8>),
    Words(Vec<u16>),
}

/// Owned grayscale buffer at its source bit depth.
#[derive(Clone, Debug)]
pub struct GrayImage {
    width: usize,
    height: usize,
    max_value: u16,
    samples: Samples,
}

impl GrayImage {
    /// Maximum sample value declared by the source (PGM maxval, 255 otherwise).
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// Divide every sample by the declared maximum.
    pub fn to_unit(&self) -> Result<ImageF32, String> {
        match &self.samples {
            Samples::Bytes(data) => {
                let view = ImageU8::new(self.width, self.height, data)
                    .map_err(|e| format!("Decoded raster does not match header: {e}"))?;
                Ok(view.to_unit(self.max_value))
            }
            Samples::Words(data) => {
                let max = self.max_value as f32;
                let unit = data.iter().map(|&s| s as f32 / max).collect();
                ImageF32::from_vec(self.width, self.height, unit)
                    .map_err(|e| format!("Decoded raster does not match header: {e}"))
            }
        }
    }
}

/// Load an image from disk as grayscale samples.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImage, String> {
    let bytes = fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    if bytes.starts_with(b"P5") || bytes.starts_with(b"P2") {
        return decode_graymap(&bytes)
            .map_err(|e| format!("Failed to decode {}: {e}", path.display()));
    }
    let img = image::load_from_memory(&bytes)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    Ok(GrayImage {
        width: img.width() as usize,
        height: img.height() as usize,
        max_value: MAX_SAMPLE_U8,
        samples: Samples::Bytes(img.into_raw()),
    })
}

/// Load an image from disk and map its samples into the unit interval.
pub fn load_unit_image(path: &Path) -> Result<ImageF32, String> {
    load_grayscale_image(path)?
        .to_unit()
        .map_err(|e| format!("{e} ({})", path.display()))
}

fn decode_graymap(bytes: &[u8]) -> Result<GrayImage, String> {
    let decoder = PnmDecoder::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let (cursor, header) = decoder.into_inner();
    let raster = &bytes[cursor.position() as usize..];

    let declared = header.maximal_sample();
    let max_value = u16::try_from(declared)
        .ok()
        .filter(|&m| m > 0)
        .ok_or_else(|| format!("unsupported maximum sample value {declared}"))?;
    let width = header.width() as usize;
    let height = header.height() as usize;
    let count = width * height;

    let samples = match header.subtype() {
        PnmSubtype::Graymap(SampleEncoding::Binary) if max_value <= 255 => {
            let data = raster
                .get(..count)
                .ok_or_else(|| short_raster(count, raster.len()))?;
            Samples::Bytes(data.to_vec())
        }
        PnmSubtype::Graymap(SampleEncoding::Binary) => {
            let data = raster
                .get(..2 * count)
                .ok_or_else(|| short_raster(count, raster.len() / 2))?;
            Samples::Words(
                data.chunks_exact(2)
                    .map(|b| u16::from_be_bytes([b[0], b[1]]))
                    .collect(),
            )
        }
        PnmSubtype::Graymap(SampleEncoding::Ascii) => {
            let text = std::str::from_utf8(raster).map_err(|e| e.to_string())?;
            let words = text
                .split_ascii_whitespace()
                .take(count)
                .map(|t| t.parse::<u16>().map_err(|e| format!("bad sample {t:?}: {e}")))
                .collect::<Result<Vec<_>, _>>()?;
            if words.len() != count {
                return Err(short_raster(count, words.len()));
            }
            Samples::Words(words)
        }
        other => return Err(format!("expected a graymap, found {other:?}")),
    };

    Ok(GrayImage {
        width,
        height,
        max_value,
        samples,
    })
}

fn short_raster(expected: usize, actual: usize) -> String {
    format!("raster holds {actual} samples, header promises {expected}")
}

/// Save a unit-interval float image as binary PGM with maxval 255.
///
/// Samples are scaled by 255 and truncated; values outside [0, 1] saturate.
pub fn save_pgm_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let bytes = image.to_u8();
    let file =
        File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    PnmEncoder::new(BufWriter::new(file))
        .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
        .write_image(
            &bytes,
            image.w as u32,
            image.h as u32,
            ExtendedColorType::L8,
        )
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

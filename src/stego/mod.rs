// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Wavelet-domain text embedding and extraction.
//!
//! Three call surfaces share one pipeline:
//!
//! - **Paths** ([`embed`] / [`extract`]): read an image file, write a stego
//!   file. Kernel and subband arrive as strings and are validated after the
//!   image dimensions.
//! - **Bytes** ([`embed_bytes`] / [`extract_bytes`]): in-memory images,
//!   output always PNG.
//! - **Decoded images** ([`embed_image`] / [`extract_image`]): operate on a
//!   [`CarrierImage`] directly.
//!
//! Calls are independent and stateless. There is no encryption, integrity
//! check, or robustness against re-compression, resizing or filtering.

pub mod capacity;
pub mod error;
pub mod frame;
pub mod params;
pub mod parity;
mod pipeline;

use std::path::Path;

use log::debug;

use crate::raster::{self, CarrierImage};

pub use capacity::{capacity_bits, estimate_capacity, max_message_bytes};
pub use error::StegoError;
pub use params::{StegoParams, Subband};
pub use pipeline::{embed_image, extract_image};

/// Hide `message` in the image at `carrier_path` and write the result to
/// `output_path`.
///
/// The output format follows the extension of `output_path` and must be
/// lossless. Nothing is written if any step fails.
///
/// # Errors
/// - [`StegoError::LossyOutputFormat`] / [`StegoError::Image`] for an
///   unusable output extension.
/// - [`StegoError::Image`] / [`StegoError::Io`] if the carrier cannot be read
///   or the output cannot be written.
/// - [`StegoError::InvalidDimensions`] if width or height is odd.
/// - [`StegoError::UnsupportedWavelet`] / [`StegoError::InvalidSubband`] for
///   bad parameters.
/// - [`StegoError::MessageTooLarge`] / [`StegoError::CapacityExceeded`] if
///   the message does not fit.
pub fn embed(
    carrier_path: impl AsRef<Path>,
    message: &str,
    output_path: impl AsRef<Path>,
    wavelet: &str,
    subband: &str,
) -> Result<(), StegoError> {
    let output_path = output_path.as_ref();
    raster::lossless_format_for(output_path)?;

    let mut image = CarrierImage::open(carrier_path)?;
    image.validate_dimensions()?;
    let params = StegoParams::parse(wavelet, subband)?;

    embed_image(&mut image, message, &params)?;
    image.save(output_path)?;
    debug!("embedded {} message bytes into {}", message.len(), output_path.display());
    Ok(())
}

/// Recover the message hidden in the image at `stego_path`.
///
/// `wavelet` and `subband` must match the values used at embed time; a
/// mismatch gives [`StegoError::InvalidLength`] or garbled text.
///
/// # Errors
/// - [`StegoError::Image`] / [`StegoError::Io`] if the image cannot be read.
/// - [`StegoError::InvalidDimensions`] if width or height is odd.
/// - [`StegoError::UnsupportedWavelet`] / [`StegoError::InvalidSubband`] for
///   bad parameters.
/// - [`StegoError::InvalidLength`] if the length header is out of range.
pub fn extract(stego_path: impl AsRef<Path>, wavelet: &str, subband: &str) -> Result<String, StegoError> {
    let image = CarrierImage::open(stego_path)?;
    image.validate_dimensions()?;
    let params = StegoParams::parse(wavelet, subband)?;
    extract_image(&image, &params)
}

/// Hide `message` in an encoded image and return the stego image as PNG bytes.
pub fn embed_bytes(image_bytes: &[u8], message: &str, params: &StegoParams) -> Result<Vec<u8>, StegoError> {
    let mut image = CarrierImage::from_bytes(image_bytes)?;
    embed_image(&mut image, message, params)?;
    image.to_png_bytes()
}

/// Recover the message hidden in an encoded image.
pub fn extract_bytes(image_bytes: &[u8], params: &StegoParams) -> Result<String, StegoError> {
    let image = CarrierImage::from_bytes(image_bytes)?;
    extract_image(&image, params)
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Embedding capacity.
//!
//! Every kernel uses periodized boundaries, so each detail subband of a
//! `W x H` image has exactly `(W/2) * (H/2)` coefficients regardless of the
//! kernel or subband chosen. One coefficient carries one frame bit, and the
//! first [`HEADER_BITS`] of them hold the length header.

use std::path::Path;

use crate::raster::CarrierImage;
use crate::stego::error::StegoError;
use crate::stego::frame::HEADER_BITS;

/// Coefficients in one detail subband of a `width x height` image.
///
/// Exact for every kernel because boundaries are periodized. A
/// symmetric-extension transform (PyWavelets' default mode) pads the
/// longer Daubechies filters, so db2 on 64x64 yields 33x33 subbands there;
/// capacity and coefficient order for db2-db4 therefore differ from such
/// tools. Haar is identical under both modes.
pub fn capacity_bits(width: u32, height: u32) -> usize {
    (width / 2) as usize * (height / 2) as usize
}

/// Largest message, in whole bytes, that fits after the length header.
///
/// Capped so the bit count still fits the 32-bit header.
pub fn max_message_bytes(width: u32, height: u32) -> usize {
    let payload_bits = capacity_bits(width, height).saturating_sub(HEADER_BITS);
    (payload_bits / 8).min((u32::MAX / 8) as usize)
}

/// Open an image and report how many message bytes it can carry.
///
/// # Errors
/// - [`StegoError::Image`] / [`StegoError::Io`] if the file cannot be decoded.
/// - [`StegoError::InvalidDimensions`] if width or height is odd.
pub fn estimate_capacity(path: impl AsRef<Path>) -> Result<usize, StegoError> {
    let img = CarrierImage::open(path)?;
    img.validate_dimensions()?;
    Ok(max_message_bytes(img.width(), img.height()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_for_64x64() {
        // 32x32 detail coefficients.
        assert_eq!(capacity_bits(64, 64), 1024);
        // (1024 - 32) / 8 = 124 bytes.
        assert_eq!(max_message_bytes(64, 64), 124);
    }

    #[test]
    fn tiny_images_hold_nothing() {
        assert_eq!(capacity_bits(2, 2), 1);
        assert_eq!(max_message_bytes(2, 2), 0);
        assert_eq!(max_message_bytes(16, 16), 4);
    }

    #[test]
    fn rectangular_image() {
        assert_eq!(capacity_bits(640, 480), 320 * 240);
        assert_eq!(max_message_bytes(640, 480), (320 * 240 - 32) / 8);
    }
}

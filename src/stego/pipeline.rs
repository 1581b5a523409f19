// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Embed/extract pipeline on decoded images.
//!
//! Embedding:
//! 1. Widen the red channel to a plane and run one forward DWT level.
//! 2. Build the bit frame (32-bit length header + message bits) and check it
//!    fits the selected detail subband.
//! 3. Force the parity of the leading coefficients, in row-major order, to
//!    the frame bits.
//! 4. Inverse DWT with the untouched approximation and other two details,
//!    then clip and truncate the rebuilt red channel back to 8 bits.
//!
//! Extraction repeats step 1 on the stego image, reads the length header
//! from the first 32 coefficients and then that many payload bits. No
//! inverse transform is needed.

use log::debug;

use crate::raster::{CarrierImage, RED};
use crate::stego::error::StegoError;
use crate::stego::frame::{self, HEADER_BITS};
use crate::stego::params::StegoParams;
use crate::stego::parity;
use crate::wavelet::{dwt2, idwt2};

/// Hide `message` in the red channel of `image`, in place.
///
/// Green, blue and alpha samples are never modified. On error the image is
/// left unchanged.
///
/// # Errors
/// - [`StegoError::InvalidDimensions`] if width or height is odd.
/// - [`StegoError::MessageTooLarge`] if the message exceeds `u32::MAX` bits.
/// - [`StegoError::CapacityExceeded`] if the frame has more bits than the
///   subband has coefficients.
pub fn embed_image(image: &mut CarrierImage, message: &str, params: &StegoParams) -> Result<(), StegoError> {
    image.validate_dimensions()?;

    let red = image.channel_plane(RED);
    let mut bands = dwt2(&red, params.wavelet)?;

    let frame_bits = frame::build_frame(message)?;
    let coeffs = params.subband.select_mut(&mut bands).as_mut_slice();
    if frame_bits.len() > coeffs.len() {
        return Err(StegoError::CapacityExceeded {
            required: frame_bits.len(),
            available: coeffs.len(),
        });
    }
    debug!(
        "embedding {} frame bits into {} coefficients ({params})",
        frame_bits.len(),
        coeffs.len()
    );

    parity::embed_bits(coeffs, &frame_bits);

    let stego_red = idwt2(&bands, params.wavelet)?;
    image.replace_channel(RED, &stego_red)?;
    Ok(())
}

/// Recover the message hidden in the red channel of `image`.
///
/// Bytes that do not form valid UTF-8 are dropped from the result.
///
/// # Errors
/// - [`StegoError::InvalidDimensions`] if width or height is odd.
/// - [`StegoError::InvalidLength`] if the subband is too small for a header
///   or the header declares more bits than remain. This is the usual
///   outcome for an image without a payload or with mismatched parameters.
pub fn extract_image(image: &CarrierImage, params: &StegoParams) -> Result<String, StegoError> {
    image.validate_dimensions()?;

    let red = image.channel_plane(RED);
    let bands = dwt2(&red, params.wavelet)?;
    let coeffs = params.subband.select(&bands).as_slice();

    if coeffs.len() < HEADER_BITS {
        return Err(StegoError::InvalidLength {
            declared: None,
            max: coeffs.len(),
        });
    }

    let declared = frame::read_header(&parity::extract_bits(coeffs, 0, HEADER_BITS));
    let max = coeffs.len() - HEADER_BITS;
    if declared as usize > max {
        return Err(StegoError::InvalidLength {
            declared: Some(declared),
            max,
        });
    }
    debug!("extracting {declared} payload bits ({params})");

    let bits = parity::extract_bits(coeffs, HEADER_BITS, declared as usize);
    Ok(frame::bits_to_text(&bits))
}

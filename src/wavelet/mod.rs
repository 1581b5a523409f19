// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Single-level 2D discrete wavelet transform.
//!
//! [`dwt2`] splits a plane into one approximation and three detail subbands
//! of half the width and height; [`idwt2`] rebuilds the plane. Boundaries are
//! handled by periodization, so every subband is exactly half-size and the
//! input must have even, non-zero dimensions.
//!
//! Subband naming follows PyWavelets:
//! - `approx` (`cA`): low-pass along both axes.
//! - `horizontal` (`cH`): high-pass along the vertical axis, low-pass along
//!   the horizontal axis (horizontal edges).
//! - `vertical` (`cV`): the converse (vertical edges).
//! - `diagonal` (`cD`): high-pass along both axes.
//!
//! Haar uses an exact block formulation; the other kernels run through a
//! periodized two-channel filter bank.

pub mod kernel;
pub mod plane;
mod filter_bank;
mod haar;

pub use kernel::Wavelet;
pub use plane::Plane;

use log::trace;

use crate::stego::error::StegoError;
use filter_bank::FilterBank;

/// Output of one forward DWT level. All four planes share one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Subbands {
    /// `cA`
    pub approx: Plane,
    /// `cH`
    pub horizontal: Plane,
    /// `cV`
    pub vertical: Plane,
    /// `cD`
    pub diagonal: Plane,
}

impl Subbands {
    /// Shared `(width, height)` of the four subbands.
    pub fn shape(&self) -> (usize, usize) {
        self.approx.shape()
    }

    fn check_shapes(&self) -> Result<(), StegoError> {
        let expected = self.approx.shape();
        for plane in [&self.horizontal, &self.vertical, &self.diagonal] {
            if plane.shape() != expected {
                return Err(StegoError::ShapeMismatch {
                    expected,
                    actual: plane.shape(),
                });
            }
        }
        Ok(())
    }
}

/// Forward single-level 2D DWT.
///
/// # Errors
/// [`StegoError::InvalidDimensions`] if the plane's width or height is odd or zero.
pub fn dwt2(plane: &Plane, wavelet: Wavelet) -> Result<Subbands, StegoError> {
    let (width, height) = plane.shape();
    if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
        return Err(StegoError::InvalidDimensions {
            width: width as u32,
            height: height as u32,
        });
    }
    trace!("dwt2 {wavelet} on {width}x{height}");

    Ok(match wavelet {
        Wavelet::Haar => haar::forward(plane),
        _ => FilterBank::new(wavelet).forward(plane),
    })
}

/// Inverse single-level 2D DWT.
///
/// # Errors
/// [`StegoError::ShapeMismatch`] if the detail subbands differ in shape from
/// the approximation subband.
pub fn idwt2(bands: &Subbands, wavelet: Wavelet) -> Result<Plane, StegoError> {
    bands.check_shapes()?;
    let (half_w, half_h) = bands.shape();
    trace!("idwt2 {wavelet} to {}x{}", half_w * 2, half_h * 2);

    Ok(match wavelet {
        Wavelet::Haar => haar::inverse(bands),
        _ => FilterBank::new(wavelet).inverse(bands),
    })
}

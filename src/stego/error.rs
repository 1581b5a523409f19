// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the embed/extract pipeline.
//!
//! [`StegoError`] covers every failure from image decoding through frame
//! validation. All errors are raised synchronously at the point of
//! detection; none of them are transient.

use core::fmt;

/// Errors that can occur during embedding or extraction.
#[derive(Debug)]
pub enum StegoError {
    /// The image could not be decoded or encoded.
    Image(image::ImageError),
    /// Reading or writing an image file failed.
    Io(std::io::Error),
    /// Width or height is odd (or zero), so one DWT level is impossible.
    InvalidDimensions { width: u32, height: u32 },
    /// The subband selector is not one of `LH`, `HL`, `HH`.
    InvalidSubband(String),
    /// The wavelet kernel name is not supported.
    UnsupportedWavelet(String),
    /// The message bit length does not fit the 32-bit length header.
    MessageTooLarge { bits: u64 },
    /// The framed message has more bits than the subband has coefficients.
    CapacityExceeded { required: usize, available: usize },
    /// The decoded length header is out of range (or no header fits at all).
    /// Usually means the image carries no payload for these parameters.
    InvalidLength { declared: Option<u32>, max: usize },
    /// The output path names a lossy format that would destroy the payload.
    LossyOutputFormat(image::ImageFormat),
    /// Wavelet subbands passed to the inverse transform disagree in shape.
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(e) => write!(f, "image codec error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "image dimensions {width}x{height} must be even and non-zero for a DWT level")
            }
            Self::InvalidSubband(s) => write!(f, "invalid subband {s:?} (expected LH, HL or HH)"),
            Self::UnsupportedWavelet(s) => write!(f, "unsupported wavelet {s:?} (expected haar, db1, db2, db3 or db4)"),
            Self::MessageTooLarge { bits } => {
                write!(f, "message of {bits} bits does not fit a 32-bit length header")
            }
            Self::CapacityExceeded { required, available } => {
                write!(f, "message needs {required} coefficients but the subband has {available}")
            }
            Self::InvalidLength { declared: Some(n), max } => {
                write!(f, "declared payload length {n} bits exceeds the {max} bits available")
            }
            Self::InvalidLength { declared: None, max } => {
                write!(f, "subband too small to hold a length header ({max} bits available)")
            }
            Self::LossyOutputFormat(format) => {
                write!(f, "{format:?} output is lossy and would destroy the payload")
            }
            Self::ShapeMismatch { expected, actual } => write!(
                f,
                "subband shape {}x{} does not match approximation shape {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for StegoError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<std::io::Error> for StegoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, StegoError>;

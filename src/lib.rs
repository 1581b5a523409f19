// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # dwt-stego
//!
//! Hides UTF-8 text in the wavelet domain of an image. The red channel is
//! decomposed with one level of a 2D discrete wavelet transform, and each
//! payload bit is written into the parity of one detail coefficient's
//! integer part. The fractional part of every coefficient is preserved, and
//! after the inverse transform the rebuilt channel is clipped and truncated
//! back to 8 bits.
//!
//! The payload is a length-prefixed bit frame: a 32-bit big-endian bit count
//! followed by the message bits, MSB first. Embed and extract must agree on
//! the wavelet kernel and detail subband; nothing in the image records them.
//!
//! This is a clean-channel scheme: no encryption, no authentication, and no
//! robustness against re-compression, resizing, cropping or filtering.
//! Only Haar is known to keep the embedded parities stable through 8-bit
//! quantization.
//!
//! Modules:
//! - `wavelet`: single-level 2D DWT/IDWT (Haar, db2-db4, periodized).
//! - `raster`: 8-bit RGB/RGBA image I/O via the `image` crate.
//! - `stego`: bit frame, parity surgery, capacity, and the embed/extract pipeline.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dwt_stego::{embed, extract};
//!
//! embed("cover.png", "secret message", "stego.png", "haar", "LH").unwrap();
//! let decoded = extract("stego.png", "haar", "LH").unwrap();
//! assert_eq!(decoded, "secret message");
//! ```

pub mod raster;
pub mod stego;
pub mod wavelet;

pub use raster::{CarrierImage, ChannelLayout};
pub use stego::error::{Result, StegoError};
pub use stego::{embed, extract, embed_bytes, extract_bytes, embed_image, extract_image};
pub use stego::{capacity_bits, estimate_capacity, max_message_bytes};
pub use stego::{StegoParams, Subband};
pub use wavelet::{dwt2, idwt2, Plane, Subbands, Wavelet};

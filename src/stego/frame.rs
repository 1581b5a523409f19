// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Bit frame construction and parsing.
//!
//! The frame is the bit sequence written into subband coefficients, one bit
//! per coefficient:
//!
//! ```text
//! [32 bits] message length in BITS (big-endian u32)
//! [N bits ] UTF-8 message bytes, MSB first within each byte
//! ```
//!
//! Bits are stored one per `u8` element (0 or 1). There is no checksum: a
//! wrong kernel or subband at extract time yields garbage or an
//! out-of-range length, never a clean diagnosis.

use crate::stego::error::StegoError;

/// Width of the length header in bits.
pub const HEADER_BITS: usize = 32;

/// Convert bytes to a bit vector (MSB first within each byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
/// Pads the last byte with zero bits if `bits.len()` is not a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

/// UTF-8 encode `text` and expand it to bits.
pub fn text_to_bits(text: &str) -> Vec<u8> {
    bytes_to_bits(text.as_bytes())
}

/// Pack bits into bytes and decode them as UTF-8.
///
/// Invalid byte sequences are dropped, not replaced with U+FFFD, so a
/// corrupted payload degrades to shorter text instead of an error.
pub fn bits_to_text(bits: &[u8]) -> String {
    let bytes = bits_to_bytes(bits);
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Bit length of a `byte_len`-byte message, checked against the header width.
///
/// # Errors
/// [`StegoError::MessageTooLarge`] if the bit count exceeds `u32::MAX`.
pub fn message_bit_len(byte_len: usize) -> Result<u32, StegoError> {
    let bits = byte_len as u64 * 8;
    u32::try_from(bits).map_err(|_| StegoError::MessageTooLarge { bits })
}

/// Build the full bit frame for `message`: length header then message bits.
///
/// # Errors
/// [`StegoError::MessageTooLarge`] if the message has more than `u32::MAX` bits.
pub fn build_frame(message: &str) -> Result<Vec<u8>, StegoError> {
    let bit_len = message_bit_len(message.len())?;
    let mut frame = Vec::with_capacity(HEADER_BITS + bit_len as usize);
    frame.extend(bytes_to_bits(&bit_len.to_be_bytes()));
    frame.extend(text_to_bits(message));
    Ok(frame)
}

/// Decode the length header from the first [`HEADER_BITS`] bits.
///
/// Panics if fewer than `HEADER_BITS` bits are supplied; callers check the
/// subband size first.
pub fn read_header(bits: &[u8]) -> u32 {
    bits[..HEADER_BITS]
        .iter()
        .fold(0u32, |acc, &bit| (acc << 1) | u32::from(bit & 1))
}

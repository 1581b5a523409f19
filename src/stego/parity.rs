// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Parity bit surgery on real-valued coefficients.
//!
//! A payload bit lives in the least-significant bit of a coefficient's
//! integer part, where the integer part is the value truncated toward zero
//! and read as a two's-complement integer. Writing a bit replaces only that
//! LSB and adds the original fractional remainder back, so each coefficient
//! moves by at most 1.
//!
//! Truncation (not rounding) is load-bearing: the extractor reads parity
//! from `trunc(coeff)` after the inverse transform and 8-bit quantization,
//! and only truncation keeps both sides in agreement.
//!
//! One combination cannot survive: a coefficient in (-1, 0) with a nonzero
//! fraction asked to carry a 1 becomes `1 + frac`, which lies in (0, 1) and
//! truncates back to 0.

/// Set the parity of `coeff`'s truncated integer part to `bit`, keeping the
/// fractional remainder.
#[inline]
pub fn embed_bit(coeff: f64, bit: u8) -> f64 {
    let integer = coeff.trunc();
    let fraction = coeff - integer;
    let forced = (integer as i64 & !1) | i64::from(bit & 1);
    forced as f64 + fraction
}

/// Read the payload bit carried by `coeff`.
#[inline]
pub fn extract_bit(coeff: f64) -> u8 {
    (coeff.trunc() as i64 & 1) as u8
}

/// Write `bits` into the leading coefficients, one bit each.
///
/// Caller guarantees `bits.len() <= coeffs.len()`.
pub fn embed_bits(coeffs: &mut [f64], bits: &[u8]) {
    debug_assert!(bits.len() <= coeffs.len());
    for (coeff, &bit) in coeffs.iter_mut().zip(bits) {
        *coeff = embed_bit(*coeff, bit);
    }
}

/// Read `count` bits starting at coefficient `start`.
///
/// Caller guarantees `start + count <= coeffs.len()`.
pub fn extract_bits(coeffs: &[f64], start: usize, count: usize) -> Vec<u8> {
    coeffs[start..start + count].iter().map(|&c| extract_bit(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_coefficients() {
        assert_eq!(embed_bit(6.0, 1), 7.0);
        assert_eq!(embed_bit(6.0, 0), 6.0);
        assert_eq!(embed_bit(7.0, 0), 6.0);
        assert_eq!(embed_bit(7.5, 0), 6.5);
        assert_eq!(embed_bit(0.5, 1), 1.5);
    }

    #[test]
    fn negative_coefficients_use_twos_complement() {
        // trunc(-3.5) = -3, which is odd in two's complement.
        assert_eq!(extract_bit(-3.5), 1);
        assert_eq!(embed_bit(-3.5, 0), -4.5);
        assert_eq!(embed_bit(-3.5, 1), -3.5);
        assert_eq!(embed_bit(-2.0, 1), -1.0);
        assert_eq!(extract_bit(-1.0), 1);
    }

    #[test]
    fn change_is_at_most_one() {
        for &c in &[-7.75, -2.5, -0.25, 0.0, 0.25, 1.5, 12.125, 200.0] {
            for bit in [0u8, 1] {
                let out = embed_bit(c, bit);
                assert!((out - c).abs() <= 1.0, "{c} bit {bit} -> {out}");
            }
        }
    }

    #[test]
    fn fraction_is_preserved() {
        let out = embed_bit(10.375, 1);
        assert_eq!(out, 11.375);
        assert_eq!(out - out.trunc(), 0.375);
    }

    #[test]
    fn embedded_bit_reads_back() {
        for &c in &[-9.5, -4.0, -1.5, 0.0, 0.5, 3.0, 3.5, 254.5] {
            for bit in [0u8, 1] {
                assert_eq!(extract_bit(embed_bit(c, bit)), bit, "{c} bit {bit}");
            }
        }
    }

    #[test]
    fn sign_crossing_loses_the_bit() {
        // (-1, 0) with a fraction: 1 + (-0.5) = 0.5 truncates to 0.
        assert_eq!(embed_bit(-0.5, 1), 0.5);
        assert_eq!(extract_bit(embed_bit(-0.5, 1)), 0);
    }

    #[test]
    fn bulk_embed_and_extract() {
        let mut coeffs = vec![0.0, 1.5, -2.0, 4.25, 9.0, -0.0];
        let bits = [1u8, 0, 1, 1];
        embed_bits(&mut coeffs, &bits);
        assert_eq!(extract_bits(&coeffs, 0, 4), bits);
        // Untouched tail.
        assert_eq!(coeffs[4], 9.0);
        assert_eq!(extract_bits(&coeffs, 2, 2), vec![1, 1]);
    }
}

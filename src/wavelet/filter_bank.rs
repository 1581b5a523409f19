// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Periodized two-channel filter bank.
//!
//! Each 1D pass correlates the signal with the low-pass and high-pass taps
//! at even offsets, wrapping indices modulo the signal length:
//!
//! ```text
//! lo[i] = sum_k h[k] * x[(2i + k) mod n]
//! hi[i] = sum_k g[k] * x[(2i + k) mod n]
//! ```
//!
//! For orthonormal filters the analysis matrix is orthogonal, so synthesis
//! is its transpose. Every output has exactly half the input length.
//!
//! 2D passes run rows first, then columns through a transpose. The column
//! pass over the row low band yields `cA` (low) and `cH` (high); over the row
//! high band it yields `cV` and `cD`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Plane, Subbands, Wavelet};

/// Analysis/synthesis taps for one kernel.
pub(crate) struct FilterBank {
    lo: &'static [f64],
    hi: Vec<f64>,
}

impl FilterBank {
    pub(crate) fn new(wavelet: Wavelet) -> Self {
        Self {
            lo: wavelet.low_pass(),
            hi: wavelet.high_pass(),
        }
    }

    fn analyze(&self, x: &[f64], lo: &mut [f64], hi: &mut [f64]) {
        let n = x.len();
        for i in 0..lo.len() {
            let mut a = 0.0;
            let mut d = 0.0;
            for (k, (&hk, &gk)) in self.lo.iter().zip(&self.hi).enumerate() {
                let v = x[(2 * i + k) % n];
                a += hk * v;
                d += gk * v;
            }
            lo[i] = a;
            hi[i] = d;
        }
    }

    fn synthesize(&self, lo: &[f64], hi: &[f64], x: &mut [f64]) {
        let n = x.len();
        x.fill(0.0);
        for i in 0..lo.len() {
            for (k, (&hk, &gk)) in self.lo.iter().zip(&self.hi).enumerate() {
                x[(2 * i + k) % n] += hk * lo[i] + gk * hi[i];
            }
        }
    }

    /// Analyze every row of `src` into a (low, high) pair of half-width planes.
    fn analyze_rows(&self, src: &Plane) -> (Plane, Plane) {
        let width = src.width();
        let half = width / 2;
        let mut lo = Plane::new(half, src.height());
        let mut hi = Plane::new(half, src.height());

        let work = |(row, (lo_row, hi_row)): (&[f64], (&mut [f64], &mut [f64]))| {
            self.analyze(row, lo_row, hi_row);
        };

        #[cfg(feature = "parallel")]
        src.as_slice()
            .par_chunks(width)
            .zip(lo.as_mut_slice().par_chunks_mut(half).zip(hi.as_mut_slice().par_chunks_mut(half)))
            .for_each(work);
        #[cfg(not(feature = "parallel"))]
        src.as_slice()
            .chunks(width)
            .zip(lo.as_mut_slice().chunks_mut(half).zip(hi.as_mut_slice().chunks_mut(half)))
            .for_each(work);

        (lo, hi)
    }

    /// Inverse of [`analyze_rows`](Self::analyze_rows).
    fn synthesize_rows(&self, lo: &Plane, hi: &Plane) -> Plane {
        let half = lo.width();
        let width = half * 2;
        let mut out = Plane::new(width, lo.height());

        let work = |(out_row, (lo_row, hi_row)): (&mut [f64], (&[f64], &[f64]))| {
            self.synthesize(lo_row, hi_row, out_row);
        };

        #[cfg(feature = "parallel")]
        out.as_mut_slice()
            .par_chunks_mut(width)
            .zip(lo.as_slice().par_chunks(half).zip(hi.as_slice().par_chunks(half)))
            .for_each(work);
        #[cfg(not(feature = "parallel"))]
        out.as_mut_slice()
            .chunks_mut(width)
            .zip(lo.as_slice().chunks(half).zip(hi.as_slice().chunks(half)))
            .for_each(work);

        out
    }

    /// Analyze every column by transposing around a row pass.
    fn analyze_columns(&self, src: &Plane) -> (Plane, Plane) {
        let (lo_t, hi_t) = self.analyze_rows(&src.transpose());
        (lo_t.transpose(), hi_t.transpose())
    }

    fn synthesize_columns(&self, lo: &Plane, hi: &Plane) -> Plane {
        self.synthesize_rows(&lo.transpose(), &hi.transpose()).transpose()
    }

    /// One-level 2D analysis. Caller guarantees even, non-zero dimensions.
    pub(crate) fn forward(&self, plane: &Plane) -> Subbands {
        let (row_lo, row_hi) = self.analyze_rows(plane);
        let (approx, horizontal) = self.analyze_columns(&row_lo);
        let (vertical, diagonal) = self.analyze_columns(&row_hi);
        Subbands { approx, horizontal, vertical, diagonal }
    }

    /// One-level 2D synthesis. Caller guarantees the four subbands share a shape.
    pub(crate) fn inverse(&self, bands: &Subbands) -> Plane {
        let row_lo = self.synthesize_columns(&bands.approx, &bands.horizontal);
        let row_hi = self.synthesize_columns(&bands.vertical, &bands.diagonal);
        self.synthesize_rows(&row_lo, &row_hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dimensional_perfect_reconstruction() {
        let x: Vec<f64> = (0..16).map(|i| ((i * 37) % 11) as f64 - 3.5).collect();
        for w in Wavelet::ALL {
            let bank = FilterBank::new(w);
            let mut lo = vec![0.0; 8];
            let mut hi = vec![0.0; 8];
            bank.analyze(&x, &mut lo, &mut hi);
            let mut y = vec![0.0; 16];
            bank.synthesize(&lo, &hi, &mut y);
            for (a, b) in x.iter().zip(&y) {
                assert!((a - b).abs() < 1e-9, "{w}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn energy_is_preserved() {
        let x: Vec<f64> = (0..12).map(|i| (i as f64 * 0.7).sin() * 40.0).collect();
        let bank = FilterBank::new(Wavelet::Db3);
        let mut lo = vec![0.0; 6];
        let mut hi = vec![0.0; 6];
        bank.analyze(&x, &mut lo, &mut hi);
        let before: f64 = x.iter().map(|v| v * v).sum();
        let after: f64 = lo.iter().chain(&hi).map(|v| v * v).sum();
        assert!((before - after).abs() < 1e-8 * before);
    }

    #[test]
    fn constant_row_has_no_detail() {
        let x = vec![100.0; 8];
        for w in Wavelet::ALL {
            let bank = FilterBank::new(w);
            let mut lo = vec![0.0; 4];
            let mut hi = vec![0.0; 4];
            bank.analyze(&x, &mut lo, &mut hi);
            assert!(hi.iter().all(|v| v.abs() < 1e-9), "{w}: {hi:?}");
        }
    }
}

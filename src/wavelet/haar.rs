// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Exact single-level 2D Haar transform.
//!
//! The separable Haar pass multiplies by 1/sqrt(2) twice, which is 1/2 in
//! exact arithmetic but not in `f64`. Working on whole 2x2 blocks with a
//! single `* 0.5` keeps every coefficient of an integer-valued plane an
//! exact multiple of 1/2, so truncation parity never depends on rounding
//! noise. For each block
//!
//! ```text
//! a b
//! c d
//! ```
//!
//! the coefficients are
//!
//! ```text
//! cA = (a + b + c + d) / 2
//! cH = (a + b - c - d) / 2
//! cV = (a - b + c - d) / 2
//! cD = (a - b - c + d) / 2
//! ```
//!
//! which matches the separable filter bank (and PyWavelets' `dwt2`) up to
//! floating-point rounding.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Plane, Subbands};

/// One-level forward Haar. Caller guarantees even, non-zero dimensions.
pub(crate) fn forward(plane: &Plane) -> Subbands {
    let width = plane.width();
    let half_w = width / 2;
    let half_h = plane.height() / 2;
    let src = plane.as_slice();

    let mut approx = Plane::new(half_w, half_h);
    let mut horizontal = Plane::new(half_w, half_h);
    let mut vertical = Plane::new(half_w, half_h);
    let mut diagonal = Plane::new(half_w, half_h);

    let work = |(by, ((ca, ch), (cv, cd))): (usize, ((&mut [f64], &mut [f64]), (&mut [f64], &mut [f64])))| {
        let top = &src[2 * by * width..(2 * by + 1) * width];
        let bottom = &src[(2 * by + 1) * width..(2 * by + 2) * width];
        for bx in 0..half_w {
            let (a, b) = (top[2 * bx], top[2 * bx + 1]);
            let (c, d) = (bottom[2 * bx], bottom[2 * bx + 1]);
            ca[bx] = (a + b + c + d) * 0.5;
            ch[bx] = (a + b - c - d) * 0.5;
            cv[bx] = (a - b + c - d) * 0.5;
            cd[bx] = (a - b - c + d) * 0.5;
        }
    };

    #[cfg(feature = "parallel")]
    approx
        .as_mut_slice()
        .par_chunks_mut(half_w)
        .zip(horizontal.as_mut_slice().par_chunks_mut(half_w))
        .zip(vertical.as_mut_slice().par_chunks_mut(half_w).zip(diagonal.as_mut_slice().par_chunks_mut(half_w)))
        .enumerate()
        .for_each(work);
    #[cfg(not(feature = "parallel"))]
    approx
        .as_mut_slice()
        .chunks_mut(half_w)
        .zip(horizontal.as_mut_slice().chunks_mut(half_w))
        .zip(vertical.as_mut_slice().chunks_mut(half_w).zip(diagonal.as_mut_slice().chunks_mut(half_w)))
        .enumerate()
        .for_each(work);

    Subbands { approx, horizontal, vertical, diagonal }
}

/// One-level inverse Haar. Caller guarantees the four subbands share a shape.
pub(crate) fn inverse(bands: &Subbands) -> Plane {
    let (half_w, half_h) = bands.approx.shape();
    let width = half_w * 2;
    let mut out = Plane::new(width, half_h * 2);

    let ca = bands.approx.as_slice();
    let ch = bands.horizontal.as_slice();
    let cv = bands.vertical.as_slice();
    let cd = bands.diagonal.as_slice();

    // Each chunk covers one block row: the top and bottom pixel rows.
    let work = |(by, rows): (usize, &mut [f64])| {
        let (top, bottom) = rows.split_at_mut(width);
        for bx in 0..half_w {
            let i = by * half_w + bx;
            let (a, h, v, d) = (ca[i], ch[i], cv[i], cd[i]);
            top[2 * bx] = (a + h + v + d) * 0.5;
            top[2 * bx + 1] = (a + h - v - d) * 0.5;
            bottom[2 * bx] = (a - h + v - d) * 0.5;
            bottom[2 * bx + 1] = (a - h - v + d) * 0.5;
        }
    };

    #[cfg(feature = "parallel")]
    out.as_mut_slice().par_chunks_mut(2 * width).enumerate().for_each(work);
    #[cfg(not(feature = "parallel"))]
    out.as_mut_slice().chunks_mut(2 * width).enumerate().for_each(work);

    out
}

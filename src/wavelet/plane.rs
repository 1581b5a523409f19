// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Row-major 2D array of `f64` samples.
//!
//! A `Plane` holds one image channel widened to double precision, or one
//! wavelet subband. The flat `data` order is row-major and load-bearing:
//! the embedder and extractor both walk subband coefficients in exactly
//! this order.

/// 2D real-valued sample grid, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Plane {
    /// Create a zero-filled plane.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns `None` if `data.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Flattened row-major view.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable flattened row-major view. Writing through this slice and
    /// reading the plane back is the "reshape" step: no copy is involved.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Plane {
        let mut out = Plane::new(self.height, self.width);
        for y in 0..self.height {
            let row = &self.data[y * self.width..(y + 1) * self.width];
            for (x, &v) in row.iter().enumerate() {
                out.data[x * self.height + y] = v;
            }
        }
        out
    }

    /// Largest absolute sample difference against `other`.
    /// Planes of different shape compare as `f64::INFINITY`.
    pub fn max_abs_diff(&self, other: &Plane) -> f64 {
        if self.shape() != other.shape() {
            return f64::INFINITY;
        }
        self.data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Wavelet kernels and their filter coefficients.
//!
//! All kernels are orthonormal Daubechies filters. Coefficients are the
//! reconstruction low-pass taps (`rec_lo` in PyWavelets ordering), which is
//! the orientation used by the correlation-form analysis in
//! the periodized filter bank. The high-pass filter is derived
//! via the quadrature-mirror relation:
//!   g[k] = (-1)^k * h[L-1-k]

use core::fmt;
use core::str::FromStr;

use crate::stego::error::StegoError;

/// Haar (db1) low-pass taps: 1/sqrt(2) twice.
const HAAR: [f64; 2] = [core::f64::consts::FRAC_1_SQRT_2, core::f64::consts::FRAC_1_SQRT_2];

const DB2: [f64; 4] = [
     0.4829629131445341,
     0.8365163037378077,
     0.2241438680420134,
    -0.12940952255126034,
];

const DB3: [f64; 6] = [
     0.33267055295008263,
     0.8068915093110927,
     0.4598775021184915,
    -0.1350110200102546,
    -0.08544127388202666,
     0.035226291885709554,
];

const DB4: [f64; 8] = [
     0.2303778133088965,
     0.7148465705529157,
     0.6308807679298589,
    -0.0279837694168599,
    -0.1870348117190931,
     0.0308413818355607,
     0.0328830116668852,
    -0.0105974017850690,
];

/// A single-level 2D wavelet kernel.
///
/// Only [`Wavelet::Haar`] is known to keep coefficient parity stable through
/// a forward/inverse/quantize cycle. The longer Daubechies kernels transform
/// and reconstruct correctly, but 8-bit quantization of the rebuilt channel
/// can flip embedded bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wavelet {
    /// Haar wavelet, also accepted as `db1`.
    #[default]
    Haar,
    Db2,
    Db3,
    Db4,
}

impl Wavelet {
    /// Every supported kernel, in filter-length order.
    pub const ALL: [Wavelet; 4] = [Wavelet::Haar, Wavelet::Db2, Wavelet::Db3, Wavelet::Db4];

    /// Low-pass filter taps.
    pub fn low_pass(self) -> &'static [f64] {
        match self {
            Wavelet::Haar => &HAAR,
            Wavelet::Db2 => &DB2,
            Wavelet::Db3 => &DB3,
            Wavelet::Db4 => &DB4,
        }
    }

    /// High-pass filter taps derived from the low-pass taps.
    pub fn high_pass(self) -> Vec<f64> {
        let lo = self.low_pass();
        let len = lo.len();
        (0..len)
            .map(|k| {
                let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                sign * lo[len - 1 - k]
            })
            .collect()
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Wavelet::Haar => "haar",
            Wavelet::Db2 => "db2",
            Wavelet::Db3 => "db3",
            Wavelet::Db4 => "db4",
        }
    }
}

impl fmt::Display for Wavelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Wavelet {
    type Err = StegoError;

    /// Names are matched exactly, like subband selectors: `HAAR` or ` db2`
    /// are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haar" | "db1" => Ok(Wavelet::Haar),
            "db2" => Ok(Wavelet::Db2),
            "db3" => Ok(Wavelet::Db3),
            "db4" => Ok(Wavelet::Db4),
            _ => Err(StegoError::UnsupportedWavelet(s.to_string())),
        }
    }
}

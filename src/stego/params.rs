// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Scheme parameters: wavelet kernel and detail subband.
//!
//! Nothing in the stego image records which parameters were used, so the
//! extractor must be given the same [`StegoParams`] as the embedder.

use core::fmt;
use core::str::FromStr;

use crate::stego::error::StegoError;
use crate::wavelet::{Plane, Subbands, Wavelet};

/// Detail subband that carries the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Subband {
    /// Horizontal detail, `cH`.
    #[default]
    LH,
    /// Vertical detail, `cV`.
    HL,
    /// Diagonal detail, `cD`.
    HH,
}

impl Subband {
    pub const ALL: [Subband; 3] = [Subband::LH, Subband::HL, Subband::HH];

    pub fn select(self, bands: &Subbands) -> &Plane {
        match self {
            Subband::LH => &bands.horizontal,
            Subband::HL => &bands.vertical,
            Subband::HH => &bands.diagonal,
        }
    }

    pub fn select_mut(self, bands: &mut Subbands) -> &mut Plane {
        match self {
            Subband::LH => &mut bands.horizontal,
            Subband::HL => &mut bands.vertical,
            Subband::HH => &mut bands.diagonal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Subband::LH => "LH",
            Subband::HL => "HL",
            Subband::HH => "HH",
        }
    }
}

impl fmt::Display for Subband {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subband {
    type Err = StegoError;

    /// Selectors are matched exactly; `lh` or `LL` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LH" => Ok(Subband::LH),
            "HL" => Ok(Subband::HL),
            "HH" => Ok(Subband::HH),
            _ => Err(StegoError::InvalidSubband(s.to_string())),
        }
    }
}

/// Kernel and subband shared by embed and extract. Defaults to Haar / LH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StegoParams {
    pub wavelet: Wavelet,
    pub subband: Subband,
}

impl StegoParams {
    pub fn new(wavelet: Wavelet, subband: Subband) -> Self {
        Self { wavelet, subband }
    }

    /// Parse a kernel name and subband selector.
    ///
    /// # Errors
    /// - [`StegoError::UnsupportedWavelet`] for an unknown kernel name.
    /// - [`StegoError::InvalidSubband`] for a selector outside `LH`/`HL`/`HH`.
    pub fn parse(wavelet: &str, subband: &str) -> Result<Self, StegoError> {
        Ok(Self {
            wavelet: wavelet.parse()?,
            subband: subband.parse()?,
        })
    }
}

impl fmt::Display for StegoParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.wavelet, self.subband)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavelet::dwt2;

    #[test]
    fn defaults_are_haar_lh() {
        let p = StegoParams::default();
        assert_eq!(p.wavelet, Wavelet::Haar);
        assert_eq!(p.subband, Subband::LH);
        assert_eq!(p.to_string(), "haar/LH");
    }

    #[test]
    fn parse_valid() {
        let p = StegoParams::parse("db2", "HH").unwrap();
        assert_eq!(p, StegoParams::new(Wavelet::Db2, Subband::HH));
    }

    #[test]
    fn invalid_selectors_rejected() {
        for bad in ["LL", "lh", "", "HV", " LH"] {
            match bad.parse::<Subband>() {
                Err(StegoError::InvalidSubband(s)) => assert_eq!(s, bad),
                other => panic!("expected InvalidSubband for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_reports_bad_wavelet() {
        assert!(matches!(
            StegoParams::parse("coif1", "LH"),
            Err(StegoError::UnsupportedWavelet(_))
        ));
    }

    #[test]
    fn select_maps_to_detail_planes() {
        let plane = Plane::from_vec(2, 2, vec![10.0, 6.0, 3.0, 1.0]).unwrap();
        let mut bands = dwt2(&plane, Wavelet::Haar).unwrap();
        assert_eq!(Subband::LH.select(&bands).as_slice(), &[6.0]);
        assert_eq!(Subband::HL.select(&bands).as_slice(), &[3.0]);
        assert_eq!(Subband::HH.select(&bands).as_slice(), &[1.0]);

        Subband::HL.select_mut(&mut bands).as_mut_slice()[0] = 9.0;
        assert_eq!(bands.vertical.as_slice(), &[9.0]);
    }
}

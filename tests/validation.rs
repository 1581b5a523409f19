// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Parameter and input validation on the file-based surface.

use std::path::{Path, PathBuf};

use dwt_stego::{embed, extract, StegoError};
use image::{Rgb, RgbImage};

fn save(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

fn gray(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([128, 128, 128]))
}

#[test]
fn odd_dimensions_rejected_on_embed_and_extract() {
    let dir = tempfile::tempdir().unwrap();
    for (w, h) in [(63, 64), (64, 63), (33, 17)] {
        let cover = save(dir.path(), &format!("odd_{w}x{h}.png"), &gray(w, h));
        let out = dir.path().join(format!("out_{w}x{h}.png"));

        match embed(&cover, "hi", &out, "haar", "LH") {
            Err(StegoError::InvalidDimensions { width, height }) => assert_eq!((width, height), (w, h)),
            other => panic!("embed {w}x{h}: expected InvalidDimensions, got {other:?}"),
        }
        assert!(!out.exists());

        assert!(matches!(
            extract(&cover, "haar", "LH"),
            Err(StegoError::InvalidDimensions { .. })
        ));
    }
}

#[test]
fn dimension_check_precedes_parameter_check() {
    let dir = tempfile::tempdir().unwrap();
    let cover = save(dir.path(), "odd.png", &gray(31, 32));
    let out = dir.path().join("out.png");
    assert!(matches!(
        embed(&cover, "hi", &out, "haar", "XX"),
        Err(StegoError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        extract(&cover, "haar", "XX"),
        Err(StegoError::InvalidDimensions { .. })
    ));
}

#[test]
fn invalid_subband_rejected_on_embed_and_extract() {
    let dir = tempfile::tempdir().unwrap();
    let cover = save(dir.path(), "cover.png", &gray(32, 32));
    let out = dir.path().join("out.png");

    for bad in ["LL", "hh", "", "diagonal"] {
        match embed(&cover, "hi", &out, "haar", bad) {
            Err(StegoError::InvalidSubband(s)) => assert_eq!(s, bad),
            other => panic!("embed {bad:?}: expected InvalidSubband, got {other:?}"),
        }
        assert!(!out.exists());

        match extract(&cover, "haar", bad) {
            Err(StegoError::InvalidSubband(s)) => assert_eq!(s, bad),
            other => panic!("extract {bad:?}: expected InvalidSubband, got {other:?}"),
        }
    }
}

#[test]
fn unsupported_wavelet_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let cover = save(dir.path(), "cover.png", &gray(32, 32));
    let out = dir.path().join("out.png");

    assert!(matches!(
        embed(&cover, "hi", &out, "bior2.2", "LH"),
        Err(StegoError::UnsupportedWavelet(_))
    ));
    assert!(matches!(
        extract(&cover, "sym4", "LH"),
        Err(StegoError::UnsupportedWavelet(_))
    ));
}

#[test]
fn oversized_length_header_rejected() {
    // Rows alternate 101/100, so every LH coefficient is exactly 1 and the
    // header decodes to u32::MAX.
    let dir = tempfile::tempdir().unwrap();
    let img = RgbImage::from_fn(64, 64, |_, y| {
        let v = if y % 2 == 0 { 101 } else { 100 };
        Rgb([v, 50, 50])
    });
    let path = save(dir.path(), "striped.png", &img);

    match extract(&path, "haar", "LH") {
        Err(StegoError::InvalidLength { declared, max }) => {
            assert_eq!(declared, Some(u32::MAX));
            assert_eq!(max, 1024 - 32);
        }
        other => panic!("expected InvalidLength, got {other:?}"),
    }

    // The vertical-detail subband of the same image is all zeros: empty payload.
    assert_eq!(extract(&path, "haar", "HL").unwrap(), "");
}

#[test]
fn lossy_output_refused_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let cover = save(dir.path(), "cover.png", &gray(32, 32));
    let out = dir.path().join("stego.jpg");

    assert!(matches!(
        embed(&cover, "hi", &out, "haar", "LH"),
        Err(StegoError::LossyOutputFormat(image::ImageFormat::Jpeg))
    ));
    assert!(!out.exists());
}

#[test]
fn missing_carrier_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.png");
    let out = dir.path().join("out.png");

    assert!(matches!(
        embed(&missing, "hi", &out, "haar", "LH"),
        Err(StegoError::Io(_))
    ));
    assert!(matches!(extract(&missing, "haar", "LH"), Err(StegoError::Io(_))));
}

#[test]
fn longer_kernels_do_not_panic() {
    // Only Haar is guaranteed to round-trip; the Daubechies kernels must
    // still transform, quantize and write without panicking.
    let dir = tempfile::tempdir().unwrap();
    let cover = save(dir.path(), "cover.png", &gray(64, 64));

    for kernel in ["db2", "db3", "db4"] {
        let out = dir.path().join(format!("{kernel}.png"));
        embed(&cover, "hi", &out, kernel, "LH").unwrap();
        match extract(&out, kernel, "LH") {
            Ok(_) | Err(StegoError::InvalidLength { .. }) => {}
            Err(e) => panic!("{kernel}: unexpected error {e:?}"),
        }
    }
}

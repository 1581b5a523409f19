// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! 8-bit RGB/RGBA raster images.
//!
//! [`CarrierImage`] keeps interleaved 8-bit samples and converts single
//! channels to and from [`Plane`]s. Decoding and encoding go through the
//! `image` crate. Writes are refused for lossy formats, since re-compression
//! would wipe out the coefficient parities carrying the payload.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ExtendedColorType, ImageFormat};
use log::debug;

use crate::stego::error::StegoError;
use crate::wavelet::Plane;

/// Index of the red channel, the one that carries the payload.
pub const RED: usize = 0;

/// Interleaved channel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Rgb,
    Rgba,
}

impl ChannelLayout {
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    fn color_type(self) -> ExtendedColorType {
        match self {
            ChannelLayout::Rgb => ExtendedColorType::Rgb8,
            ChannelLayout::Rgba => ExtendedColorType::Rgba8,
        }
    }
}

/// Decoded carrier or stego image with 8-bit RGB or RGBA samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierImage {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    samples: Vec<u8>,
}

impl CarrierImage {
    /// Wrap raw interleaved samples.
    ///
    /// Returns `None` if `samples.len()` does not match the dimensions and layout.
    pub fn from_raw(width: u32, height: u32, layout: ChannelLayout, samples: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * layout.channels();
        if samples.len() != expected {
            return None;
        }
        Some(Self { width, height, layout, samples })
    }

    /// Convert a decoded image. Images with an alpha channel become RGBA;
    /// everything else (grey, 16-bit, float) is converted to 8-bit RGB.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let (layout, samples) = if img.color().has_alpha() {
            (ChannelLayout::Rgba, img.into_rgba8().into_raw())
        } else {
            (ChannelLayout::Rgb, img.into_rgb8().into_raw())
        };
        Self { width, height, layout, samples }
    }

    /// Decode an image file; the format is guessed from its contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StegoError> {
        let path = path.as_ref();
        let img = image::ImageReader::open(path)?.with_guessed_format()?.decode()?;
        let carrier = Self::from_dynamic(img);
        debug!(
            "loaded {} ({}x{}, {:?})",
            path.display(),
            carrier.width,
            carrier.height,
            carrier.layout
        );
        Ok(carrier)
    }

    /// Decode an in-memory image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        Ok(Self::from_dynamic(image::load_from_memory(bytes)?))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Interleaved samples, row-major.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Check that one DWT level is possible.
    ///
    /// # Errors
    /// [`StegoError::InvalidDimensions`] if width or height is odd or zero.
    pub fn validate_dimensions(&self) -> Result<(), StegoError> {
        if self.width == 0 || self.height == 0 || self.width % 2 != 0 || self.height % 2 != 0 {
            return Err(StegoError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Extract one channel widened to `f64`.
    ///
    /// Panics if `channel` is not below the layout's channel count.
    pub fn channel_plane(&self, channel: usize) -> Plane {
        let stride = self.layout.channels();
        assert!(channel < stride, "channel {channel} out of range for {:?}", self.layout);
        let data = self.samples[channel..]
            .iter()
            .step_by(stride)
            .map(|&s| f64::from(s))
            .collect();
        Plane::from_vec(self.width as usize, self.height as usize, data)
            .expect("sample buffer matches image dimensions")
    }

    /// Overwrite one channel from a plane, clipping to [0, 255] and
    /// truncating toward zero. Other channels are left untouched.
    ///
    /// # Errors
    /// [`StegoError::ShapeMismatch`] if the plane is not the image's size.
    pub fn replace_channel(&mut self, channel: usize, plane: &Plane) -> Result<(), StegoError> {
        let expected = (self.width as usize, self.height as usize);
        if plane.shape() != expected {
            return Err(StegoError::ShapeMismatch {
                expected,
                actual: plane.shape(),
            });
        }
        let stride = self.layout.channels();
        assert!(channel < stride, "channel {channel} out of range for {:?}", self.layout);
        for (sample, &value) in self.samples[channel..].iter_mut().step_by(stride).zip(plane.as_slice()) {
            *sample = quantize(value);
        }
        Ok(())
    }

    /// Encode and write to `path`, choosing the format from the extension.
    ///
    /// The image is encoded in memory first, so a failed encode leaves no file.
    ///
    /// # Errors
    /// - [`StegoError::Image`] if the extension is unknown or encoding fails.
    /// - [`StegoError::LossyOutputFormat`] for JPEG or AVIF targets.
    /// - [`StegoError::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StegoError> {
        let path = path.as_ref();
        let format = lossless_format_for(path)?;
        let bytes = self.encode(format)?;
        std::fs::write(path, bytes)?;
        debug!("wrote {} as {format:?}", path.display());
        Ok(())
    }

    /// Encode as PNG in memory.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, StegoError> {
        self.encode(ImageFormat::Png)
    }

    fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, StegoError> {
        let mut out = Cursor::new(Vec::new());
        image::write_buffer_with_format(
            &mut out,
            &self.samples,
            self.width,
            self.height,
            self.layout.color_type(),
            format,
        )?;
        Ok(out.into_inner())
    }
}

/// Clip to the 8-bit range, then truncate toward zero.
#[inline]
pub fn quantize(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Resolve the output format from a path's extension, refusing lossy formats.
///
/// # Errors
/// - [`StegoError::Image`] if the extension does not name a known format.
/// - [`StegoError::LossyOutputFormat`] for JPEG or AVIF.
pub fn lossless_format_for(path: impl AsRef<Path>) -> Result<ImageFormat, StegoError> {
    let format = ImageFormat::from_path(path)?;
    match format {
        ImageFormat::Jpeg | ImageFormat::Avif => Err(StegoError::LossyOutputFormat(format)),
        _ => Ok(format),
    }
}

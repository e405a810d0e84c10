use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::canvas::CanvasType;
use crate::document::PaintDocument;
use crate::error::PaintError;
use crate::limits::Limits;
use crate::paint;
use crate::pixel::{PixelLayout, unpack_raster};

/// Builder for decoding a paint file.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the tag stream into a document. Geometry is not validated.
    pub fn decode(&self) -> Result<PaintDocument, PaintError> {
        paint::decode(self.data, self.limits)
    }

    /// Decode, validate the canvas geometry, and expand to an opaque RGBA8 raster.
    pub fn decode_rgba(&self) -> Result<DecodeOutput, PaintError> {
        let document = self.decode()?;
        if document.pixels.is_empty() {
            return Err(PaintError::NoPixels);
        }
        let geometry = document.validate()?;
        if let Some(limits) = self.limits {
            limits.check_memory(geometry.pixel_count() * 4)?;
        }
        let pixels = unpack_raster(&document.pixels);
        log::debug!(
            "paint raster {}x{}, {} pixels",
            geometry.width,
            geometry.height,
            document.pixels.len()
        );
        Ok(DecodeOutput {
            pixels,
            width: geometry.width,
            height: geometry.height,
            layout: PixelLayout::Rgba8,
            canvas_type: CanvasType::from_dimensions(geometry.width, geometry.height),
            document,
        })
    }
}

/// Decoded raster plus the document it came from.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Always [`PixelLayout::Rgba8`] with alpha 255.
    pub layout: PixelLayout,
    /// Size class matching `width`x`height`.
    pub canvas_type: Option<CanvasType>,
    pub document: PaintDocument,
}

impl DecodeOutput {
    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Reinterpret pixel data as RGBA8 pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGBA8] {
        self.pixels().as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGBA8 pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(
            self.as_pixels(),
            self.width as usize,
            self.height as usize,
        )
    }

    /// Convert to an [`imgref::ImgVec`] of RGBA8 pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}

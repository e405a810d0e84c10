use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::canvas::CanvasType;
use crate::document::PaintDocument;
use crate::error::PaintError;
use crate::limits::Limits;
use crate::paint::{self, DEFAULT_HEADROOM};
use crate::pixel::{PixelLayout, pack_raster};

/// Prefix of the `name` field written for new documents.
pub const NAME_PREFIX: &str = "zenpaint_";

/// Builder for encoding a paint file.
///
/// Holds the metadata that goes into new documents plus encoder settings.
/// The record name is derived from the timestamp: `"zenpaint_<seconds>"`.
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    author: &'a str,
    title: &'a str,
    version: i32,
    generation: i32,
    timestamp: Option<u64>,
    headroom: usize,
    limits: Option<&'a Limits>,
}

impl Default for EncodeRequest<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> EncodeRequest<'a> {
    pub fn new() -> Self {
        Self {
            author: "",
            title: "",
            version: 0,
            generation: 0,
            timestamp: None,
            headroom: DEFAULT_HEADROOM,
            limits: None,
        }
    }

    pub fn with_author(mut self, author: &'a str) -> Self {
        self.author = author;
        self
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn with_version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn with_generation(mut self, generation: i32) -> Self {
        self.generation = generation;
        self
    }

    /// Encode time in Unix seconds. Without this, the system clock is used
    /// when the `std` feature is on, and 0 otherwise.
    pub fn with_timestamp(mut self, seconds: u64) -> Self {
        self.timestamp = Some(seconds);
        self
    }

    /// Bytes reserved beyond `4 * pixels` for tag headers and text.
    ///
    /// Metadata that does not fit fails with [`PaintError::CapacityExceeded`].
    pub fn with_headroom(mut self, bytes: usize) -> Self {
        self.headroom = bytes;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Record name for a document encoded now.
    pub fn record_name(&self) -> String {
        format!("{NAME_PREFIX}{}", self.timestamp.unwrap_or_else(unix_seconds))
    }

    /// Pack a raw raster into a new document. Only the four canvas sizes are accepted.
    pub fn build_document(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<PaintDocument, PaintError> {
        let canvas = CanvasType::from_dimensions(width, height)
            .ok_or(PaintError::UnsupportedSize { width, height })?;
        let count = width as usize * height as usize;
        if let Some(limits) = self.limits {
            limits.check_pixels(count)?;
        }
        Ok(PaintDocument {
            canvas_type: Some(canvas),
            generation: self.generation,
            version: self.version,
            pixels: pack_raster(pixels, count, layout)?,
            author: self.author.into(),
            name: self.record_name(),
            title: self.title.into(),
        })
    }

    /// Pack a raw raster and encode it.
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Vec<u8>, PaintError> {
        let doc = self.build_document(pixels, width, height, layout)?;
        self.encode_document(&doc)
    }

    /// Encode an existing document as-is. Only the encoder settings
    /// (headroom, limits) of this request apply.
    pub fn encode_document(&self, doc: &PaintDocument) -> Result<Vec<u8>, PaintError> {
        paint::encode(doc, self.headroom, self.limits)
    }

    /// Encode an RGBA8 image.
    #[cfg(feature = "imgref")]
    pub fn encode_img(&self, img: imgref::ImgRef<'_, rgb::RGBA8>) -> Result<Vec<u8>, PaintError> {
        use rgb::ComponentBytes as _;

        let width = u32::try_from(img.width()).unwrap_or(u32::MAX);
        let height = u32::try_from(img.height()).unwrap_or(u32::MAX);
        let (buf, _, _) = img.to_contiguous_buf();
        self.encode(buf.as_bytes(), width, height, PixelLayout::Rgba8)
    }
}

#[cfg(feature = "std")]
fn unix_seconds() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(not(feature = "std"))]
fn unix_seconds() -> u64 {
    0
}

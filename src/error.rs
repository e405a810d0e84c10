use alloc::string::String;

/// Broad failure category of a [`PaintError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or truncated paint file.
    Format,
    /// Well-formed input whose pixels don't fit one of the four canvas sizes.
    Validation,
    /// Document metadata doesn't fit the encode buffer or the text encoding.
    Capacity,
    /// A caller-supplied [`crate::Limits`] bound was exceeded.
    Limit,
    /// The external image codec failed.
    Image,
}

/// Errors from paint file decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PaintError {
    #[error("invalid root tag {tag} at offset 0 (expected compound tag 10)")]
    InvalidRoot { tag: u8 },

    #[error("unknown tag type {tag} for {name:?} at offset {offset}")]
    UnknownTag { offset: usize, tag: u8, name: String },

    #[error("unexpected end of input at offset {offset}: need {needed} more bytes")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error("negative length {len} for {name:?} at offset {offset}")]
    NegativeLength { offset: usize, name: String, len: i32 },

    #[error("pixel count {actual} does not match {width}x{height} canvas ({expected} pixels)")]
    GeometryMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported canvas size {width}x{height} (allowed: 16x16, 16x32, 32x16, 32x32)")]
    UnsupportedSize { width: u32, height: u32 },

    #[error("document contains no pixels")]
    NoPixels,

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("unsupported pixel layout: {0}")]
    UnsupportedLayout(String),

    #[error("field {field:?} needs {needed} bytes but only {available} remain in the output buffer")]
    CapacityExceeded {
        field: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("text for {field:?} is {len} bytes (max 65535)")]
    TextTooLong { field: &'static str, len: usize },

    #[error("text for {field:?} contains {ch:?}, which has no single-byte encoding")]
    UnencodableText { field: &'static str, ch: char },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "png")]
    #[error("png error: {0}")]
    Png(String),
}

impl PaintError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRoot { .. }
            | Self::UnknownTag { .. }
            | Self::UnexpectedEof { .. }
            | Self::NegativeLength { .. } => ErrorKind::Format,
            Self::GeometryMismatch { .. }
            | Self::UnsupportedSize { .. }
            | Self::NoPixels
            | Self::BufferTooSmall { .. }
            | Self::UnsupportedLayout(_) => ErrorKind::Validation,
            Self::CapacityExceeded { .. }
            | Self::TextTooLong { .. }
            | Self::UnencodableText { .. } => ErrorKind::Capacity,
            Self::LimitExceeded(_) => ErrorKind::Limit,
            #[cfg(feature = "png")]
            Self::Png(_) => ErrorKind::Image,
        }
    }
}

#[cfg(feature = "png")]
impl From<png::DecodingError> for PaintError {
    fn from(e: png::DecodingError) -> Self {
        PaintError::Png(alloc::format!("decode: {e}"))
    }
}

#[cfg(feature = "png")]
impl From<png::EncodingError> for PaintError {
    fn from(e: png::EncodingError) -> Self {
        PaintError::Png(alloc::format!("encode: {e}"))
    }
}

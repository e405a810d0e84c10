//! # zenpaint
//!
//! Decoder and encoder for paint files: small pixel-art canvases stored as a
//! tagged-compound binary document (canvas size class, packed pixels, author,
//! title, record name).
//!
//! ## Canvas Sizes
//!
//! Only four sizes exist: Small (16x16), Large (32x32), Long (32x16) and
//! Tall (16x32). Anything else is rejected on encode and on raster decode.
//!
//! ## Pixels
//!
//! Each pixel is stored as a signed 32-bit integer: `0xFF` in the top byte,
//! then 8 bits each of red, green, blue. See [`pack_rgb`] and [`unpack_rgb`].
//! Alpha is not stored; rasters produced by this crate are always opaque.
//!
//! ## Legacy Encodings
//!
//! Older files store the size class as an Int and the pixels as a List of
//! Int. Both decode to the same [`PaintDocument`]; encoding always writes the
//! Byte + IntArray form.
//!
//! ## Non-Goals
//!
//! - Arbitrary canvas dimensions
//! - Text outside the single-byte character range
//! - Skipping unknown tag types (they are reported as errors)
//!
//! ## Usage
//!
//! ```no_run
//! use zenpaint::{DecodeRequest, EncodeRequest, PixelLayout};
//!
//! let data: &[u8] = &[]; // your .paint bytes
//!
//! let decoded = DecodeRequest::new(data).decode_rgba()?;
//! println!("{}x{} by {}", decoded.width, decoded.height, decoded.document.author);
//!
//! let encoded = EncodeRequest::new()
//!     .with_author("me")
//!     .with_title("copy")
//!     .encode(decoded.pixels(), decoded.width, decoded.height, PixelLayout::Rgba8)?;
//! # Ok::<(), zenpaint::PaintError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod canvas;
mod decode;
mod document;
mod encode;
mod error;
mod limits;
mod paint;
mod pixel;

#[cfg(feature = "png")]
mod convert;

// Re-exports
pub use canvas::{CanvasType, Geometry};
pub use decode::{DecodeOutput, DecodeRequest};
pub use document::PaintDocument;
pub use encode::{EncodeRequest, NAME_PREFIX};
pub use error::{ErrorKind, PaintError};
pub use limits::Limits;
pub use paint::DEFAULT_HEADROOM;
pub use pixel::{OPAQUE_MARKER, PixelLayout, pack_rgb, unpack_rgb};

#[cfg(feature = "png")]
pub use convert::{paint_to_png, paint_to_png_with, png_to_paint};

/// Decode a paint file into a document. Geometry is not validated.
pub fn decode(data: &[u8]) -> Result<PaintDocument, PaintError> {
    DecodeRequest::new(data).decode()
}

/// Decode a paint file to an opaque RGBA8 raster.
pub fn decode_rgba(data: &[u8]) -> Result<DecodeOutput, PaintError> {
    DecodeRequest::new(data).decode_rgba()
}

/// Encode a document with the default headroom and no limits.
pub fn encode(doc: &PaintDocument) -> Result<alloc::vec::Vec<u8>, PaintError> {
    EncodeRequest::new().encode_document(doc)
}

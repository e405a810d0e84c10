//! Paint file tag stream: reader and writer (internal).
//!
//! A paint file is a single compound tag with an empty name. Each child is a
//! one-byte tag type, a name (u16 big-endian length + one byte per
//! character), and a type-specific payload. The compound ends at an End tag.
//! All integers are big-endian.
//!
//! Canonical layout written by this crate:
//!
//! ```text
//! Compound ""
//!   Int       "generation"
//!   Byte      "ct"
//!   IntArray  "pixels"
//!   Int       "v"
//!   String    "author"
//!   String    "name"
//!   String    "title"
//! End
//! ```
//!
//! Older files may carry `ct` as an Int and `pixels` as a List of Int; both
//! decode to the same [`PaintDocument`].

pub(crate) mod decode;
mod encode;

use alloc::vec::Vec;

use crate::document::PaintDocument;
use crate::error::PaintError;
use crate::limits::Limits;

/// Default bytes reserved on top of `4 * pixels` for tag headers and text.
pub const DEFAULT_HEADROOM: usize = 256;

/// Tag type byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum TagType {
    End = 0,
    Byte = 1,
    Int = 3,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
}

impl TagType {
    pub(crate) fn from_u8(tag: u8) -> Option<Self> {
        Some(match tag {
            0 => Self::End,
            1 => Self::Byte,
            3 => Self::Int,
            8 => Self::String,
            9 => Self::List,
            10 => Self::Compound,
            11 => Self::IntArray,
            _ => return None,
        })
    }
}

/// Decode a paint file (called from DecodeRequest).
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<PaintDocument, PaintError> {
    decode::TagReader::new(data, limits).read_document()
}

/// Encode a paint file (called from EncodeRequest).
pub(crate) fn encode(
    doc: &PaintDocument,
    headroom: usize,
    limits: Option<&Limits>,
) -> Result<Vec<u8>, PaintError> {
    if let Some(limits) = limits {
        limits.check_pixels(doc.pixels.len())?;
    }
    encode::write_document(doc, headroom, limits)
}

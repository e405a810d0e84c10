//! Paint file tag writer.

use alloc::vec::Vec;

use super::TagType;
use crate::canvas::CanvasType;
use crate::document::PaintDocument;
use crate::error::PaintError;
use crate::limits::Limits;

/// Append-only tag buffer with a fixed byte budget.
struct TagWriter {
    out: Vec<u8>,
    capacity: usize,
}

impl TagWriter {
    /// `capacity` is the byte budget; only `len` bytes are allocated up front.
    fn new(capacity: usize, len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len.min(capacity)),
            capacity,
        }
    }

    fn reserve(&self, field: &'static str, needed: usize) -> Result<(), PaintError> {
        let available = self.capacity - self.out.len();
        if needed > available {
            return Err(PaintError::CapacityExceeded {
                field,
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Tag type byte plus its name.
    fn header_len(name: &str) -> usize {
        1 + 2 + name.len()
    }

    fn put_header(&mut self, tag: TagType, name: &str) {
        self.out.push(tag as u8);
        self.out.extend_from_slice(&(name.len() as u16).to_be_bytes());
        self.out.extend_from_slice(name.as_bytes());
    }

    fn put_root(&mut self) -> Result<(), PaintError> {
        self.reserve("", Self::header_len(""))?;
        self.put_header(TagType::Compound, "");
        Ok(())
    }

    fn put_byte(&mut self, name: &'static str, value: u8) -> Result<(), PaintError> {
        self.reserve(name, Self::header_len(name) + 1)?;
        self.put_header(TagType::Byte, name);
        self.out.push(value);
        Ok(())
    }

    fn put_int(&mut self, name: &'static str, value: i32) -> Result<(), PaintError> {
        self.reserve(name, Self::header_len(name) + 4)?;
        self.put_header(TagType::Int, name);
        self.out.extend_from_slice(&value.to_be_bytes());
        Ok(())
    }

    fn put_int_array(&mut self, name: &'static str, values: &[i32]) -> Result<(), PaintError> {
        let count = i32::try_from(values.len()).map_err(|_| PaintError::CapacityExceeded {
            field: name,
            needed: values.len(),
            available: i32::MAX as usize,
        })?;
        self.reserve(name, Self::header_len(name) + 4 + values.len() * 4)?;
        self.put_header(TagType::IntArray, name);
        self.out.extend_from_slice(&count.to_be_bytes());
        for v in values {
            self.out.extend_from_slice(&v.to_be_bytes());
        }
        Ok(())
    }

    fn put_string(&mut self, name: &'static str, bytes: &[u8]) -> Result<(), PaintError> {
        self.reserve(name, Self::header_len(name) + 2 + bytes.len())?;
        self.put_header(TagType::String, name);
        self.out.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
        self.out.extend_from_slice(bytes);
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>, PaintError> {
        self.reserve("end", 1)?;
        self.out.push(TagType::End as u8);
        Ok(self.out)
    }
}

/// Bytes of a canonical document besides pixel data and text.
const FIXED_LEN: usize = 3 // root
    + (3 + 10 + 4) // generation
    + (3 + 2 + 1) // ct
    + (3 + 6 + 4) // pixels header and count
    + (3 + 1 + 4) // v
    + (3 + 6 + 2) // author
    + (3 + 4 + 2) // name
    + (3 + 5 + 2) // title
    + 1; // end

/// Encode text as one byte per character.
fn single_byte_text(field: &'static str, value: &str) -> Result<Vec<u8>, PaintError> {
    let bytes = value
        .chars()
        .map(|ch| u8::try_from(ch).map_err(|_| PaintError::UnencodableText { field, ch }))
        .collect::<Result<Vec<u8>, PaintError>>()?;
    if bytes.len() > usize::from(u16::MAX) {
        return Err(PaintError::TextTooLong {
            field,
            len: bytes.len(),
        });
    }
    Ok(bytes)
}

/// `ct` value to write.
///
/// Known types and absent ones are written as the size class of the
/// validated geometry. An unrecognized raw value that fits in a byte is
/// written unchanged so it survives a round trip; wider values are replaced
/// by the size class.
fn canvas_byte(doc: &PaintDocument, inferred: CanvasType) -> u8 {
    match doc.canvas_type {
        Some(CanvasType::Other(raw)) => u8::try_from(raw).unwrap_or_else(|_| {
            log::warn!("canvas type {raw} does not fit a byte, writing {inferred:?}");
            inferred.to_raw() as u8
        }),
        _ => inferred.to_raw() as u8,
    }
}

/// Validate `doc` and write it in canonical field order.
pub(crate) fn write_document(
    doc: &PaintDocument,
    headroom: usize,
    limits: Option<&Limits>,
) -> Result<Vec<u8>, PaintError> {
    let geometry = doc.validate()?;
    let canvas = CanvasType::from_dimensions(geometry.width, geometry.height).ok_or(
        PaintError::UnsupportedSize {
            width: geometry.width,
            height: geometry.height,
        },
    )?;

    let author = single_byte_text("author", &doc.author)?;
    let name = single_byte_text("name", &doc.name)?;
    let title = single_byte_text("title", &doc.title)?;

    let pixel_bytes = doc.pixels.len() * 4;
    let capacity = pixel_bytes.checked_add(headroom).ok_or_else(|| {
        PaintError::LimitExceeded(alloc::format!(
            "headroom {headroom} overflows the buffer estimate"
        ))
    })?;
    let len = FIXED_LEN + pixel_bytes + author.len() + name.len() + title.len();
    if let Some(limits) = limits {
        limits.check_memory(len)?;
        for text in [&author, &name, &title] {
            limits.check_text(text.len())?;
        }
    }

    let mut w = TagWriter::new(capacity, len);
    w.put_root()?;
    w.put_int("generation", doc.generation)?;
    w.put_byte("ct", canvas_byte(doc, canvas))?;
    w.put_int_array("pixels", &doc.pixels)?;
    w.put_int("v", doc.version)?;
    w.put_string("author", &author)?;
    w.put_string("name", &name)?;
    w.put_string("title", &title)?;
    let out = w.finish()?;

    log::debug!(
        "encoded paint document: {}x{} ({:?}), {} bytes",
        geometry.width,
        geometry.height,
        canvas,
        out.len()
    );
    Ok(out)
}

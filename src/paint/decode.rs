//! Paint file tag reader.

use alloc::string::String;
use alloc::vec::Vec;

use super::TagType;
use crate::canvas::CanvasType;
use crate::document::PaintDocument;
use crate::error::PaintError;
use crate::limits::Limits;

// ── Byte cursor ─────────────────────────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], PaintError> {
        if n > self.remaining() {
            return Err(PaintError::UnexpectedEof {
                offset: self.pos,
                needed: n - self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], PaintError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    fn read_u8(&mut self) -> Result<u8, PaintError> {
        Ok(self.take_array::<1>()?[0])
    }

    fn read_u16_be(&mut self) -> Result<u16, PaintError> {
        Ok(u16::from_be_bytes(self.take_array()?))
    }

    fn read_i32_be(&mut self) -> Result<i32, PaintError> {
        Ok(i32::from_be_bytes(self.take_array()?))
    }
}

// ── Tag reader ──────────────────────────────────────────────────────

pub(crate) struct TagReader<'a, 'l> {
    cursor: Cursor<'a>,
    limits: Option<&'l Limits>,
}

impl<'a, 'l> TagReader<'a, 'l> {
    pub(crate) fn new(data: &'a [u8], limits: Option<&'l Limits>) -> Self {
        Self {
            cursor: Cursor::new(data),
            limits,
        }
    }

    /// Read the root compound and every child up to its End tag.
    pub(crate) fn read_document(mut self) -> Result<PaintDocument, PaintError> {
        let root = self.cursor.read_u8()?;
        if root != TagType::Compound as u8 {
            return Err(PaintError::InvalidRoot { tag: root });
        }
        self.read_string()?;

        let mut doc = PaintDocument::default();
        loop {
            let offset = self.cursor.pos;
            let tag = self.cursor.read_u8()?;
            match TagType::from_u8(tag) {
                Some(TagType::End) => break,
                Some(TagType::Byte) => {
                    let name = self.read_string()?;
                    let value = self.cursor.read_u8()?;
                    log::trace!("byte {name:?} = {value} at {offset}");
                    if name == "ct" {
                        doc.canvas_type = Some(CanvasType::from_raw(i32::from(value)));
                    }
                }
                Some(TagType::Int) => {
                    let name = self.read_string()?;
                    let value = self.cursor.read_i32_be()?;
                    log::trace!("int {name:?} = {value} at {offset}");
                    match name.as_str() {
                        "ct" => {
                            log::debug!("legacy int canvas type {value}");
                            doc.canvas_type = Some(CanvasType::from_raw(value));
                        }
                        "v" => doc.version = value,
                        "generation" => doc.generation = value,
                        _ => {}
                    }
                }
                Some(TagType::String) => {
                    let name = self.read_string()?;
                    let value = self.read_string()?;
                    log::trace!("string {name:?} ({} chars) at {offset}", value.len());
                    match name.as_str() {
                        "author" => doc.author = value,
                        "name" => doc.name = value,
                        "title" => doc.title = value,
                        _ => {}
                    }
                }
                Some(TagType::List) => {
                    let name = self.read_string()?;
                    let element = self.cursor.read_u8()?;
                    let count = self.read_count(&name)?;
                    let is_int = element == TagType::Int as u8;
                    if name == "pixels" && is_int {
                        log::debug!("legacy int list pixels ({count})");
                        doc.pixels = self.read_ints(count)?;
                    } else {
                        let width = if is_int { 4 } else { 1 };
                        log::trace!("skipping list {name:?} of {count} x type {element}");
                        self.skip_elements(count, width)?;
                    }
                }
                Some(TagType::IntArray) => {
                    let name = self.read_string()?;
                    let count = self.read_count(&name)?;
                    if name == "pixels" {
                        doc.pixels = self.read_ints(count)?;
                    } else {
                        log::trace!("skipping int array {name:?} of {count}");
                        self.skip_elements(count, 4)?;
                    }
                }
                // Nested compounds and unlisted types have no known payload size.
                Some(TagType::Compound) | None => {
                    let name = self.read_string().unwrap_or_default();
                    return Err(PaintError::UnknownTag { offset, tag, name });
                }
            }
        }

        log::debug!(
            "decoded paint document: ct={:?}, {} pixels, {} bytes",
            doc.canvas_type,
            doc.pixels.len(),
            self.cursor.pos
        );
        Ok(doc)
    }

    /// u16 length-prefixed text, one byte per character.
    fn read_string(&mut self) -> Result<String, PaintError> {
        let len = usize::from(self.cursor.read_u16_be()?);
        if let Some(limits) = self.limits {
            limits.check_text(len)?;
        }
        let bytes = self.cursor.take(len)?;
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }

    fn read_count(&mut self, name: &str) -> Result<usize, PaintError> {
        let offset = self.cursor.pos;
        let len = self.cursor.read_i32_be()?;
        usize::try_from(len).map_err(|_| PaintError::NegativeLength {
            offset,
            name: name.into(),
            len,
        })
    }

    fn read_ints(&mut self, count: usize) -> Result<Vec<i32>, PaintError> {
        if let Some(limits) = self.limits {
            limits.check_pixels(count)?;
            limits.check_memory(count.saturating_mul(4))?;
        }
        let bytes = self.take_elements(count, 4)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }

    fn skip_elements(&mut self, count: usize, width: usize) -> Result<(), PaintError> {
        self.take_elements(count, width).map(|_| ())
    }

    fn take_elements(&mut self, count: usize, width: usize) -> Result<&'a [u8], PaintError> {
        let offset = self.cursor.pos;
        let total = count
            .checked_mul(width)
            .ok_or(PaintError::UnexpectedEof {
                offset,
                needed: usize::MAX,
            })?;
        self.cursor.take(total)
    }
}

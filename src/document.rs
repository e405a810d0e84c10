use alloc::string::String;
use alloc::vec::Vec;

use crate::canvas::{CanvasType, Geometry};
use crate::error::PaintError;
use crate::pixel::{pack_rgb, unpack_rgb};

/// In-memory form of a paint file.
///
/// Produced by [`crate::decode`] and consumed by [`crate::encode`]. Text fields
/// hold single-byte characters only (U+0000..=U+00FF).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaintDocument {
    /// Size class from the `ct` field; `None` when the file had no `ct`.
    pub canvas_type: Option<CanvasType>,
    pub generation: i32,
    /// Value of the `v` field.
    pub version: i32,
    /// Packed colors, row-major. See [`crate::pack_rgb`].
    pub pixels: Vec<i32>,
    pub author: String,
    /// Record identifier, `"zenpaint_<unix seconds>"` for files this crate writes.
    pub name: String,
    pub title: String,
}

impl PaintDocument {
    /// Dimensions for this document's canvas type and pixel count.
    ///
    /// Not validated; see [`PaintDocument::validate`].
    pub fn geometry(&self) -> Geometry {
        Geometry::resolve(self.canvas_type, self.pixels.len())
    }

    /// Resolve the geometry and check that the pixels fill it exactly.
    pub fn validate(&self) -> Result<Geometry, PaintError> {
        let geometry = self.geometry();
        geometry.check(self.pixels.len())?;
        Ok(geometry)
    }

    /// RGB value of the pixel at `(x, y)`, if in bounds.
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        let geometry = self.geometry();
        if x >= geometry.width || y >= geometry.height {
            return None;
        }
        let idx = y as usize * geometry.width as usize + x as usize;
        self.pixels.get(idx).copied().map(unpack_rgb)
    }

    /// Build a document from RGB triples on a supported canvas.
    pub fn from_rgb(
        canvas: CanvasType,
        colors: impl IntoIterator<Item = (u8, u8, u8)>,
    ) -> Result<Self, PaintError> {
        let doc = Self {
            canvas_type: Some(canvas),
            pixels: colors
                .into_iter()
                .map(|(r, g, b)| pack_rgb(r, g, b))
                .collect(),
            ..Self::default()
        };
        doc.validate()?;
        Ok(doc)
    }
}

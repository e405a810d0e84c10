//! Canvas size classes and the mapping to pixel dimensions.

use crate::error::PaintError;

/// Canvas size class stored in the `ct` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CanvasType {
    /// 16x16.
    Small,
    /// 32x32.
    Large,
    /// 32 wide, 16 high.
    Long,
    /// 16 wide, 32 high.
    Tall,
    /// A raw value outside 0..=3.
    Other(i32),
}

impl CanvasType {
    /// Map a raw `ct` value to a canvas type.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Small,
            1 => Self::Large,
            2 => Self::Long,
            3 => Self::Tall,
            other => Self::Other(other),
        }
    }

    /// Raw `ct` value.
    pub fn to_raw(self) -> i32 {
        match self {
            Self::Small => 0,
            Self::Large => 1,
            Self::Long => 2,
            Self::Tall => 3,
            Self::Other(raw) => raw,
        }
    }

    /// Fixed dimensions, or `None` for [`CanvasType::Other`].
    pub fn geometry(self) -> Option<Geometry> {
        match self {
            Self::Small => Some(Geometry::new(16, 16)),
            Self::Large => Some(Geometry::new(32, 32)),
            Self::Long => Some(Geometry::new(32, 16)),
            Self::Tall => Some(Geometry::new(16, 32)),
            Self::Other(_) => None,
        }
    }

    /// Canvas type whose dimensions are exactly `width`x`height`.
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        match (width, height) {
            (16, 16) => Some(Self::Small),
            (32, 32) => Some(Self::Large),
            (32, 16) => Some(Self::Long),
            (16, 32) => Some(Self::Tall),
            _ => None,
        }
    }
}

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether this is one of the four accepted canvas sizes.
    pub fn is_supported(&self) -> bool {
        CanvasType::from_dimensions(self.width, self.height).is_some()
    }

    /// Resolve dimensions for a canvas type and pixel count.
    ///
    /// Known canvas types are authoritative and ignore `pixel_count`. For an
    /// absent or unrecognized type the size is inferred from the count:
    /// 256 → 16x16, 512 → 16x32, 1024 → 32x32, anything else →
    /// `⌊√n⌋ x ⌊√n⌋`.
    ///
    /// The square-root fallback is a best-effort guess that only matches the
    /// pixel count for perfect squares; callers must still run
    /// [`Geometry::check`] before trusting the result.
    pub fn resolve(canvas: Option<CanvasType>, pixel_count: usize) -> Self {
        if let Some(geometry) = canvas.and_then(CanvasType::geometry) {
            return geometry;
        }
        match pixel_count {
            256 => Self::new(16, 16),
            512 => Self::new(16, 32),
            1024 => Self::new(32, 32),
            n => {
                let side = n.isqrt();
                if side * side != n {
                    log::warn!("canvas size guessed as {side}x{side} for {n} pixels");
                }
                let side = u32::try_from(side).unwrap_or(u32::MAX);
                Self::new(side, side)
            }
        }
    }

    /// Check that the geometry is an accepted size and holds exactly
    /// `pixel_count` pixels.
    pub fn check(&self, pixel_count: usize) -> Result<(), PaintError> {
        if !self.is_supported() {
            return Err(PaintError::UnsupportedSize {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.pixel_count();
        if pixel_count != expected {
            return Err(PaintError::GeometryMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: pixel_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_are_authoritative() {
        assert_eq!(Geometry::resolve(Some(CanvasType::Small), 0), Geometry::new(16, 16));
        assert_eq!(Geometry::resolve(Some(CanvasType::Large), 7), Geometry::new(32, 32));
        assert_eq!(Geometry::resolve(Some(CanvasType::Long), 256), Geometry::new(32, 16));
        assert_eq!(Geometry::resolve(Some(CanvasType::Tall), 1024), Geometry::new(16, 32));
    }

    #[test]
    fn raw_values_map_to_types() {
        for raw in 0..4 {
            assert_eq!(CanvasType::from_raw(raw).to_raw(), raw);
        }
        assert_eq!(CanvasType::from_raw(99), CanvasType::Other(99));
        assert_eq!(CanvasType::from_raw(-5).geometry(), None);
    }

    #[test]
    fn unknown_type_infers_from_count() {
        let other = Some(CanvasType::Other(99));
        assert_eq!(Geometry::resolve(other, 256), Geometry::new(16, 16));
        assert_eq!(Geometry::resolve(other, 512), Geometry::new(16, 32));
        assert_eq!(Geometry::resolve(other, 1024), Geometry::new(32, 32));
        assert_eq!(Geometry::resolve(None, 512), Geometry::new(16, 32));
    }

    #[test]
    fn sqrt_fallback_is_floor() {
        assert_eq!(Geometry::resolve(None, 100), Geometry::new(10, 10));
        // Not a perfect square: 11x11 = 121 != 130
        assert_eq!(Geometry::resolve(None, 130), Geometry::new(11, 11));
        assert_eq!(Geometry::resolve(None, 0), Geometry::new(0, 0));
    }

    #[test]
    fn from_dimensions_inverts_geometry() {
        for ct in [
            CanvasType::Small,
            CanvasType::Large,
            CanvasType::Long,
            CanvasType::Tall,
        ] {
            let g = ct.geometry().unwrap();
            assert_eq!(CanvasType::from_dimensions(g.width, g.height), Some(ct));
        }
        assert_eq!(CanvasType::from_dimensions(64, 64), None);
    }

    #[test]
    fn check_rejects_mismatch_and_unsupported() {
        let g = Geometry::new(16, 16);
        assert!(g.check(256).is_ok());
        assert!(matches!(
            g.check(2),
            Err(PaintError::GeometryMismatch {
                expected: 256,
                actual: 2,
                ..
            })
        ));
        assert!(matches!(
            Geometry::new(10, 10).check(100),
            Err(PaintError::UnsupportedSize {
                width: 10,
                height: 10
            })
        ));
    }
}

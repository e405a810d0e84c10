use alloc::vec::Vec;

use crate::error::PaintError;

/// Top byte written into every packed pixel. Marks the color as opaque.
pub const OPAQUE_MARKER: u32 = 0xFF00_0000;

/// Pack an RGB triple into the signed 32-bit form stored in paint files.
///
/// The top byte is always `0xFF`, so every packed color is negative.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> i32 {
    let v = OPAQUE_MARKER | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
    v as i32
}

/// Unpack a stored pixel into its RGB triple. The top byte is ignored.
#[inline]
pub fn unpack_rgb(color: i32) -> (u8, u8, u8) {
    let v = color as u32;
    ((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Pixel memory layout of a raw raster buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
    /// 3 channels, 8-bit BGR.
    Bgr8,
    /// 4 channels, 8-bit BGRA.
    Bgra8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 | Self::Bgr8 => 3,
            Self::Rgba8 | Self::Bgra8 => 4,
        }
    }

    fn rgb_at(&self, px: &[u8]) -> (u8, u8, u8) {
        match self {
            Self::Gray8 => (px[0], px[0], px[0]),
            Self::Rgb8 | Self::Rgba8 => (px[0], px[1], px[2]),
            Self::Bgr8 | Self::Bgra8 => (px[2], px[1], px[0]),
        }
    }
}

/// Pack `count` pixels of a raw raster into stored colors. Alpha is dropped.
pub(crate) fn pack_raster(
    pixels: &[u8],
    count: usize,
    layout: PixelLayout,
) -> Result<Vec<i32>, PaintError> {
    let bpp = layout.bytes_per_pixel();
    let needed = count.checked_mul(bpp).ok_or(PaintError::BufferTooSmall {
        needed: usize::MAX,
        actual: pixels.len(),
    })?;
    if pixels.len() < needed {
        return Err(PaintError::BufferTooSmall {
            needed,
            actual: pixels.len(),
        });
    }
    Ok(pixels[..needed]
        .chunks_exact(bpp)
        .map(|px| {
            let (r, g, b) = layout.rgb_at(px);
            pack_rgb(r, g, b)
        })
        .collect())
}

/// Expand stored colors into an opaque RGBA8 raster.
pub(crate) fn unpack_raster(colors: &[i32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(colors.len() * 4);
    for &color in colors {
        let (r, g, b) = unpack_rgb(color);
        out.extend_from_slice(&[r, g, b, 255]);
    }
    out
}

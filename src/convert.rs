//! PNG conversion: move paint files in and out of PNG images.
//!
//! The PNG codec itself is the [`png`] crate. This module only moves RGBA8
//! rasters in and out of it.

use alloc::vec;
use alloc::vec::Vec;

use crate::canvas::CanvasType;
use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::PaintError;
use crate::pixel::PixelLayout;

/// Convert a paint file to an RGBA8 PNG with opaque alpha.
pub fn paint_to_png(data: &[u8]) -> Result<Vec<u8>, PaintError> {
    paint_to_png_with(&DecodeRequest::new(data))
}

/// Same as [`paint_to_png`] with a configured decode request.
pub fn paint_to_png_with(request: &DecodeRequest<'_>) -> Result<Vec<u8>, PaintError> {
    let decoded = request.decode_rgba()?;
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, decoded.width, decoded.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(decoded.pixels())?;
        writer.finish()?;
    }
    Ok(out)
}

/// Convert a PNG to a paint file.
///
/// The image must be 16x16, 16x32, 32x16 or 32x32. Palette, grayscale and
/// 16-bit images are expanded to 8-bit color first; alpha is discarded.
pub fn png_to_paint(png_data: &[u8], request: &EncodeRequest<'_>) -> Result<Vec<u8>, PaintError> {
    let mut decoder = png::Decoder::new(png_data);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let (width, height) = (reader.info().width, reader.info().height);
    if CanvasType::from_dimensions(width, height).is_none() {
        return Err(PaintError::UnsupportedSize { width, height });
    }

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    buf.truncate(frame.buffer_size());
    if frame.bit_depth != png::BitDepth::Eight {
        return Err(PaintError::UnsupportedLayout(alloc::format!(
            "{:?} bit png after expansion",
            frame.bit_depth
        )));
    }

    let layout = match frame.color_type {
        png::ColorType::Rgba => PixelLayout::Rgba8,
        png::ColorType::Rgb => PixelLayout::Rgb8,
        png::ColorType::Grayscale => PixelLayout::Gray8,
        png::ColorType::GrayscaleAlpha => {
            buf = buf.chunks_exact(2).map(|ga| ga[0]).collect();
            PixelLayout::Gray8
        }
        png::ColorType::Indexed => {
            return Err(PaintError::UnsupportedLayout(
                "indexed png after expansion".into(),
            ));
        }
    };
    log::debug!("png {width}x{height} {:?} -> paint", frame.color_type);
    request.encode(&buf, width, height, layout)
}

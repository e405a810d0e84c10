/// Resource limits for decode/encode operations.
///
/// All fields default to `None` (no limit). Counts read from a file are
/// checked before anything is allocated for them.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Maximum number of stored pixels.
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for a single buffer allocation.
    pub max_memory_bytes: Option<u64>,
    /// Maximum length in bytes of any text field or tag name.
    pub max_text_len: Option<u64>,
}

impl Limits {
    /// Check a pixel count against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check_pixels(&self, count: usize) -> Result<(), crate::PaintError> {
        if let Some(max_px) = self.max_pixels {
            if count as u64 > max_px {
                return Err(crate::PaintError::LimitExceeded(alloc::format!(
                    "pixel count {count} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), crate::PaintError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(crate::PaintError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }

    /// Check a text field length against `max_text_len`.
    pub(crate) fn check_text(&self, len: usize) -> Result<(), crate::PaintError> {
        if let Some(max_len) = self.max_text_len {
            if len as u64 > max_len {
                return Err(crate::PaintError::LimitExceeded(alloc::format!(
                    "text length {len} exceeds limit {max_len}"
                )));
            }
        }
        Ok(())
    }
}

use crate::error::{Error, Result};

/// Inclusive byte range resolved against a known file size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn content_length(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn content_range(&self, size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, size)
    }
}

/// Resolves a `Range` header against `size`.
///
/// `Ok(None)` means "send the whole file": no header, or a header that is not a
/// single `bytes=` range. A well-formed range that misses the file is an
/// `Error::RangeNotSatisfiable`.
pub fn resolve(header: Option<&str>, size: u64) -> Result<Option<ByteRange>> {
    let Some(spec) = header.map(str::trim).and_then(|h| h.strip_prefix("bytes=")) else {
        return Ok(None);
    };
    if spec.contains(',') {
        return Ok(None);
    }
    let Some((start, end)) = spec.split_once('-') else {
        return Ok(None);
    };
    let (start, end) = (start.trim(), end.trim());

    let range = match (start.is_empty(), end.is_empty()) {
        (true, true) => return Ok(None),
        // bytes=-n : the last n bytes
        (true, false) => {
            let Ok(suffix) = end.parse::<u64>() else {
                return Ok(None);
            };
            if suffix == 0 || size == 0 {
                return Err(Error::RangeNotSatisfiable { size });
            }
            ByteRange {
                start: size.saturating_sub(suffix),
                end: size - 1,
            }
        }
        (false, open_ended) => {
            let Ok(start) = start.parse::<u64>() else {
                return Ok(None);
            };
            let end = if open_ended {
                size.saturating_sub(1)
            } else {
                match end.parse::<u64>() {
                    Ok(end) => end.min(size.saturating_sub(1)),
                    Err(_) => return Ok(None),
                }
            };
            if start >= size || end < start {
                return Err(Error::RangeNotSatisfiable { size });
            }
            ByteRange { start, end }
        }
    };

    Ok(Some(range))
}

use std::io::Cursor;

use lofty::config::ParseOptions;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct CoverImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl CoverImage {
    pub fn to_data_url(&self) -> String {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// Parses tags out of the head of an audio file and returns the first picture.
/// The head may be truncated; audio properties are not read.
pub fn first_picture(head: Vec<u8>) -> Result<Option<CoverImage>> {
    let tagged = Probe::new(Cursor::new(head))
        .options(ParseOptions::new().read_properties(false))
        .guess_file_type()?
        .read()
        .map_err(|e| Error::Internal(format!("Unreadable tags: {}", e)))?;

    let picture = tagged.tags().iter().find_map(|tag| tag.pictures().first());

    Ok(picture.map(|p| CoverImage {
        bytes: p.data().to_vec(),
        mime_type: p
            .mime_type()
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "image/jpeg".to_string()),
    }))
}

/// Runs [`first_picture`] on the blocking pool.
pub async fn extract(head: Vec<u8>) -> Result<Option<CoverImage>> {
    tokio::task::spawn_blocking(move || first_picture(head))
        .await
        .map_err(|e| Error::Internal(format!("Cover extraction task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn garbage_is_not_a_tagged_file() {
        assert!(extract(b"definitely not audio".to_vec()).await.is_err());
    }

    #[test]
    fn data_url_uses_standard_base64() {
        let cover = CoverImage {
            bytes: vec![0xff, 0xd8, 0xff],
            mime_type: "image/jpeg".to_string(),
        };
        assert_eq!(cover.to_data_url(), "data:image/jpeg;base64,/9j/");
    }
}

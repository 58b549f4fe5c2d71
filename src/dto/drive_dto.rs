use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A file entry as returned by the Drive `files.list` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFileList {
    #[serde(default)]
    pub files: Vec<DriveFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveAudioFile {
    pub id: String,
    pub name: Option<String>,
    pub mime_type: Option<String>,
    pub thumbnail_link: Option<String>,
    pub icon_link: Option<String>,
    pub embedded_thumbnail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveFilesResponse<T> {
    pub files: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicSearchQuery {
    pub folder_id: Option<String>,
    pub query: Option<String>,
    pub page_size: Option<String>,
    pub page_token: Option<String>,
}

/// Validated search input handed to the Drive service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSearch {
    pub folder_id: String,
    pub query: String,
    pub page_size: Option<u32>,
    pub page_token: Option<String>,
}

impl MusicSearchQuery {
    pub fn into_search(self) -> Result<AudioSearch> {
        let folder_id = self
            .folder_id
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::BadRequest("folderId query parameter is required".to_string())
            })?;

        let query = self
            .query
            .map(|v| v.trim().to_string())
            .filter(|v| v.chars().count() >= 2)
            .ok_or_else(|| {
                Error::BadRequest(
                    "query parameter must be at least 2 characters long".to_string(),
                )
            })?;

        Ok(AudioSearch {
            folder_id,
            query,
            page_size: self.page_size.and_then(|v| v.trim().parse().ok()),
            page_token: self.page_token.filter(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(folder: Option<&str>, text: Option<&str>) -> MusicSearchQuery {
        MusicSearchQuery {
            folder_id: folder.map(str::to_string),
            query: text.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn search_requires_folder_and_query() {
        assert!(query(None, Some("rock")).into_search().is_err());
        assert!(query(Some("  "), Some("rock")).into_search().is_err());
        assert!(query(Some("f1"), Some(" a ")).into_search().is_err());
        assert!(query(Some("f1"), None).into_search().is_err());
    }

    #[test]
    fn search_trims_and_ignores_bad_page_size() {
        let mut raw = query(Some(" f1 "), Some(" ab "));
        raw.page_size = Some("many".to_string());
        raw.page_token = Some(String::new());
        let search = raw.into_search().unwrap();
        assert_eq!(search.folder_id, "f1");
        assert_eq!(search.query, "ab");
        assert_eq!(search.page_size, None);
        assert_eq!(search.page_token, None);
    }
}

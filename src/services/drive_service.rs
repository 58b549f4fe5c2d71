use std::path::Path;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use gcp_auth::{CustomServiceAccount, TokenProvider};
use reqwest::{header, Client, RequestBuilder, Response};
use tracing::{info, warn};

use crate::config::Config;
use crate::dto::drive_dto::{AudioSearch, DriveAudioFile, DriveFile, DriveFileList};
use crate::error::{Error, Result};
use crate::utils::embedded_art;

const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";
const AUDIO_MIME_FILTER: &str =
    "(mimeType contains 'audio/' or mimeType = 'application/vnd.google-apps.audio')";
const LIST_FIELDS: &str = "files(id, name, mimeType, thumbnailLink, iconLink)";
const SEARCH_FIELDS: &str =
    "nextPageToken, files(id, name, mimeType, thumbnailLink, iconLink, driveId)";
const EMBEDDED_COVER_RANGE: &str = "bytes=0-199999";
const THUMBNAIL_CONCURRENCY: usize = 8;
const DEFAULT_PAGE_SIZE: u32 = 15;

#[derive(Clone)]
pub enum DriveAuth {
    ServiceAccount(Arc<CustomServiceAccount>),
    Static(String),
}

impl DriveAuth {
    async fn bearer(&self) -> Result<String> {
        match self {
            DriveAuth::ServiceAccount(account) => {
                let token = account.token(&[DRIVE_SCOPE]).await?;
                Ok(token.as_str().to_string())
            }
            DriveAuth::Static(token) => Ok(token.clone()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DriveAuth::ServiceAccount(_) => "service_account",
            DriveAuth::Static(_) => "static_token",
        }
    }
}

#[derive(Clone)]
pub struct DriveService {
    client: Client,
    base_url: String,
    auth: DriveAuth,
}

impl DriveService {
    pub fn new(base_url: impl Into<String>, auth: DriveAuth) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        }
    }

    /// Picks the static token when set, otherwise the service-account key.
    /// Returns `None` when neither is usable.
    pub fn from_config(config: &Config) -> Option<Self> {
        let auth = match &config.drive_access_token {
            Some(token) => DriveAuth::Static(token.clone()),
            None => load_service_account(&config.google_service_account_path)?,
        };
        info!("Google Drive enabled ({})", auth.kind());
        Some(Self::new(config.drive_api_base_url.clone(), auth))
    }

    async fn get(&self, path: &str) -> Result<RequestBuilder> {
        let token = self.auth.bearer().await?;
        Ok(self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .bearer_auth(token))
    }

    async fn list(&self, query: &[(&str, String)]) -> Result<DriveFileList> {
        let response = self.get("files").await?.query(query).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json::<DriveFileList>().await?)
    }

    pub async fn list_folder(&self, folder_id: &str) -> Result<Vec<DriveFile>> {
        let list = self
            .list(&[
                ("q", format!("'{}' in parents and trashed = false", escape(folder_id))),
                ("fields", LIST_FIELDS.to_string()),
                ("includeItemsFromAllDrives", "true".to_string()),
                ("supportsAllDrives", "true".to_string()),
            ])
            .await?;
        Ok(list.files)
    }

    pub async fn search_audio(&self, search: &AudioSearch) -> Result<DriveFileList> {
        let mut query = vec![
            ("q", audio_query(&search.folder_id, Some(&search.query))),
            ("pageSize", clamp_page_size(search.page_size).to_string()),
            ("spaces", "drive".to_string()),
            ("orderBy", "name_natural".to_string()),
            ("includeItemsFromAllDrives", "true".to_string()),
            ("supportsAllDrives", "true".to_string()),
            ("fields", SEARCH_FIELDS.to_string()),
        ];
        if let Some(token) = &search.page_token {
            query.push(("pageToken", token.clone()));
        }
        self.list(&query).await
    }

    pub async fn list_audio_with_embedded_thumbnails(
        &self,
        folder_id: &str,
    ) -> Result<Vec<DriveAudioFile>> {
        let list = self
            .list(&[
                ("q", audio_query(folder_id, None)),
                ("fields", LIST_FIELDS.to_string()),
                ("includeItemsFromAllDrives", "true".to_string()),
                ("supportsAllDrives", "true".to_string()),
                ("orderBy", "name_natural".to_string()),
            ])
            .await?;

        let files = list.files.into_iter().filter_map(|file| {
            let id = file.id.clone()?;
            Some(async move {
                let embedded_thumbnail = self.embedded_thumbnail(&id).await;
                DriveAudioFile {
                    id,
                    name: file.name,
                    mime_type: file.mime_type,
                    thumbnail_link: file.thumbnail_link,
                    icon_link: file.icon_link,
                    embedded_thumbnail,
                }
            })
        });

        Ok(stream::iter(files)
            .buffered(THUMBNAIL_CONCURRENCY)
            .collect()
            .await)
    }

    /// Cover art embedded in the head of the file, as a `data:` URL.
    pub async fn embedded_thumbnail(&self, file_id: &str) -> Option<String> {
        let result: Result<Option<String>> = async {
            let response = self
                .media(file_id)
                .await?
                .header(header::RANGE, EMBEDDED_COVER_RANGE)
                .send()
                .await?;
            let head = ensure_success(response).await?.bytes().await?;
            let cover = embedded_art::extract(head.to_vec()).await?;
            Ok(cover.map(|c| c.to_data_url()))
        }
        .await;

        result.unwrap_or_else(|e| {
            warn!("Failed to parse embedded thumbnail for file {}: {}", file_id, e);
            None
        })
    }

    async fn media(&self, file_id: &str) -> Result<RequestBuilder> {
        Ok(self
            .get(&format!("files/{}", file_id))
            .await?
            .query(&[("alt", "media"), ("supportsAllDrives", "true")]))
    }

    /// Opens the file content upstream, forwarding `range` when present.
    pub async fn stream_audio(&self, file_id: &str, range: Option<&str>) -> Result<Response> {
        let result = async {
            let mut request = self.media(file_id).await?;
            if let Some(range) = range {
                request = request.header(header::RANGE, range);
            }
            ensure_success(request.send().await?).await
        }
        .await;

        result.map_err(|e| {
            warn!("Failed to stream audio {}: {}", file_id, e);
            Error::Drive {
                status: 404,
                message: "Audio could not be streamed".to_string(),
            }
        })
    }

    /// The file's thumbnail link, or its icon link when there is none.
    pub async fn thumbnail_link(&self, file_id: &str) -> Result<String> {
        let result = async {
            let response = self
                .get(&format!("files/{}", file_id))
                .await?
                .query(&[
                    ("fields", "thumbnailLink, iconLink"),
                    ("supportsAllDrives", "true"),
                ])
                .send()
                .await?;
            let file = ensure_success(response).await?.json::<DriveFile>().await?;
            Ok::<_, Error>(file.thumbnail_link.or(file.icon_link))
        }
        .await;

        match result {
            Ok(Some(link)) => Ok(link),
            Ok(None) => Err(thumbnail_missing()),
            Err(e) => {
                warn!("Failed to load thumbnail {}: {}", file_id, e);
                Err(thumbnail_missing())
            }
        }
    }
}

fn thumbnail_missing() -> Error {
    Error::Drive {
        status: 404,
        message: "Thumbnail not available".to_string(),
    }
}

fn load_service_account(path: &Path) -> Option<DriveAuth> {
    if !path.exists() {
        warn!(
            "Google Drive disabled: no access token and no service account at {}",
            path.display()
        );
        return None;
    }
    match CustomServiceAccount::from_file(path) {
        Ok(account) => Some(DriveAuth::ServiceAccount(Arc::new(account))),
        Err(e) => {
            warn!("Google Drive disabled: cannot load {}: {}", path.display(), e);
            None
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    warn!("Drive API returned {}: {}", status, message);
    Err(Error::Drive {
        status: status.as_u16(),
        message: format!("Drive API request failed with status {}", status.as_u16()),
    })
}

/// Escapes a value for use inside a single-quoted Drive query literal.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn audio_query(folder_id: &str, name: Option<&str>) -> String {
    let mut filters = vec![
        format!("'{}' in parents", escape(folder_id)),
        "trashed = false".to_string(),
        AUDIO_MIME_FILTER.to_string(),
    ];
    if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        filters.push(format!("name contains '{}'", escape(name)));
    }
    filters.join(" and ")
}

fn clamp_page_size(value: Option<u32>) -> u32 {
    match value {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(size) => size.clamp(5, 50),
    }
}

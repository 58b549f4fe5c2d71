use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncSeekExt, SeekFrom};
use tracing::{debug, warn};

use crate::dto::library_dto::{AlbumDto, AlbumTracksResponse, TrackDto};
use crate::error::{Error, Result};
use crate::utils::byte_range::{self, ByteRange};
use crate::utils::embedded_art::{self, CoverImage};
use crate::utils::media_types::{audio_mime, image_mime, is_audio, is_cover};
use crate::utils::natural_sort::natural_cmp;
use crate::utils::path_id;

/// Only the head of each track is scanned for embedded artwork.
const EMBEDDED_COVER_SCAN_BYTES: u64 = 256 * 1024;

/// An opened track, positioned at the first byte to send.
#[derive(Debug)]
pub struct TrackStream {
    pub file: File,
    pub size: u64,
    pub range: Option<ByteRange>,
    pub mime_type: &'static str,
}

impl TrackStream {
    pub fn content_length(&self) -> u64 {
        self.range.map_or(self.size, |r| r.content_length())
    }
}

#[derive(Debug, Clone)]
pub struct LibraryService {
    root: PathBuf,
}

impl LibraryService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn list_albums(&self) -> Result<Vec<AlbumDto>> {
        let mut albums = Vec::new();
        for name in list_entries(&self.root, EntryKind::Dir).await? {
            let album_path = self.root.join(&name);
            let album_id = path_id::encode(Path::new(&name));
            let files = list_entries(&album_path, EntryKind::File).await?;

            albums.push(AlbumDto {
                cover_url: cover_url(&files, &album_id),
                track_count: files.iter().filter(|f| is_audio(Path::new(f))).count(),
                id: album_id,
                name,
            });
        }
        Ok(albums)
    }

    pub async fn get_album_tracks(&self, album_id: &str) -> Result<AlbumTracksResponse> {
        let (album_path, relative) = self.album_dir(album_id).await?;
        let album_name = relative
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Album")
            .to_string();

        let files = list_entries(&album_path, EntryKind::File).await?;
        let cover_url = cover_url(&files, album_id);

        let tracks: Vec<TrackDto> = files
            .iter()
            .filter(|f| is_audio(Path::new(f)))
            .enumerate()
            .map(|(index, file_name)| {
                let track_id = path_id::encode(&relative.join(file_name));
                TrackDto {
                    stream_url: format!("/library/stream/{}", track_id),
                    id: track_id,
                    album_id: album_id.to_string(),
                    title: file_name.clone(),
                    file_name: file_name.clone(),
                    cover_url: cover_url.clone(),
                    track_index: index,
                    mime_type: audio_mime(Path::new(file_name)).to_string(),
                }
            })
            .collect();

        Ok(AlbumTracksResponse {
            album: AlbumDto {
                id: album_id.to_string(),
                name: album_name,
                cover_url,
                track_count: tracks.len(),
            },
            tracks,
        })
    }

    /// Cover image file first, then the first picture embedded in a track.
    pub async fn get_cover(&self, album_id: &str) -> Result<Option<CoverImage>> {
        let (album_path, _) = self.album_dir(album_id).await?;
        let files = list_entries(&album_path, EntryKind::File).await?;

        if let Some(name) = files.iter().find(|f| is_cover(Path::new(f))) {
            let path = album_path.join(name);
            let bytes = fs::read(&path).await?;
            return Ok(Some(CoverImage {
                bytes,
                mime_type: image_mime(&path).to_string(),
            }));
        }

        for name in files.iter().filter(|f| is_audio(Path::new(f))) {
            let path = album_path.join(name);
            match read_embedded_cover(&path).await {
                Ok(Some(cover)) => return Ok(Some(cover)),
                Ok(None) => continue,
                Err(e) => warn!("Embedded cover parse failed for {}: {}", path.display(), e),
            }
        }

        Ok(None)
    }

    pub async fn stream_track(&self, track_id: &str, range: Option<&str>) -> Result<TrackStream> {
        let path = path_id::resolve(&self.root, track_id)
            .filter(|p| is_audio(p))
            .ok_or_else(|| Error::NotFound("Track not found".to_string()))?;

        let metadata = fs::metadata(&path).await.map_err(|e| not_found(e, "Track not found"))?;
        if !metadata.is_file() {
            return Err(Error::NotFound("Track not found".to_string()));
        }

        let size = metadata.len();
        let range = byte_range::resolve(range, size)?;
        let mut file = File::open(&path).await?;
        if let Some(r) = range {
            file.seek(SeekFrom::Start(r.start)).await?;
        }

        debug!(track = %path.display(), ?range, size, "Streaming local track");

        Ok(TrackStream {
            file,
            size,
            range,
            mime_type: audio_mime(&path),
        })
    }

    async fn album_dir(&self, album_id: &str) -> Result<(PathBuf, PathBuf)> {
        let relative = path_id::decode(album_id)
            .ok_or_else(|| Error::NotFound("Album not found".to_string()))?;
        let path = self.root.join(&relative);
        let metadata = fs::metadata(&path).await.map_err(|e| not_found(e, "Album not found"))?;
        if !metadata.is_dir() {
            return Err(Error::NotFound("Album not found".to_string()));
        }
        Ok((path, relative))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

/// Names of the entries of `dir` of the given kind, in natural order.
async fn list_entries(dir: &Path, kind: EntryKind) -> Result<Vec<String>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        let file_type = entry.file_type().await?;
        let wanted = match kind {
            EntryKind::Dir => file_type.is_dir(),
            EntryKind::File => file_type.is_file(),
        };
        if !wanted {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warn!("Skipping non UTF-8 entry {:?} in {}", raw, dir.display()),
        }
    }
    names.sort_by(|a, b| natural_cmp(a, b));
    Ok(names)
}

fn cover_url(files: &[String], album_id: &str) -> Option<String> {
    files
        .iter()
        .any(|f| is_cover(Path::new(f)))
        .then(|| format!("/library/cover/{}", album_id))
}

fn not_found(err: std::io::Error, message: &str) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::NotFound(message.to_string())
    } else {
        Error::Io(err)
    }
}

async fn read_embedded_cover(path: &Path) -> Result<Option<CoverImage>> {
    let mut head = Vec::new();
    File::open(path)
        .await?
        .take(EMBEDDED_COVER_SCAN_BYTES)
        .read_to_end(&mut head)
        .await?;

    embedded_art::extract(head).await
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDto {
    pub id: String,
    pub name: String,
    pub cover_url: Option<String>,
    pub track_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub id: String,
    pub album_id: String,
    pub title: String,
    pub file_name: String,
    pub stream_url: String,
    pub cover_url: Option<String>,
    pub track_index: usize,
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsResponse {
    pub albums: Vec<AlbumDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    pub album: AlbumDto,
    pub tracks: Vec<TrackDto>,
}

use std::path::Path;

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "m4a", "wav", "ogg", "aac"];
pub const COVER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

pub fn is_audio(path: &Path) -> bool {
    extension(path).is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
}

pub fn is_cover(path: &Path) -> bool {
    extension(path).is_some_and(|ext| COVER_EXTENSIONS.contains(&ext.as_str()))
}

pub fn audio_mime(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("m4a") => "audio/mp4",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("aac") => "audio/aac",
        _ => "application/octet-stream",
    }
}

pub fn image_mime(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use std::path::{Component, Path, PathBuf};

/// Encodes a root-relative path as an opaque, URL-safe id.
pub fn encode(relative: &Path) -> String {
    let normalized = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    URL_SAFE_NO_PAD.encode(normalized.as_bytes())
}

/// Decodes an id back into a relative path. Returns `None` for ids that are
/// not valid base64/UTF-8 or that would escape the library root.
pub fn decode(id: &str) -> Option<PathBuf> {
    let bytes = URL_SAFE_NO_PAD
        .decode(id.trim_end_matches('='))
        .or_else(|_| URL_SAFE.decode(id))
        .ok()?;
    let raw = String::from_utf8(bytes).ok()?;
    if raw.is_empty() {
        return None;
    }

    let path = PathBuf::from(raw);
    let safe = path
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    safe.then_some(path)
}

/// Joins a decoded id onto `root`.
pub fn resolve(root: &Path, id: &str) -> Option<PathBuf> {
    decode(id).map(|relative| root.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_nested_paths() {
        let id = encode(Path::new("Album/01 - Intro.mp3"));
        assert!(!id.contains('='));
        assert!(!id.contains('/'));
        assert_eq!(decode(&id), Some(PathBuf::from("Album/01 - Intro.mp3")));
    }

    #[test]
    fn padded_ids_are_accepted() {
        let padded = URL_SAFE.encode("Ab");
        assert!(padded.ends_with('='));
        assert_eq!(decode(&padded), Some(PathBuf::from("Ab")));
    }

    #[test]
    fn escaping_paths_are_rejected() {
        for raw in ["../secret", "/etc/passwd", "Album/../../x", "./Album"] {
            let id = URL_SAFE_NO_PAD.encode(raw);
            assert_eq!(decode(&id), None, "{raw}");
        }
        assert_eq!(decode("not base64!"), None);
        assert_eq!(decode(""), None);
    }

    #[test]
    fn resolve_joins_under_root() {
        let id = encode(Path::new("Album"));
        assert_eq!(
            resolve(Path::new("/music"), &id),
            Some(PathBuf::from("/music/Album"))
        );
    }
}

//! Deterministic cache keys and artifact placement under the scratch root.
//!
//! Path composition here is pure string work: no function in this module
//! except [`ScratchRoot::new`] touches the filesystem.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::Result;

/// Fixed extension for all fetched audio artifacts.
pub const AUDIO_EXT: &str = "mp3";

/// Derive a fixed-length cache key from the semantically relevant request
/// fields, concatenated in order.
///
/// SHA-256 is used for cache correctness (collision resistance), not
/// security. The key is stable across process restarts.
pub fn derive_key<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    hex::encode(hasher.finalize())
}

/// Strip characters that would break a path or shell argument from a
/// display name: space, dot, slash, double-quote.
pub fn sanitize_song_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '.' | '/' | '"'))
        .collect()
}

/// Root directory holding all artifacts produced by the fetch orchestrator.
///
/// Constructed explicitly (create-if-absent happens once, here) rather than
/// as ambient process state. Retention and eviction are owned by external
/// housekeeping; this type never deletes anything.
#[derive(Debug, Clone)]
pub struct ScratchRoot {
    dir: PathBuf,
}

impl ScratchRoot {
    /// Use `dir` as the scratch root, creating it if absent.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        tracing::info!("using scratch root {}", dir.display());
        Ok(Self { dir })
    }

    /// Default scratch root inside the system temporary directory.
    pub fn in_system_tmp() -> Result<Self> {
        Self::new(std::env::temp_dir().join("tunegrab-songs"))
    }

    /// The root directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Flat destination for a direct URL download: `<root>/<key>.mp3`.
    pub fn flat_file(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{AUDIO_EXT}"))
    }

    /// Per-request subdirectory for a resolver-mediated fetch:
    /// `<root>/<key>/`.
    pub fn request_dir(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

/// Destination file inside a request directory. The stem is the sanitized
/// song name, or the cache key when the name sanitizes to empty.
pub fn track_file(dir: &Path, key: &str, sanitized_name: &str) -> PathBuf {
    let stem = if sanitized_name.is_empty() {
        key
    } else {
        sanitized_name
    };
    dir.join(format!("{stem}.{AUDIO_EXT}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_key_is_deterministic() {
        let a = derive_key(["https://example.com/a.mp3"]);
        let b = derive_key(["https://example.com/a.mp3"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn derive_key_differs_on_any_field() {
        let base = derive_key(["https://x/a", "Song", "false"]);
        assert_ne!(base, derive_key(["https://x/b", "Song", "false"]));
        assert_ne!(base, derive_key(["https://x/a", "Track", "false"]));
        assert_ne!(base, derive_key(["https://x/a", "Song", "true"]));
    }

    #[test]
    fn sanitize_strips_path_breaking_chars() {
        assert_eq!(sanitize_song_name("a b.c/d\"e"), "abcde");
        assert_eq!(sanitize_song_name("../../etc"), "etc");
        assert_eq!(sanitize_song_name(""), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let once = sanitize_song_name("Never Gonna / Give. You \"Up\"");
        assert_eq!(sanitize_song_name(&once), once);
        for c in once.chars() {
            assert!(!matches!(c, ' ' | '.' | '/' | '"'));
        }
    }

    #[test]
    fn paths_are_pure_composition() {
        let dir = tempfile::tempdir().unwrap();
        let root = ScratchRoot::new(dir.path()).unwrap();
        let key = derive_key(["u"]);
        assert_eq!(root.flat_file(&key), dir.path().join(format!("{key}.mp3")));
        assert_eq!(root.request_dir(&key), dir.path().join(&key));
        // Composition does not create anything on disk.
        assert!(!root.flat_file(&key).exists());
        assert!(!root.request_dir(&key).exists());
    }

    #[test]
    fn track_file_falls_back_to_key() {
        let dir = Path::new("/tmp/x");
        assert_eq!(track_file(dir, "k1", "Song"), dir.join("Song.mp3"));
        assert_eq!(track_file(dir, "k1", ""), dir.join("k1.mp3"));
    }

    #[test]
    fn scratch_root_creates_dir_once() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("root");
        let root = ScratchRoot::new(&nested).unwrap();
        assert!(nested.is_dir());
        // Idempotent on an existing directory.
        let again = ScratchRoot::new(&nested).unwrap();
        assert_eq!(root.dir(), again.dir());
    }
}

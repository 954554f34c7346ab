//! Raw JSON shapes emitted by the resolver binary, and their normalization
//! into the crate's stable records.
//!
//! Metadata mode uses snake_case field names; search mode uses PascalCase.
//! Every field is optional: missing fields become unset in the normalized
//! record, and unknown fields are ignored.

use serde::Deserialize;

use crate::types::{SearchHit, TrackMetadata};

/// Metadata-mode output: a single JSON object.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTrackMeta {
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    duration: Option<f64>,
    cover_url: Option<String>,
    public_time: Option<String>,
    is_trial: Option<bool>,
    resource_type: Option<String>,
    #[serde(default)]
    audios: Vec<serde_json::Value>,
    from_music_platform: Option<bool>,
    resource_forbidden: Option<bool>,
    source: Option<String>,
}

impl From<RawTrackMeta> for TrackMetadata {
    fn from(raw: RawTrackMeta) -> Self {
        TrackMetadata {
            song_name: raw.title,
            artist: raw.artist,
            album: raw.album,
            duration: raw.duration,
            cover_url: raw.cover_url,
            public_time: raw.public_time,
            is_trial: raw.is_trial,
            resource_type: raw.resource_type,
            audios: raw.audios,
            from_music_platform: raw.from_music_platform,
            resource_forbidden: raw.resource_forbidden,
            source: raw.source,
        }
    }
}

/// One element of search-mode output: a JSON array of these.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawSearchItem {
    name: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    duration: Option<f64>,
    url: Option<String>,
    resource_forbidden: Option<bool>,
    source: Option<String>,
    from_music_platform: Option<bool>,
    score: Option<f64>,
}

impl From<RawSearchItem> for SearchHit {
    fn from(raw: RawSearchItem) -> Self {
        SearchHit {
            song_name: raw.name,
            artist: raw.artist,
            album: raw.album,
            duration: raw.duration,
            url: raw.url,
            resource_forbidden: raw.resource_forbidden,
            source: raw.source,
            from_music_platform: raw.from_music_platform,
            score: raw.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_renames_and_leaves_missing_unset() {
        let raw: RawTrackMeta =
            serde_json::from_str(r#"{"title":"X","artist":"Y","duration":120}"#).unwrap();
        let meta = TrackMetadata::from(raw);
        assert_eq!(meta.song_name.as_deref(), Some("X"));
        assert_eq!(meta.artist.as_deref(), Some("Y"));
        assert_eq!(meta.duration, Some(120.0));
        assert_eq!(meta.album, None);
        assert_eq!(meta.cover_url, None);
        assert_eq!(meta.is_trial, None);
        assert!(meta.audios.is_empty());
    }

    #[test]
    fn metadata_tolerates_unknown_fields() {
        let raw: RawTrackMeta = serde_json::from_str(
            r#"{"title":"X","brand_new_field":{"nested":true},"source":"migu"}"#,
        )
        .unwrap();
        let meta = TrackMetadata::from(raw);
        assert_eq!(meta.song_name.as_deref(), Some("X"));
        assert_eq!(meta.source.as_deref(), Some("migu"));
    }

    #[test]
    fn metadata_passes_audio_variants_through() {
        let raw: RawTrackMeta =
            serde_json::from_str(r#"{"audios":[{"url":"u1","size":1},{"url":"u2"}]}"#).unwrap();
        let meta = TrackMetadata::from(raw);
        assert_eq!(meta.audios.len(), 2);
        assert_eq!(meta.audios[0]["url"], "u1");
    }

    #[test]
    fn search_item_uses_pascal_case_names() {
        let raw: RawSearchItem = serde_json::from_str(
            r#"{"Name":"A","Artist":"B","Url":"https://x","ResourceForbidden":false,
                "Source":"s1","FromMusicPlatform":true,"Score":99.5}"#,
        )
        .unwrap();
        let hit = SearchHit::from(raw);
        assert_eq!(hit.song_name.as_deref(), Some("A"));
        assert_eq!(hit.artist.as_deref(), Some("B"));
        assert_eq!(hit.url.as_deref(), Some("https://x"));
        assert_eq!(hit.resource_forbidden, Some(false));
        assert_eq!(hit.source.as_deref(), Some("s1"));
        assert_eq!(hit.from_music_platform, Some(true));
        assert_eq!(hit.score, Some(99.5));
    }
}

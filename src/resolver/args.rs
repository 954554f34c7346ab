//! Argument-vector construction for each resolver CLI mode.
//!
//! Flag spellings here are the tool's wire contract and must not drift.
//! Note the deliberate `-l=silence` vs `-l silence` difference between the
//! metadata and search modes.

use std::path::Path;

use crate::types::SearchQuery;

/// Arguments for a resolver-mediated audio fetch:
/// `-u <url> --out <path> -t audio [--addMediaTag]`.
pub fn fetch(url: &str, out: &Path, add_media_tag: bool) -> Vec<String> {
    let mut args = vec![
        "-u".to_string(),
        url.to_string(),
        "--out".to_string(),
        out.to_string_lossy().into_owned(),
        "-t".to_string(),
        "audio".to_string(),
    ];
    if add_media_tag {
        args.push("--addMediaTag".to_string());
    }
    args
}

/// Arguments for a metadata-only query:
/// `-u <url> -m --infoFormat=json -l=silence`.
pub fn metadata(url: &str) -> Vec<String> {
    vec![
        "-u".to_string(),
        url.to_string(),
        "-m".to_string(),
        "--infoFormat=json".to_string(),
        "-l=silence".to_string(),
    ]
}

/// Arguments for a multi-platform song search. Keyword and structured modes
/// are mutually exclusive; both end with the fixed song-type filter,
/// metadata mode, the enabled sources, JSON output, and silenced logging.
pub fn search(query: &SearchQuery, sources: &[String]) -> Vec<String> {
    let mut args = match query {
        SearchQuery::Keyword(keyword) => vec!["-k".to_string(), keyword.clone()],
        SearchQuery::Fields {
            song_name,
            artist,
            album,
        } => vec![
            "--searchSongName".to_string(),
            song_name.clone(),
            "--searchArtist".to_string(),
            artist.clone(),
            "--searchAlbum".to_string(),
            album.clone(),
        ],
    };

    args.extend([
        "--searchType=song".to_string(),
        "-m".to_string(),
        format!("--sources={}", sources.join(",")),
        "--infoFormat=json".to_string(),
        "-l".to_string(),
        "silence".to_string(),
    ]);

    args
}

//! Track location normalization.
//!
//! Raw location strings may carry a `file://` prefix and may use either slash
//! direction, depending on which platform produced the export. Both separators
//! are honored regardless of the host platform so that a Windows-made export
//! still yields usable destination filenames on Linux.

use std::path::PathBuf;
use thiserror::Error;

const FILE_URI_PREFIX: &str = "file://";

/// A usable source path plus the destination filename derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLocation {
    pub source: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Error)]
#[error("invalid track location: {0:?}")]
pub struct LocationError(pub String);

/// Normalize a raw location string.
///
/// Strips a literal `file://` prefix, then takes everything after the last
/// `/` or `\` as the filename (the whole string when no separator is
/// present). An empty string or a location with nothing after the final
/// separator has no filename component and is rejected.
pub fn normalize(raw: &str) -> Result<TrackLocation, LocationError> {
    let clean = raw.strip_prefix(FILE_URI_PREFIX).unwrap_or(raw);

    let file_name = match clean.rfind(['/', '\\']) {
        Some(pos) => &clean[pos + 1..],
        None => clean,
    };
    if file_name.is_empty() {
        return Err(LocationError(raw.to_string()));
    }

    Ok(TrackLocation {
        source: PathBuf::from(clean),
        file_name: file_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn file_uri_stripped() {
        let loc = normalize("file:///music/song.mp3").unwrap();
        assert_eq!(loc.source, Path::new("/music/song.mp3"));
        assert_eq!(loc.file_name, "song.mp3");
    }

    #[test]
    fn backslash_separators() {
        let loc = normalize(r"C:\Music\track.flac").unwrap();
        assert_eq!(loc.file_name, "track.flac");
    }

    #[test]
    fn mixed_separators_take_last() {
        let loc = normalize(r"/music\box set/track.flac").unwrap();
        assert_eq!(loc.file_name, "track.flac");
    }

    #[test]
    fn no_separator_whole_string_is_filename() {
        let loc = normalize("track.ogg").unwrap();
        assert_eq!(loc.source, Path::new("track.ogg"));
        assert_eq!(loc.file_name, "track.ogg");
    }

    #[test]
    fn trailing_separator_rejected() {
        assert!(normalize("/music/albums/").is_err());
        assert!(normalize(r"C:\Music\").is_err());
    }

    #[test]
    fn empty_and_prefix_only_rejected() {
        assert!(normalize("").is_err());
        assert!(normalize("file://").is_err());
    }
}

//! Descriptor file decoding.
//!
//! Playlist exports show up in two encodings in practice: plain UTF-8/ASCII,
//! and UTF-16LE with a byte-order mark (the usual output of Windows media
//! players). Detection is by BOM only; anything without the `FF FE` prefix is
//! taken as already being 8-bit text.

use std::fs;
use std::path::Path;
use thiserror::Error;

/// UTF-16LE byte-order mark.
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Encoding detected for a descriptor file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Utf16Le,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("file is empty: {0}")]
    Empty(String),
}

/// Read a descriptor file and return its decoded text plus the encoding that
/// was detected.
///
/// A leading `FF FE` BOM selects UTF-16LE: the remainder is decoded as
/// little-endian 16-bit code units, surrogate pairs included (lone surrogates
/// become U+FFFD, and a trailing odd byte is ignored). Without a BOM the bytes
/// are taken verbatim as UTF-8; ill-formed sequences are replaced rather than
/// rejected.
pub fn read_descriptor_text(path: &Path) -> Result<(String, SourceEncoding), DecodeError> {
    let bytes = fs::read(path).map_err(|source| DecodeError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let (text, encoding) = if bytes.starts_with(&UTF16LE_BOM) {
        tracing::debug!("UTF-16LE BOM detected in {}", path.display());
        (decode_utf16le(&bytes[2..]), SourceEncoding::Utf16Le)
    } else {
        (
            String::from_utf8_lossy(&bytes).into_owned(),
            SourceEncoding::Utf8,
        )
    };

    if text.is_empty() {
        return Err(DecodeError::Empty(path.display().to_string()));
    }
    Ok((text, encoding))
}

fn decode_utf16le(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
        f
    }

    fn utf16le_bytes(text: &str) -> Vec<u8> {
        let mut out = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        out
    }

    #[test]
    fn utf8_passthrough() {
        let f = write_temp(b"Name\tLocation\nSong A\t/music/a.mp3\n");
        let (text, encoding) = read_descriptor_text(f.path()).unwrap();
        assert_eq!(text, "Name\tLocation\nSong A\t/music/a.mp3\n");
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn utf16le_ascii_matches_utf8() {
        let content = "Name\tLocation\nSong A\t/music/a.mp3\n";
        let f16 = write_temp(&utf16le_bytes(content));
        let f8 = write_temp(content.as_bytes());
        let (text16, enc16) = read_descriptor_text(f16.path()).unwrap();
        let (text8, _) = read_descriptor_text(f8.path()).unwrap();
        assert_eq!(text16, text8);
        assert_eq!(enc16, SourceEncoding::Utf16Le);
    }

    #[test]
    fn utf16le_non_ascii() {
        let content = "Café\t/música/Ω.mp3\n";
        let f = write_temp(&utf16le_bytes(content));
        let (text, _) = read_descriptor_text(f.path()).unwrap();
        assert_eq!(text, content);
    }

    #[test]
    fn utf16le_surrogate_pair() {
        // U+1F3B5 needs a surrogate pair in UTF-16.
        let content = "\u{1F3B5} tune";
        let f = write_temp(&utf16le_bytes(content));
        let (text, _) = read_descriptor_text(f.path()).unwrap();
        assert_eq!(text, content);
    }

    #[test]
    fn utf16le_trailing_odd_byte_ignored() {
        let mut bytes = utf16le_bytes("ab");
        bytes.push(0x41);
        let f = write_temp(&bytes);
        let (text, _) = read_descriptor_text(f.path()).unwrap();
        assert_eq!(text, "ab");
    }

    #[test]
    fn empty_file_is_an_error() {
        let f = write_temp(b"");
        match read_descriptor_text(f.path()) {
            Err(DecodeError::Empty(_)) => {}
            other => panic!("expected Empty, got {other:?}"),
        }
    }

    #[test]
    fn bom_only_file_is_an_error() {
        let f = write_temp(&[0xFF, 0xFE]);
        match read_descriptor_text(f.path()) {
            Err(DecodeError::Empty(_)) => {}
            other => panic!("expected Empty, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        match read_descriptor_text(&path) {
            Err(DecodeError::Io { .. }) => {}
            other => panic!("expected Io, got {other:?}"),
        }
    }
}

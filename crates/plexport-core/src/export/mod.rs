//! Per-playlist export orchestration.
//!
//! One descriptor file maps to one output directory named after the
//! descriptor's base name. Descriptor files are processed strictly one after
//! another by the caller; nothing here carries state between them.

mod copy;

pub use copy::copy_track;

use crate::decode::{self, SourceEncoding};
use crate::descriptor::{self, Columns, Record};
use crate::location;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Per-playlist tally reported after processing a descriptor file.
#[derive(Debug, Clone)]
pub struct ExportStats {
    pub playlist: String,
    pub copied: usize,
    pub total: usize,
}

/// Playlist name: the descriptor file's base name without extension.
pub fn playlist_name(descriptor: &Path) -> String {
    descriptor
        .file_stem()
        .unwrap_or(descriptor.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Export one descriptor file: create the playlist directory, parse the
/// descriptor, and copy every referenced track into it.
///
/// Row-level problems (empty or invalid location, missing source file) are
/// reported and skipped; they show up in the returned tally. File-level
/// problems (unreadable descriptor, missing headers, directory creation
/// failure) abandon this descriptor and surface as an error so the caller can
/// move on to the next one.
pub fn export_playlist(
    descriptor: &Path,
    output_root: &Path,
    columns: &Columns,
) -> Result<ExportStats> {
    let playlist = playlist_name(descriptor);
    println!("Processing playlist: {playlist}");
    tracing::info!("processing descriptor {}", descriptor.display());

    let playlist_dir = output_root.join(&playlist);
    fs::create_dir_all(&playlist_dir)
        .with_context(|| format!("create playlist directory {}", playlist_dir.display()))?;

    let records = load_records(descriptor, columns)?;
    let total = records.len();
    println!("Found {total} tracks in playlist");

    let mut copied = 0;
    for record in &records {
        if record.location.is_empty() {
            eprintln!("Track location is empty for: {}", record.name);
            continue;
        }
        let track = match location::normalize(&record.location) {
            Ok(track) => track,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let dest = playlist_dir.join(&track.file_name);
        println!("Copying: {} to {}", track.source.display(), dest.display());
        match copy_track(&track.source, &dest) {
            Ok(()) => copied += 1,
            Err(err) => eprintln!("Failed to copy {}: {:#}", track.source.display(), err),
        }
    }

    println!("Copied {copied} out of {total} tracks for playlist: {playlist}");
    tracing::info!("playlist {playlist}: copied {copied}/{total}");
    Ok(ExportStats {
        playlist,
        copied,
        total,
    })
}

fn load_records(descriptor: &Path, columns: &Columns) -> Result<Vec<Record>> {
    let (text, encoding) = decode::read_descriptor_text(descriptor)?;
    if encoding == SourceEncoding::Utf16Le {
        println!("UTF-16LE BOM detected, decoding as UTF-16LE");
    }
    let records = descriptor::parse_records(&text, columns)
        .with_context(|| format!("parse descriptor {}", descriptor.display()))?;
    Ok(records)
}

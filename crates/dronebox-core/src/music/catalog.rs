//! Library listing and NDJSON export

use std::io::Write;

use serde::Serialize;

use super::song::Song;
use crate::error::Result;

/// One library entry: menu position plus what the player needs to know
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// 1-based menu position
    pub index: usize,
    pub name: String,
    pub tempo_bpm: u32,
    pub notes: usize,
    pub duration_ms: u64,
}

impl CatalogEntry {
    pub fn new(index: usize, song: &Song) -> Result<Self> {
        Ok(Self {
            index,
            name: song.name.clone(),
            tempo_bpm: song.tempo_bpm,
            notes: song.notes.len(),
            duration_ms: song.total_duration_ms()?,
        })
    }
}

/// Catalog entries for `songs`, in menu order
pub fn catalog(songs: &[Song]) -> Result<Vec<CatalogEntry>> {
    songs
        .iter()
        .enumerate()
        .map(|(i, song)| CatalogEntry::new(i + 1, song))
        .collect()
}

/// Write one JSON object per line
pub fn write_ndjson<W: Write>(entries: &[CatalogEntry], out: &mut W) -> Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut *out, entry)?;
        writeln!(out)?;
    }
    Ok(())
}

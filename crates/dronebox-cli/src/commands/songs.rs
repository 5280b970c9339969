//! Songs command: list the built-in library.

use std::io;

use anyhow::Result;
use dronebox_core::{CatalogEntry, builtin_songs, catalog, find_song, write_ndjson};

/// `m:ss`, rounded down to the second
pub fn format_duration(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn table_row(entry: &CatalogEntry) -> String {
    format!(
        "{:>2}  {:<26} {:>4} BPM {:>5} notes  {}",
        entry.index,
        entry.name,
        entry.tempo_bpm,
        entry.notes,
        format_duration(entry.duration_ms)
    )
}

/// Catalog entries to print: the whole library, or the one song named
pub fn select_entries(name: Option<&str>) -> Result<Vec<CatalogEntry>> {
    let mut entries = catalog(&builtin_songs())?;
    if let Some(name) = name {
        let song = find_song(name)?;
        entries.retain(|entry| entry.name == song.name);
    }
    Ok(entries)
}

/// Print the library as a table, or as JSON lines
pub fn run(name: Option<&str>, json: bool) -> Result<()> {
    let entries = select_entries(name)?;
    if json {
        write_ndjson(&entries, &mut io::stdout().lock())?;
        return Ok(());
    }

    for entry in &entries {
        println!("{}", table_row(entry));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59_999), "0:59");
        assert_eq!(format_duration(61_000), "1:01");
        assert_eq!(format_duration(600_000), "10:00");
    }

    #[test]
    fn test_select_all_songs() {
        let entries = select_entries(None).unwrap();
        assert_eq!(entries.len(), 6);
    }

    #[test]
    fn test_select_song_by_name() {
        let entries = select_entries(Some("the lion sleeps tonight")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].index, 5);
        assert_eq!(entries[0].name, "The Lion Sleeps Tonight");
        assert_eq!(entries[0].tempo_bpm, 122);
    }

    #[test]
    fn test_unknown_song_is_an_error() {
        let err = select_entries(Some("Darude Sandstorm")).unwrap_err();
        assert_eq!(err.to_string(), "Song not found: Darude Sandstorm");
    }

    #[test]
    fn test_table_row() {
        let entry = CatalogEntry {
            index: 2,
            name: "Star Wars".to_string(),
            tempo_bpm: 216,
            notes: 88,
            duration_ms: 61_500,
        };
        let row = table_row(&entry);
        assert!(row.starts_with(" 2  Star Wars "));
        assert!(row.contains(" 216 BPM "));
        assert!(row.contains("   88 notes"));
        assert!(row.ends_with("1:01"));
    }
}

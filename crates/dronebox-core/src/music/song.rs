use serde::Serialize;

use crate::error::{Error, Result};

/// One encoded note.
///
/// `duration_code` is the note's fraction of a whole note (4 = quarter,
/// 8 = eighth). A negative code marks a dotted note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Note {
    /// Pitch in Hz, 0 for a rest
    pub frequency_hz: i32,
    pub duration_code: i32,
}

impl Note {
    pub const fn new(frequency_hz: i32, duration_code: i32) -> Self {
        Self {
            frequency_hz,
            duration_code,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }

    pub fn is_dotted(&self) -> bool {
        self.duration_code < 0
    }

    /// Buzzer frequency, with negative table values treated as rests
    pub fn frequency(&self) -> u32 {
        self.frequency_hz.max(0) as u32
    }
}

/// Length of a whole note in milliseconds: `240000 / tempo`
pub fn whole_note_ms(tempo_bpm: u32) -> Result<f64> {
    if tempo_bpm == 0 {
        return Err(Error::InvalidTempo(tempo_bpm));
    }
    Ok(240_000.0 / f64::from(tempo_bpm))
}

/// Decode a duration code into milliseconds.
///
/// Dotted codes go through `-1 * (code + code * 2)` before the floor
/// division; the result is kept exactly as the melody tables were tuned
/// against. Returns `None` for code 0.
#[allow(clippy::neg_multiply)]
pub fn decode_duration(whole_note_ms: f64, duration_code: i32) -> Option<u64> {
    let mut divisor = duration_code;
    if divisor < 0 {
        divisor = -1 * (divisor + divisor * 2);
    }
    if divisor == 0 {
        return None;
    }

    Some((whole_note_ms / f64::from(divisor)).floor() as u64)
}

/// A melody: immutable after construction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub name: String,
    pub tempo_bpm: u32,
    pub notes: Vec<Note>,
}

impl Song {
    pub fn new(name: impl Into<String>, tempo_bpm: u32, notes: Vec<Note>) -> Self {
        Self {
            name: name.into(),
            tempo_bpm,
            notes,
        }
    }

    /// Build a song from a flat `[pitch, code, pitch, code, ...]` table.
    ///
    /// A trailing unpaired value is ignored.
    pub fn from_pairs(name: impl Into<String>, tempo_bpm: u32, table: &[i32]) -> Self {
        let notes = table
            .chunks_exact(2)
            .map(|pair| Note::new(pair[0], pair[1]))
            .collect();
        Self::new(name, tempo_bpm, notes)
    }

    pub fn whole_note_ms(&self) -> Result<f64> {
        whole_note_ms(self.tempo_bpm)
    }

    /// Decoded `(frequency, milliseconds)` for every note, in order
    pub fn timeline(&self) -> Result<Vec<(u32, u64)>> {
        let whole = self.whole_note_ms()?;
        self.notes
            .iter()
            .enumerate()
            .map(|(index, note)| {
                decode_duration(whole, note.duration_code)
                    .map(|ms| (note.frequency(), ms))
                    .ok_or(Error::InvalidDuration { index })
            })
            .collect()
    }

    /// Total playback time in milliseconds
    pub fn total_duration_ms(&self) -> Result<u64> {
        Ok(self.timeline()?.iter().map(|(_, ms)| ms).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_note() {
        assert_eq!(whole_note_ms(240).unwrap(), 1000.0);
        assert_eq!(whole_note_ms(120).unwrap(), 2000.0);
        assert!(matches!(whole_note_ms(0), Err(Error::InvalidTempo(0))));
    }

    #[test]
    fn test_plain_durations() {
        assert_eq!(decode_duration(1000.0, 4), Some(250));
        assert_eq!(decode_duration(1000.0, 8), Some(125));
        assert_eq!(decode_duration(1000.0, 16), Some(62));
        assert_eq!(decode_duration(1000.0, 1), Some(1000));
    }

    #[test]
    fn test_dotted_duration() {
        // -1 * (-4 + -8) = 12
        assert_eq!(decode_duration(1000.0, -4), Some(83));
        assert_eq!(decode_duration(1000.0, -8), Some(41));
        assert_eq!(decode_duration(2000.0, -2), Some(333));
    }

    #[test]
    fn test_fractional_whole_note_floors() {
        // 216 BPM: whole note is 1111.1 ms
        let whole = whole_note_ms(216).unwrap();
        assert_eq!(decode_duration(whole, 8), Some(138));
        assert_eq!(decode_duration(whole, 2), Some(555));
    }

    #[test]
    fn test_zero_code_is_rejected() {
        assert_eq!(decode_duration(1000.0, 0), None);

        let song = Song::from_pairs("broken", 120, &[440, 4, 440, 0]);
        assert!(matches!(
            song.timeline(),
            Err(Error::InvalidDuration { index: 1 })
        ));
    }

    #[test]
    fn test_from_pairs_drops_trailing_value() {
        let song = Song::from_pairs("odd", 240, &[440, 4, 0, 8, 523]);
        assert_eq!(song.notes, vec![Note::new(440, 4), Note::new(0, 8)]);
        assert!(song.notes[1].is_rest());
    }

    #[test]
    fn test_timeline_and_total() {
        let song = Song::from_pairs("scale", 240, &[262, 4, 0, 8, 330, -4]);
        assert_eq!(
            song.timeline().unwrap(),
            vec![(262, 250), (0, 125), (330, 83)]
        );
        assert_eq!(song.total_duration_ms().unwrap(), 458);
        assert!(song.notes[2].is_dotted());
    }
}

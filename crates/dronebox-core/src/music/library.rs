//! Built-in melodies.
//!
//! Each table is a flat list of `pitch, duration code` pairs; see
//! [`Song::from_pairs`].

use super::pitch::*;
use super::song::Song;
use crate::error::{Error, Result};

/// Songs in jukebox menu order
pub fn builtin_songs() -> Vec<Song> {
    vec![
        take_on_me(),
        star_wars(),
        zelda(),
        game_of_thrones(),
        the_lion_sleeps_tonight(),
        never_gonna_give_you_up(),
    ]
}

/// Look up a built-in song by name, ignoring case
pub fn find_song(name: &str) -> Result<Song> {
    builtin_songs()
        .into_iter()
        .find(|song| song.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::SongNotFound(name.to_string()))
}

pub fn take_on_me() -> Song {
    Song::from_pairs("Take on Me", 240, TAKE_ON_ME)
}

pub fn star_wars() -> Song {
    Song::from_pairs("Star Wars", 216, STAR_WARS)
}

pub fn zelda() -> Song {
    Song::from_pairs("Zelda Theme", 120, ZELDA)
}

pub fn game_of_thrones() -> Song {
    Song::from_pairs("Game of Thrones", 85, GAME_OF_THRONES)
}

pub fn the_lion_sleeps_tonight() -> Song {
    Song::from_pairs("The Lion Sleeps Tonight", 122, THE_LION_SLEEPS_TONIGHT)
}

pub fn never_gonna_give_you_up() -> Song {
    Song::from_pairs("Never Gonna Give You Up", 114, NEVER_GONNA_GIVE_YOU_UP)
}

#[rustfmt::skip]
const TAKE_ON_ME: &[i32] = &[
    FS5, 8, FS5, 8, D5, 8, B4, 8, REST, 8, B4, 8,
    REST, 8, E5, 8, REST, 8, E5, 8, REST, 8, E5, 8,
    GS5, 8, GS5, 8, A5, 8, B5, 8, A5, 8, A5, 8,
    A5, 8, E5, 8, REST, 8, D5, 8, REST, 8, FS5, 8,
    REST, 8, FS5, 8, REST, 8, FS5, 8, E5, 8, E5, 8,
    FS5, 8, E5, 8, FS5, 8, FS5, 8, D5, 8, B4, 8,
    REST, 8, B4, 8, REST, 8, E5, 8, REST, 8, E5, 8,
    REST, 8, E5, 8, GS5, 8, GS5, 8, A5, 8, B5, 8,
    A5, 8, A5, 8, A5, 8, E5, 8, REST, 8, D5, 8,
    REST, 8, FS5, 8, REST, 8, FS5, 8, REST, 8, FS5, 8,
    E5, 8, E5, 8, FS5, 8, E5, 8, FS5, 8, FS5, 8,
    D5, 8, B4, 8, REST, 8, B4, 8, REST, 8, E5, 8,
    REST, 8, E5, 8, REST, 8, E5, 8, GS5, 8, GS5, 8,
    A5, 8, B5, 8, A5, 8, A5, 8, A5, 8, E5, 8,
    REST, 8, D5, 8, REST, 8, FS5, 8, REST, 8, FS5, 8,
    REST, 8, FS5, 8, E5, 8, E5, 8, FS5, 8, E5, 8,
];

#[rustfmt::skip]
const STAR_WARS: &[i32] = &[
    AS4, 8, AS4, 8, AS4, 8, F5, 2, C6, 2, AS5, 8,
    A5, 8, G5, 8, F6, 2, C6, 4, AS5, 8, A5, 8,
    G5, 8, F6, 2, C6, 4, AS5, 8, A5, 8, AS5, 8,
    G5, 2, C5, 8, C5, 8, C5, 8, F5, 2, C6, 2,
    AS5, 8, A5, 8, G5, 8, F6, 2, C6, 4, AS5, 8,
    A5, 8, G5, 8, F6, 2, C6, 4, AS5, 8, A5, 8,
    AS5, 8, G5, 2, C5, -8, C5, 16, D5, -4, D5, 8,
    AS5, 8, A5, 8, G5, 8, F5, 8, F5, 8, G5, 8,
    A5, 8, G5, 4, D5, 8, E5, 4, C5, -8, C5, 16,
    D5, -4, D5, 8, AS5, 8, A5, 8, G5, 8, F5, 8,
    C6, -8, G5, 16, G5, 2, REST, 8, C5, 8, D5, -4,
    D5, 8, AS5, 8, A5, 8, G5, 8, F5, 8, F5, 8,
    G5, 8, A5, 8, G5, 4, D5, 8, E5, 4, C6, -8,
    C6, 16, F6, 4, DS6, 8, CS6, 4, C6, 8, AS5, 4,
    GS5, 8, G5, 4, F5, 8, C6, 1,
];

#[rustfmt::skip]
const ZELDA: &[i32] = &[
    AS4, -2, F4, 8, F4, 8, AS4, 8, GS4, 16, FS4, 16,
    GS4, -2, AS4, -2, FS4, 8, FS4, 8, AS4, 8, A4, 16,
    G4, 16, A4, -2, REST, 1, AS4, 4, F4, -4, AS4, 8,
    AS4, 16, C5, 16, D5, 16, DS5, 16, F5, 2, F5, 8,
    F5, 8, F5, 8, FS5, 16, GS5, 16, AS5, -2, AS5, 8,
    AS5, 8, GS5, 8, FS5, 16, GS5, -8, FS5, 16, F5, 2,
    F5, 4, DS5, -8, F5, 16, FS5, 2, F5, 8, DS5, 8,
    CS5, -8, DS5, 16, F5, 2, DS5, 8, CS5, 8, C5, -8,
    D5, 16, E5, 2, G5, 8, F5, 16, F4, 16, F4, 16,
    F4, 16, F4, 16, F4, 16, F4, 16, F4, 16, F4, 8,
    F4, 16, F4, 8, AS4, 4, F4, -4, AS4, 8, AS4, 16,
    C5, 16, D5, 16, DS5, 16, F5, 2, F5, 8, F5, 8,
    F5, 8, FS5, 16, GS5, 16, AS5, -2, CS6, 4, C6, 4,
    A5, 2, F5, 4, FS5, -2, AS5, 4, A5, 4, F5, 2,
    F5, 4, FS5, -2, AS5, 4, A5, 4, F5, 2, D5, 4,
    DS5, -2, FS5, 4, F5, 4, CS5, 2, AS4, 4, C5, -8,
    D5, 16, E5, 2, G5, 8, F5, 16, F4, 16, F4, 16,
    F4, 16, F4, 16, F4, 16, F4, 16, F4, 16, F4, 8,
    F4, 16, F4, 8,
];

#[rustfmt::skip]
const GAME_OF_THRONES: &[i32] = &[
    G4, 8, C4, 8, DS4, 16, F4, 16, G4, 8, C4, 8,
    DS4, 16, F4, 16, G4, 8, C4, 8, DS4, 16, F4, 16,
    G4, 8, C4, 8, DS4, 16, F4, 16, G4, 8, C4, 8,
    E4, 16, F4, 16, G4, 8, C4, 8, E4, 16, F4, 16,
    G4, 8, C4, 8, E4, 16, F4, 16, G4, 8, C4, 8,
    E4, 16, F4, 16, G4, -4, C4, -4, DS4, 16, F4, 16,
    G4, 4, C4, 4, DS4, 16, F4, 16, D4, -1, F4, -4,
    AS3, -4, DS4, 16, D4, 16, F4, 4, AS3, -4, DS4, 16,
    D4, 16, C4, -1, G4, -4, C4, -4, DS4, 16, F4, 16,
    G4, 4, C4, 4, DS4, 16, F4, 16, D4, -1, F4, -4,
    AS3, -4, DS4, 16, D4, 16, F4, 4, AS3, -4, DS4, 16,
    D4, 16, C4, -1, G4, -4, C4, -4, DS4, 16, F4, 16,
    G4, 4, C4, 4, DS4, 16, F4, 16, D4, -2, F4, -4,
    AS3, -4, D4, -8, DS4, -8, D4, -8, AS3, -8, C4, -1,
    C5, -2, AS4, -2, C4, -2, G4, -2, DS4, -2, DS4, -4,
    F4, -4, G4, -1, C5, -2, AS4, -2, C4, -2, G4, -2,
    DS4, -2, DS4, -4, D4, -4, C5, 8, G4, 8, GS4, 16,
    AS4, 16, C5, 8, G4, 8, GS4, 16, AS4, 16, C5, 8,
    G4, 8, GS4, 16, AS4, 16, C5, 8, G4, 8, GS4, 16,
    AS4, 16, REST, 4, GS5, 16, AS5, 16, C6, 8, G5, 8,
    GS5, 16, AS5, 16, C6, 8, G5, 16, GS5, 16, AS5, 16,
    C6, 8, G5, 8, GS5, 16, AS5, 16,
];

#[rustfmt::skip]
const THE_LION_SLEEPS_TONIGHT: &[i32] = &[
    F4, 4, G4, 4, A4, 8, G4, 4, A4, 8, AS4, 4,
    A4, 4, G4, 8, F4, 4, G4, 8, A4, 4, C4, 8,
    C4, 4, C4, 8, C4, 4, C4, 1, F4, 4, G4, 4,
    A4, 8, G4, 4, A4, 8, AS4, 4, A4, 4, G4, 8,
    F4, 4, G4, 8, A4, 4, C4, 8, C4, 4, C4, 8,
    C4, 4, C4, -2, REST, -8, A4, 16, A4, -8, A4, 16,
    A4, -8, A4, 16, A4, -8, A4, 16, A4, -8, A4, 16,
    AS4, -8, AS4, 16, AS4, -8, AS4, 16, AS4, -8, AS4, 16,
    AS4, -8, AS4, 16, A4, -8, A4, 16, A4, -8, A4, 16,
    A4, -8, A4, 16, A4, -8, A4, 16, G4, -8, G4, 16,
    G4, -8, G4, 16, G4, -8, G4, 16, G4, -8, G4, 16,
    A4, -8, A4, 16, A4, -8, A4, 16, A4, -8, A4, 16,
    A4, -8, A4, 16, AS4, -8, AS4, 16, AS4, -8, AS4, 16,
    AS4, -8, AS4, 16, AS4, -8, AS4, 16, A4, -8, A4, 16,
    A4, -8, A4, 16, A4, -8, A4, 16, A4, -8, A4, 16,
    G4, -8, G4, 16, G4, -8, G4, 16, G4, -8, G4, 16,
    G4, -8, G4, 16, F4, 4, G4, 4, A4, 8, G4, 4,
    A4, 8, AS4, 4, A4, 4, G4, 8, F4, 4, G4, 8,
    A4, 4, G4, 4, F4, 4, A4, 4, G4, 1, C5, 4,
    A4, 4, G4, 8, A4, 4, C5, 8, AS4, 4, A4, 4,
    G4, 8, F4, 4, G4, 8, A4, 4, G4, 4, F4, 4,
    A4, 4, G4, 1, C5, 1, C5, 4, AS4, 8, C5, 8,
    AS4, 2, A4, 4, C4, 8, C4, 4, C4, 8, C4, 4,
    C4, 1, REST, 4, A4, 8, G4, 8, F4, 8, E4, 8,
    D4, 8, C4, 8, D4, 1, REST, 4, A4, 8, G4, 8,
    F4, 8, E4, 8, D4, 8, C4, 8, D4, 1, F4, 4,
    G4, 4, A4, 8, G4, 4, A4, 8, AS4, 4, A4, 4,
    G4, 8, F4, 4, G4, 8, A4, 4, G4, 4, F4, 4,
    A4, 4, G4, 1, C5, 4, A4, 4, G4, 8, A4, 4,
    C5, 8, AS4, 4, A4, 4, G4, 8, F4, 4, G4, 8,
    A4, 4, G4, 4, F4, 4, A4, 4, G4, 1, C5, 1,
    C5, 4, AS4, 8, C5, 8, AS4, 2, A4, 4, C4, 8,
    C4, 4, C4, 8, C4, 4, C4, 1, REST, 4, A4, 8,
    G4, 8, F4, 8, E4, 8, D4, 8, C4, 8, D4, 1,
    REST, 4, A4, 8, G4, 8, F4, 8, E4, 8, D4, 8,
    C4, 8, D4, 1, F4, 4, G4, 4, A4, 8, G4, 4,
    A4, 8, AS4, 4, A4, 4, G4, 8, F4, 4, G4, 8,
    A4, 4, C4, 8, C4, 4, C4, 8, C4, 4, C4, 1,
    F4, 4, G4, 4, A4, 8, G4, 4, A4, 8, AS4, 4,
    A4, 4, G4, 8, F4, 4, G4, 8, A4, 4, G4, 4,
    F4, 4, A4, 4, G4, 1, C5, 4, A4, 4, G4, 8,
    A4, 4, C5, 8, AS4, 4, A4, 4, G4, 8, F4, 4,
    G4, 8, A4, 4, G4, 4, F4, 4, A4, 4, G4, 1,
    C5, 1, C5, 4, AS4, 8, C5, 8, AS4, 2, A4, 4,
    C4, 8, C4, 4, C4, 8, C4, 4, C4, 1, REST, 4,
    A4, 8, G4, 8, F4, 8, E4, 8, D4, 8, C4, 8,
    D4, 1, REST, 4, A4, 8, G4, 8, F4, 8, E4, 8,
    D4, 8, C4, 8, D4, 1, F4, 4, G4, 4, A4, 8,
    G4, 4, A4, 8, AS4, 4, A4, 4, G4, 8, F4, 4,
    G4, 8, A4, 4, C4, 8, C4, 4, C4, 8, C4, 4,
    C4, 1,
];

#[rustfmt::skip]
const NEVER_GONNA_GIVE_YOU_UP: &[i32] = &[
    D5, -4, E5, -4, A4, 4, E5, -4, FS5, -4, A5, 16,
    G5, 16, FS5, 8, D5, -4, E5, -4, A4, 2, A4, 16,
    A4, 16, B4, 16, D5, 8, D5, 16, D5, -4, E5, -4,
    A4, 4, E5, -4, FS5, -4, A5, 16, G5, 16, FS5, 8,
    D5, -4, E5, -4, A4, 2, A4, 16, A4, 16, B4, 16,
    D5, 8, D5, 16, REST, 4, B4, 8, CS5, 8, D5, 8,
    D5, 8, E5, 8, CS5, -8, B4, 16, A4, 2, REST, 4,
    REST, 8, B4, 8, B4, 8, CS5, 8, D5, 8, B4, 4,
    A4, 8, A5, 8, REST, 8, A5, 8, E5, -4, REST, 4,
    B4, 8, B4, 8, CS5, 8, D5, 8, B4, 8, D5, 8,
    E5, 8, REST, 8, REST, 8, CS5, 8, B4, 8, A4, -4,
    REST, 4, REST, 8, B4, 8, B4, 8, CS5, 8, D5, 8,
    B4, 8, A4, 4, E5, 8, E5, 8, E5, 8, FS5, 8,
    E5, 4, REST, 4, D5, 2, E5, 8, FS5, 8, D5, 8,
    E5, 8, E5, 8, E5, 8, FS5, 8, E5, 4, A4, 4,
    REST, 2, B4, 8, CS5, 8, D5, 8, B4, 8, REST, 8,
    E5, 8, FS5, 8, E5, -4, A4, 16, B4, 16, D5, 16,
    B4, 16, FS5, -8, FS5, -8, E5, -4, A4, 16, B4, 16,
    D5, 16, B4, 16, E5, -8, E5, -8, D5, -8, CS5, 16,
    B4, -8, A4, 16, B4, 16, D5, 16, B4, 16, D5, 4,
    E5, 8, CS5, -8, B4, 16, A4, 8, A4, 8, A4, 8,
    E5, 4, D5, 2, A4, 16, B4, 16, D5, 16, B4, 16,
    FS5, -8, FS5, -8, E5, -4, A4, 16, B4, 16, D5, 16,
    B4, 16, A5, 4, CS5, 8, D5, -8, CS5, 16, B4, 8,
    A4, 16, B4, 16, D5, 16, B4, 16, D5, 4, E5, 8,
    CS5, -8, B4, 16, A4, 4, A4, 8, E5, 4, D5, 2,
    REST, 4, REST, 8, B4, 8, D5, 8, B4, 8, D5, 8,
    E5, 4, REST, 8, REST, 8, CS5, 8, B4, 8, A4, -4,
    REST, 4, REST, 8, B4, 8, B4, 8, CS5, 8, D5, 8,
    B4, 8, A4, 4, REST, 8, A5, 8, A5, 8, E5, 8,
    FS5, 8, E5, 8, D5, 8, REST, 8, A4, 8, B4, 8,
    CS5, 8, D5, 8, B4, 8, REST, 8, CS5, 8, B4, 8,
    A4, -4, REST, 4, B4, 8, B4, 8, CS5, 8, D5, 8,
    B4, 8, A4, 4, REST, 8, REST, 8, E5, 8, E5, 8,
    FS5, 4, E5, -4, D5, 2, D5, 8, E5, 8, FS5, 8,
    E5, 4, E5, 8, E5, 8, FS5, 8, E5, 8, A4, 8,
    A4, 4, REST, -4, A4, 8, B4, 8, CS5, 8, D5, 8,
    B4, 8, REST, 8, E5, 8, FS5, 8, E5, -4, A4, 16,
    B4, 16, D5, 16, B4, 16, FS5, -8, FS5, -8, E5, -4,
    A4, 16, B4, 16, D5, 16, B4, 16, E5, -8, E5, -8,
    D5, -8, CS5, 16, B4, 8, A4, 16, B4, 16, D5, 16,
    B4, 16, D5, 4, E5, 8, CS5, -8, B4, 16, A4, 4,
    A4, 8, E5, 4, D5, 2, A4, 16, B4, 16, D5, 16,
    B4, 16, FS5, -8, FS5, -8, E5, -4, A4, 16, B4, 16,
    D5, 16, B4, 16, A5, 4, CS5, 8, D5, -8, CS5, 16,
    B4, 8, A4, 16, B4, 16, D5, 16, B4, 16, D5, 4,
    E5, 8, CS5, -8, B4, 16, A4, 4, A4, 8, E5, 4,
    D5, 2, A4, 16, B4, 16, D5, 16, B4, 16, FS5, -8,
    FS5, -8, E5, -4, A4, 16, B4, 16, D5, 16, B4, 16,
    A5, 4, CS5, 8, D5, -8, CS5, 16, B4, 8, A4, 16,
    B4, 16, D5, 16, B4, 16, D5, 4, E5, 8, CS5, -8,
    B4, 16, A4, 4, A4, 8, E5, 4, D5, 2, A4, 16,
    B4, 16, D5, 16, B4, 16, FS5, -8, FS5, -8, E5, -4,
    A4, 16, B4, 16, D5, 16, B4, 16, A5, 4, CS5, 8,
    D5, -8, CS5, 16, B4, 8, A4, 16, B4, 16, D5, 16,
    B4, 16, D5, 4, E5, 8, CS5, -8, B4, 16, A4, 4,
    A4, 8, E5, 4, D5, 2, REST, 4,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_order() {
        let names: Vec<String> = builtin_songs().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "Take on Me",
                "Star Wars",
                "Zelda Theme",
                "Game of Thrones",
                "The Lion Sleeps Tonight",
                "Never Gonna Give You Up",
            ]
        );
    }

    #[test]
    fn test_note_counts() {
        let counts: Vec<usize> = builtin_songs().iter().map(|s| s.notes.len()).collect();
        assert_eq!(counts, [96, 88, 110, 130, 301, 340]);
    }

    #[test]
    fn test_every_table_decodes() {
        for song in builtin_songs() {
            let timeline = song.timeline().unwrap();
            assert_eq!(timeline.len(), song.notes.len());
            assert!(timeline.iter().all(|&(_, ms)| ms > 0), "{}", song.name);
        }
    }

    #[test]
    fn test_take_on_me_opening() {
        let song = take_on_me();
        assert_eq!(song.whole_note_ms().unwrap(), 1000.0);
        let timeline = song.timeline().unwrap();
        assert_eq!(
            &timeline[..5],
            &[(740, 125), (740, 125), (587, 125), (494, 125), (0, 125)]
        );
    }

    #[test]
    fn test_find_song() {
        assert_eq!(find_song("zelda theme").unwrap().tempo_bpm, 120);
        assert!(matches!(
            find_song("Darude Sandstorm"),
            Err(Error::SongNotFound(_))
        ));
    }
}

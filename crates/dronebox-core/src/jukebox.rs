//! Menu-driven jukebox on the controller display.
//!
//! A synchronous poll loop: every iteration reads the buttons, acts on press
//! edges only and redraws the menu when something changed. Playing a song
//! blocks the loop until it ends or L2 is held.
//!
//! Controls: L2 quit, R1/L1 next/previous song, R2 play, Up/Down previous/next page.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::config::JukeboxConfig;
use crate::driver::{Button, Drone};
use crate::error::Result;
use crate::input::Debouncer;
use crate::menu::{Paginator, PlaybackCursor};
use crate::music::{MelodyPlayer, PlaybackOutcome, Song};

pub const INSTRUCTIONS: [&str; 2] = ["L2 to quit, R2 to select", "L1 -, R1 +"];
pub const GOODBYE_TEXT: &str = "Goodbye!";

/// Draw multi-line text one line at a time, `spacing` pixels apart.
///
/// The display drops lines sent back to back, so `delay` is slept after
/// every line.
pub fn draw_lines<D: Drone + ?Sized>(
    drone: &mut D,
    text: &str,
    x: i32,
    y_start: i32,
    spacing: i32,
    delay: Duration,
) -> Result<()> {
    let mut y = y_start;
    for line in text.lines() {
        drone.draw_string(x, y, line)?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        y += spacing;
    }
    Ok(())
}

/// Result of one poll iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Continue,
    Quit,
}

pub struct Jukebox<D, R> {
    drone: D,
    songs: Vec<Song>,
    cursor: PlaybackCursor,
    debouncer: Debouncer,
    player: MelodyPlayer<R>,
    config: JukeboxConfig,
}

impl<D: Drone, R: Rng> Jukebox<D, R> {
    pub fn new(drone: D, songs: Vec<Song>, config: JukeboxConfig, rng: R) -> Self {
        let paginator =
            Paginator::new(songs.len(), config.first_page_songs, config.songs_per_page);
        Self {
            drone,
            songs,
            cursor: PlaybackCursor::new(paginator),
            debouncer: Debouncer::new(),
            player: MelodyPlayer::new(rng).with_stop_button(Button::L2),
            config,
        }
    }

    pub fn cursor(&self) -> &PlaybackCursor {
        &self.cursor
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn selected(&self) -> Option<&Song> {
        self.songs.get(self.cursor.item_index)
    }

    pub fn drone(&self) -> &D {
        &self.drone
    }

    pub fn drone_mut(&mut self) -> &mut D {
        &mut self.drone
    }

    pub fn into_drone(self) -> D {
        self.drone
    }

    /// Draw the menu, then poll until L2 is pressed or `keep_running`
    /// returns false. `keep_running` is called before every poll and may
    /// pace the loop.
    pub fn run<F: FnMut() -> bool>(&mut self, mut keep_running: F) -> Result<()> {
        info!("Jukebox ready with {} songs", self.songs.len());
        self.draw_display()?;

        while keep_running() {
            if self.poll()? == PollOutcome::Quit {
                info!("Jukebox closed");
                return Ok(());
            }
        }
        Ok(())
    }

    /// One iteration of the menu loop
    pub fn poll(&mut self) -> Result<PollOutcome> {
        if self.debouncer.poll(&mut self.drone, Button::L2) {
            self.drone.clear_screen()?;
            self.drone.draw_string(0, 5, GOODBYE_TEXT)?;
            return Ok(PollOutcome::Quit);
        }

        if self.debouncer.poll(&mut self.drone, Button::R1) {
            self.cursor.next_item();
            debug!("Selected song {}", self.cursor.item_index + 1);
            self.draw_display()?;
        }

        if self.debouncer.poll(&mut self.drone, Button::L1) {
            self.cursor.previous_item();
            debug!("Selected song {}", self.cursor.item_index + 1);
            self.draw_display()?;
        }

        if self.debouncer.poll(&mut self.drone, Button::R2) {
            self.play_selected()?;
            self.draw_display()?;
        }

        if self.debouncer.poll(&mut self.drone, Button::Up) {
            self.cursor.previous_page();
            debug!("Showing page {}", self.cursor.page_index + 1);
            self.draw_display()?;
        }

        if self.debouncer.poll(&mut self.drone, Button::Down) {
            self.cursor.next_page();
            debug!("Showing page {}", self.cursor.page_index + 1);
            self.draw_display()?;
        }

        Ok(PollOutcome::Continue)
    }

    /// Play the selected song on the drone buzzer
    pub fn play_selected(&mut self) -> Result<Option<PlaybackOutcome>> {
        let Some(song) = self.songs.get(self.cursor.item_index) else {
            return Ok(None);
        };

        info!("Now playing: {}", song.name);
        self.drone.clear_screen()?;
        draw_lines(
            &mut self.drone,
            &format!("Now playing: {}\nHold {} to stop", song.name, self.player.stop_button()),
            0,
            0,
            self.config.line_spacing,
            self.config.line_delay(),
        )?;

        let outcome = self.player.play(&mut self.drone, song)?;
        if outcome != PlaybackOutcome::Finished {
            // The stop press must not also quit the jukebox
            self.debouncer.suppress(self.player.stop_button());
        }
        Ok(Some(outcome))
    }

    /// Song list for the current page; page 0 leads with the instructions
    pub fn menu_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        if self.cursor.page_index == 0 {
            lines.extend(INSTRUCTIONS.iter().map(|s| s.to_string()));
        }
        for i in self.cursor.visible_range() {
            lines.push(format!("{}: {}", i + 1, self.songs[i].name));
        }
        lines.join("\n")
    }

    /// Page counter and current selection, shown under every page
    pub fn footer_text(&self) -> String {
        let name = self.selected().map(|s| s.name.as_str()).unwrap_or("");
        format!(
            "^ v pages ({}/{})\nCurrent selection: {}\n    {}",
            self.cursor.page_index + 1,
            self.cursor.total_pages(),
            self.cursor.item_index + 1,
            name
        )
    }

    pub fn draw_display(&mut self) -> Result<()> {
        let menu = self.menu_text();
        let footer = self.footer_text();
        let spacing = self.config.line_spacing;
        let delay = self.config.line_delay();

        self.drone.clear_screen()?;
        draw_lines(&mut self.drone, &menu, 0, 0, spacing, delay)?;
        draw_lines(&mut self.drone, &footer, 0, self.config.footer_y, spacing, delay)?;
        Ok(())
    }
}

//! Terminal rendering of the flight game.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use dronebox_core::flight::{Flight, Screen, Sprite};

const CLOUD: char = '░';

/// Terminal area the game screen is scaled onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    fn col(&self, screen: &Screen, x: f64) -> f64 {
        (x - screen.left()) / screen.width * f64::from(self.cols)
    }

    fn row(&self, screen: &Screen, y: f64) -> f64 {
        (screen.top() - y) / screen.height * f64::from(self.rows)
    }

    /// Cell holding a world position, if it is on screen
    pub fn cell(&self, screen: &Screen, x: f64, y: f64) -> Option<(u16, u16)> {
        let col = self.col(screen, x).floor();
        let row = self.row(screen, y).floor();
        let on_screen = (0.0..f64::from(self.cols)).contains(&col)
            && (0.0..f64::from(self.rows)).contains(&row);
        on_screen.then_some((col as u16, row as u16))
    }

    /// Visible cells covered by a sprite as `(col_start, row_start, col_end, row_end)`,
    /// end-exclusive
    pub fn cover(&self, screen: &Screen, sprite: &Sprite) -> Option<(u16, u16, u16, u16)> {
        let clamp_col = |c: f64| c.clamp(0.0, f64::from(self.cols)) as u16;
        let clamp_row = |r: f64| r.clamp(0.0, f64::from(self.rows)) as u16;

        let col_start = clamp_col(self.col(screen, sprite.left()).floor());
        let col_end = clamp_col(self.col(screen, sprite.right()).ceil());
        let row_start = clamp_row(self.row(screen, sprite.top()).floor());
        let row_end = clamp_row(self.row(screen, sprite.bottom()).ceil());

        (col_start < col_end && row_start < row_end)
            .then_some((col_start, row_start, col_end, row_end))
    }
}

/// Glyph for the player, tilted by the sprite angle
pub fn player_glyph(angle: f64) -> char {
    if angle > 2.0 {
        '\\'
    } else if angle < -2.0 {
        '/'
    } else {
        '^'
    }
}

/// Redraw the whole scene: clouds, player, score text and the controller LED
pub fn render<W: Write, D>(out: &mut W, flight: &Flight<D>, viewport: Viewport) -> io::Result<()> {
    let screen = flight.screen();
    queue!(out, Clear(ClearType::All))?;

    for cloud in flight.clouds() {
        let Some((col_start, row_start, col_end, row_end)) = viewport.cover(screen, &cloud.sprite)
        else {
            continue;
        };
        let band: String = std::iter::repeat_n(CLOUD, usize::from(col_end - col_start)).collect();
        for row in row_start..row_end {
            queue!(out, MoveTo(col_start, row), Print(&band))?;
        }
    }

    let player = &flight.player().sprite;
    if let Some((col, row)) = viewport.cell(screen, player.x, player.y) {
        queue!(out, MoveTo(col, row), Print(player_glyph(player.angle)))?;
    }

    let led = flight.controller_led();
    queue!(
        out,
        MoveTo(0, 0),
        SetForegroundColor(Color::Rgb {
            r: led.r,
            g: led.g,
            b: led.b
        }),
        Print("●"),
        ResetColor,
        Print(" "),
        Print(flight.score_text())
    )?;
    out.flush()
}

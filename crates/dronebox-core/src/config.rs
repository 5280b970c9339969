//! Tuning for both applications, loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so a file only needs the values it
//! overrides.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Default config file name
pub const CONFIG_FILE: &str = "dronebox.toml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub flight: FlightConfig,
    pub jukebox: JukeboxConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved config to {}", path.as_ref().display());
        Ok(())
    }
}

/// Flight game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Scale applied to the right stick x sample
    pub joystick_compensation_x: f64,
    /// Scale applied to the left stick y sample
    pub joystick_compensation_y: f64,
    pub x_decel: f64,
    pub y_decel: f64,
    /// Scaled vertical samples at or below this magnitude count as no input
    pub y_dead_zone: f64,
    pub initial_throttle: f64,
    /// Seconds between cloud spawns at startup
    pub spawn_wait_secs: f64,
    /// Cloud speed in pixels per frame at startup
    pub cloud_speed: f64,
    /// Spawn wait above which the game starts getting harder
    pub difficulty_threshold_secs: f64,
    pub wait_multiplier: f64,
    pub speed_multiplier: f64,
    /// Cloud scale range in percent, inclusive
    pub cloud_size_min: u32,
    pub cloud_size_max: u32,
    pub cloud_width: f64,
    pub cloud_height: f64,
    pub player_width: f64,
    pub player_height: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    /// Gap between the top edge and the score text
    pub top_padding: f64,
    pub frame_rate: u32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            joystick_compensation_x: 0.075,
            joystick_compensation_y: 0.0125,
            x_decel: 0.25,
            y_decel: 0.05,
            y_dead_zone: 0.25,
            initial_throttle: 50.0,
            spawn_wait_secs: 3.0,
            cloud_speed: 4.0,
            difficulty_threshold_secs: 3.0,
            wait_multiplier: 0.75,
            speed_multiplier: 1.25,
            cloud_size_min: 75,
            cloud_size_max: 100,
            cloud_width: 120.0,
            cloud_height: 70.0,
            player_width: 48.0,
            player_height: 24.0,
            screen_width: 800.0,
            screen_height: 600.0,
            top_padding: 15.0,
            frame_rate: 60,
        }
    }
}

impl FlightConfig {
    pub fn builder() -> FlightConfigBuilder {
        FlightConfigBuilder::default()
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }
}

/// Builder for FlightConfig
#[derive(Debug, Clone, Default)]
pub struct FlightConfigBuilder {
    screen: Option<(f64, f64)>,
    spawn_wait_secs: Option<f64>,
    cloud_speed: Option<f64>,
    cloud_size: Option<(u32, u32)>,
    frame_rate: Option<u32>,
}

impl FlightConfigBuilder {
    pub fn screen(mut self, width: f64, height: f64) -> Self {
        self.screen = Some((width, height));
        self
    }

    pub fn spawn_wait_secs(mut self, secs: f64) -> Self {
        self.spawn_wait_secs = Some(secs);
        self
    }

    pub fn cloud_speed(mut self, speed: f64) -> Self {
        self.cloud_speed = Some(speed);
        self
    }

    /// Cloud scale range in percent
    pub fn cloud_size(mut self, min: u32, max: u32) -> Self {
        self.cloud_size = Some((min, max.max(min)));
        self
    }

    pub fn frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = Some(fps);
        self
    }

    pub fn build(self) -> FlightConfig {
        let mut config = FlightConfig::default();
        if let Some((width, height)) = self.screen {
            config.screen_width = width;
            config.screen_height = height;
        }
        if let Some((min, max)) = self.cloud_size {
            config.cloud_size_min = min;
            config.cloud_size_max = max;
        }
        config.spawn_wait_secs = self.spawn_wait_secs.unwrap_or(config.spawn_wait_secs);
        config.cloud_speed = self.cloud_speed.unwrap_or(config.cloud_speed);
        config.frame_rate = self.frame_rate.unwrap_or(config.frame_rate);
        config
    }
}

/// Jukebox menu layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JukeboxConfig {
    /// Songs listed on the first page, below the instructions
    pub first_page_songs: usize,
    /// Songs listed on every other page
    pub songs_per_page: usize,
    /// Vertical distance between display lines, in pixels
    pub line_spacing: i32,
    /// Pause after each drawn line; the display drops lines without it
    pub line_delay_ms: u64,
    /// Display row where the page/selection footer starts
    pub footer_y: i32,
}

impl Default for JukeboxConfig {
    fn default() -> Self {
        Self {
            first_page_songs: 3,
            songs_per_page: 6,
            line_spacing: 8,
            line_delay_ms: 50,
            footer_y: 40,
        }
    }
}

impl JukeboxConfig {
    pub fn line_delay(&self) -> Duration {
        Duration::from_millis(self.line_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.flight.x_decel, 0.25);
        assert_eq!(config.flight.y_decel, 0.05);
        assert_eq!(config.flight.initial_throttle, 50.0);
        assert_eq!(config.jukebox.first_page_songs, 3);
        assert_eq!(config.jukebox.songs_per_page, 6);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [flight]
            cloud_speed = 6.0

            [jukebox]
            line_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.flight.cloud_speed, 6.0);
        assert_eq!(config.flight.spawn_wait_secs, 3.0);
        assert_eq!(config.jukebox.line_delay_ms, 0);
        assert_eq!(config.jukebox.line_spacing, 8);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.flight = FlightConfig::builder().screen(640.0, 480.0).build();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = Config::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[flight]\ncloud_speed = \"fast\"\n").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(crate::error::Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_builder() {
        let config = FlightConfig::builder()
            .spawn_wait_secs(4.0)
            .cloud_speed(2.0)
            .cloud_size(90, 80)
            .frame_rate(30)
            .build();
        assert_eq!(config.spawn_wait_secs, 4.0);
        assert_eq!(config.cloud_speed, 2.0);
        assert_eq!((config.cloud_size_min, config.cloud_size_max), (90, 90));
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.x_decel, 0.25);
    }

    #[test]
    fn test_frame_interval() {
        let config = FlightConfig::builder().frame_rate(50).build();
        assert_eq!(config.frame_interval(), Duration::from_millis(20));
    }
}

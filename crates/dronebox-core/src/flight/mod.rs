//! Cloud-dodging flight game.
//!
//! The player flies a drone sprite with the controller sticks: the right
//! stick steers horizontally and the left stick sets the throttle, which maps
//! to height on screen. Clouds cross the screen from either side; each one
//! that leaves the far edge scores a point and touching one ends the game
//! until R1 or L1 is pressed.
//!
//! All mutable game state lives in [`Flight`]. The per-frame routines in
//! [`tasks`] and the [`SoundTask`] run over it under a [`Scheduler`], wired
//! together by [`FlightGame`].

mod sound;
mod stage;
mod state;
pub mod tasks;

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::config::FlightConfig;
use crate::driver::{Button, Drone, LedColor};
use crate::error::Result;
use crate::input::Debouncer;
use crate::motion::MotionAxis;
use crate::sched::Scheduler;

pub use sound::{Sound, SoundMailbox, SoundTask, TONE_DURATION};
pub use stage::{Screen, Sprite};
pub use state::{GameState, GameStateMachine};
pub use tasks::{CloudMover, CloudSpawner, ControlsTask};

pub const START_TEXT: &str = "Avoid the clouds!";
pub const GAME_OVER_TEXT: &str = "You lost :(     (Press R1 or L1 to try again)";

/// Buttons that restart the game after a loss
pub const RESET_BUTTONS: [Button; 2] = [Button::R1, Button::L1];

/// The player's drone: sprite plus its two smoothed axes
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub sprite: Sprite,
    /// Horizontal position in screen coordinates
    pub x_axis: MotionAxis,
    /// Throttle percentage in `[0, 100]`
    pub throttle: MotionAxis,
}

impl Player {
    fn new(config: &FlightConfig, screen: &Screen) -> Self {
        let x_axis = MotionAxis::new(0.0, config.x_decel, 0.0, screen.left(), screen.right());
        let throttle = MotionAxis::new(
            config.initial_throttle,
            config.y_decel,
            config.y_dead_zone,
            0.0,
            100.0,
        );
        let sprite = Sprite::new(
            x_axis.position,
            screen.throttle_to_y(throttle.position),
            config.player_width,
            config.player_height,
        );
        Self {
            sprite,
            x_axis,
            throttle,
        }
    }

    /// Advance both axes by one frame of scaled stick input
    fn fly(&mut self, x_sample: f64, y_sample: f64, screen: &Screen) {
        self.sprite.x = self.x_axis.step(x_sample);
        self.sprite.angle = self.x_axis.velocity * -2.0;

        let throttle = self.throttle.step(y_sample);
        self.sprite.y = screen.throttle_to_y(throttle);
    }
}

/// A cloud crossing the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub sprite: Sprite,
    /// Pixels per frame; positive moves right
    pub speed: f64,
}

impl Cloud {
    /// Whether the cloud has travelled past the edge it is heading for
    pub fn has_left(&self, screen: &Screen) -> bool {
        (self.speed < 0.0 && self.sprite.x < screen.left() - self.sprite.width)
            || (self.speed > 0.0 && self.sprite.x > screen.right() + self.sprite.width)
    }
}

/// Spawn pacing; ramps up once the wait exceeds the configured threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub wait_secs: f64,
    pub cloud_speed: f64,
}

impl Difficulty {
    fn new(config: &FlightConfig) -> Self {
        Self {
            wait_secs: config.spawn_wait_secs,
            cloud_speed: config.cloud_speed,
        }
    }

    fn ramp(&mut self, config: &FlightConfig) {
        if self.wait_secs > config.difficulty_threshold_secs {
            self.wait_secs *= config.wait_multiplier;
            self.cloud_speed = (self.cloud_speed * config.speed_multiplier).ceil();
            debug!(
                "Difficulty up: wait {:.2}s, speed {}",
                self.wait_secs, self.cloud_speed
            );
        }
    }
}

/// Game state shared by the per-frame tasks
pub struct Flight<D> {
    pub drone: D,
    config: FlightConfig,
    screen: Screen,
    machine: GameStateMachine,
    player: Player,
    clouds: Vec<Cloud>,
    score: u32,
    score_text: String,
    controller_led: LedColor,
    difficulty: Difficulty,
    pub(crate) mailbox: SoundMailbox,
    debouncer: Debouncer,
}

impl<D: Drone> Flight<D> {
    /// Create the game in its startup state
    pub fn new(drone: D, config: FlightConfig) -> Result<Self> {
        let screen = Screen::new(config.screen_width, config.screen_height);
        let mut flight = Self {
            drone,
            player: Player::new(&config, &screen),
            difficulty: Difficulty::new(&config),
            config,
            screen,
            machine: GameStateMachine::new(),
            clouds: Vec::new(),
            score: 0,
            score_text: String::new(),
            controller_led: LedColor::IDLE_BLUE,
            mailbox: SoundMailbox::new(),
            debouncer: Debouncer::new(),
        };
        flight.reset()?;
        Ok(flight)
    }

    /// Put score, drone, clouds, pacing and the LED back to startup values
    pub fn reset(&mut self) -> Result<()> {
        self.player = Player::new(&self.config, &self.screen);
        self.clouds.clear();
        self.difficulty = Difficulty::new(&self.config);
        self.score = 0;
        self.score_text = START_TEXT.to_string();
        self.set_controller_led(LedColor::IDLE_BLUE)?;
        Ok(())
    }

    /// Per-frame input routine.
    ///
    /// While the game is over only the reset buttons are honoured.
    pub fn update_controls(&mut self) -> Result<()> {
        // Poll both reset buttons every frame so a press held through the
        // collision does not restart the game.
        let mut reset_pressed = false;
        for button in RESET_BUTTONS {
            reset_pressed |= self.debouncer.poll(&mut self.drone, button);
        }

        if !self.machine.is_playing() {
            if !reset_pressed || !self.machine.reset() {
                return Ok(());
            }
            info!("Restarting after game over (score was {})", self.score);
            self.reset()?;
        }

        let data = self.drone.joystick();
        let x_sample = f64::from(data.right_x()) * self.config.joystick_compensation_x;
        let y_sample = f64::from(data.left_y()) * self.config.joystick_compensation_y;
        self.player.fly(x_sample, y_sample, &self.screen);
        Ok(())
    }

    /// Spawn one cloud at a random height on a random side
    pub fn spawn_cloud<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let top = (self.screen.top() - self.config.top_padding) as i64;
        let bottom = self.screen.bottom() as i64;
        let y = rng.gen_range(bottom..=top.max(bottom)) as f64;

        let start_left = rng.gen_bool(0.5);
        let x = if start_left {
            self.screen.left()
        } else {
            self.screen.right()
        };

        let min_size = self.config.cloud_size_min;
        let size = rng.gen_range(min_size..=self.config.cloud_size_max.max(min_size));
        let scale = f64::from(size) / 100.0;
        let speed = self.difficulty.cloud_speed;

        let cloud = Cloud {
            sprite: Sprite::new(
                x,
                y,
                self.config.cloud_width * scale,
                self.config.cloud_height * scale,
            ),
            speed: if start_left { speed } else { -speed },
        };
        debug!("Spawned cloud at ({}, {}) speed {}", x, y, cloud.speed);
        self.clouds.push(cloud);
    }

    /// Ramp pacing if due and return the wait before the next spawn
    pub fn next_spawn_wait(&mut self) -> Duration {
        self.difficulty.ramp(&self.config);
        Duration::from_secs_f64(self.difficulty.wait_secs.max(0.0))
    }

    /// Per-frame cloud routine: move, score escaped clouds, detect collision
    pub fn move_clouds(&mut self) -> Result<()> {
        if !self.machine.is_playing() {
            return Ok(());
        }

        let mut index = 0;
        while index < self.clouds.len() {
            let cloud = &mut self.clouds[index];
            cloud.sprite.x += cloud.speed;

            if cloud.has_left(&self.screen) {
                self.clouds.remove(index);
                self.score += 1;
                self.score_text = format!("Score: {}", self.score);
                self.mailbox.post(Sound::Score);
                continue;
            }

            if cloud.sprite.is_touching(&self.player.sprite) {
                self.clouds.remove(index);
                self.game_over()?;
                return Ok(());
            }

            index += 1;
        }
        Ok(())
    }

    fn game_over(&mut self) -> Result<()> {
        if !self.machine.collide() {
            return Ok(());
        }
        info!("Game over with score {}", self.score);
        self.score_text = GAME_OVER_TEXT.to_string();
        self.set_controller_led(LedColor::ALERT_RED)?;
        self.mailbox.post(Sound::Failure);
        Ok(())
    }

    fn set_controller_led(&mut self, color: LedColor) -> Result<()> {
        self.drone.set_controller_led(color)?;
        self.controller_led = color;
        Ok(())
    }
}

impl<D> Flight<D> {
    pub fn state(&self) -> GameState {
        self.machine.state()
    }

    pub fn is_playing(&self) -> bool {
        self.machine.is_playing()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn controller_led(&self) -> LedColor {
        self.controller_led
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn pending_sound(&self) -> Option<Sound> {
        self.mailbox.peek()
    }
}

/// A flight game wired to its scheduler
pub struct FlightGame<D> {
    flight: Flight<D>,
    scheduler: Scheduler<Flight<D>>,
}

impl<D: Drone + 'static> FlightGame<D> {
    /// Build the game and register its routines in frame order:
    /// controls, cloud spawning, cloud movement, sound.
    pub fn new<R: Rng + 'static>(drone: D, config: FlightConfig, rng: R) -> Result<Self> {
        let flight = Flight::new(drone, config)?;
        let mut scheduler = Scheduler::new();
        scheduler.register(Box::new(ControlsTask));
        scheduler.register(Box::new(CloudSpawner::new(rng)));
        scheduler.register(Box::new(CloudMover));
        scheduler.register(Box::new(SoundTask::new()));
        Ok(Self { flight, scheduler })
    }

    /// Run every due routine once at frame clock time `now`
    pub fn frame(&mut self, now: Duration) -> Result<()> {
        self.scheduler.run_frame(&mut self.flight, now)
    }

    pub fn flight(&self) -> &Flight<D> {
        &self.flight
    }

    pub fn flight_mut(&mut self) -> &mut Flight<D> {
        &mut self.flight
    }

    pub fn into_drone(self) -> D {
        self.flight.drone
    }
}

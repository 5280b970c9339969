use strum::{Display, IntoStaticStr};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoStaticStr, Display)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
}

/// Playing/GameOver gate for the per-frame routines
#[derive(Debug, Clone, Default)]
pub struct GameStateMachine {
    state: GameState,
}

impl GameStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    /// Playing → GameOver. Returns false if the game was already over.
    pub fn collide(&mut self) -> bool {
        self.transition(GameState::Playing, GameState::GameOver)
    }

    /// GameOver → Playing. Returns false if the game was still running.
    pub fn reset(&mut self) -> bool {
        self.transition(GameState::GameOver, GameState::Playing)
    }

    fn transition(&mut self, from: GameState, to: GameState) -> bool {
        if self.state != from {
            return false;
        }
        debug!("Game state changed: {} -> {}", from, to);
        self.state = to;
        true
    }
}

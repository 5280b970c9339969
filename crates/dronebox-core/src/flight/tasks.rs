//! Per-frame routines of the flight game.
//!
//! Each routine checks the game state itself: while the game is over the
//! spawner and the mover do nothing and the controls only watch for a reset.

use std::time::Duration;

use rand::Rng;

use super::Flight;
use crate::driver::Drone;
use crate::error::Result;
use crate::sched::{Step, Task};

/// Reads the sticks and moves the player; handles the reset buttons
#[derive(Debug, Default)]
pub struct ControlsTask;

impl<D: Drone> Task<Flight<D>> for ControlsTask {
    fn name(&self) -> &'static str {
        "update_controls"
    }

    fn tick(&mut self, cx: &mut Flight<D>, _now: Duration) -> Result<Step> {
        cx.update_controls()?;
        Ok(Step::Yield)
    }
}

/// Spawns a cloud, then sleeps for the current spawn wait
pub struct CloudSpawner<R> {
    rng: R,
}

impl<R: Rng> CloudSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<D: Drone, R: Rng> Task<Flight<D>> for CloudSpawner<R> {
    fn name(&self) -> &'static str {
        "create_clouds"
    }

    fn tick(&mut self, cx: &mut Flight<D>, _now: Duration) -> Result<Step> {
        if !cx.is_playing() {
            return Ok(Step::Yield);
        }

        cx.spawn_cloud(&mut self.rng);
        Ok(Step::Sleep(cx.next_spawn_wait()))
    }
}

/// Moves clouds, scores escaped ones and detects collisions
#[derive(Debug, Default)]
pub struct CloudMover;

impl<D: Drone> Task<Flight<D>> for CloudMover {
    fn name(&self) -> &'static str {
        "update_clouds"
    }

    fn tick(&mut self, cx: &mut Flight<D>, _now: Duration) -> Result<Step> {
        cx.move_clouds()?;
        Ok(Step::Yield)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlightConfig;
    use crate::driver::MockDrone;
    use crate::flight::{Cloud, GameState, Sprite};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn flight() -> Flight<MockDrone> {
        Flight::new(MockDrone::new(), FlightConfig::default()).unwrap()
    }

    #[test]
    fn test_spawner_sleeps_for_wait() {
        let mut flight = flight();
        let mut spawner = CloudSpawner::new(StdRng::seed_from_u64(3));

        let step = spawner.tick(&mut flight, Duration::ZERO).unwrap();

        assert_eq!(step, Step::Sleep(Duration::from_secs(3)));
        assert_eq!(flight.clouds().len(), 1);
    }

    #[test]
    fn test_spawner_idle_after_game_over() {
        let mut flight = flight();
        flight.clouds.push(Cloud {
            sprite: Sprite::new(0.0, 0.0, 100.0, 60.0),
            speed: 4.0,
        });
        flight.move_clouds().unwrap();
        assert_eq!(flight.state(), GameState::GameOver);

        let mut spawner = CloudSpawner::new(StdRng::seed_from_u64(3));
        let step = spawner.tick(&mut flight, Duration::ZERO).unwrap();

        assert_eq!(step, Step::Yield);
        assert!(flight.clouds().is_empty());
    }

    #[test]
    fn test_task_names() {
        let names = [
            Task::<Flight<MockDrone>>::name(&ControlsTask),
            Task::<Flight<MockDrone>>::name(&CloudSpawner::new(StdRng::seed_from_u64(0))),
            Task::<Flight<MockDrone>>::name(&CloudMover),
        ];
        assert_eq!(names, ["update_controls", "create_clouds", "update_clouds"]);
    }
}

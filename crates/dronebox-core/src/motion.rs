//! Joystick motion smoothing.
//!
//! While a stick is pushed its scaled sample becomes the velocity directly.
//! Once released the velocity decays by a fixed step per frame and snaps to
//! zero when it is within two steps of rest, so it never changes sign.

/// Clamp `value` into `[min, max]`
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    min.max(max.min(value))
}

/// Next velocity for one frame.
///
/// A sample counts as input when `|sample| > dead_zone`; a dead zone of 0
/// means any non-zero sample drives the axis.
pub fn smooth_velocity(sample: f64, velocity: f64, decel: f64, dead_zone: f64) -> f64 {
    if sample.abs() > dead_zone {
        return sample;
    }

    if velocity.abs() < decel * 2.0 {
        0.0
    } else if velocity > 0.0 {
        velocity - decel
    } else {
        velocity + decel
    }
}

/// One smoothed, bounded axis of motion
#[derive(Debug, Clone, PartialEq)]
pub struct MotionAxis {
    pub position: f64,
    pub velocity: f64,
    pub decel_step: f64,
    pub dead_zone: f64,
    pub min: f64,
    pub max: f64,
}

impl MotionAxis {
    pub fn new(position: f64, decel_step: f64, dead_zone: f64, min: f64, max: f64) -> Self {
        Self {
            position: clamp(min, max, position),
            velocity: 0.0,
            decel_step,
            dead_zone,
            min,
            max,
        }
    }

    /// Apply one frame of input and return the new position
    pub fn step(&mut self, sample: f64) -> f64 {
        self.velocity = smooth_velocity(sample, self.velocity, self.decel_step, self.dead_zone);
        self.position = clamp(self.min, self.max, self.position + self.velocity);
        self.position
    }

    /// Put the axis back at rest at `position`
    pub fn reset(&mut self, position: f64) {
        self.velocity = 0.0;
        self.position = clamp(self.min, self.max, position);
    }
}

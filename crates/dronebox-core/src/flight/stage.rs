//! Screen geometry and sprites.
//!
//! World coordinates put the origin at the screen centre with y growing
//! upward, so the left edge is `-width / 2` and the top is `height / 2`.

/// Visible area of the game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn left(&self) -> f64 {
        -self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        -self.height / 2.0
    }

    /// Screen y for a throttle percentage: `bottom + height * throttle / 100`
    pub fn throttle_to_y(&self, throttle: f64) -> f64 {
        self.bottom() + self.height * throttle / 100.0
    }
}

/// Axis-aligned sprite, positioned by its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees; cosmetic, ignored by collision
    pub angle: f64,
}

impl Sprite {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            angle: 0.0,
        }
    }

    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y - self.height / 2.0
    }

    /// Whether the bounding boxes overlap
    pub fn is_touching(&self, other: &Sprite) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bottom() < other.top()
            && other.bottom() < self.top()
    }
}

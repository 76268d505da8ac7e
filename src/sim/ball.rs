//! The ball: motion, wall reflection, misses and serves
//!
//! Angles follow a clockwise convention in screen space (y grows downward):
//! the motion vector is `(sin θ, cos θ)`, so any angle in [0, π) moves the
//! ball to the right and any angle in [π, 2π) moves it to the left.

use std::f32::consts::PI;

use glam::Vec2;

use super::pause::PauseTimer;
use super::rng::RandomSource;
use super::score::Score;
use super::table::TableBox;
use super::Side;
use crate::consts::WALL_NOISE_SD;
use crate::{heading, wrap_radians};

/// Horizontal direction of travel, derived from the ball's angle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
}

impl Direction {
    /// `floor(θ / π)` over the wrapped angle: 0 is Right, 1 is Left
    pub fn from_angle(angle: f32) -> Self {
        if wrap_radians(angle) < PI {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// The side of the table this direction heads toward
    pub fn toward(self) -> Side {
        match self {
            Direction::Right => Side::Right,
            Direction::Left => Side::Left,
        }
    }
}

/// What happened to the ball during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    None,
    HitWall,
    Missed,
}

/// The ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    /// Current center
    pub pos: Vec2,
    /// Center before the last motion step; the travel segment ends at `pos`
    pub prev_pos: Vec2,
    /// Edge length of the (square) ball
    pub size: f32,
    angle: f32,
    direction: Direction,
    speed: f32,
    speed_increment: f32,
    serve_speed: f32,
    min: Vec2,
    max: Vec2,
    pause: PauseTimer,
    rng: RandomSource,
}

impl Ball {
    /// Create a ball with the base serve speed and a rightward opening angle
    pub fn new(
        size: f32,
        speed_increment: f32,
        serve_speed: f32,
        frame_quantum_us: f32,
        mut rng: RandomSource,
    ) -> Self {
        let angle = rng.uniform(0.333 * PI, 0.666 * PI);
        Self {
            pos: Vec2::ZERO,
            prev_pos: Vec2::ZERO,
            size,
            angle,
            direction: Direction::from_angle(angle),
            speed: serve_speed,
            speed_increment,
            serve_speed,
            min: Vec2::ZERO,
            max: Vec2::ZERO,
            pause: PauseTimer::new(frame_quantum_us),
            rng,
        }
    }

    /// Fit the ball's bounds to a table and drop it somewhere inside
    pub fn place_on(&mut self, table: &TableBox) {
        let half = 0.5 * self.size;
        let inner = table.shrink(half, half);
        self.min = Vec2::new(inner.left, inner.top);
        self.max = Vec2::new(inner.right, inner.bottom);
        self.pos = Vec2::new(
            self.rng.uniform(self.min.x, self.max.x),
            self.rng.uniform(self.min.y, self.max.y),
        );
        self.prev_pos = self.pos;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Set the heading; the direction always follows
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = wrap_radians(angle);
        self.direction = Direction::from_angle(self.angle);
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn speed_increment(&self) -> f32 {
        self.speed_increment
    }

    pub fn serve_speed(&self) -> f32 {
        self.serve_speed
    }

    /// Top-left limit for the ball's center
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Bottom-right limit for the ball's center
    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn pause(&mut self, duration_us: f32) {
        self.pause.pause(duration_us);
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub(crate) fn rng_mut(&mut self) -> &mut RandomSource {
        &mut self.rng
    }

    /// Advance one frame
    ///
    /// A miss is resolved before the wall check, and the wall check then runs
    /// on the freshly served position.
    pub fn update(&mut self, score: &mut Score) -> BallEvent {
        if self.pause.tick() {
            return BallEvent::None;
        }

        let mut event = BallEvent::None;
        self.prev_pos = self.pos;
        let mut next = self.prev_pos + self.speed * heading(self.angle);

        if next.x < self.min.x || next.x > self.max.x {
            let scorer = if next.x < self.min.x {
                Side::Right
            } else {
                Side::Left
            };
            score.increment(scorer);
            log::debug!(
                "Ball missed at ({:.1}, {:.1}), point to {:?} ({}-{})",
                next.x,
                next.y,
                scorer,
                score.left,
                score.right
            );
            event = BallEvent::Missed;
            next = self.serve();
        }

        if next.y < self.min.y || next.y > self.max.y {
            let noise = self.rng.normal(0.0, WALL_NOISE_SD);
            self.set_angle(PI - self.angle + noise);
            next.y = if next.y < self.min.y {
                self.min.y
            } else {
                self.max.y
            };
            event = BallEvent::HitWall;
        }

        self.pos = next;
        event
    }

    /// Pick a new angle, position and speed after a miss; returns the serve position
    ///
    /// The ball keeps heading the way it was going, angled into one of two
    /// bands; the same coin picks whether it starts near the top or bottom.
    fn serve(&mut self) -> Vec2 {
        let coin = self.rng.coin();
        let angle = match (self.direction, coin) {
            (Direction::Left, true) => self.rng.uniform(1.22 * PI, 1.33 * PI),
            (Direction::Left, false) => self.rng.uniform(1.66 * PI, 1.78 * PI),
            (Direction::Right, true) => self.rng.uniform(0.66 * PI, 0.78 * PI),
            (Direction::Right, false) => self.rng.uniform(0.22 * PI, 0.33 * PI),
        };
        self.set_angle(angle);
        self.speed = self.serve_speed;

        let span = self.max - self.min;
        let y_frac = if coin { 0.9 } else { 0.1 };
        let pos = Vec2::new(
            self.min.x + 0.5 * span.x,
            self.min.y + y_frac * span.y,
        );
        log::debug!(
            "Serving from ({:.1}, {:.1}) at {:.3} rad",
            pos.x,
            pos.y,
            self.angle
        );
        pos
    }
}

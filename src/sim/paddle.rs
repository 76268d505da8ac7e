//! Paddles and their collision test against the ball

use glam::Vec2;

use super::ball::Ball;
use super::collision::{DetectionZone, approaches_zone, intersect, return_angle, sector_index};
use super::pause::PauseTimer;
use super::rng::RandomSource;
use super::table::TableBox;
use crate::consts::{PADDLE_NOISE_SD, PADDLE_TRAVEL_INSET};
use crate::heading;

/// Side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Fixed paddle dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleGeometry {
    /// Thickness along x
    pub width: f32,
    /// Length along y
    pub length: f32,
    /// Size of the ball this paddle plays against
    pub ball_size: f32,
    /// Number of hit sectors (odd, so there is a center sector)
    pub sectors: u32,
}

/// A paddle; only its y moves
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Center of the paddle
    pub pos: Vec2,
    side: Side,
    geometry: PaddleGeometry,
    zone_offset: Vec2,
    min_y: f32,
    max_y: f32,
    pause: PauseTimer,
    rng: RandomSource,
}

impl Paddle {
    /// Place a paddle `rim_offset` inside the table's `side` edge, vertically centered
    pub fn new(
        side: Side,
        geometry: PaddleGeometry,
        table: &TableBox,
        rim_offset: f32,
        frame_quantum_us: f32,
        rng: RandomSource,
    ) -> Self {
        debug_assert!(geometry.sectors % 2 == 1, "paddle sector count must be odd");
        debug_assert!(geometry.length > 0.0, "paddle length must be positive");

        // The zone sits half a ball beyond the paddle face, on the side facing the ball
        let reach = 0.5 * (geometry.ball_size + geometry.width);
        let zone_offset = Vec2::new(
            match side {
                Side::Left => reach,
                Side::Right => -reach,
            },
            -0.5 * (geometry.length + geometry.ball_size),
        );
        let x = match side {
            Side::Left => table.left + rim_offset,
            Side::Right => table.right - rim_offset,
        };
        let inset = PADDLE_TRAVEL_INSET * table.height();

        Self {
            pos: Vec2::new(x, table.center().y),
            side,
            geometry,
            zone_offset,
            min_y: table.top + inset,
            max_y: table.bottom - inset,
            pause: PauseTimer::new(frame_quantum_us),
            rng,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn geometry(&self) -> &PaddleGeometry {
        &self.geometry
    }

    pub fn length(&self) -> f32 {
        self.geometry.length
    }

    /// Smallest y of the paddle body
    pub fn top(&self) -> f32 {
        self.pos.y - 0.5 * self.geometry.length
    }

    /// Upper travel limit for the center
    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    /// Lower travel limit for the center
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Middle of the travel range
    pub fn travel_mid(&self) -> f32 {
        0.5 * (self.min_y + self.max_y)
    }

    pub fn move_to(&mut self, y: f32) {
        self.pos.y = y;
    }

    /// Detection zone for the current position
    pub fn zone(&self) -> DetectionZone {
        let corner = self.pos + self.zone_offset;
        DetectionZone {
            x: corner.x,
            top: corner.y,
            length: self.geometry.length + self.geometry.ball_size,
        }
    }

    pub fn pause(&mut self, duration_us: f32) {
        self.pause.pause(duration_us);
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// Advance the pause countdown; true means skip this frame
    pub(crate) fn tick_pause(&mut self) -> bool {
        self.pause.tick()
    }

    pub(crate) fn rng_mut(&mut self) -> &mut RandomSource {
        &mut self.rng
    }

    /// Test the ball's last travel segment against this paddle and bounce it on a hit
    ///
    /// On a hit the ball gets its new angle and one speed increment, and is
    /// moved off the intersection by whatever part of this frame's travel it
    /// had left.
    pub fn collide(&self, ball: &mut Ball) -> bool {
        let zone = self.zone();
        if !approaches_zone(self.side, ball.direction(), ball.prev_pos, ball.pos, &zone) {
            return false;
        }
        let Some(hit) = intersect(ball.prev_pos, ball.pos, &zone) else {
            return false;
        };

        let sector = sector_index(
            hit.point.y,
            self.top(),
            self.geometry.length,
            self.geometry.sectors,
        );
        let noise = ball.rng_mut().normal(0.0, PADDLE_NOISE_SD);
        let angle = return_angle(self.side, ball.direction(), sector, noise);
        ball.set_angle(angle);
        ball.set_speed(ball.speed() + ball.speed_increment());
        ball.pos = hit.point + ball.speed() * hit.remaining * heading(ball.angle());

        log::debug!(
            "{:?} paddle hit at y={:.1} (sector {sector}), speed now {:.2}",
            self.side,
            hit.point.y,
            ball.speed()
        );
        true
    }
}

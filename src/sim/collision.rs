//! Paddle collision geometry and bounce response
//!
//! A paddle is represented for collision purposes by its detection zone: a
//! vertical segment one ball-size longer than the paddle, sitting half a ball
//! in front of the paddle face. The ball is treated as a point travelling
//! along the segment from its previous to its current center, so a hit is a
//! segment/segment intersection and fast balls cannot tunnel through.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use super::ball::Direction;
use super::Side;
use crate::coord_eq;
use crate::consts::{RETURN_ANGLE_MARGIN, SECTOR_DEFLECTION};

/// Virtual vertical segment the ball's center must cross to hit a paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionZone {
    /// Fixed x of the segment
    pub x: f32,
    /// Smallest y covered
    pub top: f32,
    /// Extent along y
    pub length: f32,
}

impl DetectionZone {
    pub fn bottom(&self) -> f32 {
        self.top + self.length
    }

    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom()
    }
}

/// Where the travel segment met the zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub point: Vec2,
    /// Share of the frame's travel left over after reaching `point`, in [0, 1]
    pub remaining: f32,
}

/// Cheap rejection: can a ball moving `direction` from `prev` to `cur` reach the zone of a paddle on `side`?
pub fn approaches_zone(
    side: Side,
    direction: Direction,
    prev: Vec2,
    cur: Vec2,
    zone: &DetectionZone,
) -> bool {
    match side {
        Side::Left => direction == Direction::Left && prev.x >= zone.x && cur.x <= zone.x,
        Side::Right => direction == Direction::Right && prev.x <= zone.x && cur.x >= zone.x,
    }
}

/// Intersect the travel segment with the zone
///
/// Callers must have checked [`approaches_zone`] first. A segment with no
/// horizontal extent is taken to overlap the zone: it enters at the top edge,
/// or at the bottom edge when it starts below the top.
pub fn intersect(prev: Vec2, cur: Vec2, zone: &DetectionZone) -> Option<Intersection> {
    let delta = cur - prev;

    if !coord_eq(delta.x, 0.0) {
        let slope = delta.y / delta.x;
        let y = slope * (zone.x - cur.x) + cur.y;
        if !zone.contains_y(y) {
            return None;
        }
        let remaining = ((cur.x - zone.x) / delta.x).clamp(0.0, 1.0);
        return Some(Intersection {
            point: Vec2::new(zone.x, y),
            remaining,
        });
    }

    // Colinear
    let y = if prev.y > zone.top {
        zone.bottom()
    } else {
        zone.top
    };
    let remaining = if !coord_eq(delta.y, 0.0) {
        ((cur.y - y) / delta.y).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Some(Intersection {
        point: Vec2::new(zone.x, y),
        remaining,
    })
}

/// Which of `sectors` equal bands along the paddle `y` falls in, centered on zero
///
/// With 15 sectors the result ranges over -7..=7. Points beyond the paddle ends
/// count as the outermost sector.
pub fn sector_index(y: f32, paddle_top: f32, paddle_length: f32, sectors: u32) -> i32 {
    let t = ((y - paddle_top) / paddle_length).clamp(0.0, 0.999);
    (t * sectors as f32).floor() as i32 - (sectors / 2) as i32
}

/// Outgoing angle for a ball hitting a paddle on `side` while moving `direction`
///
/// The return leaves perpendicular to the paddle from the center sector and
/// fans out toward the end that was hit. The result stays within the
/// half-turn heading away from the paddle, kept off its edges by
/// [`RETURN_ANGLE_MARGIN`].
pub fn return_angle(side: Side, direction: Direction, sector: i32, noise: f32) -> f32 {
    let half_turn = match direction {
        Direction::Right => PI,
        Direction::Left => 0.0,
    };
    let deflection = SECTOR_DEFLECTION * sector as f32;
    let angle = FRAC_PI_2
        + half_turn
        + match side {
            Side::Right => deflection,
            Side::Left => -deflection,
        }
        + noise;
    angle.clamp(
        half_turn + RETURN_ANGLE_MARGIN,
        half_turn + PI - RETURN_ANGLE_MARGIN,
    )
}

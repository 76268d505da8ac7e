//! Paddle controllers
//!
//! Both controllers pick a new paddle position for the frame and then run the
//! paddle's collision test. A paused paddle neither moves nor tests.

use super::ball::Ball;
use super::paddle::Paddle;
use crate::consts::{CATCH_WINDOW, COMPUTER_JITTER, COMPUTER_STEP, POINTER_RATIO};

/// Supplies the pointer's vertical screen coordinate for the current frame
pub trait PointerSource {
    fn pointer_y(&self) -> f32;
}

impl PointerSource for f32 {
    fn pointer_y(&self) -> f32 {
        *self
    }
}

/// Maps pointer movement onto the player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerController {
    pointer_min: f32,
    pointer_max: f32,
}

impl PlayerController {
    /// Calibrate against the middle band of a desktop `desktop_height` pixels tall
    pub fn new(desktop_height: f32) -> Self {
        Self::with_range(
            POINTER_RATIO * desktop_height,
            (1.0 - POINTER_RATIO) * desktop_height,
        )
    }

    /// Calibrate against an explicit pointer range
    pub fn with_range(pointer_min: f32, pointer_max: f32) -> Self {
        debug_assert!(pointer_min < pointer_max, "pointer range is empty");
        Self {
            pointer_min,
            pointer_max,
        }
    }

    /// Paddle center for a pointer position; the calibrated band spans the paddle's whole travel
    pub fn target_y(&self, pointer_y: f32, paddle: &Paddle) -> f32 {
        let ratio = (paddle.max_y() - paddle.min_y()) / (self.pointer_max - self.pointer_min);
        let pointer = pointer_y.clamp(self.pointer_min, self.pointer_max);
        (paddle.min_y() + ratio * (pointer - self.pointer_min)).clamp(paddle.min_y(), paddle.max_y())
    }

    /// Move the paddle to follow the pointer, then test for a hit
    pub fn update(
        &self,
        paddle: &mut Paddle,
        ball: &mut Ball,
        pointer: &impl PointerSource,
    ) -> bool {
        if paddle.tick_pause() {
            return false;
        }
        let y = self.target_y(pointer.pointer_y(), paddle);
        paddle.move_to(y);
        paddle.collide(ball)
    }
}

/// Reactive computer opponent
///
/// It chases the ball's current height rather than predicting where the ball
/// will arrive, moves a fixed jittered step per frame, and settles once the
/// ball is within the middle of the paddle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputerController {
    /// Nominal move per frame
    pub step: f32,
    /// Uniform jitter on each move, as a fraction of `step`
    pub jitter: f32,
    /// Half-width of the catch window, as a fraction of the paddle length
    pub catch_window: f32,
}

impl Default for ComputerController {
    fn default() -> Self {
        Self {
            step: COMPUTER_STEP,
            jitter: COMPUTER_JITTER,
            catch_window: CATCH_WINDOW,
        }
    }
}

impl ComputerController {
    /// Whether the ball is already lined up with the middle of the paddle
    pub fn is_caught(&self, paddle: &Paddle, ball: &Ball) -> bool {
        (ball.pos.y - paddle.pos.y).abs() < self.catch_window * paddle.length()
    }

    /// Height the paddle heads for: the ball while it approaches, mid-travel otherwise
    pub fn reference_y(&self, paddle: &Paddle, ball: &Ball) -> f32 {
        if ball.direction().toward() == paddle.side() {
            ball.pos.y
        } else {
            paddle.travel_mid()
        }
    }

    /// Paddle center for this frame
    ///
    /// A candidate step that would leave the travel range or pass the
    /// reference is dropped and the paddle stays where it is.
    pub fn target_y(&self, paddle: &mut Paddle, ball: &Ball) -> f32 {
        let current = paddle.pos.y;
        if self.is_caught(paddle, ball) {
            return current;
        }

        let reference = self.reference_y(paddle, ball);
        let jitter = self.step * paddle.rng_mut().uniform(-self.jitter, self.jitter);

        if reference < current {
            let candidate = current - self.step + jitter;
            if candidate > paddle.min_y() && reference < candidate {
                return candidate;
            }
        } else {
            let candidate = current + self.step + jitter;
            if candidate < paddle.max_y() && reference > candidate {
                return candidate;
            }
        }
        current
    }

    /// Move the paddle toward the ball, then test for a hit
    pub fn update(&self, paddle: &mut Paddle, ball: &mut Ball) -> bool {
        if paddle.tick_pause() {
            return false;
        }
        let y = self.target_y(paddle, ball);
        paddle.move_to(y);
        paddle.collide(ball)
    }
}

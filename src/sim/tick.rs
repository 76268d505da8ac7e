//! Per-frame simulation step
//!
//! One call per displayed frame. Order within a frame is fixed: the ball
//! moves, then the player's paddle tests it, then the computer's paddle, so
//! both paddles see the ball after this frame's motion.

use super::ball::{BallEvent, Direction};
use super::control::PointerSource;
use super::state::GameState;
use crate::consts::{HIT_PAUSE_US, MISS_PAUSE_US, SERVE_PAUSE_US};

/// Something a presentation layer may want to react to (sound, flash)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball returned by a paddle
    PaddleHit,
    /// Ball got past a paddle
    Miss,
}

/// Receives cues as they happen during a frame
pub trait EventSink {
    fn cue(&mut self, cue: Cue);
}

impl EventSink for () {
    fn cue(&mut self, _cue: Cue) {}
}

impl EventSink for Vec<Cue> {
    fn cue(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Outcome of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameEvents {
    pub ball: BallEvent,
    pub player_hit: bool,
    pub computer_hit: bool,
}

impl FrameEvents {
    pub fn any_hit(&self) -> bool {
        self.player_hit || self.computer_hit
    }
}

/// Advance the table by one frame
///
/// A paddle hit pauses the other paddle briefly. A miss pauses the ball; if
/// the ball was travelling left, the computer paddle is held a little longer
/// than the ball so the serve gets a head start.
pub fn tick(
    state: &mut GameState,
    pointer: &impl PointerSource,
    sink: &mut impl EventSink,
) -> FrameEvents {
    state.frame += 1;

    let ball_event = state.ball.update(&mut state.score);
    match ball_event {
        BallEvent::HitWall => sink.cue(Cue::WallHit),
        BallEvent::Missed => {
            sink.cue(Cue::Miss);
            state.ball.pause(MISS_PAUSE_US);
            if state.ball.direction() == Direction::Left {
                state.computer.pause(SERVE_PAUSE_US);
            }
            if let Some(winner) = state.score.winner() {
                log::info!(
                    "{:?} wins {}-{} after {} frames",
                    winner,
                    state.score.left,
                    state.score.right,
                    state.frame
                );
            }
        }
        BallEvent::None => {}
    }

    let player_hit = state
        .player_control
        .update(&mut state.player, &mut state.ball, pointer);
    if player_hit {
        sink.cue(Cue::PaddleHit);
        state.computer.pause(HIT_PAUSE_US);
    }

    let computer_hit = state
        .computer_control
        .update(&mut state.computer, &mut state.ball);
    if computer_hit {
        sink.cue(Cue::PaddleHit);
        state.player.pause(HIT_PAUSE_US);
    }

    FrameEvents {
        ball: ball_event,
        player_hit,
        computer_hit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn state(seed: u64) -> GameState {
        GameState::new(&Settings {
            seed: Some(seed),
            ..Default::default()
        })
    }

    /// Pointer that keeps the player's paddle centered
    const CENTER: f32 = 540.0;

    #[test]
    fn test_miss_moving_left_pauses_ball_and_computer() {
        let mut state = state(1);
        state.ball.pos = Vec2::new(104.0, 445.0);
        state.ball.set_angle(1.5 * PI);
        state.ball.set_speed(12.0);
        // Keep the computer's paddle away from the ball's path
        state.computer.move_to(200.0);

        let mut cues = Vec::new();
        let events = tick(&mut state, &CENTER, &mut cues);
        assert_eq!(events.ball, BallEvent::Missed);
        assert_eq!(cues, vec![Cue::Miss]);
        assert_eq!(state.score.right, 1);
        assert!(state.ball.is_paused());
        assert!(state.computer.is_paused());
        assert!(!state.player.is_paused());
    }

    #[test]
    fn test_miss_moving_right_pauses_ball_only() {
        let mut state = state(2);
        state.ball.pos = Vec2::new(1085.0, 200.0);
        state.ball.set_angle(FRAC_PI_2);
        state.ball.set_speed(12.0);

        let events = tick(&mut state, &CENTER, &mut ());
        assert_eq!(events.ball, BallEvent::Missed);
        assert_eq!(state.score.left, 1);
        assert!(state.ball.is_paused());
        assert!(!state.computer.is_paused());
    }

    #[test]
    fn test_ball_pause_lasts_half_a_second() {
        let mut state = state(3);
        state.ball.pause(MISS_PAUSE_US);
        let start = state.ball.pos;
        // 500ms at 60 Hz is 30 frames
        for _ in 0..30 {
            tick(&mut state, &CENTER, &mut ());
            assert_eq!(state.ball.pos, start);
        }
        tick(&mut state, &CENTER, &mut ());
        tick(&mut state, &CENTER, &mut ());
        assert_ne!(state.ball.pos, start);
    }

    #[test]
    fn test_player_hit_pauses_computer() {
        let mut state = state(4);
        // One frame before crossing the player's zone at x=1021, level with the paddle
        state.ball.pos = Vec2::new(1015.0, 445.0);
        state.ball.set_angle(FRAC_PI_2);
        state.ball.set_speed(10.0);

        let mut cues = Vec::new();
        let events = tick(&mut state, &CENTER, &mut cues);
        assert!(events.player_hit);
        assert!(!events.computer_hit);
        assert!(events.any_hit());
        assert_eq!(cues, vec![Cue::PaddleHit]);
        assert!(state.computer.is_paused());
        assert!(!state.player.is_paused());
        assert_eq!(state.ball.direction(), Direction::Left);
        assert_eq!(state.ball.speed(), 11.0);
    }

    #[test]
    fn test_computer_hit_pauses_player() {
        let mut state = state(5);
        let y = state.computer.pos.y;
        state.ball.pos = Vec2::new(175.0, y);
        state.ball.set_angle(1.5 * PI);
        state.ball.set_speed(10.0);

        let events = tick(&mut state, &CENTER, &mut ());
        assert!(events.computer_hit);
        assert!(!events.player_hit);
        assert!(state.player.is_paused());
        assert_eq!(state.ball.direction(), Direction::Right);
    }

    #[test]
    fn test_full_match_reaches_a_winner() {
        let mut state = state(6);
        let mut frames = 0u64;
        let mut last_total = 0;
        while !state.is_over() && frames < 2_000_000 {
            let speed_before = state.ball.speed();
            let events = tick(&mut state, &CENTER, &mut ());
            let total = state.score.left + state.score.right;
            match events.ball {
                BallEvent::Missed => assert_eq!(total, last_total + 1),
                _ => assert_eq!(total, last_total),
            }
            if events.any_hit() && events.ball != BallEvent::Missed {
                let hits = events.player_hit as u32 + events.computer_hit as u32;
                let expected = speed_before + hits as f32 * state.ball.speed_increment();
                assert!((state.ball.speed() - expected).abs() < 1e-4);
            }
            last_total = total;
            frames += 1;
        }
        assert!(state.is_over());
        let (hi, lo) = if state.score.left > state.score.right {
            (state.score.left, state.score.right)
        } else {
            (state.score.right, state.score.left)
        };
        assert_eq!(hi, 11);
        assert!(lo <= 11);
    }
}

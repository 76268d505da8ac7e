//! Game state: everything on the table

use super::ball::Ball;
use super::control::{ComputerController, PlayerController};
use super::paddle::{Paddle, PaddleGeometry, Side};
use super::rng::RandomSource;
use super::score::Score;
use super::table::TableBox;
use crate::settings::Settings;

/// Side the human player defends
pub const PLAYER_SIDE: Side = Side::Right;
/// Side the computer defends
pub const COMPUTER_SIDE: Side = Side::Left;

/// Complete table state for one match
#[derive(Debug, Clone)]
pub struct GameState {
    pub table: TableBox,
    pub ball: Ball,
    pub player: Paddle,
    pub computer: Paddle,
    pub score: Score,
    pub player_control: PlayerController,
    pub computer_control: ComputerController,
    /// Frames simulated since the match started
    pub frame: u64,
}

impl GameState {
    /// Set up a table from settings
    ///
    /// With a seed, the ball and the two paddles get distinct derived seeds;
    /// without one, each seeds itself from the OS.
    pub fn new(settings: &Settings) -> Self {
        let table = settings.table_box();
        let quantum = settings.frame_quantum_us();
        let rng = |stream: u64| RandomSource::new(settings.seed.map(|s| s.wrapping_add(stream)));

        let mut ball = Ball::new(
            settings.ball_size,
            settings.speed_increment(),
            settings.serve_speed(),
            quantum,
            rng(0),
        );
        ball.place_on(&table);

        let geometry = PaddleGeometry {
            width: settings.paddle_width,
            length: settings.paddle_length,
            ball_size: settings.ball_size,
            sectors: settings.paddle_sectors,
        };
        let player = Paddle::new(
            PLAYER_SIDE,
            geometry,
            &table,
            settings.paddle_rim_offset,
            quantum,
            rng(1),
        );
        let computer = Paddle::new(
            COMPUTER_SIDE,
            geometry,
            &table,
            settings.paddle_rim_offset,
            quantum,
            rng(2),
        );

        log::info!(
            "New match on {:.0}x{:.0} table at {} Hz",
            table.width(),
            table.height(),
            settings.refresh_rate
        );

        Self {
            table,
            ball,
            player,
            computer,
            score: Score::new(),
            player_control: PlayerController::new(settings.desktop_height),
            computer_control: ComputerController::default(),
            frame: 0,
        }
    }

    /// Clear the score and drop the ball back onto the table
    pub fn restart(&mut self) {
        self.score.reset();
        self.ball.place_on(&self.table);
        self.ball.set_speed(self.ball.serve_speed());
        self.frame = 0;
        log::info!("Match restarted");
    }

    /// True once either side has won
    pub fn is_over(&self) -> bool {
        self.score.has_won()
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        if side == PLAYER_SIDE {
            &self.player
        } else {
            &self.computer
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        if side == PLAYER_SIDE {
            &mut self.player
        } else {
            &mut self.computer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Settings {
        Settings {
            seed: Some(2024),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_places_everything() {
        let state = GameState::new(&seeded());
        assert_eq!(state.player.side(), Side::Right);
        assert_eq!(state.computer.side(), Side::Left);
        assert!(state.player.pos.x > state.computer.pos.x);
        assert_eq!(state.score, Score::new());
        assert!(state.ball.pos.cmpge(state.ball.min()).all());
        assert!(state.ball.pos.cmple(state.ball.max()).all());
        assert_eq!(state.ball.speed(), 10.0);
    }

    #[test]
    fn test_seeded_state_is_reproducible() {
        let a = GameState::new(&seeded());
        let b = GameState::new(&seeded());
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.angle(), b.ball.angle());
    }

    #[test]
    fn test_restart_clears_score() {
        let mut state = GameState::new(&seeded());
        state.score.left = 11;
        state.ball.set_speed(25.0);
        state.frame = 900;
        assert!(state.is_over());

        state.restart();
        assert!(!state.is_over());
        assert_eq!(state.frame, 0);
        assert_eq!(state.ball.speed(), state.ball.serve_speed());
    }

    #[test]
    fn test_paddle_lookup() {
        let mut state = GameState::new(&seeded());
        assert_eq!(state.paddle(Side::Left).side(), Side::Left);
        state.paddle_mut(Side::Right).move_to(300.0);
        assert_eq!(state.player.pos.y, 300.0);
    }
}

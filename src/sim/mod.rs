//! Table simulation module
//!
//! All gameplay logic lives here, advanced exactly once per displayed frame:
//! - Speeds and pause durations scale with the display refresh rate
//! - Every entity owns its random source
//! - No rendering, audio or windowing dependencies; pointer input is injected

pub mod ball;
pub mod collision;
pub mod control;
pub mod paddle;
pub mod pause;
pub mod rng;
pub mod score;
pub mod state;
pub mod table;
pub mod tick;

pub use ball::{Ball, BallEvent, Direction};
pub use collision::{DetectionZone, Intersection, approaches_zone, intersect, return_angle, sector_index};
pub use control::{ComputerController, PlayerController, PointerSource};
pub use paddle::{Paddle, PaddleGeometry, Side};
pub use pause::PauseTimer;
pub use rng::RandomSource;
pub use score::Score;
pub use state::{COMPUTER_SIDE, GameState, PLAYER_SIDE};
pub use table::TableBox;
pub use tick::{Cue, EventSink, FrameEvents, tick};

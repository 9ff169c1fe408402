#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod error;
pub mod event;
pub mod player;
pub mod score;
pub mod scoreboard;
pub mod snapshot;
pub mod standings;
pub mod test_util;

pub use error::ScoreBoardError;
pub use player::PlayerId;
pub use score::Score;
pub use scoreboard::{RoundScore, ScoreBoard};

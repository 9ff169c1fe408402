use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ScoreBoardError;
use crate::player::PlayerId;
use crate::scoreboard::{RoundScore, ScoreBoard};
use crate::standings::{self, Standing};


// Score updates broadcast to match participants. Sent as JSON, like all client-facing events.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ScoreBoardEvent {
    RoundFinished {
        round: usize, // 1-based
        round_scores: RoundScore,
    },
    // Scores were requested before the first round ended.
    ScoresNotYetAvailable,
    GameFinished {
        winners: Vec<PlayerId>,
        standings: Vec<Standing>,
        score_board: ScoreBoard,
    },
}

pub fn round_finished_event(board: &ScoreBoard) -> ScoreBoardEvent {
    match board.last_round_score() {
        Ok(round_scores) => ScoreBoardEvent::RoundFinished {
            round: board.num_rounds(),
            round_scores,
        },
        Err(ScoreBoardError::EmptyHistory) => {
            debug!("Last round requested before any round was scored");
            ScoreBoardEvent::ScoresNotYetAvailable
        }
    }
}

pub fn game_finished_event(board: &ScoreBoard) -> ScoreBoardEvent {
    let standings = standings::standings(board);
    let winners = standings::leaders(&standings);
    ScoreBoardEvent::GameFinished {
        winners,
        standings,
        score_board: board.clone(),
    }
}

pub fn to_json(event: &ScoreBoardEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

pub fn from_json(json: &str) -> Result<ScoreBoardEvent, serde_json::Error> {
    serde_json::from_str(json)
}

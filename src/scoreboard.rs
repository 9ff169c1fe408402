use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ScoreBoardError;
use crate::player::PlayerId;
use crate::score::Score;


// Outcome of a single round: the score of every player who took part in it.
pub type RoundScore = HashMap<PlayerId, Score>;

// Append-only history of round results for one match.
//
// The only ways to obtain a `ScoreBoard` are `ScoreBoard::empty` and deserialization, so a board
// always holds exactly the rounds that were appended to it, in the order they were appended.
//
// Not synchronized: the owner (normally the match state) must serialize all access.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ScoreBoard {
    round_scores: Vec<RoundScore>,
}

impl ScoreBoard {
    pub fn empty() -> Self { ScoreBoard { round_scores: Vec::new() } }

    // Takes the round by value: once appended, history can only be read through shared borrows
    // or copies, so nothing outside the board can rewrite a past round.
    pub fn add_round_score(&mut self, round_score: RoundScore) {
        debug!(
            "Round {} scored for {} player(s)",
            self.round_scores.len() + 1,
            round_score.len()
        );
        self.round_scores.push(round_score);
    }

    // Returns a copy of the most recent round. Changing it does not affect the board.
    pub fn last_round_score(&self) -> Result<RoundScore, ScoreBoardError> {
        self.round_scores.last().cloned().ok_or(ScoreBoardError::EmptyHistory)
    }

    pub fn num_rounds(&self) -> usize { self.round_scores.len() }
    pub fn is_empty(&self) -> bool { self.round_scores.is_empty() }

    // Zero-based, in the order rounds were added.
    pub fn round(&self, index: usize) -> Option<&RoundScore> { self.round_scores.get(index) }
    pub fn rounds(&self) -> impl DoubleEndedIterator<Item = &RoundScore> + ExactSizeIterator {
        self.round_scores.iter()
    }
}

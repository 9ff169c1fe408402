// Test utilities that cannot be moved to the "tests" folder, because scoreboard_console tests use
// them.

use itertools::Itertools;

use crate::player::PlayerId;
use crate::score::Score;
use crate::scoreboard::{RoundScore, ScoreBoard};


pub fn sample_players() -> Vec<PlayerId> {
    ["Alice", "Bob", "Charlie", "Dave"].into_iter().map(PlayerId::from).collect()
}

// Round without bonuses: `round(&[("Alice", 20), ("Bob", -10)])`.
pub fn round(scores: &[(&str, i32)]) -> RoundScore {
    scores.iter().map(|&(player, score)| (PlayerId::from(player), Score::new(score, 0))).collect()
}

pub fn round_with_bonus(scores: &[(&str, i32, i32)]) -> RoundScore {
    scores
        .iter()
        .map(|&(player, score, bonus)| (PlayerId::from(player), Score::new(score, bonus)))
        .collect()
}

// A match of `num_rounds` rounds between `num_players` players with varying, deterministic scores.
// Players beyond `sample_players` are named "Player5", "Player6" and so on.
pub fn sample_board(num_rounds: usize, num_players: usize) -> ScoreBoard {
    let named = sample_players();
    let players = (0..num_players)
        .map(|i| named.get(i).cloned().unwrap_or_else(|| PlayerId::new(format!("Player{}", i + 1))))
        .collect_vec();
    let mut board = ScoreBoard::empty();
    for r in 0..num_rounds {
        let round_score = players
            .iter()
            .enumerate()
            .map(|(p, player)| {
                let seed = (r * 7 + p * 13) as i32;
                (player.clone(), Score::new(seed % 50 - 20, (seed % 3) * 10))
            })
            .collect();
        board.add_round_score(round_score);
    }
    board
}

use std::cmp::Reverse;
use std::collections::HashMap;

use derive_new::new;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::player::PlayerId;
use crate::score::Score;
use crate::scoreboard::ScoreBoard;


#[derive(Clone, PartialEq, Eq, Debug, new, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub total: Score,
    // 1-based. Players with equal totals share a rank, the next rank is skipped: 1, 1, 3.
    pub rank: usize,
}

// Sum of each player's scores over all rounds. Rounds a player did not take part in add nothing.
pub fn totals(board: &ScoreBoard) -> HashMap<PlayerId, Score> {
    let mut totals = HashMap::new();
    for round_score in board.rounds() {
        for (player_id, score) in round_score {
            *totals.entry(player_id.clone()).or_insert(Score::ZERO) += *score;
        }
    }
    totals
}

// Best total first; equal totals are listed by player id.
pub fn standings(board: &ScoreBoard) -> Vec<Standing> {
    let sorted = totals(board)
        .into_iter()
        .sorted_by_key(|(player_id, total)| (Reverse(total.total()), player_id.clone()))
        .collect_vec();
    let mut standings = Vec::with_capacity(sorted.len());
    let mut rank = 0;
    let mut prev_total = None;
    for (index, (player_id, total)) in sorted.into_iter().enumerate() {
        if prev_total != Some(total.total()) {
            rank = index + 1;
            prev_total = Some(total.total());
        }
        standings.push(Standing::new(player_id, total, rank));
    }
    standings
}

// Everybody sharing the first place. Empty if no round has been scored.
pub fn winners(board: &ScoreBoard) -> Vec<PlayerId> { leaders(&standings(board)) }

// First place of an already ranked list, as produced by `standings`.
pub fn leaders(standings: &[Standing]) -> Vec<PlayerId> {
    standings.iter().take_while(|s| s.rank == 1).map(|s| s.player_id.clone()).collect()
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_util::{round, round_with_bonus};

    #[test]
    fn totals_skip_absent_players() {
        let mut board = ScoreBoard::empty();
        board.add_round_score(round_with_bonus(&[("Alice", 20, 10), ("Bob", -10, 0)]));
        board.add_round_score(round(&[("Alice", 30)]));
        board.add_round_score(round(&[("Bob", 40), ("Charlie", 0)]));
        let totals = totals(&board);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[&PlayerId::from("Alice")], Score::new(50, 10));
        assert_eq!(totals[&PlayerId::from("Bob")], Score::new(30, 0));
        assert_eq!(totals[&PlayerId::from("Charlie")], Score::ZERO);
    }

    #[test]
    fn ties_share_rank() {
        let mut board = ScoreBoard::empty();
        board.add_round_score(round_with_bonus(&[
            ("Dave", 10, 0),
            ("Bob", 20, 10),
            ("Alice", 30, 0),
            ("Charlie", -20, 0),
        ]));
        let ranks = standings(&board)
            .into_iter()
            .map(|s| (s.player_id.to_string(), s.rank))
            .collect_vec();
        assert_eq!(ranks, vec![
            ("Alice".to_owned(), 1),
            ("Bob".to_owned(), 1),
            ("Dave".to_owned(), 3),
            ("Charlie".to_owned(), 4),
        ]);
        assert_eq!(winners(&board), vec![PlayerId::from("Alice"), PlayerId::from("Bob")]);
    }

    #[test]
    fn extreme_scores_do_not_overflow() {
        let mut board = ScoreBoard::empty();
        board.add_round_score(round_with_bonus(&[("Alice", i32::MAX, i32::MAX), ("Bob", 0, 0)]));
        board.add_round_score(round_with_bonus(&[("Alice", 1, 1), ("Bob", i32::MIN, 0)]));
        let board = crate::snapshot::decode(&crate::snapshot::encode(&board).unwrap()).unwrap();
        assert_eq!(totals(&board)[&PlayerId::from("Alice")], Score::new(i32::MAX, i32::MAX));
        let standings = standings(&board);
        assert_eq!(standings[0], Standing::new(
            PlayerId::from("Alice"),
            Score::new(i32::MAX, i32::MAX),
            1
        ));
        assert_eq!(standings[1].total.total(), i64::from(i32::MIN));
        assert_eq!(winners(&board), vec![PlayerId::from("Alice")]);
    }

    #[test]
    fn empty_board_has_no_winners() {
        let board = ScoreBoard::empty();
        assert!(standings(&board).is_empty());
        assert!(winners(&board).is_empty());
    }
}

// Improvement potential. Combine integration tests together:
//   https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

use scoreboard::{PlayerId, RoundScore, Score};


// `scores!{ "Alice" => 20, "Bob" => -10 }`, or with bonuses: `scores!{ "Alice" => (20, 30) }`.
#[macro_export]
macro_rules! scores {
    ($($player:literal => ($score:expr, $bonus:expr)),* $(,)?) => {
        scoreboard::RoundScore::from([
            $((scoreboard::PlayerId::from($player), scoreboard::Score::new($score, $bonus))),*
        ])
    };
    ($($player:literal => $score:expr),* $(,)?) => {
        scoreboard::RoundScore::from([
            $((scoreboard::PlayerId::from($player), scoreboard::Score::new($score, 0))),*
        ])
    };
}

#[allow(dead_code)]
pub fn many_players_round(num_players: usize, seed: i32) -> RoundScore {
    (0..num_players)
        .map(|i| {
            let score = (seed * 31 + i as i32 * 17) % 90 - 40;
            (PlayerId::new(format!("player-{i}")), Score::new(score, (i as i32 % 4) * 10))
        })
        .collect()
}

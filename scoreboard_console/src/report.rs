use itertools::Itertools;

use scoreboard::ScoreBoard;
use scoreboard::standings;


pub fn print_rounds(board: &ScoreBoard) {
    for (index, round_score) in board.rounds().enumerate() {
        let entries = round_score
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(player_id, score)| format!("{player_id}: {score}"))
            .join(", ");
        println!("Round {}: {}", index + 1, if entries.is_empty() { "-" } else { &entries });
    }
}

pub fn print_standings(board: &ScoreBoard) {
    let standings = standings::standings(board);
    if standings.is_empty() {
        println!("No scores yet.");
        return;
    }
    println!("Standings after {} round(s):", board.num_rounds());
    for s in standings {
        println!("{:>3}. {:<20} {}", s.rank, s.player_id.as_str(), s.total);
    }
}

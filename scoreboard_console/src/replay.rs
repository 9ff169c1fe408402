use log::info;

use scoreboard::event::{self, round_finished_event};
use scoreboard::{ScoreBoard, snapshot};

use crate::replay_config::ReplayConfig;
use crate::report;


pub fn run(config: ReplayConfig) -> anyhow::Result<()> {
    let rounds = config.rounds.read_rounds()?;
    let mut board = ScoreBoard::empty();
    for round_score in rounds {
        board.add_round_score(round_score);
    }
    info!("Replayed {} round(s)", board.num_rounds());

    if config.print_rounds {
        report::print_rounds(&board);
    }
    report::print_standings(&board);
    println!("{}", event::to_json(&round_finished_event(&board))?);

    if let Some(snapshot_file) = &config.snapshot_file {
        snapshot::write_to_file(&board, snapshot_file)?;
    }
    Ok(())
}

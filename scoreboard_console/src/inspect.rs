use anyhow::Context;

use scoreboard::event::{self, round_finished_event};
use scoreboard::snapshot;

use crate::report;


pub fn run(snapshot_file: &str) -> anyhow::Result<()> {
    let board = snapshot::read_from_file(snapshot_file)
        .context(format!("Failed to load snapshot '{snapshot_file}'."))?;
    report::print_rounds(&board);
    report::print_standings(&board);
    Ok(())
}

// Prints what a client would receive when asking for the latest round.
pub fn run_last_round(snapshot_file: &str) -> anyhow::Result<()> {
    let board = snapshot::read_from_file(snapshot_file)
        .context(format!("Failed to load snapshot '{snapshot_file}'."))?;
    println!("{}", event::to_json(&round_finished_event(&board))?);
    Ok(())
}

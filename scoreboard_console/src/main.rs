#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod inspect;
mod replay;
mod replay_config;
mod report;

use clap::{Command, arg};


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Scoreboard")
        .version(clap::crate_version!())
        .about("Match score ledger console app")
        .subcommand_required(true)
        .subcommand(Command::new("replay").about("Replay round scores into a score board").arg(
            arg!(<config_file> "Path to the configuration file: yaml-serialized ReplayConfig."),
        ))
        .subcommand(
            Command::new("inspect")
                .about("Print rounds and standings stored in a snapshot")
                .arg(arg!(<snapshot_file> "Binary score board snapshot")),
        )
        .subcommand(
            Command::new("last-round")
                .about("Print the last round event as a client would receive it")
                .arg(arg!(<snapshot_file> "Binary score board snapshot")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("replay", sub_matches)) => replay::run(replay_config::read_config_file(
            sub_matches.get_one::<String>("config_file").unwrap(),
        )?),
        Some(("inspect", sub_matches)) => {
            inspect::run(sub_matches.get_one::<String>("snapshot_file").unwrap())
        }
        Some(("last-round", sub_matches)) => {
            inspect::run_last_round(sub_matches.get_one::<String>("snapshot_file").unwrap())
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}

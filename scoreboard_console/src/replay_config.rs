use anyhow::Context;
use serde::{Deserialize, Serialize};

use scoreboard::RoundScore;


#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundsSource {
    Literal(String),
    EnvVar(String),
    File(String),
}

impl RoundsSource {
    // Raw YAML: a list of rounds, each mapping player id to `{ score, bonus }`.
    pub fn get(&self) -> anyhow::Result<String> {
        match self {
            Self::Literal(s) => Ok(s.clone()),
            Self::EnvVar(v) => {
                std::env::var(v).context(format!("Missing environment variable '{v}'."))
            }
            Self::File(f) => {
                std::fs::read_to_string(f).context(format!("Failed to read file '{f}'."))
            }
        }
    }

    pub fn read_rounds(&self) -> anyhow::Result<Vec<RoundScore>> {
        let contents = self.get()?;
        serde_yaml::from_str(&contents).context("Failed to parse round scores.")
    }
}

#[derive(Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    pub rounds: RoundsSource,
    #[serde(default)]
    pub snapshot_file: Option<String>,
    #[serde(default)]
    pub print_rounds: bool,
}

pub fn read_config_file(filename: &str) -> anyhow::Result<ReplayConfig> {
    let contents = std::fs::read_to_string(filename)
        .context(format!("Failed to read config file '{filename}'."))?;
    serde_yaml::from_str(&contents).context(format!("Failed to parse config file '{filename}'."))
}


#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use scoreboard::test_util::round_with_bonus;

    use super::*;

    #[test]
    fn parse_config() {
        let config: ReplayConfig = serde_yaml::from_str(indoc! {"
            rounds: !File rounds.yaml
            snapshot_file: match.bin
        "})
        .unwrap();
        assert_eq!(config, ReplayConfig {
            rounds: RoundsSource::File("rounds.yaml".to_owned()),
            snapshot_file: Some("match.bin".to_owned()),
            print_rounds: false,
        });
    }

    #[test]
    fn parse_literal_rounds() {
        let source = RoundsSource::Literal(
            indoc! {"
                - Alice: { score: 20, bonus: 30 }
                  Bob: { score: -10 }
                - {}
            "}
            .to_owned(),
        );
        assert_eq!(source.read_rounds().unwrap(), vec![
            round_with_bonus(&[("Alice", 20, 30), ("Bob", -10, 0)]),
            RoundScore::new(),
        ]);
    }

    #[test]
    fn missing_env_var() {
        let source = RoundsSource::EnvVar("SCOREBOARD_TEST_VARIABLE_THAT_IS_NEVER_SET".to_owned());
        assert!(source.get().is_err());
    }
}

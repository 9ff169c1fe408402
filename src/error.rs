use std::{error, fmt};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScoreBoardError {
    // Last round requested before any round has finished.
    EmptyHistory,
}

impl fmt::Display for ScoreBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreBoardError::EmptyHistory => write!(f, "no round has been scored yet"),
        }
    }
}

impl error::Error for ScoreBoardError {}

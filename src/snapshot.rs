// Binary snapshots of a score board, used to ship the board between server processes and to
// persist it together with the rest of match state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bincode::Options;
use log::info;

use crate::scoreboard::ScoreBoard;


// Far above any real match; protects decoding from absurd length prefixes.
pub const MAX_SNAPSHOT_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug)]
pub enum SnapshotError {
    Codec(bincode::Error),
    Io(io::Error),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Codec(err) => write!(f, "malformed score board snapshot: {err}"),
            SnapshotError::Io(err) => write!(f, "cannot access score board snapshot: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(MAX_SNAPSHOT_BYTES).reject_trailing_bytes()
}

pub fn encode(board: &ScoreBoard) -> Result<Vec<u8>, SnapshotError> {
    options().serialize(board).map_err(SnapshotError::Codec)
}

pub fn decode(bytes: &[u8]) -> Result<ScoreBoard, SnapshotError> {
    options().deserialize(bytes).map_err(SnapshotError::Codec)
}

// Writes next to the target first and renames, so an interrupted write never leaves a truncated
// snapshot in place of a good one.
pub fn write_to_file(board: &ScoreBoard, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let bytes = encode(board)?;
    let tmp_path = temp_path(path.as_ref());
    let result = fs::write(&tmp_path, &bytes).and_then(|()| fs::rename(&tmp_path, path.as_ref()));
    if let Err(err) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(SnapshotError::Io(err));
    }
    info!(
        "Wrote score board snapshot with {} round(s) to {} ({} bytes)",
        board.num_rounds(),
        path.as_ref().display(),
        bytes.len()
    );
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    PathBuf::from(tmp_path)
}

pub fn read_from_file(path: impl AsRef<Path>) -> Result<ScoreBoard, SnapshotError> {
    let bytes = fs::read(path.as_ref()).map_err(SnapshotError::Io)?;
    decode(&bytes)
}

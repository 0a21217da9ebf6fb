//! Runs a tournament from an entries file and a stream of operator commands.
//!
//! This is the outer shell around the pure core: it loads the candidates,
//! feeds each input line through [`parse_action`] into a [`Store`], and
//! writes every new state as one line of JSON.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::actions::{Action, parse_action};
use crate::config::DriverConfig;
use crate::store::Store;
use crate::types::{Entry, State};

/// Errors that stop the driver.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The entries file could not be read.
    #[error("failed to read entries from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The entries file is not a JSON array of names.
    #[error("failed to parse entries in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Loading the entries was rejected by the tournament.
    #[error("could not start the tournament: {0}")]
    Start(#[from] crate::state::RoundError),

    /// Reading commands or writing states failed.
    #[error("stream error: {0}")]
    Stream(#[from] io::Error),
}

/// Loads the list of entries from a JSON file.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>, DriverError> {
    let contents = fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| DriverError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs one tournament to completion or until `input` is exhausted.
///
/// Returns the final state. Lines that fail to parse, and actions the
/// tournament rejects, are logged and skipped.
pub fn run<R, W>(config: &DriverConfig, input: R, mut output: W) -> Result<State, DriverError>
where
    R: BufRead,
    W: Write,
{
    let entries = load_entries(&config.entries_path)?;
    info!(
        path = %config.entries_path.display(),
        count = entries.len(),
        "Loaded entries"
    );

    let mut store = Store::new();
    write_state(&mut output, store.dispatch(&Action::SetEntries { entries })?)?;
    if config.auto_start {
        write_state(&mut output, store.dispatch(&Action::Next)?)?;
    }

    for line in input.lines() {
        if store.state().is_decided() {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(e) => {
                warn!(line = %line, error = %e, "Ignoring unparseable command");
                continue;
            }
        };
        if let Ok(state) = store.dispatch(&action) {
            write_state(&mut output, state)?;
        }
    }

    info!(dispatched = store.dispatched(), phase = store.state().name(), "Driver finished");
    Ok(store.state().clone())
}

fn write_state<W: Write>(output: &mut W, state: &State) -> Result<(), DriverError> {
    serde_json::to_writer(&mut *output, state).map_err(io::Error::from)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn write_entries(dir: &TempDir, json: &str) -> DriverConfig {
        let path = dir.path().join("entries.json");
        fs::write(&path, json).unwrap();
        DriverConfig {
            entries_path: path,
            auto_start: true,
        }
    }

    #[test]
    fn load_entries_reads_a_json_array() {
        let dir = TempDir::new().unwrap();
        let config = write_entries(&dir, r#"["Shallow Grave", "Trainspotting"]"#);
        assert_eq!(
            load_entries(&config.entries_path).unwrap(),
            vec![Entry::from("Shallow Grave"), Entry::from("Trainspotting")]
        );
    }

    #[test]
    fn load_entries_reports_missing_and_malformed_files() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_entries(&dir.path().join("missing.json")),
            Err(DriverError::Io { .. })
        ));

        let config = write_entries(&dir, r#"{"not": "a list"}"#);
        assert!(matches!(
            load_entries(&config.entries_path),
            Err(DriverError::Json { .. })
        ));
    }

    #[test]
    fn runs_a_tournament_to_a_winner() {
        let dir = TempDir::new().unwrap();
        let config = write_entries(&dir, r#"["one", "two", "three"]"#);
        let input = Cursor::new(
            "vote one\nvote three\nnext\nbogus\nvote four\nvote three\nnext\nvote one\nnext\nnext\n",
        );
        let mut output = Vec::new();

        let final_state = run(&config, input, &mut output).unwrap();

        assert_eq!(final_state, State::decided("three"));
        let lines: Vec<State> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.first(), Some(&State::pending(["one", "two", "three"])));
        assert_eq!(lines.last(), Some(&State::decided("three")));
        // set, next, vote one, next, vote three, next; rejected and unread
        // lines produce nothing
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn without_auto_start_waits_for_next() {
        let dir = TempDir::new().unwrap();
        let mut config = write_entries(&dir, r#"["one", "two"]"#);
        config.auto_start = false;

        let final_state = run(&config, Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(final_state, State::pending(["one", "two"]));
    }

    #[test]
    fn too_few_entries_cannot_start() {
        let dir = TempDir::new().unwrap();
        let config = write_entries(&dir, r#"["lonely"]"#);
        assert!(matches!(
            run(&config, Cursor::new(""), Vec::new()),
            Err(DriverError::Start(_))
        ));
    }
}

//! Parser for operator commands.
//!
//! This module provides a pure parser that turns a line of operator input
//! into an [`Action`]. Lines starting with `{` are read as JSON actions; any
//! other line is a plain-text command.

use thiserror::Error;

use super::types::Action;
use crate::types::Entry;

/// Errors that can occur while parsing a command line.
#[derive(Debug, Error)]
pub enum ParseActionError {
    /// The line holds nothing but whitespace.
    #[error("empty command")]
    Empty,

    /// The first word is not a known command.
    #[error("unknown command: {word}")]
    UnknownCommand { word: String },

    /// The command needs an argument that was not given.
    #[error("`{command}` needs an argument")]
    MissingArgument { command: &'static str },

    /// The command takes no argument but one was given.
    #[error("`{command}` takes no argument")]
    UnexpectedArgument { command: &'static str },

    /// The line looked like JSON but is not a valid action.
    #[error("invalid JSON action: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses one line of operator input.
///
/// # Parsing Rules
///
/// - Command words (`next`, `vote`, `entries`) are case-insensitive
/// - Whitespace around tokens is flexible (spaces, tabs)
/// - `vote` takes the rest of the line as the entry name, inner spaces kept
/// - `entries` takes a comma-separated list; empty items are dropped
///
/// # Examples
///
/// ```
/// use vote_runoff::actions::{Action, parse_action};
/// use vote_runoff::types::Entry;
///
/// assert_eq!(parse_action("next").unwrap(), Action::Next);
/// assert_eq!(
///     parse_action("VOTE 28 Days Later").unwrap(),
///     Action::Vote { entry: Entry::from("28 Days Later") }
/// );
/// assert_eq!(
///     parse_action(r#"{"type": "NEXT"}"#).unwrap(),
///     Action::Next
/// );
/// assert!(parse_action("shrug").is_err());
/// ```
pub fn parse_action(text: &str) -> Result<Action, ParseActionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseActionError::Empty);
    }
    if text.starts_with('{') {
        return Ok(serde_json::from_str(text)?);
    }

    let (word, rest) = match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    };

    if word.eq_ignore_ascii_case("next") {
        if !rest.is_empty() {
            return Err(ParseActionError::UnexpectedArgument { command: "next" });
        }
        Ok(Action::Next)
    } else if word.eq_ignore_ascii_case("vote") {
        if rest.is_empty() {
            return Err(ParseActionError::MissingArgument { command: "vote" });
        }
        Ok(Action::Vote {
            entry: Entry::from(rest),
        })
    } else if word.eq_ignore_ascii_case("entries") {
        let entries: Vec<Entry> = rest
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(Entry::from)
            .collect();
        if entries.is_empty() {
            return Err(ParseActionError::MissingArgument { command: "entries" });
        }
        Ok(Action::SetEntries { entries })
    } else {
        Err(ParseActionError::UnknownCommand {
            word: word.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_next_in_any_case() {
        for text in ["next", "NEXT", "  Next\t"] {
            assert_eq!(parse_action(text).unwrap(), Action::Next, "{text:?}");
        }
    }

    #[test]
    fn vote_keeps_inner_spaces() {
        assert_eq!(
            parse_action("vote   127 Hours  ").unwrap(),
            Action::Vote {
                entry: Entry::from("127 Hours")
            }
        );
    }

    #[test]
    fn entries_split_on_commas() {
        assert_eq!(
            parse_action("entries Sunshine, Millions ,, 127 Hours").unwrap(),
            Action::SetEntries {
                entries: vec![
                    Entry::from("Sunshine"),
                    Entry::from("Millions"),
                    Entry::from("127 Hours"),
                ]
            }
        );
    }

    #[test]
    fn json_lines_are_actions() {
        assert_eq!(
            parse_action(r#"{"type":"VOTE","entry":"one"}"#).unwrap(),
            Action::Vote {
                entry: Entry::from("one")
            }
        );
        assert!(matches!(
            parse_action(r#"{"type":"SHOUT"}"#),
            Err(ParseActionError::Json(_))
        ));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(matches!(parse_action("   "), Err(ParseActionError::Empty)));
        assert!(matches!(
            parse_action("vote"),
            Err(ParseActionError::MissingArgument { command: "vote" })
        ));
        assert!(matches!(
            parse_action("entries , ,"),
            Err(ParseActionError::MissingArgument { command: "entries" })
        ));
        assert!(matches!(
            parse_action("next please"),
            Err(ParseActionError::UnexpectedArgument { command: "next" })
        ));
        assert!(matches!(
            parse_action("restart"),
            Err(ParseActionError::UnknownCommand { word }) if word == "restart"
        ));
    }

    proptest! {
        /// Arbitrary input never panics the parser.
        #[test]
        fn never_panics(text in "\\PC{0,40}") {
            let _ = parse_action(&text);
        }

        #[test]
        fn vote_takes_the_whole_name(name in "[A-Za-z0-9]+( [A-Za-z0-9]+){0,3}") {
            let parsed = parse_action(&format!("vote {name}")).unwrap();
            prop_assert_eq!(parsed, Action::Vote { entry: Entry::from(name.as_str()) });
        }
    }
}

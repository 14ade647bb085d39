//! # Tokenizer
//!
//! Extracts command invocations from free-form message text. A command starts at `prefix`, ends at the
//! first `terminator` (or the end of the message), its first token is the key and the rest is a
//! comma-separated parameter list: `"see !greet alice, bob; thanks"` → `greet ["alice", "bob"]`.

use chatr_core::DispatchError;

/// Delimiters for command recognition. Both are validated non-empty at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    prefix: String,
    terminator: String,
}

impl ParserConfig {
    /// Fails with `DispatchError::Configuration` when either delimiter is empty.
    pub fn new(prefix: impl Into<String>, terminator: impl Into<String>) -> Result<Self, DispatchError> {
        let prefix = prefix.into();
        let terminator = terminator.into();
        if prefix.is_empty() {
            return Err(DispatchError::Configuration(
                "command prefix must not be empty".to_string(),
            ));
        }
        if terminator.is_empty() {
            return Err(DispatchError::Configuration(
                "command terminator must not be empty".to_string(),
            ));
        }
        Ok(Self { prefix, terminator })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn terminator(&self) -> &str {
        &self.terminator
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            prefix: chatr_core::settings::DEFAULT_PREFIX.to_string(),
            terminator: chatr_core::settings::DEFAULT_TERMINATOR.to_string(),
        }
    }
}

/// One recognized command: key plus trimmed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub key: String,
    pub parameters: Vec<String>,
}

/// Returns the commands found in `raw`, in the order their prefixes appear. Never fails.
pub fn tokenize(raw: &str, config: &ParserConfig) -> Vec<ParsedCommand> {
    raw.split(config.prefix())
        .skip(1)
        .filter_map(|candidate| parse_candidate(candidate, config.terminator()))
        .collect()
}

fn parse_candidate(candidate: &str, terminator: &str) -> Option<ParsedCommand> {
    let body = match candidate.find(terminator) {
        Some(end) => &candidate[..end],
        None => candidate,
    };

    // The key must follow the prefix directly; "! hello" has an empty key and is dropped.
    let (key, rest) = match body.find(char::is_whitespace) {
        Some(split) => body.split_at(split),
        None => (body, ""),
    };
    if key.trim().is_empty() {
        return None;
    }

    // Positional removal: only the leading key token is cut, so a parameter equal to the key survives.
    let parameters = if rest.trim().is_empty() {
        Vec::new()
    } else {
        rest.split(',').map(|piece| piece.trim().to_string()).collect()
    };

    Some(ParsedCommand {
        key: key.to_string(),
        parameters,
    })
}

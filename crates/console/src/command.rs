use std::fmt;

use dashboard::surface::Field;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Update the given inputs, then apply. An empty value clears the input.
    Apply(Vec<(Field, String)>),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    MissingValue { token: String },
    UnknownField { field: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingValue { token } => write!(f, "expected field=value, got '{token}'"),
            Self::UnknownField { field } => write!(f, "unknown field '{field}'"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parses one line of operator input, e.g. `filter-min-km=2 filter-record-limit=50`.
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    match line {
        "quit" | "exit" => return Ok(Command::Quit),
        "" | "apply" => return Ok(Command::Apply(Vec::new())),
        _ => {}
    }

    line.split_whitespace()
        .map(|token| {
            let (key, value) = token.split_once('=').ok_or_else(|| CommandError::MissingValue {
                token: token.to_owned(),
            })?;
            let field = Field::from_id(key).ok_or_else(|| CommandError::UnknownField {
                field: key.to_owned(),
            })?;
            Ok((field, value.to_owned()))
        })
        .collect::<Result<Vec<_>, CommandError>>()
        .map(Command::Apply)
}

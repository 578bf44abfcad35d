//! The parsed command value.

use std::fmt;
use std::str::FromStr;

use joinery_foundation::{Error, ErrorContext, Result};

use crate::tokenizer::InputTokenizer;

/// One line of input: a command name and its positional parameters.
///
/// Immutable once parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    name: String,
    parameters: Vec<String>,
}

impl Command {
    /// Creates a command from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Parses a command line.
    ///
    /// The first word is the name; the remaining words are the parameters
    /// in order.
    ///
    /// # Errors
    ///
    /// Returns `MalformedCommand` if the line is empty or only whitespace.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = InputTokenizer::tokenize(line).into_iter();
        let Some(name) = tokens.next() else {
            return Err(Error::malformed("empty line"));
        };
        Ok(Self {
            name,
            parameters: tokens.collect(),
        })
    }

    /// The command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All parameters in order.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The parameter at `index`.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if the command has too few parameters.
    pub fn parameter(&self, index: usize) -> Result<&str> {
        self.parameters.get(index).map(String::as_str).ok_or_else(|| {
            Error::missing_parameter(&self.name, index + 1, self.parameters.len())
        })
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for param in &self.parameters {
            write!(f, " {param}")?;
        }
        Ok(())
    }
}

/// Parses a batch of lines, one result per line, in order.
///
/// Failures carry the 1-based line number and the raw line as context.
pub fn parse_lines<I, S>(lines: I) -> Vec<Result<Command>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.as_ref();
            Command::parse(line).map_err(|e| {
                e.with_context(ErrorContext::new().with_line(i + 1).with_input(line))
            })
        })
        .collect()
}

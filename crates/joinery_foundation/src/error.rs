//! Error types for the Joinery system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! The `Display` form of every [`ErrorKind`] is the exact result line the
//! engine reports for that failure.

use std::fmt;

use thiserror::Error;

/// The main error type for Joinery operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed command line error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedCommand(reason.into()))
    }

    /// Creates a missing parameter error.
    #[must_use]
    pub fn missing_parameter(command: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::MissingParameter {
            command: command.into(),
            expected,
            actual,
        })
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(field: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber {
            field: field.into(),
            token: token.into(),
        })
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates a duplicate company error.
    #[must_use]
    pub fn company_exists(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::CompanyExists(name.into()))
    }

    /// Creates a company not found error.
    #[must_use]
    pub fn company_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::CompanyNotFound(name.into()))
    }

    /// Creates a duplicate furniture error.
    #[must_use]
    pub fn furniture_exists(model: impl Into<String>) -> Self {
        Self::new(ErrorKind::FurnitureExists(model.into()))
    }

    /// Creates a furniture not found error.
    #[must_use]
    pub fn furniture_not_found(model: impl Into<String>) -> Self {
        Self::new(ErrorKind::FurnitureNotFound(model.into()))
    }

    /// Creates a command-line usage error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage(message.into()))
    }

    /// Creates an I/O error from any displayable source.
    #[must_use]
    pub fn io(err: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }

    /// Returns true if this error comes from unusable input rather than
    /// from a business rule.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        self.kind.is_input_error()
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io(err)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The line could not be turned into a command at all.
    #[error("Invalid command line: {0}")]
    MalformedCommand(String),

    /// The command has fewer parameters than its operation reads.
    #[error("{command} expects {expected} parameters, got {actual}")]
    MissingParameter {
        /// The command name.
        command: String,
        /// Number of parameters the operation reads.
        expected: usize,
        /// Number of parameters supplied.
        actual: usize,
    },

    /// A numeric parameter could not be parsed.
    #[error("Invalid {field} value: {token}")]
    InvalidNumber {
        /// The parameter being parsed (e.g. `price`).
        field: String,
        /// The offending token.
        token: String,
    },

    /// No operation is registered under this command name.
    #[error("Invalid command name: {0}")]
    UnknownCommand(String),

    /// A company with this name is already registered.
    #[error("Company {0} already exists")]
    CompanyExists(String),

    /// No company with this name is registered.
    #[error("Company {0} not found")]
    CompanyNotFound(String),

    /// Furniture with this model is already registered.
    #[error("Furniture {0} already exists")]
    FurnitureExists(String),

    /// No furniture with this model is registered (or is a member).
    #[error("Furniture {0} not found")]
    FurnitureNotFound(String),

    /// Command-line arguments could not be understood.
    #[error("usage error: {0}")]
    Usage(String),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns true for failures caused by unusable input (bad line, short
    /// parameter list, unparsable number).
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedCommand(_) | Self::MissingParameter { .. } | Self::InvalidNumber { .. }
        )
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Line number in the input batch (1-indexed).
    pub line: Option<usize>,
    /// The raw input line.
    pub input: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the raw input text.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "at line {line}")?;
        }
        if let Some(input) = &self.input {
            if self.line.is_some() {
                write!(f, ": ")?;
            }
            write!(f, "{input:?}")?;
        }
        Ok(())
    }
}

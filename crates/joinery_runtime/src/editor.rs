//! Line editor abstraction for the REPL.
//!
//! This module provides a trait-based abstraction over line editing libraries,
//! allowing the REPL to use rustyline while remaining swappable (and
//! scriptable in tests).

use std::borrow::Cow;

use joinery_engine::CommandName;
use joinery_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Words offered for completion at the start of a line.
fn completion_words() -> Vec<String> {
    CommandName::ALL
        .iter()
        .map(|name| name.as_str().to_string())
        .chain([":help".to_string(), ":quit".to_string()])
        .collect()
}

/// Helper for rustyline that provides completion, hints, and highlighting.
#[derive(Helper, Completer, Hinter, Validator)]
struct JoineryHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for JoineryHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        let word_end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let word = &trimmed[..word_end];

        if word.is_empty() || word.starts_with(':') {
            return Cow::Borrowed(line);
        }

        let color = if word.parse::<CommandName>().is_ok() {
            "\x1b[1;32m"
        } else {
            "\x1b[31m"
        };
        Cow::Owned(format!(
            "{}{color}{word}\x1b[0m{}",
            &line[..indent],
            &trimmed[word_end..]
        ))
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;36m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes command names in the first word of a line.
struct CommandCompleter {
    words: Vec<String>,
}

impl CommandCompleter {
    fn new() -> Self {
        Self {
            words: completion_words(),
        }
    }

    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before = &line[..pos];
        let start = before.len() - before.trim_start().len();

        // Only the command name is completed; parameters are free text.
        if before[start..].contains(char::is_whitespace) {
            return (pos, Vec::new());
        }

        let word = &before[start..];
        let candidates = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        (start, candidates)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<JoineryHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = JoineryHelper {
            completer: CommandCompleter::new(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::io(e)),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

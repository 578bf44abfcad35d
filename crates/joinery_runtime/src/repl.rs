//! The interactive REPL.
//!
//! Each entered line is executed immediately against the same engine, so
//! the store accumulates across the session exactly as it would across one
//! batch.

use joinery_engine::{CommandName, Engine};
use joinery_foundation::Result;
use log::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// What evaluating one line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Text to print.
    Output(String),
    /// Nothing to print (blank line).
    Silent,
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The engine and its store.
    engine: Engine,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            engine: Engine::new(),
            show_banner: true,
            prompt: "joinery> ".to_string(),
        }
    }

    /// Sets the engine for this REPL.
    #[must_use]
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the engine.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history(&line);
                    }
                    match self.eval(&line) {
                        Step::Output(text) => println!("{text}"),
                        Step::Silent => {}
                        Step::Quit => break,
                    }
                }
                ReadResult::Interrupted => {
                    debug!("interrupted; line discarded");
                }
                ReadResult::Eof => break,
            }
        }

        Ok(())
    }

    /// Evaluates one line: a meta command or an engine command.
    pub fn eval(&mut self, line: &str) -> Step {
        let trimmed = line.trim();
        match trimmed {
            "" => Step::Silent,
            ":quit" | ":exit" | ":q" => Step::Quit,
            ":help" | ":h" => Step::Output(help_text()),
            _ => Step::Output(self.engine.run_lines([trimmed]).join("\n")),
        }
    }
}

fn help_text() -> String {
    let mut lines = vec!["Commands:".to_string()];
    lines.extend(CommandName::ALL.iter().map(|n| format!("  {}", n.usage())));
    lines.push("Meta:".to_string());
    lines.push("  :help   show this text".to_string());
    lines.push("  :quit   leave the session".to_string());
    lines.join("\n")
}

fn print_banner() {
    println!(
        "\x1b[1mJoinery\x1b[0m {} - type :help for commands, :quit to leave",
        env!("CARGO_PKG_VERSION")
    );
}

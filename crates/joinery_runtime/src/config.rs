//! Command-line configuration for the `joinery` binary.

use std::path::PathBuf;

use joinery_engine::{EngineConfig, FailurePolicy};
use joinery_foundation::{Error, Result};
use log::LevelFilter;

use crate::logger;

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Read commands from this file instead of stdin.
    pub input: Option<PathBuf>,
    /// Start the interactive REPL instead of a batch run.
    pub interactive: bool,
    /// Stop the batch at the first unusable command.
    pub abort_on_error: bool,
    /// Log level given on the command line, if any.
    pub log_level: Option<LevelFilter>,
    /// Print usage and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
}

impl RuntimeConfig {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns a usage error for unknown options, a missing option value,
    /// or more than one input file.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut input_given = false;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-i" | "--interactive" => config.interactive = true,
                "--abort-on-error" => config.abort_on_error = true,
                "--log" => {
                    let value = args
                        .next()
                        .ok_or_else(|| Error::usage("--log requires a value"))?;
                    config.log_level = Some(logger::parse_level(&value)?);
                }
                opt if opt.starts_with('-') && opt != "-" => {
                    return Err(Error::usage(format!("unknown option: {opt}")));
                }
                path => {
                    if input_given {
                        return Err(Error::usage("only one input file may be given"));
                    }
                    input_given = true;
                    if path != "-" {
                        config.input = Some(PathBuf::from(path));
                    }
                }
            }
        }

        Ok(config)
    }

    /// The engine configuration implied by these options.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        let policy = if self.abort_on_error {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Isolate
        };
        EngineConfig::new().with_failure_policy(policy)
    }
}

//! Stderr logging through `env_logger`.
//!
//! Result lines go to stdout; diagnostics go to stderr so they never mix with
//! output a harness might compare.

use std::str::FromStr;

use env_logger::{Builder, Env};
use joinery_foundation::{Error, ErrorKind, Result};
use log::LevelFilter;

/// Environment variable consulted when no `--log` flag is given.
pub const LOG_ENV: &str = "JOINERY_LOG";

/// Builds the logger: `JOINERY_LOG` filters by default (off when unset), and
/// a `--log` level overrides it.
#[must_use]
pub fn builder(flag: Option<LevelFilter>) -> Builder {
    configure(Env::new().filter_or(LOG_ENV, "off"), flag)
}

fn configure(env: Env<'_>, flag: Option<LevelFilter>) -> Builder {
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);
    if let Some(level) = flag {
        builder.filter_level(level);
    }
    builder
}

/// Installs the stderr logger.
///
/// # Errors
///
/// Returns an error if a logger was already installed.
pub fn init(flag: Option<LevelFilter>) -> Result<()> {
    builder(flag)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
}

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
///
/// # Errors
///
/// Returns a usage error for an unknown level name.
pub fn parse_level(name: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(name).map_err(|_| Error::usage(format!("unknown log level: {name}")))
}

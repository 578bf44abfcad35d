//! Joinery CLI entry point.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use joinery_engine::{CommandName, Engine};
use joinery_foundation::Result;
use joinery_runtime::logger::{self, LOG_ENV};
use joinery_runtime::{ReaderSource, Repl, RuntimeConfig, WriterSink, run_batch};
use log::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = RuntimeConfig::from_args(env::args().skip(1))?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("joinery {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logger::init(config.log_level)?;

    let mut engine = Engine::new().with_config(config.engine_config());

    if config.interactive {
        if let Some(path) = &config.input {
            let mut source = ReaderSource::new(BufReader::new(File::open(path)?));
            let mut sink = WriterSink::new(io::stdout().lock());
            run_batch(&mut engine, &mut source, &mut sink)?;
        }
        let mut repl = Repl::new()?.with_engine(engine);
        if config.input.is_some() {
            repl = repl.without_banner();
        }
        return repl.run();
    }

    let mut sink = WriterSink::new(io::stdout().lock());
    let written = match &config.input {
        Some(path) => {
            let mut source = ReaderSource::new(BufReader::new(File::open(path)?));
            run_batch(&mut engine, &mut source, &mut sink)?
        }
        None => {
            let mut source = ReaderSource::new(io::stdin().lock());
            run_batch(&mut engine, &mut source, &mut sink)?
        }
    };
    info!("wrote {written} result lines");

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mJoinery\x1b[0m - furniture manufacturer registry

\x1b[1mUSAGE:\x1b[0m
    joinery [OPTIONS] [FILE]

\x1b[1mARGUMENTS:\x1b[0m
    [FILE]    Read commands from FILE (default: stdin, or '-')

\x1b[1mOPTIONS:\x1b[0m
    -i, --interactive     Start an interactive session (after running FILE, if given)
        --abort-on-error  Stop the batch at the first unusable command
        --log <LEVEL>     Log to stderr: off, error, warn, info, debug, trace
                          (default: {LOG_ENV} or off)
    -h, --help            Print this help
    -V, --version         Print version

\x1b[1mCOMMANDS:\x1b[0m"
    );
    for name in CommandName::ALL {
        println!("    {}", name.usage());
    }
}

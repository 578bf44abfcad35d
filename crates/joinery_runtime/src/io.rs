//! Line-based input and output adapters.
//!
//! The engine never touches stdin or stdout. A [`LineSource`] hands it the
//! batch of command lines and a [`ResultSink`] renders the result lines.

use std::io::{BufRead, Write};

use joinery_engine::Engine;
use joinery_foundation::Result;
use joinery_storage::EntityFactory;
use log::debug;

/// Produces the batch of command lines for one run.
pub trait LineSource {
    /// Reads every remaining line.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying reader fails.
    fn read_lines(&mut self) -> Result<Vec<String>>;
}

/// Renders the result lines of one run.
pub trait ResultSink {
    /// Writes all results in order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying writer fails.
    fn write_results(&mut self, results: &[String]) -> Result<()>;
}

/// Reads lines from any buffered reader (stdin, a file).
///
/// Blank lines at the very end of the input are dropped; blank lines in the
/// middle are passed through and reported as malformed.
pub struct ReaderSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_lines(&mut self) -> Result<Vec<String>> {
        let mut lines = (&mut self.reader)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?;
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        debug!("read {} input lines", lines.len());
        Ok(lines)
    }
}

/// An in-memory source.
#[derive(Clone, Debug, Default)]
pub struct VecSource {
    lines: Vec<String>,
}

impl VecSource {
    /// Creates a source that yields the given lines once.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for VecSource {
    fn read_lines(&mut self) -> Result<Vec<String>> {
        Ok(std::mem::take(&mut self.lines))
    }
}

/// Writes one result per line to any writer (stdout, a file).
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for WriterSink<W> {
    fn write_results(&mut self, results: &[String]) -> Result<()> {
        for line in results {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects results in memory.
#[derive(Clone, Debug, Default)]
pub struct VecSink {
    /// Everything written so far, in order.
    pub results: Vec<String>,
}

impl ResultSink for VecSink {
    fn write_results(&mut self, results: &[String]) -> Result<()> {
        self.results.extend_from_slice(results);
        Ok(())
    }
}

/// Reads a whole batch from `source`, runs it, and renders it to `sink`.
///
/// Returns the number of result lines written.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails. Command failures are
/// never errors here; they are result lines.
pub fn run_batch<F, S, K>(engine: &mut Engine<F>, source: &mut S, sink: &mut K) -> Result<usize>
where
    F: EntityFactory,
    S: LineSource + ?Sized,
    K: ResultSink + ?Sized,
{
    let lines = source.read_lines()?;
    let results = engine.run_lines(&lines);
    sink.write_results(&results)?;
    Ok(results.len())
}

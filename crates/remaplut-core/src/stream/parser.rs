// crates/remaplut-core/src/stream/parser.rs

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::config::GenConfig;
use crate::error::{RemapError, Result};
use crate::literal::{format_literal, parse_binary_run, OutputWidth, BINARY_PREFIX};
use crate::remap::RemapTable;
use crate::stream::lines::BoundedLines;

/// Line prefix of a remap-update directive.
pub const REMAP_MARKER: &[u8] = b"##";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseState {
    Running,
    /// Terminal; `line` is the 1-based line whose processing (or reading) failed.
    Failed { line: u32 },
    Done,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: u32,
    pub remaps: u32,
    pub literals: u32,
}

/// Reads directive lines, keeps the active remap table and writes table text.
///
/// `##<spec>` lines replace the remap (and echo it as a `//` comment),
/// `0b<digits>` lines are remapped and written as `0b<width digits>,`.
/// Anything else is ignored.
pub struct DirectiveParser<W: Write> {
    width: OutputWidth,
    max_line_len: usize,
    table: RemapTable,
    out: W,
    line_no: u32,
    state: ParseState,
    summary: RunSummary,
}

impl<W: Write> DirectiveParser<W> {
    /// Validates `cfg`, applies its initial remap (echoed to `out`) and
    /// returns a parser in `Running`.
    pub fn new(cfg: &GenConfig, out: W) -> Result<Self> {
        cfg.validate()?;

        let mut p = Self {
            width: cfg.width,
            max_line_len: cfg.max_line_len,
            table: RemapTable::new(),
            out,
            line_no: 0,
            state: ParseState::Running,
            summary: RunSummary::default(),
        };

        if let Some(spec) = cfg.initial_remap.as_deref() {
            p.table.load_spec(spec.as_bytes())?;
            debug!(remap = spec, "initial remap applied");
            p.write_echo()?;
        }

        Ok(p)
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn table(&self) -> &RemapTable {
        &self.table
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Process one captured line (terminator included when present).
    ///
    /// Any error moves the parser to `Failed`; `Failed` and `Done` are both
    /// terminal and reject further lines.
    pub fn feed_line(&mut self, line: &[u8]) -> Result<()> {
        self.ensure_running()?;
        self.line_no += 1;
        self.summary.lines += 1;

        let res = self.process_line(line);
        if res.is_err() {
            self.state = ParseState::Failed { line: self.line_no };
        }
        res
    }

    /// Feed every line of `input` and move to `Done`.
    ///
    /// Stops at the first error; lines after it are not read.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<RunSummary> {
        self.ensure_running()?;
        for line in BoundedLines::new(input, self.max_line_len) {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    self.state = ParseState::Failed {
                        line: self.line_no + 1,
                    };
                    return Err(e.into());
                }
            };
            self.feed_line(&line)?;
        }
        self.state = ParseState::Done;
        debug!(
            lines = self.summary.lines,
            remaps = self.summary.remaps,
            literals = self.summary.literals,
            "input finished"
        );
        Ok(self.summary)
    }

    fn ensure_running(&self) -> Result<()> {
        match self.state {
            ParseState::Running => Ok(()),
            ParseState::Failed { line } => Err(RemapError::ParserHalted { line }),
            ParseState::Done => Err(RemapError::ParserFinished),
        }
    }

    fn process_line(&mut self, line: &[u8]) -> Result<()> {
        // Both classifiers run on every line.
        if let Some(rest) = line.strip_prefix(REMAP_MARKER) {
            self.table
                .load_line(rest)
                .map_err(|e| RemapError::RemapDirective {
                    line: self.line_no,
                    source: Box::new(e),
                })?;
            debug!(line = self.line_no, "remap updated");
            self.summary.remaps += 1;
            self.write_echo()?;
        }

        if let Some(rest) = line.strip_prefix(BINARY_PREFIX.as_bytes()) {
            let (v, digits) = parse_binary_run(rest);
            let o = self.table.apply(v);
            trace!(line = self.line_no, digits, input = v, output = o, "literal");
            self.summary.literals += 1;
            writeln!(self.out, "{},", format_literal(o, self.width))?;
        }

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_echo(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.table.echo(self.width))?;
        Ok(())
    }
}

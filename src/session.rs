//! Interactive lookup session
//!
//! The console loop: prompt, read one line, resolve and emit one report,
//! repeat. The session ends when input is exhausted or the line equals the
//! configured quit word case-insensitively — no report is emitted for that
//! line. Streams are generic so tests drive the loop with in-memory buffers.
//!
//! One query is fully resolved and written before the next line is read;
//! there is no overlap and no background work.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::render::Renderer;
use crate::report::ReportEngine;
use crate::utils::text;

/// One interactive session over a loaded census.
pub struct Session<'a> {
    engine: &'a ReportEngine,
    renderer: Renderer,
    quit_word: String,
}

impl<'a> Session<'a> {
    pub fn new(engine: &'a ReportEngine, renderer: Renderer, quit_word: impl Into<String>) -> Self {
        Session {
            engine,
            renderer,
            quit_word: quit_word.into(),
        }
    }

    /// Runs the loop until the quit word or end of input.
    ///
    /// Every non-terminal line — the empty line included, which matches
    /// every species — produces exactly one report or not-found message.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            self.renderer.prompt(&mut output)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            if text::eq_ignore_case(&line, &self.quit_word) {
                break;
            }

            debug!(keyword = %line, "lookup");
            match self.engine.lookup(&line) {
                Some(report) => self.renderer.report(&mut output, &report)?,
                None => self.renderer.not_found(&mut output, &line)?,
            }
        }

        output.flush()
    }
}

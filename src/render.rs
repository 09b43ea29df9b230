//! Presentation layer: message templates and report rendering
//!
//! The core hands this module structured results; every user-facing string
//! lives here in the `Messages` table, so the query layer never formats
//! display text. Two output modes: the classic console layout (tab-indented
//! species names, aligned popularity rows) and one JSON document per query.

use std::io::{self, Write};

use serde_json::json;

use crate::report::{BoroughStat, SpeciesReport};

/// Template table for every user-facing string.
///
/// `not_found` carries a `{}` placeholder for the rejected keyword.
#[derive(Debug, Clone)]
pub struct Messages {
    pub prompt: String,
    pub match_header: String,
    pub popularity_header: String,
    pub not_found: String,
}

impl Messages {
    /// The default strings with the terminate word spliced into the prompt.
    pub fn with_quit_word(quit_word: &str) -> Self {
        Messages {
            prompt: format!(
                "Enter the tree species to learn more about it (\"{quit_word}\" to stop):"
            ),
            ..Messages::default()
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            prompt: "Enter the tree species to learn more about it (\"quit\" to stop):".into(),
            match_header: "All matching species:".into(),
            popularity_header: "Popularity in the city:".into(),
            not_found: "There are no records of {} on NYC streets.".into(),
        }
    }
}

/// How query results are written to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Writes prompts and query outcomes in the configured mode.
#[derive(Debug, Clone)]
pub struct Renderer {
    messages: Messages,
    mode: OutputMode,
}

impl Renderer {
    pub fn new(messages: Messages, mode: OutputMode) -> Self {
        Renderer { messages, mode }
    }

    /// Text renderer with the default message table.
    pub fn text() -> Self {
        Renderer::new(Messages::default(), OutputMode::Text)
    }

    pub fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.messages.prompt)
    }

    /// Writes one successful report.
    pub fn report<W: Write>(&self, out: &mut W, report: &SpeciesReport) -> io::Result<()> {
        match self.mode {
            OutputMode::Text => {
                writeln!(out, "{}", self.messages.match_header)?;
                for name in &report.matched_names {
                    writeln!(out, "\t{name}")?;
                }
                writeln!(out)?;
                writeln!(out, "{}", self.messages.popularity_header)?;
                for stat in &report.boroughs {
                    writeln!(out, "{}", popularity_row(stat))?;
                }
                writeln!(out)
            }
            OutputMode::Json => {
                let doc = serde_json::to_string(report).map_err(io::Error::other)?;
                writeln!(out, "{doc}")
            }
        }
    }

    /// Writes the not-found outcome for `keyword`.
    pub fn not_found<W: Write>(&self, out: &mut W, keyword: &str) -> io::Result<()> {
        match self.mode {
            OutputMode::Text => {
                writeln!(out, "{}", self.messages.not_found.replacen("{}", keyword, 1))
            }
            OutputMode::Json => {
                let doc = json!({ "keyword": keyword, "found": false });
                writeln!(out, "{doc}")
            }
        }
    }
}

/// One aligned popularity line: label, `frequency(total)`, percentage.
///
/// An undefined proportion (borough with zero trees) renders as `--`.
fn popularity_row(stat: &BoroughStat) -> String {
    let fraction = format!(
        "{}({})",
        group_thousands(stat.frequency),
        group_thousands(stat.total)
    );

    match stat.proportion {
        Some(proportion) => format!(
            "\t{:<14}:{:>21}{:>9.2}%",
            stat.borough.label(),
            fraction,
            100.0 * proportion
        ),
        None => format!(
            "\t{:<14}:{:>21}{:>9}%",
            stat.borough.label(),
            fraction,
            "--"
        ),
    }
}

/// Decimal rendering with comma thousands separators.
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Output rendering - text, count, file-list and JSON modes, plus run stats
// stdout carries match data only; the stats block goes to stderr

use anyhow::Result;
use std::io::Write;

use crate::searcher::FileResult;

// ============================================================================
// OUTPUT MODE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Matched lines, optionally prefixed with label and line number
    Text,

    /// Per-input match counts (`-c`)
    Count,

    /// Names of inputs with at least one match (`-l`)
    FilesWithMatches,

    /// One JSON record per matched line (`--json`)
    Json,
}

// ============================================================================
// PRINTER
// ============================================================================

pub struct Printer {
    mode: OutputMode,
    show_labels: bool,
    show_line_numbers: bool,
}

impl Printer {
    pub fn new(mode: OutputMode, show_labels: bool, show_line_numbers: bool) -> Self {
        Printer {
            mode,
            show_labels,
            show_line_numbers,
        }
    }

    pub fn print_results<W: Write>(&self, results: &[FileResult], out: &mut W) -> Result<()> {
        match self.mode {
            OutputMode::Text => self.print_text(results, out),
            OutputMode::Count => self.print_counts(results, out),
            OutputMode::FilesWithMatches => self.print_matching_files(results, out),
            OutputMode::Json => self.print_json(results, out),
        }
    }

    fn print_text<W: Write>(&self, results: &[FileResult], out: &mut W) -> Result<()> {
        for result in results {
            for matched in &result.matches {
                match (self.show_labels, self.show_line_numbers) {
                    (true, true) => writeln!(
                        out,
                        "{}:{}:{}",
                        matched.label, matched.line_number, matched.line
                    )?,
                    (true, false) => writeln!(out, "{}:{}", matched.label, matched.line)?,
                    (false, true) => writeln!(out, "{}:{}", matched.line_number, matched.line)?,
                    (false, false) => writeln!(out, "{}", matched.line)?,
                }
            }
        }
        Ok(())
    }

    fn print_counts<W: Write>(&self, results: &[FileResult], out: &mut W) -> Result<()> {
        for result in results {
            if result.binary_skipped {
                continue;
            }
            if self.show_labels {
                writeln!(out, "{}:{}", result.label, result.matches.len())?;
            } else {
                writeln!(out, "{}", result.matches.len())?;
            }
        }
        Ok(())
    }

    fn print_matching_files<W: Write>(&self, results: &[FileResult], out: &mut W) -> Result<()> {
        for result in results {
            if result.matched() {
                writeln!(out, "{}", result.label)?;
            }
        }
        Ok(())
    }

    fn print_json<W: Write>(&self, results: &[FileResult], out: &mut W) -> Result<()> {
        for result in results {
            for matched in &result.matches {
                writeln!(out, "{}", serde_json::to_string(matched)?)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// SEARCH SUMMARY
// ============================================================================

/// Aggregate stats for the whole run (`--stats`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub inputs_searched: usize,
    pub inputs_matched: usize,
    pub total_matches: usize,
    pub lines_scanned: usize,
    pub binary_skipped: usize,
}

impl SearchSummary {
    pub fn from_results(results: &[FileResult]) -> Self {
        SearchSummary {
            inputs_searched: results.len(),
            inputs_matched: results.iter().filter(|r| r.matched()).count(),
            total_matches: results.iter().map(|r| r.matches.len()).sum(),
            lines_scanned: results.iter().map(|r| r.lines_scanned).sum(),
            binary_skipped: results.iter().filter(|r| r.binary_skipped).count(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "searched {} lines across {} inputs: {} matching lines in {} inputs ({} binary skipped)",
            self.lines_scanned,
            self.inputs_searched,
            self.total_matches,
            self.inputs_matched,
            self.binary_skipped
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

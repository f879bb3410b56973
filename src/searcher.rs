// Search engine - applies a compiled Matcher to readers and files
// Every match carries provenance: input label, 1-based line number, spans

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::pattern::{MatchSpan, Matcher};

/// Label used for stdin input, mirroring grep
pub const STDIN_LABEL: &str = "(standard input)";

// How far into a file we look for a NUL byte before treating it as binary
const BINARY_SNIFF_BYTES: usize = 4096;

// ============================================================================
// SEARCH OPTIONS
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Select non-matching lines instead (`-v`)
    pub invert: bool,

    /// Stop after this many matching lines per input (`-m`)
    pub max_count: Option<usize>,
}

// ============================================================================
// RESULT TYPES
// ============================================================================

/// One matched line with full provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchLine {
    /// Input label (file path, or stdin marker)
    pub label: String,

    /// 1-based line number within the input
    pub line_number: usize,

    /// The line text, terminator stripped, lossily decoded
    pub line: String,

    /// Byte spans of the matches within `line` (empty under `-v`)
    pub spans: Vec<MatchSpan>,
}

/// Outcome of searching one input
#[derive(Debug, Clone)]
pub struct FileResult {
    pub label: String,
    pub matches: Vec<MatchLine>,
    pub lines_scanned: usize,
    pub binary_skipped: bool,
}

impl FileResult {
    fn empty(label: &str) -> Self {
        FileResult {
            label: label.to_string(),
            matches: Vec::new(),
            lines_scanned: 0,
            binary_skipped: false,
        }
    }

    fn binary(label: &str) -> Self {
        FileResult {
            binary_skipped: true,
            ..FileResult::empty(label)
        }
    }

    pub fn matched(&self) -> bool {
        !self.matches.is_empty()
    }
}

// ============================================================================
// SEARCH ENGINE
// ============================================================================

pub struct SearchEngine {
    matcher: Matcher,
    options: SearchOptions,
}

impl SearchEngine {
    pub fn new(matcher: Matcher, options: SearchOptions) -> Self {
        SearchEngine { matcher, options }
    }

    /// Search any buffered reader line by line
    ///
    /// Lines are read as raw bytes so invalid UTF-8 degrades to replacement
    /// characters instead of aborting the run. A final line without a
    /// trailing newline is still searched.
    pub fn search_reader<R: BufRead>(&self, label: &str, mut reader: R) -> Result<FileResult> {
        let mut result = FileResult::empty(label);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let bytes_read = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("Failed to read from {}", label))?;
            if bytes_read == 0 {
                break;
            }
            result.lines_scanned += 1;

            // Strip the line terminator, tolerating CRLF input
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            let line = String::from_utf8_lossy(&buf);
            if self.matcher.is_match(&line) == self.options.invert {
                continue;
            }

            // Inverted matches have no meaningful spans
            let spans = if self.options.invert {
                Vec::new()
            } else {
                self.matcher.find_spans(&line)
            };

            result.matches.push(MatchLine {
                label: label.to_string(),
                line_number: result.lines_scanned,
                line: line.into_owned(),
                spans,
            });

            if let Some(max) = self.options.max_count {
                if result.matches.len() >= max {
                    break;
                }
            }
        }

        Ok(result)
    }

    /// Search a file on disk, skipping binary content
    pub fn search_file(&self, path: &Path) -> Result<FileResult> {
        let label = path.display().to_string();

        let file = File::open(path).with_context(|| format!("Failed to open {}", label))?;
        let mut reader = BufReader::with_capacity(BINARY_SNIFF_BYTES, file);

        let looks_binary = reader
            .fill_buf()
            .with_context(|| format!("Failed to read from {}", label))?
            .contains(&0u8);
        if looks_binary {
            return Ok(FileResult::binary(&label));
        }

        self.search_reader(&label, reader)
    }

    /// Search standard input
    pub fn search_stdin(&self) -> Result<FileResult> {
        let stdin = io::stdin();
        self.search_reader(STDIN_LABEL, stdin.lock())
    }
}

// ============================================================================
// TESTS
// ============================================================================

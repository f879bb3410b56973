// Pattern compilation - regex and fixed-string matchers
// One compiled Matcher per run, applied line by line by the search engine

use anyhow::{Context, Result};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

// ============================================================================
// MATCH SPAN
// ============================================================================

/// Byte offsets of a single match within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        MatchSpan { start, end }
    }
}

// ============================================================================
// MATCHER OPTIONS
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct MatcherOptions {
    /// Case-insensitive matching (`-i`)
    pub ignore_case: bool,

    /// Treat the pattern as a literal string, not a regex (`-F`)
    pub fixed_string: bool,
}

// ============================================================================
// MATCHER
// ============================================================================

/// Compiled search pattern
///
/// The empty pattern matches every line (with no spans), so it gets its own
/// variant instead of round-tripping through the regex engine.
#[derive(Debug)]
pub enum Matcher {
    /// Regex-backed matcher (the default)
    Regex(regex::Regex),

    /// Literal substring matcher (`--fixed-strings`)
    /// `needle` is stored lowercased when `fold_case` is set
    Literal { needle: String, fold_case: bool },

    /// Empty pattern - matches everything
    MatchAll,
}

impl Matcher {
    /// Compile a pattern according to the given options
    pub fn new(pattern: &str, options: MatcherOptions) -> Result<Self> {
        if pattern.is_empty() {
            return Ok(Matcher::MatchAll);
        }

        if options.fixed_string {
            let needle = if options.ignore_case {
                pattern.to_lowercase()
            } else {
                pattern.to_string()
            };
            return Ok(Matcher::Literal {
                needle,
                fold_case: options.ignore_case,
            });
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(options.ignore_case)
            .build()
            .with_context(|| format!("Failed to compile pattern: {:?}", pattern))?;

        Ok(Matcher::Regex(regex))
    }

    /// Check whether the line contains at least one match
    pub fn is_match(&self, line: &str) -> bool {
        match self {
            Matcher::Regex(regex) => regex.is_match(line),
            Matcher::Literal { needle, fold_case } => {
                if *fold_case {
                    line.to_lowercase().contains(needle.as_str())
                } else {
                    line.contains(needle.as_str())
                }
            }
            Matcher::MatchAll => true,
        }
    }

    /// Byte spans of every match in the line, ordered and non-overlapping
    ///
    /// Zero-width regex matches are dropped. Case-folded literal spans are
    /// only reported when offsets survive lowercasing (ASCII input);
    /// otherwise the line is still a match but carries no spans.
    pub fn find_spans(&self, line: &str) -> Vec<MatchSpan> {
        match self {
            Matcher::Regex(regex) => regex
                .find_iter(line)
                .filter(|m| m.start() != m.end())
                .map(|m| MatchSpan::new(m.start(), m.end()))
                .collect(),
            Matcher::Literal { needle, fold_case } => {
                if !fold_case {
                    return line
                        .match_indices(needle.as_str())
                        .map(|(start, _)| MatchSpan::new(start, start + needle.len()))
                        .collect();
                }
                if line.is_ascii() && needle.is_ascii() {
                    let lowered = line.to_ascii_lowercase();
                    return lowered
                        .match_indices(needle.as_str())
                        .map(|(start, _)| MatchSpan::new(start, start + needle.len()))
                        .collect();
                }
                // Lowercasing non-ASCII text can shift byte offsets
                Vec::new()
            }
            Matcher::MatchAll => Vec::new(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

// grss - line-oriented search tool
// Exposes the engine as a library for use by the CLI binary and tests

pub mod cli;
pub mod output;   // Rendering: text, count, file-list, JSON, stats
pub mod pattern;  // Pattern compilation: regex and fixed-string matchers
pub mod searcher; // The search engine itself
pub mod walk;     // Input discovery: path expansion and directory walking

// Re-export commonly used types
pub use cli::Args;
pub use output::{OutputMode, Printer, SearchSummary};
pub use pattern::{MatchSpan, Matcher, MatcherOptions};
pub use searcher::{FileResult, MatchLine, SearchEngine, SearchOptions, STDIN_LABEL};
pub use walk::FileWalker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Command-line surface

use clap::Parser;
use std::path::PathBuf;

use crate::output::OutputMode;
use crate::pattern::MatcherOptions;
use crate::searcher::SearchOptions;

#[derive(Parser, Debug)]
#[command(name = "grss")]
#[command(version)]
#[command(about = "Searches files for lines matching a pattern")]
pub struct Args {
    /// Pattern to search for (a regex unless --fixed-strings is given)
    pub pattern: String,

    /// Files or directories to search; empty or "-" means stdin
    pub paths: Vec<PathBuf>,

    #[arg(short = 'i', long, help = "Case-insensitive matching")]
    pub ignore_case: bool,

    #[arg(short = 'F', long, help = "Treat the pattern as a literal string")]
    pub fixed_strings: bool,

    #[arg(short = 'v', long, help = "Select lines that do not match")]
    pub invert_match: bool,

    #[arg(
        short = 'c',
        long,
        conflicts_with = "files_with_matches",
        help = "Print the number of matching lines per input"
    )]
    pub count: bool,

    #[arg(short = 'l', long, help = "Print only the names of inputs with matches")]
    pub files_with_matches: bool,

    #[arg(short = 'n', long, help = "Prefix each matching line with its line number")]
    pub line_number: bool,

    #[arg(
        short = 'm',
        long,
        value_name = "NUM",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Stop after NUM matching lines per input"
    )]
    pub max_count: Option<u64>,

    #[arg(short = 'r', long, help = "Recurse into directories")]
    pub recursive: bool,

    #[arg(long, help = "Include hidden files and directories when recursing")]
    pub hidden: bool,

    #[arg(long, help = "Emit one JSON record per matching line")]
    pub json: bool,

    #[arg(long, help = "Print run statistics to stderr")]
    pub stats: bool,
}

impl Args {
    /// Output mode, with --json taking precedence over -c and -l
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.count {
            OutputMode::Count
        } else if self.files_with_matches {
            OutputMode::FilesWithMatches
        } else {
            OutputMode::Text
        }
    }

    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions {
            ignore_case: self.ignore_case,
            fixed_string: self.fixed_strings,
        }
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            invert: self.invert_match,
            max_count: self.max_count.map(|n| n as usize),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(argv)
    }

    #[test]
    fn test_pattern_and_paths() {
        let args = parse(&["grss", "needle", "a.txt", "b.txt"]).unwrap();

        assert_eq!(args.pattern, "needle");
        assert_eq!(
            args.paths,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
        assert_eq!(args.output_mode(), OutputMode::Text);
    }

    #[test]
    fn test_pattern_is_required() {
        assert!(parse(&["grss"]).is_err());
    }

    #[test]
    fn test_short_flags() {
        let args = parse(&["grss", "-i", "-F", "-v", "-n", "-r", "pat", "dir"]).unwrap();

        assert!(args.ignore_case);
        assert!(args.fixed_strings);
        assert!(args.invert_match);
        assert!(args.line_number);
        assert!(args.recursive);
        assert!(args.matcher_options().ignore_case);
        assert!(args.search_options().invert);
    }

    #[test]
    fn test_count_conflicts_with_files_with_matches() {
        assert!(parse(&["grss", "-c", "-l", "pat"]).is_err());
    }

    #[test]
    fn test_json_overrides_count() {
        let args = parse(&["grss", "--json", "-c", "pat"]).unwrap();
        assert_eq!(args.output_mode(), OutputMode::Json);
    }

    #[test]
    fn test_max_count_zero_rejected() {
        assert!(parse(&["grss", "-m", "0", "pat"]).is_err());

        let args = parse(&["grss", "-m", "3", "pat"]).unwrap();
        assert_eq!(args.search_options().max_count, Some(3));
    }
}

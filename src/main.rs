use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use grss::{Args, FileResult, FileWalker, Matcher, Printer, SearchEngine, SearchSummary};

// Exit codes follow grep: 0 = matched, 1 = no match, 2 = error
fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("grss: {:#}", err);
            process::exit(2);
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let matcher = Matcher::new(&args.pattern, args.matcher_options())?;
    let engine = SearchEngine::new(matcher, args.search_options());

    let results = search_inputs(args, &engine)?;

    // Labels appear whenever more than one input was searched
    let show_labels = results.len() > 1;
    let printer = Printer::new(args.output_mode(), show_labels, args.line_number);

    let stdout = std::io::stdout();
    printer.print_results(&results, &mut stdout.lock())?;

    let summary = SearchSummary::from_results(&results);
    if args.stats {
        eprintln!("grss: {}", summary.summary());
    }

    Ok(summary.total_matches > 0)
}

fn search_inputs(args: &Args, engine: &SearchEngine) -> Result<Vec<FileResult>> {
    if args.paths.is_empty() {
        return Ok(vec![engine.search_stdin()?]);
    }

    // "-" selects stdin explicitly; it is read once even if repeated
    let (stdin_markers, file_paths): (Vec<PathBuf>, Vec<PathBuf>) = args
        .paths
        .iter()
        .cloned()
        .partition(|path| path.as_os_str() == "-");

    let walker = FileWalker::new(args.recursive, args.hidden);
    let files = walker.collect_files(&file_paths)?;

    let mut results = Vec::with_capacity(files.len() + 1);
    if !stdin_markers.is_empty() {
        results.push(engine.search_stdin()?);
    }
    for file in &files {
        results.push(engine.search_file(file)?);
    }

    Ok(results)
}

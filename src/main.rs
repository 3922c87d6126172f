use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use linesort::report::{render_full, render_summary, Report};
use linesort::routing::{
    collect_sources, route, sinks, write_partitions, CompositeObserver, FileObserver,
    RunObserver, RunSeverity, SinkOptions, StdErrObserver,
};

#[derive(Parser, Debug)]
#[command(name = "linesort")]
#[command(about = "Classify text-file lines as integers, floats, or strings and report statistics", long_about = None)]
#[command(version)]
struct Cli {
    /// Input files, one record per line
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory the partition files are written into
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Prefix prepended to the output file names
    #[arg(short = 'p', long, default_value = "")]
    prefix: String,

    /// Append to existing partition files instead of truncating
    #[arg(short = 'a', long)]
    append: bool,

    /// Print the full statistics table instead of the line-count summary
    #[arg(short = 'f', long)]
    full: bool,

    /// Print statistics as JSON instead of a table
    #[arg(long, conflicts_with = "full")]
    json: bool,

    /// Append run events to a log file
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let observer: Arc<dyn RunObserver> = match &cli.log_file {
        Some(path) => Arc::new(CompositeObserver::new(vec![
            Arc::new(StdErrObserver),
            Arc::new(FileObserver::new(path)),
        ])),
        None => Arc::new(StdErrObserver),
    };

    let output_dir = if sinks::is_valid_dir(&cli.output_dir) {
        cli.output_dir.clone()
    } else {
        eprintln!(
            "Error: path {} does not exist. Using current directory.",
            cli.output_dir.display()
        );
        PathBuf::from(".")
    };

    let sources = collect_sources(&cli.files, observer.as_ref());
    if sources.is_empty() {
        eprintln!("Error: none of the input files exist.");
        return ExitCode::FAILURE;
    }

    let partitions = route(&sources);

    let options = SinkOptions {
        dir: output_dir,
        prefix: cli.prefix.clone(),
        append: cli.append,
    };
    // A write failure aborts the write phase only; the in-memory partitions
    // are intact and statistics still print.
    if let Err(err) = write_partitions(&sources, &options) {
        observer.on_failure(RunSeverity::Error, &err);
    }

    if cli.json {
        println!("{}", Report::from_partitions(&partitions).to_json());
    } else if cli.full {
        print!("{}", render_full(&partitions));
    } else {
        print!("{}", render_summary(&partitions));
    }

    ExitCode::SUCCESS
}

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rank_check::config::{Overrides, Settings};
use rank_check::output;
use rank_check::scoring::{self, RankRow};
use rank_check::stats;

// Exit codes (clap itself exits with 2 on usage errors)
const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_INPUT: i32 = 3;
const EXIT_VALIDATION: i32 = 4;
const EXIT_OUTPUT: i32 = 5;

#[derive(Parser, Debug)]
#[command(name = "rank-check")]
#[command(
    about = "Count order disagreements between categorical and numerical rankings",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// CSV file with the categorical ranking (smaller = higher precedence)
    categorical: PathBuf,

    /// CSV file with the numerical ranking (larger = higher precedence)
    numerical: PathBuf,

    /// Where to write one inconsistency count per subject (defaults to inconsistencies.csv)
    output: Option<PathBuf>,

    /// Enable verbose logging, including a per-subject breakdown
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/rank-check/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Round the displayed mean instead of truncating it
    #[arg(long)]
    round_mean: bool,

    /// Stop at the shorter input instead of failing when row counts differ
    #[arg(long)]
    truncate_rows: bool,

    /// Score subjects on a thread pool
    #[arg(long)]
    parallel: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Command-line values that take precedence over the config file
    fn overrides(&self) -> Overrides {
        Overrides {
            output: self.output.clone(),
            round_mean: self.round_mean,
            truncate_rows: self.truncate_rows,
            parallel: self.parallel,
        }
    }
}

fn read_or_exit(path: &Path, verbose: bool) -> Vec<RankRow> {
    let read_start = Instant::now();
    match rank_check::input::read_rows(path) {
        Ok(rows) => {
            if verbose {
                eprintln!(
                    "Read {} rows from {} in {:?}",
                    rows.len(),
                    path.display(),
                    read_start.elapsed()
                );
            }
            rows
        }
        Err(e) => {
            eprintln!("{}", e);
            if verbose {
                if let Some(line) = e.line() {
                    eprintln!(
                        "Stopped reading {} at line {}; no output written",
                        path.display(),
                        line
                    );
                }
            }
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = match rank_check::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let settings = Settings::resolve(&config, cli.overrides());

    if cli.verbose {
        eprintln!(
            "Settings: output={}, mean={:?}, row_count_mismatch={:?}, parallel={}",
            settings.output.display(),
            settings.mean_display,
            settings.options.row_count_policy,
            settings.options.parallel
        );
    }

    let categorical_rows = read_or_exit(&cli.categorical, cli.verbose);
    let numerical_rows = read_or_exit(&cli.numerical, cli.verbose);

    // Validate shapes up front so every bad subject is reported at once
    if let Err(errors) = scoring::validate_rows(
        &categorical_rows,
        &numerical_rows,
        settings.options.row_count_policy,
    ) {
        eprintln!("Validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_VALIDATION);
    }

    let score_start = Instant::now();
    let counts = match scoring::score_all(&categorical_rows, &numerical_rows, settings.options) {
        Ok(counts) => counts,
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(EXIT_VALIDATION);
        }
    };

    if cli.verbose {
        eprintln!("Scored {} subjects in {:?}", counts.len(), score_start.elapsed());
        if categorical_rows.len() != numerical_rows.len() {
            eprintln!(
                "Ignored {} surplus rows (row counts {} vs {})",
                categorical_rows.len().abs_diff(numerical_rows.len()),
                categorical_rows.len(),
                numerical_rows.len()
            );
        }

        let use_colors = std::io::IsTerminal::is_terminal(&std::io::stderr());
        for (subject, (cat, num)) in categorical_rows.iter().zip(&numerical_rows).enumerate() {
            // Shapes were validated above
            if let Ok(detail) = scoring::score_subject_detailed(subject, cat, num) {
                eprintln!("{}", output::format_subject_detail(&detail, use_colors));
            }
        }
    }

    let summary = stats::summarize(&counts);
    if cli.json {
        match output::format_summary_json(summary.as_ref(), settings.mean_display) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize summary: {}", e);
                std::process::exit(EXIT_OUTPUT);
            }
        }
    } else {
        let use_colors = output::should_use_colors();
        println!(
            "{}",
            output::format_summary(summary.as_ref(), settings.mean_display, use_colors)
        );
    }

    if let Err(e) = output::write_counts(&settings.output, &counts) {
        eprintln!("Output error: {:#}", e);
        std::process::exit(EXIT_OUTPUT);
    }

    if cli.verbose {
        eprintln!();
        eprintln!(
            "Wrote {} counts to {} in {:?}",
            counts.len(),
            settings.output.display(),
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}

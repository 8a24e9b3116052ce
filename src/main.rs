//! CLI entry point for hefty

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use hefty::{
    DEFAULT_CAPACITY, WalkConfig, WalkError, Walker, print_report, print_report_json, print_totals,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hefty")]
#[command(about = "Report the largest files in a directory tree")]
#[command(version)]
struct Args {
    /// Directory to search
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Number of largest files to report
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_CAPACITY)]
    top: usize,

    /// Descend into hidden directories instead of skipping them
    #[arg(long)]
    hidden: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    if args.top == 0 {
        eprintln!("hefty: --top must be a positive integer");
        process::exit(1);
    }

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let timer = Instant::now();
    let walker = Walker::new(WalkConfig {
        capacity: args.top,
        skip_hidden: !args.hidden,
    });

    let report = match walker.walk(&root) {
        Ok(report) => report,
        Err(WalkError::InvalidCapacity) => {
            eprintln!("hefty: --top must be a positive integer");
            process::exit(1);
        }
        Err(WalkError::Aborted { stats, source, .. }) => {
            eprintln!("hefty: walk aborted: {}", source);
            eprintln!("hefty: totals up to the error:");
            let mut stderr = std::io::stderr();
            let _ = print_totals(&mut stderr, &stats);
            process::exit(1);
        }
    };
    let elapsed = timer.elapsed();

    let result = if args.json {
        print_report_json(&report)
    } else {
        print_report(&report, elapsed, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("hefty: error writing output: {}", e);
        process::exit(1);
    }
}

//! Rendering of walk results to the terminal.
//!
//! Pure presentation: everything here consumes a finished [`WalkReport`]
//! and writes either a colorized human-readable summary or JSON.

use std::io::{self, Write};
use std::time::Duration;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::walk::{WalkReport, WalkStats};

/// Print the ranked files and totals to stdout with optional color.
pub fn print_report(report: &WalkReport, elapsed: Duration, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    stdout.set_color(&bold)?;
    writeln!(stdout, "Largest Files")?;
    stdout.reset()?;
    writeln!(stdout, "─────────────")?;

    print_totals(&mut stdout, &report.stats)?;
    writeln!(stdout)?;

    let mut name_color = ColorSpec::new();
    name_color.set_fg(Some(Color::Cyan));

    let mut top_size: u64 = 0;
    for (rank, file) in report.largest.iter().enumerate() {
        write!(stdout, "{:>3}. ", rank + 1)?;
        stdout.set_color(&name_color)?;
        write!(stdout, "{:<30}", file.name)?;
        stdout.reset()?;
        writeln!(stdout, "{:>8}  {}", format_size(file.size), file.path.display())?;
        top_size += file.size;
    }

    writeln!(stdout)?;
    stdout.set_color(&bold)?;
    write!(stdout, "Top {} total: ", report.largest.len())?;
    stdout.reset()?;
    writeln!(stdout, "{}", format_size(top_size))?;
    writeln!(
        stdout,
        "Completed in {}",
        humantime::format_duration(truncate_to_millis(elapsed))
    )?;

    Ok(())
}

/// Print the totals alone. Used for the partial summary after an aborted
/// walk, and as the header of the full report.
pub fn print_totals<W: Write>(out: &mut W, stats: &WalkStats) -> io::Result<()> {
    writeln!(
        out,
        "Entries searched:    {}",
        format_number(stats.entries_visited)
    )?;
    writeln!(
        out,
        "Hidden dirs skipped: {}",
        format_number(stats.directories_skipped)
    )?;
    writeln!(
        out,
        "Tree size:           {}",
        format_size(stats.cumulative_size)
    )?;
    Ok(())
}

/// Print the report as JSON.
pub fn print_report_json(report: &WalkReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format a number with thousand separators.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, *c);
    }

    result
}

/// humantime prints nanosecond precision; sub-millisecond noise only
/// clutters the summary line.
fn truncate_to_millis(d: Duration) -> Duration {
    Duration::from_millis(d.as_millis() as u64)
}

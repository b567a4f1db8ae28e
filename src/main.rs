/// Main entry point for the habit-grid inspection CLI
///
/// This binary loads a habit document (markdown note with frontmatter,
/// YAML, or JSON), runs the computation engine over a display range, and
/// prints the grid plus the metrics summary. All real work happens in
/// the library; this is presentation only.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use habit_grid::{aggregate, build_display, dates, DateRange, Defaults, DisplayEntry};

/// Command line arguments for the habit-grid CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Habit document to inspect (markdown with frontmatter, YAML, or JSON)
    file: PathBuf,

    /// Number of days to display, ending at today
    #[arg(long, default_value_t = 21)]
    days: u32,

    /// Reference "today" as YYYY-MM-DD (defaults to the system date)
    #[arg(long)]
    today: Option<String>,

    /// Show newest days first
    #[arg(long)]
    reverse: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn cell(entry: &DisplayEntry) -> char {
    if entry.outside_range {
        ' '
    } else if entry.ticked {
        '#'
    } else if entry.frozen {
        '*'
    } else if !entry.matches_frequency {
        '.'
    } else {
        '_'
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "trace"
    } else if args.debug {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_grid={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout clean for the grid
        .init();

    let today = match &args.today {
        Some(value) => dates::parse_day(value)?,
        None => chrono::Local::now().date_naive(),
    };

    info!(file = %args.file.display(), %today, "loading habit document");

    let frontmatter = habit_grid::load_document(&args.file)?;
    let config = frontmatter.resolve(&Defaults::default())?;

    let range = DateRange::ending_at(today, args.days, args.reverse);
    let grid = build_display(&frontmatter.entries, &config, &range, today);
    let metrics = aggregate(&frontmatter.entries, &config, &range, today);

    let title = frontmatter
        .title
        .as_deref()
        .or_else(|| args.file.file_stem().and_then(|s| s.to_str()))
        .unwrap_or("habit");

    println!("{}", title);
    println!(
        "{} .. {}  ({} days{})",
        dates::format_day(range.start),
        dates::format_day(range.end),
        range.num_days(),
        if args.reverse { ", newest first" } else { "" }
    );
    println!("{}", grid.iter().map(cell).collect::<String>());
    println!();
    println!(
        "current streak:   {}  (longest {})",
        metrics.current_streak, metrics.longest_streak
    );
    println!("completions:      {}", metrics.total_completions);
    println!("success rate:     {:.1}%", metrics.success_rate);
    println!(
        "per week / month: {:.2} / {:.2}",
        metrics.average_per_week, metrics.average_per_month
    );
    if let (Some(total), Some(average)) = (metrics.total_value, metrics.average_value) {
        let unit = config.unit.as_deref().unwrap_or("");
        println!("value total:      {:.1} {}", total, unit);
        println!("value average:    {:.1} {}", average, unit);
    }

    Ok(())
}

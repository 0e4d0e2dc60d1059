use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use compute::{Outcome, Timesheet};
use config::Config;
use data::{format_hours, Entry};
use paths::{ensure_dir, DayPaths};
use prompt::{collect_entry, LinePrompter, Prompter, TerminalPrompter};
use read::read_day;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use write::write_day;

mod compute;
mod config;
mod data;
mod paths;
mod prompt;
mod read;
mod write;

/// Merges `entry` into the day file for `now` under `root` and writes it back.
fn add_entry<Tz: TimeZone>(
    root: &Path,
    entry: &Entry,
    now: &DateTime<Tz>,
) -> Result<(DayPaths, Outcome), anyhow::Error> {
    let paths = DayPaths::for_day(root, now);
    paths.ensure_dirs()?;

    let mut sheet = Timesheet::new(read_day(&paths.file)?);
    let timestamp = now
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    let outcome = sheet.add(entry, timestamp)?;
    tracing::info!(?outcome, file = %paths.file.display(), "merged entry");

    write_day(&paths.file, &sheet.rows)?;
    Ok((paths, outcome))
}

fn run() -> Result<(), anyhow::Error> {
    println!("🕐 Time Tracker 9000");
    println!("===================");

    let config = Config::load()?;
    tracing::debug!(?config, "loaded configuration");
    ensure_dir(&config.root)?;

    let mut prompter: Box<dyn Prompter> = if std::io::stdin().is_terminal() {
        Box::new(TerminalPrompter::new())
    } else {
        Box::new(LinePrompter::new(std::io::stdin().lock(), std::io::stdout()))
    };
    let entry = collect_entry(prompter.as_mut())?;

    let (paths, outcome) = add_entry(&config.root, &entry, &Local::now())?;
    match outcome {
        Outcome::Updated { index, total } => {
            tracing::debug!(row = index, "accumulated into existing row");
            println!("Updated existing entry. Total hours: {}", format_hours(total));
        }
        Outcome::Added => println!("Added new entry"),
    }
    println!("Entry saved to: {}", paths.file.display());
    println!("Date: {}", paths.date);
    println!("Hours: {}", format_hours(entry.hours));
    println!("Category: {}", entry.category);
    println!("Description: {}", entry.description);
    println!("Sub-Category: {}", entry.sub_category);
    println!("\n✅ Time entry recorded successfully!");
    Ok(())
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

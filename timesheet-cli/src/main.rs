mod cli;
mod config;
mod entries;
mod render;

use std::{fs::File, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, PeriodArgs};
use config::Settings;
use timesheet::{domain::Period, export_rows, replication_request_for, write_csv, EntryIndex};

fn main() -> Result<()> {
    dotenvy::from_filename(".env.local").ok();

    let cli = Cli::parse();
    let settings = Settings::load()?;
    init_tracing(&settings.log_filter);

    match cli.command {
        Commands::Summary(args) => {
            let (period, index) = load_period(&args, &settings)?;
            print!("{}", render::summary(&period, &index, settings.overflow_limit));
        }
        Commands::Grid(args) => {
            let (period, index) = load_period(&args, &settings)?;
            print!("{}", render::grid(&period, &index));
        }
        Commands::Export { period, out } => {
            let (period, index) = load_period(&period, &settings)?;
            let rows = export_rows(&period, &index);
            match out {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    write_csv(&rows, file)?;
                    tracing::info!(rows = rows.len(), path = %path.display(), "exported period");
                }
                None => write_csv(&rows, io::stdout().lock())?,
            }
        }
        Commands::Replicate(args) => {
            let period = resolve_period(&args, &settings);
            let request = replication_request_for(&period)
                .context("Copying the previous period is only available in the weekly view")?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::ConfigPath => {
            let path = Settings::config_path()?;
            if Settings::write_default_if_missing(&path)? {
                println!("Created default config at {}", path.display());
            }
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();
}

/// The period selected by `--view`, `--date` and `--shift`, falling back to
/// the configured view and today.
fn resolve_period(args: &PeriodArgs, settings: &Settings) -> Period {
    let kind = args.view.unwrap_or(settings.default_view);
    let period = match &args.date {
        Some(key) => Period::new(kind, key.date()),
        None => timesheet::current(kind),
    };
    timesheet::shift(period, args.shift)
}

fn load_period(args: &PeriodArgs, settings: &Settings) -> Result<(Period, EntryIndex)> {
    let period = resolve_period(args, settings);
    let entries_path: Option<PathBuf> = args
        .entries
        .clone()
        .or_else(|| settings.entries_path.clone());
    let index = entries::load_index(entries_path.as_deref())?;

    let range = period.range();
    tracing::debug!(kind = %period.kind, start = %range.start, end = %range.end, "resolved period");
    Ok((period, index))
}

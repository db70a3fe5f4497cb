// Rust Week Calendar
// Prints the header layout for a calendar configuration

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use rust_week_calendar::models::calendar_day::CalendarDay;
use rust_week_calendar::models::layout::CalendarLayout;
use rust_week_calendar::models::settings::CalendarConfig;
use rust_week_calendar::services::layout::{
    build_headers_with_options, warn_unknown_option, DefaultRenderers, HeaderContent,
};
use rust_week_calendar::services::settings::{merge_shallow, PartialConfig, SettingsService};
use rust_week_calendar::utils::format::minutes_to_timestamp_string;

#[derive(Parser)]
#[command(name = "rust-week-calendar")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Options file (defaults to the per-user calendar.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of day columns (1-8)
    #[arg(long)]
    day_count: Option<u8>,

    /// First minute of the day shown
    #[arg(long)]
    start_minutes: Option<i64>,

    /// Last minute of the day shown
    #[arg(long)]
    end_minutes: Option<i64>,

    /// Minutes between time headers
    #[arg(long)]
    displayed_interval: Option<u32>,

    /// Minutes per grid row
    #[arg(long)]
    minute_precision: Option<u32>,

    /// Leftmost day, e.g. "sunday"
    #[arg(long)]
    week_start: Option<CalendarDay>,

    /// Write the resolved options back to the options file
    #[arg(long)]
    save: bool,

    /// Print the layout as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> PartialConfig {
        PartialConfig {
            day_count: self.day_count,
            start_minutes: self.start_minutes,
            end_minutes: self.end_minutes,
            displayed_interval: self.displayed_interval,
            minute_precision: self.minute_precision,
            week_start: self.week_start,
            ..PartialConfig::default()
        }
    }

    fn settings_service(&self) -> Option<SettingsService> {
        match &self.config {
            Some(path) => Some(SettingsService::new(path.clone())),
            None => SettingsService::user_default(),
        }
    }
}

/// Write `config` for `--save`; fails when no options file location resolved.
fn save_options(service: Option<&SettingsService>, config: &CalendarConfig) -> Result<()> {
    let service = service.ok_or_else(|| {
        anyhow!("Cannot save options: no options file location found, pass --config <PATH>")
    })?;
    service
        .save(config)
        .with_context(|| format!("Failed to save options to {:?}", service.path()))?;
    log::info!("Saved options to {:?}", service.path());
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let service = cli.settings_service();

    let file_options = match (&service, &cli.config) {
        (Some(service), Some(_)) => service
            .load()
            .with_context(|| format!("Failed to load options from {:?}", service.path()))?,
        (Some(service), None) => service
            .load_or_default()
            .with_context(|| format!("Failed to load options from {:?}", service.path()))?,
        (None, _) => Default::default(),
    };

    let mut options = file_options;
    options.config = merge_shallow(cli.overrides(), [&options.config]);
    let options = options.resolve();
    options
        .config
        .validate()
        .context("Invalid calendar options")?;

    if cli.save {
        save_options(service.as_ref(), &options.config)?;
    }

    let layout = build_headers_with_options(
        &options,
        &DefaultRenderers::default(),
        warn_unknown_option,
    )
    .context("Failed to build calendar layout")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print_layout(&layout, &options.config);
    }

    Ok(())
}

fn print_layout(
    layout: &CalendarLayout<HeaderContent, HeaderContent>,
    config: &CalendarConfig,
) {
    println!(
        "{} day(s) from {}, {} to {} (grid rows 2..{})",
        config.day_count,
        config.week_start.name(),
        minutes_to_timestamp_string(config.start_minutes as f64),
        minutes_to_timestamp_string(config.end_minutes as f64),
        layout.last_grid_row
    );

    println!("Days:");
    for header in &layout.day_headers {
        println!(
            "  columns {:>2}-{:<2}  {}",
            header.header.area.column_start, header.header.area.column_end, header.content.text
        );
    }

    println!("Times:");
    for header in &layout.time_headers {
        println!(
            "  rows {:>4}-{:<4}  {}",
            header.header.area.row_start, header.header.area.row_end, header.content.text
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_without_location_is_an_error() {
        let err = save_options(None, &CalendarConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--config"));
    }

    #[test]
    fn test_save_writes_options_file() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("calendar.toml"));

        save_options(Some(&service), &CalendarConfig::default()).unwrap();
        assert!(service.path().exists());
    }
}

//! SheetBoard CLI — one-shot reports over the published submission sheet.
//!
//! Commands:
//! - `summary` — fetch, filter, print the two dashboard metrics
//! - `rows` — fetch, filter, print the matching rows
//!
//! Each invocation is a single fetch → normalize → filter pass; there is
//! nothing to cache in a one-shot process. Errors print and exit nonzero.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use sheetboard_core::data::{load_sheet, CsvExportSource, DEFAULT_SHEET_ID};
use sheetboard_core::domain::Table;
use sheetboard_core::filter::{self, FilterState};

#[derive(Parser)]
#[command(
    name = "sheetboard",
    about = "SheetBoard CLI — field-submission sheet reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print Total Submissions and Total Counties Submitted.
    Summary {
        #[command(flatten)]
        filters: FilterArgs,

        /// Emit JSON instead of plain text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the filtered rows.
    Rows {
        #[command(flatten)]
        filters: FilterArgs,

        /// Emit JSON instead of an aligned table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Sheet id to read. Defaults to the field-submission workbook.
    #[arg(long, default_value = DEFAULT_SHEET_ID)]
    sheet_id: String,

    /// Full CSV export URL; overrides --sheet-id.
    #[arg(long)]
    url: Option<String>,

    /// Start date (YYYY-MM-DD). Defaults to the earliest submission.
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD). Defaults to the latest submission.
    #[arg(long)]
    end: Option<String>,

    /// County to include (repeatable). Defaults to all observed counties.
    #[arg(long = "county")]
    counties: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { filters, json } => run_summary(&filters, json),
        Commands::Rows { filters, json } => run_rows(&filters, json),
    }
}

fn run_summary(args: &FilterArgs, json: bool) -> Result<()> {
    let filtered = load_filtered(args)?;

    if json {
        let report = serde_json::json!({
            "total_submissions": filtered.count(),
            "total_counties_submitted": filtered.distinct_county_count(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Total Submissions: {}", filtered.count());
        println!(
            "Total Counties Submitted: {}",
            filtered.distinct_county_count()
        );
    }
    Ok(())
}

fn run_rows(args: &FilterArgs, json: bool) -> Result<()> {
    let filtered = load_filtered(args)?;

    if json {
        println!("{}", serde_json::to_string_pretty(filtered.rows())?);
        return Ok(());
    }

    println!(
        "{:<20} {:<14} {:<26} {:<16} {:<12} {}",
        "Timestamp", "County", "Participant", "Phone", "ID", "Geo"
    );
    for row in filtered.rows() {
        let ts = row
            .timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        println!(
            "{:<20} {:<14} {:<26} {:<16} {:<12} {}",
            ts,
            row.county.as_deref().unwrap_or("-"),
            row.participant_name,
            row.phone_number,
            row.id_number,
            row.geo_coordinates
        );
    }
    println!("\n{} rows", filtered.count());
    Ok(())
}

/// Fetch, normalize, and filter in one pass.
fn load_filtered(args: &FilterArgs) -> Result<Table> {
    let source = match &args.url {
        Some(url) => CsvExportSource::new(url.clone()),
        None => CsvExportSource::for_sheet(&args.sheet_id),
    };

    let table = load_sheet(&source)
        .with_context(|| format!("failed to load sheet from {}", source.url()))?;

    let Some(mut state) = FilterState::from_table(&table) else {
        bail!("sheet has no parseable timestamps; nothing to report");
    };

    if let Some(start) = &args.start {
        state.start_date = parse_date(start)?;
    }
    if let Some(end) = &args.end {
        state.end_date = parse_date(end)?;
    }
    if !args.counties.is_empty() {
        state.counties = args.counties.iter().cloned().collect();
    }

    Ok(filter::apply(&table, &state))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

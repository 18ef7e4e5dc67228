//! Property Growth CLI
//!
//! Projects a property's value from the capital growth rates found in a
//! text export of a suburb report

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::info;

use property_growth::{
    projection::ProjectionConfig,
    rates::{load_pages, ExtractorConfig, DEFAULT_MONTH},
    report::{render_chart, render_table, write_projection_csv, write_rates_csv},
    session::{Outcome, Session, DEFAULT_INITIAL_VALUE},
};

#[derive(Debug, Parser)]
#[command(name = "property_growth", version, about = "Property value growth calculator")]
struct Args {
    /// Report text (pages separated by form feeds) or a directory of *.txt pages
    document: Option<PathBuf>,

    /// Year the property was bought (defaults to the first year in the report)
    #[arg(short = 'y', long)]
    purchase_year: Option<i32>,

    /// Initial property value ($)
    #[arg(short = 'v', long, default_value_t = DEFAULT_INITIAL_VALUE)]
    initial_value: f64,

    /// Month token preceding each annual rate row
    #[arg(long, default_value = DEFAULT_MONTH)]
    month: String,

    /// Write the projection table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the extracted rate series to this CSV file
    #[arg(long)]
    rates_csv: Option<PathBuf>,

    /// Skip the line chart
    #[arg(long)]
    no_chart: bool,

    /// Chart height in rows
    #[arg(long, default_value_t = 12)]
    chart_height: usize,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    println!("Property Value Growth Calculator");
    println!("================================\n");

    let mut session = Session::with_config(
        &ExtractorConfig { month: args.month.clone() },
        ProjectionConfig::default(),
    )?;

    let pages = match &args.document {
        Some(path) => Some(
            load_pages(path).with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        None => None,
    };

    if let Some(pages) = &pages {
        let rates = session.load_document(pages);
        if let Some(path) = &args.rates_csv {
            write_rates_csv(path, rates)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Rate series written to {}", path.display());
        }
    }

    let outcome = session.calculate(args.purchase_year, args.initial_value);

    let Outcome::Projected {
        bounds,
        purchase_year,
        initial_value,
        projection,
    } = &outcome
    else {
        match &outcome {
            Outcome::NoDataFound => {
                eprintln!("Error: {}", outcome);
                return Ok(ExitCode::FAILURE);
            }
            _ => {
                println!("{}", outcome);
                return Ok(ExitCode::SUCCESS);
            }
        }
    };

    println!("Detected years: {} - {}", bounds.min_year, bounds.max_year);
    println!("Purchase year:  {}", purchase_year);
    println!("Initial value:  ${:.2}\n", initial_value);

    println!("Growth Over Time:");
    print!("{}", render_table(projection));

    let summary = projection.summary();
    println!("\nSummary:");
    println!("  Years Projected: {}", summary.years);
    println!("  Final Value: ${:.2}", summary.final_value);
    if let Some(pct) = summary.total_growth_pct {
        println!("  Total Growth: {:.2}%", pct);
    }

    if !args.no_chart {
        println!();
        print!("{}", render_chart(projection, args.chart_height));
    }

    if let Some(path) = &args.csv {
        write_projection_csv(path, projection)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    println!("\n{}", outcome);
    Ok(ExitCode::SUCCESS)
}

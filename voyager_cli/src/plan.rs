use std::{fs::File, path::PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;
use voyager_itinerary::json::types::JsonTourCustomization;

use crate::{parsers, render};

#[derive(Args)]
pub struct PlanArgs {
    /// The customization file to compose
    #[arg(short, long)]
    input: PathBuf,

    /// Override the passenger count from the file
    #[arg(short, long)]
    passengers: Option<i64>,

    /// Override the departure date from the file (e.g. 2026-07-14)
    #[arg(short, long, value_parser = parsers::parse_date)]
    departure: Option<jiff::civil::Date>,

    /// Emit the derived view as JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), anyhow::Error> {
    let file = File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let input: JsonTourCustomization = serde_json::from_reader(file)?;

    let mut session = input.build_session()?;
    if let Some(passengers) = args.passengers {
        session.set_passengers(passengers);
    }
    if let Some(departure) = args.departure {
        session.set_departure(departure);
    }

    let view = session.view()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    info!(
        days = view.itinerary.total_days(),
        spans = view.layout.spans().len(),
        "composed itinerary"
    );

    println!("{}", render::day_table(&view));
    println!("{}", render::span_table(&view));
    println!("{}", render::price_table(&view));

    Ok(())
}

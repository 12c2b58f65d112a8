//! Readings command: the appointed readings for a civil date.

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{info, info_span};

use typikon_day::DayPosition;
use typikon_year::YearCache;

use crate::cli::ReadingsArgs;
use crate::config::{self, TypikonConfig};
use crate::day_cmd::today;
use crate::view;

pub fn run(args: ReadingsArgs) -> Result<()> {
    let _cmd = info_span!("readings").entered();
    let config = TypikonConfig::load(&args.config, args.config.as_os_str() == "typikon.toml")?;
    let calendar = config.calendar(args.julian)?;
    let store = config::build_store(&config.data)?;

    let date = args.date.unwrap_or_else(today);
    info!(%date, %calendar, abbreviated = args.abbreviated, "selecting readings");

    let years = YearCache::new();
    let position = DayPosition::new(
        date.year(),
        date.month() as u8,
        date.day() as u8,
        calendar,
        &years,
    )
    .with_context(|| format!("cannot locate {date} in its liturgical year"))?;
    let mut day = position
        .resolve(&store)
        .context("failed to resolve the day against the record store")?;

    // Select into the day's cache, then optionally fill in the text.
    if args.abbreviated {
        day.abbreviated_readings(&store)?;
    } else {
        day.readings(&store)?;
    }
    if args.content {
        let bible = config::build_bible(&config.data)?;
        day.fetch_passages(&bible)
            .context("failed to fetch passage text")?;
    }

    let selected = if args.abbreviated {
        day.abbreviated_readings(&store)?
    } else {
        day.readings(&store)?
    };

    if args.json {
        let views: Vec<view::ReadingView> =
            selected.iter().map(view::ReadingView::from_reading).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for reading in selected {
            view::print_reading(reading);
        }
    }
    Ok(())
}

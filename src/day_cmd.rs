//! Day command: resolve one civil date into its composite day.

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::{info, info_span};

use typikon_day::DayPosition;
use typikon_year::YearCache;

use crate::cli::DayArgs;
use crate::config::{self, TypikonConfig};
use crate::view;

pub fn run(args: DayArgs) -> Result<()> {
    let _cmd = info_span!("day").entered();
    let config = TypikonConfig::load(&args.config, args.config.as_os_str() == "typikon.toml")?;
    let calendar = config.calendar(args.julian)?;
    let store = config::build_store(&config.data)?;

    let date = args.date.unwrap_or_else(today);
    info!(%date, %calendar, "resolving day");

    let years = YearCache::new();
    let position = DayPosition::new(
        date.year(),
        date.month() as u8,
        date.day() as u8,
        calendar,
        &years,
    )
    .with_context(|| format!("cannot locate {date} in its liturgical year"))?;
    let day = position
        .resolve_with_supplement(&store, &store)
        .context("failed to resolve the day against the record store")?;

    if args.json {
        let text = serde_json::to_string_pretty(&view::DayView::from_day(&day))?;
        println!("{text}");
    } else {
        view::print_day(&day);
    }
    Ok(())
}

pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

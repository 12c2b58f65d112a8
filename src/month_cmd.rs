//! Month command: one line per day of a civil month.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use typikon_day::month_of_days_with_supplement;
use typikon_year::YearCache;

use crate::cli::MonthArgs;
use crate::config::{self, TypikonConfig};
use crate::view;

pub fn run(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let config = TypikonConfig::load(&args.config, args.config.as_os_str() == "typikon.toml")?;
    let calendar = config.calendar(args.julian)?;
    let store = config::build_store(&config.data)?;

    info!(year = args.year, month = args.month, %calendar, "resolving month");
    let years = YearCache::new();
    let days = month_of_days_with_supplement(
        args.year,
        args.month,
        calendar,
        &years,
        &store,
        &store,
    )
    .with_context(|| format!("failed to resolve {}-{:02}", args.year, args.month))?;

    if args.json {
        let views: Vec<view::DayView> = days.iter().map(view::DayView::from_day).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for day in &days {
            view::print_day_line(day);
        }
    }
    Ok(())
}

//! CLI argument parsing and configuration.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::Parser;

use crate::date::DateTarget;

#[derive(Parser, Debug)]
#[command(name = "mensa-widget", version)]
#[command(about = "Today's menu of Mensa Am Adenauerring (KIT) as a terminal widget")]
#[command(after_help = "Examples:
  mensa-widget                           # Interactive widget preview
  mensa-widget --once                    # Print the widget and exit
  mensa-widget --date 2026-10-19 --once  # Menu of a specific day")]
pub struct Args {
    /// Config file (default: ~/.config/mensa-widget/config.toml)
    #[arg(short, long, env = "MENSA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the widget as plain text and exit
    #[arg(long)]
    pub once: bool,

    /// Show this day instead of selecting one from the clock (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, conflicts_with = "now")]
    pub date: Option<NaiveDate>,

    /// Select the day as if it were this local time (YYYY-MM-DDTHH:MM)
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,

    /// OpenMensa canteen ID, overrides api.canteen_id
    #[arg(long)]
    pub canteen: Option<u32>,
}

impl Args {
    pub fn target(&self) -> DateTarget {
        match (self.date, self.now) {
            (Some(date), _) => DateTarget::Fixed(date),
            (None, Some(now)) => DateTarget::At(now),
            (None, None) => DateTarget::Now,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date {value:?}: {e}"))
}

fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .map_err(|e| format!("invalid time {value:?}: {e}"))
}

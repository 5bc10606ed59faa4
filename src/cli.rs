use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use rust_decimal::Decimal;
use std::str::FromStr;

use harvest_timesheets::harvest::DEFAULT_HOURS;
use harvest_timesheets::timesheet::WorkDay;

#[derive(Debug, Parser)]
#[command(name = "timesheets", version, about = "Log Harvest time from the terminal")]
pub struct Cli {
    /// Answer from built-in sample data instead of calling Harvest.
    #[arg(long, global = true)]
    pub offline: bool,

    /// Increase log output (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the projects and tasks you can log time against.
    Projects {
        /// Include inactive task assignments.
        #[arg(long)]
        all: bool,
    },
    /// Log a single time entry.
    Submit {
        #[arg(long)]
        project_id: u64,
        #[arg(long)]
        task_id: u64,
        /// Day to log, YYYY-MM-DD. Defaults to today.
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_hours, default_value_t = Decimal::from(DEFAULT_HOURS))]
        hours: Decimal,
    },
    /// Log one entry for each selected day of a week.
    Timesheet {
        #[arg(long)]
        project_id: u64,
        #[arg(long)]
        task_id: u64,
        /// Any day in the target week, YYYY-MM-DD. Defaults to this week.
        #[arg(long, value_parser = parse_date)]
        week: Option<NaiveDate>,
        #[arg(long, value_enum, value_delimiter = ',', default_values_t = WorkDay::WEEKDAYS.to_vec())]
        days: Vec<WorkDay>,
        #[arg(long, value_parser = parse_hours, default_value_t = Decimal::from(DEFAULT_HOURS))]
        hours: Decimal,
    },
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD.".to_string())
}

pub fn parse_hours(value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim()).map_err(|_| format!("Invalid hours value: {value}"))
}

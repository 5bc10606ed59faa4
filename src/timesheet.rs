use chrono::{Datelike, Days, NaiveDate, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkDay {
    #[value(alias = "mon")]
    Monday,
    #[value(alias = "tue")]
    Tuesday,
    #[value(alias = "wed")]
    Wednesday,
    #[value(alias = "thu")]
    Thursday,
    #[value(alias = "fri")]
    Friday,
    #[value(alias = "sat")]
    Saturday,
    #[value(alias = "sun")]
    Sunday,
}

impl WorkDay {
    pub const WEEKDAYS: [WorkDay; 5] = [
        WorkDay::Monday,
        WorkDay::Tuesday,
        WorkDay::Wednesday,
        WorkDay::Thursday,
        WorkDay::Friday,
    ];

    pub fn weekday(self) -> Weekday {
        match self {
            WorkDay::Monday => Weekday::Mon,
            WorkDay::Tuesday => Weekday::Tue,
            WorkDay::Wednesday => Weekday::Wed,
            WorkDay::Thursday => Weekday::Thu,
            WorkDay::Friday => Weekday::Fri,
            WorkDay::Saturday => Weekday::Sat,
            WorkDay::Sunday => Weekday::Sun,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            WorkDay::Monday => "Mon",
            WorkDay::Tuesday => "Tue",
            WorkDay::Wednesday => "Wed",
            WorkDay::Thursday => "Thu",
            WorkDay::Friday => "Fri",
            WorkDay::Saturday => "Sat",
            WorkDay::Sunday => "Sun",
        }
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Dates of the selected days in the week containing `date`, Monday first,
/// each day at most once.
pub fn dates_in_week(date: NaiveDate, days: &[WorkDay]) -> Vec<NaiveDate> {
    let monday = week_start(date);
    days.iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter_map(|day| {
            let offset = u64::from(day.weekday().num_days_from_monday());
            monday.checked_add_days(Days::new(offset))
        })
        .collect()
}

pub fn describe_days(days: &[WorkDay]) -> String {
    let selected = days.iter().copied().collect::<BTreeSet<_>>();
    if selected.is_empty() {
        return "None".to_string();
    }
    if selected.len() == 7 {
        return "Every day".to_string();
    }
    if selected.iter().copied().eq(WorkDay::WEEKDAYS) {
        return "Weekdays".to_string();
    }
    selected
        .iter()
        .map(|day| day.short_name())
        .collect::<Vec<_>>()
        .join(", ")
}

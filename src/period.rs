//! Monthly reporting period of an export

use chrono::{Datelike, Local, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const ACTUAL_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl ReportPeriod {
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last_day = first_day.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self {
            first_day,
            last_day,
        })
    }

    /// Month of the local date at the time of the call.
    pub fn current() -> Option<Self> {
        let today = Local::now().date_naive();
        Self::month(today.year(), today.month())
    }

    /// `since_date` of the export, `YYYY-MM-DD`.
    pub fn start_date(&self) -> String {
        self.first_day.format(ACTUAL_DATE_FORMAT).to_string()
    }

    /// `until_date` of the export, `YYYY-MM-DD`.
    pub fn end_date(&self) -> String {
        self.last_day.format(ACTUAL_DATE_FORMAT).to_string()
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%Y-%m"))
    }
}

impl FromStr for ReportPeriod {
    type Err = String;

    /// Parses a `YYYY-MM` month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first_day = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), ACTUAL_DATE_FORMAT)
            .map_err(|e| format!("invalid month {:?}, expected YYYY-MM: {}", s, e))?;
        Self::month(first_day.year(), first_day.month())
            .ok_or_else(|| format!("month {:?} is out of range", s))
    }
}

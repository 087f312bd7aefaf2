use crate::tools::error::ToolError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| ToolError::InvalidDate(text.to_string()))
}

/// Calendar age on `today`, borrowing days from the month before `today`
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Result<Age, ToolError> {
    if birth > today {
        return Err(ToolError::BirthInFuture(birth));
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_previous_month(today) as i32;
        // Birth day past the end of the borrowed month
        days = days.max(0);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(Age {
        years,
        months,
        days,
    })
}

/// Age as of the local calendar date
pub fn age_today(birth: NaiveDate) -> Result<Age, ToolError> {
    age_on(birth, chrono::Local::now().date_naive())
}

fn days_in_previous_month(date: NaiveDate) -> u32 {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

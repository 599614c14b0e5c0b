// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{Datelike, Month, NaiveDate};

/// Year token standing for "every year".
pub const RECURRING_MARKER: &str = "----";

/// Recurring dates must exist in a common year, which rules out Feb 29.
const COMMON_YEAR: i32 = 2001;

/// The date written on an event line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDate {
    /// A one-time event on a fixed day.
    Absolute(NaiveDate),

    /// An event repeating every year on the same month and day.
    Recurring { month: u32, day: u32 },
}

impl EventDate {
    /// Builds a date from the three tokens of an event line, e.g. `Dec`, `25`, `----`.
    pub fn from_tokens(month: &str, day: &str, year: &str) -> Result<Self, String> {
        let month = month
            .parse::<Month>()
            .map_err(|_| format!("unknown month `{month}`"))?
            .number_from_month();
        let day: u32 = day.parse().map_err(|_| format!("bad day `{day}`"))?;

        if year == RECURRING_MARKER {
            return match NaiveDate::from_ymd_opt(COMMON_YEAR, month, day) {
                Some(_) => Ok(Self::Recurring { month, day }),
                None => Err(format!("no day {day} in month {month} of every year")),
            };
        }

        let year: i32 = year.parse().map_err(|_| format!("bad year `{year}`"))?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::Absolute)
            .ok_or_else(|| format!("{year}-{month:02}-{day:02} does not exist"))
    }

    /// The concrete day this date refers to, seen from `today`.
    ///
    /// A recurring date maps to this year's occurrence unless that already
    /// passed, in which case it maps to next year's. Today itself has not
    /// passed.
    pub fn resolve(self, today: NaiveDate) -> Result<NaiveDate, String> {
        match self {
            Self::Absolute(date) => Ok(date),
            Self::Recurring { month, day } => {
                let passed =
                    today.month() > month || (today.month() == month && today.day() > day);
                let year = if passed { today.year() + 1 } else { today.year() };
                NaiveDate::from_ymd_opt(year, month, day)
                    .ok_or_else(|| format!("{year}-{month:02}-{day:02} does not exist"))
            }
        }
    }

    /// Signed whole days from the resolved date to `today`, positive when the
    /// date is behind us.
    pub fn days_before(self, today: NaiveDate) -> Result<i64, String> {
        let date = self.resolve(today)?;
        Ok((today - date).num_days())
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(date) => write!(f, "{}", date.format("%b %d %Y")),
            Self::Recurring { month, day } => {
                let name = Month::try_from(*month as u8).map_or("???", |m| &m.name()[..3]);
                write!(f, "{name} {day:02} {RECURRING_MARKER}")
            }
        }
    }
}

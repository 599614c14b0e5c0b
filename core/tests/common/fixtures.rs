// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::NaiveDate;
use daysuntil_core::EventParser;

/// An event list mixing one-time events, recurring events and noise.
///
/// Seen from 2020-01-11 it holds three past and three future events.
#[allow(dead_code)]
pub const SAMPLE_EVENTS: &str = "\
# Sample event list
Jan 01 2020 New Year
Jan 11 ---- Name day
Jul 20 1969 Moon landing

Dec 25 ---- Christmas
Jan 12 2020 Dentist
this line is not an event
Jan 05 ---- Twelfth night
";

/// Builds a date, panicking on impossible input.
#[must_use]
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("test dates must exist")
}

/// A parser pinned to the given day.
#[must_use]
#[allow(dead_code)]
pub fn test_parser(y: i32, m: u32, d: u32) -> EventParser {
    EventParser::new(date(y, m, d))
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of daysuntil: parse event lists and report the days since or until
//! each event.
//!
//! ```
//! use chrono::NaiveDate;
//! use daysuntil_core::{EventParser, ReportOptions, Reporter};
//!
//! let today = NaiveDate::from_ymd_opt(2020, 1, 11).unwrap();
//! let events = EventParser::new(today)
//!     .parse_str("Jan 01 2020 New Year\n")
//!     .unwrap();
//!
//! let options = ReportOptions::default();
//! let mut out = Vec::new();
//! Reporter::new(&options, &events).write_report(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "10 days since New Year\n");
//! ```

mod config;
mod datetime;
mod error;
mod event;
mod io;
mod parser;
mod report;

pub use crate::config::{APP_NAME, Config, DEFAULT_EVENTS_FILE, default_events_file, get_config_dir};
pub use crate::datetime::{EventDate, RECURRING_MARKER};
pub use crate::error::{Error, Result};
pub use crate::event::{Event, EventCollection, Timing};
pub use crate::io::{Source, load_events};
pub use crate::parser::{EventParser, parse_line};
pub use crate::report::{Counts, ReportOptions, Reporter, TotalsStyle, format_number, write_totals};

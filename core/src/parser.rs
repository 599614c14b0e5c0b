// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::BufRead;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::datetime::EventDate;
use crate::error::{Error, Result};
use crate::event::EventCollection;

/// Month abbreviation, two-digit day, four-digit year or `----`, description.
const EVENT_LINE: &str = r"^([A-Z][a-z]{2}) ([0-9]{2}) ([0-9]{4}|----) (.*)$";

fn event_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(EVENT_LINE).expect("event line pattern must compile"))
}

/// Splits an event line into its date and description.
///
/// Returns `Ok(None)` for lines that do not look like events at all, such as
/// blank lines and comments, and `Err` for lines that do but carry a date
/// that does not exist.
pub fn parse_line(line: &str) -> Result<Option<(EventDate, &str)>, String> {
    let Some(caps) = event_line_regex().captures(line) else {
        return Ok(None);
    };

    let date = EventDate::from_tokens(&caps[1], &caps[2], &caps[3])?;
    let description = caps.get(4).map_or("", |m| m.as_str());
    Ok(Some((date, description)))
}

/// Turns event lines into events measured against a fixed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventParser {
    today: NaiveDate,
}

impl EventParser {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Reads every line of `reader` and files the events into `events`.
    ///
    /// `name` only labels errors. Returns the number of events found. The
    /// collection is left unsorted so that several sources can be merged
    /// before sorting once.
    pub fn parse_reader(
        &self,
        name: &str,
        reader: impl BufRead,
        events: &mut EventCollection,
    ) -> Result<usize> {
        let mut count = 0;
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::MalformedInput {
                name: name.to_string(),
                source,
            })?;
            let invalid_date = |reason| Error::InvalidDate {
                name: name.to_string(),
                line: i + 1,
                reason,
            };

            let Some((date, description)) = parse_line(&line).map_err(invalid_date)? else {
                tracing::trace!(source = name, line = i + 1, "skipping non-event line");
                continue;
            };

            let days = date.days_before(self.today).map_err(invalid_date)?;
            tracing::trace!(source = name, line = i + 1, %date, days, "parsed event");
            events.push_signed(days, description);
            count += 1;
        }

        tracing::debug!(source = name, count, "parsed events");
        Ok(count)
    }

    /// Parses a whole text into a sorted collection.
    pub fn parse_str(&self, text: &str) -> Result<EventCollection> {
        let mut events = EventCollection::new();
        self.parse_reader("<string>", text.as_bytes(), &mut events)?;
        events.sort();
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;

    fn parser(y: i32, m: u32, d: u32) -> EventParser {
        EventParser::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn keeps_injected_today() {
        assert_eq!(
            parser(2020, 1, 11).today(),
            NaiveDate::from_ymd_opt(2020, 1, 11).unwrap()
        );
    }

    #[test]
    fn splits_event_line() {
        let (date, description) = parse_line("Jan 01 2020 New Year").unwrap().unwrap();
        assert_eq!(date, EventDate::from_tokens("Jan", "01", "2020").unwrap());
        assert_eq!(description, "New Year");
    }

    #[test]
    fn keeps_description_verbatim() {
        let (_, description) = parse_line("Jul 04 ----   spaced  out ").unwrap().unwrap();
        assert_eq!(description, "  spaced  out ");

        let (_, description) = parse_line("Jul 04 1776 ").unwrap().unwrap();
        assert_eq!(description, "");
    }

    #[test]
    fn ignores_lines_of_other_shapes() {
        for line in [
            "",
            "# comment",
            "jan 01 2020 lower case month",
            "JAN 01 2020 upper case month",
            "Jan 1 2020 single digit day",
            "Jan 01 20 short year",
            "Jan 01 2020",
            "Jan 01 --- three dashes",
            " Jan 01 2020 leading space",
        ] {
            assert_eq!(parse_line(line), Ok(None), "unexpected result for {line:?}");
        }
    }

    #[test]
    fn fails_on_impossible_date_of_right_shape() {
        assert!(parse_line("Feb 30 2020 nope").is_err());
        assert!(parse_line("Abc 01 2020 nope").is_err());
    }

    #[test]
    fn computes_days_since_past_event() {
        let events = parser(2020, 1, 11).parse_str("Jan 01 2020 New Year\n").unwrap();
        assert_eq!(events.past(), &[Event::new(10, "New Year")]);
        assert!(events.future().is_empty());
    }

    #[test]
    fn computes_days_until_recurring_event() {
        let events = parser(2020, 1, 11)
            .parse_str("Dec 25 ---- Christmas\n")
            .unwrap();
        assert!(events.past().is_empty());
        assert_eq!(events.future(), &[Event::new(349, "Christmas")]);
    }

    #[test]
    fn recurring_event_today_is_past_with_zero_delta() {
        let events = parser(2021, 6, 1).parse_str("Jun 01 ---- Birthday\n").unwrap();
        assert_eq!(events.past(), &[Event::new(0, "Birthday")]);
    }

    #[test]
    fn recurring_event_earlier_this_year_moves_to_next_year() {
        let events = parser(2021, 6, 2).parse_str("Jun 01 ---- Birthday\n").unwrap();
        assert_eq!(events.future(), &[Event::new(364, "Birthday")]);
    }

    #[test]
    fn skips_unmatched_lines_but_fails_on_bad_dates() {
        let parser = parser(2020, 1, 11);
        let events = parser
            .parse_str("not an event\n\nJan 02 2020 ok\n")
            .unwrap();
        assert_eq!(events.len(), 1);

        let err = parser
            .parse_str("Jan 02 2020 ok\nFeb 31 2020 bad\n")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDate { line: 2, .. }));
    }

    #[test]
    fn tolerates_missing_final_newline_and_crlf() {
        let events = parser(2020, 1, 11)
            .parse_str("Jan 10 2020 a\r\nJan 12 2020 b")
            .unwrap();
        assert_eq!(events.past(), &[Event::new(1, "a")]);
        assert_eq!(events.future(), &[Event::new(1, "b")]);
    }

    #[test]
    fn reports_invalid_utf8_as_malformed_input() {
        let mut events = EventCollection::new();
        let bytes: &[u8] = b"Jan 01 2020 \xff\xfe\n";
        let err = parser(2020, 1, 11)
            .parse_reader("bin", bytes, &mut events)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedInput { .. }));
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = "Jan 01 2020 a\nDec 25 ---- b\nMar 03 2021 c\n";
        let parser = parser(2020, 5, 5);
        assert_eq!(parser.parse_str(text).unwrap(), parser.parse_str(text).unwrap());
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, io, str::FromStr};

use crate::error::{Error, Result};
use crate::event::{Event, EventCollection, Timing};

/// Which summary counts are printed after the events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TotalsStyle {
    /// No totals.
    #[default]
    None,

    /// The grand total on one line.
    Simple,

    /// One line for past events and one for future events.
    Categories,

    /// The categories followed by the grand total.
    Both,
}

impl TotalsStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            TotalsStyle::None => "none",
            TotalsStyle::Simple => "simple",
            TotalsStyle::Categories => "categories",
            TotalsStyle::Both => "both",
        }
    }
}

impl fmt::Display for TotalsStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TotalsStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TotalsStyle::None),
            "simple" => Ok(TotalsStyle::Simple),
            "categories" => Ok(TotalsStyle::Categories),
            "both" => Ok(TotalsStyle::Both),
            _ => Err(format!("unknown totals style: {s}")),
        }
    }
}

/// Display options of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Hide events more than this many days away, 0 for no limit.
    pub max_delta: u64,

    /// Hide events fewer than this many days away.
    pub min_delta: u64,

    /// Print future events first, each list in reverse order.
    pub reverse: bool,

    pub suppress_past: bool,
    pub suppress_future: bool,

    pub totals_style: TotalsStyle,

    /// Count events without printing them.
    pub totals_only: bool,

    /// Base totals on every loaded event instead of the printed ones.
    pub totals_all_events: bool,

    /// Group thousands with commas in every printed number.
    pub commas: bool,
}

impl ReportOptions {
    /// Sets the delta range from possibly negative user input.
    pub fn with_delta_range(mut self, max_delta: i64, min_delta: i64) -> Result<Self> {
        self.max_delta = u64::try_from(max_delta).map_err(|_| {
            Error::InvalidArgument("The delta must be a non-negative integer.".to_string())
        })?;
        self.min_delta = u64::try_from(min_delta).map_err(|_| {
            Error::InvalidArgument("The reverse delta must be a non-negative integer.".to_string())
        })?;
        Ok(self)
    }

    /// A message when the delta range cannot match anything.
    pub fn range_warning(&self) -> Option<&'static str> {
        (self.max_delta != 0 && self.max_delta < self.min_delta)
            .then_some("the deltas you specified will result in no events being printed.")
    }

    pub fn in_range(&self, delta: u64) -> bool {
        (self.max_delta == 0 || delta <= self.max_delta) && delta >= self.min_delta
    }

    fn suppresses(&self, timing: Timing) -> bool {
        match timing {
            Timing::Past => self.suppress_past,
            Timing::Future => self.suppress_future,
        }
    }

    /// The order the two lists are printed in.
    fn timings(&self) -> [Timing; 2] {
        match self.reverse {
            true => [Timing::Future, Timing::Past],
            false => [Timing::Past, Timing::Future],
        }
    }
}

/// Number of past and future events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub past: usize,
    pub future: usize,
}

impl Counts {
    pub fn new(past: usize, future: usize) -> Self {
        Self { past, future }
    }

    pub fn of(events: &EventCollection) -> Self {
        Self::new(events.past().len(), events.future().len())
    }

    pub fn total(&self) -> usize {
        self.past + self.future
    }

    pub fn get(&self, timing: Timing) -> usize {
        match timing {
            Timing::Past => self.past,
            Timing::Future => self.future,
        }
    }

    fn set(&mut self, timing: Timing, count: usize) {
        match timing {
            Timing::Past => self.past = count,
            Timing::Future => self.future = count,
        }
    }
}

/// Writes events as aligned lines such as `10 days since New Year`.
#[derive(Debug)]
pub struct Reporter<'a> {
    options: &'a ReportOptions,
    events: &'a EventCollection,
    width: usize,
}

impl<'a> Reporter<'a> {
    pub fn new(options: &'a ReportOptions, events: &'a EventCollection) -> Self {
        let width = match options.commas {
            true => events
                .max_delta()
                .map_or(1, |delta| format_number(delta, true).len()),
            false => events.column_width(),
        };
        Self {
            options,
            events,
            width,
        }
    }

    /// Width every delta is right-aligned to.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Writes the events, then the totals, and returns how many events passed
    /// the filters.
    pub fn write_report(&self, w: &mut impl io::Write) -> Result<Counts> {
        let print = !self.options.totals_only;
        let mut emitted = Counts::default();
        for timing in self.options.timings() {
            emitted.set(timing, self.write_events(w, timing, print)?);
        }

        let counts = match self.options.totals_all_events {
            true => Counts::of(self.events),
            false => emitted,
        };
        if self.options.totals_only && self.options.totals_style == TotalsStyle::None {
            writeln!(w, "{}", format_number(counts.total() as u64, self.options.commas))?;
        } else {
            write_totals(
                w,
                self.options.totals_style,
                self.options.reverse,
                counts,
                self.options.commas,
            )?;
        }

        tracing::debug!(past = emitted.past, future = emitted.future, "report written");
        Ok(emitted)
    }

    /// Writes one list in display order, skipping events out of range.
    ///
    /// With `print` off nothing is written and only the count is returned.
    pub fn write_events(
        &self,
        w: &mut impl io::Write,
        timing: Timing,
        print: bool,
    ) -> io::Result<usize> {
        if self.options.suppresses(timing) {
            return Ok(0);
        }

        let events = self.events.events(timing);
        let ordered: Box<dyn Iterator<Item = &Event>> = match self.options.reverse {
            true => Box::new(events.iter().rev()),
            false => Box::new(events.iter()),
        };

        let mut count = 0;
        for event in ordered.filter(|e| self.options.in_range(e.delta)) {
            count += 1;
            if print {
                writeln!(
                    w,
                    "{:>width$} day{} {} {}",
                    format_number(event.delta, self.options.commas),
                    plural_suffix(event.delta),
                    timing.preposition(),
                    event.description,
                    width = self.width,
                )?;
            }
        }
        Ok(count)
    }
}

/// Writes the summary lines of `style`.
///
/// The category lines follow the display order: future first when `reverse`.
pub fn write_totals(
    w: &mut impl io::Write,
    style: TotalsStyle,
    reverse: bool,
    counts: Counts,
    commas: bool,
) -> io::Result<()> {
    match style {
        TotalsStyle::None => Ok(()),
        TotalsStyle::Simple => {
            let total = counts.total() as u64;
            writeln!(
                w,
                "Total: {} event{}.",
                format_number(total, commas),
                plural_suffix(total)
            )
        }
        TotalsStyle::Categories => {
            let timings = match reverse {
                true => [Timing::Future, Timing::Past],
                false => [Timing::Past, Timing::Future],
            };
            for timing in timings {
                let count = counts.get(timing) as u64;
                writeln!(
                    w,
                    "{} {} event{}.",
                    format_number(count, commas),
                    timing.as_str(),
                    plural_suffix(count)
                )?;
            }
            Ok(())
        }
        TotalsStyle::Both => {
            write_totals(w, TotalsStyle::Categories, reverse, counts, commas)?;
            write_totals(w, TotalsStyle::Simple, reverse, counts, commas)
        }
    }
}

/// Plural marker with a fixed width: a space for exactly one, `s` otherwise.
fn plural_suffix(n: u64) -> char {
    match n {
        1 => ' ',
        _ => 's',
    }
}

/// Formats `n` in decimal, grouping thousands with commas when asked.
pub fn format_number(n: u64, commas: bool) -> String {
    let digits = n.to_string();
    if !commas {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

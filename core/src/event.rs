// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// A dated entry of an event list, measured against today.
///
/// Field order matters: events sort by delta first and description second.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Event {
    /// Days since (past) or until (future) the event, never negative.
    pub delta: u64,

    /// The text following the date on the line.
    pub description: String,
}

impl Event {
    pub fn new(delta: u64, description: impl Into<String>) -> Self {
        Self {
            delta,
            description: description.into(),
        }
    }
}

/// Whether an event already happened or is still ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// Today or earlier, printed as "since".
    Past,

    /// Tomorrow or later, printed as "until".
    Future,
}

impl Timing {
    pub const fn as_str(self) -> &'static str {
        match self {
            Timing::Past => "past",
            Timing::Future => "future",
        }
    }

    /// The preposition used on event lines.
    pub const fn preposition(self) -> &'static str {
        match self {
            Timing::Past => "since",
            Timing::Future => "until",
        }
    }
}

/// Events split into the ones that happened and the ones that will.
///
/// Once [`EventCollection::sort`] ran, `past` is ordered by descending delta
/// (the oldest event first, today last) and `future` by ascending delta (the
/// soonest event first), which together read as a timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCollection {
    past: Vec<Event>,
    future: Vec<Event>,
}

impl EventCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files an event by the signed number of days `today - date`.
    ///
    /// Zero counts as past: an event happening today is "0 days since".
    pub fn push_signed(&mut self, days: i64, description: impl Into<String>) {
        if days >= 0 {
            self.past.push(Event::new(days.unsigned_abs(), description));
        } else {
            self.future.push(Event::new(days.unsigned_abs(), description));
        }
    }

    pub fn push(&mut self, timing: Timing, event: Event) {
        match timing {
            Timing::Past => self.past.push(event),
            Timing::Future => self.future.push(event),
        }
    }

    /// Puts both lists in display order.
    pub fn sort(&mut self) {
        self.past.sort();
        self.past.reverse();
        self.future.sort();
    }

    pub fn past(&self) -> &[Event] {
        &self.past
    }

    pub fn future(&self) -> &[Event] {
        &self.future
    }

    pub fn events(&self, timing: Timing) -> &[Event] {
        match timing {
            Timing::Past => &self.past,
            Timing::Future => &self.future,
        }
    }

    pub fn len(&self) -> usize {
        self.past.len() + self.future.len()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty() && self.future.is_empty()
    }

    /// The largest delta over both lists.
    pub fn max_delta(&self) -> Option<u64> {
        self.past
            .iter()
            .chain(self.future.iter())
            .map(|e| e.delta)
            .max()
    }

    /// Number of decimal digits of the largest delta, at least 1.
    pub fn column_width(&self) -> usize {
        self.max_delta().map_or(1, count_digits)
    }
}

fn count_digits(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

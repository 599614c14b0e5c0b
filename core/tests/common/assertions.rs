// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use daysuntil_core::{Event, EventCollection, ReportOptions, Reporter};

/// Asserts the deltas of a list, in order.
///
/// # Panics
///
/// Panics if the deltas differ.
#[allow(dead_code)]
pub fn assert_deltas(events: &[Event], expected: &[u64]) {
    let deltas: Vec<_> = events.iter().map(|e| e.delta).collect();
    assert_eq!(deltas, expected, "Event deltas mismatch");
}

/// Renders a full report into a string.
///
/// # Panics
///
/// Panics if the report is not valid UTF-8.
#[must_use]
#[allow(dead_code)]
pub fn render(options: &ReportOptions, events: &EventCollection) -> String {
    let mut buf = Vec::new();
    Reporter::new(options, events)
        .write_report(&mut buf)
        .expect("writing to a Vec never fails");
    String::from_utf8(buf).expect("report must be UTF-8")
}

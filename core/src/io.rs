// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::event::EventCollection;
use crate::parser::EventParser;

/// Where an event list is read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// Standard input, written `-` on the command line.
    Stdin,

    /// A file on disk.
    File(PathBuf),
}

impl Source {
    pub const STDIN_NAME: &str = "-";
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        match s {
            Source::STDIN_NAME => Source::Stdin,
            _ => Source::File(s.into()),
        }
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        match path.to_str() {
            Some(Source::STDIN_NAME) => Source::Stdin,
            _ => Source::File(path),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str(Source::STDIN_NAME),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads all sources and returns their events sorted for display.
///
/// A source listed more than once is read once. The first source that cannot
/// be opened or parsed aborts the whole load.
#[tracing::instrument(skip(parser))]
pub fn load_events(parser: &EventParser, sources: &[Source]) -> Result<EventCollection> {
    let mut events = EventCollection::new();
    let mut seen: Vec<&Source> = Vec::with_capacity(sources.len());
    for source in sources {
        if seen.contains(&source) {
            tracing::debug!(%source, "skipping duplicate source");
            continue;
        }
        seen.push(source);
        load_source(parser, source, &mut events)?;
    }

    events.sort();
    tracing::debug!(
        today = %parser.today(),
        past = events.past().len(),
        future = events.future().len(),
        "loaded events"
    );
    Ok(events)
}

fn load_source(parser: &EventParser, source: &Source, events: &mut EventCollection) -> Result<()> {
    let name = source.to_string();
    match source {
        Source::Stdin => {
            let stdin = io::stdin();
            parser.parse_reader(&name, stdin.lock(), events)?;
        }
        Source::File(path) => {
            let file = File::open(path).map_err(|source| Error::SourceUnreadable {
                name: name.clone(),
                source,
            })?;
            parser.parse_reader(&name, BufReader::new(file), events)?;
        }
    }
    Ok(())
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    ffi::OsString,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use chrono::{Local, NaiveDate};
use clap::{Arg, ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use daysuntil_core::{
    APP_NAME, Config, Counts, EventParser, ReportOptions, Reporter, Source, TotalsStyle,
    load_events,
};
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;

/// Run the command-line interface.
pub fn run() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug, Clone, Default)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Event lists to read, the configured one when empty
    pub files: Vec<Source>,

    /// Day to count from instead of the local date
    pub today: Option<NaiveDate>,

    pub delta: Option<i64>,
    pub reverse_delta: Option<i64>,
    pub reverse: bool,
    pub no_past: bool,
    pub no_future: bool,
    pub totals_style: Option<TotalsStyle>,
    pub total_only: bool,
    pub total_all: bool,
    pub commas: bool,

    /// Print a completion script instead of events
    pub completion: Option<CmdGenerateCompletion>,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("List events by days since/until they happen(ed).")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .arg(
                Arg::new("files")
                    .value_name("FILE")
                    .help("Event files to read, `-` for standard input")
                    .long_help(
                        "\
Event files to read, `-` for standard input. Defaults to the configured events_file, or \
events.txt next to the executable.",
                    )
                    .num_args(0..)
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-d --delta <DAYS> "Only print events at most this many days away (0 for no limit)")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true),
            )
            .arg(
                arg!(-D --"reverse-delta" <DAYS> "Only print events at least this many days away")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true),
            )
            .arg(arg!(-r --reverse "Print the events in reverse order"))
            .arg(arg!(-n --nopast "Don't print events that have already happened").alias("no-past"))
            .arg(
                arg!(-N --nofuture "Don't print events that haven't happened yet")
                    .alias("no-future"),
            )
            .arg(
                arg!(-t --"totals-style" [STYLE] "How to print event totals")
                    .value_parser(value_parser!(TotalsStyle))
                    .num_args(0..=1)
                    .default_missing_value("simple"),
            )
            .arg(arg!(-c --"total-only" "Print only the event totals, not the events"))
            .arg(
                arg!(-T --"total-all" "Count every event in the totals, not just the printed ones"),
            )
            .arg(arg!(-C --commas "Group thousands with commas in printed numbers"))
            .arg(
                arg!(--today <DATE> "Count days from this date (YYYY-MM-DD) instead of today")
                    .value_parser(parse_date),
            )
            .arg(
                arg!(--config <CONFIG> "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $DAYSUNTIL_CONFIG, then \
$XDG_CONFIG_HOME/daysuntil/config.toml on Linux and MacOS, %LOCALAPPDATA%/daysuntil/config.toml \
on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(CmdGenerateCompletion::arg())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Self {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(&matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        Cli {
            config: matches.get_one("config").cloned(),
            files: matches
                .get_many::<PathBuf>("files")
                .map(|files| files.cloned().map(Source::from).collect())
                .unwrap_or_default(),
            today: matches.get_one("today").copied(),
            delta: matches.get_one("delta").copied(),
            reverse_delta: matches.get_one("reverse-delta").copied(),
            reverse: matches.get_flag("reverse"),
            no_past: matches.get_flag("nopast"),
            no_future: matches.get_flag("nofuture"),
            totals_style: matches.get_one("totals-style").copied(),
            total_only: matches.get_flag("total-only"),
            total_all: matches.get_flag("total-all"),
            commas: matches.get_flag("commas"),
            completion: CmdGenerateCompletion::from(matches),
        }
    }

    /// Run the command, writing the report to standard output
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        if let Some(completion) = self.completion {
            completion.run();
            return Ok(());
        }

        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config.clone())?;
        let stdout = io::stdout();
        self.report(&config, &mut stdout.lock())?;
        Ok(())
    }

    /// Load the events and write the report to `out`
    pub fn report(&self, config: &Config, out: &mut impl Write) -> Result<Counts, Box<dyn Error>> {
        let options = self.report_options(config)?;
        if let Some(warning) = options.range_warning() {
            eprintln!("{} {}", "Warning:".yellow(), warning);
        }

        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let sources = self.sources(config)?;
        tracing::debug!(%today, ?sources, "loading events...");
        let events = load_events(&EventParser::new(today), &sources)?;

        let counts = Reporter::new(&options, &events).write_report(out)?;
        out.flush()?;
        Ok(counts)
    }

    /// Merge the flags over the configured defaults
    pub fn report_options(&self, config: &Config) -> Result<ReportOptions, Box<dyn Error>> {
        let base = config.report_options();
        let max_delta = self.delta.unwrap_or_else(|| to_signed(base.max_delta));
        let min_delta = self.reverse_delta.unwrap_or_else(|| to_signed(base.min_delta));

        let options = ReportOptions {
            reverse: base.reverse || self.reverse,
            suppress_past: self.no_past,
            suppress_future: self.no_future,
            totals_style: self.totals_style.unwrap_or(base.totals_style),
            totals_only: self.total_only,
            totals_all_events: self.total_all,
            commas: base.commas || self.commas,
            ..base
        }
        .with_delta_range(max_delta, min_delta)?;
        Ok(options)
    }

    /// The sources to read, falling back to the configured event list
    pub fn sources(&self, config: &Config) -> Result<Vec<Source>, Box<dyn Error>> {
        match self.files.is_empty() {
            true => Ok(vec![Source::File(config.events_file()?)]),
            false => Ok(self.files.clone()),
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn to_signed(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

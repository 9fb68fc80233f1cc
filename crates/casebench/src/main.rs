//! casebench CLI: maps command-line options onto the harness configuration
//! and runs the built-in self-check suite.

use casebench_core::{Config, RunReport, Selector, Suite, SuiteError};
use clap::Parser;
use comfy_table::{Cell, Color, Table};
use std::process::ExitCode;
use std::str::FromStr;
use time::OffsetDateTime;
use time::macros::format_description;

mod selfcheck;

/// Exit codes for the CLI.
mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const TESTS_FAILED: u8 = 1;
    pub const CONFIG_ERROR: u8 = 2;
    pub const HARNESS_MISUSE: u8 = 3;
}

/// Output format for the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Table,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("invalid format: {other}. Valid values: table, json")),
        }
    }
}

#[derive(Parser)]
#[command(name = "casebench")]
#[command(about = "Unit-test harness runner with a built-in self-check suite")]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print expected/actual values on equality checks
    #[arg(long)]
    show_values: bool,

    /// Print sub-test step numbers as they are declared
    #[arg(long)]
    show_steps: bool,

    /// Suppress the banner, per-case lines, and the summary
    #[arg(long)]
    no_progress: bool,

    /// Stop the run after the first failed case
    #[arg(long)]
    stop_on_error: bool,

    /// Unattended run: prompts enabled but auto-answered
    #[arg(long)]
    batch: bool,

    /// Prompt before each sub-test and after each check result
    #[arg(short, long)]
    interactive: bool,

    /// Audible alert before each blocking prompt
    #[arg(long)]
    beep: bool,

    /// List registered cases without executing them
    #[arg(long)]
    summarize: bool,

    /// Treat a case that declares zero sub-tests as harness misuse
    #[arg(long)]
    require_subtests: bool,

    /// Inject a deliberate failure into the self-check suite
    #[arg(long)]
    force_failure: bool,

    /// Wait for a key between cases (interactive runs only)
    #[arg(long)]
    case_pause: bool,

    /// Milliseconds to sleep after each passing case
    #[arg(long, default_value_t = 0)]
    sleep_ms: u64,

    /// Run only the group with this number
    #[arg(long)]
    group: Option<u32>,

    /// Run only the group with this name
    #[arg(long)]
    group_name: Option<String>,

    /// Run only the case with this number
    #[arg(long)]
    case: Option<u32>,

    /// Run only the case with this name
    #[arg(long)]
    case_name: Option<String>,

    /// Run only the sub-test with this number (the first always runs)
    #[arg(long)]
    subtest: Option<u32>,

    /// Run only the sub-test with this name (the first always runs)
    #[arg(long)]
    subtest_name: Option<String>,

    /// Automated answer for the before-sub-test prompt (c/s/a/q)
    #[arg(long, value_name = "CHAR")]
    response_before: Option<char>,

    /// Automated answer for the after-check prompt (p/f/a/q)
    #[arg(long, value_name = "CHAR")]
    response_after: Option<char>,

    /// Suppress all stdout progress output
    #[arg(short, long)]
    quiet: bool,

    /// Suppress all stderr diagnostics
    #[arg(long)]
    silent: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format: table, json
    #[arg(long, default_value = "table")]
    format: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    run_command(&cli)
}

fn selector(number: Option<u32>, name: Option<&String>) -> Selector {
    Selector {
        number: number.unwrap_or(0),
        name: name.cloned(),
    }
}

/// Map CLI flags onto the harness configuration.
///
/// `--batch` applies the batch preset first; explicit flags still win, so
/// a caller depending on an individual setting can override the preset.
fn build_config(cli: &Cli, format: ReportFormat) -> Config {
    let mut config = if cli.batch {
        Config::batch()
    } else {
        Config::default()
    };
    config.verbose |= cli.verbose;
    config.show_values |= cli.show_values;
    config.show_steps = cli.show_steps;
    config.show_progress = format == ReportFormat::Table && !cli.no_progress;
    config.stop_on_error = cli.stop_on_error;
    config.interactive |= cli.interactive;
    config.beep = cli.beep;
    config.summarize_only = cli.summarize;
    config.require_subtests = cli.require_subtests;
    config.force_failure = cli.force_failure;
    config.case_pause = cli.case_pause;
    config.sleep_ms = cli.sleep_ms;
    config.group = selector(cli.group, cli.group_name.as_ref());
    config.case = selector(cli.case, cli.case_name.as_ref());
    config.subtest = selector(cli.subtest, cli.subtest_name.as_ref());
    if cli.response_before.is_some() {
        config.response_before = cli.response_before;
    }
    if cli.response_after.is_some() {
        config.response_after = cli.response_after;
    }
    config.simulated = cli.force_failure;
    config.quiet = cli.quiet;
    config.silent = cli.silent;
    config.color = !cli.no_color;
    config
}

/// ISO-8601 timestamp for the JSON report.
fn timestamp_now() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn format_report_json(report: &RunReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

/// Detailed per-case table for verbose table output.
fn print_cases_table(report: &RunReport) {
    let mut table = Table::new();
    table.set_header(vec![
        "Test",
        "Group",
        "Case",
        "Name",
        "Sub-tests",
        "Errors",
        "Disposition",
        "Duration",
    ]);

    for case in &report.cases {
        let disposition_cell = if case.passed {
            Cell::new(case.disposition.label()).fg(Color::Green)
        } else {
            Cell::new(case.disposition.label()).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(case.test),
            Cell::new(case.group),
            Cell::new(case.case),
            Cell::new(&case.case_name),
            Cell::new(case.subtests),
            Cell::new(case.errors),
            disposition_cell,
            Cell::new(format!("{}ms", case.duration_ms)),
        ]);
    }

    println!("{table}");
}

fn run_command(cli: &Cli) -> ExitCode {
    let report_format: ReportFormat = match cli.format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(exit_code::CONFIG_ERROR);
        }
    };

    let config = build_config(cli, report_format);
    let mut suite = Suite::new(config);
    selfcheck::register(&mut suite);

    let passed = match suite.run() {
        Ok(passed) => passed,
        Err(err @ (SuiteError::NoTestsRegistered | SuiteError::SubtestsRequired { .. })) => {
            if !cli.silent {
                eprintln!("harness misuse: {err}");
            }
            return ExitCode::from(exit_code::HARNESS_MISUSE);
        }
    };

    match report_format {
        ReportFormat::Json => {
            let report = suite.report_data(&timestamp_now());
            println!("{}", format_report_json(&report));
        }
        ReportFormat::Table => {
            suite.report(passed);
            if cli.verbose && !cli.quiet {
                println!();
                print_cases_table(&suite.report_data(&timestamp_now()));
            }
        }
    }

    if passed {
        ExitCode::from(exit_code::SUCCESS)
    } else {
        ExitCode::from(exit_code::TESTS_FAILED)
    }
}

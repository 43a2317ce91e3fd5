// solution-check-cli/src/main.rs
// ============================================================================
// Module: Solution Check CLI Entry Point
// Description: Command dispatcher for checking solutions against task files.
// Purpose: Provide a localized CLI over the checker, lookup, and ordering APIs.
// Dependencies: clap, serde, solution-check-core, solution-check-config, thiserror
// ============================================================================

//! ## Overview
//! The `solution-check` binary loads task definitions, checks opaque solution
//! payloads against them, and prints either a text summary or the canonical
//! JSON report. The CLI only formats; every decision comes from the core.
//! All user-facing strings are routed through the i18n catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use solution_check_cli::audit::build_audit_sink;
use solution_check_cli::i18n::Locale;
use solution_check_cli::i18n::set_locale;
use solution_check_cli::t;
use solution_check_config::ConfigError;
use solution_check_config::LimitsConfig;
use solution_check_config::SolutionCheckConfig;
use solution_check_config::TaskDefinition;
use solution_check_core::CheckSession;
use solution_check_core::Checker;
use solution_check_core::ComparisonStrategy;
use solution_check_core::HashDigest;
use solution_check_core::SubmissionReport;
use solution_check_core::Task;
use solution_check_core::TestCase;
use solution_check_core::UserSolution;
use solution_check_core::find_by_expected;
use solution_check_core::hashing::canonical_json_bytes;
use solution_check_core::sort_by_input;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "SOLUTION_CHECK_LANG";
/// Expected value the demo searches for.
const DEMO_SEARCH_EXPECTED: &str = "expected3";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "solution-check", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `SOLUTION_CHECK_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a solution against every test of a task file.
    Check(CheckCommand),
    /// Find the first test of a task file with a given expected value.
    Find(FindCommand),
    /// Print the inputs of a task file's tests in sorted order.
    Sort(SortCommand),
    /// Run the built-in walkthrough over a fixed set of tests.
    Demo,
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Task file and config arguments shared by task commands.
#[derive(Args, Debug)]
struct TaskArgs {
    /// Path to the task definition (TOML).
    #[arg(long, value_name = "PATH")]
    task: PathBuf,
    /// Optional config file path (defaults to `solution-check.toml`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
struct CheckCommand {
    /// Task and config locations.
    #[command(flatten)]
    task: TaskArgs,
    /// Opaque solution payload.
    #[arg(long, value_name = "TEXT")]
    solution: String,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `find`.
#[derive(Args, Debug)]
struct FindCommand {
    /// Task and config locations.
    #[command(flatten)]
    task: TaskArgs,
    /// Expected value to search for.
    #[arg(long, value_name = "TEXT")]
    expected: String,
}

/// Arguments for `sort`.
#[derive(Args, Debug)]
struct SortCommand {
    /// Task and config locations.
    #[command(flatten)]
    task: TaskArgs,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Solution Check configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to `solution-check.toml`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Output formats for `check`.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Canonical JSON output.
    Json,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// JSON payload emitted by `check --format json`.
#[derive(Serialize)]
struct CheckOutput<'a> {
    /// Structured submission report.
    report: &'a SubmissionReport,
    /// Canonical digest of `report`.
    report_digest: &'a HashDigest,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        emit_line(&t!("main.version", version = env!("CARGO_PKG_VERSION")))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Check(command) => command_check(&command),
        Commands::Find(command) => command_find(&command),
        Commands::Sort(command) => command_sort(&command),
        Commands::Demo => command_demo(),
        Commands::Config {
            command,
        } => match command {
            ConfigCommand::Validate(command) => command_config_validate(&command),
        },
    }
}

/// Prints the top-level help text.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    emit_line("")
}

// ============================================================================
// SECTION: Task Commands
// ============================================================================

/// Checks a solution and prints the report.
fn command_check(command: &CheckCommand) -> CliResult<ExitCode> {
    let config = load_config(command.task.config.as_deref())?;
    let task = load_task(&command.task.task, &config.limits)?;
    let audit = build_audit_sink(&config.audit).map_err(|err| {
        let path = config
            .audit
            .path
            .as_deref()
            .map_or_else(String::new, |path| path.display().to_string());
        CliError::new(t!("audit.open_failed", path = path, error = err))
    })?;

    let checker = Checker::new(config.check_limits(), audit);
    let submission = checker.check(UserSolution::new(command.solution.as_str()), &task);
    let report = submission.report(&task);
    let digest =
        report.digest().map_err(|err| CliError::new(t!("check.report_failed", error = err)))?;

    match command.format {
        OutputFormat::Text => write_report_text(&report, &digest)?,
        OutputFormat::Json => write_report_json(&report, &digest)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Looks up a test by expected value.
fn command_find(command: &FindCommand) -> CliResult<ExitCode> {
    let config = load_config(command.task.config.as_deref())?;
    let task = load_task(&command.task.task, &config.limits)?;
    emit_line(&describe_lookup(task.suite().tests(), &command.expected))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints test inputs in stable sorted order.
fn command_sort(command: &SortCommand) -> CliResult<ExitCode> {
    let config = load_config(command.task.config.as_deref())?;
    let task = load_task(&command.task.task, &config.limits)?;
    emit_line(&t!("sort.header"))?;
    for test in task.suite().sorted_by_input().tests() {
        emit_line(test.input())?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Validates the configuration file.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = load_config(command.config.as_deref())?;
    emit_line(&t!("config.validate.ok"))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Demo
// ============================================================================

/// Sorts, searches, and runs a fixed set of tests.
fn command_demo() -> CliResult<ExitCode> {
    let (mut tests, mut described) = demo_tests();

    sort_by_input(&mut tests);
    emit_line(&t!("sort.header"))?;
    for test in &tests {
        emit_line(test.input())?;
    }

    emit_line(&describe_lookup(&tests, DEMO_SEARCH_EXPECTED))?;

    for line in demo_run_lines(&tests) {
        emit_line(&line)?;
    }

    sort_by_input(&mut described);
    emit_line(&t!("demo.described.header"))?;
    for test in &described {
        emit_line(&test.display_input())?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Runs each test and formats its output lines in order.
///
/// Gated tests announce their complexity level before the result line.
fn demo_run_lines(tests: &[TestCase]) -> Vec<String> {
    let mut lines = Vec::with_capacity(tests.len());
    for test in tests {
        if let ComparisonStrategy::Gated {
            threshold,
        } = test.strategy()
        {
            lines.push(t!("demo.run.gated", level = threshold));
        }
        let result = test.run();
        lines.push(t!("demo.run.entry", input = test.input(), passed = result.passed));
    }
    lines
}

/// Returns the plain and described demo tests.
fn demo_tests() -> (Vec<TestCase>, Vec<TestCase>) {
    let tests = vec![
        TestCase::new("input1", "expected1", ComparisonStrategy::exact()),
        TestCase::new("input2", "input2", ComparisonStrategy::gated(3)),
    ];
    let described = vec![
        TestCase::new("input3", "expected3", ComparisonStrategy::exact())
            .with_description("Test A"),
        TestCase::new("input4", "expected4", ComparisonStrategy::gated(5))
            .with_description("Test C"),
        TestCase::new("input5", "expected5", ComparisonStrategy::exact())
            .with_description("Test B"),
    ];
    (tests, described)
}

// ============================================================================
// SECTION: Loading Helpers
// ============================================================================

/// Loads the config, mapping failures to a localized error.
fn load_config(path: Option<&Path>) -> CliResult<SolutionCheckConfig> {
    SolutionCheckConfig::load(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Loads a task definition and builds the core task.
fn load_task(path: &Path, limits: &LimitsConfig) -> CliResult<Task> {
    let to_error = |err: ConfigError| {
        CliError::new(t!("task.load_failed", path = path.display(), error = err))
    };
    let definition = TaskDefinition::load(path, limits).map_err(to_error)?;
    let mut session = CheckSession::new();
    definition.to_task(&mut session).map_err(to_error)
}

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Formats the outcome of a lookup by expected value.
fn describe_lookup(tests: &[TestCase], expected: &str) -> String {
    find_by_expected(tests, expected).map_or_else(
        || t!("find.not_found", expected = expected),
        |test| t!("find.found", expected = test.expected()),
    )
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes the text form of a report.
fn write_report_text(report: &SubmissionReport, digest: &HashDigest) -> CliResult<()> {
    emit_line(&t!("check.header", task = report.task))?;
    emit_line(&t!("check.solution", hash = report.solution_hash))?;
    for entry in &report.entries {
        let line = match &entry.display_input {
            Some(input) => {
                t!("check.entry", index = entry.index, input = input, passed = entry.passed)
            }
            None => t!("check.entry.bonus", index = entry.index, passed = entry.passed),
        };
        emit_line(&line)?;
    }
    emit_line(&t!("check.summary", passed = report.total_passed, total = report.total))?;
    emit_line(&t!("check.digest", digest = digest))
}

/// Writes the canonical JSON form of a report.
fn write_report_json(report: &SubmissionReport, digest: &HashDigest) -> CliResult<()> {
    let output = CheckOutput {
        report,
        report_digest: digest,
    };
    let mut bytes = canonical_json_bytes(&output)
        .map_err(|err| CliError::new(t!("check.report_failed", error = err)))?;
    bytes.push(b'\n');
    let mut stdout = std::io::stdout();
    stdout.write_all(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a line to stdout, mapping failures to a localized error.
fn emit_line(message: &str) -> CliResult<()> {
    write_stdout_line(message).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

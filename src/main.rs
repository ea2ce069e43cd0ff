// Command-line entry point for gclint.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use gclint::application::{exit_status, AnalyzeUsecase, UnitOutcome};
use gclint::infrastructure::concurrency::build_thread_pool;
use gclint::infrastructure::config_loader::load_config;
use gclint::infrastructure::logging::init_tracing;
use gclint::infrastructure::unit_files::collect_unit_files;
use gclint::infrastructure::{JsonReporter, JsonUnitLoader, TextReporter};
use gclint::ports::DiagnosticSink;
use std::path::PathBuf;
use std::process::ExitCode;

/// Check for suspicious cmd/compile constructs.
///
/// Reports uses of ir.Node that are suspect and likely need changes before
/// ir.Node can be split further: map keys, raw comparisons and, optionally,
/// *ir.Name values stored into ir.Node destinations.
#[derive(Parser, Debug)]
#[command(name = "gclint", author, version, about, long_about)]
struct Cli {
    /// Unit files or folders of exported, type-checked units (*.json)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Warn about assignments of *ir.Name to ir.Node (beware: many false positives)
    #[arg(long)]
    assign: bool,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("gclint: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut config = load_config(cli.config.as_deref())?;
    config.assign |= cli.assign;

    let paths = collect_unit_files(&cli.inputs)?;
    tracing::info!(units = paths.len(), assign = config.assign, "starting analysis");

    let usecase = AnalyzeUsecase {
        loader: &JsonUnitLoader,
        config: &config,
    };
    let pool = build_thread_pool(cli.jobs)?;
    let outcomes = pool.install(|| usecase.run(&paths));

    let failed = outcomes.iter().filter(|o| o.is_failed()).count();
    let found: usize = outcomes.iter().map(UnitOutcome::diagnostic_count).sum();
    let status = exit_status(&outcomes);

    let mut reports = Vec::new();
    for outcome in outcomes {
        match outcome {
            UnitOutcome::Checked(report) => reports.push(report),
            UnitOutcome::Failed { path, error } => {
                eprintln!("gclint: {}: {:#}", path.display(), error);
            }
        }
    }

    let sink: &dyn DiagnosticSink = match cli.format {
        Format::Text => &TextReporter,
        Format::Json => &JsonReporter,
    };
    let stdout = std::io::stdout();
    sink.report(&reports, &mut stdout.lock())?;

    tracing::info!(diagnostics = found, failed, "analysis finished");
    Ok(ExitCode::from(status))
}

use std::path::PathBuf;

use anyhow::Context;
use astdiff_core::{DiffMode, generate_report};
use astdiff_syntax::LanguageRegistry;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "astdiff",
    version,
    about = "Generate syntax-aware diff reports for LLM consumption"
)]
struct Cli {
    /// Diff working directory changes (unstaged) instead of staged ones
    #[arg(short, long, conflicts_with_all = ["from_ref", "to_ref"])]
    working: bool,

    /// Base commit reference for comparison
    #[arg(long = "from", value_name = "REF")]
    from_ref: Option<String>,

    /// Target commit reference for comparison
    #[arg(long = "to", value_name = "REF", requires = "from_ref")]
    to_ref: Option<String>,

    /// Output file path
    #[arg(short, long, default_value = "diff.json")]
    output: PathBuf,

    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,
}

/// Classify an error into an exit code.
///
/// Exit codes:
///   0 — success (including "no changes")
///   1 — general error
///   3 — not a git repository
fn classify_exit_code(err: &anyhow::Error) -> i32 {
    let msg = format!("{err:#}").to_lowercase();
    if msg.contains("not a git repository") {
        3
    } else {
        1
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let filter = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (_, 0) => "warn",
        (_, 1) => "info",
        (_, 2) => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(classify_exit_code(&e));
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mode = if cli.from_ref.is_some() {
        DiffMode::Commits
    } else if cli.working {
        DiffMode::Working
    } else {
        DiffMode::Staged
    };

    let registry = LanguageRegistry::new();
    let report = generate_report(
        mode,
        cli.from_ref.as_deref(),
        cli.to_ref.as_deref(),
        &registry,
    )
    .context("Failed to run git diff")?;

    let Some(report) = report else {
        println!("No changes detected.");
        return Ok(());
    };

    if cli.stdout {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else {
        report
            .write_file(&cli.output)
            .with_context(|| format!("Failed to write {}", cli.output.display()))?;
        println!("Diff output written to {}", cli.output.display());
    }

    Ok(())
}

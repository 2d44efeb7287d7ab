#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use perf_report::{compare_cmd, single_cmd};

#[derive(Parser, Debug)]
#[command(name = "perf-report")]
#[command(about = "Render package benchmark results as markdown tables for PR comments", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set PERF_REPORT_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two benchmark documents
    Compare {
        /// Baseline benchmark document (JSON)
        #[arg(long)]
        before: std::path::PathBuf,
        /// Benchmark document under test (JSON)
        #[arg(long)]
        after: std::path::PathBuf,
        /// Column title for the baseline
        #[arg(long)]
        before_title: Option<String>,
        /// Column title for the document under test
        #[arg(long)]
        after_title: Option<String>,
        /// Report configuration (TOML)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
        /// Write the markdown to this file instead of stdout
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },

    /// Render a single benchmark document
    Single {
        /// Benchmark document (JSON)
        #[arg(long)]
        benchmark: std::path::PathBuf,
        /// Report configuration (TOML)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
        /// Write the markdown to this file instead of stdout
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("PERF_REPORT_LOG").unwrap_or_else(|_| {
        if verbose { "perf_report=debug".to_string() } else { "perf_report=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compare { before, after, before_title, after_title, config, output } => {
            compare_cmd::run(before, after, before_title, after_title, config, output)
        }
        Commands::Single { benchmark, config, output } => single_cmd::run(benchmark, config, output),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

//! CLI Adapter.

mod workflow;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::app::api::ConnectionOptions;
use crate::app::config::ConfigOverrides;
use crate::domain::{AppError, OutputFormat};

#[derive(Parser)]
#[command(name = "wfctl")]
#[command(version)]
#[command(
    about = "Signal, cancel, terminate, or delete workflow executions, one at a time or in batches",
    long_about = None
)]
struct Cli {
    /// Path to a TOML config file (default: $WFCTL_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Service HTTP API address, e.g. http://localhost:7243
    #[arg(long, global = true)]
    address: Option<Url>,
    /// Namespace to operate in
    #[arg(short = 'n', long, global = true)]
    namespace: Option<String>,
    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputArg::Text)]
    output: OutputArg,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operate on workflow executions
    #[clap(visible_alias = "wf")]
    Workflow {
        #[command(subcommand)]
        command: workflow::WorkflowCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let connection = ConnectionOptions {
        config_path: cli.config,
        overrides: ConfigOverrides { address: cli.address, namespace: cli.namespace },
    };
    let format = OutputFormat::from(cli.output);

    let result: Result<(), AppError> = match cli.command {
        Commands::Workflow { command } => workflow::run_workflow(command, &connection, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so stdout stays machine-readable; `RUST_LOG` overrides the level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

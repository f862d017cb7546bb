//! CLI Adapter.

mod init;
mod layout;
mod resolve;
mod tasks;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;
use crate::services::CLEAN_TASK;

#[derive(Parser)]
#[command(name = "buildpin")]
#[command(version)]
#[command(
    about = "Relocate multi-module build outputs and pin dependency versions",
    long_about = None
)]
struct Cli {
    /// Project directory containing buildpin.toml
    #[arg(short = 'C', long, global = true, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter buildpin.toml
    #[clap(visible_alias = "i")]
    Init {
        /// Project name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Show the shared output root and every module's output directory
    #[clap(visible_alias = "l")]
    Layout,
    /// Resolve module dependencies with forced versions applied
    #[clap(visible_alias = "r")]
    Resolve {
        /// Resolve a single module
        #[arg(short, long)]
        module: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = resolve::OutputFormat::Text)]
        format: resolve::OutputFormat,
    },
    /// List registered tasks
    Tasks,
    /// Invoke a registered task
    Run {
        /// Task name
        task: String,
    },
    /// Delete the shared build output directory
    Clean,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let project_dir = cli.project_dir;

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { name } => init::run_init(&project_dir, name.as_deref()),
        Commands::Layout => layout::run_layout(&project_dir),
        Commands::Resolve { module, format } => {
            resolve::run_resolve(&project_dir, module, format)
        }
        Commands::Tasks => tasks::run_list(&project_dir),
        Commands::Run { task } => tasks::run_task(&project_dir, &task),
        Commands::Clean => tasks::run_task(&project_dir, CLEAN_TASK),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! CLI Adapter.

mod convert;

use std::path::PathBuf;

use clap::Parser;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "docx2md")]
#[command(version)]
#[command(about = "Convert .docx files under a docs directory to Markdown", long_about = None)]
struct Cli {
    /// Directory that contains .docx files (default: ./docs)
    #[arg(long, value_name = "PATH")]
    docs_dir: Option<PathBuf>,
    /// Output directory for .md files; omit to write each file next to its source
    #[arg(long, value_name = "PATH")]
    output_dir: Option<PathBuf>,
    /// Overwrite existing Markdown files
    #[arg(long)]
    force: bool,
    /// Read defaults from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> =
        convert::run_convert(cli.docs_dir, cli.output_dir, cli.force, cli.config);

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) if e.aborts_run() => {
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

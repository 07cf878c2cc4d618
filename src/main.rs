use clap::Parser;
use std::path::PathBuf;

use anyhow::{Context, Result};

use colorfix::rewrite::fix_directory;
use colorfix::{ErrorPolicy, FixConfig};

/// Color Placeholder Fixer
#[derive(Parser, Debug)]
#[command(name = "colorfix")]
#[command(about = "Strip stray # characters from $(#RRGGBB) placeholders in JSON files")]
#[command(version = "0.1.0")]
struct CliArgs {
    /// Root directory to scan for .json files
    #[arg()]
    root: PathBuf,

    /// Report files that would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Log failing files to stderr and keep going instead of aborting
    #[arg(long)]
    continue_on_error: bool,

    /// Output fix statistics after the run
    #[arg(long)]
    stats: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    if !args.root.is_dir() {
        return Err(anyhow::anyhow!(
            "Input path is not a directory: {}",
            args.root.display()
        ));
    }

    let config = create_fix_config(&args);
    let summary = fix_directory(&args.root, &config)
        .with_context(|| format!("failed fixing files under {}", args.root.display()))?;

    if args.stats && !args.quiet {
        println!("\n{}", summary.report());
    }

    Ok(())
}

fn create_fix_config(args: &CliArgs) -> FixConfig {
    let error_policy = if args.continue_on_error {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };

    FixConfig {
        error_policy,
        dry_run: args.dry_run,
        quiet: args.quiet,
    }
}

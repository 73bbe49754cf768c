use clap::Parser;
use std::path::PathBuf;

use divider::{FilterConfig, RunOptions};

#[derive(Parser)]
#[command(name = "divider")]
#[command(about = "Remove a colored border from test.png, binarize and clean it into morph.jpg")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the result in a window and wait for a key press
    #[arg(long)]
    preview: bool,

    /// Save every step's output to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = FilterConfig::default();
    let options = RunOptions {
        debug_out: args.debug_out,
        preview: args.preview,
    };

    let outcome = divider::run(&config, &options)?;

    println!(
        "Wrote {} ({}x{})",
        config.output_path.display(),
        outcome.image.width(),
        outcome.image.height()
    );

    Ok(())
}

//! pmos CLI - parametric video-quality prediction tool

use clap::{Parser, Subcommand};

mod commands;

/// Predict subjective video quality (MOS) from objective metrics.
#[derive(Parser)]
#[command(name = "pmos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the MOS for a single metric measurement
    Predict(commands::predict::CmdPredict),

    /// Replay the embedded calibration dataset and report model accuracy
    Validate(commands::validate::CmdValidate),

    /// Score a CSV of per-title metric measurements
    Batch(commands::batch::CmdBatch),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(cmd) => cmd.run(cli.verbose),
        Commands::Validate(cmd) => cmd.run(cli.verbose),
        Commands::Batch(cmd) => cmd.run(cli.verbose),
    }
}

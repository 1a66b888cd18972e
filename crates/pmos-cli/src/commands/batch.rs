//! CSV batch-scoring command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pmos::DeviceType;
use pmos::batch::{self, BatchDefaults, BatchScore};

/// Score a CSV of per-title metric measurements.
#[derive(Args, Debug)]
pub struct CmdBatch {
    /// Input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file; a .json extension selects JSON, otherwise CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Default device for rows without a device column
    #[arg(long, env = "PMOS_DEVICE", default_value = "tv")]
    pub device: String,

    /// Default to HDR for rows without an hdr column
    #[arg(long)]
    pub hdr: bool,

    /// Default upsampling method
    #[arg(long, default_value = "bicubic")]
    pub upsampling: String,

    /// Default player width; fullscreen on the device when omitted
    #[arg(long, requires = "player_height")]
    pub player_width: Option<u32>,

    /// Default player height; fullscreen on the device when omitted
    #[arg(long, requires = "player_width")]
    pub player_height: Option<u32>,
}

impl CmdBatch {
    /// Execute the batch command.
    pub fn run(&self, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Reading metric rows from: {}", self.input.display());
        }

        let device: DeviceType = self.device.parse()?;
        if device == DeviceType::Custom {
            anyhow::bail!(
                "custom is not a usable batch default; put a device column in the CSV \
                 or pick a catalog device"
            );
        }

        let records = batch::read_records(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;
        if verbose {
            eprintln!("Read {} rows", records.len());
        }

        let defaults = BatchDefaults {
            device,
            custom_params: None,
            hdr: self.hdr,
            upsampling: self.upsampling.parse()?,
            player: self.player_width.zip(self.player_height),
        };

        let scores = batch::score_records(&records, &defaults);
        let failed = scores.iter().filter(|s| s.error.is_some()).count();
        println!("Scored {} rows ({} with errors)", scores.len(), failed);

        for score in scores.iter().filter(|s| s.error.is_some()).take(10) {
            println!(
                "  {}: {}",
                score.name.as_deref().unwrap_or("<unnamed>"),
                score.error.as_deref().unwrap_or("")
            );
        }
        if failed > 10 {
            println!("  ... and {} more failed rows", failed - 10);
        }

        if let Some(path) = &self.output {
            let as_json = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if as_json {
                batch::write_json(&scores, path)
            } else {
                batch::write_csv(&scores, path)
            }
            .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Saved to: {}", path.display());
        } else {
            println!();
            print_table(&scores);
        }

        Ok(())
    }
}

fn print_table(scores: &[BatchScore]) {
    println!(
        "{:<20} {:>11} {:>8} {:>8} {:>8} {:>8}",
        "Name", "Video", "PSNR", "SSIM", "VIF", "VMAF"
    );
    println!("{:-<68}", "");
    for score in scores {
        println!(
            "{:<20} {:>11} {:>8} {:>8} {:>8} {:>8}",
            score.name.as_deref().unwrap_or("-"),
            format!("{}x{}", score.width, score.height),
            fmt_mos(score.psnr_mos),
            fmt_mos(score.ssim_mos),
            fmt_mos(score.vif_mos),
            fmt_mos(score.vmaf_mos),
        );
    }
}

fn fmt_mos(mos: Option<f64>) -> String {
    mos.map_or_else(|| "-".to_string(), |m| format!("{m:.3}"))
}

//! Calibration-dataset validation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pmos::ValidationReport;

use super::MetricArg;

/// Replay the embedded calibration dataset through one metric mapping.
#[derive(Args, Debug)]
pub struct CmdValidate {
    /// Metric to validate; only psnr and ssim carry reference columns
    #[arg(long, default_value = "psnr")]
    pub metric: MetricArg,

    /// Print every sample, not only the summary
    #[arg(long)]
    pub full: bool,

    /// Write the full report as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the per-sample table as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl CmdValidate {
    /// Execute the validate command.
    pub fn run(&self, verbose: bool) -> Result<()> {
        let metric = self.metric.metric();
        let report =
            ValidationReport::run(metric).with_context(|| format!("cannot validate {metric}"))?;

        if self.full || verbose {
            for s in &report.samples {
                println!(
                    "{} -> {}x{}, {}={}, predicted MOS {:.4}, panel MOS {:.4}, delta {:+.4}",
                    s.name, s.width, s.height, metric, s.value, s.predicted, s.reference, s.delta
                );
            }
            println!();
        }

        println!("{} validation, {} samples", metric, report.samples.len());
        println!("{:-<48}", "");
        println!("  rms error:   {:.4}", report.rms_error);
        println!("  mean delta:  {:+.4}", report.mean_delta);
        println!("  max |delta|: {:.4}", report.max_abs_delta);
        if let Some(worst) = report.worst_sample() {
            println!(
                "  worst:       {} ({}x{}, delta {:+.4})",
                worst.name, worst.width, worst.height, worst.delta
            );
        }

        if let Some(path) = &self.json {
            report
                .write_json(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Saved JSON report to: {}", path.display());
        }
        if let Some(path) = &self.csv {
            report
                .write_csv(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Saved CSV table to: {}", path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_reports_to_files() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CmdValidate {
            metric: MetricArg::Ssim,
            full: false,
            json: Some(dir.path().join("report.json")),
            csv: Some(dir.path().join("report.csv")),
        };
        cmd.run(false).unwrap();
        assert!(dir.path().join("report.json").exists());
        assert!(dir.path().join("report.csv").exists());
    }

    #[test]
    fn uncalibrated_metric_fails_with_context() {
        let cmd = CmdValidate {
            metric: MetricArg::Vmaf,
            full: false,
            json: None,
            csv: None,
        };
        let err = cmd.run(false).unwrap_err();
        assert!(err.to_string().contains("vmaf"));
    }
}

//! Command implementations.

use clap::ValueEnum;
use pmos::Metric;

pub mod batch;
pub mod predict;
pub mod validate;

/// Metric selector shared by the commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    Psnr,
    Ssim,
    Vif,
    Vmaf,
}

impl MetricArg {
    /// The library metric this flag selects.
    pub fn metric(self) -> Metric {
        match self {
            MetricArg::Psnr => Metric::Psnr,
            MetricArg::Ssim => Metric::Ssim,
            MetricArg::Vif => Metric::Vif,
            MetricArg::Vmaf => Metric::Vmaf,
        }
    }
}

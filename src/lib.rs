//! # pmos
//!
//! Parametric prediction of subjective video quality (MOS) from objective
//! full-reference metrics.
//!
//! Given a PSNR, SSIM, VIF, or VMAF score and a description of how the video
//! is watched (device, player window, video resolution, dynamic range,
//! upsampling method), the library predicts the mean opinion score a viewer
//! panel would give on the 1..5 absolute category rating scale. The model
//! fuses the Westerink-Roufs visibility baseline with a sigmoid-normalized
//! metric score, calibrated against a public subjective dataset.
//!
//! ## Quick start
//!
//! ```rust
//! use pmos::{DeviceType, ViewingSetup, psnr_to_mos};
//!
//! // 1080p stream at 41 dB PSNR, watched fullscreen on a TV.
//! let setup = ViewingSetup::fullscreen(DeviceType::Tv, 1920, 1080).unwrap();
//! let mos = psnr_to_mos(41.0, &setup)?;
//! assert!(mos > 4.0);
//! # Ok::<(), pmos::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error taxonomy for mapping operations
//! - [`device`]: Device archetypes and display parameters
//! - [`geometry`]: Viewing angle and angular resolution derivation
//! - [`viewing`]: The [`ViewingSetup`] input bundle
//! - [`wr`]: Westerink-Roufs perceptual baseline
//! - [`fusion`]: Per-metric fusion models
//! - [`mapping`]: Metric-to-MOS mapping entry points
//! - [`dataset`]: Embedded subjective calibration dataset
//! - [`report`]: Validation reporting against the dataset
//! - [`batch`]: Parallel scoring of metric CSV tables

pub mod batch;
pub mod dataset;
pub mod device;
pub mod error;
pub mod fusion;
pub mod geometry;
pub mod mapping;
pub mod report;
pub mod viewing;
pub mod wr;

/// Lower end of the mean opinion score scale.
pub const MOS_MIN: f64 = 1.0;

/// Upper end of the mean opinion score scale.
pub const MOS_MAX: f64 = 5.0;

// Re-export commonly used types
pub use batch::{BatchDefaults, BatchRecord, BatchScore};
pub use dataset::CalibrationSample;
pub use device::{DeviceParams, DeviceType, ViewingDistance};
pub use error::{Error, Result};
pub use geometry::ViewingParams;
pub use mapping::{
    Metric, QualityLevel, psnr_to_mos, ssim_to_mos, vif_to_mos, vmaf_to_mos,
};
pub use report::{SampleResult, ValidationReport};
pub use viewing::{Upsampling, ViewingSetup, hdr_from_flag};

//! Metric-to-MOS mapping: the public prediction API.
//!
//! Each operation takes a raw full-reference metric score and a
//! [`ViewingSetup`], and predicts the mean opinion score a panel of viewers
//! would give that video in that setup:
//!
//! ```
//! use pmos::{DeviceType, ViewingSetup, psnr_to_mos};
//!
//! let setup = ViewingSetup::fullscreen(DeviceType::Tv, 1920, 1080).unwrap();
//! let mos = psnr_to_mos(41.0, &setup)?;
//! assert!((1.0..=5.0).contains(&mos));
//! # Ok::<(), pmos::Error>(())
//! ```
//!
//! The pipeline is the same for every metric: derive the viewing geometry,
//! validate the raw score against the metric's documented domain, evaluate
//! the Westerink-Roufs baseline, fuse. Any validation failure returns the
//! taxonomy [`Error`] without partial computation.
//!
//! ## Raw score domains
//!
//! | Metric | Domain |
//! |--------|--------|
//! | PSNR | (0, 100) |
//! | SSIM | (0, 1] |
//! | VIF | (0, 1] |
//! | VMAF | (0, 100] |
//!
//! NaN is outside every domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fusion::{self, FusionParams};
use crate::viewing::ViewingSetup;
use crate::wr;

/// Full-reference metric whose score can be mapped to a MOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Peak signal-to-noise ratio, dB.
    Psnr,
    /// Structural similarity index.
    Ssim,
    /// Visual information fidelity.
    Vif,
    /// Video multimethod assessment fusion, 0..100.
    Vmaf,
}

impl Metric {
    /// All supported metrics.
    pub const ALL: [Metric; 4] = [Metric::Psnr, Metric::Ssim, Metric::Vif, Metric::Vmaf];

    /// Lowercase metric name as used in CSV columns and CLI flags.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Metric::Psnr => "psnr",
            Metric::Ssim => "ssim",
            Metric::Vif => "vif",
            Metric::Vmaf => "vmaf",
        }
    }

    /// Human-readable raw score domain.
    #[must_use]
    pub fn domain(self) -> &'static str {
        match self {
            Metric::Psnr => "(0, 100)",
            Metric::Ssim | Metric::Vif => "(0, 1]",
            Metric::Vmaf => "(0, 100]",
        }
    }

    /// Check a raw score against this metric's domain.
    ///
    /// Comparisons are written in accepting form, so NaN is rejected.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMetricRange`] naming the metric, value and domain.
    pub fn validate_value(self, value: f64) -> Result<()> {
        let ok = match self {
            Metric::Psnr => value > 0.0 && value < 100.0,
            Metric::Ssim | Metric::Vif => value > 0.0 && value <= 1.0,
            Metric::Vmaf => value > 0.0 && value <= 100.0,
        };
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidMetricRange {
                metric: self.name().to_string(),
                value,
                domain: self.domain().to_string(),
            })
        }
    }

    fn fusion_params(self) -> &'static FusionParams {
        match self {
            Metric::Psnr => &fusion::PSNR,
            Metric::Ssim => &fusion::SSIM,
            Metric::Vif => &fusion::VIF,
            Metric::Vmaf => &fusion::VMAF,
        }
    }

    /// Map a raw score of this metric to a predicted MOS.
    ///
    /// # Errors
    ///
    /// Geometry errors from [`ViewingSetup::viewing_params`], or
    /// [`Error::InvalidMetricRange`] for an out-of-domain score.
    pub fn to_mos(self, value: f64, setup: &ViewingSetup) -> Result<f64> {
        let params = setup.viewing_params()?;
        self.validate_value(value)?;
        let q_wr = wr::wr_score(params.phi, params.u, setup.hdr, setup.upsampling);
        Ok(self.fusion_params().fuse(q_wr, value))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Predict the MOS for a PSNR score in the given viewing setup.
///
/// # Errors
///
/// See [`Metric::to_mos`].
pub fn psnr_to_mos(psnr: f64, setup: &ViewingSetup) -> Result<f64> {
    Metric::Psnr.to_mos(psnr, setup)
}

/// Predict the MOS for an SSIM score in the given viewing setup.
///
/// # Errors
///
/// See [`Metric::to_mos`].
pub fn ssim_to_mos(ssim: f64, setup: &ViewingSetup) -> Result<f64> {
    Metric::Ssim.to_mos(ssim, setup)
}

/// Predict the MOS for a VIF score in the given viewing setup.
///
/// # Errors
///
/// See [`Metric::to_mos`].
pub fn vif_to_mos(vif: f64, setup: &ViewingSetup) -> Result<f64> {
    Metric::Vif.to_mos(vif, setup)
}

/// Predict the MOS for a VMAF score in the given viewing setup.
///
/// # Errors
///
/// See [`Metric::to_mos`].
pub fn vmaf_to_mos(vmaf: f64, setup: &ViewingSetup) -> Result<f64> {
    Metric::Vmaf.to_mos(vmaf, setup)
}

/// Categorical reading of a MOS value, for report and CLI output.
///
/// Thresholds follow the conventional five-grade absolute category rating
/// scale: 4.3 and up reads as excellent, below 3.1 as bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    /// MOS below 3.1.
    Bad,
    /// MOS in [3.1, 3.6).
    Poor,
    /// MOS in [3.6, 4.0).
    Fair,
    /// MOS in [4.0, 4.3).
    Good,
    /// MOS of 4.3 or higher.
    Excellent,
}

impl QualityLevel {
    /// Categorize a MOS value.
    #[must_use]
    pub fn from_mos(mos: f64) -> Self {
        if mos >= 4.3 {
            QualityLevel::Excellent
        } else if mos >= 4.0 {
            QualityLevel::Good
        } else if mos >= 3.6 {
            QualityLevel::Fair
        } else if mos >= 3.1 {
            QualityLevel::Poor
        } else {
            QualityLevel::Bad
        }
    }

    /// Capitalized label for tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QualityLevel::Bad => "Bad",
            QualityLevel::Poor => "Poor",
            QualityLevel::Fair => "Fair",
            QualityLevel::Good => "Good",
            QualityLevel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceParams, DeviceType, ViewingDistance};
    use crate::viewing::Upsampling;

    fn tv_fullscreen_hd() -> ViewingSetup {
        ViewingSetup::fullscreen(DeviceType::Tv, 1920, 1080).unwrap()
    }

    #[test]
    fn psnr_reference_sample() {
        // Netflix dataset sample: 1080p encode at 41.04 dB scored 4.81 on a
        // TV panel; the prediction lands within the model's error band.
        let mos = psnr_to_mos(41.03835, &tv_fullscreen_hd()).unwrap();
        assert!((mos - 4.4382).abs() < 0.01, "mos = {mos}");
        assert!((mos - 4.8077).abs() < 1.0);
    }

    #[test]
    fn ssim_reference_sample() {
        let mos = ssim_to_mos(0.977687, &tv_fullscreen_hd()).unwrap();
        assert!((mos - 4.4544).abs() < 0.01, "mos = {mos}");
        assert!((mos - 4.8077).abs() < 1.0);
    }

    #[test]
    fn vif_reference_point() {
        let mos = vif_to_mos(0.9, &tv_fullscreen_hd()).unwrap();
        assert!((mos - 4.5730).abs() < 0.01, "mos = {mos}");
    }

    #[test]
    fn vmaf_reference_point() {
        let mos = vmaf_to_mos(95.0, &tv_fullscreen_hd()).unwrap();
        assert!((mos - 4.5791).abs() < 0.01, "mos = {mos}");
    }

    #[test]
    fn low_quality_low_resolution_bottoms_out() {
        // 384-wide encode at 25.8 dB watched fullscreen on a TV: the raw
        // fusion value falls below the scale and clamps to 1.
        let setup = ViewingSetup::fullscreen(DeviceType::Tv, 384, 288).unwrap();
        let mos = psnr_to_mos(25.824094, &setup).unwrap();
        assert!((mos - 1.0).abs() < 1e-12, "mos = {mos}");
    }

    #[test]
    fn domains_reject_out_of_range_scores() {
        let setup = tv_fullscreen_hd();

        for (metric, value) in [
            (Metric::Psnr, 0.0),
            (Metric::Psnr, 100.0),
            (Metric::Psnr, 150.0),
            (Metric::Psnr, -3.0),
            (Metric::Ssim, 0.0),
            (Metric::Ssim, 1.2),
            (Metric::Vif, -0.1),
            (Metric::Vif, 1.0001),
            (Metric::Vmaf, 0.0),
            (Metric::Vmaf, 150.0),
            (Metric::Psnr, f64::NAN),
            (Metric::Vmaf, f64::NAN),
        ] {
            let err = metric.to_mos(value, &setup).unwrap_err();
            assert!(
                matches!(err, Error::InvalidMetricRange { .. }),
                "{metric} accepted {value}"
            );
        }

        // Closed upper bounds are part of the domain.
        assert!(Metric::Ssim.to_mos(1.0, &setup).is_ok());
        assert!(Metric::Vmaf.to_mos(100.0, &setup).is_ok());
    }

    #[test]
    fn geometry_errors_take_precedence() {
        // Bad setup and bad score together: the setup is rejected first,
        // matching the derivation-then-domain sequence.
        let mut setup = tv_fullscreen_hd();
        setup.video_width = 0;
        let err = psnr_to_mos(500.0, &setup).unwrap_err();
        assert!(matches!(err, Error::InvalidResolution { .. }));
    }

    #[test]
    fn custom_device_without_params_fails() {
        let setup = ViewingSetup::new(DeviceType::Custom, 1920, 1080, 1920, 1080);
        let err = vmaf_to_mos(80.0, &setup).unwrap_err();
        assert!(matches!(err, Error::MissingOrInvalidCustomParams(_)));
    }

    #[test]
    fn every_success_is_on_the_mos_scale() {
        let custom = DeviceParams {
            display_width: 3840,
            display_height: 2400,
            ppi_x: 140.0,
            ppi_y: 140.0,
            distance: ViewingDistance::Inches(28.0),
        };
        let setups = [
            ViewingSetup::fullscreen(DeviceType::Mobile, 1280, 720).unwrap(),
            ViewingSetup::fullscreen(DeviceType::Tv, 3840, 2160)
                .unwrap()
                .with_hdr(true)
                .with_upsampling(Upsampling::SuperResolution),
            ViewingSetup::custom_device(custom, 1920, 1080, 3200, 2000),
        ];
        let values = [
            (Metric::Psnr, [12.0, 30.0, 47.0]),
            (Metric::Ssim, [0.3, 0.9, 1.0]),
            (Metric::Vif, [0.05, 0.5, 0.99]),
            (Metric::Vmaf, [5.0, 60.0, 100.0]),
        ];
        for setup in &setups {
            for (metric, scores) in values {
                for score in scores {
                    let mos = metric.to_mos(score, setup).unwrap();
                    assert!((1.0..=5.0).contains(&mos), "{metric} {score} -> {mos}");
                }
            }
        }
    }

    #[test]
    fn better_scores_never_read_worse() {
        let setup = tv_fullscreen_hd();
        let mut prev = 0.0;
        for psnr in [20.0, 25.0, 30.0, 35.0, 40.0, 45.0] {
            let mos = psnr_to_mos(psnr, &setup).unwrap();
            assert!(mos >= prev);
            prev = mos;
        }
    }

    #[test]
    fn quality_levels() {
        assert_eq!(QualityLevel::from_mos(4.9), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_mos(4.3), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_mos(4.1), QualityLevel::Good);
        assert_eq!(QualityLevel::from_mos(3.8), QualityLevel::Fair);
        assert_eq!(QualityLevel::from_mos(3.2), QualityLevel::Poor);
        assert_eq!(QualityLevel::from_mos(1.0), QualityLevel::Bad);
        assert!(QualityLevel::Bad < QualityLevel::Excellent);
    }

    #[test]
    fn metric_names_round_trip_serde() {
        for metric in Metric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.name()));
            let back: Metric = serde_json::from_str(&json).unwrap();
            assert_eq!(back, metric);
        }
    }
}

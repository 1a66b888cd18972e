//! Validation reporting against the embedded calibration dataset.
//!
//! A [`ValidationReport`] replays the Netflix panel samples through one
//! metric mapping and summarizes how far the predictions land from the
//! panel's actual ratings. The dataset carries PSNR and SSIM columns only;
//! requesting a VIF or VMAF report fails with a calibration error.
//!
//! Reports serialize to pretty JSON and to CSV, one row per sample.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dataset::{CalibrationSample, NETFLIX_SDR_TV};
use crate::error::{Error, Result};
use crate::mapping::{Metric, QualityLevel};

/// Outcome of one calibration sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResult {
    /// Sample identifier.
    pub name: String,

    /// Encoded video width in pixels.
    pub width: u32,

    /// Encoded video height in pixels.
    pub height: u32,

    /// Raw metric value fed to the model.
    pub value: f64,

    /// Model-predicted MOS.
    pub predicted: f64,

    /// Panel reference MOS.
    pub reference: f64,

    /// Prediction error, `predicted - reference`.
    pub delta: f64,
}

impl SampleResult {
    /// Categorical reading of the predicted MOS.
    #[must_use]
    pub fn predicted_level(&self) -> QualityLevel {
        QualityLevel::from_mos(self.predicted)
    }
}

/// Summary of replaying the calibration dataset through one metric mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Metric under validation.
    pub metric: Metric,

    /// Per-sample outcomes, in dataset order.
    pub samples: Vec<SampleResult>,

    /// Root-mean-square prediction error.
    pub rms_error: f64,

    /// Mean signed error; negative means the model under-predicts.
    pub mean_delta: f64,

    /// Largest absolute prediction error.
    pub max_abs_delta: f64,

    /// When this report was generated.
    #[serde(with = "chrono_serde")]
    pub timestamp: DateTime<Utc>,
}

impl ValidationReport {
    /// Replay the whole calibration dataset through `metric`.
    ///
    /// # Errors
    ///
    /// [`Error::Calibration`] when the dataset has no column for `metric`;
    /// mapping errors propagate unchanged.
    pub fn run(metric: Metric) -> Result<Self> {
        let column: fn(&CalibrationSample) -> f64 = match metric {
            Metric::Psnr => |s| s.psnr,
            Metric::Ssim => |s| s.ssim,
            Metric::Vif | Metric::Vmaf => {
                return Err(Error::Calibration(format!(
                    "the calibration dataset has no {metric} column"
                )));
            }
        };

        let mut samples = Vec::with_capacity(NETFLIX_SDR_TV.len());
        let mut sum_sq = 0.0;
        let mut sum = 0.0;
        let mut max_abs = 0.0f64;

        for s in &NETFLIX_SDR_TV {
            let value = column(s);
            let predicted = metric.to_mos(value, &s.setup())?;
            let delta = predicted - s.mos;
            sum_sq += delta * delta;
            sum += delta;
            max_abs = max_abs.max(delta.abs());
            samples.push(SampleResult {
                name: s.name.to_string(),
                width: s.width,
                height: s.height,
                value,
                predicted,
                reference: s.mos,
                delta,
            });
        }

        let n = samples.len() as f64;
        Ok(Self {
            metric,
            samples,
            rms_error: (sum_sq / n).sqrt(),
            mean_delta: sum / n,
            max_abs_delta: max_abs,
            timestamp: Utc::now(),
        })
    }

    /// The sample with the largest absolute prediction error.
    #[must_use]
    pub fn worst_sample(&self) -> Option<&SampleResult> {
        self.samples
            .iter()
            .max_by(|a, b| a.delta.abs().total_cmp(&b.delta.abs()))
    }

    /// Write the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// I/O and serialization errors.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Write the report as CSV, one row per sample.
    ///
    /// # Errors
    ///
    /// I/O and CSV errors.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record([
            "name",
            "width",
            "height",
            self.metric.name(),
            "predicted_mos",
            "reference_mos",
            "delta",
        ])?;

        for s in &self.samples {
            wtr.write_record([
                s.name.clone(),
                s.width.to_string(),
                s.height.to_string(),
                format!("{:.6}", s.value),
                format!("{:.4}", s.predicted),
                format!("{:.4}", s.reference),
                format!("{:.4}", s.delta),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

mod chrono_serde {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        dt.to_rfc3339().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psnr_validation_statistics() {
        let report = ValidationReport::run(Metric::Psnr).unwrap();
        assert_eq!(report.samples.len(), 70);

        // The EUVIP'22 fit reports roughly 0.38 RMS on this panel.
        assert!((report.rms_error - 0.381).abs() < 0.04, "rms = {}", report.rms_error);
        assert!(report.rms_error > 0.2 && report.rms_error < 0.5);
        assert!(report.max_abs_delta < 1.0);
        assert!(report.mean_delta < 0.0 && report.mean_delta > -0.25);
    }

    #[test]
    fn ssim_validation_statistics() {
        let report = ValidationReport::run(Metric::Ssim).unwrap();
        assert_eq!(report.samples.len(), 70);
        assert!(
            report.rms_error > 0.2 && report.rms_error < 0.5,
            "rms = {}",
            report.rms_error
        );
        assert!(report.max_abs_delta < 1.0);
    }

    #[test]
    fn uncalibrated_metrics_are_rejected() {
        for metric in [Metric::Vif, Metric::Vmaf] {
            let err = ValidationReport::run(metric).unwrap_err();
            assert!(matches!(err, Error::Calibration(_)), "{metric}");
        }
    }

    #[test]
    fn per_sample_bookkeeping_is_consistent() {
        let report = ValidationReport::run(Metric::Psnr).unwrap();
        for s in &report.samples {
            assert!((s.delta - (s.predicted - s.reference)).abs() < 1e-12);
            assert!((1.0..=5.0).contains(&s.predicted));
        }
        let worst = report.worst_sample().unwrap();
        assert!((worst.delta.abs() - report.max_abs_delta).abs() < 1e-12);
    }

    #[test]
    fn json_round_trip() {
        let report = ValidationReport::run(Metric::Ssim).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.metric, Metric::Ssim);
        assert_eq!(back.samples.len(), report.samples.len());
        assert!((back.rms_error - report.rms_error).abs() < 1e-12);
        assert_eq!(back.timestamp, report.timestamp);
    }

    #[test]
    fn writes_json_and_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        let report = ValidationReport::run(Metric::Psnr).unwrap();

        let json_path = dir.path().join("psnr.json");
        report.write_json(&json_path).unwrap();
        let text = std::fs::read_to_string(&json_path).unwrap();
        let back: ValidationReport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.samples.len(), 70);

        let csv_path = dir.path().join("psnr.csv");
        report.write_csv(&csv_path).unwrap();
        let text = std::fs::read_to_string(&csv_path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,width,height,psnr,predicted_mos,reference_mos,delta"
        );
        assert_eq!(lines.count(), 70);
    }
}

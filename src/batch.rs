//! Bulk scoring of per-title metric tables.
//!
//! Input is a CSV file with one row per encode and one column per available
//! metric; columns other than `width` and `height` are optional and fall
//! back to command-level [`BatchDefaults`]:
//!
//! ```text
//! name,width,height,psnr,vmaf
//! ep01-1080p,1920,1080,41.2,95.1
//! ep01-720p,1280,720,38.4,88.0
//! ```
//!
//! Rows are independent and scored in parallel. A bad row or a bad metric
//! value never aborts the batch; the failure is recorded in the output row
//! and the remaining columns and rows are still scored.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::device::{DeviceParams, DeviceType};
use crate::error::{Error, Result};
use crate::mapping::Metric;
use crate::viewing::{Upsampling, ViewingSetup, hdr_from_flag};

/// One input row, as deserialized from CSV.
///
/// Untyped columns (`hdr`, `upsampling`, `device`) are converted through
/// the same fallible boundaries as CLI input; conversion failures surface
/// in the output row's `error` column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BatchRecord {
    /// Title identifier, carried through to the output.
    #[serde(default)]
    pub name: Option<String>,
    /// Encoded video width in pixels.
    pub width: u32,
    /// Encoded video height in pixels.
    pub height: u32,
    /// Player window width; defaults apply when absent.
    #[serde(default)]
    pub player_width: Option<u32>,
    /// Player window height; defaults apply when absent.
    #[serde(default)]
    pub player_height: Option<u32>,
    /// HDR flag, 0 or 1.
    #[serde(default)]
    pub hdr: Option<i64>,
    /// Upsampling method name or numeric code.
    #[serde(default)]
    pub upsampling: Option<String>,
    /// Device archetype name or numeric code.
    #[serde(default)]
    pub device: Option<String>,
    /// PSNR in dB, when measured.
    #[serde(default)]
    pub psnr: Option<f64>,
    /// SSIM score, when measured.
    #[serde(default)]
    pub ssim: Option<f64>,
    /// VIF score, when measured.
    #[serde(default)]
    pub vif: Option<f64>,
    /// VMAF score, when measured.
    #[serde(default)]
    pub vmaf: Option<f64>,
}

/// Command-level fallbacks applied where a row leaves a column empty.
#[derive(Debug, Clone)]
pub struct BatchDefaults {
    /// Device archetype.
    pub device: DeviceType,
    /// Parameters for [`DeviceType::Custom`].
    pub custom_params: Option<DeviceParams>,
    /// Dynamic range.
    pub hdr: bool,
    /// Upsampling method.
    pub upsampling: Upsampling,
    /// Player window size; `None` means fullscreen on the device display.
    pub player: Option<(u32, u32)>,
}

impl Default for BatchDefaults {
    /// Fullscreen SDR playback with bicubic upsampling on the TV archetype,
    /// matching the calibration conditions.
    fn default() -> Self {
        Self {
            device: DeviceType::Tv,
            custom_params: None,
            hdr: false,
            upsampling: Upsampling::Bicubic,
            player: None,
        }
    }
}

/// One scored output row.
#[derive(Debug, Clone, Serialize)]
pub struct BatchScore {
    /// Title identifier from the input row.
    pub name: Option<String>,
    /// Encoded video width in pixels.
    pub width: u32,
    /// Encoded video height in pixels.
    pub height: u32,
    /// Predicted MOS from the PSNR column.
    pub psnr_mos: Option<f64>,
    /// Predicted MOS from the SSIM column.
    pub ssim_mos: Option<f64>,
    /// Predicted MOS from the VIF column.
    pub vif_mos: Option<f64>,
    /// Predicted MOS from the VMAF column.
    pub vmaf_mos: Option<f64>,
    /// First failure hit while scoring this row, if any.
    pub error: Option<String>,
}

/// Read input records from a CSV file.
///
/// # Errors
///
/// I/O and CSV parsing errors.
pub fn read_records(path: &Path) -> Result<Vec<BatchRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Score every record in parallel, preserving input order.
#[must_use]
pub fn score_records(records: &[BatchRecord], defaults: &BatchDefaults) -> Vec<BatchScore> {
    records
        .par_iter()
        .map(|record| score_record(record, defaults))
        .collect()
}

/// Write scored rows as CSV with a header row.
///
/// # Errors
///
/// I/O and CSV errors.
pub fn write_csv(scores: &[BatchScore], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for score in scores {
        wtr.serialize(score)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write scored rows as pretty-printed JSON.
///
/// # Errors
///
/// I/O and serialization errors.
pub fn write_json(scores: &[BatchScore], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(scores)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn score_record(record: &BatchRecord, defaults: &BatchDefaults) -> BatchScore {
    let mut out = BatchScore {
        name: record.name.clone(),
        width: record.width,
        height: record.height,
        psnr_mos: None,
        ssim_mos: None,
        vif_mos: None,
        vmaf_mos: None,
        error: None,
    };

    let setup = match setup_for(record, defaults) {
        Ok(setup) => setup,
        Err(err) => {
            out.error = Some(err.to_string());
            return out;
        }
    };

    let mut first_error: Option<String> = None;
    let mut score_metric = |metric: Metric, value: Option<f64>| -> Option<f64> {
        match metric.to_mos(value?, &setup) {
            Ok(mos) => Some(mos),
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err.to_string());
                }
                None
            }
        }
    };

    out.psnr_mos = score_metric(Metric::Psnr, record.psnr);
    out.ssim_mos = score_metric(Metric::Ssim, record.ssim);
    out.vif_mos = score_metric(Metric::Vif, record.vif);
    out.vmaf_mos = score_metric(Metric::Vmaf, record.vmaf);
    out.error = first_error;
    out
}

/// Assemble the effective [`ViewingSetup`] for one row.
fn setup_for(record: &BatchRecord, defaults: &BatchDefaults) -> Result<ViewingSetup> {
    let device = record
        .device
        .as_deref()
        .map_or(Ok(defaults.device), str::parse)?;
    let hdr = record.hdr.map_or(Ok(defaults.hdr), hdr_from_flag)?;
    let upsampling = record
        .upsampling
        .as_deref()
        .map_or(Ok(defaults.upsampling), str::parse)?;

    let (player_width, player_height) = match (record.player_width, record.player_height) {
        (Some(w), Some(h)) => (w, h),
        (None, None) => {
            if let Some(dims) = defaults.player {
                dims
            } else {
                display_dims(device, defaults.custom_params.as_ref())?
            }
        }
        // Half-specified player dimensions; the zero side names the gap.
        (w, h) => {
            return Err(Error::InvalidPlayerSize {
                width: w.unwrap_or(0),
                height: h.unwrap_or(0),
            });
        }
    };

    let mut setup = ViewingSetup::new(
        device,
        record.width,
        record.height,
        player_width,
        player_height,
    )
    .with_hdr(hdr)
    .with_upsampling(upsampling);
    setup.custom_params = defaults.custom_params;
    Ok(setup)
}

/// Fullscreen fallback: the display size of the effective device.
fn display_dims(device: DeviceType, custom: Option<&DeviceParams>) -> Result<(u32, u32)> {
    let params = if let Some(params) = device.catalog_params() {
        params
    } else {
        custom.ok_or_else(|| {
            Error::MissingOrInvalidCustomParams(
                "custom device needs display parameters or explicit player dimensions".to_string(),
            )
        })?
    };
    Ok((params.display_width, params.display_height))
}

//! Viewing setup: the complete description of how video is watched.
//!
//! A [`ViewingSetup`] bundles everything the perceptual models need to know
//! about the playback situation:
//!
//! - video resolution as encoded and player window size as rendered,
//! - dynamic range (SDR or HDR) and the upsampling method filling the
//!   player window,
//! - the watching device, either a catalog archetype or fully custom
//!   parameters.
//!
//! ## Key concepts
//!
//! - **Upsampling only matters under HDR.** The SDR calibration predates
//!   upsampling-aware modeling, so under SDR the method is validated but
//!   does not change the score. Under HDR it selects one of three model
//!   variants.
//! - **Custom devices.** [`DeviceType::Custom`] requires [`DeviceParams`];
//!   for catalog devices any supplied parameters are ignored in favor of
//!   the built-in archetype.
//!
//! Setups are assembled with builder-style methods:
//!
//! ```
//! use pmos::{DeviceType, Upsampling, ViewingSetup};
//!
//! let setup = ViewingSetup::new(DeviceType::Tv, 1920, 1080, 3840, 2160)
//!     .with_hdr(true)
//!     .with_upsampling(Upsampling::SuperResolution);
//! let params = setup.viewing_params()?;
//! assert!(params.phi > 30.0);
//! # Ok::<(), pmos::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::device::{DeviceParams, DeviceType};
use crate::error::{Error, Result};
use crate::geometry::{self, ViewingParams};

/// Upsampling method filling the player window from lower-resolution video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Upsampling {
    /// Conventional bicubic interpolation, the common default.
    #[default]
    Bicubic,
    /// Nearest-neighbor replication; blocky, but occurs in practice.
    NearestNeighbor,
    /// Super-resolution, standing in for any method better than bicubic.
    SuperResolution,
}

impl Upsampling {
    /// All methods, in stable wire-code order.
    pub const ALL: [Upsampling; 3] = [
        Upsampling::Bicubic,
        Upsampling::NearestNeighbor,
        Upsampling::SuperResolution,
    ];

    /// Stable numeric code used in CSV and CLI input.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Upsampling::Bicubic => 0,
            Upsampling::NearestNeighbor => 1,
            Upsampling::SuperResolution => 2,
        }
    }
}

impl fmt::Display for Upsampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Upsampling::Bicubic => "bicubic",
            Upsampling::NearestNeighbor => "nearest-neighbor",
            Upsampling::SuperResolution => "super-resolution",
        };
        f.write_str(name)
    }
}

impl FromStr for Upsampling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bicubic" => Ok(Upsampling::Bicubic),
            "nearest-neighbor" | "nearest_neighbor" | "nn" => Ok(Upsampling::NearestNeighbor),
            "super-resolution" | "super_resolution" | "sr" => Ok(Upsampling::SuperResolution),
            other => match other.parse::<i64>() {
                Ok(code) => Upsampling::try_from(code),
                Err(_) => Err(Error::InvalidUpsamplingMethod(s.to_owned())),
            },
        }
    }
}

impl TryFrom<i64> for Upsampling {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Upsampling::Bicubic),
            1 => Ok(Upsampling::NearestNeighbor),
            2 => Ok(Upsampling::SuperResolution),
            other => Err(Error::InvalidUpsamplingMethod(other.to_string())),
        }
    }
}

/// Interpret an untyped `{0, 1}` HDR flag from CSV or CLI input.
///
/// # Errors
///
/// [`Error::InvalidHdrFlag`] for any other value.
pub fn hdr_from_flag(flag: i64) -> Result<bool> {
    match flag {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(Error::InvalidHdrFlag(other)),
    }
}

/// Complete description of a playback situation.
///
/// Video dimensions describe the encoded stream; player dimensions describe
/// the rendered window. Both are bounded by [`geometry::MAX_DIMENSION`]
/// when parameters are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewingSetup {
    /// Encoded video width in pixels.
    pub video_width: u32,
    /// Encoded video height in pixels.
    pub video_height: u32,
    /// Player window width in pixels.
    pub player_width: u32,
    /// Player window height in pixels.
    pub player_height: u32,
    /// High dynamic range playback.
    pub hdr: bool,
    /// Upsampling method; only affects HDR scores.
    pub upsampling: Upsampling,
    /// Watching device archetype.
    pub device: DeviceType,
    /// Parameters for [`DeviceType::Custom`]; ignored for catalog devices.
    pub custom_params: Option<DeviceParams>,
}

impl ViewingSetup {
    /// SDR setup with bicubic upsampling on the given device.
    #[must_use]
    pub fn new(
        device: DeviceType,
        video_width: u32,
        video_height: u32,
        player_width: u32,
        player_height: u32,
    ) -> Self {
        Self {
            video_width,
            video_height,
            player_width,
            player_height,
            hdr: false,
            upsampling: Upsampling::Bicubic,
            device,
            custom_params: None,
        }
    }

    /// Setup on a custom device described by `params`.
    #[must_use]
    pub fn custom_device(
        params: DeviceParams,
        video_width: u32,
        video_height: u32,
        player_width: u32,
        player_height: u32,
    ) -> Self {
        let mut setup = Self::new(
            DeviceType::Custom,
            video_width,
            video_height,
            player_width,
            player_height,
        );
        setup.custom_params = Some(params);
        setup
    }

    /// Fullscreen playback on a catalog device: the player covers the whole
    /// display. Returns `None` for [`DeviceType::Custom`], which has no
    /// catalog display size.
    #[must_use]
    pub fn fullscreen(device: DeviceType, video_width: u32, video_height: u32) -> Option<Self> {
        let params = device.catalog_params()?;
        Some(Self::new(
            device,
            video_width,
            video_height,
            params.display_width,
            params.display_height,
        ))
    }

    /// Set the dynamic range.
    #[must_use]
    pub fn with_hdr(mut self, hdr: bool) -> Self {
        self.hdr = hdr;
        self
    }

    /// Set the upsampling method.
    #[must_use]
    pub fn with_upsampling(mut self, upsampling: Upsampling) -> Self {
        self.upsampling = upsampling;
        self
    }

    /// Attach custom device parameters.
    #[must_use]
    pub fn with_custom_params(mut self, params: DeviceParams) -> Self {
        self.custom_params = Some(params);
        self
    }

    /// Derive the perceptual viewing parameters for this setup.
    ///
    /// # Errors
    ///
    /// See [`geometry::viewing_params`].
    pub fn viewing_params(&self) -> Result<ViewingParams> {
        geometry::viewing_params(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::ViewingDistance;

    #[test]
    fn upsampling_parses_names_and_codes() {
        assert_eq!("bicubic".parse::<Upsampling>().unwrap(), Upsampling::Bicubic);
        assert_eq!(
            "NN".parse::<Upsampling>().unwrap(),
            Upsampling::NearestNeighbor
        );
        assert_eq!(
            "super-resolution".parse::<Upsampling>().unwrap(),
            Upsampling::SuperResolution
        );
        assert_eq!(
            "2".parse::<Upsampling>().unwrap(),
            Upsampling::SuperResolution
        );
        assert_eq!(Upsampling::try_from(1).unwrap(), Upsampling::NearestNeighbor);
    }

    #[test]
    fn upsampling_rejects_unknown() {
        assert!(matches!(
            "lanczos".parse::<Upsampling>(),
            Err(Error::InvalidUpsamplingMethod(_))
        ));
        assert!(matches!(
            Upsampling::try_from(99),
            Err(Error::InvalidUpsamplingMethod(_))
        ));
    }

    #[test]
    fn upsampling_display_round_trips() {
        for method in Upsampling::ALL {
            assert_eq!(method.to_string().parse::<Upsampling>().unwrap(), method);
        }
    }

    #[test]
    fn hdr_flag_boundary() {
        assert!(!hdr_from_flag(0).unwrap());
        assert!(hdr_from_flag(1).unwrap());
        assert!(matches!(hdr_from_flag(2), Err(Error::InvalidHdrFlag(2))));
        assert!(matches!(hdr_from_flag(-1), Err(Error::InvalidHdrFlag(-1))));
    }

    #[test]
    fn builder_defaults_are_sdr_bicubic() {
        let setup = ViewingSetup::new(DeviceType::Pc, 1920, 1080, 2560, 1600);
        assert!(!setup.hdr);
        assert_eq!(setup.upsampling, Upsampling::Bicubic);
        assert!(setup.custom_params.is_none());
    }

    #[test]
    fn fullscreen_uses_catalog_display() {
        let setup = ViewingSetup::fullscreen(DeviceType::Tv, 1920, 1080).unwrap();
        assert_eq!(setup.player_width, 3840);
        assert_eq!(setup.player_height, 2160);
        assert!(ViewingSetup::fullscreen(DeviceType::Custom, 1920, 1080).is_none());
    }

    #[test]
    fn custom_device_round_trip() {
        let params = DeviceParams {
            display_width: 1920,
            display_height: 1200,
            ppi_x: 150.0,
            ppi_y: 150.0,
            distance: ViewingDistance::Inches(20.0),
        };
        let setup = ViewingSetup::custom_device(params, 1280, 720, 1920, 1200);
        assert_eq!(setup.device, DeviceType::Custom);
        assert_eq!(setup.custom_params, Some(params));
        assert!(setup.viewing_params().is_ok());
    }
}

//! Device archetypes and display parameters.
//!
//! This module provides the [`DeviceType`] catalog and the [`DeviceParams`]
//! type describing the physical screen a video is watched on: pixel
//! dimensions, pixel density, and viewing distance.
//!
//! ## Built-in catalog
//!
//! Four archetypes cover the common playback situations. Each entry is a
//! pre-validated constant:
//!
//! | Device | Display px | PPI | Viewing distance |
//! |--------|------------|-----|------------------|
//! | Mobile | 2400×1080 | 421 | 13 in |
//! | Tablet | 2800×1752 | 266 | 18 in |
//! | Pc     | 2560×1600 | 100 | 24 in |
//! | Tv     | 3840×2160 | 80  | 3 display heights (81 in) |
//!
//! [`DeviceType::Custom`] has no catalog entry; the caller supplies a
//! [`DeviceParams`] which is bounds-checked before use.
//!
//! ## Viewing distance
//!
//! TV setups are conventionally described in multiples of the display
//! height rather than absolute inches, so distance is a sum type:
//! [`ViewingDistance::Inches`] or [`ViewingDistance::DisplayHeights`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry;

/// Device archetype selecting a catalog entry, or `Custom` for
/// caller-supplied parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// Phone-class display held at close range.
    Mobile,
    /// Tablet-class display at lap distance.
    Tablet,
    /// Desktop monitor at arm's length.
    Pc,
    /// Living-room TV at couch distance.
    Tv,
    /// Caller-supplied [`DeviceParams`], validated per call.
    Custom,
}

/// Physical viewing distance from the display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewingDistance {
    /// Absolute distance in inches.
    Inches(f64),
    /// Distance as a multiple of the physical display height.
    DisplayHeights(f64),
}

/// Physical parameters of a display and how far the viewer sits from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceParams {
    /// Display width in pixels.
    pub display_width: u32,
    /// Display height in pixels.
    pub display_height: u32,
    /// Horizontal pixel density, pixels per inch.
    pub ppi_x: f64,
    /// Vertical pixel density, pixels per inch.
    pub ppi_y: f64,
    /// Viewing distance.
    pub distance: ViewingDistance,
}

/// 6.2in-class phone display (2400×1080 @ 421 ppi) held at 13 inches.
pub const MOBILE: DeviceParams = DeviceParams {
    display_width: 2400,
    display_height: 1080,
    ppi_x: 421.0,
    ppi_y: 421.0,
    distance: ViewingDistance::Inches(13.0),
};

/// 12.4in-class tablet display (2800×1752 @ 266 ppi) at 18 inches.
pub const TABLET: DeviceParams = DeviceParams {
    display_width: 2800,
    display_height: 1752,
    ppi_x: 266.0,
    ppi_y: 266.0,
    distance: ViewingDistance::Inches(18.0),
};

/// 30in-class desktop monitor (2560×1600 @ 100 ppi) at 24 inches.
pub const PC: DeviceParams = DeviceParams {
    display_width: 2560,
    display_height: 1600,
    ppi_x: 100.0,
    ppi_y: 100.0,
    distance: ViewingDistance::Inches(24.0),
};

/// 55in-class UHD TV (3840×2160 @ 80 ppi, 27in tall) at 3 display heights.
pub const TV: DeviceParams = DeviceParams {
    display_width: 3840,
    display_height: 2160,
    ppi_x: 80.0,
    ppi_y: 80.0,
    distance: ViewingDistance::DisplayHeights(3.0),
};

impl DeviceType {
    /// The four built-in archetypes, in catalog order.
    pub const BUILTIN: [DeviceType; 4] = [
        DeviceType::Mobile,
        DeviceType::Tablet,
        DeviceType::Pc,
        DeviceType::Tv,
    ];

    /// Numeric code used at untyped boundaries (CSV columns, CLI codes).
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            DeviceType::Mobile => 0,
            DeviceType::Tablet => 1,
            DeviceType::Pc => 2,
            DeviceType::Tv => 3,
            DeviceType::Custom => 4,
        }
    }

    /// Catalog parameters for a built-in archetype, `None` for `Custom`.
    #[must_use]
    pub fn catalog_params(self) -> Option<&'static DeviceParams> {
        match self {
            DeviceType::Mobile => Some(&MOBILE),
            DeviceType::Tablet => Some(&TABLET),
            DeviceType::Pc => Some(&PC),
            DeviceType::Tv => Some(&TV),
            DeviceType::Custom => None,
        }
    }

    /// Resolve the effective [`DeviceParams`] for this device.
    ///
    /// Built-in archetypes ignore `custom` entirely. `Custom` requires it
    /// and validates every field bound.
    ///
    /// # Errors
    ///
    /// [`Error::MissingOrInvalidCustomParams`] when `Custom` is selected
    /// with absent or out-of-bounds parameters.
    pub fn resolve<'a>(self, custom: Option<&'a DeviceParams>) -> Result<&'a DeviceParams> {
        match self {
            DeviceType::Mobile => Ok(&MOBILE),
            DeviceType::Tablet => Ok(&TABLET),
            DeviceType::Pc => Ok(&PC),
            DeviceType::Tv => Ok(&TV),
            DeviceType::Custom => {
                let params = custom.ok_or_else(|| {
                    Error::MissingOrInvalidCustomParams(
                        "device type is custom but no parameters were supplied".to_string(),
                    )
                })?;
                params.validate()?;
                Ok(params)
            }
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
            DeviceType::Pc => "pc",
            DeviceType::Tv => "tv",
            DeviceType::Custom => "custom",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DeviceType {
    type Err = Error;

    /// Accepts archetype names (case-insensitive) or numeric codes.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" | "phone" => Ok(DeviceType::Mobile),
            "tablet" => Ok(DeviceType::Tablet),
            "pc" | "desktop" => Ok(DeviceType::Pc),
            "tv" => Ok(DeviceType::Tv),
            "custom" => Ok(DeviceType::Custom),
            other => match other.parse::<i64>() {
                Ok(code) => DeviceType::try_from(code),
                Err(_) => Err(Error::InvalidDeviceType(s.to_string())),
            },
        }
    }
}

impl TryFrom<i64> for DeviceType {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(DeviceType::Mobile),
            1 => Ok(DeviceType::Tablet),
            2 => Ok(DeviceType::Pc),
            3 => Ok(DeviceType::Tv),
            4 => Ok(DeviceType::Custom),
            other => Err(Error::InvalidDeviceType(other.to_string())),
        }
    }
}

impl DeviceParams {
    /// Check the custom-parameter field bounds.
    ///
    /// Display dimensions must lie in 128..=16384, pixel densities in
    /// 1..=10000 ppi, and the distance value in (0, 10000]. Comparisons are
    /// written in accepting form so NaN densities and distances are
    /// rejected.
    ///
    /// # Errors
    ///
    /// [`Error::MissingOrInvalidCustomParams`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !(128..=16384).contains(&self.display_width) {
            return Err(Error::MissingOrInvalidCustomParams(format!(
                "display width {} outside 128..=16384",
                self.display_width
            )));
        }
        if !(128..=16384).contains(&self.display_height) {
            return Err(Error::MissingOrInvalidCustomParams(format!(
                "display height {} outside 128..=16384",
                self.display_height
            )));
        }
        if !(1.0..=10000.0).contains(&self.ppi_x) {
            return Err(Error::MissingOrInvalidCustomParams(format!(
                "horizontal density {} ppi outside 1..=10000",
                self.ppi_x
            )));
        }
        if !(1.0..=10000.0).contains(&self.ppi_y) {
            return Err(Error::MissingOrInvalidCustomParams(format!(
                "vertical density {} ppi outside 1..=10000",
                self.ppi_y
            )));
        }
        let value = match self.distance {
            ViewingDistance::Inches(d) | ViewingDistance::DisplayHeights(d) => d,
        };
        if !(value > 0.0 && value <= 10000.0) {
            return Err(Error::MissingOrInvalidCustomParams(format!(
                "viewing distance {value} outside (0, 10000]"
            )));
        }
        Ok(())
    }

    /// Viewing distance in inches, resolving relative distances against
    /// the physical display height.
    #[must_use]
    pub fn distance_inches(&self) -> f64 {
        match self.distance {
            ViewingDistance::Inches(d) => d,
            ViewingDistance::DisplayHeights(h) => {
                geometry::heights_to_inches(self.display_height, self.ppi_y, h)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entries_pass_custom_validation() {
        for device in DeviceType::BUILTIN {
            let params = device.catalog_params().unwrap();
            assert!(params.validate().is_ok(), "{device} catalog entry invalid");
        }
    }

    #[test]
    fn tv_distance_is_three_heights() {
        // 2160 px / 80 ppi = 27 in tall, 3 heights = 81 in
        assert!((TV.distance_inches() - 81.0).abs() < 1e-9);
    }

    #[test]
    fn absolute_distance_passes_through() {
        assert!((MOBILE.distance_inches() - 13.0).abs() < 1e-9);
        assert!((PC.distance_inches() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn resolve_builtin_ignores_custom() {
        let bogus = DeviceParams {
            display_width: 1,
            display_height: 1,
            ppi_x: -5.0,
            ppi_y: -5.0,
            distance: ViewingDistance::Inches(-1.0),
        };
        let params = DeviceType::Tv.resolve(Some(&bogus)).unwrap();
        assert_eq!(params.display_width, 3840);
    }

    #[test]
    fn resolve_custom_without_params_fails() {
        let err = DeviceType::Custom.resolve(None).unwrap_err();
        assert!(matches!(err, Error::MissingOrInvalidCustomParams(_)));
    }

    #[test]
    fn validate_rejects_each_field() {
        let good = DeviceParams {
            display_width: 1920,
            display_height: 1080,
            ppi_x: 92.0,
            ppi_y: 92.0,
            distance: ViewingDistance::Inches(30.0),
        };
        assert!(good.validate().is_ok());

        let mut p = good;
        p.display_width = 100;
        assert!(p.validate().is_err());

        let mut p = good;
        p.display_height = 20000;
        assert!(p.validate().is_err());

        let mut p = good;
        p.ppi_x = 0.5;
        assert!(p.validate().is_err());

        let mut p = good;
        p.ppi_y = f64::NAN;
        assert!(p.validate().is_err());

        let mut p = good;
        p.distance = ViewingDistance::Inches(0.0);
        assert!(p.validate().is_err());

        let mut p = good;
        p.distance = ViewingDistance::DisplayHeights(20000.0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn parse_names_and_codes() {
        assert_eq!("tv".parse::<DeviceType>().unwrap(), DeviceType::Tv);
        assert_eq!("TV".parse::<DeviceType>().unwrap(), DeviceType::Tv);
        assert_eq!("desktop".parse::<DeviceType>().unwrap(), DeviceType::Pc);
        assert_eq!("2".parse::<DeviceType>().unwrap(), DeviceType::Pc);
        assert_eq!(DeviceType::try_from(4).unwrap(), DeviceType::Custom);

        assert!(matches!(
            "plasma".parse::<DeviceType>(),
            Err(Error::InvalidDeviceType(_))
        ));
        assert!(matches!(
            DeviceType::try_from(99),
            Err(Error::InvalidDeviceType(_))
        ));
    }

    #[test]
    fn display_matches_parse() {
        for device in [
            DeviceType::Mobile,
            DeviceType::Tablet,
            DeviceType::Pc,
            DeviceType::Tv,
            DeviceType::Custom,
        ] {
            let round = device.to_string().parse::<DeviceType>().unwrap();
            assert_eq!(round, device);
        }
    }
}

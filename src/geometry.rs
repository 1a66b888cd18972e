//! Viewing geometry: from screen dimensions and distance to perceptual
//! parameters.
//!
//! The perceptual models in this crate consume two scalars derived from the
//! physical viewing setup:
//!
//! - **Viewing angle** `phi`: the horizontal angular extent of the player
//!   window in degrees, `phi = deg(2 · atan(player_width / (2 · d · ppi)))`
//!   where `d` is the viewing distance in inches.
//! - **Angular resolution** `u`: visible spatial detail in cycles per
//!   degree. The coarser of video-native and player-rendered resolution
//!   limits detail, so the effective width is `min(video_width,
//!   player_width)` and `u` is the reciprocal of the angle subtended by one
//!   two-pixel cycle.
//!
//! [`viewing_params`] orchestrates the whole derivation for a
//! [`ViewingSetup`]: bounds validation, device resolution, distance
//! resolution, then the two formulas, with a final sanity window of
//! `phi ∈ [1, 180]` degrees and `u ∈ [1, 200]` cycles/degree.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::viewing::ViewingSetup;

/// Pixel dimension bound shared by video and player inputs.
pub const MAX_DIMENSION: u32 = 8192;

/// Derived perceptual viewing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewingParams {
    /// Viewing angle in degrees.
    pub phi: f64,
    /// Angular resolution in cycles per degree.
    pub u: f64,
}

/// Horizontal angular extent of the player window, in degrees.
///
/// `phi = deg(2 · atan(player_width / (2 · distance_in · ppi_x)))`
///
/// Preconditions (positive inputs) are the caller's responsibility; the
/// public mapping API range-validates before reaching this function.
#[must_use]
pub fn viewing_angle(player_width: u32, distance_in: f64, ppi_x: f64) -> f64 {
    debug_assert!(player_width > 0);
    debug_assert!(distance_in > 0.0);
    debug_assert!(ppi_x > 0.0);

    let half_tangent = f64::from(player_width) / (2.0 * distance_in * ppi_x);
    (2.0 * half_tangent.atan()).to_degrees()
}

/// Visible spatial detail in cycles per degree.
///
/// One cycle spans two rendered pixels at the effective resolution
/// `min(video_width, player_width)`; the result is the reciprocal of the
/// angle that cycle subtends:
///
/// `u = 1 / deg(2 · atan(player_width / (effective_width · distance_in ·
/// ppi_x)))`
#[must_use]
pub fn angular_resolution(
    video_width: u32,
    player_width: u32,
    distance_in: f64,
    ppi_x: f64,
) -> f64 {
    debug_assert!(video_width > 0);
    debug_assert!(player_width > 0);
    debug_assert!(distance_in > 0.0);
    debug_assert!(ppi_x > 0.0);

    let effective_width = video_width.min(player_width);
    let cycle_tangent =
        f64::from(player_width) / (f64::from(effective_width) * distance_in * ppi_x);
    let cycle_angle = (2.0 * cycle_tangent.atan()).to_degrees();
    1.0 / cycle_angle
}

/// Convert a distance in display heights to inches.
///
/// `inches = (display_height / ppi_y) · heights`
#[must_use]
pub fn heights_to_inches(display_height: u32, ppi_y: f64, heights: f64) -> f64 {
    debug_assert!(display_height > 0);
    debug_assert!(ppi_y > 0.0);
    debug_assert!(heights > 0.0);

    f64::from(display_height) / ppi_y * heights
}

/// Derive [`ViewingParams`] for a complete [`ViewingSetup`].
///
/// Validation sequence: video dimensions, player dimensions, device
/// resolution (catalog lookup or custom-parameter bounds), distance
/// resolution, then the two geometric formulas. Derived values outside
/// `phi ∈ [1, 180]` or `u ∈ [1, 200]` signal contradictory inputs and are
/// rejected rather than clamped.
///
/// # Errors
///
/// [`Error::InvalidResolution`], [`Error::InvalidPlayerSize`],
/// [`Error::MissingOrInvalidCustomParams`], or
/// [`Error::GeometryInconsistency`].
pub fn viewing_params(setup: &ViewingSetup) -> Result<ViewingParams> {
    let dimension_ok = |d: u32| (1..=MAX_DIMENSION).contains(&d);

    if !dimension_ok(setup.video_width) || !dimension_ok(setup.video_height) {
        return Err(Error::InvalidResolution {
            width: setup.video_width,
            height: setup.video_height,
        });
    }
    if !dimension_ok(setup.player_width) || !dimension_ok(setup.player_height) {
        return Err(Error::InvalidPlayerSize {
            width: setup.player_width,
            height: setup.player_height,
        });
    }

    let params = setup.device.resolve(setup.custom_params.as_ref())?;
    let distance_in = params.distance_inches();

    let phi = viewing_angle(setup.player_width, distance_in, params.ppi_x);
    let u = angular_resolution(
        setup.video_width,
        setup.player_width,
        distance_in,
        params.ppi_x,
    );

    let consistent = (1.0..=180.0).contains(&phi) && (1.0..=200.0).contains(&u);
    if !consistent {
        return Err(Error::GeometryInconsistency { phi, u });
    }

    Ok(ViewingParams { phi, u })
}

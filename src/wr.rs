//! Generalized Westerink-Roufs picture quality model.
//!
//! Westerink and Roufs measured how perceived picture quality varies with
//! picture size and resolution alone, before any compression artifacts are
//! considered. The generalized form used here scores a viewing geometry
//! from two inputs: viewing angle `phi` (degrees) and angular resolution
//! `u` (cycles per degree):
//!
//! ```text
//! f_phi = (1 + (phi / phi_s)^-k)^(-gamma / k)
//! f_u   = (1 + (u / u_s)^-l)^(-delta / l)
//! Q_wr  = ln(alpha + beta · f_phi · f_u)
//! ```
//!
//! Both factors are saturating curves in [0, 1]; the constants place the
//! asymptotes of the raw score at `ln(alpha) ≈ 1` and `ln(alpha + beta) ≈ 5`,
//! so the final clamp to [1, 5] only trims numerical overshoot.
//!
//! ## Parameter sets
//!
//! One SDR calibration and three HDR calibrations, keyed by upsampling
//! method. Under SDR the upsampling method is accepted but does not select
//! a different curve.
//!
//! | Set | beta | gamma | delta | l | u_s |
//! |-----|------|-------|-------|---|-----|
//! | SDR              | 145.69 | 1.55 | 2.12 | 2.11 | 16.93 |
//! | HDR bicubic      | 106.91 | 1.674 | 2.2896 | 1.76 | 13.93 |
//! | HDR nearest      | 106.91 | 1.674 | 2.2896 | 2.5  | 23.4  |
//! | HDR super-res    | 106.91 | 1.674 | 2.2896 | 2.06 | 12.24 |
//!
//! (`alpha` = 2.72, `k` = 6.01, `phi_s` = 35.0 throughout.)
//!
//! ## References
//!
//! - J. Westerink and J. Roufs, "Subjective Image Quality as a Function of
//!   Viewing Distance, Resolution, and Picture Size", SMPTE Journal 98(2),
//!   1989.
//! - N. Barman, R. Vanam, Y. Reznik, "Generalized Westerink-Roufs Model for
//!   Predicting Quality of Scaled Video", QoMEX 2022.

use crate::viewing::Upsampling;
use crate::{MOS_MAX, MOS_MIN};

/// Parameters of one generalized Westerink-Roufs calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrParams {
    /// Additive offset inside the logarithm.
    pub alpha: f64,
    /// Scale of the size-resolution product term.
    pub beta: f64,
    /// Viewing-angle exponent.
    pub gamma: f64,
    /// Angular-resolution exponent.
    pub delta: f64,
    /// Viewing-angle curve steepness.
    pub k: f64,
    /// Angular-resolution curve steepness.
    pub l: f64,
    /// Viewing-angle saturation point, degrees.
    pub phi_s: f64,
    /// Angular-resolution saturation point, cycles per degree.
    pub u_s: f64,
}

/// SDR calibration.
pub const SDR: WrParams = WrParams {
    alpha: 2.72,
    beta: 145.69,
    gamma: 1.55,
    delta: 2.12,
    k: 6.01,
    l: 2.11,
    phi_s: 35.0,
    u_s: 16.93,
};

/// HDR calibration, bicubic upsampling.
pub const HDR_BICUBIC: WrParams = WrParams {
    alpha: 2.72,
    beta: 106.91,
    gamma: 1.55 * 1.08,
    delta: 2.12 * 1.08,
    k: 6.01,
    l: 1.76,
    phi_s: 35.0,
    u_s: 13.93,
};

/// HDR calibration, nearest-neighbor upsampling.
pub const HDR_NEAREST_NEIGHBOR: WrParams = WrParams {
    alpha: 2.72,
    beta: 106.91,
    gamma: 1.55 * 1.08,
    delta: 2.12 * 1.08,
    k: 6.01,
    l: 2.5,
    phi_s: 35.0,
    u_s: 23.4,
};

/// HDR calibration, super-resolution upsampling.
pub const HDR_SUPER_RESOLUTION: WrParams = WrParams {
    alpha: 2.72,
    beta: 106.91,
    gamma: 1.55 * 1.08,
    delta: 2.12 * 1.08,
    k: 6.01,
    l: 2.06,
    phi_s: 35.0,
    u_s: 12.24,
};

/// Calibration for the given dynamic range and upsampling method.
#[must_use]
pub fn params_for(hdr: bool, upsampling: Upsampling) -> &'static WrParams {
    if !hdr {
        return &SDR;
    }
    match upsampling {
        Upsampling::Bicubic => &HDR_BICUBIC,
        Upsampling::NearestNeighbor => &HDR_NEAREST_NEIGHBOR,
        Upsampling::SuperResolution => &HDR_SUPER_RESOLUTION,
    }
}

impl WrParams {
    /// Evaluate the model for a viewing geometry, clamped to the MOS scale.
    ///
    /// Callers are expected to have range-validated `phi` and `u` via
    /// geometry derivation; out-of-range values here are programming
    /// errors.
    #[must_use]
    pub fn score(&self, phi: f64, u: f64) -> f64 {
        debug_assert!(phi > 0.0 && phi < 180.0);
        debug_assert!(u > 0.0 && u < 1000.0);

        let f_phi = (1.0 + (phi / self.phi_s).powf(-self.k)).powf(-self.gamma / self.k);
        let f_u = (1.0 + (u / self.u_s).powf(-self.l)).powf(-self.delta / self.l);
        let raw = (self.alpha + self.beta * f_phi * f_u).ln();
        raw.clamp(MOS_MIN, MOS_MAX)
    }
}

/// Westerink-Roufs score for a viewing geometry.
#[must_use]
pub fn wr_score(phi: f64, u: f64, hdr: bool, upsampling: Upsampling) -> f64 {
    params_for(hdr, upsampling).score(phi, u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdr_reference_point() {
        // 55in TV fullscreen geometry, HD source.
        let q = wr_score(33.0, 28.0, false, Upsampling::Bicubic);
        assert!((q - 4.4857).abs() < 0.002, "q = {q}");
    }

    #[test]
    fn sdr_ignores_upsampling() {
        for method in Upsampling::ALL {
            let q = wr_score(33.0, 28.0, false, method);
            assert!((q - wr_score(33.0, 28.0, false, Upsampling::Bicubic)).abs() < 1e-12);
            assert!(q > 1.0 && q < 5.0);
        }
    }

    #[test]
    fn monotonic_in_viewing_angle() {
        let mut prev = 0.0;
        for phi in [5.0, 10.0, 20.0, 35.0, 60.0, 120.0] {
            let q = wr_score(phi, 20.0, false, Upsampling::Bicubic);
            assert!(q > prev, "not increasing at phi = {phi}");
            prev = q;
        }
    }

    #[test]
    fn monotonic_in_angular_resolution() {
        let mut prev = 0.0;
        for u in [2.0, 5.0, 10.0, 17.0, 30.0, 60.0] {
            let q = wr_score(33.0, u, false, Upsampling::Bicubic);
            assert!(q > prev, "not increasing at u = {u}");
            prev = q;
        }
    }

    #[test]
    fn scale_endpoints() {
        // Large picture at high resolution saturates just below 5; a tiny
        // one bottoms out near ln(alpha) ≈ 1.
        let high = wr_score(179.0, 999.0, false, Upsampling::Bicubic);
        assert!(high > 4.99 && high <= 5.0, "high = {high}");

        let low = wr_score(0.5, 0.5, false, Upsampling::Bicubic);
        assert!(low >= 1.0 && low < 1.01, "low = {low}");
    }

    #[test]
    fn hdr_upsampling_ordering() {
        // At mid resolution the curves separate cleanly: blocky nearest
        // neighbor scores worst, super-resolution best.
        let nn = wr_score(33.0, 10.0, true, Upsampling::NearestNeighbor);
        let bc = wr_score(33.0, 10.0, true, Upsampling::Bicubic);
        let sr = wr_score(33.0, 10.0, true, Upsampling::SuperResolution);
        assert!(nn < bc && bc < sr, "nn = {nn}, bc = {bc}, sr = {sr}");
        assert!((nn - 2.601).abs() < 0.01);
        assert!((bc - 3.206).abs() < 0.01);
        assert!((sr - 3.487).abs() < 0.01);
    }

    #[test]
    fn params_selection() {
        assert_eq!(params_for(false, Upsampling::NearestNeighbor), &SDR);
        assert_eq!(params_for(true, Upsampling::Bicubic), &HDR_BICUBIC);
        assert_eq!(
            params_for(true, Upsampling::NearestNeighbor),
            &HDR_NEAREST_NEIGHBOR
        );
        assert_eq!(
            params_for(true, Upsampling::SuperResolution),
            &HDR_SUPER_RESOLUTION
        );
    }
}

//! Fusion of the geometry baseline with a full-reference metric score.
//!
//! The Westerink-Roufs score `Q_wr` captures what the viewing setup alone
//! allows; a full-reference metric captures what compression did to the
//! pictures. The fused MOS combines both:
//!
//! ```text
//! Q   = sigmoid(value)            (identity for VMAF)
//! mos = alpha + beta · (1 + gamma · Q_wr) · Q + delta · Q_wr
//! ```
//!
//! clamped to the MOS scale. PSNR, SSIM and VIF scores pass through a
//! logistic `Q = 1 / (1 + e^(-epsilon · (value - zeta)))` first; VMAF is
//! already on a perceptual 0..100 scale and enters linearly.
//!
//! | Metric | alpha | beta | gamma | delta | epsilon | zeta |
//! |--------|-------|------|-------|-------|---------|------|
//! | PSNR | -6.906 | 6.130  | -0.048 | 1.476 | 0.228 | 23.83 |
//! | SSIM | -7.181 | 7.662  | -0.089 | 1.753 | 7.492 | 0.777 |
//! | VIF  | -12.09 | 12.117 | -0.137 | 2.763 | 4.846 | 0.416 |
//! | VMAF | -7.682 | 0.0753 | -0.122 | 2.01  | n/a   | n/a  |
//!
//! Constants from N. Barman, R. Vanam, Y. Reznik, "Parametric Quality
//! Models for Multiscreen Video Systems", EUVIP 2022.

use crate::{MOS_MAX, MOS_MIN};

/// Logistic squashing of a raw metric value onto (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sigmoid {
    /// Steepness.
    pub epsilon: f64,
    /// Midpoint; `apply(zeta)` is exactly 0.5.
    pub zeta: f64,
}

impl Sigmoid {
    /// `1 / (1 + e^(-epsilon · (value - zeta)))`
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        1.0 / (1.0 + (-self.epsilon * (value - self.zeta)).exp())
    }
}

/// Per-metric fusion calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionParams {
    /// Constant offset.
    pub alpha: f64,
    /// Metric term scale.
    pub beta: f64,
    /// Interaction of the metric term with the geometry baseline.
    pub gamma: f64,
    /// Geometry baseline scale.
    pub delta: f64,
    /// Squashing stage; `None` feeds the metric value in linearly.
    pub sigmoid: Option<Sigmoid>,
}

/// PSNR fusion calibration.
pub const PSNR: FusionParams = FusionParams {
    alpha: -6.906,
    beta: 6.130,
    gamma: -0.048,
    delta: 1.476,
    sigmoid: Some(Sigmoid {
        epsilon: 0.228,
        zeta: 23.83,
    }),
};

/// SSIM fusion calibration.
pub const SSIM: FusionParams = FusionParams {
    alpha: -7.181,
    beta: 7.662,
    gamma: -0.089,
    delta: 1.753,
    sigmoid: Some(Sigmoid {
        epsilon: 7.492,
        zeta: 0.777,
    }),
};

/// VIF fusion calibration.
pub const VIF: FusionParams = FusionParams {
    alpha: -12.09,
    beta: 12.117,
    gamma: -0.137,
    delta: 2.763,
    sigmoid: Some(Sigmoid {
        epsilon: 4.846,
        zeta: 0.416,
    }),
};

/// VMAF fusion calibration; no squashing stage.
pub const VMAF: FusionParams = FusionParams {
    alpha: -7.682,
    beta: 0.0753,
    gamma: -0.122,
    delta: 2.01,
    sigmoid: None,
};

impl FusionParams {
    /// Fuse a geometry baseline with a raw metric value, clamped to the
    /// MOS scale.
    #[must_use]
    pub fn fuse(&self, q_wr: f64, value: f64) -> f64 {
        debug_assert!((MOS_MIN..=MOS_MAX).contains(&q_wr));

        let q = match self.sigmoid {
            Some(sigmoid) => sigmoid.apply(value),
            None => value,
        };
        let mos = self.alpha + self.beta * (1.0 + self.gamma * q_wr) * q + self.delta * q_wr;
        mos.clamp(MOS_MIN, MOS_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_midpoint_is_half() {
        for params in [PSNR, SSIM, VIF] {
            let sigmoid = params.sigmoid.unwrap();
            assert!((sigmoid.apply(sigmoid.zeta) - 0.5).abs() < 1e-15);
        }
    }

    #[test]
    fn sigmoid_saturates() {
        let sigmoid = PSNR.sigmoid.unwrap();
        assert!(sigmoid.apply(90.0) > 0.999);
        assert!(sigmoid.apply(1.0) < 0.01);
    }

    #[test]
    fn psnr_reference_point() {
        // TV fullscreen baseline with a high-quality HD encode.
        let mos = PSNR.fuse(4.4857, 41.03835);
        assert!((mos - 4.4318).abs() < 0.005, "mos = {mos}");
    }

    #[test]
    fn vmaf_enters_linearly() {
        let mos = VMAF.fuse(4.4857, 95.0);
        assert!((mos - 4.5730).abs() < 0.005, "mos = {mos}");
    }

    #[test]
    fn poor_metric_clamps_to_floor() {
        let mos = PSNR.fuse(1.0, 5.0);
        assert!((mos - 1.0).abs() < 1e-12);
    }

    #[test]
    fn monotonic_in_metric_value() {
        // The metric coefficient beta · (1 + gamma · Q_wr) stays positive
        // over the whole baseline range for every calibration.
        let cases = [
            (PSNR, [10.0, 25.0, 35.0, 45.0]),
            (SSIM, [0.5, 0.75, 0.9, 0.99]),
            (VIF, [0.1, 0.4, 0.7, 0.95]),
            (VMAF, [20.0, 50.0, 80.0, 99.0]),
        ];
        for (params, values) in cases {
            for q_wr in [1.0, 3.0, 5.0] {
                let mut prev = f64::NEG_INFINITY;
                for value in values {
                    let mos = params.fuse(q_wr, value);
                    assert!(mos >= prev, "decreasing at q_wr = {q_wr}, value = {value}");
                    prev = mos;
                }
            }
        }
    }

    #[test]
    fn output_stays_on_scale() {
        for params in [PSNR, SSIM, VIF] {
            for q_wr in [1.0, 2.5, 5.0] {
                for value in [-10.0, 0.0, 0.5, 1.0, 40.0, 1000.0] {
                    let mos = params.fuse(q_wr, value);
                    assert!((MOS_MIN..=MOS_MAX).contains(&mos));
                }
            }
        }
    }
}

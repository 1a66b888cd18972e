//! Embedded calibration dataset.
//!
//! Seventy samples of the public Netflix subjective study: short clips
//! encoded at five resolutions, measured with PSNR and SSIM, and rated by a
//! viewer panel watching fullscreen on an HDTV under SDR. The fusion
//! calibrations were fitted against panels like this one, so replaying the
//! table through the model is the standing end-to-end check that the
//! constant tables are intact.

use serde::Serialize;

use crate::device::{self, DeviceType};
use crate::viewing::ViewingSetup;

/// One subjective test sample: an encode and its panel rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationSample {
    /// Sample identifier, `s01` through `s70`.
    pub name: &'static str,
    /// Encoded video width in pixels.
    pub width: u32,
    /// Encoded video height in pixels.
    pub height: u32,
    /// Measured PSNR, dB.
    pub psnr: f64,
    /// Measured SSIM.
    pub ssim: f64,
    /// Panel mean opinion score, 1..5.
    pub mos: f64,
}

impl CalibrationSample {
    /// The viewing setup the panel rated this sample in: fullscreen on the
    /// TV archetype, SDR.
    #[must_use]
    pub fn setup(&self) -> ViewingSetup {
        ViewingSetup::new(
            DeviceType::Tv,
            self.width,
            self.height,
            device::TV.display_width,
            device::TV.display_height,
        )
    }
}

/// Look up a sample by name.
#[must_use]
pub fn sample(name: &str) -> Option<&'static CalibrationSample> {
    NETFLIX_SDR_TV.iter().find(|s| s.name == name)
}

/// The Netflix SDR dataset, rated fullscreen on an HDTV.
#[rustfmt::skip]
pub const NETFLIX_SDR_TV: [CalibrationSample; 70] = [
    CalibrationSample { name: "s01", width: 384,  height: 288,  psnr: 35.620239, ssim: 0.959829, mos: 1.3077 },
    CalibrationSample { name: "s02", width: 512,  height: 384,  psnr: 35.724288, ssim: 0.95701,  mos: 2.0769 },
    CalibrationSample { name: "s03", width: 512,  height: 384,  psnr: 36.707835, ssim: 0.967129, mos: 2.4615 },
    CalibrationSample { name: "s04", width: 720,  height: 480,  psnr: 36.75937,  ssim: 0.96377,  mos: 3.1538 },
    CalibrationSample { name: "s05", width: 720,  height: 480,  psnr: 38.08809,  ssim: 0.975919, mos: 3.8077 },
    CalibrationSample { name: "s06", width: 1280, height: 720,  psnr: 38.401149, ssim: 0.972789, mos: 4.6538 },
    CalibrationSample { name: "s07", width: 1280, height: 720,  psnr: 39.10971,  ssim: 0.978547, mos: 4.5769 },
    CalibrationSample { name: "s08", width: 1920, height: 1080, psnr: 38.816344, ssim: 0.965304, mos: 4.6538 },
    CalibrationSample { name: "s09", width: 1920, height: 1080, psnr: 39.475595, ssim: 0.969544, mos: 4.8846 },
    CalibrationSample { name: "s10", width: 1920, height: 1080, psnr: 41.03835,  ssim: 0.977687, mos: 4.8077 },
    CalibrationSample { name: "s11", width: 384,  height: 288,  psnr: 43.470204, ssim: 0.990331, mos: 2.1154 },
    CalibrationSample { name: "s12", width: 384,  height: 288,  psnr: 44.108739, ssim: 0.99217,  mos: 1.9615 },
    CalibrationSample { name: "s13", width: 512,  height: 384,  psnr: 44.015573, ssim: 0.989149, mos: 2.6538 },
    CalibrationSample { name: "s14", width: 512,  height: 384,  psnr: 44.553589, ssim: 0.990767, mos: 2.8077 },
    CalibrationSample { name: "s15", width: 720,  height: 480,  psnr: 44.319652, ssim: 0.98691,  mos: 3.5769 },
    CalibrationSample { name: "s16", width: 1280, height: 720,  psnr: 43.634828, ssim: 0.977992, mos: 4.4231 },
    CalibrationSample { name: "s17", width: 1920, height: 1080, psnr: 41.336203, ssim: 0.954698, mos: 4.8846 },
    CalibrationSample { name: "s18", width: 1920, height: 1080, psnr: 41.71157,  ssim: 0.957351, mos: 4.8462 },
    CalibrationSample { name: "s19", width: 384,  height: 288,  psnr: 25.824094, ssim: 0.817631, mos: 1.0 },
    CalibrationSample { name: "s20", width: 720,  height: 480,  psnr: 28.514402, ssim: 0.892381, mos: 1.9231 },
    CalibrationSample { name: "s21", width: 1920, height: 1080, psnr: 27.170572, ssim: 0.803234, mos: 2.7692 },
    CalibrationSample { name: "s22", width: 1920, height: 1080, psnr: 28.121391, ssim: 0.841992, mos: 3.2692 },
    CalibrationSample { name: "s23", width: 1920, height: 1080, psnr: 28.869742, ssim: 0.869312, mos: 3.7308 },
    CalibrationSample { name: "s24", width: 1920, height: 1080, psnr: 29.616956, ssim: 0.893737, mos: 4.3462 },
    CalibrationSample { name: "s25", width: 1920, height: 1080, psnr: 30.496047, ssim: 0.91915,  mos: 4.5 },
    CalibrationSample { name: "s26", width: 384,  height: 288,  psnr: 30.474125, ssim: 0.875135, mos: 1.1923 },
    CalibrationSample { name: "s27", width: 512,  height: 384,  psnr: 32.35796,  ssim: 0.903011, mos: 1.5769 },
    CalibrationSample { name: "s28", width: 720,  height: 480,  psnr: 35.415544, ssim: 0.941262, mos: 3.1538 },
    CalibrationSample { name: "s29", width: 1280, height: 720,  psnr: 35.009639, ssim: 0.92282,  mos: 3.4615 },
    CalibrationSample { name: "s30", width: 1920, height: 1080, psnr: 36.314746, ssim: 0.931716, mos: 4.1538 },
    CalibrationSample { name: "s31", width: 1920, height: 1080, psnr: 37.811686, ssim: 0.947554, mos: 4.6154 },
    CalibrationSample { name: "s32", width: 1920, height: 1080, psnr: 39.115112, ssim: 0.958439, mos: 4.6923 },
    CalibrationSample { name: "s33", width: 384,  height: 288,  psnr: 29.830015, ssim: 0.809762, mos: 1.3077 },
    CalibrationSample { name: "s34", width: 720,  height: 480,  psnr: 31.026768, ssim: 0.849293, mos: 2.6154 },
    CalibrationSample { name: "s35", width: 1280, height: 720,  psnr: 30.54432,  ssim: 0.84661,  mos: 2.9231 },
    CalibrationSample { name: "s36", width: 1920, height: 1080, psnr: 29.52626,  ssim: 0.837443, mos: 3.1923 },
    CalibrationSample { name: "s37", width: 1280, height: 720,  psnr: 31.662805, ssim: 0.871714, mos: 3.6538 },
    CalibrationSample { name: "s38", width: 1920, height: 1080, psnr: 30.533075, ssim: 0.860243, mos: 4.0 },
    CalibrationSample { name: "s39", width: 1920, height: 1080, psnr: 32.631513, ssim: 0.901982, mos: 4.3846 },
    CalibrationSample { name: "s40", width: 1920, height: 1080, psnr: 34.7741,   ssim: 0.931491, mos: 4.6538 },
    CalibrationSample { name: "s41", width: 1920, height: 1080, psnr: 36.557732, ssim: 0.949092, mos: 4.7692 },
    CalibrationSample { name: "s42", width: 384,  height: 288,  psnr: 35.889891, ssim: 0.95701,  mos: 1.9615 },
    CalibrationSample { name: "s43", width: 512,  height: 384,  psnr: 37.850343, ssim: 0.971129, mos: 3.1923 },
    CalibrationSample { name: "s44", width: 720,  height: 480,  psnr: 37.063021, ssim: 0.960206, mos: 3.3077 },
    CalibrationSample { name: "s45", width: 720,  height: 480,  psnr: 40.689888, ssim: 0.984093, mos: 4.0385 },
    CalibrationSample { name: "s46", width: 1920, height: 1080, psnr: 39.721312, ssim: 0.970356, mos: 4.6538 },
    CalibrationSample { name: "s47", width: 1920, height: 1080, psnr: 45.335584, ssim: 0.989825, mos: 4.8846 },
    CalibrationSample { name: "s48", width: 384,  height: 288,  psnr: 35.731982, ssim: 0.960807, mos: 1.1154 },
    CalibrationSample { name: "s49", width: 512,  height: 384,  psnr: 36.446616, ssim: 0.963934, mos: 1.8462 },
    CalibrationSample { name: "s50", width: 720,  height: 480,  psnr: 35.807652, ssim: 0.952641, mos: 2.4615 },
    CalibrationSample { name: "s51", width: 720,  height: 480,  psnr: 37.404842, ssim: 0.964863, mos: 3.0769 },
    CalibrationSample { name: "s52", width: 1280, height: 720,  psnr: 36.997115, ssim: 0.939794, mos: 4.2308 },
    CalibrationSample { name: "s53", width: 1280, height: 720,  psnr: 37.302171, ssim: 0.942176, mos: 4.3846 },
    CalibrationSample { name: "s54", width: 1920, height: 1080, psnr: 35.337223, ssim: 0.881615, mos: 4.7692 },
    CalibrationSample { name: "s55", width: 384,  height: 288,  psnr: 29.547652, ssim: 0.832657, mos: 1.0385 },
    CalibrationSample { name: "s56", width: 720,  height: 480,  psnr: 30.277566, ssim: 0.847808, mos: 2.0769 },
    CalibrationSample { name: "s57", width: 720,  height: 480,  psnr: 32.265447, ssim: 0.899588, mos: 2.6538 },
    CalibrationSample { name: "s58", width: 1280, height: 720,  psnr: 30.849491, ssim: 0.848564, mos: 3.2308 },
    CalibrationSample { name: "s59", width: 1280, height: 720,  psnr: 31.866142, ssim: 0.874731, mos: 3.6923 },
    CalibrationSample { name: "s60", width: 1920, height: 1080, psnr: 30.644579, ssim: 0.819165, mos: 3.9615 },
    CalibrationSample { name: "s61", width: 1920, height: 1080, psnr: 31.72604,  ssim: 0.846712, mos: 4.2308 },
    CalibrationSample { name: "s62", width: 1920, height: 1080, psnr: 32.663728, ssim: 0.867245, mos: 4.4615 },
    CalibrationSample { name: "s63", width: 1920, height: 1080, psnr: 34.801,    ssim: 0.903836, mos: 4.3077 },
    CalibrationSample { name: "s64", width: 1920, height: 1080, psnr: 35.522221, ssim: 0.9138,   mos: 4.5769 },
    CalibrationSample { name: "s65", width: 384,  height: 288,  psnr: 38.55262,  ssim: 0.958848, mos: 1.5769 },
    CalibrationSample { name: "s66", width: 512,  height: 384,  psnr: 40.639229, ssim: 0.969591, mos: 2.5769 },
    CalibrationSample { name: "s67", width: 720,  height: 480,  psnr: 41.28698,  ssim: 0.970027, mos: 3.2308 },
    CalibrationSample { name: "s68", width: 720,  height: 480,  psnr: 43.314695, ssim: 0.980449, mos: 3.3077 },
    CalibrationSample { name: "s69", width: 1280, height: 720,  psnr: 43.641809, ssim: 0.977314, mos: 4.2308 },
    CalibrationSample { name: "s70", width: 1920, height: 1080, psnr: 42.476554, ssim: 0.96548,  mos: 4.5385 },
];

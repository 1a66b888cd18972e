//! Single-measurement prediction command.

use anyhow::Result;
use clap::Args;
use pmos::{
    DeviceParams, DeviceType, QualityLevel, Upsampling, ViewingDistance, ViewingSetup,
};

use super::MetricArg;

/// Predict the MOS for one metric measurement.
#[derive(Args, Debug)]
pub struct CmdPredict {
    /// Metric the score belongs to
    pub metric: MetricArg,

    /// Raw metric score
    pub value: f64,

    /// Encoded video width in pixels
    #[arg(long)]
    pub width: u32,

    /// Encoded video height in pixels
    #[arg(long)]
    pub height: u32,

    /// Player window width; defaults to the device display width
    #[arg(long, requires = "player_height")]
    pub player_width: Option<u32>,

    /// Player window height; defaults to the device display height
    #[arg(long, requires = "player_width")]
    pub player_height: Option<u32>,

    /// Watching device: mobile, tablet, pc, tv, custom, or a numeric code
    #[arg(long, env = "PMOS_DEVICE", default_value = "tv")]
    pub device: String,

    /// HDR playback
    #[arg(long)]
    pub hdr: bool,

    /// Upsampling method: bicubic, nearest-neighbor/nn, super-resolution/sr
    #[arg(long, default_value = "bicubic")]
    pub upsampling: String,

    /// Custom display width in pixels
    #[arg(long)]
    pub display_width: Option<u32>,

    /// Custom display height in pixels
    #[arg(long)]
    pub display_height: Option<u32>,

    /// Custom pixel density, pixels per inch
    #[arg(long)]
    pub ppi: Option<f64>,

    /// Custom viewing distance in inches
    #[arg(long, conflicts_with = "distance_heights")]
    pub distance: Option<f64>,

    /// Custom viewing distance in display heights
    #[arg(long)]
    pub distance_heights: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CmdPredict {
    /// Execute the predict command.
    pub fn run(&self, verbose: bool) -> Result<()> {
        let setup = self.build_setup()?;

        if verbose {
            let params = setup.viewing_params()?;
            eprintln!(
                "viewing angle {:.2} deg, angular resolution {:.2} cpd",
                params.phi, params.u
            );
        }

        let metric = self.metric.metric();
        let mos = metric.to_mos(self.value, &setup)?;
        let level = QualityLevel::from_mos(mos);

        if self.json {
            let out = serde_json::json!({
                "metric": metric.name(),
                "value": self.value,
                "mos": mos,
                "level": level,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("{} {} -> predicted MOS {:.3} ({})", metric, self.value, mos, level);
        }

        Ok(())
    }

    /// Assemble the viewing setup from the command-line flags.
    fn build_setup(&self) -> Result<ViewingSetup> {
        let device: DeviceType = self.device.parse()?;
        let upsampling: Upsampling = self.upsampling.parse()?;
        let custom = self.custom_params()?;

        let (player_width, player_height) = match (self.player_width, self.player_height) {
            (Some(w), Some(h)) => (w, h),
            _ => display_size(device, custom.as_ref())?,
        };

        let mut setup = ViewingSetup::new(
            device,
            self.width,
            self.height,
            player_width,
            player_height,
        )
        .with_hdr(self.hdr)
        .with_upsampling(upsampling);
        if let Some(params) = custom {
            setup = setup.with_custom_params(params);
        }
        Ok(setup)
    }

    /// Custom display parameters, all-or-nothing across the four flags.
    fn custom_params(&self) -> Result<Option<DeviceParams>> {
        let distance = match (self.distance, self.distance_heights) {
            (Some(inches), None) => Some(ViewingDistance::Inches(inches)),
            (None, Some(heights)) => Some(ViewingDistance::DisplayHeights(heights)),
            (None, None) => None,
            (Some(_), Some(_)) => {
                anyhow::bail!("--distance conflicts with --distance-heights")
            }
        };

        match (self.display_width, self.display_height, self.ppi, distance) {
            (None, None, None, None) => Ok(None),
            (Some(display_width), Some(display_height), Some(ppi), Some(distance)) => {
                Ok(Some(DeviceParams {
                    display_width,
                    display_height,
                    ppi_x: ppi,
                    ppi_y: ppi,
                    distance,
                }))
            }
            _ => anyhow::bail!(
                "a custom display needs --display-width, --display-height, --ppi, \
                 and --distance or --distance-heights"
            ),
        }
    }
}

/// Fullscreen player size for the effective device.
fn display_size(device: DeviceType, custom: Option<&DeviceParams>) -> Result<(u32, u32)> {
    let Some(params) = device.catalog_params().or(custom) else {
        anyhow::bail!(
            "a custom device without display parameters needs --player-width and --player-height"
        );
    };
    Ok((params.display_width, params.display_height))
}

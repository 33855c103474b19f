//! Launch parameter parsing for the viewer.
//!
//! On native, parameters are parsed from command-line arguments using clap.
//! On WASM, defaults are used (CLI argument parsing is not available).

use bevy::prelude::*;
use glam::DVec3;
use kapla_layout::TowerParams;

/// Default plank width in meters.
const DEFAULT_PLANK_WIDTH: f64 = 0.5;
/// Default plank height in meters.
const DEFAULT_PLANK_HEIGHT: f64 = 2.0;
/// Default plank length in meters.
const DEFAULT_PLANK_LENGTH: f64 = 2.0;
/// Default tower ring radius in meters.
const DEFAULT_RADIUS: f64 = 6.0;
/// Default number of stacked levels.
const DEFAULT_LEVELS: u32 = 16;

/// Launch parameters for the viewer.
#[derive(Resource, Debug)]
pub struct LaunchParams {
    /// Plank width in meters.
    pub plank_width: f64,
    /// Plank height in meters.
    pub plank_height: f64,
    /// Plank length in meters.
    pub plank_length: f64,
    /// Target radius of the tower's cylinder cross-section.
    pub radius: f64,
    /// Number of stacked plank levels.
    pub levels: u32,
    /// World-space position of the tower's base center.
    pub origin: DVec3,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            plank_width: DEFAULT_PLANK_WIDTH,
            plank_height: DEFAULT_PLANK_HEIGHT,
            plank_length: DEFAULT_PLANK_LENGTH,
            radius: DEFAULT_RADIUS,
            levels: DEFAULT_LEVELS,
            origin: DVec3::ZERO,
        }
    }
}

impl LaunchParams {
    /// Tower parameters for the layout generator.
    pub fn tower_params(&self) -> TowerParams {
        TowerParams {
            width: self.plank_width,
            height: self.plank_height,
            length: self.plank_length,
            radius: self.radius,
            level_count: self.levels,
            origin: self.origin,
        }
    }
}

#[cfg(not(target_family = "wasm"))]
mod native {
    use clap::Parser;

    use super::*;

    /// Parse an "x,y,z" triple into a world position.
    fn parse_origin(s: &str) -> Result<DVec3, String> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(format!("expected x,y,z, got '{s}'"));
        }

        let mut components = [0.0f64; 3];
        for (component, part) in components.iter_mut().zip(&parts) {
            *component = part
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid coordinate '{part}': {e}"))?;
        }

        Ok(DVec3::from_array(components))
    }

    #[derive(Parser)]
    #[command(about = "Kapla tower physics playground")]
    struct CliArgs {
        /// Plank width in meters.
        #[arg(long, default_value_t = DEFAULT_PLANK_WIDTH)]
        plank_width: f64,

        /// Plank height in meters.
        #[arg(long, default_value_t = DEFAULT_PLANK_HEIGHT)]
        plank_height: f64,

        /// Plank length in meters.
        #[arg(long, default_value_t = DEFAULT_PLANK_LENGTH)]
        plank_length: f64,

        /// Tower ring radius in meters.
        #[arg(long, default_value_t = DEFAULT_RADIUS)]
        radius: f64,

        /// Number of stacked levels (odd counts round down to a full pair).
        #[arg(long, default_value_t = DEFAULT_LEVELS)]
        levels: u32,

        /// Tower base center, as "x,y,z".
        #[arg(long, default_value = "0,0,0", value_parser = parse_origin)]
        origin: DVec3,
    }

    pub fn parse() -> LaunchParams {
        let args = CliArgs::parse();
        LaunchParams {
            plank_width: args.plank_width,
            plank_height: args.plank_height,
            plank_length: args.plank_length,
            radius: args.radius,
            levels: args.levels,
            origin: args.origin,
        }
    }
}

/// Parse launch parameters from CLI args (native) or use defaults (WASM).
pub fn parse() -> LaunchParams {
    #[cfg(not(target_family = "wasm"))]
    {
        native::parse()
    }
    #[cfg(target_family = "wasm")]
    {
        LaunchParams::default()
    }
}

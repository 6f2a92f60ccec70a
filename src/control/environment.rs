use crate::constants::{AIR_DENSITY_SEA_LEVEL, ATMOSPHERE_SCALE_HEIGHT};

// Not clamped below sea level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pub sea_level_density: f64,
    pub scale_height: f64,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Atmosphere {
            sea_level_density: AIR_DENSITY_SEA_LEVEL,
            scale_height: ATMOSPHERE_SCALE_HEIGHT,
        }
    }
}

impl Atmosphere {
    pub fn density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }

    pub fn dynamic_pressure(&self, altitude: f64, airspeed: f64) -> f64 {
        0.5 * self.density(altitude) * airspeed.powi(2)
    }
}

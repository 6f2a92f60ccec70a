use crate::constants::MOMENT_SCALE;
use crate::control::{aircraft::AircraftProperties, aircraft_state::AircraftState};
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentModel {
    pub roll_damping: f64,
    pub pitch_damping: f64,
    pub yaw_damping: f64,
    pub adverse_yaw_factor: f64,
    pub speed_stability_onset_fraction: f64, // of the maximum speed
    pub speed_stability_coefficient: f64,
    pub scale: f64,
}

impl Default for MomentModel {
    fn default() -> Self {
        MomentModel {
            roll_damping: 0.1,
            pitch_damping: 0.2,
            yaw_damping: 0.15,
            adverse_yaw_factor: 0.2,
            speed_stability_onset_fraction: 0.7,
            speed_stability_coefficient: 0.1,
            scale: MOMENT_SCALE,
        }
    }
}

impl MomentModel {
    // (roll, pitch, yaw) packed as (x, y, z)
    pub fn calculate_moments(
        &self,
        state: &AircraftState,
        properties: &AircraftProperties,
        dynamic_pressure: f64,
    ) -> Vector3D {
        let qs = dynamic_pressure * properties.wing_area;
        let b = properties.wing_span;
        let c = properties.mean_aerodynamic_chord();

        let roll_moment = qs * b * state.aileron * properties.aileron_effect
            - qs * b * b * state.roll_rate * self.roll_damping;

        let adverse_yaw = -state.aileron * properties.aileron_effect * self.adverse_yaw_factor;

        let mut pitch_moment = qs * c * state.elevator * properties.elevator_effect
            - qs * c * c * state.pitch_rate * self.pitch_damping;
        pitch_moment -= qs * c * self.speed_stability_factor(state.airspeed, properties)
            * self.speed_stability_coefficient;

        let yaw_moment = qs * b * state.rudder * properties.rudder_effect
            - qs * b * b * state.heading_rate * self.yaw_damping
            + qs * b * adverse_yaw;

        Vector3D::new(roll_moment, pitch_moment, yaw_moment) * self.scale
    }

    // 0 below the onset, 1 at the maximum speed
    pub fn speed_stability_factor(&self, airspeed: f64, properties: &AircraftProperties) -> f64 {
        let onset = properties.max_speed * self.speed_stability_onset_fraction;
        if airspeed > onset {
            let range = properties.max_speed * (1.0 - self.speed_stability_onset_fraction);
            (airspeed - onset) / range
        } else {
            0.0
        }
    }
}

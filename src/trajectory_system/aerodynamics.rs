use serde::Serialize;

use crate::constants::MIN_AIRFLOW_SPEED;
use crate::control::{aircraft::AircraftProperties, aircraft_state::AircraftState};
use crate::utils::vector3d::Vector3D;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AerodynamicForces {
    pub angle_of_attack: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    pub lift: f64,
    pub drag: f64,
    pub side_force: f64,
    pub force: Vector3D, // world frame
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub stall_onset_fraction: f64,     // of the critical AoA
    pub min_post_stall_lift: f64,      // floor on the stall multiplier
    pub drag_rise_onset_fraction: f64, // of the maximum speed
    pub drag_rise_coefficient: f64,
    pub side_force_factor: f64,
}

impl Default for Aerodynamics {
    fn default() -> Self {
        Aerodynamics::new(0.8, 0.3, 0.8, 0.1, 0.2)
    }
}

impl Aerodynamics {
    pub fn new(
        stall_onset_fraction: f64,
        min_post_stall_lift: f64,
        drag_rise_onset_fraction: f64,
        drag_rise_coefficient: f64,
        side_force_factor: f64,
    ) -> Self {
        Aerodynamics {
            stall_onset_fraction,
            min_post_stall_lift,
            drag_rise_onset_fraction,
            drag_rise_coefficient,
            side_force_factor,
        }
    }

    pub fn calculate_aerodynamic_forces(
        &self,
        state: &AircraftState,
        properties: &AircraftProperties,
        dynamic_pressure: f64,
    ) -> AerodynamicForces {
        let qs = dynamic_pressure * properties.wing_area;

        let angle_of_attack = self.calculate_angle_of_attack(state, properties);
        let lift_coefficient = self.calculate_lift_coefficient(angle_of_attack, properties);
        let drag_coefficient =
            self.calculate_drag_coefficient(lift_coefficient, state.airspeed, properties);

        let lift = qs * lift_coefficient;
        let drag = qs * drag_coefficient;
        let side_force = qs * state.rudder * properties.rudder_effect * self.side_force_factor;

        let force = if state.velocity.magnitude() > MIN_AIRFLOW_SPEED {
            let velocity_dir = state.velocity.normalize();
            let drag_vector = -velocity_dir * drag;
            lift_direction(velocity_dir, state.heading) * lift
                + drag_vector
                + side_direction(state.heading) * side_force
        } else {
            Vector3D::zero()
        };

        AerodynamicForces {
            angle_of_attack,
            lift_coefficient,
            drag_coefficient,
            lift,
            drag,
            side_force,
            force,
        }
    }

    pub fn calculate_angle_of_attack(
        &self,
        state: &AircraftState,
        properties: &AircraftProperties,
    ) -> f64 {
        let horizontal_speed = state.velocity.horizontal_magnitude();
        let alpha = if horizontal_speed > MIN_AIRFLOW_SPEED {
            (-state.velocity.y).atan2(horizontal_speed) + state.pitch
        } else {
            0.0
        };

        alpha.clamp(
            properties.critical_aoa_negative,
            properties.critical_aoa_positive,
        )
    }

    pub fn calculate_lift_coefficient(
        &self,
        angle_of_attack: f64,
        properties: &AircraftProperties,
    ) -> f64 {
        let mut cl = properties.cl0 + properties.cl_alpha * angle_of_attack;

        let stall_onset = properties.critical_aoa_positive * self.stall_onset_fraction;
        if angle_of_attack > stall_onset {
            let stall_range = properties.critical_aoa_positive * (1.0 - self.stall_onset_fraction);
            let stall_factor = 1.0 - (angle_of_attack - stall_onset) / stall_range;
            cl *= stall_factor.max(self.min_post_stall_lift);
        }

        cl.clamp(-properties.cl_max, properties.cl_max)
    }

    pub fn calculate_drag_coefficient(
        &self,
        lift_coefficient: f64,
        airspeed: f64,
        properties: &AircraftProperties,
    ) -> f64 {
        let mut cd = properties.cd0 + properties.k * lift_coefficient.powi(2);

        let drag_rise_onset = properties.max_speed * self.drag_rise_onset_fraction;
        if airspeed > drag_rise_onset {
            let drag_rise_range = properties.max_speed * (1.0 - self.drag_rise_onset_fraction);
            let speed_factor = (airspeed - drag_rise_onset) / drag_rise_range;
            cd += speed_factor * self.drag_rise_coefficient;
        }

        cd
    }
}

// Perpendicular to the flight path, in the vertical plane through the heading.
fn lift_direction(velocity_dir: Vector3D, heading: f64) -> Vector3D {
    let (sin_h, cos_h) = heading.sin_cos();
    Vector3D::new(
        -velocity_dir.y * cos_h,
        velocity_dir.x * cos_h + velocity_dir.z * sin_h,
        -velocity_dir.y * sin_h,
    )
    .normalize()
}

// Horizontal, to the right of the heading.
fn side_direction(heading: f64) -> Vector3D {
    let (sin_h, cos_h) = heading.sin_cos();
    Vector3D::new(-sin_h, 0.0, cos_h)
}

use crate::constants::{
    MAX_PITCH_RATE, MAX_ROLL_RATE, MAX_YAW_RATE, PITCH_INERTIA_FACTOR, PITCH_LIMIT,
    ROLL_INERTIA_FACTOR, YAW_INERTIA_FACTOR,
};
use crate::control::aircraft_state::AircraftState;
use crate::utils::{angles::wrap_angle, vector3d::Vector3D};

// kg·m²
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inertia {
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
}

impl Inertia {
    pub fn approximate(mass: f64, wing_span: f64) -> Self {
        let base = mass * wing_span * wing_span;
        Inertia {
            ixx: base * ROLL_INERTIA_FACTOR,
            iyy: base * PITCH_INERTIA_FACTOR,
            izz: base * YAW_INERTIA_FACTOR,
        }
    }

    pub fn angular_acceleration(&self, moments: Vector3D) -> Vector3D {
        Vector3D::new(
            moments.x / self.ixx,
            moments.y / self.iyy,
            moments.z / self.izz,
        )
    }
}

// Semi-implicit Euler: position moves with the updated velocity
pub fn integrate_translation(state: &mut AircraftState, acceleration: Vector3D, delta_time: f64) {
    state.velocity = state.velocity + acceleration * delta_time;
    state.position = state.position + state.velocity * delta_time;
    state.update_air_data();
}

pub fn integrate_rotation(
    state: &mut AircraftState,
    moments: Vector3D,
    inertia: &Inertia,
    delta_time: f64,
) {
    let angular_acceleration = inertia.angular_acceleration(moments);

    state.roll_rate += angular_acceleration.x * delta_time;
    state.pitch_rate += angular_acceleration.y * delta_time;
    state.heading_rate += angular_acceleration.z * delta_time;

    state.roll_rate = state.roll_rate.clamp(-MAX_ROLL_RATE, MAX_ROLL_RATE);
    state.pitch_rate = state.pitch_rate.clamp(-MAX_PITCH_RATE, MAX_PITCH_RATE);
    state.heading_rate = state.heading_rate.clamp(-MAX_YAW_RATE, MAX_YAW_RATE);

    state.roll += state.roll_rate * delta_time;
    state.pitch += state.pitch_rate * delta_time;
    state.heading += state.heading_rate * delta_time;

    state.roll = wrap_angle(state.roll);
    state.pitch = state.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    state.heading = wrap_angle(state.heading);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn create_state() -> AircraftState {
        AircraftState::new(10_000.0)
    }

    #[test]
    fn test_inertia_approximation() {
        let inertia = Inertia::approximate(10_000.0, 10.0);
        assert_relative_eq!(inertia.ixx, 100_000.0);
        assert_relative_eq!(inertia.iyy, 200_000.0);
        assert_relative_eq!(inertia.izz, 300_000.0);

        let alpha = inertia.angular_acceleration(Vector3D::new(1_000.0, 1_000.0, 3_000.0));
        assert_relative_eq!(alpha.x, 0.01);
        assert_relative_eq!(alpha.y, 0.005);
        assert_relative_eq!(alpha.z, 0.01);
    }

    #[test]
    fn test_translation_updates_velocity_before_position() {
        let mut state = create_state();
        state.position = Vector3D::new(0.0, 1_000.0, 0.0);
        state.velocity = Vector3D::new(100.0, 0.0, 0.0);

        integrate_translation(&mut state, Vector3D::new(0.0, -9.81, 0.0), 0.1);

        assert_relative_eq!(state.velocity.y, -0.981, epsilon = 1e-12);
        assert_relative_eq!(state.position.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(state.position.y, 1_000.0 - 0.0981, epsilon = 1e-9);
        assert_eq!(state.altitude, state.position.y);
        assert_relative_eq!(state.airspeed, state.velocity.magnitude());
    }

    #[test]
    fn test_rotation_integrates_rates_then_angles() {
        let mut state = create_state();
        let inertia = Inertia::approximate(10_000.0, 10.0);

        integrate_rotation(&mut state, Vector3D::new(1_000.0, -2_000.0, 3_000.0), &inertia, 0.5);

        assert_relative_eq!(state.roll_rate, 0.005, epsilon = 1e-12);
        assert_relative_eq!(state.pitch_rate, -0.005, epsilon = 1e-12);
        assert_relative_eq!(state.heading_rate, 0.005, epsilon = 1e-12);
        assert_relative_eq!(state.roll, 0.0025, epsilon = 1e-12);
        assert_relative_eq!(state.pitch, -0.0025, epsilon = 1e-12);
        assert_relative_eq!(state.heading, 0.0025, epsilon = 1e-12);
    }

    #[test]
    fn test_rates_are_clamped_for_any_moment() {
        let inertia = Inertia::approximate(10_000.0, 10.0);

        let mut state = create_state();
        integrate_rotation(&mut state, Vector3D::new(1e15, 1e15, 1e15), &inertia, 0.01);
        assert_eq!(state.roll_rate, 5.0);
        assert_eq!(state.pitch_rate, 3.0);
        assert_eq!(state.heading_rate, 2.0);

        let mut state = create_state();
        integrate_rotation(&mut state, Vector3D::new(-1e15, -1e15, -1e15), &inertia, 0.01);
        assert_eq!(state.roll_rate, -5.0);
        assert_eq!(state.pitch_rate, -3.0);
        assert_eq!(state.heading_rate, -2.0);
    }

    #[test]
    fn test_angles_wrap_and_pitch_clamps() {
        let inertia = Inertia::approximate(10_000.0, 10.0);
        let mut state = create_state();
        state.roll = PI - 0.01;
        state.heading = -PI + 0.01;
        state.pitch = 0.44 * PI;
        state.roll_rate = 5.0;
        state.heading_rate = -2.0;
        state.pitch_rate = 3.0;

        integrate_rotation(&mut state, Vector3D::zero(), &inertia, 0.1);

        assert_relative_eq!(state.roll, -PI + 0.49, epsilon = 1e-9);
        assert_relative_eq!(state.heading, PI - 0.19, epsilon = 1e-9);
        assert_eq!(state.pitch, PITCH_LIMIT);
    }
}

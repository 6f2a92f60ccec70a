use crate::utils::vector3d::Vector3D;

pub fn calculate_thrust(throttle: f64, max_thrust: f64) -> f64 {
    throttle * max_thrust
}

pub fn calculate_fuel_consumption(thrust: f64, thrust_sfc: f64, delta_time: f64) -> f64 {
    thrust * thrust_sfc * delta_time
}

pub fn burn_fuel(fuel: f64, thrust: f64, thrust_sfc: f64, delta_time: f64) -> f64 {
    if thrust > 0.0 && fuel > 0.0 {
        (fuel - calculate_fuel_consumption(thrust, thrust_sfc, delta_time)).max(0.0)
    } else {
        fuel
    }
}

// Roll does not change the thrust line
pub fn thrust_vector(thrust: f64, pitch: f64, heading: f64) -> Vector3D {
    Vector3D::new(
        thrust * pitch.cos() * heading.cos(),
        thrust * pitch.sin(),
        thrust * pitch.cos() * heading.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_thrust_scales_with_throttle() {
        assert_eq!(calculate_thrust(0.0, 127_000.0), 0.0);
        assert_eq!(calculate_thrust(0.5, 127_000.0), 63_500.0);
        assert_eq!(calculate_thrust(1.0, 127_000.0), 127_000.0);
    }

    #[test]
    fn test_burn_fuel() {
        let remaining = burn_fuel(1_000.0, 63_500.0, 0.00008, 0.1);
        assert_relative_eq!(remaining, 1_000.0 - 0.508, epsilon = 1e-9);
    }

    #[test]
    fn test_burn_fuel_floors_at_zero() {
        assert_eq!(burn_fuel(0.2, 127_000.0, 0.00008, 1.0), 0.0);
        assert_eq!(burn_fuel(0.0, 127_000.0, 0.00008, 1.0), 0.0);
    }

    #[test]
    fn test_no_burn_without_thrust() {
        assert_eq!(burn_fuel(500.0, 0.0, 0.00008, 10.0), 500.0);
    }

    #[test]
    fn test_thrust_vector_follows_heading_and_pitch() {
        let forward = thrust_vector(1_000.0, 0.0, 0.0);
        assert_relative_eq!(forward.x, 1_000.0);
        assert_relative_eq!(forward.y, 0.0);
        assert_relative_eq!(forward.z, 0.0);

        let turned = thrust_vector(1_000.0, 0.0, FRAC_PI_2);
        assert_relative_eq!(turned.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(turned.z, 1_000.0, epsilon = 1e-9);

        let climbing = thrust_vector(1_000.0, 0.3, 1.2);
        assert_relative_eq!(climbing.magnitude(), 1_000.0, epsilon = 1e-9);
        assert_relative_eq!(climbing.y, 1_000.0 * 0.3f64.sin(), epsilon = 1e-9);
    }
}

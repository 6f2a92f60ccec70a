use serde::Serialize;

use crate::utils::vector3d::Vector3D;

// y is up, heading runs from +x towards +z
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftState {
    pub position: Vector3D, // m
    pub velocity: Vector3D, // m/s

    // Orientation (rad)
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,

    // Angular velocities (rad/s)
    pub heading_rate: f64,
    pub pitch_rate: f64,
    pub roll_rate: f64,

    // Engine
    pub throttle: f64, // 0.0 to 1.0
    pub thrust: f64,   // N

    // Control surfaces (-1.0 to 1.0)
    pub aileron: f64,
    pub elevator: f64,
    pub rudder: f64,

    pub mass: f64,     // kg
    pub altitude: f64, // m
    pub airspeed: f64, // m/s
}

impl AircraftState {
    pub fn new(mass: f64) -> Self {
        AircraftState {
            position: Vector3D::zero(),
            velocity: Vector3D::zero(),
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
            heading_rate: 0.0,
            pitch_rate: 0.0,
            roll_rate: 0.0,
            throttle: 0.0,
            thrust: 0.0,
            aileron: 0.0,
            elevator: 0.0,
            rudder: 0.0,
            mass,
            altitude: 0.0,
            airspeed: 0.0,
        }
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = clamp_input(throttle, 0.0, 1.0, self.throttle);
    }

    pub fn set_control_surfaces(&mut self, aileron: f64, elevator: f64, rudder: f64) {
        self.aileron = clamp_input(aileron, -1.0, 1.0, self.aileron);
        self.elevator = clamp_input(elevator, -1.0, 1.0, self.elevator);
        self.rudder = clamp_input(rudder, -1.0, 1.0, self.rudder);
    }

    pub fn update_air_data(&mut self) {
        self.altitude = self.position.y;
        self.airspeed = self.velocity.magnitude();
    }
}

// NaN inputs keep the previous value.
fn clamp_input(value: f64, min: f64, max: f64, current: f64) -> f64 {
    if value.is_nan() {
        current
    } else {
        value.clamp(min, max)
    }
}

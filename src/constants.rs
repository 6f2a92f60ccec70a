use std::f64::consts::PI;

// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Atmosphere
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const ATMOSPHERE_SCALE_HEIGHT: f64 = 8_000.0; // m

// Angular rate limits
pub const MAX_ROLL_RATE: f64 = 5.0; // rad/s
pub const MAX_PITCH_RATE: f64 = 3.0; // rad/s
pub const MAX_YAW_RATE: f64 = 2.0; // rad/s

// Pitch is held short of vertical to keep the Euler angles away from gimbal lock
pub const PITCH_LIMIT: f64 = 0.45 * PI; // rad

// Moments of inertia approximated as factor * mass * span²
pub const ROLL_INERTIA_FACTOR: f64 = 0.1;
pub const PITCH_INERTIA_FACTOR: f64 = 0.2;
pub const YAW_INERTIA_FACTOR: f64 = 0.3;

// Aerodynamic Constants
pub const MOMENT_SCALE: f64 = 0.001;
pub const OSWALD_EFFICIENCY: f64 = 0.8;
pub const MIN_AIRFLOW_SPEED: f64 = 0.1; // m/s, below this the flow direction is undefined

// Initial conditions
pub const INITIAL_FUEL_FRACTION: f64 = 0.5;
pub const INITIAL_AIRSPEED: f64 = 100.0; // m/s

// Simulation Parameters
pub const TIME_STEP: f64 = 0.02; // s
pub const MAX_SIMULATION_TIME: f64 = 60.0; // s

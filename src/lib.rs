pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::aircraft::{AircraftProperties, AircraftType, PropertyOverrides};
pub use control::aircraft_state::AircraftState;
pub use control::environment::Atmosphere;
pub use control::flight_dynamics::{FlightDynamics, FlightSnapshot};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::{AerodynamicForces, Aerodynamics};
pub use trajectory_system::moments::MomentModel;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub mod aircraft;
pub mod aircraft_state;
pub mod environment;
pub mod flight_dynamics;
pub mod propulsion;

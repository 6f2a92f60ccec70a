use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::constants::{GRAVITY, INITIAL_AIRSPEED, INITIAL_FUEL_FRACTION};
use crate::errors::SimulationError;
use crate::trajectory_system::{
    aerodynamics::{AerodynamicForces, Aerodynamics},
    kinematics::{self, Inertia},
    moments::MomentModel,
};
use crate::utils::vector3d::Vector3D;

use super::{
    aircraft::{AircraftProperties, AircraftType, PropertyOverrides},
    aircraft_state::AircraftState,
    environment::Atmosphere,
    propulsion,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSnapshot {
    pub state: AircraftState,
    pub fuel: f64,
}

#[derive(Debug, Clone)]
pub struct FlightDynamics {
    state: AircraftState,
    properties: AircraftProperties,
    fuel: f64,
    fuel_burned: f64, // during the last tick
    acceleration: Vector3D,
    atmosphere: Atmosphere,
    aerodynamics: Aerodynamics,
    moment_model: MomentModel,
}

impl Default for FlightDynamics {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightDynamics {
    pub fn new() -> Self {
        Self::from_valid_properties(AircraftType::F16.properties())
    }

    pub fn with_properties(properties: AircraftProperties) -> Result<Self, SimulationError> {
        properties.validate()?;
        Ok(Self::from_valid_properties(properties))
    }

    fn from_valid_properties(properties: AircraftProperties) -> Self {
        let mut dynamics = FlightDynamics {
            state: AircraftState::new(properties.empty_mass),
            properties,
            fuel: 0.0,
            fuel_burned: 0.0,
            acceleration: Vector3D::zero(),
            atmosphere: Atmosphere::default(),
            aerodynamics: Aerodynamics::default(),
            moment_model: MomentModel::default(),
        };
        dynamics.reset();
        dynamics
    }

    pub fn initialize(&mut self, position: Vector3D, heading: f64) {
        self.state.position = position;
        self.state.heading = heading;
        self.state.velocity = Vector3D::new(
            INITIAL_AIRSPEED * heading.cos(),
            0.0,
            INITIAL_AIRSPEED * heading.sin(),
        );
        self.state.update_air_data();
        self.fuel = self.properties.max_fuel * INITIAL_FUEL_FRACTION;
        self.refresh_mass();

        info!(
            x = position.x,
            y = position.y,
            z = position.z,
            heading,
            fuel = self.fuel,
            "aircraft initialized"
        );
    }

    pub fn set_aircraft_type(&mut self, name: &str) {
        match name.parse::<AircraftType>() {
            Ok(aircraft_type) => {
                self.properties = aircraft_type.properties();
                self.fuel = self.fuel.clamp(0.0, self.properties.max_fuel);
                self.refresh_mass();
                info!(aircraft = %self.properties.name, "aircraft type set");
            }
            Err(err) => debug!(%err, "aircraft type unchanged"),
        }
    }

    pub fn set_aircraft_properties(&mut self, overrides: &PropertyOverrides) {
        let rejected = self.properties.apply_overrides(overrides);
        if !rejected.is_empty() {
            debug!(?rejected, "ignored invalid property overrides");
        }
        self.fuel = self.fuel.clamp(0.0, self.properties.max_fuel);
        self.refresh_mass();
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.state.set_throttle(throttle);
    }

    pub fn set_control_surfaces(&mut self, aileron: f64, elevator: f64, rudder: f64) {
        self.state.set_control_surfaces(aileron, elevator, rudder);
    }

    pub fn update(&mut self, delta_time: f64) {
        let mass = self.properties.empty_mass + self.fuel;
        self.state.mass = mass;

        self.state.thrust =
            propulsion::calculate_thrust(self.state.throttle, self.properties.max_thrust);

        let fuel_before = self.fuel;
        self.fuel = propulsion::burn_fuel(
            self.fuel,
            self.state.thrust,
            self.properties.thrust_sfc,
            delta_time,
        );
        self.fuel_burned = fuel_before - self.fuel;
        if fuel_before > 0.0 && self.fuel <= 0.0 {
            warn!("fuel exhausted");
        }

        let dynamic_pressure = self.dynamic_pressure();

        let thrust_force =
            propulsion::thrust_vector(self.state.thrust, self.state.pitch, self.state.heading);
        let weight = Vector3D::new(0.0, -mass * GRAVITY, 0.0);
        let aero_forces = self.aerodynamics.calculate_aerodynamic_forces(
            &self.state,
            &self.properties,
            dynamic_pressure,
        );

        self.acceleration =
            [thrust_force, weight, aero_forces.force].into_iter().sum::<Vector3D>() / mass;
        kinematics::integrate_translation(&mut self.state, self.acceleration, delta_time);

        // Moments see the air data after the translational step
        let moments = self.moments();
        let inertia = Inertia::approximate(mass, self.properties.wing_span);
        kinematics::integrate_rotation(&mut self.state, moments, &inertia, delta_time);

        self.refresh_mass();

        trace!(
            altitude = self.state.altitude,
            airspeed = self.state.airspeed,
            fuel = self.fuel,
            "tick"
        );
    }

    // Properties survive a reset
    pub fn reset(&mut self) {
        self.state = AircraftState::new(self.properties.empty_mass);
        self.fuel = self.properties.max_fuel * INITIAL_FUEL_FRACTION;
        self.fuel_burned = 0.0;
        self.acceleration = Vector3D::zero();
        self.refresh_mass();
        info!(aircraft = %self.properties.name, fuel = self.fuel, "simulation reset");
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn properties(&self) -> &AircraftProperties {
        &self.properties
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn acceleration(&self) -> Vector3D {
        self.acceleration
    }

    pub fn fuel_burned(&self) -> f64 {
        self.fuel_burned
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        FlightSnapshot {
            state: self.state.clone(),
            fuel: self.fuel,
        }
    }

    pub fn air_density(&self) -> f64 {
        self.atmosphere.density(self.state.altitude)
    }

    pub fn dynamic_pressure(&self) -> f64 {
        self.atmosphere.dynamic_pressure(self.state.altitude, self.state.airspeed)
    }

    pub fn aerodynamic_forces(&self) -> AerodynamicForces {
        self.aerodynamics.calculate_aerodynamic_forces(
            &self.state,
            &self.properties,
            self.dynamic_pressure(),
        )
    }

    pub fn moments(&self) -> Vector3D {
        self.moment_model
            .calculate_moments(&self.state, &self.properties, self.dynamic_pressure())
    }

    fn refresh_mass(&mut self) {
        self.state.mass = self.properties.empty_mass + self.fuel;
    }
}

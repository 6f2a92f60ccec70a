use serde::Serialize;
use tracing::info;

use crate::control::flight_dynamics::{FlightDynamics, FlightSnapshot};
use crate::errors::SimulationError;
use crate::utils::{angles::rad_to_deg, vector3d::Vector3D};

#[derive(Debug, Clone, Serialize)]
pub struct TelemetrySample {
    pub time: f64,
    pub snapshot: FlightSnapshot,
    pub acceleration: Vector3D,
}

#[derive(Debug)]
pub struct Telemetry {
    pub samples: Vec<TelemetrySample>,
    max_airspeed: f64,
    max_altitude: f64,
    min_altitude: f64,
    min_fuel: f64,
    max_acceleration: f64,
    fuel_burned: f64,
    simulation_time: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            samples: Vec::new(),
            max_airspeed: 0.0,
            max_altitude: f64::MIN,
            min_altitude: f64::MAX,
            min_fuel: f64::MAX,
            max_acceleration: 0.0,
            fuel_burned: 0.0,
            simulation_time: 0.0,
        }
    }

    fn format_vector3d(vec: &Vector3D, precision: usize) -> String {
        format!(
            "({:.precision$}, {:.precision$}, {:.precision$})",
            vec.x,
            vec.y,
            vec.z,
            precision = precision
        )
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    // Call after each `update` with the same `delta_time`
    pub fn collect_data(&mut self, dynamics: &FlightDynamics, delta_time: f64) {
        self.simulation_time += delta_time;
        let state = dynamics.state();
        let fuel = dynamics.fuel();
        let acceleration = dynamics.acceleration();

        self.fuel_burned += dynamics.fuel_burned();
        self.max_airspeed = self.max_airspeed.max(state.airspeed);
        self.max_altitude = self.max_altitude.max(state.altitude);
        self.min_altitude = self.min_altitude.min(state.altitude);
        self.min_fuel = self.min_fuel.min(fuel);
        self.max_acceleration = self.max_acceleration.max(acceleration.magnitude());

        self.samples.push(TelemetrySample {
            time: self.simulation_time,
            snapshot: dynamics.snapshot(),
            acceleration,
        });
    }

    pub fn max_airspeed(&self) -> f64 {
        self.max_airspeed
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn min_altitude(&self) -> f64 {
        self.min_altitude
    }

    pub fn min_fuel(&self) -> f64 {
        self.min_fuel
    }

    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    pub fn fuel_burned(&self) -> f64 {
        self.fuel_burned
    }

    pub fn display_data(&self, every_nth: usize) {
        info!("--- Telemetry Data ---");
        for sample in self.samples.iter().step_by(every_nth.max(1)) {
            let state = &sample.snapshot.state;
            info!(
                "t={} pos={} vel={} airspeed={:.2} m/s alt={} hdg={:.1}° pitch={:.1}° roll={:.1}° thrust={:.0} N fuel={:.2} kg",
                Self::format_time(sample.time),
                Self::format_vector3d(&state.position, 1),
                Self::format_vector3d(&state.velocity, 1),
                state.airspeed,
                Self::format_altitude(state.altitude),
                rad_to_deg(state.heading),
                rad_to_deg(state.pitch),
                rad_to_deg(state.roll),
                state.thrust,
                sample.snapshot.fuel,
            );
        }

        info!("--- Simulation Summary ---");
        info!("Duration: {}", Self::format_time(self.simulation_time));
        info!("Max Airspeed: {:.2} m/s", self.max_airspeed);
        info!("Max Altitude: {}", Self::format_altitude(self.max_altitude));
        info!("Min Altitude: {}", Self::format_altitude(self.min_altitude));
        info!("Min Fuel: {:.2} kg", self.min_fuel);
        info!("Fuel Burned: {:.2} kg", self.fuel_burned());
        info!("Max Acceleration: {:.2} m/s²", self.max_acceleration);
    }

    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(&self.samples)?)
    }
}

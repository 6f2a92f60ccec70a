use std::f64::consts::PI;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::OSWALD_EFFICIENCY;
use crate::errors::SimulationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProperties {
    pub name: String,

    // Physical characteristics
    pub empty_mass: f64, // kg
    pub max_fuel: f64,   // kg
    pub wing_area: f64,  // m²
    pub wing_span: f64,  // m

    // Engine
    pub max_thrust: f64,      // N, afterburner
    pub thrust_military: f64, // N, dry power
    pub thrust_sfc: f64,      // kg of fuel per N per s

    // Aerodynamic coefficients
    pub cl0: f64,
    pub cl_alpha: f64, // per radian
    pub cd0: f64,
    pub k: f64,
    pub cl_max: f64,

    // Flight envelope
    pub critical_aoa_positive: f64,  // rad
    pub critical_aoa_negative: f64,  // rad
    pub min_maneuverable_speed: f64, // m/s
    pub max_speed: f64,              // m/s

    // Control effectiveness
    pub aileron_effect: f64,
    pub elevator_effect: f64,
    pub rudder_effect: f64,
}

impl Default for AircraftProperties {
    fn default() -> Self {
        AircraftType::F16.properties()
    }
}

impl AircraftProperties {
    pub fn f16() -> Self {
        AircraftProperties {
            name: "F-16 Fighting Falcon".to_string(),
            empty_mass: 8_570.0,
            max_fuel: 3_175.0,
            wing_area: 27.87,
            wing_span: 9.96,
            max_thrust: 127_000.0,
            thrust_military: 76_000.0,
            thrust_sfc: 0.00008,
            cl0: 0.0,
            cl_alpha: 5.5,
            cd0: 0.02,
            k: 0.042,
            cl_max: 1.4,
            critical_aoa_positive: 0.384,  // ~22 degrees
            critical_aoa_negative: -0.262, // ~-15 degrees
            min_maneuverable_speed: 20.0,
            max_speed: 686.0, // ~Mach 2 at sea level
            aileron_effect: 0.5,
            elevator_effect: 0.4,
            rudder_effect: 0.3,
        }
    }

    pub fn mean_aerodynamic_chord(&self) -> f64 {
        self.wing_area / self.wing_span
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span.powi(2) / self.wing_area
    }

    // 1 / (π e AR)
    pub fn induced_drag_factor(&self) -> f64 {
        1.0 / (PI * OSWALD_EFFICIENCY * self.aspect_ratio())
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = [
            ("empty_mass", self.empty_mass),
            ("wing_area", self.wing_area),
            ("wing_span", self.wing_span),
            ("cl_max", self.cl_max),
            ("max_speed", self.max_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidProperties(format!(
                    "{} must be positive, got {}",
                    field, value
                )));
            }
        }

        let non_negative = [
            ("max_fuel", self.max_fuel),
            ("max_thrust", self.max_thrust),
            ("thrust_military", self.thrust_military),
            ("thrust_sfc", self.thrust_sfc),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidProperties(format!(
                    "{} must not be negative, got {}",
                    field, value
                )));
            }
        }

        if !(self.critical_aoa_negative < 0.0 && self.critical_aoa_positive > 0.0) {
            return Err(SimulationError::InvalidProperties(format!(
                "critical angles of attack must straddle zero, got [{}, {}]",
                self.critical_aoa_negative, self.critical_aoa_positive
            )));
        }

        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, SimulationError> {
        let properties: AircraftProperties = serde_json::from_str(json)?;
        properties.validate()?;
        Ok(properties)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    // Returns the names of rejected fields
    pub fn apply_overrides(&mut self, overrides: &PropertyOverrides) -> Vec<&'static str> {
        let mut rejected = Vec::new();

        let mut positive = |field: &'static str, value: Option<f64>, target: &mut f64| {
            if let Some(value) = value {
                if value.is_finite() && value > 0.0 {
                    *target = value;
                } else {
                    rejected.push(field);
                }
            }
        };
        positive("empty_mass", overrides.empty_mass, &mut self.empty_mass);
        positive("wing_area", overrides.wing_area, &mut self.wing_area);
        positive("wing_span", overrides.wing_span, &mut self.wing_span);
        positive("max_speed", overrides.max_speed, &mut self.max_speed);

        let mut non_negative = |field: &'static str, value: Option<f64>, target: &mut f64| {
            if let Some(value) = value {
                if value.is_finite() && value >= 0.0 {
                    *target = value;
                } else {
                    rejected.push(field);
                }
            }
        };
        non_negative("max_fuel", overrides.max_fuel, &mut self.max_fuel);
        non_negative("max_thrust", overrides.max_thrust, &mut self.max_thrust);
        non_negative(
            "thrust_military",
            overrides.thrust_military,
            &mut self.thrust_military,
        );
        non_negative(
            "min_maneuverable_speed",
            overrides.min_maneuverable_speed,
            &mut self.min_maneuverable_speed,
        );

        match overrides.critical_aoa_positive {
            Some(value) if value.is_finite() && value > 0.0 => self.critical_aoa_positive = value,
            Some(_) => rejected.push("critical_aoa_positive"),
            None => {}
        }
        match overrides.critical_aoa_negative {
            Some(value) if value.is_finite() && value < 0.0 => self.critical_aoa_negative = value,
            Some(_) => rejected.push("critical_aoa_negative"),
            None => {}
        }

        self.k = self.induced_drag_factor();
        rejected
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropertyOverrides {
    pub empty_mass: Option<f64>,
    pub max_fuel: Option<f64>,
    pub wing_area: Option<f64>,
    pub wing_span: Option<f64>,
    pub max_thrust: Option<f64>,
    pub thrust_military: Option<f64>,
    pub critical_aoa_positive: Option<f64>,
    pub critical_aoa_negative: Option<f64>,
    pub min_maneuverable_speed: Option<f64>,
    pub max_speed: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftType {
    F16,
}

impl AircraftType {
    pub fn properties(&self) -> AircraftProperties {
        match self {
            AircraftType::F16 => AircraftProperties::f16(),
        }
    }
}

impl FromStr for AircraftType {
    type Err = SimulationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "F-16" => Ok(AircraftType::F16),
            other => {
                debug!(aircraft_type = other, "no preset for aircraft type");
                Err(SimulationError::UnknownAircraftType(other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_f16_preset() {
        let props = AircraftProperties::f16();
        assert_eq!(props.name, "F-16 Fighting Falcon");
        assert_eq!(props.empty_mass, 8_570.0);
        assert_eq!(props.max_fuel, 3_175.0);
        assert_eq!(props.max_thrust, 127_000.0);
        assert_eq!(props.k, 0.042);
        assert!(props.validate().is_ok());
        assert_eq!(AircraftProperties::default(), props);
    }

    #[test]
    fn test_derived_geometry() {
        let props = AircraftProperties::f16();
        assert_relative_eq!(props.mean_aerodynamic_chord(), 27.87 / 9.96, epsilon = 1e-12);
        assert_relative_eq!(props.aspect_ratio(), 9.96 * 9.96 / 27.87, epsilon = 1e-12);
        assert_relative_eq!(
            props.induced_drag_factor(),
            1.0 / (PI * 0.8 * props.aspect_ratio()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_aircraft_type_lookup() {
        assert_eq!("F-16".parse::<AircraftType>().unwrap(), AircraftType::F16);
        assert!(matches!(
            "Cessna 172".parse::<AircraftType>(),
            Err(SimulationError::UnknownAircraftType(name)) if name == "Cessna 172"
        ));
        assert_eq!(AircraftType::F16.properties(), AircraftProperties::f16());
    }

    #[test]
    fn test_validate_rejects_degenerate_geometry() {
        let mut props = AircraftProperties::f16();
        props.wing_span = 0.0;
        assert!(matches!(
            props.validate(),
            Err(SimulationError::InvalidProperties(_))
        ));

        let mut props = AircraftProperties::f16();
        props.thrust_sfc = -1.0;
        assert!(props.validate().is_err());

        let mut props = AircraftProperties::f16();
        props.critical_aoa_negative = 0.1;
        assert!(props.validate().is_err());

        let mut props = AircraftProperties::f16();
        props.empty_mass = f64::NAN;
        assert!(props.validate().is_err());
    }

    #[test]
    fn test_load_from_json() {
        let json = serde_json::to_string(&AircraftProperties::f16()).unwrap();
        let loaded = AircraftProperties::from_json_str(&json).unwrap();
        assert_eq!(loaded, AircraftProperties::f16());

        let invalid = json.replace("\"wing_area\":27.87", "\"wing_area\":-1.0");
        assert!(matches!(
            AircraftProperties::from_json_str(&invalid),
            Err(SimulationError::InvalidProperties(_))
        ));

        assert!(matches!(
            AircraftProperties::from_json_str("{\"name\": \"glider\"}"),
            Err(SimulationError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = AircraftProperties::from_json_file("/nonexistent/aircraft.json");
        assert!(matches!(result, Err(SimulationError::ConfigRead(_))));
    }

    #[test]
    fn test_overrides_recompute_induced_drag() {
        let mut props = AircraftProperties::f16();
        let rejected = props.apply_overrides(&PropertyOverrides {
            wing_area: Some(30.0),
            max_thrust: Some(100_000.0),
            critical_aoa_positive: Some(0.3),
            ..Default::default()
        });

        assert!(rejected.is_empty());
        assert_eq!(props.wing_area, 30.0);
        assert_eq!(props.max_thrust, 100_000.0);
        assert_eq!(props.critical_aoa_positive, 0.3);
        assert_eq!(props.wing_span, 9.96);
        let aspect_ratio = 9.96 * 9.96 / 30.0;
        assert_relative_eq!(props.k, 1.0 / (PI * 0.8 * aspect_ratio), epsilon = 1e-12);
    }

    #[test]
    fn test_overrides_ignore_invalid_values() {
        let mut props = AircraftProperties::f16();
        let rejected = props.apply_overrides(&PropertyOverrides {
            wing_span: Some(0.0),
            empty_mass: Some(f64::INFINITY),
            max_fuel: Some(-10.0),
            critical_aoa_negative: Some(0.2),
            max_speed: Some(500.0),
            ..Default::default()
        });

        assert_eq!(
            rejected,
            vec!["empty_mass", "wing_span", "max_fuel", "critical_aoa_negative"]
        );
        assert_eq!(props.wing_span, 9.96);
        assert_eq!(props.empty_mass, 8_570.0);
        assert_eq!(props.max_fuel, 3_175.0);
        assert_eq!(props.critical_aoa_negative, -0.262);
        assert_eq!(props.max_speed, 500.0);
        assert!(props.validate().is_ok());
    }
}

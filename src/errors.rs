use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Unknown aircraft type: {0}")]
    UnknownAircraftType(String),

    #[error("Invalid aircraft properties: {0}")]
    InvalidProperties(String),

    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

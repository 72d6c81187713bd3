use thiserror::Error;
use vs_core::VertiportId;
use vs_vehicle::VehicleError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no vehicle named {0:?}")]
    VehicleNotFound(String),

    #[error("vehicle name {0:?} registered twice")]
    DuplicateVehicle(String),

    #[error("vehicle {vehicle:?} refers to unknown vertiport {vertiport}")]
    UnknownVertiport {
        vehicle:   String,
        vertiport: VertiportId,
    },

    #[error("vehicle error: {0}")]
    Vehicle(#[from] VehicleError),
}

pub type SimResult<T> = Result<T, SimError>;

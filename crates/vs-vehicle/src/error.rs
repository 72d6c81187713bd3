use thiserror::Error;
use vs_core::{VehicleId, VertiportId};
use vs_ground::GroundError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum VehicleError {
    #[error("vehicle {vehicle} has no ground route at {vertiport}: {source}")]
    UnreachableRoute {
        vehicle:   VehicleId,
        vertiport: VertiportId,
        #[source]
        source:    GroundError,
    },

    #[error("vertiport {0} not found")]
    UnknownVertiport(VertiportId),
}

pub type VehicleResult<T> = Result<T, VehicleError>;

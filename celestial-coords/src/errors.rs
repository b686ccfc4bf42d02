use celestial_core::AstroError;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordError {
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// A space motion at or beyond the speed of light.
    #[error("Superluminal speed in {function}")]
    SuperluminalSpeed { function: String },

    #[error("Null position vector in {function}")]
    NullPositionVector { function: String },

    /// Catalog propagation could not produce a position at the target epoch.
    #[error("Propagation failed: {message}")]
    PropagationFailed { message: String },

    #[error("Epoch conversion failed: {source}")]
    EpochError {
        #[from]
        source: celestial_time::TimeError,
    },

    #[error("Core astronomical calculation failed: {message}")]
    CoreError { message: String },
}

impl CoordError {
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn superluminal(function: &str) -> Self {
        Self::SuperluminalSpeed {
            function: function.to_string(),
        }
    }

    pub fn null_position(function: &str) -> Self {
        Self::NullPositionVector {
            function: function.to_string(),
        }
    }

    pub fn propagation_failed(message: impl Into<String>) -> Self {
        Self::PropagationFailed {
            message: message.into(),
        }
    }

    pub fn from_core(error: AstroError) -> Self {
        Self::CoreError {
            message: error.to_string(),
        }
    }

    /// Classic negative status of the failing routine.
    ///
    /// A null position vector is −2; epoch errors keep the code of the time
    /// routine that produced them; everything else is −1.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::NullPositionVector { .. } => -2,
            Self::EpochError { source } => source.status_code(),
            _ => -1,
        }
    }
}

impl From<AstroError> for CoordError {
    fn from(error: AstroError) -> Self {
        Self::from_core(error)
    }
}

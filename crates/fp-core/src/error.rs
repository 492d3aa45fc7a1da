//! Floorplan errors

use thiserror::Error;

use crate::generation::AttemptFailure;

/// Errors surfaced by floorplan generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorplanError {
    #[error("min_rooms must be at least 1")]
    ZeroMinRooms,

    #[error("min_rooms ({min_rooms}) exceeds max_rooms ({max_rooms})")]
    RoomBoundsInverted { min_rooms: usize, max_rooms: usize },

    #[error("max_rooms ({max_rooms}) is below the smallest valid floor of {minimum} rooms")]
    MaxRoomsTooSmall { max_rooms: usize, minimum: usize },

    #[error("max_rooms ({max_rooms}) exceeds the {cells} grid cells")]
    MaxRoomsTooLarge { max_rooms: usize, cells: usize },

    #[error("max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("unknown room type code {0}")]
    InvalidRoomCode(u8),

    #[error("floorplan must have {expected} cells, found {found}")]
    GridLength { expected: usize, found: usize },

    #[error("no valid floorplan after {attempts} attempts (last rejection: {last_failure})")]
    AttemptsExhausted {
        attempts: usize,
        last_failure: AttemptFailure,
    },

    #[error("options error: {0}")]
    Options(#[from] OptionsError),
}

/// Options parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

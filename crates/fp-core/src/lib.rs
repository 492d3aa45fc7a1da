//! fp-core: Floorplan generation
//!
//! Grows a connected set of rooms on a fixed 10x10 grid by a constrained
//! random flood fill, then designates the boss, reward, shop and secret
//! rooms. The result is an immutable [`Floorplan`] of room-type codes.
//!
//! This crate holds no I/O beyond reading an options file.

pub mod grid;

mod error;
mod floorplan;
mod generation;
mod options;
mod room;

pub use error::{FloorplanError, OptionsError};
pub use floorplan::{Floorplan, SpecialRooms};
pub use generation::{
    generate, generate_floorplan, generate_seeded, pick_secret_room, AttemptFailure, SecretSearch,
    MIN_FEASIBLE_ROOMS, SECRET_SEARCH_TRIALS,
};
pub use grid::{Direction, GRID_HEIGHT, GRID_LEN, GRID_WIDTH, START_ROOM_INDEX};
pub use options::GenerateOptions;
pub use room::RoomType;

pub use fp_rng::{FloorRng, RandomSource, ReplaySource};

//! Floorplan generation
//!
//! A constrained random flood fill grows rooms outward from the start room.
//! Cells the fill could not expand from become dead ends, which host the
//! boss, reward and shop rooms. The secret room goes into an empty cell
//! wedged between existing rooms. Attempts that break a rule are thrown
//! away whole and generation starts over.

use std::collections::VecDeque;

use log::{debug, trace, warn};
use thiserror::Error;

use fp_rng::{index_below, FloorRng, RandomSource};

use crate::error::FloorplanError;
use crate::floorplan::{count_occupied_neighbors, Floorplan};
use crate::grid::{
    self, Direction, GRID_LEN, SECRET_MAX_COL, SECRET_MAX_ROW, SECRET_MIN_COL, SECRET_MIN_ROW,
    START_ROOM_INDEX,
};
use crate::options::GenerateOptions;
use crate::room::RoomType;

/// Smallest `max_rooms` that can satisfy every placement rule: the start
/// room, one room between it and the boss, the boss, reward and shop dead
/// ends, and the secret room.
pub const MIN_FEASIBLE_ROOMS: usize = 6;

/// Candidate cells tried before the secret room search gives up
pub const SECRET_SEARCH_TRIALS: usize = 900;

/// Past this trial, 2 neighboring rooms are enough for the secret room
const SECRET_RELAX_TWO: usize = 300;
/// Past this trial, 1 neighboring room is enough
const SECRET_RELAX_ONE: usize = 600;

const SECRET_COLS: usize = SECRET_MAX_COL - SECRET_MIN_COL + 1;
const SECRET_ROWS: usize = SECRET_MAX_ROW - SECRET_MIN_ROW + 1;

/// Chance the flood fill skips an otherwise valid cell
const ABANDON_CHANCE: f64 = 0.5;

/// Why a single generation attempt was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttemptFailure {
    #[error("only {found} dead ends for the boss, reward and shop rooms")]
    NotEnoughDeadEnds { found: usize },

    #[error("no cell qualified for the secret room")]
    SecretSearchExhausted,

    #[error("{rooms} rooms is below the minimum of {min_rooms}")]
    TooFewRooms { rooms: usize, min_rooms: usize },

    #[error("boss room {boss} touches the start room")]
    BossNextToStart { boss: usize },
}

/// Outcome of the secret room search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSearch {
    Found(usize),
    Exhausted,
}

/// Generate a floorplan, retrying until one passes validation
///
/// Fails fast if `options` can never be satisfied, and gives up with
/// [`FloorplanError::AttemptsExhausted`] after `options.max_attempts`
/// rejected attempts.
pub fn generate_floorplan<R: RandomSource + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Floorplan, FloorplanError> {
    options.validate()?;

    let mut attempts = 0;
    loop {
        attempts += 1;
        match attempt_floorplan(options, rng) {
            Ok(floorplan) => {
                debug!(
                    "floorplan accepted after {} attempt(s) with {} rooms",
                    attempts,
                    floorplan.room_count()
                );
                return Ok(floorplan);
            }
            Err(failure) if attempts >= options.max_attempts => {
                warn!("giving up on floorplan after {attempts} attempts: {failure}");
                return Err(FloorplanError::AttemptsExhausted {
                    attempts,
                    last_failure: failure,
                });
            }
            Err(failure) => debug!("floorplan attempt {attempts} rejected: {failure}"),
        }
    }
}

/// Generate a floorplan from an entropy-seeded [`FloorRng`]
pub fn generate(options: &GenerateOptions) -> Result<Floorplan, FloorplanError> {
    generate_floorplan(options, &mut FloorRng::from_entropy())
}

/// Generate a floorplan from a seeded [`FloorRng`]
pub fn generate_seeded(options: &GenerateOptions, seed: u64) -> Result<Floorplan, FloorplanError> {
    let mut rng = FloorRng::new(seed);
    generate_floorplan(options, &mut rng)
}

/// One full attempt: flood fill, special rooms, validation
fn attempt_floorplan<R: RandomSource + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Floorplan, AttemptFailure> {
    let mut builder = FloorBuilder::new(rng, options.max_rooms);
    builder.flood_fill();
    let boss = builder.place_special_rooms()?;
    builder.validate(boss, options.min_rooms)?;
    Ok(builder.finish())
}

/// Pick a cell for the secret room
///
/// Draws random cells from the secret sub-grid, skipping rooms and cells
/// touching the boss. A cell with 3+ neighboring rooms is taken at once;
/// later trials settle for 2, then 1.
pub fn pick_secret_room<R: RandomSource + ?Sized>(
    cells: &[RoomType],
    boss: usize,
    rng: &mut R,
) -> SecretSearch {
    for trial in 0..SECRET_SEARCH_TRIALS {
        let x = SECRET_MIN_COL + index_below(&mut *rng, SECRET_COLS).unwrap_or_default();
        let y = SECRET_MIN_ROW + index_below(&mut *rng, SECRET_ROWS).unwrap_or_default();
        let Some(index) = grid::index_of(x, y) else {
            continue;
        };

        if cells.get(index).is_none_or(|room| room.is_room()) {
            continue;
        }
        if grid::are_adjacent(index, boss) {
            continue;
        }

        let rooms = count_occupied_neighbors(cells, index);
        let accepted = rooms >= 3
            || (trial > SECRET_RELAX_TWO && rooms >= 2)
            || (trial > SECRET_RELAX_ONE && rooms >= 1);
        if accepted {
            trace!("secret room at {index} on trial {trial} with {rooms} neighbors");
            return SecretSearch::Found(index);
        }
    }

    trace!("secret room search exhausted");
    SecretSearch::Exhausted
}

/// Working state of a single generation attempt
struct FloorBuilder<'a, R: RandomSource + ?Sized> {
    rng: &'a mut R,
    /// Rooms the flood fill may create; one slot stays free for the secret room
    flood_cap: usize,
    cells: [RoomType; GRID_LEN],
    queue: VecDeque<usize>,
    dead_ends: Vec<usize>,
    room_count: usize,
}

impl<'a, R: RandomSource + ?Sized> FloorBuilder<'a, R> {
    fn new(rng: &'a mut R, max_rooms: usize) -> Self {
        Self {
            rng,
            flood_cap: max_rooms.saturating_sub(1),
            cells: [RoomType::Empty; GRID_LEN],
            queue: VecDeque::new(),
            dead_ends: Vec::new(),
            room_count: 0,
        }
    }

    /// Try to turn `index` into a normal room. Returns true if it did.
    fn visit(&mut self, index: usize) -> bool {
        if self.cells[index].is_room() {
            return false;
        }
        // Only the room we came from may touch the new one
        if count_occupied_neighbors(&self.cells, index) > 1 {
            return false;
        }
        if self.room_count >= self.flood_cap {
            return false;
        }
        // The draw happens for the start room too; it just can't be skipped
        if self.rng.next_unit() < ABANDON_CHANCE && index != START_ROOM_INDEX {
            return false;
        }

        self.cells[index] = RoomType::Normal;
        self.queue.push_back(index);
        self.room_count += 1;
        true
    }

    /// Breadth-first expansion from the start room
    fn flood_fill(&mut self) {
        self.visit(START_ROOM_INDEX);

        while let Some(index) = self.queue.pop_front() {
            let mut created = false;
            for dir in Direction::FILL_ORDER {
                if let Some(next) = grid::fill_neighbor(index, dir) {
                    created |= self.visit(next);
                }
            }

            if !created && index != START_ROOM_INDEX {
                self.dead_ends.push(index);
            }
        }
    }

    /// Assign boss, reward, shop and secret rooms. Returns the boss cell.
    fn place_special_rooms(&mut self) -> Result<usize, AttemptFailure> {
        if self.dead_ends.len() < 3 {
            return Err(AttemptFailure::NotEnoughDeadEnds {
                found: self.dead_ends.len(),
            });
        }

        let boss = self.pop_last_dead_end()?;
        self.cells[boss] = RoomType::Boss;

        let reward = self.pop_random_dead_end()?;
        self.cells[reward] = RoomType::Reward;

        let shop = self.pop_random_dead_end()?;
        self.cells[shop] = RoomType::Shop;

        match pick_secret_room(&self.cells, boss, &mut *self.rng) {
            SecretSearch::Found(secret) => {
                self.cells[secret] = RoomType::Secret;
                self.room_count += 1;
                Ok(boss)
            }
            SecretSearch::Exhausted => Err(AttemptFailure::SecretSearchExhausted),
        }
    }

    fn pop_last_dead_end(&mut self) -> Result<usize, AttemptFailure> {
        self.dead_ends
            .pop()
            .ok_or(AttemptFailure::NotEnoughDeadEnds { found: 0 })
    }

    fn pop_random_dead_end(&mut self) -> Result<usize, AttemptFailure> {
        let slot = index_below(&mut *self.rng, self.dead_ends.len())
            .ok_or(AttemptFailure::NotEnoughDeadEnds { found: 0 })?;
        Ok(self.dead_ends.remove(slot))
    }

    fn validate(&self, boss: usize, min_rooms: usize) -> Result<(), AttemptFailure> {
        if self.room_count < min_rooms {
            return Err(AttemptFailure::TooFewRooms {
                rooms: self.room_count,
                min_rooms,
            });
        }
        if grid::are_adjacent(boss, START_ROOM_INDEX) {
            return Err(AttemptFailure::BossNextToStart { boss });
        }
        Ok(())
    }

    fn finish(self) -> Floorplan {
        Floorplan::from_cells(self.cells)
    }
}

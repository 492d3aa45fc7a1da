//! Generated floor layout

use serde::{Deserialize, Serialize};

use crate::error::FloorplanError;
use crate::grid::{self, GRID_LEN};
use crate::room::RoomType;

/// Number of rooms among the four neighbors of `index`
///
/// A cell reached by the flood fill always counts at least 1: the room it
/// was reached from.
pub(crate) fn count_occupied_neighbors(cells: &[RoomType], index: usize) -> usize {
    grid::neighbors(index)
        .filter(|&n| cells.get(n).is_some_and(|room| room.is_room()))
        .count()
}

/// Cell indices of the four special rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialRooms {
    pub boss: usize,
    pub reward: usize,
    pub shop: usize,
    pub secret: usize,
}

/// An immutable floor layout of exactly [`GRID_LEN`] cells, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<RoomType>", try_from = "Vec<RoomType>")]
pub struct Floorplan {
    cells: Vec<RoomType>,
}

impl Floorplan {
    pub(crate) fn from_cells(cells: [RoomType; GRID_LEN]) -> Self {
        Self {
            cells: cells.to_vec(),
        }
    }

    /// Build a floorplan from raw room-type codes
    pub fn from_codes(codes: &[u8]) -> Result<Self, FloorplanError> {
        let cells = codes
            .iter()
            .map(|&code| RoomType::try_from(code))
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(cells)
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[RoomType] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<RoomType> {
        self.cells.get(index).copied()
    }

    /// Room type at `(x, y)`
    pub fn at(&self, x: usize, y: usize) -> Option<RoomType> {
        grid::index_of(x, y).and_then(|i| self.get(i))
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some_and(RoomType::is_room)
    }

    /// Room-type codes, row-major
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|room| room.code()).collect()
    }

    /// `(index, room type)` for every cell
    pub fn iter(&self) -> impl Iterator<Item = (usize, RoomType)> + '_ {
        self.cells.iter().copied().enumerate()
    }

    /// Number of non-empty cells, start room included
    pub fn room_count(&self) -> usize {
        self.cells.iter().filter(|room| room.is_room()).count()
    }

    /// Number of cells holding `room_type`
    pub fn count(&self, room_type: RoomType) -> usize {
        self.cells.iter().filter(|&&room| room == room_type).count()
    }

    /// First cell holding `room_type`
    pub fn find(&self, room_type: RoomType) -> Option<usize> {
        self.cells.iter().position(|&room| room == room_type)
    }

    /// Where the special rooms are, if all four are present
    pub fn special_rooms(&self) -> Option<SpecialRooms> {
        Some(SpecialRooms {
            boss: self.find(RoomType::Boss)?,
            reward: self.find(RoomType::Reward)?,
            shop: self.find(RoomType::Shop)?,
            secret: self.find(RoomType::Secret)?,
        })
    }

    /// Neighbor count of `index`
    pub fn occupied_neighbors(&self, index: usize) -> usize {
        count_occupied_neighbors(&self.cells, index)
    }
}

impl From<Floorplan> for Vec<RoomType> {
    fn from(floorplan: Floorplan) -> Self {
        floorplan.cells
    }
}

impl TryFrom<Vec<RoomType>> for Floorplan {
    type Error = FloorplanError;

    fn try_from(cells: Vec<RoomType>) -> Result<Self, Self::Error> {
        if cells.len() != GRID_LEN {
            return Err(FloorplanError::GridLength {
                expected: GRID_LEN,
                found: cells.len(),
            });
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::START_ROOM_INDEX;

    fn sample() -> Floorplan {
        let mut cells = [RoomType::Empty; GRID_LEN];
        cells[START_ROOM_INDEX] = RoomType::Normal;
        cells[44] = RoomType::Normal;
        cells[43] = RoomType::Boss;
        cells[46] = RoomType::Reward;
        cells[35] = RoomType::Shop;
        cells[34] = RoomType::Secret;
        Floorplan::from_cells(cells)
    }

    #[test]
    fn test_queries() {
        let floor = sample();
        assert_eq!(floor.cells().len(), GRID_LEN);
        assert_eq!(floor.room_count(), 6);
        assert_eq!(floor.count(RoomType::Normal), 2);
        assert_eq!(floor.get(START_ROOM_INDEX), Some(RoomType::Normal));
        assert_eq!(floor.at(3, 4), Some(RoomType::Boss));
        assert_eq!(floor.at(10, 0), None);
        assert_eq!(floor.get(GRID_LEN), None);
        assert!(floor.is_occupied(34));
        assert!(!floor.is_occupied(0));
    }

    #[test]
    fn test_special_rooms() {
        let specials = sample().special_rooms().unwrap();
        assert_eq!(
            specials,
            SpecialRooms {
                boss: 43,
                reward: 46,
                shop: 35,
                secret: 34,
            }
        );

        let empty = Floorplan::from_cells([RoomType::Empty; GRID_LEN]);
        assert_eq!(empty.special_rooms(), None);
    }

    #[test]
    fn test_occupied_neighbors() {
        let floor = sample();
        // 44 touches 45, 43 and 34
        assert_eq!(floor.occupied_neighbors(44), 3);
        assert_eq!(floor.occupied_neighbors(START_ROOM_INDEX), 3);
        assert_eq!(floor.occupied_neighbors(0), 0);
        // Column 9 does not see column 0 of the next row
        assert_eq!(floor.occupied_neighbors(39), 0);
    }

    #[test]
    fn test_codes_roundtrip() {
        let floor = sample();
        let codes = floor.codes();
        assert_eq!(codes.len(), GRID_LEN);
        assert_eq!(codes[43], 2);
        assert_eq!(Floorplan::from_codes(&codes).unwrap(), floor);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            Floorplan::from_codes(&[0; 99]),
            Err(FloorplanError::GridLength {
                expected: GRID_LEN,
                found: 99,
            })
        );

        let mut codes = vec![0u8; GRID_LEN];
        codes[7] = 8;
        assert_eq!(
            Floorplan::from_codes(&codes),
            Err(FloorplanError::InvalidRoomCode(8))
        );
    }

    #[test]
    fn test_json_is_flat_code_array() {
        let floor = sample();
        let json = serde_json::to_string(&floor).unwrap();
        assert!(json.starts_with('['));
        let codes: Vec<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(codes, floor.codes());

        let parsed: Floorplan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, floor);
        assert!(serde_json::from_str::<Floorplan>("[0, 1, 2]").is_err());
    }
}

//! Room types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::error::FloorplanError;

/// What occupies a grid cell
///
/// Serialized as its integer code, so a serialized floorplan is a flat
/// array of codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum RoomType {
    /// Impassable, unused cell
    #[default]
    Empty = 0,
    Normal = 1,
    Boss = 2,
    Reward = 3,
    Shop = 4,
    Secret = 5,
}

impl RoomType {
    /// The special rooms every floor carries exactly one of
    pub const SPECIALS: [RoomType; 4] = [
        RoomType::Boss,
        RoomType::Reward,
        RoomType::Shop,
        RoomType::Secret,
    ];

    /// Integer code of this room type
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Room type for an integer code
    pub const fn from_code(code: u8) -> Option<RoomType> {
        match code {
            0 => Some(RoomType::Empty),
            1 => Some(RoomType::Normal),
            2 => Some(RoomType::Boss),
            3 => Some(RoomType::Reward),
            4 => Some(RoomType::Shop),
            5 => Some(RoomType::Secret),
            _ => None,
        }
    }

    /// Any type other than `Empty` is a room
    pub const fn is_room(self) -> bool {
        !matches!(self, RoomType::Empty)
    }
}

impl From<RoomType> for u8 {
    fn from(room: RoomType) -> u8 {
        room.code()
    }
}

impl TryFrom<u8> for RoomType {
    type Error = FloorplanError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        RoomType::from_code(code).ok_or(FloorplanError::InvalidRoomCode(code))
    }
}

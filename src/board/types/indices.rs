//! Type-safe index into a position's thirteen piece bitboards.
//!
//! Slots 0-5 are the white Pawn..King bitboards, 6-11 the black ones, and
//! slot 12 marks the empty squares. Keeping this a newtype stops a bare
//! piece index (0-5) from being used where a colored slot is expected.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};

/// Number of piece bitboards in a position, including the empty-square one.
pub const NUM_SLOTS: usize = 13;

/// Index of one of the thirteen piece bitboards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSlot(u8);

impl PieceSlot {
    /// Slot holding every empty square
    pub const EMPTY: PieceSlot = PieceSlot(12);

    /// Slot for a piece of the given color
    #[inline]
    #[must_use]
    pub const fn of(color: Color, piece: Piece) -> Self {
        PieceSlot((color.index() * 6 + piece.index()) as u8)
    }

    /// Color and piece kind of this slot, `None` for the empty slot
    #[must_use]
    pub const fn occupant(self) -> Option<(Color, Piece)> {
        if self.0 >= 12 {
            return None;
        }
        let color = if self.0 < 6 { Color::White } else { Color::Black };
        Some((color, Piece::ALL[(self.0 % 6) as usize]))
    }

    /// Convert to usize for array indexing
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all thirteen slots, empty last
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn iter() -> impl Iterator<Item = PieceSlot> {
        (0..NUM_SLOTS as u8).map(PieceSlot)
    }
}

impl From<(Color, Piece)> for PieceSlot {
    fn from((color, piece): (Color, Piece)) -> Self {
        Self::of(color, piece)
    }
}

impl From<PieceSlot> for usize {
    fn from(slot: PieceSlot) -> usize {
        slot.as_usize()
    }
}

//! Attack tables for move generation.
//!
//! Leaper attacks (pawn, knight, king) and the slider relevant-occupancy
//! masks are compile-time constants. Bishop and rook attacks come from magic
//! bitboard tables built once on first use; call [`init`] to pay that cost up
//! front instead of on the first slider lookup.
//!
//! All lookups are O(1) and accept any occupancy: only the bits inside the
//! piece's relevant-occupancy mask affect the result.

#![allow(clippy::inline_always)] // Performance-critical hot path functions

mod magics;
mod tables;

pub use magics::{BISHOP_SHIFT, BISHOP_SQUARE_ENTRIES, ROOK_SHIFT, ROOK_SQUARE_ENTRIES};

use magics::{BISHOP_TABLE, ROOK_TABLE};
use tables::{BISHOP_MASKS, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, ROOK_MASKS};

use super::types::{Bitboard, Color, Square};

/// One of the eight compass directions a slider can move in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Rook directions
    pub const ROOK: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Bishop directions
    pub const BISHOP: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Shift every bit of `bb` one step in this direction, dropping bits that
    /// would leave the board.
    #[inline]
    #[must_use]
    pub const fn shift(self, bb: Bitboard) -> Bitboard {
        match self {
            Direction::North => bb.north(),
            Direction::South => bb.south(),
            Direction::East => bb.east(),
            Direction::West => bb.west(),
            Direction::NorthEast => bb.north_east(),
            Direction::NorthWest => bb.north_west(),
            Direction::SouthEast => bb.south_east(),
            Direction::SouthWest => bb.south_west(),
        }
    }
}

/// Squares attacked by a pawn of `color` standing on `sq`
#[inline(always)]
#[must_use]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

#[inline(always)]
#[must_use]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline(always)]
#[must_use]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Diagonal attacks from `sq`; the first blocker on each ray is included
#[inline]
#[must_use]
pub fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    BISHOP_TABLE.attack(sq.index(), occupancy)
}

/// Orthogonal attacks from `sq`; the first blocker on each ray is included
#[inline]
#[must_use]
pub fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    ROOK_TABLE.attack(sq.index(), occupancy)
}

#[inline]
#[must_use]
pub fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}

/// Squares whose occupancy can change a rook's attacks from `sq`.
///
/// Each ray stops one square short of the board edge, since a blocker on the
/// last square cannot shorten the ray.
#[inline]
#[must_use]
pub fn rook_relevant_occupancy(sq: Square) -> Bitboard {
    ROOK_MASKS[sq.index()]
}

/// Squares whose occupancy can change a bishop's attacks from `sq`.
#[inline]
#[must_use]
pub fn bishop_relevant_occupancy(sq: Square) -> Bitboard {
    BISHOP_MASKS[sq.index()]
}

/// Attacks computed by walking each ray until the edge or a blocker.
///
/// This is the reference the magic tables are built from. It is far slower
/// than the table lookups and is exposed for verification only.
#[must_use]
pub fn sliding_attacks_slow(sq: Square, occupancy: Bitboard, directions: &[Direction]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &dir in directions {
        let mut ray = dir.shift(sq.bitboard());
        while ray.is_nonempty() {
            attacks |= ray;
            if (ray & occupancy).is_nonempty() {
                break;
            }
            ray = dir.shift(ray);
        }
    }
    attacks
}

/// Build the slider tables now rather than on first lookup.
pub fn init() {
    once_cell::sync::Lazy::force(&ROOK_TABLE);
    once_cell::sync::Lazy::force(&BISHOP_TABLE);
}

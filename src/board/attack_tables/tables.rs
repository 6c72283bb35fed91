//! Precomputed attack tables for leaper pieces (knights, kings, pawns) and
//! the relevant-occupancy masks of the sliders.
//!
//! Everything here is evaluated at compile time from the directional shifts
//! on `Bitboard`, which already drop squares that would wrap around a file.

use super::super::types::{Bitboard, Color};
use super::Direction;

const fn knight_from(bb: Bitboard) -> Bitboard {
    let north = bb.north();
    let south = bb.south();
    let east = bb.east();
    let west = bb.west();
    north
        .north_east()
        .or(north.north_west())
        .or(south.south_east())
        .or(south.south_west())
        .or(east.north_east())
        .or(east.south_east())
        .or(west.north_west())
        .or(west.south_west())
}

const fn king_from(bb: Bitboard) -> Bitboard {
    bb.north()
        .or(bb.south())
        .or(bb.east())
        .or(bb.west())
        .or(bb.north_east())
        .or(bb.north_west())
        .or(bb.south_east())
        .or(bb.south_west())
}

pub(crate) const KNIGHT_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        attacks[sq] = knight_from(Bitboard(1u64 << sq));
        sq += 1;
    }
    attacks
};

pub(crate) const KING_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        attacks[sq] = king_from(Bitboard(1u64 << sq));
        sq += 1;
    }
    attacks
};

/// `PAWN_ATTACKS[color][square]`: squares a pawn of `color` on `square` attacks
pub(crate) const PAWN_ATTACKS: [[Bitboard; 64]; 2] = {
    let mut attacks = [[Bitboard::EMPTY; 64]; 2];
    let white = Color::White.index();
    let black = Color::Black.index();
    let mut sq = 0;
    while sq < 64 {
        let bb = Bitboard(1u64 << sq);
        attacks[white][sq] = bb.north_west().or(bb.north_east());
        attacks[black][sq] = bb.south_west().or(bb.south_east());
        sq += 1;
    }
    attacks
};

/// Walk each direction from `sq`, stopping one square short of the edge.
const fn relevant_mask(sq: usize, directions: &[Direction]) -> Bitboard {
    let mut mask = 0u64;
    let mut d = 0;
    while d < directions.len() {
        let dir = directions[d];
        let mut ray = dir.shift(Bitboard(1u64 << sq));
        // Stop when the next step would fall off the board.
        while dir.shift(ray).0 != 0 {
            mask |= ray.0;
            ray = dir.shift(ray);
        }
        d += 1;
    }
    Bitboard(mask)
}

pub(crate) const ROOK_MASKS: [Bitboard; 64] = {
    let mut masks = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        masks[sq] = relevant_mask(sq, &Direction::ROOK);
        sq += 1;
    }
    masks
};

pub(crate) const BISHOP_MASKS: [Bitboard; 64] = {
    let mut masks = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        masks[sq] = relevant_mask(sq, &Direction::BISHOP);
        sq += 1;
    }
    masks
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaper_popcounts() {
        // corners, edges and centre
        assert_eq!(KNIGHT_ATTACKS[0].popcount(), 2);
        assert_eq!(KNIGHT_ATTACKS[27].popcount(), 8);
        assert_eq!(KING_ATTACKS[0].popcount(), 3);
        assert_eq!(KING_ATTACKS[8].popcount(), 5);
        assert_eq!(KING_ATTACKS[27].popcount(), 8);
    }

    #[test]
    fn test_mask_sizes() {
        let rook_max = ROOK_MASKS.iter().map(|m| m.popcount()).max();
        let bishop_max = BISHOP_MASKS.iter().map(|m| m.popcount()).max();
        assert_eq!(rook_max, Some(12));
        assert_eq!(bishop_max, Some(9));
        // rook masks never include the rook's own square
        for (sq, mask) in ROOK_MASKS.iter().enumerate() {
            assert_eq!(mask.0 & (1u64 << sq), 0);
        }
    }

    #[test]
    fn test_pawn_attacks_are_mirrored() {
        for sq in 8..56 {
            let white = PAWN_ATTACKS[0][sq];
            let black = PAWN_ATTACKS[1][sq];
            assert_eq!(white.popcount(), black.popcount());
            assert_eq!(white.0 >> 16, black.0);
        }
    }
}

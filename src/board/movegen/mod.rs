//! Strictly legal move generation.
//!
//! Every generator appends only legal moves: each candidate is checked by
//! asking whether our king would be attacked in the position after the move,
//! using a hypothetical occupancy rather than making the move on the board.
//! Generators take any `MoveSink` and return how many moves they appended.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use super::{Bitboard, Color, Move, MoveList, MoveSink, Piece, Position, Square};

impl Position {
    /// All legal moves for the side to move.
    ///
    /// The order of the returned moves carries no meaning.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_moves_into(&mut moves);
        moves
    }

    /// Append all legal moves for the side to move to `sink`, returning how
    /// many were appended.
    pub fn generate_moves_into<S: MoveSink>(&self, sink: &mut S) -> usize {
        self.generate_pawn_moves(sink)
            + self.generate_knight_moves(sink)
            + self.generate_bishop_moves(sink)
            + self.generate_rook_moves(sink)
            + self.generate_queen_moves(sink)
            + self.generate_king_moves(sink)
    }

    /// True if any square of `targets` is attacked by a piece of color `by`.
    ///
    /// The attacking king counts, so squares next to it are attacked.
    #[must_use]
    pub fn is_square_attacked(&self, targets: Bitboard, by: Color) -> bool {
        let occupied = self.occupied();
        targets
            .iter()
            .any(|sq| self.attackers_of(sq, by, occupied, Bitboard::ALL).is_nonempty())
    }

    /// True if `color`'s king is attacked
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.pieces(color, Piece::King), color.opponent())
    }

    /// True if the side to move has no legal moves and is in check.
    ///
    /// `moves` must be the legal moves of this position.
    #[must_use]
    pub fn is_checkmate(&self, moves: &[Move]) -> bool {
        moves.is_empty() && self.is_in_check(self.turn)
    }

    /// True if the side to move has no legal moves and is not in check.
    #[must_use]
    pub fn is_stalemate(&self, moves: &[Move]) -> bool {
        moves.is_empty() && !self.is_in_check(self.turn)
    }

    /// Pieces of color `by` attacking `sq` when the board is occupied by
    /// `occupied`. Only pieces inside `live` are considered.
    fn attackers_of(&self, sq: Square, by: Color, occupied: Bitboard, live: Bitboard) -> Bitboard {
        let queens = self.pieces(by, Piece::Queen);
        let rooks = self.pieces(by, Piece::Rook) | queens;
        let bishops = self.pieces(by, Piece::Bishop) | queens;

        let attackers = (rook_attacks(sq, occupied) & rooks)
            | (bishop_attacks(sq, occupied) & bishops)
            | (knight_attacks(sq) & self.pieces(by, Piece::Knight))
            | (pawn_attacks(sq, by.opponent()) & self.pieces(by, Piece::Pawn))
            | (king_attacks(sq) & self.pieces(by, Piece::King));
        attackers & live
    }

    /// Whether the side to move keeps its king safe after moving the piece on
    /// `from` to `to` and removing the enemy piece on `captured` (the en
    /// passant victim; pass `Bitboard::EMPTY` otherwise).
    ///
    /// A piece standing on `to` is treated as captured too.
    pub(crate) fn is_legal_after(&self, from: Square, to: Square, captured: Bitboard) -> bool {
        let us = self.turn;
        let from_bb = from.bitboard();
        let to_bb = to.bitboard();
        let occupied = (self.occupied() & !from_bb & !captured) | to_bb;

        let king = self.pieces(us, Piece::King);
        let king_sq = if (king & from_bb).is_nonempty() {
            to
        } else {
            king.to_square()
        };

        let live = !(to_bb | captured);
        self.attackers_of(king_sq, us.opponent(), occupied, live).is_empty()
    }

    /// True if removing our piece on `sq` would let an enemy slider attack
    /// our king that does not attack it now.
    pub(crate) fn is_pinned(&self, sq: Square) -> bool {
        let us = self.turn;
        let them = us.opponent();
        let king = self.pieces(us, Piece::King);
        let Some(king_sq) = king.lsb_square() else {
            return false;
        };

        let queens = self.pieces(them, Piece::Queen);
        let rooks = self.pieces(them, Piece::Rook) | queens;
        let bishops = self.pieces(them, Piece::Bishop) | queens;
        let slider_attackers = |occupied: Bitboard| {
            (rook_attacks(king_sq, occupied) & rooks) | (bishop_attacks(king_sq, occupied) & bishops)
        };

        let occupied = self.occupied();
        let exposed = slider_attackers(occupied & !sq.bitboard());
        (exposed & !slider_attackers(occupied)).is_nonempty()
    }
}

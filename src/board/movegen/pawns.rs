use super::super::attack_tables::pawn_attacks;
use super::super::{Bitboard, Color, Move, MoveSink, Piece, Position, Square, PROMOTION_PIECES};

/// One step toward the promotion rank of `color`
#[inline]
const fn forward(bb: Bitboard, color: Color) -> Bitboard {
    match color {
        Color::White => bb.north(),
        Color::Black => bb.south(),
    }
}

/// One step back toward `color`'s own side
#[inline]
const fn backward(bb: Bitboard, color: Color) -> Bitboard {
    forward(bb, color.opponent())
}

impl Position {
    /// Legal pawn moves: single and double pushes, captures, en passant and
    /// promotions (knight, bishop, rook, queen in that order).
    pub fn generate_pawn_moves<S: MoveSink>(&self, sink: &mut S) -> usize {
        let us = self.turn;
        let them = us.opponent();
        let empty = self.empty_squares();
        let enemies = self.occupancy(them);
        let mut count = 0;

        for from in self.pieces(us, Piece::Pawn) {
            let single = forward(from.bitboard(), us) & empty;
            if let Some(to) = single.lsb_square() {
                count += self.push_pawn_move(sink, from, to);

                if from.rank() == us.pawn_start_rank() {
                    if let Some(to) = (forward(single, us) & empty).lsb_square() {
                        count += self.push_pawn_move(sink, from, to);
                    }
                }
            }

            let attacks = pawn_attacks(from, us);
            for to in attacks & enemies {
                count += self.push_pawn_move(sink, from, to);
            }

            if (attacks & self.en_passant).is_nonempty() {
                count += self.push_en_passant(sink, from);
            }
        }

        count
    }

    /// Append a push or capture to `to` if legal, expanding it into the four
    /// promotions on the last rank.
    fn push_pawn_move<S: MoveSink>(&self, sink: &mut S, from: Square, to: Square) -> usize {
        if !self.is_legal_after(from, to, Bitboard::EMPTY) {
            return 0;
        }
        if to.rank() == self.turn.promotion_rank() {
            for piece in PROMOTION_PIECES {
                sink.push_move(Move::promotion(from, to, piece));
            }
            PROMOTION_PIECES.len()
        } else {
            sink.push_move(Move::new(from, to));
            1
        }
    }

    fn push_en_passant<S: MoveSink>(&self, sink: &mut S, from: Square) -> usize {
        let us = self.turn;
        let target = self.en_passant.to_square();
        let victim = backward(self.en_passant, us);
        if (victim & self.pieces(us.opponent(), Piece::Pawn)).is_empty() {
            return 0;
        }
        // Both the capturing pawn and the victim leave their squares, which
        // can uncover a rank attack on the king.
        if !self.is_legal_after(from, target, victim) {
            return 0;
        }
        sink.push_move(Move::en_passant(from, target));
        1
    }
}

use super::super::attack_tables::knight_attacks;
use super::super::{Bitboard, Move, MoveSink, Piece, Position};

impl Position {
    /// Legal knight moves.
    ///
    /// A pinned knight can never stay on the pin line, so it is skipped
    /// outright; every other destination is checked for king safety, which
    /// also filters out moves that fail to answer a check.
    pub fn generate_knight_moves<S: MoveSink>(&self, sink: &mut S) -> usize {
        let us = self.turn;
        let own = self.occupancy(us);
        let mut count = 0;

        for from in self.pieces(us, Piece::Knight) {
            if self.is_pinned(from) {
                continue;
            }
            for to in knight_attacks(from) & !own {
                if self.is_legal_after(from, to, Bitboard::EMPTY) {
                    sink.push_move(Move::new(from, to));
                    count += 1;
                }
            }
        }

        count
    }
}

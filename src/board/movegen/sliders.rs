use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Move, MoveSink, Piece, Position, Square};

impl Position {
    /// Legal bishop moves
    pub fn generate_bishop_moves<S: MoveSink>(&self, sink: &mut S) -> usize {
        self.generate_slider_moves(sink, Piece::Bishop, bishop_attacks)
    }

    /// Legal rook moves
    pub fn generate_rook_moves<S: MoveSink>(&self, sink: &mut S) -> usize {
        self.generate_slider_moves(sink, Piece::Rook, rook_attacks)
    }

    /// Legal queen moves
    pub fn generate_queen_moves<S: MoveSink>(&self, sink: &mut S) -> usize {
        self.generate_slider_moves(sink, Piece::Queen, queen_attacks)
    }

    fn generate_slider_moves<S: MoveSink>(
        &self,
        sink: &mut S,
        piece: Piece,
        attacks: fn(Square, Bitboard) -> Bitboard,
    ) -> usize {
        let us = self.turn;
        let own = self.occupancy(us);
        let occupied = self.occupied();
        let mut count = 0;

        for from in self.pieces(us, piece) {
            for to in attacks(from, occupied) & !own {
                if self.is_legal_after(from, to, Bitboard::EMPTY) {
                    sink.push_move(Move::new(from, to));
                    count += 1;
                }
            }
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Move, MoveList, Position, Square};

    #[test]
    fn test_open_board_counts() {
        let position = Position::from_fen("4k3/8/8/8/3Q4/8/8/R3K2B w - - 0 1");
        let mut moves = MoveList::new();
        // c3 and b2 only on the long diagonal: the a1 rook is ours
        assert_eq!(position.generate_queen_moves(&mut moves), 26);
        assert_eq!(position.generate_bishop_moves(&mut moves), 7);
        // a1 rook: the a-file plus b1, c1, d1
        assert_eq!(position.generate_rook_moves(&mut moves), 10);
        assert_eq!(moves.len(), 43);
    }

    #[test]
    fn test_pinned_rook_slides_along_pin() {
        let position = Position::from_fen("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1");
        let mut moves = MoveList::new();
        position.generate_rook_moves(&mut moves);
        assert_eq!(moves.len(), 6);
        assert!(moves.contains(Move::new(Square::E2, Square::E8)));
        assert!(!moves.contains(Move::new(Square::E2, Square::D2)));
    }

    #[test]
    fn test_pinned_bishop_cannot_move_off_diagonal() {
        let position = Position::from_fen("4k3/8/8/8/b7/8/2B5/3K4 w - - 0 1");
        let mut moves = MoveList::new();
        position.generate_bishop_moves(&mut moves);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(Move::new(Square::C2, Square::A4)));
        assert!(moves.contains(Move::new(Square::C2, Square::B3)));
        // pinned along the rank, so no diagonal move survives
        let position = Position::from_fen("4k3/8/8/8/8/8/8/r2BK3 w - - 0 1");
        let mut moves = MoveList::new();
        position.generate_bishop_moves(&mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_slider_cannot_answer_check() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/r3K2R w - - 0 1");
        let mut moves = MoveList::new();
        position.generate_rook_moves(&mut moves);
        // the king stands between the h1 rook and the checking rook
        assert!(moves.is_empty());
    }
}

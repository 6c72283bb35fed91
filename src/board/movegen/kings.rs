use super::super::attack_tables::king_attacks;
use super::super::{Bitboard, CastleRight, Move, MoveSink, Piece, Position};

impl Position {
    /// Legal king steps followed by legal castles.
    pub fn generate_king_moves<S: MoveSink>(&self, sink: &mut S) -> usize {
        let us = self.turn;
        let Some(from) = self.pieces(us, Piece::King).lsb_square() else {
            return 0;
        };

        let enemy_zone = self
            .pieces(us.opponent(), Piece::King)
            .lsb_square()
            .map_or(Bitboard::EMPTY, king_attacks);
        let targets = king_attacks(from) & !self.occupancy(us) & !enemy_zone;

        let mut count = 0;
        for to in targets {
            // The king is moved off `from` in the occupancy, so a slider
            // checking along the line still sees the squares behind it.
            if self.is_legal_after(from, to, Bitboard::EMPTY) {
                sink.push_move(Move::new(from, to));
                count += 1;
            }
        }

        count + self.generate_castling_moves(sink)
    }

    fn generate_castling_moves<S: MoveSink>(&self, sink: &mut S) -> usize {
        let us = self.turn;
        let them = us.opponent();
        let occupied = self.occupied();
        let mut count = 0;

        for right in CastleRight::for_color(us) {
            if !self.castling.contains(right) {
                continue;
            }
            let info = right.info();
            if !self.pieces(us, Piece::King).contains(info.king_from)
                || !self.pieces(us, Piece::Rook).contains(info.rook_from)
            {
                continue;
            }
            if (occupied & info.needed_empty).is_nonempty() {
                continue;
            }
            if self.is_square_attacked(info.needed_safe, them) {
                continue;
            }
            sink.push_move(Move::castling(info.king_from, info.king_to));
            count += 1;
        }

        count
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Move, MoveList, Position, Square};

    fn king_moves(fen: &str) -> MoveList {
        let position = Position::from_fen(fen);
        let mut moves = MoveList::new();
        let count = position.generate_king_moves(&mut moves);
        assert_eq!(count, moves.len());
        moves
    }

    #[test]
    fn test_king_must_capture_checking_queen() {
        let moves = king_moves("r3k2r/4Q3/8/8/8/8/PPPPPPPP/R3K2R b Kkq - 0 1");
        assert_eq!(moves.as_slice(), &[Move::new(Square::E8, Square::E7)]);
    }

    #[test]
    fn test_both_castles_available() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(Move::castling(Square::E1, Square::G1)));
        assert!(moves.contains(Move::castling(Square::E1, Square::C1)));

        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert!(moves.contains(Move::castling(Square::E8, Square::G8)));
        assert!(moves.contains(Move::castling(Square::E8, Square::C8)));
    }

    #[test]
    fn test_no_castling_through_attacked_square() {
        // The a6 bishop covers f1 and e2
        let moves = king_moves("r3k2r/8/b7/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(!moves.contains(Move::castling(Square::E1, Square::G1)));
        assert!(moves.contains(Move::castling(Square::E1, Square::C1)));
        assert!(!moves.contains(Move::new(Square::E1, Square::E2)));
        assert!(!moves.contains(Move::new(Square::E1, Square::F1)));
    }

    #[test]
    fn test_queen_side_only_needs_b_file_empty() {
        // b1 is attacked by the b8 rook but the king never crosses it
        let moves = king_moves("1r2k2r/8/8/8/8/8/8/R3K2R w Q - 0 1");
        assert!(moves.contains(Move::castling(Square::E1, Square::C1)));

        let moves = king_moves("r3k2r/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
        assert!(!moves.contains(Move::castling(Square::E1, Square::C1)));
        assert!(moves.contains(Move::castling(Square::E1, Square::G1)));
    }

    #[test]
    fn test_rights_without_pieces_do_not_castle() {
        let moves = king_moves("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1");
        assert_eq!(moves.len(), 5);
        assert!(moves.iter().all(|mv| !mv.is_castling()));
    }

    #[test]
    fn test_kings_keep_their_distance() {
        let moves = king_moves("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
        assert_eq!(moves.len(), 5);
        assert!(!moves.contains(Move::new(Square::D3, Square::D4)));
    }

    #[test]
    fn test_king_cannot_retreat_along_check_ray() {
        let moves = king_moves("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert_eq!(moves.len(), 3);
        assert!(!moves.contains(Move::new(Square::E1, Square::F1)));
        assert!(!moves.contains(Move::new(Square::E1, Square::D1)));
    }
}

//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `move_counts.rs` - Legal move counts of well known test positions
//! - `edge_cases.rs` - Special positions and rules corner cases
//! - `perft.rs` - Leaf node counts of the same positions to a few plies
//! - `proptest.rs` - Property-based tests over random positions
//!
//! The helpers below give the suites an independent legality oracle: a move
//! is played on a copy of the position with the plain placement mutators and
//! the mover's king must not be attacked afterwards.

mod move_counts;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{CastleRight, Color, Move, MoveType, Piece, Position, Square, CASTLE_INFO};

/// The position after `mv`, built square by square. Placement, castling
/// rights, the en passant target and side to move are updated; the clocks
/// are left alone.
pub(super) fn play(position: &Position, mv: Move) -> Position {
    let mut next = position.clone();
    let us = position.turn();
    let (color, piece) = next
        .clear_square(mv.origin())
        .expect("move origin must hold a piece");
    assert_eq!(color, us, "{mv} moves an enemy piece");

    match mv.move_type() {
        MoveType::Normal => next.set_piece(mv.destination(), us, piece),
        MoveType::Promotion => {
            let promoted = mv.promotion_piece().expect("promotion carries a piece");
            next.set_piece(mv.destination(), us, promoted);
        }
        MoveType::EnPassant => {
            let victim = Square::new(mv.origin().rank(), mv.destination().file())
                .expect("victim square is on the board");
            assert_eq!(next.clear_square(victim), Some((us.opponent(), Piece::Pawn)));
            next.set_piece(mv.destination(), us, Piece::Pawn);
        }
        MoveType::Castling => {
            let info = CASTLE_INFO
                .iter()
                .find(|info| info.king_from == mv.origin() && info.king_to == mv.destination())
                .expect("castle matches a known geometry");
            assert_eq!(next.clear_square(info.rook_from), Some((us, Piece::Rook)));
            next.set_piece(info.rook_to, us, Piece::Rook);
            next.set_piece(info.king_to, us, Piece::King);
        }
    }

    // Any move touching a king or rook home square spends the right
    let mut rights = next.castling_rights();
    for right in CastleRight::ALL {
        let info = right.info();
        let touched = [info.king_from, info.rook_from];
        if touched.contains(&mv.origin()) || touched.contains(&mv.destination()) {
            rights.remove(right);
        }
    }
    next.set_castling_rights(rights);

    let (from, to) = (mv.origin(), mv.destination());
    let passed = (piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2)
        .then(|| Square::new((from.rank() + to.rank()) / 2, from.file()))
        .flatten();
    next.set_en_passant(passed);
    next.set_turn(us.opponent());
    next
}

/// True if playing `mv` leaves the mover's own king safe.
pub(super) fn keeps_king_safe(position: &Position, mv: Move) -> bool {
    let us = position.turn();
    !play(position, mv).is_in_check(us)
}

const MEN: [Piece; 5] = [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

/// A random position with one king per side, up to twenty other pieces, no
/// pawns on the back ranks, and the side not to move out of check. Castling
/// rights are granted at random where king and rook stand at home, and an en
/// passant target is set now and then behind a pawn that could have just
/// made a double push.
pub(super) fn random_position(rng: &mut StdRng) -> Position {
    loop {
        let mut squares: Vec<Square> = Square::all().collect();
        squares.shuffle(rng);

        let mut position = Position::empty();
        position.set_piece(squares[0], Color::White, Piece::King);
        position.set_piece(squares[1], Color::Black, Piece::King);

        let extra = rng.gen_range(0..=20);
        for &sq in &squares[2..2 + extra] {
            let piece = MEN[rng.gen_range(0..MEN.len())];
            if piece == Piece::Pawn && (sq.rank() == 0 || sq.rank() == 7) {
                continue;
            }
            let color = if rng.gen_bool(0.5) { Color::White } else { Color::Black };
            position.set_piece(sq, color, piece);
        }

        let turn = if rng.gen_bool(0.5) { Color::White } else { Color::Black };
        position.set_turn(turn);

        let mut rights = position.castling_rights();
        for right in CastleRight::ALL {
            let info = right.info();
            let color = right.color();
            if position.piece_at(info.king_from) == Some((color, Piece::King))
                && position.piece_at(info.rook_from) == Some((color, Piece::Rook))
                && rng.gen_bool(0.7)
            {
                rights.insert(right);
            }
        }
        position.set_castling_rights(rights);

        if rng.gen_bool(0.4) {
            position.set_en_passant(double_push_target(&position));
        }

        if !position.is_in_check(turn.opponent()) {
            return position;
        }
    }
}

/// The square behind an enemy pawn that could have just advanced two ranks.
fn double_push_target(position: &Position) -> Option<Square> {
    let them = position.turn().opponent();
    let (pawn_rank, passed_rank, start_rank) = match them {
        Color::White => (3, 2, 1),
        Color::Black => (4, 5, 6),
    };
    position
        .pieces(them, Piece::Pawn)
        .iter()
        .filter(|sq| sq.rank() == pawn_rank)
        .find_map(|sq| {
            let passed = Square::new(passed_rank, sq.file())?;
            let start = Square::new(start_rank, sq.file())?;
            (position.piece_at(passed).is_none() && position.piece_at(start).is_none())
                .then_some(passed)
        })
}

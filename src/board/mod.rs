//! Chess position representation and legal move generation.
//!
//! Positions are held as bitboards; sliding attacks come from magic
//! bitboard tables built once on first use. Move generation is strictly
//! legal, covering castling, en passant and promotions.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Color, Position};
//!
//! let position = Position::new();
//! let moves = position.generate_moves();
//! assert_eq!(moves.len(), 20);
//! assert!(!position.is_in_check(Color::White));
//! ```

mod attack_tables;
mod builder;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod fen;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

/// Attack set queries for single pieces, backed by the precomputed tables.
pub mod attacks {
    pub use super::attack_tables::{
        bishop_attacks, bishop_relevant_occupancy, init, king_attacks, knight_attacks,
        pawn_attacks, queen_attacks, rook_attacks, rook_relevant_occupancy,
        sliding_attacks_slow, Direction, BISHOP_SHIFT, BISHOP_SQUARE_ENTRIES, ROOK_SHIFT,
        ROOK_SQUARE_ENTRIES,
    };
}

pub use builder::PositionBuilder;
pub use error::{FenError, SquareError};
pub use state::Position;
pub use types::{
    Bitboard, BitboardIter, CastleInfo, CastleRight, CastlingRights, Color, Move, MoveList,
    MoveListIntoIter, MoveSink, MoveType, Piece, PieceSlot, Square, CASTLE_INFO, MAX_MOVES,
    NUM_SLOTS,
};

pub(crate) use types::PROMOTION_PIECES;

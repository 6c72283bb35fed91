//! Legal chess move generation on bitboards.
//!
//! The `board` module holds the position type, FEN loading and the move
//! generator; the most used types are re-exported here.

#[macro_use]
mod macros;

pub mod board;

pub use board::{
    attacks, Bitboard, CastleRight, CastlingRights, Color, FenError, Move, MoveList, MoveSink,
    MoveType, Piece, Position, PositionBuilder, Square,
};

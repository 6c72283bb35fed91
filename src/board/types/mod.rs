//! Core chess types.
//!
//! This module contains the value types the position and move generator are
//! built from:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - compact board square representation (u8)
//! - `Bitboard` - 64-bit board representation with directional shifts
//! - `PieceSlot` - index into the thirteen position bitboards
//! - `Move`, `MoveList` and `MoveSink` - move representation and collection
//! - `CastlingRights`, `CastleRight` and `CastleInfo` - castling state and geometry

mod bitboard;
mod castling;
mod indices;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleInfo, CastleRight, CastlingRights, CASTLE_INFO};
pub use indices::{PieceSlot, NUM_SLOTS};
pub use moves::{Move, MoveList, MoveListIntoIter, MoveSink, MoveType, MAX_MOVES};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;

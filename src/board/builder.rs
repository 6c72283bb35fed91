//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_movegen::board::{CastleRight, Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::H1, Color::White, Piece::Rook)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .castle(CastleRight::WhiteKingSide)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.generate_moves().len(), 15);
//! ```

use super::{CastleRight, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position`s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmoves: u32,
    fullmoves: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmoves: 0,
            fullmoves: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        let pieces = Square::all()
            .filter_map(|sq| start.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
            .collect();
        PositionBuilder {
            pieces,
            castling: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Replace the castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Grant a single castling right.
    #[must_use]
    pub const fn castle(mut self, right: CastleRight) -> Self {
        self.castling = self.castling.with(right);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant = None;
        self
    }

    #[must_use]
    pub const fn halfmoves(mut self, clock: u32) -> Self {
        self.halfmoves = clock;
        self
    }

    #[must_use]
    pub const fn fullmoves(mut self, number: u32) -> Self {
        self.fullmoves = number;
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();
        for (square, color, piece) in self.pieces {
            position.set_piece(square, color, piece);
        }
        position.turn = self.side_to_move;
        position.castling = self.castling;
        position.set_en_passant(self.en_passant);
        position.halfmoves = self.halfmoves;
        position.fullmoves = self.fullmoves;
        debug_assert!(position.is_consistent());
        position
    }
}

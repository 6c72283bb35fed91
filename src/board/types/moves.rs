//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::Piece;
use super::square::Square;

const FROM_MASK: u16 = 0x3F;
const TO_SHIFT: u16 = 6;
const PROMO_SHIFT: u16 = 12;
const TYPE_SHIFT: u16 = 14;

/// What kind of move a `Move` is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveType {
    Normal,
    Promotion,
    EnPassant,
    /// King move of a castle; the rook's relocation is implied.
    Castling,
}

impl MoveType {
    #[inline]
    const fn bits(self) -> u16 {
        match self {
            MoveType::Normal => 0,
            MoveType::Promotion => 1,
            MoveType::EnPassant => 2,
            MoveType::Castling => 3,
        }
    }

    #[inline]
    const fn from_bits(bits: u16) -> Self {
        match bits & 3 {
            0 => MoveType::Normal,
            1 => MoveType::Promotion,
            2 => MoveType::EnPassant,
            _ => MoveType::Castling,
        }
    }
}

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   origin square (0-63)
/// - bits 6-11:  destination square (0-63)
/// - bits 12-13: promotion piece (knight, bishop, rook, queen)
/// - bits 14-15: move type
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    /// Create a normal move (quiet move or capture)
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move::encode(from, to, 0, MoveType::Normal)
    }

    /// Create a promotion move. `piece` must be a knight, bishop, rook or
    /// queen; debug builds assert this and release builds encode anything
    /// else as a queen promotion.
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        debug_assert!(
            matches!(piece, Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen),
            "pawns promote to knight, bishop, rook or queen"
        );
        let promo = match piece {
            Piece::Knight => 0,
            Piece::Bishop => 1,
            Piece::Rook => 2,
            _ => 3,
        };
        Move::encode(from, to, promo, MoveType::Promotion)
    }

    /// Create an en passant capture; `to` is the en passant target square
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::encode(from, to, 0, MoveType::EnPassant)
    }

    /// Create a castling move from the king's origin to its destination
    #[inline]
    #[must_use]
    pub const fn castling(king_from: Square, king_to: Square) -> Self {
        Move::encode(king_from, king_to, 0, MoveType::Castling)
    }

    #[inline]
    const fn encode(from: Square, to: Square, promo: u16, kind: MoveType) -> Self {
        Move(
            from.0 as u16
                | (to.0 as u16) << TO_SHIFT
                | promo << PROMO_SHIFT
                | kind.bits() << TYPE_SHIFT,
        )
    }

    /// Get the origin square
    #[inline]
    #[must_use]
    pub const fn origin(self) -> Square {
        Square((self.0 & FROM_MASK) as u8)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn destination(self) -> Square {
        Square(((self.0 >> TO_SHIFT) & FROM_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn origin_bitboard(self) -> Bitboard {
        Bitboard::from_square(self.origin())
    }

    #[inline]
    #[must_use]
    pub const fn destination_bitboard(self) -> Bitboard {
        Bitboard::from_square(self.destination())
    }

    #[inline]
    #[must_use]
    pub const fn move_type(self) -> MoveType {
        MoveType::from_bits(self.0 >> TYPE_SHIFT)
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        if !self.is_promotion() {
            return None;
        }
        Some(match (self.0 >> PROMO_SHIFT) & 3 {
            0 => Piece::Knight,
            1 => Piece::Bishop,
            2 => Piece::Rook,
            _ => Piece::Queen,
        })
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.move_type(), MoveType::Promotion)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.move_type(), MoveType::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.move_type(), MoveType::Castling)
    }

    /// Get the raw 16-bit value (for hashing/storage)
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Create from raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        Move(value)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.origin(), self.destination())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.destination())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Anything the move generators can append moves to.
pub trait MoveSink {
    fn push_move(&mut self, mv: Move);
}

impl MoveSink for Vec<Move> {
    #[inline]
    fn push_move(&mut self, mv: Move) {
        self.push(mv);
    }
}

impl MoveSink for MoveList {
    #[inline]
    fn push_move(&mut self, mv: Move) {
        self.push(mv);
    }
}

/// Upper bound on legal moves in any position (the known maximum is 218).
pub const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move(0); MAX_MOVES],
            len: 0,
        }
    }

    /// Append a move.
    ///
    /// # Panics
    /// Panics if the list already holds `MAX_MOVES` moves.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

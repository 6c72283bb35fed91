//! Castling rights and the fixed geometry of each castle.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::Color;
use super::square::Square;

/// One of the four castling rights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleRight {
    WhiteKingSide,
    WhiteQueenSide,
    BlackKingSide,
    BlackQueenSide,
}

impl CastleRight {
    pub const ALL: [CastleRight; 4] = [
        CastleRight::WhiteKingSide,
        CastleRight::WhiteQueenSide,
        CastleRight::BlackKingSide,
        CastleRight::BlackQueenSide,
    ];

    /// The two rights belonging to `color`, king side first
    #[inline]
    #[must_use]
    pub const fn for_color(color: Color) -> [CastleRight; 2] {
        match color {
            Color::White => [CastleRight::WhiteKingSide, CastleRight::WhiteQueenSide],
            Color::Black => [CastleRight::BlackKingSide, CastleRight::BlackQueenSide],
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            CastleRight::WhiteKingSide | CastleRight::WhiteQueenSide => Color::White,
            CastleRight::BlackKingSide | CastleRight::BlackQueenSide => Color::Black,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            CastleRight::WhiteKingSide => 1 << 0,
            CastleRight::WhiteQueenSide => 1 << 1,
            CastleRight::BlackKingSide => 1 << 2,
            CastleRight::BlackQueenSide => 1 << 3,
        }
    }

    /// FEN letter for this right (`K`, `Q`, `k`, `q`)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            CastleRight::WhiteKingSide => 'K',
            CastleRight::WhiteQueenSide => 'Q',
            CastleRight::BlackKingSide => 'k',
            CastleRight::BlackQueenSide => 'q',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(CastleRight::WhiteKingSide),
            'Q' => Some(CastleRight::WhiteQueenSide),
            'k' => Some(CastleRight::BlackKingSide),
            'q' => Some(CastleRight::BlackQueenSide),
            _ => None,
        }
    }

    /// Static squares involved in this castle
    #[inline]
    #[must_use]
    pub fn info(self) -> &'static CastleInfo {
        match self {
            CastleRight::WhiteKingSide => &CASTLE_INFO[0],
            CastleRight::WhiteQueenSide => &CASTLE_INFO[1],
            CastleRight::BlackKingSide => &CASTLE_INFO[2],
            CastleRight::BlackQueenSide => &CASTLE_INFO[3],
        }
    }
}

/// Castling rights represented as a set of four flags packed in a `u8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(0b1111)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, right: CastleRight) -> bool {
        self.0 & right.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, right: CastleRight) {
        self.0 |= right.bit();
    }

    #[inline]
    pub fn remove(&mut self, right: CastleRight) {
        self.0 &= !right.bit();
    }

    /// Returns a copy with `right` added
    #[inline]
    #[must_use]
    pub const fn with(self, right: CastleRight) -> Self {
        CastlingRights(self.0 | right.bit())
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the rights that are set, in `CastleRight::ALL` order
    pub fn iter(self) -> impl Iterator<Item = CastleRight> {
        CastleRight::ALL
            .into_iter()
            .filter(move |&right| self.contains(right))
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value; bits above the low four are dropped
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & 0b1111)
    }
}

impl FromIterator<CastleRight> for CastlingRights {
    fn from_iter<I: IntoIterator<Item = CastleRight>>(iter: I) -> Self {
        let mut rights = CastlingRights::none();
        for right in iter {
            rights.insert(right);
        }
        rights
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastlingRights({self})")
    }
}

/// FEN castling field: `KQkq` subset or `-`.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for right in self.iter() {
            write!(f, "{}", right.to_char())?;
        }
        Ok(())
    }
}

/// Where the king and rook start and finish for one castle, and which
/// squares must be empty or unattacked for it to be legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastleInfo {
    pub right: CastleRight,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook
    pub needed_empty: Bitboard,
    /// Squares the king stands on, crosses, or lands on
    pub needed_safe: Bitboard,
}

const fn squares(list: &[Square]) -> Bitboard {
    let mut bb = 0u64;
    let mut i = 0;
    while i < list.len() {
        bb |= 1u64 << list[i].0;
        i += 1;
    }
    Bitboard(bb)
}

/// Indexed in `CastleRight::ALL` order.
pub static CASTLE_INFO: [CastleInfo; 4] = [
    CastleInfo {
        right: CastleRight::WhiteKingSide,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        rook_to: Square::F1,
        needed_empty: squares(&[Square::F1, Square::G1]),
        needed_safe: squares(&[Square::E1, Square::F1, Square::G1]),
    },
    CastleInfo {
        right: CastleRight::WhiteQueenSide,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        rook_to: Square::D1,
        needed_empty: squares(&[Square::B1, Square::C1, Square::D1]),
        needed_safe: squares(&[Square::E1, Square::D1, Square::C1]),
    },
    CastleInfo {
        right: CastleRight::BlackKingSide,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        rook_to: Square::F8,
        needed_empty: squares(&[Square::F8, Square::G8]),
        needed_safe: squares(&[Square::E8, Square::F8, Square::G8]),
    },
    CastleInfo {
        right: CastleRight::BlackQueenSide,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        rook_to: Square::D8,
        needed_empty: squares(&[Square::B8, Square::C8, Square::D8]),
        needed_safe: squares(&[Square::E8, Square::D8, Square::C8]),
    },
];

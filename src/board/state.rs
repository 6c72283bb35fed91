#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Bitboard, CastlingRights, Color, Piece, PieceSlot, Square, NUM_SLOTS};

/// Ranks an en passant target may sit on.
const EN_PASSANT_RANKS: Bitboard = Bitboard::rank_mask(2).or(Bitboard::rank_mask(5));

/// A static chess position: piece placement, side to move, castling rights,
/// en passant target and move clocks.
///
/// Placement is held twice: once per colored piece kind (plus one bitboard of
/// empty squares) and once per color. Every constructor and mutator keeps the
/// two views in step, so `is_consistent` holds for any position built through
/// the public API. Deserialized positions are checked the same way and
/// rejected when inconsistent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawPosition")
)]
pub struct Position {
    pub(crate) pieces: [Bitboard; NUM_SLOTS],
    pub(crate) colors: [Bitboard; 2],
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Bitboard,
    pub(crate) halfmoves: u32,
    pub(crate) fullmoves: u32,
    pub(crate) turn: Color,
}

/// Unchecked field-for-field mirror of `Position`, the input to its
/// `Deserialize` impl.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPosition {
    pieces: [Bitboard; NUM_SLOTS],
    colors: [Bitboard; 2],
    castling: CastlingRights,
    en_passant: Bitboard,
    halfmoves: u32,
    fullmoves: u32,
    turn: Color,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for Position {
    type Error = &'static str;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        let position = Position {
            pieces: raw.pieces,
            colors: raw.colors,
            castling: raw.castling,
            en_passant: raw.en_passant,
            halfmoves: raw.halfmoves,
            fullmoves: raw.fullmoves,
            turn: raw.turn,
        };
        if position.is_consistent() {
            Ok(position)
        } else {
            Err("inconsistent position")
        }
    }
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            position.set_piece(Square::at(0, file), Color::White, piece);
            position.set_piece(Square::at(7, file), Color::Black, piece);
            position.set_piece(Square::at(1, file), Color::White, Piece::Pawn);
            position.set_piece(Square::at(6, file), Color::Black, Piece::Pawn);
        }
        position.castling = CastlingRights::all();
        position
    }

    /// A board with no pieces, White to move, no rights.
    #[must_use]
    pub fn empty() -> Self {
        let mut pieces = [Bitboard::EMPTY; NUM_SLOTS];
        pieces[PieceSlot::EMPTY.as_usize()] = Bitboard::ALL;
        Position {
            pieces,
            colors: [Bitboard::EMPTY; 2],
            castling: CastlingRights::none(),
            en_passant: Bitboard::EMPTY,
            halfmoves: 0,
            fullmoves: 1,
            turn: Color::White,
        }
    }

    /// Build a position directly from its thirteen piece bitboards.
    ///
    /// `pieces` is indexed by `PieceSlot`; the color bitboards are derived
    /// from it. The caller guarantees the bitboards partition the board
    /// (checked in debug builds).
    #[must_use]
    pub fn from_raw(
        pieces: [Bitboard; NUM_SLOTS],
        turn: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmoves: u32,
        fullmoves: u32,
    ) -> Self {
        let mut colors = [Bitboard::EMPTY; 2];
        for slot in PieceSlot::iter() {
            if let Some((color, _)) = slot.occupant() {
                colors[color.index()] |= pieces[slot.as_usize()];
            }
        }
        let position = Position {
            pieces,
            colors,
            castling,
            en_passant: en_passant.map_or(Bitboard::EMPTY, Square::bitboard),
            halfmoves,
            fullmoves,
            turn,
        };
        debug_assert!(position.is_consistent(), "from_raw: bitboards do not partition the board");
        position
    }

    /// Place a piece, replacing whatever stood on `sq`.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.clear_square(sq);
        let bb = sq.bitboard();
        self.pieces[PieceSlot::EMPTY.as_usize()] &= !bb;
        self.pieces[PieceSlot::of(color, piece).as_usize()] |= bb;
        self.colors[color.index()] |= bb;
    }

    /// Remove and return the piece on `sq`, if any.
    pub fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let occupant = self.piece_at(sq)?;
        let bb = sq.bitboard();
        self.pieces[PieceSlot::from(occupant).as_usize()] &= !bb;
        self.colors[occupant.0.index()] &= !bb;
        self.pieces[PieceSlot::EMPTY.as_usize()] |= bb;
        Some(occupant)
    }

    /// The color and kind of the piece on `sq`, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if self.pieces[PieceSlot::EMPTY.as_usize()].contains(sq) {
            return None;
        }
        let color = if self.colors[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces(color, piece).contains(sq))
            .map(|piece| (color, piece))
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    /// The en passant target square, if the last move was a double pawn push
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant.lsb_square()
    }

    /// The en passant target as a bitboard (empty when there is none)
    #[inline]
    #[must_use]
    pub fn en_passant_bitboard(&self) -> Bitboard {
        self.en_passant
    }

    pub fn set_en_passant(&mut self, target: Option<Square>) {
        debug_assert!(
            target.map_or(true, |sq| EN_PASSANT_RANKS.contains(sq)),
            "en passant target must be on the third or sixth rank"
        );
        self.en_passant = target.map_or(Bitboard::EMPTY, Square::bitboard);
    }

    #[must_use]
    pub fn halfmoves(&self) -> u32 {
        self.halfmoves
    }

    #[must_use]
    pub fn fullmoves(&self) -> u32 {
        self.fullmoves
    }

    /// Squares holding `piece`s of `color`
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[PieceSlot::of(color, piece).as_usize()]
    }

    /// The bitboard stored in `slot` (use `PieceSlot::EMPTY` for empty squares)
    #[inline]
    #[must_use]
    pub fn slot(&self, slot: PieceSlot) -> Bitboard {
        self.pieces[slot.as_usize()]
    }

    /// All thirteen piece bitboards, indexed by `PieceSlot`
    #[must_use]
    pub fn piece_bitboards(&self) -> &[Bitboard; NUM_SLOTS] {
        &self.pieces
    }

    /// Squares occupied by `color`
    #[inline]
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    /// Squares occupied by either side
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        !self.pieces[PieceSlot::EMPTY.as_usize()]
    }

    #[inline]
    #[must_use]
    pub fn empty_squares(&self) -> Bitboard {
        self.pieces[PieceSlot::EMPTY.as_usize()]
    }

    /// Square of `color`'s king. The position must hold exactly one.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces(color, Piece::King).to_square()
    }

    /// Check the placement invariants: the thirteen piece bitboards are
    /// pairwise disjoint and cover the board, each color bitboard is the
    /// union of its six piece bitboards, and the en passant target is empty
    /// or a single square on the third or sixth rank.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for bb in self.pieces {
            if (seen & bb).is_nonempty() {
                return false;
            }
            seen |= bb;
        }
        if seen != Bitboard::ALL {
            return false;
        }

        for color in Color::BOTH {
            let union = Piece::ALL
                .into_iter()
                .fold(Bitboard::EMPTY, |acc, piece| acc | self.pieces(color, piece));
            if union != self.colors[color.index()] {
                return false;
            }
        }

        self.en_passant.is_empty()
            || (self.en_passant.is_single()
                && (self.en_passant & EN_PASSANT_RANKS).is_nonempty())
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

use std::str::FromStr;

use super::error::FenError;
use super::{Bitboard, CastleRight, CastlingRights, Color, Piece, Position, Square};

const FEN_FIELDS: usize = 6;

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The grammar is strict: six whitespace-separated fields, eight ranks of
    /// exactly eight files, `w` or `b`, `-` or one to four distinct `KQkq`
    /// letters, `-` or an en passant square on the third or sixth rank, and
    /// two decimal clocks. Each side must have exactly one king.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = parse_fen(fen);
        if let Err(err) = &parsed {
            trace_log!("rejected FEN {:?}: {}", fen, err);
        }
        parsed
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::at(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling,
            ep,
            self.halfmoves,
            self.fullmoves
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != FEN_FIELDS {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    }

    let mut position = Position::empty();
    parse_placement(&mut position, fields[0])?;

    position.turn = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };
    position.castling = parse_castling(fields[2])?;
    position.en_passant = parse_en_passant(fields[3])?;
    position.halfmoves = parse_clock(fields[4])?;
    position.fullmoves = parse_clock(fields[5])?;

    for color in Color::BOTH {
        let kings = position.pieces(color, Piece::King).popcount();
        if kings != 1 {
            return Err(FenError::InvalidKingCount {
                color,
                found: kings,
            });
        }
    }

    debug_assert!(position.is_consistent());
    Ok(position)
}

fn parse_placement(position: &mut Position, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    // FEN lists rank 8 first.
    for (rank, rank_str) in (0..8u8).rev().zip(ranks) {
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPiece { char: c });
                }
                file += skip as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file < 8 {
                    position.set_piece(Square::at(rank, file as u8), color, piece);
                }
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::WrongFileCount {
                rank: rank as usize + 1,
                files: file,
            });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    if field == "-" {
        return Ok(CastlingRights::none());
    }
    if field.is_empty() || field.len() > 4 {
        return Err(invalid());
    }

    let mut rights = CastlingRights::none();
    for c in field.chars() {
        let right = CastleRight::from_char(c).ok_or_else(invalid)?;
        if rights.contains(right) {
            return Err(invalid());
        }
        rights.insert(right);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Bitboard, FenError> {
    if field == "-" {
        return Ok(Bitboard::EMPTY);
    }
    match field.parse::<Square>() {
        Ok(sq) if sq.rank() == 2 || sq.rank() == 5 => Ok(sq.bitboard()),
        _ => Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

fn parse_clock(field: &str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidClock {
        found: field.to_string(),
    };
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    field.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceSlot, NUM_SLOTS};

    #[test]
    fn test_fen_round_trip() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/pp1q1pp1/2p1pn2/4B2p/2BP4/8/PPP1QPP1/2KR3R b kq - 1 16",
            "6k1/5pbp/6p1/2pNp3/P1P1P3/5P2/1P3KPP/8 b - a3 0 30",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        ];
        for fen in fens {
            assert_eq!(Position::from_fen(fen).to_fen(), fen);
        }
    }

    #[test]
    fn test_start_fen_matches_new() {
        let position = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(position, Position::new());
    }

    #[test]
    fn test_fen_matches_raw_bitboards() {
        let raw: [u64; NUM_SLOTS] = [
            0x000000001520c200,
            0x0000000800000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x0000000000002000,
            0x00a0401400000000,
            0x0000000000000000,
            0x0040000000000000,
            0x0000000000000000,
            0x0000000000000000,
            0x4000000000000000,
            0xbf1fbfe3eadf1dff,
        ];
        let expected = Position::from_raw(
            raw.map(Bitboard),
            Color::Black,
            CastlingRights::none(),
            Some(Square::A3),
            0,
            30,
        );
        let parsed = Position::from_fen("6k1/5pbp/6p1/2pNp3/P1P1P3/5P2/1P3KPP/8 b - a3 0 30");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.en_passant_bitboard(), Bitboard(1 << 16));
    }

    #[test]
    fn test_fen_castling_and_clocks() {
        let raw: [u64; NUM_SLOTS] = [
            0x0000000008006700,
            0x0000000000000000,
            0x0000001004000000,
            0x0000000000000088,
            0x0000000000001000,
            0x0000000000000004,
            0x0063148000000000,
            0x0000200000000000,
            0x0000000000000000,
            0x8100000000000000,
            0x0008000000000000,
            0x1000000000000000,
            0x6e94cb6ff3ff8873,
        ];
        let parsed = Position::from_fen("r3k2r/pp1q1pp1/2p1pn2/4B2p/2BP4/8/PPP1QPP1/2KR3R b kq - 1 16");
        for slot in PieceSlot::iter() {
            assert_eq!(parsed.slot(slot), Bitboard(raw[slot.as_usize()]), "{slot:?}");
        }
        assert_eq!(parsed.castling_rights().as_u8(), 0b1100);
        assert_eq!(parsed.halfmoves(), 1);
        assert_eq!(parsed.fullmoves(), 16);
    }

    #[test]
    fn test_invalid_fens_are_rejected() {
        let invalid = [
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/8/PPPPPPPP/RNBQBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/9/9/PPPPPPPppP/RNBQBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/9/9/PPPPPPPppP/RNBQBNRr w KQkq - 0 1",
            "rnbqkbnr/pppp/8/8/5/PPPPPPPP/2B3 w KQkq - 0 1",
            "rnbqkbnr//8/8/8/PPPPPPPP/RNBQBNR w KQkq - 0 1",
            "rnblkbnr/pppppppp/8/8/8/1p6/PrrPPjPP/RNBQWNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR wwb KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR t KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w c - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w KQ- - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w KQkqK - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w KQkq z3 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w - e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w - e28z 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w - a 0 1",
            "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQBNR w KQkq - plm gcc",
            "8/8/8/8/8/8/8/8 w - -",
            "8/8/8/8/8/8/8/8 w K - 0 1 10",
            "bnbnn/153/nn22 ffff as/2.1//",
        ];
        for fen in invalid {
            assert!(Position::try_from_fen(fen).is_err(), "accepted {fen}");
        }
    }

    #[test]
    fn test_fen_error_variants() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
        let cases = [
            (format!("{start} w KQkq -"), FenError::WrongFieldCount { found: 4 }),
            (
                "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
                FenError::WrongRankCount { found: 7 },
            ),
            (
                "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
                FenError::WrongFileCount { rank: 7, files: 7 },
            ),
            (
                "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
                FenError::InvalidPiece { char: 'x' },
            ),
            (
                format!("{start} x KQkq - 0 1"),
                FenError::InvalidSideToMove {
                    found: "x".to_string(),
                },
            ),
            (
                format!("{start} w KKq - 0 1"),
                FenError::InvalidCastling {
                    found: "KKq".to_string(),
                },
            ),
            (
                format!("{start} w KQkq e4 0 1"),
                FenError::InvalidEnPassant {
                    found: "e4".to_string(),
                },
            ),
            (
                format!("{start} w KQkq - +3 1"),
                FenError::InvalidClock {
                    found: "+3".to_string(),
                },
            ),
            (
                "rnbq1bnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
                FenError::InvalidKingCount {
                    color: Color::Black,
                    found: 0,
                },
            ),
        ];
        for (fen, expected) in cases {
            assert_eq!(Position::try_from_fen(&fen), Err(expected), "{fen}");
        }
    }

    #[test]
    fn test_from_str_trait() {
        let position: Position = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
            .parse()
            .unwrap();
        assert_eq!(position.turn(), Color::Black);
        assert_eq!(position.en_passant(), Some(Square::E3));
    }

    #[test]
    #[should_panic(expected = "Invalid FEN string")]
    fn test_from_fen_panics_on_garbage() {
        let _ = Position::from_fen("not a fen");
    }
}

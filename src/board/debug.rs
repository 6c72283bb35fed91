use std::fmt::Write;

use super::{Color, Piece, Position};

#[cfg(debug_assertions)]
impl Position {
    /// Debug helper to print every bitboard of the position
    pub fn debug_bitboards(&self) {
        println!("{}", self.bitboards_report());
    }

    /// Side to move, rights, en passant target and each piece bitboard in
    /// hex, followed by a grid of the occupied squares.
    pub fn bitboards_report(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Side to move: {}", self.turn);
        let _ = writeln!(out, "Castling: {}", self.castling);
        if let Some(target) = self.en_passant() {
            let _ = writeln!(out, "EP target: {target}");
        }
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let bb = self.pieces(color, piece);
                let name = piece.to_fen_char(color);
                let _ = writeln!(out, "{color} {name}: {:#018x}", bb.0);
            }
        }
        let _ = writeln!(out, "Empty: {:#018x}", self.empty_squares().0);
        let _ = write!(out, "{}", self.occupied());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_every_bitboard() {
        let report = Position::new().bitboards_report();
        assert!(report.starts_with("Side to move: White"));
        assert!(report.contains("Castling: KQkq"));
        assert!(report.contains("White P: 0x000000000000ff00"));
        assert!(report.contains("Black k: 0x1000000000000000"));
        assert!(report.contains("Empty: 0x0000ffffffff0000"));
        assert!(report.ends_with("OOOOOOOO\nOOOOOOOO\n"));
        assert!(!report.contains("EP target"));
    }
}

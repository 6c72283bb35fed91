//! Legal move counts for the standard move generator test positions.

use crate::board::{MoveList, Position};

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    moves: usize,
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        moves: 20,
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        moves: 48,
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        moves: 14,
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        moves: 6,
    },
    TestPosition {
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        moves: 44,
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        moves: 46,
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        moves: 31,
    },
    TestPosition {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        moves: 24,
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        moves: 26,
    },
];

#[test]
fn test_all_move_counts() {
    for test in TEST_POSITIONS {
        let position = Position::from_fen(test.fen);
        let moves = position.generate_moves();
        assert_eq!(
            moves.len(),
            test.moves,
            "Wrong move count for '{}': {:?}",
            test.name,
            moves
        );
    }
}

#[test]
fn test_per_piece_generators_sum_to_total() {
    for test in TEST_POSITIONS {
        let position = Position::from_fen(test.fen);
        let mut moves = MoveList::new();
        let total = position.generate_pawn_moves(&mut moves)
            + position.generate_knight_moves(&mut moves)
            + position.generate_bishop_moves(&mut moves)
            + position.generate_rook_moves(&mut moves)
            + position.generate_queen_moves(&mut moves)
            + position.generate_king_moves(&mut moves);
        assert_eq!(total, test.moves, "{}", test.name);
        assert_eq!(moves, position.generate_moves(), "{}", test.name);
    }
}

#[test]
fn test_generated_moves_are_distinct() {
    for test in TEST_POSITIONS {
        let moves = Position::from_fen(test.fen).generate_moves();
        let mut raw: Vec<u16> = moves.iter().map(|mv| mv.as_u16()).collect();
        raw.sort_unstable();
        raw.dedup();
        assert_eq!(raw.len(), moves.len(), "duplicate move in '{}'", test.name);
    }
}

#[test]
fn test_every_move_keeps_king_safe() {
    for test in TEST_POSITIONS {
        let position = Position::from_fen(test.fen);
        for &mv in &position.generate_moves() {
            assert!(
                super::keeps_king_safe(&position, mv),
                "{mv} leaves the king in check in '{}'",
                test.name
            );
        }
    }
}

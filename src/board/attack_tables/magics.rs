//! Magic bitboard tables for bishops and rooks.
//!
//! Every square uses the same shift per slider type, so each square owns a
//! fixed-size block of the flat attack table:
//! `square * 2^(64 - shift) + ((occupancy & mask) * magic) >> shift`.

use once_cell::sync::Lazy;

use super::super::types::{Bitboard, Square};
use super::tables::{BISHOP_MASKS, ROOK_MASKS};
use super::{sliding_attacks_slow, Direction};

/// Right shift applied to the rook magic product (12 index bits).
pub const ROOK_SHIFT: u32 = 52;
/// Right shift applied to the bishop magic product (9 index bits).
pub const BISHOP_SHIFT: u32 = 55;

/// Entries per square in the rook table
pub const ROOK_SQUARE_ENTRIES: usize = 1 << (64 - ROOK_SHIFT);
/// Entries per square in the bishop table
pub const BISHOP_SQUARE_ENTRIES: usize = 1 << (64 - BISHOP_SHIFT);

#[rustfmt::skip]
pub(crate) const ROOK_MAGICS: [u64; 64] = [
    0xa180008021400010, 0x0024017040010010, 0x0401001420200080, 0x0010001042248800,
    0x8600082002009001, 0x0800411040090360, 0x4180004485021808, 0x4200002286014104,
    0x0000500480010030, 0x100010250441008c, 0x00001c0004009000, 0x0060101004021040,
    0x2000a8000a002921, 0x002022000081080c, 0x8060800246010028, 0x01a2000043290402,
    0x4080108000400090, 0x201002400020010b, 0x0080440800880400, 0x00200840020c1004,
    0x0040020001a01038, 0x0820100420502400, 0x0008004208800120, 0x1430401824800100,
    0x02428000080ca008, 0x26002a4210024002, 0x0020480010004480, 0x010a001110080200,
    0x0800011100c0d800, 0x000400008c104201, 0x044200880800ac40, 0x202008c005802010,
    0x0028804080080400, 0x00c4026000043006, 0x4040062000140280, 0x0c00100804800280,
    0x0000850c02180005, 0x00000a1000800420, 0x2008400400b20088, 0x800810c00d200204,
    0x3040601040008004, 0x400820005a023400, 0x0210204149032000, 0x4010005600242010,
    0x5000082002020010, 0x12c0220a00080244, 0x9c10101e00800900, 0x0a00802012400a03,
    0x2400200901106008, 0x0020004000210822, 0x0008200170002030, 0x040d3000110018c8,
    0x00841c000210a020, 0x2804048011020020, 0x0a000200080404f2, 0x0000082041000080,
    0x0000a91100420182, 0xc000084005001061, 0xa002141008200101, 0x1211220010824006,
    0x4004900820010402, 0x0086240002008801, 0x0800020801302084, 0x0100040041002882,
];

#[rustfmt::skip]
pub(crate) const BISHOP_MAGICS: [u64; 64] = [
    0x40200411020c0210, 0x0009080500102210, 0x6808402110040040, 0x30010c8080010401,
    0x400200a210301018, 0x0140100290104420, 0x0045101193403a00, 0x0202004c15010048,
    0x40008082080a0098, 0x1140002020a30010, 0x014008028c001001, 0x402081010a000000,
    0x01400f1002181304, 0xe00420a384200208, 0x0000820080825484, 0x0080400210940200,
    0x0648040a88222204, 0x0488000040444042, 0x0044000140410809, 0x00040801c0200820,
    0x1082000020804a00, 0x8400200104002018, 0x3001002082118080, 0x0422428404048420,
    0x0404400509230810, 0x4001244000822101, 0x62022408020c8c00, 0x00d0104004004200,
    0x2604820004010400, 0x40300880100a0104, 0x00004b1010809000, 0x1220088010504020,
    0x10001d0100042012, 0x0000080a40200090, 0x4012001164014008, 0x0820202020080080,
    0x0010048200202200, 0x2002450088018080, 0x01002a49070091e8, 0x0001020458020009,
    0x0001004020500641, 0x00614440a0420100, 0x00a0200a20100200, 0x8081c04012040041,
    0x1004414830310400, 0x0400604120608102, 0x2220020020605100, 0x805212018030080a,
    0x00c8a00b00404010, 0x0280440910900014, 0x8200008a00418000, 0x0401028042002001,
    0x6800000042820080, 0x04020088a0818061, 0x0408210018960402, 0xc02000d480c84040,
    0x002080c210008200, 0x002010e00800c020, 0x8200404900150448, 0x08000c2080200820,
    0x00a020f001402c00, 0x0001010422040410, 0x00201008401240c0, 0x100400a482000580,
];

/// Which slider a `MagicTable` serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    fn parts(self) -> (&'static [Bitboard; 64], &'static [u64; 64], u32, &'static [Direction]) {
        match self {
            Slider::Bishop => (&BISHOP_MASKS, &BISHOP_MAGICS, BISHOP_SHIFT, &Direction::BISHOP),
            Slider::Rook => (&ROOK_MASKS, &ROOK_MAGICS, ROOK_SHIFT, &Direction::ROOK),
        }
    }
}

pub(crate) struct MagicTable {
    masks: &'static [Bitboard; 64],
    magics: &'static [u64; 64],
    shift: u32,
    attacks: Box<[Bitboard]>,
}

impl MagicTable {
    /// Fill the table by enumerating every blocker subset of every mask.
    pub(crate) fn build(slider: Slider) -> Self {
        let (masks, magics, shift, directions) = slider.parts();
        let per_square = 1usize << (64 - shift);
        let mut attacks = vec![Bitboard::EMPTY; 64 * per_square].into_boxed_slice();

        for sq in 0..64 {
            let mask = masks[sq].0;
            let mut subset = 0u64;
            loop {
                let index = sq * per_square + hash(subset, magics[sq], shift);
                let attack = sliding_attacks_slow(Square(sq as u8), Bitboard(subset), directions);
                // A slider always attacks at least one square, so empty marks an unused slot.
                debug_assert!(
                    attacks[index].is_empty(),
                    "{slider:?} magic for square {sq} maps two blocker sets to one slot"
                );
                attacks[index] = attack;

                subset = subset.wrapping_sub(mask) & mask;
                if subset == 0 {
                    break;
                }
            }
        }

        debug_log!(
            "{:?} magic table built: {} entries ({} per square)",
            slider,
            attacks.len(),
            per_square
        );

        MagicTable {
            masks,
            magics,
            shift,
            attacks,
        }
    }

    #[inline]
    pub(crate) fn attack(&self, sq: usize, occupancy: Bitboard) -> Bitboard {
        let relevant = occupancy.0 & self.masks[sq].0;
        let per_square_bits = 64 - self.shift;
        self.attacks[(sq << per_square_bits) + hash(relevant, self.magics[sq], self.shift)]
    }

    /// Number of occupied slots in the block owned by `sq`
    #[cfg(test)]
    pub(crate) fn filled_slots(&self, sq: usize) -> usize {
        let per_square = 1usize << (64 - self.shift);
        self.attacks[sq * per_square..(sq + 1) * per_square]
            .iter()
            .filter(|bb| bb.is_nonempty())
            .count()
    }
}

#[inline]
const fn hash(relevant: u64, magic: u64, shift: u32) -> usize {
    (relevant.wrapping_mul(magic) >> shift) as usize
}

pub(crate) static ROOK_TABLE: Lazy<MagicTable> = Lazy::new(|| MagicTable::build(Slider::Rook));
pub(crate) static BISHOP_TABLE: Lazy<MagicTable> = Lazy::new(|| MagicTable::build(Slider::Bishop));

#[cfg(test)]
mod tests {
    use super::*;

    // Distinct blocker subsets landing in distinct slots means the number of
    // filled slots equals 2^popcount(mask).
    #[test]
    fn test_rook_magics_are_injective() {
        for sq in 0..64 {
            let expected = 1usize << ROOK_MASKS[sq].popcount();
            assert_eq!(ROOK_TABLE.filled_slots(sq), expected, "rook square {sq}");
        }
    }

    #[test]
    fn test_bishop_magics_are_injective() {
        for sq in 0..64 {
            let expected = 1usize << BISHOP_MASKS[sq].popcount();
            assert_eq!(BISHOP_TABLE.filled_slots(sq), expected, "bishop square {sq}");
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(ROOK_SQUARE_ENTRIES, 4096);
        assert_eq!(BISHOP_SQUARE_ENTRIES, 512);
        assert_eq!(ROOK_TABLE.attacks.len(), 64 * ROOK_SQUARE_ENTRIES);
        assert_eq!(BISHOP_TABLE.attacks.len(), 64 * BISHOP_SQUARE_ENTRIES);
    }
}

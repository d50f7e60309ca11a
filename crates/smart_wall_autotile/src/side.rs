//! Neighbor direction flags
//!
//! A [`Side`] is a set of the 8 neighbor directions packed into one byte,
//! numbered clockwise from the top:
//!
//! ```text
//!  TL(128)  T(1)  TR(2)
//!   L(64)    X    R(4)
//!  BL(32)  B(16)  BR(8)
//! ```

use bitflags::bitflags;

bitflags! {
    /// A set of neighbor directions
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Side: u8 {
        const T = 1 << 0;
        const TR = 1 << 1;
        const R = 1 << 2;
        const BR = 1 << 3;
        const B = 1 << 4;
        const BL = 1 << 5;
        const L = 1 << 6;
        const TL = 1 << 7;
    }
}

impl Side {
    pub const NONE: Self = Self::empty();
    pub const ALL: Self = Self::all();

    /// T, R, B and L
    pub const CARDINALS: Self = Self::T.union(Self::R).union(Self::B).union(Self::L);
    /// TR, BR, BL and TL
    pub const DIAGONALS: Self = Self::TR.union(Self::BR).union(Self::BL).union(Self::TL);

    /// The single directions, in neighbor-scan order
    pub const DIRECTIONS: [Side; 8] = [
        Side::T,
        Side::TR,
        Side::R,
        Side::BR,
        Side::B,
        Side::BL,
        Side::L,
        Side::TL,
    ];

    /// True for exactly one of T, R, B, L
    pub const fn is_cardinal(self) -> bool {
        self.bits().count_ones() == 1 && Side::CARDINALS.contains(self)
    }

    /// True for exactly one of TR, BR, BL, TL
    pub const fn is_diagonal(self) -> bool {
        self.bits().count_ones() == 1 && Side::DIAGONALS.contains(self)
    }

    /// Rotate every direction one step clockwise (T -> TR, TL -> T)
    pub const fn clockwise(self) -> Self {
        Self::from_bits_retain(self.bits().rotate_left(1))
    }

    /// Rotate every direction one step counter-clockwise (T -> TL)
    pub const fn counter_clockwise(self) -> Self {
        Self::from_bits_retain(self.bits().rotate_right(1))
    }

    /// For a diagonal, its two neighboring cardinals as
    /// `(counter_clockwise, clockwise)`, e.g. `(T, R)` for TR
    pub fn adjacent_cardinals(self) -> Option<(Side, Side)> {
        if self.is_diagonal() {
            Some((self.counter_clockwise(), self.clockwise()))
        } else {
            None
        }
    }

    /// Grid offset of a single direction, with y growing upward
    pub fn offset(self) -> Option<(i32, i32)> {
        let offset = match self {
            Side::T => (0, 1),
            Side::TR => (1, 1),
            Side::R => (1, 0),
            Side::BR => (1, -1),
            Side::B => (0, -1),
            Side::BL => (-1, -1),
            Side::L => (-1, 0),
            Side::TL => (-1, 1),
            _ => return None,
        };
        Some(offset)
    }

    /// Short name of a single direction
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Side::T => "T",
            Side::TR => "TR",
            Side::R => "R",
            Side::BR => "BR",
            Side::B => "B",
            Side::BL => "BL",
            Side::L => "L",
            Side::TL => "TL",
            _ => return None,
        };
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_values() {
        let bits: Vec<u8> = Side::DIRECTIONS.iter().map(|s| s.bits()).collect();
        assert_eq!(bits, vec![1, 2, 4, 8, 16, 32, 64, 128]);
        assert_eq!(Side::CARDINALS, Side::T | Side::R | Side::B | Side::L);
        assert_eq!(Side::DIAGONALS, Side::TR | Side::BR | Side::BL | Side::TL);
        assert_eq!(Side::CARDINALS | Side::DIAGONALS, Side::ALL);
    }

    #[test]
    fn test_cardinal_and_diagonal() {
        assert!(Side::T.is_cardinal());
        assert!(!Side::T.is_diagonal());
        assert!(Side::BL.is_diagonal());
        assert!(!(Side::T | Side::R).is_cardinal());
        assert!(!Side::NONE.is_diagonal());
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(Side::T.clockwise(), Side::TR);
        assert_eq!(Side::TL.clockwise(), Side::T);
        assert_eq!(Side::T.counter_clockwise(), Side::TL);
        assert_eq!(Side::CARDINALS.clockwise(), Side::DIAGONALS);
    }

    #[test]
    fn test_adjacent_cardinals() {
        assert_eq!(Side::TR.adjacent_cardinals(), Some((Side::T, Side::R)));
        assert_eq!(Side::BR.adjacent_cardinals(), Some((Side::R, Side::B)));
        assert_eq!(Side::BL.adjacent_cardinals(), Some((Side::B, Side::L)));
        assert_eq!(Side::TL.adjacent_cardinals(), Some((Side::L, Side::T)));
        assert_eq!(Side::T.adjacent_cardinals(), None);
    }

    #[test]
    fn test_offsets_are_distinct_unit_steps() {
        let offsets: Vec<(i32, i32)> = Side::DIRECTIONS
            .iter()
            .map(|s| s.offset().unwrap())
            .collect();
        for (i, a) in offsets.iter().enumerate() {
            assert!(a.0.abs() <= 1 && a.1.abs() <= 1 && *a != (0, 0));
            assert!(!offsets[i + 1..].contains(a));
        }
        assert_eq!(Side::T.offset(), Some((0, 1)));
        assert_eq!((Side::T | Side::R).offset(), None);
    }

    #[test]
    fn test_iter_and_collect() {
        let set = Side::T | Side::BR | Side::L;
        let parts: Vec<Side> = set.iter().collect();
        assert_eq!(parts, vec![Side::T, Side::BR, Side::L]);
        assert_eq!(parts.into_iter().collect::<Side>(), set);
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = Side::ALL.iter().filter_map(Side::name).collect();
        assert_eq!(names, vec!["T", "TR", "R", "BR", "B", "BL", "L", "TL"]);
        assert_eq!((Side::T | Side::R).name(), None);
        assert_eq!(Side::NONE.name(), None);
    }

    #[test]
    fn test_every_byte_is_a_valid_mask() {
        for bits in 0..=u8::MAX {
            assert_eq!(Side::from_bits(bits), Some(Side::from_bits_retain(bits)));
        }
        assert_eq!(!Side::CARDINALS, Side::DIAGONALS);
    }
}

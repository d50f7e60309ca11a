//! Neighbor mask reduction
//!
//! Many of the 256 neighbor masks draw the same tile: a diagonal neighbor
//! only changes the picture when both cardinals next to it are walls too.
//! [`reduce`] maps every mask to the canonical [`Pattern`] of its class.
//! There are exactly 48 patterns.

use crate::{AutotileError, Side};
use std::sync::OnceLock;

/// Cardinal combinations, as raw bits, for matching on a mask's axis
mod axis {
    use crate::Side;

    const T: u8 = Side::T.bits();
    const R: u8 = Side::R.bits();
    const B: u8 = Side::B.bits();
    const L: u8 = Side::L.bits();

    pub const NONE: u8 = 0;
    pub const ONLY_T: u8 = T;
    pub const ONLY_R: u8 = R;
    pub const ONLY_B: u8 = B;
    pub const ONLY_L: u8 = L;
    pub const T_B: u8 = T | B;
    pub const R_L: u8 = R | L;
    pub const T_R: u8 = T | R;
    pub const R_B: u8 = R | B;
    pub const B_L: u8 = B | L;
    pub const L_T: u8 = L | T;
    pub const T_B_L: u8 = T | B | L;
    pub const T_B_R: u8 = T | B | R;
    pub const R_L_T: u8 = R | L | T;
    pub const R_L_B: u8 = R | L | B;
    pub const CROSS: u8 = T | R | B | L;
}

/// Canonical representative of a group of neighbor masks that render alike.
///
/// Only produced by [`reduce`], so a diagonal bit is set only when both of
/// its adjacent cardinals are set (or the pattern is [`Side::ALL`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(Side);

impl Pattern {
    pub const NONE: Pattern = Pattern(Side::NONE);
    pub const ALL: Pattern = Pattern(Side::ALL);

    pub const fn side(self) -> Side {
        self.0
    }

    pub const fn bits(self) -> u8 {
        self.0.bits()
    }

    pub const fn contains(self, side: Side) -> bool {
        self.0.contains(side)
    }

    /// Position of this pattern in [`canonical_patterns`]
    pub fn canonical_index(self) -> usize {
        // Every Pattern comes from `reduce`, so it is always in the table
        canonical_patterns()
            .binary_search(&self)
            .unwrap_or_else(|insert_at| insert_at)
    }
}

/// Reduce a raw neighbor mask to its canonical pattern.
pub fn reduce(mask: Side) -> Result<Pattern, AutotileError> {
    if mask == Side::ALL {
        return Ok(Pattern(mask));
    }

    let cardinals = mask & Side::CARDINALS;
    let diagonals = match cardinals.bits() {
        axis::NONE
        | axis::ONLY_T
        | axis::ONLY_R
        | axis::ONLY_B
        | axis::ONLY_L
        | axis::T_B
        | axis::R_L => Side::NONE,

        axis::T_R => Side::TR,
        axis::R_B => Side::BR,
        axis::B_L => Side::BL,
        axis::L_T => Side::TL,

        axis::T_B_L => Side::TL | Side::BL,
        axis::T_B_R => Side::TR | Side::BR,
        axis::R_L_T => Side::TR | Side::TL,
        axis::R_L_B => Side::BR | Side::BL,

        axis::CROSS => return Ok(Pattern(mask)),

        _ => return Err(AutotileError::InvalidPattern(mask.bits())),
    };

    Ok(Pattern(cardinals | (mask & diagonals)))
}

/// All 48 canonical patterns in ascending bit order
pub fn canonical_patterns() -> &'static [Pattern] {
    static PATTERNS: OnceLock<Vec<Pattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let mut patterns: Vec<Pattern> = (0..=u8::MAX)
            .filter_map(|bits| reduce(Side::from_bits_retain(bits)).ok())
            .collect();
        patterns.sort();
        patterns.dedup();
        patterns
    })
}

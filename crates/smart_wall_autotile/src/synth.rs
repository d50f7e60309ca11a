//! Composing wall variants from fragments
//!
//! A wall tile is treated as a 3x3 grid of fragment-sized cells. The result
//! starts as a copy of the filled tile; every border cell whose neighbor is
//! not part of the pattern is then overwritten with the fragment chosen for
//! that direction.

use crate::assets::FragmentSet;
use crate::{AutotileError, Pattern, Side};
use image::{imageops, RgbaImage};
use smart_wall_core::{CornerRules, FragmentRef};
use tracing::debug;

/// Fragment drawn at `side` when that neighbor is missing.
///
/// Edges always use their own edge fragment. Corners branch on the two
/// cardinals around them through `rules`. Returns `None` if `side` is not a
/// single direction.
pub fn fragment_for(pattern: Pattern, side: Side, rules: &CornerRules) -> Option<FragmentRef> {
    let rule = match side {
        Side::T => return Some(FragmentRef::Edge(0)),
        Side::R => return Some(FragmentRef::Edge(2)),
        Side::B => return Some(FragmentRef::Edge(4)),
        Side::L => return Some(FragmentRef::Edge(6)),
        Side::TR => &rules.top_right,
        Side::BR => &rules.bottom_right,
        Side::BL => &rules.bottom_left,
        Side::TL => &rules.top_left,
        _ => return None,
    };

    let (ccw, cw) = side.adjacent_cardinals()?;
    Some(rule.select(pattern.contains(ccw), pattern.contains(cw)))
}

/// Top-left pixel of the cell for `side`, image rows counted downward
pub fn cell_origin(side: Side, fragment_size: u32) -> Option<(u32, u32)> {
    let (dx, dy) = side.offset()?;
    let column = (dx + 1) as u32;
    let row = (1 - dy) as u32;
    Some((column * fragment_size, row * fragment_size))
}

/// Build the image for `pattern`.
///
/// Fails with [`AutotileError::MissingAsset`] when the filled tile cannot
/// be split into thirds or a needed fragment is absent or mis-sized; no
/// partial image is returned.
pub fn compose(
    pattern: Pattern,
    fragments: &FragmentSet,
    rules: &CornerRules,
) -> Result<RgbaImage, AutotileError> {
    let (width, height) = fragments.filled.dimensions();
    if width == 0 || width != height || width % 3 != 0 {
        return Err(AutotileError::MissingAsset(format!(
            "filled tile is {}x{}; it must be square with a side divisible by 3",
            width, height
        )));
    }
    let size = fragments.fragment_size();

    let mut tile = fragments.filled.clone();

    for side in Side::DIRECTIONS {
        if pattern.contains(side) {
            continue;
        }

        let fragment_ref = fragment_for(pattern, side, rules)
            .ok_or(AutotileError::InvalidPattern(pattern.bits()))?;
        let fragment = fragments.get(fragment_ref).ok_or_else(|| {
            AutotileError::MissingAsset(format!(
                "{:?} fragment needed for side {:?} is not provided",
                fragment_ref, side
            ))
        })?;
        if fragment.dimensions() != (size, size) {
            return Err(AutotileError::MissingAsset(format!(
                "{:?} fragment is {}x{}, expected {}x{}",
                fragment_ref,
                fragment.width(),
                fragment.height(),
                size,
                size
            )));
        }

        let (x, y) =
            cell_origin(side, size).ok_or(AutotileError::InvalidPattern(pattern.bits()))?;
        imageops::replace(&mut tile, fragment, x.into(), y.into());
    }

    debug!("Composed wall variant for pattern {:?}", pattern.side());

    Ok(tile)
}

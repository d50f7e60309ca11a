//! Neighbor mask calculation and refresh fan-out

use crate::Side;
use smart_wall_core::TilePos;

/// The host grid as seen by the autotiler
pub trait WallGrid {
    /// Whether the cell at `pos` holds this wall tile
    fn is_wall_at(&self, pos: TilePos) -> bool;

    /// Ask the host to recompute the appearance of the cell at `pos`
    fn refresh_appearance(&mut self, pos: TilePos);
}

/// Position of the neighbor in a single direction
pub fn neighbor(pos: TilePos, side: Side) -> Option<TilePos> {
    side.offset().map(|(dx, dy)| pos.offset(dx, dy))
}

/// Calculate the neighbor mask for a cell.
///
/// Neighbors are tested in the order T, TR, R, BR, B, BL, L, TL and each
/// wall neighbor sets its bit.
pub fn neighbor_mask<F>(pos: TilePos, is_wall: F) -> Side
where
    F: Fn(TilePos) -> bool,
{
    let mut mask = Side::NONE;

    for side in Side::DIRECTIONS {
        if let Some(adjacent) = neighbor(pos, side) {
            if is_wall(adjacent) {
                mask |= side;
            }
        }
    }

    mask
}

/// Refresh every wall among the 8 neighbors of `pos`.
///
/// Call after the wall state of `pos` changed. The cell itself is not
/// refreshed. Returns the refreshed positions in scan order.
pub fn refresh_neighbors<G>(pos: TilePos, grid: &mut G) -> Vec<TilePos>
where
    G: WallGrid + ?Sized,
{
    let mut refreshed = Vec::new();

    for side in Side::DIRECTIONS {
        if let Some(adjacent) = neighbor(pos, side) {
            if grid.is_wall_at(adjacent) {
                grid.refresh_appearance(adjacent);
                refreshed.push(adjacent);
            }
        }
    }

    refreshed
}

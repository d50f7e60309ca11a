//! Tile layer storage used as the host grid for wall autotiling

use crate::TilePos;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// A rectangular tile layer.
///
/// Cells hold `None` for empty or `Some(tile_id)`. Row 0 is the bottom row
/// so that `y + 1` is the cell above, matching [`TilePos`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallLayer {
    pub name: String,
    /// The tileset used for this layer
    pub tileset_id: Uuid,
    pub width: u32,
    pub height: u32,
    /// Tile data - None means empty, Some(id) is a tile id
    pub tiles: Vec<Option<u32>>,
    /// Cells whose appearance must be recomputed before the next draw
    #[serde(skip)]
    pending_refresh: BTreeSet<TilePos>,
}

impl WallLayer {
    /// Create an empty layer
    pub fn new(name: String, tileset_id: Uuid, width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            name,
            tileset_id,
            width,
            height,
            tiles: vec![None; size],
            pending_refresh: BTreeSet::new(),
        }
    }

    /// Check whether a position lies inside the layer
    pub fn in_bounds(&self, pos: TilePos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }

    fn index(&self, pos: TilePos) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y as u32 * self.width + pos.x as u32) as usize)
        } else {
            None
        }
    }

    /// Get the tile at a position. Out-of-bounds cells read as empty.
    pub fn get(&self, pos: TilePos) -> Option<u32> {
        self.index(pos).and_then(|idx| self.tiles[idx])
    }

    /// Set the tile at a position, returning the previous content.
    ///
    /// Returns `None` if the position is out of bounds.
    pub fn set(&mut self, pos: TilePos, tile: Option<u32>) -> Option<Option<u32>> {
        let idx = self.index(pos)?;
        Some(std::mem::replace(&mut self.tiles[idx], tile))
    }

    /// Fill a rectangle (clipped to the layer) with one tile
    pub fn fill_rect(&mut self, origin: TilePos, width: u32, height: u32, tile: Option<u32>) {
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                self.set(origin.offset(dx, dy), tile);
            }
        }
    }

    /// Iterate over all occupied cells
    pub fn occupied(&self) -> impl Iterator<Item = (TilePos, u32)> + '_ {
        self.tiles.iter().enumerate().filter_map(move |(idx, tile)| {
            let tile = (*tile)?;
            let x = (idx as u32 % self.width) as i32;
            let y = (idx as u32 / self.width) as i32;
            Some((TilePos::new(x, y), tile))
        })
    }

    /// Schedule a cell for appearance recomputation
    pub fn request_refresh(&mut self, pos: TilePos) {
        if self.in_bounds(pos) {
            self.pending_refresh.insert(pos);
        }
    }

    /// Cells currently scheduled for recomputation, in position order
    pub fn pending_refresh(&self) -> impl Iterator<Item = TilePos> + '_ {
        self.pending_refresh.iter().copied()
    }

    /// Drain the scheduled cells
    pub fn take_pending_refresh(&mut self) -> Vec<TilePos> {
        std::mem::take(&mut self.pending_refresh).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layer() {
        let tileset_id = Uuid::new_v4();
        let layer = WallLayer::new("Walls".to_string(), tileset_id, 10, 10);

        assert_eq!(layer.name, "Walls");
        assert_eq!(layer.tileset_id, tileset_id);
        assert_eq!(layer.tiles.len(), 100);
        assert!(layer.tiles.iter().all(|t| t.is_none()));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut layer = WallLayer::new("Walls".to_string(), Uuid::new_v4(), 4, 3);

        assert_eq!(layer.set(TilePos::new(3, 2), Some(7)), Some(None));
        assert_eq!(layer.get(TilePos::new(3, 2)), Some(7));
        assert_eq!(layer.set(TilePos::new(3, 2), None), Some(Some(7)));

        // Out of bounds
        assert_eq!(layer.set(TilePos::new(4, 0), Some(1)), None);
        assert_eq!(layer.set(TilePos::new(0, -1), Some(1)), None);
        assert_eq!(layer.get(TilePos::new(-1, 0)), None);
    }

    #[test]
    fn test_row_zero_is_bottom() {
        let mut layer = WallLayer::new("Walls".to_string(), Uuid::new_v4(), 3, 3);
        layer.set(TilePos::new(1, 2), Some(5));

        // (1, 2) lives in the last row of storage
        assert_eq!(layer.tiles[7], Some(5));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut layer = WallLayer::new("Walls".to_string(), Uuid::new_v4(), 3, 3);
        layer.fill_rect(TilePos::new(1, 1), 5, 5, Some(2));

        let occupied: Vec<_> = layer.occupied().map(|(pos, _)| pos).collect();
        assert_eq!(
            occupied,
            vec![
                TilePos::new(1, 1),
                TilePos::new(2, 1),
                TilePos::new(1, 2),
                TilePos::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_pending_refresh() {
        let mut layer = WallLayer::new("Walls".to_string(), Uuid::new_v4(), 3, 3);
        layer.request_refresh(TilePos::new(2, 2));
        layer.request_refresh(TilePos::new(0, 0));
        layer.request_refresh(TilePos::new(2, 2));
        layer.request_refresh(TilePos::new(5, 5));

        assert_eq!(layer.pending_refresh().count(), 2);
        assert_eq!(
            layer.take_pending_refresh(),
            vec![TilePos::new(0, 0), TilePos::new(2, 2)]
        );
        assert_eq!(layer.pending_refresh().count(), 0);
    }
}

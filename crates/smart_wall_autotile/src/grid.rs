//! [`WallGrid`] adapter for [`WallLayer`]

use crate::mask::{refresh_neighbors, WallGrid};
use smart_wall_core::{TilePos, WallLayer};

/// A wall layer viewed through one wall tile id.
///
/// A cell is a wall when it holds exactly `wall_tile`; refresh requests are
/// queued on the layer.
pub struct LayerWalls<'a> {
    layer: &'a mut WallLayer,
    wall_tile: u32,
}

impl<'a> LayerWalls<'a> {
    pub fn new(layer: &'a mut WallLayer, wall_tile: u32) -> Self {
        Self { layer, wall_tile }
    }

    pub fn wall_tile(&self) -> u32 {
        self.wall_tile
    }

    pub fn layer(&self) -> &WallLayer {
        &*self.layer
    }

    pub fn layer_mut(&mut self) -> &mut WallLayer {
        &mut *self.layer
    }

    /// Place a wall and refresh the walls around it.
    ///
    /// Returns the refreshed neighbors; nothing happens out of bounds or
    /// when the cell already holds this wall.
    pub fn paint(&mut self, pos: TilePos) -> Vec<TilePos> {
        self.replace(pos, Some(self.wall_tile))
    }

    /// Clear a cell and refresh the walls around it
    pub fn erase(&mut self, pos: TilePos) -> Vec<TilePos> {
        self.replace(pos, None)
    }

    fn replace(&mut self, pos: TilePos, tile: Option<u32>) -> Vec<TilePos> {
        let was_wall = self.is_wall_at(pos);
        if self.layer.set(pos, tile).is_none() {
            return Vec::new();
        }
        if was_wall == self.is_wall_at(pos) {
            return Vec::new();
        }
        refresh_neighbors(pos, self)
    }
}

impl WallGrid for LayerWalls<'_> {
    fn is_wall_at(&self, pos: TilePos) -> bool {
        self.layer.get(pos) == Some(self.wall_tile)
    }

    fn refresh_appearance(&mut self, pos: TilePos) {
        self.layer.request_refresh(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const WALL: u32 = 4;
    const FLOOR: u32 = 9;

    fn layer() -> WallLayer {
        WallLayer::new("Walls".to_string(), Uuid::new_v4(), 5, 5)
    }

    #[test]
    fn test_only_matching_tile_is_wall() {
        let mut layer = layer();
        layer.set(TilePos::new(1, 1), Some(WALL));
        layer.set(TilePos::new(2, 1), Some(FLOOR));

        let grid = LayerWalls::new(&mut layer, WALL);
        assert!(grid.is_wall_at(TilePos::new(1, 1)));
        assert!(!grid.is_wall_at(TilePos::new(2, 1)));
        assert!(!grid.is_wall_at(TilePos::new(3, 1)));
        assert!(!grid.is_wall_at(TilePos::new(-1, 1)));
    }

    #[test]
    fn test_toggle_center_of_block() {
        let mut layer = layer();
        layer.fill_rect(TilePos::new(1, 1), 3, 3, Some(WALL));
        // A non-wall neighbor must not be refreshed
        layer.set(TilePos::new(3, 3), Some(FLOOR));

        let mut grid = LayerWalls::new(&mut layer, WALL);
        let refreshed = grid.erase(TilePos::new(2, 2));
        assert_eq!(refreshed.len(), 7);
        assert!(!refreshed.contains(&TilePos::new(2, 2)));
        assert!(!refreshed.contains(&TilePos::new(3, 3)));

        let pending = layer.take_pending_refresh();
        assert_eq!(pending.len(), 7);
        assert!(!pending.contains(&TilePos::new(2, 2)));
    }

    #[test]
    fn test_paint_same_tile_is_noop() {
        let mut layer = layer();
        layer.fill_rect(TilePos::new(1, 1), 2, 1, Some(WALL));

        let mut grid = LayerWalls::new(&mut layer, WALL);
        assert!(grid.paint(TilePos::new(1, 1)).is_empty());
        // Scan order from (1, 2): BR then B
        assert_eq!(
            grid.paint(TilePos::new(1, 2)),
            vec![TilePos::new(2, 1), TilePos::new(1, 1)]
        );
    }

    #[test]
    fn test_paint_out_of_bounds() {
        let mut layer = layer();
        let mut grid = LayerWalls::new(&mut layer, WALL);
        assert!(grid.paint(TilePos::new(7, 0)).is_empty());
        assert_eq!(layer.pending_refresh().count(), 0);
    }
}

//! The wall tile: neighbor mask in, image out

use crate::assets::{TileAssets, TileImage};
use crate::cache::VariantCache;
use crate::mask::{neighbor_mask, refresh_neighbors, WallGrid};
use crate::synth::compose;
use crate::{reduce, AutotileError, Side};
use smart_wall_core::{CornerRules, FlatLayout, TilePos, WallTileset};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// One wall tile type together with its art and variant cache
#[derive(Debug)]
pub struct WallTile {
    tile_id: u32,
    assets: TileAssets,
    corner_rules: CornerRules,
    cache: VariantCache,
}

impl WallTile {
    /// Create a wall tile using the stock corner rules
    pub fn new(tile_id: u32, assets: TileAssets) -> Self {
        Self {
            tile_id,
            assets,
            corner_rules: CornerRules::default(),
            cache: VariantCache::new(),
        }
    }

    pub fn with_corner_rules(mut self, corner_rules: CornerRules) -> Self {
        self.corner_rules = corner_rules;
        self
    }

    /// Validate a tileset description and load its images
    pub fn from_tileset(tileset: &WallTileset, base_dir: &Path) -> Result<Self, AutotileError> {
        tileset.validate()?;
        let assets = TileAssets::load(tileset, base_dir)?;
        Ok(Self::new(tileset.wall_tile, assets).with_corner_rules(tileset.corner_rules))
    }

    pub fn tile_id(&self) -> u32 {
        self.tile_id
    }

    pub fn assets(&self) -> &TileAssets {
        &self.assets
    }

    pub fn cache(&self) -> &VariantCache {
        &self.cache
    }

    /// Whether a cell's content is this wall
    pub fn is_wall(&self, content: Option<u32>) -> bool {
        content == Some(self.tile_id)
    }

    /// Neighbor mask of the cell at `pos`
    pub fn neighbor_mask<G>(&self, pos: TilePos, grid: &G) -> Side
    where
        G: WallGrid + ?Sized,
    {
        neighbor_mask(pos, |p| grid.is_wall_at(p))
    }

    /// The image to draw for the wall at `pos`
    pub fn get_appearance<G>(&self, pos: TilePos, grid: &G) -> Result<TileImage, AutotileError>
    where
        G: WallGrid + ?Sized,
    {
        self.appearance_for_mask(self.neighbor_mask(pos, grid))
    }

    /// The image for a raw neighbor mask
    pub fn appearance_for_mask(&self, mask: Side) -> Result<TileImage, AutotileError> {
        if let Some(image) = self.cache.get_by_mask(mask)? {
            return Ok(image);
        }

        let image = match &self.assets {
            TileAssets::Flat(sprites) if sprites.layout == FlatLayout::ByMask => {
                self.cache.record_miss();
                sprites.by_mask(mask)?
            }
            TileAssets::Flat(sprites) => {
                let pattern = reduce(mask)?;
                self.cache
                    .get_or_try_insert_with(pattern, |p| sprites.by_pattern(p))?
            }
            TileAssets::Compose(fragments) => {
                let pattern = reduce(mask)?;
                self.cache.get_or_try_insert_with(pattern, |p| {
                    compose(p, fragments, &self.corner_rules).map(Arc::new)
                })?
            }
        };

        self.cache.remember_mask(mask, image.clone())?;
        Ok(image)
    }

    /// Refresh the walls around `pos` after its content changed
    pub fn refresh_tile<G>(&self, pos: TilePos, grid: &mut G) -> Vec<TilePos>
    where
        G: WallGrid + ?Sized,
    {
        refresh_neighbors(pos, grid)
    }

    /// Swap in new art; every cached variant is discarded
    pub fn set_assets(&mut self, assets: TileAssets) -> Result<(), AutotileError> {
        self.assets = assets;
        self.cache.clear()?;
        debug!("Wall tile {} assets replaced", self.tile_id);
        Ok(())
    }

    /// Replace the corner rules; every cached variant is discarded
    pub fn set_corner_rules(&mut self, corner_rules: CornerRules) -> Result<(), AutotileError> {
        self.corner_rules = corner_rules;
        self.cache.clear()
    }
}

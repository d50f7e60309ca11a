//! Tile art used to produce wall variants

use crate::{AutotileError, Pattern, Side};
use image::RgbaImage;
use smart_wall_core::{FlatLayout, FragmentRef, VariantStrategy, WallTileset};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// A finished wall image, shared between every cell that uses it
pub type TileImage = Arc<RgbaImage>;

/// The pieces a composed wall tile is built from
#[derive(Debug, Clone)]
pub struct FragmentSet {
    /// The fully surrounded tile; also supplies the centre
    pub filled: RgbaImage,
    /// Edge fragments, clockwise from the top
    pub edges: Vec<RgbaImage>,
    pub holes: Vec<RgbaImage>,
}

impl FragmentSet {
    pub fn new(filled: RgbaImage, edges: Vec<RgbaImage>, holes: Vec<RgbaImage>) -> Self {
        Self {
            filled,
            edges,
            holes,
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.filled.width()
    }

    /// Size of one cell of the 3x3 grid
    pub fn fragment_size(&self) -> u32 {
        self.tile_size() / 3
    }

    pub fn get(&self, fragment: FragmentRef) -> Option<&RgbaImage> {
        match fragment {
            FragmentRef::Edge(i) => self.edges.get(i),
            FragmentRef::Hole(i) => self.holes.get(i),
        }
    }
}

/// Pre-drawn variants
#[derive(Debug, Clone)]
pub struct FlatSprites {
    pub layout: FlatLayout,
    pub sprites: Vec<TileImage>,
}

impl FlatSprites {
    pub fn new(layout: FlatLayout, sprites: Vec<RgbaImage>) -> Self {
        Self {
            layout,
            sprites: sprites.into_iter().map(Arc::new).collect(),
        }
    }

    /// Sprite for a raw neighbor mask (`ByMask` layout)
    pub fn by_mask(&self, mask: Side) -> Result<TileImage, AutotileError> {
        self.sprite(mask.bits() as usize)
    }

    /// Sprite for a canonical pattern (`ByPattern` layout)
    pub fn by_pattern(&self, pattern: Pattern) -> Result<TileImage, AutotileError> {
        self.sprite(pattern.canonical_index())
    }

    fn sprite(&self, index: usize) -> Result<TileImage, AutotileError> {
        self.sprites.get(index).cloned().ok_or_else(|| {
            AutotileError::MissingAsset(format!(
                "no sprite at index {} ({} provided)",
                index,
                self.sprites.len()
            ))
        })
    }
}

/// The art of one wall tile
#[derive(Debug, Clone)]
pub enum TileAssets {
    Compose(FragmentSet),
    Flat(FlatSprites),
}

impl TileAssets {
    /// Load the images named by a tileset; paths are relative to `base_dir`
    pub fn load(tileset: &WallTileset, base_dir: &Path) -> Result<Self, AutotileError> {
        let assets = match &tileset.strategy {
            VariantStrategy::Compose {
                filled,
                edges,
                holes,
            } => {
                let filled = load_image(base_dir, filled)?;
                if filled.dimensions() != (tileset.tile_size, tileset.tile_size) {
                    return Err(AutotileError::MissingAsset(format!(
                        "filled tile is {}x{}, expected {}x{}",
                        filled.width(),
                        filled.height(),
                        tileset.tile_size,
                        tileset.tile_size
                    )));
                }
                let edges = load_images(base_dir, edges)?;
                let holes = load_images(base_dir, holes)?;
                TileAssets::Compose(FragmentSet::new(filled, edges, holes))
            }
            VariantStrategy::Flat { layout, sprites } => {
                TileAssets::Flat(FlatSprites::new(*layout, load_images(base_dir, sprites)?))
            }
        };

        debug!("Loaded wall assets for tileset '{}'", tileset.name);

        Ok(assets)
    }
}

fn load_image(base_dir: &Path, path: &str) -> Result<RgbaImage, AutotileError> {
    let image = image::open(base_dir.join(path))
        .map_err(|e| AutotileError::ImageError(format!("{}: {}", path, e)))?;
    Ok(image.to_rgba8())
}

fn load_images(base_dir: &Path, paths: &[String]) -> Result<Vec<RgbaImage>, AutotileError> {
    paths.iter().map(|path| load_image(base_dir, path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce;
    use image::Rgba;

    fn solid(size: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([value, value, value, 255]))
    }

    fn save(dir: &Path, name: &str, image: &RgbaImage) -> String {
        image.save(dir.join(name)).unwrap();
        name.to_string()
    }

    #[test]
    fn test_fragment_lookup() {
        let set = FragmentSet::new(
            solid(9, 0),
            (0..8).map(|i| solid(3, i)).collect(),
            (0..2).map(|i| solid(3, 100 + i)).collect(),
        );

        assert_eq!(set.tile_size(), 9);
        assert_eq!(set.fragment_size(), 3);
        assert_eq!(set.get(FragmentRef::Edge(7)).unwrap().get_pixel(0, 0)[0], 7);
        assert_eq!(set.get(FragmentRef::Hole(1)).unwrap().get_pixel(0, 0)[0], 101);
        assert!(set.get(FragmentRef::Hole(2)).is_none());
    }

    #[test]
    fn test_flat_by_pattern_index() {
        let sprites = FlatSprites::new(
            FlatLayout::ByPattern,
            (0..48).map(|i| solid(2, i as u8)).collect(),
        );

        let pattern = reduce(Side::ALL).unwrap();
        assert_eq!(sprites.by_pattern(pattern).unwrap().get_pixel(0, 0)[0], 47);
    }

    #[test]
    fn test_flat_missing_sprite() {
        let sprites = FlatSprites::new(FlatLayout::ByMask, vec![solid(2, 0); 10]);
        assert!(sprites.by_mask(Side::from_bits_retain(9)).is_ok());
        assert!(matches!(
            sprites.by_mask(Side::from_bits_retain(10)),
            Err(AutotileError::MissingAsset(_))
        ));
    }

    #[test]
    fn test_load_composed_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let filled = save(dir.path(), "filled.png", &solid(12, 200));
        let edges = (0..8)
            .map(|i| save(dir.path(), &format!("edge_{i}.png"), &solid(4, i)))
            .collect();
        let holes = (0..8)
            .map(|i| save(dir.path(), &format!("hole_{i}.png"), &solid(4, 50 + i)))
            .collect();
        let tileset =
            WallTileset::new_composed("Brick".to_string(), 12, 1, filled, edges, holes);

        let assets = TileAssets::load(&tileset, dir.path()).unwrap();
        match assets {
            TileAssets::Compose(set) => {
                assert_eq!(set.tile_size(), 12);
                assert_eq!(set.edges.len(), 8);
                assert_eq!(set.holes[3].get_pixel(1, 1)[0], 53);
            }
            other => panic!("Expected composed assets, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_wrong_filled_size() {
        let dir = tempfile::tempdir().unwrap();
        let filled = save(dir.path(), "filled.png", &solid(9, 200));
        let tileset = WallTileset::new_composed(
            "Brick".to_string(),
            12,
            1,
            filled,
            Vec::new(),
            Vec::new(),
        );

        assert!(matches!(
            TileAssets::load(&tileset, dir.path()),
            Err(AutotileError::MissingAsset(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let tileset = WallTileset::new_flat(
            "Stone".to_string(),
            8,
            1,
            FlatLayout::ByPattern,
            vec!["absent.png".to_string()],
        );

        assert!(matches!(
            TileAssets::load(&tileset, dir.path()),
            Err(AutotileError::ImageError(msg)) if msg.contains("absent.png")
        ));
    }
}

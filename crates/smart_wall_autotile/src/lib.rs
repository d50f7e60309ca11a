//! Wall autotiling
//!
//! This crate picks the image for a wall cell from the walls around it:
//!
//! 1. [`neighbor_mask`] scans the 8 neighbors into a [`Side`] mask.
//! 2. [`reduce`] folds the 256 masks into 48 canonical [`Pattern`]s.
//! 3. [`WallTile`] turns a pattern into an image, either by selecting a
//!    pre-drawn sprite or by composing one from 3x3 fragments, and caches
//!    the result per pattern.
//!
//! # Example
//!
//! ```rust,ignore
//! use smart_wall_autotile::{LayerWalls, WallTile};
//! use smart_wall_core::{load_tileset, TilePos, WallLayer};
//!
//! let tileset = load_tileset(Path::new("assets/walls/brick.toml"))?;
//! let wall = WallTile::from_tileset(&tileset, Path::new("assets/walls"))?;
//!
//! let mut grid = LayerWalls::new(&mut layer, wall.tile_id());
//! for pos in grid.paint(TilePos::new(4, 2)) {
//!     let image = wall.get_appearance(pos, &grid)?;
//!     // hand `image` to the renderer
//! }
//! ```

pub mod assets;
pub mod cache;
mod error;
pub mod grid;
pub mod mask;
pub mod pattern;
mod side;
pub mod synth;
pub mod wall;

// Re-export main types at crate root
pub use assets::{FlatSprites, FragmentSet, TileAssets, TileImage};
pub use cache::{CacheStats, VariantCache};
pub use error::AutotileError;
pub use grid::LayerWalls;
pub use mask::{neighbor, neighbor_mask, refresh_neighbors, WallGrid};
pub use pattern::{canonical_patterns, reduce, Pattern};
pub use side::Side;
pub use synth::{cell_origin, compose, fragment_for};
pub use wall::WallTile;

// Re-export smart_wall_core
pub use smart_wall_core;

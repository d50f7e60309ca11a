//! Core data structures for smart_wall
//!
//! This crate provides the plain data types the wall autotiler works on:
//! - `TilePos` - A cell coordinate on the grid
//! - `WallLayer` - A rectangular tile layer usable as the host grid
//! - `WallTileset` - Wall art description, loaded from JSON or TOML
//!
//! # Example
//!
//! ```rust,ignore
//! use smart_wall_core::load_tileset;
//!
//! let tileset = load_tileset(Path::new("assets/walls/brick.toml"))?;
//! println!("{} uses {}px tiles", tileset.name, tileset.tile_size);
//! ```

mod layer;
mod pos;
mod tileset;

pub use layer::WallLayer;
pub use pos::TilePos;
pub use tileset::{
    CornerRule, CornerRules, FlatLayout, FragmentRef, VariantStrategy, WallTileset,
    EDGE_FRAGMENT_COUNT, HOLE_FRAGMENT_COUNT, MASK_SPRITE_COUNT, PATTERN_SPRITE_COUNT,
};

use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating tilesets
#[derive(Debug, Error)]
pub enum TilesetError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

/// Load a tileset from a `.toml` or JSON file
pub fn load_tileset(path: &Path) -> Result<WallTileset, TilesetError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| TilesetError::IoError(e.to_string()))?;

    if is_toml(path) {
        parse_tileset_toml(&content)
    } else {
        parse_tileset_json(&content)
    }
}

/// Parse a tileset from a JSON string
pub fn parse_tileset_json(json: &str) -> Result<WallTileset, TilesetError> {
    let tileset: WallTileset =
        serde_json::from_str(json).map_err(|e| TilesetError::ParseError(e.to_string()))?;

    tileset.validate()?;

    Ok(tileset)
}

/// Parse a tileset from a TOML string
pub fn parse_tileset_toml(source: &str) -> Result<WallTileset, TilesetError> {
    let tileset: WallTileset =
        toml::from_str(source).map_err(|e| TilesetError::ParseError(e.to_string()))?;

    tileset.validate()?;

    Ok(tileset)
}

/// Save a tileset, as TOML for `.toml` paths and JSON otherwise
pub fn save_tileset(tileset: &WallTileset, path: &Path) -> Result<(), TilesetError> {
    let content = if is_toml(path) {
        toml::to_string_pretty(tileset).map_err(|e| TilesetError::ParseError(e.to_string()))?
    } else {
        serde_json::to_string_pretty(tileset)
            .map_err(|e| TilesetError::ParseError(e.to_string()))?
    };

    std::fs::write(path, content).map_err(|e| TilesetError::IoError(e.to_string()))?;

    Ok(())
}

use smart_wall_core::TilesetError;
use thiserror::Error;

/// Errors produced while resolving wall appearances
#[derive(Debug, Error)]
pub enum AutotileError {
    /// The cardinal part of a neighbor mask fell outside the known cases.
    /// Always a bug, never caused by input.
    #[error("Invalid pattern for neighbor mask {0:#010b}")]
    InvalidPattern(u8),
    /// The assets cannot produce the requested variant
    #[error("Missing asset: {0}")]
    MissingAsset(String),
    #[error("Image error: {0}")]
    ImageError(String),
    #[error("Variant cache lock poisoned")]
    LockPoisoned,
    #[error(transparent)]
    Tileset(#[from] TilesetError),
}

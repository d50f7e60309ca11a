//! Wall tileset descriptions
//!
//! A [`WallTileset`] names the art a wall tile is drawn from and how the
//! variants are produced: either composed from small edge/hole fragments
//! around a filled tile, or picked from a flat sprite list.

use crate::TilesetError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of edge fragments: one per direction, clockwise from the top
pub const EDGE_FRAGMENT_COUNT: usize = 8;

/// Number of hole fragments referenced by the default corner rules
pub const HOLE_FRAGMENT_COUNT: usize = 8;

/// Sprites needed by a flat tileset indexed by raw neighbor mask
pub const MASK_SPRITE_COUNT: usize = 256;

/// Sprites needed by a flat tileset indexed by canonical pattern
pub const PATTERN_SPRITE_COUNT: usize = 48;

/// Reference to one fragment image of a composed tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentRef {
    Edge(usize),
    Hole(usize),
}

/// Fragment choice for one corner, keyed by which of the two adjacent
/// cardinal neighbors are walls.
///
/// "Clockwise" is the cardinal after the corner going clockwise from the
/// top (R for the top-right corner), "counter-clockwise" the one before
/// (T for the top-right corner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerRule {
    pub neither: FragmentRef,
    pub both: FragmentRef,
    pub clockwise_only: FragmentRef,
    pub counter_clockwise_only: FragmentRef,
}

impl CornerRule {
    pub const fn new(
        neither: FragmentRef,
        both: FragmentRef,
        clockwise_only: FragmentRef,
        counter_clockwise_only: FragmentRef,
    ) -> Self {
        Self {
            neither,
            both,
            clockwise_only,
            counter_clockwise_only,
        }
    }

    /// Pick the fragment for the given adjacent-cardinal state
    pub fn select(&self, counter_clockwise: bool, clockwise: bool) -> FragmentRef {
        match (counter_clockwise, clockwise) {
            (false, false) => self.neither,
            (true, true) => self.both,
            (false, true) => self.clockwise_only,
            (true, false) => self.counter_clockwise_only,
        }
    }

    fn refs(&self) -> [FragmentRef; 4] {
        [
            self.neither,
            self.both,
            self.clockwise_only,
            self.counter_clockwise_only,
        ]
    }
}

/// Corner fragment rules for the four diagonal positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerRules {
    pub top_right: CornerRule,
    pub bottom_right: CornerRule,
    pub bottom_left: CornerRule,
    pub top_left: CornerRule,
}

impl Default for CornerRules {
    /// The layout of the stock wall fragment sheet.
    ///
    /// A corner with neither cardinal uses the outer edge piece and a
    /// corner with one cardinal uses a hole piece, matching how that sheet
    /// is drawn rather than a generic neither/one-sided naming.
    fn default() -> Self {
        use FragmentRef::{Edge, Hole};
        Self {
            top_right: CornerRule::new(Edge(1), Hole(5), Hole(4), Hole(6)),
            bottom_right: CornerRule::new(Edge(3), Hole(7), Hole(6), Hole(0)),
            bottom_left: CornerRule::new(Edge(5), Hole(1), Hole(0), Hole(2)),
            top_left: CornerRule::new(Edge(7), Hole(3), Hole(2), Hole(4)),
        }
    }
}

impl CornerRules {
    /// Every fragment referenced by any rule
    pub fn referenced(&self) -> impl Iterator<Item = FragmentRef> {
        [
            self.top_right,
            self.bottom_right,
            self.bottom_left,
            self.top_left,
        ]
        .into_iter()
        .flat_map(|rule| rule.refs())
    }
}

/// How a flat sprite list is indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatLayout {
    /// One sprite per raw neighbor mask (256 sprites)
    #[default]
    ByMask,
    /// One sprite per canonical pattern, in ascending pattern order (48 sprites)
    ByPattern,
}

impl FlatLayout {
    /// Number of sprites this layout requires
    pub fn sprite_count(&self) -> usize {
        match self {
            FlatLayout::ByMask => MASK_SPRITE_COUNT,
            FlatLayout::ByPattern => PATTERN_SPRITE_COUNT,
        }
    }
}

/// How wall variants are produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariantStrategy {
    /// Compose each variant from a filled tile and 3x3 fragments
    Compose {
        /// Path to the fully filled tile image
        filled: String,
        /// Edge fragment paths, clockwise from the top
        edges: Vec<String>,
        /// Hole fragment paths
        holes: Vec<String>,
    },
    /// Pick pre-drawn variants from a sprite list
    Flat {
        #[serde(default)]
        layout: FlatLayout,
        sprites: Vec<String>,
    },
}

/// A wall tile definition (paths relative to the tileset file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallTileset {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    /// Full tile size in pixels (square tiles)
    pub tile_size: u32,
    /// Tile id that marks a cell as this wall
    pub wall_tile: u32,
    pub strategy: VariantStrategy,
    #[serde(default)]
    pub corner_rules: CornerRules,
}

impl WallTileset {
    /// Create a composed tileset using the stock corner rules
    pub fn new_composed(
        name: String,
        tile_size: u32,
        wall_tile: u32,
        filled: String,
        edges: Vec<String>,
        holes: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tile_size,
            wall_tile,
            strategy: VariantStrategy::Compose {
                filled,
                edges,
                holes,
            },
            corner_rules: CornerRules::default(),
        }
    }

    /// Create a flat tileset
    pub fn new_flat(
        name: String,
        tile_size: u32,
        wall_tile: u32,
        layout: FlatLayout,
        sprites: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tile_size,
            wall_tile,
            strategy: VariantStrategy::Flat { layout, sprites },
            corner_rules: CornerRules::default(),
        }
    }

    /// Size of one fragment (a third of the tile)
    pub fn fragment_size(&self) -> u32 {
        self.tile_size / 3
    }

    /// Check that the description is complete for its strategy
    pub fn validate(&self) -> Result<(), TilesetError> {
        if self.tile_size == 0 {
            return Err(TilesetError::ValidationError(format!(
                "tileset '{}' has a zero tile size",
                self.name
            )));
        }

        match &self.strategy {
            VariantStrategy::Compose { edges, holes, .. } => {
                if self.tile_size % 3 != 0 {
                    return Err(TilesetError::ValidationError(format!(
                        "tileset '{}': tile size {} is not divisible by 3",
                        self.name, self.tile_size
                    )));
                }
                if edges.len() != EDGE_FRAGMENT_COUNT {
                    return Err(TilesetError::ValidationError(format!(
                        "tileset '{}': expected {} edge fragments, found {}",
                        self.name,
                        EDGE_FRAGMENT_COUNT,
                        edges.len()
                    )));
                }
                for fragment in self.corner_rules.referenced() {
                    let present = match fragment {
                        FragmentRef::Edge(i) => i < edges.len(),
                        FragmentRef::Hole(i) => i < holes.len(),
                    };
                    if !present {
                        return Err(TilesetError::ValidationError(format!(
                            "tileset '{}': corner rules reference {:?}, which is not provided",
                            self.name, fragment
                        )));
                    }
                }
            }
            VariantStrategy::Flat { layout, sprites } => {
                if sprites.len() != layout.sprite_count() {
                    return Err(TilesetError::ValidationError(format!(
                        "tileset '{}': {:?} layout needs {} sprites, found {}",
                        self.name,
                        layout,
                        layout.sprite_count(),
                        sprites.len()
                    )));
                }
            }
        }

        Ok(())
    }
}

//! Lazily filled cache of wall variants
//!
//! Images are keyed by [`Pattern`], so every raw mask that reduces to the
//! same pattern shares one image. A 256-slot index by raw mask sits in
//! front of it so repeated masks skip the reducer entirely.
//!
//! Entries are never replaced once written. When two threads miss on the
//! same pattern at once both may build the image, but the first insert
//! wins and both callers get the stored one.

use crate::assets::TileImage;
use crate::{AutotileError, Pattern, Side};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tracing::{debug, trace};

/// Cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from the cache
    pub hits: u64,
    /// Requests that had to build or select an image
    pub misses: u64,
    /// Images successfully built for the pattern map
    pub builds: u64,
}

#[derive(Debug)]
struct Entries {
    by_mask: Vec<Option<TileImage>>,
    by_pattern: HashMap<Pattern, TileImage>,
}

impl Default for Entries {
    fn default() -> Self {
        Self {
            by_mask: vec![None; 256],
            by_pattern: HashMap::new(),
        }
    }
}

/// Pattern-keyed image cache, safe to share between threads
#[derive(Debug, Default)]
pub struct VariantCache {
    entries: RwLock<Entries>,
    hits: AtomicU64,
    misses: AtomicU64,
    builds: AtomicU64,
}

impl VariantCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image previously stored for a raw mask
    pub fn get_by_mask(&self, mask: Side) -> Result<Option<TileImage>, AutotileError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AutotileError::LockPoisoned)?;
        let image = entries.by_mask[mask.bits() as usize].clone();
        if image.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!("Variant cache hit for mask {:?}", mask);
        }
        Ok(image)
    }

    /// Image stored for a pattern
    pub fn get(&self, pattern: Pattern) -> Result<Option<TileImage>, AutotileError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AutotileError::LockPoisoned)?;
        Ok(entries.by_pattern.get(&pattern).cloned())
    }

    /// Return the image for `pattern`, building it with `make` on a miss.
    ///
    /// `make` runs without holding the lock. If it fails nothing is stored.
    pub fn get_or_try_insert_with<F>(
        &self,
        pattern: Pattern,
        make: F,
    ) -> Result<TileImage, AutotileError>
    where
        F: FnOnce(Pattern) -> Result<TileImage, AutotileError>,
    {
        if let Some(image) = self.get(pattern)? {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!("Variant cache hit for pattern {:?}", pattern.side());
            return Ok(image);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let image = make(pattern)?;
        self.builds.fetch_add(1, Ordering::Relaxed);

        let mut entries = self
            .entries
            .write()
            .map_err(|_| AutotileError::LockPoisoned)?;
        let stored = entries.by_pattern.entry(pattern).or_insert(image).clone();
        debug!(
            "Cached wall variant for pattern {:?} ({} cached)",
            pattern.side(),
            entries.by_pattern.len()
        );
        Ok(stored)
    }

    /// Point a raw mask at an image so the next lookup skips reduction
    pub fn remember_mask(&self, mask: Side, image: TileImage) -> Result<(), AutotileError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AutotileError::LockPoisoned)?;
        entries.by_mask[mask.bits() as usize].get_or_insert(image);
        Ok(())
    }

    /// Count a miss answered without going through the pattern map
    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of distinct patterns cached
    pub fn len(&self) -> Result<usize, AutotileError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AutotileError::LockPoisoned)?;
        Ok(entries.by_pattern.len())
    }

    pub fn is_empty(&self) -> Result<bool, AutotileError> {
        Ok(self.len()? == 0)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            builds: self.builds.load(Ordering::Relaxed),
        }
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) -> Result<(), AutotileError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AutotileError::LockPoisoned)?;
        *entries = Entries::default();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.builds.store(0, Ordering::Relaxed);
        debug!("Variant cache cleared");
        Ok(())
    }
}

// Sprite catalog contract and the stock forest inventory

use std::collections::HashMap;

use super::AssetError;

/// Probe-based view of the presentation layer's sprite store.
///
/// Frame identifiers follow the `prefix/action_index` convention, e.g.
/// `hero/run_3`. Actors build their sequences by probing at construction
/// time, so a build with fewer frames on disk degrades to shorter
/// sequences instead of failing.
pub trait SpriteCatalog {
    /// Whether the frame `prefix/action_index` is available
    fn frame_exists(&self, prefix: &str, action: &str, index: usize) -> bool;

    /// Build the longest contiguous run of frames for an action, starting
    /// at index 0, up to `max_frames`.
    fn sequence(
        &self,
        prefix: &str,
        action: &str,
        max_frames: usize,
    ) -> Result<Vec<String>, AssetError> {
        let frames: Vec<String> = (0..max_frames)
            .take_while(|&i| self.frame_exists(prefix, action, i))
            .map(|i| format!("{prefix}/{action}_{i}"))
            .collect();

        if frames.is_empty() {
            Err(AssetError::MissingSequence(format!("{prefix}/{action}")))
        } else {
            Ok(frames)
        }
    }
}

/// Catalog backed by a fixed inventory of frame counts per (prefix, action)
#[derive(Debug, Default)]
pub struct StaticCatalog {
    counts: HashMap<(String, String), usize>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `count` frames for `prefix/action`
    pub fn register(&mut self, prefix: &str, action: &str, count: usize) {
        self.counts
            .insert((prefix.to_string(), action.to_string()), count);
    }

    /// The stock forest sprite inventory
    pub fn forest_defaults() -> Self {
        let mut catalog = Self::new();

        catalog.register("hero", "run", 8);
        catalog.register("hero", "idle", 4);
        catalog.register("hero", "jump", 1);
        catalog.register("hero", "attack", 8);
        catalog.register("hero", "hit", 4);
        catalog.register("hero", "death", 9);

        for prefix in ["enemy_scout", "enemy_brute"] {
            catalog.register(prefix, "walk", 4);
            catalog.register(prefix, "attack", 8);
            catalog.register(prefix, "death", 4);
            catalog.register(prefix, "idle", 4);
        }

        catalog
    }
}

impl SpriteCatalog for StaticCatalog {
    fn frame_exists(&self, prefix: &str, action: &str, index: usize) -> bool {
        self.counts
            .get(&(prefix.to_string(), action.to_string()))
            .is_some_and(|&count| index < count)
    }
}

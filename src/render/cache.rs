use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::ViewportConfig;
use crate::error::Result;
use crate::plan::FloorPlan;
use crate::scene::Scene;

use super::render;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    plan: String,
    viewport: String,
}

/// Caller-owned memo of rendered scenes keyed by plan identity and viewport.
///
/// The caller decides what identifies a plan (an id plus a revision, for
/// example) and must [`invalidate`](Self::invalidate) it when the plan changes.
#[derive(Debug, Default)]
pub struct SceneCache {
    entries: HashMap<CacheKey, Scene>,
}

impl SceneCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached scene for `(plan_key, config)`, rendering on a miss.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`render`]; failed renders are not cached.
    pub fn get_or_render(
        &mut self,
        plan_key: &str,
        plan: &FloorPlan,
        config: &ViewportConfig,
    ) -> Result<&Scene> {
        let key = CacheKey {
            plan: plan_key.to_owned(),
            viewport: serde_json::to_string(config)?,
        };
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(render(plan, config)?)),
        }
    }

    /// Drops every cached scene of one plan.
    pub fn invalidate(&mut self, plan_key: &str) {
        self.entries.retain(|key, _| key.plan != plan_key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

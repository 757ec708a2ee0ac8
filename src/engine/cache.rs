//! Seed-keyed geometry memo.

use super::models::SceneModel;

/// Holds the geometry for one seed and rebuilds it only when the seed
/// changes.
#[derive(Debug, Clone)]
pub struct GeometryCache<M> {
    entry: Option<(String, M)>,
    builds: u64,
}

impl<M> Default for GeometryCache<M> {
    fn default() -> Self {
        Self {
            entry: None,
            builds: 0,
        }
    }
}

impl<M: SceneModel> GeometryCache<M> {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry for `seed`, synthesizing it if the cached seed differs.
    pub fn get_or_build(&mut self, seed: &str) -> &M {
        if self.entry.as_ref().is_some_and(|(cached, _)| cached != seed) {
            self.entry = None;
        }
        let builds = &mut self.builds;
        let (_, model) = self.entry.get_or_insert_with(|| {
            log::debug!("synthesizing geometry for {seed:?}");
            *builds += 1;
            (seed.to_owned(), M::synthesize(seed))
        });
        model
    }

    /// Cached geometry, if any.
    #[must_use]
    pub fn current(&self) -> Option<&M> {
        self.entry.as_ref().map(|(_, model)| model)
    }

    /// Seed of the cached geometry.
    #[must_use]
    pub fn seed(&self) -> Option<&str> {
        self.entry.as_ref().map(|(seed, _)| seed.as_str())
    }

    /// Forget the cached geometry. The build counter is kept.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// How many times geometry has been synthesized.
    #[must_use]
    pub fn build_count(&self) -> u64 {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::models::{PocketModel, ProteinModel};

    #[test]
    fn builds_once_per_seed() {
        let mut cache = GeometryCache::<ProteinModel>::new();
        let first = cache.get_or_build("1CRN").backbone().len();
        for _ in 0..10 {
            assert_eq!(cache.get_or_build("1CRN").backbone().len(), first);
        }
        assert_eq!(cache.build_count(), 1);

        let _ = cache.get_or_build("4HHB");
        let _ = cache.get_or_build("1CRN");
        assert_eq!(cache.build_count(), 3);
        assert_eq!(cache.seed(), Some("1CRN"));
    }

    #[test]
    fn clear_drops_geometry_but_not_count() {
        let mut cache = GeometryCache::<PocketModel>::new();
        let _ = cache.get_or_build("Aspirin");
        cache.clear();
        assert!(cache.current().is_none());
        assert_eq!(cache.build_count(), 1);
        let _ = cache.get_or_build("Aspirin");
        assert_eq!(cache.build_count(), 2);
    }
}

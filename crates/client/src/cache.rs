use std::collections::{BTreeMap, BTreeSet};

use career_core::aggregate::{self, ProgressMap};
use career_core::catalog::RoadmapDefinition;
use career_core::model::{Percentage, Profile, RoadmapId};
use career_core::Catalog;

/// Session state kept between requests. Cleared on logout.
#[derive(Debug, Default)]
pub(crate) struct SessionCache {
    pub profile: Option<Profile>,
    pub progress: ProgressMap,
    checked: BTreeMap<&'static str, BTreeSet<&'static str>>,
}

impl SessionCache {
    pub fn start(&mut self, profile: Profile) {
        self.clear();
        self.profile = Some(profile);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Replace the progress map with a fresh server copy. Checked-step sets
    /// that no longer agree with the stored percentage are dropped.
    pub fn replace_progress(&mut self, progress: ProgressMap, catalog: &Catalog) {
        self.checked.retain(|roadmap_id, steps| {
            let Some(roadmap) = catalog.roadmap(roadmap_id) else {
                return false;
            };
            let stored = progress
                .get(*roadmap_id)
                .copied()
                .unwrap_or(Percentage::ZERO);
            aggregate::roadmap_percentage(roadmap, steps.iter()) == stored
        });
        self.progress = progress;
    }

    /// Fold in a freshly fetched percentage for one roadmap. Checked steps
    /// that disagree with it are dropped; an untouched roadmap stays absent.
    pub fn reconcile_roadmap(&mut self, roadmap: &'static RoadmapDefinition, stored: Percentage) {
        let agrees = self
            .checked
            .get(roadmap.id)
            .is_none_or(|steps| aggregate::roadmap_percentage(roadmap, steps.iter()) == stored);
        if !agrees {
            self.checked.remove(roadmap.id);
        }
        if stored == Percentage::ZERO && !self.progress.contains_key(roadmap.id) {
            return;
        }
        if let Ok(id) = RoadmapId::parse(roadmap.id) {
            self.progress.insert(id, stored);
        }
    }

    pub fn percentage(&self, roadmap_id: &str) -> Percentage {
        self.progress
            .get(roadmap_id)
            .copied()
            .unwrap_or(Percentage::ZERO)
    }

    /// Checked steps for a roadmap, seeded from the stored percentage the
    /// first time a roadmap is looked at.
    pub fn checked_steps(&self, roadmap: &'static RoadmapDefinition) -> BTreeSet<&'static str> {
        match self.checked.get(roadmap.id) {
            Some(steps) => steps.clone(),
            None => aggregate::reconstruct_completed(roadmap, self.percentage(roadmap.id))
                .into_iter()
                .collect(),
        }
    }

    pub fn commit_steps(
        &mut self,
        roadmap: &'static RoadmapDefinition,
        steps: BTreeSet<&'static str>,
        stored: Percentage,
    ) {
        self.checked.insert(roadmap.id, steps);
        if let Ok(id) = RoadmapId::parse(roadmap.id) {
            self.progress.insert(id, stored);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frontend() -> &'static RoadmapDefinition {
        Catalog::builtin().roadmap("frontend-dev").unwrap()
    }

    #[test]
    fn checked_steps_seed_from_stored_percentage() {
        let mut cache = SessionCache::default();
        let mut progress = ProgressMap::new();
        progress.insert(
            RoadmapId::parse("frontend-dev").unwrap(),
            Percentage::from_whole(57),
        );
        cache.replace_progress(progress, &Catalog::builtin());

        assert_eq!(cache.checked_steps(frontend()).len(), 3);
    }

    #[test]
    fn commit_keeps_exact_steps_until_server_disagrees() {
        let roadmap = frontend();
        let mut cache = SessionCache::default();
        let steps: BTreeSet<_> = roadmap.steps.iter().take(4).map(|s| s.id).collect();
        let stored = aggregate::roadmap_percentage(roadmap, steps.iter());
        cache.commit_steps(roadmap, steps.clone(), stored);
        assert_eq!(cache.checked_steps(roadmap), steps);

        let same = cache.progress.clone();
        cache.replace_progress(same, &Catalog::builtin());
        assert_eq!(cache.checked_steps(roadmap), steps);

        cache.replace_progress(ProgressMap::new(), &Catalog::builtin());
        assert!(cache.checked_steps(roadmap).is_empty());
    }

    #[test]
    fn reconcile_replaces_stale_steps_with_remote_value() {
        let roadmap = frontend();
        let mut cache = SessionCache::default();
        let first = BTreeSet::from([roadmap.steps[0].id]);
        cache.commit_steps(roadmap, first.clone(), Percentage::from_whole(14));

        cache.reconcile_roadmap(roadmap, Percentage::from_whole(14));
        assert_eq!(cache.checked_steps(roadmap), first);

        // Another session checked three steps in the meantime.
        cache.reconcile_roadmap(roadmap, Percentage::from_whole(43));
        assert_eq!(cache.percentage(roadmap.id).value(), 43.0);
        assert_eq!(cache.checked_steps(roadmap).len(), 3);
    }

    #[test]
    fn reconcile_keeps_untouched_roadmaps_absent() {
        let roadmap = frontend();
        let mut cache = SessionCache::default();
        cache.reconcile_roadmap(roadmap, Percentage::ZERO);
        assert!(cache.progress.is_empty());

        let first = BTreeSet::from([roadmap.steps[0].id]);
        cache.commit_steps(roadmap, first, Percentage::from_whole(14));
        cache.reconcile_roadmap(roadmap, Percentage::ZERO);
        assert_eq!(cache.progress.len(), 1);
        assert!(cache.checked_steps(roadmap).is_empty());
    }

    #[test]
    fn clear_forgets_everything() {
        let roadmap = frontend();
        let mut cache = SessionCache::default();
        let first = BTreeSet::from([roadmap.steps[0].id]);
        cache.commit_steps(roadmap, first, Percentage::from_whole(14));
        cache.clear();
        assert!(cache.profile.is_none());
        assert!(cache.progress.is_empty());
        assert!(cache.checked_steps(roadmap).is_empty());
    }
}

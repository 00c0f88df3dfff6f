//! Read-only roadmap and resource content.
//!
//! The built-in catalog is compiled in; tests build their own with
//! [`Catalog::new`].

use serde::Serialize;

mod data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepResourceKind {
    Video,
    Article,
    Course,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Article,
    Tutorial,
    Course,
    Tool,
}

/// Learning material attached to a roadmap step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResource {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: StepResourceKind,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub level: SkillLevel,
    pub resources: &'static [StepResource],
}

/// A named, ordered curriculum toward a career role.
///
/// Step order matters: reconstructing checked steps from a stored percentage
/// marks a prefix of `steps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub steps: &'static [Step],
}

impl RoadmapDefinition {
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn step(&self, step_id: &str) -> Option<&'static Step> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    #[must_use]
    pub fn summary(&self) -> RoadmapSummary {
        RoadmapSummary {
            id: self.id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            step_count: self.step_count(),
        }
    }
}

/// Listing view of a roadmap, without steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub step_count: usize,
}

/// Entry in the general resource library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub tags: &'static [&'static str],
}

impl Resource {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    roadmaps: &'static [RoadmapDefinition],
    resources: &'static [Resource],
}

impl Catalog {
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(data::ROADMAPS, data::RESOURCES)
    }

    #[must_use]
    pub fn new(roadmaps: &'static [RoadmapDefinition], resources: &'static [Resource]) -> Self {
        Self {
            roadmaps,
            resources,
        }
    }

    #[must_use]
    pub fn roadmaps(&self) -> &'static [RoadmapDefinition] {
        self.roadmaps
    }

    #[must_use]
    pub fn roadmap(&self, id: &str) -> Option<&'static RoadmapDefinition> {
        self.roadmaps.iter().find(|roadmap| roadmap.id == id)
    }

    #[must_use]
    pub fn resources(&self) -> &'static [Resource] {
        self.resources
    }

    /// Resources carrying `tag` (ASCII case-insensitive).
    #[must_use]
    pub fn resources_tagged(&self, tag: &str) -> Vec<&'static Resource> {
        self.resources.iter().filter(|r| r.has_tag(tag)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_has_four_roadmaps() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog.roadmaps().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            ["frontend-dev", "backend-dev", "fullstack-dev", "data-scientist"]
        );
        assert_eq!(catalog.roadmap("frontend-dev").unwrap().step_count(), 7);
    }

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut roadmap_ids = HashSet::new();
        for roadmap in catalog.roadmaps() {
            assert!(roadmap_ids.insert(roadmap.id), "duplicate {}", roadmap.id);
            let mut step_ids = HashSet::new();
            for step in roadmap.steps {
                assert!(step_ids.insert(step.id), "duplicate step {}", step.id);
            }
        }
    }

    #[test]
    fn every_link_is_a_valid_url() {
        let catalog = Catalog::builtin();
        for roadmap in catalog.roadmaps() {
            for step in roadmap.steps {
                for resource in step.resources {
                    url::Url::parse(resource.url).unwrap();
                }
            }
        }
        for resource in catalog.resources() {
            url::Url::parse(resource.link).unwrap();
        }
    }

    #[test]
    fn dream_job_suggestions_exist_in_catalog() {
        let catalog = Catalog::builtin();
        for job in crate::model::DreamJob::ALL {
            assert!(catalog.roadmap(job.suggested_roadmap()).is_some());
        }
    }

    #[test]
    fn tag_filter_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let tagged = catalog.resources_tagged("Frontend");
        assert!(!tagged.is_empty());
        assert!(tagged.iter().all(|r| r.has_tag("frontend")));
        assert_eq!(catalog.resources_tagged("all").len(), catalog.resources().len());
    }

    #[test]
    fn step_lookup() {
        let roadmap = Catalog::builtin().roadmap("backend-dev").unwrap();
        assert_eq!(roadmap.step("databases").map(|s| s.id), Some("databases"));
        assert!(roadmap.step("frameworks").is_none());
        assert_eq!(roadmap.summary().step_count, 5);
    }
}

//! Pure progress arithmetic: step counts to percentages, and per-roadmap
//! percentages to dashboard figures.
//!
//! Two averaging conventions exist and are kept apart on purpose:
//! [`overall_progress`] averages only roadmaps the user has touched (the
//! dashboard figure), while [`all_roadmaps`] lists every catalog roadmap with
//! untouched ones at 0 and [`catalog_average`] averages over that full list.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::catalog::{Catalog, RoadmapDefinition};
use crate::model::{DreamJob, Percentage, RoadmapId};

/// Progress keyed by roadmap; absent roadmaps are untouched.
pub type ProgressMap = BTreeMap<RoadmapId, Percentage>;

/// Hours of study assumed per percentage point when estimating time spent.
pub const HOURS_PER_POINT: f64 = 0.5;

/// `round(100 * completed / total)`, half rounding up.
///
/// Zero steps yields 0%. `completed` beyond `total_steps` is capped so the
/// result never exceeds 100.
#[must_use]
pub fn step_percentage(total_steps: usize, completed: usize) -> Percentage {
    if total_steps == 0 {
        return Percentage::ZERO;
    }
    let completed = completed.min(total_steps);
    let whole = (200 * completed + total_steps) / (2 * total_steps);
    Percentage::from_whole(u8::try_from(whole).unwrap_or(100))
}

/// Percentage for a set of checked step ids.
///
/// Only the number of distinct ids that belong to `roadmap` matters; unknown
/// ids and duplicates are ignored.
#[must_use]
pub fn roadmap_percentage<I, S>(roadmap: &RoadmapDefinition, completed: I) -> Percentage
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    for id in completed {
        if let Some(step) = roadmap.step(id.as_ref()) {
            seen.insert(step.id);
        }
    }
    step_percentage(roadmap.step_count(), seen.len())
}

/// Canonical checked steps for a stored percentage: the first
/// `floor(N * p / 100)` steps in catalog order.
///
/// Lossy: many step sets share one percentage, and rounding means e.g. 4 of
/// 7 steps (57%) reconstructs as 3 steps.
#[must_use]
pub fn reconstruct_completed(
    roadmap: &RoadmapDefinition,
    percentage: Percentage,
) -> Vec<&'static str> {
    let total = roadmap.step_count();
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let count = ((total as f64) * percentage.value() / 100.0).floor() as usize;
    roadmap
        .steps
        .iter()
        .take(count.min(total))
        .map(|step| step.id)
        .collect()
}

/// Dashboard overall progress: mean over touched roadmaps only, 0 when the
/// user has touched none.
#[must_use]
pub fn overall_progress(progress: &ProgressMap) -> f64 {
    if progress.is_empty() {
        return 0.0;
    }
    let sum: f64 = progress.values().map(|p| p.value()).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = progress.len() as f64;
    sum / count
}

/// One row of the all-roadmaps view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapProgress {
    pub roadmap_id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub progress: Percentage,
    pub touched: bool,
}

/// Every catalog roadmap in catalog order; untouched roadmaps report 0.
#[must_use]
pub fn all_roadmaps(catalog: &Catalog, progress: &ProgressMap) -> Vec<RoadmapProgress> {
    catalog
        .roadmaps()
        .iter()
        .map(|roadmap| {
            let stored = progress.get(roadmap.id).copied();
            RoadmapProgress {
                roadmap_id: roadmap.id,
                title: roadmap.title,
                icon: roadmap.icon,
                progress: stored.unwrap_or(Percentage::ZERO),
                touched: stored.is_some(),
            }
        })
        .collect()
}

/// Mean over the whole catalog, counting untouched roadmaps as 0.
#[must_use]
pub fn catalog_average(catalog: &Catalog, progress: &ProgressMap) -> f64 {
    let rows = all_roadmaps(catalog, progress);
    if rows.is_empty() {
        return 0.0;
    }
    let sum: f64 = rows.iter().map(|row| row.progress.value()).sum();
    #[allow(clippy::cast_precision_loss)]
    let count = rows.len() as f64;
    sum / count
}

/// Touched, unfinished roadmap with the highest progress; otherwise the
/// roadmap matching the dream job, falling back to the first in the catalog.
#[must_use]
pub fn suggested_roadmap(
    catalog: &Catalog,
    progress: &ProgressMap,
    dream_job: Option<DreamJob>,
) -> Option<&'static RoadmapDefinition> {
    let mut best: Option<(&'static RoadmapDefinition, Percentage)> = None;
    for roadmap in catalog.roadmaps() {
        let Some(&value) = progress.get(roadmap.id) else {
            continue;
        };
        if value.is_complete() {
            continue;
        }
        if best.is_none_or(|(_, current)| value > current) {
            best = Some((roadmap, value));
        }
    }
    if let Some((roadmap, _)) = best {
        return Some(roadmap);
    }

    dream_job
        .and_then(|job| catalog.roadmap(job.suggested_roadmap()))
        .or_else(|| catalog.roadmaps().first())
}

/// Everything the progress dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOverview {
    /// Touched-only mean.
    pub overall: f64,
    /// Whole-catalog mean with untouched roadmaps at 0.
    pub catalog_average: f64,
    pub roadmaps: Vec<RoadmapProgress>,
    pub active_roadmaps: usize,
    pub completed_roadmaps: usize,
    pub estimated_hours: u64,
    pub suggested_roadmap: Option<&'static str>,
}

#[must_use]
pub fn overview(
    catalog: &Catalog,
    progress: &ProgressMap,
    dream_job: Option<DreamJob>,
) -> ProgressOverview {
    let roadmaps = all_roadmaps(catalog, progress);
    let active_roadmaps = roadmaps.iter().filter(|r| r.progress.is_started()).count();
    let completed_roadmaps = roadmaps.iter().filter(|r| r.progress.is_complete()).count();
    let points: f64 = roadmaps.iter().map(|r| r.progress.value()).sum();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let estimated_hours = (points * HOURS_PER_POINT).round() as u64;

    ProgressOverview {
        overall: overall_progress(progress),
        catalog_average: catalog_average(catalog, progress),
        active_roadmaps,
        completed_roadmaps,
        estimated_hours,
        suggested_roadmap: suggested_roadmap(catalog, progress, dream_job).map(|r| r.id),
        roadmaps,
    }
}

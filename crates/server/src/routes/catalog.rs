use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use career_core::catalog::{Resource, RoadmapDefinition, RoadmapSummary};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ResourceQuery {
    tag: Option<String>,
}

pub async fn list_roadmaps_handler(State(state): State<AppState>) -> Json<Vec<RoadmapSummary>> {
    let summaries = state
        .catalog()
        .roadmaps()
        .iter()
        .map(RoadmapDefinition::summary)
        .collect();
    Json(summaries)
}

pub async fn get_roadmap_handler(
    State(state): State<AppState>,
    Path(roadmap_id): Path<String>,
) -> Result<Json<&'static RoadmapDefinition>, ApiError> {
    state
        .catalog()
        .roadmap(&roadmap_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("unknown roadmap: {roadmap_id}")))
}

pub async fn list_resources_handler(
    State(state): State<AppState>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Json<Vec<&'static Resource>>, ApiError> {
    let Query(query) = query?;
    let resources = match query.tag.as_deref().map(str::trim) {
        Some(tag) if !tag.is_empty() => state.catalog().resources_tagged(tag),
        _ => state.catalog().resources().iter().collect(),
    };
    Ok(Json(resources))
}

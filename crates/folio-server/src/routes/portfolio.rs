use axum::Json;
use axum::extract::{Path, State};

use folio_core::models::portfolio::Project;
use folio_core::models::wire::{ProjectEntry, TechGroup};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<ProjectEntry>> {
    Json(state.grounding.projects())
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    state
        .grounding
        .project(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("project not found: {slug}")))
}

/// Tech stack grouped by category, in display order.
pub async fn tech_stack(State(state): State<AppState>) -> Json<Vec<TechGroup>> {
    Json(state.grounding.tech_groups())
}

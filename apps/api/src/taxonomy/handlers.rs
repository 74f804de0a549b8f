use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::taxonomy::categories::{classify_role, RoleFilterOption, ROLE_FILTERS};
use crate::taxonomy::prep::{prep_for, PrepAssessment};
use crate::taxonomy::roadmaps::{suggest_roadmaps, Roadmap};

/// GET /api/v1/roles/categories
pub async fn handle_role_categories() -> Json<&'static [RoleFilterOption]> {
    Json(ROLE_FILTERS)
}

#[derive(Deserialize)]
pub struct PrepQuery {
    pub company: String,
    pub role: String,
}

#[derive(Serialize)]
pub struct PrepResponse {
    pub company: String,
    pub role: String,
    pub category: &'static str,
    pub prep: PrepAssessment,
    pub roadmaps: Vec<Roadmap>,
}

/// GET /api/v1/prep?company=..&role=..
pub async fn handle_prep(Query(params): Query<PrepQuery>) -> Result<Json<PrepResponse>, AppError> {
    if params.company.trim().is_empty() || params.role.trim().is_empty() {
        return Err(AppError::Validation(
            "company and role must be non-empty".to_string(),
        ));
    }
    let prep = prep_for(&params.company, &params.role);
    let roadmaps = suggest_roadmaps(&params.role);
    Ok(Json(PrepResponse {
        category: classify_role(&params.role),
        prep,
        roadmaps,
        company: params.company,
        role: params.role,
    }))
}

use axum::{extract::State, Json};
use serde::Serialize;

use crate::insights::stats::{
    cgpa_distribution, compute_stats, top_packages, BoardStats, RangeCount,
};
use crate::models::listing::PlacementListing;
use crate::state::AppState;
use crate::taxonomy::categories::{role_distribution, CategoryCount};

const TOP_PACKAGE_COUNT: usize = 10;

#[derive(Serialize)]
pub struct InsightsResponse {
    pub stats: BoardStats,
    pub cgpa_distribution: Vec<RangeCount>,
    pub role_distribution: Vec<CategoryCount>,
    pub top_packages: Vec<PlacementListing>,
}

/// GET /api/v1/insights
pub async fn handle_insights(State(state): State<AppState>) -> Json<InsightsResponse> {
    let listings = &state.listings;
    Json(InsightsResponse {
        stats: compute_stats(listings),
        cgpa_distribution: cgpa_distribution(listings),
        role_distribution: role_distribution(listings),
        top_packages: top_packages(listings, TOP_PACKAGE_COUNT),
    })
}

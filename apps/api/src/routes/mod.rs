pub mod health;

use axum::{routing::get, Router};

use crate::insights::handlers as insights;
use crate::listings::handlers as listings;
use crate::state::AppState;
use crate::taxonomy::handlers as taxonomy;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Listings: filtered/sorted views over the static collection
        .route("/api/v1/listings", get(listings::handle_list_listings))
        .route("/api/v1/listings/months", get(listings::handle_month_options))
        .route(
            "/api/v1/listings/locations",
            get(listings::handle_location_options),
        )
        .route("/api/v1/listings/:id", get(listings::handle_get_listing))
        // Insights: dashboard-wide aggregates
        .route("/api/v1/insights", get(insights::handle_insights))
        // Taxonomy: filter pills and preparation guidance
        .route(
            "/api/v1/roles/categories",
            get(taxonomy::handle_role_categories),
        )
        .route("/api/v1/prep", get(taxonomy::handle_prep))
        .with_state(state)
}

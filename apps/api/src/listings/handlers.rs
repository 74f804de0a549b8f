use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::listings::dates::{location_options, month_options, MonthOption};
use crate::listings::filter::{filter_listings, ListingFilter};
use crate::listings::sort::{order_by_date, sort_listings, DateOrder, SortKey, SortOrder};
use crate::models::listing::PlacementListing;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListingsQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub min_ctc: f64,
    #[serde(default)]
    pub max_ctc: f64,
    #[serde(default)]
    pub cgpa: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub date_order: DateOrder,
}

impl ListingsQuery {
    fn filter(&self) -> ListingFilter {
        ListingFilter {
            search: self.search.clone(),
            min_ctc: self.min_ctc,
            max_ctc: self.max_ctc,
            cgpa: self.cgpa,
            location: self.location.clone(),
            role: self.role.clone(),
            month: self.month.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct ListingsResponse {
    pub total: usize,
    /// Distinct companies in the filtered set.
    pub companies: usize,
    pub listings: Vec<PlacementListing>,
}

/// GET /api/v1/listings
///
/// Filters, then orders: an active date_order supersedes the key-based
/// sort, matching the dashboard's toggle behavior.
pub async fn handle_list_listings(
    State(state): State<AppState>,
    Query(params): Query<ListingsQuery>,
) -> Json<ListingsResponse> {
    let filtered = filter_listings(&state.listings, &params.filter());
    let ordered = if params.date_order != DateOrder::Off {
        order_by_date(&filtered, params.date_order)
    } else {
        sort_listings(&filtered, params.sort_by, params.sort_order)
    };
    let companies = distinct_companies(&ordered);
    Json(ListingsResponse {
        total: ordered.len(),
        companies,
        listings: ordered,
    })
}

fn distinct_companies(listings: &[PlacementListing]) -> usize {
    listings
        .iter()
        .map(|l| l.name.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len()
}

/// GET /api/v1/listings/:id
pub async fn handle_get_listing(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PlacementListing>, AppError> {
    state
        .listings
        .iter()
        .find(|l| l.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Listing {id} not found")))
}

/// GET /api/v1/listings/months
pub async fn handle_month_options(State(state): State<AppState>) -> Json<Vec<MonthOption>> {
    Json(month_options(&state.listings))
}

/// GET /api/v1/listings/locations
pub async fn handle_location_options(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(location_options(&state.listings))
}

use std::sync::Arc;

use crate::models::listing::PlacementListing;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The listing collection is loaded once at startup and is read-only for
/// the life of the process; handlers only ever derive fresh views from it.
#[derive(Clone)]
pub struct AppState {
    pub listings: Arc<Vec<PlacementListing>>,
}

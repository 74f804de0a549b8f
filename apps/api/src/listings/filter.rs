//! Listing filter: a conjunction of predicates over the static collection.
//!
//! Every constraint has an "off" value (0, empty string, or "All") so a
//! default-constructed filter passes everything through unchanged.

use crate::listings::dates::{parse_listing_date, MonthBucket};
use crate::listings::fields::{cgpa_floor, ctc_value};
use crate::models::listing::PlacementListing;

#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Case-insensitive substring against company name or role.
    pub search: String,
    /// Minimum parsed CTC in LPA.
    pub min_ctc: f64,
    /// Maximum parsed CTC in LPA; 0 means unbounded.
    pub max_ctc: f64,
    /// The caller's own CGPA; 0 means no eligibility constraint. A listing
    /// with no stated floor is always considered eligible.
    pub cgpa: f64,
    /// Location substring; "All" or empty means no constraint.
    pub location: String,
    /// Comma-separated role keywords (a filter-pill value); a listing
    /// passes if its role contains any of them. Empty means off.
    pub role: String,
    /// Month bucket key ("2025-08"); "All" or empty means off.
    pub month: String,
}

impl ListingFilter {
    fn matches(&self, listing: &PlacementListing) -> bool {
        self.matches_search(listing)
            && self.matches_ctc(listing)
            && self.matches_cgpa(listing)
            && self.matches_location(listing)
            && self.matches_role(listing)
            && self.matches_month(listing)
    }

    fn matches_search(&self, listing: &PlacementListing) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        listing.name.to_lowercase().contains(&needle)
            || listing.role.to_lowercase().contains(&needle)
    }

    fn matches_ctc(&self, listing: &PlacementListing) -> bool {
        let value = ctc_value(&listing.ctc);
        value >= self.min_ctc && (self.max_ctc == 0.0 || value <= self.max_ctc)
    }

    fn matches_cgpa(&self, listing: &PlacementListing) -> bool {
        if self.cgpa == 0.0 {
            return true;
        }
        let floor = cgpa_floor(&listing.cgpa);
        floor == 0.0 || floor <= self.cgpa
    }

    fn matches_location(&self, listing: &PlacementListing) -> bool {
        if self.location.is_empty() || self.location == "All" {
            return true;
        }
        // Substring over the raw field: "Bengaluru / Pune" matches "Pune".
        listing
            .location
            .to_lowercase()
            .contains(&self.location.to_lowercase())
    }

    fn matches_role(&self, listing: &PlacementListing) -> bool {
        if self.role.is_empty() {
            return true;
        }
        let role = listing.role.to_lowercase();
        self.role
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .any(|token| !token.is_empty() && role.contains(&token))
    }

    fn matches_month(&self, listing: &PlacementListing) -> bool {
        if self.month.is_empty() || self.month == "All" {
            return true;
        }
        match parse_listing_date(&listing.date) {
            Some(date) => MonthBucket::of(date).key() == self.month,
            None => false,
        }
    }
}

/// Applies the filter, preserving the relative order of matches. The input
/// is never mutated.
pub fn filter_listings(
    listings: &[PlacementListing],
    filter: &ListingFilter,
) -> Vec<PlacementListing> {
    listings
        .iter()
        .filter(|listing| filter.matches(listing))
        .cloned()
        .collect()
}

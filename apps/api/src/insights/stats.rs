//! Aggregate statistics over a listing collection.
//!
//! Everything here is recomputed from scratch on each call. Listings whose
//! CTC parses to nothing count as "unknown" and are excluded from the
//! average, the maximum, and the package histogram rather than dragging
//! them down as zeros.

use std::collections::HashSet;

use serde::Serialize;

use crate::listings::fields::{cgpa_floor, ctc_value};
use crate::models::listing::PlacementListing;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RangeCount {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardStats {
    /// Distinct company names, not listing count.
    pub total_companies: usize,
    /// Mean CTC over listings with a known value, rounded to 2 decimals.
    pub avg_package: f64,
    pub highest_package: f64,
    /// Distinct exact role strings.
    pub total_roles: usize,
    pub top_locations: Vec<LocationCount>,
    pub package_ranges: Vec<RangeCount>,
}

/// Half-open CTC brackets in LPA; a value on a boundary falls upward.
const PACKAGE_BRACKETS: &[(&str, f64, f64)] = &[
    ("< 5 LPA", 0.0, 5.0),
    ("5–8 LPA", 5.0, 8.0),
    ("8–12 LPA", 8.0, 12.0),
    ("12–20 LPA", 12.0, 20.0),
    ("20+ LPA", 20.0, f64::INFINITY),
];

const TOP_LOCATION_COUNT: usize = 6;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// First slash-delimited segment of a location, with unknown values folded
/// into an "Other" bucket.
fn primary_location(location: &str) -> &str {
    if location.is_empty() || location == "-" {
        return "Other";
    }
    location.split('/').next().unwrap_or("Other").trim()
}

pub fn compute_stats(listings: &[PlacementListing]) -> BoardStats {
    let ctc_values: Vec<f64> = listings
        .iter()
        .map(|l| ctc_value(&l.ctc))
        .filter(|v| *v > 0.0)
        .collect();

    let avg_package = if ctc_values.is_empty() {
        0.0
    } else {
        round2(ctc_values.iter().sum::<f64>() / ctc_values.len() as f64)
    };
    let highest_package = ctc_values.iter().copied().fold(0.0, f64::max);

    // Accumulate location counts preserving first-seen order so that the
    // descending sort breaks ties the way the data arrived.
    let mut locations: Vec<LocationCount> = Vec::new();
    for listing in listings {
        let name = primary_location(&listing.location);
        match locations.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.count += 1,
            None => locations.push(LocationCount {
                name: name.to_string(),
                count: 1,
            }),
        }
    }
    locations.sort_by(|a, b| b.count.cmp(&a.count));
    locations.truncate(TOP_LOCATION_COUNT);

    let package_ranges = PACKAGE_BRACKETS
        .iter()
        .map(|(label, min, max)| RangeCount {
            range: label.to_string(),
            count: ctc_values.iter().filter(|v| **v >= *min && **v < *max).count(),
        })
        .collect();

    let total_companies = listings
        .iter()
        .map(|l| l.name.as_str())
        .collect::<HashSet<_>>()
        .len();
    let total_roles = listings
        .iter()
        .map(|l| l.role.as_str())
        .collect::<HashSet<_>>()
        .len();

    BoardStats {
        total_companies,
        avg_package,
        highest_package,
        total_roles,
        top_locations: locations,
        package_ranges,
    }
}

/// CGPA-requirement bands for the analytics view. "No criteria" counts
/// listings with no parseable floor; the named bands match the common
/// cutoffs with a small tolerance around each.
const CGPA_BANDS: &[(&str, f64, f64)] = &[
    ("No criteria", 0.0, 0.0),
    ("6.0", 5.9, 6.1),
    ("6.5", 6.4, 6.6),
    ("7.0", 6.9, 7.1),
    ("7.5", 7.4, 7.6),
    ("8.0+", 7.9, 10.0),
];

pub fn cgpa_distribution(listings: &[PlacementListing]) -> Vec<RangeCount> {
    CGPA_BANDS
        .iter()
        .map(|(label, min, max)| RangeCount {
            range: label.to_string(),
            count: listings
                .iter()
                .filter(|l| {
                    let floor = cgpa_floor(&l.cgpa);
                    if *min == 0.0 {
                        floor == 0.0
                    } else {
                        floor >= *min && floor <= *max
                    }
                })
                .count(),
        })
        .collect()
}

/// The n highest-paying listings, descending by parsed CTC.
pub fn top_packages(listings: &[PlacementListing], n: usize) -> Vec<PlacementListing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| {
        ctc_value(&b.ctc)
            .partial_cmp(&ctc_value(&a.ctc))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u32, name: &str, ctc: &str, cgpa: &str, location: &str) -> PlacementListing {
        let mut listing = PlacementListing::sample(id, name, "SDE");
        listing.ctc = ctc.to_string();
        listing.cgpa = cgpa.to_string();
        listing.location = location.to_string();
        listing
    }

    #[test]
    fn test_duplicate_company_counts_once_and_unknown_ctc_excluded() {
        let listings = vec![
            listing(1, "Acme", "₹10 LPA", "7", "Pune"),
            listing(2, "Acme", "₹6 LPA", "", "Remote"),
        ];
        let stats = compute_stats(&listings);
        assert_eq!(stats.total_companies, 1);
        assert_eq!(stats.avg_package, 8.0);
        assert_eq!(stats.highest_package, 10.0);
    }

    #[test]
    fn test_empty_collection_is_all_zeros() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_companies, 0);
        assert_eq!(stats.avg_package, 0.0);
        assert_eq!(stats.highest_package, 0.0);
        assert_eq!(stats.total_roles, 0);
        assert!(stats.top_locations.is_empty());
        assert!(stats.package_ranges.iter().all(|r| r.count == 0));
    }

    #[test]
    fn test_average_is_rounded_to_two_decimals() {
        let listings = vec![
            listing(1, "A", "₹10 LPA", "", "Pune"),
            listing(2, "B", "₹10 LPA", "", "Pune"),
            listing(3, "C", "₹5 LPA", "", "Pune"),
        ];
        // 25 / 3 = 8.3333...
        assert_eq!(compute_stats(&listings).avg_package, 8.33);
    }

    #[test]
    fn test_bracket_boundary_falls_into_higher_bracket() {
        let listings = vec![listing(1, "A", "₹8 LPA", "", "Pune")];
        let stats = compute_stats(&listings);
        let by_label = |label: &str| {
            stats
                .package_ranges
                .iter()
                .find(|r| r.range == label)
                .map(|r| r.count)
        };
        assert_eq!(by_label("5–8 LPA"), Some(0));
        assert_eq!(by_label("8–12 LPA"), Some(1));
    }

    #[test]
    fn test_bracket_counts_sum_to_known_ctc_count() {
        let listings = vec![
            listing(1, "A", "₹3 LPA", "", "Pune"),
            listing(2, "B", "₹21 LPA", "", "Pune"),
            listing(3, "C", "-", "", "Pune"),
            listing(4, "D", "Will be informed", "", "Pune"),
        ];
        let stats = compute_stats(&listings);
        let total: usize = stats.package_ranges.iter().map(|r| r.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_top_locations_first_segment_and_other_bucket() {
        let listings = vec![
            listing(1, "A", "₹5 LPA", "", "Bengaluru / Pune"),
            listing(2, "B", "₹5 LPA", "", "Bengaluru"),
            listing(3, "C", "₹5 LPA", "", "-"),
        ];
        let stats = compute_stats(&listings);
        assert_eq!(stats.top_locations[0].name, "Bengaluru");
        assert_eq!(stats.top_locations[0].count, 2);
        assert!(stats
            .top_locations
            .iter()
            .any(|l| l.name == "Other" && l.count == 1));
    }

    #[test]
    fn test_top_locations_capped_at_six() {
        let listings: Vec<_> = (0u32..10)
            .map(|i| listing(i, "A", "₹5 LPA", "", &format!("City{i}")))
            .collect();
        assert_eq!(compute_stats(&listings).top_locations.len(), 6);
    }

    #[test]
    fn test_roles_are_distinct_exact_strings() {
        let mut a = PlacementListing::sample(1, "A", "Software Engineer");
        a.role = "Software Engineer".to_string();
        let mut b = PlacementListing::sample(2, "B", "software engineer");
        b.role = "software engineer".to_string();
        assert_eq!(compute_stats(&[a, b]).total_roles, 2);
    }

    #[test]
    fn test_cgpa_distribution_no_criteria_band() {
        let listings = vec![
            listing(1, "A", "₹5 LPA", "", "Pune"),
            listing(2, "B", "₹5 LPA", "7", "Pune"),
            listing(3, "C", "₹5 LPA", "8.2", "Pune"),
        ];
        let bands = cgpa_distribution(&listings);
        assert_eq!(bands[0].range, "No criteria");
        assert_eq!(bands[0].count, 1);
        let band_70 = bands.iter().find(|b| b.range == "7.0").unwrap();
        assert_eq!(band_70.count, 1);
        let band_80 = bands.iter().find(|b| b.range == "8.0+").unwrap();
        assert_eq!(band_80.count, 1);
    }

    #[test]
    fn test_top_packages_descending_and_capped() {
        let listings = vec![
            listing(1, "A", "₹5 LPA", "", "Pune"),
            listing(2, "B", "₹20 LPA", "", "Pune"),
            listing(3, "C", "₹12 LPA", "", "Pune"),
        ];
        let top = top_packages(&listings, 2);
        let ids: Vec<u32> = top.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_filtered_subset_never_has_more_companies() {
        use crate::listings::filter::{filter_listings, ListingFilter};
        let listings = vec![
            listing(1, "Acme", "₹10 LPA", "7", "Pune"),
            listing(2, "Beta", "₹6 LPA", "", "Remote"),
            listing(3, "Gamma", "₹4 LPA", "6", "Pune"),
        ];
        let filtered = filter_listings(
            &listings,
            &ListingFilter {
                min_ctc: 5.0,
                ..Default::default()
            },
        );
        assert!(
            compute_stats(&filtered).total_companies <= compute_stats(&listings).total_companies
        );
    }
}

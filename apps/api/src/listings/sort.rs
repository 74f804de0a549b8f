//! Listing ordering: key-based sorting plus a date ordering mode that
//! supersedes it when active.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::listings::dates::parse_listing_date;
use crate::listings::fields::{cgpa_floor, ctc_value};
use crate::models::listing::PlacementListing;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Ctc,
    Cgpa,
    Name,
    /// Source insertion order.
    Id,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Chronological ordering; anything but `Off` takes precedence over the
/// key-based sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    #[default]
    Off,
    Newest,
    Oldest,
}

fn compare_by_key(a: &PlacementListing, b: &PlacementListing, key: SortKey) -> Ordering {
    match key {
        SortKey::Ctc => ctc_value(&a.ctc)
            .partial_cmp(&ctc_value(&b.ctc))
            .unwrap_or(Ordering::Equal),
        SortKey::Cgpa => cgpa_floor(&a.cgpa)
            .partial_cmp(&cgpa_floor(&b.cgpa))
            .unwrap_or(Ordering::Equal),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Id => a.id.cmp(&b.id),
    }
}

/// Stable key-based sort; ties keep the collection's insertion order.
pub fn sort_listings(
    listings: &[PlacementListing],
    key: SortKey,
    order: SortOrder,
) -> Vec<PlacementListing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Chronological ordering by parsed posting date. Listings whose date does
/// not parse sort with the epoch date (1970-01-01), i.e. as oldest.
pub fn order_by_date(listings: &[PlacementListing], order: DateOrder) -> Vec<PlacementListing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| {
        let da = parse_listing_date(&a.date).unwrap_or_default();
        let db = parse_listing_date(&b.date).unwrap_or_default();
        match order {
            DateOrder::Newest => db.cmp(&da),
            DateOrder::Oldest | DateOrder::Off => da.cmp(&db),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u32, name: &str, ctc: &str, cgpa: &str, date: &str) -> PlacementListing {
        let mut listing = PlacementListing::sample(id, name, "SDE");
        listing.ctc = ctc.to_string();
        listing.cgpa = cgpa.to_string();
        listing.date = date.to_string();
        listing
    }

    fn board() -> Vec<PlacementListing> {
        vec![
            listing(1, "Zeta", "₹6 LPA", "7", "4th Sept'2025"),
            listing(2, "acme", "₹12 LPA", "6.5", "1st Jul'2025"),
            listing(3, "Midway", "-", "8", "-"),
        ]
    }

    #[test]
    fn test_sort_by_ctc_descending() {
        let out = sort_listings(&board(), SortKey::Ctc, SortOrder::Desc);
        let ids: Vec<u32> = out.iter().map(|l| l.id).collect();
        // unknown CTC sorts as 0, last
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let out = sort_listings(&board(), SortKey::Name, SortOrder::Asc);
        let names: Vec<&str> = out.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["acme", "Midway", "Zeta"]);
    }

    #[test]
    fn test_asc_then_desc_reverses_untied_input() {
        let asc = sort_listings(&board(), SortKey::Cgpa, SortOrder::Asc);
        let desc = sort_listings(&board(), SortKey::Cgpa, SortOrder::Desc);
        let mut reversed: Vec<u32> = desc.iter().map(|l| l.id).collect();
        reversed.reverse();
        let asc_ids: Vec<u32> = asc.iter().map(|l| l.id).collect();
        assert_eq!(asc_ids, reversed);
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let tied = vec![
            listing(1, "A", "₹5 LPA", "7", "-"),
            listing(2, "B", "₹5 LPA", "7", "-"),
            listing(3, "C", "₹5 LPA", "7", "-"),
        ];
        let out = sort_listings(&tied, SortKey::Ctc, SortOrder::Desc);
        let ids: Vec<u32> = out.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_newest_first_puts_unparseable_last() {
        let out = order_by_date(&board(), DateOrder::Newest);
        let ids: Vec<u32> = out.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_oldest_first_puts_unparseable_first() {
        let out = order_by_date(&board(), DateOrder::Oldest);
        let ids: Vec<u32> = out.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}

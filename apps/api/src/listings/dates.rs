//! Listing-date parsing and the month/location option lists.
//!
//! Posting dates come in as `4th Sept'2025`: day with an optional ordinal
//! suffix, an English month name (full or abbreviated), an optional
//! apostrophe (straight or curly) before a four-digit year.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;

use crate::models::listing::PlacementListing;

/// Month-name lookup, zero-based index. Aliases cover the abbreviations
/// seen in the source data, including both "sep" and "sept".
const MONTH_TABLE: &[(&str, u32)] = &[
    ("jan", 0),
    ("january", 0),
    ("feb", 1),
    ("february", 1),
    ("mar", 2),
    ("march", 2),
    ("apr", 3),
    ("april", 3),
    ("may", 4),
    ("jun", 5),
    ("june", 5),
    ("jul", 6),
    ("july", 6),
    ("aug", 7),
    ("august", 7),
    ("sep", 8),
    ("sept", 8),
    ("september", 8),
    ("oct", 9),
    ("october", 9),
    ("nov", 10),
    ("november", 10),
    ("dec", 11),
    ("december", 11),
];

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+)\s*(?:st|nd|rd|th)?\s+([A-Za-z]+)['’‘]?\s*(\d{4})")
            .expect("date pattern is valid")
    })
}

fn month_index(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTH_TABLE
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, idx)| *idx)
}

/// Parses a posting date. None for `"-"`, empty input, anything that does
/// not match the pattern, an unknown month name, or an out-of-range day.
pub fn parse_listing_date(date: &str) -> Option<NaiveDate> {
    if date.is_empty() || date == "-" {
        return None;
    }
    let caps = date_re().captures(date)?;
    let day: u32 = caps[1].parse().ok()?;
    let month0 = month_index(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
}

/// A (year, zero-based month) bucket a listing date falls into. The key
/// format is the original dashboard's: `2025-08` for September 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBucket {
    pub year: i32,
    pub month0: u32,
}

impl MonthBucket {
    pub fn of(date: NaiveDate) -> Self {
        MonthBucket {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn key(&self) -> String {
        format!("{}-{:02}", self.year, self.month0)
    }
}

/// Human label for the month a date falls in, e.g. "September 2025".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthOption {
    pub key: String,
    pub label: String,
}

/// Distinct month buckets present in the data, sorted chronologically,
/// with the "All Months" pseudo-entry first.
pub fn month_options(listings: &[PlacementListing]) -> Vec<MonthOption> {
    let mut buckets: BTreeMap<String, String> = BTreeMap::new();
    for listing in listings {
        if let Some(date) = parse_listing_date(&listing.date) {
            buckets
                .entry(MonthBucket::of(date).key())
                .or_insert_with(|| month_label(date));
        }
    }
    let mut options = vec![MonthOption {
        key: "All".to_string(),
        label: "All Months".to_string(),
    }];
    options.extend(
        buckets
            .into_iter()
            .map(|(key, label)| MonthOption { key, label }),
    );
    options
}

/// Distinct location choices: slash-delimited segments, trimmed, with the
/// "-" placeholder and the "Multiple Locations" sentinel skipped. "All" is
/// always present. Sorted.
pub fn location_options(listings: &[PlacementListing]) -> Vec<String> {
    let mut locations: BTreeSet<String> = BTreeSet::new();
    locations.insert("All".to_string());
    for listing in listings {
        if listing.location.is_empty() || listing.location == "-" {
            continue;
        }
        for segment in listing.location.split('/') {
            let segment = segment.trim();
            if !segment.is_empty() && segment != "Multiple Locations" {
                locations.insert(segment.to_string());
            }
        }
    }
    locations.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ordinal_day_abbreviated_month() {
        let date = parse_listing_date("4th Sept'2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 9, 4).unwrap());
    }

    #[test]
    fn test_parse_placeholder_and_empty_are_none() {
        assert_eq!(parse_listing_date("-"), None);
        assert_eq!(parse_listing_date(""), None);
    }

    #[test]
    fn test_parse_full_month_no_apostrophe() {
        let date = parse_listing_date("21 October 2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 10, 21).unwrap());
    }

    #[test]
    fn test_parse_curly_apostrophe() {
        let date = parse_listing_date("1st Aug’2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 1).unwrap());
    }

    #[test]
    fn test_month_lookup_is_case_insensitive() {
        assert!(parse_listing_date("4 SEPT 2025").is_some());
        assert!(parse_listing_date("4 sep 2025").is_some());
    }

    #[test]
    fn test_unknown_month_is_none() {
        assert_eq!(parse_listing_date("4th Smarch'2025"), None);
    }

    #[test]
    fn test_out_of_range_day_is_none() {
        assert_eq!(parse_listing_date("32nd Jan'2025"), None);
    }

    #[test]
    fn test_month_bucket_key_is_zero_based() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 4).unwrap();
        assert_eq!(MonthBucket::of(date).key(), "2025-08");
        assert_eq!(month_label(date), "September 2025");
    }

    fn listing_with_date(id: u32, date: &str) -> PlacementListing {
        let mut listing = PlacementListing::sample(id, "Acme", "SDE");
        listing.date = date.to_string();
        listing
    }

    #[test]
    fn test_month_options_dedup_and_sort() {
        let listings = vec![
            listing_with_date(1, "4th Sept'2025"),
            listing_with_date(2, "10th Sept'2025"),
            listing_with_date(3, "2nd Aug'2025"),
            listing_with_date(4, "-"),
        ];
        let options = month_options(&listings);
        assert_eq!(options[0].key, "All");
        let keys: Vec<&str> = options.iter().skip(1).map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["2025-07", "2025-08"]);
        assert_eq!(options[2].label, "September 2025");
    }

    #[test]
    fn test_location_options_split_and_skip_sentinels() {
        let mut a = PlacementListing::sample(1, "Acme", "SDE");
        a.location = "Bengaluru / Pune".to_string();
        let mut b = PlacementListing::sample(2, "Beta", "SDE");
        b.location = "Multiple Locations".to_string();
        let mut c = PlacementListing::sample(3, "Gamma", "SDE");
        c.location = "-".to_string();

        let options = location_options(&[a, b, c]);
        assert_eq!(options, vec!["All", "Bengaluru", "Pune"]);
    }
}

//! Static dataset loading. The listing collection ships embedded in the
//! binary; `DATA_PATH` swaps in an external JSON file with the same shape.
//! Either way the data is parsed once at startup and never written back.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::models::listing::PlacementListing;

const EMBEDDED_LISTINGS: &str = include_str!("../data/listings.json");

pub fn load_listings(config: &Config) -> Result<Vec<PlacementListing>> {
    let listings: Vec<PlacementListing> = match &config.data_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading listings dataset from '{path}'"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing listings dataset from '{path}'"))?
        }
        None => serde_json::from_str(EMBEDDED_LISTINGS)
            .context("parsing the embedded listings dataset")?,
    };
    Ok(listings)
}

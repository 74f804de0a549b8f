use serde::{Deserialize, Serialize};

/// One placement listing: a company posting one role with its terms.
///
/// Every field except `id` is free text straight from the source data.
/// `ctc`, `stipend`, `cgpa`, `location`, `duration` and `date` may carry
/// the `"-"` placeholder or informal strings ("Will be informed"); the
/// parsers in `listings::fields` and `listings::dates` normalize them on
/// read. A company may appear under several ids, one per role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementListing {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub cgpa: String,
    pub role: String,
    pub stipend: String,
    pub duration: String,
    pub ctc: String,
    pub location: String,
}

#[cfg(test)]
impl PlacementListing {
    /// Test fixture with sensible defaults; override fields as needed.
    pub fn sample(id: u32, name: &str, role: &str) -> Self {
        PlacementListing {
            id,
            name: name.to_string(),
            date: "4th Sept'2025".to_string(),
            cgpa: "7".to_string(),
            role: role.to_string(),
            stipend: "-".to_string(),
            duration: "-".to_string(),
            ctc: "₹10 LPA".to_string(),
            location: "Bengaluru".to_string(),
        }
    }
}

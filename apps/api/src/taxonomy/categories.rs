//! Exclusive role categorization: first-match-wins over an ordered rule
//! table. A role lands in exactly one bucket; rule order is significant
//! (a role matching both an early and a late rule takes the early one).

use serde::Serialize;

use crate::models::listing::PlacementListing;

/// Ordered category rules: label plus lowercase substring triggers.
const CATEGORY_RULES: &[(&str, &[&str])] = &[
    ("SDE/Development", &["software", "sde", "developer"]),
    ("Data/AI/ML", &["data", "analyst", "ml", "ai"]),
    ("Internship", &["intern"]),
    ("Trainee/GET", &["trainee", "get"]),
    ("Business/Sales", &["business", "sales", "marketing"]),
];

pub const OTHER_CATEGORY: &str = "Other";

/// Buckets a free-text role into one category label.
pub fn classify_role(role: &str) -> &'static str {
    let role = role.to_lowercase();
    for &(label, triggers) in CATEGORY_RULES {
        if triggers.iter().any(|t| role.contains(t)) {
            return label;
        }
    }
    OTHER_CATEGORY
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Listing counts per category, descending. Only categories that actually
/// occur appear; ties keep first-occurrence order.
pub fn role_distribution(listings: &[PlacementListing]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for listing in listings {
        let label = classify_role(&listing.role);
        match counts.iter_mut().find(|c| c.name == label) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                name: label.to_string(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleFilterOption {
    pub label: &'static str,
    /// Comma-separated keyword value consumed by the listing filter's
    /// role predicate.
    pub value: &'static str,
}

/// The role filter pills offered by the dashboard.
pub const ROLE_FILTERS: &[RoleFilterOption] = &[
    RoleFilterOption {
        label: "All Roles",
        value: "",
    },
    RoleFilterOption {
        label: "SDE / Software Engineer",
        value: "software",
    },
    RoleFilterOption {
        label: "Full Stack Developer",
        value: "full stack",
    },
    RoleFilterOption {
        label: "Data Science / AI / ML",
        value: "data,ai,ml,machine",
    },
    RoleFilterOption {
        label: "Frontend / UI Developer",
        value: "frontend,front end,ui,react",
    },
    RoleFilterOption {
        label: "Backend Developer",
        value: "backend,back end,java,python,node",
    },
    RoleFilterOption {
        label: "DevOps / Cloud / Infra",
        value: "devops,cloud,infrastructure,sre",
    },
    RoleFilterOption {
        label: "QA / Testing / SDET",
        value: "qa,test,sdet,quality",
    },
    RoleFilterOption {
        label: "Business Analyst",
        value: "business analyst,business development,sales",
    },
    RoleFilterOption {
        label: "Marketing / Growth",
        value: "marketing,growth,content",
    },
    RoleFilterOption {
        label: "Trainee / GET",
        value: "trainee,get,graduate engineer",
    },
    RoleFilterOption {
        label: "Intern",
        value: "intern",
    },
    RoleFilterOption {
        label: "Consulting / Analyst",
        value: "consult,analyst",
    },
];

//! Interview-prep tiering: picks a preparation guide from the company
//! name and role. Role signal (data positions) is checked before company
//! tier, so a data scientist at a consulting firm still gets the data
//! guide.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub label: &'static str,
    pub url: &'static str,
}

/// A static preparation guide for one tier of company/role.
#[derive(Debug, Clone, Serialize)]
pub struct PrepGuide {
    pub rounds: &'static [&'static str],
    pub topics: &'static [&'static str],
    pub practice_patterns: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub resources: &'static [Resource],
}

/// The selected guide plus the difficulty for this particular company,
/// which may differ from the guide's usual tier (mid-tier companies share
/// the tech guide at Medium).
#[derive(Debug, Clone, Serialize)]
pub struct PrepAssessment {
    pub difficulty: Difficulty,
    pub guide: &'static PrepGuide,
}

static TECH_GUIDE: PrepGuide = PrepGuide {
    rounds: &[
        "Online Assessment (DSA + MCQs)",
        "Technical Interview 1 (DSA)",
        "Technical Interview 2 (System Design / CS Fundamentals)",
        "HR / Managerial Round",
    ],
    topics: &[
        "Arrays & Strings",
        "Trees & Graphs",
        "Dynamic Programming",
        "System Design Basics",
        "OOPS Concepts",
        "DBMS",
        "OS",
        "CN",
    ],
    practice_patterns: &[
        "Two Pointers",
        "Sliding Window",
        "Binary Search",
        "BFS/DFS",
        "Dynamic Programming",
        "Greedy",
        "Stack/Queue",
    ],
    tips: &[
        "Focus on Medium difficulty problems",
        "Practice explaining your approach out loud",
        "Know time/space complexity of your solutions",
        "Build 2-3 strong projects with a good README",
    ],
    resources: &[
        Resource {
            label: "Striver's SDE Sheet",
            url: "https://takeuforward.org/interviews/strivers-sde-sheet-top-coding-interview-problems/",
        },
        Resource {
            label: "LeetCode Top Interview 150",
            url: "https://leetcode.com/studyplan/top-interview-150/",
        },
        Resource {
            label: "NeetCode 150",
            url: "https://neetcode.io/practice",
        },
    ],
};

static SERVICE_GUIDE: PrepGuide = PrepGuide {
    rounds: &[
        "Online Assessment (Aptitude + Coding)",
        "Technical Interview (DSA + CS Fundamentals)",
        "HR Round",
    ],
    topics: &[
        "Arrays & Strings",
        "Basic Data Structures",
        "SQL Queries",
        "OOPS",
        "DBMS Normalization",
        "OS Basics",
        "Aptitude & Logical Reasoning",
    ],
    practice_patterns: &["Arrays", "Strings", "Sorting", "Searching", "Basic DP", "Hashing"],
    tips: &[
        "Focus on Easy-Medium problems",
        "Practice aptitude questions daily",
        "Know SQL joins and queries well",
        "Prepare 'Tell me about yourself' thoroughly",
    ],
    resources: &[
        Resource {
            label: "Striver's A2Z DSA Sheet",
            url: "https://takeuforward.org/strivers-a2z-dsa-course/strivers-a2z-dsa-course-sheet-2/",
        },
        Resource {
            label: "GFG Must Do Questions",
            url: "https://www.geeksforgeeks.org/must-do-coding-questions-for-companies-like-amazon-microsoft-adobe/",
        },
        Resource {
            label: "IndiaBix Aptitude",
            url: "https://www.indiabix.com/",
        },
    ],
};

static PRODUCT_GUIDE: PrepGuide = PrepGuide {
    rounds: &[
        "Online Assessment (2-3 DSA Questions)",
        "Technical Interview 1 (DSA + Problem Solving)",
        "Technical Interview 2 (LLD/HLD)",
        "Hiring Manager / Culture Fit",
    ],
    topics: &[
        "Advanced DSA",
        "System Design (LLD + HLD)",
        "CS Fundamentals",
        "Project Deep Dive",
        "Behavioral Questions (STAR Method)",
    ],
    practice_patterns: &[
        "Two Pointers",
        "Sliding Window",
        "Binary Search Variants",
        "Graph Algorithms",
        "DP on Trees",
        "Trie",
        "Monotonic Stack",
    ],
    tips: &[
        "Solve 300+ problems, focus on Medium-Hard",
        "Learn System Design from scratch",
        "Practice mock interviews weekly",
        "Contribute to open source for a strong profile",
    ],
    resources: &[
        Resource {
            label: "Striver's SDE Sheet",
            url: "https://takeuforward.org/interviews/strivers-sde-sheet-top-coding-interview-problems/",
        },
        Resource {
            label: "System Design Primer",
            url: "https://github.com/donnemartin/system-design-primer",
        },
        Resource {
            label: "NeetCode Roadmap",
            url: "https://neetcode.io/roadmap",
        },
    ],
};

static CONSULTING_GUIDE: PrepGuide = PrepGuide {
    rounds: &[
        "Online Assessment (Aptitude + Case Study)",
        "Group Discussion / Case Study",
        "Technical / Domain Interview",
        "HR / Partner Round",
    ],
    topics: &[
        "Business Case Studies",
        "Data Interpretation",
        "SQL & Excel",
        "Basic Coding",
        "Consulting Frameworks",
        "Market Sizing",
    ],
    practice_patterns: &["Arrays (Easy)", "Strings (Easy)", "SQL Problems", "Basic Math"],
    tips: &[
        "Learn case study frameworks (MECE, Porter's)",
        "Practice data interpretation daily",
        "Prepare industry knowledge",
        "Work on communication skills",
    ],
    resources: &[
        Resource {
            label: "Case Interview Prep",
            url: "https://www.preplounge.com/en/case-interview-basics",
        },
        Resource {
            label: "LeetCode SQL Study Plan",
            url: "https://leetcode.com/studyplan/top-sql-50/",
        },
    ],
};

static DATA_GUIDE: PrepGuide = PrepGuide {
    rounds: &[
        "Online Assessment (Python/SQL + Stats)",
        "Technical Interview (ML Concepts + Coding)",
        "Case Study / Take Home Assignment",
        "HR Round",
    ],
    topics: &[
        "Python & Pandas",
        "SQL Advanced",
        "Statistics & Probability",
        "ML Algorithms",
        "Feature Engineering",
        "A/B Testing",
        "Data Visualization",
    ],
    practice_patterns: &["Arrays", "Hashing", "SQL Problems", "Math & Statistics"],
    tips: &[
        "Build end-to-end ML projects with deployment",
        "Know sklearn, pandas, numpy inside out",
        "Practice SQL window functions",
        "Prepare a data science portfolio",
    ],
    resources: &[
        Resource {
            label: "LeetCode Database Problems",
            url: "https://leetcode.com/problemset/database/",
        },
        Resource {
            label: "Kaggle Learn",
            url: "https://www.kaggle.com/learn",
        },
    ],
};

/// Role keywords that route to the data guide regardless of company.
const DATA_ROLE_KEYWORDS: &[&str] = &[
    "data scien",
    "data analy",
    "data engin",
    "ml",
    "machine learning",
    "ai",
    "decision scientist",
    "deep learning",
];

const TOP_PRODUCT_COMPANIES: &[&str] = &[
    "google",
    "microsoft",
    "amazon",
    "meta",
    "apple",
    "netflix",
    "uber",
    "nvidia",
    "cisco",
    "jp morgan",
    "morgan stanley",
    "booking",
    "meesho",
    "swiggy",
    "zscaler",
    "marvell",
    "ion group",
    "caterpillar",
];

const CONSULTING_COMPANIES: &[&str] = &[
    "deloitte",
    "kpmg",
    "ey",
    "pwc",
    "bain",
    "accenture",
    "cognizant",
    "capgemini",
    "mu sigma",
    "fractal",
    "tredence",
];

const MID_TIER_COMPANIES: &[&str] = &[
    "brillio",
    "epam",
    "philips",
    "chubb",
    "factset",
    "bnp paribas",
    "cme group",
    "dbs",
    "pine labs",
    "qualcomm",
    "samsung",
    "maersk",
    "rockwell",
    "highradius",
    "maruti",
    "providence",
];

fn matches_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Picks the preparation guide for one listing.
pub fn prep_for(company: &str, role: &str) -> PrepAssessment {
    let name = company.to_lowercase();
    let role = role.to_lowercase();

    if matches_any(&role, DATA_ROLE_KEYWORDS) {
        return PrepAssessment {
            difficulty: Difficulty::Medium,
            guide: &DATA_GUIDE,
        };
    }
    if matches_any(&name, CONSULTING_COMPANIES) {
        return PrepAssessment {
            difficulty: Difficulty::Medium,
            guide: &CONSULTING_GUIDE,
        };
    }
    if matches_any(&name, TOP_PRODUCT_COMPANIES) {
        return PrepAssessment {
            difficulty: Difficulty::Hard,
            guide: &PRODUCT_GUIDE,
        };
    }
    if matches_any(&name, MID_TIER_COMPANIES) {
        // Same track as the default tech guide, lighter bar
        return PrepAssessment {
            difficulty: Difficulty::Medium,
            guide: &TECH_GUIDE,
        };
    }
    if matches_any(&role, &["trainee", "get", "associate"]) {
        return PrepAssessment {
            difficulty: Difficulty::Easy,
            guide: &SERVICE_GUIDE,
        };
    }
    PrepAssessment {
        difficulty: Difficulty::Hard,
        guide: &TECH_GUIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_role_wins_over_company_tier() {
        let prep = prep_for("Deloitte", "Data Scientist");
        assert!(prep.guide.topics.contains(&"ML Algorithms"));
        assert_eq!(prep.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_consulting_company_gets_consulting_guide() {
        let prep = prep_for("KPMG India", "Audit Associate Consultant");
        assert!(prep.guide.topics.contains(&"Business Case Studies"));
    }

    #[test]
    fn test_top_product_company_is_hard() {
        let prep = prep_for("Google", "Software Engineer");
        assert_eq!(prep.difficulty, Difficulty::Hard);
        assert!(prep.guide.topics.contains(&"Advanced DSA"));
    }

    #[test]
    fn test_mid_tier_company_reuses_tech_guide_at_medium() {
        let prep = prep_for("Qualcomm", "Software Engineer");
        assert_eq!(prep.difficulty, Difficulty::Medium);
        assert!(prep.guide.topics.contains(&"Trees & Graphs"));
    }

    #[test]
    fn test_trainee_role_gets_service_guide() {
        let prep = prep_for("Unknown Infra Co", "Graduate Trainee");
        assert_eq!(prep.difficulty, Difficulty::Easy);
        assert!(prep.guide.topics.contains(&"Aptitude & Logical Reasoning"));
    }

    #[test]
    fn test_unknown_company_plain_sde_defaults_to_tech() {
        let prep = prep_for("Tiny Startup", "Software Engineer");
        assert_eq!(prep.difficulty, Difficulty::Hard);
        assert!(prep.guide.topics.contains(&"Trees & Graphs"));
    }

    #[test]
    fn test_company_match_is_substring_on_lowercased_name() {
        let prep = prep_for("Microsoft India Development Center", "SDE");
        assert_eq!(prep.difficulty, Difficulty::Hard);
    }
}

//! Preparation-roadmap tagging: an inclusive, multi-tag companion to the
//! exclusive classifier in `categories`. One role can carry several tags
//! (a full-stack role is also a DSA and a system-design candidate); checks
//! are independent rather than first-match-wins, and the result set is
//! deduplicated by title.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Roadmap {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

const DSA: Roadmap = Roadmap {
    title: "DSA Preparation",
    url: "https://roadmap.sh/datastructures-and-algorithms",
    icon: "🧮",
};
const FULLSTACK: Roadmap = Roadmap {
    title: "Full Stack Developer",
    url: "https://roadmap.sh/full-stack",
    icon: "🔗",
};
const FRONTEND: Roadmap = Roadmap {
    title: "Frontend Developer",
    url: "https://roadmap.sh/frontend",
    icon: "🎨",
};
const BACKEND: Roadmap = Roadmap {
    title: "Backend Developer",
    url: "https://roadmap.sh/backend",
    icon: "⚙️",
};
const AI_ML: Roadmap = Roadmap {
    title: "AI / ML Engineer",
    url: "https://roadmap.sh/ai-data-scientist",
    icon: "🤖",
};
const DATA_SCIENCE: Roadmap = Roadmap {
    title: "Data Scientist",
    url: "https://roadmap.sh/ai-data-scientist",
    icon: "📊",
};
const DEVOPS: Roadmap = Roadmap {
    title: "DevOps Engineer",
    url: "https://roadmap.sh/devops",
    icon: "🚀",
};
const ANDROID: Roadmap = Roadmap {
    title: "Android Developer",
    url: "https://roadmap.sh/android",
    icon: "📱",
};
const CYBER_SECURITY: Roadmap = Roadmap {
    title: "Cyber Security",
    url: "https://roadmap.sh/cyber-security",
    icon: "🔒",
};
const QA: Roadmap = Roadmap {
    title: "QA Engineer",
    url: "https://roadmap.sh/qa",
    icon: "✅",
};
const PYTHON: Roadmap = Roadmap {
    title: "Python Developer",
    url: "https://roadmap.sh/python",
    icon: "🐍",
};
const SOFTWARE_ENGINEER: Roadmap = Roadmap {
    title: "Software Engineer",
    url: "https://roadmap.sh/computer-science",
    icon: "💻",
};
const SYSTEM_DESIGN: Roadmap = Roadmap {
    title: "System Design",
    url: "https://roadmap.sh/system-design",
    icon: "🏗️",
};

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Tags a role with every applicable preparation roadmap.
///
/// DSA always comes first and System Design always closes the list. The
/// stack-specific chain (full stack / frontend / backend) is mutually
/// exclusive; the generic Software Engineer tag only applies when no
/// stack-specific tag did. Duplicate titles collapse to the first
/// occurrence.
pub fn suggest_roadmaps(role: &str) -> Vec<Roadmap> {
    let r = role.to_lowercase();
    let mut tags = vec![DSA];

    if contains_any(&r, &["full stack", "fullstack"]) {
        tags.push(FULLSTACK);
    } else if contains_any(&r, &["frontend", "front end", "react", "angular"]) {
        tags.push(FRONTEND);
    } else if contains_any(&r, &["backend", "back end", "node", "java", "spring"]) {
        tags.push(BACKEND);
    }
    if contains_any(&r, &["ai", "ml", "machine learning", "deep learning"]) {
        tags.push(AI_ML);
    }
    if contains_any(&r, &["data scien", "data analy", "data engin"]) {
        tags.push(DATA_SCIENCE);
    }
    if contains_any(&r, &["devops", "infrastructure", "cloud"]) {
        tags.push(DEVOPS);
    }
    if contains_any(&r, &["android", "mobile", "ios"]) {
        tags.push(ANDROID);
    }
    if contains_any(&r, &["cyber", "security"]) {
        tags.push(CYBER_SECURITY);
    }
    if contains_any(&r, &["qa", "test", "sdet", "quality"]) {
        tags.push(QA);
    }
    if r.contains("python") {
        tags.push(PYTHON);
    }
    if contains_any(&r, &["software", "sde", "swe", "engineer", "developer", "coder"]) {
        let has_stack_tag = tags
            .iter()
            .any(|t| matches!(t.title, "Full Stack Developer" | "Frontend Developer" | "Backend Developer"));
        if !has_stack_tag {
            tags.push(SOFTWARE_ENGINEER);
        }
    }
    tags.push(SYSTEM_DESIGN);

    // Dedup by title, keeping the first occurrence
    let mut seen: Vec<&str> = Vec::new();
    tags.retain(|t| {
        if seen.contains(&t.title) {
            false
        } else {
            seen.push(t.title);
            true
        }
    });
    tags
}

//! Skill Classifier: maps raw JD text onto a fixed taxonomy of skill categories.
//!
//! Matching is a case-insensitive substring test of each canonical label against the
//! lower-cased text. No tokenization and no word-boundary guard: a substring hit is a hit,
//! so short labels such as `C` or `Go` match liberally.

use serde::{Deserialize, Serialize};

use crate::analysis::templates::FALLBACK_SKILLS;

/// A taxonomy category. `Other` is synthetic and only ever holds the fallback list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "coreCS")]
    CoreCs,
    #[serde(rename = "languages")]
    Languages,
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "cloud")]
    Cloud,
    #[serde(rename = "testing")]
    Testing,
    #[serde(rename = "other")]
    Other,
}

impl SkillCategory {
    /// Every category, taxonomy order first, `Other` last.
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::CoreCs,
        SkillCategory::Languages,
        SkillCategory::Web,
        SkillCategory::Data,
        SkillCategory::Cloud,
        SkillCategory::Testing,
        SkillCategory::Other,
    ];

    /// Key used in persisted records and exports.
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "coreCS",
            SkillCategory::Languages => "languages",
            SkillCategory::Web => "web",
            SkillCategory::Data => "data",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Testing => "testing",
            SkillCategory::Other => "other",
        }
    }
}

/// The static taxonomy, in iteration order. Labels are canonical: they are what gets recorded
/// on a match, regardless of how the text spelled them.
pub const SKILL_TAXONOMY: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::CoreCs,
        &[
            "DSA",
            "OOP",
            "DBMS",
            "OS",
            "Networks",
            "Data Structures",
            "Algorithms",
            "Object-Oriented",
            "Database",
            "Operating System",
            "Networking",
        ],
    ),
    (
        SkillCategory::Languages,
        &[
            "Java",
            "Python",
            "JavaScript",
            "TypeScript",
            "C",
            "C++",
            "C#",
            "Go",
            "Rust",
            "Ruby",
            "PHP",
        ],
    ),
    (
        SkillCategory::Web,
        &[
            "React",
            "Next.js",
            "Node.js",
            "Express",
            "REST",
            "GraphQL",
            "Vue",
            "Angular",
            "HTML",
            "CSS",
            "Web Development",
        ],
    ),
    (
        SkillCategory::Data,
        &[
            "SQL",
            "MongoDB",
            "PostgreSQL",
            "MySQL",
            "Redis",
            "Database",
            "NoSQL",
            "Firebase",
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            "AWS",
            "Azure",
            "GCP",
            "Docker",
            "Kubernetes",
            "CI/CD",
            "Linux",
            "DevOps",
            "Cloud",
        ],
    ),
    (
        SkillCategory::Testing,
        &[
            "Selenium",
            "Cypress",
            "Playwright",
            "JUnit",
            "PyTest",
            "Testing",
            "QA",
        ],
    ),
];

/// Matched labels per category, first-seen order, no duplicates within a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    #[serde(rename = "coreCS", default)]
    pub core_cs: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub web: Vec<String>,
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub cloud: Vec<String>,
    #[serde(default)]
    pub testing: Vec<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl ExtractedSkills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::CoreCs => &self.core_cs,
            SkillCategory::Languages => &self.languages,
            SkillCategory::Web => &self.web,
            SkillCategory::Data => &self.data,
            SkillCategory::Cloud => &self.cloud,
            SkillCategory::Testing => &self.testing,
            SkillCategory::Other => &self.other,
        }
    }

    fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::CoreCs => &mut self.core_cs,
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Web => &mut self.web,
            SkillCategory::Data => &mut self.data,
            SkillCategory::Cloud => &mut self.cloud,
            SkillCategory::Testing => &mut self.testing,
            SkillCategory::Other => &mut self.other,
        }
    }

    /// `(category, labels)` pairs in `SkillCategory::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> + '_ {
        SkillCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn has(&self, category: SkillCategory, label: &str) -> bool {
        self.get(category).iter().any(|s| s == label)
    }

    /// True when `label` appears in any category.
    pub fn contains_label(&self, label: &str) -> bool {
        self.iter().any(|(_, skills)| skills.iter().any(|s| s == label))
    }

    /// Every label across all categories, in category order. A label shared by two
    /// categories (e.g. `Database`) is yielded twice.
    pub fn all_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().flat_map(|(_, skills)| skills.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, skills)| skills.is_empty())
    }

    /// Number of categories, `Other` included, with at least one label.
    pub fn non_empty_categories(&self) -> usize {
        self.iter().filter(|(_, skills)| !skills.is_empty()).count()
    }
}

/// Classifies `text` against `SKILL_TAXONOMY`.
///
/// When no category matches, `other` is populated with `FALLBACK_SKILLS`; otherwise `other`
/// stays empty.
pub fn extract_skills(text: &str) -> ExtractedSkills {
    let text_lower = text.to_lowercase();
    let mut extracted = ExtractedSkills::default();

    for (category, labels) in SKILL_TAXONOMY {
        for &label in labels.iter() {
            if !text_lower.contains(&label.to_lowercase()) {
                continue;
            }
            let bucket = extracted.get_mut(*category);
            if !bucket.iter().any(|s| s == label) {
                bucket.push(label.to_string());
            }
        }
    }

    if extracted.is_empty() {
        extracted.other = FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect();
    }

    extracted
}

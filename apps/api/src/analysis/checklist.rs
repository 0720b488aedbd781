//! Round-wise preparation checklist: four fixed rounds with skill-driven extra items.

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::{ExtractedSkills, SkillCategory};
use crate::analysis::templates::CHECKLIST_TEMPLATE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRound {
    pub round_title: String,
    pub items: Vec<String>,
}

/// Priority order for checklist augmentation: (category, round index, item pattern).
/// `{skill}` is replaced with the first label detected in the category.
const CHECKLIST_AUGMENTATIONS: &[(SkillCategory, usize, &str)] = &[
    (SkillCategory::Languages, 2, "Practice {skill}"),
    (SkillCategory::Web, 2, "Review {skill} patterns"),
    (SkillCategory::Cloud, 1, "Study {skill} services"),
];

pub fn generate_checklist(skills: &ExtractedSkills) -> Vec<ChecklistRound> {
    let mut checklist: Vec<ChecklistRound> = CHECKLIST_TEMPLATE
        .iter()
        .map(|(title, items)| ChecklistRound {
            round_title: title.to_string(),
            items: items.iter().map(|i| i.to_string()).collect(),
        })
        .collect();

    for &(category, index, pattern) in CHECKLIST_AUGMENTATIONS {
        if let Some(first) = skills.get(category).first() {
            checklist[index].items.push(pattern.replace("{skill}", first));
        }
    }

    checklist
}

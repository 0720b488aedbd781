//! 7-day preparation plan: five fixed day-blocks with skill-driven extra tasks.

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::{ExtractedSkills, SkillCategory};
use crate::analysis::templates::{PLAN_TEMPLATE, PLAN_TESTING_TASK, PLAN_WEB_TASK};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

/// Augmentation rules, applied in this order: (category, block index, task).
const PLAN_AUGMENTATIONS: &[(SkillCategory, usize, &str)] = &[
    (SkillCategory::Web, 4, PLAN_WEB_TASK),
    (SkillCategory::Testing, 1, PLAN_TESTING_TASK),
];

pub fn generate_plan(skills: &ExtractedSkills) -> Vec<PlanDay> {
    let mut plan: Vec<PlanDay> = PLAN_TEMPLATE
        .iter()
        .map(|(day, focus, tasks)| PlanDay {
            day: day.to_string(),
            focus: focus.to_string(),
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
        })
        .collect();

    for &(category, index, task) in PLAN_AUGMENTATIONS {
        if !skills.get(category).is_empty() {
            plan[index].tasks.push(task.to_string());
        }
    }

    plan
}

//! Readiness scoring.
//!
//! `calculate_score` yields the immutable base score of an analysis; `compute_final_score`
//! folds the user's confidence map on top of it. Both are deterministic.

use std::collections::BTreeMap;

use crate::analysis::classifier::ExtractedSkills;
use crate::models::analysis::Confidence;

const BASE_SCORE: u32 = 35;
const PER_CATEGORY: u32 = 5;
const COMPANY_BONUS: u32 = 10;
const ROLE_BONUS: u32 = 10;
const LONG_JD_BONUS: u32 = 10;
/// JD length, in characters, above which the long-JD bonus applies.
const LONG_JD_CHARS: usize = 800;
const MAX_SCORE: u32 = 100;

/// Per-entry confidence adjustment: +2 for `Know`, -2 for `Practice`.
const CONFIDENCE_STEP: i64 = 2;

/// Base readiness score in [35, 100].
pub fn calculate_score(skills: &ExtractedSkills, company: &str, role: &str, jd_text: &str) -> u32 {
    let mut score = BASE_SCORE;

    score += PER_CATEGORY * skills.non_empty_categories() as u32;

    if !company.trim().is_empty() {
        score += COMPANY_BONUS;
    }
    if !role.trim().is_empty() {
        score += ROLE_BONUS;
    }
    if jd_text.chars().count() > LONG_JD_CHARS {
        score += LONG_JD_BONUS;
    }

    score.min(MAX_SCORE)
}

/// `clamp(base + Σ ±2, 0, 100)` over every entry in the map, displayed or not.
pub fn compute_final_score(base_score: u32, confidence: &BTreeMap<String, Confidence>) -> u32 {
    let adjustment: i64 = confidence
        .values()
        .map(|c| match c {
            Confidence::Know => CONFIDENCE_STEP,
            Confidence::Practice => -CONFIDENCE_STEP,
        })
        .sum();

    (i64::from(base_score) + adjustment).clamp(0, i64::from(MAX_SCORE)) as u32
}

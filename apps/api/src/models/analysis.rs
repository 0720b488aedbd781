use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::analysis::{ChecklistRound, CompanyProfile, ExtractedSkills, PlanDay, RoundPlan};

/// Self-reported confidence for one skill. Absent entries behave as `Practice`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Know,
    #[default]
    Practice,
}

impl Confidence {
    pub fn toggled(self) -> Self {
        match self {
            Confidence::Know => Confidence::Practice,
            Confidence::Practice => Confidence::Know,
        }
    }
}

/// The persisted unit produced by one JD submission.
///
/// A draft carries only `company`, `role` and `jd_text`; the derived fields are filled once,
/// after which only `skill_confidence_map`, `final_score` and `updated_at` change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    pub jd_text: String,
    /// `None` until the record has been analyzed. A stored object without `coreCS` reads as `None`.
    #[serde(
        default,
        deserialize_with = "skills_if_analyzed",
        skip_serializing_if = "Option::is_none"
    )]
    pub extracted_skills: Option<ExtractedSkills>,
    #[serde(default)]
    pub checklist: Vec<ChecklistRound>,
    #[serde(default)]
    pub plan7_days: Vec<PlanDay>,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub round_mapping: Vec<RoundPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_info: Option<CompanyProfile>,
    #[serde(default)]
    pub base_score: u32,
    #[serde(default)]
    pub skill_confidence_map: BTreeMap<String, Confidence>,
    #[serde(default)]
    pub final_score: u32,
}

impl AnalysisRecord {
    pub fn draft(company: String, role: String, jd_text: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            company,
            role,
            jd_text,
            extracted_skills: None,
            checklist: Vec::new(),
            plan7_days: Vec::new(),
            questions: Vec::new(),
            round_mapping: Vec::new(),
            company_info: None,
            base_score: 0,
            skill_confidence_map: BTreeMap::new(),
            final_score: 0,
        }
    }

    pub fn is_analyzed(&self) -> bool {
        self.extracted_skills.is_some()
    }

    pub fn confidence(&self, skill: &str) -> Confidence {
        self.skill_confidence_map
            .get(skill)
            .copied()
            .unwrap_or_default()
    }
}

/// Drafts written by other clients may carry `"extractedSkills": {}`; only a `coreCS` key marks
/// the skills as derived.
fn skills_if_analyzed<'de, D>(deserializer: D) -> Result<Option<ExtractedSkills>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if matches!(value.get("coreCS"), None | Some(Value::Null)) {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

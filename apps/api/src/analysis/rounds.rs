//! Round Mapper: ordered interview-round plan conditioned on company scale and skills.

use serde::{Deserialize, Serialize};

use crate::analysis::classifier::ExtractedSkills;
use crate::analysis::company::{infer_company_size, CompanySize};
use crate::analysis::templates::{
    ENTERPRISE_ROUNDS, STARTUP_ROUNDS, TECHNICAL_TOKEN, WEB_FOCUS_AREA,
};

/// One anticipated interview stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundPlan {
    pub round_title: String,
    pub focus_areas: Vec<String>,
    pub why_it_matters: String,
}

/// Which rounds receive the `Frontend/Backend` focus area when web skills were detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundAugmentation {
    /// Rounds whose focus areas contain the exact token `"Technical"`.
    /// No shipped template carries that token, so this never fires today.
    #[default]
    Literal,
    /// Rounds whose title contains `"Technical"`.
    TechnicalTitle,
}

impl RoundAugmentation {
    fn applies_to(self, round: &RoundPlan) -> bool {
        match self {
            RoundAugmentation::Literal => round.focus_areas.iter().any(|f| f == TECHNICAL_TOKEN),
            RoundAugmentation::TechnicalTitle => round.round_title.contains(TECHNICAL_TOKEN),
        }
    }
}

impl std::str::FromStr for RoundAugmentation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(RoundAugmentation::Literal),
            "title" | "technical_title" => Ok(RoundAugmentation::TechnicalTitle),
            other => Err(format!("unknown round augmentation mode '{other}'")),
        }
    }
}

/// Round plan with the literal augmentation rule.
pub fn generate_round_mapping(company: &str, skills: &ExtractedSkills) -> Vec<RoundPlan> {
    generate_round_mapping_with(company, skills, RoundAugmentation::Literal)
}

/// Round plan: 5 rounds for enterprises, 3 for startups, then the web augmentation pass.
pub fn generate_round_mapping_with(
    company: &str,
    skills: &ExtractedSkills,
    augmentation: RoundAugmentation,
) -> Vec<RoundPlan> {
    let template = match infer_company_size(company).size {
        CompanySize::Enterprise => ENTERPRISE_ROUNDS,
        CompanySize::Startup => STARTUP_ROUNDS,
    };

    let mut rounds: Vec<RoundPlan> = template
        .iter()
        .map(|(title, focus, why)| RoundPlan {
            round_title: title.to_string(),
            focus_areas: focus.iter().map(|f| f.to_string()).collect(),
            why_it_matters: why.to_string(),
        })
        .collect();

    if !skills.web.is_empty() {
        for round in rounds.iter_mut() {
            if augmentation.applies_to(round) {
                round.focus_areas.push(WEB_FOCUS_AREA.to_string());
            }
        }
    }

    rounds
}

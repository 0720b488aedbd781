// Readiness analysis engine.
// Implements: skill classification, company profiling, round mapping, plan/checklist/question
// generation, and readiness scoring. Every function here is pure and total over its inputs.

pub mod checklist;
pub mod classifier;
pub mod company;
pub mod plan;
pub mod questions;
pub mod rounds;
pub mod scoring;
pub mod templates;

// Re-export the entry points consumed by the session controller and handlers.
pub use checklist::{generate_checklist, ChecklistRound};
pub use classifier::{extract_skills, ExtractedSkills, SkillCategory};
pub use company::{infer_company_size, CompanyProfile, CompanySize};
pub use plan::{generate_plan, PlanDay};
pub use questions::generate_questions;
pub use rounds::{generate_round_mapping, generate_round_mapping_with, RoundAugmentation, RoundPlan};
pub use scoring::{calculate_score, compute_final_score};

//! Question Generator: up to ten interview questions, skill-conditioned with a generic fallback.

use crate::analysis::classifier::{ExtractedSkills, SkillCategory};
use crate::analysis::templates::{
    CONTAINER_QUESTIONS, DATA_QUESTIONS, DSA_QUESTIONS, GENERIC_QUESTIONS, JAVA_QUESTIONS,
    PYTHON_QUESTIONS, REACT_QUESTIONS, TESTING_QUESTIONS,
};

pub const MAX_QUESTIONS: usize = 10;

/// Skill-presence predicates in evaluation order, each paired with its question block.
const QUESTION_RULES: &[(fn(&ExtractedSkills) -> bool, &[&str])] = &[
    (has_dsa, DSA_QUESTIONS),
    (has_data, DATA_QUESTIONS),
    (has_java, JAVA_QUESTIONS),
    (has_python, PYTHON_QUESTIONS),
    (has_react_or_next, REACT_QUESTIONS),
    (has_aws_or_docker, CONTAINER_QUESTIONS),
    (has_testing, TESTING_QUESTIONS),
];

fn has_dsa(skills: &ExtractedSkills) -> bool {
    skills.has(SkillCategory::CoreCs, "DSA")
}

fn has_data(skills: &ExtractedSkills) -> bool {
    // SQL or any other data-store label.
    !skills.data.is_empty()
}

fn has_java(skills: &ExtractedSkills) -> bool {
    skills.has(SkillCategory::Languages, "Java")
}

fn has_python(skills: &ExtractedSkills) -> bool {
    skills.has(SkillCategory::Languages, "Python")
}

fn has_react_or_next(skills: &ExtractedSkills) -> bool {
    skills.has(SkillCategory::Web, "React") || skills.has(SkillCategory::Web, "Next.js")
}

fn has_aws_or_docker(skills: &ExtractedSkills) -> bool {
    skills.has(SkillCategory::Cloud, "AWS") || skills.has(SkillCategory::Cloud, "Docker")
}

fn has_testing(skills: &ExtractedSkills) -> bool {
    !skills.testing.is_empty()
}

/// Builds the question list. `company` and `role` are accepted for future conditioning and
/// do not influence the result today.
pub fn generate_questions(skills: &ExtractedSkills, _company: &str, _role: &str) -> Vec<String> {
    let mut questions: Vec<String> = QUESTION_RULES
        .iter()
        .filter(|(applies, _)| applies(skills))
        .flat_map(|(_, block)| block.iter().map(|q| q.to_string()))
        .collect();

    let needed = MAX_QUESTIONS.saturating_sub(questions.len());
    questions.extend(GENERIC_QUESTIONS.iter().take(needed).map(|q| q.to_string()));

    questions.truncate(MAX_QUESTIONS);
    questions
}

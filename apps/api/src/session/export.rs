//! Plain-text export of an analyzed record.

use crate::analysis::SkillCategory;
use crate::models::analysis::AnalysisRecord;

/// Suggested download name: `prp-<company>.txt`, or `prp-analysis.txt` without a company.
/// Control characters and double quotes are dropped so the name is safe inside a header.
pub fn export_file_name(record: &AnalysisRecord) -> String {
    let cleaned: String = record
        .company
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect();
    let stem = match cleaned.trim() {
        "" => "analysis",
        company => company,
    };
    format!("prp-{stem}.txt")
}

/// Renders header, skills, plan, checklist and questions as one text document.
pub fn render_export_text(record: &AnalysisRecord) -> String {
    let mut out = String::from("PLACEMENT READINESS ANALYSIS\n");
    out.push_str(&format!("Company: {}\n", or_na(&record.company)));
    out.push_str(&format!("Role: {}\n", or_na(&record.role)));
    out.push_str(&format!("Readiness Score: {}/100\n", record.final_score));

    out.push_str("\n=== EXTRACTED SKILLS ===\n");
    let skill_lines: Vec<String> = match &record.extracted_skills {
        Some(skills) => skills
            .iter()
            .map(|(category, labels)| format!("{}: {}", category.key(), labels.join(", ")))
            .collect(),
        None => SkillCategory::ALL
            .iter()
            .map(|c| format!("{}: ", c.key()))
            .collect(),
    };
    out.push_str(&skill_lines.join("\n"));

    out.push_str("\n\n=== 7-DAY PLAN ===\n");
    let days: Vec<String> = record
        .plan7_days
        .iter()
        .map(|d| format!("{}: {}\n{}", d.day, d.focus, d.tasks.join("\n")))
        .collect();
    out.push_str(&days.join("\n\n"));

    out.push_str("\n\n=== ROUND CHECKLIST ===\n");
    let rounds: Vec<String> = record
        .checklist
        .iter()
        .map(|r| {
            let items: Vec<String> = r.items.iter().map(|i| format!("☐ {i}")).collect();
            format!("{}\n{}", r.round_title, items.join("\n"))
        })
        .collect();
    out.push_str(&rounds.join("\n\n"));

    out.push_str("\n\n=== INTERVIEW QUESTIONS ===\n");
    let questions: Vec<String> = record
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {q}", i + 1))
        .collect();
    out.push_str(&questions.join("\n"));

    out
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

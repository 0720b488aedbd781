//! Analysis Session Controller: owns the Draft → Analyzed → Confidence-Updated cycle.
//!
//! Every public operation is one read-modify-write pass over the store, serialized by an
//! internal mutex so concurrent requests never interleave their reads and writes.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{
    calculate_score, compute_final_score, extract_skills, generate_checklist, generate_plan,
    generate_questions, generate_round_mapping, generate_round_mapping_with, infer_company_size,
    RoundAugmentation,
};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisRecord, Confidence};
use crate::session::draft::{build_draft, SubmitAnalysisRequest};
use crate::session::ship_gate::{evaluate_ship_gate, ShipStatus, TestChecklist};
use crate::store::{
    read_json, write_json, KvStore, ANALYSIS_HISTORY_KEY, CURRENT_ANALYSIS_KEY, TEST_CHECKLIST_KEY,
};

/// Company name used by the round mapper and profiler when none was given.
const UNKNOWN_COMPANY: &str = "Unknown";

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub round_augmentation: RoundAugmentation,
    pub min_jd_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            round_augmentation: RoundAugmentation::Literal,
            min_jd_chars: 200,
        }
    }
}

/// Populates every derived field of a draft. Returns `false`, leaving the record untouched,
/// when it was already analyzed.
///
/// Every extracted label enters the confidence map as `Practice`, and `final_score` is
/// already the map-derived value, so the first toggle moves it the same way later ones do.
pub fn analyze_record(record: &mut AnalysisRecord, augmentation: RoundAugmentation) -> bool {
    if record.is_analyzed() {
        return false;
    }

    let skills = extract_skills(&record.jd_text);
    let profile_name = if record.company.is_empty() {
        UNKNOWN_COMPANY
    } else {
        record.company.as_str()
    };

    record.checklist = generate_checklist(&skills);
    record.plan7_days = generate_plan(&skills);
    record.questions = generate_questions(&skills, &record.company, &record.role);
    record.base_score = calculate_score(&skills, &record.company, &record.role, &record.jd_text);
    record.round_mapping = match augmentation {
        RoundAugmentation::Literal => generate_round_mapping(profile_name, &skills),
        corrected => generate_round_mapping_with(profile_name, &skills, corrected),
    };
    record.company_info = Some(infer_company_size(profile_name));

    record.skill_confidence_map = skills
        .all_labels()
        .map(|label| (label.to_string(), Confidence::Practice))
        .collect();
    record.final_score = compute_final_score(record.base_score, &record.skill_confidence_map);
    record.extracted_skills = Some(skills);
    record.updated_at = Utc::now();

    true
}

/// Flips one skill's confidence and recomputes the final score from the whole map.
/// Returns the new confidence for `skill`.
pub fn apply_confidence_toggle(record: &mut AnalysisRecord, skill: &str) -> Confidence {
    let next = record.confidence(skill).toggled();
    record.skill_confidence_map.insert(skill.to_string(), next);
    record.final_score = compute_final_score(record.base_score, &record.skill_confidence_map);
    record.updated_at = Utc::now();
    next
}

pub struct SessionController {
    store: Arc<dyn KvStore>,
    options: AnalysisOptions,
    lock: Mutex<()>,
}

impl SessionController {
    pub fn new(store: Arc<dyn KvStore>, options: AnalysisOptions) -> Self {
        Self {
            store,
            options,
            lock: Mutex::new(()),
        }
    }

    /// Validates the submission and replaces the current slot with a fresh draft.
    pub async fn submit(&self, request: SubmitAnalysisRequest) -> Result<AnalysisRecord, AppError> {
        let draft = build_draft(request, self.options.min_jd_chars)?;

        let _guard = self.lock.lock().await;
        write_json(self.store.as_ref(), CURRENT_ANALYSIS_KEY, &draft).await?;
        info!("Created draft analysis {}", draft.id);
        Ok(draft)
    }

    /// Loads the current record, analyzing it on first view, and upserts it into history.
    pub async fn load_current(&self) -> Result<Option<AnalysisRecord>, AppError> {
        let _guard = self.lock.lock().await;
        let Some(record) = self.current_analyzed().await? else {
            return Ok(None);
        };
        self.upsert_history(&record).await?;
        Ok(Some(record))
    }

    /// Toggles `skill` between `know` and `practice`, then persists current slot and history.
    pub async fn toggle_confidence(&self, skill: &str) -> Result<AnalysisRecord, AppError> {
        let _guard = self.lock.lock().await;
        let mut record = self
            .current_analyzed()
            .await?
            .ok_or_else(|| AppError::NotFound("No current analysis".to_string()))?;

        let known_label = record
            .extracted_skills
            .as_ref()
            .is_some_and(|skills| skills.contains_label(skill));
        if !known_label {
            warn!("Confidence toggle for '{skill}' which is not an extracted skill");
        }

        let next = apply_confidence_toggle(&mut record, skill);
        write_json(self.store.as_ref(), CURRENT_ANALYSIS_KEY, &record).await?;
        self.upsert_history(&record).await?;

        info!(
            "Analysis {}: '{skill}' -> {next:?}, final score {}",
            record.id, record.final_score
        );
        Ok(record)
    }

    /// History, newest `created_at` first.
    pub async fn history(&self) -> Result<Vec<AnalysisRecord>, AppError> {
        let _guard = self.lock.lock().await;
        let mut history = self.read_history().await?;
        history.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(history)
    }

    /// Makes a history entry the current record.
    pub async fn open_from_history(&self, id: Uuid) -> Result<AnalysisRecord, AppError> {
        let _guard = self.lock.lock().await;
        let record = self
            .read_history()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))?;

        write_json(self.store.as_ref(), CURRENT_ANALYSIS_KEY, &record).await?;
        info!("Opened analysis {id} from history");
        Ok(record)
    }

    /// Removes a history entry. The current slot is left as is.
    pub async fn delete_from_history(&self, id: Uuid) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut history = self.read_history().await?;
        let before = history.len();
        history.retain(|r| r.id != id);
        if history.len() == before {
            return Err(AppError::NotFound(format!("Analysis {id} not found")));
        }

        write_json(self.store.as_ref(), ANALYSIS_HISTORY_KEY, &history).await?;
        info!("Deleted analysis {id} from history");
        Ok(())
    }

    pub async fn ship_status(&self) -> Result<ShipStatus, AppError> {
        let checklist: TestChecklist = read_json(self.store.as_ref(), TEST_CHECKLIST_KEY)
            .await?
            .unwrap_or_default();
        Ok(evaluate_ship_gate(&checklist))
    }

    /// Reads the current slot and runs the one-time derivation if it is still a draft.
    /// Caller must hold `lock`.
    async fn current_analyzed(&self) -> Result<Option<AnalysisRecord>, AppError> {
        let Some(mut record) =
            read_json::<AnalysisRecord>(self.store.as_ref(), CURRENT_ANALYSIS_KEY).await?
        else {
            return Ok(None);
        };

        if analyze_record(&mut record, self.options.round_augmentation) {
            write_json(self.store.as_ref(), CURRENT_ANALYSIS_KEY, &record).await?;
            info!(
                "Analyzed {}: base score {}, {} questions",
                record.id,
                record.base_score,
                record.questions.len()
            );
        }
        Ok(Some(record))
    }

    async fn read_history(&self) -> Result<Vec<AnalysisRecord>, AppError> {
        Ok(read_json(self.store.as_ref(), ANALYSIS_HISTORY_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Replaces the entry with the same id, or appends.
    async fn upsert_history(&self, record: &AnalysisRecord) -> Result<(), AppError> {
        let mut history = self.read_history().await?;
        match history.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => history.push(record.clone()),
        }
        write_json(self.store.as_ref(), ANALYSIS_HISTORY_KEY, &history).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::store::MemoryStore;

    const JD: &str = "We are hiring a backend engineer. You will design REST services in Java \
        and Python, model data in PostgreSQL and Redis, ship on AWS with Docker and Kubernetes, \
        and write JUnit tests. Strong DSA and OOP fundamentals are expected. Experience with \
        React is a plus for occasional full-stack work on internal dashboards.";

    fn controller() -> (Arc<MemoryStore>, SessionController) {
        let store = Arc::new(MemoryStore::new());
        let controller = SessionController::new(store.clone(), AnalysisOptions::default());
        (store, controller)
    }

    fn request(company: &str, role: &str) -> SubmitAnalysisRequest {
        SubmitAnalysisRequest {
            company: company.to_string(),
            role: role.to_string(),
            jd_text: JD.to_string(),
        }
    }

    async fn stored_history(store: &MemoryStore) -> Vec<AnalysisRecord> {
        read_json(store, ANALYSIS_HISTORY_KEY)
            .await
            .unwrap()
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_submit_writes_draft_to_current_slot_only() {
        let (store, controller) = controller();
        let draft = controller.submit(request("Amazon", "SDE")).await.unwrap();

        let current: AnalysisRecord = read_json(&*store, CURRENT_ANALYSIS_KEY)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current.id, draft.id);
        assert!(!current.is_analyzed());
        assert!(stored_history(&store).await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_short_jd() {
        let (store, controller) = controller();
        let mut req = request("", "");
        req.jd_text = "Java".to_string();
        assert!(matches!(
            controller.submit(req).await,
            Err(AppError::Validation(_))
        ));
        assert!(store.get(CURRENT_ANALYSIS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_first_load_analyzes_and_records_history() {
        let (store, controller) = controller();
        controller.submit(request("Amazon", "SDE")).await.unwrap();

        let record = controller.load_current().await.unwrap().unwrap();
        assert!(record.is_analyzed());
        assert_eq!(record.round_mapping.len(), 5);
        assert_eq!(record.checklist.len(), 4);
        assert_eq!(record.plan7_days.len(), 5);
        assert_eq!(record.questions.len(), 10);
        assert_eq!(
            record.final_score,
            compute_final_score(record.base_score, &record.skill_confidence_map)
        );
        assert!(record
            .skill_confidence_map
            .values()
            .all(|c| *c == Confidence::Practice));
        assert!(record.skill_confidence_map.contains_key("Java"));

        let history = stored_history(&store).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], record);
    }

    #[tokio::test]
    async fn test_repeat_load_does_not_recompute() {
        let (_store, controller) = controller();
        controller.submit(request("", "")).await.unwrap();

        let first = controller.load_current().await.unwrap().unwrap();
        let second = controller.load_current().await.unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_reload_keeps_confidence_state() {
        let (_store, controller) = controller();
        controller.submit(request("", "")).await.unwrap();
        controller.load_current().await.unwrap();

        let toggled = controller.toggle_confidence("Java").await.unwrap();
        let reloaded = controller.load_current().await.unwrap().unwrap();
        assert_eq!(reloaded, toggled);
        assert_eq!(reloaded.confidence("Java"), Confidence::Know);
    }

    #[tokio::test]
    async fn test_blank_company_profiles_as_startup() {
        let (_store, controller) = controller();
        controller.submit(request("", "")).await.unwrap();
        let record = controller.load_current().await.unwrap().unwrap();
        assert_eq!(record.round_mapping.len(), 3);
        assert_eq!(record.company_info.unwrap().estimate, "<200");
    }

    #[tokio::test]
    async fn test_toggle_recomputes_from_full_map_and_persists() {
        let (store, controller) = controller();
        controller.submit(request("Amazon", "SDE")).await.unwrap();
        let analyzed = controller.load_current().await.unwrap().unwrap();
        let entries = analyzed.skill_confidence_map.len() as i64;

        let record = controller.toggle_confidence("Java").await.unwrap();
        let expected = (analyzed.base_score as i64 + 2 - 2 * (entries - 1)).clamp(0, 100);
        assert_eq!(record.final_score as i64, expected);
        assert_eq!(record.base_score, analyzed.base_score);

        let current: AnalysisRecord = read_json(&*store, CURRENT_ANALYSIS_KEY)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(current, record);
        let history = stored_history(&store).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], record);
    }

    #[tokio::test]
    async fn test_toggle_without_current_is_not_found() {
        let (_store, controller) = controller();
        assert!(matches!(
            controller.toggle_confidence("Java").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_toggle_analyzes_a_draft_first() {
        let (store, controller) = controller();
        controller.submit(request("", "")).await.unwrap();

        let record = controller.toggle_confidence("Java").await.unwrap();
        assert!(record.is_analyzed());
        assert_eq!(record.confidence("Java"), Confidence::Know);
        assert_eq!(stored_history(&store).await.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_label_creates_dangling_entry() {
        let (_store, controller) = controller();
        controller.submit(request("", "")).await.unwrap();
        let analyzed = controller.load_current().await.unwrap().unwrap();

        let record = controller.toggle_confidence("Haskell").await.unwrap();
        assert_eq!(record.confidence("Haskell"), Confidence::Know);
        assert_eq!(
            record.skill_confidence_map.len(),
            analyzed.skill_confidence_map.len() + 1
        );
    }

    #[tokio::test]
    async fn test_toggle_upserts_missing_history_entry() {
        let (store, controller) = controller();
        controller.submit(request("", "")).await.unwrap();
        controller.load_current().await.unwrap();
        store.remove(ANALYSIS_HISTORY_KEY).await.unwrap();

        let record = controller.toggle_confidence("Java").await.unwrap();
        let history = stored_history(&store).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, record.id);
    }

    #[tokio::test]
    async fn test_malformed_current_reads_as_absent() {
        let (store, controller) = controller();
        store
            .set(CURRENT_ANALYSIS_KEY, "{\"id\": 12".to_string())
            .await
            .unwrap();
        assert!(controller.load_current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_draft_with_empty_extracted_skills_is_analyzed_on_load() {
        let (store, controller) = controller();
        let id = Uuid::new_v4();
        let stored = serde_json::json!({
            "id": id,
            "createdAt": "2026-01-05T10:00:00Z",
            "updatedAt": "2026-01-05T10:00:00Z",
            "company": "Amazon",
            "role": "SDE",
            "jdText": JD,
            "extractedSkills": {},
            "checklist": [],
            "plan7Days": [],
            "questions": [],
            "baseScore": 0,
            "skillConfidenceMap": {},
            "finalScore": 0
        });
        store
            .set(CURRENT_ANALYSIS_KEY, stored.to_string())
            .await
            .unwrap();

        let record = controller.load_current().await.unwrap().unwrap();
        assert_eq!(record.id, id);
        assert!(record.is_analyzed());
        assert_eq!(record.checklist.len(), 4);
        assert_eq!(record.questions.len(), 10);
        assert!(record.base_score > 0);
        assert!(record
            .extracted_skills
            .as_ref()
            .is_some_and(|s| s.core_cs.contains(&"DSA".to_string())));
    }

    #[tokio::test]
    async fn test_history_is_newest_first_and_open_switches_current() {
        let (_store, controller) = controller();
        let first = controller.submit(request("Google", "")).await.unwrap();
        controller.load_current().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = controller.submit(request("Acme", "")).await.unwrap();
        controller.load_current().await.unwrap();

        let history = controller.history().await.unwrap();
        let ids: Vec<Uuid> = history.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        let opened = controller.open_from_history(first.id).await.unwrap();
        assert_eq!(opened.company, "Google");
        let current = controller.load_current().await.unwrap().unwrap();
        assert_eq!(current.id, first.id);
        assert_eq!(controller.history().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_from_history() {
        let (_store, controller) = controller();
        let draft = controller.submit(request("", "")).await.unwrap();
        controller.load_current().await.unwrap();

        controller.delete_from_history(draft.id).await.unwrap();
        assert!(controller.history().await.unwrap().is_empty());
        assert!(matches!(
            controller.delete_from_history(draft.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            controller.open_from_history(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ship_status_reads_test_checklist() {
        let (store, controller) = controller();
        assert!(!controller.ship_status().await.unwrap().unlocked);

        let all: HashMap<String, bool> = (1..=10).map(|i| (i.to_string(), true)).collect();
        write_json(&*store, TEST_CHECKLIST_KEY, &all).await.unwrap();
        let status = controller.ship_status().await.unwrap();
        assert!(status.unlocked);
        assert_eq!(status.passed, 10);
    }

    #[test]
    fn test_analyze_record_is_idempotent() {
        let mut record = AnalysisRecord::draft("Amazon".into(), "SDE".into(), JD.into());
        assert!(analyze_record(&mut record, RoundAugmentation::Literal));
        apply_confidence_toggle(&mut record, "Java");
        let snapshot = record.clone();

        assert!(!analyze_record(&mut record, RoundAugmentation::Literal));
        assert_eq!(record, snapshot);
    }

    #[test]
    fn test_round_mapping_follows_configured_mode() {
        let mut literal = AnalysisRecord::draft(String::new(), String::new(), JD.into());
        analyze_record(&mut literal, RoundAugmentation::Literal);
        let skills = extract_skills(JD);
        assert_eq!(
            literal.round_mapping,
            generate_round_mapping(UNKNOWN_COMPANY, &skills)
        );

        let mut titled = AnalysisRecord::draft(String::new(), String::new(), JD.into());
        analyze_record(&mut titled, RoundAugmentation::TechnicalTitle);
        assert_eq!(
            titled.round_mapping,
            generate_round_mapping_with(
                UNKNOWN_COMPANY,
                &skills,
                RoundAugmentation::TechnicalTitle
            )
        );
    }

    #[test]
    fn test_analyzed_score_matches_confidence_map() {
        let mut record = AnalysisRecord::draft("Amazon".into(), "SDE".into(), JD.into());
        analyze_record(&mut record, RoundAugmentation::Literal);

        let entries = record.skill_confidence_map.len() as i64;
        let expected = (record.base_score as i64 - 2 * entries).clamp(0, 100);
        assert_eq!(record.final_score as i64, expected);
    }

    #[test]
    fn test_toggle_pair_is_self_inverse() {
        let mut record = AnalysisRecord::draft("Amazon".into(), "SDE".into(), JD.into());
        analyze_record(&mut record, RoundAugmentation::Literal);
        let map_before = record.skill_confidence_map.clone();
        let score_before = record.final_score;

        apply_confidence_toggle(&mut record, "Java");
        assert!(record.final_score > score_before);
        apply_confidence_toggle(&mut record, "Java");
        assert_eq!(record.skill_confidence_map, map_before);
        assert_eq!(record.final_score, score_before);
    }

    #[test]
    fn test_practice_to_know_moves_entry_contribution_by_two_each_side() {
        let mut record = AnalysisRecord::draft(String::new(), String::new(), JD.into());
        analyze_record(&mut record, RoundAugmentation::Literal);
        let practice_score = record.final_score;

        // Docker: practice (-2) -> know (+2).
        apply_confidence_toggle(&mut record, "Docker");
        assert_eq!(record.final_score, practice_score + 4);
        apply_confidence_toggle(&mut record, "Docker");
        assert_eq!(record.final_score, practice_score);
    }

    #[test]
    fn test_first_toggle_of_unseen_skill_adds_two() {
        let mut record = AnalysisRecord::draft(String::new(), String::new(), JD.into());
        analyze_record(&mut record, RoundAugmentation::Literal);
        let before = record.final_score;

        apply_confidence_toggle(&mut record, "Elixir");
        assert_eq!(record.final_score, before + 2);
    }

    #[test]
    fn test_score_is_independent_of_toggle_order() {
        let mut a = AnalysisRecord::draft(String::new(), String::new(), JD.into());
        analyze_record(&mut a, RoundAugmentation::Literal);
        let mut b = a.clone();

        for skill in ["Java", "AWS", "React", "Java", "DSA"] {
            apply_confidence_toggle(&mut a, skill);
        }
        for skill in ["DSA", "Java", "React", "AWS", "Java"] {
            apply_confidence_toggle(&mut b, skill);
        }
        assert_eq!(a.skill_confidence_map, b.skill_confidence_map);
        assert_eq!(a.final_score, b.final_score);
        assert_eq!(
            a.final_score,
            compute_final_score(a.base_score, &a.skill_confidence_map)
        );
    }

    #[test]
    fn test_final_score_stays_within_bounds() {
        let mut record = AnalysisRecord::draft(String::new(), String::new(), JD.into());
        analyze_record(&mut record, RoundAugmentation::Literal);
        for i in 0..60 {
            apply_confidence_toggle(&mut record, &format!("extra-{i}"));
        }
        assert_eq!(record.final_score, 100);

        for i in 0..60 {
            apply_confidence_toggle(&mut record, &format!("extra-{i}"));
        }
        assert_eq!(record.final_score, 0);
    }
}

//! Ship gate: read-only view over the manual test checklist.

use std::collections::HashMap;

use serde::Serialize;

/// Number of manual checks that must all pass.
pub const REQUIRED_TESTS: usize = 10;

/// Test id ("1".."10") → passed.
pub type TestChecklist = HashMap<String, bool>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipStatus {
    pub passed: usize,
    pub total: usize,
    pub unlocked: bool,
}

/// Unlocked only when exactly `REQUIRED_TESTS` entries exist and every one passed.
pub fn evaluate_ship_gate(checklist: &TestChecklist) -> ShipStatus {
    let passed = checklist.values().filter(|&&v| v).count();
    ShipStatus {
        passed,
        total: REQUIRED_TESTS,
        unlocked: checklist.len() == REQUIRED_TESTS && passed == REQUIRED_TESTS,
    }
}

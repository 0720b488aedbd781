//! Company Profiler: binary scale inference from a static enterprise roster.

use serde::{Deserialize, Serialize};

use crate::analysis::templates::ENTERPRISE_ROSTER;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    Enterprise,
    #[default]
    Startup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub size: CompanySize,
    /// Headcount band shown next to the size, e.g. `"2000+"`.
    pub estimate: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            size: CompanySize::Startup,
            estimate: "<200".to_string(),
        }
    }
}

/// Enterprise when any roster name is a case-insensitive substring of `company`.
/// Empty or unmatched names fall back to `Startup` / `"<200"`.
pub fn infer_company_size(company: &str) -> CompanyProfile {
    let company_lower = company.to_lowercase();
    let is_enterprise = ENTERPRISE_ROSTER
        .iter()
        .any(|name| company_lower.contains(&name.to_lowercase()));

    if is_enterprise {
        CompanyProfile {
            size: CompanySize::Enterprise,
            estimate: "2000+".to_string(),
        }
    } else {
        CompanyProfile::default()
    }
}

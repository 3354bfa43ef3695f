//! Command implementations.

pub mod classify;
pub mod config;
pub mod deadlines;
pub mod report;
pub mod score;

pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::deadlines::execute_deadlines;
pub use self::report::execute_report;
pub use self::score::execute_score;

use crate::error::Result;
use chrono::NaiveDate;
use justinianus_domain::CaseId;
use justinianus_store::MemoryStore;
use std::path::Path;

/// Load a single case file into a fresh store.
pub(crate) fn load_case(path: &Path) -> Result<(MemoryStore, CaseId)> {
    let mut store = MemoryStore::new();
    let case_id = store.load_file(path)?;
    Ok((store, case_id))
}

/// Reference date for deadline arithmetic, local today unless overridden.
pub(crate) fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

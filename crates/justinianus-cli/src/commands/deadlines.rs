//! Deadlines command implementation.

use super::{load_case, reference_date};
use crate::cli::DeadlinesArgs;
use crate::error::Result;
use crate::output::Formatter;
use chrono::NaiveDate;
use justinianus_domain::rollup::assess_deadlines;
use justinianus_domain::traits::CaseDataSource;
use justinianus_domain::{CaseId, DeadlineSummary};
use justinianus_store::MemoryStore;

/// Execute the deadlines command.
pub fn execute_deadlines(args: DeadlinesArgs, formatter: &Formatter) -> Result<()> {
    let (store, case_id) = load_case(&args.case_file)?;
    let today = reference_date(args.today);

    println!("{}", render_deadlines(&store, case_id, today, formatter)?);
    Ok(())
}

fn render_deadlines(store: &MemoryStore, case_id: CaseId, today: NaiveDate, formatter: &Formatter) -> Result<String> {
    let deadlines = assess_deadlines(&store.list_deadlines_for_case(case_id)?, today);
    let summary = DeadlineSummary::from_assessments(&deadlines);
    tracing::info!(
        case_id = %case_id,
        today = %today,
        war_room_candidates = summary.war_room_candidates.len(),
        "Assessed deadlines"
    );

    formatter.format_deadlines(&deadlines, &summary)
}

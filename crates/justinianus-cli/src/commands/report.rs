//! Report command implementation.

use super::{load_case, reference_date};
use crate::cli::ReportArgs;
use crate::error::Result;
use crate::output::Formatter;
use chrono::NaiveDate;
use justinianus_domain::{assess_case, CaseId, ViabilityConfig};
use justinianus_store::MemoryStore;

/// Execute the report command.
pub fn execute_report(args: ReportArgs, scoring: &ViabilityConfig, formatter: &Formatter) -> Result<()> {
    let (store, case_id) = load_case(&args.case_file)?;
    let today = reference_date(args.today);

    println!("{}", render_report(&store, case_id, today, scoring, formatter)?);
    Ok(())
}

fn render_report(
    store: &MemoryStore,
    case_id: CaseId,
    today: NaiveDate,
    scoring: &ViabilityConfig,
    formatter: &Formatter,
) -> Result<String> {
    let assessment = assess_case(store, case_id, today, scoring)?;
    tracing::info!(
        case_id = %case_id,
        claims = assessment.claims.len(),
        case_score = assessment.case_score,
        "Assessed case"
    );

    formatter.format_case(&assessment, store.case_title(case_id))
}

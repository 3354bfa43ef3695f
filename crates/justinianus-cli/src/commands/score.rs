//! Score command implementation.

use super::load_case;
use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::output::Formatter;
use justinianus_domain::traits::CaseDataSource;
use justinianus_domain::viability::{case_score_of, rank_claims, score_claim};
use justinianus_domain::{CaseId, NodeId, ViabilityConfig};
use justinianus_store::MemoryStore;

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, scoring: &ViabilityConfig, formatter: &Formatter) -> Result<()> {
    let (store, case_id) = load_case(&args.case_file)?;
    let claim = args.claim.as_deref().map(NodeId::from_string).transpose()?;

    println!("{}", render_score(&store, case_id, claim, scoring, formatter)?);
    Ok(())
}

fn render_score(
    store: &MemoryStore,
    case_id: CaseId,
    claim: Option<NodeId>,
    scoring: &ViabilityConfig,
    formatter: &Formatter,
) -> Result<String> {
    let nodes = store.list_nodes_for_case(case_id)?;
    let edges = store.list_edges_for_case(case_id)?;

    let Some(claim_id) = claim else {
        let claims = rank_claims(&nodes, &edges, scoring);
        return formatter.format_claims(&claims, case_score_of(&claims));
    };

    match score_claim(claim_id, &nodes, &edges, scoring) {
        Some(score) => {
            let case_score = score.score;
            formatter.format_claims(&[score], case_score)
        }
        None => {
            // Unknown ids score zero rather than failing
            tracing::warn!(claim_id = %claim_id, case_id = %case_id, "Claim not found in case");
            formatter.format_missing_claim(claim_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use justinianus_store::{parse_case_file, CaseFileFormat};

    const CASE: &str = r#"{
        "case_id": "00000000-0000-0000-0000-000000000001",
        "nodes": [
            { "id": "00000000-0000-0000-0000-000000000010", "kind": "claim", "title": "Overtime" },
            { "id": "00000000-0000-0000-0000-000000000011", "kind": "evidence", "title": "Time sheets" }
        ],
        "edges": [
            { "id": "00000000-0000-0000-0000-000000000020",
              "source": "00000000-0000-0000-0000-000000000010",
              "target": "00000000-0000-0000-0000-000000000011",
              "relation": "depends_on", "weight": 0.9 }
        ]
    }"#;

    fn store() -> (MemoryStore, CaseId) {
        let mut store = MemoryStore::new();
        let id = store
            .insert_case(parse_case_file(CASE, CaseFileFormat::Json).unwrap())
            .unwrap();
        (store, id)
    }

    #[test]
    fn test_score_all_claims() {
        let (store, id) = store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = render_score(&store, id, None, &ViabilityConfig::default(), &formatter).unwrap();
        assert_eq!(output, "00000000-0000-0000-0000-000000000010\t0.9000");
    }

    #[test]
    fn test_score_unknown_claim_is_zero() {
        let (store, id) = store();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = render_score(
            &store,
            id,
            Some(NodeId::from_value(0x11)),
            &ViabilityConfig::default(),
            &formatter,
        )
        .unwrap();
        assert!(output.contains("not found"));
        assert!(output.contains("0.00"));
    }

    #[test]
    fn test_unknown_claim_keeps_machine_formats() {
        let (store, id) = store();
        let claim = Some(NodeId::from_value(0x99));
        let scoring = ViabilityConfig::default();

        let json = render_score(&store, id, claim, &scoring, &Formatter::new(OutputFormat::Json, false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 0.0);
        assert_eq!(value["found"], false);

        let quiet = render_score(&store, id, claim, &scoring, &Formatter::new(OutputFormat::Quiet, false)).unwrap();
        assert_eq!(quiet, "00000000-0000-0000-0000-000000000099\t0.0000");
    }
}

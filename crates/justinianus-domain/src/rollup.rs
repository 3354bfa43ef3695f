//! Case-level rollups
//!
//! Combines the viability scorer and the criticality classifier into one
//! snapshot of a case. Snapshots are built fresh on each call.

use crate::criticality::{assess_deadline, Criticality, DeadlineAssessment};
use crate::traits::CaseDataSource;
use crate::viability::{case_score_of, rank_claims, ClaimScore, ViabilityConfig};
use crate::{CaseId, Deadline, DeadlineId};
use chrono::NaiveDate;
use serde::Serialize;

/// Deadline counts per tier plus the ones needing action
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeadlineSummary {
    /// Deadlines due today or earlier
    pub overdue: usize,
    /// Deadlines in the critical tier
    pub critical: usize,
    /// Deadlines in the urgent tier
    pub urgent: usize,
    /// Deadlines in the attention tier
    pub attention: usize,
    /// Deadlines in the comfortable tier
    pub comfortable: usize,
    /// Eligible for the war room but not yet in it
    pub war_room_candidates: Vec<DeadlineId>,
    /// Eligible for an automatic draft not yet generated
    pub draft_candidates: Vec<DeadlineId>,
}

impl DeadlineSummary {
    /// Tally a set of assessments
    pub fn from_assessments(assessments: &[DeadlineAssessment]) -> Self {
        let mut summary = Self::default();

        for a in assessments {
            match a.classification.tier {
                Criticality::Overdue => summary.overdue += 1,
                Criticality::Critical => summary.critical += 1,
                Criticality::Urgent => summary.urgent += 1,
                Criticality::Attention => summary.attention += 1,
                Criticality::Comfortable => summary.comfortable += 1,
            }
            if a.suggest_war_room {
                summary.war_room_candidates.push(a.deadline_id);
            }
            if a.draft_generation_due {
                summary.draft_candidates.push(a.deadline_id);
            }
        }

        summary
    }

    /// Count for a single tier
    pub fn count(&self, tier: Criticality) -> usize {
        match tier {
            Criticality::Overdue => self.overdue,
            Criticality::Critical => self.critical,
            Criticality::Urgent => self.urgent,
            Criticality::Attention => self.attention,
            Criticality::Comfortable => self.comfortable,
        }
    }

    /// Total deadlines tallied
    pub fn total(&self) -> usize {
        Criticality::all().iter().map(|t| self.count(*t)).sum()
    }
}

/// Assess every deadline, soonest first
pub fn assess_deadlines(deadlines: &[Deadline], today: NaiveDate) -> Vec<DeadlineAssessment> {
    let mut assessments: Vec<DeadlineAssessment> =
        deadlines.iter().map(|d| assess_deadline(d, today)).collect();
    assessments.sort_by(|a, b| {
        a.days_remaining
            .cmp(&b.days_remaining)
            .then_with(|| a.deadline_id.cmp(&b.deadline_id))
    });
    assessments
}

/// Snapshot of one case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseAssessment {
    /// Case assessed
    pub case_id: CaseId,
    /// Reference date for deadline arithmetic
    pub today: NaiveDate,
    /// Claims ranked by score
    pub claims: Vec<ClaimScore>,
    /// Probability of success (mean claim score)
    pub case_score: f64,
    /// Deadlines, soonest first
    pub deadlines: Vec<DeadlineAssessment>,
    /// Per-tier tallies
    pub summary: DeadlineSummary,
}

/// Build a snapshot of a case from any data source
pub fn assess_case<S: CaseDataSource>(
    source: &S,
    case_id: CaseId,
    today: NaiveDate,
    config: &ViabilityConfig,
) -> Result<CaseAssessment, S::Error> {
    let nodes = source.list_nodes_for_case(case_id)?;
    let edges = source.list_edges_for_case(case_id)?;
    let deadlines = source.list_deadlines_for_case(case_id)?;

    let claims = rank_claims(&nodes, &edges, config);
    let case_score = case_score_of(&claims);
    let deadlines = assess_deadlines(&deadlines, today);
    let summary = DeadlineSummary::from_assessments(&deadlines);

    Ok(CaseAssessment {
        case_id,
        today,
        claims,
        case_score,
        deadlines,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EdgeId, GraphEdge, GraphNode, NodeId, NodeKind, Priority, Relation};

    struct Fixture {
        nodes: Vec<GraphNode>,
        edges: Vec<GraphEdge>,
        deadlines: Vec<Deadline>,
    }

    impl CaseDataSource for Fixture {
        type Error = std::convert::Infallible;

        fn list_nodes_for_case(&self, case_id: CaseId) -> Result<Vec<GraphNode>, Self::Error> {
            Ok(self.nodes.iter().filter(|n| n.case_id == case_id).cloned().collect())
        }

        fn list_edges_for_case(&self, case_id: CaseId) -> Result<Vec<GraphEdge>, Self::Error> {
            Ok(self.edges.iter().filter(|e| e.case_id == case_id).cloned().collect())
        }

        fn list_deadlines_for_case(&self, case_id: CaseId) -> Result<Vec<Deadline>, Self::Error> {
            Ok(self.deadlines.iter().filter(|d| d.case_id == case_id).cloned().collect())
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
    }

    fn deadline(id: u128, due: u32) -> Deadline {
        Deadline::new(
            DeadlineId::from_value(id),
            CaseId::from_value(1),
            "filing",
            format!("Deadline {}", id),
            date(due),
            Priority::Medium,
        )
    }

    fn fixture() -> Fixture {
        let case = CaseId::from_value(1);
        let claim = GraphNode::new(NodeId::from_value(1), case, NodeKind::Claim, "Reinstatement", 0.7).unwrap();
        let basis = GraphNode::new(NodeId::from_value(2), case, NodeKind::LegalBasis, "Labor code", 0.9).unwrap();
        let edge = GraphEdge::new(EdgeId::from_value(1), case, claim.id, basis.id, Relation::GroundedBy, 0.8).unwrap();

        Fixture {
            nodes: vec![claim, basis],
            edges: vec![edge],
            deadlines: vec![
                deadline(1, 30),
                deadline(2, 10),
                deadline(3, 12).with_war_room_active(true),
                deadline(4, 14),
                deadline(5, 5),
            ],
        }
    }

    #[test]
    fn test_assess_case() {
        let fixture = fixture();
        let assessment =
            assess_case(&fixture, CaseId::from_value(1), date(10), &ViabilityConfig::default()).unwrap();

        assert_eq!(assessment.claims.len(), 1);
        assert!((assessment.case_score - 0.8).abs() < 1e-9);

        let days: Vec<i64> = assessment.deadlines.iter().map(|d| d.days_remaining).collect();
        assert_eq!(days, vec![-5, 0, 2, 4, 20]);

        let summary = &assessment.summary;
        assert_eq!(summary.overdue, 2);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.urgent, 1);
        assert_eq!(summary.attention, 0);
        assert_eq!(summary.comfortable, 1);
        assert_eq!(summary.total(), 5);

        // Deadline 3 already has its war room open
        assert_eq!(
            summary.war_room_candidates,
            vec![DeadlineId::from_value(5), DeadlineId::from_value(2)]
        );
        assert_eq!(summary.draft_candidates.len(), 3);
    }

    #[test]
    fn test_assess_unknown_case_is_empty() {
        let fixture = fixture();
        let assessment =
            assess_case(&fixture, CaseId::from_value(2), date(10), &ViabilityConfig::default()).unwrap();

        assert!(assessment.claims.is_empty());
        assert_eq!(assessment.case_score, 0.0);
        assert_eq!(assessment.summary, DeadlineSummary::default());
    }
}

//! Claim viability scoring
//!
//! Computes, per claim node, a support score in [0, 1] from the claim's
//! direct outgoing edges:
//!
//! 1. support = mean weight of `depends_on` / `grounded_by` edges
//! 2. risk = mean weight of `weakened_by` edges
//! 3. score = clamp(support - risk * dampening, 0, 1)
//!
//! Both means are 0 for an empty edge set. `supported_by`, `contradicts`
//! and `corroborates` edges do not take part in the score.

use crate::error::ensure_unit_interval;
use crate::{DomainError, GraphEdge, GraphNode, NodeId};
use serde::{Deserialize, Serialize};

/// Fraction of the mean risk weight subtracted from support (default: 0.3)
pub const RISK_DAMPENING: f64 = 0.3;

/// Lowest score in the medium band (default: 0.4)
pub const MEDIUM_THRESHOLD: f64 = 0.4;

/// Lowest score in the high band (default: 0.7)
pub const HIGH_THRESHOLD: f64 = 0.7;

/// Scoring policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViabilityConfig {
    /// Dampening applied to the mean risk weight
    pub risk_dampening: f64,
    /// Scores at or above this are at least medium viability
    pub medium_threshold: f64,
    /// Scores at or above this are high viability
    pub high_threshold: f64,
}

impl Default for ViabilityConfig {
    fn default() -> Self {
        Self {
            risk_dampening: RISK_DAMPENING,
            medium_threshold: MEDIUM_THRESHOLD,
            high_threshold: HIGH_THRESHOLD,
        }
    }
}

impl ViabilityConfig {
    /// Check that every value is in [0, 1] and the bands are ordered
    pub fn validate(&self) -> Result<(), DomainError> {
        ensure_unit_interval("risk_dampening", self.risk_dampening)?;
        ensure_unit_interval("medium_threshold", self.medium_threshold)?;
        ensure_unit_interval("high_threshold", self.high_threshold)?;

        if self.medium_threshold > self.high_threshold {
            return Err(DomainError::InvalidPolicy(format!(
                "medium_threshold {} exceeds high_threshold {}",
                self.medium_threshold, self.high_threshold
            )));
        }
        Ok(())
    }
}

/// Coarse viability ranking of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViabilityBand {
    /// Weakly supported
    Low,
    /// Moderately supported
    Medium,
    /// Well supported
    High,
}

impl ViabilityBand {
    /// Band for a score under the given policy
    pub fn from_score(score: f64, config: &ViabilityConfig) -> Self {
        if score >= config.high_threshold {
            ViabilityBand::High
        } else if score >= config.medium_threshold {
            ViabilityBand::Medium
        } else {
            ViabilityBand::Low
        }
    }

    /// Get the band name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ViabilityBand::Low => "low",
            ViabilityBand::Medium => "medium",
            ViabilityBand::High => "high",
        }
    }
}

/// Score breakdown for one claim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimScore {
    /// Claim node
    pub claim_id: NodeId,
    /// Claim title
    pub title: String,
    /// Mean weight of support edges
    pub support: f64,
    /// Mean weight of risk edges
    pub risk: f64,
    /// Final clamped score
    pub score: f64,
    /// Band the score falls in
    pub band: ViabilityBand,
}

/// Support score of a claim, 0 when the id is unknown or not a claim
///
/// # Examples
///
/// ```
/// use justinianus_domain::viability::{compute_claim_score, ViabilityConfig};
/// use justinianus_domain::NodeId;
///
/// let score = compute_claim_score(NodeId::from_value(1), &[], &[], &ViabilityConfig::default());
/// assert_eq!(score, 0.0);
/// ```
pub fn compute_claim_score(
    claim_id: NodeId,
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    config: &ViabilityConfig,
) -> f64 {
    score_claim(claim_id, nodes, edges, config).map_or(0.0, |s| s.score)
}

/// Score breakdown of a claim, `None` when the id is unknown or not a claim
pub fn score_claim(
    claim_id: NodeId,
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    config: &ViabilityConfig,
) -> Option<ClaimScore> {
    let node = nodes.iter().find(|n| n.id == claim_id && n.is_claim())?;
    Some(score_node(node, edges, config))
}

/// Aggregate case score: flat mean over all claim nodes, 0 with no claims
pub fn compute_case_score(nodes: &[GraphNode], edges: &[GraphEdge], config: &ViabilityConfig) -> f64 {
    case_score_of(&rank_claims(nodes, edges, config))
}

/// Mean of already-computed claim scores, 0 for an empty slice
pub fn case_score_of(claims: &[ClaimScore]) -> f64 {
    if claims.is_empty() {
        return 0.0;
    }
    claims.iter().map(|c| c.score).sum::<f64>() / claims.len() as f64
}

/// All claims scored, highest first; ties broken by title
pub fn rank_claims(nodes: &[GraphNode], edges: &[GraphEdge], config: &ViabilityConfig) -> Vec<ClaimScore> {
    let mut scores: Vec<ClaimScore> = nodes
        .iter()
        .filter(|n| n.is_claim())
        .map(|n| score_node(n, edges, config))
        .collect();

    scores.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.title.cmp(&b.title)));
    scores
}

fn score_node(node: &GraphNode, edges: &[GraphEdge], config: &ViabilityConfig) -> ClaimScore {
    let outgoing = || edges.iter().filter(move |e| e.source == node.id);

    let support = mean_weight(outgoing().filter(|e| e.relation.is_support()));
    let risk = mean_weight(outgoing().filter(|e| e.relation.is_risk()));
    let score = (support - risk * config.risk_dampening).clamp(0.0, 1.0);

    ClaimScore {
        claim_id: node.id,
        title: node.title.clone(),
        support,
        risk,
        score,
        band: ViabilityBand::from_score(score, config),
    }
}

fn mean_weight<'a>(edges: impl Iterator<Item = &'a GraphEdge>) -> f64 {
    let (sum, count) = edges.fold((0.0, 0usize), |(sum, count), e| (sum + e.weight, count + 1));
    sum / count.max(1) as f64
}

//! Evidence-graph edges
//!
//! Edges are directed and weighted. Nothing forbids cycles; the scorer only
//! looks at a claim's direct outgoing edges.

use crate::error::ensure_unit_interval;
use crate::{CaseId, DomainError, EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Relation carried by an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Source is supported by target (fact/evidence pairs)
    #[serde(alias = "suportado_por")]
    SupportedBy,

    /// Source depends on target
    DependsOn,

    /// Source is grounded by target (usually a legal basis)
    GroundedBy,

    /// Source is weakened by target (usually a risk)
    WeakenedBy,

    /// Source contradicts target
    Contradicts,

    /// Source corroborates target
    Corroborates,
}

impl Relation {
    /// Get the relation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::SupportedBy => "supported_by",
            Relation::DependsOn => "depends_on",
            Relation::GroundedBy => "grounded_by",
            Relation::WeakenedBy => "weakened_by",
            Relation::Contradicts => "contradicts",
            Relation::Corroborates => "corroborates",
        }
    }

    /// Parse a relation from a string, accepting the legacy `suportado_por`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "supported_by" | "suportado_por" => Some(Relation::SupportedBy),
            "depends_on" => Some(Relation::DependsOn),
            "grounded_by" => Some(Relation::GroundedBy),
            "weakened_by" => Some(Relation::WeakenedBy),
            "contradicts" => Some(Relation::Contradicts),
            "corroborates" => Some(Relation::Corroborates),
            _ => None,
        }
    }

    /// Counts toward a claim's support
    pub fn is_support(&self) -> bool {
        matches!(self, Relation::DependsOn | Relation::GroundedBy)
    }

    /// Counts toward a claim's risk
    pub fn is_risk(&self) -> bool {
        matches!(self, Relation::WeakenedBy)
    }
}

impl std::str::FromStr for Relation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownVariant {
            kind: "relation",
            value: s.to_string(),
        })
    }
}

/// A directed, weighted edge between two nodes of the same case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    /// Unique identifier
    pub id: EdgeId,

    /// Case this edge belongs to
    pub case_id: CaseId,

    /// Source node
    pub source: NodeId,

    /// Target node
    pub target: NodeId,

    /// Relation type
    pub relation: Relation,

    /// Weight of the relation [0.0, 1.0]
    pub weight: f64,
}

impl GraphEdge {
    /// Create a new edge
    ///
    /// # Errors
    /// Returns [`DomainError::OutOfRange`] if `weight` is not in [0, 1]
    pub fn new(
        id: EdgeId,
        case_id: CaseId,
        source: NodeId,
        target: NodeId,
        relation: Relation,
        weight: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            case_id,
            source,
            target,
            relation,
            weight: ensure_unit_interval("weight", weight)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_categories() {
        assert!(Relation::DependsOn.is_support());
        assert!(Relation::GroundedBy.is_support());
        assert!(Relation::WeakenedBy.is_risk());

        for other in [Relation::SupportedBy, Relation::Contradicts, Relation::Corroborates] {
            assert!(!other.is_support());
            assert!(!other.is_risk());
        }
    }

    #[test]
    fn test_legacy_spelling() {
        assert_eq!(Relation::parse("suportado_por"), Some(Relation::SupportedBy));
        let parsed: Relation = serde_json::from_str("\"suportado_por\"").unwrap();
        assert_eq!(parsed, Relation::SupportedBy);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"supported_by\"");
    }

    #[test]
    fn test_edge_weight_validation() {
        let case = CaseId::from_value(1);
        let (a, b) = (NodeId::from_value(1), NodeId::from_value(2));

        assert!(GraphEdge::new(EdgeId::from_value(1), case, a, b, Relation::DependsOn, 1.0).is_ok());
        assert!(GraphEdge::new(EdgeId::from_value(2), case, a, b, Relation::DependsOn, -0.2).is_err());
        assert!(GraphEdge::new(EdgeId::from_value(3), case, a, b, Relation::DependsOn, f64::INFINITY).is_err());
    }
}

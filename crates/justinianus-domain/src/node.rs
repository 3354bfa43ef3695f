//! Evidence-graph nodes

use crate::error::ensure_unit_interval;
use crate::{CaseId, DomainError, NodeId};
use serde::{Deserialize, Serialize};

/// Kind of node in a case's evidence graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// An asserted fact of the case
    Fact,

    /// A piece of evidence (document, testimony, record)
    Evidence,

    /// A legal relief or remedy sought (pedido)
    Claim,

    /// Statute, precedent or doctrine a claim rests on
    LegalBasis,

    /// Something that may undermine a claim
    Risk,
}

impl NodeKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Fact => "fact",
            NodeKind::Evidence => "evidence",
            NodeKind::Claim => "claim",
            NodeKind::LegalBasis => "legal_basis",
            NodeKind::Risk => "risk",
        }
    }

    /// Parse a kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fact" => Some(NodeKind::Fact),
            "evidence" => Some(NodeKind::Evidence),
            "claim" => Some(NodeKind::Claim),
            "legal_basis" => Some(NodeKind::LegalBasis),
            "risk" => Some(NodeKind::Risk),
            _ => None,
        }
    }
}

impl std::str::FromStr for NodeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownVariant {
            kind: "node kind",
            value: s.to_string(),
        })
    }
}

/// A node of the evidence graph
///
/// `strength` is a manually or AI-assigned robustness value. Nodes are not
/// mutated while a score is being computed over them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    /// Unique identifier
    pub id: NodeId,

    /// Case this node belongs to
    pub case_id: CaseId,

    /// Kind of node
    pub kind: NodeKind,

    /// Short human-readable title
    pub title: String,

    /// Confidence or robustness [0.0, 1.0]
    pub strength: f64,
}

impl GraphNode {
    /// Create a new node
    ///
    /// # Errors
    /// Returns [`DomainError::OutOfRange`] if `strength` is not in [0, 1]
    pub fn new(
        id: NodeId,
        case_id: CaseId,
        kind: NodeKind,
        title: impl Into<String>,
        strength: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            case_id,
            kind,
            title: title.into(),
            strength: ensure_unit_interval("strength", strength)?,
        })
    }

    /// Whether this node is a claim
    pub fn is_claim(&self) -> bool {
        self.kind == NodeKind::Claim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!(NodeKind::parse("claim"), Some(NodeKind::Claim));
        assert_eq!(NodeKind::parse("Legal_Basis"), Some(NodeKind::LegalBasis));
        assert!("pedido".parse::<NodeKind>().is_err());
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&NodeKind::LegalBasis).unwrap();
        assert_eq!(json, "\"legal_basis\"");
        for kind in [NodeKind::Fact, NodeKind::Evidence, NodeKind::Claim, NodeKind::Risk] {
            assert_eq!(NodeKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_node_strength_validation() {
        let case = CaseId::from_value(1);
        assert!(GraphNode::new(NodeId::from_value(1), case, NodeKind::Fact, "f", 0.5).is_ok());
        assert!(GraphNode::new(NodeId::from_value(2), case, NodeKind::Fact, "f", 1.5).is_err());
    }
}

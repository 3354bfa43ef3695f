//! Justinianus Domain Layer
//!
//! This crate contains the case-analysis core of Justinianus: the evidence
//! graph model, the claim viability scorer and the deadline criticality
//! classifier. Everything here is a pure function over values supplied by
//! the caller, so it can be called from any number of threads without
//! synchronization.
//!
//! ## Key Concepts
//!
//! - **Evidence graph**: facts, evidence, claims, legal bases and risks of one
//!   case, linked by directed, weighted edges
//! - **Viability score**: how well a claim is grounded, in [0, 1]
//! - **Case score**: the flat mean of claim scores ("probability of success")
//! - **Criticality**: the tier of a deadline, derived from days remaining
//! - **War room**: escalated handling for deadlines within three days
//!
//! ## Architecture
//!
//! - Pure business logic only, nothing is cached or persisted
//! - Data access goes through [`traits::CaseDataSource`], implemented elsewhere

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod criticality;
pub mod deadline;
pub mod edge;
pub mod error;
pub mod ids;
pub mod node;
pub mod rollup;
pub mod traits;
pub mod viability;

// Re-exports for convenience
pub use criticality::{classify_deadline, Classification, Criticality, DeadlineAssessment};
pub use deadline::{Deadline, DeadlineDraft, Priority};
pub use edge::{GraphEdge, Relation};
pub use error::DomainError;
pub use ids::{CaseId, DeadlineId, EdgeId, NodeId};
pub use node::{GraphNode, NodeKind};
pub use rollup::{assess_case, CaseAssessment, DeadlineSummary};
pub use viability::{compute_case_score, compute_claim_score, ClaimScore, ViabilityBand, ViabilityConfig};

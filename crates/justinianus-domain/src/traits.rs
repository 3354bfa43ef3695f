//! Trait definitions for external interactions
//!
//! The scoring functions never fetch data themselves. Whatever produces case
//! data (a database, a case file, a test fixture) implements
//! [`CaseDataSource`] in another crate.

use crate::{CaseId, Deadline, GraphEdge, GraphNode};

/// Read access to the data of one case
///
/// Implemented by the infrastructure layer (justinianus-store)
pub trait CaseDataSource {
    /// Error type for source operations
    type Error;

    /// All evidence-graph nodes of a case
    fn list_nodes_for_case(&self, case_id: CaseId) -> Result<Vec<GraphNode>, Self::Error>;

    /// All evidence-graph edges of a case
    fn list_edges_for_case(&self, case_id: CaseId) -> Result<Vec<GraphEdge>, Self::Error>;

    /// All deadlines of a case
    fn list_deadlines_for_case(&self, case_id: CaseId) -> Result<Vec<Deadline>, Self::Error>;
}

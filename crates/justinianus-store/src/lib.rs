//! Justinianus Storage Layer
//!
//! Implements the `CaseDataSource` trait over an in-memory map of cases
//! loaded from case files.
//!
//! # Architecture
//!
//! - Case files (JSON or TOML) are parsed into entry structs
//! - Entries are validated into domain values when a case is inserted
//! - Edges must connect nodes of the same case; deadlines need a due date
//!
//! # Examples
//!
//! ```no_run
//! use justinianus_store::{load_case_file, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! let case_id = store.insert_case(load_case_file("case.json").unwrap()).unwrap();
//! // Store is now ready for scoring
//! ```

#![warn(missing_docs)]

mod case_file;

pub use case_file::{
    load_case_file, parse_case_file, CaseFile, CaseFileFormat, DeadlineEntry, EdgeEntry, NodeEntry,
};

use justinianus_domain::traits::CaseDataSource;
use justinianus_domain::{
    CaseId, Deadline, DeadlineId, DomainError, EdgeId, GraphEdge, GraphNode, NodeId,
};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Case file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON case file
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML case file
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Unknown case-file extension
    #[error("Unsupported case file format: {0}")]
    UnsupportedFormat(String),

    /// An entry failed domain validation
    #[error("Invalid data: {0}")]
    Domain(#[from] DomainError),

    /// Case was already loaded
    #[error("Case already loaded: {0}")]
    DuplicateCase(CaseId),

    /// Two entries share an id
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId {
        /// Entity kind (node, edge, deadline)
        entity: &'static str,
        /// Repeated id
        id: String,
    },

    /// Edge endpoint is not a node of the case
    #[error("Edge {edge} references unknown node {node}")]
    DanglingEdge {
        /// Offending edge
        edge: EdgeId,
        /// Missing endpoint
        node: NodeId,
    },

    /// Entry claims to belong to a different case
    #[error("{entity} {id} belongs to case {found}, expected {expected}")]
    CaseMismatch {
        /// Entity kind (node, edge, deadline)
        entity: &'static str,
        /// Entry id
        id: String,
        /// Case of the file
        expected: CaseId,
        /// Case on the entry
        found: CaseId,
    },
}

#[derive(Debug, Clone, Default)]
struct CaseRecord {
    title: Option<String>,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    deadlines: Vec<Deadline>,
}

/// In-memory implementation of [`CaseDataSource`]
///
/// Cases are immutable once inserted. Reads take `&self`, so a loaded store
/// can be shared behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cases: HashMap<CaseId, CaseRecord>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a case file from disk and insert it
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<CaseId, StoreError> {
        let file = load_case_file(path)?;
        self.insert_case(file)
    }

    /// Validate a parsed case file and insert it
    ///
    /// Nothing is inserted when any entry fails validation.
    pub fn insert_case(&mut self, file: CaseFile) -> Result<CaseId, StoreError> {
        let case_id = file.case_id;
        if self.cases.contains_key(&case_id) {
            return Err(StoreError::DuplicateCase(case_id));
        }

        let mut node_ids = HashSet::new();
        let mut nodes = Vec::with_capacity(file.nodes.len());
        for entry in file.nodes {
            check_case(case_id, entry.case_id, "node", &entry.id)?;
            if !node_ids.insert(entry.id) {
                return Err(duplicate("node", &entry.id));
            }
            nodes.push(GraphNode::new(entry.id, case_id, entry.kind, entry.title, entry.strength)?);
        }

        let mut edge_ids = HashSet::new();
        let mut edges = Vec::with_capacity(file.edges.len());
        for entry in file.edges {
            check_case(case_id, entry.case_id, "edge", &entry.id)?;
            if !edge_ids.insert(entry.id) {
                return Err(duplicate("edge", &entry.id));
            }
            for endpoint in [entry.source, entry.target] {
                if !node_ids.contains(&endpoint) {
                    return Err(StoreError::DanglingEdge {
                        edge: entry.id,
                        node: endpoint,
                    });
                }
            }
            edges.push(GraphEdge::new(
                entry.id,
                case_id,
                entry.source,
                entry.target,
                entry.relation,
                entry.weight,
            )?);
        }

        let mut deadline_ids: HashSet<DeadlineId> = HashSet::new();
        let mut deadlines = Vec::with_capacity(file.deadlines.len());
        for entry in file.deadlines {
            check_case(case_id, entry.case_id, "deadline", &entry.id)?;
            if !deadline_ids.insert(entry.id) {
                return Err(duplicate("deadline", &entry.id));
            }
            deadlines.push(Deadline::try_from(entry.into_draft(case_id))?);
        }

        tracing::info!(
            case_id = %case_id,
            nodes = nodes.len(),
            edges = edges.len(),
            deadlines = deadlines.len(),
            "Loaded case"
        );

        self.cases.insert(
            case_id,
            CaseRecord {
                title: file.title,
                nodes,
                edges,
                deadlines,
            },
        );
        Ok(case_id)
    }

    /// Title of a loaded case, if it has one
    pub fn case_title(&self, case_id: CaseId) -> Option<&str> {
        self.cases.get(&case_id).and_then(|c| c.title.as_deref())
    }

    /// Whether a case is loaded
    pub fn contains_case(&self, case_id: CaseId) -> bool {
        self.cases.contains_key(&case_id)
    }

    fn record(&self, case_id: CaseId) -> Option<&CaseRecord> {
        let record = self.cases.get(&case_id);
        if record.is_none() {
            tracing::debug!(case_id = %case_id, "Case not loaded, listing empty");
        }
        record
    }
}

fn check_case(
    expected: CaseId,
    found: Option<CaseId>,
    entity: &'static str,
    id: &impl ToString,
) -> Result<(), StoreError> {
    match found {
        Some(found) if found != expected => Err(StoreError::CaseMismatch {
            entity,
            id: id.to_string(),
            expected,
            found,
        }),
        _ => Ok(()),
    }
}

fn duplicate(entity: &'static str, id: &impl ToString) -> StoreError {
    StoreError::DuplicateId {
        entity,
        id: id.to_string(),
    }
}

impl CaseDataSource for MemoryStore {
    type Error = StoreError;

    fn list_nodes_for_case(&self, case_id: CaseId) -> Result<Vec<GraphNode>, Self::Error> {
        Ok(self.record(case_id).map(|c| c.nodes.clone()).unwrap_or_default())
    }

    fn list_edges_for_case(&self, case_id: CaseId) -> Result<Vec<GraphEdge>, Self::Error> {
        Ok(self.record(case_id).map(|c| c.edges.clone()).unwrap_or_default())
    }

    fn list_deadlines_for_case(&self, case_id: CaseId) -> Result<Vec<Deadline>, Self::Error> {
        Ok(self.record(case_id).map(|c| c.deadlines.clone()).unwrap_or_default())
    }
}

//! Case files
//!
//! A case file carries one case's evidence graph and deadlines. Entries may
//! omit `case_id`; the file-level id applies to them.

use crate::StoreError;
use chrono::NaiveDate;
use justinianus_domain::{
    CaseId, DeadlineDraft, DeadlineId, EdgeId, NodeId, NodeKind, Priority, Relation,
};
use serde::Deserialize;
use std::path::Path;

/// On-disk encoding of a case file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFileFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl CaseFileFormat {
    /// Pick the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(CaseFileFormat::Json),
            Some("toml") => Ok(CaseFileFormat::Toml),
            _ => Err(StoreError::UnsupportedFormat(
                path.as_ref().display().to_string(),
            )),
        }
    }
}

/// Contents of a case file
#[derive(Debug, Clone, Deserialize)]
pub struct CaseFile {
    /// Case the file describes
    pub case_id: CaseId,

    /// Optional case title
    #[serde(default)]
    pub title: Option<String>,

    /// Evidence-graph nodes
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,

    /// Evidence-graph edges
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,

    /// Procedural deadlines
    #[serde(default)]
    pub deadlines: Vec<DeadlineEntry>,
}

/// Node as written in a case file
#[derive(Debug, Clone, Deserialize)]
pub struct NodeEntry {
    /// Node id
    pub id: NodeId,
    /// Owning case, defaults to the file's case
    #[serde(default)]
    pub case_id: Option<CaseId>,
    /// Node kind
    pub kind: NodeKind,
    /// Title
    pub title: String,
    /// Strength [0.0, 1.0]
    #[serde(default = "default_strength")]
    pub strength: f64,
}

/// Edge as written in a case file
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeEntry {
    /// Edge id
    pub id: EdgeId,
    /// Owning case, defaults to the file's case
    #[serde(default)]
    pub case_id: Option<CaseId>,
    /// Source node
    pub source: NodeId,
    /// Target node
    pub target: NodeId,
    /// Relation
    pub relation: Relation,
    /// Weight [0.0, 1.0]
    pub weight: f64,
}

/// Deadline as written in a case file
#[derive(Debug, Clone, Deserialize)]
pub struct DeadlineEntry {
    /// Deadline id
    pub id: DeadlineId,
    /// Owning case, defaults to the file's case
    #[serde(default)]
    pub case_id: Option<CaseId>,
    /// Deadline kind
    pub kind: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Adjusted due date, required when the deadline is stored
    #[serde(default)]
    pub adjusted_due_date: Option<NaiveDate>,
    /// Priority
    pub priority: Priority,
    /// War room flag
    #[serde(default)]
    pub war_room_active: bool,
    /// Automatic draft flag
    #[serde(default)]
    pub draft_auto_generated: bool,
}

impl DeadlineEntry {
    /// Turn into a domain draft owned by `case_id`
    pub fn into_draft(self, case_id: CaseId) -> DeadlineDraft {
        DeadlineDraft {
            id: self.id,
            case_id,
            kind: self.kind,
            description: self.description,
            adjusted_due_date: self.adjusted_due_date,
            priority: self.priority,
            war_room_active: self.war_room_active,
            draft_auto_generated: self.draft_auto_generated,
        }
    }
}

fn default_strength() -> f64 {
    0.5
}

/// Parse case-file contents in the given format
pub fn parse_case_file(contents: &str, format: CaseFileFormat) -> Result<CaseFile, StoreError> {
    let file: CaseFile = match format {
        CaseFileFormat::Json => serde_json::from_str(contents)?,
        CaseFileFormat::Toml => toml::from_str(contents)?,
    };
    Ok(file)
}

/// Read and parse a case file, choosing the format by extension
pub fn load_case_file<P: AsRef<Path>>(path: P) -> Result<CaseFile, StoreError> {
    let path = path.as_ref();
    let format = CaseFileFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;

    let file = parse_case_file(&contents, format)?;
    tracing::debug!(
        path = %path.display(),
        case_id = %file.case_id,
        nodes = file.nodes.len(),
        edges = file.edges.len(),
        deadlines = file.deadlines.len(),
        "Parsed case file"
    );
    Ok(file)
}

//! Procedural deadlines
//!
//! `days_remaining` is always derived from a caller-supplied date; it is
//! never stored on the deadline.

use crate::{CaseId, DeadlineId, DomainError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Priority attached to a deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must be handled immediately
    #[serde(alias = "critica")]
    Critical,

    /// High priority (alta)
    #[serde(alias = "alta")]
    High,

    /// Medium priority (media)
    #[serde(alias = "media")]
    Medium,

    /// Low priority (baixa)
    #[serde(alias = "baixa")]
    Low,
}

impl Priority {
    /// Get the priority name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a priority, accepting the Portuguese spellings used by intake forms
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" | "critica" => Some(Priority::Critical),
            "high" | "alta" => Some(Priority::High),
            "medium" | "media" => Some(Priority::Medium),
            "low" | "baixa" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownVariant {
            kind: "priority",
            value: s.to_string(),
        })
    }
}

/// A deadline in a case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deadline {
    /// Unique identifier
    pub id: DeadlineId,

    /// Case this deadline belongs to
    pub case_id: CaseId,

    /// Free-form deadline kind (e.g. "contestacao", "appeal")
    pub kind: String,

    /// Human-readable description
    pub description: String,

    /// Due date after court-calendar adjustments
    pub adjusted_due_date: NaiveDate,

    /// Assigned priority
    pub priority: Priority,

    /// Whether the war room has been activated for this deadline
    pub war_room_active: bool,

    /// Whether a draft has already been generated automatically
    pub draft_auto_generated: bool,
}

impl Deadline {
    /// Create a new deadline with war room and draft flags cleared
    pub fn new(
        id: DeadlineId,
        case_id: CaseId,
        kind: impl Into<String>,
        description: impl Into<String>,
        adjusted_due_date: NaiveDate,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            case_id,
            kind: kind.into(),
            description: description.into(),
            adjusted_due_date,
            priority,
            war_room_active: false,
            draft_auto_generated: false,
        }
    }

    /// Set the war room flag
    pub fn with_war_room_active(mut self, active: bool) -> Self {
        self.war_room_active = active;
        self
    }

    /// Set the automatic draft flag
    pub fn with_draft_auto_generated(mut self, generated: bool) -> Self {
        self.draft_auto_generated = generated;
        self
    }

    /// Whole days from `today` until the due date (negative when overdue)
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        days_until(self.adjusted_due_date, today)
    }
}

/// Signed calendar-day distance between two midnights
///
/// Both sides are dates, so the ceiling of the day fraction is exact.
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Deadline as it arrives from intake, before validation
///
/// Upstream rows may lack a due date; converting into a [`Deadline`]
/// rejects those instead of inventing one. Wire formats deserialize into
/// their own entry types and build a draft from them.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineDraft {
    /// Unique identifier
    pub id: DeadlineId,

    /// Case the deadline belongs to
    pub case_id: CaseId,

    /// Free-form deadline kind
    pub kind: String,

    /// Human-readable description
    pub description: String,

    /// Due date, if one was supplied
    pub adjusted_due_date: Option<NaiveDate>,

    /// Assigned priority
    pub priority: Priority,

    /// War room flag
    pub war_room_active: bool,

    /// Automatic draft flag
    pub draft_auto_generated: bool,
}

impl TryFrom<DeadlineDraft> for Deadline {
    type Error = DomainError;

    fn try_from(draft: DeadlineDraft) -> Result<Self, Self::Error> {
        let due = draft
            .adjusted_due_date
            .ok_or_else(|| DomainError::MissingDueDate(draft.id.to_string()))?;

        Ok(Deadline::new(
            draft.id,
            draft.case_id,
            draft.kind,
            draft.description,
            due,
            draft.priority,
        )
        .with_war_room_active(draft.war_room_active)
        .with_draft_auto_generated(draft.draft_auto_generated))
    }
}

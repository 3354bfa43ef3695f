//! Deadline criticality classification
//!
//! A single threshold ladder drives the criticality tier, its display label,
//! war-room eligibility and the priority suggested when a deadline is
//! created. Tiers are recomputed from the supplied date on every call; a
//! deadline never transitions between tiers through events.

use crate::{Deadline, DeadlineId, Priority};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Criticality tier of a deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criticality {
    /// Due today or already past
    Overdue,

    /// Due within three days
    Critical,

    /// Due within a week
    Urgent,

    /// Due within fifteen days
    Attention,

    /// More than fifteen days left
    Comfortable,
}

impl Criticality {
    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::Overdue => "overdue",
            Criticality::Critical => "critical",
            Criticality::Urgent => "urgent",
            Criticality::Attention => "attention",
            Criticality::Comfortable => "comfortable",
        }
    }

    /// All tiers, most pressing first
    pub fn all() -> [Criticality; 5] {
        [
            Criticality::Overdue,
            Criticality::Critical,
            Criticality::Urgent,
            Criticality::Attention,
            Criticality::Comfortable,
        ]
    }
}

/// One rung of the threshold ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderStep {
    /// Inclusive upper bound on days remaining; `None` for the last rung
    pub max_days: Option<i64>,

    /// Tier assigned on this rung
    pub tier: Criticality,

    /// Display label
    pub label: &'static str,

    /// Priority pre-selected for new deadlines on this rung
    pub priority: Priority,
}

/// Days-remaining window in which a deadline may enter the war room
pub const WAR_ROOM_WINDOW_DAYS: i64 = 3;

/// Shared threshold ladder, ordered by increasing `max_days`
pub static CRITICALITY_LADDER: [LadderStep; 6] = [
    LadderStep {
        max_days: Some(0),
        tier: Criticality::Overdue,
        label: "Overdue",
        priority: Priority::Critical,
    },
    LadderStep {
        max_days: Some(1),
        tier: Criticality::Critical,
        label: "Today/tomorrow",
        priority: Priority::Critical,
    },
    LadderStep {
        max_days: Some(WAR_ROOM_WINDOW_DAYS),
        tier: Criticality::Critical,
        label: "Critical",
        priority: Priority::High,
    },
    LadderStep {
        max_days: Some(7),
        tier: Criticality::Urgent,
        label: "Urgent",
        priority: Priority::Medium,
    },
    LadderStep {
        max_days: Some(15),
        tier: Criticality::Attention,
        label: "Attention",
        priority: Priority::Low,
    },
    LadderStep {
        max_days: None,
        tier: Criticality::Comfortable,
        label: "Comfortable",
        priority: Priority::Low,
    },
];

/// Find the ladder rung for a days-remaining count
pub fn ladder_step(days_remaining: i64) -> &'static LadderStep {
    CRITICALITY_LADDER
        .iter()
        .find(|step| step.max_days.is_none_or(|max| days_remaining <= max))
        .unwrap_or(&CRITICALITY_LADDER[CRITICALITY_LADDER.len() - 1])
}

/// Result of classifying a days-remaining count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Criticality tier
    pub tier: Criticality,

    /// Display label
    pub label: &'static str,

    /// Whether the war room may be activated
    pub war_room_eligible: bool,
}

/// Classify a deadline by the number of days left
///
/// Negative counts are overdue, same as zero.
///
/// # Examples
///
/// ```
/// use justinianus_domain::criticality::{classify_deadline, Criticality};
///
/// assert_eq!(classify_deadline(3).tier, Criticality::Critical);
/// assert_eq!(classify_deadline(4).tier, Criticality::Urgent);
/// assert!(classify_deadline(3).war_room_eligible);
/// ```
pub fn classify_deadline(days_remaining: i64) -> Classification {
    let step = ladder_step(days_remaining);
    Classification {
        tier: step.tier,
        label: step.label,
        war_room_eligible: is_war_room_eligible(days_remaining),
    }
}

/// Whether a deadline this close may enter the war room
pub fn is_war_room_eligible(days_remaining: i64) -> bool {
    days_remaining <= WAR_ROOM_WINDOW_DAYS
}

/// Priority pre-selected when a deadline with this many days left is created
pub fn suggest_priority(days_remaining: i64) -> Priority {
    ladder_step(days_remaining).priority
}

/// Full evaluation of one deadline against a reference date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeadlineAssessment {
    /// Deadline being assessed
    pub deadline_id: DeadlineId,

    /// Deadline kind
    pub kind: String,

    /// Deadline description
    pub description: String,

    /// Adjusted due date
    pub due_date: NaiveDate,

    /// Days left from the reference date
    pub days_remaining: i64,

    /// Tier, label and war-room eligibility
    pub classification: Classification,

    /// Priority currently assigned
    pub priority: Priority,

    /// Priority the ladder would pick today
    pub suggested_priority: Priority,

    /// War room is already active
    pub war_room_active: bool,

    /// Eligible for the war room but not yet in it
    pub suggest_war_room: bool,

    /// Eligible for an automatic draft that has not been generated yet
    pub draft_generation_due: bool,
}

/// Assess a deadline as of `today`
pub fn assess_deadline(deadline: &Deadline, today: NaiveDate) -> DeadlineAssessment {
    let days_remaining = deadline.days_remaining(today);
    let classification = classify_deadline(days_remaining);

    DeadlineAssessment {
        deadline_id: deadline.id,
        kind: deadline.kind.clone(),
        description: deadline.description.clone(),
        due_date: deadline.adjusted_due_date,
        days_remaining,
        classification,
        priority: deadline.priority,
        suggested_priority: suggest_priority(days_remaining),
        war_room_active: deadline.war_room_active,
        suggest_war_room: classification.war_room_eligible && !deadline.war_room_active,
        draft_generation_due: classification.war_room_eligible && !deadline.draft_auto_generated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaseId;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(classify_deadline(0).tier, Criticality::Overdue);
        assert_eq!(classify_deadline(1).tier, Criticality::Critical);
        assert_eq!(classify_deadline(3).tier, Criticality::Critical);
        assert_eq!(classify_deadline(4).tier, Criticality::Urgent);
        assert_eq!(classify_deadline(7).tier, Criticality::Urgent);
        assert_eq!(classify_deadline(8).tier, Criticality::Attention);
        assert_eq!(classify_deadline(15).tier, Criticality::Attention);
        assert_eq!(classify_deadline(16).tier, Criticality::Comfortable);
    }

    #[test]
    fn test_negative_days_are_overdue() {
        assert_eq!(classify_deadline(-5).tier, Criticality::Overdue);
        assert_eq!(classify_deadline(i64::MIN).tier, Criticality::Overdue);
    }

    #[test]
    fn test_critical_labels_differ() {
        assert_eq!(classify_deadline(1).label, "Today/tomorrow");
        assert_eq!(classify_deadline(2).label, "Critical");
        assert_eq!(classify_deadline(1).tier, classify_deadline(2).tier);
    }

    #[test]
    fn test_war_room_window() {
        assert!(classify_deadline(-1).war_room_eligible);
        assert!(classify_deadline(3).war_room_eligible);
        assert!(!classify_deadline(4).war_room_eligible);
    }

    #[test]
    fn test_priority_suggestion() {
        assert_eq!(suggest_priority(0), Priority::Critical);
        assert_eq!(suggest_priority(1), Priority::Critical);
        assert_eq!(suggest_priority(2), Priority::High);
        assert_eq!(suggest_priority(3), Priority::High);
        assert_eq!(suggest_priority(5), Priority::Medium);
        assert_eq!(suggest_priority(7), Priority::Medium);
        assert_eq!(suggest_priority(8), Priority::Low);
        assert_eq!(suggest_priority(400), Priority::Low);
    }

    #[test]
    fn test_ladder_is_ordered() {
        let bounds: Vec<i64> = CRITICALITY_LADDER.iter().filter_map(|s| s.max_days).collect();
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!(CRITICALITY_LADDER.last().unwrap().max_days.is_none());
    }

    #[test]
    fn test_assess_deadline_flags() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let deadline = Deadline::new(
            DeadlineId::from_value(1),
            CaseId::from_value(1),
            "appeal",
            "File appeal",
            due,
            Priority::Medium,
        );

        let fresh = assess_deadline(&deadline, today);
        assert_eq!(fresh.days_remaining, 2);
        assert_eq!(fresh.classification.tier, Criticality::Critical);
        assert_eq!(fresh.suggested_priority, Priority::High);
        assert!(fresh.suggest_war_room);
        assert!(fresh.draft_generation_due);

        let handled = assess_deadline(
            &deadline.with_war_room_active(true).with_draft_auto_generated(true),
            today,
        );
        assert!(!handled.suggest_war_room);
        assert!(!handled.draft_generation_due);
        assert!(handled.war_room_active);
    }

    #[test]
    fn test_far_deadline_is_quiet() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let deadline = Deadline::new(
            DeadlineId::from_value(2),
            CaseId::from_value(1),
            "hearing",
            "",
            due,
            Priority::Low,
        );

        let assessment = assess_deadline(&deadline, today);
        assert_eq!(assessment.classification.tier, Criticality::Comfortable);
        assert!(!assessment.suggest_war_room);
        assert!(!assessment.draft_generation_due);
    }
}

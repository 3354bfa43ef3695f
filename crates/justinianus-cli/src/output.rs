//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use justinianus_domain::criticality::Criticality;
use justinianus_domain::{
    CaseAssessment, ClaimScore, Classification, DeadlineAssessment, DeadlineSummary, NodeId,
    Priority, ViabilityBand,
};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

#[derive(Serialize)]
struct ClaimsReport<'a> {
    case_score: f64,
    claims: &'a [ClaimScore],
}

#[derive(Serialize)]
struct MissingClaimReport {
    claim_id: NodeId,
    found: bool,
    score: f64,
}

#[derive(Serialize)]
struct DeadlinesReport<'a> {
    deadlines: &'a [DeadlineAssessment],
    summary: &'a DeadlineSummary,
}

#[derive(Serialize)]
struct ClassificationReport {
    days_remaining: i64,
    #[serde(flatten)]
    classification: Classification,
    suggested_priority: Priority,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format ranked claim scores with the case score.
    pub fn format_claims(&self, claims: &[ClaimScore], case_score: f64) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&ClaimsReport { case_score, claims })?),
            OutputFormat::Table => Ok(self.claims_table(claims, case_score)),
            OutputFormat::Quiet => Ok(claims
                .iter()
                .map(|c| format!("{}\t{:.4}", c.claim_id, c.score))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the zero score of a claim id that is not in the case.
    pub fn format_missing_claim(&self, claim_id: NodeId) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&MissingClaimReport {
                claim_id,
                found: false,
                score: 0.0,
            })?),
            OutputFormat::Quiet => Ok(format!("{}\t{:.4}", claim_id, 0.0)),
            OutputFormat::Table => Ok(self.warning(&format!("Claim {} not found in case, score 0.00", claim_id))),
        }
    }

    /// Format deadline assessments with their summary.
    pub fn format_deadlines(&self, deadlines: &[DeadlineAssessment], summary: &DeadlineSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&DeadlinesReport { deadlines, summary })?),
            OutputFormat::Table => Ok(self.deadlines_table(deadlines, summary)),
            OutputFormat::Quiet => Ok(deadlines
                .iter()
                .map(|d| format!("{}\t{}", d.deadline_id, d.classification.tier.as_str()))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a full case report.
    pub fn format_case(&self, case: &CaseAssessment, title: Option<&str>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(case)?),
            OutputFormat::Quiet => Ok(format!("{:.4}", case.case_score)),
            OutputFormat::Table => {
                let heading = match title {
                    Some(title) => format!("{} ({})", title, case.case_id),
                    None => case.case_id.to_string(),
                };
                Ok(format!(
                    "{}\nReference date: {}\n\n{}\n\n{}",
                    self.colorize(&heading, "cyan"),
                    case.today,
                    self.claims_table(&case.claims, case.case_score),
                    self.deadlines_table(&case.deadlines, &case.summary),
                ))
            }
        }
    }

    /// Format the classification of a bare days-remaining count.
    pub fn format_classification(
        &self,
        days_remaining: i64,
        classification: Classification,
        suggested_priority: Priority,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&ClassificationReport {
                days_remaining,
                classification,
                suggested_priority,
            })?),
            OutputFormat::Quiet => Ok(classification.tier.as_str().to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Days", "Tier", "Label", "War room", "Suggested priority"]);
                builder.push_record([
                    days_remaining.to_string(),
                    self.tier_cell(classification.tier),
                    classification.label.to_string(),
                    yes_no(classification.war_room_eligible).to_string(),
                    suggested_priority.as_str().to_string(),
                ]);
                Ok(self.render(builder))
            }
        }
    }

    fn claims_table(&self, claims: &[ClaimScore], case_score: f64) -> String {
        if claims.is_empty() {
            return self.colorize("No claims found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Claim", "Support", "Risk", "Score", "Viability"]);

        for claim in claims {
            builder.push_record([
                claim.claim_id.to_string()[..8].to_string(), // Truncate ID for readability
                claim.title.clone(),
                format!("{:.2}", claim.support),
                format!("{:.2}", claim.risk),
                format!("{:.2}", claim.score),
                self.band_cell(claim.band),
            ]);
        }

        format!(
            "{}\nProbability of success: {}",
            self.render(builder),
            self.colorize(&format!("{:.0}%", case_score * 100.0), "cyan")
        )
    }

    fn deadlines_table(&self, deadlines: &[DeadlineAssessment], summary: &DeadlineSummary) -> String {
        if deadlines.is_empty() {
            return self.colorize("No deadlines found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Kind", "Description", "Due", "Days", "Tier", "Label", "Priority", "Actions"]);

        for d in deadlines {
            let mut actions = Vec::new();
            if d.war_room_active {
                actions.push("war room active");
            } else if d.suggest_war_room {
                actions.push("open war room");
            }
            if d.draft_generation_due {
                actions.push("generate draft");
            }
            let priority = if d.priority == d.suggested_priority {
                d.priority.as_str().to_string()
            } else {
                format!("{} (suggested {})", d.priority.as_str(), d.suggested_priority.as_str())
            };

            builder.push_record([
                d.deadline_id.to_string()[..8].to_string(),
                d.kind.clone(),
                d.description.clone(),
                d.due_date.to_string(),
                d.days_remaining.to_string(),
                self.tier_cell(d.classification.tier),
                d.classification.label.to_string(),
                priority,
                actions.join(", "),
            ]);
        }

        format!(
            "{}\n{} overdue, {} critical, {} urgent, {} attention, {} comfortable",
            self.render(builder),
            summary.overdue,
            summary.critical,
            summary.urgent,
            summary.attention,
            summary.comfortable,
        )
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn tier_cell(&self, tier: Criticality) -> String {
        let color = match tier {
            Criticality::Overdue | Criticality::Critical => "red",
            Criticality::Urgent => "yellow",
            Criticality::Attention => "cyan",
            Criticality::Comfortable => "green",
        };
        self.colorize(tier.as_str(), color)
    }

    fn band_cell(&self, band: ViabilityBand) -> String {
        let color = match band {
            ViabilityBand::High => "green",
            ViabilityBand::Medium => "yellow",
            ViabilityBand::Low => "red",
        };
        self.colorize(band.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

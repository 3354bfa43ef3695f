//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::Result;
use crate::output::Formatter;
use justinianus_domain::classify_deadline;
use justinianus_domain::criticality::suggest_priority;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, formatter: &Formatter) -> Result<()> {
    println!("{}", render_classify(args.days, formatter)?);
    Ok(())
}

fn render_classify(days: i64, formatter: &Formatter) -> Result<String> {
    formatter.format_classification(days, classify_deadline(days), suggest_priority(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_render_classify() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(render_classify(-5, &formatter).unwrap(), "overdue");
        assert_eq!(render_classify(0, &formatter).unwrap(), "overdue");
        assert_eq!(render_classify(1, &formatter).unwrap(), "critical");
        assert_eq!(render_classify(4, &formatter).unwrap(), "urgent");
        assert_eq!(render_classify(8, &formatter).unwrap(), "attention");
        assert_eq!(render_classify(16, &formatter).unwrap(), "comfortable");
    }

    #[test]
    fn test_render_table_includes_priority() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = render_classify(1, &formatter).unwrap();
        assert!(output.contains("Today/tomorrow"));
        assert!(output.contains("critical"));
        assert!(output.contains("yes"));
    }
}

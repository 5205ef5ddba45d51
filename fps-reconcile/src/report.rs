use colored::Colorize;

use crate::execute::ReconcileOutcome;
use crate::model::FlexiblePort;

/// Render a reconciliation outcome for terminal output.
pub fn render_outcome(outcome: &ReconcileOutcome) -> String {
    let verdict = if outcome.changed {
        "changed".yellow().to_string()
    } else {
        "unchanged".green().to_string()
    };

    let mut out = Vec::new();
    out.push(format!("result: {verdict}"));
    out.push(format!("payload: {}", outcome.xml));
    out.push("before:".to_string());
    out.push(render_records(&outcome.before));
    if let Some(after) = &outcome.after {
        out.push("after:".to_string());
        out.push(render_records(after));
    }
    out.join("\n")
}

/// Render flexible-port records one line each.
pub fn render_records(records: &[FlexiblePort]) -> String {
    if records.is_empty() {
        return format!("- {}", "none".dimmed());
    }

    let mut out = Vec::new();
    for record in records {
        let mut line = format!("- {}", record.name.cyan());
        if let Some(port) = &record.logical_port {
            line.push_str(&format!(" logical-port={port}"));
        }
        if let Some(fd) = &record.fd_name {
            line.push_str(&format!(" fd-name={fd}"));
        }
        out.push(line);
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use crate::model::FlexiblePort;

    use super::render_records;

    #[test]
    fn renders_one_line_per_record() {
        let mut record = FlexiblePort::new("fp1");
        record.logical_port = Some("1/1".to_string());
        let rendered = render_records(&[record, FlexiblePort::new("fp2")]);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("fp1"));
        assert!(lines[0].contains("logical-port=1/1"));
        assert!(lines[1].contains("fp2"));
        assert!(!lines[1].contains("logical-port"));
    }

    #[test]
    fn renders_placeholder_for_empty_sets() {
        assert!(render_records(&[]).contains("none"));
    }
}

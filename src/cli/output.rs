//! Output formatting and progress spinners for the CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    app::{OutputStatus, ReportRun},
    normalize::NormalizedRow,
    pipeline::{ReportKind, ReportSummary},
};

/// Create a spinner for the fetch step
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a key-value pair
pub fn kv_line(key: &str, value: &str) -> String {
    format!("  {:20} {}", format!("{key}:"), value)
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("{}", kv_line(key, value));
}

/// One console line describing a matched experiment.
pub fn describe_row(row: &NormalizedRow) -> String {
    let owner = match (row.owner_name.is_empty(), row.owner_email.is_empty()) {
        (false, false) => format!("{} <{}>", row.owner_name, row.owner_email),
        (false, true) => row.owner_name.clone(),
        (true, false) => row.owner_email.clone(),
        (true, true) => "unknown owner".to_string(),
    };
    let status = if row.status.is_empty() {
        "no status"
    } else {
        row.status.as_str()
    };
    format!("{} [{}] {}", row.experiment_name, status, owner)
}

/// Headline statistics, one line each.
pub fn summary_lines(summary: &ReportSummary) -> Vec<String> {
    vec![
        format!("Total experiments: {}", summary.total),
        format!("Unique owner emails: {}", summary.unique_owner_emails),
    ]
}

/// Per-status counts, printed for the status report only.
pub fn status_breakdown_lines(kind: &ReportKind, summary: &ReportSummary) -> Vec<String> {
    match kind {
        ReportKind::Status => summary
            .status_counts
            .iter()
            .map(|(status, count)| kv_line(status, &format_number(*count)))
            .collect(),
        ReportKind::Team(_) => Vec::new(),
    }
}

/// Print the summary of a finished report run.
pub fn print_report_summary(run: &ReportRun) {
    let summary = run.summary();
    let fetched = run
        .report
        .fetched
        .map(format_number)
        .unwrap_or_else(|| "unexpected response shape".to_string());

    print_section(&format!("Eppo experiments: {}", run.report.kind.label()));
    for line in summary_lines(&summary) {
        println!("{line}");
    }
    print_kv("Fetched", &fetched);

    match &run.output {
        OutputStatus::Written(path) => print_kv("Report", &path.display().to_string()),
        OutputStatus::WriteFailed { path, error } => {
            print_kv("Report", &format!("not written to {} ({error})", path.display()))
        }
        OutputStatus::NoMatches => {}
    }

    let breakdown = status_breakdown_lines(&run.report.kind, &summary);
    if !breakdown.is_empty() {
        print_subsection("By status");
        for line in breakdown {
            println!("{line}");
        }
    }

    print_subsection("Experiments");
    for row in &run.report.rows {
        println!("  - {}", describe_row(row));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::pipeline::TeamId;

    fn row(owner_name: &str, owner_email: &str, status: &str) -> NormalizedRow {
        NormalizedRow {
            experiment_name: "Exp".to_string(),
            experiment_id: String::new(),
            status: status.to_string(),
            owner_name: owner_name.to_string(),
            owner_email: owner_email.to_string(),
            experiment_url: String::new(),
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_summary_lines() {
        let summary = ReportSummary {
            total: 3,
            unique_owner_emails: 2,
            ..ReportSummary::default()
        };
        assert_eq!(
            summary_lines(&summary),
            vec!["Total experiments: 3", "Unique owner emails: 2"]
        );
    }

    #[test]
    fn test_describe_row() {
        assert_eq!(
            describe_row(&row("Jane", "jane@x.com", "ready")),
            "Exp [ready] Jane <jane@x.com>"
        );
        assert_eq!(describe_row(&row("", "", "")), "Exp [no status] unknown owner");
    }

    #[test]
    fn test_status_breakdown_only_for_status_report() {
        let summary = ReportSummary {
            total: 3,
            unique_owner_emails: 1,
            status_counts: BTreeMap::from([("ready".to_string(), 2), ("wrap_up".to_string(), 1)]),
        };

        let lines = status_breakdown_lines(&ReportKind::Status, &summary);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), ["ready:", "2"]);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["wrap_up:", "1"]);

        let team = ReportKind::Team(TeamId::new("123"));
        assert!(status_breakdown_lines(&team, &summary).is_empty());
    }
}

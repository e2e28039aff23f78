//! Response rendering

use std::fmt::Write;

use crate::types::CollaborateResponse;
use crate::ReportStyle;

const UNKNOWN: &str = "Unknown";

/// Render a successful response as human-readable text.
///
/// Pure: the same response, style and system name always yield the same
/// string. Optional sections are left out when the service omits them.
pub fn format_response(response: &CollaborateResponse, style: ReportStyle, system: &str) -> String {
    match style {
        ReportStyle::Compact => compact(response, system),
        ReportStyle::Detailed => detailed(response, system),
    }
}

fn compact(response: &CollaborateResponse, system: &str) -> String {
    let insight = &response.insight;
    let mut out = String::new();

    out.push_str("CellRepair.AI Network Response:\n\n");
    let _ = writeln!(out, "{}\n", insight.recommendation);
    let _ = writeln!(out, "Confidence: {}", percent(insight.confidence, 0));
    let _ = writeln!(out, "Agents consulted: {}", agents(response));

    push_questions(&mut out, "You'll probably ask next:", response.next_questions());
    if response.both_improved() {
        let _ = writeln!(out, "\n{}", improvement_note(system));
    }

    out
}

fn detailed(response: &CollaborateResponse, system: &str) -> String {
    let insight = &response.insight;
    let mut out = String::new();

    out.push_str("CellRepair.AI Analysis:\n\n");
    let _ = writeln!(out, "{}\n", insight.recommendation);
    let _ = writeln!(out, "Confidence: {}", percent(insight.confidence, 1));
    let _ = writeln!(out, "Agents Consulted: {}", agents(response));
    let _ = writeln!(
        out,
        "Implementation Time: {}",
        insight.implementation_time.as_deref().unwrap_or(UNKNOWN)
    );
    let _ = writeln!(
        out,
        "ROI Estimate: {}",
        insight.roi_estimate.as_deref().unwrap_or(UNKNOWN)
    );

    push_questions(
        &mut out,
        "Predictive Intelligence (3 steps ahead):",
        response.next_questions(),
    );
    if response.both_improved() {
        let _ = writeln!(out, "\n{}", improvement_note(system));
    }

    out.trim_end().to_string()
}

fn push_questions(out: &mut String, heading: &str, questions: &[String]) {
    if questions.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", heading);
    for (i, question) in questions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, question);
    }
}

fn percent(confidence: Option<f64>, decimals: usize) -> String {
    match confidence {
        Some(c) => format!("{:.*}%", decimals, c * 100.0),
        None => UNKNOWN.to_string(),
    }
}

fn agents(response: &CollaborateResponse) -> String {
    response
        .agents_consulted
        .map(|n| n.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn improvement_note(system: &str) -> String {
    format!("Both {} and CellRepair.AI got smarter from this!", system)
}

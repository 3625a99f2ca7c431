//! Plain-text report rendering

use contract_analyzer_core::AnalysisResult;

/// Render the downloadable report: a linearized text document, one line per
/// paragraph
///
/// Header lines carry the analysis metadata; the body is the summary split
/// into paragraphs. Layout beyond line breaks is the consumer's concern.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut lines = Vec::new();

    lines.push("Contract Analysis Report".to_string());
    lines.push(format!("Language: {}", result.language));
    lines.push(format!("Contract Type: {}", result.contract_type));
    lines.push(format!(
        "Overall Risk: {} ({} high, {} medium of {} clauses)",
        result.overall_risk,
        result.high_count,
        result.medium_count,
        result.clauses.len()
    ));

    for (category, spans) in result.entities.iter() {
        if !spans.is_empty() {
            lines.push(format!("{}: {}", category.as_str(), spans.join(", ")));
        }
    }

    for clause in &result.clauses {
        let mut line = format!(
            "Clause {} [{}] [{}]",
            clause.index, clause.risk, clause.obligation
        );
        if clause.ambiguous {
            line.push_str(" [Ambiguous]");
        }
        line.push_str(": ");
        line.push_str(&clause.text);
        lines.push(line);
    }

    for paragraph in result.summary.split('\n') {
        let paragraph = paragraph.trim();
        if !paragraph.is_empty() {
            lines.push(paragraph.to_string());
        }
    }

    lines.join("\n")
}

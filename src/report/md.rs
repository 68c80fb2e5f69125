use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# Automation Score Report\n\n");
    output.push_str(&format!(
        "Overall score: {}/100 — {}\n\n",
        report.result.score, report.verdict
    ));

    output.push_str("## Components\n\n");
    for (label, component) in [
        ("coverage", &report.result.coverage),
        ("integration", &report.result.integration),
        ("sophistication", &report.result.sophistication),
        ("documentation", &report.result.documentation),
    ] {
        output.push_str(&format!(
            "- {}: {}% — {}\n",
            label, component.percent, component.explanation
        ));
    }
    output.push('\n');

    output.push_str("## Recommendations\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for recommendation in &report.recommendations {
            output.push_str(&format!(
                "### {} ({} priority, {} impact, {} effort)\n\n{}\n\n",
                recommendation.title,
                recommendation.priority,
                recommendation.impact,
                recommendation.effort,
                recommendation.description
            ));
            for (index, item) in recommendation.action_items.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", index + 1, item));
            }
            output.push('\n');
        }
    }

    output
}

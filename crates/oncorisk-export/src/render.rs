use tera::{Context, Tera};

use oncorisk_core::models::report::ClinicalReport;

use crate::error::ExportError;

const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md.tera");

/// Render a report with the built-in Markdown template.
pub fn render_markdown(report: &ClinicalReport) -> Result<String, ExportError> {
    render_template("report.md", MARKDOWN_TEMPLATE, report)
}

/// Render a Tera template with a ClinicalReport.
///
/// Report fields become top-level template variables. `risk_percent` is
/// added as the risk score formatted to one decimal place.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &ClinicalReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert("risk_percent", &format!("{:.1}", report.risk_score * 100.0));

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

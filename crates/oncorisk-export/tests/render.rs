use oncorisk_core::models::molecular::MolecularGroup;
use oncorisk_core::models::prediction::RiskCategory;
use oncorisk_core::models::recommendation::{
    Alert, AlertSeverity, ClinicalTrial, EvidenceItem, Recommendation,
};
use oncorisk_core::models::report::{ClinicalReport, DISCLAIMER};
use oncorisk_export::error::ExportError;
use oncorisk_export::render::{render_markdown, render_template};

fn sample_report() -> ClinicalReport {
    ClinicalReport {
        report_id: "RPT-20260314-0A1B2C3D".to_string(),
        patient_id: "DEMO-001".to_string(),
        assessed_at: "2026-03-14T09:30:00Z".parse().unwrap(),
        version: "0.1.0".to_string(),
        risk_score: 0.8746,
        risk_category: RiskCategory::High,
        molecular_group: MolecularGroup::P53abn,
        integrated_stage: "IC".to_string(),
        one_line_summary: "HIGH-risk patient with p53abn molecular classification".to_string(),
        clinical_summary: "Age 64 years, BMI 32.5, Diabetes: No, ECOG 1".to_string(),
        pathological_summary: "Stage IA, Endometrioid histology, Grade G3, <50% myometrial \
                               invasion, Focal LVSI, lymph nodes Negative"
            .to_string(),
        molecular_summary: "p53abn molecular group".to_string(),
        explanation_summary: "HIGH risk (87% recurrence)".to_string(),
        top_risk_drivers: vec!["L1CAM Status".to_string(), "p53 Status".to_string()],
        top_protective_factors: vec!["FIGO Stage".to_string()],
        molecular_explanation: "p53 abnormal pattern detected.".to_string(),
        biological_significance: "Worst prognosis group.".to_string(),
        therapeutic_implications: "Aggressive Multimodal Therapy: Chemoradiotherapy".to_string(),
        recommendation: Recommendation {
            primary_action: "Aggressive Multimodal Therapy: Chemoradiotherapy".to_string(),
            rationale: "Highest-risk molecular group.".to_string(),
            evidence: vec![EvidenceItem {
                source: "PORTEC-3".to_string(),
                finding: "Chemoradiotherapy improves survival".to_string(),
                hazard_ratio: Some(0.52),
                p_value: Some(0.021),
                url: None,
            }],
            trial_eligibility: vec![ClinicalTrial {
                name: "RAINBO p53abn-RED".to_string(),
                intervention: "Chemoradiotherapy + Olaparib".to_string(),
                status: "Recruiting".to_string(),
                eligibility_note: None,
            }],
            alerts: vec![Alert {
                severity: AlertSeverity::Critical,
                message: "Systemic therapy is critical".to_string(),
            }],
            contraindications: vec!["Assess ECOG performance status".to_string()],
        },
        disclaimer: DISCLAIMER.to_string(),
    }
}

#[test]
fn markdown_report_carries_key_findings() {
    let md = render_markdown(&sample_report()).unwrap();

    assert!(md.starts_with("# Endometrial Cancer Recurrence Risk Report"));
    assert!(md.contains("| Report ID | RPT-20260314-0A1B2C3D |"));
    assert!(md.contains("**87.5%** (HIGH)"));
    assert!(md.contains("Integrated FIGO 2023 stage: IC"));
    assert!(md.contains("- L1CAM Status"));
    assert!(md.contains("- FIGO Stage"));
    assert!(md.contains("- **CRITICAL**: Systemic therapy is critical"));
    assert!(md.contains("(HR 0.52, p=0.021)"));
    assert!(md.contains("- RAINBO p53abn-RED (Recruiting): Chemoradiotherapy + Olaparib"));
    assert!(md.trim_end().ends_with(&format!("_{DISCLAIMER}_")));
}

#[test]
fn markdown_is_not_html_escaped() {
    let md = render_markdown(&sample_report()).unwrap();
    assert!(md.contains("<50% myometrial"));
}

#[test]
fn empty_factor_lists_are_omitted() {
    let report = ClinicalReport {
        top_risk_drivers: Vec::new(),
        ..sample_report()
    };
    let md = render_markdown(&report).unwrap();
    assert!(!md.contains("Risk drivers:"));
    assert!(md.contains("Protective factors:"));
}

#[test]
fn custom_template_sees_report_fields() {
    let out = render_template(
        "line.txt",
        "{{ patient_id }}: {{ risk_category }} ({{ risk_percent }}%)",
        &sample_report(),
    )
    .unwrap();
    assert_eq!(out, "DEMO-001: HIGH (87.5%)");
}

#[test]
fn malformed_template_is_a_parse_error() {
    let err = render_template("bad.txt", "{% for x in %}", &sample_report()).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

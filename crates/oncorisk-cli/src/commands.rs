//! Subcommand implementations. Each returns the text to print on stdout.

use std::path::Path;
use std::sync::Arc;

use eyre::WrapErr;
use serde::Serialize;
use serde_json::json;

use oncorisk_core::models::patient::PatientRecord;
use oncorisk_engine::assess::Assessor;
use oncorisk_export::render::{render_markdown, render_template};
use oncorisk_model::logistic::LogisticModel;
use oncorisk_rules::classifier::classify;
use oncorisk_rules::descriptions::describe;
use oncorisk_rules::recommendation::recommend;
use oncorisk_rules::scenarios::{all_scenarios, get_scenario};
use oncorisk_rules::staging::{StagingInput, stage};

use crate::cli::{Commands, ConfigCommand, ReportArgs, ReportFormat, ScenariosCommand};
use crate::config::{OncoriskConfig, save_config};

/// Read and validate a patient record. Every subcommand that takes a
/// patient file goes through here, so a malformed record is rejected
/// before classification or staging runs.
pub fn read_patient(path: &Path) -> eyre::Result<PatientRecord> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read patient record {}", path.display()))?;
    let patient = PatientRecord::from_json(&contents)
        .wrap_err_with(|| format!("failed to parse patient record {}", path.display()))?;
    patient.ensure_valid()?;
    Ok(patient)
}

/// The configured model artifact, or the bundled one.
pub fn load_model(config: &OncoriskConfig) -> eyre::Result<Arc<LogisticModel>> {
    let model = match &config.model_path {
        Some(path) => LogisticModel::from_path(path)?,
        None => LogisticModel::bundled()?,
    };
    Ok(Arc::new(model))
}

fn to_json<T: Serialize>(value: &T) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// `config_path` is where `config init` writes; other commands ignore it.
pub fn run(
    command: &Commands,
    config: &OncoriskConfig,
    config_path: &Path,
) -> eyre::Result<String> {
    match command {
        Commands::Classify(args) => {
            let patient = read_patient(&args.patient)?;
            let classification = classify(&patient);
            let description = describe(classification.group);
            to_json(&json!({
                "classification": classification,
                "description": description,
            }))
        }
        Commands::Stage(args) => {
            let patient = read_patient(&args.patient)?;
            let group = classify(&patient).group;
            to_json(&stage(&StagingInput::from_patient(&patient, group)))
        }
        Commands::Predict(args) => {
            let patient = read_patient(&args.patient)?;
            let assessor = Assessor::from_model(load_model(config)?);
            to_json(&assessor.engine().predict(&patient)?)
        }
        Commands::Explain(args) => {
            let patient = read_patient(&args.patient)?;
            let assessor = Assessor::from_model(load_model(config)?);
            let (_, explanation) = assessor.explain_patient(&patient)?;
            to_json(&explanation)
        }
        Commands::Recommend(args) => {
            let patient = read_patient(&args.patient)?;
            let assessor = Assessor::from_model(load_model(config)?);
            let prediction = assessor.engine().predict(&patient)?;
            to_json(&recommend(&patient, &prediction))
        }
        Commands::Report(args) => report(args, config),
        Commands::Batch(args) => batch(&args.input, config),
        Commands::Scenarios(args) => scenarios(&args.command, config),
        Commands::Config(args) => config_command(&args.command, config, config_path),
    }
}

fn config_command(
    command: &ConfigCommand,
    config: &OncoriskConfig,
    path: &Path,
) -> eyre::Result<String> {
    match command {
        ConfigCommand::Show => to_json(&json!({
            "path": path.display().to_string(),
            "config": serde_json::to_value(config)?,
        })),
        ConfigCommand::Init { force } => {
            if path.exists() && !*force {
                return Err(eyre::eyre!(
                    "config already exists at {}; pass --force to overwrite",
                    path.display()
                ));
            }
            save_config(path, config)?;
            to_json(&json!({ "path": path.display().to_string() }))
        }
    }
}

fn report(args: &ReportArgs, config: &OncoriskConfig) -> eyre::Result<String> {
    let patient = read_patient(&args.patient)?;
    let assessor = Assessor::from_model(load_model(config)?);
    let report = assessor.assess(&patient)?.report;

    if let Some(template) = &args.template {
        let content = std::fs::read_to_string(template)
            .wrap_err_with(|| format!("failed to read template {}", template.display()))?;
        let name = template
            .file_name()
            .map_or_else(|| "custom".to_string(), |n| n.to_string_lossy().into_owned());
        return Ok(render_template(&name, &content, &report)?);
    }

    match args.format {
        ReportFormat::Json => to_json(&report),
        ReportFormat::Markdown => Ok(render_markdown(&report)?),
    }
}

fn batch(input: &Path, config: &OncoriskConfig) -> eyre::Result<String> {
    let contents = std::fs::read_to_string(input)
        .wrap_err_with(|| format!("failed to read batch file {}", input.display()))?;
    let patients: Vec<PatientRecord> = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("failed to parse batch file {}", input.display()))?;

    let assessor = Assessor::from_model(load_model(config)?);
    let rows: Vec<serde_json::Value> = patients
        .iter()
        .zip(assessor.engine().predict_batch(&patients))
        .map(|(patient, result)| match result {
            Ok(prediction) => json!({
                "patient_id": patient.patient_id,
                "prediction": prediction,
            }),
            Err(e) => json!({
                "patient_id": patient.patient_id,
                "error": e.to_string(),
            }),
        })
        .collect();
    to_json(&rows)
}

fn scenarios(command: &ScenariosCommand, config: &OncoriskConfig) -> eyre::Result<String> {
    match command {
        ScenariosCommand::List => {
            let listing: Vec<serde_json::Value> = all_scenarios()?
                .into_iter()
                .map(|s| {
                    json!({
                        "id": s.id,
                        "title": s.title,
                        "subtitle": s.subtitle,
                        "patients": s.patients.len(),
                    })
                })
                .collect();
            to_json(&listing)
        }
        ScenariosCommand::Show { id } => to_json(&get_scenario(id)?),
        ScenariosCommand::Run { id } => {
            let scenario = get_scenario(id)?;
            let assessor = Assessor::from_model(load_model(config)?);

            let mut outcomes = Vec::with_capacity(scenario.patients.len());
            for (patient, expected) in scenario
                .patients
                .iter()
                .zip(&scenario.expected_risk_categories)
            {
                let assessment = assessor.assess(patient)?;
                let prediction = &assessment.prediction;
                let group = prediction.molecular_classification.group;
                let matches = group == scenario.expected_molecular_group
                    && prediction.risk_category == *expected;
                outcomes.push(json!({
                    "patient_id": patient.patient_id,
                    "molecular_group": group,
                    "expected_molecular_group": scenario.expected_molecular_group,
                    "risk_category": prediction.risk_category,
                    "expected_risk_category": expected,
                    "recurrence_probability": prediction.recurrence_probability,
                    "integrated_stage": prediction.integrated_stage.integrated_stage,
                    "primary_action": assessment.recommendation.primary_action,
                    "matches": matches,
                }));
            }
            tracing::info!(scenario = %scenario.id, patients = outcomes.len(), "scenario run");

            to_json(&json!({
                "id": scenario.id,
                "title": scenario.title,
                "key_insight": scenario.key_insight,
                "outcomes": outcomes,
            }))
        }
    }
}

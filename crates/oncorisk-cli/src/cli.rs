use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "oncorisk",
    version,
    about = "Endometrial cancer recurrence risk assessment"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $ONCORISK_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Scoring model artifact, overrides the config")]
    pub model: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Molecular classification only.
    Classify(PatientArgs),
    /// Molecular-integrated FIGO staging.
    Stage(PatientArgs),
    /// Recurrence-risk prediction.
    Predict(PatientArgs),
    /// Prediction with per-feature explanation.
    Explain(PatientArgs),
    /// Treatment recommendation.
    Recommend(PatientArgs),
    /// Full clinical report.
    Report(ReportArgs),
    /// Predict for every patient in a JSON array.
    Batch(BatchArgs),
    /// Built-in demonstration cases.
    Scenarios(ScenariosArgs),
    /// Inspect or write the config file.
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct PatientArgs {
    #[arg(help = "Patient record JSON file")]
    pub patient: PathBuf,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(help = "Patient record JSON file")]
    pub patient: PathBuf,

    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    pub format: ReportFormat,

    #[arg(long, help = "Custom Tera template, implies markdown-style text output")]
    pub template: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Markdown,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(help = "JSON file holding an array of patient records")]
    pub input: PathBuf,
}

#[derive(Debug, Args)]
pub struct ScenariosArgs {
    #[command(subcommand)]
    pub command: ScenariosCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScenariosCommand {
    List,
    Show { id: String },
    /// Assess every patient in a scenario and compare with expectations.
    Run { id: String },
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective config and where it is read from.
    Show,
    /// Write the effective config, including flag overrides, to disk.
    Init {
        #[arg(long, help = "Overwrite an existing config file")]
        force: bool,
    },
}

use std::path::PathBuf;

use clap::Parser;
use oncorisk_cli::cli::{Cli, Commands, ConfigCommand, ReportFormat, ScenariosCommand};
use oncorisk_cli::config::LogFormat;

#[test]
fn report_defaults_to_json() {
    let cli = Cli::parse_from(["oncorisk", "report", "patient.json"]);
    match cli.command {
        Commands::Report(args) => {
            assert_eq!(args.patient, PathBuf::from("patient.json"));
            assert_eq!(args.format, ReportFormat::Json);
            assert!(args.template.is_none());
        }
        _ => panic!("expected report command"),
    }
}

#[test]
fn global_flags_follow_the_subcommand() {
    let cli = Cli::parse_from([
        "oncorisk",
        "predict",
        "patient.json",
        "--model",
        "model.json",
        "--log-format",
        "json",
    ]);
    assert_eq!(cli.model, Some(PathBuf::from("model.json")));
    assert_eq!(cli.log_format, Some(LogFormat::Json));
    assert!(matches!(cli.command, Commands::Predict(_)));
}

#[test]
fn scenario_run_takes_an_id() {
    let cli = Cli::parse_from(["oncorisk", "scenarios", "run", "grey-zone"]);
    match cli.command {
        Commands::Scenarios(args) => match args.command {
            ScenariosCommand::Run { id } => assert_eq!(id, "grey-zone"),
            _ => panic!("expected scenarios run"),
        },
        _ => panic!("expected scenarios command"),
    }
}

#[test]
fn markdown_format_is_accepted() {
    let cli = Cli::parse_from(["oncorisk", "report", "p.json", "--format", "markdown"]);
    match cli.command {
        Commands::Report(args) => assert_eq!(args.format, ReportFormat::Markdown),
        _ => panic!("expected report command"),
    }
}

#[test]
fn config_init_accepts_force() {
    let cli = Cli::parse_from(["oncorisk", "config", "init", "--force"]);
    match cli.command {
        Commands::Config(args) => {
            assert!(matches!(args.command, ConfigCommand::Init { force: true }))
        }
        _ => panic!("expected config command"),
    }
}

mod cli;
mod config;
mod core;
mod export;
mod session;
mod telemetry;
mod utils;

use crate::cli::{Cli, Commands, OutputArgs, ScoreArgs};
use crate::config::{Config, LoadedConfig};
use crate::core::catalog::catalog;
use crate::core::presets::EXAMPLES;
use crate::core::report::{JsonReport, print_human};
use crate::core::{Calculator, ExportOutcome};
use crate::export::file::FileExporter;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Questions(args) => {
            let loaded = setup(args.config.as_deref())?;
            print_questions(&args, &loaded.config)?;
            Ok(0)
        }
        Commands::Examples(args) => {
            let loaded = setup(args.config.as_deref())?;
            print_examples(&args, &loaded.config)?;
            Ok(0)
        }
        Commands::Score(args) => {
            let loaded = setup(args.output.config.as_deref())?;
            run_score(args, &loaded.config)
        }
        Commands::Session(args) => {
            let loaded = setup(args.config.as_deref())?;
            let cfg = &loaded.config;
            let mut calculator = Calculator::new(catalog());
            let exporter = FileExporter::from_config(&cfg.export);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session::run_session(
                &mut calculator,
                stdin.lock(),
                &mut stdout,
                &exporter,
                cfg.general.fail_on,
            )?;

            let report = calculator.report(cfg.general.fail_on);
            if report.exit.ok { Ok(0) } else { Ok(1) }
        }
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `viability init`; writing ./{}",
                    config::CONFIG_FILE_NAME
                );
            }

            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn setup(config_path: Option<&Path>) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(config_path, &cwd)?;
    telemetry::init(&loaded.config.logging)?;
    if !loaded.config.general.color {
        colored::control::set_override(false);
    }
    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "config loaded");
    }
    Ok(loaded)
}

fn run_score(args: ScoreArgs, cfg: &Config) -> Result<i32> {
    let mut calculator = Calculator::new(catalog());

    if let Some(name) = args.name {
        calculator.set_name(name);
    }
    if let Some(idea) = args.idea {
        calculator.set_idea(idea);
    }
    if let Some(example) = &args.example {
        calculator
            .populate_example(example)
            .with_context(|| format!("failed applying example {example:?}"))?;
    }
    for answer in &args.answers {
        calculator
            .apply_answer(answer)
            .with_context(|| format!("failed applying --answer {answer:?}"))?;
    }

    let report = calculator.report(cfg.general.fail_on);
    if args.output.json || cfg.general.json {
        println!("{}", serde_json::to_string_pretty(&JsonReport::from(&report))?);
    } else {
        print_human(&report);
    }

    if args.export {
        let exporter = FileExporter::from_config(&cfg.export);
        match calculator.export(&exporter, cfg.general.fail_on) {
            ExportOutcome::Written(path) => eprintln!("exported {}", path.display()),
            ExportOutcome::Failed(reason) => eprintln!("warning: export failed: {reason}"),
        }
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn print_questions(args: &OutputArgs, cfg: &Config) -> Result<()> {
    let catalog = catalog();
    if args.json || cfg.general.json {
        println!("{}", serde_json::to_string_pretty(catalog.questions())?);
        return Ok(());
    }

    for question in catalog.questions() {
        println!("{}. {} [{}]", question.id, question.label, question.key);
        println!("   {}", question.helper_text);
        for option in &question.options {
            println!("   {}) {} = {}", option.id, option.label, option.value);
        }
    }
    Ok(())
}

fn print_examples(args: &OutputArgs, cfg: &Config) -> Result<()> {
    if args.json || cfg.general.json {
        println!("{}", serde_json::to_string_pretty(EXAMPLES)?);
        return Ok(());
    }

    for example in EXAMPLES {
        let mut calculator = Calculator::new(catalog());
        calculator.populate_example(example.key)?;
        let state = calculator.state();
        println!(
            "{} [{}]: score {} ({}, {})",
            example.name,
            example.key,
            state.normalized_score,
            state.verdict,
            state.color.token()
        );
    }
    Ok(())
}

use crate::config::FailOn;
use crate::core::answer::{resolve_choice, resolve_question};
use crate::core::presets::EXAMPLES;
use crate::core::report::render_text;
use crate::core::selection::Choice;
use crate::core::{Calculator, ExportOutcome};
use crate::export::Exporter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  set QUESTION OPTION   answer a question (key or number; option number or label)
  clear QUESTION        mark a question unanswered
  get QUESTION          print the current answer to a question
  example NAME          fill every answer from an example
  name TEXT             set the startup name
  idea TEXT             set the one-sentence idea
  reset                 clear every answer
  show                  print the full view
  export                export the current view
  help                  print this help
  quit                  leave the session";

pub fn run_session<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    input: R,
    out: &mut W,
    exporter: &dyn Exporter,
    fail_on: FailOn,
) -> Result<()> {
    writeln!(out, "{HELP}")?;
    write_summary(calculator, out)?;

    for line in input.lines() {
        let line = line.context("failed reading session input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(command, rest)| (command, rest.trim()));

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => writeln!(out, "{HELP}")?,
            "show" => write!(out, "{}", render_text(&calculator.report(fail_on)))?,
            "reset" => {
                calculator.reset();
                write_summary(calculator, out)?;
            }
            "set" => {
                let (question, option) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(question, option)| (question, option.trim()));
                let outcome = resolve_question(calculator.catalog(), question)
                    .and_then(|question| Ok((question.id, resolve_choice(question, option)?)))
                    .and_then(|(question, choice)| calculator.select(question, choice));
                report_result(calculator, out, outcome)?;
            }
            "clear" => {
                let outcome = resolve_question(calculator.catalog(), rest)
                    .and_then(|question| calculator.select(question.id, Choice::Unanswered));
                report_result(calculator, out, outcome)?;
            }
            "get" => match resolve_question(calculator.catalog(), rest) {
                Ok(question) => match calculator.selection(question.id) {
                    Ok(Choice::Answered(option)) => {
                        let label = question.option(option).map_or("?", |o| o.label);
                        writeln!(out, "{}: {}) {}", question.label, option, label)?
                    }
                    Ok(Choice::Unanswered) => writeln!(out, "{}: (unanswered)", question.label)?,
                    Err(err) => writeln!(out, "error: {err}")?,
                },
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "example" => {
                let outcome = calculator.populate_example(rest).map(|_| ());
                if outcome.is_err() {
                    let names: Vec<&str> = EXAMPLES.iter().map(|example| example.key).collect();
                    writeln!(out, "available examples: {}", names.join(", "))?;
                }
                report_result(calculator, out, outcome)?;
            }
            "name" => calculator.set_name(rest),
            "idea" => calculator.set_idea(rest),
            "export" => match calculator.export(exporter, fail_on) {
                ExportOutcome::Written(path) => writeln!(out, "exported {}", path.display())?,
                ExportOutcome::Failed(reason) => writeln!(out, "warning: export failed: {reason}")?,
            },
            other => writeln!(out, "unknown command {other:?} (try `help`)")?,
        }
    }

    Ok(())
}

fn report_result<W: Write, E: std::fmt::Display>(
    calculator: &Calculator,
    out: &mut W,
    outcome: std::result::Result<(), E>,
) -> Result<()> {
    match outcome {
        Ok(()) => write_summary(calculator, out),
        Err(err) => {
            writeln!(out, "error: {err}")?;
            Ok(())
        }
    }
}

fn write_summary<W: Write>(calculator: &Calculator, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Score: {}  Result: {} [{}]",
        calculator.display_score(),
        calculator.verdict_label(),
        calculator.display_color_token()
    )?;
    Ok(())
}

use crate::config::FailOn;
use crate::core::catalog::QuestionCatalog;
use crate::core::score::{DisplayColor, ScoreState, Verdict};
use crate::core::selection::SlotView;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write as _;

impl Verdict {
    pub fn meets_fail_on(self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::None => false,
            FailOn::NotViable => matches!(self, Self::NotViable),
            FailOn::Pending => matches!(self, Self::NotViable | Self::Pending),
        }
    }

    fn colored(self, color: DisplayColor) -> String {
        let label = self.label();
        match color {
            DisplayColor::Green400 => label.bright_green().bold().to_string(),
            DisplayColor::Green200 => label.green().bold().to_string(),
            DisplayColor::Stone200 => label.white().dimmed().to_string(),
            DisplayColor::Red400 => label.red().bold().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerLine {
    pub question: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl AnswerLine {
    pub fn from_slots(catalog: &QuestionCatalog, slots: &[SlotView<'static>]) -> Vec<Self> {
        slots
            .iter()
            .filter_map(|slot| {
                let question = catalog.question(slot.question)?;
                Some(Self {
                    question: question.key,
                    label: question.label,
                    option: slot.option.map(|option| option.label),
                    value: slot.option.map(|option| option.value),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StartupInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub startup: StartupInfo,
    pub state: ScoreState,
    pub progress: Progress,
    pub answers: Vec<AnswerLine>,
    pub fail_on: FailOn,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    #[serde(flatten)]
    pub startup: StartupInfo,
    pub score: f64,
    pub raw_product: f64,
    pub verdict: Verdict,
    pub label: &'static str,
    pub color: DisplayColor,
    pub progress: Progress,
    pub answers: Vec<AnswerLine>,
    pub fail_on: FailOn,
}

impl From<&ScoreReport> for JsonReport {
    fn from(report: &ScoreReport) -> Self {
        Self {
            startup: report.startup.clone(),
            score: report.state.normalized_score,
            raw_product: report.state.raw_product,
            verdict: report.state.verdict,
            label: report.state.verdict.label(),
            color: report.state.color,
            progress: report.progress.clone(),
            answers: report.answers.clone(),
            fail_on: report.fail_on,
        }
    }
}

pub fn evaluate_exit(verdict: Verdict, fail_on: FailOn) -> ExitStatus {
    let mut reasons = Vec::new();

    if verdict.meets_fail_on(fail_on) {
        reasons.push(format!(
            "verdict {:?} meets fail_on {}",
            verdict.label(),
            fail_on
        ));
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn render_text(report: &ScoreReport) -> String {
    render(report, false)
}

pub fn print_human(report: &ScoreReport) {
    print!("{}", render(report, true));

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

fn render(report: &ScoreReport, colorize: bool) -> String {
    let mut out = String::new();
    let state = &report.state;

    let _ = writeln!(out, "Is My Startup Viable?");
    if let Some(name) = &report.startup.name {
        let _ = writeln!(out, "startup: {name}");
    }
    if let Some(idea) = &report.startup.idea {
        let _ = writeln!(out, "idea: {idea}");
    }

    let verdict = if colorize {
        state.verdict.colored(state.color)
    } else {
        state.verdict.label().to_string()
    };
    let _ = writeln!(out, "Score: {}", state.normalized_score);
    let _ = writeln!(out, "Result: {verdict} [{}]", state.color.token());
    let _ = writeln!(
        out,
        "raw product: {} ({}/{} answered)",
        state.raw_product, report.progress.answered, report.progress.total
    );

    let _ = writeln!(out);
    for (idx, answer) in report.answers.iter().enumerate() {
        match (answer.option, answer.value) {
            (Some(option), Some(value)) => {
                let _ = writeln!(out, "{}. {}: {} ({})", idx + 1, answer.label, option, value);
            }
            _ => {
                let _ = writeln!(out, "{}. {}: (unanswered)", idx + 1, answer.label);
            }
        }
    }

    out
}

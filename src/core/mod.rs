pub mod answer;
pub mod catalog;
pub mod error;
pub mod presets;
pub mod report;
pub mod score;
pub mod selection;

use crate::config::FailOn;
use crate::core::catalog::{QuestionCatalog, QuestionId};
use crate::core::error::SelectionError;
use crate::core::presets::ExampleSet;
use crate::core::report::{AnswerLine, Progress, ScoreReport, StartupInfo};
use crate::core::score::ScoreState;
use crate::core::selection::{Choice, SelectionStore, SlotView};
use crate::export::Exporter;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Calculator {
    store: SelectionStore,
    startup: StartupInfo,
    state: ScoreState,
}

impl Calculator {
    pub fn new(catalog: &'static QuestionCatalog) -> Self {
        let store = SelectionStore::new(catalog);
        let state = score::evaluate(&store.get_all_selections());
        Self {
            store,
            startup: StartupInfo::default(),
            state,
        }
    }

    pub fn catalog(&self) -> &'static QuestionCatalog {
        self.store.catalog()
    }

    pub fn select(&mut self, question: QuestionId, choice: Choice) -> Result<(), SelectionError> {
        self.store.set_selection(question, choice)?;
        self.recompute();
        Ok(())
    }

    pub fn apply_answer(&mut self, input: &str) -> Result<(), SelectionError> {
        let (question, choice) = answer::parse_answer(self.catalog(), input)?;
        self.select(question.id, choice)
    }

    pub fn selection(&self, question: QuestionId) -> Result<Choice, SelectionError> {
        self.store.get_selection(question)
    }

    pub fn selections(&self) -> Vec<SlotView<'static>> {
        self.store.get_all_selections()
    }

    pub fn reset(&mut self) {
        self.store.clear();
        self.recompute();
    }

    pub fn populate_example(&mut self, key: &str) -> Result<&'static ExampleSet, SelectionError> {
        let example = presets::find_example(key)?;
        self.store.apply_batch(&example.choices(self.catalog()))?;
        self.recompute();
        tracing::info!(example = example.key, "example answers applied");
        Ok(example)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.startup.name = Some(name.into());
    }

    pub fn set_idea(&mut self, idea: impl Into<String>) {
        self.startup.idea = Some(idea.into());
    }

    pub fn state(&self) -> ScoreState {
        self.state
    }

    pub fn display_score(&self) -> f64 {
        self.state.normalized_score
    }

    pub fn verdict_label(&self) -> &'static str {
        self.state.verdict.label()
    }

    pub fn display_color_token(&self) -> &'static str {
        self.state.color.token()
    }

    pub fn report(&self, fail_on: FailOn) -> ScoreReport {
        let selections = self.selections();
        ScoreReport {
            startup: self.startup.clone(),
            state: self.state,
            progress: Progress {
                answered: self.store.answered_count(),
                total: selections.len(),
                complete: self.store.is_complete(),
            },
            answers: AnswerLine::from_slots(self.catalog(), &selections),
            fail_on,
            exit: report::evaluate_exit(self.state.verdict, fail_on),
        }
    }

    pub fn export(&self, exporter: &dyn Exporter, fail_on: FailOn) -> ExportOutcome {
        match exporter.export(&self.report(fail_on)) {
            Ok(path) => {
                tracing::info!(exporter = exporter.name(), path = %path.display(), "view exported");
                ExportOutcome::Written(path)
            }
            Err(err) => {
                let message = format!("{err:#}");
                tracing::warn!(exporter = exporter.name(), error = %message, "export failed");
                ExportOutcome::Failed(message)
            }
        }
    }

    fn recompute(&mut self) {
        self.state = score::evaluate(&self.store.get_all_selections());
    }
}

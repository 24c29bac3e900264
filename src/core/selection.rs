use crate::core::catalog::{AnswerOption, OptionId, QuestionCatalog, QuestionId};
use crate::core::error::SelectionError;
use serde::Serialize;

/// State of one question slot. `Unanswered` is distinct from an answer whose
/// option happens to weigh zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "option", rename_all = "lowercase")]
pub enum Choice {
    #[default]
    Unanswered,
    Answered(OptionId),
}

impl Choice {
    pub fn is_answered(self) -> bool {
        matches!(self, Self::Answered(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SlotView<'a> {
    pub question: QuestionId,
    pub option: Option<&'a AnswerOption>,
}

// one slot per catalog question, always
#[derive(Debug, Clone)]
pub struct SelectionStore {
    catalog: &'static QuestionCatalog,
    slots: Vec<Choice>,
}

impl SelectionStore {
    pub fn new(catalog: &'static QuestionCatalog) -> Self {
        Self {
            catalog,
            slots: vec![Choice::Unanswered; catalog.len()],
        }
    }

    pub fn catalog(&self) -> &'static QuestionCatalog {
        self.catalog
    }

    pub fn set_selection(
        &mut self,
        question: QuestionId,
        choice: Choice,
    ) -> Result<(), SelectionError> {
        self.validate(question, choice)?;
        self.slots[question.0] = choice;
        tracing::debug!(question = %question, ?choice, "selection updated");
        Ok(())
    }

    pub fn get_selection(&self, question: QuestionId) -> Result<Choice, SelectionError> {
        self.slots
            .get(question.0)
            .copied()
            .ok_or_else(|| SelectionError::UnknownQuestion(question.to_string()))
    }

    pub fn get_all_selections(&self) -> Vec<SlotView<'static>> {
        let catalog = self.catalog;
        catalog
            .questions()
            .iter()
            .zip(&self.slots)
            .map(|(question, choice)| SlotView {
                question: question.id,
                option: match choice {
                    Choice::Answered(option) => question.option(*option),
                    Choice::Unanswered => None,
                },
            })
            .collect()
    }

    pub fn apply_batch(&mut self, choices: &[(QuestionId, Choice)]) -> Result<(), SelectionError> {
        for (question, choice) in choices {
            self.validate(*question, *choice)?;
        }
        for (question, choice) in choices {
            self.slots[question.0] = *choice;
        }
        tracing::debug!(count = choices.len(), "batch selection applied");
        Ok(())
    }

    pub fn clear(&mut self) {
        self.slots.fill(Choice::Unanswered);
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|choice| choice.is_answered()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.slots.len()
    }

    fn validate(&self, question: QuestionId, choice: Choice) -> Result<(), SelectionError> {
        let definition = self
            .catalog
            .question(question)
            .ok_or_else(|| SelectionError::UnknownQuestion(question.to_string()))?;

        if let Choice::Answered(option) = choice {
            if definition.option(option).is_none() {
                return Err(SelectionError::UnknownOption { question, option });
            }
        }

        Ok(())
    }
}

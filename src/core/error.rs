use crate::core::catalog::{OptionId, QuestionId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown question {0}")]
    UnknownQuestion(String),
    #[error("question {question} has no option {option}")]
    UnknownOption {
        question: QuestionId,
        option: OptionId,
    },
    #[error("no option labelled {label:?} for question {question}")]
    UnknownOptionLabel { question: QuestionId, label: String },
    #[error("unknown example {0:?}")]
    UnknownExample(String),
    #[error("invalid answer {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

use crate::core::catalog::{OptionId, Question, QuestionCatalog};
use crate::core::error::SelectionError;
use crate::core::selection::Choice;

pub fn parse_answer<'c>(
    catalog: &'c QuestionCatalog,
    input: &str,
) -> Result<(&'c Question, Choice), SelectionError> {
    let Some((question_raw, option_raw)) = input.split_once('=') else {
        return Err(SelectionError::Parse {
            input: input.to_string(),
            reason: "expected QUESTION=OPTION".to_string(),
        });
    };

    let question = resolve_question(catalog, question_raw)?;
    let choice = resolve_choice(question, option_raw)?;
    Ok((question, choice))
}

pub fn resolve_question<'c>(
    catalog: &'c QuestionCatalog,
    raw: &str,
) -> Result<&'c Question, SelectionError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SelectionError::Parse {
            input: raw.to_string(),
            reason: "missing question".to_string(),
        });
    }

    if let Ok(number) = raw.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|idx| catalog.questions().get(idx))
            .ok_or_else(|| SelectionError::UnknownQuestion(raw.to_string()));
    }

    catalog
        .by_key(raw)
        .ok_or_else(|| SelectionError::UnknownQuestion(raw.to_string()))
}

// OPTION: 1-based number, label, or `none`/`-`.
pub fn resolve_choice(question: &Question, raw: &str) -> Result<Choice, SelectionError> {
    let raw = raw.trim();
    if raw == "-" || raw.eq_ignore_ascii_case("none") {
        return Ok(Choice::Unanswered);
    }

    if let Ok(number) = raw.parse::<usize>() {
        let Some(idx) = number.checked_sub(1) else {
            return Err(SelectionError::Parse {
                input: raw.to_string(),
                reason: "option numbers start at 1".to_string(),
            });
        };
        let option = question
            .option(OptionId(idx))
            .ok_or(SelectionError::UnknownOption {
                question: question.id,
                option: OptionId(idx),
            })?;
        return Ok(Choice::Answered(option.id));
    }

    question
        .option_by_label(raw)
        .map(|option| Choice::Answered(option.id))
        .ok_or_else(|| SelectionError::UnknownOptionLabel {
            question: question.id,
            label: raw.to_string(),
        })
}

use crate::core::catalog::{OptionId, QuestionCatalog, QuestionId};
use crate::core::error::SelectionError;
use crate::core::selection::Choice;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Serialize)]
pub struct ExampleSet {
    pub key: &'static str,
    pub name: &'static str,
    // zero-based option positions in catalog order
    #[serde(serialize_with = "serialize_answers")]
    pub answers: [usize; 7],
}

fn serialize_answers<S: Serializer>(
    answers: &[usize; 7],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(answers.len()))?;
    for position in answers {
        seq.serialize_element(&(position + 1))?;
    }
    seq.end()
}

impl ExampleSet {
    pub fn choices(&self, catalog: &QuestionCatalog) -> Vec<(QuestionId, Choice)> {
        catalog
            .questions()
            .iter()
            .zip(self.answers)
            .map(|(question, option)| (question.id, Choice::Answered(OptionId(option))))
            .collect()
    }
}

pub const EXAMPLES: &[ExampleSet] = &[ExampleSet {
    key: "wp-engine",
    name: "WP Engine",
    answers: [2, 0, 2, 0, 1, 1, 1],
}];

pub fn find_example(key: &str) -> Result<&'static ExampleSet, SelectionError> {
    let wanted = key.trim();
    EXAMPLES
        .iter()
        .find(|example| {
            example.key.eq_ignore_ascii_case(wanted) || example.name.eq_ignore_ascii_case(wanted)
        })
        .ok_or_else(|| SelectionError::UnknownExample(wanted.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::catalog;

    #[test]
    fn every_example_answers_every_question_with_a_catalog_option() {
        for example in EXAMPLES {
            let choices = example.choices(catalog());
            assert_eq!(choices.len(), catalog().len(), "{}", example.key);
            for (question, choice) in choices {
                let Choice::Answered(option) = choice else {
                    panic!("{} leaves {} unanswered", example.key, question);
                };
                assert!(
                    catalog().question(question).unwrap().option(option).is_some(),
                    "{} has no option {} for question {}",
                    example.key,
                    option,
                    question
                );
            }
        }
    }

    #[test]
    fn wp_engine_uses_documented_values() {
        let example = find_example("WP Engine").expect("example");
        let values: Vec<f64> = catalog()
            .questions()
            .iter()
            .zip(example.answers)
            .map(|(question, option)| question.options[option].value)
            .collect();
        assert_eq!(values, vec![10_000_000.0, 0.01, 10_000.0, 0.01, 0.1, 0.5, 0.1]);
    }

    #[test]
    fn json_answers_replay_the_example() {
        let example = find_example("wp-engine").unwrap();
        let value = serde_json::to_value(EXAMPLES).unwrap();
        assert_eq!(value[0]["answers"][0], 3);

        let mut replayed = crate::core::Calculator::new(catalog());
        for (idx, option) in value[0]["answers"].as_array().unwrap().iter().enumerate() {
            replayed.apply_answer(&format!("{}={}", idx + 1, option)).unwrap();
        }
        let mut filled = crate::core::Calculator::new(catalog());
        filled.populate_example(example.key).unwrap();

        assert_eq!(replayed.state(), filled.state());
        assert_eq!(replayed.verdict_label(), "Not viable");
    }

    #[test]
    fn unknown_example_is_an_error() {
        assert_eq!(
            find_example("acme").unwrap_err(),
            SelectionError::UnknownExample("acme".to_string())
        );
    }
}

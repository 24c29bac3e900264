use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(pub usize);

// Ids are zero-based positions internally; everything user-facing, JSON
// included, numbers from 1 so it can be fed back as an answer.
fn serialize_position<S: Serializer>(
    position: &usize,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(*position as u64 + 1)
}

impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_position(&self.0, serializer)
    }
}

impl Serialize for OptionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_position(&self.0, serializer)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub value: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub key: &'static str,
    pub label: &'static str,
    pub helper_text: &'static str,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.get(id.0)
    }

    pub fn option_by_label(&self, label: &str) -> Option<&AnswerOption> {
        let wanted = label.trim();
        self.options.iter().find(|option| {
            option.label.trim().eq_ignore_ascii_case(wanted)
                || label_text(option.label).eq_ignore_ascii_case(wanted)
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.0)
    }

    pub fn by_key(&self, key: &str) -> Option<&Question> {
        let wanted = key.trim();
        self.questions
            .iter()
            .find(|question| question.key.eq_ignore_ascii_case(wanted))
    }
}

// "0.1 : One-off purchase with evangelism" -> "One-off purchase with evangelism"
fn label_text(label: &str) -> &str {
    match label.split_once(':') {
        Some((weight, text)) if weight.trim().parse::<f64>().is_ok() => text.trim(),
        _ => label.trim(),
    }
}

static CATALOG: Lazy<QuestionCatalog> = Lazy::new(build_catalog);

pub fn catalog() -> &'static QuestionCatalog {
    &CATALOG
}

type QuestionDef = (
    &'static str,
    &'static str,
    &'static str,
    &'static [(f64, &'static str)],
);

const DEFINITIONS: [QuestionDef; 7] = [
    (
        "plausible",
        "Plausible",
        "Number of potential customers (consumers or businesses)",
        &[
            (1_000_000_000.0, "1,000,000,000"),
            (100_000_000.0, "100,000,000"),
            (10_000_000.0, "10,000,000"),
            (1_000_000.0, "1,000,000"),
            (100_000.0, "100,000"),
            (10_000.0, "10,000"),
            (1_000.0, "1,000"),
        ],
    ),
    (
        "self-aware",
        "Self-Aware",
        "Willing to solve the problem",
        &[
            (0.01, "0.01: Few agree or care"),
            (0.1, "0.1: Thought-leaders care/evangelize"),
            (0.5, "0.5: Industry standard-practice"),
            (1.0, "1.0: Hard to find someone who doesn't care"),
        ],
    ),
    (
        "lucrative",
        "Lucrative",
        "Annual allocated budget",
        &[
            (1_000_000.0, "$1,000,000"),
            (100_000.0, "$100,000"),
            (10_000.0, "$10,000"),
            (1_000.0, "$1,000"),
            (100.0, "$100"),
            (10.0, "$10"),
            (1.0, "$1"),
        ],
    ),
    (
        "liquid",
        "Liquid",
        "Frequency of purchase decision",
        &[
            (0.01, "0.01: Every few years"),
            (0.1, "0.1: An annual decision"),
            (1.0, "1.0: Always in the market, easy to switch"),
        ],
    ),
    (
        "eager-identity",
        "Eager (identity)",
        "Attitude towards your company",
        &[
            (0.0, "0: They cannot buy from you"),
            (0.1, "0.1: Structural/trust challenges"),
            (0.5, "0.5: Indifferent"),
            (1.0, "1.0: Emotional desire to select you"),
        ],
    ),
    (
        "eager-comparative",
        "Eager (comparative)",
        "Competitive differentiation",
        &[
            (0.1, "0.1: No material differentiation"),
            (0.5, "0.5: Some best-in-class features"),
            (1.0, "1.0: No viable alternative"),
        ],
    ),
    (
        "enduring",
        "Enduring",
        "Will they still be here a year from now?",
        &[
            (0.01, "0.01: One-off purchase without loyalty"),
            (0.1, "0.1 : One-off purchase with evangelism"),
            (0.5, "0.5 : Recurring-revenue + recurring-problem"),
            (1.0, "1.0 : Strong lock-in "),
        ],
    ),
];

fn build_catalog() -> QuestionCatalog {
    let questions = DEFINITIONS
        .iter()
        .enumerate()
        .map(|(idx, &(key, label, helper_text, options))| Question {
            id: QuestionId(idx),
            key,
            label,
            helper_text,
            options: options
                .iter()
                .enumerate()
                .map(|(opt_idx, &(value, label))| AnswerOption {
                    id: OptionId(opt_idx),
                    value,
                    label,
                })
                .collect(),
        })
        .collect();

    QuestionCatalog { questions }
}

use crate::core::selection::SlotView;
use serde::Serialize;
use std::fmt;

// raw product of the reference answer set the thresholds were calibrated on
pub const CALIBRATION_DIVISOR: f64 = 625_000.0;

pub const SCALE_UP_THRESHOLD: f64 = 4.0;
pub const SELF_FUND_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    ScaleUp,
    SelfFund,
    NotViable,
    Pending,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Self::ScaleUp => "Scale Up",
            Self::SelfFund => "Self-Fund",
            Self::NotViable => "Not viable",
            Self::Pending => "TBD",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisplayColor {
    #[serde(rename = "green-400")]
    Green400,
    #[serde(rename = "green-200")]
    Green200,
    #[serde(rename = "stone-200")]
    Stone200,
    #[serde(rename = "red-400")]
    Red400,
}

impl DisplayColor {
    pub fn token(self) -> &'static str {
        match self {
            Self::Green400 => "green-400",
            Self::Green200 => "green-200",
            Self::Stone200 => "stone-200",
            Self::Red400 => "red-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreState {
    pub raw_product: f64,
    pub normalized_score: f64,
    pub verdict: Verdict,
    pub color: DisplayColor,
}

pub fn compute_raw_product(selections: &[SlotView<'_>]) -> f64 {
    selections
        .iter()
        .map(|slot| slot.option.map_or(0.0, |option| option.value))
        .product()
}

pub fn normalize(raw_product: f64) -> f64 {
    raw_product / CALIBRATION_DIVISOR
}

pub fn classify(normalized_score: f64) -> Verdict {
    if normalized_score == 0.0 {
        Verdict::Pending
    } else if normalized_score >= SCALE_UP_THRESHOLD {
        Verdict::ScaleUp
    } else if normalized_score >= SELF_FUND_THRESHOLD {
        Verdict::SelfFund
    } else {
        Verdict::NotViable
    }
}

pub fn color_for(verdict: Verdict) -> DisplayColor {
    match verdict {
        Verdict::ScaleUp => DisplayColor::Green400,
        Verdict::SelfFund => DisplayColor::Green200,
        Verdict::Pending => DisplayColor::Stone200,
        Verdict::NotViable => DisplayColor::Red400,
    }
}

pub fn evaluate(selections: &[SlotView<'_>]) -> ScoreState {
    let raw_product = compute_raw_product(selections);
    let normalized_score = normalize(raw_product);
    let complete = selections.iter().all(|slot| slot.option.is_some());

    // Departs from the original page, which shows "TBD" for any zero product:
    // a complete set with a zero-weight answer is "Not viable" here. Drop this
    // arm to restore the page's behavior.
    let verdict = match classify(normalized_score) {
        Verdict::Pending if complete => Verdict::NotViable,
        verdict => verdict,
    };

    tracing::debug!(raw_product, normalized_score, %verdict, "score recomputed");

    ScoreState {
        raw_product,
        normalized_score,
        verdict,
        color: color_for(verdict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{OptionId, QuestionId, catalog};
    use crate::core::selection::{Choice, SelectionStore};

    fn approx_eq(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= expected.abs() * 1e-9
    }

    fn answered(options: [usize; 7]) -> SelectionStore {
        let mut store = SelectionStore::new(catalog());
        for (idx, option) in options.into_iter().enumerate() {
            store
                .set_selection(QuestionId(idx), Choice::Answered(OptionId(option)))
                .expect("catalog option");
        }
        store
    }

    // Reference answers: 10,000,000 / 0.01 / $10,000 / 0.01 / 0.1 / 0.5 / 0.1
    const EXAMPLE_OPTIONS: [usize; 7] = [2, 0, 2, 0, 1, 1, 1];
    const MAXIMAL_OPTIONS: [usize; 7] = [0, 3, 0, 2, 3, 2, 3];

    #[test]
    fn all_unanswered_is_pending() {
        let store = SelectionStore::new(catalog());
        let selections = store.get_all_selections();
        assert_eq!(compute_raw_product(&selections), 0.0);

        let state = evaluate(&selections);
        assert_eq!(state.verdict, Verdict::Pending);
        assert_eq!(state.color, DisplayColor::Stone200);
    }

    #[test]
    fn example_answers_are_not_viable() {
        let store = answered(EXAMPLE_OPTIONS);
        let state = evaluate(&store.get_all_selections());

        assert!(approx_eq(state.raw_product, 50_000.0), "{}", state.raw_product);
        assert!(approx_eq(state.normalized_score, 0.08), "{}", state.normalized_score);
        assert_eq!(state.verdict, Verdict::NotViable);
        assert_eq!(state.color, DisplayColor::Red400);
    }

    #[test]
    fn maximal_answers_scale_up() {
        let store = answered(MAXIMAL_OPTIONS);
        let state = evaluate(&store.get_all_selections());

        assert!(approx_eq(state.raw_product, 1e15));
        assert!(approx_eq(state.normalized_score, 1.6e9));
        assert_eq!(state.verdict, Verdict::ScaleUp);
        assert_eq!(state.color, DisplayColor::Green400);
    }

    #[test]
    fn any_single_gap_forces_pending() {
        for gap in 0..7 {
            let mut store = answered(MAXIMAL_OPTIONS);
            store
                .set_selection(QuestionId(gap), Choice::Unanswered)
                .unwrap();
            let state = evaluate(&store.get_all_selections());
            assert_eq!(state.raw_product, 0.0);
            assert_eq!(state.verdict, Verdict::Pending, "gap at {gap}");
            assert_eq!(state.color, DisplayColor::Stone200);
        }
    }

    #[test]
    fn zero_weight_answer_on_complete_set_is_not_viable() {
        let mut options = MAXIMAL_OPTIONS;
        options[4] = 0;
        let store = answered(options);
        let state = evaluate(&store.get_all_selections());
        assert_eq!(state.raw_product, 0.0);
        assert_eq!(state.verdict, Verdict::NotViable);
        assert_eq!(state.color, DisplayColor::Red400);
    }

    #[test]
    fn product_is_monotonic_in_each_question() {
        for question in catalog().questions() {
            let mut by_value: Vec<_> = question.options.iter().collect();
            by_value.sort_by(|a, b| a.value.total_cmp(&b.value));

            let mut previous = f64::MIN;
            for option in by_value {
                let mut options = EXAMPLE_OPTIONS;
                options[question.id.0] = option.id.0;
                let raw = compute_raw_product(&answered(options).get_all_selections());
                assert!(raw >= previous, "{} decreased at {}", question.key, option.label);
                previous = raw;
            }
        }
    }

    #[test]
    fn product_ignores_slot_order() {
        let store = answered(EXAMPLE_OPTIONS);
        let forward = store.get_all_selections();
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut rotated = forward.clone();
        rotated.rotate_left(3);

        let expected = compute_raw_product(&forward);
        assert!(approx_eq(compute_raw_product(&reversed), expected));
        assert!(approx_eq(compute_raw_product(&rotated), expected));
    }

    #[test]
    fn threshold_boundaries() {
        assert_eq!(classify(0.0), Verdict::Pending);
        assert_eq!(classify(4.0), Verdict::ScaleUp);
        assert_eq!(classify(3.999_999), Verdict::SelfFund);
        assert_eq!(classify(2.0), Verdict::SelfFund);
        assert_eq!(classify(1.999_999), Verdict::NotViable);
        assert_eq!(classify(f64::MIN_POSITIVE), Verdict::NotViable);
    }

    #[test]
    fn classification_is_idempotent() {
        for score in [0.0, 0.08, 2.0, 3.5, 4.0, 1.6e9] {
            let first = classify(score);
            assert_eq!(classify(score), first);
            assert_eq!(color_for(first), color_for(classify(score)));
        }
    }

    #[test]
    fn evaluate_does_not_touch_the_snapshot() {
        let store = answered(EXAMPLE_OPTIONS);
        let selections = store.get_all_selections();
        let first = evaluate(&selections);
        let second = evaluate(&selections);
        assert_eq!(first, second);
        assert_eq!(store.answered_count(), 7);
    }

    #[test]
    fn labels_and_tokens() {
        assert_eq!(Verdict::ScaleUp.label(), "Scale Up");
        assert_eq!(Verdict::SelfFund.label(), "Self-Fund");
        assert_eq!(Verdict::NotViable.label(), "Not viable");
        assert_eq!(Verdict::Pending.label(), "TBD");
        assert_eq!(color_for(Verdict::ScaleUp).token(), "green-400");
        assert_eq!(color_for(Verdict::SelfFund).token(), "green-200");
        assert_eq!(color_for(Verdict::Pending).token(), "stone-200");
        assert_eq!(color_for(Verdict::NotViable).token(), "red-400");
    }
}

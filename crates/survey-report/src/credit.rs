//! Enjoyment versus perceived credit for open-source tasks
//!
//! The responses table stores these answers in wide form, one column per
//! `kind-kind_question` pair (for example `credit-credit_fixing_bugs`). They
//! are reshaped into long rows and summarised per task with a bootstrap
//! interval around each mean.

use crate::{
    dataset::Table,
    figures::{Axes, BarSeries, Figure, Layer},
    Result,
};
use rand::Rng;
use survey_confidence::{BootstrapMean, ConfidenceLevel};
use survey_core::utils::mean;
use tracing::{debug, instrument, warn};

/// The two questions asked about every task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Credit,
    Enjoyment,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Credit, Kind::Enjoyment];

    fn parse(s: &str) -> Option<Self> {
        match s {
            "credit" => Some(Self::Credit),
            "enjoyment" => Some(Self::Enjoyment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Enjoyment => "enjoyment",
        }
    }

    /// Legend text
    pub fn legend(&self) -> &'static str {
        match self {
            Self::Credit => "Perceived\nCredit",
            Self::Enjoyment => "Enjoyment",
        }
    }
}

/// One ordinal answer in long form
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub participant: usize,
    pub question: String,
    pub kind: Kind,
    pub value: f64,
}

/// Split a wide column name into its question and kind
///
/// Returns `None` for columns that are not credit/enjoyment answers.
pub fn parse_column(name: &str) -> Option<(String, Kind)> {
    if !(name.contains("enjoyment") || name.contains("credit")) {
        return None;
    }
    let (kind, rest) = name.split_once('-')?;
    let kind_tag = Kind::parse(kind)?;
    let question = rest
        .replace(&format!("{kind}_"), "")
        .replace("manage_comm", "managing_comm");
    Some((question, kind_tag))
}

/// Display label for a question identifier
pub fn question_label(question: &str) -> String {
    let label = match question {
        "fixing_bugs" => "Fixing Bugs",
        "infrastructure" => "Infrastructure / Build Systems",
        "managing_communities" => "Managing Communities",
        "responding_to_issues" => "Responding to Issues",
        "reviewing_code" => "Reviewing Code",
        "reviewing_documentation" => "Reviewing Documentation",
        "writing_code" => "Writing Code",
        "writing_documentation" => "Writing Documentation",
        other => {
            warn!(question = other, "No display label for question");
            return other.replace('_', " ");
        }
    };
    label.to_string()
}

/// Reshape credit/enjoyment columns into long rows, dropping missing answers
pub fn tidy_responses(table: &Table) -> Vec<Response> {
    let mut responses = Vec::new();
    for (name, values) in table.iter_columns() {
        let Some((question, kind)) = parse_column(name) else {
            continue;
        };
        for (participant, value) in values.iter().enumerate() {
            if let Some(value) = value.filter(|v| !v.is_nan()) {
                responses.push(Response {
                    participant,
                    question: question.clone(),
                    kind,
                    value,
                });
            }
        }
    }
    debug!(n = responses.len(), "Tidied credit/enjoyment responses");
    responses
}

/// Answers for one question and kind
fn values_for<'a>(responses: &'a [Response], question: &'a str, kind: Kind) -> impl Iterator<Item = f64> + 'a {
    responses
        .iter()
        .filter(move |r| r.kind == kind && r.question == question)
        .map(|r| r.value)
}

/// Questions ordered by mean perceived credit, highest first
///
/// Questions nobody rated for credit are left out. Ties keep column order.
pub fn questions_by_credit(responses: &[Response]) -> Vec<String> {
    let mut questions: Vec<String> = Vec::new();
    for r in responses {
        if r.kind == Kind::Credit && !questions.contains(&r.question) {
            questions.push(r.question.clone());
        }
    }

    let mut ranked: Vec<(String, f64)> = questions
        .into_iter()
        .map(|q| {
            let values: Vec<f64> = values_for(responses, &q, Kind::Credit).collect();
            let m = mean(&values);
            (q, m)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(q, _)| q).collect()
}

/// Mean answer per question and kind with bootstrap error bars
#[instrument(skip_all, fields(n_responses = responses.len()))]
pub fn credit_enjoyment_figure<R: Rng + ?Sized>(
    responses: &[Response],
    bootstrap: &BootstrapMean,
    level: ConfidenceLevel,
    rng: &mut R,
) -> Result<Figure> {
    let questions = questions_by_credit(responses);

    let mut series = Vec::with_capacity(Kind::ALL.len());
    for kind in Kind::ALL {
        let mut heights = Vec::with_capacity(questions.len());
        let mut intervals = Vec::with_capacity(questions.len());
        for question in &questions {
            let values: Vec<f64> = values_for(responses, question, kind).collect();
            if values.is_empty() {
                heights.push(None);
                intervals.push(None);
                continue;
            }
            let ci = bootstrap.confidence_interval(&values, level, rng)?;
            heights.push(Some(ci.estimate));
            intervals.push(Some([ci.lower, ci.upper]));
        }
        series.push(BarSeries {
            label: kind.legend().to_string(),
            heights,
            intervals,
        });
    }

    Ok(Figure::new("plot_credit_enjoyment")
        .with_title("Enjoyment vs. Perceived Credit\nReceived for Open-Source Tasks")
        .with_axes(Axes {
            x_tick_rotation: Some(45.0),
            ..Axes::labelled("Task", "Ordinal Response\n(1: not at all, 5: a lot)")
        })
        .with_layer(Layer::GroupedBar {
            categories: questions.iter().map(|q| question_label(q)).collect(),
            series,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_parse_column() {
        assert_eq!(
            parse_column("credit-credit_fixing_bugs"),
            Some(("fixing_bugs".to_string(), Kind::Credit))
        );
        assert_eq!(
            parse_column("enjoyment-enjoyment_manage_communities"),
            Some(("managing_communities".to_string(), Kind::Enjoyment))
        );
        assert_eq!(parse_column("docs-usual"), None);
        assert_eq!(parse_column("credit_no_dash"), None);
    }

    #[test]
    fn test_question_label() {
        assert_eq!(question_label("writing_code"), "Writing Code");
        assert_eq!(question_label("infrastructure"), "Infrastructure / Build Systems");
        assert_eq!(question_label("giving_talks"), "giving talks");
    }

    fn table() -> Table {
        Table::from_columns(vec![
            ("docs-usual".to_string(), vec![Some(10.0), Some(20.0), Some(5.0)]),
            ("credit-credit_fixing_bugs".to_string(), vec![Some(2.0), Some(3.0), None]),
            ("enjoyment-enjoyment_fixing_bugs".to_string(), vec![Some(4.0), Some(4.0), Some(5.0)]),
            ("credit-credit_writing_code".to_string(), vec![Some(5.0), Some(4.0), Some(5.0)]),
            ("enjoyment-enjoyment_writing_code".to_string(), vec![Some(3.0), None, None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_tidy_drops_missing() {
        let responses = tidy_responses(&table());
        assert_eq!(responses.len(), 9);
        assert!(responses.iter().all(|r| r.question == "fixing_bugs" || r.question == "writing_code"));
    }

    #[test]
    fn test_questions_ordered_by_credit() {
        let responses = tidy_responses(&table());
        assert_eq!(questions_by_credit(&responses), vec!["writing_code", "fixing_bugs"]);
    }

    #[test]
    fn test_figure_means() {
        let responses = tidy_responses(&table());
        let mut rng = StdRng::seed_from_u64(10);
        let figure = credit_enjoyment_figure(
            &responses,
            &BootstrapMean::new().with_resamples(100),
            ConfidenceLevel::NINETY_FIVE,
            &mut rng,
        )
        .unwrap();

        match &figure.layers[0] {
            Layer::GroupedBar { categories, series } => {
                assert_eq!(categories, &vec!["Writing Code".to_string(), "Fixing Bugs".to_string()]);
                assert_eq!(series[0].label, "Perceived\nCredit");
                assert_eq!(series[1].heights[0], Some(3.0));
                // A single answer collapses its interval to the point
                assert_eq!(series[1].intervals[0], Some([3.0, 3.0]));
                assert_eq!(series[1].heights[1], Some(13.0 / 3.0));
            }
            other => panic!("unexpected layer {other:?}"),
        }
    }
}

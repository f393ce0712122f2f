use colored::Colorize;
use serde::Serialize;

use std::collections::BTreeMap;

use crate::{Classifier, Sample};
use crate::decision_tree::LabelCounts;
use crate::error::Result;

const WIDTH: usize = 8;


/// Convert label counts into integer percentages, e.g. `"66%"`.
/// Each percentage is `floor(count / total * 100)`,
/// so the percentages may sum to less than `100`.
pub fn percentages(counts: &LabelCounts) -> BTreeMap<String, String> {
    let total = counts.values().sum::<usize>() as f64;
    counts.iter()
        .map(|(label, &n)| {
            let percent = (n as f64 / total * 100.0) as u64;
            (label.clone(), format!("{percent}%"))
        })
        .collect()
}


/// The outcome for a single test row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowOutcome {
    /// The label of the test row.
    pub actual: String,
    /// The predicted label.
    pub predicted: String,
    /// Label percentages of the leaf the row reached.
    pub distribution: BTreeMap<String, String>,
}


impl RowOutcome {
    /// Returns `true` if the prediction equals the actual label.
    #[inline]
    pub fn is_correct(&self) -> bool {
        self.actual == self.predicted
    }
}


/// Struct `Evaluation` holds the per-row outcomes
/// of a classifier on a test sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Outcomes, in the order of the test rows.
    pub outcomes: Vec<RowOutcome>,
    /// Number of correct predictions.
    pub correct: usize,
    /// Fraction of correct predictions.
    /// `None` for an empty test sample.
    pub accuracy: Option<f64>,
}


impl Evaluation {
    /// Classify every row of `test` with `f`.
    pub fn new<C>(f: &C, test: &Sample) -> Result<Self>
        where C: Classifier
    {
        let outcomes = test.iter()
            .map(|row| -> Result<RowOutcome> {
                let counts = f.distribution(row.features())?;
                let outcome = RowOutcome {
                    actual: row.label().to_string(),
                    predicted: f.predict(row.features())?,
                    distribution: percentages(counts),
                };
                Ok(outcome)
            })
            .collect::<Result<Vec<_>>>()?;

        let correct = outcomes.iter()
            .filter(|outcome| outcome.is_correct())
            .count();
        let accuracy = if outcomes.is_empty() {
            None
        } else {
            Some(correct as f64 / outcomes.len() as f64)
        };

        Ok(Self { outcomes, correct, accuracy })
    }


    /// Returns the report as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }


    /// Print the report to the standard output.
    pub fn print(&self) {
        for outcome in self.outcomes.iter() {
            let distribution = outcome.distribution.iter()
                .map(|(label, p)| format!("{label}: {p}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "Actual: {}. Predicted: {{{}}}",
                outcome.actual.bold(),
                distribution,
            );
            if !outcome.is_correct() {
                println!("{}", "Wrong Guess!".bold().red());
            }
        }

        let total = self.outcomes.len();
        match self.accuracy {
            Some(acc) => println!(
                "{}  {:>WIDTH$}",
                format!("[ACC. {}/{}]", self.correct, total).bold().green(),
                format!("{acc:.4}").bold().cyan(),
            ),
            None => println!("{}", "[ACC. no test rows]".bold().yellow()),
        }
    }
}

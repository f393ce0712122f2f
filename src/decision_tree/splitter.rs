//! Search for the question that maximizes the information gain.
use rayon::prelude::*;

use std::collections::HashSet;

use crate::error::Result;
use crate::sample::{FeatureValue, Row, ValueKey};
use super::criterion::*;
use super::question::*;


/// The outcome of a split search.
/// `question` is `None` (and `gain` is `0`) when no question
/// separates the rows with a positive gain.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSplit {
    /// Information gain of `question`.
    pub gain: f64,
    /// The chosen question.
    pub question: Option<Question>,
}


impl BestSplit {
    #[inline]
    fn none() -> Self {
        Self { gain: 0.0, question: None }
    }


    /// Replace `self` by `(gain, question)` if `gain` is positive
    /// and at least as large as the current gain.
    /// On ties the later candidate wins.
    #[inline]
    fn offer(&mut self, gain: f64, question: Question) {
        if gain > 0.0 && gain >= self.gain {
            self.gain = gain;
            self.question = Some(question);
        }
    }


    /// Fold `other` into `self` with the same rule as `offer`,
    /// treating `other` as the later candidate.
    #[inline]
    fn merge(mut self, other: Self) -> Self {
        if let Some(question) = other.question {
            self.offer(other.gain, question);
        }
        self
    }
}


/// Returns the distinct values of `column` in `rows`,
/// in the order of their first occurrence.
pub fn distinct_values<'a>(rows: &[&'a Row], column: usize)
    -> Vec<&'a FeatureValue>
{
    let mut seen = HashSet::new();
    rows.iter()
        .filter_map(|row| row.features().get(column))
        .filter(|value| seen.insert(ValueKey::from(*value)))
        .collect()
}


/// Finds the question with the largest information gain.
///
/// Columns are visited in ascending order, and the values of a column
/// in the order of [`distinct_values`].
/// A candidate that leaves one side empty is skipped.
/// A candidate whose gain equals the best gain so far replaces it.
pub fn find_best_split(rows: &[&Row]) -> Result<BestSplit> {
    let n_feature = n_features(rows);
    if n_feature == 0 { return Ok(BestSplit::none()); }

    let current_uncertainty = gini(rows)?;
    let mut best = BestSplit::none();
    for column in 0..n_feature {
        best = best.merge(best_in_column(rows, column, current_uncertainty)?);
    }
    Ok(best)
}


/// Same as [`find_best_split`], but searches the columns in parallel.
/// The per-column winners are merged in ascending column order,
/// so the result equals the one of [`find_best_split`].
pub fn par_find_best_split(rows: &[&Row]) -> Result<BestSplit> {
    let n_feature = n_features(rows);
    if n_feature == 0 { return Ok(BestSplit::none()); }

    let current_uncertainty = gini(rows)?;
    let winners = (0..n_feature).into_par_iter()
        .map(|column| best_in_column(rows, column, current_uncertainty))
        .collect::<Result<Vec<_>>>()?;

    let best = winners.into_iter()
        .fold(BestSplit::none(), BestSplit::merge);
    Ok(best)
}


/// The best question on a single column.
fn best_in_column(rows: &[&Row], column: usize, current_uncertainty: f64)
    -> Result<BestSplit>
{
    let mut best = BestSplit::none();
    for value in distinct_values(rows, column) {
        let question = Question::new(column, value.clone());
        let (true_rows, false_rows) = partition(rows, &question)?;

        if true_rows.is_empty() || false_rows.is_empty() { continue; }

        let gain = info_gain(&true_rows, &false_rows, current_uncertainty)?;
        best.offer(gain, question);
    }
    Ok(best)
}


#[inline]
fn n_features(rows: &[&Row]) -> usize {
    rows.first()
        .map(|row| row.features().len())
        .unwrap_or(0)
}

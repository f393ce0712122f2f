//! Impurity measures used to grow a decision tree.
use std::collections::BTreeMap;

use crate::error::{Result, TreeError};
use crate::sample::Row;


/// Mapping from a label to the number of rows carrying it.
/// Iterates in ascending label order.
pub type LabelCounts = BTreeMap<String, usize>;


/// Count the rows per label.
/// The counts sum to `rows.len()`; an empty input gives an empty map.
pub fn class_counts(rows: &[&Row]) -> LabelCounts {
    let mut counts = LabelCounts::new();
    for row in rows {
        *counts.entry(row.label().to_string()).or_insert(0) += 1;
    }
    counts
}


/// Returns the Gini impurity `1 - Σ p_y²` of `rows`.
///
/// The result lies in `[0, 1 - 1/k]` for `k` distinct labels,
/// and is `0` iff every row has the same label.
/// An empty row set has no impurity and is rejected.
pub fn gini(rows: &[&Row]) -> Result<f64> {
    if rows.is_empty() {
        return Err(TreeError::PreconditionViolation(
            "gini impurity of an empty row set"
        ));
    }
    let total = rows.len() as f64;
    let correct = class_counts(rows)
        .values()
        .map(|&n| (n as f64 / total).powi(2))
        .sum::<f64>();

    Ok(1.0 - correct)
}


/// Returns the information gain of splitting a node
/// whose impurity is `current_uncertainty`
/// into `left` and `right`.
/// Both sides must be non-empty.
pub fn info_gain(left: &[&Row], right: &[&Row], current_uncertainty: f64)
    -> Result<f64>
{
    if left.is_empty() || right.is_empty() {
        return Err(TreeError::PreconditionViolation(
            "information gain of a split with an empty side"
        ));
    }
    let p = left.len() as f64 / (left.len() + right.len()) as f64;

    Ok(current_uncertainty - p * gini(left)? - (1.0 - p) * gini(right)?)
}

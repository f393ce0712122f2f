//! Defines the behavior of a trained classifier.
use crate::error::{Result, TreeError};
use crate::decision_tree::LabelCounts;
use crate::sample::{FeatureValue, Sample};


/// A trait that defines the behavor of classifier.
/// You only need to implement `distribution` method.
pub trait Classifier {
    /// Returns the label counts the classifier holds
    /// for the feature values `features`.
    fn distribution(&self, features: &[FeatureValue]) -> Result<&LabelCounts>;


    /// Predicts the label of `features`.
    /// See [`majority_label`] for the tie-breaking rule.
    fn predict(&self, features: &[FeatureValue]) -> Result<String> {
        let counts = self.distribution(features)?;
        let label = majority_label(counts)
            .ok_or(TreeError::PreconditionViolation(
                "prediction from an empty label distribution"
            ))?;
        Ok(label.to_string())
    }


    /// Predicts the labels of every row of `sample`.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<String>> {
        sample.iter()
            .map(|row| self.predict(row.features()))
            .collect()
    }
}


/// Returns the label with the highest count.
/// If several labels share the highest count,
/// the lexicographically smallest one is returned.
/// Returns `None` for empty counts.
pub fn majority_label(counts: &LabelCounts) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    // `LabelCounts` iterates in ascending label order,
    // so a strict comparison keeps the smallest label among ties.
    for (label, &n) in counts {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((label, n));
        }
    }
    best.map(|(label, _)| label)
}

//! This directory provides the presentation side of a trained tree:
//! - Evaluation reports on a test sample
//! - Label percentages of a leaf
//! - An input form that validates feature values

/// Defines the evaluation report.
pub mod report;

/// Defines the input form.
pub mod form;


pub use report::{
    percentages,
    Evaluation,
    RowOutcome,
};

pub use form::{FeatureForm, DEFAULT_RANGE};

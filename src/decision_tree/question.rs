//! This file defines the split rule (a "question") of a decision tree.
use std::fmt;

use crate::error::{Result, TreeError};
use crate::sample::{FeatureValue, Row};


/// A binary test on a single column.
///
/// - For a numeric reference value,
///   a row matches iff its value is `>=` the reference.
/// - For a categorical reference value,
///   a row matches iff its value equals the reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub(crate) column: usize,
    pub(crate) value: FeatureValue,
}


impl Question {
    /// Construct a new question on `column` with reference `value`.
    #[inline]
    pub fn new(column: usize, value: FeatureValue) -> Self {
        Self { column, value }
    }


    /// Returns the column index this question tests.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }


    /// Returns the reference value.
    #[inline]
    pub fn value(&self) -> &FeatureValue {
        &self.value
    }


    /// Answers the question for the feature values `features`.
    ///
    /// Fails with [`TreeError::Schema`] if `features` is too short
    /// or holds a value of another kind at the tested column.
    pub fn matches(&self, features: &[FeatureValue]) -> Result<bool> {
        let value = features.get(self.column)
            .ok_or_else(|| TreeError::Schema(format!(
                "the row has {n} features, but column {c} is tested",
                n = features.len(),
                c = self.column,
            )))?;

        match (&self.value, value) {
            (FeatureValue::Numeric(threshold), FeatureValue::Numeric(x)) => {
                Ok(x >= threshold)
            },
            (FeatureValue::Categorical(reference), FeatureValue::Categorical(x)) => {
                Ok(x == reference)
            },
            (reference, x) => Err(TreeError::Schema(format!(
                "column {c} holds a {a} value, but the rule expects {b}",
                c = self.column,
                a = x.kind(),
                b = reference.kind(),
            ))),
        }
    }


    /// Returns a printable form of this question
    /// that uses the column names in `header`.
    #[inline]
    pub fn describe<'a>(&'a self, header: &'a [String])
        -> QuestionDisplay<'a>
    {
        QuestionDisplay { question: self, header }
    }


    /// The comparison operator of this question.
    #[inline]
    pub(crate) fn operator(&self) -> &'static str {
        if self.value.is_numeric() { ">=" } else { "==" }
    }
}


/// A [`Question`] together with the column names.
pub struct QuestionDisplay<'a> {
    question: &'a Question,
    header: &'a [String],
}


impl fmt::Display for QuestionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = self.question.column;
        match self.header.get(column) {
            Some(name) => write!(
                f, "Is {name} {op} {value}?",
                op = self.question.operator(),
                value = self.question.value,
            ),
            None => write!(
                f, "Is column {column} {op} {value}?",
                op = self.question.operator(),
                value = self.question.value,
            ),
        }
    }
}


/// Splits `rows` into the rows that match `question` and those that don't.
/// Each part keeps the relative order of `rows`.
pub fn partition<'a>(rows: &[&'a Row], question: &Question)
    -> Result<(Vec<&'a Row>, Vec<&'a Row>)>
{
    let mut true_rows = Vec::new();
    let mut false_rows = Vec::new();
    for &row in rows {
        if question.matches(row.features())? {
            true_rows.push(row);
        } else {
            false_rows.push(row);
        }
    }
    Ok((true_rows, false_rows))
}

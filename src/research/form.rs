use std::ops::RangeInclusive;

use crate::error::{Result, TreeError};
use crate::sample::FeatureValue;


/// The range every form value must lie in, by default.
pub const DEFAULT_RANGE: RangeInclusive<i64> = 1..=5;


/// An input form with one integer field per feature.
/// `FeatureForm` turns the raw text of the fields into feature values
/// that can be passed to a classifier.
///
/// # Example
/// ```
/// use minitree::prelude::*;
///
/// let form = FeatureForm::new(["Economy", "Health"]);
/// let values = form.parse(&["3", "5"]).unwrap();
/// assert_eq!(values, vec![FeatureValue::Numeric(3.0), 5.0.into()]);
///
/// assert!(form.parse(&["3", "9"]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FeatureForm {
    fields: Vec<String>,
    range: RangeInclusive<i64>,
}


impl FeatureForm {
    /// Construct a form whose fields are named `fields`.
    /// The accepted range is `1..=5`.
    pub fn new<I, S>(fields: I) -> Self
        where I: IntoIterator<Item = S>,
              S: ToString,
    {
        let fields = fields.into_iter()
            .map(|field| field.to_string())
            .collect();
        Self { fields, range: DEFAULT_RANGE, }
    }


    /// Set the accepted range of every field.
    pub fn range(mut self, range: RangeInclusive<i64>) -> Self {
        self.range = range;
        self
    }


    /// Returns the field names.
    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.fields[..]
    }


    /// Returns the label shown next to the `i`-th field,
    /// e.g. `Economy (1-5):`.
    /// Returns `None` if the form has no `i`-th field.
    pub fn prompt(&self, i: usize) -> Option<String> {
        let name = self.fields.get(i)?;
        let prompt = format!(
            "{name} ({lo}-{hi}):",
            lo = self.range.start(),
            hi = self.range.end(),
        );
        Some(prompt)
    }


    /// The message shown when some field is rejected.
    pub fn rejection_message(&self) -> String {
        format!(
            "Please enter all values between {} and {}.",
            self.range.start(),
            self.range.end(),
        )
    }


    /// Parse the raw text of every field.
    ///
    /// Fails with [`TreeError::Form`] if the number of inputs
    /// differs from the number of fields, or if some input
    /// is not an integer inside the accepted range.
    pub fn parse<S>(&self, inputs: &[S]) -> Result<Vec<FeatureValue>>
        where S: AsRef<str>
    {
        if inputs.len() != self.fields.len() {
            return Err(TreeError::Form {
                field: "*".into(),
                message: format!(
                    "expected {} values, got {}",
                    self.fields.len(),
                    inputs.len(),
                ),
            });
        }

        self.fields.iter()
            .zip(inputs)
            .map(|(field, input)| -> Result<FeatureValue> {
                let input = input.as_ref().trim();
                let value = input.parse::<i64>()
                    .map_err(|_| TreeError::Form {
                        field: field.clone(),
                        message: format!("`{input}` is not an integer"),
                    })?;
                if !self.range.contains(&value) {
                    return Err(TreeError::Form {
                        field: field.clone(),
                        message: format!(
                            "{value} is outside of {}..={}",
                            self.range.start(),
                            self.range.end(),
                        ),
                    });
                }
                Ok(FeatureValue::from(value))
            })
            .collect()
    }
}

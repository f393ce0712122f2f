use polars::prelude::*;

use std::ops::Index;
use std::slice::Iter;

use crate::error::{Result, TreeError};
use super::feature_struct::*;


/// A labeled example.
/// The feature values come first, the label is the last column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    features: Vec<FeatureValue>,
    label: String,
}


impl Row {
    /// Construct a new row from its feature values and its label.
    pub fn new<T>(features: Vec<FeatureValue>, label: T) -> Self
        where T: ToString
    {
        Self { features, label: label.to_string(), }
    }


    /// Returns the feature values of this row.
    #[inline]
    pub fn features(&self) -> &[FeatureValue] {
        &self.features[..]
    }


    /// Returns the label of this row.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }


    /// Returns the number of columns, the label included.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.features.len() + 1
    }
}


/// Struct `Sample` holds the labeled rows
/// together with the column names.
/// The last name of `header` is the name of the label column.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    header: Vec<String>,
    rows: Vec<Row>,
}


impl Sample {
    /// Construct a new `Sample`.
    ///
    /// Fails with [`TreeError::Schema`] when
    /// - `header` does not have exactly one more entry
    ///   than the rows have features,
    /// - two rows have different lengths, or
    /// - a feature column mixes numeric and categorical values.
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        if header.is_empty() {
            return Err(TreeError::Schema(
                "the header must name at least the label column".into()
            ));
        }
        let n_feature = header.len() - 1;

        for (i, row) in rows.iter().enumerate() {
            if row.features.len() != n_feature {
                return Err(TreeError::Schema(format!(
                    "row {i} has {got} columns, expected {expected}",
                    got = row.n_columns(),
                    expected = header.len(),
                )));
            }
        }


        if let Some(first) = rows.first() {
            for (j, reference) in first.features.iter().enumerate() {
                let mismatch = rows.iter()
                    .position(|row| {
                        row.features[j].is_numeric() != reference.is_numeric()
                    });
                if let Some(i) = mismatch {
                    return Err(TreeError::Schema(format!(
                        "column `{name}` mixes {a} and {b} values (row {i})",
                        name = header[j],
                        a = reference.kind(),
                        b = rows[i].features[j].kind(),
                    )));
                }
            }
        }

        Ok(Self { header, rows })
    }


    /// Construct a `Sample` with the dummy header
    /// `Feat. [1]`, ..., `Feat. [n]`, `class`.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let n_feature = rows.first()
            .map(|row| row.features.len())
            .unwrap_or(0);
        let header = (1..=n_feature)
            .map(|i| format!("Feat. [{i}]"))
            .chain(std::iter::once("class".to_string()))
            .collect::<Vec<_>>();
        Self::new(header, rows)
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// The last column of `data` is the label column.
    /// Numeric columns become `FeatureValue::Numeric`,
    /// string columns become `FeatureValue::Categorical`.
    pub fn from_dataframe(data: DataFrame) -> Result<Self> {
        let (n_sample, n_column) = data.shape();
        if n_column == 0 {
            return Err(TreeError::Schema(
                "the data frame has no columns".into()
            ));
        }

        let columns = data.get_columns();
        let header = columns.iter()
            .map(|series| series.name().to_string())
            .collect::<Vec<_>>();

        let mut features = vec![Vec::with_capacity(n_column - 1); n_sample];
        for series in &columns[..n_column - 1] {
            let values = feature_column(series)?;
            for (row, value) in features.iter_mut().zip(values) {
                row.push(value);
            }
        }

        let labels = series_to_strings(&columns[n_column - 1])?;
        let rows = features.into_iter()
            .zip(labels)
            .map(|(x, y)| Row::new(x, y))
            .collect::<Vec<_>>();

        Self::new(header, rows)
    }


    /// Returns the column names. The last entry names the label.
    #[inline]
    pub fn header(&self) -> &[String] {
        &self.header[..]
    }


    /// Returns the feature names.
    #[inline]
    pub fn feature_names(&self) -> &[String] {
        &self.header[..self.header.len() - 1]
    }


    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows[..]
    }


    /// Returns an iterator over the rows.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Row> {
        self.rows.iter()
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.header.len() - 1)
    }


    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if the sample has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Returns the labels, in row order.
    pub fn target(&self) -> Vec<&str> {
        self.rows.iter()
            .map(Row::label)
            .collect()
    }


    /// Returns a new `Sample` that holds the rows at `indices`,
    /// in the order they appear in `indices`.
    pub(crate) fn subset(&self, indices: &[usize]) -> Self {
        let rows = indices.iter()
            .map(|&i| self.rows[i].clone())
            .collect();
        Self { header: self.header.clone(), rows, }
    }
}


impl Index<usize> for Sample {
    type Output = Row;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.rows[idx]
    }
}


impl<'a> IntoIterator for &'a Sample {
    type Item = &'a Row;
    type IntoIter = Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}


/// Convert a feature column of a data frame into feature values.
fn feature_column(series: &Series) -> Result<Vec<FeatureValue>> {
    let name = series.name();
    if series.dtype().is_numeric() {
        let series = series.cast(&DataType::Float64)?;
        series.f64()?
            .into_iter()
            .map(|x| {
                x.map(FeatureValue::Numeric)
                    .ok_or_else(|| missing_value(name))
            })
            .collect()
    } else if series.dtype() == &DataType::Utf8 {
        series.utf8()?
            .into_iter()
            .map(|x| {
                x.map(FeatureValue::from)
                    .ok_or_else(|| missing_value(name))
            })
            .collect()
    } else {
        Err(TreeError::Schema(format!(
            "column `{name}` has unsupported dtype {dtype}",
            dtype = series.dtype(),
        )))
    }
}


/// Convert the label column of a data frame into strings.
fn series_to_strings(series: &Series) -> Result<Vec<String>> {
    let name = series.name().to_string();
    let series = series.cast(&DataType::Utf8)?;
    series.utf8()?
        .into_iter()
        .map(|y| {
            y.map(str::to_string)
                .ok_or_else(|| missing_value(&name))
        })
        .collect()
}


fn missing_value(name: &str) -> TreeError {
    TreeError::Schema(format!("column `{name}` has a missing value"))
}

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::debug;

use crate::error::{Result, TreeError};
use super::sample_struct::{Row, Sample};
use super::feature_struct::FeatureValue;


/// The column separator used by default.
pub const DEFAULT_DELIMITER: char = ';';


/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimited text file to [`Sample`].
/// The last column of the file is the label.
/// # Example
/// The following code reads a `;`-separated file with a header row.
/// ```no_run
/// use minitree::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("Data.csv")
///     .delimiter(';')
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    delimiter: char,
    has_header: bool,
    infer_categorical: bool,
}


impl<P> SampleReader<P> {
    /// Construct a new instance of [`SampleReader`].
    /// By default, [`SampleReader`] sets the parameters as follows;
    /// ```text
    /// delimiter: ';',
    /// has_header: true,
    /// infer_categorical: false,
    /// ```
    pub fn new() -> Self {
        Self {
            file: None,
            delimiter: DEFAULT_DELIMITER,
            has_header: true,
            infer_categorical: false,
        }
    }


    /// Set the column separator.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `true`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// If `true`, a feature column that is not entirely numeric
    /// is read as a categorical column.
    /// If `false` (default), a non-numeric feature value is an error.
    pub fn infer_categorical(mut self, flag: bool) -> Self {
        self.infer_categorical = flag;
        self
    }
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments, and returns `Sample`.
    /// This method consumes `self`.
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .as_ref()
            .ok_or_else(|| {
                TreeError::InvalidParameter("the file name is not set".into())
            })?;
        let file = File::open(file)?;
        self.parse(BufReader::new(file))
    }


    /// Parse delimited text from any buffered reader.
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<Sample> {
        let mut lines = reader.lines()
            .enumerate()
            .map(|(i, line)| line.map(|l| (i + 1, l)));

        let mut header = None;
        if self.has_header {
            if let Some(line) = lines.next() {
                let (_, line) = line?;
                header = Some(self.split(&line));
            }
        }


        // Each record keeps its line number for error messages.
        let mut records = Vec::new();
        for line in lines {
            let (lineno, line) = line?;
            if line.trim().is_empty() { continue; }
            records.push((lineno, self.split(&line)));
        }


        let n_column = header.as_ref()
            .or_else(|| records.first().map(|(_, cells)| cells))
            .map(|cells| cells.len())
            .ok_or_else(|| TreeError::Schema("the file is empty".into()))?;
        if n_column == 0 {
            return Err(TreeError::Schema("the file has no columns".into()));
        }

        for (lineno, cells) in records.iter() {
            if cells.len() != n_column {
                return Err(TreeError::Schema(format!(
                    "line {lineno} has {got} columns, expected {n_column}",
                    got = cells.len(),
                )));
            }
        }


        let header = header.unwrap_or_else(|| {
            (1..n_column)
                .map(|i| format!("Feat. [{i}]"))
                .chain(std::iter::once("class".to_string()))
                .collect()
        });


        let n_feature = n_column - 1;
        let categorical = (0..n_feature)
            .map(|j| {
                self.infer_categorical
                    && records.iter().any(|(_, cells)| {
                        FeatureValue::parse_numeric(&cells[j]).is_none()
                    })
            })
            .collect::<Vec<bool>>();


        let rows = records.into_iter()
            .map(|(lineno, mut cells)| -> Result<Row> {
                let label = cells.pop().unwrap_or_default();
                let features = cells.into_iter()
                    .enumerate()
                    .map(|(j, cell)| {
                        if categorical[j] {
                            return Ok(FeatureValue::Categorical(cell));
                        }
                        FeatureValue::parse_numeric(&cell)
                            .ok_or_else(|| TreeError::Schema(format!(
                                "line {lineno}: value `{cell}` of column \
                                 `{name}` is not numeric",
                                name = header[j],
                            )))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Row::new(features, label))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            rows = rows.len(),
            features = n_feature,
            "read a delimited sample"
        );

        Sample::new(header, rows)
    }


    fn split(&self, line: &str) -> Vec<String> {
        line.split(self.delimiter)
            .map(|cell| cell.trim().to_string())
            .collect()
    }
}

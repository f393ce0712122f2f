//! Defines the error type shared by every part of this crate.
use polars::prelude::PolarsError;


/// Errors produced while loading, training, or classifying.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The data does not follow the expected row/column layout,
    /// or a value cannot be compared with a split reference.
    #[error("schema error: {0}")]
    Schema(String),


    /// An impurity function received an empty row set.
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),


    /// Training or splitting was requested on a sample with no rows.
    #[error("the sample has no rows")]
    EmptySample,


    /// A builder received a parameter outside of its domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),


    /// A value typed into the input form was rejected.
    #[error("invalid value for `{field}`: {message}")]
    Form {
        /// Name of the offending field.
        field: String,
        /// What is wrong with the value.
        message: String,
    },


    /// Reading the data file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),


    /// Converting a `polars::DataFrame` failed.
    #[error(transparent)]
    Polars(#[from] PolarsError),


    /// Serializing a report failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


/// A `Result` alias whose error type is [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;

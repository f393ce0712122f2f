//! Struct `Sample` represents a labeled, in-memory table.

// Provides the tagged feature value.
pub(crate) mod feature_struct;
// Provides sample struct.
pub(crate) mod sample_struct;
// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use feature_struct::FeatureValue;
pub use sample_struct::{Row, Sample};
pub use sample_reader::{SampleReader, DEFAULT_DELIMITER};
pub use train_test::TrainTestSplit;

pub(crate) use feature_struct::ValueKey;

#![warn(missing_docs)]

//! 
//! A crate that grows a binary decision tree classifier
//! over a small, in-memory, labeled table.
//! 
//! The tree is grown greedily.
//! Each node asks the question `(column, value)` that maximizes
//! the information gain with respect to the Gini impurity:
//! 
//! - For a numeric value, a row answers "yes" iff its value is `>=` it.
//! - For a categorical value, a row answers "yes" iff it equals it.
//! 
//! A node becomes a leaf when no question has a positive gain,
//! and the leaf keeps the label counts of the rows that reached it.
//! 
//! The crate also provides a loader for `;`-separated files,
//! a train/test splitter, an evaluation report,
//! and an input form validator.

pub mod error;
pub mod sample;
pub mod decision_tree;
pub mod classifier;
pub mod research;
pub mod prelude;


pub use error::{Result, TreeError};

pub use sample::{
    FeatureValue,
    Row,
    Sample,
    SampleReader,
    TrainTestSplit,
};

pub use classifier::{Classifier, majority_label};

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Growth,
};

pub use research::{Evaluation, FeatureForm};

//! The files in `decision_tree/` directory define
//! the Gini decision tree and its classifier.

/// Defines the decision tree algorithm.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;

/// Defines the inner representations of `DecisionTreeClassifier`.
pub mod node;
pub mod criterion;
pub mod question;
pub mod splitter;


pub use builder::DecisionTreeBuilder;
pub use dtree::{build_tree, DecisionTree, Growth};
pub use dtree_classifier::{DecisionTreeClassifier, TreeDisplay};
pub use node::{BranchNode, LeafNode, Node};
pub use criterion::{class_counts, gini, info_gain, LabelCounts};
pub use question::{partition, Question, QuestionDisplay};
pub use splitter::{
    distinct_values,
    find_best_split,
    par_find_best_split,
    BestSplit,
};

//! Exports the standard structs and traits.
//! 
pub use crate::error::TreeError;


pub use crate::sample::{
    FeatureValue,
    Row,
    Sample,
    SampleReader,
    TrainTestSplit,
};


pub use crate::classifier::{
    Classifier,
    majority_label,
};


pub use crate::decision_tree::{
    // Growing a tree
    DecisionTree,
    DecisionTreeBuilder,
    Growth,


    // Trained tree
    DecisionTreeClassifier,
    Node,
    LabelCounts,
    Question,
};


pub use crate::research::{
    percentages,
    Evaluation,
    FeatureForm,
};

//! Defines the decision tree classifier.
use crate::Classifier;
use crate::error::{Result, TreeError};
use crate::sample::FeatureValue;

use super::criterion::LabelCounts;
use super::node::*;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree classifier.
/// This struct wraps the root `Node`
/// together with the number of features it was trained on.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeClassifier {
    root: Node,
    n_features: usize,
}


impl Classifier for DecisionTreeClassifier {
    fn distribution(&self, features: &[FeatureValue]) -> Result<&LabelCounts> {
        self.classify(features)
    }
}


impl DecisionTreeClassifier {
    /// Wrap `root`, grown over rows with `n_features` features.
    #[inline]
    pub(super) fn from_components(root: Node, n_features: usize) -> Self {
        Self { root, n_features }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of features of the training rows.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_features
    }


    /// Returns the label counts of the leaf that `features` reaches.
    ///
    /// Fails with [`TreeError::Schema`] if `features` does not have
    /// as many values as the training rows,
    /// even when the path never tests the missing columns.
    pub fn classify(&self, features: &[FeatureValue]) -> Result<&LabelCounts> {
        if features.len() != self.n_features {
            return Err(TreeError::Schema(format!(
                "the row has {got} features, expected {expected}",
                got = features.len(),
                expected = self.n_features,
            )));
        }
        self.root.classify(features)
    }


    /// Returns the length of the longest root-to-leaf path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns a printable, indented form of the tree.
    /// `header` names the columns the questions refer to.
    #[inline]
    pub fn display<'a>(&'a self, header: &'a [String]) -> TreeDisplay<'a> {
        TreeDisplay { root: &self.root, header }
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P, header: &[String])
        -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0, header).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


/// The text form of a [`DecisionTreeClassifier`].
pub struct TreeDisplay<'a> {
    root: &'a Node,
    header: &'a [String],
}


impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_text(f, self.header, "")
    }
}

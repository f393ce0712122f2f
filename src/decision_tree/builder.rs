use super::dtree::{DecisionTree, Growth};


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitree::prelude::*;
///
/// let tree = DecisionTreeBuilder::new()
///     .parallel(true)
///     .growth(Growth::WorkStack)
///     .build();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTreeBuilder {
    parallel: bool,
    growth: Growth,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// parallel: false,
    /// growth: Growth::Recursive,
    /// ```
    pub fn new() -> Self {
        Self { parallel: false, growth: Growth::Recursive, }
    }


    /// If `true`, the split search visits the feature columns
    /// in parallel. The grown tree does not change.
    #[inline]
    pub fn parallel(mut self, flag: bool) -> Self {
        self.parallel = flag;
        self
    }


    /// Set the way the tree is grown.
    /// See [`Growth`] for the options.
    #[inline]
    pub fn growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(self.parallel, self.growth)
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

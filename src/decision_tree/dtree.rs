use tracing::{debug, info};

use std::fmt;

use crate::error::{Result, TreeError};
use crate::sample::{Row, Sample};
use super::{
    criterion::*,
    node::*,
    question::*,
    splitter::*,
    dtree_classifier::DecisionTreeClassifier,
};


/// How [`DecisionTree`] grows a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// Grow each sub-tree by a recursive call.
    Recursive,
    /// Grow the tree from an explicit stack of pending row sets.
    /// The call stack does not grow with the tree depth.
    WorkStack,
}


impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Recursive => "Recursive",
            Self::WorkStack => "Work stack",
        };
        write!(f, "{name}")
    }
}


/// The Decision Tree algorithm.
/// Given a set of labeled training rows,
/// [`DecisionTree`] outputs a decision tree classifier
/// named [`DecisionTreeClassifier`].
///
/// Each node asks the question with the largest information gain
/// with respect to the Gini impurity.
/// A node becomes a leaf when no question has a positive gain.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::decision_tree::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("Data.csv")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new().build();
/// let f = tree.fit(&sample).unwrap();
///
/// let predictions = f.predict_all(&sample).unwrap();
/// let accuracy = sample.target()
///     .into_iter()
///     .zip(predictions)
///     .filter(|(y, p)| *y == p.as_str())
///     .count() as f64
///     / sample.len() as f64;
/// println!("accuracy (train) is: {accuracy}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTree {
    parallel: bool,
    growth: Growth,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(parallel: bool, growth: Growth) -> Self {
        Self { parallel, growth }
    }


    /// Grow a tree over all rows of `sample`.
    pub fn fit(&self, sample: &Sample) -> Result<DecisionTreeClassifier> {
        if sample.is_empty() {
            return Err(TreeError::EmptySample);
        }
        let rows = sample.iter().collect::<Vec<_>>();

        let root = match self.growth {
            Growth::Recursive => self.grow(rows, 0)?,
            Growth::WorkStack => self.grow_with_stack(rows)?,
        };

        let classifier = DecisionTreeClassifier::from_components(
            root, sample.shape().1
        );
        info!(
            rows = sample.len(),
            depth = classifier.depth(),
            leaves = classifier.n_leaves(),
            "grew a decision tree"
        );
        Ok(classifier)
    }


    #[inline]
    fn best_split(&self, rows: &[&Row]) -> Result<BestSplit> {
        if self.parallel {
            par_find_best_split(rows)
        } else {
            find_best_split(rows)
        }
    }


    /// Construct the sub-tree for `rows` recursively.
    fn grow(&self, rows: Vec<&Row>, depth: usize) -> Result<Node> {
        let BestSplit { gain, question } = self.best_split(&rows)?;
        debug!(depth, rows = rows.len(), gain, "grow a node");

        let question = match question {
            Some(question) if gain > 0.0 => question,
            _ => return Ok(leaf(&rows)),
        };

        // Both sides are non-empty since the search skips
        // questions that leave one side empty.
        let (true_rows, false_rows) = partition(&rows, &question)?;
        let true_branch = self.grow(true_rows, depth + 1)?;
        let false_branch = self.grow(false_rows, depth + 1)?;

        let branch = BranchNode::from_raw(
            question, Box::new(true_branch), Box::new(false_branch)
        );
        Ok(Node::Branch(branch))
    }


    /// Construct the tree for `rows` from an explicit stack.
    ///
    /// Every node gets a slot in an arena; a branch refers to
    /// its children by slot index. Children are always allocated
    /// after their parent, so assembling the slots from the last one
    /// to the first one sees every child before its parent.
    fn grow_with_stack(&self, rows: Vec<&Row>) -> Result<Node> {
        let mut slots: Vec<Slot> = vec![Slot::Pending];
        let mut stack = vec![(0_usize, rows, 0_usize)];

        while let Some((slot, rows, depth)) = stack.pop() {
            let BestSplit { gain, question } = self.best_split(&rows)?;
            debug!(depth, rows = rows.len(), gain, "grow a node");

            let question = match question {
                Some(question) if gain > 0.0 => question,
                _ => {
                    slots[slot] = Slot::Leaf(class_counts(&rows));
                    continue;
                },
            };

            let (true_rows, false_rows) = partition(&rows, &question)?;
            let t = slots.len();
            let f = t + 1;
            slots.push(Slot::Pending);
            slots.push(Slot::Pending);
            slots[slot] = Slot::Branch { question, t, f };

            stack.push((f, false_rows, depth + 1));
            stack.push((t, true_rows, depth + 1));
        }


        let mut nodes: Vec<Option<Node>> = vec![None; slots.len()];
        for (i, slot) in slots.into_iter().enumerate().rev() {
            let node = match slot {
                Slot::Leaf(counts) => Node::Leaf(LeafNode::from_raw(counts)),
                Slot::Branch { question, t, f } => {
                    let (true_branch, false_branch) = nodes[t].take()
                        .zip(nodes[f].take())
                        .ok_or(TreeError::PreconditionViolation(
                            "a child slot was not grown"
                        ))?;
                    let branch = BranchNode::from_raw(
                        question,
                        Box::new(true_branch),
                        Box::new(false_branch),
                    );
                    Node::Branch(branch)
                },
                Slot::Pending => {
                    return Err(TreeError::PreconditionViolation(
                        "a slot was left pending"
                    ));
                },
            };
            nodes[i] = Some(node);
        }

        nodes.swap_remove(0)
            .ok_or(TreeError::PreconditionViolation("the root was not grown"))
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Split criterion: Gini index\n\
            - Growth: {}\n\
            - Parallel split search: {}\n\
            ----------\
            ",
            self.growth,
            self.parallel,
        )
    }
}


/// A node of the tree under construction.
enum Slot {
    Pending,
    Leaf(LabelCounts),
    Branch { question: Question, t: usize, f: usize },
}


#[inline]
fn leaf(rows: &[&Row]) -> Node {
    Node::Leaf(LeafNode::from_raw(class_counts(rows)))
}


/// Grow a tree over `rows` by the recursive, sequential algorithm.
///
/// Returns a single leaf when no question separates `rows`
/// with a positive gain (e.g., pure rows, one row, no features).
pub fn build_tree(rows: &[&Row]) -> Result<Node> {
    if rows.is_empty() {
        return Err(TreeError::EmptySample);
    }
    DecisionTree::from_components(false, Growth::Recursive)
        .grow(rows.to_vec(), 0)
}

//! Defines the inner representation
//! of the Decision Tree class.
use std::fmt::{self, Write};

use crate::error::Result;
use crate::sample::FeatureValue;
use super::criterion::LabelCounts;
use super::question::Question;


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq)]
pub struct BranchNode {
    pub(super) question: Question,
    pub(super) true_branch: Box<Node>,
    pub(super) false_branch: Box<Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(
        question: Question,
        true_branch: Box<Node>,
        false_branch: Box<Node>,
    ) -> Self
    {
        Self { question, true_branch, false_branch, }
    }


    /// Returns the question asked at this node.
    #[inline]
    pub fn question(&self) -> &Question {
        &self.question
    }


    /// Returns the child for the rows that match the question.
    #[inline]
    pub fn true_branch(&self) -> &Node {
        &self.true_branch
    }


    /// Returns the child for the rows that do not match the question.
    #[inline]
    pub fn false_branch(&self) -> &Node {
        &self.false_branch
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub(super) predictions: LabelCounts,
}


impl LeafNode {
    /// Returns a `LeafNode` that holds the given label counts.
    #[inline]
    pub(crate) fn from_raw(predictions: LabelCounts) -> Self {
        Self { predictions }
    }


    /// Returns the label counts of the training rows
    /// that reached this leaf.
    #[inline]
    pub fn predictions(&self) -> &LabelCounts {
        &self.predictions
    }
}


impl Node {
    /// Walk down from `self` with `features`
    /// and return the label counts of the leaf reached.
    pub fn classify(&self, features: &[FeatureValue])
        -> Result<&LabelCounts>
    {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return Ok(&leaf.predictions),
                Node::Branch(branch) => {
                    node = if branch.question.matches(features)? {
                        &*branch.true_branch
                    } else {
                        &*branch.false_branch
                    };
                },
            }
        }
    }


    /// Returns the depth of the sub-tree rooted at `self`.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(b) => {
                1 + b.true_branch.depth().max(b.false_branch.depth())
            },
        }
    }


    /// Returns the number of leaves of the sub-tree rooted at `self`.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(b) => b.true_branch.leaves() + b.false_branch.leaves(),
        }
    }


    /// Write the indented text form of this sub-tree to `out`.
    pub(super) fn write_text<W: Write>(
        &self,
        out: &mut W,
        header: &[String],
        spacing: &str,
    ) -> fmt::Result
    {
        match self {
            Node::Leaf(leaf) => {
                writeln!(
                    out, "{spacing}Predict {}",
                    format_counts(&leaf.predictions)
                )
            },
            Node::Branch(b) => {
                writeln!(out, "{spacing}{}", b.question.describe(header))?;

                let deeper = format!("{spacing}  ");
                writeln!(out, "{spacing}--> True:")?;
                b.true_branch.write_text(out, header, &deeper)?;

                writeln!(out, "{spacing}--> False:")?;
                b.false_branch.write_text(out, header, &deeper)
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize, header: &[String])
        -> (Vec<String>, usize)
    {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{question}\" ];\n",
                    question = escape(&b.question.describe(header).to_string()),
                );

                let (l_info, next_id) = b.true_branch
                    .to_dot_info(id + 1, header);
                let (mut r_info, ret_id) = b.false_branch
                    .to_dot_info(next_id, header);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = escape(&format_counts(&l.predictions)),
                );

                (vec![info], id + 1)
            }
        }
    }
}


/// Format label counts as `{A: 2, B: 1}`.
pub(crate) fn format_counts(counts: &LabelCounts) -> String {
    let body = counts.iter()
        .map(|(label, n)| format!("{label}: {n}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}


fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}

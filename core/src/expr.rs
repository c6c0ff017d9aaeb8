//! Expression tree model.
//!
//! A tree is built once by the validator from untyped JSON, evaluated, and
//! dropped. Nodes own their children and are never mutated after construction.

use core::fmt;
use core::str::FromStr;

use serde::{Serialize, Serializer};

use crate::validator::ValidationError;

/// The closed set of arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Root,
}

impl OperatorKind {
    /// All operators, in the order they are advertised to clients.
    pub const ALL: [OperatorKind; 6] = [
        OperatorKind::Add,
        OperatorKind::Subtract,
        OperatorKind::Multiply,
        OperatorKind::Divide,
        OperatorKind::Power,
        OperatorKind::Root,
    ];

    /// Wire name of the operator (`"add"`, `"subtract"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            OperatorKind::Add => "add",
            OperatorKind::Subtract => "subtract",
            OperatorKind::Multiply => "multiply",
            OperatorKind::Divide => "divide",
            OperatorKind::Power => "power",
            OperatorKind::Root => "root",
        }
    }

    /// Comma-separated list of every supported operator name.
    pub fn supported_names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }

    /// Looks up an operator by its wire name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperatorKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ValidationError::UnsupportedOperator(s.to_string()))
    }
}

impl Serialize for OperatorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// An interior node: an operator applied to one or more arguments.
///
/// The argument list is never empty; [`Operation::new`] enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    op: OperatorKind,
    args: Vec<ExpressionNode>,
}

impl Operation {
    pub fn new(op: OperatorKind, args: Vec<ExpressionNode>) -> Result<Self, ValidationError> {
        if args.is_empty() {
            return Err(ValidationError::EmptyArgs(op));
        }
        Ok(Self { op, args })
    }

    pub fn op(&self) -> OperatorKind {
        self.op
    }

    pub fn args(&self) -> &[ExpressionNode] {
        &self.args
    }
}

/// A validated expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    /// A finite numeric leaf.
    Literal(f64),
    Operation(Operation),
}

impl ExpressionNode {
    /// Builds a literal leaf, or `None` if `value` is NaN or infinite.
    pub fn literal(value: f64) -> Option<Self> {
        value.is_finite().then_some(ExpressionNode::Literal(value))
    }

    /// Builds an operation node; fails if `args` is empty.
    pub fn operation(op: OperatorKind, args: Vec<ExpressionNode>) -> Result<Self, ValidationError> {
        Operation::new(op, args).map(ExpressionNode::Operation)
    }

    /// Nesting depth of the tree. A literal has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ExpressionNode::Literal(_) => 1,
            ExpressionNode::Operation(operation) => {
                1 + operation.args.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }
}

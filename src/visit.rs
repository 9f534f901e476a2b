//! Depth-first traversal.
//!
//! `Node::walk` offers each node to a `Visitor`, parent before children.
//! If the visitor asks to descend by returning `VisitMe::HoldThis(v)`, the
//! children are walked with `v`, then `v` is told that the subtree is over by
//! a call to `visit(None)`. That final call happens even if walking the
//! children panics, so visitors that maintain a stack stay balanced.
//!
//! ```
//! use estree::{Node, NodeKind, NodeRef};
//!
//! let program: estree::Program = estree::from_str(r#"{
//!     "type": "Program",
//!     "body": [{ "type": "EmptyStatement" }]
//! }"#).unwrap();
//!
//! let mut seen = vec![];
//! program.walk(&mut |node: Option<NodeRef>| {
//!     seen.push(node.map(|node| node.kind()));
//!     true
//! });
//! assert_eq!(seen, vec![
//!     Some(NodeKind::Program),
//!     Some(NodeKind::EmptyStatement),
//!     None,
//!     None,
//! ]);
//! ```

use crate::ast::*;
use crate::location::Version;

use std::fmt;

/// Whether a visitor wishes to enter the children of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisitMe<T> {
    /// Visit the children of this node with the enclosed visitor,
    /// then call its `visit(None)`.
    HoldThis(T),

    /// Skip the children of this node and don't report leaving it.
    DoneHere,
}

/// An object called for every node of a tree.
pub trait Visitor<'a> {
    /// Called with `Some(node)` when entering a node, and with `None` once the
    /// children of a node for which this visitor was returned have all been
    /// walked.
    fn visit<'v>(&'v mut self, node: Option<NodeRef<'a>>) -> VisitMe<&'v mut dyn Visitor<'a>>;
}

/// Closures act as visitors that descend whenever they return `true`.
impl<'a, F> Visitor<'a> for F
where
    F: FnMut(Option<NodeRef<'a>>) -> bool,
{
    fn visit<'v>(&'v mut self, node: Option<NodeRef<'a>>) -> VisitMe<&'v mut dyn Visitor<'a>> {
        if (*self)(node) {
            VisitMe::HoldThis(self)
        } else {
            VisitMe::DoneHere
        }
    }
}

/// Calls `visit(None)` when dropped.
struct LeaveGuard<'v, 'a> {
    visitor: &'v mut dyn Visitor<'a>,
}
impl<'v, 'a> Drop for LeaveGuard<'v, 'a> {
    fn drop(&mut self) {
        self.visitor.visit(None);
    }
}

/// Offer `node` to `visitor` and, if it wishes so, walk the children
/// with `children` before sending the leave sentinel.
pub fn walk_node<'a, F>(visitor: &mut dyn Visitor<'a>, node: NodeRef<'a>, children: F)
where
    F: FnOnce(&mut dyn Visitor<'a>),
{
    trace!(target: "estree_walk", "Entering {:?}", node.kind());
    match visitor.visit(Some(node)) {
        VisitMe::DoneHere => {
            trace!(target: "estree_walk", "Skipping children of {:?}", node.kind());
        }
        VisitMe::HoldThis(inner) => {
            let mut guard = LeaveGuard { visitor: inner };
            children(&mut *guard.visitor);
            trace!(target: "estree_walk", "Leaving {:?}", node.kind());
        }
    }
}

macro_rules! declare_nodes {
    ($($name:ident),* $(,)*) => {
        /// Every concrete node type.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum NodeKind {
            $($name,)*
        }
        impl NodeKind {
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$name => stringify!($name),)*
                }
            }
        }

        /// A borrowed view on any concrete node.
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum NodeRef<'a> {
            $($name(&'a $name),)*
        }
        impl<'a> NodeRef<'a> {
            pub fn kind(&self) -> NodeKind {
                match *self {
                    $(NodeRef::$name(_) => NodeKind::$name,)*
                }
            }

            pub fn as_node(&self) -> &'a dyn Node {
                match *self {
                    $(NodeRef::$name(node) => node,)*
                }
            }
        }
        $(
            impl<'a> From<&'a $name> for NodeRef<'a> {
                fn from(node: &'a $name) -> Self {
                    NodeRef::$name(node)
                }
            }
        )*
    }
}

declare_nodes! {
    Identifier,
    StringLiteral,
    BoolLiteral,
    NullLiteral,
    NumberLiteral,
    RegExpLiteral,
    Program,
    Directive,
    FunctionBody,
    ExpressionStatement,
    BlockStatement,
    EmptyStatement,
    DebuggerStatement,
    WithStatement,
    ReturnStatement,
    LabeledStatement,
    BreakStatement,
    ContinueStatement,
    IfStatement,
    SwitchStatement,
    SwitchCase,
    ThrowStatement,
    TryStatement,
    CatchClause,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    FunctionDeclaration,
    VariableDeclaration,
    VariableDeclarator,
    ThisExpression,
    ArrayExpression,
    ArrayHole,
    ObjectExpression,
    Property,
    FunctionExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    AssignmentExpression,
    LogicalExpression,
    MemberExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    SequenceExpression,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'a> NodeRef<'a> {
    /// The `type` of the node in JSON.
    pub fn type_name(&self) -> &'static str {
        self.as_node().type_name()
    }
}

/// The latest language edition needed by any node of a tree.
pub fn deep_min_version<N: Node + ?Sized>(root: &N) -> Version {
    let mut version = Version::ES5;
    root.walk(&mut |node: Option<NodeRef>| {
        if let Some(node) = node {
            version = std::cmp::max(version, node.as_node().min_version());
        }
        true
    });
    version
}

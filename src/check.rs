//! Validation.
//!
//! Every node reports its own problems through `Node::errors`, without
//! looking at its descendants. A `NodeChecker` accumulates these problems in
//! the order the fields are checked and, since a missing child carries no
//! location of its own, guesses where it should have been from the siblings
//! checked around it.
//!
//! `Check` validates a whole tree by walking it.

use crate::ast::Node;
use crate::error::{ErrorKind, SyntaxError};
use crate::location::Position;
use crate::path::Path;
use crate::visit::{NodeRef, VisitMe, Visitor};

use smallvec::SmallVec;

use std::fmt;

/// A single check performed by a `NodeChecker`.
struct Entry {
    /// The problem, if the check failed.
    error: Option<(ErrorKind, String)>,

    /// The `(start, end)` of the child that passed the check, if any.
    anchor: Option<(Position, Position)>,
}

/// Accumulates the problems of a single node.
pub struct NodeChecker<'n> {
    node: &'n dyn Node,
    entries: SmallVec<[Entry; 8]>,
}
impl<'n> NodeChecker<'n> {
    pub fn new(node: &'n dyn Node) -> Self {
        NodeChecker {
            node,
            entries: SmallVec::new(),
        }
    }

    fn pass(&mut self, child: &dyn Node) {
        let loc = child.loc();
        self.entries.push(Entry {
            error: None,
            anchor: Some((loc.start, loc.end)),
        });
    }

    fn fail(&mut self, kind: ErrorKind, detail: String) {
        self.entries.push(Entry {
            error: Some((kind, detail)),
            anchor: None,
        });
    }

    /// A required child: it must not be zero.
    pub fn require(&mut self, child: &dyn Node, what: &str) {
        if child.is_zero() {
            self.fail(ErrorKind::MissingNode, format!("missing {}", what));
        } else {
            self.pass(child);
        }
    }

    /// A list of required children.
    pub fn require_each<T: Node>(&mut self, children: &[T], what: &str) {
        for (index, child) in children.iter().enumerate() {
            if child.is_zero() {
                self.fail(
                    ErrorKind::MissingNode,
                    format!("missing {} at index {}", what, index),
                );
            } else {
                self.pass(child);
            }
        }
    }

    /// An optional child. Only used to locate its neighbours.
    pub fn optional<T: Node>(&mut self, child: Option<&T>) {
        if let Some(child) = child {
            if !child.is_zero() {
                self.pass(child);
            }
        }
    }

    /// A required child that is absent altogether.
    pub fn missing(&mut self, what: &str) {
        self.fail(ErrorKind::MissingNode, format!("missing {}", what));
    }

    /// A value outside of its closed set.
    pub fn wrong_value(&mut self, detail: String) {
        self.fail(ErrorKind::WrongValue, detail);
    }

    /// Best guess at the position of the `index`-th check: the end of the
    /// closest located sibling before it, or else the start of the closest
    /// one after it.
    fn position(&self, index: usize) -> Position {
        if index == 0 {
            return Position::default();
        }
        let before = self.entries[..index]
            .iter()
            .rev()
            .filter_map(|entry| entry.anchor)
            .map(|(_, end)| end)
            .find(Position::is_known);
        if let Some(end) = before {
            return end;
        }
        self.entries[index + 1..]
            .iter()
            .filter_map(|entry| entry.anchor)
            .map(|(start, _)| start)
            .find(Position::is_known)
            .unwrap_or_default()
    }

    pub fn errors(self) -> Vec<SyntaxError> {
        let mut result = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if let Some((kind, ref detail)) = entry.error {
                result.push(SyntaxError {
                    kind,
                    detail: detail.clone(),
                    node: self.node.kind(),
                    location: self.node.loc().clone(),
                    position: self.position(index),
                });
            }
        }
        result
    }
}

/// A problem found by `Check`, with the ancestry of the offending node.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeError {
    pub path: Path,
    pub error: SyntaxError,
}
impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} in {}", self.error, self.path)
    }
}
impl std::error::Error for TreeError {}

/// Options for validating a whole tree.
#[derive(Clone, Debug, Default)]
pub struct Check {
    /// Stop after that many errors.
    pub limit: Option<usize>,
}
impl Check {
    /// Collect the errors of every node of the tree, in walk order.
    pub fn run<N: Node + ?Sized>(&self, root: &N) -> Vec<TreeError> {
        let mut visitor = CheckVisitor {
            path: Path::new(),
            errors: Vec::new(),
            limit: self.limit,
        };
        root.walk(&mut visitor);
        debug_assert!(visitor.path.is_empty());
        visitor.errors
    }
}

struct CheckVisitor {
    path: Path,
    errors: Vec<TreeError>,
    limit: Option<usize>,
}
impl CheckVisitor {
    fn is_full(&self) -> bool {
        self.limit.map_or(false, |limit| self.errors.len() >= limit)
    }
}
impl<'a> Visitor<'a> for CheckVisitor {
    fn visit<'v>(&'v mut self, node: Option<NodeRef<'a>>) -> VisitMe<&'v mut dyn Visitor<'a>> {
        let node = match node {
            None => {
                self.path.pop();
                return VisitMe::DoneHere;
            }
            Some(node) => node,
        };
        if self.is_full() {
            return VisitMe::DoneHere;
        }
        // An unset child has already been reported by its parent.
        let errors = if node.as_node().is_zero() {
            Vec::new()
        } else {
            node.as_node().errors()
        };
        for error in errors {
            if self.is_full() {
                break;
            }
            self.errors.push(TreeError {
                path: self.path.clone(),
                error,
            });
        }
        self.path.enter(node.kind());
        VisitMe::HoldThis(self)
    }
}

/// Shorthand for `Check::default().run(root)`.
pub fn check<N: Node + ?Sized>(root: &N) -> Vec<TreeError> {
    Check::default().run(root)
}

use crate::visit::NodeKind;

use std::fmt;

/// The ancestry of a node, from the root of the tree down to its parent.
///
/// ```
/// use estree::{NodeKind, Path};
///
/// let mut path = Path::new();
/// assert!(path.get(0).is_none());
///
/// path.enter(NodeKind::Program);
/// path.enter(NodeKind::IfStatement);
/// assert_eq!(path.get(0), Some(NodeKind::IfStatement));
/// assert_eq!(path.get(1), Some(NodeKind::Program));
/// assert_eq!(format!("{:?}", path), "[Program > IfStatement]");
///
/// path.exit(NodeKind::IfStatement); // Exiting the wrong node would panic in debug builds.
/// path.exit(NodeKind::Program);
/// assert_eq!(path.len(), 0);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Default)]
pub struct Path {
    items: Vec<NodeKind>,
}
impl Path {
    pub fn new() -> Self {
        Path { items: vec![] }
    }

    /// All calls to `enter` MUST be balanced with calls to `exit`.
    pub fn enter(&mut self, node: NodeKind) {
        debug!(target: "path", "enter: {:?}", node);
        self.items.push(node);
    }

    pub fn exit(&mut self, node: NodeKind) {
        debug!(target: "path", "exit: {:?}", node);
        let prev = self.items.pop();
        debug_assert_eq!(prev, Some(node));
    }

    /// Exit whatever node was entered last.
    pub fn pop(&mut self) -> Option<NodeKind> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `index`-th ancestor, 0 being the innermost.
    pub fn get(&self, index: usize) -> Option<NodeKind> {
        if index >= self.len() {
            return None;
        }
        Some(self.items[self.len() - index - 1])
    }

    /// Iter through the path, from the root to the current position.
    pub fn iter(&self) -> impl Iterator<Item = &NodeKind> {
        self.items.iter()
    }
}
impl From<Vec<NodeKind>> for Path {
    fn from(items: Vec<NodeKind>) -> Self {
        Path { items }
    }
}
impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use itertools::Itertools;
        write!(f, "[{}]", self.items.iter().format(" > "))
    }
}
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

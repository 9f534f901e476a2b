//! The ESTree (ES5) node types.
//!
//! Concrete nodes are plain structs. A required child is held by value and
//! its zero value stands for "unset"; an optional child is an `Option`.
//! Unions are enums whose variants box the concrete nodes; a union made of
//! other unions holds them unboxed.

use crate::error::SyntaxError;
use crate::location::{SourceLocation, Version};
use crate::visit::{NodeKind, Visitor};

/// The behaviour shared by every node, concrete or union.
pub trait Node {
    /// The `type` of the node in JSON, e.g. `"IfStatement"`.
    ///
    /// Several kinds of nodes may share a `type`: a `Directive` is an
    /// `"ExpressionStatement"` and a `FunctionBody` is a `"BlockStatement"`.
    fn type_name(&self) -> &'static str;

    fn kind(&self) -> NodeKind;

    fn loc(&self) -> &SourceLocation;

    /// The earliest edition of the language that has this node.
    fn min_version(&self) -> Version {
        Version::ES5
    }

    /// `true` if this node is indistinguishable from its default value,
    /// i.e. should be considered unset.
    fn is_zero(&self) -> bool;

    /// The problems of this node, ignoring the problems of its descendants.
    fn errors(&self) -> Vec<SyntaxError>;

    /// Walk this node and its descendants, depth-first.
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>);
}

/// The accessors of `Node` for a concrete node with a `loc` field.
macro_rules! node_accessors {
    ($name:ident, $type_name:expr) => {
        fn type_name(&self) -> &'static str {
            $type_name
        }
        fn kind(&self) -> $crate::visit::NodeKind {
            $crate::visit::NodeKind::$name
        }
        fn loc(&self) -> &$crate::location::SourceLocation {
            &self.loc
        }
    };
    ($name:ident) => {
        node_accessors!($name, stringify!($name));
    };
}

/// Implement `Node` for a union by delegating to the variant it holds.
macro_rules! delegate_node {
    ($name:ident { $($variant:ident),* $(,)* }) => {
        impl $crate::ast::Node for $name {
            fn type_name(&self) -> &'static str {
                match *self {
                    $($name::$variant(ref node) => node.type_name(),)*
                }
            }
            fn kind(&self) -> $crate::visit::NodeKind {
                match *self {
                    $($name::$variant(ref node) => node.kind(),)*
                }
            }
            fn loc(&self) -> &$crate::location::SourceLocation {
                match *self {
                    $($name::$variant(ref node) => node.loc(),)*
                }
            }
            fn min_version(&self) -> $crate::location::Version {
                match *self {
                    $($name::$variant(ref node) => node.min_version(),)*
                }
            }
            fn is_zero(&self) -> bool {
                match *self {
                    $($name::$variant(ref node) => node.is_zero(),)*
                }
            }
            fn errors(&self) -> Vec<$crate::error::SyntaxError> {
                match *self {
                    $($name::$variant(ref node) => node.errors(),)*
                }
            }
            fn walk<'a>(&'a self, visitor: &mut dyn $crate::visit::Visitor<'a>) {
                match *self {
                    $($name::$variant(ref node) => node.walk(visitor),)*
                }
            }
        }
    }
}

/// Implement `From<Concrete>` for a union whose variants box their node.
macro_rules! boxed_from {
    ($name:ident { $($variant:ident($ty:ident)),* $(,)* }) => {
        $(
            impl From<$ty> for $name {
                fn from(node: $ty) -> Self {
                    $name::$variant(Box::new(node))
                }
            }
        )*
    }
}

/// Implement `ToJSON` for a union by delegating to the variant it holds.
macro_rules! delegate_to_json {
    ($name:ident { $($variant:ident),* $(,)* }) => {
        impl $crate::json::ToJSON for $name {
            fn export(&self) -> serde_json::Value {
                match *self {
                    $($name::$variant(ref node) => node.export(),)*
                }
            }
        }
    }
}

mod control;
mod declaration;
mod exception;
mod expression;
mod identifier;
mod literal;
mod loops;
mod operation;
mod operators;
mod program;
mod statement;

pub use self::control::*;
pub use self::declaration::*;
pub use self::exception::*;
pub use self::expression::*;
pub use self::identifier::*;
pub use self::literal::*;
pub use self::loops::*;
pub use self::operation::*;
pub use self::operators::*;
pub use self::program::*;
pub use self::statement::*;

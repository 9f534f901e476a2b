//! A strongly-typed ESTree AST for ES5.
//!
//! Trees are read from and written to the ESTree JSON encoding, validated
//! one node at a time with `Node::errors` (or as a whole with `Check`), and
//! walked depth-first with a `Visitor`.
//!
//! ```
//! use estree::{Check, Node, Program};
//!
//! let source = r#"{
//!     "type": "Program",
//!     "body": [{
//!         "type": "ExpressionStatement",
//!         "expression": {
//!             "type": "BinaryExpression",
//!             "operator": "+",
//!             "left": { "type": "Literal", "value": 1 },
//!             "right": { "type": "Identifier", "name": "x" }
//!         }
//!     }]
//! }"#;
//!
//! let program: Program = estree::from_str(source).unwrap();
//! assert!(Check::default().run(&program).is_empty());
//! assert_eq!(program.type_name(), "Program");
//!
//! let exported = estree::to_string(&program).unwrap();
//! let reimported: Program = estree::from_str(&exported).unwrap();
//! assert_eq!(program, reimported);
//! ```

#![recursion_limit = "256"]

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

#[macro_use]
mod json;

/// The node types.
pub mod ast;

/// Validation.
pub mod check;

mod error;
mod location;
mod path;

/// Traversal.
pub mod visit;

pub use crate::ast::*;
pub use crate::check::{check, Check, NodeChecker, TreeError};
pub use crate::error::{Error, ErrorKind, FromJSONError, SyntaxError};
pub use crate::json::{FromJSON, FromJSONUnion, ToJSON, Trial};
pub use crate::location::{Position, SourceLocation, Version};
pub use crate::path::Path;
pub use crate::visit::{deep_min_version, NodeKind, NodeRef, VisitMe, Visitor};

use serde_json::Value as JSON;

/// Options for exporting to JSON.
#[derive(Clone, Debug)]
pub struct Export {
    /// If `false`, drop every `loc`.
    ///
    /// Default: `true`.
    pub locations: bool,

    /// If `true`, indent the output.
    ///
    /// Default: `false`.
    pub pretty: bool,
}
impl Default for Export {
    fn default() -> Self {
        Export {
            locations: true,
            pretty: false,
        }
    }
}
impl Export {
    pub fn to_value<T: ToJSON + ?Sized>(&self, node: &T) -> JSON {
        let mut value = node.export();
        if !self.locations {
            json::strip_locations(&mut value);
        }
        value
    }

    pub fn to_string<T: ToJSON + ?Sized>(&self, node: &T) -> Result<String, Error> {
        let value = self.to_value(node);
        let result = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(result)
    }

    pub fn to_vec<T: ToJSON + ?Sized>(&self, node: &T) -> Result<Vec<u8>, Error> {
        let value = self.to_value(node);
        let result = if self.pretty {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        Ok(result)
    }
}

/// Decode a node, or a union of nodes, from JSON text.
pub fn from_str<T: FromJSON>(source: &str) -> Result<T, Error> {
    let value: JSON = serde_json::from_str(source).map_err(FromJSONError::Json)?;
    from_value(&value)
}

/// Decode a node, or a union of nodes, from JSON bytes.
pub fn from_slice<T: FromJSON>(source: &[u8]) -> Result<T, Error> {
    let value: JSON = serde_json::from_slice(source).map_err(FromJSONError::Json)?;
    from_value(&value)
}

pub fn from_value<T: FromJSON>(value: &JSON) -> Result<T, Error> {
    let result = T::import(value)?;
    Ok(result)
}

/// Export with the default options.
pub fn to_value<T: ToJSON + ?Sized>(node: &T) -> JSON {
    Export::default().to_value(node)
}

/// Export with the default options.
pub fn to_string<T: ToJSON + ?Sized>(node: &T) -> Result<String, Error> {
    Export::default().to_string(node)
}

/// Export with the default options.
pub fn to_vec<T: ToJSON + ?Sized>(node: &T) -> Result<Vec<u8>, Error> {
    Export::default().to_vec(node)
}

//! Decoding and validation errors.

use crate::location::{Position, SourceLocation};
use crate::visit::NodeKind;

use derive_more::{Display, From};
use serde_json::Value as JSON;

use std::fmt;

/// How far a JSON rendering is shown inside an error message.
const MAX_SNIPPET_LEN: usize = 64;

/// The three families of problems a node may exhibit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// Input of the wrong shape, e.g. an `IfStatement` where an `Expression` is needed.
    #[display(fmt = "wrong type")]
    WrongType,

    /// A value outside of its closed set, e.g. an unknown operator token.
    #[display(fmt = "wrong value")]
    WrongValue,

    /// A required child is unset.
    #[display(fmt = "missing node")]
    MissingNode,
}

/// An error while importing a node from JSON.
#[derive(Debug, Display)]
pub enum FromJSONError {
    #[display(fmt = "expected {}, got {}", expected, got)]
    WrongType { expected: String, got: String },

    #[display(fmt = "unrecognized {} {:?}", what, got)]
    WrongValue { what: String, got: String },

    #[display(fmt = "malformed JSON: {}", _0)]
    Json(serde_json::Error),
}
impl FromJSONError {
    pub fn wrong_type(expected: &str, got: &JSON) -> Self {
        FromJSONError::WrongType {
            expected: expected.to_string(),
            got: describe(got),
        }
    }

    pub fn wrong_value(what: &str, got: &str) -> Self {
        FromJSONError::WrongValue {
            what: what.to_string(),
            got: got.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match *self {
            FromJSONError::WrongValue { .. } => ErrorKind::WrongValue,
            FromJSONError::WrongType { .. } | FromJSONError::Json(_) => ErrorKind::WrongType,
        }
    }
}
impl std::error::Error for FromJSONError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            FromJSONError::Json(ref err) => Some(err),
            _ => None,
        }
    }
}

/// A short rendering of `value` for error messages: the `type` of a node,
/// or a truncated copy of anything else.
fn describe(value: &JSON) -> String {
    if let Some(kind) = value.get("type").and_then(JSON::as_str) {
        return format!("{:?}", kind);
    }
    let mut text = value.to_string();
    if text.len() > MAX_SNIPPET_LEN {
        let mut end = MAX_SNIPPET_LEN;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
        text.push_str("...");
    }
    text
}

/// A problem found while validating a single node.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxError {
    pub kind: ErrorKind,

    /// What went wrong, e.g. `missing if test`.
    pub detail: String,

    /// The node that reported the error.
    pub node: NodeKind,

    /// The location of that node.
    pub location: SourceLocation,

    /// Best guess at where the problem sits, possibly unknown.
    pub position: Position,
}
impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(source) = self.location.named_source() {
            write!(f, "{}:", source)?;
        }
        let position = if self.position.is_known() {
            self.position
        } else {
            self.location.start
        };
        if position.is_known() {
            write!(f, "{}: ", position)?;
        }
        write!(f, "{}", self.detail)
    }
}
impl std::error::Error for SyntaxError {}

/// Any error returned by the top-level entry points.
#[derive(Debug, Display, From)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Decode(FromJSONError),

    #[display(fmt = "could not write JSON: {}", _0)]
    Encode(serde_json::Error),
}
impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::Decode(ref err) => err.kind(),
            Error::Encode(_) => ErrorKind::WrongType,
        }
    }
}
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Decode(ref err) => Some(err),
            Error::Encode(ref err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = FromJSONError::wrong_type("Expression", &json!({"type": "IfStatement"}));
        assert_eq!(err.to_string(), "expected Expression, got \"IfStatement\"");
        assert_eq!(err.kind(), ErrorKind::WrongType);

        let err = FromJSONError::wrong_value("BinaryOperator", "??");
        assert_eq!(err.to_string(), "unrecognized BinaryOperator \"??\"");
        assert_eq!(err.kind(), ErrorKind::WrongValue);

        let long = JSON::from("x".repeat(200));
        let err = FromJSONError::wrong_type("Pattern", &long);
        assert!(err.to_string().ends_with("..."));
    }

    #[test]
    fn syntax_error_display() {
        let mut err = SyntaxError {
            kind: ErrorKind::MissingNode,
            detail: "missing if test".to_string(),
            node: NodeKind::IfStatement,
            location: SourceLocation::default(),
            position: Position::default(),
        };
        assert_eq!(err.to_string(), "missing if test");

        err.location = SourceLocation::new(Position::new(3, 2), Position::new(4, 0)).with_source("a.js");
        assert_eq!(err.to_string(), "a.js:3:2: missing if test");

        err.position = Position::new(3, 6);
        assert_eq!(err.to_string(), "a.js:3:6: missing if test");
    }
}

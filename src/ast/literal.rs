//! Literals.
//!
//! All literals share the JSON `type` `"Literal"` and are told apart by their
//! `value`, or by the presence of a `regex` object.

use crate::ast::{Identifier, Node};
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{node_object, peek_type, FromJSON, FromJSONUnion, ToJSON, Trial};
use crate::location::SourceLocation;
use crate::visit::{walk_node, NodeKind, NodeRef, Visitor};

use serde_json::Value as JSON;

/// The flags a regular expression may carry in ES5.
const REGEXP_FLAGS: &str = "gim";

/// Implement the parts of `Node` common to every literal.
macro_rules! literal_node {
    ($name:ident) => {
        impl Node for $name {
            fn type_name(&self) -> &'static str {
                "Literal"
            }
            fn kind(&self) -> NodeKind {
                NodeKind::$name
            }
            fn loc(&self) -> &SourceLocation {
                &self.loc
            }
            fn is_zero(&self) -> bool {
                false
            }
            fn errors(&self) -> Vec<SyntaxError> {
                self.check()
            }
            fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
                walk_node(visitor, NodeRef::$name(self), |_| {});
            }
        }
        impl FromJSON for $name {
            fn import(value: &JSON) -> Result<Self, FromJSONError> {
                match Literal::import(value)? {
                    Literal::$name(literal) => Ok(*literal),
                    other => Err(FromJSONError::WrongType {
                        expected: stringify!($name).to_string(),
                        got: other.kind().name().to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Default, PartialEq, Debug, Clone)]
pub struct StringLiteral {
    pub loc: SourceLocation,
    pub value: String,
}
impl StringLiteral {
    pub fn new(value: &str) -> Self {
        StringLiteral {
            loc: SourceLocation::default(),
            value: value.to_string(),
        }
    }
    fn check(&self) -> Vec<SyntaxError> {
        Vec::new()
    }
}
literal_node!(StringLiteral);

#[derive(Default, PartialEq, Debug, Clone)]
pub struct BoolLiteral {
    pub loc: SourceLocation,
    pub value: bool,
}
impl BoolLiteral {
    pub fn new(value: bool) -> Self {
        BoolLiteral {
            loc: SourceLocation::default(),
            value,
        }
    }
    fn check(&self) -> Vec<SyntaxError> {
        Vec::new()
    }
}
literal_node!(BoolLiteral);

#[derive(Default, PartialEq, Debug, Clone)]
pub struct NullLiteral {
    pub loc: SourceLocation,
}
impl NullLiteral {
    fn check(&self) -> Vec<SyntaxError> {
        Vec::new()
    }
}
literal_node!(NullLiteral);

#[derive(Default, PartialEq, Debug, Clone)]
pub struct NumberLiteral {
    pub loc: SourceLocation,
    pub value: f64,
}
impl NumberLiteral {
    pub fn new(value: f64) -> Self {
        NumberLiteral {
            loc: SourceLocation::default(),
            value,
        }
    }
    fn check(&self) -> Vec<SyntaxError> {
        Vec::new()
    }
}
literal_node!(NumberLiteral);

/// A regular expression, e.g. `/ab+c/gi`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct RegExpLiteral {
    pub loc: SourceLocation,
    pub pattern: String,
    pub flags: String,
}
impl RegExpLiteral {
    pub fn new(pattern: &str, flags: &str) -> Self {
        RegExpLiteral {
            loc: SourceLocation::default(),
            pattern: pattern.to_string(),
            flags: flags.to_string(),
        }
    }

    /// Each of `g`, `i` and `m` at most once.
    fn has_valid_flags(&self) -> bool {
        let mut seen = String::with_capacity(REGEXP_FLAGS.len());
        for flag in self.flags.chars() {
            if !REGEXP_FLAGS.contains(flag) || seen.contains(flag) {
                return false;
            }
            seen.push(flag);
        }
        true
    }

    fn check(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        if !self.has_valid_flags() {
            c.wrong_value(format!("unrecognized RegExp flags {:?}", self.flags));
        }
        c.errors()
    }
}
literal_node!(RegExpLiteral);

/// Any literal.
#[derive(PartialEq, Debug, Clone)]
pub enum Literal {
    StringLiteral(Box<StringLiteral>),
    BoolLiteral(Box<BoolLiteral>),
    NullLiteral(Box<NullLiteral>),
    NumberLiteral(Box<NumberLiteral>),
    RegExpLiteral(Box<RegExpLiteral>),
}
impl Default for Literal {
    fn default() -> Self {
        Literal::NullLiteral(Box::default())
    }
}
boxed_from!(Literal {
    StringLiteral(StringLiteral),
    BoolLiteral(BoolLiteral),
    NullLiteral(NullLiteral),
    NumberLiteral(NumberLiteral),
    RegExpLiteral(RegExpLiteral),
});
delegate_node!(Literal {
    StringLiteral,
    BoolLiteral,
    NullLiteral,
    NumberLiteral,
    RegExpLiteral,
});
impl Literal {
    fn import_recognized(value: &JSON) -> Result<Self, FromJSONError> {
        let loc = SourceLocation::import(&value["loc"])?;
        let regex = &value["regex"];
        if !regex.is_null() {
            if !regex.is_object() {
                return Err(FromJSONError::wrong_type("regex object", regex));
            }
            let flags: Option<String> = FromJSON::import(&regex["flags"])?;
            return Ok(Literal::from(RegExpLiteral {
                loc,
                pattern: FromJSON::import(&regex["pattern"])?,
                flags: flags.unwrap_or_default(),
            }));
        }
        let literal = match value["value"] {
            JSON::Null => Literal::from(NullLiteral { loc }),
            JSON::Bool(value) => Literal::from(BoolLiteral { loc, value }),
            JSON::String(ref value) => Literal::from(StringLiteral {
                loc,
                value: value.clone(),
            }),
            JSON::Number(_) => Literal::from(NumberLiteral {
                loc,
                value: FromJSON::import(&value["value"])?,
            }),
            ref other => {
                return Err(FromJSONError::wrong_type(
                    "string, boolean, null, number or regex",
                    other,
                ));
            }
        };
        Ok(literal)
    }
}
impl FromJSONUnion for Literal {
    const NAME: &'static str = "Literal";
    fn trial(value: &JSON) -> Trial<Self> {
        debug!(
            target: "estree_decode",
            "Decoding sum Literal, found {}",
            peek_type(value).unwrap_or("no type")
        );
        if peek_type(value) != Some("Literal") {
            return Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value));
        }
        Trial::recognized(Literal::import_recognized(value))
    }
}
import_by_trial!(Literal);
impl ToJSON for Literal {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), self.loc());
        match *self {
            Literal::StringLiteral(ref literal) => {
                object.insert("value".to_string(), literal.value.export());
            }
            Literal::BoolLiteral(ref literal) => {
                object.insert("value".to_string(), literal.value.export());
            }
            Literal::NullLiteral(_) => {
                object.insert("value".to_string(), JSON::Null);
            }
            Literal::NumberLiteral(ref literal) => {
                object.insert("value".to_string(), literal.value.export());
            }
            Literal::RegExpLiteral(ref literal) => {
                object.insert(
                    "regex".to_string(),
                    json!({ "pattern": literal.pattern, "flags": literal.flags }),
                );
            }
        }
        JSON::Object(object)
    }
}

macro_rules! literal_to_json {
    ($($name:ident),*) => {
        $(
            impl ToJSON for $name {
                fn export(&self) -> JSON {
                    Literal::from(self.clone()).export()
                }
            }
        )*
    }
}
literal_to_json!(StringLiteral, BoolLiteral, NullLiteral, NumberLiteral, RegExpLiteral);

/// The key of a `Property`.
#[derive(PartialEq, Debug, Clone)]
pub enum LiteralOrIdentifier {
    Literal(Literal),
    Identifier(Box<Identifier>),
}
impl Default for LiteralOrIdentifier {
    fn default() -> Self {
        LiteralOrIdentifier::Identifier(Box::default())
    }
}
boxed_from!(LiteralOrIdentifier {
    Identifier(Identifier),
});
impl From<Literal> for LiteralOrIdentifier {
    fn from(literal: Literal) -> Self {
        LiteralOrIdentifier::Literal(literal)
    }
}
impl From<StringLiteral> for LiteralOrIdentifier {
    fn from(literal: StringLiteral) -> Self {
        LiteralOrIdentifier::Literal(Literal::from(literal))
    }
}
impl From<NumberLiteral> for LiteralOrIdentifier {
    fn from(literal: NumberLiteral) -> Self {
        LiteralOrIdentifier::Literal(Literal::from(literal))
    }
}
delegate_node!(LiteralOrIdentifier { Literal, Identifier });
delegate_to_json!(LiteralOrIdentifier { Literal, Identifier });
impl FromJSONUnion for LiteralOrIdentifier {
    const NAME: &'static str = "Literal or Identifier";
    fn trial(value: &JSON) -> Trial<Self> {
        debug!(
            target: "estree_decode",
            "Decoding sum LiteralOrIdentifier, found {}",
            peek_type(value).unwrap_or("no type")
        );
        match peek_type(value) {
            Some("Identifier") => {
                Trial::recognized(Identifier::import(value).map(LiteralOrIdentifier::from))
            }
            Some("Literal") => Literal::trial(value).map(LiteralOrIdentifier::Literal),
            _ => Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value)),
        }
    }
}
import_by_trial!(LiteralOrIdentifier);

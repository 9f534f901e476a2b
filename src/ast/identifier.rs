use crate::ast::{Expression, Node};
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{expect_type, node_object, peek_type, FromJSON, FromJSONUnion, ToJSON, Trial};
use crate::location::SourceLocation;
use crate::visit::{walk_node, NodeKind, NodeRef, Visitor};

use serde_json::Value as JSON;

/// A name, e.g. of a variable, a function or a label.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct Identifier {
    pub loc: SourceLocation,
    pub name: String,
}
impl Identifier {
    pub fn new(name: &str) -> Self {
        Identifier {
            loc: SourceLocation::default(),
            name: name.to_string(),
        }
    }
}
impl Node for Identifier {
    fn type_name(&self) -> &'static str {
        "Identifier"
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Identifier
    }
    fn loc(&self) -> &SourceLocation {
        &self.loc
    }
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.name.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        if self.name.is_empty() {
            c.wrong_value("empty identifier not allowed".to_string());
        }
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::Identifier(self), |_| {});
    }
}
impl FromJSON for Identifier {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "Identifier")?;
        Ok(Identifier {
            loc: FromJSON::import(&value["loc"])?,
            name: FromJSON::import(&value["name"])?,
        })
    }
}
impl ToJSON for Identifier {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("name".to_string(), self.name.export());
        JSON::Object(object)
    }
}

/// A binding target. In ES5, only identifiers.
#[derive(PartialEq, Debug, Clone)]
pub enum Pattern {
    Identifier(Box<Identifier>),
}
impl Default for Pattern {
    fn default() -> Self {
        Pattern::Identifier(Box::default())
    }
}
boxed_from!(Pattern {
    Identifier(Identifier),
});
delegate_node!(Pattern { Identifier });
delegate_to_json!(Pattern { Identifier });
impl FromJSONUnion for Pattern {
    const NAME: &'static str = "Pattern";
    fn trial(value: &JSON) -> Trial<Self> {
        debug!(
            target: "estree_decode",
            "Decoding sum Pattern, found {}",
            peek_type(value).unwrap_or("no type")
        );
        match peek_type(value) {
            Some("Identifier") => Trial::recognized(Identifier::import(value).map(Pattern::from)),
            _ => Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value)),
        }
    }
}
import_by_trial!(Pattern);

/// The target of an assignment.
///
/// Decoding puts identifiers on the `Pattern` side. An identifier held as an
/// `Expression` compares equal to the same identifier held as a `Pattern`,
/// as both have the same JSON.
#[derive(Debug, Clone)]
pub enum PatternOrExpression {
    Pattern(Pattern),
    Expression(Expression),
}
impl PatternOrExpression {
    /// The identifier held on either side, if any.
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match *self {
            PatternOrExpression::Pattern(Pattern::Identifier(ref identifier))
            | PatternOrExpression::Expression(Expression::Identifier(ref identifier)) => {
                Some(&**identifier)
            }
            _ => None,
        }
    }
}
impl PartialEq for PatternOrExpression {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_identifier(), other.as_identifier()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => match (self, other) {
                (PatternOrExpression::Expression(a), PatternOrExpression::Expression(b)) => a == b,
                _ => false,
            },
            _ => false,
        }
    }
}
impl Default for PatternOrExpression {
    fn default() -> Self {
        PatternOrExpression::Pattern(Pattern::default())
    }
}
impl From<Pattern> for PatternOrExpression {
    fn from(pattern: Pattern) -> Self {
        PatternOrExpression::Pattern(pattern)
    }
}
impl From<Identifier> for PatternOrExpression {
    fn from(identifier: Identifier) -> Self {
        PatternOrExpression::Pattern(Pattern::from(identifier))
    }
}
impl From<Expression> for PatternOrExpression {
    fn from(expression: Expression) -> Self {
        match expression {
            Expression::Identifier(identifier) => {
                PatternOrExpression::Pattern(Pattern::Identifier(identifier))
            }
            expression => PatternOrExpression::Expression(expression),
        }
    }
}
delegate_node!(PatternOrExpression { Pattern, Expression });
delegate_to_json!(PatternOrExpression { Pattern, Expression });
impl FromJSONUnion for PatternOrExpression {
    const NAME: &'static str = "Pattern or Expression";
    fn trial(value: &JSON) -> Trial<Self> {
        debug!(
            target: "estree_decode",
            "Decoding sum PatternOrExpression, found {}",
            peek_type(value).unwrap_or("no type")
        );
        let pattern = Pattern::trial(value);
        if pattern.is_matched() {
            return pattern.map(PatternOrExpression::Pattern);
        }
        let expression = Expression::trial(value);
        if expression.is_matched() {
            return expression.map(PatternOrExpression::Expression);
        }
        Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value))
    }
}
import_by_trial!(PatternOrExpression);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ThisExpression;
    use crate::error::ErrorKind;

    #[test]
    fn empty_name() {
        let errors = Identifier::default().errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::WrongValue);
        assert_eq!(errors[0].detail, "empty identifier not allowed");
        assert!(Identifier::new("x").errors().is_empty());
    }

    #[test]
    fn identifier_sides_compare_equal() {
        let as_expression = PatternOrExpression::Expression(Expression::from(Identifier::new("a")));
        let as_pattern = PatternOrExpression::from(Identifier::new("a"));
        assert_eq!(as_expression, as_pattern);
        assert_eq!(as_pattern, as_expression);
        assert_ne!(
            as_expression,
            PatternOrExpression::Expression(Expression::from(Identifier::new("b")))
        );
        assert_ne!(
            as_pattern,
            PatternOrExpression::Expression(Expression::from(ThisExpression::default()))
        );
    }

    #[test]
    fn identifiers_are_patterns() {
        let target = PatternOrExpression::from(Expression::from(Identifier::new("a")));
        assert_eq!(target, PatternOrExpression::from(Identifier::new("a")));

        let imported = PatternOrExpression::import(&json!({ "type": "Identifier", "name": "a" }));
        assert_eq!(imported.unwrap(), target);

        let member = PatternOrExpression::import(&json!({
            "type": "MemberExpression",
            "object": { "type": "Identifier", "name": "a" },
            "property": { "type": "Identifier", "name": "b" },
            "computed": false,
        }))
        .unwrap();
        assert_matches!(member, PatternOrExpression::Expression(Expression::Member(_)));
    }
}

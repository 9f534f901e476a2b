//! Expressions built around an operator.

use crate::ast::*;
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{expect_type, node_object, FromJSON, ToJSON};
use crate::location::SourceLocation;
use crate::visit::{walk_node, NodeRef, Visitor};

use serde_json::Value as JSON;

/// E.g. `!a`, `typeof a`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct UnaryExpression {
    pub loc: SourceLocation,
    pub operator: UnaryOperator,

    /// Always `true` in ES5.
    pub prefix: bool,
    pub argument: Expression,
}
impl Node for UnaryExpression {
    node_accessors!(UnaryExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.operator == UnaryOperator::default()
            && self.argument.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.argument, "unary argument");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::UnaryExpression(self), |visitor| {
            self.argument.walk(visitor);
        });
    }
}
impl FromJSON for UnaryExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "UnaryExpression")?;
        let prefix: Option<bool> = FromJSON::import(&value["prefix"])?;
        Ok(UnaryExpression {
            loc: FromJSON::import(&value["loc"])?,
            operator: FromJSON::import(&value["operator"])?,
            prefix: prefix.unwrap_or(true),
            argument: FromJSON::import(&value["argument"])?,
        })
    }
}
impl ToJSON for UnaryExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("operator".to_string(), self.operator.export());
        object.insert("prefix".to_string(), self.prefix.export());
        object.insert("argument".to_string(), self.argument.export());
        JSON::Object(object)
    }
}

/// E.g. `a++`, `--a`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct UpdateExpression {
    pub loc: SourceLocation,
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub argument: Expression,
}
impl Node for UpdateExpression {
    node_accessors!(UpdateExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.operator == UpdateOperator::default()
            && !self.prefix
            && self.argument.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.argument, "update argument");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::UpdateExpression(self), |visitor| {
            self.argument.walk(visitor);
        });
    }
}
impl FromJSON for UpdateExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "UpdateExpression")?;
        Ok(UpdateExpression {
            loc: FromJSON::import(&value["loc"])?,
            operator: FromJSON::import(&value["operator"])?,
            prefix: FromJSON::import(&value["prefix"])?,
            argument: FromJSON::import(&value["argument"])?,
        })
    }
}
impl ToJSON for UpdateExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("operator".to_string(), self.operator.export());
        object.insert("prefix".to_string(), self.prefix.export());
        object.insert("argument".to_string(), self.argument.export());
        JSON::Object(object)
    }
}

/// E.g. `a + b`, `a instanceof b`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct BinaryExpression {
    pub loc: SourceLocation,
    pub operator: BinaryOperator,
    pub left: Expression,
    pub right: Expression,
}
impl Node for BinaryExpression {
    node_accessors!(BinaryExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.operator == BinaryOperator::default()
            && self.left.is_zero()
            && self.right.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.left, "left-hand expression");
        c.require(&self.right, "right-hand expression");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::BinaryExpression(self), |visitor| {
            self.left.walk(visitor);
            self.right.walk(visitor);
        });
    }
}
impl FromJSON for BinaryExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "BinaryExpression")?;
        Ok(BinaryExpression {
            loc: FromJSON::import(&value["loc"])?,
            operator: FromJSON::import(&value["operator"])?,
            left: FromJSON::import(&value["left"])?,
            right: FromJSON::import(&value["right"])?,
        })
    }
}
impl ToJSON for BinaryExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("operator".to_string(), self.operator.export());
        object.insert("left".to_string(), self.left.export());
        object.insert("right".to_string(), self.right.export());
        JSON::Object(object)
    }
}

/// E.g. `a = b`, `a.b += c`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct AssignmentExpression {
    pub loc: SourceLocation,
    pub operator: AssignmentOperator,
    pub left: PatternOrExpression,
    pub right: Expression,
}
impl Node for AssignmentExpression {
    node_accessors!(AssignmentExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.operator == AssignmentOperator::default()
            && self.left.is_zero()
            && self.right.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.left, "left-hand expression");
        c.require(&self.right, "right-hand expression");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::AssignmentExpression(self), |visitor| {
            self.left.walk(visitor);
            self.right.walk(visitor);
        });
    }
}
impl FromJSON for AssignmentExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "AssignmentExpression")?;
        Ok(AssignmentExpression {
            loc: FromJSON::import(&value["loc"])?,
            operator: FromJSON::import(&value["operator"])?,
            left: FromJSON::import(&value["left"])?,
            right: FromJSON::import(&value["right"])?,
        })
    }
}
impl ToJSON for AssignmentExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("operator".to_string(), self.operator.export());
        object.insert("left".to_string(), self.left.export());
        object.insert("right".to_string(), self.right.export());
        JSON::Object(object)
    }
}

/// `a || b` or `a && b`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct LogicalExpression {
    pub loc: SourceLocation,
    pub operator: LogicalOperator,
    pub left: Expression,
    pub right: Expression,
}
impl Node for LogicalExpression {
    node_accessors!(LogicalExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.operator == LogicalOperator::default()
            && self.left.is_zero()
            && self.right.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.left, "left-hand expression");
        c.require(&self.right, "right-hand expression");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::LogicalExpression(self), |visitor| {
            self.left.walk(visitor);
            self.right.walk(visitor);
        });
    }
}
impl FromJSON for LogicalExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "LogicalExpression")?;
        Ok(LogicalExpression {
            loc: FromJSON::import(&value["loc"])?,
            operator: FromJSON::import(&value["operator"])?,
            left: FromJSON::import(&value["left"])?,
            right: FromJSON::import(&value["right"])?,
        })
    }
}
impl ToJSON for LogicalExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("operator".to_string(), self.operator.export());
        object.insert("left".to_string(), self.left.export());
        object.insert("right".to_string(), self.right.export());
        JSON::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn unknown_operator() {
        let err = BinaryExpression::import(&json!({
            "type": "BinaryExpression",
            "operator": "??",
            "left": { "type": "Identifier", "name": "a" },
            "right": { "type": "Identifier", "name": "b" },
        }))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongValue);
        assert!(err.to_string().contains("\"??\""));
    }

    #[test]
    fn missing_operands() {
        let errors = BinaryExpression::default().errors();
        let details: Vec<_> = errors.iter().map(|err| err.detail.as_str()).collect();
        assert_eq!(
            details,
            vec!["missing left-hand expression", "missing right-hand expression"]
        );
    }
}

//! Statements that redirect control flow.

use crate::ast::*;
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{expect_type, insert_optional, node_object, FromJSON, ToJSON};
use crate::location::SourceLocation;
use crate::visit::{walk_node, NodeRef, Visitor};

use serde_json::Value as JSON;

/// `return argument;`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ReturnStatement {
    pub loc: SourceLocation,
    pub argument: Option<Expression>,
}
impl Node for ReturnStatement {
    node_accessors!(ReturnStatement);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.optional(self.argument.as_ref());
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ReturnStatement(self), |visitor| {
            if let Some(ref argument) = self.argument {
                argument.walk(visitor);
            }
        });
    }
}
impl FromJSON for ReturnStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ReturnStatement")?;
        Ok(ReturnStatement {
            loc: FromJSON::import(&value["loc"])?,
            argument: FromJSON::import(&value["argument"])?,
        })
    }
}
impl ToJSON for ReturnStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        insert_optional(&mut object, "argument", &self.argument);
        JSON::Object(object)
    }
}

/// `label: body`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct LabeledStatement {
    pub loc: SourceLocation,
    pub label: Identifier,
    pub body: Statement,
}
impl Node for LabeledStatement {
    node_accessors!(LabeledStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.label.is_zero() && self.body.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.label, "label");
        c.require(&self.body, "labeled statement");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::LabeledStatement(self), |visitor| {
            self.label.walk(visitor);
            self.body.walk(visitor);
        });
    }
}
impl FromJSON for LabeledStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "LabeledStatement")?;
        Ok(LabeledStatement {
            loc: FromJSON::import(&value["loc"])?,
            label: FromJSON::import(&value["label"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for LabeledStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("label".to_string(), self.label.export());
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

/// `break;` or `break label;`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct BreakStatement {
    pub loc: SourceLocation,
    pub label: Option<Identifier>,
}
impl Node for BreakStatement {
    node_accessors!(BreakStatement);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.optional(self.label.as_ref());
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::BreakStatement(self), |visitor| {
            if let Some(ref label) = self.label {
                label.walk(visitor);
            }
        });
    }
}
impl FromJSON for BreakStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "BreakStatement")?;
        Ok(BreakStatement {
            loc: FromJSON::import(&value["loc"])?,
            label: FromJSON::import(&value["label"])?,
        })
    }
}
impl ToJSON for BreakStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        insert_optional(&mut object, "label", &self.label);
        JSON::Object(object)
    }
}

/// `continue;` or `continue label;`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ContinueStatement {
    pub loc: SourceLocation,
    pub label: Option<Identifier>,
}
impl Node for ContinueStatement {
    node_accessors!(ContinueStatement);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.optional(self.label.as_ref());
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ContinueStatement(self), |visitor| {
            if let Some(ref label) = self.label {
                label.walk(visitor);
            }
        });
    }
}
impl FromJSON for ContinueStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ContinueStatement")?;
        Ok(ContinueStatement {
            loc: FromJSON::import(&value["loc"])?,
            label: FromJSON::import(&value["label"])?,
        })
    }
}
impl ToJSON for ContinueStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        insert_optional(&mut object, "label", &self.label);
        JSON::Object(object)
    }
}

/// `if (test) consequent else alternate`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct IfStatement {
    pub loc: SourceLocation,
    pub test: Expression,
    pub consequent: Statement,
    pub alternate: Option<Statement>,
}
impl Node for IfStatement {
    node_accessors!(IfStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.test.is_zero()
            && self.consequent.is_zero()
            && self.alternate.as_ref().map_or(true, Statement::is_zero)
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.test, "if test");
        c.require(&self.consequent, "if consequent");
        c.optional(self.alternate.as_ref());
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::IfStatement(self), |visitor| {
            self.test.walk(visitor);
            self.consequent.walk(visitor);
            if let Some(ref alternate) = self.alternate {
                alternate.walk(visitor);
            }
        });
    }
}
impl FromJSON for IfStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "IfStatement")?;
        Ok(IfStatement {
            loc: FromJSON::import(&value["loc"])?,
            test: FromJSON::import(&value["test"])?,
            consequent: FromJSON::import(&value["consequent"])?,
            alternate: FromJSON::import(&value["alternate"])?,
        })
    }
}
impl ToJSON for IfStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("test".to_string(), self.test.export());
        object.insert("consequent".to_string(), self.consequent.export());
        insert_optional(&mut object, "alternate", &self.alternate);
        JSON::Object(object)
    }
}

/// `switch (discriminant) { cases }`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct SwitchStatement {
    pub loc: SourceLocation,
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
}
impl Node for SwitchStatement {
    node_accessors!(SwitchStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.discriminant.is_zero() && self.cases.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.discriminant, "switch expression");
        c.require_each(&self.cases, "switch case");
        if self.cases.iter().filter(|case| case.test.is_none()).count() > 1 {
            c.wrong_value("more than one default clause in switch".to_string());
        }
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::SwitchStatement(self), |visitor| {
            self.discriminant.walk(visitor);
            for case in &self.cases {
                case.walk(visitor);
            }
        });
    }
}
impl FromJSON for SwitchStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "SwitchStatement")?;
        Ok(SwitchStatement {
            loc: FromJSON::import(&value["loc"])?,
            discriminant: FromJSON::import(&value["discriminant"])?,
            cases: FromJSON::import(&value["cases"])?,
        })
    }
}
impl ToJSON for SwitchStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("discriminant".to_string(), self.discriminant.export());
        object.insert("cases".to_string(), self.cases.export());
        JSON::Object(object)
    }
}

/// `case test: consequent`, or `default: consequent` without a test.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct SwitchCase {
    pub loc: SourceLocation,
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
}
impl Node for SwitchCase {
    node_accessors!(SwitchCase);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.optional(self.test.as_ref());
        c.require_each(&self.consequent, "switch case statement");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::SwitchCase(self), |visitor| {
            if let Some(ref test) = self.test {
                test.walk(visitor);
            }
            for statement in &self.consequent {
                statement.walk(visitor);
            }
        });
    }
}
impl FromJSON for SwitchCase {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "SwitchCase")?;
        Ok(SwitchCase {
            loc: FromJSON::import(&value["loc"])?,
            test: FromJSON::import(&value["test"])?,
            consequent: FromJSON::import(&value["consequent"])?,
        })
    }
}
impl ToJSON for SwitchCase {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        insert_optional(&mut object, "test", &self.test);
        object.insert("consequent".to_string(), self.consequent.export());
        JSON::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::location::Position;

    #[test]
    fn missing_test() {
        let statement = IfStatement {
            consequent: Statement::from(ReturnStatement::default()),
            ..IfStatement::default()
        };
        let errors = statement.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::MissingNode);
        assert!(errors[0].detail.contains("test"));
        // Nothing located before it.
        assert_eq!(errors[0].position, Position::default());
    }

    #[test]
    fn missing_consequent_is_placed_after_test() {
        let mut test = Identifier::new("a");
        test.loc = SourceLocation::new(Position::new(1, 4), Position::new(1, 5));
        let statement = IfStatement {
            test: Expression::from(test),
            ..IfStatement::default()
        };
        let errors = statement.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].detail, "missing if consequent");
        assert_eq!(errors[0].position, Position::new(1, 5));
    }

    #[test]
    fn two_defaults() {
        let statement = SwitchStatement {
            discriminant: Expression::from(Identifier::new("a")),
            cases: vec![SwitchCase::default(), SwitchCase::default()],
            ..SwitchStatement::default()
        };
        let errors = statement.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::WrongValue);
    }
}

//! Programs, function bodies and their directive prologues.

use crate::ast::*;
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{expect_type, node_object, peek_type, FromJSON, FromJSONUnion, ToJSON, Trial};
use crate::location::SourceLocation;
use crate::visit::{walk_node, NodeRef, Visitor};

use serde_json::Value as JSON;

/// A complete script.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct Program {
    pub loc: SourceLocation,
    pub body: Vec<DirectiveOrStatement>,
}
impl Node for Program {
    node_accessors!(Program);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.body.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require_each(&self.body, "directive or statement");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::Program(self), |visitor| {
            for item in &self.body {
                item.walk(visitor);
            }
        });
    }
}
impl FromJSON for Program {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "Program")?;
        Ok(Program {
            loc: FromJSON::import(&value["loc"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for Program {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

/// The body of a function. A `"BlockStatement"` in JSON, which may open
/// with directives.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct FunctionBody {
    pub loc: SourceLocation,
    pub body: Vec<DirectiveOrStatement>,
}
impl Node for FunctionBody {
    node_accessors!(FunctionBody, "BlockStatement");
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require_each(&self.body, "directive or statement");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::FunctionBody(self), |visitor| {
            for item in &self.body {
                item.walk(visitor);
            }
        });
    }
}
impl FromJSON for FunctionBody {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "BlockStatement")?;
        Ok(FunctionBody {
            loc: FromJSON::import(&value["loc"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for FunctionBody {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

/// A string in the directive prologue of a program or function,
/// e.g. `"use strict";`.
///
/// An `"ExpressionStatement"` in JSON, holding the raw text of the
/// directive in its `directive` key.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct Directive {
    pub loc: SourceLocation,
    pub expression: Literal,

    /// The raw source text of the string, without quotes.
    pub directive: String,
}
impl Directive {
    pub fn new(directive: &str) -> Self {
        Directive {
            loc: SourceLocation::default(),
            expression: Literal::from(StringLiteral::new(directive)),
            directive: directive.to_string(),
        }
    }
}
impl Node for Directive {
    node_accessors!(Directive, "ExpressionStatement");
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.directive.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.expression, "directive literal");
        let is_string = match self.expression {
            Literal::StringLiteral(_) => true,
            _ => false,
        };
        if !is_string {
            c.wrong_value(format!(
                "directive expression must be a string, got {}",
                self.expression.kind()
            ));
        }
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::Directive(self), |visitor| {
            self.expression.walk(visitor);
        });
    }
}
impl FromJSON for Directive {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ExpressionStatement")?;
        Ok(Directive {
            loc: FromJSON::import(&value["loc"])?,
            expression: FromJSON::import(&value["expression"])?,
            directive: FromJSON::import(&value["directive"])?,
        })
    }
}
impl ToJSON for Directive {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("expression".to_string(), self.expression.export());
        object.insert("directive".to_string(), self.directive.export());
        JSON::Object(object)
    }
}

/// An item of a `Program` or a `FunctionBody`.
#[derive(PartialEq, Debug, Clone)]
pub enum DirectiveOrStatement {
    Directive(Box<Directive>),
    Statement(Statement),
}
impl Default for DirectiveOrStatement {
    fn default() -> Self {
        DirectiveOrStatement::Statement(Statement::default())
    }
}
boxed_from!(DirectiveOrStatement {
    Directive(Directive),
});
impl From<Statement> for DirectiveOrStatement {
    fn from(statement: Statement) -> Self {
        DirectiveOrStatement::Statement(statement)
    }
}
delegate_node!(DirectiveOrStatement {
    Directive,
    Statement
});
delegate_to_json!(DirectiveOrStatement {
    Directive,
    Statement
});
impl FromJSONUnion for DirectiveOrStatement {
    const NAME: &'static str = "Directive or Statement";
    fn trial(value: &JSON) -> Trial<Self> {
        debug!(
            target: "estree_decode",
            "Decoding sum DirectiveOrStatement, found {}",
            peek_type(value).unwrap_or("no type")
        );
        let is_directive = peek_type(value) == Some("ExpressionStatement")
            && !value["directive"].is_null();
        if is_directive {
            return Trial::recognized(Directive::import(value).map(DirectiveOrStatement::from));
        }
        let statement = Statement::trial(value);
        if statement.is_matched() {
            return statement.map(DirectiveOrStatement::Statement);
        }
        Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value))
    }
}
import_by_trial!(DirectiveOrStatement);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_come_first() {
        let body = FunctionBody::import(&json!({
            "type": "BlockStatement",
            "body": [
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "Literal", "value": "use strict" },
                    "directive": "use strict",
                },
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "Literal", "value": "not a directive" },
                },
            ],
        }))
        .unwrap();
        assert_eq!(body.body.len(), 2);
        assert_eq!(
            body.body[0],
            DirectiveOrStatement::from(Directive::new("use strict"))
        );
        assert_matches!(
            body.body[1],
            DirectiveOrStatement::Statement(Statement::Expression(_))
        );
        assert_eq!(body.body[0].type_name(), "ExpressionStatement");
        assert_eq!(body.type_name(), "BlockStatement");
    }

    #[test]
    fn directive_must_be_a_string() {
        let directive = Directive {
            expression: Literal::from(NumberLiteral::new(1.0)),
            ..Directive::new("1")
        };
        assert_eq!(directive.errors().len(), 1);
        assert!(Directive::new("use strict").errors().is_empty());
    }
}

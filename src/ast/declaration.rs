use crate::ast::*;
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{
    expect_type, insert_optional, node_object, peek_type, FromJSON, FromJSONUnion, ToJSON, Trial,
};
use crate::location::SourceLocation;
use crate::visit::{walk_node, NodeRef, Visitor};

use serde_json::Value as JSON;

/// A declaration, which may stand wherever a statement does.
#[derive(PartialEq, Debug, Clone)]
pub enum Declaration {
    Function(Box<FunctionDeclaration>),
    Variable(Box<VariableDeclaration>),
}
impl Default for Declaration {
    fn default() -> Self {
        Declaration::Variable(Box::default())
    }
}
boxed_from!(Declaration {
    Function(FunctionDeclaration),
    Variable(VariableDeclaration),
});
delegate_node!(Declaration { Function, Variable });
delegate_to_json!(Declaration { Function, Variable });
impl FromJSONUnion for Declaration {
    const NAME: &'static str = "Declaration";
    fn trial(value: &JSON) -> Trial<Self> {
        debug!(
            target: "estree_decode",
            "Decoding sum Declaration, found {}",
            peek_type(value).unwrap_or("no type")
        );
        match peek_type(value) {
            Some("FunctionDeclaration") => {
                Trial::recognized(FunctionDeclaration::import(value).map(Declaration::from))
            }
            Some("VariableDeclaration") => {
                Trial::recognized(VariableDeclaration::import(value).map(Declaration::from))
            }
            _ => Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value)),
        }
    }
}
import_by_trial!(Declaration);

/// `function id(params) { body }`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct FunctionDeclaration {
    pub loc: SourceLocation,
    pub id: Identifier,
    pub params: Vec<Pattern>,
    pub body: FunctionBody,
}
impl Node for FunctionDeclaration {
    node_accessors!(FunctionDeclaration);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.id.is_zero()
            && self.params.is_empty()
            && self.body.loc.is_zero()
            && self.body.body.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.id, "function name");
        c.require_each(&self.params, "function parameter");
        c.require(&self.body, "function body");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::FunctionDeclaration(self), |visitor| {
            self.id.walk(visitor);
            for param in &self.params {
                param.walk(visitor);
            }
            self.body.walk(visitor);
        });
    }
}
impl FromJSON for FunctionDeclaration {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "FunctionDeclaration")?;
        Ok(FunctionDeclaration {
            loc: FromJSON::import(&value["loc"])?,
            id: FromJSON::import(&value["id"])?,
            params: FromJSON::import(&value["params"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for FunctionDeclaration {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("id".to_string(), self.id.export());
        object.insert("params".to_string(), self.params.export());
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

/// `var a = 1, b;`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct VariableDeclaration {
    pub loc: SourceLocation,
    pub declarations: Vec<VariableDeclarator>,
    pub kind: VariableDeclarationKind,
}
impl Node for VariableDeclaration {
    node_accessors!(VariableDeclaration);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.declarations.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        if self.declarations.is_empty() {
            c.missing("variable declarator");
        }
        c.require_each(&self.declarations, "variable declarator");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::VariableDeclaration(self), |visitor| {
            for declaration in &self.declarations {
                declaration.walk(visitor);
            }
        });
    }
}
impl FromJSON for VariableDeclaration {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "VariableDeclaration")?;
        Ok(VariableDeclaration {
            loc: FromJSON::import(&value["loc"])?,
            declarations: FromJSON::import(&value["declarations"])?,
            kind: FromJSON::import(&value["kind"])?,
        })
    }
}
impl ToJSON for VariableDeclaration {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("declarations".to_string(), self.declarations.export());
        object.insert("kind".to_string(), self.kind.export());
        JSON::Object(object)
    }
}

/// `id = init` within a `VariableDeclaration`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct VariableDeclarator {
    pub loc: SourceLocation,
    pub id: Pattern,
    pub init: Option<Expression>,
}
impl Node for VariableDeclarator {
    node_accessors!(VariableDeclarator);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.id.is_zero() && self.init.is_none()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.id, "variable name");
        c.optional(self.init.as_ref());
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::VariableDeclarator(self), |visitor| {
            self.id.walk(visitor);
            if let Some(ref init) = self.init {
                init.walk(visitor);
            }
        });
    }
}
impl FromJSON for VariableDeclarator {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "VariableDeclarator")?;
        Ok(VariableDeclarator {
            loc: FromJSON::import(&value["loc"])?,
            id: FromJSON::import(&value["id"])?,
            init: FromJSON::import(&value["init"])?,
        })
    }
}
impl ToJSON for VariableDeclarator {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("id".to_string(), self.id.export());
        insert_optional(&mut object, "init", &self.init);
        JSON::Object(object)
    }
}

/// The `init` of a `ForStatement`.
#[derive(PartialEq, Debug, Clone)]
pub enum VariableDeclarationOrExpression {
    VariableDeclaration(Box<VariableDeclaration>),
    Expression(Expression),
}
impl Default for VariableDeclarationOrExpression {
    fn default() -> Self {
        VariableDeclarationOrExpression::Expression(Expression::default())
    }
}
boxed_from!(VariableDeclarationOrExpression {
    VariableDeclaration(VariableDeclaration),
});
impl From<Expression> for VariableDeclarationOrExpression {
    fn from(expression: Expression) -> Self {
        VariableDeclarationOrExpression::Expression(expression)
    }
}
delegate_node!(VariableDeclarationOrExpression {
    VariableDeclaration,
    Expression,
});
delegate_to_json!(VariableDeclarationOrExpression {
    VariableDeclaration,
    Expression,
});
impl FromJSONUnion for VariableDeclarationOrExpression {
    const NAME: &'static str = "VariableDeclaration or Expression";
    fn trial(value: &JSON) -> Trial<Self> {
        debug!(
            target: "estree_decode",
            "Decoding sum VariableDeclarationOrExpression, found {}",
            peek_type(value).unwrap_or("no type")
        );
        if peek_type(value) == Some("VariableDeclaration") {
            return Trial::recognized(
                VariableDeclaration::import(value).map(VariableDeclarationOrExpression::from),
            );
        }
        let expression = Expression::trial(value);
        if expression.is_matched() {
            return expression.map(VariableDeclarationOrExpression::Expression);
        }
        Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value))
    }
}
import_by_trial!(VariableDeclarationOrExpression);

/// The `left` of a `ForInStatement`.
#[derive(PartialEq, Debug, Clone)]
pub enum VariableDeclarationOrPattern {
    VariableDeclaration(Box<VariableDeclaration>),
    Pattern(Pattern),
}
impl Default for VariableDeclarationOrPattern {
    fn default() -> Self {
        VariableDeclarationOrPattern::Pattern(Pattern::default())
    }
}
boxed_from!(VariableDeclarationOrPattern {
    VariableDeclaration(VariableDeclaration),
});
impl From<Pattern> for VariableDeclarationOrPattern {
    fn from(pattern: Pattern) -> Self {
        VariableDeclarationOrPattern::Pattern(pattern)
    }
}
delegate_node!(VariableDeclarationOrPattern {
    VariableDeclaration,
    Pattern,
});
delegate_to_json!(VariableDeclarationOrPattern {
    VariableDeclaration,
    Pattern,
});
impl FromJSONUnion for VariableDeclarationOrPattern {
    const NAME: &'static str = "VariableDeclaration or Pattern";
    fn trial(value: &JSON) -> Trial<Self> {
        debug!(
            target: "estree_decode",
            "Decoding sum VariableDeclarationOrPattern, found {}",
            peek_type(value).unwrap_or("no type")
        );
        if peek_type(value) == Some("VariableDeclaration") {
            return Trial::recognized(
                VariableDeclaration::import(value).map(VariableDeclarationOrPattern::from),
            );
        }
        let pattern = Pattern::trial(value);
        if pattern.is_matched() {
            return pattern.map(VariableDeclarationOrPattern::Pattern);
        }
        Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value))
    }
}
import_by_trial!(VariableDeclarationOrPattern);

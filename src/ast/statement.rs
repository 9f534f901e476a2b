use crate::ast::*;
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{expect_type, node_object, peek_type, FromJSON, FromJSONUnion, ToJSON, Trial};
use crate::location::{SourceLocation, Version};
use crate::visit::{walk_node, NodeRef, Visitor};

use serde_json::Value as JSON;

/// Any statement, declarations included.
#[derive(PartialEq, Debug, Clone)]
pub enum Statement {
    Expression(Box<ExpressionStatement>),
    Block(Box<BlockStatement>),
    Empty(Box<EmptyStatement>),
    Debugger(Box<DebuggerStatement>),
    With(Box<WithStatement>),
    Return(Box<ReturnStatement>),
    Labeled(Box<LabeledStatement>),
    Break(Box<BreakStatement>),
    Continue(Box<ContinueStatement>),
    If(Box<IfStatement>),
    Switch(Box<SwitchStatement>),
    Throw(Box<ThrowStatement>),
    Try(Box<TryStatement>),
    While(Box<WhileStatement>),
    DoWhile(Box<DoWhileStatement>),
    For(Box<ForStatement>),
    ForIn(Box<ForInStatement>),
    FunctionDeclaration(Box<FunctionDeclaration>),
    VariableDeclaration(Box<VariableDeclaration>),
}
impl Default for Statement {
    fn default() -> Self {
        Statement::Expression(Box::default())
    }
}
boxed_from!(Statement {
    Expression(ExpressionStatement),
    Block(BlockStatement),
    Empty(EmptyStatement),
    Debugger(DebuggerStatement),
    With(WithStatement),
    Return(ReturnStatement),
    Labeled(LabeledStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    If(IfStatement),
    Switch(SwitchStatement),
    Throw(ThrowStatement),
    Try(TryStatement),
    While(WhileStatement),
    DoWhile(DoWhileStatement),
    For(ForStatement),
    ForIn(ForInStatement),
    FunctionDeclaration(FunctionDeclaration),
    VariableDeclaration(VariableDeclaration),
});
impl From<Declaration> for Statement {
    fn from(declaration: Declaration) -> Self {
        match declaration {
            Declaration::Function(node) => Statement::FunctionDeclaration(node),
            Declaration::Variable(node) => Statement::VariableDeclaration(node),
        }
    }
}
delegate_node!(Statement {
    Expression,
    Block,
    Empty,
    Debugger,
    With,
    Return,
    Labeled,
    Break,
    Continue,
    If,
    Switch,
    Throw,
    Try,
    While,
    DoWhile,
    For,
    ForIn,
    FunctionDeclaration,
    VariableDeclaration,
});
delegate_to_json!(Statement {
    Expression,
    Block,
    Empty,
    Debugger,
    With,
    Return,
    Labeled,
    Break,
    Continue,
    If,
    Switch,
    Throw,
    Try,
    While,
    DoWhile,
    For,
    ForIn,
    FunctionDeclaration,
    VariableDeclaration,
});
impl FromJSONUnion for Statement {
    const NAME: &'static str = "Statement";
    fn trial(value: &JSON) -> Trial<Self> {
        let kind = match peek_type(value) {
            Some(kind) => kind,
            None => return Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value)),
        };
        debug!(target: "estree_decode", "Decoding sum Statement, found {}", kind);
        let result = match kind {
            "ExpressionStatement" => ExpressionStatement::import(value).map(Statement::from),
            "BlockStatement" => BlockStatement::import(value).map(Statement::from),
            "EmptyStatement" => EmptyStatement::import(value).map(Statement::from),
            "DebuggerStatement" => DebuggerStatement::import(value).map(Statement::from),
            "WithStatement" => WithStatement::import(value).map(Statement::from),
            "ReturnStatement" => ReturnStatement::import(value).map(Statement::from),
            "LabeledStatement" => LabeledStatement::import(value).map(Statement::from),
            "BreakStatement" => BreakStatement::import(value).map(Statement::from),
            "ContinueStatement" => ContinueStatement::import(value).map(Statement::from),
            "IfStatement" => IfStatement::import(value).map(Statement::from),
            "SwitchStatement" => SwitchStatement::import(value).map(Statement::from),
            "ThrowStatement" => ThrowStatement::import(value).map(Statement::from),
            "TryStatement" => TryStatement::import(value).map(Statement::from),
            "WhileStatement" => WhileStatement::import(value).map(Statement::from),
            "DoWhileStatement" => DoWhileStatement::import(value).map(Statement::from),
            "ForStatement" => ForStatement::import(value).map(Statement::from),
            "ForInStatement" => ForInStatement::import(value).map(Statement::from),
            "FunctionDeclaration" | "VariableDeclaration" => {
                return Declaration::trial(value).map(Statement::from);
            }
            _ => return Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value)),
        };
        Trial::recognized(result)
    }
}
import_by_trial!(Statement);

/// An expression evaluated for its side effects.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ExpressionStatement {
    pub loc: SourceLocation,
    pub expression: Expression,
}
impl Node for ExpressionStatement {
    node_accessors!(ExpressionStatement);
    fn min_version(&self) -> Version {
        self.expression.min_version()
    }
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.expression.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.expression, "expression");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ExpressionStatement(self), |visitor| {
            self.expression.walk(visitor);
        });
    }
}
impl FromJSON for ExpressionStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ExpressionStatement")?;
        Ok(ExpressionStatement {
            loc: FromJSON::import(&value["loc"])?,
            expression: FromJSON::import(&value["expression"])?,
        })
    }
}
impl ToJSON for ExpressionStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("expression".to_string(), self.expression.export());
        JSON::Object(object)
    }
}

/// `{ ... }`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct BlockStatement {
    pub loc: SourceLocation,
    pub body: Vec<Statement>,
}
impl Node for BlockStatement {
    node_accessors!(BlockStatement);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require_each(&self.body, "statement");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::BlockStatement(self), |visitor| {
            for statement in &self.body {
                statement.walk(visitor);
            }
        });
    }
}
impl FromJSON for BlockStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "BlockStatement")?;
        Ok(BlockStatement {
            loc: FromJSON::import(&value["loc"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for BlockStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

/// A lone `;`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct EmptyStatement {
    pub loc: SourceLocation,
}
impl Node for EmptyStatement {
    node_accessors!(EmptyStatement);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        Vec::new()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::EmptyStatement(self), |_| {});
    }
}
impl FromJSON for EmptyStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "EmptyStatement")?;
        Ok(EmptyStatement {
            loc: FromJSON::import(&value["loc"])?,
        })
    }
}
impl ToJSON for EmptyStatement {
    fn export(&self) -> JSON {
        JSON::Object(node_object(self.type_name(), &self.loc))
    }
}

#[derive(Default, PartialEq, Debug, Clone)]
pub struct DebuggerStatement {
    pub loc: SourceLocation,
}
impl Node for DebuggerStatement {
    node_accessors!(DebuggerStatement);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        Vec::new()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::DebuggerStatement(self), |_| {});
    }
}
impl FromJSON for DebuggerStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "DebuggerStatement")?;
        Ok(DebuggerStatement {
            loc: FromJSON::import(&value["loc"])?,
        })
    }
}
impl ToJSON for DebuggerStatement {
    fn export(&self) -> JSON {
        JSON::Object(node_object(self.type_name(), &self.loc))
    }
}

/// `with (object) body`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct WithStatement {
    pub loc: SourceLocation,
    pub object: Expression,
    pub body: Statement,
}
impl Node for WithStatement {
    node_accessors!(WithStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.object.is_zero() && self.body.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.object, "with object");
        c.require(&self.body, "with body");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::WithStatement(self), |visitor| {
            self.object.walk(visitor);
            self.body.walk(visitor);
        });
    }
}
impl FromJSON for WithStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "WithStatement")?;
        Ok(WithStatement {
            loc: FromJSON::import(&value["loc"])?,
            object: FromJSON::import(&value["object"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for WithStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("object".to_string(), self.object.export());
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

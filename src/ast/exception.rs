use crate::ast::*;
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{expect_type, insert_optional, node_object, FromJSON, ToJSON};
use crate::location::SourceLocation;
use crate::visit::{walk_node, NodeRef, Visitor};

use serde_json::Value as JSON;

/// `throw argument;`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ThrowStatement {
    pub loc: SourceLocation,
    pub argument: Expression,
}
impl Node for ThrowStatement {
    node_accessors!(ThrowStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.argument.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.argument, "throw argument");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ThrowStatement(self), |visitor| {
            self.argument.walk(visitor);
        });
    }
}
impl FromJSON for ThrowStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ThrowStatement")?;
        Ok(ThrowStatement {
            loc: FromJSON::import(&value["loc"])?,
            argument: FromJSON::import(&value["argument"])?,
        })
    }
}
impl ToJSON for ThrowStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("argument".to_string(), self.argument.export());
        JSON::Object(object)
    }
}

/// `try block catch (param) body finally finalizer`
///
/// At least one of `handler` and `finalizer` is needed.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct TryStatement {
    pub loc: SourceLocation,
    pub block: BlockStatement,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStatement>,
}
impl Node for TryStatement {
    node_accessors!(TryStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.block.loc.is_zero()
            && self.block.body.is_empty()
            && self.handler.is_none()
            && self.finalizer.is_none()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.block, "try block");
        c.optional(self.handler.as_ref());
        c.optional(self.finalizer.as_ref());
        if self.handler.is_none() && self.finalizer.is_none() {
            c.missing("catch or final block");
        }
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::TryStatement(self), |visitor| {
            self.block.walk(visitor);
            if let Some(ref handler) = self.handler {
                handler.walk(visitor);
            }
            if let Some(ref finalizer) = self.finalizer {
                finalizer.walk(visitor);
            }
        });
    }
}
impl FromJSON for TryStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "TryStatement")?;
        Ok(TryStatement {
            loc: FromJSON::import(&value["loc"])?,
            block: FromJSON::import(&value["block"])?,
            handler: FromJSON::import(&value["handler"])?,
            finalizer: FromJSON::import(&value["finalizer"])?,
        })
    }
}
impl ToJSON for TryStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("block".to_string(), self.block.export());
        insert_optional(&mut object, "handler", &self.handler);
        insert_optional(&mut object, "finalizer", &self.finalizer);
        JSON::Object(object)
    }
}

/// `catch (param) body`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct CatchClause {
    pub loc: SourceLocation,
    pub param: Pattern,
    pub body: BlockStatement,
}
impl Node for CatchClause {
    node_accessors!(CatchClause);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.param.is_zero()
            && self.body.loc.is_zero()
            && self.body.body.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.param, "catch expression");
        c.require(&self.body, "catch block");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::CatchClause(self), |visitor| {
            self.param.walk(visitor);
            self.body.walk(visitor);
        });
    }
}
impl FromJSON for CatchClause {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "CatchClause")?;
        Ok(CatchClause {
            loc: FromJSON::import(&value["loc"])?,
            param: FromJSON::import(&value["param"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for CatchClause {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("param".to_string(), self.param.export());
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

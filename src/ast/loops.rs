use crate::ast::*;
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{expect_type, insert_optional, node_object, FromJSON, ToJSON};
use crate::location::SourceLocation;
use crate::visit::{walk_node, NodeRef, Visitor};

use serde_json::Value as JSON;

/// `while (test) body`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct WhileStatement {
    pub loc: SourceLocation,
    pub test: Expression,
    pub body: Statement,
}
impl Node for WhileStatement {
    node_accessors!(WhileStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.test.is_zero() && self.body.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.test, "while test");
        c.require(&self.body, "while body");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::WhileStatement(self), |visitor| {
            self.test.walk(visitor);
            self.body.walk(visitor);
        });
    }
}
impl FromJSON for WhileStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "WhileStatement")?;
        Ok(WhileStatement {
            loc: FromJSON::import(&value["loc"])?,
            test: FromJSON::import(&value["test"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for WhileStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("test".to_string(), self.test.export());
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

/// `do body while (test);`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct DoWhileStatement {
    pub loc: SourceLocation,
    pub body: Statement,
    pub test: Expression,
}
impl Node for DoWhileStatement {
    node_accessors!(DoWhileStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.body.is_zero() && self.test.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.body, "do-while body");
        c.require(&self.test, "do-while test");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::DoWhileStatement(self), |visitor| {
            self.body.walk(visitor);
            self.test.walk(visitor);
        });
    }
}
impl FromJSON for DoWhileStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "DoWhileStatement")?;
        Ok(DoWhileStatement {
            loc: FromJSON::import(&value["loc"])?,
            body: FromJSON::import(&value["body"])?,
            test: FromJSON::import(&value["test"])?,
        })
    }
}
impl ToJSON for DoWhileStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("body".to_string(), self.body.export());
        object.insert("test".to_string(), self.test.export());
        JSON::Object(object)
    }
}

/// `for (init; test; update) body`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ForStatement {
    pub loc: SourceLocation,
    pub init: Option<VariableDeclarationOrExpression>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Statement,
}
impl Node for ForStatement {
    node_accessors!(ForStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.init.is_none()
            && self.test.is_none()
            && self.update.is_none()
            && self.body.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.optional(self.init.as_ref());
        c.optional(self.test.as_ref());
        c.optional(self.update.as_ref());
        c.require(&self.body, "for body");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ForStatement(self), |visitor| {
            if let Some(ref init) = self.init {
                init.walk(visitor);
            }
            if let Some(ref test) = self.test {
                test.walk(visitor);
            }
            if let Some(ref update) = self.update {
                update.walk(visitor);
            }
            self.body.walk(visitor);
        });
    }
}
impl FromJSON for ForStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ForStatement")?;
        Ok(ForStatement {
            loc: FromJSON::import(&value["loc"])?,
            init: FromJSON::import(&value["init"])?,
            test: FromJSON::import(&value["test"])?,
            update: FromJSON::import(&value["update"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for ForStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        insert_optional(&mut object, "init", &self.init);
        insert_optional(&mut object, "test", &self.test);
        insert_optional(&mut object, "update", &self.update);
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

/// `for (left in right) body`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ForInStatement {
    pub loc: SourceLocation,
    pub left: VariableDeclarationOrPattern,
    pub right: Expression,
    pub body: Statement,
}
impl Node for ForInStatement {
    node_accessors!(ForInStatement);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.left.is_zero() && self.right.is_zero() && self.body.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.left, "for-in variable");
        c.require(&self.right, "for-in object");
        c.require(&self.body, "for-in body");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ForInStatement(self), |visitor| {
            self.left.walk(visitor);
            self.right.walk(visitor);
            self.body.walk(visitor);
        });
    }
}
impl FromJSON for ForInStatement {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ForInStatement")?;
        Ok(ForInStatement {
            loc: FromJSON::import(&value["loc"])?,
            left: FromJSON::import(&value["left"])?,
            right: FromJSON::import(&value["right"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for ForInStatement {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("left".to_string(), self.left.export());
        object.insert("right".to_string(), self.right.export());
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

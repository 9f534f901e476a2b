use crate::ast::*;
use crate::check::NodeChecker;
use crate::error::{FromJSONError, SyntaxError};
use crate::json::{
    expect_type, insert_optional, node_object, peek_type, FromJSON, FromJSONUnion, ToJSON, Trial,
};
use crate::location::SourceLocation;
use crate::visit::{walk_node, NodeRef, Visitor};

use serde_json::Value as JSON;

/// Any expression.
#[derive(PartialEq, Debug, Clone)]
pub enum Expression {
    Identifier(Box<Identifier>),
    Literal(Literal),
    This(Box<ThisExpression>),
    Array(Box<ArrayExpression>),
    Object(Box<ObjectExpression>),
    Function(Box<FunctionExpression>),
    Unary(Box<UnaryExpression>),
    Update(Box<UpdateExpression>),
    Binary(Box<BinaryExpression>),
    Assignment(Box<AssignmentExpression>),
    Logical(Box<LogicalExpression>),
    Member(Box<MemberExpression>),
    Conditional(Box<ConditionalExpression>),
    Call(Box<CallExpression>),
    New(Box<NewExpression>),
    Sequence(Box<SequenceExpression>),
}
impl Default for Expression {
    fn default() -> Self {
        Expression::Identifier(Box::default())
    }
}
boxed_from!(Expression {
    Identifier(Identifier),
    This(ThisExpression),
    Array(ArrayExpression),
    Object(ObjectExpression),
    Function(FunctionExpression),
    Unary(UnaryExpression),
    Update(UpdateExpression),
    Binary(BinaryExpression),
    Assignment(AssignmentExpression),
    Logical(LogicalExpression),
    Member(MemberExpression),
    Conditional(ConditionalExpression),
    Call(CallExpression),
    New(NewExpression),
    Sequence(SequenceExpression),
});
impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}
impl From<StringLiteral> for Expression {
    fn from(literal: StringLiteral) -> Self {
        Expression::Literal(Literal::from(literal))
    }
}
impl From<BoolLiteral> for Expression {
    fn from(literal: BoolLiteral) -> Self {
        Expression::Literal(Literal::from(literal))
    }
}
impl From<NullLiteral> for Expression {
    fn from(literal: NullLiteral) -> Self {
        Expression::Literal(Literal::from(literal))
    }
}
impl From<NumberLiteral> for Expression {
    fn from(literal: NumberLiteral) -> Self {
        Expression::Literal(Literal::from(literal))
    }
}
impl From<RegExpLiteral> for Expression {
    fn from(literal: RegExpLiteral) -> Self {
        Expression::Literal(Literal::from(literal))
    }
}
delegate_node!(Expression {
    Identifier,
    Literal,
    This,
    Array,
    Object,
    Function,
    Unary,
    Update,
    Binary,
    Assignment,
    Logical,
    Member,
    Conditional,
    Call,
    New,
    Sequence,
});
delegate_to_json!(Expression {
    Identifier,
    Literal,
    This,
    Array,
    Object,
    Function,
    Unary,
    Update,
    Binary,
    Assignment,
    Logical,
    Member,
    Conditional,
    Call,
    New,
    Sequence,
});
impl FromJSONUnion for Expression {
    const NAME: &'static str = "Expression";
    fn trial(value: &JSON) -> Trial<Self> {
        let kind = match peek_type(value) {
            Some(kind) => kind,
            None => return Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value)),
        };
        debug!(target: "estree_decode", "Decoding sum Expression, found {}", kind);
        let result = match kind {
            "Identifier" => Identifier::import(value).map(Expression::from),
            "Literal" => return Literal::trial(value).map(Expression::Literal),
            "ThisExpression" => ThisExpression::import(value).map(Expression::from),
            "ArrayExpression" => ArrayExpression::import(value).map(Expression::from),
            "ObjectExpression" => ObjectExpression::import(value).map(Expression::from),
            "FunctionExpression" => FunctionExpression::import(value).map(Expression::from),
            "UnaryExpression" => UnaryExpression::import(value).map(Expression::from),
            "UpdateExpression" => UpdateExpression::import(value).map(Expression::from),
            "BinaryExpression" => BinaryExpression::import(value).map(Expression::from),
            "AssignmentExpression" => AssignmentExpression::import(value).map(Expression::from),
            "LogicalExpression" => LogicalExpression::import(value).map(Expression::from),
            "MemberExpression" => MemberExpression::import(value).map(Expression::from),
            "ConditionalExpression" => {
                ConditionalExpression::import(value).map(Expression::from)
            }
            "CallExpression" => CallExpression::import(value).map(Expression::from),
            "NewExpression" => NewExpression::import(value).map(Expression::from),
            "SequenceExpression" => SequenceExpression::import(value).map(Expression::from),
            _ => return Trial::Mismatch(FromJSONError::wrong_type(Self::NAME, value)),
        };
        Trial::recognized(result)
    }
}
import_by_trial!(Expression);

/// `this`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ThisExpression {
    pub loc: SourceLocation,
}
impl Node for ThisExpression {
    node_accessors!(ThisExpression);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        Vec::new()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ThisExpression(self), |_| {});
    }
}
impl FromJSON for ThisExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ThisExpression")?;
        Ok(ThisExpression {
            loc: FromJSON::import(&value["loc"])?,
        })
    }
}
impl ToJSON for ThisExpression {
    fn export(&self) -> JSON {
        JSON::Object(node_object(self.type_name(), &self.loc))
    }
}

/// An array literal, e.g. `[a, , b]`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ArrayExpression {
    pub loc: SourceLocation,
    pub elements: Vec<ExpressionOrArrayHole>,
}
impl Node for ArrayExpression {
    node_accessors!(ArrayExpression);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require_each(&self.elements, "array element");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ArrayExpression(self), |visitor| {
            for element in &self.elements {
                element.walk(visitor);
            }
        });
    }
}
impl FromJSON for ArrayExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ArrayExpression")?;
        Ok(ArrayExpression {
            loc: FromJSON::import(&value["loc"])?,
            elements: FromJSON::import(&value["elements"])?,
        })
    }
}
impl ToJSON for ArrayExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("elements".to_string(), self.elements.export());
        JSON::Object(object)
    }
}

/// An elided element of an array literal, `null` in JSON.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ArrayHole {
    pub loc: SourceLocation,
}
impl Node for ArrayHole {
    node_accessors!(ArrayHole);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        Vec::new()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ArrayHole(self), |_| {});
    }
}

/// An element of an array literal.
#[derive(PartialEq, Debug, Clone)]
pub enum ExpressionOrArrayHole {
    Expression(Expression),
    ArrayHole(Box<ArrayHole>),
}
impl Default for ExpressionOrArrayHole {
    fn default() -> Self {
        ExpressionOrArrayHole::ArrayHole(Box::default())
    }
}
impl From<Expression> for ExpressionOrArrayHole {
    fn from(expression: Expression) -> Self {
        ExpressionOrArrayHole::Expression(expression)
    }
}
impl From<ArrayHole> for ExpressionOrArrayHole {
    fn from(hole: ArrayHole) -> Self {
        ExpressionOrArrayHole::ArrayHole(Box::new(hole))
    }
}
delegate_node!(ExpressionOrArrayHole {
    Expression,
    ArrayHole
});
impl FromJSON for ExpressionOrArrayHole {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        if value.is_null() {
            return Ok(ExpressionOrArrayHole::ArrayHole(Box::default()));
        }
        Expression::import(value).map(ExpressionOrArrayHole::Expression)
    }
}
impl ToJSON for ExpressionOrArrayHole {
    fn export(&self) -> JSON {
        match *self {
            ExpressionOrArrayHole::Expression(ref expression) => expression.export(),
            ExpressionOrArrayHole::ArrayHole(_) => JSON::Null,
        }
    }
}

/// An object literal, e.g. `{ a: 1, get b() { return 2 } }`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ObjectExpression {
    pub loc: SourceLocation,
    pub properties: Vec<Property>,
}
impl Node for ObjectExpression {
    node_accessors!(ObjectExpression);
    fn is_zero(&self) -> bool {
        false
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require_each(&self.properties, "object property");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ObjectExpression(self), |visitor| {
            for property in &self.properties {
                property.walk(visitor);
            }
        });
    }
}
impl FromJSON for ObjectExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ObjectExpression")?;
        Ok(ObjectExpression {
            loc: FromJSON::import(&value["loc"])?,
            properties: FromJSON::import(&value["properties"])?,
        })
    }
}
impl ToJSON for ObjectExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("properties".to_string(), self.properties.export());
        JSON::Object(object)
    }
}

/// A member of an object literal.
///
/// The `value` of an accessor is the `FunctionExpression` implementing it.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct Property {
    pub loc: SourceLocation,
    pub key: LiteralOrIdentifier,
    pub value: Expression,
    pub kind: PropertyKind,
}
impl Node for Property {
    node_accessors!(Property);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.key.is_zero() && self.value.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.key, "property name");
        c.require(&self.value, "property expression");
        let is_function = match self.value {
            Expression::Function(_) => true,
            _ => false,
        };
        if self.kind != PropertyKind::Init && !is_function && !self.value.is_zero() {
            c.wrong_value(format!("{} accessor must be a function", self.kind));
        }
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::Property(self), |visitor| {
            self.key.walk(visitor);
            self.value.walk(visitor);
        });
    }
}
impl FromJSON for Property {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "Property")?;
        Ok(Property {
            loc: FromJSON::import(&value["loc"])?,
            key: FromJSON::import(&value["key"])?,
            value: FromJSON::import(&value["value"])?,
            kind: FromJSON::import(&value["kind"])?,
        })
    }
}
impl ToJSON for Property {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("key".to_string(), self.key.export());
        object.insert("value".to_string(), self.value.export());
        object.insert("kind".to_string(), self.kind.export());
        JSON::Object(object)
    }
}

/// A function used as a value, e.g. `function (a) { return a }`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct FunctionExpression {
    pub loc: SourceLocation,
    pub id: Option<Identifier>,
    pub params: Vec<Pattern>,
    pub body: FunctionBody,
}
impl Node for FunctionExpression {
    node_accessors!(FunctionExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.id.as_ref().map_or(true, Identifier::is_zero)
            && self.params.is_empty()
            && self.body.loc.is_zero()
            && self.body.body.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.optional(self.id.as_ref());
        c.require_each(&self.params, "function parameter");
        c.require(&self.body, "function body");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::FunctionExpression(self), |visitor| {
            if let Some(ref id) = self.id {
                id.walk(visitor);
            }
            for param in &self.params {
                param.walk(visitor);
            }
            self.body.walk(visitor);
        });
    }
}
impl FromJSON for FunctionExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "FunctionExpression")?;
        Ok(FunctionExpression {
            loc: FromJSON::import(&value["loc"])?,
            id: FromJSON::import(&value["id"])?,
            params: FromJSON::import(&value["params"])?,
            body: FromJSON::import(&value["body"])?,
        })
    }
}
impl ToJSON for FunctionExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        insert_optional(&mut object, "id", &self.id);
        object.insert("params".to_string(), self.params.export());
        object.insert("body".to_string(), self.body.export());
        JSON::Object(object)
    }
}

/// A property access, `object.property` or `object[property]`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct MemberExpression {
    pub loc: SourceLocation,
    pub object: Expression,
    pub property: Expression,

    /// `true` for `object[property]`.
    pub computed: bool,
}
impl Node for MemberExpression {
    node_accessors!(MemberExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.object.is_zero() && self.property.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.object, "member object");
        c.require(&self.property, "member property");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::MemberExpression(self), |visitor| {
            self.object.walk(visitor);
            self.property.walk(visitor);
        });
    }
}
impl FromJSON for MemberExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "MemberExpression")?;
        let computed: Option<bool> = FromJSON::import(&value["computed"])?;
        Ok(MemberExpression {
            loc: FromJSON::import(&value["loc"])?,
            object: FromJSON::import(&value["object"])?,
            property: FromJSON::import(&value["property"])?,
            computed: computed.unwrap_or(false),
        })
    }
}
impl ToJSON for MemberExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("object".to_string(), self.object.export());
        object.insert("property".to_string(), self.property.export());
        object.insert("computed".to_string(), self.computed.export());
        JSON::Object(object)
    }
}

/// `test ? consequent : alternate`
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ConditionalExpression {
    pub loc: SourceLocation,
    pub test: Expression,
    pub consequent: Expression,
    pub alternate: Expression,
}
impl Node for ConditionalExpression {
    node_accessors!(ConditionalExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero()
            && self.test.is_zero()
            && self.consequent.is_zero()
            && self.alternate.is_zero()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.test, "condition test");
        c.require(&self.consequent, "condition consequent");
        c.require(&self.alternate, "condition alternate");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::ConditionalExpression(self), |visitor| {
            self.test.walk(visitor);
            self.consequent.walk(visitor);
            self.alternate.walk(visitor);
        });
    }
}
impl FromJSON for ConditionalExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "ConditionalExpression")?;
        Ok(ConditionalExpression {
            loc: FromJSON::import(&value["loc"])?,
            test: FromJSON::import(&value["test"])?,
            consequent: FromJSON::import(&value["consequent"])?,
            alternate: FromJSON::import(&value["alternate"])?,
        })
    }
}
impl ToJSON for ConditionalExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("test".to_string(), self.test.export());
        object.insert("consequent".to_string(), self.consequent.export());
        object.insert("alternate".to_string(), self.alternate.export());
        JSON::Object(object)
    }
}

/// A function call, e.g. `f(a, b)`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct CallExpression {
    pub loc: SourceLocation,
    pub callee: Expression,
    pub arguments: Vec<Expression>,
}
impl Node for CallExpression {
    node_accessors!(CallExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.callee.is_zero() && self.arguments.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.callee, "callee");
        c.require_each(&self.arguments, "argument");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::CallExpression(self), |visitor| {
            self.callee.walk(visitor);
            for argument in &self.arguments {
                argument.walk(visitor);
            }
        });
    }
}
impl FromJSON for CallExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "CallExpression")?;
        Ok(CallExpression {
            loc: FromJSON::import(&value["loc"])?,
            callee: FromJSON::import(&value["callee"])?,
            arguments: FromJSON::import(&value["arguments"])?,
        })
    }
}
impl ToJSON for CallExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("callee".to_string(), self.callee.export());
        object.insert("arguments".to_string(), self.arguments.export());
        JSON::Object(object)
    }
}

/// A constructor call, e.g. `new F(a)`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct NewExpression {
    pub loc: SourceLocation,
    pub callee: Expression,
    pub arguments: Vec<Expression>,
}
impl Node for NewExpression {
    node_accessors!(NewExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.callee.is_zero() && self.arguments.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require(&self.callee, "new callee");
        c.require_each(&self.arguments, "new argument");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::NewExpression(self), |visitor| {
            self.callee.walk(visitor);
            for argument in &self.arguments {
                argument.walk(visitor);
            }
        });
    }
}
impl FromJSON for NewExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "NewExpression")?;
        Ok(NewExpression {
            loc: FromJSON::import(&value["loc"])?,
            callee: FromJSON::import(&value["callee"])?,
            arguments: FromJSON::import(&value["arguments"])?,
        })
    }
}
impl ToJSON for NewExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("callee".to_string(), self.callee.export());
        object.insert("arguments".to_string(), self.arguments.export());
        JSON::Object(object)
    }
}

/// Expressions separated by commas, e.g. `a, b, c`.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct SequenceExpression {
    pub loc: SourceLocation,
    pub expressions: Vec<Expression>,
}
impl Node for SequenceExpression {
    node_accessors!(SequenceExpression);
    fn is_zero(&self) -> bool {
        self.loc.is_zero() && self.expressions.is_empty()
    }
    fn errors(&self) -> Vec<SyntaxError> {
        let mut c = NodeChecker::new(self);
        c.require_each(&self.expressions, "expression in sequence");
        c.errors()
    }
    fn walk<'a>(&'a self, visitor: &mut dyn Visitor<'a>) {
        walk_node(visitor, NodeRef::SequenceExpression(self), |visitor| {
            for expression in &self.expressions {
                expression.walk(visitor);
            }
        });
    }
}
impl FromJSON for SequenceExpression {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        expect_type(value, "SequenceExpression")?;
        Ok(SequenceExpression {
            loc: FromJSON::import(&value["loc"])?,
            expressions: FromJSON::import(&value["expressions"])?,
        })
    }
}
impl ToJSON for SequenceExpression {
    fn export(&self) -> JSON {
        let mut object = node_object(self.type_name(), &self.loc);
        object.insert("expressions".to_string(), self.expressions.export());
        JSON::Object(object)
    }
}

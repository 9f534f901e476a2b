//! Decode ESTree JSON, encode it back, check that nothing was lost.

extern crate env_logger;
extern crate estree;
extern crate serde_json;
#[macro_use]
extern crate assert_matches;

use estree::*;

use serde_json::Value as JSON;

const SAMPLE: &str = include_str!("data/sample.json");

fn roundtrip<T: FromJSON + ToJSON>(source: &str) -> (T, JSON) {
    let _ = env_logger::try_init();
    let input: JSON = serde_json::from_str(source).expect("Invalid test JSON");
    let node: T = estree::from_value(&input).expect("Could not decode");
    let output = estree::to_value(&node);
    assert_eq!(input, output, "JSON changed across a round trip");
    (node, output)
}

#[test]
fn test_sample_program() {
    let (program, _) = roundtrip::<Program>(SAMPLE);
    assert_eq!(program.body.len(), 10);
    assert_eq!(program.loc.source.as_ref().map(String::as_str), Some("sample.js"));
    assert_eq!(program.loc.end, Position::new(40, 0));

    // Re-decoding the output yields the same tree.
    let text = estree::to_string(&program).unwrap();
    let again: Program = estree::from_str(&text).unwrap();
    assert_eq!(program, again);
}

#[test]
fn test_binary_expression_is_byte_identical() {
    let source = r#"{"type":"BinaryExpression","operator":"+","left":{"type":"Literal","value":1},"right":{"type":"Identifier","name":"x"}}"#;
    let expression: Expression = estree::from_str(source).unwrap();
    match expression {
        Expression::Binary(ref binary) => {
            assert_eq!(binary.operator, BinaryOperator::Plus);
            assert_eq!(binary.left, Expression::from(NumberLiteral::new(1.0)));
            assert_eq!(binary.right, Expression::from(Identifier::new("x")));
        }
        ref other => panic!("Unexpected {:?}", other),
    }
    assert_eq!(estree::to_string(&expression).unwrap(), source);
}

#[test]
fn test_sparse_array() {
    let (array, output) = roundtrip::<ArrayExpression>(
        r#"{
            "type": "ArrayExpression",
            "elements": [
                { "type": "Literal", "value": 1 },
                null,
                { "type": "Identifier", "name": "a" }
            ]
        }"#,
    );
    assert_eq!(array.elements.len(), 3);
    assert_eq!(
        array.elements[1],
        ExpressionOrArrayHole::ArrayHole(Box::new(ArrayHole::default()))
    );
    assert_eq!(output["elements"][1], JSON::Null);
}

#[test]
fn test_literals() {
    let (literal, _) = roundtrip::<Literal>(r#"{ "type": "Literal", "value": "abc" }"#);
    assert_eq!(literal, Literal::from(StringLiteral::new("abc")));

    let (literal, _) = roundtrip::<Literal>(r#"{ "type": "Literal", "value": -1.25 }"#);
    assert_eq!(literal, Literal::from(NumberLiteral::new(-1.25)));

    let (literal, _) = roundtrip::<Literal>(r#"{ "type": "Literal", "value": true }"#);
    assert_eq!(literal, Literal::from(BoolLiteral::new(true)));

    let (literal, _) = roundtrip::<Literal>(r#"{ "type": "Literal", "value": null }"#);
    assert_eq!(literal, Literal::from(NullLiteral::default()));

    let (literal, _) = roundtrip::<Literal>(
        r#"{ "type": "Literal", "regex": { "pattern": "^a|b$", "flags": "im" } }"#,
    );
    assert_eq!(literal, Literal::from(RegExpLiteral::new("^a|b$", "im")));
}

#[test]
fn test_statements() {
    roundtrip::<Statement>(
        r#"{
            "type": "IfStatement",
            "test": { "type": "Identifier", "name": "a" },
            "consequent": { "type": "ReturnStatement" }
        }"#,
    );
    roundtrip::<Statement>(
        r#"{
            "type": "ForStatement",
            "body": { "type": "EmptyStatement" }
        }"#,
    );
    roundtrip::<Statement>(
        r#"{
            "type": "ForStatement",
            "init": {
                "type": "AssignmentExpression",
                "operator": "=",
                "left": { "type": "Identifier", "name": "i" },
                "right": { "type": "Literal", "value": 0 }
            },
            "body": { "type": "EmptyStatement" }
        }"#,
    );
    roundtrip::<Statement>(
        r#"{
            "type": "ForInStatement",
            "left": {
                "type": "VariableDeclaration",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": { "type": "Identifier", "name": "k" }
                }],
                "kind": "var"
            },
            "right": { "type": "Identifier", "name": "o" },
            "body": { "type": "BlockStatement", "body": [] }
        }"#,
    );
    roundtrip::<Statement>(
        r#"{
            "type": "TryStatement",
            "block": { "type": "BlockStatement", "body": [] },
            "finalizer": { "type": "BlockStatement", "body": [] }
        }"#,
    );
}

#[test]
fn test_expressions() {
    roundtrip::<Expression>(
        r#"{
            "type": "FunctionExpression",
            "id": { "type": "Identifier", "name": "named" },
            "params": [{ "type": "Identifier", "name": "a" }],
            "body": { "type": "BlockStatement", "body": [] }
        }"#,
    );
    roundtrip::<Expression>(
        r#"{
            "type": "AssignmentExpression",
            "operator": ">>>=",
            "left": {
                "type": "MemberExpression",
                "object": { "type": "ThisExpression" },
                "property": { "type": "Identifier", "name": "x" },
                "computed": false
            },
            "right": {
                "type": "UnaryExpression",
                "operator": "typeof",
                "prefix": true,
                "argument": { "type": "Identifier", "name": "y" }
            }
        }"#,
    );
    roundtrip::<Expression>(
        r#"{
            "type": "ObjectExpression",
            "properties": [{
                "type": "Property",
                "key": { "type": "Literal", "value": 1 },
                "value": { "type": "Literal", "value": "one" },
                "kind": "init"
            }]
        }"#,
    );
}

#[test]
fn test_locations() {
    let source = r#"{
        "type": "Identifier",
        "loc": {
            "source": null,
            "start": { "line": 2, "column": 4 },
            "end": { "line": 2, "column": 7 }
        },
        "name": "abc"
    }"#;
    let (identifier, _) = roundtrip::<Identifier>(source);
    assert_eq!(identifier.loc.start, Position::new(2, 4));
    assert!(identifier.loc.source.is_none());

    // An unknown location is dropped altogether.
    let exported = estree::to_value(&Identifier::new("abc"));
    assert!(exported.get("loc").is_none());

    // As is any location, on request.
    let export = Export {
        locations: false,
        ..Export::default()
    };
    let exported = export.to_value(&identifier);
    assert!(exported.get("loc").is_none());
    assert_eq!(exported["name"], "abc");
}

#[test]
fn test_pretty() {
    let export = Export {
        pretty: true,
        ..Export::default()
    };
    let text = export.to_string(&Program::default()).unwrap();
    assert!(text.contains('\n'));
    let program: Program = estree::from_slice(&export.to_vec(&Program::default()).unwrap()).unwrap();
    assert_eq!(program, Program::default());
}

#[test]
fn test_built_trees() {
    // Trees built by hand come out as ESTree.
    let program = Program {
        loc: SourceLocation::default(),
        body: vec![
            DirectiveOrStatement::from(Directive::new("use strict")),
            DirectiveOrStatement::from(Statement::from(ExpressionStatement {
                loc: SourceLocation::default(),
                expression: Expression::from(CallExpression {
                    loc: SourceLocation::default(),
                    callee: Expression::from(Identifier::new("f")),
                    arguments: vec![Expression::from(NumberLiteral::new(0.5))],
                }),
            })),
        ],
    };
    let exported = estree::to_value(&program);
    assert_eq!(
        exported,
        serde_json::json!({
            "type": "Program",
            "body": [
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "Literal", "value": "use strict" },
                    "directive": "use strict"
                },
                {
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "CallExpression",
                        "callee": { "type": "Identifier", "name": "f" },
                        "arguments": [{ "type": "Literal", "value": 0.5 }]
                    }
                }
            ]
        })
    );
}

#[test]
fn test_assignment_to_identifier_held_as_expression() {
    let assignment = AssignmentExpression {
        left: PatternOrExpression::Expression(Expression::from(Identifier::new("a"))),
        right: Expression::from(NumberLiteral::new(1.0)),
        ..AssignmentExpression::default()
    };
    let text = estree::to_string(&assignment).unwrap();
    let back: AssignmentExpression = estree::from_str(&text).unwrap();
    assert_matches!(back.left, PatternOrExpression::Pattern(_));
    assert_eq!(assignment, back);

    // Other expressions stay on their side.
    let member = AssignmentExpression {
        left: PatternOrExpression::from(Expression::from(MemberExpression {
            object: Expression::from(Identifier::new("o")),
            property: Expression::from(Identifier::new("p")),
            ..MemberExpression::default()
        })),
        right: Expression::from(NumberLiteral::new(2.0)),
        ..AssignmentExpression::default()
    };
    let back: AssignmentExpression = estree::from_str(&estree::to_string(&member).unwrap()).unwrap();
    assert_eq!(member, back);
}

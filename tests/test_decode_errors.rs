//! Inputs that must be rejected, and how.

extern crate env_logger;
extern crate estree;
extern crate serde_json;
#[macro_use]
extern crate assert_matches;

use estree::*;

use serde_json::json;

fn decode_err<T: FromJSON + std::fmt::Debug>(source: &str) -> FromJSONError {
    let _ = env_logger::try_init();
    match estree::from_str::<T>(source) {
        Err(Error::Decode(err)) => err,
        other => panic!("Expected a decoding error, got {:?}", other),
    }
}

#[test]
fn test_statement_where_expression_expected() {
    let err = decode_err::<Expression>(r#"{ "type": "IfStatement" }"#);
    assert_matches!(err, FromJSONError::WrongType { .. });
    assert_eq!(err.kind(), ErrorKind::WrongType);

    // Deep in a tree, too.
    let err = decode_err::<Statement>(
        r#"{
            "type": "ExpressionStatement",
            "expression": { "type": "EmptyStatement" }
        }"#,
    );
    assert_eq!(err.to_string(), "expected Expression, got \"EmptyStatement\"");
}

#[test]
fn test_unknown_binary_operator() {
    let err = decode_err::<Expression>(
        r#"{
            "type": "BinaryExpression",
            "operator": "??",
            "left": { "type": "Identifier", "name": "a" },
            "right": { "type": "Identifier", "name": "b" }
        }"#,
    );
    assert_eq!(err.kind(), ErrorKind::WrongValue);
    match err {
        FromJSONError::WrongValue { ref got, .. } => assert_eq!(got, "??"),
        ref other => panic!("Unexpected {:?}", other),
    }
}

#[test]
fn test_let_does_not_fall_through() {
    // `let` is recognized as a VariableDeclaration, and rejected as such,
    // rather than reported as "not an expression".
    let err = decode_err::<Statement>(
        r#"{
            "type": "ForStatement",
            "init": {
                "type": "VariableDeclaration",
                "kind": "let",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": { "type": "Identifier", "name": "i" }
                }]
            },
            "body": { "type": "EmptyStatement" }
        }"#,
    );
    assert_eq!(err.kind(), ErrorKind::WrongValue);
    assert_eq!(err.to_string(), "unrecognized VariableDeclarationKind \"let\"");
}

#[test]
fn test_trials() {
    let value = json!({ "type": "ReturnStatement" });
    let (node, matched, err) = Expression::trial(&value).into_parts();
    assert!(node.is_none());
    assert!(!matched);
    assert_matches!(err, Some(FromJSONError::WrongType { .. }));

    let value = json!({ "type": "UnaryExpression", "operator": "!!", "argument": null });
    let (node, matched, err) = Expression::trial(&value).into_parts();
    assert!(node.is_none());
    assert!(matched);
    assert_matches!(err, Some(FromJSONError::WrongValue { .. }));

    let value = json!({ "type": "ThisExpression" });
    let (node, matched, err) = Expression::trial(&value).into_parts();
    assert_matches!(node, Some(Expression::This(_)));
    assert!(matched);
    assert!(err.is_none());

    // A Pattern is tried before an Expression, and an Expression still gets its chance.
    let value = json!({ "type": "Literal", "value": 1 });
    assert_matches!(
        PatternOrExpression::trial(&value),
        Trial::Match(PatternOrExpression::Expression(Expression::Literal(_)))
    );
    let value = json!({ "type": "Literal", "value": {} });
    assert_matches!(PatternOrExpression::trial(&value), Trial::Broken(_));
}

#[test]
fn test_not_a_node() {
    for source in &["3", "\"Identifier\"", "[]", "null", "{}", r#"{ "type": 3 }"#] {
        let err = decode_err::<Expression>(source);
        assert_eq!(err.kind(), ErrorKind::WrongType, "{}", source);
    }
    let err = decode_err::<Identifier>("{ \"type\": \"Literal\", \"value\": 1 }");
    assert_eq!(err.to_string(), "expected Identifier, got \"Literal\"");
}

#[test]
fn test_missing_required_child() {
    let err = decode_err::<Statement>(r#"{ "type": "ThrowStatement" }"#);
    assert_eq!(err.to_string(), "expected Expression, got null");

    let err = decode_err::<Identifier>(r#"{ "type": "Identifier" }"#);
    assert_matches!(err, FromJSONError::WrongType { .. });
}

#[test]
fn test_malformed_literal() {
    let err = decode_err::<Literal>(r#"{ "type": "Literal", "value": [1, 2] }"#);
    assert_matches!(err, FromJSONError::WrongType { .. });
    let err = decode_err::<Literal>(r#"{ "type": "Literal", "regex": "a+" }"#);
    assert_matches!(err, FromJSONError::WrongType { .. });
}

#[test]
fn test_malformed_json() {
    let err = decode_err::<Program>(r#"{ "type": "Program", "#);
    assert_matches!(err, FromJSONError::Json(_));
    let err = decode_err::<Program>(r#"{ "type": "Program", "loc": { "start": { "line": -1 } } }"#);
    assert_matches!(err, FromJSONError::Json(_));
}

#[test]
fn test_directive_without_string() {
    let err = decode_err::<DirectiveOrStatement>(
        r#"{
            "type": "ExpressionStatement",
            "expression": { "type": "Literal", "value": "use strict" },
            "directive": 1
        }"#,
    );
    assert_matches!(err, FromJSONError::WrongType { .. });
}

#[test]
fn test_unknown_property_kind() {
    let err = decode_err::<ObjectExpression>(
        r#"{
            "type": "ObjectExpression",
            "properties": [{
                "type": "Property",
                "key": { "type": "Identifier", "name": "a" },
                "value": { "type": "Literal", "value": 1 },
                "kind": "set!"
            }]
        }"#,
    );
    assert_eq!(err.to_string(), "unrecognized PropertyKind \"set!\"");
}

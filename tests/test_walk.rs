//! Depth-first traversal: order of the events, pruning, handing off to
//! another visitor and the leave sentinel.

extern crate env_logger;
extern crate estree;

use estree::*;

use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};

const SAMPLE: &str = include_str!("data/sample.json");

/// Records every call to `visit`.
#[derive(Default)]
struct Recorder {
    events: Vec<Option<NodeKind>>,

    /// Don't descend into these nodes.
    prune: Vec<NodeKind>,

    /// Panic when entering this node.
    panic_on: Option<NodeKind>,
}
impl<'a> Visitor<'a> for Recorder {
    fn visit<'v>(&'v mut self, node: Option<NodeRef<'a>>) -> VisitMe<&'v mut dyn Visitor<'a>> {
        let kind = node.map(|node| node.kind());
        self.events.push(kind);
        if let Some(kind) = kind {
            if self.panic_on == Some(kind) {
                panic!("Visitor panicking on {}", kind);
            }
            if self.prune.contains(&kind) {
                return VisitMe::DoneHere;
            }
        }
        VisitMe::HoldThis(self)
    }
}

/// Hands the children of every `ExpressionStatement` to `inner`.
#[derive(Default)]
struct Handoff {
    outer: Vec<Option<NodeKind>>,
    inner: Recorder,
}
impl<'a> Visitor<'a> for Handoff {
    fn visit<'v>(&'v mut self, node: Option<NodeRef<'a>>) -> VisitMe<&'v mut dyn Visitor<'a>> {
        let kind = node.map(|node| node.kind());
        self.outer.push(kind);
        if kind == Some(NodeKind::ExpressionStatement) {
            return VisitMe::HoldThis(&mut self.inner);
        }
        VisitMe::HoldThis(self)
    }
}

fn record<N: Node + ?Sized>(node: &N) -> Vec<Option<NodeKind>> {
    let _ = env_logger::try_init();
    let mut recorder = Recorder::default();
    node.walk(&mut recorder);
    recorder.events
}

fn statement(expression: Expression) -> ExpressionStatement {
    ExpressionStatement {
        loc: SourceLocation::default(),
        expression,
    }
}

#[test]
fn test_leaf() {
    assert_eq!(
        record(&Identifier::new("a")),
        vec![Some(NodeKind::Identifier), None]
    );
}

#[test]
fn test_single_child() {
    let node = statement(Expression::from(Identifier::new("a")));
    assert_eq!(
        record(&node),
        vec![
            Some(NodeKind::ExpressionStatement),
            Some(NodeKind::Identifier),
            None,
            None,
        ]
    );
}

#[test]
fn test_list() {
    let node = BlockStatement {
        loc: SourceLocation::default(),
        body: vec![
            Statement::from(EmptyStatement::default()),
            Statement::from(EmptyStatement::default()),
        ],
    };
    assert_eq!(
        record(&node),
        vec![
            Some(NodeKind::BlockStatement),
            Some(NodeKind::EmptyStatement),
            None,
            Some(NodeKind::EmptyStatement),
            None,
            None,
        ]
    );
}

#[test]
fn test_absent_optional_child() {
    assert_eq!(
        record(&ReturnStatement::default()),
        vec![Some(NodeKind::ReturnStatement), None]
    );
    let node = ReturnStatement {
        argument: Some(Expression::from(ThisExpression::default())),
        ..ReturnStatement::default()
    };
    assert_eq!(
        record(&node),
        vec![
            Some(NodeKind::ReturnStatement),
            Some(NodeKind::ThisExpression),
            None,
            None,
        ]
    );
}

#[test]
fn test_unions_are_transparent() {
    // Walking through a union node visits the concrete node it holds.
    let expression = Expression::from(NumberLiteral::new(1.0));
    assert_eq!(record(&expression), vec![Some(NodeKind::NumberLiteral), None]);

    let hole = ExpressionOrArrayHole::from(ArrayHole::default());
    assert_eq!(record(&hole), vec![Some(NodeKind::ArrayHole), None]);
}

#[test]
fn test_done_here_prunes() {
    let program: Program = estree::from_str(
        r#"{
            "type": "Program",
            "body": [
                {
                    "type": "IfStatement",
                    "test": { "type": "Identifier", "name": "a" },
                    "consequent": { "type": "EmptyStatement" }
                },
                { "type": "DebuggerStatement" }
            ]
        }"#,
    )
    .unwrap();
    let mut recorder = Recorder {
        prune: vec![NodeKind::IfStatement],
        ..Recorder::default()
    };
    program.walk(&mut recorder);
    // No leave sentinel for a pruned node.
    assert_eq!(
        recorder.events,
        vec![
            Some(NodeKind::Program),
            Some(NodeKind::IfStatement),
            Some(NodeKind::DebuggerStatement),
            None,
            None,
        ]
    );
}

#[test]
fn test_handoff() {
    let block = BlockStatement {
        loc: SourceLocation::default(),
        body: vec![
            Statement::from(statement(Expression::from(Identifier::new("a")))),
            Statement::from(EmptyStatement::default()),
        ],
    };
    let mut visitor = Handoff::default();
    block.walk(&mut visitor);
    assert_eq!(
        visitor.outer,
        vec![
            Some(NodeKind::BlockStatement),
            Some(NodeKind::ExpressionStatement),
            Some(NodeKind::EmptyStatement),
            None,
            None,
        ]
    );
    // The inner visitor is the one told that the statement is over.
    assert_eq!(
        visitor.inner.events,
        vec![Some(NodeKind::Identifier), None, None]
    );
}

#[test]
fn test_leave_despite_panic() {
    let node = statement(Expression::from(Identifier::new("a")));
    let mut recorder = Recorder {
        panic_on: Some(NodeKind::Identifier),
        ..Recorder::default()
    };
    let result = panic::catch_unwind(AssertUnwindSafe(|| node.walk(&mut recorder)));
    assert!(result.is_err());
    assert_eq!(
        recorder.events,
        vec![
            Some(NodeKind::ExpressionStatement),
            Some(NodeKind::Identifier),
            None,
        ]
    );
}

#[test]
fn test_sample_visits_every_kind() {
    let program: Program = estree::from_str(SAMPLE).unwrap();
    let events = record(&program);

    let entered = events.iter().filter(|event| event.is_some()).count();
    let left = events.iter().filter(|event| event.is_none()).count();
    assert_eq!(entered, left);

    let kinds: BTreeSet<NodeKind> = events.iter().filter_map(|event| *event).collect();
    assert_eq!(kinds.len(), 47, "{:?}", kinds);
    assert_eq!(events.first(), Some(&Some(NodeKind::Program)));
    assert_eq!(events.last(), Some(&None));

    assert_eq!(deep_min_version(&program), Version::ES5);
}

#[test]
fn test_closure_visitor() {
    let program: Program = estree::from_str(SAMPLE).unwrap();
    let mut identifiers = vec![];
    program.walk(&mut |node: Option<NodeRef>| {
        if let Some(NodeRef::Identifier(identifier)) = node {
            identifiers.push(identifier.name.clone());
        }
        // Skip function bodies.
        match node {
            Some(NodeRef::FunctionBody(_)) => false,
            _ => true,
        }
    });
    assert!(identifiers.len() > 0);
    assert!(identifiers.iter().all(|name| !name.is_empty()));
}

#[test]
fn test_binary_left_before_right() {
    let node = BinaryExpression {
        operator: BinaryOperator::Plus,
        left: Expression::from(Identifier::new("a")),
        right: Expression::from(NumberLiteral::new(1.0)),
        ..BinaryExpression::default()
    };
    assert_eq!(
        record(&node),
        vec![
            Some(NodeKind::BinaryExpression),
            Some(NodeKind::Identifier),
            None,
            Some(NodeKind::NumberLiteral),
            None,
            None,
        ]
    );
}

#[test]
fn test_if_order() {
    let node = IfStatement {
        test: Expression::from(Identifier::new("a")),
        consequent: Statement::from(EmptyStatement::default()),
        alternate: Some(Statement::from(DebuggerStatement::default())),
        ..IfStatement::default()
    };
    assert_eq!(
        record(&node),
        vec![
            Some(NodeKind::IfStatement),
            Some(NodeKind::Identifier),
            None,
            Some(NodeKind::EmptyStatement),
            None,
            Some(NodeKind::DebuggerStatement),
            None,
            None,
        ]
    );
}

#[test]
fn test_for_skips_absent_parts() {
    let node = ForStatement {
        test: Some(Expression::from(Identifier::new("a"))),
        body: Statement::from(EmptyStatement::default()),
        ..ForStatement::default()
    };
    assert_eq!(
        record(&node),
        vec![
            Some(NodeKind::ForStatement),
            Some(NodeKind::Identifier),
            None,
            Some(NodeKind::EmptyStatement),
            None,
            None,
        ]
    );

    let node = ForStatement {
        init: Some(VariableDeclarationOrExpression::from(Expression::from(
            Identifier::new("i"),
        ))),
        update: Some(Expression::from(ThisExpression::default())),
        body: Statement::from(EmptyStatement::default()),
        ..ForStatement::default()
    };
    assert_eq!(
        record(&node),
        vec![
            Some(NodeKind::ForStatement),
            Some(NodeKind::Identifier),
            None,
            Some(NodeKind::ThisExpression),
            None,
            Some(NodeKind::EmptyStatement),
            None,
            None,
        ]
    );
}

#[test]
fn test_for_in_declaration_order() {
    let node: ForInStatement = estree::from_str(
        r#"{
            "type": "ForInStatement",
            "left": {
                "type": "VariableDeclaration",
                "kind": "var",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": { "type": "Identifier", "name": "k" }
                }]
            },
            "right": { "type": "Identifier", "name": "o" },
            "body": { "type": "BlockStatement", "body": [{ "type": "EmptyStatement" }] }
        }"#,
    )
    .unwrap();
    assert_eq!(
        record(&node),
        vec![
            Some(NodeKind::ForInStatement),
            Some(NodeKind::VariableDeclaration),
            Some(NodeKind::VariableDeclarator),
            Some(NodeKind::Identifier),
            None,
            None,
            None,
            Some(NodeKind::Identifier),
            None,
            Some(NodeKind::BlockStatement),
            Some(NodeKind::EmptyStatement),
            None,
            None,
            None,
        ]
    );
}

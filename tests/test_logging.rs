//! Union dispatch reports what it found under `estree_decode`.

extern crate estree;
extern crate log;

use estree::*;
use log::{LevelFilter, Log, Metadata, Record};

use std::sync::Mutex;

/// Keeps the messages logged under `estree_decode`.
struct Capture {
    messages: Mutex<Vec<String>>,
}
impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == "estree_decode"
    }
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut messages) = self.messages.lock() {
                messages.push(record.args().to_string());
            }
        }
    }
    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    messages: Mutex::new(Vec::new()),
};

fn logged(sum: &str, found: &str) -> bool {
    let expected = format!("Decoding sum {}, found {}", sum, found);
    CAPTURE
        .messages
        .lock()
        .map(|messages| messages.iter().any(|message| *message == expected))
        .unwrap_or(false)
}

// A single test, as the logger is global to the binary.
#[test]
fn test_every_union_logs_its_dispatch() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let identifier = r#"{ "type": "Identifier", "name": "a" }"#;
    let declaration = r#"{
        "type": "VariableDeclaration",
        "kind": "var",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": { "type": "Identifier", "name": "a" }
        }]
    }"#;

    estree::from_str::<Pattern>(identifier).unwrap();
    estree::from_str::<PatternOrExpression>(identifier).unwrap();
    estree::from_str::<LiteralOrIdentifier>(identifier).unwrap();
    estree::from_str::<Literal>(r#"{ "type": "Literal", "value": 1 }"#).unwrap();
    estree::from_str::<Declaration>(declaration).unwrap();
    estree::from_str::<VariableDeclarationOrExpression>(declaration).unwrap();
    estree::from_str::<VariableDeclarationOrPattern>(declaration).unwrap();
    estree::from_str::<DirectiveOrStatement>(r#"{ "type": "EmptyStatement" }"#).unwrap();
    estree::from_str::<Expression>(r#"{ "type": "ThisExpression" }"#).unwrap();
    assert!(estree::from_str::<Pattern>("[]").is_err());

    assert!(logged("Pattern", "Identifier"));
    assert!(logged("PatternOrExpression", "Identifier"));
    assert!(logged("LiteralOrIdentifier", "Identifier"));
    assert!(logged("Literal", "Literal"));
    assert!(logged("Declaration", "VariableDeclaration"));
    assert!(logged("VariableDeclarationOrExpression", "VariableDeclaration"));
    assert!(logged("VariableDeclarationOrPattern", "VariableDeclaration"));
    assert!(logged("DirectiveOrStatement", "EmptyStatement"));
    assert!(logged("Statement", "EmptyStatement"));
    assert!(logged("Expression", "ThisExpression"));
    assert!(logged("Pattern", "no type"));
}

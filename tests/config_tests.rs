//! Attribute table loading tests

use std::io::Write;
use std::sync::Arc;

use mochi_text::config::A_NORMAL;
use mochi_text::{AttributeTable, AttributeTriple, Error, ParserKind};

#[test]
fn load_table_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "default_foreground": 15,
            "default_background": 4,
            "styles": {{ "loud": 1, "quiet": 2 }}
        }}"#
    )
    .unwrap();

    let table = AttributeTable::load(file.path()).unwrap();
    assert_eq!(table.default_foreground, 15);
    assert_eq!(table.style_code("loud"), Some(1));
    assert_eq!(table.style_code("bold"), None);

    let table = Arc::new(table);
    let mut markup = ParserKind::Markup.build(table.clone());
    markup.reset("${3,loud}x", None);
    assert_eq!(markup.records()[0].attributes.style, Some(1));

    let mut terminal = ParserKind::Terminal.build(table);
    terminal.reset("\x1b[0m", None);
    assert_eq!(
        terminal.records()[0].attributes,
        AttributeTriple::new(15, A_NORMAL, 4)
    );
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AttributeTable::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn load_rejects_ambiguous_styles() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "normal": 3, "reverse": 3 }}"#).unwrap();

    let err = AttributeTable::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::AmbiguousStyle { .. }));
    assert!(err.to_string().contains("reverse=3"));
}

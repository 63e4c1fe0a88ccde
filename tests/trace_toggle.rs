//! Trace macro toggling and class template tests

mod common;

use common::{caret, run, test_doc};
use tally::config::EditorConfig;
use tally::document::RopeDocument;
use tally::outcome::Outcome;
use tally::source::{LineSource, Position};
use tally::template::CLASS_TEMPLATE;
use tally::trace::{toggle_trace, TraceAction};
use tally::Command;

const TWO_FUNCTIONS: &str = "int f()\n{\n  return 1;\n}\n\nvoid g()\n{\n}\n";

#[test]
fn test_adds_trace_to_every_function() {
    let mut doc = RopeDocument::from_text(TWO_FUNCTIONS);
    let action = toggle_trace(&mut doc, &EditorConfig::default());

    assert_eq!(action, TraceAction::Added { lines: 2 });
    assert_eq!(
        doc.content(),
        "int f()\n{\n        TRACEFUNC;\n  return 1;\n}\n\nvoid g()\n{\n        TRACEFUNC;\n}\n"
    );
}

#[test]
fn test_add_is_idempotent() {
    let mut doc = RopeDocument::from_text(TWO_FUNCTIONS);
    let config = EditorConfig::default();
    toggle_trace(&mut doc, &config);
    let once = doc.content();

    let action = toggle_trace(&mut doc, &config);
    assert_eq!(action, TraceAction::Added { lines: 0 });
    assert_eq!(doc.content(), once);
}

#[test]
fn test_indent_follows_indent_size() {
    let mut doc = RopeDocument::from_text("{\n}");
    let config = EditorConfig {
        indent_size: 2,
        ..EditorConfig::default()
    };
    toggle_trace(&mut doc, &config);
    assert_eq!(doc.full_line(1), "    TRACEFUNC;");
}

#[test]
fn test_no_trace_marker_removes_lines() {
    let text = "/*NoTrace*/\nint f()\n{\n        TRACEFUNC;\n  TRACEADD(x);\n}\n";
    let mut doc = RopeDocument::from_text(text);
    let action = toggle_trace(&mut doc, &EditorConfig::default());

    assert_eq!(action, TraceAction::Removed { lines: 2 });
    assert_eq!(doc.content(), "/*NoTrace*/\nint f()\n{\n}\n");
}

#[test]
fn test_header_files_always_remove() {
    let mut doc =
        RopeDocument::from_text("class A\n{\n        TRACEFUNC;\n};").with_path("include/a.hpp");
    let action = toggle_trace(&mut doc, &EditorConfig::default());

    assert_eq!(action, TraceAction::Removed { lines: 1 });
    assert_eq!(doc.content(), "class A\n{\n};");
}

#[test]
fn test_source_files_add() {
    let mut doc = RopeDocument::from_text("{\n}").with_path("src/a.cpp");
    let action = toggle_trace(&mut doc, &EditorConfig::default());
    assert_eq!(action, TraceAction::Added { lines: 1 });
}

#[test]
fn test_toggle_command_keeps_caret_on_its_line() {
    let mut doc = test_doc(TWO_FUNCTIONS, 6, 0);
    let outcome = run(&mut doc, Command::ToggleTrace);

    assert_eq!(
        outcome,
        Outcome::Edited {
            lines: 2,
            caret: Position::new(7, 0)
        }
    );
    assert_eq!(doc.full_line(caret(&doc).0), "{");
}

#[test]
fn test_toggle_without_functions_is_unchanged() {
    let mut doc = test_doc("int x = 1;", 0, 0);
    assert!(run(&mut doc, Command::ToggleTrace).is_unchanged());
}

// ========================================================================
// Class template
// ========================================================================

#[test]
fn test_class_template_inserted_below_caret() {
    let mut doc = test_doc("class Widget\n{\n};", 1, 1);
    let outcome = run(&mut doc, Command::InsertClassTemplate);

    assert_eq!(
        outcome,
        Outcome::Edited {
            lines: CLASS_TEMPLATE.len(),
            caret: Position::new(1, 1)
        }
    );
    assert_eq!(doc.line_count(), 3 + CLASS_TEMPLATE.len());
    assert_eq!(doc.full_line(2), "\tpublic:");
    assert_eq!(doc.full_line(10), "\tprivate:");
    assert_eq!(doc.full_line(11), "};");
}

#[test]
fn test_class_template_on_last_line_appends() {
    let mut doc = test_doc("class Widget", 0, 0);
    run(&mut doc, Command::InsertClassTemplate);
    assert_eq!(doc.full_line(0), "class Widget");
    assert_eq!(doc.full_line(1), "\tpublic:");
    assert_eq!(doc.line_count(), 1 + CLASS_TEMPLATE.len());
}

#[test]
fn test_class_template_keeps_crlf_endings() {
    let mut doc = test_doc("class Widget\r\n{\r\n};", 1, 0);
    run(&mut doc, Command::InsertClassTemplate);

    let content = doc.content();
    assert_eq!(content.matches("\r\n").count(), content.matches('\n').count());
    assert_eq!(doc.full_line(2), "\tpublic:");
}

// ========================================================================
// Line endings and blank macro names
// ========================================================================

#[test]
fn test_trace_line_keeps_crlf_endings() {
    let mut doc = RopeDocument::from_text("void f()\r\n{\r\n}\r\n");
    toggle_trace(&mut doc, &EditorConfig::default());
    assert_eq!(doc.content(), "void f()\r\n{\r\n        TRACEFUNC;\r\n}\r\n");
}

#[test]
fn test_trace_line_after_unterminated_close_uses_crlf() {
    let mut doc = RopeDocument::from_text("void f()\r\n{\r\n}");
    toggle_trace(&mut doc, &EditorConfig::default());
    assert_eq!(doc.content(), "void f()\r\n{\r\n        TRACEFUNC;\r\n}");
}

#[test]
fn test_blank_trace_macro_leaves_document_alone() {
    let text = "/*NoTrace*/\nint a;\nint b;\n";
    let config = EditorConfig {
        trace_macro: String::new(),
        ..EditorConfig::default()
    };
    let mut doc = test_doc(text, 1, 0);
    let outcome = tally::execute(Command::ToggleTrace, &mut doc, &config);

    assert!(outcome.is_unchanged());
    assert_eq!(doc.content(), text);
}

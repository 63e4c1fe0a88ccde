//! Trace-macro toggling.
//!
//! Adds a trace macro line at the top of every function body, or strips all
//! trace lines when the document opts out (header files, or the no-trace
//! marker anywhere in the text). Function bodies are delimited by a `{` and
//! the next `}`, each at column 0.

use crate::config::EditorConfig;
use crate::scan::{tokenize, ClassSet, ScanDirection};
use crate::source::EditorContext;

/// What a trace toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceAction {
    /// Trace lines inserted into this many function bodies
    Added { lines: usize },
    /// This many trace lines deleted
    Removed { lines: usize },
}

impl TraceAction {
    pub fn lines(&self) -> usize {
        match self {
            TraceAction::Added { lines } | TraceAction::Removed { lines } => *lines,
        }
    }
}

/// Add or remove trace lines depending on the document
pub fn toggle_trace<C: EditorContext + ?Sized>(ctx: &mut C, config: &EditorConfig) -> TraceAction {
    if should_remove(ctx, config) {
        let lines = remove_trace_lines(ctx, config);
        tracing::info!(lines, "removed trace lines");
        TraceAction::Removed { lines }
    } else {
        let lines = add_trace_lines(ctx, config);
        tracing::info!(lines, "added trace lines");
        TraceAction::Added { lines }
    }
}

fn should_remove<C: EditorContext + ?Sized>(ctx: &C, config: &EditorConfig) -> bool {
    let is_header = ctx.file_path().is_some_and(|path| {
        let name = path.to_string_lossy();
        config
            .header_extensions
            .iter()
            .any(|ext| name.contains(ext.as_str()))
    });
    if is_header {
        return true;
    }
    !config.no_trace_marker.is_empty()
        && (0..ctx.line_count()).any(|line| ctx.full_line(line).contains(&config.no_trace_marker))
}

fn starts_with_class<C: EditorContext + ?Sized>(ctx: &C, line: usize, set: ClassSet) -> bool {
    let chars: Vec<char> = ctx.line_text(line, 0, 1).chars().collect();
    tokenize(&chars, set, ScanDirection::Forward).next().is_some()
}

/// Delete every line mentioning a trace macro. Returns the number removed.
pub fn remove_trace_lines<C: EditorContext + ?Sized>(ctx: &mut C, config: &EditorConfig) -> usize {
    let mut removed = 0;
    for line in (0..ctx.line_count()).rev() {
        let text = ctx.full_line(line);
        if config.trace_names().any(|name| text.contains(name)) {
            ctx.remove_line(line);
            removed += 1;
        }
    }
    removed
}

/// Insert a trace line after the opening brace of every function body that
/// lacks one. Returns the number inserted.
pub fn add_trace_lines<C: EditorContext + ?Sized>(ctx: &mut C, config: &EditorConfig) -> usize {
    if config.trace_macro.trim().is_empty() {
        tracing::warn!("no trace macro configured, nothing to add");
        return 0;
    }
    let line_count = ctx.line_count();
    let mut targets = Vec::new();
    let mut line = 0;

    while let Some(open) =
        (line..line_count).find(|&l| starts_with_class(&*ctx, l, ClassSet::FUNCTION_START))
    {
        let Some(close) =
            (open + 1..line_count).find(|&l| starts_with_class(&*ctx, l, ClassSet::FUNCTION_END))
        else {
            tracing::debug!(open, "unterminated function body");
            break;
        };
        let traced = (open + 1..close).any(|l| ctx.full_line(l).contains(&config.trace_macro));
        if !traced {
            targets.push(open + 1);
        }
        line = close + 1;
    }

    let stub = format!(
        "{}{};",
        " ".repeat(2 * config.indent_size),
        config.trace_macro
    );
    // Bottom-up so earlier targets keep their line numbers
    for &at in targets.iter().rev() {
        ctx.insert_line(at, &stub);
    }
    targets.len()
}

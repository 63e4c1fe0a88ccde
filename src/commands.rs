//! Command dispatch table
//!
//! Every editor action is one entry in `COMMANDS`. Navigation commands share
//! the boundary `Scanner` and differ only in its configuration; the editing
//! commands call their routine directly. `execute` is the single entry point.

use std::str::FromStr;

use crate::config::EditorConfig;
use crate::outcome::Outcome;
use crate::scan::Scanner;
use crate::source::{EditorContext, Position};
use crate::tab_stop::{insert_tab_stop, tab_over};
use crate::template::insert_class_template;
use crate::trace::toggle_trace;

/// Identifies an editor command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move to the next camel-case boundary
    CamelCaseForward,
    /// Move to the previous camel-case boundary
    CamelCaseBackward,
    /// Jump to the next line opening a function body
    FunctionNext,
    /// Jump to the previous line closing a function body
    FunctionPrevious,
    /// Move to the next tab stop, padding with spaces if needed
    TabStop,
    /// Advance the caret by one tab width
    TabOver,
    /// Add or remove trace macro lines
    ToggleTrace,
    /// Insert a class body skeleton below the caret line
    InsertClassTemplate,
}

/// What happens when a jump finds no boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnMiss {
    /// Leave caret and viewport alone
    Stay,
    /// Reveal everything from the caret line to the end of the document
    RevealToEnd,
}

/// How a command is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump {
        scanner: Scanner,
        on_miss: OnMiss,
        /// Keep `function_scroll_context` lines visible above the target
        scroll_context: bool,
    },
    TabStop,
    TabOver,
    ToggleTrace,
    ClassTemplate,
}

/// Metadata and behaviour for a command
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
    pub id: Command,
    pub name: &'static str,
    pub label: &'static str,
    pub action: Action,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: Command::CamelCaseForward,
        name: "CamelCaseForward",
        label: "Camel Case Forward",
        action: Action::Jump {
            scanner: Scanner::WORD_FORWARD,
            on_miss: OnMiss::Stay,
            scroll_context: false,
        },
    },
    CommandDef {
        id: Command::CamelCaseBackward,
        name: "CamelCaseBackward",
        label: "Camel Case Backward",
        action: Action::Jump {
            scanner: Scanner::WORD_BACKWARD,
            on_miss: OnMiss::Stay,
            scroll_context: false,
        },
    },
    CommandDef {
        id: Command::FunctionNext,
        name: "FunctionNext",
        label: "Next Function",
        action: Action::Jump {
            scanner: Scanner::FUNCTION_NEXT,
            on_miss: OnMiss::RevealToEnd,
            scroll_context: false,
        },
    },
    CommandDef {
        id: Command::FunctionPrevious,
        name: "FunctionPrevious",
        label: "Previous Function",
        action: Action::Jump {
            scanner: Scanner::FUNCTION_PREVIOUS,
            on_miss: OnMiss::Stay,
            scroll_context: true,
        },
    },
    CommandDef {
        id: Command::TabStop,
        name: "TabStop",
        label: "Align to Tab Stop",
        action: Action::TabStop,
    },
    CommandDef {
        id: Command::TabOver,
        name: "TabOver",
        label: "Tab Over",
        action: Action::TabOver,
    },
    CommandDef {
        id: Command::ToggleTrace,
        name: "ToggleTrace",
        label: "Toggle Trace Macros",
        action: Action::ToggleTrace,
    },
    CommandDef {
        id: Command::InsertClassTemplate,
        name: "InsertClassTemplate",
        label: "Insert Class Template",
        action: Action::ClassTemplate,
    },
];

impl Command {
    /// Get the definition for this command
    pub fn def(self) -> &'static CommandDef {
        // Indices follow the order of COMMANDS
        let index = match self {
            Command::CamelCaseForward => 0,
            Command::CamelCaseBackward => 1,
            Command::FunctionNext => 2,
            Command::FunctionPrevious => 3,
            Command::TabStop => 4,
            Command::TabOver => 5,
            Command::ToggleTrace => 6,
            Command::InsertClassTemplate => 7,
        };
        &COMMANDS[index]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from resolving a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
        }
    }
}

impl std::error::Error for CommandError {}

/// Lowercase and drop separators so `camel-case-forward` matches `CamelCaseForward`
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        COMMANDS
            .iter()
            .find(|def| normalize(def.name) == wanted)
            .map(|def| def.id)
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

/// Run `command` against the editor context
pub fn execute<C: EditorContext + ?Sized>(
    command: Command,
    ctx: &mut C,
    config: &EditorConfig,
) -> Outcome {
    let caret = ctx.caret();
    tracing::debug!(%command, %caret, "execute");

    let outcome = match command.def().action {
        Action::Jump {
            scanner,
            on_miss,
            scroll_context,
        } => jump(ctx, scanner, on_miss, scroll_context, config),
        Action::TabStop => insert_tab_stop(ctx, config.tab_size),
        Action::TabOver => tab_over(ctx, config.tab_size),
        Action::ToggleTrace => {
            let lines = toggle_trace(ctx, config).lines();
            edited(lines, ctx.caret())
        }
        Action::ClassTemplate => edited(insert_class_template(ctx), ctx.caret()),
    };

    tracing::debug!(%command, %outcome, "executed");
    outcome
}

fn edited(lines: usize, caret: Position) -> Outcome {
    if lines == 0 {
        Outcome::Unchanged
    } else {
        Outcome::Edited { lines, caret }
    }
}

fn jump<C: EditorContext + ?Sized>(
    ctx: &mut C,
    scanner: Scanner,
    on_miss: OnMiss,
    scroll_context: bool,
    config: &EditorConfig,
) -> Outcome {
    let caret = ctx.caret();
    match scanner.find(&*ctx, caret) {
        Some(target) => {
            ctx.set_caret(target);
            if scroll_context && config.function_scroll_context > 0 {
                ctx.ensure_visible(
                    target.line.saturating_sub(config.function_scroll_context),
                    target.line,
                );
            }
            Outcome::Moved { to: target }
        }
        None => match on_miss {
            OnMiss::Stay => Outcome::Unchanged,
            OnMiss::RevealToEnd => {
                let start_line = caret.line;
                let end_line = ctx.line_count().saturating_sub(1);
                ctx.ensure_visible(start_line, end_line);
                Outcome::Revealed {
                    start_line,
                    end_line,
                }
            }
        },
    }
}

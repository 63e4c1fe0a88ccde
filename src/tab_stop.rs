//! Tab-stop alignment and tab-over caret movement.

use crate::outcome::Outcome;
use crate::source::{LineSource, Position};

/// Widest tab stop accepted from config or the command line
pub const MAX_TAB_SIZE: usize = 256;

/// Bring `tab_size` into `1..=MAX_TAB_SIZE`.
pub fn clamp_tab_size(tab_size: usize) -> usize {
    tab_size.clamp(1, MAX_TAB_SIZE)
}

/// Smallest multiple of `tab_size` strictly greater than `column`.
/// A tab size of 0 is treated as 1.
pub fn next_tab_stop(column: usize, tab_size: usize) -> usize {
    let tab_size = clamp_tab_size(tab_size);
    (column / tab_size).saturating_add(1).saturating_mul(tab_size)
}

/// Move the caret to the next tab stop, padding with spaces when the stop
/// lies past the end of the line.
///
/// - empty line: insert `column + tab_size` spaces
/// - caret at (or past) end of a non-empty line: pad up to the stop
/// - stop at or beyond the end of the line: caret to end of line
/// - otherwise: caret to the stop
pub fn insert_tab_stop<S: LineSource + ?Sized>(src: &mut S, tab_size: usize) -> Outcome {
    let tab_size = clamp_tab_size(tab_size);
    let Position { line, column } = src.caret();
    let len = src.line_length(line);

    if len == 0 {
        let width = column.saturating_add(tab_size);
        src.replace_range(line, 0, 0, &" ".repeat(width));
        return edited(src, line, width);
    }

    let stop = next_tab_stop(column, tab_size);
    if column >= len {
        src.replace_range(line, len, len, &" ".repeat(stop - len));
        return edited(src, line, stop);
    }

    let target = if stop >= len { len } else { stop };
    tracing::debug!(line, column, stop, target, "tab stop move");
    src.set_caret(Position::new(line, target));
    Outcome::moved(line, target)
}

fn edited<S: LineSource + ?Sized>(src: &mut S, line: usize, column: usize) -> Outcome {
    let caret = Position::new(line, column);
    src.set_caret(caret);
    tracing::debug!(%caret, "tab stop padded");
    Outcome::Edited { lines: 1, caret }
}

/// Advance the caret by `tab_size` columns without editing.
///
/// At end of line the caret moves to the start of the next line; on the last
/// line that is a no-op.
pub fn tab_over<S: LineSource + ?Sized>(src: &mut S, tab_size: usize) -> Outcome {
    let tab_size = clamp_tab_size(tab_size);
    let Position { line, column } = src.caret();
    let len = src.line_length(line);

    let target = if column >= len {
        if line + 1 >= src.line_count() {
            return Outcome::Unchanged;
        }
        Position::new(line + 1, 0)
    } else {
        Position::new(line, column.saturating_add(tab_size).min(len))
    };

    src.set_caret(target);
    Outcome::Moved { to: target }
}

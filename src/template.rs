//! C++ class body skeleton

use crate::source::EditorContext;

/// Access sections and member-group comments of an empty class body
pub const CLASS_TEMPLATE: &[&str] = &[
    "\tpublic:",
    "\t\t// constructors",
    "\t\t// destructors",
    "\t\t// modifiers",
    "\t\t// selectors",
    "\t\t// iterators",
    "\t\t// friends",
    "\tprotected:",
    "\tprivate:",
];

/// Insert the class template below the caret line. Returns the number of
/// lines inserted; the caret stays where it was.
pub fn insert_class_template<C: EditorContext + ?Sized>(ctx: &mut C) -> usize {
    let at = ctx.caret().line + 1;
    for (i, line) in CLASS_TEMPLATE.iter().enumerate() {
        ctx.insert_line(at + i, line);
    }
    CLASS_TEMPLATE.len()
}

use crate::CommentNode;

/// CSS custom property the stylesheet multiplies into a margin; one step
/// per depth level, unbounded.
pub const INDENT_CSS_VAR: &str = "--indent-level";

/// Visual indentation of a comment: exactly its nesting depth. Stable for
/// as long as the forest is, since a comment's parent never changes.
pub fn indent_level(node: &CommentNode) -> u32 {
    node.depth
}

/// Inline style declaration exposing the indent level to the stylesheet.
pub fn indent_style(node: &CommentNode) -> String {
    format!("{}: {}", INDENT_CSS_VAR, indent_level(node))
}

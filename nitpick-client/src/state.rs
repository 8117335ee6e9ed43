use std::collections::HashMap;

use crate::api::CommentId;

/// Auxiliary panels on the project-members sidebar
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Panel {
    AddUser,
    RemoveUser,
}

/// Every independently toggleable unit of the page. Typed keys instead of
/// document-wide id lookups: each key maps to exactly one control and one
/// content region, and toggling one never touches another.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Toggle {
    /// The reply form under one comment
    ReplyForm(CommentId),
    /// The subtree of replies under one comment
    ReplyTree(CommentId),
    /// View vs edit mode of one comment's body
    EditComment(CommentId),
    Panel(Panel),
}

impl Toggle {
    /// Reply subtrees start expanded; forms and panels start hidden.
    pub fn default_open(&self) -> bool {
        matches!(self, Toggle::ReplyTree(_))
    }

    /// DOM id of the control bound to this toggle
    pub fn control_id(&self) -> String {
        match self {
            Toggle::ReplyForm(id) => format!("reply-link-{}", id.0),
            Toggle::ReplyTree(id) => format!("hide-replies-{}", id.0),
            Toggle::EditComment(id) => format!("edit-link-{}", id.0),
            Toggle::Panel(Panel::AddUser) => String::from("add-user"),
            Toggle::Panel(Panel::RemoveUser) => String::from("remove-user"),
        }
    }

    /// DOM id of the content region this toggle shows and hides
    pub fn region_id(&self) -> String {
        match self {
            Toggle::ReplyForm(id) => format!("reply-form-{}", id.0),
            Toggle::ReplyTree(id) => format!("reply-tree-{}", id.0),
            Toggle::EditComment(id) => format!("comment-form-{}", id.0),
            Toggle::Panel(Panel::AddUser) => String::from("add-user-form"),
            Toggle::Panel(Panel::RemoveUser) => String::from("remove-user-form"),
        }
    }
}

pub const GLYPH_EXPANDED: char = '▼';
pub const GLYPH_COLLAPSED: char = '▶';

/// Trailing label glyph for a hide-replies control. Derived from the same
/// boolean as the region's visibility, so the two cannot diverge.
pub fn glyph(open: bool) -> char {
    match open {
        true => GLYPH_EXPANDED,
        false => GLYPH_COLLAPSED,
    }
}

/// Swap the trailing directional glyph of a label, preserving the rest.
pub fn relabel(label: &str, open: bool) -> String {
    let base = label
        .strip_suffix(GLYPH_EXPANDED)
        .or_else(|| label.strip_suffix(GLYPH_COLLAPSED))
        .unwrap_or(label);
    format!("{}{}", base, glyph(open))
}

/// Ephemeral per-page UI state: one open/closed boolean per toggleable
/// unit, owned here and nowhere else. Not persisted across page loads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    open: HashMap<Toggle, bool>,
}

impl UiState {
    pub fn new() -> UiState {
        UiState::default()
    }

    pub fn is_open(&self, t: Toggle) -> bool {
        self.open.get(&t).copied().unwrap_or_else(|| t.default_open())
    }

    /// Flip one unit to its opposite state, returning the new state.
    pub fn toggle(&mut self, t: Toggle) -> bool {
        let now = !self.is_open(t);
        self.open.insert(t, now);
        now
    }
}

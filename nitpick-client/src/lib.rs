mod comment;
pub use comment::{build_forest, CommentNode};

mod dispatch;
pub use dispatch::{Dispatcher, ToggleEffect};

mod indent;
pub use indent::{indent_level, indent_style, INDENT_CSS_VAR};

mod snapshot;
pub use snapshot::Snapshot;

mod state;
pub use state::{glyph, relabel, Panel, Toggle, UiState, GLYPH_COLLAPSED, GLYPH_EXPANDED};

pub mod api {
    pub use nitpick_api::*;
}

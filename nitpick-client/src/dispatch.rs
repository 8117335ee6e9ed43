use std::collections::HashMap;

use crate::state::{glyph, Toggle, UiState};

/// Everything one click changes. The caller applies the whole effect
/// before handling the next event, and always stops propagation of the
/// originating click so a nested control never reaches an ancestor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ToggleEffect {
    /// DOM id of the affected content region
    pub region: String,
    pub now_open: bool,
    /// "pressed" indicator on the control itself
    pub control_active: bool,
    /// Trailing glyph for the control's label
    pub glyph: char,
}

/// Binds controls to regions and routes clicks to the state machine.
///
/// The control → region mapping is registered explicitly while rendering,
/// instead of being re-derived from id strings on every click. A control
/// that was never rendered (e.g. member panels for an unprivileged viewer)
/// is simply never bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dispatcher {
    state: UiState,
    regions: HashMap<Toggle, String>,
}

impl Dispatcher {
    pub fn new() -> Dispatcher {
        Dispatcher::default()
    }

    /// Register a control and its paired content region at render time.
    /// Returns the region's DOM id for the generated markup. Idempotent.
    pub fn bind(&mut self, t: Toggle) -> String {
        let region = t.region_id();
        self.regions.insert(t, region.clone());
        region
    }

    /// Drop a binding once its region left the page (e.g. the comment was
    /// deleted). Later clicks on the stale control become no-ops.
    pub fn unbind(&mut self, t: Toggle) {
        self.regions.remove(&t);
    }

    pub fn region_for(&self, t: Toggle) -> Option<&str> {
        self.regions.get(&t).map(|r| r as &str)
    }

    pub fn is_open(&self, t: Toggle) -> bool {
        self.state.is_open(t)
    }

    /// Handle one click on a control. Returns `None` when the control was
    /// never bound or its region is gone; the page treats that as a silent
    /// no-op. Only the clicked unit's state changes.
    pub fn click(&mut self, t: Toggle) -> Option<ToggleEffect> {
        let region = match self.regions.get(&t) {
            Some(r) => r.clone(),
            None => {
                tracing::debug!(toggle = ?t, "click on unbound control ignored");
                return None;
            }
        };
        let now_open = self.state.toggle(t);
        Some(ToggleEffect {
            region,
            now_open,
            control_active: now_open,
            glyph: glyph(now_open),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommentId, Uuid};
    use crate::state::{Panel, GLYPH_COLLAPSED, GLYPH_EXPANDED};

    fn cid(n: u128) -> CommentId {
        CommentId(Uuid::from_u128(n))
    }

    #[test]
    fn click_without_binding_is_noop() {
        let mut d = Dispatcher::new();
        assert_eq!(d.click(Toggle::ReplyForm(cid(1))), None);
        // state untouched by the ignored click
        assert!(!d.is_open(Toggle::ReplyForm(cid(1))));
    }

    #[test]
    fn hide_replies_collapses_and_flips_glyph() {
        let mut d = Dispatcher::new();
        let t = Toggle::ReplyTree(cid(7));
        let region = d.bind(t);
        assert_eq!(region, format!("reply-tree-{}", cid(7).0));
        assert!(d.is_open(t));

        let fx = d.click(t).unwrap();
        assert_eq!(fx.region, region);
        assert!(!fx.now_open);
        assert_eq!(fx.glyph, GLYPH_COLLAPSED);

        let fx = d.click(t).unwrap();
        assert!(fx.now_open);
        assert_eq!(fx.glyph, GLYPH_EXPANDED);
    }

    #[test]
    fn double_click_restores_visibility() {
        let mut d = Dispatcher::new();
        let t = Toggle::Panel(Panel::AddUser);
        d.bind(t);
        let before = d.is_open(t);
        d.click(t);
        d.click(t);
        assert_eq!(d.is_open(t), before);
    }

    #[test]
    fn toggling_one_unit_leaves_siblings_alone() {
        let mut d = Dispatcher::new();
        let x = Toggle::ReplyForm(cid(1));
        let y = Toggle::ReplyForm(cid(2));
        d.bind(x);
        d.bind(y);
        d.click(x);
        assert!(d.is_open(x));
        assert!(!d.is_open(y));
    }

    #[test]
    fn nested_reply_link_does_not_toggle_ancestor() {
        // comment 2 is nested inside comment 1's reply tree
        let mut d = Dispatcher::new();
        let ancestor = Toggle::ReplyTree(cid(1));
        let nested = Toggle::ReplyForm(cid(2));
        d.bind(ancestor);
        d.bind(nested);

        let fx = d.click(nested).unwrap();
        assert_eq!(fx.region, nested.region_id());
        assert!(d.is_open(nested));
        // the ancestor subtree stays expanded
        assert!(d.is_open(ancestor));
    }

    #[test]
    fn unbind_makes_later_clicks_noops() {
        let mut d = Dispatcher::new();
        let t = Toggle::EditComment(cid(3));
        d.bind(t);
        assert!(d.click(t).is_some());
        d.unbind(t);
        assert_eq!(d.click(t), None);
    }
}

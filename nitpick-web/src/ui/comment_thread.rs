use std::{collections::HashMap, rc::Rc, sync::Arc};

use nitpick_client::{
    api::{CommentId, User, UserId},
    CommentNode, Dispatcher, Toggle,
};
use yew::prelude::*;

use crate::ui::{CommentItem, FormTarget};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentThreadProps {
    /// Roots (or a subtree's children) in chronological order
    pub nodes: Rc<Vec<CommentNode>>,
    pub users: Arc<HashMap<UserId, User>>,
    pub dispatcher: Rc<Dispatcher>,
    pub drafts: Rc<HashMap<FormTarget, String>>,
    pub on_toggle: Callback<Toggle>,
    pub on_draft: Callback<(FormTarget, String)>,
    pub on_submit: Callback<FormTarget>,
    pub on_delete: Callback<CommentId>,
}

#[function_component(CommentThread)]
pub fn comment_thread(p: &CommentThreadProps) -> Html {
    html! {
        { for p.nodes.iter().map(|n| html! {
            <CommentItem
                node={n.clone()}
                users={p.users.clone()}
                dispatcher={p.dispatcher.clone()}
                drafts={p.drafts.clone()}
                on_toggle={p.on_toggle.clone()}
                on_draft={p.on_draft.clone()}
                on_submit={p.on_submit.clone()}
                on_delete={p.on_delete.clone()}
            />
        }) }
    }
}

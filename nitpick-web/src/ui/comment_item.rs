use std::{collections::HashMap, rc::Rc, sync::Arc};

use nitpick_client::{
    api::{CommentId, User, UserId},
    glyph, indent_style, CommentNode, Dispatcher, Toggle,
};
use yew::prelude::*;

use crate::ui::{CommentForm, CommentThread, FormTarget};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub node: CommentNode,
    pub users: Arc<HashMap<UserId, User>>,
    pub dispatcher: Rc<Dispatcher>,
    pub drafts: Rc<HashMap<FormTarget, String>>,
    pub on_toggle: Callback<Toggle>,
    pub on_draft: Callback<(FormTarget, String)>,
    pub on_submit: Callback<FormTarget>,
    pub on_delete: Callback<CommentId>,
}

fn toggle_button(p: &CommentItemProps, toggle: Toggle, label: String) -> Html {
    let on_toggle = p.on_toggle.clone();
    let active = p.dispatcher.is_open(toggle);
    html! {
        <button
            type="button"
            id={toggle.control_id()}
            class={classes!("btn", "btn-link", "btn-sm", active.then(|| "active"))}
            onclick={Callback::from(move |e: web_sys::MouseEvent| {
                // a click on a nested control must not reach ancestor items
                e.stop_propagation();
                on_toggle.emit(toggle);
            })}
        >
            { label }
        </button>
    }
}

#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let id = p.node.comment.id;
    let author = p
        .users
        .get(&p.node.comment.author_id)
        .map_or_else(|| String::from("(unknown)"), |u| u.name.clone());
    let editing = p.dispatcher.is_open(Toggle::EditComment(id));
    let reply_open = p.dispatcher.is_open(Toggle::ReplyForm(id));
    let tree_open = p.dispatcher.is_open(Toggle::ReplyTree(id));

    let hidden = |open: bool| (!open).then(|| "d-none");

    let on_delete = p.on_delete.clone();
    let delete_button = html! {
        <button
            type="button"
            class="btn btn-link btn-sm text-danger"
            onclick={Callback::from(move |e: web_sys::MouseEvent| {
                e.stop_propagation();
                on_delete.emit(id);
            })}
        >
            { "Delete" }
        </button>
    };

    let reply_target = FormTarget::Reply(id);
    let edit_target = FormTarget::Edit(id);
    let reply_draft = p.drafts.get(&reply_target).cloned().unwrap_or_default();
    let edit_draft = p.drafts.get(&edit_target).cloned().unwrap_or_default();

    html! {
        <div
            class="comment card my-2"
            id={format!("comment-{}", id.0)}
            data-depth={p.node.depth.to_string()}
            style={indent_style(&p.node)}
        >
            <div class="card-body">
                <div class="comment-meta text-muted">
                    { format!("{} on {}", author, p.node.comment.created_at.format("%Y-%m-%d %H:%M")) }
                </div>

                // the body and its edit form swap visibility as one unit
                <div id={format!("comment-text-{}", id.0)} class={classes!(hidden(!editing))}>
                    { &p.node.comment.text }
                </div>
                <div
                    id={Toggle::EditComment(id).region_id()}
                    class={classes!(hidden(editing))}
                >
                    <CommentForm
                        value={edit_draft}
                        placeholder="Edit comment"
                        submit_label="Save"
                        on_change={p.on_draft.reform(move |s| (edit_target, s))}
                        on_submit={p.on_submit.reform(move |_| edit_target)}
                    />
                </div>

                <div class="comment-actions">
                    { toggle_button(p, Toggle::ReplyForm(id), String::from("Reply")) }
                    { toggle_button(p, Toggle::EditComment(id), String::from("Edit")) }
                    { delete_button }
                    { for (!p.node.children.is_empty()).then(|| toggle_button(
                        p,
                        Toggle::ReplyTree(id),
                        format!("Hide replies {}", glyph(tree_open)),
                    )) }
                </div>

                <div
                    id={Toggle::ReplyForm(id).region_id()}
                    class={classes!(hidden(reply_open))}
                >
                    <CommentForm
                        value={reply_draft}
                        placeholder="Write a reply"
                        submit_label="Reply"
                        on_change={p.on_draft.reform(move |s| (reply_target, s))}
                        on_submit={p.on_submit.reform(move |_| reply_target)}
                    />
                </div>

                <div
                    id={Toggle::ReplyTree(id).region_id()}
                    class={classes!(hidden(tree_open))}
                >
                    <CommentThread
                        nodes={Rc::new(p.node.children.clone())}
                        users={p.users.clone()}
                        dispatcher={p.dispatcher.clone()}
                        drafts={p.drafts.clone()}
                        on_toggle={p.on_toggle.clone()}
                        on_draft={p.on_draft.clone()}
                        on_submit={p.on_submit.clone()}
                        on_delete={p.on_delete.clone()}
                    />
                </div>
            </div>
        </div>
    }
}

use std::{collections::HashMap, sync::Arc};

use nitpick_client::{
    api::{Project, User, UserId},
    Panel, Toggle,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct MemberPanelProps {
    pub project: Project,
    pub users: Arc<HashMap<UserId, User>>,
    pub add_open: bool,
    pub remove_open: bool,
    pub on_toggle: Callback<Toggle>,
    pub on_add: Callback<UserId>,
    pub on_remove: Callback<UserId>,
}

fn panel_button(p: &MemberPanelProps, panel: Panel, open: bool, label: &'static str) -> Html {
    let toggle = Toggle::Panel(panel);
    html! {
        <button
            type="button"
            id={toggle.control_id()}
            class={classes!("btn", "btn-outline-primary", "btn-sm", open.then(|| "active"))}
            onclick={p.on_toggle.reform(move |_| toggle)}
        >
            { label }
        </button>
    }
}

fn user_list(
    users: Vec<(&UserId, &User)>,
    action: &'static str,
    on_pick: &Callback<UserId>,
) -> Html {
    let mut users = users;
    users.sort_by(|a, b| a.1.name.cmp(&b.1.name));
    html! {
        <ul class="list-group">
            { for users.into_iter().map(|(id, u)| {
                let id = *id;
                html! {
                    <li class="list-group-item d-flex justify-content-between">
                        { &u.name }
                        <button
                            type="button"
                            class="btn btn-link btn-sm"
                            onclick={on_pick.reform(move |_| id)}
                        >
                            { action }
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}

/// Membership management for the project owner: two independent panels,
/// one listing users who can be added and one listing current members.
#[function_component(MemberPanel)]
pub fn member_panel(p: &MemberPanelProps) -> Html {
    let hidden = |open: bool| (!open).then(|| "d-none");

    let addable = p
        .users
        .iter()
        .filter(|&(id, _)| !p.project.is_member(id))
        .collect::<Vec<_>>();
    let removable = p
        .users
        .iter()
        .filter(|&(id, _)| p.project.members.contains(id))
        .collect::<Vec<_>>();

    html! {
        <div class="member-panel my-3">
            <div class="d-flex gap-2">
                { panel_button(p, Panel::AddUser, p.add_open, "Add user") }
                { panel_button(p, Panel::RemoveUser, p.remove_open, "Remove user") }
            </div>
            <div
                id={Toggle::Panel(Panel::AddUser).region_id()}
                class={classes!("mt-2", hidden(p.add_open))}
            >
                { user_list(addable, "Add", &p.on_add) }
            </div>
            <div
                id={Toggle::Panel(Panel::RemoveUser).region_id()}
                class={classes!("mt-2", hidden(p.remove_open))}
            >
                { user_list(removable, "Remove", &p.on_remove) }
            </div>
        </div>
    }
}

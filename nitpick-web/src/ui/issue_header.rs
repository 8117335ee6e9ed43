use std::{collections::HashMap, sync::Arc};

use nitpick_client::api::{Issue, IssueStatus, User, UserId};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct IssueHeaderProps {
    pub issue: Issue,
    pub users: Arc<HashMap<UserId, User>>,
    pub on_status_change: Callback<IssueStatus>,
}

#[function_component(IssueHeader)]
pub fn issue_header(p: &IssueHeaderProps) -> Html {
    let name = |id: &UserId| {
        p.users
            .get(id)
            .map_or_else(|| String::from("(unknown)"), |u| u.name.clone())
    };

    let (status_label, status_class) = match p.issue.status {
        IssueStatus::Open => ("Open", "badge bg-success"),
        IssueStatus::Closed => ("Closed", "badge bg-secondary"),
    };
    let closed_note = p.issue.closed_by.as_ref().map(|by| {
        html! {
            <span class="text-muted ms-2">{ format!("closed by {}", name(by)) }</span>
        }
    });

    let (button_label, next_status) = match p.issue.is_open() {
        true => ("Close issue", IssueStatus::Closed),
        false => ("Reopen issue", IssueStatus::Open),
    };

    html! {
        <div class="issue-header">
            <h1>{ &p.issue.title }</h1>
            <div class="d-flex align-items-center gap-2">
                <span class={status_class}>{ status_label }</span>
                <span class="badge bg-info">{ p.issue.priority.label() }</span>
                <span class="text-muted">
                    { format!("opened by {} on {}", name(&p.issue.created_by),
                              p.issue.created_at.format("%Y-%m-%d")) }
                </span>
                { for closed_note }
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-sm ms-auto"
                    onclick={p.on_status_change.reform(move |_| next_status)}
                >
                    { button_label }
                </button>
            </div>
            <p class="issue-summary mt-2">{ &p.issue.summary }</p>
        </div>
    }
}

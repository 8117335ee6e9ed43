use std::{collections::HashMap, rc::Rc};

use nitpick_client::{
    api::{self, Comment, CommentId, Issue, IssueId, IssueStatus, Project, User, UserId},
    CommentNode, Dispatcher, Panel, Snapshot, Toggle,
};
use yew::prelude::*;

use crate::{api as server, ui, ViewerInfo};

/// One text form on the page; drafts are keyed by this so a rejected
/// submission keeps its text for the user to correct and resubmit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FormTarget {
    NewComment,
    Reply(CommentId),
    Edit(CommentId),
}

impl FormTarget {
    fn parent(&self) -> Option<CommentId> {
        match self {
            FormTarget::NewComment => None,
            FormTarget::Reply(id) => Some(*id),
            FormTarget::Edit(_) => None,
        }
    }
}

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
    pub viewer: ViewerInfo,
    pub on_disconnect: Callback<()>,
}

pub enum AppMsg {
    ReceivedViewer(UserId),
    ReceivedIssue(Issue),
    ReceivedProject(Project),
    ReceivedUsers(Vec<User>),
    ReceivedComments(Vec<Comment>),

    Clicked(Toggle),
    DraftChanged(FormTarget, String),
    Submit(FormTarget),
    ReplyOk(Comment),
    EditOk(Comment),
    DeleteComment(CommentId),
    DeleteOk(CommentId),
    SetStatus(IssueStatus),
    StatusOk(IssueStatus),
    AddMember(UserId),
    RemoveMember(UserId),
    MembershipOk { user: UserId, member: bool },

    Failed(api::Error),
}

pub struct App {
    snapshot: Snapshot,
    dispatcher: Dispatcher,
    drafts: HashMap<FormTarget, String>,
    error: Option<String>,
}

impl App {
    fn issue_id(&self, ctx: &Context<Self>) -> IssueId {
        ctx.props().viewer.issue
    }

    fn comment_text(&self, issue: IssueId, id: CommentId) -> Option<String> {
        self.snapshot
            .comments
            .get(&issue)
            .and_then(|l| l.iter().find(|c| c.id == id))
            .map(|c| c.text.clone())
    }

    /// Register every control currently on the page with the dispatcher.
    /// Idempotent; called again whenever the comment set changes.
    fn rebind(&mut self, ctx: &Context<Self>) {
        fn bind_all(d: &mut Dispatcher, nodes: &[CommentNode]) {
            for n in nodes {
                d.bind(Toggle::ReplyForm(n.comment.id));
                d.bind(Toggle::EditComment(n.comment.id));
                if !n.children.is_empty() {
                    d.bind(Toggle::ReplyTree(n.comment.id));
                }
                bind_all(d, &n.children);
            }
        }
        let forest = self.snapshot.comment_forest(self.issue_id(ctx));
        bind_all(&mut self.dispatcher, &forest);

        // member panels only exist for the project owner
        let project = self
            .snapshot
            .issues
            .get(&self.issue_id(ctx))
            .map(|i| i.project_id);
        if let Some(p) = project {
            if self.snapshot.can_manage_members(&p) {
                self.dispatcher.bind(Toggle::Panel(Panel::AddUser));
                self.dispatcher.bind(Toggle::Panel(Panel::RemoveUser));
            }
        }
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        macro_rules! fetch {
            ($f:expr, $msg:ident) => {{
                let info = ctx.props().viewer.clone();
                ctx.link().send_future(async move {
                    match $f(&info).await {
                        Ok(r) => AppMsg::$msg(r),
                        Err(e) => AppMsg::Failed(e),
                    }
                });
            }};
        }
        fetch!(server::whoami, ReceivedViewer);
        fetch!(server::fetch_issue, ReceivedIssue);
        fetch!(server::fetch_users, ReceivedUsers);
        fetch!(server::fetch_comments, ReceivedComments);

        App {
            snapshot: Snapshot::stub(),
            dispatcher: Dispatcher::new(),
            drafts: HashMap::new(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let info = ctx.props().viewer.clone();
        let issue_id = self.issue_id(ctx);
        match msg {
            AppMsg::ReceivedViewer(id) => {
                self.snapshot.viewer = id;
            }
            AppMsg::ReceivedIssue(issue) => {
                let project = issue.project_id;
                self.snapshot.add_issues(vec![issue]);
                ctx.link().send_future(async move {
                    match server::fetch_project(&info, project).await {
                        Ok(p) => AppMsg::ReceivedProject(p),
                        Err(e) => AppMsg::Failed(e),
                    }
                });
            }
            AppMsg::ReceivedProject(project) => {
                self.snapshot.add_projects(vec![project]);
                self.rebind(ctx);
            }
            AppMsg::ReceivedUsers(users) => {
                self.snapshot.add_users(users);
            }
            AppMsg::ReceivedComments(comments) => {
                self.snapshot.set_comments(issue_id, comments);
                self.rebind(ctx);
            }

            AppMsg::Clicked(t) => match self.dispatcher.click(t) {
                // missing region: silent no-op, nothing to re-render
                None => return false,
                Some(fx) => {
                    if let Toggle::EditComment(id) = t {
                        // seed the edit form with the current text
                        let target = FormTarget::Edit(id);
                        if fx.now_open && !self.drafts.contains_key(&target) {
                            if let Some(text) = self.comment_text(issue_id, id) {
                                self.drafts.insert(target, text);
                            }
                        }
                    }
                }
            },
            AppMsg::DraftChanged(target, text) => {
                self.drafts.insert(target, text);
            }

            AppMsg::Submit(target) => {
                let text = self.drafts.get(&target).cloned().unwrap_or_default();
                match target {
                    FormTarget::Edit(id) => ctx.link().send_future(async move {
                        match server::submit_edit(&info, id, text).await {
                            Ok(c) => AppMsg::EditOk(c),
                            Err(e) => AppMsg::Failed(e),
                        }
                    }),
                    _ => {
                        let parent = target.parent();
                        ctx.link().send_future(async move {
                            match server::submit_reply(&info, parent, text).await {
                                Ok(c) => AppMsg::ReplyOk(c),
                                Err(e) => AppMsg::Failed(e),
                            }
                        })
                    }
                }
                return false;
            }
            AppMsg::ReplyOk(c) => {
                self.error = None;
                let target = match c.parent_id {
                    None => FormTarget::NewComment,
                    Some(p) => FormTarget::Reply(p),
                };
                self.drafts.remove(&target);
                if let Some(p) = c.parent_id {
                    if self.dispatcher.is_open(Toggle::ReplyForm(p)) {
                        self.dispatcher.click(Toggle::ReplyForm(p));
                    }
                }
                self.snapshot.insert_comment(c);
                self.rebind(ctx);
            }
            AppMsg::EditOk(c) => {
                self.error = None;
                self.drafts.remove(&FormTarget::Edit(c.id));
                if self.dispatcher.is_open(Toggle::EditComment(c.id)) {
                    self.dispatcher.click(Toggle::EditComment(c.id));
                }
                self.snapshot.apply_edit(c);
            }

            AppMsg::DeleteComment(id) => {
                ctx.link().send_future(async move {
                    match server::delete_comment(&info, id).await {
                        Ok(()) => AppMsg::DeleteOk(id),
                        Err(e) => AppMsg::Failed(e),
                    }
                });
                return false;
            }
            AppMsg::DeleteOk(id) => {
                self.error = None;
                self.snapshot.remove_comment(issue_id, id);
                self.dispatcher.unbind(Toggle::ReplyForm(id));
                self.dispatcher.unbind(Toggle::EditComment(id));
                self.dispatcher.unbind(Toggle::ReplyTree(id));
            }

            AppMsg::SetStatus(status) => {
                ctx.link().send_future(async move {
                    match server::set_issue_status(&info, status).await {
                        Ok(()) => AppMsg::StatusOk(status),
                        Err(e) => AppMsg::Failed(e),
                    }
                });
                return false;
            }
            AppMsg::StatusOk(status) => {
                self.error = None;
                let by = self.snapshot.viewer;
                self.snapshot.set_issue_status(issue_id, status, by);
            }

            AppMsg::AddMember(user) | AppMsg::RemoveMember(user) => {
                let member = matches!(msg, AppMsg::AddMember(_));
                let project = match self.snapshot.issues.get(&issue_id) {
                    Some(i) => i.project_id,
                    None => return false,
                };
                ctx.link().send_future(async move {
                    let res = match member {
                        true => server::add_member(&info, project, user).await,
                        false => server::remove_member(&info, project, user).await,
                    };
                    match res {
                        Ok(()) => AppMsg::MembershipOk { user, member },
                        Err(e) => AppMsg::Failed(e),
                    }
                });
                return false;
            }
            AppMsg::MembershipOk { user, member } => {
                self.error = None;
                let project = match self.snapshot.issues.get(&issue_id) {
                    Some(i) => i.project_id,
                    None => return false,
                };
                self.snapshot.set_membership(project, user, member);
            }

            AppMsg::Failed(e) => match e {
                // a gone entity is a defined no-op, never user-visible
                api::Error::NotFound(_) => {
                    tracing::debug!(err = ?e, "operation target vanished, ignoring");
                    return false;
                }
                e => self.error = Some(e.to_string()),
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let issue_id = self.issue_id(ctx);
        let issue = match self.snapshot.issues.get(&issue_id) {
            None => return html! { <h1 class="m-4">{ "Loading..." }</h1> },
            Some(i) => i.clone(),
        };
        let comment_count = self
            .snapshot
            .comments
            .get(&issue_id)
            .map_or(0, |l| l.len());
        let forest = Rc::new(self.snapshot.comment_forest(issue_id));
        let dispatcher = Rc::new(self.dispatcher.clone());
        let drafts = Rc::new(self.drafts.clone());
        let users = self.snapshot.users.clone();

        let member_panel = self
            .snapshot
            .projects
            .get(&issue.project_id)
            .filter(|p| self.snapshot.can_manage_members(&p.id))
            .map(|p| {
                html! {
                    <ui::MemberPanel
                        project={p.clone()}
                        users={users.clone()}
                        add_open={self.dispatcher.is_open(Toggle::Panel(Panel::AddUser))}
                        remove_open={self.dispatcher.is_open(Toggle::Panel(Panel::RemoveUser))}
                        on_toggle={ctx.link().callback(AppMsg::Clicked)}
                        on_add={ctx.link().callback(AppMsg::AddMember)}
                        on_remove={ctx.link().callback(AppMsg::RemoveMember)}
                    />
                }
            });

        let new_comment_draft = self
            .drafts
            .get(&FormTarget::NewComment)
            .cloned()
            .unwrap_or_default();

        html! {
            <div class="container py-4">
                <div class="d-flex justify-content-end">
                    <button
                        type="button"
                        class="btn btn-light"
                        onclick={ctx.props().on_disconnect.reform(|_| ())}
                    >
                        { "Disconnect" }
                    </button>
                </div>

                <ui::ErrorBanner message={self.error.clone()} />

                <ui::IssueHeader
                    issue={issue}
                    users={users.clone()}
                    on_status_change={ctx.link().callback(AppMsg::SetStatus)}
                />

                { for member_panel }

                <h2 class="mt-4">{ format!("Comments ({})", comment_count) }</h2>
                <ui::CommentThread
                    nodes={forest}
                    users={users}
                    {dispatcher}
                    {drafts}
                    on_toggle={ctx.link().callback(AppMsg::Clicked)}
                    on_draft={ctx.link().callback(|(t, s)| AppMsg::DraftChanged(t, s))}
                    on_submit={ctx.link().callback(AppMsg::Submit)}
                    on_delete={ctx.link().callback(AppMsg::DeleteComment)}
                />

                <div class="new-comment my-3">
                    <ui::CommentForm
                        value={new_comment_draft}
                        placeholder="Add a comment"
                        submit_label="Comment"
                        on_change={ctx.link().callback(|s| AppMsg::DraftChanged(FormTarget::NewComment, s))}
                        on_submit={ctx.link().callback(|_| AppMsg::Submit(FormTarget::NewComment))}
                    />
                </div>
            </div>
        }
    }
}

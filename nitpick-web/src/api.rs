use nitpick_client::api::{
    self, Comment, CommentId, Issue, IssueStatus, Project, ProjectId, User, UserId,
};

use crate::ViewerInfo;

fn transient(e: reqwest::Error) -> api::Error {
    api::Error::TransientIo(e.to_string())
}

async fn failure_from(resp: reqwest::Response) -> api::Error {
    let body = match resp.bytes().await {
        Ok(b) => b.to_vec(),
        Err(e) => return transient(e),
    };
    api::Error::parse(&body)
        .unwrap_or_else(|e| api::Error::TransientIo(format!("unintelligible error response: {e}")))
}

async fn get_json<R>(info: &ViewerInfo, path: &str) -> Result<R, api::Error>
where
    R: for<'de> serde::Deserialize<'de>,
{
    let resp = crate::CLIENT
        .get(format!("{}/api/{}", info.host, path))
        .send()
        .await
        .map_err(transient)?;
    if !resp.status().is_success() {
        return Err(failure_from(resp).await);
    }
    resp.json().await.map_err(transient)
}

async fn post_json<B, R>(info: &ViewerInfo, path: &str, body: &B) -> Result<R, api::Error>
where
    B: serde::Serialize,
    R: for<'de> serde::Deserialize<'de>,
{
    let resp = crate::CLIENT
        .post(format!("{}/api/{}", info.host, path))
        .json(body)
        .send()
        .await
        .map_err(transient)?;
    if !resp.status().is_success() {
        return Err(failure_from(resp).await);
    }
    resp.json().await.map_err(transient)
}

pub async fn whoami(info: &ViewerInfo) -> Result<UserId, api::Error> {
    get_json(info, "whoami").await
}

pub async fn fetch_issue(info: &ViewerInfo) -> Result<Issue, api::Error> {
    get_json(info, &format!("issue/{}", info.issue.0)).await
}

pub async fn fetch_project(info: &ViewerInfo, project: ProjectId) -> Result<Project, api::Error> {
    get_json(info, &format!("project/{}", project.0)).await
}

pub async fn fetch_users(info: &ViewerInfo) -> Result<Vec<User>, api::Error> {
    get_json(info, "fetch-users").await
}

pub async fn fetch_comments(info: &ViewerInfo) -> Result<Vec<Comment>, api::Error> {
    get_json(info, &format!("issue/{}/comments", info.issue.0)).await
}

#[derive(serde::Serialize)]
struct ReplyBody {
    parent_id: Option<CommentId>,
    text: String,
}

pub async fn submit_reply(
    info: &ViewerInfo,
    parent: Option<CommentId>,
    text: String,
) -> Result<Comment, api::Error> {
    post_json(
        info,
        &format!("issue/{}/reply", info.issue.0),
        &ReplyBody {
            parent_id: parent,
            text,
        },
    )
    .await
}

#[derive(serde::Serialize)]
struct EditBody {
    text: String,
}

pub async fn submit_edit(
    info: &ViewerInfo,
    comment: CommentId,
    text: String,
) -> Result<Comment, api::Error> {
    post_json(info, &format!("comment/{}/edit", comment.0), &EditBody { text }).await
}

pub async fn delete_comment(info: &ViewerInfo, comment: CommentId) -> Result<(), api::Error> {
    post_json(info, &format!("comment/{}/delete", comment.0), &()).await
}

#[derive(serde::Serialize)]
struct StatusBody {
    status: IssueStatus,
}

pub async fn set_issue_status(
    info: &ViewerInfo,
    status: IssueStatus,
) -> Result<(), api::Error> {
    post_json(
        info,
        &format!("issue/{}/status", info.issue.0),
        &StatusBody { status },
    )
    .await
}

#[derive(serde::Serialize)]
struct MemberBody {
    user: UserId,
}

pub async fn add_member(
    info: &ViewerInfo,
    project: ProjectId,
    user: UserId,
) -> Result<(), api::Error> {
    post_json(
        info,
        &format!("project/{}/members/add", project.0),
        &MemberBody { user },
    )
    .await
}

pub async fn remove_member(
    info: &ViewerInfo,
    project: ProjectId,
    user: UserId,
) -> Result<(), api::Error> {
    post_json(
        info,
        &format!("project/{}/members/remove", project.0),
        &MemberBody { user },
    )
    .await
}

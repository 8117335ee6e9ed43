use async_trait::async_trait;

use crate::{Comment, CommentId, Error, IssueId, IssueStatus, ProjectId, User, UserId};

/// The data-access seam: everything the comment-thread core needs from the
/// store. Implementations serialize writes per record themselves; callers
/// never retry a `TransientIo` failure automatically.
#[async_trait]
pub trait Db {
    fn current_user(&self) -> UserId;

    async fn fetch_users(&mut self) -> Result<Vec<User>, Error>;

    /// All comments of an issue, in retrieval order (callers must not
    /// assume creation order)
    async fn fetch_comments(&mut self, issue: IssueId) -> Result<Vec<Comment>, Error>;

    async fn submit_reply(
        &mut self,
        issue: IssueId,
        parent: Option<CommentId>,
        text: String,
    ) -> Result<Comment, Error>;

    async fn submit_edit(&mut self, comment: CommentId, text: String) -> Result<Comment, Error>;

    async fn delete_comment(&mut self, comment: CommentId) -> Result<(), Error>;

    async fn set_issue_status(
        &mut self,
        issue: IssueId,
        status: IssueStatus,
    ) -> Result<(), Error>;

    async fn add_member(&mut self, project: ProjectId, user: UserId) -> Result<(), Error>;

    async fn remove_member(&mut self, project: ProjectId, user: UserId) -> Result<(), Error>;
}

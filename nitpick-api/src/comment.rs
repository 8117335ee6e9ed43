use uuid::Uuid;

use crate::{IssueId, Time, UserId, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

/// One comment as stored: a flat record. Nesting is reconstructed
/// client-side from `parent_id`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub issue_id: IssueId,
    pub author_id: UserId,

    /// None for a top-level comment
    pub parent_id: Option<CommentId>,

    pub text: String,
    pub created_at: Time,
    pub updated_at: Time,
}

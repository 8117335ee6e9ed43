use std::collections::HashSet;

use uuid::Uuid;

use crate::{Time, UserId, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn stub() -> ProjectId {
        ProjectId(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub summary: String,
    pub created_by: UserId,
    pub created_at: Time,

    /// Users currently assigned to this project
    pub members: HashSet<UserId>,
}

impl Project {
    pub fn is_member(&self, user: &UserId) -> bool {
        self.created_by == *user || self.members.contains(user)
    }
}

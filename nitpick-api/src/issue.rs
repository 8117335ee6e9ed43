use std::collections::HashSet;

use uuid::Uuid;

use crate::{ProjectId, Time, UserId, STUB_UUID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct IssueId(pub Uuid);

impl IssueId {
    pub fn stub() -> IssueId {
        IssueId(STUB_UUID)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum IssueStatus {
    Open,
    Closed,
}

#[derive(
    Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Issue {
    pub id: IssueId,
    pub project_id: ProjectId,
    pub title: String,
    pub summary: String,
    pub status: IssueStatus,
    pub priority: Priority,
    pub created_by: UserId,
    pub created_at: Time,

    /// Set when the issue transitions to Closed, cleared on reopen
    pub closed_by: Option<UserId>,

    pub assigned: HashSet<UserId>,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        matches!(self.status, IssueStatus::Open)
    }
}

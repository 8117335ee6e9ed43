use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    api::{
        Comment, CommentId, Issue, IssueId, IssueStatus, Project, ProjectId, User, UserId,
    },
    build_forest, CommentNode,
};

/// Local copy of everything the page shows. Mutations mirror what the
/// data-access layer confirmed; the comment forest is rebuilt wholesale
/// from the flat records whenever it is asked for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    pub viewer: UserId,
    pub users: Arc<HashMap<UserId, User>>,
    pub projects: Arc<HashMap<ProjectId, Project>>,
    pub issues: Arc<HashMap<IssueId, Issue>>,
    /// Flat comment records per issue, in retrieval order
    pub comments: Arc<HashMap<IssueId, Vec<Comment>>>,
}

impl Snapshot {
    pub fn stub() -> Snapshot {
        Snapshot {
            viewer: UserId::stub(),
            users: Arc::new(HashMap::new()),
            projects: Arc::new(HashMap::new()),
            issues: Arc::new(HashMap::new()),
            comments: Arc::new(HashMap::new()),
        }
    }

    pub fn add_users(&mut self, users: Vec<User>) {
        Arc::make_mut(&mut self.users).extend(users.into_iter().map(|u| (u.id, u)));
    }

    pub fn add_projects(&mut self, projects: Vec<Project>) {
        Arc::make_mut(&mut self.projects).extend(projects.into_iter().map(|p| (p.id, p)));
    }

    pub fn add_issues(&mut self, issues: Vec<Issue>) {
        Arc::make_mut(&mut self.issues).extend(issues.into_iter().map(|i| (i.id, i)));
    }

    pub fn set_comments(&mut self, issue: IssueId, comments: Vec<Comment>) {
        Arc::make_mut(&mut self.comments).insert(issue, comments);
    }

    /// A confirmed new reply
    pub fn insert_comment(&mut self, c: Comment) {
        Arc::make_mut(&mut self.comments)
            .entry(c.issue_id)
            .or_default()
            .push(c);
    }

    /// A confirmed edit: replace the record in place
    pub fn apply_edit(&mut self, c: Comment) {
        if let Some(list) = Arc::make_mut(&mut self.comments).get_mut(&c.issue_id) {
            match list.iter_mut().find(|old| old.id == c.id) {
                Some(old) => *old = c,
                None => tracing::warn!(id = ?c.id, "edit for a comment not in the snapshot"),
            }
        }
    }

    /// A confirmed deletion. The store cascades to replies, so drop the
    /// whole subtree here too.
    pub fn remove_comment(&mut self, issue: IssueId, id: CommentId) {
        let Some(list) = Arc::make_mut(&mut self.comments).get_mut(&issue) else {
            return;
        };
        let mut dead: HashSet<CommentId> = HashSet::from([id]);
        loop {
            let before = dead.len();
            for c in list.iter() {
                if c.parent_id.map_or(false, |p| dead.contains(&p)) {
                    dead.insert(c.id);
                }
            }
            if dead.len() == before {
                break;
            }
        }
        list.retain(|c| !dead.contains(&c.id));
    }

    pub fn set_issue_status(&mut self, issue: IssueId, status: IssueStatus, by: UserId) {
        if let Some(i) = Arc::make_mut(&mut self.issues).get_mut(&issue) {
            i.status = status;
            i.closed_by = match status {
                IssueStatus::Closed => Some(by),
                IssueStatus::Open => None,
            };
        }
    }

    pub fn set_membership(&mut self, project: ProjectId, user: UserId, member: bool) {
        if let Some(p) = Arc::make_mut(&mut self.projects).get_mut(&project) {
            match member {
                true => p.members.insert(user),
                false => p.members.remove(&user),
            };
        }
    }

    /// The rendered forest for one issue. Rebuilt from scratch on every
    /// call; the builder is not incremental.
    pub fn comment_forest(&self, issue: IssueId) -> Vec<CommentNode> {
        build_forest(self.comments.get(&issue).cloned().unwrap_or_default())
    }

    pub fn user_name(&self, id: &UserId) -> Option<&str> {
        self.users.get(id).map(|u| &u.name as &str)
    }

    pub fn can_manage_members(&self, project: &ProjectId) -> bool {
        self.projects
            .get(project)
            .map_or(false, |p| p.created_by == self.viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Time, Uuid};
    use chrono::TimeZone;

    fn at(secs: i64) -> Time {
        chrono::Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn cid(n: u128) -> CommentId {
        CommentId(Uuid::from_u128(n))
    }

    fn comment(id: u128, parent: Option<u128>, secs: i64) -> Comment {
        Comment {
            id: cid(id),
            issue_id: IssueId::stub(),
            author_id: UserId::stub(),
            parent_id: parent.map(|p| cid(p)),
            text: format!("comment {id}"),
            created_at: at(secs),
            updated_at: at(secs),
        }
    }

    #[test]
    fn forest_reflects_inserted_reply() {
        let mut snap = Snapshot::stub();
        snap.set_comments(IssueId::stub(), vec![comment(1, None, 10)]);
        assert_eq!(snap.comment_forest(IssueId::stub())[0].children.len(), 0);

        snap.insert_comment(comment(2, Some(1), 20));
        let forest = snap.comment_forest(IssueId::stub());
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].depth, 1);
    }

    #[test]
    fn removal_cascades_to_replies() {
        let mut snap = Snapshot::stub();
        snap.set_comments(
            IssueId::stub(),
            vec![
                comment(1, None, 10),
                comment(2, Some(1), 20),
                comment(3, Some(2), 30),
                comment(4, None, 40),
            ],
        );
        snap.remove_comment(IssueId::stub(), cid(2));
        let forest = snap.comment_forest(IssueId::stub());
        let ids: Vec<u128> = forest.iter().map(|n| n.comment.id.0.as_u128()).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut snap = Snapshot::stub();
        snap.set_comments(IssueId::stub(), vec![comment(1, None, 10)]);
        let mut edited = comment(1, None, 10);
        edited.text = String::from("better wording");
        edited.updated_at = at(50);
        snap.apply_edit(edited);
        let forest = snap.comment_forest(IssueId::stub());
        assert_eq!(forest[0].comment.text, "better wording");
        assert_eq!(forest[0].comment.updated_at, at(50));
    }
}

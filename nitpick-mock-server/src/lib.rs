use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use nitpick_api::{
    validate_name, validate_text, Comment, CommentId, Db, Error, Issue, IssueId, IssueStatus,
    Priority, Project, ProjectId, User, UserId,
};
use uuid::Uuid;

/// In-memory stand-in for the real store, for driving the client core in
/// tests. Writes are serialized trivially by `&mut self`; transient
/// failures are injected with [`MockServer::fail_next_io`].
pub struct MockServer {
    viewer: UserId,
    users: HashMap<UserId, User>,
    projects: HashMap<ProjectId, Project>,
    issues: HashMap<IssueId, Issue>,
    /// Flat records in insertion order; retrieval order for fetches
    comments: Vec<Comment>,
    fail_next: Option<String>,
}

impl MockServer {
    pub fn new(viewer_name: &str) -> MockServer {
        let viewer = UserId(Uuid::new_v4());
        let mut users = HashMap::new();
        users.insert(
            viewer,
            User {
                id: viewer,
                name: String::from(viewer_name),
            },
        );
        MockServer {
            viewer,
            users,
            projects: HashMap::new(),
            issues: HashMap::new(),
            comments: Vec::new(),
            fail_next: None,
        }
    }

    /// Make the next data-access call fail with `TransientIo`
    pub fn fail_next_io(&mut self, msg: &str) {
        self.fail_next = Some(String::from(msg));
    }

    fn take_injected_failure(&mut self) -> Result<(), Error> {
        match self.fail_next.take() {
            Some(msg) => Err(Error::TransientIo(msg)),
            None => Ok(()),
        }
    }

    pub fn admin_create_user(&mut self, name: &str) -> Result<UserId, Error> {
        validate_name(name)?;
        let id = UserId(Uuid::new_v4());
        self.users.insert(
            id,
            User {
                id,
                name: String::from(name),
            },
        );
        Ok(id)
    }

    pub fn admin_create_project(
        &mut self,
        title: &str,
        summary: &str,
        by: UserId,
    ) -> Result<ProjectId, Error> {
        validate_name(title)?;
        let id = ProjectId(Uuid::new_v4());
        self.projects.insert(
            id,
            Project {
                id,
                title: String::from(title),
                summary: String::from(summary),
                created_by: by,
                created_at: Utc::now(),
                members: HashSet::new(),
            },
        );
        Ok(id)
    }

    pub fn admin_create_issue(
        &mut self,
        project: ProjectId,
        title: &str,
        summary: &str,
        priority: Priority,
        by: UserId,
    ) -> Result<IssueId, Error> {
        validate_name(title)?;
        if !self.projects.contains_key(&project) {
            return Err(Error::NotFound(project.0));
        }
        let id = IssueId(Uuid::new_v4());
        self.issues.insert(
            id,
            Issue {
                id,
                project_id: project,
                title: String::from(title),
                summary: String::from(summary),
                status: IssueStatus::Open,
                priority,
                created_by: by,
                created_at: Utc::now(),
                closed_by: None,
                assigned: HashSet::new(),
            },
        );
        Ok(id)
    }

    pub fn issue(&self, id: IssueId) -> Option<&Issue> {
        self.issues.get(&id)
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }
}

#[async_trait]
impl Db for MockServer {
    fn current_user(&self) -> UserId {
        self.viewer
    }

    async fn fetch_users(&mut self) -> Result<Vec<User>, Error> {
        self.take_injected_failure()?;
        Ok(self.users.values().cloned().collect())
    }

    async fn fetch_comments(&mut self, issue: IssueId) -> Result<Vec<Comment>, Error> {
        self.take_injected_failure()?;
        if !self.issues.contains_key(&issue) {
            return Err(Error::NotFound(issue.0));
        }
        Ok(self
            .comments
            .iter()
            .filter(|c| c.issue_id == issue)
            .cloned()
            .collect())
    }

    async fn submit_reply(
        &mut self,
        issue: IssueId,
        parent: Option<CommentId>,
        text: String,
    ) -> Result<Comment, Error> {
        self.take_injected_failure()?;
        validate_text(&text)?;
        if !self.issues.contains_key(&issue) {
            return Err(Error::NotFound(issue.0));
        }
        if let Some(p) = parent {
            if !self
                .comments
                .iter()
                .any(|c| c.id == p && c.issue_id == issue)
            {
                return Err(Error::NotFound(p.0));
            }
        }
        let now = Utc::now();
        let comment = Comment {
            id: CommentId(Uuid::new_v4()),
            issue_id: issue,
            author_id: self.viewer,
            parent_id: parent,
            text,
            created_at: now,
            updated_at: now,
        };
        self.comments.push(comment.clone());
        Ok(comment)
    }

    async fn submit_edit(&mut self, comment: CommentId, text: String) -> Result<Comment, Error> {
        self.take_injected_failure()?;
        validate_text(&text)?;
        let c = self
            .comments
            .iter_mut()
            .find(|c| c.id == comment)
            .ok_or(Error::NotFound(comment.0))?;
        c.text = text;
        c.updated_at = Utc::now();
        Ok(c.clone())
    }

    async fn delete_comment(&mut self, comment: CommentId) -> Result<(), Error> {
        self.take_injected_failure()?;
        if !self.comments.iter().any(|c| c.id == comment) {
            return Err(Error::NotFound(comment.0));
        }
        // the store cascades deletion to the whole reply subtree
        let mut dead: HashSet<CommentId> = HashSet::from([comment]);
        loop {
            let before = dead.len();
            for c in self.comments.iter() {
                if c.parent_id.map_or(false, |p| dead.contains(&p)) {
                    dead.insert(c.id);
                }
            }
            if dead.len() == before {
                break;
            }
        }
        self.comments.retain(|c| !dead.contains(&c.id));
        Ok(())
    }

    async fn set_issue_status(
        &mut self,
        issue: IssueId,
        status: IssueStatus,
    ) -> Result<(), Error> {
        self.take_injected_failure()?;
        let viewer = self.viewer;
        let i = self
            .issues
            .get_mut(&issue)
            .ok_or(Error::NotFound(issue.0))?;
        i.status = status;
        i.closed_by = match status {
            IssueStatus::Closed => Some(viewer),
            IssueStatus::Open => None,
        };
        Ok(())
    }

    async fn add_member(&mut self, project: ProjectId, user: UserId) -> Result<(), Error> {
        self.take_injected_failure()?;
        if !self.users.contains_key(&user) {
            return Err(Error::NotFound(user.0));
        }
        let p = self
            .projects
            .get_mut(&project)
            .ok_or(Error::NotFound(project.0))?;
        p.members.insert(user);
        Ok(())
    }

    async fn remove_member(&mut self, project: ProjectId, user: UserId) -> Result<(), Error> {
        self.take_injected_failure()?;
        let p = self
            .projects
            .get_mut(&project)
            .ok_or(Error::NotFound(project.0))?;
        if !p.members.remove(&user) {
            return Err(Error::NotFound(user.0));
        }
        Ok(())
    }
}

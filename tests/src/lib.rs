use nitpick_api::{Db, IssueId, Priority, ProjectId, UserId};
use nitpick_mock_server::MockServer;

/// A tracker with one project and one open issue, viewed by the project's
/// creator.
pub struct Fixture {
    pub server: MockServer,
    pub viewer: UserId,
    pub project: ProjectId,
    pub issue: IssueId,
}

pub fn tracker_with_issue() -> Fixture {
    let mut server = MockServer::new("alice");
    let viewer = server.current_user();
    let project = server
        .admin_create_project("gadget", "Everything about the gadget", viewer)
        .expect("creating project");
    let issue = server
        .admin_create_issue(
            project,
            "It wobbles",
            "The gadget wobbles under load",
            Priority::Medium,
            viewer,
        )
        .expect("creating issue");
    Fixture {
        server,
        viewer,
        project,
        issue,
    }
}

use nitpick_api::{Db, Error, IssueStatus, UserId};
use nitpick_client::Snapshot;
use tests::tracker_with_issue;
use uuid::Uuid;

#[tokio::test]
async fn owner_adds_and_removes_members() {
    let mut fx = tracker_with_issue();
    let bob = fx.server.admin_create_user("bob").unwrap();

    fx.server.add_member(fx.project, bob).await.unwrap();
    assert!(fx.server.project(fx.project).unwrap().members.contains(&bob));

    let mut snap = Snapshot::stub();
    snap.viewer = fx.viewer;
    snap.add_projects(vec![fx.server.project(fx.project).unwrap().clone()]);
    assert!(snap.can_manage_members(&fx.project));
    assert!(snap.projects.get(&fx.project).unwrap().is_member(&bob));

    fx.server.remove_member(fx.project, bob).await.unwrap();
    snap.set_membership(fx.project, bob, false);
    assert!(!snap.projects.get(&fx.project).unwrap().members.contains(&bob));
}

#[tokio::test]
async fn removing_a_non_member_is_not_found() {
    let mut fx = tracker_with_issue();
    let stranger = UserId(Uuid::new_v4());
    assert_eq!(
        fx.server.remove_member(fx.project, stranger).await.unwrap_err(),
        Error::NotFound(stranger.0)
    );
}

#[tokio::test]
async fn only_the_project_creator_manages_members() {
    let mut fx = tracker_with_issue();
    let bob = fx.server.admin_create_user("bob").unwrap();
    let mut snap = Snapshot::stub();
    snap.viewer = bob;
    snap.add_projects(vec![fx.server.project(fx.project).unwrap().clone()]);
    assert!(!snap.can_manage_members(&fx.project));
}

#[tokio::test]
async fn closing_and_reopening_tracks_who_closed() {
    let mut fx = tracker_with_issue();
    fx.server
        .set_issue_status(fx.issue, IssueStatus::Closed)
        .await
        .unwrap();
    let issue = fx.server.issue(fx.issue).unwrap();
    assert_eq!(issue.status, IssueStatus::Closed);
    assert_eq!(issue.closed_by, Some(fx.viewer));

    let mut snap = Snapshot::stub();
    snap.viewer = fx.viewer;
    snap.add_issues(vec![issue.clone()]);

    fx.server
        .set_issue_status(fx.issue, IssueStatus::Open)
        .await
        .unwrap();
    snap.set_issue_status(fx.issue, IssueStatus::Open, fx.viewer);
    let issue = fx.server.issue(fx.issue).unwrap();
    assert!(issue.is_open());
    assert_eq!(issue.closed_by, None);
    assert_eq!(snap.issues.get(&fx.issue).unwrap().closed_by, None);
}

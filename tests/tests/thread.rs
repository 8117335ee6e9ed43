use nitpick_api::{CommentId, Db, Error};
use nitpick_client::{build_forest, indent_level};
use tests::tracker_with_issue;
use uuid::Uuid;

#[tokio::test]
async fn posting_replies_builds_nested_thread() {
    let mut fx = tracker_with_issue();
    let root = fx
        .server
        .submit_reply(fx.issue, None, String::from("does not wobble here"))
        .await
        .unwrap();
    let child = fx
        .server
        .submit_reply(fx.issue, Some(root.id), String::from("what load?"))
        .await
        .unwrap();
    let grandchild = fx
        .server
        .submit_reply(fx.issue, Some(child.id), String::from("around 3kg"))
        .await
        .unwrap();
    let other = fx
        .server
        .submit_reply(fx.issue, None, String::from("reproduced on mine"))
        .await
        .unwrap();

    let forest = build_forest(fx.server.fetch_comments(fx.issue).await.unwrap());
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].comment.id, root.id);
    assert_eq!(forest[1].comment.id, other.id);

    let c = &forest[0].children[0];
    assert_eq!(c.comment.id, child.id);
    assert_eq!(c.depth, 1);
    assert_eq!(c.children[0].comment.id, grandchild.id);
    assert_eq!(indent_level(&c.children[0]), 2);
}

#[tokio::test]
async fn reply_to_unknown_parent_is_not_found() {
    let mut fx = tracker_with_issue();
    let ghost = CommentId(Uuid::new_v4());
    let err = fx
        .server
        .submit_reply(fx.issue, Some(ghost), String::from("into the void"))
        .await
        .unwrap_err();
    assert_eq!(err, Error::NotFound(ghost.0));
    assert!(fx.server.fetch_comments(fx.issue).await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_reply_is_rejected_and_nothing_is_stored() {
    let mut fx = tracker_with_issue();
    let err = fx
        .server
        .submit_reply(fx.issue, None, String::from("   \n"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(fx.server.fetch_comments(fx.issue).await.unwrap().is_empty());
}

#[tokio::test]
async fn editing_updates_text_in_place() {
    let mut fx = tracker_with_issue();
    let c = fx
        .server
        .submit_reply(fx.issue, None, String::from("tpyo"))
        .await
        .unwrap();
    let edited = fx
        .server
        .submit_edit(c.id, String::from("typo"))
        .await
        .unwrap();
    assert_eq!(edited.id, c.id);
    assert_eq!(edited.text, "typo");
    assert_eq!(edited.created_at, c.created_at);
    assert!(edited.updated_at >= c.updated_at);

    let fetched = fx.server.fetch_comments(fx.issue).await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].text, "typo");
}

#[tokio::test]
async fn deleting_a_comment_cascades_to_its_replies() {
    let mut fx = tracker_with_issue();
    let root = fx
        .server
        .submit_reply(fx.issue, None, String::from("thread start"))
        .await
        .unwrap();
    let child = fx
        .server
        .submit_reply(fx.issue, Some(root.id), String::from("me too"))
        .await
        .unwrap();
    fx.server
        .submit_reply(fx.issue, Some(child.id), String::from("same here"))
        .await
        .unwrap();
    let survivor = fx
        .server
        .submit_reply(fx.issue, None, String::from("unrelated"))
        .await
        .unwrap();

    fx.server.delete_comment(child.id).await.unwrap();
    let forest = build_forest(fx.server.fetch_comments(fx.issue).await.unwrap());
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[0].comment.id, root.id);
    assert!(forest[0].children.is_empty());
    assert_eq!(forest[1].comment.id, survivor.id);
}

#[tokio::test]
async fn deleting_twice_is_not_found() {
    let mut fx = tracker_with_issue();
    let c = fx
        .server
        .submit_reply(fx.issue, None, String::from("short-lived"))
        .await
        .unwrap();
    fx.server.delete_comment(c.id).await.unwrap();
    assert_eq!(
        fx.server.delete_comment(c.id).await.unwrap_err(),
        Error::NotFound(c.id.0)
    );
}

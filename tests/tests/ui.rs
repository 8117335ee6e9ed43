use nitpick_api::{Db, Error};
use nitpick_client::{Dispatcher, Snapshot, Toggle, GLYPH_COLLAPSED};
use tests::tracker_with_issue;

#[tokio::test]
async fn collapsed_subtree_stays_collapsed_across_rebuilds() {
    let mut fx = tracker_with_issue();
    let root = fx
        .server
        .submit_reply(fx.issue, None, String::from("first"))
        .await
        .unwrap();
    fx.server
        .submit_reply(fx.issue, Some(root.id), String::from("second"))
        .await
        .unwrap();

    let mut snap = Snapshot::stub();
    snap.viewer = fx.viewer;
    snap.set_comments(fx.issue, fx.server.fetch_comments(fx.issue).await.unwrap());

    let mut d = Dispatcher::new();
    d.bind(Toggle::ReplyTree(root.id));
    let effect = d.click(Toggle::ReplyTree(root.id)).unwrap();
    assert!(!effect.now_open);
    assert_eq!(effect.glyph, GLYPH_COLLAPSED);

    // another reply lands and the forest is rebuilt from scratch
    let more = fx
        .server
        .submit_reply(fx.issue, Some(root.id), String::from("third"))
        .await
        .unwrap();
    snap.insert_comment(more);
    let forest = snap.comment_forest(fx.issue);
    assert_eq!(forest[0].children.len(), 2);
    assert!(!d.is_open(Toggle::ReplyTree(root.id)));
}

#[tokio::test]
async fn injected_transient_failure_does_not_stick() {
    let mut fx = tracker_with_issue();
    fx.server
        .submit_reply(fx.issue, None, String::from("still here"))
        .await
        .unwrap();

    fx.server.fail_next_io("socket closed");
    let err = fx.server.fetch_comments(fx.issue).await.unwrap_err();
    assert!(matches!(err, Error::TransientIo(_)));

    // nothing retried behind the caller's back; an explicit retry works
    assert_eq!(fx.server.fetch_comments(fx.issue).await.unwrap().len(), 1);
}

#[tokio::test]
async fn operations_on_vanished_comments_are_not_found() {
    let mut fx = tracker_with_issue();
    let root = fx
        .server
        .submit_reply(fx.issue, None, String::from("soon gone"))
        .await
        .unwrap();
    let child = fx
        .server
        .submit_reply(fx.issue, Some(root.id), String::from("also gone"))
        .await
        .unwrap();

    let mut d = Dispatcher::new();
    d.bind(Toggle::EditComment(child.id));

    // someone else deletes the root while our page still shows the child
    fx.server.delete_comment(root.id).await.unwrap();
    assert_eq!(
        fx.server
            .submit_edit(child.id, String::from("too late"))
            .await
            .unwrap_err(),
        Error::NotFound(child.id.0)
    );

    // the page then unbinds the stale controls; later clicks are no-ops
    d.unbind(Toggle::EditComment(child.id));
    assert_eq!(d.click(Toggle::EditComment(child.id)), None);
}

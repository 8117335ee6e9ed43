use std::collections::HashMap;

use crate::api::{Comment, CommentId};

/// One comment with its reply subtree, as rendered. `depth` is the edge
/// count to the nearest root ancestor (0 for top-level comments).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    pub depth: u32,
    /// Replies in chronological order
    pub children: Vec<CommentNode>,
}

#[derive(Clone, Copy)]
enum Slot {
    /// Marker while walking up the parent chain
    Resolving,
    Done {
        depth: u32,
        parent: Option<CommentId>,
    },
}

fn resolve(
    id: CommentId,
    parents: &HashMap<CommentId, Option<CommentId>>,
    memo: &mut HashMap<CommentId, Slot>,
) -> (u32, Option<CommentId>) {
    match memo.get(&id) {
        Some(Slot::Done { depth, parent }) => return (*depth, *parent),
        Some(Slot::Resolving) => {
            // The parent chain loops back onto itself. Cannot happen for
            // records created strictly after their parent, but a corrupt
            // set must not hang us: break the loop here.
            tracing::warn!(?id, "comment is part of a parent cycle, treating as top-level");
            memo.insert(
                id,
                Slot::Done {
                    depth: 0,
                    parent: None,
                },
            );
            return (0, None);
        }
        None => (),
    }
    memo.insert(id, Slot::Resolving);
    let (depth, parent) = match parents.get(&id).copied().flatten() {
        Some(p) if parents.contains_key(&p) => {
            let (parent_depth, _) = resolve(p, parents, memo);
            (parent_depth + 1, Some(p))
        }
        Some(p) => {
            tracing::warn!(?id, parent = ?p, "comment parent not in fetched set, treating as top-level");
            (0, None)
        }
        None => (0, None),
    };
    // A cycle break deeper in the chain may already have settled this id
    if let Some(Slot::Done { depth, parent }) = memo.get(&id) {
        return (*depth, *parent);
    }
    memo.insert(id, Slot::Done { depth, parent });
    (depth, parent)
}

/// Build the comment forest for one issue from its flat records.
///
/// Retrieval order is untrusted: records are re-sorted by creation time
/// (ties broken by id) before building, so the same set always yields the
/// same forest. A record whose parent is not in the set becomes a root
/// rather than failing. Not incremental: re-run after any change to the
/// comment set.
pub fn build_forest(mut comments: Vec<Comment>) -> Vec<CommentNode> {
    comments.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));

    let parents: HashMap<CommentId, Option<CommentId>> =
        comments.iter().map(|c| (c.id, c.parent_id)).collect();
    let mut memo = HashMap::with_capacity(comments.len());
    let placement: Vec<(u32, Option<CommentId>)> = comments
        .iter()
        .map(|c| resolve(c.id, &parents, &mut memo))
        .collect();

    // Attach deepest nodes first: a parent is only taken once all of its
    // children have already been gathered under its id.
    let mut order: Vec<usize> = (0..comments.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(placement[i].0));

    let mut slots: Vec<Option<Comment>> = comments.into_iter().map(Some).collect();
    let mut gathered: HashMap<CommentId, Vec<CommentNode>> = HashMap::new();
    let mut roots = Vec::new();
    for i in order {
        let comment = slots[i].take().expect("every slot is taken exactly once");
        let (depth, parent) = placement[i];
        let node = CommentNode {
            children: gathered.remove(&comment.id).unwrap_or_default(),
            comment,
            depth,
        };
        match parent {
            Some(p) => gathered.entry(p).or_default().push(node),
            None => roots.push(node),
        }
    }
    roots
}

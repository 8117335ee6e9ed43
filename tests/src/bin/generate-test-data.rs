use chrono::{Duration, Utc};
use nitpick_api::{Comment, CommentId, IssueId, UserId};
use rand::{seq::SliceRandom, Rng};
use uuid::Uuid;

const NUM_USERS: usize = 3;
const NUM_COMMENTS: usize = 40;
const COMMENT_WORD_COUNT: usize = 12;
const REPLY_PROBABILITY: f64 = 0.7;

/// Prints a randomly threaded comment list as JSON, for seeding a store
/// or eyeballing the forest builder on bigger inputs.
fn main() {
    let mut rng = rand::thread_rng();
    let issue = IssueId(Uuid::new_v4());
    let users: Vec<UserId> = (0..NUM_USERS).map(|_| UserId(Uuid::new_v4())).collect();
    let start = Utc::now() - Duration::days(7);

    let mut comments: Vec<Comment> = Vec::with_capacity(NUM_COMMENTS);
    for i in 0..NUM_COMMENTS {
        let parent_id = match !comments.is_empty() && rng.gen_bool(REPLY_PROBABILITY) {
            true => comments.choose(&mut rng).map(|c| c.id),
            false => None,
        };
        let at = start + Duration::minutes(i as i64 * 17);
        comments.push(Comment {
            id: CommentId(Uuid::new_v4()),
            issue_id: issue,
            author_id: *users.choose(&mut rng).expect("at least one user"),
            parent_id,
            text: lipsum::lipsum_words(COMMENT_WORD_COUNT),
            created_at: at,
            updated_at: at,
        });
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&comments).expect("serializing comments")
    );
}

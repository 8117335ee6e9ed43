use chrono::Utc;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

mod comment;
pub use comment::{Comment, CommentId};

mod db;
pub use db::Db;

mod error;
pub use error::Error;

mod issue;
pub use issue::{Issue, IssueId, IssueStatus, Priority};

mod project;
pub use project::{Project, ProjectId};

mod user;
pub use user::{User, UserId};

/// Max length of an issue or project title (and of a user name)
pub const MAX_TITLE_LEN: usize = 64;

/// Max length of a comment or summary body
pub const MAX_TEXT_LEN: usize = 4096;

pub fn validate_name(s: &str) -> Result<(), Error> {
    if s.trim().is_empty() {
        return Err(Error::Validation(String::from("name must not be empty")));
    }
    if s.contains('\0') {
        return Err(Error::Validation(String::from(
            "name must not contain a null byte",
        )));
    }
    if s.len() > MAX_TITLE_LEN {
        return Err(Error::Validation(format!(
            "name must be at most {} bytes",
            MAX_TITLE_LEN
        )));
    }
    Ok(())
}

pub fn validate_text(s: &str) -> Result<(), Error> {
    if s.trim().is_empty() {
        return Err(Error::Validation(String::from("text must not be empty")));
    }
    if s.contains('\0') {
        return Err(Error::Validation(String::from(
            "text must not contain a null byte",
        )));
    }
    if s.len() > MAX_TEXT_LEN {
        return Err(Error::Validation(format!(
            "text must be at most {} bytes",
            MAX_TEXT_LEN
        )));
    }
    Ok(())
}

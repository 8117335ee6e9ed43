mod app;
pub use app::{App, AppMsg, FormTarget};

mod comment_form;
pub use comment_form::CommentForm;

mod comment_item;
pub use comment_item::CommentItem;

mod comment_thread;
pub use comment_thread::CommentThread;

mod connect;
pub use connect::Connect;

mod error_banner;
pub use error_banner::ErrorBanner;

mod issue_header;
pub use issue_header::IssueHeader;

mod member_panel;
pub use member_panel::MemberPanel;

//! Resource records returned by the API
//!
//! Read-only snapshots decoded from JSON. Nullable timestamps are `Option`,
//! where `None` means "still open".

mod issue;
mod milestone;
mod notification;
mod release;
mod team;
mod user;

pub use issue::{Issue, IssueKind, PullRequestRef};
pub use milestone::Milestone;
pub use notification::{Notification, NotificationId, NotificationRepository, Subject};
pub use release::{Asset, Release};
pub use team::Team;
pub use user::{Label, User};

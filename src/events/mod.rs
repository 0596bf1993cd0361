//! Typed representations of the webhook events the automation service consumes.
//!
//! Each event kind lives in its own module and declares only the payload
//! fields downstream logic requires. Many GitHub events embed a `repository`
//! object, but the set of fields guaranteed present differs by event type, so
//! every module owns its *own* `Repository` struct. Do not unify them: a
//! field guaranteed for one event type may be absent for another, and a
//! shared struct would let code silently depend on the wrong guarantee.
//!
//! # Event Types
//!
//! | Tag | Variant | Drives |
//! |-----|---------|--------|
//! | `pull_request` | [`DecodedEvent::PullRequest`] | PR lifecycle and merge eligibility |
//! | `pull_request_review` | [`DecodedEvent::PullRequestReview`] | approval tracking |
//! | `check_run` | [`DecodedEvent::CheckRun`] | CI completion (Checks API) |
//! | `check_suite` | [`DecodedEvent::CheckSuite`] | CI completion (suite granularity) |
//! | `status` | [`DecodedEvent::Status`] | CI completion (legacy Status API) |
//! | `issue_comment` | [`DecodedEvent::IssueComment`] | command parsing |
//! | `push` | [`DecodedEvent::Push`] | base-branch updates |

use serde::{Deserialize, Serialize};

pub mod check_run;
pub mod check_suite;
pub mod issue_comment;
pub mod pull_request;
pub mod pull_request_review;
pub mod push;
pub mod status;

pub use check_run::CheckRunEvent;
pub use check_suite::CheckSuiteEvent;
pub use issue_comment::IssueCommentEvent;
pub use pull_request::PullRequestEvent;
pub use pull_request_review::{PullRequestReviewEvent, ReviewState};
pub use push::PushEvent;
pub use status::{StatusEvent, StatusState};

/// A decoded webhook event.
///
/// Created by one decode call and handed to a downstream handler; never
/// mutated after creation. Each variant carries only its declared field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodedEvent {
    /// A pull request was opened, closed, synchronized, etc.
    PullRequest(PullRequestEvent),

    /// A pull request review was submitted, edited, or dismissed.
    PullRequestReview(PullRequestReviewEvent),

    /// A check run changed state (GitHub Checks API).
    CheckRun(CheckRunEvent),

    /// A check suite changed state.
    CheckSuite(CheckSuiteEvent),

    /// A commit status was updated (legacy Status API).
    ///
    /// Some CI systems still report through the Status API instead of Checks,
    /// so both mechanisms are tracked.
    Status(StatusEvent),

    /// An issue or PR conversation comment was created, edited, or deleted.
    ///
    /// In GitHub's model, comments on a PR's conversation tab are delivered
    /// as `issue_comment` events.
    IssueComment(IssueCommentEvent),

    /// Commits were pushed to a branch.
    Push(PushEvent),
}

impl DecodedEvent {
    /// Returns the event-type tag this variant was decoded from.
    pub fn event_type(&self) -> &'static str {
        match self {
            DecodedEvent::PullRequest(_) => "pull_request",
            DecodedEvent::PullRequestReview(_) => "pull_request_review",
            DecodedEvent::CheckRun(_) => "check_run",
            DecodedEvent::CheckSuite(_) => "check_suite",
            DecodedEvent::Status(_) => "status",
            DecodedEvent::IssueComment(_) => "issue_comment",
            DecodedEvent::Push(_) => "push",
        }
    }
}

//! The `issue_comment` event: conversation comments on issues and PRs.
//!
//! Comments on a PR's conversation tab arrive as `issue_comment`, not as
//! review comments. This is the event bot commands arrive through.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::error::DecodeError;
use crate::registry::fields;
use crate::types::{CommentId, PrNumber};

use super::DecodedEvent;

/// Repository fields guaranteed present on `issue_comment` deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// The repository owner's login.
    pub owner: String,

    /// The repository name.
    pub name: String,
}

/// An issue/PR comment event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCommentEvent {
    /// The action that triggered this event ("created", "edited", "deleted").
    pub action: String,

    /// The comment ID.
    pub comment_id: CommentId,

    /// The PR number, when the comment is on a pull request. `None` means the
    /// comment is on a regular issue; commands are only valid on PRs.
    pub pr_number: Option<PrNumber>,

    /// The comment body. Absent on `deleted` deliveries.
    pub body: Option<String>,

    /// The comment author's login.
    pub author: Option<String>,

    /// The repository.
    pub repository: Repository,
}

pub(crate) fn decode(root: &Value) -> Result<DecodedEvent, DecodeError> {
    let issue_number = fields::required_u64(root, "issue.number")?;

    // The presence of issue.pull_request marks this issue as a PR. Its
    // contents are never parsed.
    let pr_number = fields::present(root, "issue.pull_request").then_some(PrNumber(issue_number));

    Ok(DecodedEvent::IssueComment(IssueCommentEvent {
        action: fields::required_str(root, "action")?.to_string(),
        comment_id: CommentId(fields::required_u64(root, "comment.id")?),
        pr_number,
        body: fields::optional_str(root, "comment.body")?,
        author: fields::optional_str(root, "comment.user.login")?,
        repository: Repository {
            owner: fields::required_str(root, "repository.owner.login")?.to_string(),
            name: fields::required_str(root, "repository.name")?.to_string(),
        },
    }))
}

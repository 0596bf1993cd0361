//! The `pull_request` event: PR lifecycle changes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::error::DecodeError;
use crate::registry::fields;
use crate::types::{PrNumber, Sha};

use super::DecodedEvent;

/// Repository fields guaranteed present on `pull_request` deliveries.
///
/// Deliberately distinct from the repository shapes declared by other event
/// modules; see the [`crate::events`] module docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// "owner/name" form, e.g. "octocat/hello-world".
    pub full_name: String,
}

/// A pull request lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// The action that triggered this event ("opened", "closed",
    /// "synchronize", ...). GitHub adds new actions over time, so the value
    /// is carried verbatim rather than rejected when unrecognized.
    pub action: String,

    /// The PR number.
    pub number: PrNumber,

    /// The repository.
    pub repository: Repository,

    /// Whether the PR was merged. Only populated on `closed` deliveries.
    pub merged: Option<bool>,

    /// The merge commit SHA, when the PR was merged.
    pub merge_commit_sha: Option<Sha>,

    /// The current head SHA of the PR branch.
    pub head_sha: Option<Sha>,

    /// The PR's source branch name.
    pub head_ref: Option<String>,

    /// The branch the PR targets.
    pub base_ref: Option<String>,

    /// Whether the PR is a draft.
    pub draft: Option<bool>,

    /// The PR author's login.
    pub author: Option<String>,
}

pub(crate) fn decode(root: &Value) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::PullRequest(PullRequestEvent {
        action: fields::required_str(root, "action")?.to_string(),
        number: PrNumber(fields::required_u64(root, "pull_request.number")?),
        repository: Repository {
            full_name: fields::required_str(root, "repository.full_name")?.to_string(),
        },
        merged: fields::optional_bool(root, "pull_request.merged")?,
        merge_commit_sha: fields::optional_sha(root, "pull_request.merge_commit_sha")?,
        head_sha: fields::optional_sha(root, "pull_request.head.sha")?,
        head_ref: fields::optional_str(root, "pull_request.head.ref")?,
        base_ref: fields::optional_str(root, "pull_request.base.ref")?,
        draft: fields::optional_bool(root, "pull_request.draft")?,
        author: fields::optional_str(root, "pull_request.user.login")?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_pr(root: &Value) -> PullRequestEvent {
        match decode(root).unwrap() {
            DecodedEvent::PullRequest(e) => e,
            other => panic!("expected PullRequest, got {other:?}"),
        }
    }

    #[test]
    fn decode_minimal_payload() {
        // Only the three required fields.
        let root = json!({
            "action": "opened",
            "pull_request": { "number": 42 },
            "repository": { "full_name": "o/r" }
        });

        let event = decode_pr(&root);
        assert_eq!(event.action, "opened");
        assert_eq!(event.number, PrNumber(42));
        assert_eq!(event.repository.full_name, "o/r");
        assert_eq!(event.merged, None);
        assert_eq!(event.head_sha, None);
        assert_eq!(event.draft, None);
    }

    #[test]
    fn decode_closed_merged_payload() {
        let root = json!({
            "action": "closed",
            "pull_request": {
                "number": 99,
                "merged": true,
                "merge_commit_sha": "fedcba0987654321fedcba0987654321fedcba09",
                "head": {
                    "sha": "1234567890abcdef1234567890abcdef12345678",
                    "ref": "feature"
                },
                "base": { "ref": "main" },
                "draft": false,
                "user": { "login": "dev" }
            },
            "repository": { "full_name": "myorg/myrepo" }
        });

        let event = decode_pr(&root);
        assert_eq!(event.action, "closed");
        assert_eq!(event.merged, Some(true));
        assert_eq!(
            event.merge_commit_sha,
            Some(Sha::parse("fedcba0987654321fedcba0987654321fedcba09").unwrap())
        );
        assert_eq!(event.head_ref.as_deref(), Some("feature"));
        assert_eq!(event.base_ref.as_deref(), Some("main"));
        assert_eq!(event.draft, Some(false));
        assert_eq!(event.author.as_deref(), Some("dev"));
    }

    #[test]
    fn missing_number_names_full_path() {
        let root = json!({
            "action": "opened",
            "pull_request": {},
            "repository": { "full_name": "o/r" }
        });
        let err = decode(&root).unwrap_err();
        assert_eq!(err.field_path(), Some("pull_request.number"));
    }

    #[test]
    fn missing_repository_names_full_path() {
        let root = json!({
            "action": "opened",
            "pull_request": { "number": 42 }
        });
        let err = decode(&root).unwrap_err();
        assert_eq!(err.field_path(), Some("repository.full_name"));
    }

    #[test]
    fn malformed_head_sha_is_violation() {
        let root = json!({
            "action": "opened",
            "pull_request": {
                "number": 1,
                "head": { "sha": "not-a-sha" }
            },
            "repository": { "full_name": "o/r" }
        });
        let err = decode(&root).unwrap_err();
        assert_eq!(err.field_path(), Some("pull_request.head.sha"));
    }

    #[test]
    fn unrecognized_action_is_carried_verbatim() {
        // GitHub regularly introduces new actions (e.g. "enqueued"); rejecting
        // them would break on upstream API growth.
        let root = json!({
            "action": "enqueued",
            "pull_request": { "number": 7 },
            "repository": { "full_name": "o/r" }
        });
        assert_eq!(decode_pr(&root).action, "enqueued");
    }
}

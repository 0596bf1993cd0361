//! The `pull_request_review` event: review submitted, edited, or dismissed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::error::DecodeError;
use crate::registry::fields;
use crate::types::PrNumber;

use super::DecodedEvent;

/// Repository fields guaranteed present on `pull_request_review` deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// "owner/name" form.
    pub full_name: String,
}

/// State of a pull request review.
///
/// Unlike `action` values, the review state set is closed, so it is decoded
/// into an enum. GitHub delivers it in varying case (lowercase in review
/// objects, SCREAMING_SNAKE_CASE from the reviews API), so parsing is
/// case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Review approved the PR.
    Approved,
    /// Review requested changes.
    ChangesRequested,
    /// Review was just a comment.
    Commented,
    /// Review was dismissed.
    Dismissed,
    /// Review is pending (not submitted yet).
    Pending,
}

impl ReviewState {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_uppercase().as_str() {
            "APPROVED" => Some(ReviewState::Approved),
            "CHANGES_REQUESTED" => Some(ReviewState::ChangesRequested),
            "COMMENTED" => Some(ReviewState::Commented),
            "DISMISSED" => Some(ReviewState::Dismissed),
            "PENDING" => Some(ReviewState::Pending),
            _ => None,
        }
    }
}

/// A pull request review event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestReviewEvent {
    /// The action that triggered this event ("submitted", "edited",
    /// "dismissed").
    pub action: String,

    /// The state of the review.
    pub state: ReviewState,

    /// The PR number.
    pub number: PrNumber,

    /// The repository.
    pub repository: Repository,

    /// The reviewer's login.
    pub reviewer: Option<String>,

    /// The review body.
    pub body: Option<String>,
}

pub(crate) fn decode(root: &Value) -> Result<DecodedEvent, DecodeError> {
    let raw_state = fields::required_str(root, "review.state")?;
    let state = ReviewState::parse(raw_state).ok_or_else(|| {
        DecodeError::violation(
            "review.state",
            "one of approved, changes_requested, commented, dismissed, pending",
        )
    })?;

    Ok(DecodedEvent::PullRequestReview(PullRequestReviewEvent {
        action: fields::required_str(root, "action")?.to_string(),
        state,
        number: PrNumber(fields::required_u64(root, "pull_request.number")?),
        repository: Repository {
            full_name: fields::required_str(root, "repository.full_name")?.to_string(),
        },
        reviewer: fields::optional_str(root, "review.user.login")?,
        body: fields::optional_str(root, "review.body")?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_review(root: &Value) -> PullRequestReviewEvent {
        match decode(root).unwrap() {
            DecodedEvent::PullRequestReview(e) => e,
            other => panic!("expected PullRequestReview, got {other:?}"),
        }
    }

    #[test]
    fn decode_approved_review() {
        let root = json!({
            "action": "submitted",
            "review": {
                "state": "approved",
                "user": { "login": "reviewer" },
                "body": "LGTM!"
            },
            "pull_request": { "number": 77 },
            "repository": { "full_name": "org/repo" }
        });

        let event = decode_review(&root);
        assert_eq!(event.action, "submitted");
        assert_eq!(event.state, ReviewState::Approved);
        assert_eq!(event.number, PrNumber(77));
        assert_eq!(event.repository.full_name, "org/repo");
        assert_eq!(event.reviewer.as_deref(), Some("reviewer"));
        assert_eq!(event.body.as_deref(), Some("LGTM!"));
    }

    #[test]
    fn decode_dismissed_review_without_body() {
        let root = json!({
            "action": "dismissed",
            "review": { "state": "dismissed" },
            "pull_request": { "number": 100 },
            "repository": { "full_name": "org/repo" }
        });

        let event = decode_review(&root);
        assert_eq!(event.state, ReviewState::Dismissed);
        assert_eq!(event.reviewer, None);
        assert_eq!(event.body, None);
    }

    #[test]
    fn review_state_is_case_insensitive() {
        for raw in ["approved", "APPROVED", "Approved"] {
            let root = json!({
                "action": "submitted",
                "review": { "state": raw },
                "pull_request": { "number": 1 },
                "repository": { "full_name": "o/r" }
            });
            assert_eq!(decode_review(&root).state, ReviewState::Approved);
        }
    }

    #[test]
    fn unknown_review_state_is_violation() {
        let root = json!({
            "action": "submitted",
            "review": { "state": "vetoed" },
            "pull_request": { "number": 1 },
            "repository": { "full_name": "o/r" }
        });
        let err = decode(&root).unwrap_err();
        assert_eq!(err.field_path(), Some("review.state"));
    }

    #[test]
    fn missing_state_names_full_path() {
        let root = json!({
            "action": "submitted",
            "review": {},
            "pull_request": { "number": 1 },
            "repository": { "full_name": "o/r" }
        });
        let err = decode(&root).unwrap_err();
        assert_eq!(err.field_path(), Some("review.state"));
    }

    #[test]
    fn review_state_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReviewState::ChangesRequested).unwrap(),
            "\"CHANGES_REQUESTED\""
        );
    }
}

//! The `status` event: commit status update (legacy Status API).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::error::DecodeError;
use crate::registry::fields;
use crate::types::Sha;

use super::DecodedEvent;

/// Repository fields guaranteed present on `status` deliveries.
///
/// Note the different shape from the `pull_request` repository: status
/// payloads guarantee separate owner/name fields, not `full_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// The repository owner's login.
    pub owner: String,

    /// The repository name.
    pub name: String,
}

/// State of a commit status. This value set is closed in GitHub's API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusState {
    /// Check is pending.
    Pending,
    /// Check succeeded.
    Success,
    /// Check failed.
    Failure,
    /// Check errored.
    Error,
}

impl StatusState {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(StatusState::Pending),
            "success" => Some(StatusState::Success),
            "failure" => Some(StatusState::Failure),
            "error" => Some(StatusState::Error),
            _ => None,
        }
    }

    /// Returns true if this is a terminal state (not pending).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StatusState::Success | StatusState::Failure | StatusState::Error
        )
    }
}

/// A commit status event.
///
/// Some CI systems still report through the Status API instead of Checks;
/// both mechanisms are tracked per commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// The commit SHA this status is for.
    pub sha: Sha,

    /// The state of the status.
    pub state: StatusState,

    /// The context (name) of the status check, e.g. "ci/jenkins".
    pub context: String,

    /// Optional description.
    pub description: Option<String>,

    /// Optional target URL for details.
    pub target_url: Option<String>,

    /// The repository.
    pub repository: Repository,
}

pub(crate) fn decode(root: &Value) -> Result<DecodedEvent, DecodeError> {
    let raw_state = fields::required_str(root, "state")?;
    let state = StatusState::parse(raw_state).ok_or_else(|| {
        DecodeError::violation("state", "one of pending, success, failure, error")
    })?;

    Ok(DecodedEvent::Status(StatusEvent {
        sha: fields::required_sha(root, "sha")?,
        state,
        context: fields::required_str(root, "context")?.to_string(),
        description: fields::optional_str(root, "description")?,
        target_url: fields::optional_str(root, "target_url")?,
        repository: Repository {
            owner: fields::required_str(root, "repository.owner.login")?.to_string(),
            name: fields::required_str(root, "repository.name")?.to_string(),
        },
    }))
}

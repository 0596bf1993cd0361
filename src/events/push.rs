//! The `push` event: commits pushed to a ref.
//!
//! Used to notice base-branch movement, which invalidates merge-eligibility
//! decisions for open PRs targeting that branch.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::error::DecodeError;
use crate::registry::fields;
use crate::types::Sha;

use super::DecodedEvent;

/// Repository fields guaranteed present on `push` deliveries.
///
/// Push payloads additionally carry the default branch, which other event
/// types do not guarantee; that is exactly why this struct is not shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// The repository owner's login.
    pub owner: String,

    /// The repository name.
    pub name: String,

    /// The repository's default branch, when present.
    pub default_branch: Option<String>,
}

/// A push event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushEvent {
    /// The full ref that was pushed, e.g. "refs/heads/main".
    pub ref_name: String,

    /// The head commit after the push.
    pub after: Sha,

    /// The head commit before the push. Absent for newly created refs.
    pub before: Option<Sha>,

    /// The repository.
    pub repository: Repository,
}

impl PushEvent {
    /// Returns the branch name if the pushed ref is a branch.
    pub fn branch(&self) -> Option<&str> {
        self.ref_name.strip_prefix("refs/heads/")
    }
}

pub(crate) fn decode(root: &Value) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::Push(PushEvent {
        ref_name: fields::required_str(root, "ref")?.to_string(),
        after: fields::required_sha(root, "after")?,
        before: fields::optional_sha(root, "before")?,
        repository: Repository {
            owner: fields::required_str(root, "repository.owner.login")?.to_string(),
            name: fields::required_str(root, "repository.name")?.to_string(),
            default_branch: fields::optional_str(root, "repository.default_branch")?,
        },
    }))
}

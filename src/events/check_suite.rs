//! The `check_suite` event: a group of check runs changed state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::error::DecodeError;
use crate::registry::fields;
use crate::types::{PrNumber, Sha};

use super::DecodedEvent;

/// Repository fields guaranteed present on `check_suite` deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// "owner/name" form.
    pub full_name: String,
}

/// A check suite event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSuiteEvent {
    /// The action that triggered this event ("requested", "rerequested",
    /// "completed", ...).
    pub action: String,

    /// The commit this suite ran against.
    pub head_sha: Sha,

    /// The repository.
    pub repository: Repository,

    /// Conclusion once completed. Absent while the suite is running.
    pub conclusion: Option<String>,

    /// Pull requests associated with this suite. A suite can map to multiple
    /// PRs when one commit heads several of them.
    pub pull_requests: Vec<PrNumber>,
}

pub(crate) fn decode(root: &Value) -> Result<DecodedEvent, DecodeError> {
    let mut pull_requests = Vec::new();
    for (path, element) in fields::required_array(root, "check_suite.pull_requests")? {
        pull_requests.push(PrNumber(fields::element_u64(element, &path, "number")?));
    }

    Ok(DecodedEvent::CheckSuite(CheckSuiteEvent {
        action: fields::required_str(root, "action")?.to_string(),
        head_sha: fields::required_sha(root, "check_suite.head_sha")?,
        repository: Repository {
            full_name: fields::required_str(root, "repository.full_name")?.to_string(),
        },
        conclusion: fields::optional_str(root, "check_suite.conclusion")?,
        pull_requests,
    }))
}

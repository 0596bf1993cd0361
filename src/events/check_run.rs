//! The `check_run` event: a single CI check changed state (Checks API).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::error::DecodeError;
use crate::registry::fields;
use crate::types::{CheckSuiteId, Sha};

use super::DecodedEvent;

/// Repository fields guaranteed present on `check_run` deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// "owner/name" form.
    pub full_name: String,
}

/// A check run event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRunEvent {
    /// The action that triggered this event ("created", "completed",
    /// "rerequested", ...).
    pub action: String,

    /// The check's name, e.g. "build" or "ci/test".
    pub name: String,

    /// The commit this check ran against.
    pub head_sha: Sha,

    /// The repository.
    pub repository: Repository,

    /// Current status ("queued", "in_progress", "completed", ...). GitHub has
    /// extended this set before ("waiting", "pending"), so the value is
    /// carried verbatim.
    pub status: Option<String>,

    /// Conclusion once completed ("success", "failure", "neutral",
    /// "cancelled", "timed_out", "action_required", "stale", "skipped").
    pub conclusion: Option<String>,

    /// The check suite this run belongs to.
    pub check_suite_id: Option<CheckSuiteId>,
}

pub(crate) fn decode(root: &Value) -> Result<DecodedEvent, DecodeError> {
    Ok(DecodedEvent::CheckRun(CheckRunEvent {
        action: fields::required_str(root, "action")?.to_string(),
        name: fields::required_str(root, "check_run.name")?.to_string(),
        head_sha: fields::required_sha(root, "check_run.head_sha")?,
        repository: Repository {
            full_name: fields::required_str(root, "repository.full_name")?.to_string(),
        },
        status: fields::optional_str(root, "check_run.status")?,
        conclusion: fields::optional_str(root, "check_run.conclusion")?,
        check_suite_id: fields::optional_u64(root, "check_run.check_suite.id")?
            .map(CheckSuiteId),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_check_run(root: &Value) -> CheckRunEvent {
        match decode(root).unwrap() {
            DecodedEvent::CheckRun(e) => e,
            other => panic!("expected CheckRun, got {other:?}"),
        }
    }

    #[test]
    fn decode_completed_check_run() {
        let root = json!({
            "action": "completed",
            "check_run": {
                "name": "ci/test",
                "head_sha": "deadbeef1234567890abcdef1234567890abcdef",
                "status": "completed",
                "conclusion": "success",
                "check_suite": { "id": 5544 }
            },
            "repository": { "full_name": "org/repo" }
        });

        let event = decode_check_run(&root);
        assert_eq!(event.action, "completed");
        assert_eq!(event.name, "ci/test");
        assert_eq!(
            event.head_sha,
            Sha::parse("deadbeef1234567890abcdef1234567890abcdef").unwrap()
        );
        assert_eq!(event.status.as_deref(), Some("completed"));
        assert_eq!(event.conclusion.as_deref(), Some("success"));
        assert_eq!(event.check_suite_id, Some(CheckSuiteId(5544)));
    }

    #[test]
    fn decode_created_check_run_without_conclusion() {
        let root = json!({
            "action": "created",
            "check_run": {
                "name": "build",
                "head_sha": "1111111111111111111111111111111111111111",
                "conclusion": null
            },
            "repository": { "full_name": "org/repo" }
        });

        let event = decode_check_run(&root);
        assert_eq!(event.conclusion, None);
        assert_eq!(event.status, None);
        assert_eq!(event.check_suite_id, None);
    }

    #[test]
    fn missing_head_sha_names_full_path() {
        let root = json!({
            "action": "completed",
            "check_run": { "name": "build" },
            "repository": { "full_name": "o/r" }
        });
        let err = decode(&root).unwrap_err();
        assert_eq!(err.field_path(), Some("check_run.head_sha"));
    }

    #[test]
    fn invalid_head_sha_is_violation() {
        let root = json!({
            "action": "completed",
            "check_run": { "name": "build", "head_sha": "nope" },
            "repository": { "full_name": "o/r" }
        });
        let err = decode(&root).unwrap_err();
        assert_eq!(err.field_path(), Some("check_run.head_sha"));
    }
}

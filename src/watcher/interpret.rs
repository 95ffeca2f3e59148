use serde_json::Value;
use tracing::debug;

use crate::review_api::Submission;
use crate::types::{FaultKind, WatchError};

use super::dedup::ErrorDedup;
use super::verdicts;

/// Check the shape of a raw status response and extract its submissions.
/// Success re-arms the dedup flags for the shape faults this check owns.
pub fn check_response(raw: &Value, dedup: &mut ErrorDedup) -> Result<Vec<Submission>, WatchError> {
    let object = raw.as_object().ok_or(WatchError::ResponseType)?;
    if object.is_empty() {
        return Err(WatchError::ResponseValue);
    }
    let homeworks = object.get("homeworks").ok_or(WatchError::MissingHomeworks)?;
    let entries = homeworks.as_array().ok_or(WatchError::NotAList)?;

    // A list containing non-record entries is as unusable as no list at all.
    let submissions = entries
        .iter()
        .map(|entry| serde_json::from_value(entry.clone()))
        .collect::<Result<Vec<Submission>, _>>()
        .map_err(|_| WatchError::NotAList)?;

    dedup.clear(FaultKind::ResponseType);
    dedup.clear(FaultKind::ResponseValue);
    dedup.clear(FaultKind::MissingHomeworks);
    dedup.clear(FaultKind::NotAList);
    debug!(count = submissions.len(), "response shape is valid");
    Ok(submissions)
}

/// Interpret the newest submission into a chat message. Only the first
/// record is considered per cycle; simultaneous updates are not batched.
pub fn parse_status(
    submissions: &[Submission],
    dedup: &mut ErrorDedup,
) -> Result<String, WatchError> {
    let Some(first) = submissions.first() else {
        return Err(WatchError::NoUpdate);
    };

    let verdict = verdicts::verdict_for(&first.status)
        .ok_or_else(|| WatchError::UnknownStatus(first.status.clone()))?;

    dedup.clear(FaultKind::UnknownStatus);
    dedup.clear(FaultKind::NoUpdate);
    debug!(name = %first.name, status = %first.status, "submission status interpreted");
    Ok(format!(
        "Changed status of submission \"{}\". {}",
        first.name, verdict
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn non_object_response_is_a_type_fault() {
        let mut dedup = ErrorDedup::new();
        let err = check_response(&json!([1, 2, 3]), &mut dedup).expect_err("should fail");
        assert!(matches!(err, WatchError::ResponseType));
    }

    #[test]
    fn empty_object_is_a_value_fault() {
        let mut dedup = ErrorDedup::new();
        let err = check_response(&json!({}), &mut dedup).expect_err("should fail");
        assert!(matches!(err, WatchError::ResponseValue));
    }

    #[test]
    fn missing_homeworks_key_is_explicit() {
        let mut dedup = ErrorDedup::new();
        let err =
            check_response(&json!({"current_date": 10}), &mut dedup).expect_err("should fail");
        assert!(matches!(err, WatchError::MissingHomeworks));
    }

    #[test]
    fn non_list_homeworks_is_rejected() {
        let mut dedup = ErrorDedup::new();
        let raw = json!({"homeworks": "hw1", "current_date": 10});
        let err = check_response(&raw, &mut dedup).expect_err("should fail");
        assert!(matches!(err, WatchError::NotAList));
    }

    #[test]
    fn valid_response_yields_submissions_and_rearms_flags() {
        let mut dedup = ErrorDedup::new();
        dedup.mark_notified(FaultKind::ResponseType);
        dedup.mark_notified(FaultKind::ResponseValue);
        dedup.mark_notified(FaultKind::MissingHomeworks);
        dedup.mark_notified(FaultKind::NotAList);

        let raw = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000
        });
        let submissions = check_response(&raw, &mut dedup).expect("shape is valid");
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].name, "hw1");
        for kind in [
            FaultKind::ResponseType,
            FaultKind::ResponseValue,
            FaultKind::MissingHomeworks,
            FaultKind::NotAList,
        ] {
            assert!(dedup.should_notify(kind));
        }
    }

    #[test]
    fn empty_list_is_a_benign_no_update() {
        let mut dedup = ErrorDedup::new();
        let err = parse_status(&[], &mut dedup).expect_err("should fail");
        assert!(matches!(err, WatchError::NoUpdate));
    }

    #[test]
    fn unknown_status_carries_the_offending_value() {
        let mut dedup = ErrorDedup::new();
        let submissions = vec![Submission {
            name: "hw1".to_string(),
            status: "resubmitted".to_string(),
        }];
        let err = parse_status(&submissions, &mut dedup).expect_err("should fail");
        match err {
            WatchError::UnknownStatus(status) => assert_eq!(status, "resubmitted"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn approved_submission_produces_the_verdict_message() {
        let mut dedup = ErrorDedup::new();
        dedup.mark_notified(FaultKind::UnknownStatus);
        dedup.mark_notified(FaultKind::NoUpdate);

        let submissions = vec![Submission {
            name: "hw1".to_string(),
            status: "approved".to_string(),
        }];
        let message = parse_status(&submissions, &mut dedup).expect("status is known");
        assert_eq!(
            message,
            "Changed status of submission \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert!(dedup.should_notify(FaultKind::UnknownStatus));
        assert!(dedup.should_notify(FaultKind::NoUpdate));
    }

    #[test]
    fn only_the_first_submission_is_interpreted() {
        let mut dedup = ErrorDedup::new();
        let submissions = vec![
            Submission {
                name: "hw2".to_string(),
                status: "reviewing".to_string(),
            },
            Submission {
                name: "hw1".to_string(),
                status: "approved".to_string(),
            },
        ];
        let message = parse_status(&submissions, &mut dedup).expect("status is known");
        assert!(message.contains("hw2"));
        assert!(!message.contains("hw1"));
    }

    #[test]
    fn record_without_status_surfaces_as_unknown_status() {
        let mut dedup = ErrorDedup::new();
        let raw = json!({"homeworks": [{"homework_name": "hw1"}], "current_date": 10});
        let submissions = check_response(&raw, &mut dedup).expect("shape is valid");
        let err = parse_status(&submissions, &mut dedup).expect_err("should fail");
        assert!(matches!(err, WatchError::UnknownStatus(status) if status.is_empty()));
    }
}

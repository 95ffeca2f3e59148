//! Review status vocabulary. The table is the single source of truth: a new
//! valid status must be added here, never inferred from a response.

const VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Display text for a review status, if the status is known.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    VERDICTS
        .iter()
        .find(|(known, _)| *known == status)
        .map(|(_, verdict)| *verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_verdict() {
        for (status, _) in VERDICTS {
            let verdict = verdict_for(status).expect("status should be known");
            assert!(!verdict.is_empty());
        }
    }

    #[test]
    fn unknown_status_has_no_verdict() {
        assert!(verdict_for("resubmitted").is_none());
        assert!(verdict_for("").is_none());
    }
}

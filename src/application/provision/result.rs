//! Provision result types

use crate::error::ServiceError;

/// What happened to one service in the manifest
#[derive(Debug)]
pub enum OutcomeStatus {
    /// A service with that name was already present; left untouched
    AlreadyExists,
    /// Created and reported `succeeded`
    Created,
    /// Creation, polling or provisioning failed
    Failed(ServiceError),
    /// Ctrl+C arrived while waiting for this service
    Interrupted,
}

#[derive(Debug)]
pub struct ServiceOutcome {
    pub name: String,
    pub status: OutcomeStatus,
}

impl ServiceOutcome {
    pub fn new(name: impl Into<String>, status: OutcomeStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    pub fn error(&self) -> Option<&ServiceError> {
        match &self.status {
            OutcomeStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of provisioning a manifest
#[derive(Debug, Default)]
pub struct ProvisionReport {
    /// One entry per processed service, in manifest order
    pub outcomes: Vec<ServiceOutcome>,
}

impl ProvisionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ServiceOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn created_count(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Created))
    }

    pub fn existing_count(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::AlreadyExists))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Failed(_)))
    }

    pub fn was_interrupted(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o.status, OutcomeStatus::Interrupted))
    }

    /// Failed services with their errors
    pub fn errors(&self) -> impl Iterator<Item = (&str, &ServiceError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error().map(|e| (o.name.as_str(), e)))
    }

    pub fn is_success(&self) -> bool {
        self.failed_count() == 0 && !self.was_interrupted()
    }

    fn count(&self, pred: impl Fn(&OutcomeStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_status() {
        let mut report = ProvisionReport::new();
        report.push(ServiceOutcome::new("a", OutcomeStatus::Created));
        report.push(ServiceOutcome::new("b", OutcomeStatus::AlreadyExists));
        report.push(ServiceOutcome::new(
            "c",
            OutcomeStatus::Failed(ServiceError::Failed {
                description: "boom".to_string(),
                state: "failed".to_string(),
            }),
        ));

        assert_eq!(report.created_count(), 1);
        assert_eq!(report.existing_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.is_success());

        let errors: Vec<_> = report.errors().map(|(name, _)| name).collect();
        assert_eq!(errors, vec!["c"]);
    }

    #[test]
    fn empty_report_is_success() {
        assert!(ProvisionReport::new().is_success());
    }
}

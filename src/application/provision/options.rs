//! Provision options

use std::time::Duration;

/// How long to wait for a new service to finish provisioning
///
/// The first poll happens right after `create-service` returns. Between
/// polls the orchestrator sleeps for the current interval, which grows by
/// `backoff_factor` up to `max_interval`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollPolicy {
    /// Upper bound on status checks per service (at least one is always made)
    pub max_attempts: u32,
    /// Delay before the second status check
    pub interval: Duration,
    /// Ceiling for the delay between checks
    pub max_interval: Duration,
    /// Growth factor applied to the delay after every check
    pub backoff_factor: f64,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(10),
            backoff_factor: 1.5,
        }
    }
}

impl PollPolicy {
    /// Poll without sleeping, at most `max_attempts` times
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            interval: Duration::ZERO,
            max_interval: Duration::ZERO,
            backoff_factor: 1.0,
        }
    }

    /// Number of status checks that will actually be made
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay that follows `current`
    pub fn next_interval(&self, current: Duration) -> Duration {
        let factor = if self.backoff_factor.is_finite() && self.backoff_factor >= 1.0 {
            self.backoff_factor
        } else {
            1.0
        };
        let next = Duration::try_from_secs_f64(current.as_secs_f64() * factor)
            .unwrap_or(Duration::MAX);
        next.min(self.max_interval.max(self.interval))
    }

    /// The delays slept between consecutive checks (`attempts() - 1` of them)
    pub fn intervals(&self) -> impl Iterator<Item = Duration> + '_ {
        let count = self.attempts().saturating_sub(1) as usize;
        std::iter::successors(Some(self.interval), move |d| Some(self.next_interval(*d)))
            .take(count)
    }
}

/// Options for the provision use case
#[derive(Debug, Clone, Default)]
pub struct ProvisionOptions {
    pub poll: PollPolicy,
}

impl ProvisionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the poll policy
    pub fn with_poll(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_grow_and_cap() {
        let policy = PollPolicy {
            max_attempts: 6,
            interval: Duration::from_secs(2),
            max_interval: Duration::from_secs(5),
            backoff_factor: 2.0,
        };
        let delays: Vec<_> = policy.intervals().collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(5),
                Duration::from_secs(5),
                Duration::from_secs(5),
            ]
        );
    }

    #[test]
    fn zero_attempts_still_polls_once() {
        let policy = PollPolicy::immediate(0);
        assert_eq!(policy.attempts(), 1);
        assert_eq!(policy.intervals().count(), 0);
    }

    #[test]
    fn shrinking_backoff_is_treated_as_constant() {
        let policy = PollPolicy {
            max_attempts: 3,
            interval: Duration::from_millis(500),
            max_interval: Duration::from_secs(10),
            backoff_factor: 0.5,
        };
        let delays: Vec<_> = policy.intervals().collect();
        assert_eq!(
            delays,
            vec![Duration::from_millis(500), Duration::from_millis(500)]
        );
    }

    #[test]
    fn max_interval_below_interval_keeps_interval() {
        let policy = PollPolicy {
            max_attempts: 3,
            interval: Duration::from_secs(3),
            max_interval: Duration::from_secs(1),
            backoff_factor: 2.0,
        };
        assert!(policy.intervals().all(|d| d == Duration::from_secs(3)));
    }

    #[test]
    fn default_policy_is_bounded() {
        let policy = PollPolicy::default();
        assert_eq!(policy.max_attempts, 60);
        assert!(policy.intervals().all(|d| d <= Duration::from_secs(10)));
    }

    #[test]
    fn huge_backoff_saturates_at_max_interval() {
        let policy = PollPolicy {
            max_attempts: 3,
            interval: Duration::from_secs(1),
            max_interval: Duration::from_secs(10),
            backoff_factor: 1e300,
        };
        assert_eq!(
            policy.next_interval(Duration::from_secs(1)),
            Duration::from_secs(10)
        );
    }
}

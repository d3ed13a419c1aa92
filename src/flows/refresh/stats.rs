// std
use std::sync::atomic::{AtomicU64, Ordering};

/// How a refresh ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RefreshOutcome {
	/// The exchange produced a new token generation.
	Exchanged,
	/// The manager fell back to a full login.
	Relogin,
	/// The refresh failed and the error reached the caller.
	Failed,
}

/// Point-in-time copy of [`RefreshMetrics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshSnapshot {
	/// Refresh-token exchanges sent to the API.
	pub attempts: u64,
	/// Exchanges that produced a new token generation.
	pub exchanged: u64,
	/// Refreshes that fell back to a full login which then succeeded.
	pub relogins: u64,
	/// Refreshes that failed, including failed fallback logins.
	pub failures: u64,
}

/// Lock-free refresh counters kept by each token manager.
#[derive(Debug, Default)]
pub struct RefreshMetrics {
	attempts: AtomicU64,
	exchanged: AtomicU64,
	relogins: AtomicU64,
	failures: AtomicU64,
}
impl RefreshMetrics {
	/// Reads all counters.
	pub fn snapshot(&self) -> RefreshSnapshot {
		RefreshSnapshot {
			attempts: self.attempts.load(Ordering::Relaxed),
			exchanged: self.exchanged.load(Ordering::Relaxed),
			relogins: self.relogins.load(Ordering::Relaxed),
			failures: self.failures.load(Ordering::Relaxed),
		}
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record(&self, outcome: RefreshOutcome) {
		let counter = match outcome {
			RefreshOutcome::Exchanged => &self.exchanged,
			RefreshOutcome::Relogin => &self.relogins,
			RefreshOutcome::Failed => &self.failures,
		};

		counter.fetch_add(1, Ordering::Relaxed);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn snapshot_reflects_recorded_outcomes() {
		let metrics = RefreshMetrics::default();

		metrics.record_attempt();
		metrics.record_attempt();
		metrics.record(RefreshOutcome::Exchanged);
		metrics.record(RefreshOutcome::Relogin);
		metrics.record(RefreshOutcome::Relogin);

		assert_eq!(
			metrics.snapshot(),
			RefreshSnapshot { attempts: 2, exchanged: 1, relogins: 2, failures: 0 }
		);
	}
}

//! Observability helpers for client flows.
//!
//! Every flow runs inside a `poscore_client.flow` span carrying `flow`, `stage`, and the final
//! `outcome`.
//!
//! # Feature Flags
//!
//! - Enable `metrics` to increment the `poscore_client_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow` + `outcome`.

mod span;

pub use span::*;

// self
use crate::_prelude::*;

/// Flow kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Username/password login.
	Login,
	/// Refresh-token exchange.
	Refresh,
	/// Campaign listing (all pages of one call).
	ListCampaigns,
	/// Installation progress summary.
	Installations,
	/// Document or thumbnail download.
	Document,
	/// Photo archive export.
	PhotoExport,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Login => "login",
			FlowKind::Refresh => "refresh",
			FlowKind::ListCampaigns => "list_campaigns",
			FlowKind::Installations => "installations",
			FlowKind::Document => "document",
			FlowKind::PhotoExport => "photo_export",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a flow span and records attempt + outcome.
pub async fn observe<T, Fut>(kind: FlowKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = FlowSpan::new(kind, stage);

	count(kind, FlowOutcome::Attempt);

	let result = span.instrument(fut).await;
	let outcome = if result.is_ok() { FlowOutcome::Success } else { FlowOutcome::Failure };

	span.record_outcome(outcome);
	count(kind, outcome);

	result
}

#[cfg(feature = "metrics")]
fn count(kind: FlowKind, outcome: FlowOutcome) {
	metrics::counter!(
		"poscore_client_flow_total",
		"flow" => kind.as_str(),
		"outcome" => outcome.as_str()
	)
	.increment(1);
}

#[cfg(not(feature = "metrics"))]
fn count(_: FlowKind, _: FlowOutcome) {}

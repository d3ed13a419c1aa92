// crates.io
use tracing::{Instrument, Span, field, instrument::Instrumented};
// self
use crate::{
	_prelude::*,
	obs::{FlowKind, FlowOutcome},
};

/// `poscore_client.flow` span wrapping one client operation.
///
/// The `outcome` field starts empty and is filled once the operation settles.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	span: Span,
}
impl FlowSpan {
	/// Opens a span for `kind` at `stage`.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		let span = tracing::info_span!(
			"poscore_client.flow",
			flow = kind.as_str(),
			stage,
			outcome = field::Empty
		);

		Self { span }
	}

	/// Runs `fut` inside the span.
	pub fn instrument<Fut>(&self, fut: Fut) -> Instrumented<Fut>
	where
		Fut: Future,
	{
		fut.instrument(self.span.clone())
	}

	/// Stores the final outcome on the span.
	pub fn record_outcome(&self, outcome: FlowOutcome) {
		self.span.record("outcome", outcome.as_str());
	}
}

//! `POST /cm/campaigns/{id}/installationprogresssummary`.

// self
use crate::{
	_prelude::*,
	client::{ApiClient, decode_json},
	http::{ApiHttpClient, ApiRequest},
	model::InstallationStatusPayload,
	obs::{self, FlowKind},
};

/// Filter body shared by the installation summary and the photo export.
///
/// Empty lists mean "no restriction"; all four keys are always sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationFilter {
	/// Location identifiers.
	pub locations: Vec<i64>,
	/// Campaign-management carrier identifiers.
	pub cm_carriers: Vec<i64>,
	/// Component identifiers.
	pub components: Vec<i64>,
	/// Task type codes.
	pub task_types: Vec<i64>,
}
impl InstallationFilter {
	/// Creates an unrestricted filter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts to the given locations.
	pub fn locations(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
		self.locations = ids.into_iter().collect();

		self
	}

	/// Restricts to the given carriers.
	pub fn cm_carriers(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
		self.cm_carriers = ids.into_iter().collect();

		self
	}

	/// Restricts to the given components.
	pub fn components(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
		self.components = ids.into_iter().collect();

		self
	}

	/// Restricts to the given task types.
	pub fn task_types(mut self, codes: impl IntoIterator<Item = i64>) -> Self {
		self.task_types = codes.into_iter().collect();

		self
	}
}

pub(super) fn summary_path(campaign_id: i64) -> String {
	format!("/cm/campaigns/{campaign_id}/installationprogresssummary")
}

impl<C> ApiClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Fetches the installation progress of a campaign, grouped by state.
	pub async fn get_campaign_installations(
		&self,
		campaign_id: i64,
		filter: &InstallationFilter,
	) -> Result<InstallationStatusPayload> {
		let fetch = self.fetch_installations(campaign_id, filter);

		obs::observe(FlowKind::Installations, "get_campaign_installations", fetch).await
	}

	async fn fetch_installations(
		&self,
		campaign_id: i64,
		filter: &InstallationFilter,
	) -> Result<InstallationStatusPayload> {
		let url = self.endpoint(&summary_path(campaign_id))?;
		let response = self.send(ApiRequest::post(url.clone()).accept_json().json(filter)?).await?;
		let payload = decode_json::<InstallationStatusPayload>(&url, &response.body)?;

		tracing::debug!(
			campaign_id,
			locations = payload.total_locations(),
			"Fetched installation summary."
		);

		Ok(payload)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn empty_filter_serializes_all_keys() {
		let body = serde_json::to_value(InstallationFilter::new())
			.expect("Filter should serialize.");

		assert_eq!(
			body,
			json!({ "locations": [], "cmCarriers": [], "components": [], "taskTypes": [] })
		);
	}

	#[test]
	fn filter_setters_use_camel_case_keys() {
		let body = serde_json::to_value(
			InstallationFilter::new().cm_carriers([3, 4]).task_types([1]),
		)
		.expect("Filter should serialize.");

		assert_eq!(body["cmCarriers"], json!([3, 4]));
		assert_eq!(body["taskTypes"], json!([1]));
		assert_eq!(body["locations"], json!([]));
	}
}

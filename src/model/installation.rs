//! Installation status records returned by `POST /cm/campaigns/{id}/installationprogresssummary`.

// self
use crate::_prelude::*;

/// Campaign locations grouped by installation state.
///
/// Every group defaults to empty when the API omits it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstallationStatusPayload {
	/// Installation started but not finished.
	pub in_progress: Vec<LocationInstallation>,
	/// Installed, waiting for photo review.
	pub pending_review: Vec<LocationInstallation>,
	/// Some rows installed.
	pub partially_installed: Vec<LocationInstallation>,
	/// Installation attempted and failed.
	pub unsuccessful: Vec<LocationInstallation>,
	/// Fully installed.
	pub installed: Vec<LocationInstallation>,
	/// Installation window missed.
	pub missed: Vec<LocationInstallation>,
}
impl InstallationStatusPayload {
	/// Number of locations across all groups.
	pub fn total_locations(&self) -> usize {
		self.groups().map(<[LocationInstallation]>::len).sum()
	}

	/// Iterates the groups in wire order.
	pub fn groups(&self) -> impl Iterator<Item = &[LocationInstallation]> {
		[
			&self.in_progress,
			&self.pending_review,
			&self.partially_installed,
			&self.unsuccessful,
			&self.installed,
			&self.missed,
		]
		.into_iter()
		.map(Vec::as_slice)
	}
}

/// Store taking part in a campaign, with its campaign rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[allow(missing_docs)]
pub struct LocationInstallation {
	pub id: i64,
	pub identifier: String,
	pub city: String,
	pub street: String,
	pub zip: String,
	pub rows: Vec<CampaignRowInstallation>,
}

/// Installation state of one carrier/component at a location.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CampaignRowInstallation {
	pub campaign_row_id: i64,
	pub carrier_name: String,
	pub component_name: String,
	pub quantity_installed: i64,
	pub quantity_to_install: i64,
	pub responses: Vec<InstallationResponse>,
}

/// Photo or note submitted for a row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationResponse {
	/// Response kind code (`type` on the wire).
	#[serde(rename = "type")]
	pub kind: i64,
	/// Photo identifier.
	pub photo_id: String,
	/// Photo file name.
	pub photo_name: String,
	/// Installer note.
	pub note: Option<String>,
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::{Value, json};
	// self
	use super::*;

	fn location(id: i64) -> Value {
		json!({
			"id": id,
			"identifier": format!("S{id:03}"),
			"city": "Praha",
			"street": "Na Příkopě 1",
			"zip": "110 00",
			"rows": [{
				"campaignRowId": 10,
				"carrierName": "Wobbler",
				"componentName": "Shelf strip",
				"quantityInstalled": 1,
				"quantityToInstall": 2,
				"responses": [{ "type": 1, "photoId": "p-1", "photoName": "shelf.jpg" }]
			}]
		})
	}

	#[test]
	fn missing_groups_default_to_empty() {
		let payload: InstallationStatusPayload = serde_json::from_value(json!({
			"installed": [location(1)],
			"inProgress": [location(2), location(3)]
		}))
		.expect("Partial payload should decode.");

		assert_eq!(payload.total_locations(), 3);
		assert!(payload.missed.is_empty());
		assert_eq!(payload.installed[0].identifier, "S001");
	}

	#[test]
	fn responses_keep_type_code_and_optional_note() {
		let payload: InstallationStatusPayload =
			serde_json::from_value(json!({ "pendingReview": [location(4)] }))
				.expect("Nested payload should decode.");
		let row = &payload.pending_review[0].rows[0];

		assert_eq!(row.quantity_to_install, 2);
		assert_eq!(row.responses[0].kind, 1);
		assert_eq!(row.responses[0].photo_name, "shelf.jpg");
		assert!(row.responses[0].note.is_none());
	}

	#[test]
	fn empty_object_is_an_empty_payload() {
		let payload: InstallationStatusPayload =
			serde_json::from_value(json!({})).expect("Empty payload should decode.");

		assert_eq!(payload, InstallationStatusPayload::default());
		assert_eq!(payload.total_locations(), 0);
	}
}

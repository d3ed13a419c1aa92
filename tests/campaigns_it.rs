#![cfg(feature = "reqwest")]

mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use poscore_client::{
	client::ListCampaigns,
	error::{DecodeError, Error},
};

#[tokio::test]
async fn single_page_call_issues_exactly_one_request() {
	let server = MockServer::start_async().await;

	mock_login(&server, "access-1", Some("refresh-1"), 3_600).await;

	let page = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(path("/cm/campaigns"))
				.header("Authorization", "Bearer access-1")
				.query_param("size", "2")
				.query_param("page", "3")
				.query_param("expand", "false")
				.query_param("status", "active");
			then.status(200).json_body(campaign_page(3, 10, [31, 32]));
		})
		.await;
	let request = ListCampaigns::new().size(2).page(3).expand(false).fetch_all(false).param(
		"status",
		"active",
	);
	let campaigns =
		api_client(&server).list_campaigns(&request).await.expect("Listing should succeed.");

	page.assert_hits_async(1).await;
	assert_eq!(campaigns.iter().map(|c| c.id).collect::<Vec<_>>(), [31, 32]);
}

#[tokio::test]
async fn fetch_all_walks_pages_in_order_and_stops_on_last_page() {
	let server = MockServer::start_async().await;

	mock_login(&server, "access-1", Some("refresh-1"), 3_600).await;

	let mut pages = Vec::new();

	for (index, ids) in [[1, 2], [3, 4], [5, 6]].into_iter().enumerate() {
		let page_number = index as i64;

		pages.push(
			server
				.mock_async(move |when, then| {
					when.method(GET)
						.path(path("/cm/campaigns"))
						.query_param("page", page_number.to_string());
					then.status(200).json_body(campaign_page(page_number, 3, ids));
				})
				.await,
		);
	}

	let campaigns = api_client(&server)
		.list_campaigns(&ListCampaigns::new().size(2))
		.await
		.expect("Listing should succeed.");

	for page in &pages {
		page.assert_hits_async(1).await;
	}

	assert_eq!(campaigns.iter().map(|c| c.id).collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn page_param_starts_the_walk_and_still_advances() {
	let server = MockServer::start_async().await;

	mock_login(&server, "access-1", Some("refresh-1"), 3_600).await;

	let first = server
		.mock_async(|when, then| {
			when.method(GET).path(path("/cm/campaigns")).query_param("page", "0");
			then.status(200).json_body(campaign_page(0, 2, [1]));
		})
		.await;
	let second = server
		.mock_async(|when, then| {
			when.method(GET).path(path("/cm/campaigns")).query_param("page", "1");
			then.status(200).json_body(campaign_page(1, 2, [2]));
		})
		.await;
	let campaigns = api_client(&server)
		.list_campaigns(&ListCampaigns::new().size(1).param("page", "0"))
		.await
		.expect("Listing should succeed.");

	first.assert_hits_async(1).await;
	second.assert_hits_async(1).await;
	assert_eq!(campaigns.iter().map(|c| c.id).collect::<Vec<_>>(), [1, 2]);
}

#[tokio::test]
async fn loose_envelope_stops_on_short_page() {
	let server = MockServer::start_async().await;

	mock_login(&server, "access-1", None, 3_600).await;

	let first = server
		.mock_async(|when, then| {
			when.method(GET).path(path("/cm/campaigns")).query_param("page", "0");
			then.status(200).json_body(json!({ "data": [campaign(1), campaign(2)] }));
		})
		.await;
	let second = server
		.mock_async(|when, then| {
			when.method(GET).path(path("/cm/campaigns")).query_param("page", "1");
			then.status(200).json_body(json!([campaign(3)]));
		})
		.await;
	let campaigns = api_client(&server)
		.list_campaigns(&ListCampaigns::new().size(2))
		.await
		.expect("Listing should succeed.");

	first.assert_hits_async(1).await;
	second.assert_hits_async(1).await;
	assert_eq!(campaigns.len(), 3);
}

#[tokio::test]
async fn failing_page_aborts_without_partial_results() {
	let server = MockServer::start_async().await;

	mock_login(&server, "access-1", None, 3_600).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path(path("/cm/campaigns")).query_param("page", "0");
			then.status(200).json_body(campaign_page(0, 3, [1, 2]));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path(path("/cm/campaigns")).query_param("page", "1");
			then.status(500).body("upstream exploded");
		})
		.await;

	let err = api_client(&server)
		.list_campaigns(&ListCampaigns::new().size(2))
		.await
		.expect_err("Server error should abort the listing.");

	match err {
		Error::Http(http) => {
			assert_eq!(http.status, 500);
			assert_eq!(http.path, path("/cm/campaigns"));
			assert_eq!(http.body_preview, "upstream exploded");
		},
		other => panic!("Expected an HTTP error, got {other:?}."),
	}
}

#[tokio::test]
async fn malformed_record_reports_field_path() {
	let server = MockServer::start_async().await;

	mock_login(&server, "access-1", None, 3_600).await;

	let mut body = campaign_page(0, 1, [1, 2]);

	body["data"][1]["created"] = json!("not a timestamp");

	server
		.mock_async(move |when, then| {
			when.method(GET).path(path("/cm/campaigns"));
			then.status(200).json_body(body);
		})
		.await;

	let err = api_client(&server)
		.list_campaigns(&ListCampaigns::new())
		.await
		.expect_err("Invalid record should fail decoding.");

	match err {
		Error::Decode(DecodeError::Schema { field, .. }) => assert_eq!(field, "[1].created"),
		other => panic!("Expected a schema error, got {other:?}."),
	}
}

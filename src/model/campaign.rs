//! Campaign records returned by `GET /cm/campaigns`.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, model::timestamp};

/// Free-form JSON object kept as-is.
pub type JsonObject = Map<String, Value>;

/// Campaign with its (optionally expanded) related entities.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
	/// Campaign identifier.
	pub id: i64,
	/// Display name.
	pub name: String,
	/// Purchase-order style reference number.
	pub p_number: Option<String>,
	/// Creation instant.
	#[serde(deserialize_with = "timestamp::deserialize")]
	pub created: OffsetDateTime,
	/// Last modification instant.
	#[serde(default, deserialize_with = "timestamp::option::deserialize")]
	pub modified: Option<OffsetDateTime>,
	/// First day of the campaign (`from`).
	#[serde(rename = "from", deserialize_with = "timestamp::deserialize")]
	pub date_from: OffsetDateTime,
	/// Last day of the campaign (`to`).
	#[serde(rename = "to", deserialize_with = "timestamp::deserialize")]
	pub date_to: OffsetDateTime,
	/// ISO currency code.
	pub currency: String,

	/// Campaign manager contact (expanded).
	pub cm_contact: Option<Contact>,
	/// Owning company (expanded).
	pub company: Option<Company>,
	/// Invoice recipient (expanded).
	pub invoice_to: Option<CustomerReference>,
	/// Ordering customer (expanded).
	pub campaign_from: Option<CustomerReference>,
	/// Account-manager sales employee (expanded).
	pub am_sales_employee: Option<SalesEmployee>,
	/// Campaign rows (expanded).
	pub campaign_rows: Option<Vec<CampaignRow>>,
	/// Current status (expanded).
	pub campaign_status: Option<CampaignStatus>,
	/// Locks placed on the campaign.
	#[serde(default)]
	pub campaign_locks: Vec<CampaignLock>,

	/// Whether the campaign runs yearly.
	pub is_yearly_campaign: Option<bool>,
	/// Whether the campaign was canceled.
	pub is_canceled: bool,
	/// Campaign manager contact identifier.
	pub cm_contact_id: i64,
	/// Owning company identifier.
	pub company_id: i64,
	/// Invoice customer identifier.
	pub inv_customer_id: i64,
	/// Ordering customer identifier.
	pub camp_customer_id: i64,
	/// Account-manager identifier.
	pub am_sale_id: i64,
	/// Invoice status code.
	pub invoice_status: i64,
	/// Total campaign amount.
	pub total_amount: f64,
	/// Numeric status code.
	pub campaign_status_value: i64,
	/// Whether Limigo uses the ordering customer.
	pub limigo_use_customer_from: bool,
	/// Installation progress in percent.
	pub installation_progress: Option<i64>,
	/// Free-form flags.
	#[serde(default)]
	pub flags: Vec<String>,
	/// Dunnhumby identifier.
	pub dunnhumby_id: Option<i64>,
	/// Retailer auto-approval limit.
	pub retailer_auto_approval_limit: Option<i64>,
	/// Whether retailer auto-approval is enabled.
	pub use_retailer_auto_approval: bool,

	/// Campaign-manager identifier.
	pub cm_id: Option<i64>,
	/// Exchange rate applied to amounts.
	pub fx_rate: Option<f64>,
	/// Next approval step label.
	pub next_approval_step: Option<String>,
}

/// One ordered line of a campaign (carrier/component at a partner).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CampaignRow {
	pub id: i64,
	pub campaign_id: Option<i64>,
	pub partner_id: Option<i64>,
	pub carrier_id: Option<i64>,
	pub brand_id: Option<i64>,
	pub component_id: Option<i64>,
	pub partner: Option<Partner>,
	pub brand: Option<Brand>,
	pub carrier: Option<Carrier>,
	pub component: Option<Component>,
	pub campaign_status: Option<CampaignStatus>,

	pub quantity: Option<i64>,
	pub locations_count: Option<i64>,
	pub unit_price: Option<f64>,
	pub discount: Option<f64>,
	pub total_amount: Option<f64>,
	#[serde(default, deserialize_with = "timestamp::option::deserialize")]
	pub start_date: Option<OffsetDateTime>,
	#[serde(default, deserialize_with = "timestamp::option::deserialize")]
	pub end_date: Option<OffsetDateTime>,
	#[serde(default, deserialize_with = "timestamp::option::deserialize")]
	pub modified: Option<OffsetDateTime>,

	pub description: Option<String>,
	pub print_comment: Option<String>,
	pub approval_comment: Option<String>,

	pub has_installation_tasks: Option<bool>,
	pub installation_description: Option<String>,
	pub has_monitor_tasks: Option<bool>,
	pub monitor_description: Option<String>,
	pub has_deinstallation_tasks: Option<bool>,
	pub deinstallation_description: Option<String>,

	pub deinstal_material: Option<i64>,
	pub minimum_photos_count: Option<i64>,
	pub production_quantity: Option<i64>,
	pub production_unit_price: Option<f64>,
	pub production_discount: Option<f64>,
	pub installation_quantity: Option<i64>,
	pub installation_unit_price: Option<f64>,
	pub installation_discount: Option<f64>,

	pub real_production_quantity: Option<i64>,
	pub real_production_cost: Option<f64>,
	pub real_production_unit_price: Option<f64>,

	pub is_production_used: Option<bool>,
	pub is_installation_used: Option<bool>,
	pub is_installation_generated: Option<bool>,
	pub is_monitor_generated: Option<bool>,
	pub is_deinstallation_generated: Option<bool>,

	pub price_history: Option<Vec<JsonObject>>,
	#[serde(default, deserialize_with = "timestamp::option::deserialize_vec")]
	pub monitor_task_dates: Option<Vec<OffsetDateTime>>,
	pub shop_app_brand_name: Option<String>,
	pub ean: Option<String>,
	pub individual_name: Option<String>,
}

/// Status entry attached to campaigns and rows.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStatus {
	/// When the status was set.
	#[serde(default, deserialize_with = "timestamp::option::deserialize")]
	pub created: Option<OffsetDateTime>,
	/// Numeric status code.
	pub value: i64,
	/// Status label.
	pub name: String,
}

/// Lock placed on a campaign; the API does not publish a fixed shape, so fields pass through.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CampaignLock {
	/// Raw lock fields.
	#[serde(flatten)]
	pub fields: JsonObject,
}

/// Person reachable for a campaign.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[allow(missing_docs)]
pub struct Contact {
	pub id: i64,
	pub name: String,
	pub email: String,
	pub phone: String,
}

/// Company owning a campaign.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Company {
	pub id: i64,
	pub name: String,
	pub currency: String,
	pub company_code: String,
	pub country_code: String,
}

/// Customer referenced as invoice recipient or orderer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[allow(missing_docs)]
pub struct CustomerReference {
	pub id: i64,
	pub name: String,
	pub code: String,
}

/// Sales employee responsible for a campaign.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[allow(missing_docs)]
pub struct SalesEmployee {
	pub id: i64,
	pub name: String,
	pub email: String,
}

/// Retail partner.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Partner {
	pub id: i64,
	pub name: String,
	pub retailer_auto_approval_limit: Option<i64>,
}

/// Advertised brand.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[allow(missing_docs)]
pub struct Brand {
	pub id: i64,
	pub name: String,
}

/// Advertising carrier type.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Carrier {
	pub id: i64,
	pub name: String,
	pub allow_reservation: bool,
}

/// Physical component of a carrier.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Component {
	pub id: i64,
	pub name: String,
	pub carrier_id: i64,
	#[serde(default)]
	pub partners: Vec<JsonObject>,
}

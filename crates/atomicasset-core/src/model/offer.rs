//! Trade offers and plain transfers between accounts.

use super::asset::Asset;
use super::null_as_default;
use crate::query::{EncodeError, FilterSpec, QueryList, QueryParams, SortOrder};
use crate::timestamp::Timestamp;
use serde::Deserialize;

state_code! {
    /// Lifecycle of a trade offer.
    pub enum OfferState {
        Pending = 0,
        Invalid = 1,
        Unknown = 2,
        Accepted = 3,
        Declined = 4,
        Canceled = 5,
    }
}

/// A trade offer between two accounts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Offer {
    /// Offer id
    #[serde(rename = "offer_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub contract: String,
    /// Sending account
    #[serde(rename = "sender_name", deserialize_with = "null_as_default")]
    pub sender: String,
    /// Receiving account
    #[serde(rename = "recipient_name", deserialize_with = "null_as_default")]
    pub recipient: String,
    /// Memo attached by the sender
    #[serde(deserialize_with = "null_as_default")]
    pub memo: String,
    /// Lifecycle state
    #[serde(deserialize_with = "null_as_default")]
    pub state: OfferState,
    /// Whether the sender is a contract account
    #[serde(deserialize_with = "null_as_default")]
    pub is_sender_contract: bool,
    /// Whether the recipient is a contract account
    #[serde(deserialize_with = "null_as_default")]
    pub is_recipient_contract: bool,
    /// Assets offered by the sender
    #[serde(deserialize_with = "null_as_default")]
    pub sender_assets: Vec<Asset>,
    /// Assets requested from the recipient
    #[serde(deserialize_with = "null_as_default")]
    pub recipient_assets: Vec<Asset>,
    /// Block of the last change
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at_block: String,
    /// When the record last changed
    pub updated_at_time: Timestamp,
    /// Block the record was created in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
}

sort_column! {
    /// Sort column for trade offers.
    pub enum OfferSort {
        Created => "created",
        Updated => "updated",
    }
}

/// Filter for `/atomicassets/v1/offers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffersFilter {
    /// Only offers sent or received by this account
    pub account: String,
    /// Only these senders
    pub sender: QueryList<String>,
    /// Only these recipients
    pub recipient: QueryList<String>,
    /// Exact memo
    pub memo: String,
    /// Substring match on the memo
    pub match_memo: String,
    /// Only these states
    pub state: QueryList<OfferState>,
    /// Only offers to contract accounts
    pub is_recipient_contract: bool,
    /// Only offers containing these assets
    pub asset_id: QueryList<u64>,
    /// Only these templates
    pub template_id: QueryList<u64>,
    /// Only these schemas
    pub schema_name: QueryList<String>,
    /// Only these collections
    pub collection_name: QueryList<String>,
    /// Only offers with these accounts
    pub account_whitelist: QueryList<String>,
    /// Exclude offers with these accounts
    pub account_blacklist: QueryList<String>,
    /// Only offers giving these assets
    pub sender_asset_whitelist: QueryList<String>,
    /// Exclude offers giving these assets
    pub sender_asset_blacklist: QueryList<String>,
    /// Only offers asking for these assets
    pub recipient_asset_whitelist: QueryList<String>,
    /// Exclude offers asking for these assets
    pub recipient_asset_blacklist: QueryList<String>,
    /// Only these collections
    pub collection_whitelist: QueryList<String>,
    /// Exclude these collections
    pub collection_blacklist: QueryList<String>,
    /// Hide contract accounts
    pub hide_contracts: bool,
    /// Hide offers whose assets are gone
    pub hide_empty_offers: bool,
    /// Only these ids
    pub ids: QueryList<u64>,
    /// Lowest id to return
    pub lower_bound: String,
    /// Highest id to return
    pub upper_bound: String,
    /// Created before this time, in ms
    pub before: i64,
    /// Created after this time, in ms
    pub after: i64,
    /// Page number, starting at 1
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Sort direction
    pub order: SortOrder,
    /// Sort column
    pub sort: OfferSort,
}

impl FilterSpec for OffersFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("account", &self.account)?
            .insert("sender", &self.sender)?
            .insert("recipient", &self.recipient)?
            .insert("memo", &self.memo)?
            .insert("match_memo", &self.match_memo)?
            .insert("state", &self.state)?
            .insert("is_recipient_contract", &self.is_recipient_contract)?
            .insert("asset_id", &self.asset_id)?
            .insert("template_id", &self.template_id)?
            .insert("schema_name", &self.schema_name)?
            .insert("collection_name", &self.collection_name)?
            .insert("account_whitelist", &self.account_whitelist)?
            .insert("account_blacklist", &self.account_blacklist)?
            .insert("sender_asset_whitelist", &self.sender_asset_whitelist)?
            .insert("sender_asset_blacklist", &self.sender_asset_blacklist)?
            .insert("recipient_asset_whitelist", &self.recipient_asset_whitelist)?
            .insert("recipient_asset_blacklist", &self.recipient_asset_blacklist)?
            .insert("collection_whitelist", &self.collection_whitelist)?
            .insert("collection_blacklist", &self.collection_blacklist)?
            .insert("hide_contracts", &self.hide_contracts)?
            .insert("hide_empty_offers", &self.hide_empty_offers)?
            .insert("ids", &self.ids)?
            .insert("lower_bound", &self.lower_bound)?
            .insert("upper_bound", &self.upper_bound)?
            .insert("before", &self.before)?
            .insert("after", &self.after)?
            .insert("page", &self.page)?
            .insert("limit", &self.limit)?
            .insert("order", &self.order)?
            .insert("sort", &self.sort)?;
        Ok(())
    }
}

/// An asset transfer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transfer {
    /// Transfer id
    #[serde(rename = "transfer_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub contract: String,
    /// Sending account
    #[serde(rename = "sender_name", deserialize_with = "null_as_default")]
    pub sender: String,
    /// Receiving account
    #[serde(rename = "recipient_name", deserialize_with = "null_as_default")]
    pub recipient: String,
    /// Memo attached by the sender
    #[serde(deserialize_with = "null_as_default")]
    pub memo: String,
    /// Assets moved
    #[serde(deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
    /// Block the record was created in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
}

/// Filter for `/atomicassets/v1/transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransfersFilter {
    /// Only transfers sent or received by these accounts
    pub account: QueryList<String>,
    /// Only these senders
    pub sender: QueryList<String>,
    /// Only these recipients
    pub recipient: QueryList<String>,
    /// Exact memo
    pub memo: String,
    /// Substring match on the memo
    pub match_memo: String,
    /// Only transfers containing these assets
    pub asset_id: QueryList<u64>,
    /// Only these templates
    pub template_id: QueryList<u64>,
    /// Only these schemas
    pub schema_name: QueryList<String>,
    /// Only these collections
    pub collection_name: QueryList<String>,
    /// Only these collections
    pub collection_whitelist: QueryList<String>,
    /// Exclude these collections
    pub collection_blacklist: QueryList<String>,
    /// Hide contract accounts
    pub hide_contracts: bool,
    /// Only these ids
    pub ids: QueryList<String>,
    /// Lowest id to return
    pub lower_bound: String,
    /// Highest id to return
    pub upper_bound: String,
    /// Created before this time, in ms
    pub before: i64,
    /// Created after this time, in ms
    pub after: i64,
    /// Page number, starting at 1
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Sort direction
    pub order: SortOrder,
}

impl FilterSpec for TransfersFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("account", &self.account)?
            .insert("sender", &self.sender)?
            .insert("recipient", &self.recipient)?
            .insert("memo", &self.memo)?
            .insert("match_memo", &self.match_memo)?
            .insert("asset_id", &self.asset_id)?
            .insert("template_id", &self.template_id)?
            .insert("schema_name", &self.schema_name)?
            .insert("collection_name", &self.collection_name)?
            .insert("collection_whitelist", &self.collection_whitelist)?
            .insert("collection_blacklist", &self.collection_blacklist)?
            .insert("hide_contracts", &self.hide_contracts)?
            .insert("ids", &self.ids)?
            .insert("lower_bound", &self.lower_bound)?
            .insert("upper_bound", &self.upper_bound)?
            .insert("before", &self.before)?
            .insert("after", &self.after)?
            .insert("page", &self.page)?
            .insert("limit", &self.limit)?
            .insert("order", &self.order)?;
        Ok(())
    }
}

//! Claim links created through the tools contract.

use super::asset::Asset;
use super::null_as_default;
use crate::query::{EncodeError, FilterSpec, QueryList, QueryParams, SortOrder};
use crate::timestamp::Timestamp;
use serde::Deserialize;

state_code! {
    /// Lifecycle of a claim link.
    pub enum LinkState {
        Waiting = 0,
        Created = 1,
        Canceled = 2,
        Claimed = 3,
    }
}

/// A claim link holding assets until someone redeems it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Link {
    /// Link id
    #[serde(rename = "link_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Tools contract account
    #[serde(deserialize_with = "null_as_default")]
    pub tools_contract: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub assets_contract: String,
    /// Account that created the link
    #[serde(deserialize_with = "null_as_default")]
    pub creator: String,
    /// `None` until claimed
    pub claimer: Option<String>,
    /// Lifecycle state
    #[serde(deserialize_with = "null_as_default")]
    pub state: LinkState,
    /// Key whose private half claims the link
    #[serde(deserialize_with = "null_as_default")]
    pub public_key: String,
    /// Memo set by the creator
    #[serde(deserialize_with = "null_as_default")]
    pub memo: String,
    /// Transaction id
    #[serde(rename = "txid", deserialize_with = "null_as_default")]
    pub tx_id: String,
    /// Assets held by the link
    #[serde(deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
    /// Block the record was created in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
    /// Block of the last change
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at_block: String,
    /// When the record last changed
    pub updated_at_time: Timestamp,
}

/// Filter for `/atomictools/v1/links`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinksFilter {
    /// Only links by this account
    pub creator: String,
    /// Only links claimed by this account
    pub claimer: String,
    /// Only links with this key
    pub public_key: String,
    /// Only these states
    pub state: QueryList<LinkState>,
    /// Only these collections
    pub collection_whitelist: QueryList<String>,
    /// Exclude these collections
    pub collection_blacklist: QueryList<String>,
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
}

impl FilterSpec for LinksFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("creator", &self.creator)?
            .insert("claimer", &self.claimer)?
            .insert("public_key", &self.public_key)?
            .insert("state", &self.state)?
            .insert("collection_whitelist", &self.collection_whitelist)?
            .insert("collection_blacklist", &self.collection_blacklist)?
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

//! Assets and their sale history.

use super::collection::Collection;
use super::common::{PriceToken, Token};
use super::schema::InlineSchema;
use super::template::Template;
use super::null_as_default;
use crate::query::{EncodeError, FilterSpec, QueryList, QueryParams, SortOrder};
use crate::timestamp::Timestamp;
use serde::Deserialize;

/// A single non-fungible asset.
///
/// `data` is the server-side merge of the template's immutable data with the
/// asset's own immutable and mutable data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Asset {
    /// Asset id
    #[serde(rename = "asset_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub contract: String,
    /// `None` once the asset is burned
    pub owner: Option<String>,
    /// Name taken from the merged data
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Whether the asset may change owner
    #[serde(deserialize_with = "null_as_default")]
    pub is_transferable: bool,
    /// Whether the asset may be burned
    #[serde(deserialize_with = "null_as_default")]
    pub is_burnable: bool,
    /// Mint number within the template
    #[serde(deserialize_with = "null_as_default")]
    pub template_mint: String,
    /// Owning collection
    #[serde(deserialize_with = "null_as_default")]
    pub collection: Collection,
    /// Schema the record follows
    #[serde(deserialize_with = "null_as_default")]
    pub schema: InlineSchema,
    /// `None` for assets minted without a template
    pub template: Option<Template>,
    /// Tokens released when the asset is burned
    #[serde(deserialize_with = "null_as_default")]
    pub backed_tokens: Vec<Token>,
    /// Attributes fixed at mint
    pub immutable_data: serde_json::Value,
    /// Attributes the collection may update
    pub mutable_data: serde_json::Value,
    /// Template and asset data merged
    pub data: serde_json::Value,
    /// Account that burned the asset
    pub burned_by_account: Option<String>,
    /// Block the asset was burned in
    pub burned_at_block: Option<String>,
    /// When the asset was burned
    pub burned_at_time: Option<Timestamp>,
    /// Block of the last change
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at_block: String,
    /// When the record last changed
    pub updated_at_time: Timestamp,
    /// Block of the last transfer
    #[serde(deserialize_with = "null_as_default")]
    pub transferred_at_block: String,
    /// When the asset last moved
    pub transferred_at_time: Timestamp,
    /// Block the asset was minted in
    #[serde(deserialize_with = "null_as_default")]
    pub minted_at_block: String,
    /// When the asset was minted
    pub minted_at_time: Timestamp,
    /// Market price statistics for the asset's template, when requested
    #[serde(deserialize_with = "null_as_default")]
    pub prices: Vec<AssetPrice>,
}

impl Asset {
    /// Whether the asset has been burned.
    #[must_use]
    pub fn is_burned(&self) -> bool {
        self.burned_by_account.is_some()
    }
}

/// Price statistics attached to listed assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetPrice {
    /// Market contract account
    #[serde(deserialize_with = "null_as_default")]
    pub market_contract: String,
    /// Price token
    #[serde(deserialize_with = "null_as_default")]
    pub token: PriceToken,
    /// Median sale price
    #[serde(deserialize_with = "null_as_default")]
    pub median: String,
    /// Average sale price
    #[serde(deserialize_with = "null_as_default")]
    pub average: String,
    /// Median over recent sales only
    #[serde(deserialize_with = "null_as_default")]
    pub suggested_median: String,
    /// Average over recent sales only
    #[serde(deserialize_with = "null_as_default")]
    pub suggested_average: String,
    /// Lowest sale price
    #[serde(deserialize_with = "null_as_default")]
    pub min: String,
    /// Highest sale price
    #[serde(deserialize_with = "null_as_default")]
    pub max: String,
    /// Number of sales
    #[serde(deserialize_with = "null_as_default")]
    pub sales: String,
}

/// One completed sale of an asset, from `/atomicmarket/v1/assets/{id}/sales`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetSale {
    /// Set when sold through a direct sale
    pub sale_id: Option<String>,
    /// Market contract account
    #[serde(deserialize_with = "null_as_default")]
    pub market_contract: String,
    /// Set when sold through an auction
    pub auction_id: Option<String>,
    /// Set when sold through a buy offer
    pub buyoffer_id: Option<String>,
    /// Sale price in the token's smallest unit
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
    /// Settlement token symbol
    #[serde(deserialize_with = "null_as_default")]
    pub token_symbol: String,
    /// Settlement token decimals
    #[serde(deserialize_with = "null_as_default")]
    pub token_precision: u32,
    /// Settlement token contract
    #[serde(deserialize_with = "null_as_default")]
    pub token_contract: String,
    /// Selling account
    #[serde(deserialize_with = "null_as_default")]
    pub seller: String,
    /// Buying account
    #[serde(deserialize_with = "null_as_default")]
    pub buyer: String,
    /// When the sale settled
    pub block_time: Timestamp,
}

sort_column! {
    /// Sort column for asset listings.
    pub enum AssetSort {
        AssetId => "asset_id",
        Minted => "minted",
        Updated => "updated",
        Transferred => "transferred",
        TemplateMint => "template_mint",
        Name => "name",
    }
}

/// Filter for `/atomicassets/v1/assets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetsFilter {
    /// Only this collection
    pub collection_name: String,
    /// Exclude these collections
    pub collection_blacklist: QueryList<String>,
    /// Only these collections
    pub collection_whitelist: QueryList<String>,
    /// Only this schema
    pub schema_name: String,
    /// Only this template
    pub template_id: u64,
    /// Only these templates
    pub template_whitelist: QueryList<u64>,
    /// Exclude these templates
    pub template_blacklist: QueryList<u64>,
    /// Only assets held by this account
    pub owner: String,
    /// Substring match on the name
    pub r#match: String,
    /// Substring match on the immutable `name` attribute
    pub match_immutable_name: String,
    /// Substring match on the mutable `name` attribute
    pub match_mutable_name: String,
    /// Hide templates already held by these accounts
    pub hide_templates_by_accounts: String,
    /// Only transferable assets
    pub is_transferable: bool,
    /// Only burnable assets
    pub is_burnable: bool,
    /// Only burned assets
    pub burned: bool,
    /// Only templates the owner holds more than once
    pub only_duplicated_templates: bool,
    /// Only assets backed by tokens
    pub has_backed_tokens: bool,
    /// Hide assets locked in open offers
    pub hide_offers: bool,
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
    pub sort: AssetSort,
}

impl FilterSpec for AssetsFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("collection_name", &self.collection_name)?
            .insert("collection_blacklist", &self.collection_blacklist)?
            .insert("collection_whitelist", &self.collection_whitelist)?
            .insert("schema_name", &self.schema_name)?
            .insert("template_id", &self.template_id)?
            .insert("template_whitelist", &self.template_whitelist)?
            .insert("template_blacklist", &self.template_blacklist)?
            .insert("owner", &self.owner)?
            .insert("match", &self.r#match)?
            .insert("match_immutable_name", &self.match_immutable_name)?
            .insert("match_mutable_name", &self.match_mutable_name)?
            .insert("hide_templates_by_accounts", &self.hide_templates_by_accounts)?
            .insert("is_transferable", &self.is_transferable)?
            .insert("is_burnable", &self.is_burnable)?
            .insert("burned", &self.burned)?
            .insert("only_duplicated_templates", &self.only_duplicated_templates)?
            .insert("has_backend_tokens", &self.has_backed_tokens)?
            .insert("hide_offers", &self.hide_offers)?
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

/// Filter for `/atomicmarket/v1/assets/{id}/sales`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetSalesFilter {
    /// Only purchases by this account
    pub buyer: String,
    /// Only sales by this account
    pub seller: String,
    /// Only prices in this token symbol
    pub symbol: String,
    /// Sort direction
    pub order: SortOrder,
}

impl FilterSpec for AssetSalesFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("buyer", &self.buyer)?
            .insert("seller", &self.seller)?
            .insert("symbol", &self.symbol)?
            .insert("order", &self.order)?;
        Ok(())
    }
}

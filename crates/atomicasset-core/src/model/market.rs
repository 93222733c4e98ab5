//! Marketplace listings: direct sales, auctions and buy offers.

use super::asset::Asset;
use super::collection::Collection;
use super::common::Token;
use super::{null_as_default, string_or_number};
use crate::query::{EncodeError, FilterSpec, QueryList, QueryParams, QueryValue, SortOrder};
use crate::timestamp::Timestamp;
use serde::Deserialize;

state_code! {
    /// Lifecycle shared by sales, auctions and buy offers.
    pub enum SaleState {
        Waiting = 0,
        Listed = 1,
        Canceled = 2,
        Sold = 3,
        Invalid = 4,
    }
}

/// A direct sale listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sale {
    /// Sale id
    #[serde(rename = "sale_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Market contract account
    #[serde(deserialize_with = "null_as_default")]
    pub market_contract: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub assets_contract: String,
    /// Selling account
    #[serde(deserialize_with = "null_as_default")]
    pub seller: String,
    /// `None` until the sale completes
    pub buyer: Option<String>,
    /// Underlying trade offer
    #[serde(deserialize_with = "null_as_default")]
    pub offer_id: String,
    /// Price in the settlement token
    #[serde(deserialize_with = "null_as_default")]
    pub price: Token,
    /// Sent as a string or a number depending on the listing symbol
    #[serde(deserialize_with = "string_or_number")]
    pub listing_price: String,
    /// Symbol the price is quoted in
    #[serde(deserialize_with = "null_as_default")]
    pub listing_symbol: String,
    /// Assets included
    #[serde(deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
    /// Marketplace that listed it
    pub maker_marketplace: Option<String>,
    /// Marketplace that completed it
    pub taker_marketplace: Option<String>,
    /// Collection of the listed assets
    #[serde(deserialize_with = "null_as_default")]
    pub collection: Collection,
    /// Whether the seller is a contract account
    #[serde(deserialize_with = "null_as_default")]
    pub is_seller_contract: bool,
    /// Lifecycle state
    #[serde(deserialize_with = "null_as_default")]
    pub state: SaleState,
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

/// One bid placed on an auction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Bid {
    /// Bid sequence number
    #[serde(deserialize_with = "null_as_default")]
    pub number: u32,
    /// Bidding account
    #[serde(deserialize_with = "null_as_default")]
    pub account: String,
    /// Bid amount in the token's smallest unit
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    /// Block the bid was placed in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
    /// Transaction id
    #[serde(rename = "txid", deserialize_with = "null_as_default")]
    pub tx_id: String,
}

/// An auction listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Auction {
    /// Auction id
    #[serde(rename = "auction_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Market contract account
    #[serde(deserialize_with = "null_as_default")]
    pub market_contract: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub assets_contract: String,
    /// Selling account
    #[serde(deserialize_with = "null_as_default")]
    pub seller: String,
    /// Highest bidder, `None` while no bid was placed
    pub buyer: Option<String>,
    /// Current bid, or the starting price
    #[serde(deserialize_with = "null_as_default")]
    pub price: Token,
    /// Assets included
    #[serde(deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
    /// Bids in the order they were placed
    #[serde(deserialize_with = "null_as_default")]
    pub bids: Vec<Bid>,
    /// Marketplace that listed it
    pub maker_marketplace: Option<String>,
    /// Marketplace that completed it
    pub taker_marketplace: Option<String>,
    /// Whether the buyer claimed the assets
    #[serde(deserialize_with = "null_as_default")]
    pub claimed_by_buyer: bool,
    /// Whether the seller claimed the payment
    #[serde(deserialize_with = "null_as_default")]
    pub claimed_by_seller: bool,
    /// Collection of the auctioned assets
    #[serde(deserialize_with = "null_as_default")]
    pub collection: Collection,
    /// When bidding closes
    pub end_time: Timestamp,
    /// Whether the seller is a contract account
    #[serde(deserialize_with = "null_as_default")]
    pub is_seller_contract: bool,
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
    /// Lifecycle state
    #[serde(deserialize_with = "null_as_default")]
    pub state: SaleState,
}

/// An offer to buy specific assets.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuyOffer {
    /// Buy offer id
    #[serde(rename = "buyoffer_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Market contract account
    #[serde(deserialize_with = "null_as_default")]
    pub market_contract: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub assets_contract: String,
    /// Account asked to sell
    #[serde(deserialize_with = "null_as_default")]
    pub seller: String,
    /// Account making the offer
    #[serde(deserialize_with = "null_as_default")]
    pub buyer: String,
    /// Offered price
    #[serde(deserialize_with = "null_as_default")]
    pub price: Token,
    /// Assets included
    #[serde(deserialize_with = "null_as_default")]
    pub assets: Vec<Asset>,
    /// Marketplace that listed it
    pub maker_marketplace: Option<String>,
    /// Marketplace that completed it
    pub taker_marketplace: Option<String>,
    /// Collection of the requested assets
    #[serde(deserialize_with = "null_as_default")]
    pub collection: Collection,
    /// Lifecycle state
    #[serde(deserialize_with = "null_as_default")]
    pub state: SaleState,
    /// Memo from the buyer
    #[serde(deserialize_with = "null_as_default")]
    pub memo: String,
    /// Reason given by the seller when declining
    pub decline_memo: Option<String>,
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

/// A registered marketplace frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Marketplace {
    /// Marketplace name
    #[serde(rename = "marketplace_name", deserialize_with = "null_as_default")]
    pub name: String,
    /// Account that registered the marketplace
    #[serde(deserialize_with = "null_as_default")]
    pub creator: String,
    /// Block the record was created in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
}

sort_column! {
    /// Sort column for sale and auction listings.
    pub enum SaleSort {
        Created => "created",
        Updated => "updated",
        SaleId => "sale_id",
        Price => "price",
        TemplateMint => "template_mint",
        Name => "name",
    }
}

sort_column! {
    /// Sort column for buy offer listings.
    pub enum BuyOfferSort {
        Created => "created",
        Updated => "updated",
        BuyOfferId => "buyoffer_id",
        Price => "price",
        TemplateMint => "template_mint",
        Name => "name",
    }
}

sort_column! {
    /// Sort column for sales grouped by template.
    pub enum SaleTemplateSort {
        Price => "price",
        TemplateId => "template_id",
    }
}

/// Filter shared by the sale, auction and buy offer listings. Only the sort
/// column differs between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter<S> {
    /// Only these states
    pub state: QueryList<SaleState>,
    /// At most this many assets per listing
    pub max_assets: u32,
    /// At least this many assets per listing
    pub min_assets: u32,
    /// Include listings by contract accounts
    pub show_seller_contract: String,
    /// Exclude these seller contracts
    pub contract_blacklist: QueryList<String>,
    /// Only these seller contracts
    pub contract_whitelist: QueryList<String>,
    /// Exclude these sellers
    pub seller_blacklist: QueryList<String>,
    /// Exclude these buyers
    pub buyer_blacklist: QueryList<String>,
    /// Only listings containing this asset
    pub asset_id: u64,
    /// Only these marketplaces, as maker or taker
    pub marketplace: QueryList<String>,
    /// Only listed through these marketplaces
    pub maker_marketplace: QueryList<String>,
    /// Only completed through these marketplaces
    pub taker_marketplace: QueryList<String>,
    /// Only prices in this token symbol
    pub symbol: String,
    /// Only listings involving this account
    pub account: String,
    /// Only sales by these accounts
    pub seller: QueryList<String>,
    /// Only purchases by these accounts
    pub buyer: QueryList<String>,
    /// Lowest price, in whole tokens
    pub min_price: u64,
    /// Highest price, in whole tokens
    pub max_price: u64,
    /// Lowest mint number
    pub min_template_mint: u64,
    /// Highest mint number
    pub max_template_mint: u64,
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
    /// Only burned assets
    pub burned: bool,
    /// Only assets held by this account
    pub owner: String,
    /// Substring match on the name
    pub r#match: String,
    /// Full text search on asset names
    pub search: String,
    /// Substring match on the immutable `name` attribute
    pub match_immutable_name: String,
    /// Substring match on the mutable `name` attribute
    pub match_mutable_name: String,
    /// Only transferable assets
    pub is_transferable: bool,
    /// Only burnable assets
    pub is_burnable: bool,
    /// Only assets minted by this account
    pub minter: String,
    /// Only assets burned by this account
    pub burner: String,
    /// Only assets first received by this account
    pub initial_receiver: String,
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
    pub sort: S,
}

/// Filter for `/atomicmarket/v2/sales`.
pub type SalesFilter = ListingFilter<SaleSort>;

/// Filter for `/atomicmarket/v2/auctions`.
pub type AuctionsFilter = ListingFilter<SaleSort>;

/// Filter for `/atomicmarket/v1/buyoffers`.
pub type BuyOffersFilter = ListingFilter<BuyOfferSort>;

impl<S: QueryValue> FilterSpec for ListingFilter<S> {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("state", &self.state)?
            .insert("max_assets", &self.max_assets)?
            .insert("min_assets", &self.min_assets)?
            .insert("show_seller_contract", &self.show_seller_contract)?
            .insert("contract_blacklist", &self.contract_blacklist)?
            .insert("contract_whitelist", &self.contract_whitelist)?
            .insert("seller_blacklist", &self.seller_blacklist)?
            .insert("buyer_blacklist", &self.buyer_blacklist)?
            .insert("asset_id", &self.asset_id)?
            .insert("marketplace", &self.marketplace)?
            .insert("maker_marketplace", &self.maker_marketplace)?
            .insert("taker_marketplace", &self.taker_marketplace)?
            .insert("symbol", &self.symbol)?
            .insert("account", &self.account)?
            .insert("seller", &self.seller)?
            .insert("buyer", &self.buyer)?
            .insert("min_price", &self.min_price)?
            .insert("max_price", &self.max_price)?
            .insert("min_template_mint", &self.min_template_mint)?
            .insert("max_template_mint", &self.max_template_mint)?
            .insert("collection_name", &self.collection_name)?
            .insert("collection_blacklist", &self.collection_blacklist)?
            .insert("collection_whitelist", &self.collection_whitelist)?
            .insert("schema_name", &self.schema_name)?
            .insert("template_id", &self.template_id)?
            .insert("burned", &self.burned)?
            .insert("owner", &self.owner)?
            .insert("match", &self.r#match)?
            .insert("search", &self.search)?
            .insert("match_immutable_name", &self.match_immutable_name)?
            .insert("match_mutable_name", &self.match_mutable_name)?
            .insert("is_transferable", &self.is_transferable)?
            .insert("is_burnable", &self.is_burnable)?
            .insert("minter", &self.minter)?
            .insert("burner", &self.burner)?
            .insert("initial_receiver", &self.initial_receiver)?
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

/// Filter for `/atomicmarket/v1/sales/templates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesByTemplateFilter {
    /// Only prices in this token symbol
    pub symbol: String,
    /// Lowest price, in whole tokens
    pub min_price: u64,
    /// Highest price, in whole tokens
    pub max_price: u64,
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
    /// Only burned assets
    pub burned: bool,
    /// Only assets held by this account
    pub owner: String,
    /// Substring match on the name
    pub r#match: String,
    /// Full text search on asset names
    pub search: String,
    /// Substring match on the immutable `name` attribute
    pub match_immutable_name: String,
    /// Substring match on the mutable `name` attribute
    pub match_mutable_name: String,
    /// Only transferable assets
    pub is_transferable: bool,
    /// Only burnable assets
    pub is_burnable: bool,
    /// Only assets minted by this account
    pub minter: String,
    /// Only assets burned by this account
    pub burner: String,
    /// Only assets first received by this account
    pub initial_receiver: String,
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
    pub sort: SaleTemplateSort,
}

impl FilterSpec for SalesByTemplateFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("symbol", &self.symbol)?
            .insert("min_price", &self.min_price)?
            .insert("max_price", &self.max_price)?
            .insert("collection_name", &self.collection_name)?
            .insert("collection_blacklist", &self.collection_blacklist)?
            .insert("collection_whitelist", &self.collection_whitelist)?
            .insert("schema_name", &self.schema_name)?
            .insert("template_id", &self.template_id)?
            .insert("burned", &self.burned)?
            .insert("owner", &self.owner)?
            .insert("match", &self.r#match)?
            .insert("search", &self.search)?
            .insert("match_immutable_name", &self.match_immutable_name)?
            .insert("match_mutable_name", &self.match_mutable_name)?
            .insert("is_transferable", &self.is_transferable)?
            .insert("is_burnable", &self.is_burnable)?
            .insert("minter", &self.minter)?
            .insert("burner", &self.burner)?
            .insert("initial_receiver", &self.initial_receiver)?
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

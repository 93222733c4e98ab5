//! Aggregated market prices.

use super::collection::Collection;
use super::{null_as_default, string_or_number};
use crate::query::{EncodeError, FilterSpec, QueryList, QueryParams, SortOrder};
use crate::timestamp::Timestamp;
use serde::Deserialize;

/// A single completed trade contributing to price statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceSale {
    /// Set when sold through a direct sale
    pub sale_id: Option<String>,
    /// Set when sold through an auction
    pub auction_id: Option<String>,
    /// Set when sold through a buy offer
    pub buyoffer_id: Option<String>,
    /// Mint number of the sold asset
    #[serde(deserialize_with = "string_or_number")]
    pub template_mint: String,
    /// Price in the token's smallest unit
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
    /// When the sale settled
    pub block_time: Timestamp,
}

/// Daily sale aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceSaleDay {
    /// Median sale price
    #[serde(deserialize_with = "null_as_default")]
    pub median: String,
    /// Average sale price
    #[serde(deserialize_with = "null_as_default")]
    pub average: String,
    /// Number of sales that day
    #[serde(deserialize_with = "null_as_default")]
    pub sales: String,
    /// Settlement token symbol
    #[serde(deserialize_with = "null_as_default")]
    pub token_symbol: String,
    /// Settlement token decimals
    #[serde(deserialize_with = "null_as_default")]
    pub token_precision: u32,
    /// Settlement token contract
    #[serde(deserialize_with = "null_as_default")]
    pub token_contract: String,
    /// Start of the day
    pub time: Timestamp,
}

/// Price statistics for one template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceTemplate {
    /// Market contract account
    #[serde(deserialize_with = "null_as_default")]
    pub market_contract: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub assets_contract: String,
    /// Collection of the template
    #[serde(deserialize_with = "null_as_default")]
    pub collection_name: String,
    /// Template the prices refer to
    #[serde(deserialize_with = "null_as_default")]
    pub template_id: String,
    /// Settlement token symbol
    #[serde(deserialize_with = "null_as_default")]
    pub token_symbol: String,
    /// Settlement token decimals
    #[serde(deserialize_with = "null_as_default")]
    pub token_precision: u32,
    /// Settlement token contract
    #[serde(deserialize_with = "null_as_default")]
    pub token_contract: String,
    /// Median sale price
    #[serde(deserialize_with = "null_as_default")]
    pub median: String,
    /// Average sale price
    #[serde(deserialize_with = "null_as_default")]
    pub average: String,
    /// Lowest sale price
    #[serde(deserialize_with = "null_as_default")]
    pub min: String,
    /// Highest sale price
    #[serde(deserialize_with = "null_as_default")]
    pub max: String,
    /// Number of sales
    #[serde(deserialize_with = "null_as_default")]
    pub sales: String,
    /// Median over recent sales only
    #[serde(deserialize_with = "null_as_default")]
    pub suggested_median: String,
    /// Average over recent sales only
    #[serde(deserialize_with = "null_as_default")]
    pub suggested_average: String,
}

/// Price statistics for an asset held in an inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceAsset {
    /// Settlement token symbol
    #[serde(deserialize_with = "null_as_default")]
    pub token_symbol: String,
    /// Settlement token decimals
    #[serde(deserialize_with = "null_as_default")]
    pub token_precision: u32,
    /// Settlement token contract
    #[serde(deserialize_with = "null_as_default")]
    pub token_contract: String,
    /// Median sale price
    #[serde(deserialize_with = "null_as_default")]
    pub median: String,
    /// Average sale price
    #[serde(deserialize_with = "null_as_default")]
    pub average: String,
    /// Lowest sale price
    #[serde(deserialize_with = "null_as_default")]
    pub min: String,
    /// Highest sale price
    #[serde(deserialize_with = "null_as_default")]
    pub max: String,
    /// Median over recent sales only
    #[serde(deserialize_with = "null_as_default")]
    pub suggested_median: String,
    /// Average over recent sales only
    #[serde(deserialize_with = "null_as_default")]
    pub suggested_average: String,
}

/// Inventory value of one collection held by an account.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PriceInventory {
    /// Collection the assets belong to
    #[serde(deserialize_with = "null_as_default")]
    pub collection: Collection,
    /// Summed prices per token
    #[serde(deserialize_with = "null_as_default")]
    pub prices: Vec<PriceAsset>,
}

/// Raw `data` member of the inventory endpoint, which nests the list one
/// level deeper than every other endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PriceInventoryData {
    /// Inventory grouped by collection
    #[serde(deserialize_with = "null_as_default")]
    pub collections: Vec<PriceInventory>,
}

/// Filter for `/atomicmarket/v1/prices/sales` and `/prices/sales/days`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceSalesFilter {
    /// Only this collection
    pub collection_name: String,
    /// Only this schema
    pub schema_name: String,
    /// Only this template
    pub template_id: u64,
    /// Only burned assets
    pub burned: bool,
    /// Only prices in this token symbol
    pub symbol: String,
}

impl FilterSpec for PriceSalesFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("collection_name", &self.collection_name)?
            .insert("schema_name", &self.schema_name)?
            .insert("template_id", &self.template_id)?
            .insert("burned", &self.burned)?
            .insert("symbol", &self.symbol)?;
        Ok(())
    }
}

/// Filter for `/atomicmarket/v1/prices/templates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTemplatesFilter {
    /// Only this collection
    pub collection_name: String,
    /// Only this schema
    pub schema_name: String,
    /// Only this template
    pub template_id: u64,
    /// Only burned assets
    pub burned: bool,
    /// Only prices in this token symbol
    pub symbol: String,
    /// Page number, starting at 1
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Sort direction
    pub order: SortOrder,
}

impl FilterSpec for PriceTemplatesFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("collection_name", &self.collection_name)?
            .insert("schema_name", &self.schema_name)?
            .insert("template_id", &self.template_id)?
            .insert("burned", &self.burned)?
            .insert("symbol", &self.symbol)?
            .insert("page", &self.page)?
            .insert("limit", &self.limit)?
            .insert("order", &self.order)?;
        Ok(())
    }
}

/// Filter for `/atomicmarket/v1/prices/assets` and the inventory endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceAssetsFilter {
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
    /// Only assets held by this account
    pub owner: String,
    /// Full text search on asset names
    pub search: String,
    /// Substring match on the name
    pub r#match: String,
    /// Substring match on the immutable `name` attribute
    pub match_immutable_name: String,
    /// Substring match on the mutable `name` attribute
    pub match_mutable_name: String,
    /// Only transferable assets
    pub is_transferable: bool,
    /// Only burnable assets
    pub is_burnable: bool,
    /// Only burned assets
    pub burned: bool,
    /// Only assets minted by this account
    pub minter: String,
    /// Only assets burned by this account
    pub burner: String,
    /// Only assets first received by this account
    pub initial_receiver: String,
    /// Hide assets locked in open offers
    pub hide_offers: bool,
    /// Only these ids
    pub ids: QueryList<String>,
    /// Lowest id to return
    pub lower_bound: String,
    /// Highest id to return
    pub upper_bound: String,
}

impl FilterSpec for PriceAssetsFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("collection_name", &self.collection_name)?
            .insert("collection_blacklist", &self.collection_blacklist)?
            .insert("collection_whitelist", &self.collection_whitelist)?
            .insert("schema_name", &self.schema_name)?
            .insert("template_id", &self.template_id)?
            .insert("owner", &self.owner)?
            .insert("search", &self.search)?
            .insert("match", &self.r#match)?
            .insert("match_immutable_name", &self.match_immutable_name)?
            .insert("match_mutable_name", &self.match_mutable_name)?
            .insert("is_transferable", &self.is_transferable)?
            .insert("is_burnable", &self.is_burnable)?
            .insert("burned", &self.burned)?
            .insert("minter", &self.minter)?
            .insert("burner", &self.burner)?
            .insert("initial_receiver", &self.initial_receiver)?
            .insert("hide_offers", &self.hide_offers)?
            .insert("ids", &self.ids)?
            .insert("lower_bound", &self.lower_bound)?
            .insert("upper_bound", &self.upper_bound)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::ApiResponse;

    #[test]
    fn price_filters_encoding() {
        let sales = PriceSalesFilter {
            collection_name: "kogsofficial".into(),
            template_id: 1337,
            burned: true,
            ..Default::default()
        };
        assert_eq!(
            sales.to_query().unwrap().to_query_string(),
            "burned=true&collection_name=kogsofficial&template_id=1337"
        );

        let templates = PriceTemplatesFilter {
            symbol: "WAX".into(),
            page: 2,
            order: SortOrder::Ascending,
            ..Default::default()
        };
        assert_eq!(
            templates.to_query().unwrap().to_query_string(),
            "order=asc&page=2&symbol=WAX"
        );

        let assets = PriceAssetsFilter {
            owner: "alice".into(),
            ids: QueryList::from(vec!["1".into(), "2".into()]),
            ..Default::default()
        };
        assert_eq!(
            assets.to_query().unwrap().to_query_string(),
            "ids=1%2C2&owner=alice"
        );
        assert!(PriceAssetsFilter::default().to_query().unwrap().is_empty());
    }

    #[test]
    fn decode_price_sale_numeric_mint() {
        let sale: PriceSale = serde_json::from_str(
            r#"{
                "sale_id": "120",
                "auction_id": null,
                "buyoffer_id": null,
                "template_mint": 304,
                "price": "400000000",
                "token_symbol": "WAX",
                "token_precision": 8,
                "token_contract": "eosio.token",
                "block_time": "1670587200000"
            }"#,
        )
        .unwrap();

        assert_eq!(sale.template_mint, "304");
        assert_eq!(sale.sale_id.as_deref(), Some("120"));
        assert!(sale.auction_id.is_none());
    }

    #[test]
    fn decode_sale_day() {
        let day: PriceSaleDay = serde_json::from_str(
            r#"{"median": "10", "average": "12", "sales": "2", "token_symbol": "WAX",
                "token_precision": 8, "token_contract": "eosio.token", "time": 1670587200000}"#,
        )
        .unwrap();
        assert_eq!(day.sales, "2");
        assert_eq!(day.time.as_epoch_millis(), 1_670_587_200_000);
    }

    #[test]
    fn inventory_unwraps_collections() {
        let raw = r#"{
            "success": true,
            "data": {
                "collections": [{
                    "collection": {"collection_name": "crptomonkeys", "market_fee": 0.07},
                    "prices": [{
                        "token_symbol": "WAX",
                        "token_precision": 8,
                        "token_contract": "eosio.token",
                        "median": "11160000000",
                        "average": "12069398817",
                        "min": "5390000000",
                        "max": "60499000000",
                        "suggested_median": "11790000000",
                        "suggested_average": "11747200000"
                    }]
                }]
            },
            "query_time": 1434834852000
        }"#;

        let resp: ApiResponse<PriceInventoryData> = serde_json::from_str(raw).unwrap();
        let resp = resp.map(|data| data.collections);

        assert!(resp.success);
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].collection.collection_name, "crptomonkeys");
        assert_eq!(resp.data[0].prices[0].median, "11160000000");
    }
}

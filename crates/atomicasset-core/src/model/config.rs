//! Contract configuration for the three API namespaces.

use super::common::PriceToken;
use super::schema::SchemaFormat;
use super::null_as_default;
use serde::Deserialize;

/// `/atomicassets/v1/config`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub contract: String,
    /// Attribute format shared by all collections
    #[serde(deserialize_with = "null_as_default")]
    pub collection_format: Vec<SchemaFormat>,
    /// Tokens accepted for payment
    #[serde(deserialize_with = "null_as_default")]
    pub supported_tokens: Vec<PriceToken>,
    /// Contract version
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

/// `/atomicmarket/v1/config`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub atomicassets_contract: String,
    /// Market contract account
    #[serde(deserialize_with = "null_as_default")]
    pub atomicmarket_contract: String,
    /// Price oracle contract account
    #[serde(deserialize_with = "null_as_default")]
    pub delphioracle_contract: String,
    /// Fee paid to the listing marketplace, as a fraction
    #[serde(deserialize_with = "null_as_default")]
    pub maker_market_fee: f64,
    /// Fee paid to the buying marketplace, as a fraction
    #[serde(deserialize_with = "null_as_default")]
    pub taker_market_fee: f64,
    /// Seconds
    #[serde(deserialize_with = "null_as_default")]
    pub minimum_auction_duration: i64,
    /// Seconds
    #[serde(deserialize_with = "null_as_default")]
    pub maximum_auction_duration: i64,
    /// Minimum raise over the previous bid, as a fraction
    #[serde(deserialize_with = "null_as_default")]
    pub minimum_bid_increase: f64,
    /// Seconds
    #[serde(deserialize_with = "null_as_default")]
    pub auction_reset_duration: i64,
    /// Tokens accepted for payment
    #[serde(deserialize_with = "null_as_default")]
    pub supported_tokens: Vec<PriceToken>,
    /// Listing and settlement symbol pairs priced through the oracle
    #[serde(deserialize_with = "null_as_default")]
    pub supported_pairs: Vec<TokenPair>,
    /// Contract version
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

/// A listing/settlement pair priced through the delphi oracle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TokenPair {
    /// Symbol the price is quoted in
    #[serde(deserialize_with = "null_as_default")]
    pub listing_symbol: String,
    /// Symbol the buyer pays in
    #[serde(deserialize_with = "null_as_default")]
    pub settlement_symbol: String,
    /// Oracle pair used for conversion
    #[serde(deserialize_with = "null_as_default")]
    pub delphi_pair_name: String,
    /// Whether the oracle rate is inverted
    #[serde(deserialize_with = "null_as_default")]
    pub invert_delphi_pair: bool,
    /// Oracle pair details
    pub data: serde_json::Value,
}

/// `/atomictools/v1/config`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Tools contract account
    #[serde(deserialize_with = "null_as_default")]
    pub atomictools_contract: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub atomicassets_contract: String,
    /// Contract version
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_assets_config() {
        let config: AssetsConfig = serde_json::from_str(
            r#"{
                "contract": "atomicassets",
                "version": "1.3.0",
                "collection_format": [
                    {"name": "name", "type": "string"},
                    {"name": "img", "type": "ipfs"}
                ],
                "supported_tokens": [
                    {"token_contract": "eosio.token", "token_symbol": "WAX", "token_precision": 8}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.contract, "atomicassets");
        assert_eq!(config.collection_format.len(), 2);
        assert_eq!(config.collection_format[1].kind, "ipfs");
        assert_eq!(config.supported_tokens[0].symbol, "WAX");
        assert_eq!(config.supported_tokens[0].precision, 8);
    }

    #[test]
    fn decode_market_config_pairs() {
        let config: MarketConfig = serde_json::from_str(
            r#"{
                "atomicassets_contract": "atomicassets",
                "atomicmarket_contract": "atomicmarket",
                "delphioracle_contract": "delphioracle",
                "maker_market_fee": 0.01,
                "taker_market_fee": 0.01,
                "minimum_auction_duration": 120,
                "maximum_auction_duration": 2592000,
                "minimum_bid_increase": 0.1,
                "auction_reset_duration": 120,
                "supported_pairs": [{
                    "listing_symbol": "USD",
                    "settlement_symbol": "WAX",
                    "delphi_pair_name": "waxpusd",
                    "invert_delphi_pair": false,
                    "data": {"median": 595, "contract": "delphioracle"}
                }],
                "version": "1.3.21"
            }"#,
        )
        .unwrap();

        assert!((config.maker_market_fee - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.maximum_auction_duration, 2_592_000);
        assert_eq!(config.supported_pairs[0].delphi_pair_name, "waxpusd");
        assert_eq!(config.supported_pairs[0].data["median"], 595);
        assert!(config.supported_tokens.is_empty());
    }
}

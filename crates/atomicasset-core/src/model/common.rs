//! Types shared across resource groups.

use super::null_as_default;
use crate::query::{EncodeError, FilterSpec, QueryList, QueryParams, SortOrder};
use crate::timestamp::Timestamp;
use serde::Deserialize;

/// An amount of a fungible token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Token {
    /// Token contract account
    #[serde(rename = "token_contract", deserialize_with = "null_as_default")]
    pub contract: String,
    /// Token symbol, e.g. `WAX`
    #[serde(rename = "token_symbol", deserialize_with = "null_as_default")]
    pub symbol: String,
    /// Decimal places of `amount`
    #[serde(rename = "token_precision", deserialize_with = "null_as_default")]
    pub precision: u32,
    /// Raw integer amount as decimal text
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
}

/// A token description without an amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceToken {
    /// Token contract account
    #[serde(rename = "token_contract", deserialize_with = "null_as_default")]
    pub contract: String,
    /// Token symbol
    #[serde(rename = "token_symbol", deserialize_with = "null_as_default")]
    pub symbol: String,
    /// Decimal places
    #[serde(rename = "token_precision", deserialize_with = "null_as_default")]
    pub precision: u32,
}

/// One action recorded against a resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log id
    #[serde(rename = "log_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Transaction id
    #[serde(rename = "txid", deserialize_with = "null_as_default")]
    pub tx_id: String,
    /// Action name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Action data
    pub data: serde_json::Value,
    /// Block the record was created in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
}

/// Filter for every `.../logs` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Page number, starting at 1
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Sort direction
    pub order: SortOrder,
    /// Only these actions
    pub action_whitelist: QueryList<String>,
    /// Exclude these actions
    pub action_blacklist: QueryList<String>,
}

impl FilterSpec for LogFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("page", &self.page)?
            .insert("limit", &self.limit)?
            .insert("order", &self.order)?
            .insert("action_whitelist", &self.action_whitelist)?
            .insert("action_blacklist", &self.action_blacklist)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(filter: &LogFilter) -> String {
        filter.to_query().unwrap().to_query_string()
    }

    #[test]
    fn log_filter_encoding() {
        let cases = [
            (LogFilter::default(), ""),
            (
                LogFilter {
                    page: 134,
                    ..Default::default()
                },
                "page=134",
            ),
            (
                LogFilter {
                    limit: 50,
                    ..Default::default()
                },
                "limit=50",
            ),
            (
                LogFilter {
                    order: SortOrder::Descending,
                    ..Default::default()
                },
                "order=desc",
            ),
            (
                LogFilter {
                    action_whitelist: QueryList::from(vec!["one".to_string(), "two".to_string()]),
                    ..Default::default()
                },
                "action_whitelist=one%2Ctwo",
            ),
            (
                LogFilter {
                    page: 2,
                    limit: 30,
                    order: SortOrder::Ascending,
                    ..Default::default()
                },
                "limit=30&order=asc&page=2",
            ),
        ];

        for (filter, expected) in cases {
            assert_eq!(encoded(&filter), expected);
        }
    }

    #[test]
    fn log_decodes_string_timestamp_and_data() {
        let log: Log = serde_json::from_str(
            r#"{
                "log_id": "1",
                "txid": "abc",
                "name": "logmint",
                "data": {"minter": "alice"},
                "created_at_block": "100",
                "created_at_time": "1646996870500"
            }"#,
        )
        .unwrap();

        assert_eq!(log.name, "logmint");
        assert_eq!(log.data["minter"], "alice");
        assert_eq!(log.created_at_time.as_epoch_millis(), 1_646_996_870_500);
    }
}

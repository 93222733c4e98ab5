//! Collections and their statistics.

use super::null_as_default;
use crate::query::{EncodeError, FilterSpec, QueryList, QueryParams, SortOrder};
use crate::timestamp::Timestamp;
use serde::Deserialize;

/// A collection as embedded in most other records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Collection {
    /// Unique collection name
    #[serde(deserialize_with = "null_as_default")]
    pub collection_name: String,
    /// Contract account that manages the record
    #[serde(deserialize_with = "null_as_default")]
    pub contract: String,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Only sent by some endpoints
    #[serde(rename = "img")]
    pub image: Option<String>,
    /// Account that created the collection
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    /// Whether notify accounts may be added
    #[serde(deserialize_with = "null_as_default")]
    pub allow_notify: bool,
    /// Accounts allowed to mint and edit
    #[serde(deserialize_with = "null_as_default")]
    pub authorized_accounts: Vec<String>,
    /// Accounts notified of asset actions
    #[serde(deserialize_with = "null_as_default")]
    pub notify_accounts: Vec<String>,
    /// Collection fee charged on market sales, as a fraction
    #[serde(deserialize_with = "null_as_default")]
    pub market_fee: f64,
    /// Free-form attributes
    pub data: serde_json::Value,
    /// Block the record was created in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
}

/// Counters returned by `/collections/{name}/stats`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CollectionStats {
    /// Asset count
    #[serde(deserialize_with = "null_as_default")]
    pub assets: String,
    /// Burned asset count
    #[serde(deserialize_with = "null_as_default")]
    pub burned: String,
    /// Burn counts per template
    #[serde(deserialize_with = "null_as_default")]
    pub burned_by_template: Vec<serde_json::Value>,
    /// Burn counts per schema
    #[serde(deserialize_with = "null_as_default")]
    pub burned_by_schema: Vec<serde_json::Value>,
    /// Template count
    #[serde(deserialize_with = "null_as_default")]
    pub templates: String,
    /// Schema count
    #[serde(deserialize_with = "null_as_default")]
    pub schemas: String,
}

sort_column! {
    /// Sort column for collection listings.
    pub enum CollectionSort {
        Created => "created",
        CollectionName => "collection_name",
    }
}

/// Filter for `/atomicassets/v1/collections`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionsFilter {
    /// Only collections by this author
    pub author: String,
    /// Substring match on the name
    pub r#match: String,
    /// Only where this account is authorized
    pub authorized_account: String,
    /// Only where this account is notified
    pub notify_account: String,
    /// Exclude these collections
    pub collection_blacklist: QueryList<String>,
    /// Only these collections
    pub collection_whitelist: QueryList<String>,
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
    /// Sort column
    pub sort: CollectionSort,
}

impl FilterSpec for CollectionsFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("author", &self.author)?
            .insert("match", &self.r#match)?
            .insert("authorized_account", &self.authorized_account)?
            .insert("notify_account", &self.notify_account)?
            .insert("collection_blacklist", &self.collection_blacklist)?
            .insert("collection_whitelist", &self.collection_whitelist)?
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_filter_encoding() {
        let cases = [
            (CollectionsFilter::default(), ""),
            (
                CollectionsFilter {
                    author: "alice".into(),
                    ..Default::default()
                },
                "author=alice",
            ),
            (
                CollectionsFilter {
                    collection_whitelist: QueryList::from(vec!["a".into(), "b".into()]),
                    ..Default::default()
                },
                "collection_whitelist=a%2Cb",
            ),
            (
                CollectionsFilter {
                    sort: CollectionSort::CollectionName,
                    order: SortOrder::Ascending,
                    ..Default::default()
                },
                "order=asc&sort=collection_name",
            ),
            (
                CollectionsFilter {
                    before: 1_000,
                    after: 500,
                    page: 3,
                    limit: 100,
                    ..Default::default()
                },
                "after=500&before=1000&limit=100&page=3",
            ),
        ];

        for (filter, expected) in cases {
            assert_eq!(filter.to_query().unwrap().to_query_string(), expected);
        }
    }

    #[test]
    fn decode_collection() {
        let collection: Collection = serde_json::from_str(
            r#"{
                "contract": "atomicassets",
                "collection_name": "alien.worlds",
                "name": "Alien Worlds",
                "img": "QmYZ",
                "author": "federation",
                "allow_notify": true,
                "authorized_accounts": ["federation", "m.federation"],
                "notify_accounts": [],
                "market_fee": 0.06,
                "data": {"url": "https://alienworlds.io"},
                "created_at_block": "72183024",
                "created_at_time": "1597142262000"
            }"#,
        )
        .unwrap();

        assert_eq!(collection.collection_name, "alien.worlds");
        assert_eq!(collection.image.as_deref(), Some("QmYZ"));
        assert_eq!(collection.authorized_accounts.len(), 2);
        assert!(collection.allow_notify);
        assert_eq!(collection.data["url"], "https://alienworlds.io");
        assert_eq!(collection.created_at_time.as_epoch_millis(), 1_597_142_262_000);
    }

    #[test]
    fn decode_stats() {
        let stats: CollectionStats = serde_json::from_str(
            r#"{"assets": "1204", "burned": "4", "templates": "20", "schemas": "2"}"#,
        )
        .unwrap();
        assert_eq!(stats.assets, "1204");
        assert!(stats.burned_by_template.is_empty());
    }
}

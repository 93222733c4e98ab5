//! Templates: immutable blueprints assets are minted from.

use super::collection::Collection;
use super::schema::InlineSchema;
use super::null_as_default;
use crate::query::{EncodeError, FilterSpec, QueryList, QueryParams, SortOrder};
use crate::timestamp::Timestamp;
use serde::Deserialize;

/// A template assets are minted from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Template {
    /// Template id
    #[serde(rename = "template_id", deserialize_with = "null_as_default")]
    pub id: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub contract: String,
    /// `"0"` means unlimited
    #[serde(deserialize_with = "null_as_default")]
    pub max_supply: String,
    /// Assets minted so far
    #[serde(deserialize_with = "null_as_default")]
    pub issued_supply: String,
    /// Whether minted assets may change owner
    #[serde(deserialize_with = "null_as_default")]
    pub is_transferable: bool,
    /// Whether minted assets may be burned
    #[serde(deserialize_with = "null_as_default")]
    pub is_burnable: bool,
    /// Attributes fixed at mint
    pub immutable_data: serde_json::Value,
    /// Owning collection
    #[serde(deserialize_with = "null_as_default")]
    pub collection: Collection,
    /// Schema the record follows
    #[serde(deserialize_with = "null_as_default")]
    pub schema: InlineSchema,
    /// Block the record was created in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
}

/// Counts for one template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateStats {
    /// Asset count
    #[serde(deserialize_with = "null_as_default")]
    pub assets: String,
    /// Burned asset count
    #[serde(deserialize_with = "null_as_default")]
    pub burned: String,
    /// Template count
    #[serde(deserialize_with = "null_as_default")]
    pub templates: String,
    /// Schema count
    #[serde(deserialize_with = "null_as_default")]
    pub schemas: String,
}

sort_column! {
    /// Sort column for templates.
    pub enum TemplateSort {
        Created => "created",
        Name => "name",
    }
}

/// Filter for `/atomicassets/v1/templates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplatesFilter {
    /// Only this schema
    pub schema_name: String,
    /// Only this collection
    pub collection_name: String,
    /// Exclude these collections
    pub collection_blacklist: QueryList<String>,
    /// Only these collections
    pub collection_whitelist: QueryList<String>,
    /// Exact issued supply
    pub issued_supply: u64,
    /// Lowest issued supply
    pub min_issued_supply: u64,
    /// Highest issued supply
    pub max_issued_supply: u64,
    /// Exact max supply
    pub max_supply: u64,
    /// Only templates with minted assets
    pub has_assets: bool,
    /// Only burnable assets
    pub is_burnable: bool,
    /// Only transferable assets
    pub is_transferable: bool,
    /// Only where this account is authorized
    pub authorized_account: String,
    /// Substring match on the name
    pub r#match: String,
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
    pub sort: TemplateSort,
}

impl FilterSpec for TemplatesFilter {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        query
            .insert("schema_name", &self.schema_name)?
            .insert("collection_name", &self.collection_name)?
            .insert("collection_blacklist", &self.collection_blacklist)?
            .insert("collection_whitelist", &self.collection_whitelist)?
            .insert("issued_supply", &self.issued_supply)?
            .insert("min_issued_supply", &self.min_issued_supply)?
            .insert("max_issued_supply", &self.max_issued_supply)?
            .insert("max_supply", &self.max_supply)?
            .insert("has_assets", &self.has_assets)?
            .insert("is_burnable", &self.is_burnable)?
            .insert("is_transferable", &self.is_transferable)?
            .insert("authorized_account", &self.authorized_account)?
            .insert("match", &self.r#match)?
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
    fn templates_filter_encoding() {
        let cases = [
            (TemplatesFilter::default(), ""),
            (
                TemplatesFilter {
                    collection_name: "alien.worlds".into(),
                    schema_name: "tool.worlds".into(),
                    ..Default::default()
                },
                "collection_name=alien.worlds&schema_name=tool.worlds",
            ),
            (
                TemplatesFilter {
                    ids: QueryList::from([19553, 19554]),
                    ..Default::default()
                },
                "ids=19553%2C19554",
            ),
            (
                TemplatesFilter {
                    has_assets: true,
                    is_burnable: true,
                    sort: TemplateSort::Name,
                    ..Default::default()
                },
                "has_assets=true&is_burnable=true&sort=name",
            ),
            (
                TemplatesFilter {
                    min_issued_supply: 10,
                    max_issued_supply: 20,
                    ..Default::default()
                },
                "max_issued_supply=20&min_issued_supply=10",
            ),
        ];

        for (filter, expected) in cases {
            assert_eq!(filter.to_query().unwrap().to_query_string(), expected);
        }
    }

    #[test]
    fn decode_template() {
        let template: Template = serde_json::from_str(
            r#"{
                "contract": "atomicassets",
                "template_id": "19553",
                "is_transferable": true,
                "is_burnable": true,
                "issued_supply": "5020",
                "max_supply": "0",
                "collection": {"collection_name": "alien.worlds"},
                "schema": {"schema_name": "tool.worlds", "format": []},
                "immutable_data": {"name": "Standard Shovel", "rarity": "Abundant"},
                "created_at_time": "1597236405500",
                "created_at_block": "72370229"
            }"#,
        )
        .unwrap();

        assert_eq!(template.id, "19553");
        assert_eq!(template.max_supply, "0");
        assert_eq!(template.schema.name, "tool.worlds");
        assert_eq!(template.immutable_data["rarity"], "Abundant");
        assert_eq!(template.created_at_time.as_epoch_millis(), 1_597_236_405_500);
    }
}

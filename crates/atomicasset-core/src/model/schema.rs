//! Schemas describe the attribute layout of a collection's assets.

use super::collection::Collection;
use super::null_as_default;
use crate::query::{EncodeError, FilterSpec, QueryList, QueryParams, SortOrder};
use crate::timestamp::Timestamp;
use serde::Deserialize;

/// One attribute definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SchemaFormat {
    /// Attribute name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Attribute type, e.g. `string` or `ipfs`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// A schema with its owning collection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Schema name
    #[serde(rename = "schema_name", deserialize_with = "null_as_default")]
    pub name: String,
    /// Assets contract account
    #[serde(deserialize_with = "null_as_default")]
    pub contract: String,
    /// Attribute layout
    #[serde(deserialize_with = "null_as_default")]
    pub format: Vec<SchemaFormat>,
    /// Collection the schema belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub collection: Collection,
    /// Block the record was created in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
}

/// Schema as embedded in assets and templates, without its collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InlineSchema {
    /// Schema name
    #[serde(rename = "schema_name", deserialize_with = "null_as_default")]
    pub name: String,
    /// Attribute layout
    #[serde(deserialize_with = "null_as_default")]
    pub format: Vec<SchemaFormat>,
    /// Block the record was created in
    #[serde(deserialize_with = "null_as_default")]
    pub created_at_block: String,
    /// When the record was created
    pub created_at_time: Timestamp,
}

sort_column! {
    /// Sort column for schemas.
    pub enum SchemaSort {
        Created => "created",
        Assets => "assets",
        SchemaName => "schema_name",
    }
}

/// Filter for `/atomicassets/v1/schemas`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemasFilter {
    /// Only schemas created by this account
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
    pub sort: SchemaSort,
}

impl FilterSpec for SchemasFilter {
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

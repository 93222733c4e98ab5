//! Typed payloads and filters for every resource group of the API.
//!
//! Records default every missing field, mirroring how the upstream service
//! omits fields freely between endpoints. Fields where `null` carries meaning
//! (burned, unclaimed, unsold) are `Option`s. Any other field sent as `null`
//! decodes to its default. Schema-less attribute bags are kept as raw
//! [`serde_json::Value`] trees.

/// Declare a sort column enum whose unset variant is omitted from queries.
macro_rules! sort_column {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            /// Let the server pick its default column.
            #[default]
            Default,
            $($(#[$vmeta])* #[doc = concat!("Sort by `", $value, "`.")] $variant,)+
        }

        impl $name {
            /// Query representation; empty for the default column.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    Self::Default => "",
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl crate::query::QueryValue for $name {
            fn to_param(&self) -> Result<String, crate::query::EncodeError> {
                Ok(self.as_str().to_string())
            }

            fn is_zero(&self) -> bool {
                *self == Self::Default
            }
        }
    };
}

/// Declare an integer-coded state enum.
///
/// States decode from a JSON integer or numeric string and render as their
/// decimal code in queries. Codes the client does not know are kept as
/// `Other` rather than failing the whole response.
macro_rules! state_code {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $code:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* #[doc = concat!("Code ", stringify!($code), ".")] $variant,)+
            /// A code this client does not know about
            Other(i64),
        }

        impl $name {
            /// Numeric code used by the API.
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Other(code) => code,
                }
            }

            /// Map a numeric code to a state.
            #[must_use]
            pub const fn from_code(code: i64) -> Self {
                match code {
                    $($code => Self::$variant,)+
                    other => Self::Other(other),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from_code(0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl crate::query::QueryValue for $name {
            fn to_param(&self) -> Result<String, crate::query::EncodeError> {
                Ok(self.to_string())
            }

            fn is_zero(&self) -> bool {
                false
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                crate::model::state_code_from(deserializer).map(Self::from_code)
            }
        }
    };
}

pub mod asset;
pub mod collection;
pub mod common;
pub mod config;
pub mod health;
pub mod link;
pub mod market;
pub mod offer;
pub mod price;
pub mod schema;
pub mod template;

pub use asset::{Asset, AssetPrice, AssetSale, AssetSalesFilter, AssetSort, AssetsFilter};
pub use collection::{Collection, CollectionSort, CollectionStats, CollectionsFilter};
pub use common::{Log, LogFilter, PriceToken, Token};
pub use config::{AssetsConfig, MarketConfig, TokenPair, ToolsConfig};
pub use health::{ChainHealth, HealthData, PostgresHealth, RedisHealth};
pub use link::{Link, LinkState, LinksFilter};
pub use market::{
    Auction, AuctionsFilter, Bid, BuyOffer, BuyOfferSort, BuyOffersFilter, ListingFilter,
    Marketplace, Sale, SaleSort, SaleState, SaleTemplateSort, SalesByTemplateFilter, SalesFilter,
};
pub use offer::{Offer, OfferSort, OfferState, OffersFilter, Transfer, TransfersFilter};
pub use price::{
    PriceAsset, PriceAssetsFilter, PriceInventory, PriceInventoryData, PriceSale, PriceSaleDay,
    PriceSalesFilter, PriceTemplate, PriceTemplatesFilter,
};
pub use schema::{InlineSchema, Schema, SchemaFormat, SchemaSort, SchemasFilter};
pub use template::{Template, TemplateSort, TemplateStats, TemplatesFilter};

/// Deserialize a field, mapping an explicit `null` to the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::de::Deserialize;

    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize a value the service sends either as a JSON string or as a JSON
/// number (e.g. `listing_price`), keeping its decimal text.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Deserialize, Error};
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a string or a number, got {other}"
        ))),
    }
}

/// Decode a state code sent either as an integer or as a numeric string.
pub(crate) fn state_code_from<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Deserialize, Error};
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("state code {n} is not an integer"))),
        Value::String(s) => s
            .parse()
            .map_err(|_| D::Error::custom(format!("state code '{s}' is not an integer"))),
        other => Err(D::Error::custom(format!(
            "expected an integer state code, got {other}"
        ))),
    }
}

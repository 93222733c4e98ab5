//! Endpoint methods on [`Client`](crate::Client), grouped by API namespace.
//!
//! Each method supplies a path, an optional filter and the payload type to the
//! shared pipeline and returns its [`ApiResponse`](atomicasset_core::ApiResponse)
//! unchanged.

mod atomicassets;
mod atomicmarket;
mod atomictools;
mod service;

use atomicasset_core::encoding::encode_path_segment;

const ASSETS_V1: &str = "/atomicassets/v1";
const MARKET_V1: &str = "/atomicmarket/v1";
const MARKET_V2: &str = "/atomicmarket/v2";
const TOOLS_V1: &str = "/atomictools/v1";

/// `{prefix}/{resource}/{id}` followed by `suffix`, with `id` escaped.
fn item_path(prefix: &str, resource: &str, id: &str, suffix: &str) -> String {
    format!("{prefix}/{resource}/{}{suffix}", encode_path_segment(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_escapes_id() {
        assert_eq!(
            item_path(ASSETS_V1, "assets", "1099", "/logs"),
            "/atomicassets/v1/assets/1099/logs"
        );
        assert_eq!(
            item_path(ASSETS_V1, "collections", "a/b?c", ""),
            "/atomicassets/v1/collections/a%2Fb%3Fc"
        );
    }
}

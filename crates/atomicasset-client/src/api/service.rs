//! Service-level endpoints: health and per-namespace configuration.

use super::{ASSETS_V1, MARKET_V1, TOOLS_V1};
use crate::client::Client;
use crate::error::ClientError;
use atomicasset_core::model::{AssetsConfig, HealthData, MarketConfig, ToolsConfig};
use atomicasset_core::ApiResponse;

impl Client {
    /// `GET /health`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn health(&self) -> Result<ApiResponse<HealthData>, ClientError> {
        self.get::<(), _>("/health", None).await
    }

    /// `GET /atomicassets/v1/config`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn assets_config(&self) -> Result<ApiResponse<AssetsConfig>, ClientError> {
        self.get::<(), _>(&format!("{ASSETS_V1}/config"), None).await
    }

    /// `GET /atomicmarket/v1/config`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn market_config(&self) -> Result<ApiResponse<MarketConfig>, ClientError> {
        self.get::<(), _>(&format!("{MARKET_V1}/config"), None).await
    }

    /// `GET /atomictools/v1/config`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn tools_config(&self) -> Result<ApiResponse<ToolsConfig>, ClientError> {
        self.get::<(), _>(&format!("{TOOLS_V1}/config"), None).await
    }
}

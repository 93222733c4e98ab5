//! `/atomictools/v1` endpoints.

use super::TOOLS_V1;
use crate::client::Client;
use crate::error::ClientError;
use atomicasset_core::model::{Link, LinksFilter, Log, LogFilter};
use atomicasset_core::ApiResponse;

impl Client {
    /// `GET /atomictools/v1/links`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn links(&self, filter: &LinksFilter) -> Result<ApiResponse<Vec<Link>>, ClientError> {
        self.get(&format!("{TOOLS_V1}/links"), Some(filter)).await
    }

    /// `GET /atomictools/v1/links/{link_id}`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn link(&self, link_id: u64) -> Result<ApiResponse<Link>, ClientError> {
        self.get::<(), _>(&format!("{TOOLS_V1}/links/{link_id}"), None)
            .await
    }

    /// `GET /atomictools/v1/links/{link_id}/logs`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn link_logs(
        &self,
        link_id: u64,
        filter: &LogFilter,
    ) -> Result<ApiResponse<Vec<Log>>, ClientError> {
        self.get(&format!("{TOOLS_V1}/links/{link_id}/logs"), Some(filter))
            .await
    }
}

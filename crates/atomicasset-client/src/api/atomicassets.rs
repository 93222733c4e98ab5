//! `/atomicassets/v1` endpoints.

use super::{item_path, ASSETS_V1};
use crate::client::Client;
use crate::error::ClientError;
use atomicasset_core::encoding::encode_path_segment;
use atomicasset_core::model::{
    Asset, AssetsFilter, Collection, CollectionStats, CollectionsFilter, Log, LogFilter, Offer,
    OffersFilter, Schema, SchemasFilter, Template, TemplateStats, TemplatesFilter, Transfer,
    TransfersFilter,
};
use atomicasset_core::ApiResponse;

impl Client {
    /// `GET /atomicassets/v1/assets`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn assets(
        &self,
        filter: &AssetsFilter,
    ) -> Result<ApiResponse<Vec<Asset>>, ClientError> {
        self.get(&format!("{ASSETS_V1}/assets"), Some(filter)).await
    }

    /// `GET /atomicassets/v1/assets/{asset_id}`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn asset(&self, asset_id: &str) -> Result<ApiResponse<Asset>, ClientError> {
        self.get::<(), _>(&item_path(ASSETS_V1, "assets", asset_id, ""), None)
            .await
    }

    /// `GET /atomicassets/v1/assets/{asset_id}/logs`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn asset_logs(
        &self,
        asset_id: &str,
        filter: &LogFilter,
    ) -> Result<ApiResponse<Vec<Log>>, ClientError> {
        self.get(&item_path(ASSETS_V1, "assets", asset_id, "/logs"), Some(filter))
            .await
    }

    /// `GET /atomicassets/v1/collections`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn collections(
        &self,
        filter: &CollectionsFilter,
    ) -> Result<ApiResponse<Vec<Collection>>, ClientError> {
        self.get(&format!("{ASSETS_V1}/collections"), Some(filter))
            .await
    }

    /// `GET /atomicassets/v1/collections/{collection_name}`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn collection(&self, name: &str) -> Result<ApiResponse<Collection>, ClientError> {
        self.get::<(), _>(&item_path(ASSETS_V1, "collections", name, ""), None)
            .await
    }

    /// `GET /atomicassets/v1/collections/{collection_name}/stats`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn collection_stats(
        &self,
        name: &str,
    ) -> Result<ApiResponse<CollectionStats>, ClientError> {
        self.get::<(), _>(&item_path(ASSETS_V1, "collections", name, "/stats"), None)
            .await
    }

    /// `GET /atomicassets/v1/collections/{collection_name}/logs`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn collection_logs(
        &self,
        name: &str,
        filter: &LogFilter,
    ) -> Result<ApiResponse<Vec<Log>>, ClientError> {
        self.get(&item_path(ASSETS_V1, "collections", name, "/logs"), Some(filter))
            .await
    }

    /// `GET /atomicassets/v1/schemas`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn schemas(
        &self,
        filter: &SchemasFilter,
    ) -> Result<ApiResponse<Vec<Schema>>, ClientError> {
        self.get(&format!("{ASSETS_V1}/schemas"), Some(filter)).await
    }

    /// `GET /atomicassets/v1/templates`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn templates(
        &self,
        filter: &TemplatesFilter,
    ) -> Result<ApiResponse<Vec<Template>>, ClientError> {
        self.get(&format!("{ASSETS_V1}/templates"), Some(filter))
            .await
    }

    /// `GET /atomicassets/v1/templates/{collection_name}/{template_id}`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn template(
        &self,
        collection: &str,
        template_id: &str,
    ) -> Result<ApiResponse<Template>, ClientError> {
        let path = format!(
            "{ASSETS_V1}/templates/{}/{}",
            encode_path_segment(collection),
            encode_path_segment(template_id)
        );
        self.get::<(), _>(&path, None).await
    }

    /// `GET /atomicassets/v1/templates/{collection_name}/{template_id}/stats`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn template_stats(
        &self,
        collection: &str,
        template_id: &str,
    ) -> Result<ApiResponse<TemplateStats>, ClientError> {
        let path = format!(
            "{ASSETS_V1}/templates/{}/{}/stats",
            encode_path_segment(collection),
            encode_path_segment(template_id)
        );
        self.get::<(), _>(&path, None).await
    }

    /// `GET /atomicassets/v1/transfers`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn transfers(
        &self,
        filter: &TransfersFilter,
    ) -> Result<ApiResponse<Vec<Transfer>>, ClientError> {
        self.get(&format!("{ASSETS_V1}/transfers"), Some(filter))
            .await
    }

    /// `GET /atomicassets/v1/offers`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn offers(
        &self,
        filter: &OffersFilter,
    ) -> Result<ApiResponse<Vec<Offer>>, ClientError> {
        self.get(&format!("{ASSETS_V1}/offers"), Some(filter)).await
    }

    /// `GET /atomicassets/v1/offers/{offer_id}`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn offer(&self, offer_id: &str) -> Result<ApiResponse<Offer>, ClientError> {
        self.get::<(), _>(&item_path(ASSETS_V1, "offers", offer_id, ""), None)
            .await
    }

    /// `GET /atomicassets/v1/offers/{offer_id}/logs`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn offer_logs(
        &self,
        offer_id: &str,
        filter: &LogFilter,
    ) -> Result<ApiResponse<Vec<Log>>, ClientError> {
        self.get(&item_path(ASSETS_V1, "offers", offer_id, "/logs"), Some(filter))
            .await
    }
}

//! `/atomicmarket` endpoints: sales, auctions, buy offers, prices and
//! marketplaces.

use super::{item_path, MARKET_V1, MARKET_V2};
use crate::client::Client;
use crate::error::ClientError;
use atomicasset_core::model::{
    AssetSale, AssetSalesFilter, Auction, AuctionsFilter, BuyOffer, BuyOffersFilter, Log,
    LogFilter, Marketplace, PriceAsset, PriceAssetsFilter, PriceInventory, PriceInventoryData,
    PriceSale, PriceSaleDay, PriceSalesFilter, PriceTemplate, PriceTemplatesFilter, Sale,
    SalesByTemplateFilter, SalesFilter,
};
use atomicasset_core::ApiResponse;

impl Client {
    /// `GET /atomicmarket/v1/assets/{asset_id}/sales`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn asset_sales(
        &self,
        asset_id: &str,
        filter: &AssetSalesFilter,
    ) -> Result<ApiResponse<Vec<AssetSale>>, ClientError> {
        self.get(&item_path(MARKET_V1, "assets", asset_id, "/sales"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v2/sales`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn sales(&self, filter: &SalesFilter) -> Result<ApiResponse<Vec<Sale>>, ClientError> {
        self.get(&format!("{MARKET_V2}/sales"), Some(filter)).await
    }

    /// `GET /atomicmarket/v1/sales/{sale_id}`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn sale(&self, sale_id: u64) -> Result<ApiResponse<Sale>, ClientError> {
        self.get::<(), _>(&format!("{MARKET_V1}/sales/{sale_id}"), None)
            .await
    }

    /// `GET /atomicmarket/v1/sales/templates`
    ///
    /// Cheapest listing per template.
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn sales_by_template(
        &self,
        filter: &SalesByTemplateFilter,
    ) -> Result<ApiResponse<Vec<Sale>>, ClientError> {
        self.get(&format!("{MARKET_V1}/sales/templates"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v1/sales/{sale_id}/logs`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn sale_logs(
        &self,
        sale_id: u64,
        filter: &LogFilter,
    ) -> Result<ApiResponse<Vec<Log>>, ClientError> {
        self.get(&format!("{MARKET_V1}/sales/{sale_id}/logs"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v2/auctions`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn auctions(
        &self,
        filter: &AuctionsFilter,
    ) -> Result<ApiResponse<Vec<Auction>>, ClientError> {
        self.get(&format!("{MARKET_V2}/auctions"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v1/auctions/{auction_id}`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn auction(&self, auction_id: u64) -> Result<ApiResponse<Auction>, ClientError> {
        self.get::<(), _>(&format!("{MARKET_V1}/auctions/{auction_id}"), None)
            .await
    }

    /// `GET /atomicmarket/v1/auctions/{auction_id}/logs`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn auction_logs(
        &self,
        auction_id: u64,
        filter: &LogFilter,
    ) -> Result<ApiResponse<Vec<Log>>, ClientError> {
        self.get(&format!("{MARKET_V1}/auctions/{auction_id}/logs"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v1/buyoffers`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn buyoffers(
        &self,
        filter: &BuyOffersFilter,
    ) -> Result<ApiResponse<Vec<BuyOffer>>, ClientError> {
        self.get(&format!("{MARKET_V1}/buyoffers"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v1/buyoffers/{buyoffer_id}`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn buyoffer(&self, buyoffer_id: u64) -> Result<ApiResponse<BuyOffer>, ClientError> {
        self.get::<(), _>(&format!("{MARKET_V1}/buyoffers/{buyoffer_id}"), None)
            .await
    }

    /// `GET /atomicmarket/v1/buyoffers/{buyoffer_id}/logs`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn buyoffer_logs(
        &self,
        buyoffer_id: u64,
        filter: &LogFilter,
    ) -> Result<ApiResponse<Vec<Log>>, ClientError> {
        self.get(
            &format!("{MARKET_V1}/buyoffers/{buyoffer_id}/logs"),
            Some(filter),
        )
        .await
    }

    /// `GET /atomicmarket/v1/prices/sales`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn price_sales(
        &self,
        filter: &PriceSalesFilter,
    ) -> Result<ApiResponse<Vec<PriceSale>>, ClientError> {
        self.get(&format!("{MARKET_V1}/prices/sales"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v1/prices/sales/days`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn price_sales_days(
        &self,
        filter: &PriceSalesFilter,
    ) -> Result<ApiResponse<Vec<PriceSaleDay>>, ClientError> {
        self.get(&format!("{MARKET_V1}/prices/sales/days"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v1/prices/templates`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn price_templates(
        &self,
        filter: &PriceTemplatesFilter,
    ) -> Result<ApiResponse<Vec<PriceTemplate>>, ClientError> {
        self.get(&format!("{MARKET_V1}/prices/templates"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v1/prices/assets`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn price_assets(
        &self,
        filter: &PriceAssetsFilter,
    ) -> Result<ApiResponse<Vec<PriceAsset>>, ClientError> {
        self.get(&format!("{MARKET_V1}/prices/assets"), Some(filter))
            .await
    }

    /// `GET /atomicmarket/v1/prices/inventory/{account}`
    ///
    /// The service nests the list under `data.collections`; it is lifted to
    /// `data` here.
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn price_inventory(
        &self,
        account: &str,
        filter: &PriceAssetsFilter,
    ) -> Result<ApiResponse<Vec<PriceInventory>>, ClientError> {
        let resp: ApiResponse<PriceInventoryData> = self
            .get(&item_path(MARKET_V1, "prices/inventory", account, ""), Some(filter))
            .await?;
        Ok(resp.map(|data| data.collections))
    }

    /// `GET /atomicmarket/v1/marketplaces`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn marketplaces(&self) -> Result<ApiResponse<Vec<Marketplace>>, ClientError> {
        self.get::<(), _>(&format!("{MARKET_V1}/marketplaces"), None)
            .await
    }

    /// `GET /atomicmarket/v1/marketplaces/{marketplace_name}`
    ///
    /// # Errors
    ///
    /// See [`Client::call`].
    pub async fn marketplace(&self, name: &str) -> Result<ApiResponse<Marketplace>, ClientError> {
        self.get::<(), _>(&item_path(MARKET_V1, "marketplaces", name, ""), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::testing::{json_response, ScriptedTransport};
    use crate::Client;
    use atomicasset_core::model::{
        AssetSalesFilter, AuctionsFilter, BuyOfferSort, BuyOffersFilter, LogFilter,
        PriceAssetsFilter, PriceSalesFilter, PriceTemplatesFilter, SaleSort, SaleState,
        SalesByTemplateFilter, SalesFilter,
    };
    use atomicasset_core::{QueryList, SortOrder};
    use std::sync::Arc;

    fn setup(body: &str) -> (Client, Arc<ScriptedTransport>) {
        let transport = ScriptedTransport::replying(json_response(200, body));
        let client = Client::with_transport(ClientConfig::default(), transport.clone()).unwrap();
        (client, transport)
    }

    fn urls(transport: &ScriptedTransport) -> Vec<String> {
        transport
            .requests()
            .into_iter()
            .map(|r| r.full_url())
            .collect()
    }

    #[tokio::test]
    async fn sale_listings() {
        let (client, transport) = setup(r#"{"success":true,"data":[]}"#);

        client
            .sales(&SalesFilter {
                state: QueryList::from([SaleState::Listed, SaleState::Sold]),
                collection_name: "alien.worlds".to_string(),
                sort: SaleSort::Price,
                order: SortOrder::Ascending,
                ..SalesFilter::default()
            })
            .await
            .unwrap();
        client
            .sales_by_template(&SalesByTemplateFilter {
                symbol: "WAX".to_string(),
                ..SalesByTemplateFilter::default()
            })
            .await
            .unwrap();
        client.sale_logs(77, &LogFilter::default()).await.unwrap();
        client
            .asset_sales(
                "1099835349411",
                &AssetSalesFilter {
                    buyer: "somebuyer".to_string(),
                    ..AssetSalesFilter::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(
            urls(&transport),
            [
                "http://localhost:9000/atomicmarket/v2/sales?collection_name=alien.worlds&order=asc&sort=price&state=1%2C3",
                "http://localhost:9000/atomicmarket/v1/sales/templates?symbol=WAX",
                "http://localhost:9000/atomicmarket/v1/sales/77/logs",
                "http://localhost:9000/atomicmarket/v1/assets/1099835349411/sales?buyer=somebuyer",
            ]
        );
    }

    #[tokio::test]
    async fn sale_by_id_decodes() {
        let (client, transport) = setup(
            r#"{"success":true,"data":{"sale_id":"77","state":3,"listing_price":"100000000","buyer":null},"query_time":1646996870500}"#,
        );

        let sale = client.sale(77).await.unwrap();
        assert_eq!(sale.data.id, "77");
        assert_eq!(sale.data.state, SaleState::Sold);
        assert_eq!(sale.data.listing_price, "100000000");
        assert!(sale.data.buyer.is_none());
        assert_eq!(
            urls(&transport),
            ["http://localhost:9000/atomicmarket/v1/sales/77"]
        );
    }

    #[tokio::test]
    async fn auctions_and_buyoffers() {
        let (client, transport) = setup(r#"{"success":true,"data":[]}"#);

        client
            .auctions(&AuctionsFilter {
                seller: QueryList::from(vec!["someseller".to_string()]),
                ..AuctionsFilter::default()
            })
            .await
            .unwrap();
        client.auction_logs(5, &LogFilter::default()).await.unwrap();
        client
            .buyoffers(&BuyOffersFilter {
                sort: BuyOfferSort::Price,
                ..BuyOffersFilter::default()
            })
            .await
            .unwrap();
        client.buyoffer_logs(9, &LogFilter::default()).await.unwrap();

        assert_eq!(
            urls(&transport),
            [
                "http://localhost:9000/atomicmarket/v2/auctions?seller=someseller",
                "http://localhost:9000/atomicmarket/v1/auctions/5/logs",
                "http://localhost:9000/atomicmarket/v1/buyoffers?sort=price",
                "http://localhost:9000/atomicmarket/v1/buyoffers/9/logs",
            ]
        );
    }

    #[tokio::test]
    async fn single_auction_and_buyoffer() {
        let (client, transport) = setup(r#"{"success":true,"data":{}}"#);

        client.auction(5).await.unwrap();
        client.buyoffer(9).await.unwrap();
        client.marketplace("nft.hive").await.unwrap();

        assert_eq!(
            urls(&transport),
            [
                "http://localhost:9000/atomicmarket/v1/auctions/5",
                "http://localhost:9000/atomicmarket/v1/buyoffers/9",
                "http://localhost:9000/atomicmarket/v1/marketplaces/nft.hive",
            ]
        );
    }

    #[tokio::test]
    async fn price_endpoints() {
        let (client, transport) = setup(r#"{"success":true,"data":[]}"#);

        let filter = PriceSalesFilter {
            template_id: 19553,
            ..PriceSalesFilter::default()
        };
        client.price_sales(&filter).await.unwrap();
        client.price_sales_days(&filter).await.unwrap();
        client
            .price_templates(&PriceTemplatesFilter::default())
            .await
            .unwrap();
        client
            .price_assets(&PriceAssetsFilter {
                owner: "someaccount".to_string(),
                ..PriceAssetsFilter::default()
            })
            .await
            .unwrap();
        client.marketplaces().await.unwrap();

        assert_eq!(
            urls(&transport),
            [
                "http://localhost:9000/atomicmarket/v1/prices/sales?template_id=19553",
                "http://localhost:9000/atomicmarket/v1/prices/sales/days?template_id=19553",
                "http://localhost:9000/atomicmarket/v1/prices/templates",
                "http://localhost:9000/atomicmarket/v1/prices/assets?owner=someaccount",
                "http://localhost:9000/atomicmarket/v1/marketplaces",
            ]
        );
    }

    #[tokio::test]
    async fn price_inventory_lifts_collections() {
        let (client, transport) = setup(
            r#"{
                "success": true,
                "data": {
                    "collections": [
                        {"collection": {"collection_name": "alien.worlds"}, "prices": [{"token_symbol": "WAX"}]}
                    ]
                },
                "query_time": 1646996870500
            }"#,
        );

        let resp = client
            .price_inventory("someaccount", &PriceAssetsFilter::default())
            .await
            .unwrap();

        assert_eq!(resp.http_status, 200);
        assert_eq!(resp.query_time.as_epoch_millis(), 1_646_996_870_500);
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].collection.collection_name, "alien.worlds");
        assert_eq!(resp.data[0].prices[0].token_symbol, "WAX");
        assert_eq!(
            urls(&transport),
            ["http://localhost:9000/atomicmarket/v1/prices/inventory/someaccount"]
        );
    }
}

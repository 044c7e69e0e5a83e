//! USDA FoodData Central APIクライアント
//!
//! 検索(/foods/search)と詳細取得(/food/{fdcId})の2操作のみを消費する。
//! リトライは行わず、失敗はそのまま呼び出し元へ返す。

pub mod types;

use crate::config::Config;
use crate::error::{FoodCliError, Result};
use std::time::Duration;
use types::{FoodDetail, SearchResponse};

pub struct UsdaClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl UsdaClient {
    /// 認証済みクライアントを作成
    ///
    /// APIキーは設定から解決する（環境変数 → 設定ファイル → ~/pa/usda）。
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FoodCliError::ApiCall(e.to_string()))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            http_client,
        })
    }

    /// 食品を検索
    ///
    /// 0件ヒットは正常（foodsが空のレスポンス）。
    pub async fn search_food(&self, query: &str, page_size: u32) -> Result<SearchResponse> {
        let url = format!("{}/foods/search", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("pageSize", &page_size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| FoodCliError::ApiCall(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FoodCliError::ApiCall(format!("HTTP {status}: {body}")));
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| FoodCliError::ApiCall(format!("レスポンス解析失敗: {e}")))
    }

    /// FDC IDで栄養詳細を取得
    pub async fn get_food_details(&self, fdc_id: u64) -> Result<FoodDetail> {
        let url = format!("{}/food/{}", self.base_url, fdc_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| FoodCliError::ApiCall(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FoodCliError::ApiCall(format!("HTTP {status}: {body}")));
        }

        response
            .json::<FoodDetail>()
            .await
            .map_err(|e| FoodCliError::ApiCall(format!("レスポンス解析失敗: {e}")))
    }
}

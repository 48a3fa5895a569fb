//! HTTP implementation of the backend client

use super::{ApiError, ApiResult, CardFilter, CardsApi};
use crate::constants::ROWS_PER_PAGE;
use crate::settings::Settings;
use crate::types::{AccountSnapshot, CardDetail, CardPage};
use std::time::Duration;
use tracing::{debug, warn};

pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(settings: &Settings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .expect("HTTP client init");
        Self {
            client,
            base_url: settings.api_base(),
        }
    }

    async fn get_json<T>(&self, url: String, query: &[(&str, String)]) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url = %url, body = %body, "Backend error status");
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn map_send_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Connect(e.to_string())
    }
}

#[async_trait::async_trait]
impl CardsApi for HttpApi {
    async fn search_cards(&self, filter: &CardFilter, page: u32) -> ApiResult<CardPage> {
        // The backend pages from zero; screens count from one.
        let mut query: Vec<(&str, String)> = vec![
            ("page", page.saturating_sub(1).to_string()),
            ("size", ROWS_PER_PAGE.to_string()),
        ];
        if !filter.account_id.is_empty() {
            query.push(("accountId", filter.account_id.clone()));
        }
        if !filter.card_number.is_empty() {
            query.push(("cardNumber", filter.card_number.clone()));
        }

        let url = format!("{}/cards", self.base_url);
        match self.get_json::<CardPage>(url, &query).await {
            // No matching cards is a normal empty result, not a failure
            Err(ApiError::NotFound) => Ok(CardPage::default()),
            other => other,
        }
    }

    async fn card_detail(&self, account_id: &str, card_number: &str) -> ApiResult<CardDetail> {
        let url = format!("{}/cards/{}", self.base_url, card_number);
        let query = [("accountId", account_id.to_string())];
        self.get_json(url, &query).await
    }

    async fn account_view(&self, account_id: &str) -> ApiResult<AccountSnapshot> {
        let url = format!("{}/accounts/{}", self.base_url, account_id);
        self.get_json(url, &[]).await
    }
}

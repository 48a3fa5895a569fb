//! Backend client: the `CardsApi` trait, its error type, and construction

mod demo;
mod http;

pub use demo::DemoApi;
pub use http::HttpApi;

use crate::settings::Settings;
use crate::types::{AccountSnapshot, CardDetail, CardPage};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors surfaced by the backend client. Display strings are shown to the
/// user verbatim, so keep them presentable.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Record not found")]
    NotFound,
    #[error("Server error (HTTP {0})")]
    Status(u16),
    #[error("Request timed out")]
    Timeout,
    #[error("Connection failed: {0}")]
    Connect(String),
    #[error("Malformed response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Card list search criteria. Both fields hold sanitized digit strings;
/// empty means "no filter on this field".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub account_id: String,
    pub card_number: String,
}

/// The backend surface the screens fetch from. Page numbers are 1-based.
#[async_trait::async_trait]
pub trait CardsApi: Send + Sync {
    async fn search_cards(&self, filter: &CardFilter, page: u32) -> ApiResult<CardPage>;
    async fn card_detail(&self, account_id: &str, card_number: &str) -> ApiResult<CardDetail>;
    async fn account_view(&self, account_id: &str) -> ApiResult<AccountSnapshot>;
}

/// Build the client the app will talk to, honoring offline demo mode.
pub fn build_client(settings: &Settings) -> Arc<dyn CardsApi> {
    if settings.offline_demo || std::env::var("CARDDEMO_OFFLINE").is_ok() {
        info!("Offline demo mode, using built-in dataset");
        Arc::new(DemoApi::new())
    } else {
        info!(base_url = %settings.api_base(), "Using HTTP backend");
        Arc::new(HttpApi::new(settings))
    }
}

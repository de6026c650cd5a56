use crate::models::{SearchRequest, SearchResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;

const TAVILY_ENDPOINT: &str = "https://api.tavily.com/search";

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

pub struct TavilyClient {
    http: reqwest::Client,
    api_key: String,
}

impl TavilyClient {
    pub fn new(api_key: String) -> Self {
        TavilyClient {
            http: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let response = self
            .http
            .post(TAVILY_ENDPOINT)
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .context("search request failed")?
            .error_for_status()
            .context("search request rejected")?;

        response
            .json::<SearchResponse>()
            .await
            .context("failed to parse search response")
    }
}

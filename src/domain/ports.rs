use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote source of trivia text for an integer.
#[async_trait]
pub trait FactProvider: Send + Sync {
    async fn fetch_fact(&self, number: i64) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn fact_api_url(&self) -> &str;
    fn fact_timeout_ms(&self) -> u64;
}

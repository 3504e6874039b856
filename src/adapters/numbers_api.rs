use crate::domain::ports::{ConfigProvider, FactProvider};
use crate::utils::error::{ClassifyError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_FACT_API_URL: &str = "http://numbersapi.com";

/// Fact provider backed by the Numbers API (`{base}/{n}/math`, plain text).
#[derive(Debug, Clone)]
pub struct NumbersApiClient {
    client: Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.fact_api_url(),
            Duration::from_millis(config.fact_timeout_ms()),
        )
    }

    pub fn fact_url(&self, number: i64) -> String {
        format!("{}/{}/math", self.base_url.trim_end_matches('/'), number)
    }
}

#[async_trait]
impl FactProvider for NumbersApiClient {
    async fn fetch_fact(&self, number: i64) -> Result<String> {
        let url = self.fact_url(number);
        tracing::debug!("Making fact request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Fact response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ClassifyError::FactStatus {
                status: response.status().as_u16(),
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Err(ClassifyError::EmptyFact);
        }
        Ok(text)
    }
}

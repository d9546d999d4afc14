use async_trait::async_trait;
use derive_new::new;

use kernel::client::health::HealthClient;
use shared::error::AppResult;

use crate::http::HttpClient;

#[derive(new)]
pub struct HealthClientImpl {
    http: HttpClient,
}

#[async_trait]
impl HealthClient for HealthClientImpl {
    async fn check(&self) -> AppResult<()> {
        let _: serde_json::Value = self.http.get("/health").await?;
        Ok(())
    }
}

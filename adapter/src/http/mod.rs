use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

use shared::config::ApiConfig;
use shared::error::{AppError, AppResult};

pub mod model;

/// Shared transport for every backend client: base URL, bearer token and
/// timeout come from configuration, the connection pool from reqwest.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    pub fn new(cfg: &ApiConfig) -> AppResult<Self> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(AppError::ApiRequestError)?;
        Ok(Self {
            inner,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            token: cfg.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let res = self
            .inner
            .get(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(AppError::ApiRequestError)?;
        decode(res).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let res = self
            .inner
            .post(self.url(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(AppError::ApiRequestError)?;
        decode(res).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let res = self
            .inner
            .put(self.url(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(AppError::ApiRequestError)?;
        decode(res).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let res = self
            .inner
            .patch(self.url(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(AppError::ApiRequestError)?;
        decode(res).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let res = self
            .inner
            .delete(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(AppError::ApiRequestError)?;
        decode(res).await
    }
}

async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> AppResult<T> {
    let status = res.status().as_u16();
    let body = res.text().await.map_err(AppError::ApiRequestError)?;
    if (200..300).contains(&status) {
        serde_json::from_str(&body).map_err(|e| AppError::ConversionEntityError(e.to_string()))
    } else {
        Err(response_error(status, &body))
    }
}

/// The backend reports failures as `{"error": "..."}`; fall back to a
/// generic message when the body is something else (proxies, crashes).
fn response_error(status: u16, body: &str) -> AppError {
    #[derive(Deserialize)]
    struct ApiErrorBody {
        error: String,
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| "the request could not be completed".to_string());
    match status {
        404 => AppError::EntityNotFound(message),
        _ => AppError::ApiResponseError { status, message },
    }
}

use anyhow::Result;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;

mod comments;
mod directory;
mod error;
mod types;

pub use error::ApiError;
pub use types::*;

#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError>;
}

#[async_trait]
pub trait CommentStoreApi: Send + Sync {
    async fn list_comments(&self) -> Result<Vec<Comment>, ApiError>;
    async fn submit_comment(
        &self,
        user_id: UserId,
        text: &str,
    ) -> Result<serde_json::Value, ApiError>;
}

/// HTTP client for both the user directory and the comment store.
pub struct ApiClient {
    client: reqwest::Client,
    directory_url: String,
    comment_store_url: String,
}

impl ApiClient {
    pub fn new(directory_url: &str, comment_store_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("roster"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            directory_url: trim_base(directory_url),
            comment_store_url: trim_base(comment_store_url),
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::transport(url, source))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::transport(url, source))?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DirectoryApi for ApiClient {
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.fetch_users().await
    }
}

#[async_trait]
impl CommentStoreApi for ApiClient {
    async fn list_comments(&self) -> Result<Vec<Comment>, ApiError> {
        self.list_comments().await
    }

    async fn submit_comment(
        &self,
        user_id: UserId,
        text: &str,
    ) -> Result<serde_json::Value, ApiError> {
        self.submit_comment(user_id, text).await
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

//! HTTP implementation of `ItemApi` on top of `reqwest`.
//!
//! Works in the browser (fetch backend) and natively (hyper backend).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;

use super::ItemApi;
use crate::domain::{Item, ItemId};
use crate::error::{ApiError, ApiResult};

/// Where the items service lives unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "https://nodejs-project-two.vercel.app";

/// Characters escaped when an id becomes a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Serialize)]
struct NameBody<'a> {
    name: &'a str,
}

/// REST client for `{base}/items`
#[derive(Debug, Clone)]
pub struct HttpItemApi {
    client: Client,
    base_url: String,
}

impl Default for HttpItemApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl HttpItemApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    pub fn item_url(&self, id: &ItemId) -> String {
        let segment = id.to_string();
        format!(
            "{}/items/{}",
            self.base_url,
            utf8_percent_encode(&segment, PATH_SEGMENT)
        )
    }

    /// Send a request and turn transport errors and non-2xx statuses into `ApiError`.
    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> ApiResult<Response> {
        tracing::debug!(method, url, "sending item request");

        let response = request.send().await.map_err(|source| ApiError::Transport {
            method,
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl ItemApi for HttpItemApi {
    async fn list(&self) -> ApiResult<Vec<Item>> {
        let url = self.collection_url();
        let response = self.send("GET", &url, self.client.get(&url)).await?;
        response
            .json::<Vec<Item>>()
            .await
            .map_err(|source| ApiError::Decode {
                method: "GET",
                url,
                source,
            })
    }

    async fn create(&self, name: &str) -> ApiResult<Item> {
        let url = self.collection_url();
        let request = self.client.post(&url).json(&NameBody { name });
        let response = self.send("POST", &url, request).await?;
        response
            .json::<Item>()
            .await
            .map_err(|source| ApiError::Decode {
                method: "POST",
                url,
                source,
            })
    }

    async fn update(&self, id: &ItemId, name: &str) -> ApiResult<()> {
        let url = self.item_url(id);
        let request = self.client.put(&url).json(&NameBody { name });
        self.send("PUT", &url, request).await?;
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> ApiResult<()> {
        let url = self.item_url(id);
        self.send("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }
}

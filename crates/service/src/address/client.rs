use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::UpstreamError;

/// Body of a successful address-service response. Only the address field is
/// consumed; a missing field decodes as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Serialize)]
struct PostAddressBody<'a> {
    id: Uuid,
    address: &'a str,
}

#[derive(Debug, Serialize)]
struct PutAddressBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
}

/// Outbound capability for the remote address service. Injected into the
/// aggregator so tests can substitute an in-memory fake.
#[async_trait]
pub trait AddressClient: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<AddressRecord, UpstreamError>;
    async fn post(&self, id: Uuid, address: &str) -> Result<AddressRecord, UpstreamError>;
    async fn put(&self, id: Uuid, address: Option<&str>) -> Result<AddressRecord, UpstreamError>;
    async fn delete(&self, id: Uuid) -> Result<(), UpstreamError>;
}

/// reqwest-backed client. One request per call, no retries, transport-default
/// timeouts; failures propagate synchronously to the aggregator.
pub struct HttpAddressClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpAddressClient {
    pub fn new(base_url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}/address/{}", self.base_url, id)
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, UpstreamError> {
        let resp = req
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(UpstreamError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            body,
        })
    }

    async fn decode(resp: reqwest::Response) -> Result<AddressRecord, UpstreamError> {
        resp.json::<AddressRecord>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AddressClient for HttpAddressClient {
    async fn get(&self, id: Uuid) -> Result<AddressRecord, UpstreamError> {
        let resp = self.execute(self.http.get(self.item_url(id))).await?;
        Self::decode(resp).await
    }

    async fn post(&self, id: Uuid, address: &str) -> Result<AddressRecord, UpstreamError> {
        let url = format!("{}/address", self.base_url);
        let body = PostAddressBody { id, address };
        let resp = self.execute(self.http.post(url).json(&body)).await?;
        Self::decode(resp).await
    }

    async fn put(&self, id: Uuid, address: Option<&str>) -> Result<AddressRecord, UpstreamError> {
        let body = PutAddressBody { address };
        let resp = self.execute(self.http.put(self.item_url(id)).json(&body)).await?;
        Self::decode(resp).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), UpstreamError> {
        // Response body, if any, is ignored.
        self.execute(self.http.delete(self.item_url(id))).await?;
        Ok(())
    }
}

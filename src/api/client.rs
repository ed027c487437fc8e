use std::future::Future;
use std::time::Duration;

use log::{info, warn};
use reqwest::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;

use crate::api::request::OutboundRequest;
use crate::error::NetworkError;

/// Sends one verification request and hands back the raw response body.
pub trait Transport {
    fn send(
        &self,
        request: OutboundRequest,
    ) -> impl Future<Output = Result<String, NetworkError>> + Send;
}

#[derive(Clone)]
pub struct ApiClient {
    pub http: HttpClient,
}

impl ApiClient {
    pub fn new(timeout: Duration) -> Result<Self, NetworkError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

fn classify(err: reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout
    } else {
        NetworkError::Transport(err)
    }
}

impl Transport for ApiClient {
    async fn send(&self, request: OutboundRequest) -> Result<String, NetworkError> {
        info!("{} {}", request.method, request.url);
        let resp = self
            .http
            .request(request.method, request.url)
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body)
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!("verification endpoint returned HTTP {status}");
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.text().await.map_err(classify)
    }
}

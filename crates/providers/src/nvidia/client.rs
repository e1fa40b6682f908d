use std::time::Duration;

use bizmate_core::llm::{
    CompletionError, CompletionModel, CompletionRequest, CompletionResponse,
};
use reqwest::{header, Client, StatusCode};
use tracing::{debug, error};

use crate::nvidia::config::NvidiaConfig;

#[derive(Clone)]
pub struct NvidiaClient {
    http: Client,
    cfg: NvidiaConfig,
}

impl NvidiaClient {
    pub fn new(cfg: NvidiaConfig) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key))?,
        );
        let mut builder = Client::builder()
            .default_headers(headers)
            .use_rustls_tls()
            .pool_idle_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(2)
            .timeout(cfg.timeout);
        if let Some(p) = &cfg.proxy {
            builder = builder.proxy(reqwest::Proxy::all(p)?);
        }
        let http = builder.build()?;
        Ok(Self { http, cfg })
    }

    pub fn model_id(&self) -> &str {
        &self.cfg.model
    }
}

#[allow(async_fn_in_trait)]
impl CompletionModel for NvidiaClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError> {
        let url = format!("{}/completions", self.cfg.base_url.trim_end_matches('/'));
        debug!(target:"providers::nvidia","completion request model={} max_tokens={}", self.cfg.model, max_tokens);
        let body = CompletionRequest::new(&self.cfg.model, prompt, max_tokens);
        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_err)?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.ok();
            error!(target:"providers::nvidia","completion non-200 status={} body={:?}", status, body);
            return Err(map_status_err(status, body));
        }
        let parsed: CompletionResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))?;
        let text = parsed
            .into_text()
            .ok_or_else(|| CompletionError::Decode("missing choices[0].text".into()))?;
        Ok(text.trim().to_string())
    }
}

fn map_reqwest_err(e: reqwest::Error) -> CompletionError {
    if e.is_timeout() {
        CompletionError::Timeout(e.to_string())
    } else if e.is_request() || e.is_connect() {
        CompletionError::Network(e.to_string())
    } else {
        CompletionError::Other(e.to_string())
    }
}

fn map_status_err(status: StatusCode, body: Option<String>) -> CompletionError {
    let s = format!("{} {}", status.as_u16(), body.unwrap_or_default());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Auth(s),
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimit(s),
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => CompletionError::Network(s),
        StatusCode::NOT_FOUND => CompletionError::Protocol("404".into()),
        _ => CompletionError::Other(s),
    }
}

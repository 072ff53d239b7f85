use crate::core::auth::auth_headers;
use crate::core::params::query_pairs;
use crate::domain::model::{ApiResponse, ApiResult, HttpMethod, RequestSpec, Site};
use crate::domain::ports::Dispatcher;
use crate::utils::error::{Result, WpError};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use std::time::Duration;
use url::Url;

pub const REST_PREFIX: &str = "/wp-json/wp/v2/";

const TOTAL_HEADER: &str = "x-wp-total";
const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// endpoint 只能是 `/` 分隔的一般路徑段，不能帶 query、fragment 或 `..`
fn check_endpoint(endpoint: &str) -> Result<()> {
    let invalid = |reason: &str| WpError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason: reason.to_string(),
    };

    if endpoint.contains(['?', '#', '\\']) {
        return Err(invalid("must not contain '?', '#' or '\\'"));
    }
    let trimmed = endpoint.trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(invalid("must not be empty"));
    }
    for segment in trimmed.split('/') {
        if segment.is_empty() || is_dot_segment(segment) {
            return Err(invalid("path segments must not be empty, '.' or '..'"));
        }
    }
    Ok(())
}

/// `base_url`（去掉結尾斜線）+ `/wp-json/wp/v2/` + endpoint
pub fn build_url(base_url: &str, endpoint: &str) -> Result<Url> {
    check_endpoint(endpoint)?;
    let raw = format!(
        "{}{}{}",
        base_url.trim_end_matches('/'),
        REST_PREFIX,
        endpoint.trim_start_matches('/')
    );
    Url::parse(&raw).map_err(|e| WpError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// 回應本體盡量解析成 JSON，否則以字串保留
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// 以 reqwest 實作的 Dispatcher，每個請求都套用同一個 timeout
#[derive(Debug, Clone)]
pub struct RestDispatcher {
    client: Client,
    timeout: Duration,
}

impl RestDispatcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 泛用入口：方法字串在任何網路 I/O 之前就先驗證
    pub async fn request(
        &self,
        site: &Site,
        endpoint: &str,
        method: &str,
        query: Map<String, Value>,
        body: Option<Value>,
    ) -> Result<ApiResult> {
        let method: HttpMethod = method.parse()?;
        let mut spec = RequestSpec::new(site.clone(), endpoint)
            .with_method(method)
            .with_query(query);
        if let Some(body) = body {
            spec = spec.with_body(body);
        }
        Ok(self.dispatch(&spec).await?.body)
    }
}

#[async_trait]
impl Dispatcher for RestDispatcher {
    async fn dispatch(&self, spec: &RequestSpec) -> Result<ApiResponse> {
        let url = build_url(&spec.site.base_url, &spec.endpoint)?;
        tracing::debug!(
            "{} {} on site '{}'",
            spec.method,
            spec.endpoint,
            spec.site.name
        );

        let mut request = self.client.request(to_reqwest_method(spec.method), url);
        for (key, value) in auth_headers(&spec.site) {
            request = request.header(key, value);
        }

        match spec.payload() {
            Some(payload) => request = request.json(&payload),
            None => {
                let pairs = query_pairs(&spec.query);
                if !pairs.is_empty() {
                    request = request.query(&pairs);
                }
            }
        }

        let response = request.send().await?;
        let status = response.status();
        let total = header_u64(response.headers(), TOTAL_HEADER);
        let total_pages = header_u64(response.headers(), TOTAL_PAGES_HEADER);
        let bytes = response.bytes().await?;
        let body = parse_body(&bytes);

        if !status.is_success() {
            tracing::warn!(
                "⚠️ {} {} on site '{}' failed with status {}",
                spec.method,
                spec.endpoint,
                spec.site.name,
                status.as_u16()
            );
            return Err(WpError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("API response status: {}", status);
        Ok(ApiResponse {
            body,
            total,
            total_pages,
        })
    }
}

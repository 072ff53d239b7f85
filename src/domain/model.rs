use crate::utils::error::{Result, WpError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// 後端回傳的原始 JSON（物件或陣列）
pub type ApiResult = Value;

/// 一個已設定的 WordPress 站點
#[derive(Clone, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    pub base_url: String,
    pub username: String,
    pub secret: String,
}

impl Site {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            username: username.into(),
            secret: secret.into(),
        }
    }
}

// 密碼不可出現在日誌裡
impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// 寫入類方法送 JSON body，讀取類方法只送 query string
    pub fn sends_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl FromStr for HttpMethod {
    type Err = WpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(WpError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一次 REST 呼叫的完整描述
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub site: Site,
    pub endpoint: String,
    pub method: HttpMethod,
    pub query: Map<String, Value>,
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn new(site: Site, endpoint: impl Into<String>) -> Self {
        Self {
            site,
            endpoint: endpoint.into(),
            method: HttpMethod::Get,
            query: Map::new(),
            body: None,
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_query(mut self, query: Map<String, Value>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// 實際送出的 JSON payload：body 優先，否則沿用 query
    pub fn payload(&self) -> Option<Value> {
        if !self.method.sends_body() {
            return None;
        }
        match &self.body {
            Some(body) => Some(body.clone()),
            None => Some(Value::Object(self.query.clone())),
        }
    }
}

/// Dispatcher 的回應：JSON 本體加上 WordPress 的分頁標頭
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub body: ApiResult,
    pub total: Option<u64>,
    pub total_pages: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Value,
    pub title: String,
    pub author: String,
    pub categories: Vec<String>,
    pub date: Value,
    pub link: Value,
    pub status: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site() -> Site {
        Site::new("blog", "https://blog.example.com", "admin", "secret")
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("PATCH".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert!(matches!(
            "TRACE".parse::<HttpMethod>(),
            Err(WpError::UnsupportedMethod(m)) if m == "TRACE"
        ));
    }

    #[test]
    fn test_payload_prefers_body_over_query() {
        let mut query = Map::new();
        query.insert("status".to_string(), json!("draft"));
        let spec = RequestSpec::new(site(), "posts")
            .with_method(HttpMethod::Post)
            .with_query(query)
            .with_body(json!({"title": "Hello"}));
        assert_eq!(spec.payload(), Some(json!({"title": "Hello"})));
    }

    #[test]
    fn test_payload_falls_back_to_query_for_writes() {
        let mut query = Map::new();
        query.insert("name".to_string(), json!("News"));
        let spec = RequestSpec::new(site(), "categories")
            .with_method(HttpMethod::Put)
            .with_query(query);
        assert_eq!(spec.payload(), Some(json!({"name": "News"})));
    }

    #[test]
    fn test_reads_never_send_payload() {
        let spec = RequestSpec::new(site(), "posts")
            .with_method(HttpMethod::Delete)
            .with_body(json!({"ignored": true}));
        assert_eq!(spec.payload(), None);
    }

    #[test]
    fn test_site_debug_redacts_secret() {
        let rendered = format!("{:?}", site());
        assert!(rendered.contains("blog.example.com"));
        assert!(!rendered.contains("secret\""));
        assert!(rendered.contains("***"));
    }
}

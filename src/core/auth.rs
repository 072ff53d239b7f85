use crate::domain::model::Site;
use base64::Engine as _;
use std::collections::BTreeMap;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";

/// `username:secret` 的 Basic 認證值
pub fn basic_credential(site: &Site) -> String {
    let encoded = base64::engine::general_purpose::STANDARD
        .encode(format!("{}:{}", site.username, site.secret));
    format!("Basic {}", encoded)
}

/// 每個請求都帶的兩個標頭
pub fn auth_headers(site: &Site) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert(AUTHORIZATION.to_string(), basic_credential(site));
    headers.insert(CONTENT_TYPE.to_string(), "application/json".to_string());
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(secret: &str) -> Site {
        Site::new("blog", "https://blog.example.com", "admin", secret)
    }

    #[test]
    fn test_auth_headers_shape() {
        let headers = auth_headers(&site("secret"));
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[AUTHORIZATION], "Basic YWRtaW46c2VjcmV0");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_auth_headers_deterministic() {
        assert_eq!(auth_headers(&site("secret")), auth_headers(&site("secret")));
    }

    #[test]
    fn test_changing_secret_only_changes_credential() {
        let before = auth_headers(&site("secret"));
        let after = auth_headers(&site("other"));
        assert_ne!(before[AUTHORIZATION], after[AUTHORIZATION]);
        assert_eq!(after[AUTHORIZATION], "Basic YWRtaW46b3RoZXI=");
        assert_eq!(before[CONTENT_TYPE], after[CONTENT_TYPE]);
    }

    #[test]
    fn test_application_password_spaces_are_kept() {
        let site = Site::new("news", "https://news.example.com", "editor", "abcd efgh ijkl");
        assert_eq!(basic_credential(&site), "Basic ZWRpdG9yOmFiY2QgZWZnaCBpamts");
    }
}

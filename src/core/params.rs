use serde_json::{Map, Value};

/// 組裝 query / body 的參數表。
///
/// 只有「有提供」的值才會寫入：`None` 代表未設定，
/// 而 `0`、`false`、空字串、空陣列都是有效值，會原樣送出。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    inner: Map<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<V: Into<Value>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.inner.insert(key.to_string(), value.into());
        }
        self
    }

    pub fn put<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.inner.insert(key.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.inner
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.inner)
    }
}

/// 把 query 轉成字串 pair；陣列以逗號串接（WordPress 的清單慣例），null 略過
pub fn query_pairs(query: &Map<String, Value>) -> Vec<(String, String)> {
    query
        .iter()
        .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key.clone(), v)))
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_values_are_omitted() {
        let params = Params::new()
            .set("search", None::<String>)
            .set("per_page", Some(5u64));
        assert_eq!(params.into_value(), json!({"per_page": 5}));
    }

    #[test]
    fn test_falsy_values_are_kept() {
        let params = Params::new()
            .set("force", Some(false))
            .set("parent", Some(0u64))
            .set("excerpt", Some(String::new()))
            .set("categories", Some(Vec::<u64>::new()));
        assert_eq!(
            params.into_value(),
            json!({"force": false, "parent": 0, "excerpt": "", "categories": []})
        );
    }

    #[test]
    fn test_query_pairs_encoding() {
        let params = Params::new()
            .put("per_page", 5u64)
            .put("categories", vec![3u64, 7])
            .put("sticky", true)
            .put("after", Value::Null);
        let mut pairs = query_pairs(&params.into_map());
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("categories".to_string(), "3,7".to_string()),
                ("per_page".to_string(), "5".to_string()),
                ("sticky".to_string(), "true".to_string()),
            ]
        );
    }
}

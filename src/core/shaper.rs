use crate::domain::model::{ApiResult, PostSummary};
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "No title";
pub const DEFAULT_AUTHOR: &str = "Unknown";

fn embedded<'a>(post: &'a Value, key: &str) -> Option<&'a Value> {
    post.get("_embedded").and_then(|e| e.get(key))
}

fn author_name(post: &Value) -> String {
    embedded(post, "author")
        .and_then(|authors| authors.get(0))
        .and_then(|author| author.get("name"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_AUTHOR)
        .to_string()
}

/// `wp:term` 的第一組是分類
fn category_names(post: &Value) -> Vec<String> {
    embedded(post, "wp:term")
        .and_then(|groups| groups.get(0))
        .and_then(Value::as_array)
        .map(|terms| {
            terms
                .iter()
                .filter_map(|term| term.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn summarize_post(post: &ApiResult) -> PostSummary {
    let field = |key: &str| post.get(key).cloned().unwrap_or(Value::Null);

    PostSummary {
        id: field("id"),
        title: post
            .get("title")
            .and_then(|t| t.get("rendered"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_TITLE)
            .to_string(),
        author: author_name(post),
        categories: category_names(post),
        date: field("date"),
        link: field("link"),
        status: field("status"),
    }
}

/// 把帶 `_embed` 的文章列表壓成精簡摘要；缺少嵌入資料時回落到預設值
pub fn summarize(posts: &[ApiResult]) -> Vec<PostSummary> {
    posts.iter().map(summarize_post).collect()
}

/// 接受後端回傳的任何值：陣列逐筆摘要，單一物件視為一筆，其他為空
pub fn summarize_value(result: &ApiResult) -> Vec<PostSummary> {
    match result {
        Value::Array(posts) => summarize(posts),
        Value::Object(_) => vec![summarize_post(result)],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summarize_with_embedded_data() {
        let post = json!({
            "id": 7,
            "title": {"rendered": "Hello World"},
            "date": "2024-03-01T10:00:00",
            "link": "https://blog.example.com/hello-world",
            "status": "publish",
            "_embedded": {
                "author": [{"id": 1, "name": "Alice"}],
                "wp:term": [
                    [{"name": "News", "taxonomy": "category"}, {"name": "Tech", "taxonomy": "category"}],
                    [{"name": "rust", "taxonomy": "post_tag"}]
                ]
            }
        });

        let summaries = summarize(&[post]);
        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.id, json!(7));
        assert_eq!(summary.title, "Hello World");
        assert_eq!(summary.author, "Alice");
        assert_eq!(summary.categories, vec!["News", "Tech"]);
    }

    #[test]
    fn test_summarize_without_embedded() {
        let post = json!({
            "id": 3,
            "title": {"rendered": "Plain"},
            "date": "2024-01-01T00:00:00",
            "link": "https://blog.example.com/plain",
            "status": "draft"
        });

        let summary = summarize_post(&post);
        assert_eq!(summary.author, "Unknown");
        assert!(summary.categories.is_empty());
        assert_eq!(summary.id, json!(3));
        assert_eq!(summary.date, json!("2024-01-01T00:00:00"));
        assert_eq!(summary.link, json!("https://blog.example.com/plain"));
        assert_eq!(summary.status, json!("draft"));
    }

    #[test]
    fn test_empty_embedded_arrays_fall_back() {
        let post = json!({
            "id": 4,
            "_embedded": {"author": [], "wp:term": []}
        });

        let summary = summarize_post(&post);
        assert_eq!(summary.title, "No title");
        assert_eq!(summary.author, "Unknown");
        assert!(summary.categories.is_empty());
        assert_eq!(summary.status, Value::Null);
    }

    #[test]
    fn test_category_order_and_duplicates_preserved() {
        let post = json!({
            "_embedded": {"wp:term": [[{"name": "B"}, {"name": "A"}, {"name": "B"}]]}
        });
        assert_eq!(summarize_post(&post).categories, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_summarize_value_shapes() {
        assert_eq!(summarize_value(&json!([{"id": 1}, {"id": 2}])).len(), 2);
        assert_eq!(summarize_value(&json!({"id": 1})).len(), 1);
        assert!(summarize_value(&Value::Null).is_empty());
    }
}

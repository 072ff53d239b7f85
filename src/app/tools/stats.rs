use super::ToolContext;
use crate::core::params::Params;
use crate::core::resource::Resource;
use crate::domain::model::ApiResponse;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;

const STAT_RESOURCES: [Resource; 5] = [
    Resource::Posts,
    Resource::Pages,
    Resource::Categories,
    Resource::Tags,
    Resource::Media,
];

/// 單一端點的統計結果：成功時有 total，失敗時有 error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointStat {
    pub resource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl EndpointStat {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteStats {
    pub site: String,
    pub generated_at: DateTime<Utc>,
    /// 五個端點全部成功時為 true
    pub complete: bool,
    pub endpoints: Vec<EndpointStat>,
}

impl SiteStats {
    pub fn get(&self, resource: Resource) -> Option<&EndpointStat> {
        self.endpoints.iter().find(|e| e.resource == resource.path())
    }
}

/// 沒有 X-WP-Total 標頭時退而計算這一頁的筆數
fn count_from(response: &ApiResponse) -> u64 {
    response.total.unwrap_or_else(|| match &response.body {
        Value::Array(items) => items.len() as u64,
        _ => 0,
    })
}

/// 同時查詢五個集合的總數；任一失敗只記錄在該端點，不影響其他結果
pub(super) async fn collect_site_stats(ctx: &ToolContext, site_name: &str) -> Result<SiteStats> {
    let site = ctx.site(site_name)?;

    let specs: Vec<_> = STAT_RESOURCES
        .iter()
        .map(|resource| {
            (
                *resource,
                resource.list(site.clone(), Params::new().put("per_page", 1u64)),
            )
        })
        .collect();

    let outcomes = join_all(specs.iter().map(|(resource, spec)| async move {
        (*resource, ctx.dispatcher().dispatch(spec).await)
    }))
    .await;

    let endpoints: Vec<EndpointStat> = outcomes
        .into_iter()
        .map(|(resource, outcome)| match outcome {
            Ok(response) => EndpointStat {
                resource: resource.path().to_string(),
                total: Some(count_from(&response)),
                error: None,
                status: None,
            },
            Err(e) => {
                tracing::warn!(
                    "Stats for {} on site '{}' failed: {}",
                    resource,
                    site.name,
                    e
                );
                EndpointStat {
                    resource: resource.path().to_string(),
                    total: None,
                    status: e.status(),
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    let complete = endpoints.iter().all(EndpointStat::is_ok);
    Ok(SiteStats {
        site: site.name,
        generated_at: Utc::now(),
        complete,
        endpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_partial_failure_keeps_other_counts() {
        let mut dispatcher = RecordingDispatcher::default();
        dispatcher.totals.insert("posts".to_string(), 42);
        dispatcher.totals.insert("pages".to_string(), 7);
        dispatcher.totals.insert("categories".to_string(), 5);
        dispatcher.totals.insert("tags".to_string(), 19);
        dispatcher.failures.insert("media".to_string(), 403);
        let dispatcher = Arc::new(dispatcher);
        let catalog = catalog_with(dispatcher.clone());

        let stats = collect_site_stats(catalog.context(), "blog").await.unwrap();

        assert_eq!(dispatcher.recorded().len(), 5);
        assert!(!stats.complete);
        assert_eq!(stats.get(Resource::Posts).unwrap().total, Some(42));
        assert_eq!(stats.get(Resource::Pages).unwrap().total, Some(7));
        assert_eq!(stats.get(Resource::Categories).unwrap().total, Some(5));
        assert_eq!(stats.get(Resource::Tags).unwrap().total, Some(19));

        let media = stats.get(Resource::Media).unwrap();
        assert_eq!(media.total, None);
        assert_eq!(media.status, Some(403));
        assert!(media.error.as_ref().unwrap().contains("403"));
    }

    #[tokio::test]
    async fn test_missing_total_header_counts_page_items() {
        let mut dispatcher = RecordingDispatcher::default();
        dispatcher
            .responses
            .insert("tags".to_string(), json!([{"id": 1}]));
        let catalog = catalog_with(Arc::new(dispatcher));

        let stats = collect_site_stats(catalog.context(), "blog").await.unwrap();
        assert!(stats.complete);
        assert_eq!(stats.get(Resource::Tags).unwrap().total, Some(1));
        // 預設回應不是陣列
        assert_eq!(stats.get(Resource::Posts).unwrap().total, Some(0));
    }

    #[tokio::test]
    async fn test_unknown_site_is_not_partial() {
        let catalog = catalog_with(Arc::new(RecordingDispatcher::default()));
        assert!(collect_site_stats(catalog.context(), "shop").await.is_err());
    }

    #[tokio::test]
    async fn test_stats_serialize_without_empty_fields() {
        let mut dispatcher = RecordingDispatcher::default();
        dispatcher.totals.insert("posts".to_string(), 3);
        let catalog = catalog_with(Arc::new(dispatcher));

        let value = catalog
            .call_tool("get_site_stats", json!({"site": "blog"}))
            .await
            .unwrap();
        assert_eq!(value["site"], "blog");
        assert_eq!(value["endpoints"][0], json!({"resource": "posts", "total": 3}));
    }
}

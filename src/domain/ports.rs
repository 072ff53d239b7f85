use crate::domain::model::{ApiResponse, RequestSpec};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

/// 扁平的 key/value 設定來源
pub trait ConfigSource: Send + Sync {
    fn entries(&self) -> Vec<(String, String)>;
}

impl ConfigSource for HashMap<String, String> {
    fn entries(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn entries(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// 所有對外 HTTP 呼叫的唯一出口
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, spec: &RequestSpec) -> Result<ApiResponse>;
}

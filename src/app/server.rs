use crate::app::tools::ToolCatalog;
use crate::utils::error::Result;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "wp-multisite";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

pub fn json_rpc_response(id: Option<Value>, result: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": id.unwrap_or(Value::Null), "result": result})
}

pub fn json_rpc_error(id: Option<Value>, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id.unwrap_or(Value::Null),
        "error": {"code": code, "message": message}
    })
}

fn tool_text_content(text: String) -> Value {
    json!({"type": "text", "text": text})
}

/// 以換行分隔 JSON-RPC 的工具伺服器。
///
/// 每個 `tools/call` 在自己的 task 上執行，慢的站點不會擋住其他呼叫。
pub struct ToolServer {
    catalog: ToolCatalog,
    initialized: AtomicBool,
}

impl ToolServer {
    pub fn new(catalog: ToolCatalog) -> Self {
        Self {
            catalog,
            initialized: AtomicBool::new(false),
        }
    }

    /// 處理一個請求；通知類訊息沒有回應
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();

        if method == "initialize" {
            return Some(json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "serverInfo": {"name": SERVER_NAME, "version": SERVER_VERSION},
                    "capabilities": {"tools": {}}
                }),
            ));
        }

        if method == "notifications/initialized" {
            self.initialized.store(true, Ordering::SeqCst);
            return None;
        }

        if method.starts_with("notifications/") {
            return None;
        }

        if !self.initialized.load(Ordering::SeqCst) {
            return Some(json_rpc_error(request.id, -32002, "Server not initialized"));
        }

        match method {
            "ping" => Some(json_rpc_response(request.id, json!({}))),
            "tools/list" => Some(json_rpc_response(
                request.id,
                json!({"tools": self.catalog.list_tools()}),
            )),
            "tools/call" => {
                let Some(params) = request.params.as_ref().and_then(Value::as_object) else {
                    return Some(json_rpc_error(
                        request.id,
                        -32602,
                        "params must be an object",
                    ));
                };
                let Some(name) = params.get("name").and_then(Value::as_str) else {
                    return Some(json_rpc_error(request.id, -32602, "missing tool name"));
                };
                let args = params.get("arguments").cloned().unwrap_or(Value::Null);
                let result = self.call_tool(name, args).await;
                Some(json_rpc_response(request.id, result))
            }
            _ => Some(json_rpc_error(
                request.id,
                -32601,
                &format!("Method not found: {}", method),
            )),
        }
    }

    /// 工具錯誤在這裡轉成 `isError` 結果，而不是 JSON-RPC 錯誤
    async fn call_tool(&self, name: &str, args: Value) -> Value {
        match self.catalog.call_tool(name, args).await {
            Ok(value) => {
                let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
                json!({"content": [tool_text_content(text)], "isError": false})
            }
            Err(e) => {
                tracing::warn!(
                    "Tool '{}' failed ({:?}, {:?}): {}",
                    name,
                    e.category(),
                    e.severity(),
                    e
                );
                json!({
                    "content": [tool_text_content(format!("{}\nSuggestion: {}", e, e.recovery_suggestion()))],
                    "isError": true
                })
            }
        }
    }

    /// 從 stdin 讀請求、把回應寫到 stdout，直到 stdin 關閉
    pub async fn serve_stdio(self) -> Result<()> {
        let server = Arc::new(self);
        let (tx, mut rx) = mpsc::unbounded_channel::<Value>();

        let writer = tokio::spawn(async move {
            let mut stdout = tokio::io::stdout();
            while let Some(message) = rx.recv().await {
                let mut line = message.to_string();
                line.push('\n');
                if stdout.write_all(line.as_bytes()).await.is_err() {
                    break;
                }
                let _ = stdout.flush().await;
            }
        });

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        tracing::info!("🚀 {} listening on stdio", SERVER_NAME);

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(request) => request,
                Err(e) => {
                    let _ = tx.send(json_rpc_error(None, -32700, &format!("Parse error: {}", e)));
                    continue;
                }
            };

            if request.method == "tools/call" {
                let server = Arc::clone(&server);
                let tx = tx.clone();
                tokio::spawn(async move {
                    if let Some(response) = server.handle(request).await {
                        let _ = tx.send(response);
                    }
                });
            } else if let Some(response) = server.handle(request).await {
                let _ = tx.send(response);
            }
        }

        // 等所有進行中的工具呼叫送出回應
        drop(tx);
        let _ = writer.await;
        tracing::info!("stdin closed, shutting down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::test_support::*;

    fn request(id: i64, method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            id: Some(json!(id)),
            method: method.to_string(),
            params,
        }
    }

    fn notification(method: &str) -> JsonRpcRequest {
        JsonRpcRequest {
            id: None,
            method: method.to_string(),
            params: None,
        }
    }

    async fn ready_server(dispatcher: Arc<RecordingDispatcher>) -> ToolServer {
        let server = ToolServer::new(catalog_with(dispatcher));
        server.handle(request(1, "initialize", None)).await;
        assert!(server
            .handle(notification("notifications/initialized"))
            .await
            .is_none());
        server
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let server = ToolServer::new(catalog_with(Arc::new(RecordingDispatcher::default())));
        let response = server.handle(request(1, "initialize", None)).await.unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
    }

    #[tokio::test]
    async fn test_calls_before_initialized_are_rejected() {
        let server = ToolServer::new(catalog_with(Arc::new(RecordingDispatcher::default())));
        let response = server.handle(request(2, "tools/list", None)).await.unwrap();
        assert_eq!(response["error"]["code"], -32002);
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = ready_server(Arc::new(RecordingDispatcher::default())).await;
        let response = server.handle(request(3, "tools/list", None)).await.unwrap();
        let tools = response["result"]["tools"].as_array().unwrap();
        assert!(tools.iter().any(|t| t["name"] == "get_posts"));
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
    }

    #[tokio::test]
    async fn test_tool_call_success_and_failure_envelopes() {
        let dispatcher = Arc::new(RecordingDispatcher::default());
        let server = ready_server(dispatcher.clone()).await;

        let ok = server
            .handle(request(
                4,
                "tools/call",
                Some(json!({"name": "get_post", "arguments": {"site": "blog", "post_id": 1}})),
            ))
            .await
            .unwrap();
        assert_eq!(ok["result"]["isError"], false);
        assert_eq!(dispatcher.recorded()[0].endpoint, "posts/1");

        let failed = server
            .handle(request(
                5,
                "tools/call",
                Some(json!({"name": "get_post", "arguments": {"site": "shop", "post_id": 1}})),
            ))
            .await
            .unwrap();
        assert_eq!(failed["result"]["isError"], true);
        let text = failed["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Known sites: blog"));
    }

    #[tokio::test]
    async fn test_tool_call_without_params() {
        let server = ready_server(Arc::new(RecordingDispatcher::default())).await;
        let response = server.handle(request(6, "tools/call", None)).await.unwrap();
        assert_eq!(response["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = ready_server(Arc::new(RecordingDispatcher::default())).await;
        let response = server.handle(request(7, "resources/list", None)).await.unwrap();
        assert_eq!(response["error"]["code"], -32601);
    }
}

use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Boolean,
    IntegerList,
    StringList,
}

impl ParamKind {
    fn schema(&self, description: &str) -> Value {
        match self {
            ParamKind::String => json!({"type": "string", "description": description}),
            ParamKind::Integer => json!({"type": "integer", "description": description}),
            ParamKind::Boolean => json!({"type": "boolean", "description": description}),
            ParamKind::IntegerList => json!({
                "type": "array",
                "items": {"type": "integer"},
                "description": description
            }),
            ParamKind::StringList => json!({
                "type": "array",
                "items": {"type": "string"},
                "description": description
            }),
        }
    }
}

/// tools/list 回傳的一筆工具描述
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolDefinition {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            input_schema: json!({"type": "object", "properties": {}, "required": []}),
        }
    }

    /// 幾乎每個工具的第一個參數
    pub fn site(self) -> Self {
        self.required(
            "site",
            ParamKind::String,
            "Configured site name (see list_sites)",
        )
    }

    pub fn required(mut self, name: &str, kind: ParamKind, description: &str) -> Self {
        self.input_schema["properties"][name] = kind.schema(description);
        if let Some(required) = self.input_schema["required"].as_array_mut() {
            required.push(Value::String(name.to_string()));
        }
        self
    }

    pub fn optional(mut self, name: &str, kind: ParamKind, description: &str) -> Self {
        self.input_schema["properties"][name] = kind.schema(description);
        self
    }

    pub fn paged(self) -> Self {
        self.optional("per_page", ParamKind::Integer, "Items per page (1-100)")
            .optional("page", ParamKind::Integer, "Page number")
            .optional("search", ParamKind::String, "Search term")
    }
}

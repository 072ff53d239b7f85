use clap::Parser;
use serde_json::{json, Value};
use std::sync::Arc;
use wp_multisite::utils::error::{ErrorSeverity, WpError};
use wp_multisite::utils::{logger, validation::Validate, validation::validate_url};
use wp_multisite::{
    CliConfig, Command, ConfigSnapshot, RestDispatcher, SiteRegistry, ToolCatalog, ToolServer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting wp-multisite");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(e);
    }

    let settings = config.settings();
    let snapshot = match ConfigSnapshot::load(config.env_file.as_deref()) {
        Ok(snapshot) => snapshot,
        Err(e) => fail(e),
    };
    if snapshot.is_empty() {
        tracing::warn!("⚠️ Configuration snapshot is empty");
    } else {
        tracing::debug!("Configuration snapshot holds {} keys", snapshot.len());
    }

    let dispatcher = match RestDispatcher::new(settings.timeout) {
        Ok(dispatcher) => dispatcher,
        Err(e) => fail(e),
    };
    tracing::debug!("HTTP timeout: {:?}", dispatcher.timeout());

    let registry = SiteRegistry::resolve(&snapshot, &settings.site_prefix);
    if registry.is_empty() {
        tracing::warn!(
            "⚠️ No complete {}_<NAME>_URL/_USER/_APP_PASSWORD triples found",
            settings.site_prefix
        );
    } else {
        tracing::info!("🌐 Sites configured: {}", registry.names().join(", "));
    }

    let catalog = ToolCatalog::new(
        Arc::new(snapshot),
        settings.site_prefix.clone(),
        Arc::new(dispatcher),
    );

    match config.command() {
        Command::Serve => {
            if let Err(e) = ToolServer::new(catalog).serve_stdio().await {
                fail(e);
            }
        }
        Command::Sites => print_json(&sites_report(&registry)),
        Command::Tools => print_json(&json!(catalog.list_tools())),
        Command::Call { tool, args } => {
            let args: Value = match serde_json::from_str(&args) {
                Ok(args) => args,
                Err(e) => fail(WpError::InvalidArguments {
                    tool: tool.clone(),
                    message: format!("--args is not valid JSON: {}", e),
                }),
            };
            match catalog.call_tool(&tool, args).await {
                Ok(result) => print_json(&result),
                Err(e) => fail(e),
            }
        }
    }

    Ok(())
}

/// 站點概況：只列名稱與網址，並標出看起來有問題的網址
fn sites_report(registry: &SiteRegistry) -> Value {
    let sites: Vec<Value> = registry
        .sites()
        .map(|site| {
            let mut entry = json!({"name": site.name, "base_url": site.base_url});
            if let Err(e) = validate_url(&format!("{}_url", site.name), &site.base_url) {
                entry["warning"] = json!(e.to_string());
            }
            entry
        })
        .collect();
    json!({"sites_configured": registry.len(), "sites": sites})
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

fn fail(e: WpError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

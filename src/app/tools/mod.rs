pub mod definition;

mod comments;
mod media;
mod pages;
mod posts;
mod settings;
mod stats;
mod taxonomy;
mod users;

pub use definition::{ParamKind, ToolDefinition};
pub use stats::{EndpointStat, SiteStats};

use crate::config::SiteRegistry;
use crate::core::resource::Resource;
use crate::domain::model::{ApiResult, RequestSpec, Site};
use crate::domain::ports::{ConfigSource, Dispatcher};
use crate::utils::error::{Result, WpError};
use crate::utils::validation::validate_range;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

const MIN_PER_PAGE: u64 = 1;
const MAX_PER_PAGE: u64 = 100;

/// 工具執行時需要的一切：設定快照、站點前綴、Dispatcher
#[derive(Clone)]
pub struct ToolContext {
    config: Arc<dyn ConfigSource>,
    site_prefix: String,
    dispatcher: Arc<dyn Dispatcher>,
}

impl ToolContext {
    /// 每次呼叫都從快照重算，不做快取
    pub fn registry(&self) -> SiteRegistry {
        SiteRegistry::resolve(self.config.as_ref(), &self.site_prefix)
    }

    pub fn site(&self, name: &str) -> Result<Site> {
        self.registry().get_site(name)
    }

    pub async fn send(&self, spec: RequestSpec) -> Result<ApiResult> {
        Ok(self.dispatcher.dispatch(&spec).await?.body)
    }

    pub(crate) fn dispatcher(&self) -> &dyn Dispatcher {
        self.dispatcher.as_ref()
    }
}

/// 所有具名工具的目錄；每個工具只做參數組裝並呼叫 Dispatcher 一次
#[derive(Clone)]
pub struct ToolCatalog {
    ctx: ToolContext,
}

impl ToolCatalog {
    pub fn new(
        config: Arc<dyn ConfigSource>,
        site_prefix: impl Into<String>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            ctx: ToolContext {
                config,
                site_prefix: site_prefix.into(),
                dispatcher,
            },
        }
    }

    pub fn context(&self) -> &ToolContext {
        &self.ctx
    }

    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        tool_definitions()
    }

    pub async fn call_tool(&self, name: &str, args: Value) -> Result<Value> {
        tracing::debug!("Calling tool '{}'", name);
        let ctx = &self.ctx;

        match name {
            "list_sites" => list_sites(ctx),

            "get_posts" => posts::get_posts(ctx, parse_args(name, args)?).await,
            "get_recent_posts" => posts::get_recent_posts(ctx, parse_args(name, args)?).await,
            "search_posts" => posts::search_posts(ctx, parse_args(name, args)?).await,
            "get_post" => posts::get_post(ctx, parse_args(name, args)?).await,
            "create_post" => posts::create_post(ctx, parse_args(name, args)?).await,
            "update_post" => posts::update_post(ctx, parse_args(name, args)?).await,
            "delete_post" => posts::delete_post(ctx, parse_args(name, args)?).await,

            "get_pages" => pages::get_pages(ctx, parse_args(name, args)?).await,
            "get_page" => pages::get_page(ctx, parse_args(name, args)?).await,
            "create_page" => pages::create_page(ctx, parse_args(name, args)?).await,
            "update_page" => pages::update_page(ctx, parse_args(name, args)?).await,
            "delete_page" => pages::delete_page(ctx, parse_args(name, args)?).await,

            "get_categories" => {
                taxonomy::list_terms(ctx, Resource::Categories, parse_args(name, args)?).await
            }
            "create_category" => {
                taxonomy::create_term(ctx, Resource::Categories, parse_args(name, args)?).await
            }
            "update_category" => {
                taxonomy::update_term(ctx, Resource::Categories, parse_args(name, args)?).await
            }
            "delete_category" => {
                taxonomy::delete_term(ctx, Resource::Categories, parse_args(name, args)?).await
            }
            "get_tags" => taxonomy::list_terms(ctx, Resource::Tags, parse_args(name, args)?).await,
            "create_tag" => {
                taxonomy::create_term(ctx, Resource::Tags, parse_args(name, args)?).await
            }
            "update_tag" => {
                taxonomy::update_term(ctx, Resource::Tags, parse_args(name, args)?).await
            }
            "delete_tag" => {
                taxonomy::delete_term(ctx, Resource::Tags, parse_args(name, args)?).await
            }
            "get_taxonomies" => taxonomy::get_taxonomies(ctx, parse_args(name, args)?).await,
            "get_taxonomy" => taxonomy::get_taxonomy(ctx, parse_args(name, args)?).await,
            "get_post_types" => taxonomy::get_post_types(ctx, parse_args(name, args)?).await,

            "get_comments" => comments::get_comments(ctx, parse_args(name, args)?).await,
            "get_comment" => comments::get_comment(ctx, parse_args(name, args)?).await,
            "create_comment" => comments::create_comment(ctx, parse_args(name, args)?).await,
            "update_comment" => comments::update_comment(ctx, parse_args(name, args)?).await,
            "delete_comment" => comments::delete_comment(ctx, parse_args(name, args)?).await,

            "get_media" => media::get_media(ctx, parse_args(name, args)?).await,
            "get_media_item" => media::get_media_item(ctx, parse_args(name, args)?).await,
            "update_media" => media::update_media(ctx, parse_args(name, args)?).await,
            "delete_media" => media::delete_media(ctx, parse_args(name, args)?).await,

            "get_users" => users::get_users(ctx, parse_args(name, args)?).await,
            "get_user" => users::get_user(ctx, parse_args(name, args)?).await,
            "get_current_user" => users::get_current_user(ctx, parse_args(name, args)?).await,

            "get_settings" => settings::get_settings(ctx, parse_args(name, args)?).await,
            "update_settings" => settings::update_settings(ctx, parse_args(name, args)?).await,

            "get_site_stats" => {
                let args: SiteArgs = parse_args(name, args)?;
                let report = stats::collect_site_stats(ctx, &args.site).await?;
                Ok(serde_json::to_value(report)?)
            }

            _ => Err(WpError::UnknownTool(name.to_string())),
        }
    }
}

pub fn tool_definitions() -> Vec<ToolDefinition> {
    let mut defs = vec![ToolDefinition::new(
        "list_sites",
        "List the configured WordPress sites",
    )];
    defs.extend(posts::definitions());
    defs.extend(pages::definitions());
    defs.extend(taxonomy::definitions());
    defs.extend(comments::definitions());
    defs.extend(media::definitions());
    defs.extend(users::definitions());
    defs.extend(settings::definitions());
    defs.push(
        ToolDefinition::new(
            "get_site_stats",
            "Count posts, pages, categories, tags and media on a site",
        )
        .site(),
    );
    defs
}

/// 只帶站點名稱的工具參數
#[derive(Debug, Deserialize)]
pub(crate) struct SiteArgs {
    pub site: String,
}

fn list_sites(ctx: &ToolContext) -> Result<Value> {
    let registry = ctx.registry();
    let sites: Vec<Value> = registry
        .sites()
        .map(|site| json!({"name": site.name, "base_url": site.base_url}))
        .collect();
    Ok(json!({
        "sites_configured": registry.len(),
        "sites": sites,
    }))
}

/// 把 JSON 參數解析成該工具的型別；`null` 視為空物件
pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| WpError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

/// WordPress 單頁上限是 100
pub(crate) fn check_per_page(tool: &str, per_page: Option<u64>) -> Result<()> {
    let Some(n) = per_page else {
        return Ok(());
    };
    validate_range("per_page", n, MIN_PER_PAGE, MAX_PER_PAGE).map_err(|e| match e {
        WpError::InvalidConfigValueError { field, value, reason } => WpError::InvalidArguments {
            tool: tool.to_string(),
            message: format!("{} {}: {}", field, value, reason),
        },
        other => other,
    })
}

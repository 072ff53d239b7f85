use super::{ParamKind, SiteArgs, ToolContext, ToolDefinition};
use crate::core::params::Params;
use crate::core::resource::Resource;
use crate::utils::error::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct UpdateSettingsArgs {
    site: String,
    title: Option<String>,
    description: Option<String>,
    timezone: Option<String>,
    date_format: Option<String>,
    time_format: Option<String>,
    start_of_week: Option<u64>,
    language: Option<String>,
    posts_per_page: Option<u64>,
    default_category: Option<u64>,
    default_comment_status: Option<String>,
}

pub(super) async fn get_settings(ctx: &ToolContext, args: SiteArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    ctx.send(Resource::Settings.list(site, Params::new())).await
}

pub(super) async fn update_settings(ctx: &ToolContext, args: UpdateSettingsArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .set("title", args.title)
        .set("description", args.description)
        .set("timezone", args.timezone)
        .set("date_format", args.date_format)
        .set("time_format", args.time_format)
        .set("start_of_week", args.start_of_week)
        .set("language", args.language)
        .set("posts_per_page", args.posts_per_page)
        .set("default_category", args.default_category)
        .set("default_comment_status", args.default_comment_status);
    ctx.send(Resource::Settings.update_singleton(site, body)).await
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("get_settings", "Read the site settings").site(),
        ToolDefinition::new("update_settings", "Change site settings")
            .site()
            .optional("title", ParamKind::String, "Site title")
            .optional("description", ParamKind::String, "Tagline")
            .optional("timezone", ParamKind::String, "e.g. Australia/Sydney")
            .optional("date_format", ParamKind::String, "PHP date format")
            .optional("time_format", ParamKind::String, "PHP time format")
            .optional("start_of_week", ParamKind::Integer, "0 = Sunday")
            .optional("language", ParamKind::String, "Locale, e.g. en_AU")
            .optional("posts_per_page", ParamKind::Integer, "Blog pages show at most")
            .optional("default_category", ParamKind::Integer, "Default post category id")
            .optional("default_comment_status", ParamKind::String, "open or closed"),
    ]
}

use super::{check_per_page, ParamKind, SiteArgs, ToolContext, ToolDefinition};
use crate::core::params::Params;
use crate::core::resource::Resource;
use crate::utils::error::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct GetUsersArgs {
    site: String,
    per_page: Option<u64>,
    page: Option<u64>,
    search: Option<String>,
    roles: Option<Vec<String>>,
    context: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserIdArgs {
    site: String,
    user_id: u64,
}

pub(super) async fn get_users(ctx: &ToolContext, args: GetUsersArgs) -> Result<Value> {
    check_per_page("get_users", args.per_page)?;
    let site = ctx.site(&args.site)?;
    let query = Params::new()
        .set("per_page", args.per_page)
        .set("page", args.page)
        .set("search", args.search)
        .set("roles", args.roles)
        .set("context", args.context);
    ctx.send(Resource::Users.list(site, query)).await
}

pub(super) async fn get_user(ctx: &ToolContext, args: UserIdArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    ctx.send(Resource::Users.get(site, args.user_id)).await
}

/// 以設定的帳號身分查詢自己，可用來確認憑證有效
pub(super) async fn get_current_user(ctx: &ToolContext, args: SiteArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    ctx.send(Resource::Users.get(site, "me")).await
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("get_users", "List users")
            .site()
            .paged()
            .optional("roles", ParamKind::StringList, "Only users with these roles")
            .optional("context", ParamKind::String, "view, embed or edit"),
        ToolDefinition::new("get_user", "Fetch a user by id")
            .site()
            .required("user_id", ParamKind::Integer, "User id"),
        ToolDefinition::new(
            "get_current_user",
            "Fetch the account the site credentials belong to",
        )
        .site(),
    ]
}

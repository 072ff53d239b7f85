use super::{check_per_page, ParamKind, ToolContext, ToolDefinition};
use crate::core::params::Params;
use crate::core::resource::Resource;
use crate::utils::error::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct GetPagesArgs {
    site: String,
    per_page: Option<u64>,
    page: Option<u64>,
    search: Option<String>,
    status: Option<String>,
    parent: Option<u64>,
    orderby: Option<String>,
    order: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PageIdArgs {
    site: String,
    page_id: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreatePageArgs {
    site: String,
    title: String,
    content: String,
    status: Option<String>,
    excerpt: Option<String>,
    slug: Option<String>,
    parent: Option<u64>,
    menu_order: Option<i64>,
    template: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdatePageArgs {
    site: String,
    page_id: u64,
    title: Option<String>,
    content: Option<String>,
    status: Option<String>,
    excerpt: Option<String>,
    slug: Option<String>,
    parent: Option<u64>,
    menu_order: Option<i64>,
    template: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeletePageArgs {
    site: String,
    page_id: u64,
    force: Option<bool>,
}

pub(super) async fn get_pages(ctx: &ToolContext, args: GetPagesArgs) -> Result<Value> {
    check_per_page("get_pages", args.per_page)?;
    let site = ctx.site(&args.site)?;
    let query = Params::new()
        .set("per_page", args.per_page)
        .set("page", args.page)
        .set("search", args.search)
        .set("status", args.status)
        .set("parent", args.parent)
        .set("orderby", args.orderby)
        .set("order", args.order);
    ctx.send(Resource::Pages.list(site, query)).await
}

pub(super) async fn get_page(ctx: &ToolContext, args: PageIdArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    ctx.send(Resource::Pages.get(site, args.page_id)).await
}

pub(super) async fn create_page(ctx: &ToolContext, args: CreatePageArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .put("title", args.title)
        .put("content", args.content)
        .set("status", args.status)
        .set("excerpt", args.excerpt)
        .set("slug", args.slug)
        .set("parent", args.parent)
        .set("menu_order", args.menu_order)
        .set("template", args.template);
    ctx.send(Resource::Pages.create(site, body)).await
}

pub(super) async fn update_page(ctx: &ToolContext, args: UpdatePageArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .set("title", args.title)
        .set("content", args.content)
        .set("status", args.status)
        .set("excerpt", args.excerpt)
        .set("slug", args.slug)
        .set("parent", args.parent)
        .set("menu_order", args.menu_order)
        .set("template", args.template);
    ctx.send(Resource::Pages.update(site, args.page_id, body)).await
}

pub(super) async fn delete_page(ctx: &ToolContext, args: DeletePageArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let query = Params::new().set("force", args.force);
    ctx.send(Resource::Pages.delete(site, args.page_id, query)).await
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("get_pages", "List pages")
            .site()
            .paged()
            .optional("status", ParamKind::String, "publish, draft, pending or private")
            .optional("parent", ParamKind::Integer, "Parent page id (0 for top level)")
            .optional("orderby", ParamKind::String, "date, title, menu_order, ...")
            .optional("order", ParamKind::String, "asc or desc"),
        ToolDefinition::new("get_page", "Fetch a page by id")
            .site()
            .required("page_id", ParamKind::Integer, "Page id"),
        ToolDefinition::new("create_page", "Create a page")
            .site()
            .required("title", ParamKind::String, "Page title")
            .required("content", ParamKind::String, "Page content (HTML)")
            .optional("status", ParamKind::String, "publish, draft, pending or private")
            .optional("excerpt", ParamKind::String, "Excerpt")
            .optional("slug", ParamKind::String, "URL slug")
            .optional("parent", ParamKind::Integer, "Parent page id (0 for top level)")
            .optional("menu_order", ParamKind::Integer, "Menu order")
            .optional("template", ParamKind::String, "Theme template file"),
        ToolDefinition::new("update_page", "Update fields of an existing page")
            .site()
            .required("page_id", ParamKind::Integer, "Page id")
            .optional("title", ParamKind::String, "Page title")
            .optional("content", ParamKind::String, "Page content (HTML)")
            .optional("status", ParamKind::String, "publish, draft, pending or private")
            .optional("excerpt", ParamKind::String, "Excerpt")
            .optional("slug", ParamKind::String, "URL slug")
            .optional("parent", ParamKind::Integer, "Parent page id (0 for top level)")
            .optional("menu_order", ParamKind::Integer, "Menu order")
            .optional("template", ParamKind::String, "Theme template file"),
        ToolDefinition::new("delete_page", "Trash a page, or delete it permanently with force")
            .site()
            .required("page_id", ParamKind::Integer, "Page id")
            .optional("force", ParamKind::Boolean, "Bypass the trash"),
    ]
}

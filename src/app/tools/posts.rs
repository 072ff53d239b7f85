use super::{check_per_page, ParamKind, ToolContext, ToolDefinition};
use crate::core::params::Params;
use crate::core::resource::Resource;
use crate::core::shaper::summarize_value;
use crate::utils::error::Result;
use serde::Deserialize;
use serde_json::Value;

const DEFAULT_RECENT_COUNT: u64 = 5;

#[derive(Debug, Deserialize)]
pub(super) struct GetPostsArgs {
    site: String,
    per_page: Option<u64>,
    page: Option<u64>,
    search: Option<String>,
    status: Option<String>,
    categories: Option<Vec<u64>>,
    tags: Option<Vec<u64>>,
    author: Option<u64>,
    orderby: Option<String>,
    order: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RecentPostsArgs {
    site: String,
    count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchPostsArgs {
    site: String,
    query: String,
    per_page: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PostIdArgs {
    site: String,
    post_id: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreatePostArgs {
    site: String,
    title: String,
    content: String,
    status: Option<String>,
    excerpt: Option<String>,
    slug: Option<String>,
    categories: Option<Vec<u64>>,
    tags: Option<Vec<u64>>,
    author: Option<u64>,
    featured_media: Option<u64>,
    sticky: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdatePostArgs {
    site: String,
    post_id: u64,
    title: Option<String>,
    content: Option<String>,
    status: Option<String>,
    excerpt: Option<String>,
    slug: Option<String>,
    categories: Option<Vec<u64>>,
    tags: Option<Vec<u64>>,
    author: Option<u64>,
    featured_media: Option<u64>,
    sticky: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeletePostArgs {
    site: String,
    post_id: u64,
    force: Option<bool>,
}

pub(super) async fn get_posts(ctx: &ToolContext, args: GetPostsArgs) -> Result<Value> {
    check_per_page("get_posts", args.per_page)?;
    let site = ctx.site(&args.site)?;
    let query = Params::new()
        .set("per_page", args.per_page)
        .set("page", args.page)
        .set("search", args.search)
        .set("status", args.status)
        .set("categories", args.categories)
        .set("tags", args.tags)
        .set("author", args.author)
        .set("orderby", args.orderby)
        .set("order", args.order);
    ctx.send(Resource::Posts.list(site, query)).await
}

/// 最新文章的精簡摘要（含作者與分類名稱）
pub(super) async fn get_recent_posts(ctx: &ToolContext, args: RecentPostsArgs) -> Result<Value> {
    let count = args.count.unwrap_or(DEFAULT_RECENT_COUNT);
    check_per_page("get_recent_posts", Some(count))?;
    let site = ctx.site(&args.site)?;
    let query = Params::new()
        .put("per_page", count)
        .put("orderby", "date")
        .put("order", "desc")
        .put("_embed", true);
    let posts = ctx.send(Resource::Posts.list(site, query)).await?;
    Ok(serde_json::to_value(summarize_value(&posts))?)
}

pub(super) async fn search_posts(ctx: &ToolContext, args: SearchPostsArgs) -> Result<Value> {
    check_per_page("search_posts", args.per_page)?;
    let site = ctx.site(&args.site)?;
    let query = Params::new()
        .put("search", args.query)
        .set("per_page", args.per_page)
        .put("_embed", true);
    let posts = ctx.send(Resource::Posts.list(site, query)).await?;
    Ok(serde_json::to_value(summarize_value(&posts))?)
}

pub(super) async fn get_post(ctx: &ToolContext, args: PostIdArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    ctx.send(Resource::Posts.get(site, args.post_id)).await
}

pub(super) async fn create_post(ctx: &ToolContext, args: CreatePostArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .put("title", args.title)
        .put("content", args.content)
        .set("status", args.status)
        .set("excerpt", args.excerpt)
        .set("slug", args.slug)
        .set("categories", args.categories)
        .set("tags", args.tags)
        .set("author", args.author)
        .set("featured_media", args.featured_media)
        .set("sticky", args.sticky);
    let created = ctx.send(Resource::Posts.create(site, body)).await?;
    tracing::info!("📝 Created post {} on site '{}'", created["id"], args.site);
    Ok(created)
}

pub(super) async fn update_post(ctx: &ToolContext, args: UpdatePostArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .set("title", args.title)
        .set("content", args.content)
        .set("status", args.status)
        .set("excerpt", args.excerpt)
        .set("slug", args.slug)
        .set("categories", args.categories)
        .set("tags", args.tags)
        .set("author", args.author)
        .set("featured_media", args.featured_media)
        .set("sticky", args.sticky);
    ctx.send(Resource::Posts.update(site, args.post_id, body)).await
}

pub(super) async fn delete_post(ctx: &ToolContext, args: DeletePostArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let query = Params::new().set("force", args.force);
    ctx.send(Resource::Posts.delete(site, args.post_id, query)).await
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("get_posts", "List posts with optional filters")
            .site()
            .paged()
            .optional("status", ParamKind::String, "publish, draft, pending, private or future")
            .optional("categories", ParamKind::IntegerList, "Category ids")
            .optional("tags", ParamKind::IntegerList, "Tag ids")
            .optional("author", ParamKind::Integer, "Author user id")
            .optional("orderby", ParamKind::String, "date, title, id, modified, ...")
            .optional("order", ParamKind::String, "asc or desc"),
        ToolDefinition::new(
            "get_recent_posts",
            "Summaries (title, author, categories) of the most recent posts",
        )
        .site()
        .optional("count", ParamKind::Integer, "Number of posts (default 5)"),
        ToolDefinition::new("search_posts", "Search posts and return summaries")
            .site()
            .required("query", ParamKind::String, "Search term")
            .optional("per_page", ParamKind::Integer, "Items per page (1-100)"),
        ToolDefinition::new("get_post", "Fetch a post by id")
            .site()
            .required("post_id", ParamKind::Integer, "Post id"),
        ToolDefinition::new("create_post", "Create a post")
            .site()
            .required("title", ParamKind::String, "Post title")
            .required("content", ParamKind::String, "Post content (HTML)")
            .optional("status", ParamKind::String, "publish, draft, pending, private or future")
            .optional("excerpt", ParamKind::String, "Excerpt")
            .optional("slug", ParamKind::String, "URL slug")
            .optional("categories", ParamKind::IntegerList, "Category ids")
            .optional("tags", ParamKind::IntegerList, "Tag ids")
            .optional("author", ParamKind::Integer, "Author user id")
            .optional("featured_media", ParamKind::Integer, "Featured image media id")
            .optional("sticky", ParamKind::Boolean, "Keep the post sticky"),
        ToolDefinition::new("update_post", "Update fields of an existing post")
            .site()
            .required("post_id", ParamKind::Integer, "Post id")
            .optional("title", ParamKind::String, "Post title")
            .optional("content", ParamKind::String, "Post content (HTML)")
            .optional("status", ParamKind::String, "publish, draft, pending, private or future")
            .optional("excerpt", ParamKind::String, "Excerpt")
            .optional("slug", ParamKind::String, "URL slug")
            .optional("categories", ParamKind::IntegerList, "Category ids")
            .optional("tags", ParamKind::IntegerList, "Tag ids")
            .optional("author", ParamKind::Integer, "Author user id")
            .optional("featured_media", ParamKind::Integer, "Featured image media id")
            .optional("sticky", ParamKind::Boolean, "Keep the post sticky"),
        ToolDefinition::new("delete_post", "Trash a post, or delete it permanently with force")
            .site()
            .required("post_id", ParamKind::Integer, "Post id")
            .optional("force", ParamKind::Boolean, "Bypass the trash"),
    ]
}

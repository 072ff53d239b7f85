use super::{check_per_page, ParamKind, ToolContext, ToolDefinition};
use crate::core::params::Params;
use crate::core::resource::Resource;
use crate::utils::error::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct GetCommentsArgs {
    site: String,
    per_page: Option<u64>,
    page: Option<u64>,
    search: Option<String>,
    post: Option<u64>,
    status: Option<String>,
    parent: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CommentIdArgs {
    site: String,
    comment_id: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateCommentArgs {
    site: String,
    post: u64,
    content: String,
    author_name: Option<String>,
    author_email: Option<String>,
    parent: Option<u64>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdateCommentArgs {
    site: String,
    comment_id: u64,
    content: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeleteCommentArgs {
    site: String,
    comment_id: u64,
    force: Option<bool>,
}

pub(super) async fn get_comments(ctx: &ToolContext, args: GetCommentsArgs) -> Result<Value> {
    check_per_page("get_comments", args.per_page)?;
    let site = ctx.site(&args.site)?;
    let query = Params::new()
        .set("per_page", args.per_page)
        .set("page", args.page)
        .set("search", args.search)
        .set("post", args.post)
        .set("status", args.status)
        .set("parent", args.parent);
    ctx.send(Resource::Comments.list(site, query)).await
}

pub(super) async fn get_comment(ctx: &ToolContext, args: CommentIdArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    ctx.send(Resource::Comments.get(site, args.comment_id)).await
}

pub(super) async fn create_comment(ctx: &ToolContext, args: CreateCommentArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .put("post", args.post)
        .put("content", args.content)
        .set("author_name", args.author_name)
        .set("author_email", args.author_email)
        .set("parent", args.parent)
        .set("status", args.status);
    ctx.send(Resource::Comments.create(site, body)).await
}

pub(super) async fn update_comment(ctx: &ToolContext, args: UpdateCommentArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .set("content", args.content)
        .set("status", args.status);
    ctx.send(Resource::Comments.update(site, args.comment_id, body)).await
}

pub(super) async fn delete_comment(ctx: &ToolContext, args: DeleteCommentArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let query = Params::new().set("force", args.force);
    ctx.send(Resource::Comments.delete(site, args.comment_id, query)).await
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("get_comments", "List comments")
            .site()
            .paged()
            .optional("post", ParamKind::Integer, "Only comments on this post")
            .optional("status", ParamKind::String, "approve, hold, spam or trash")
            .optional("parent", ParamKind::Integer, "Parent comment id"),
        ToolDefinition::new("get_comment", "Fetch a comment by id")
            .site()
            .required("comment_id", ParamKind::Integer, "Comment id"),
        ToolDefinition::new("create_comment", "Add a comment to a post")
            .site()
            .required("post", ParamKind::Integer, "Post id")
            .required("content", ParamKind::String, "Comment text")
            .optional("author_name", ParamKind::String, "Display name")
            .optional("author_email", ParamKind::String, "Email address")
            .optional("parent", ParamKind::Integer, "Parent comment id for replies")
            .optional("status", ParamKind::String, "approve or hold"),
        ToolDefinition::new("update_comment", "Edit or moderate a comment")
            .site()
            .required("comment_id", ParamKind::Integer, "Comment id")
            .optional("content", ParamKind::String, "Comment text")
            .optional("status", ParamKind::String, "approve, hold, spam or trash"),
        ToolDefinition::new("delete_comment", "Trash a comment, or delete it with force")
            .site()
            .required("comment_id", ParamKind::Integer, "Comment id")
            .optional("force", ParamKind::Boolean, "Bypass the trash"),
    ]
}

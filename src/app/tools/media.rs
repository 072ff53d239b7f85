use super::{check_per_page, ParamKind, ToolContext, ToolDefinition};
use crate::core::params::Params;
use crate::core::resource::Resource;
use crate::utils::error::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct GetMediaArgs {
    site: String,
    per_page: Option<u64>,
    page: Option<u64>,
    search: Option<String>,
    media_type: Option<String>,
    mime_type: Option<String>,
    parent: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MediaIdArgs {
    site: String,
    media_id: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdateMediaArgs {
    site: String,
    media_id: u64,
    title: Option<String>,
    alt_text: Option<String>,
    caption: Option<String>,
    description: Option<String>,
    post: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeleteMediaArgs {
    site: String,
    media_id: u64,
    force: Option<bool>,
}

pub(super) async fn get_media(ctx: &ToolContext, args: GetMediaArgs) -> Result<Value> {
    check_per_page("get_media", args.per_page)?;
    let site = ctx.site(&args.site)?;
    let query = Params::new()
        .set("per_page", args.per_page)
        .set("page", args.page)
        .set("search", args.search)
        .set("media_type", args.media_type)
        .set("mime_type", args.mime_type)
        .set("parent", args.parent);
    ctx.send(Resource::Media.list(site, query)).await
}

pub(super) async fn get_media_item(ctx: &ToolContext, args: MediaIdArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    ctx.send(Resource::Media.get(site, args.media_id)).await
}

pub(super) async fn update_media(ctx: &ToolContext, args: UpdateMediaArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .set("title", args.title)
        .set("alt_text", args.alt_text)
        .set("caption", args.caption)
        .set("description", args.description)
        .set("post", args.post);
    ctx.send(Resource::Media.update(site, args.media_id, body)).await
}

/// 附件同樣不能丟進垃圾桶，force 預設 true
pub(super) async fn delete_media(ctx: &ToolContext, args: DeleteMediaArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let query = Params::new().put("force", args.force.unwrap_or(true));
    ctx.send(Resource::Media.delete(site, args.media_id, query)).await
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("get_media", "List media library items")
            .site()
            .paged()
            .optional("media_type", ParamKind::String, "image, video, audio, application or text")
            .optional("mime_type", ParamKind::String, "Exact MIME type")
            .optional("parent", ParamKind::Integer, "Attached post id"),
        ToolDefinition::new("get_media_item", "Fetch a media item by id")
            .site()
            .required("media_id", ParamKind::Integer, "Media id"),
        ToolDefinition::new("update_media", "Update media metadata")
            .site()
            .required("media_id", ParamKind::Integer, "Media id")
            .optional("title", ParamKind::String, "Title")
            .optional("alt_text", ParamKind::String, "Alternative text")
            .optional("caption", ParamKind::String, "Caption")
            .optional("description", ParamKind::String, "Description")
            .optional("post", ParamKind::Integer, "Attach to this post id"),
        ToolDefinition::new("delete_media", "Delete a media item permanently")
            .site()
            .required("media_id", ParamKind::Integer, "Media id")
            .optional("force", ParamKind::Boolean, "Defaults to true; media cannot be trashed"),
    ]
}

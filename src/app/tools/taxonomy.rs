use super::{check_per_page, ParamKind, SiteArgs, ToolContext, ToolDefinition};
use crate::core::params::Params;
use crate::core::resource::Resource;
use crate::utils::error::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct ListTermsArgs {
    site: String,
    per_page: Option<u64>,
    page: Option<u64>,
    search: Option<String>,
    hide_empty: Option<bool>,
    parent: Option<u64>,
    post: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateTermArgs {
    site: String,
    name: String,
    description: Option<String>,
    slug: Option<String>,
    parent: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UpdateTermArgs {
    site: String,
    term_id: u64,
    name: Option<String>,
    description: Option<String>,
    slug: Option<String>,
    parent: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DeleteTermArgs {
    site: String,
    term_id: u64,
    force: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TaxonomiesArgs {
    site: String,
    post_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TaxonomyArgs {
    site: String,
    taxonomy: String,
}

// categories 與 tags 共用同一組實作，只差在 Resource
pub(super) async fn list_terms(
    ctx: &ToolContext,
    resource: Resource,
    args: ListTermsArgs,
) -> Result<Value> {
    check_per_page(resource.path(), args.per_page)?;
    let site = ctx.site(&args.site)?;
    let query = Params::new()
        .set("per_page", args.per_page)
        .set("page", args.page)
        .set("search", args.search)
        .set("hide_empty", args.hide_empty)
        .set("parent", args.parent)
        .set("post", args.post);
    ctx.send(resource.list(site, query)).await
}

pub(super) async fn create_term(
    ctx: &ToolContext,
    resource: Resource,
    args: CreateTermArgs,
) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .put("name", args.name)
        .set("description", args.description)
        .set("slug", args.slug)
        .set("parent", args.parent);
    ctx.send(resource.create(site, body)).await
}

pub(super) async fn update_term(
    ctx: &ToolContext,
    resource: Resource,
    args: UpdateTermArgs,
) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let body = Params::new()
        .set("name", args.name)
        .set("description", args.description)
        .set("slug", args.slug)
        .set("parent", args.parent);
    ctx.send(resource.update(site, args.term_id, body)).await
}

/// WordPress 的 term 不支援丟進垃圾桶，未指定時 force 預設為 true
pub(super) async fn delete_term(
    ctx: &ToolContext,
    resource: Resource,
    args: DeleteTermArgs,
) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let query = Params::new().put("force", args.force.unwrap_or(true));
    ctx.send(resource.delete(site, args.term_id, query)).await
}

pub(super) async fn get_taxonomies(ctx: &ToolContext, args: TaxonomiesArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    let query = Params::new().set("type", args.post_type);
    ctx.send(Resource::Taxonomies.list(site, query)).await
}

pub(super) async fn get_taxonomy(ctx: &ToolContext, args: TaxonomyArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    ctx.send(Resource::Taxonomies.get(site, args.taxonomy)).await
}

pub(super) async fn get_post_types(ctx: &ToolContext, args: SiteArgs) -> Result<Value> {
    let site = ctx.site(&args.site)?;
    ctx.send(Resource::Types.list(site, Params::new())).await
}

fn term_definitions(
    list: &'static str,
    create: &'static str,
    update: &'static str,
    delete: &'static str,
    noun: &str,
) -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(list, "List terms of this taxonomy")
            .site()
            .paged()
            .optional("hide_empty", ParamKind::Boolean, "Skip terms without posts")
            .optional("parent", ParamKind::Integer, "Parent term id")
            .optional("post", ParamKind::Integer, "Only terms assigned to this post"),
        ToolDefinition::new(create, "Create a term")
            .site()
            .required("name", ParamKind::String, &format!("{} name", noun))
            .optional("description", ParamKind::String, "Description")
            .optional("slug", ParamKind::String, "URL slug")
            .optional("parent", ParamKind::Integer, "Parent term id"),
        ToolDefinition::new(update, "Update a term")
            .site()
            .required("term_id", ParamKind::Integer, &format!("{} id", noun))
            .optional("name", ParamKind::String, &format!("{} name", noun))
            .optional("description", ParamKind::String, "Description")
            .optional("slug", ParamKind::String, "URL slug")
            .optional("parent", ParamKind::Integer, "Parent term id"),
        ToolDefinition::new(delete, "Delete a term permanently")
            .site()
            .required("term_id", ParamKind::Integer, &format!("{} id", noun))
            .optional("force", ParamKind::Boolean, "Defaults to true; terms cannot be trashed"),
    ]
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    let mut defs = term_definitions(
        "get_categories",
        "create_category",
        "update_category",
        "delete_category",
        "Category",
    );
    defs.extend(term_definitions(
        "get_tags",
        "create_tag",
        "update_tag",
        "delete_tag",
        "Tag",
    ));
    defs.push(
        ToolDefinition::new("get_taxonomies", "List registered taxonomies")
            .site()
            .optional("post_type", ParamKind::String, "Limit to taxonomies of this post type"),
    );
    defs.push(
        ToolDefinition::new("get_taxonomy", "Fetch a taxonomy by slug")
            .site()
            .required("taxonomy", ParamKind::String, "Taxonomy slug, e.g. category"),
    );
    defs.push(ToolDefinition::new("get_post_types", "List registered post types").site());
    defs
}

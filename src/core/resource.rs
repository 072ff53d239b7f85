use crate::core::params::Params;
use crate::domain::model::{HttpMethod, RequestSpec, Site};
use std::fmt;

/// WordPress REST 資源種類；端點字串只在這裡出現
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Posts,
    Pages,
    Categories,
    Tags,
    Comments,
    Media,
    Users,
    Taxonomies,
    Types,
    Settings,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Posts => "posts",
            Resource::Pages => "pages",
            Resource::Categories => "categories",
            Resource::Tags => "tags",
            Resource::Comments => "comments",
            Resource::Media => "media",
            Resource::Users => "users",
            Resource::Taxonomies => "taxonomies",
            Resource::Types => "types",
            Resource::Settings => "settings",
        }
    }

    /// id 一律編碼成單一路徑段，`/`、`?`、`#` 不會改變 URL 結構
    fn item_path(&self, id: impl fmt::Display) -> String {
        format!("{}/{}", self.path(), urlencoding::encode(&id.to_string()))
    }

    /// GET 集合
    pub fn list(&self, site: Site, query: Params) -> RequestSpec {
        RequestSpec::new(site, self.path()).with_query(query.into_map())
    }

    /// GET 單筆；`id` 可以是數字、slug 或 `me`
    pub fn get(&self, site: Site, id: impl fmt::Display) -> RequestSpec {
        RequestSpec::new(site, self.item_path(id))
    }

    pub fn create(&self, site: Site, body: Params) -> RequestSpec {
        RequestSpec::new(site, self.path())
            .with_method(HttpMethod::Post)
            .with_body(body.into_value())
    }

    pub fn update(&self, site: Site, id: impl fmt::Display, body: Params) -> RequestSpec {
        RequestSpec::new(site, self.item_path(id))
            .with_method(HttpMethod::Post)
            .with_body(body.into_value())
    }

    pub fn delete(&self, site: Site, id: impl fmt::Display, query: Params) -> RequestSpec {
        RequestSpec::new(site, self.item_path(id))
            .with_method(HttpMethod::Delete)
            .with_query(query.into_map())
    }

    /// settings 這類沒有 id 的單例資源的更新
    pub fn update_singleton(&self, site: Site, body: Params) -> RequestSpec {
        RequestSpec::new(site, self.path())
            .with_method(HttpMethod::Post)
            .with_body(body.into_value())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

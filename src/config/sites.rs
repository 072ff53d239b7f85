use crate::domain::model::Site;
use crate::domain::ports::ConfigSource;
use crate::utils::error::{Result, WpError, REQUIRED_SITE_KEYS};
use std::collections::BTreeMap;

pub const DEFAULT_SITE_PREFIX: &str = "SITE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SitePart {
    Url,
    User,
    Secret,
}

#[derive(Debug, Default)]
struct SiteParts {
    url: Option<String>,
    user: Option<String>,
    secret: Option<String>,
}

impl SiteParts {
    fn slot(&mut self, part: SitePart) -> &mut Option<String> {
        match part {
            SitePart::Url => &mut self.url,
            SitePart::User => &mut self.user,
            SitePart::Secret => &mut self.secret,
        }
    }
}

/// 解析 `PREFIX_<NAME>_<SUFFIX>`，回傳 (NAME, 部分)
fn parse_key<'a>(key: &'a str, prefix: &str) -> Option<(&'a str, SitePart)> {
    let rest = key.strip_prefix(prefix)?.strip_prefix('_')?;

    // APP_PASSWORD 要先比對，避免名稱被切錯
    let (name, part) = if let Some(name) = rest.strip_suffix(REQUIRED_SITE_KEYS[2]) {
        (name, SitePart::Secret)
    } else if let Some(name) = rest.strip_suffix(REQUIRED_SITE_KEYS[1]) {
        (name, SitePart::User)
    } else if let Some(name) = rest.strip_suffix(REQUIRED_SITE_KEYS[0]) {
        (name, SitePart::Url)
    } else {
        return None;
    };

    if name.is_empty() {
        None
    } else {
        Some((name, part))
    }
}

/// 從設定來源推導所有完整的站點，key 為小寫名稱。
///
/// 只有 URL、USER、APP_PASSWORD 三者皆存在且非空時才會產生站點；
/// 不完整的群組直接忽略。
pub fn resolve_sites(source: &dyn ConfigSource, prefix: &str) -> BTreeMap<String, Site> {
    let mut entries = source.entries();
    entries.sort();

    let mut groups: BTreeMap<String, SiteParts> = BTreeMap::new();
    for (key, value) in entries {
        let Some((name, part)) = parse_key(&key, prefix) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let normalized = name.to_lowercase();
        let slot = groups.entry(normalized.clone()).or_default().slot(part);
        if slot.is_some() {
            tracing::warn!(
                "Duplicate configuration key {} for site '{}', keeping the first value",
                key,
                normalized
            );
            continue;
        }
        *slot = Some(value.to_string());
    }

    let mut sites = BTreeMap::new();
    for (name, parts) in groups {
        match parts {
            SiteParts {
                url: Some(url),
                user: Some(user),
                secret: Some(secret),
            } => {
                sites.insert(name.clone(), Site::new(name, url, user, secret));
            }
            _ => tracing::debug!("Ignoring incomplete site configuration '{}'", name),
        }
    }
    sites
}

/// 某一時刻的站點清單；每次呼叫都由設定快照重新計算
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    prefix: String,
    sites: BTreeMap<String, Site>,
}

impl SiteRegistry {
    pub fn resolve(source: &dyn ConfigSource, prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            sites: resolve_sites(source, prefix),
        }
    }

    pub fn get_site(&self, name: &str) -> Result<Site> {
        if self.sites.is_empty() {
            return Err(WpError::NoSitesConfigured {
                prefix: self.prefix.clone(),
            });
        }

        self.sites
            .get(&name.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| WpError::UnknownSite {
                name: name.to_string(),
                known: self.names(),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.sites.keys().cloned().collect()
    }

    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

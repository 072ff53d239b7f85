use crate::domain::ports::ConfigSource;
use crate::utils::error::{Result, WpError};
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_ENV_FILE: &str = ".env";

/// 啟動時擷取一次的設定快照，之後整個程序期間不再變動
#[derive(Debug, Clone, Default)]
pub struct ConfigSnapshot {
    values: BTreeMap<String, String>,
}

impl ConfigSnapshot {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 讀取 dotenv 檔案再疊上程序環境變數（環境變數優先）。
    ///
    /// 明確指定的檔案不存在時報錯；預設的 `./.env` 不存在則略過。
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let mut values = match env_file {
            Some(path) => read_env_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_ENV_FILE);
                if default_path.exists() {
                    read_env_file(default_path)?
                } else {
                    BTreeMap::new()
                }
            }
        };

        // 非 UTF-8 的環境變數不可能是站點設定，直接略過
        values.extend(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        );
        tracing::debug!("Loaded configuration snapshot with {} keys", values.len());

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for ConfigSnapshot {
    fn entries(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

fn read_env_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| WpError::ConfigError {
        message: format!("Cannot read env file {}: {}", path.display(), e),
    })?;

    let mut values = BTreeMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| WpError::ConfigError {
            message: format!("Invalid line in env file {}: {}", path.display(), e),
        })?;
        values.insert(key, value);
    }

    tracing::info!("📄 Loaded {} entries from {}", values.len(), path.display());
    Ok(values)
}

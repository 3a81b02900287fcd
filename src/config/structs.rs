use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "quicklink.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - app: 短链接的对外 origin
/// - store: 存储后端、数据目录和集合的存储键
/// - links: 默认有效期和随机短码长度
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config file > 默认值
    /// ENV 前缀：QL，分隔符：__
    /// 示例：QL__STORE__BACKEND=memory
    pub fn load(path: Option<&str>) -> crate::errors::Result<Self> {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("QL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> crate::errors::Result<()> {
        if self.links.code_length == 0 {
            return Err(crate::errors::QuickLinkError::config(
                "links.code_length must be at least 1",
            ));
        }
        let max_validity = crate::services::MAX_VALIDITY_MINUTES;
        if !(1..=max_validity).contains(&self.links.default_validity) {
            return Err(crate::errors::QuickLinkError::config(format!(
                "links.default_validity must be between 1 and {} minutes",
                max_validity
            )));
        }
        if self.store.key.is_empty() {
            return Err(crate::errors::QuickLinkError::config(
                "store.key cannot be empty",
            ));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Prefix of every short link, without trailing slash
    #[serde(default = "default_origin")]
    pub origin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// `file` or `memory`
    #[serde(default = "default_store_backend")]
    pub backend: String,
    /// Directory holding one `<key>.json` file per key (file backend only)
    #[serde(default = "default_store_path")]
    pub path: String,
    #[serde(default = "default_store_key")]
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinksConfig {
    /// Minutes
    #[serde(default = "default_validity")]
    pub default_validity: i64,
    #[serde(default = "default_code_length")]
    pub code_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_store_backend() -> String {
    "file".to_string()
}

fn default_store_path() -> String {
    "data".to_string()
}

fn default_store_key() -> String {
    "urls".to_string()
}

fn default_validity() -> i64 {
    30
}

fn default_code_length() -> usize {
    6
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

// ============================================================
// Default implementations
// ============================================================

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            path: default_store_path(),
            key: default_store_key(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            default_validity: default_validity(),
            code_length: default_code_length(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StaticConfig::default();
        assert_eq!(config.app.origin, "http://localhost:5173");
        assert_eq!(config.store.backend, "file");
        assert_eq!(config.store.key, "urls");
        assert_eq!(config.links.default_validity, 30);
        assert_eq!(config.links.code_length, 6);
        assert_eq!(config.logging.format, "text");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: StaticConfig = toml::from_str(
            r#"
            [app]
            origin = "https://q.example"

            [links]
            code_length = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.app.origin, "https://q.example");
        assert_eq!(config.links.code_length, 8);
        assert_eq!(config.links.default_validity, 30);
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = StaticConfig::generate_sample_config();
        assert!(sample.contains("[store]"));
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[store]\nbackend = \"memory\"\nkey = \"links\"\n",
        )
        .unwrap();

        let config = StaticConfig::load(path.to_str()).unwrap();
        assert_eq!(config.store.backend, "memory");
        assert_eq!(config.store.key, "links");
        assert_eq!(config.app, AppConfig::default());
    }

    #[test]
    fn test_load_rejects_zero_code_length() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[links]\ncode_length = 0\n").unwrap();

        let err = StaticConfig::load(path.to_str()).unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_load_rejects_out_of_range_validity() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");

        for validity in ["0", "-5", "1000000000000"] {
            std::fs::write(&path, format!("[links]\ndefault_validity = {}\n", validity))
                .unwrap();
            let err = StaticConfig::load(path.to_str()).unwrap_err();
            assert_eq!(err.code(), "E001");
        }
    }

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("quicklink.toml");

        StaticConfig::default().save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: StaticConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }
}

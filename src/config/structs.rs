use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::errors::{Result, TableShuffleError};
use crate::list::DEFAULT_MAX_VALUE;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "TS";

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 静态配置
///
/// - screen: 标题、Shuffle 按钮文字、数据集大小
/// - logging: 日志级别、格式与输出文件
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：TS，分隔符：__
    /// 示例：TS__SCREEN__TITLE="My List"
    ///
    /// 读取或校验失败时回退到默认值
    pub fn load(path: Option<&str>) -> Self {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        match Self::try_load(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e.format_with_code());
                Self::default()
            }
        }
    }

    /// 加载并校验配置，返回所有错误
    pub fn try_load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        super::validators::validate_screen(&self.screen)
            .map_err(TableShuffleError::validation)?;
        super::validators::validate_logging(&self.logging)
            .map_err(TableShuffleError::validation)?;
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        let write_error = |e: std::io::Error| {
            TableShuffleError::config(format!("Failed to write {}: {}", path.display(), e))
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        std::fs::write(path, content).map_err(write_error)?;
        Ok(())
    }
}

/// 屏幕配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_shuffle_label")]
    pub shuffle_label: String,
    /// 数据集为 `0..=max_value`
    #[serde(default = "default_max_value")]
    pub max_value: u32,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// 未设置文件时不输出日志（终端由界面占用）
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default)]
    pub enable_rotation: bool,
}

fn default_title() -> String {
    "Task 4".to_string()
}

fn default_shuffle_label() -> String {
    "Shuffle".to_string()
}

fn default_max_value() -> u32 {
    DEFAULT_MAX_VALUE
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<String> {
    Some("table-shuffle.log".to_string())
}

fn default_max_backups() -> u32 {
    5
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            shuffle_label: default_shuffle_label(),
            max_value: default_max_value(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: false,
        }
    }
}

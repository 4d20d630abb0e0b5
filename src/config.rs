use serde::Deserialize;
use std::path::Path;

use crate::error::{AppResult, ConfigError, FileError};

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待导入的试卷 JSON 存放目录
    pub import_folder: String,
    /// 规范化结果输出目录
    pub output_folder: String,
    /// 需要人工核对的题目写入此文件
    pub warn_file: String,
    /// 同时处理的文件数量
    pub max_concurrent_files: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            import_folder: "import_json".to_string(),
            output_folder: "normalized_json".to_string(),
            warn_file: "warn.txt".to_string(),
            max_concurrent_files: 8,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置或无法解析的项使用默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 加载配置：`IMPORT_CONFIG` 指向的 TOML 文件（可选），再由环境变量覆盖
    pub fn load() -> AppResult<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// 与 `load` 相同，但变量通过 `var` 查找
    pub fn load_with(var: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let base = match var("IMPORT_CONFIG") {
            Some(path) => Self::from_toml_file(Path::new(&path))?,
            None => Self::default(),
        };
        let config = base.with_overrides(var);
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| FileError::ReadFailed {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| {
            FileError::TomlParseFailed {
                path: display,
                source,
            }
            .into()
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// 用 `var` 查到的值覆盖配置，未设置或无法解析的项保留原值
    pub fn with_overrides(self, var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            import_folder: var("IMPORT_FOLDER").unwrap_or(self.import_folder),
            output_folder: var("OUTPUT_FOLDER").unwrap_or(self.output_folder),
            warn_file: var("WARN_FILE").unwrap_or(self.warn_file),
            max_concurrent_files: var("MAX_CONCURRENT_FILES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.max_concurrent_files),
            verbose_logging: var("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
            output_log_file: var("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
        }
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> AppResult<()> {
        if self.max_concurrent_files == 0 {
            return Err(ConfigError::InvalidValue {
                name: "max_concurrent_files".to_string(),
                reason: "必须大于 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

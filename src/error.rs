use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 试卷 JSON 解析错误
    #[error("解析错误: {0}")]
    Resolve(#[from] ResolveError),
}

/// 解析管理员粘贴的试卷 JSON 时的错误
///
/// 只有这两种情况会让整个解析失败，单道题的问题都降级为 -1
#[derive(Debug, Error)]
pub enum ResolveError {
    /// 不是合法的 JSON
    #[error("invalid JSON syntax: {0}")]
    Parse(#[source] serde_json::Error),
    /// 缺少 title 或 questions 数组
    #[error("invalid quiz format: must have 'title' and 'questions' array")]
    Schema,
}

/// 草稿提交前的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("试卷标题不能为空")]
    EmptyTitle,
    #[error("题目 {id} 的题干为空")]
    EmptyQuestion { id: usize },
    #[error("题目 {} 的第 {} 个选项为空", .id, .option_index + 1)]
    EmptyOption { id: usize, option_index: usize },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置值不合法
    #[error("配置项 {name} 不合法: {reason}")]
    InvalidValue { name: String, reason: String },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

//! 试卷处理上下文
//!
//! 封装"我正在处理第几个文件、文件叫什么"这一信息

use std::fmt::Display;
use std::path::{Path, PathBuf};

/// 试卷处理上下文
#[derive(Debug, Clone)]
pub struct QuizCtx {
    /// 试卷文件路径
    pub path: PathBuf,

    /// 文件索引（从1开始，仅用于日志显示）
    pub file_index: usize,

    /// 文件名，用于输出文件和 warn.txt
    pub source_name: String,
}

impl QuizCtx {
    /// 创建新的试卷上下文
    pub fn new(path: impl Into<PathBuf>, file_index: usize) -> Self {
        let path = path.into();
        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            file_index,
            source_name,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Display for QuizCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文件 {} {}]", self.file_index, self.source_name)
    }
}

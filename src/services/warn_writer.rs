//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use anyhow::{Context, Result};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::models::quiz::NormalizedQuestion;
use crate::services::draft_audit::AnswerStatus;
use crate::utils::logging::truncate_text;

/// 警告写入服务
///
/// 职责：
/// - 将需要人工核对答案的题目写入 warn.txt
/// - 只处理单道题的警告
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.warn_file_path
    }

    /// 写入警告信息
    ///
    /// # 参数
    /// - `source_name`: 试卷来源（文件名）
    /// - `question`: 规范化后的题目
    /// - `status`: 答案状态
    pub async fn write(
        &self,
        source_name: &str,
        question: &NormalizedQuestion,
        status: AnswerStatus,
    ) -> Result<()> {
        debug!(
            "写入警告: {} | 题目 {} | {}",
            source_name, question.id, status
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .await
            .with_context(|| format!("无法打开警告文件: {}", self.warn_file_path))?;

        file.write_all(format_warn_line(source_name, question, status).as_bytes())
            .await
            .with_context(|| format!("无法写入警告文件: {}", self.warn_file_path))?;
        file.flush().await?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_warn_line(
    source_name: &str,
    question: &NormalizedQuestion,
    status: AnswerStatus,
) -> String {
    format!(
        "{} | 题目 {} | {} (correctAnswer={}, 选项数={}) | 题干: {}\n",
        source_name,
        question.id,
        status,
        question.correct_answer,
        question.options.len(),
        truncate_text(&question.question, 60)
    )
}

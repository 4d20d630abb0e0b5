//! 试卷导入流程 - 流程层
//!
//! 核心职责：定义"一个试卷文件"的完整导入流程
//!
//! 流程顺序：
//! 1. 读取 JSON 并规范化（推断每道题的答案索引）
//! 2. 检查答案状态，需要核对的题目写入 warn.txt
//! 3. 将规范化结果写入输出目录

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::loaders::load_quiz_file;
use crate::models::quiz::NormalizedQuiz;
use crate::services::draft_audit::{audit, DraftAudit};
use crate::services::WarnWriter;
use crate::utils::logging::truncate_text;
use crate::workflow::quiz_ctx::QuizCtx;

/// 试卷处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 所有题目的答案都已确定
    Clean,
    /// 有题目需要人工核对
    NeedsReview { flagged: usize },
}

/// 试卷导入流程
///
/// - 编排单个试卷文件的导入
/// - 不关心并发和批次
pub struct QuizFlow {
    warn_writer: WarnWriter,
    output_folder: PathBuf,
    verbose_logging: bool,
}

impl QuizFlow {
    /// 创建新的试卷导入流程
    pub fn new(config: &Config) -> Self {
        Self {
            warn_writer: WarnWriter::with_path(config.warn_file.clone()),
            output_folder: PathBuf::from(&config.output_folder),
            verbose_logging: config.verbose_logging,
        }
    }

    pub async fn run(&self, ctx: &QuizCtx) -> Result<ProcessResult> {
        // ========== 1. 读取并规范化 ==========
        let quiz = load_quiz_file(ctx.path()).await?;
        info!(
            "[文件 {}] ✓ 解析完成: {:?}，共 {} 道题",
            ctx.file_index,
            quiz.title,
            quiz.questions.len()
        );

        if self.verbose_logging {
            self.log_questions(ctx.file_index, &quiz);
        }

        // ========== 2. 检查答案 ==========
        let report = audit(&quiz);
        self.write_warns(ctx, &quiz, &report).await?;

        // ========== 3. 写出结果 ==========
        self.write_output(ctx, &quiz).await?;

        if report.is_clean() {
            Ok(ProcessResult::Clean)
        } else {
            warn!(
                "[文件 {}] ⚠️ {} 道题需要核对答案",
                ctx.file_index,
                report.flagged.len()
            );
            Ok(ProcessResult::NeedsReview {
                flagged: report.flagged.len(),
            })
        }
    }

    /// 需要核对的题目逐条写入 warn.txt
    async fn write_warns(
        &self,
        ctx: &QuizCtx,
        quiz: &NormalizedQuiz,
        report: &DraftAudit,
    ) -> Result<()> {
        for flagged in &report.flagged {
            let Some(question) = quiz.questions.get(flagged.index) else {
                continue;
            };
            self.warn_writer
                .write(&ctx.source_name, question, flagged.status)
                .await?;
        }

        if !report.is_clean() {
            warn!(
                "[文件 {}] ⚠️ 已写入 {}: {} 条",
                ctx.file_index,
                self.warn_writer.path(),
                report.flagged.len()
            );
        }

        Ok(())
    }

    /// 规范化结果写入输出目录（与源文件同名）
    async fn write_output(&self, ctx: &QuizCtx, quiz: &NormalizedQuiz) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_folder)
            .await
            .with_context(|| format!("无法创建输出目录: {}", self.output_folder.display()))?;

        let output_path = self.output_folder.join(&ctx.source_name);
        let content = serde_json::to_string_pretty(quiz)?;
        tokio::fs::write(&output_path, content)
            .await
            .with_context(|| format!("无法写入文件: {}", output_path.display()))?;

        info!(
            "[文件 {}] 💾 已保存至: {}",
            ctx.file_index,
            output_path.display()
        );
        Ok(output_path)
    }

    // ========== 日志辅助方法 ==========

    fn log_questions(&self, file_index: usize, quiz: &NormalizedQuiz) {
        for q in &quiz.questions {
            info!(
                "[文件 {}]   {}. {} → correctAnswer={}",
                file_index,
                q.id,
                truncate_text(&q.question, 40),
                q.correct_answer
            );
        }
    }
}

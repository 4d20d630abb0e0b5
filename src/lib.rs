//! # Quiz Import
//!
//! 管理后台试卷导入工具：把管理员粘贴或上传的试卷 JSON（字段名不固定、
//! 答案写法五花八门）规范化为每道题都带有从0开始的 `correctAnswer` 的草稿。
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `answer_resolver` - 单道题的答案索引推断
//! - `quiz_normalizer` - 整张试卷的解析与规范化（`resolve`）
//! - `draft_audit` - 草稿答案状态检查、提交前校验
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一个试卷文件"的完整导入流程
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/` - 批量扫描目录、控制并发、汇总统计

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, DraftError, ResolveError};
pub use models::{NormalizedQuestion, NormalizedQuiz, UNRESOLVED};
pub use orchestrator::{App, ProcessingStats};
pub use services::{audit, resolve, validate_for_submit, AnswerStatus};
pub use utils::logging;
pub use workflow::{ProcessResult, QuizCtx, QuizFlow};

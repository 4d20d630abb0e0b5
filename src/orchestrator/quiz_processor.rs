//! 单个试卷处理器 - 编排层
//!
//! 负责单个试卷文件的日志和结果汇总，具体流程委托给 `QuizFlow`

use crate::workflow::{ProcessResult, QuizCtx, QuizFlow};
use anyhow::Result;
use tracing::info;

/// 处理单个试卷文件
///
/// # 返回
/// 返回需要人工核对的题目数量
pub async fn process_quiz(flow: &QuizFlow, ctx: &QuizCtx) -> Result<usize> {
    info!("[文件 {}] 开始处理: {}", ctx.file_index, ctx.path.display());

    let flagged = match flow.run(ctx).await? {
        ProcessResult::Clean => 0,
        ProcessResult::NeedsReview { flagged } => flagged,
    };

    info!("[文件 {}] ✅ 导入完成\n", ctx.file_index);
    Ok(flagged)
}

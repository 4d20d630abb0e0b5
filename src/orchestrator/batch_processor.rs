//! 批量试卷处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量导入试卷文件。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、输出启动信息
//! 2. **批量扫描**：列出导入目录中的所有 `.json` 文件
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：每批完成后再开始下一批
//! 5. **全局统计**：汇总所有文件的处理结果
//!
//! 单个文件解析失败只计入失败数，不影响其他文件。

use crate::config::Config;
use crate::models::loaders::list_json_files;
use crate::orchestrator::quiz_processor;
use crate::utils::logging::{
    init_log_file, log_batch_complete, log_batch_start, log_files_loaded, log_startup,
    print_final_stats,
};
use crate::workflow::{QuizCtx, QuizFlow};
use anyhow::Result;
use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: Arc<QuizFlow>,
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    /// 需要人工核对的题目总数
    pub flagged: usize,
    pub total: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
    flagged: usize,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        // 初始化日志文件
        init_log_file(&config.output_log_file).await?;

        log_startup(config.max_concurrent_files);

        let flow = Arc::new(QuizFlow::new(&config));
        Ok(Self { config, flow })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        info!("\n📁 正在扫描待导入的试卷...");
        let files = list_json_files(&self.config.import_folder).await?;

        if files.is_empty() {
            warn!("⚠️ 没有找到待导入的JSON文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        log_files_loaded(files.len(), self.config.max_concurrent_files);

        let stats = self.process_all_files(files).await?;

        print_final_stats(
            stats.success,
            stats.failed,
            stats.flagged,
            stats.total,
            &self.config.warn_file,
        );

        Ok(stats)
    }

    /// 分批处理所有文件
    async fn process_all_files(&self, files: Vec<PathBuf>) -> Result<ProcessingStats> {
        let batch_size = self.config.max_concurrent_files;
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total = files.len();
        let total_batches = total.div_ceil(batch_size);
        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        for (batch_idx, batch_files) in files.chunks(batch_size).enumerate() {
            let batch_start = batch_idx * batch_size;
            let batch_num = batch_idx + 1;

            log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_start + batch_files.len(),
                total,
            );

            let result = self
                .process_batch(batch_files, batch_start, semaphore.clone())
                .await?;

            stats.success += result.success;
            stats.failed += result.failed;
            stats.flagged += result.flagged;

            log_batch_complete(batch_num, result.success, result.success + result.failed);
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_files: &[PathBuf],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let mut handles = Vec::with_capacity(batch_files.len());

        for (idx, path) in batch_files.iter().enumerate() {
            let ctx = QuizCtx::new(path.clone(), batch_start + idx + 1);
            let permit = semaphore.clone().acquire_owned().await?;
            let flow = Arc::clone(&self.flow);

            handles.push(tokio::spawn(async move {
                let _permit = permit;
                let outcome = quiz_processor::process_quiz(&flow, &ctx).await;
                (ctx, outcome)
            }));
        }

        let mut result = BatchResult::default();

        for joined in join_all(handles).await {
            match joined {
                Ok((_, Ok(flagged))) => {
                    result.success += 1;
                    result.flagged += flagged;
                }
                Ok((ctx, Err(e))) => {
                    error!("[文件 {}] ❌ 导入失败: {:#}", ctx.file_index, e);
                    result.failed += 1;
                }
                Err(e) => {
                    error!("任务执行失败: {}", e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

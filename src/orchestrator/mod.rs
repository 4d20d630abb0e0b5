//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! quiz_processor (处理单个文件)
//!     ↓
//! workflow::QuizFlow (读取 → 规范化 → 检查 → 写出)
//!     ↓
//! services (能力层：answer_resolver / quiz_normalizer / draft_audit / warn_writer)
//! ```

pub mod batch_processor;
pub mod quiz_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use quiz_processor::process_quiz;

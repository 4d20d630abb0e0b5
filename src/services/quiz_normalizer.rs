//! 试卷规范化 - 业务能力层
//!
//! 把管理员粘贴或上传的试卷 JSON 文本转换为 `NormalizedQuiz`。
//! 纯函数，不做任何 I/O，可在任意线程重复调用。

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::ResolveError;
use crate::models::quiz::{NormalizedQuestion, NormalizedQuiz};
use crate::services::answer_resolver::infer_answer_index;

/// 解析试卷 JSON 文本
///
/// # 返回
/// - `ResolveError::Parse`: 文本不是合法 JSON
/// - `ResolveError::Schema`: 缺少非空字符串 `title` 或数组 `questions`
///
/// 单道题的任何问题都不会导致失败，答案无法确定时为 -1
pub fn resolve(raw_json_text: &str) -> Result<NormalizedQuiz, ResolveError> {
    let json: JsonValue = serde_json::from_str(raw_json_text).map_err(ResolveError::Parse)?;
    normalize_value(&json)
}

/// 对已经解析好的 JSON 值做规范化
pub fn normalize_value(json: &JsonValue) -> Result<NormalizedQuiz, ResolveError> {
    let title = json
        .get("title")
        .and_then(JsonValue::as_str)
        .filter(|title| !title.is_empty())
        .ok_or(ResolveError::Schema)?;
    let raw_questions = json
        .get("questions")
        .and_then(JsonValue::as_array)
        .ok_or(ResolveError::Schema)?;

    let questions: Vec<NormalizedQuestion> = raw_questions
        .iter()
        .enumerate()
        .map(|(idx, raw)| normalize_question(idx, raw))
        .collect();

    debug!(
        "试卷 {:?} 规范化完成: {} 道题，{} 道未能确定答案",
        title,
        questions.len(),
        questions.iter().filter(|q| !q.is_resolved()).count()
    );

    Ok(NormalizedQuiz {
        title: title.to_string(),
        questions,
    })
}

/// 规范化单道题，`idx` 从0开始
fn normalize_question(idx: usize, raw: &JsonValue) -> NormalizedQuestion {
    NormalizedQuestion {
        id: idx + 1,
        question: raw
            .get("question")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string(),
        options: raw
            .get("options")
            .and_then(JsonValue::as_array)
            .map(|options| options.iter().map(option_text).collect())
            .unwrap_or_default(),
        correct_answer: infer_answer_index(raw),
        explanation: raw
            .get("explanation")
            .and_then(JsonValue::as_str)
            .map(str::to_string),
    }
}

/// 选项一般是字符串；其他类型保留其 JSON 文本，保证位置不变
fn option_text(option: &JsonValue) -> String {
    match option {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

//! 答案索引推断 - 业务能力层
//!
//! 从单道"原始"题目（字段名不固定的 JSON 对象）中推断正确选项的索引。
//!
//! 推断顺序（命中即返回）：
//! 1. 按优先级查找答案字段
//! 2. 数字：直接作为从0开始的索引
//! 3. 字符串：字母 → 整数字符串 → 选项原文精确匹配 → 去标点宽松匹配
//! 4. 其他情况：-1

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value as JsonValue};
use tracing::debug;

use crate::models::answer::{ANSWER_KEYS, LETTER_INDEX, LOOSE_STRIP_CHARS, UNRESOLVED};

/// 匹配 "B"、"(b)"、"Option B"、"b."、"[c]"、"ans d" 等写法
static LETTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:option|answer|ans)?[\s(\[]*([a-d])[\s)\].]*$").expect("字母答案正则不合法")
});

/// 查找答案字段
///
/// # 返回
/// 返回第一个存在且不为 null 的字段名和值；题目不是对象时返回 None
pub fn find_answer_indicator(question: &JsonValue) -> Option<(&'static str, &JsonValue)> {
    let fields = question.as_object()?;
    ANSWER_KEYS.iter().find_map(|&key| match fields.get(key) {
        Some(JsonValue::Null) | None => None,
        Some(value) => Some((key, value)),
    })
}

/// 推断单道题的正确选项索引
///
/// 不做越界检查，推断出的索引可能大于等于选项数量
pub fn infer_answer_index(question: &JsonValue) -> i64 {
    let Some((key, indicator)) = find_answer_indicator(question) else {
        debug!("未找到答案字段");
        return UNRESOLVED;
    };

    match indicator {
        JsonValue::Number(n) => {
            let index = index_from_number(n);
            debug!("字段 {} 为数字 {}，索引: {}", key, n, index);
            index
        }
        JsonValue::String(s) => {
            let options = option_texts(question);
            index_from_str(s, &options)
        }
        other => {
            debug!("字段 {} 类型不支持: {}", key, other);
            UNRESOLVED
        }
    }
}

/// 数字答案按原样作为索引（不做从1开始的修正）
///
/// 只接受整数值；`2.0` 视为 2，`1.5` 之类的小数无法作为索引
fn index_from_number(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        return i;
    }
    match n.as_f64() {
        Some(f)
            if f.is_finite()
                && f.fract() == 0.0
                && f >= i64::MIN as f64
                && f < i64::MAX as f64 =>
        {
            f as i64
        }
        _ => UNRESOLVED,
    }
}

/// 字符串答案的推断
fn index_from_str(raw: &str, options: &[Option<&str>]) -> i64 {
    let clean = raw.trim();
    let lower = clean.to_lowercase();

    // 字母写法
    if let Some(index) = LETTER_PATTERN
        .captures(&lower)
        .and_then(|caps| caps.get(1))
        .and_then(|letter| LETTER_INDEX.get(letter.as_str()))
    {
        debug!("字母答案 {:?}，索引: {}", clean, index);
        return *index;
    }

    // 整数字符串
    if let Ok(index) = clean.parse::<i64>() {
        debug!("整数字符串答案 {:?}，索引: {}", clean, index);
        return index;
    }

    // 选项原文精确匹配
    if let Some(index) = options.iter().position(|opt| *opt == Some(clean)) {
        debug!("精确匹配选项 {:?}，索引: {}", clean, index);
        return index as i64;
    }

    // 去掉大小写和标点后匹配
    let target = normalize_loose(clean);
    if let Some(index) = options
        .iter()
        .position(|opt| opt.is_some_and(|text| normalize_loose(text) == target))
    {
        debug!("宽松匹配选项 {:?}，索引: {}", clean, index);
        return index as i64;
    }

    debug!("无法从 {:?} 推断答案", clean);
    UNRESOLVED
}

/// 宽松匹配用的规范化：去首尾空白、转小写、删除常见标点
pub fn normalize_loose(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !LOOSE_STRIP_CHARS.contains(c))
        .collect()
}

/// 按位置取出选项文本，非字符串选项保留为 None 以免位置错乱
fn option_texts(question: &JsonValue) -> Vec<Option<&str>> {
    question
        .get("options")
        .and_then(JsonValue::as_array)
        .map(|options| options.iter().map(JsonValue::as_str).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn four_options(indicator_key: &str, indicator: JsonValue) -> JsonValue {
        let mut question = json!({
            "question": "Which keyword declares an immutable binding in Rust?",
            "options": ["let", "mut", "var", "const fn"],
        });
        question[indicator_key] = indicator;
        question
    }

    #[test]
    fn test_numeric_passthrough() {
        assert_eq!(infer_answer_index(&four_options("correctAnswer", json!(2))), 2);
        assert_eq!(infer_answer_index(&four_options("answer", json!(0))), 0);
        // 不做越界检查
        assert_eq!(infer_answer_index(&four_options("answer", json!(7))), 7);
    }

    #[test]
    fn test_numeric_float() {
        assert_eq!(infer_answer_index(&four_options("answer", json!(2.0))), 2);
        assert_eq!(infer_answer_index(&four_options("answer", json!(1.5))), -1);
        assert_eq!(infer_answer_index(&four_options("answer", json!(u64::MAX))), -1);
    }

    #[test]
    fn test_letter_variants() {
        for raw in [
            "B", "b", "(b)", "[B]", "Option B", "option b", "b.", " B) ", "Answer B", "ans b",
        ] {
            assert_eq!(
                infer_answer_index(&four_options("correct", json!(raw))),
                1,
                "字母写法 {:?} 应该解析为 1",
                raw
            );
        }
        assert_eq!(infer_answer_index(&four_options("correct", json!("D"))), 3);
    }

    #[test]
    fn test_letter_out_of_range_is_not_a_letter() {
        // e 不在 a-d 范围内，也不是任何选项
        assert_eq!(infer_answer_index(&four_options("correct", json!("E"))), -1);
    }

    #[test]
    fn test_integer_string() {
        assert_eq!(infer_answer_index(&four_options("answer", json!("3"))), 3);
        assert_eq!(infer_answer_index(&four_options("answer", json!(" 0 "))), 0);
        assert_eq!(infer_answer_index(&four_options("answer", json!("-1"))), -1);
    }

    #[test]
    fn test_exact_text_match() {
        let question = json!({
            "options": ["Red", "Green", "Blue"],
            "correct": "Blue",
        });
        assert_eq!(infer_answer_index(&question), 2);
    }

    #[test]
    fn test_exact_match_is_case_sensitive_then_loose() {
        let question = json!({
            "options": ["red", "Red"],
            "correct": "Red",
        });
        assert_eq!(infer_answer_index(&question), 1);

        let question = json!({
            "options": ["Red", "Green"],
            "correct": "GREEN",
        });
        assert_eq!(infer_answer_index(&question), 1);
    }

    #[test]
    fn test_loose_text_match() {
        let question = json!({
            "options": ["C++", "Python!"],
            "ans": "python",
        });
        assert_eq!(infer_answer_index(&question), 1);

        let question = json!({
            "options": ["  std::vec::Vec  ", "Box<T>"],
            "solution": "stdvecvec",
        });
        assert_eq!(infer_answer_index(&question), 0);
    }

    #[test]
    fn test_non_string_options_keep_positions() {
        let question = json!({
            "options": [1, null, "Blue"],
            "correct": "blue",
        });
        assert_eq!(infer_answer_index(&question), 2);
    }

    #[test]
    fn test_missing_options_degrades() {
        let question = json!({ "answer": "Paris" });
        assert_eq!(infer_answer_index(&question), -1);
    }

    #[test]
    fn test_no_indicator() {
        assert_eq!(infer_answer_index(&json!({})), -1);
        assert_eq!(infer_answer_index(&json!("not an object")), -1);
        assert_eq!(infer_answer_index(&json!(null)), -1);
    }

    #[test]
    fn test_unsupported_types() {
        assert_eq!(infer_answer_index(&four_options("answer", json!(true))), -1);
        assert_eq!(infer_answer_index(&four_options("answer", json!([1]))), -1);
        assert_eq!(infer_answer_index(&four_options("answer", json!({ "index": 1 }))), -1);
    }

    #[test]
    fn test_priority_order() {
        let question = json!({
            "options": ["a", "b", "c", "d"],
            "correctAnswer": 1,
            "answer": "C",
        });
        assert_eq!(infer_answer_index(&question), 1);
    }

    #[test]
    fn test_null_falls_through_to_next_key() {
        let question = json!({
            "options": ["a", "b", "c", "d"],
            "correctAnswer": null,
            "correct_option": "d",
        });
        assert_eq!(find_answer_indicator(&question).map(|(k, _)| k), Some("correct_option"));
        assert_eq!(infer_answer_index(&question), 3);
    }

    #[test]
    fn test_normalize_loose() {
        assert_eq!(normalize_loose("  Python! "), "python");
        assert_eq!(normalize_loose("(A) first-class"), "a firstclass");
    }
}

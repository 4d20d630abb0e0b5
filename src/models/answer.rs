//! 答案字段相关的常量
//!
//! 管理员粘贴的题目 JSON 字段名五花八门，这里集中定义

use phf::phf_map;

/// 无法确定正确选项时使用的哨兵值
pub const UNRESOLVED: i64 = -1;

/// 答案字段的候选名称（按优先级排列，取第一个非 null 的值）
pub const ANSWER_KEYS: [&str; 8] = [
    "correctAnswer",
    "answer",
    "correct",
    "ans",
    "correctOption",
    "solution",
    "correct_answer",
    "correct_option",
];

/// 选项字母 → 从 0 开始的索引
pub static LETTER_INDEX: phf::Map<&'static str, i64> = phf_map! {
    "a" => 0,
    "b" => 1,
    "c" => 2,
    "d" => 3,
};

/// 宽松匹配时需要剔除的标点
pub const LOOSE_STRIP_CHARS: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

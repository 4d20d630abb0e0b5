//! 草稿检查 - 业务能力层
//!
//! 规范化结果只是草稿，管理员需要人工核对：
//! - 答案为 -1 或越界的题目在界面上不会有选中的选项，需要标记出来
//! - 提交前标题、题干、选项都不能为空

use std::fmt;

use serde::Serialize;

use crate::error::DraftError;
use crate::models::answer::UNRESOLVED;
use crate::models::quiz::{NormalizedQuestion, NormalizedQuiz};

/// 单道题的答案状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    /// 答案索引落在选项范围内
    Resolved,
    /// 无法确定答案（-1）
    Unresolved,
    /// 推断出了索引，但没有对应的选项
    OutOfRange,
}

impl AnswerStatus {
    pub fn of(question: &NormalizedQuestion) -> Self {
        if question.correct_answer == UNRESOLVED {
            AnswerStatus::Unresolved
        } else if question.answer_in_range() {
            AnswerStatus::Resolved
        } else {
            AnswerStatus::OutOfRange
        }
    }

    /// 是否需要管理员手动处理
    pub fn needs_review(self) -> bool {
        self != AnswerStatus::Resolved
    }
}

impl fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerStatus::Resolved => write!(f, "已确定"),
            AnswerStatus::Unresolved => write!(f, "无法确定答案"),
            AnswerStatus::OutOfRange => write!(f, "答案越界"),
        }
    }
}

/// 需要人工核对的题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedQuestion {
    /// 在 `questions` 中的位置（从0开始）
    pub index: usize,
    pub id: usize,
    pub status: AnswerStatus,
    pub correct_answer: i64,
    pub option_count: usize,
}

/// 整张试卷的检查结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftAudit {
    pub total: usize,
    pub flagged: Vec<FlaggedQuestion>,
}

impl DraftAudit {
    pub fn is_clean(&self) -> bool {
        self.flagged.is_empty()
    }

    pub fn resolved(&self) -> usize {
        self.total - self.flagged.len()
    }
}

/// 检查草稿中每道题的答案状态，不修改草稿
pub fn audit(quiz: &NormalizedQuiz) -> DraftAudit {
    let flagged = quiz
        .questions
        .iter()
        .enumerate()
        .filter_map(|(index, q)| {
            let status = AnswerStatus::of(q);
            status.needs_review().then(|| FlaggedQuestion {
                index,
                id: q.id,
                status,
                correct_answer: q.correct_answer,
                option_count: q.options.len(),
            })
        })
        .collect();

    DraftAudit {
        total: quiz.questions.len(),
        flagged,
    }
}

/// 提交前校验：标题、题干、每个选项都不能为空
///
/// 答案状态不在这里检查，-1 的题目仍然可以提交
pub fn validate_for_submit(quiz: &NormalizedQuiz) -> Result<(), DraftError> {
    if quiz.title.is_empty() {
        return Err(DraftError::EmptyTitle);
    }

    for q in &quiz.questions {
        if q.question.is_empty() {
            return Err(DraftError::EmptyQuestion { id: q.id });
        }
        if let Some(option_index) = q.options.iter().position(|o| o.is_empty()) {
            return Err(DraftError::EmptyOption {
                id: q.id,
                option_index,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: usize, correct_answer: i64) -> NormalizedQuestion {
        NormalizedQuestion {
            id,
            question: format!("Question {}", id),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer,
            explanation: None,
        }
    }

    fn quiz(questions: Vec<NormalizedQuestion>) -> NormalizedQuiz {
        NormalizedQuiz {
            title: "Lifetimes".to_string(),
            questions,
        }
    }

    #[test]
    fn test_answer_status() {
        assert_eq!(AnswerStatus::of(&question(1, 0)), AnswerStatus::Resolved);
        assert_eq!(AnswerStatus::of(&question(1, 3)), AnswerStatus::Resolved);
        assert_eq!(AnswerStatus::of(&question(1, -1)), AnswerStatus::Unresolved);
        assert_eq!(AnswerStatus::of(&question(1, 4)), AnswerStatus::OutOfRange);
        assert_eq!(AnswerStatus::of(&question(1, -3)), AnswerStatus::OutOfRange);
    }

    #[test]
    fn test_audit_flags_only_problem_questions() {
        let draft = quiz(vec![question(1, 1), question(2, -1), question(3, 7)]);
        let report = audit(&draft);

        assert_eq!(report.total, 3);
        assert_eq!(report.resolved(), 1);
        assert!(!report.is_clean());

        let ids: Vec<(usize, AnswerStatus)> =
            report.flagged.iter().map(|f| (f.id, f.status)).collect();
        assert_eq!(
            ids,
            vec![(2, AnswerStatus::Unresolved), (3, AnswerStatus::OutOfRange)]
        );
        // 检查不会修改草稿
        assert_eq!(draft.questions[2].correct_answer, 7);
    }

    #[test]
    fn test_audit_records_position_not_id() {
        // 管理员编辑后的 id 不一定与位置对应
        let draft = quiz(vec![question(10, 0), question(20, -1)]);
        let report = audit(&draft);

        assert_eq!(report.flagged.len(), 1);
        assert_eq!(report.flagged[0].index, 1);
        assert_eq!(report.flagged[0].id, 20);
    }

    #[test]
    fn test_audit_empty_quiz_is_clean() {
        assert!(audit(&quiz(vec![])).is_clean());
    }

    #[test]
    fn test_validate_for_submit() {
        assert_eq!(validate_for_submit(&quiz(vec![question(1, -1)])), Ok(()));

        let mut draft = quiz(vec![question(1, 0)]);
        draft.title.clear();
        assert_eq!(validate_for_submit(&draft), Err(DraftError::EmptyTitle));

        let mut draft = quiz(vec![question(1, 0), question(2, 0)]);
        draft.questions[1].question.clear();
        assert_eq!(
            validate_for_submit(&draft),
            Err(DraftError::EmptyQuestion { id: 2 })
        );

        let mut draft = quiz(vec![question(1, 0)]);
        draft.questions[0].options[2].clear();
        assert_eq!(
            validate_for_submit(&draft),
            Err(DraftError::EmptyOption {
                id: 1,
                option_index: 2
            })
        );
    }
}

use serde::{Deserialize, Serialize};

use super::answer::UNRESOLVED;

/// 规范化后的题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuestion {
    /// 在试卷中的位置（从1开始，忽略输入里的 id）
    pub id: usize,
    pub question: String,
    pub options: Vec<String>,
    /// 正确选项索引（从0开始），-1 表示无法确定
    pub correct_answer: i64,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl NormalizedQuestion {
    /// 是否推断出了答案（不检查范围）
    pub fn is_resolved(&self) -> bool {
        self.correct_answer != UNRESOLVED
    }

    /// 答案索引是否落在选项范围内
    pub fn answer_in_range(&self) -> bool {
        usize::try_from(self.correct_answer)
            .map(|idx| idx < self.options.len())
            .unwrap_or(false)
    }
}

/// 规范化后的试卷，作为管理后台可编辑草稿的初始状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedQuiz {
    pub title: String,
    pub questions: Vec<NormalizedQuestion>,
}

/// 创建试卷接口的请求体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizPayload {
    pub quiz_title: String,
    pub questions: Vec<NormalizedQuestion>,
}

/// 更新试卷接口的请求体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuizPayload {
    pub title: String,
    pub quiz_data: CreateQuizPayload,
}

impl NormalizedQuiz {
    pub fn to_create_payload(&self) -> CreateQuizPayload {
        CreateQuizPayload {
            quiz_title: self.title.clone(),
            questions: self.questions.clone(),
        }
    }

    pub fn to_update_payload(&self) -> UpdateQuizPayload {
        UpdateQuizPayload {
            title: self.title.clone(),
            quiz_data: self.to_create_payload(),
        }
    }

    /// 未能推断出答案的题目数量
    pub fn unresolved_count(&self) -> usize {
        self.questions.iter().filter(|q| !q.is_resolved()).count()
    }
}

use crate::error::FileError;
use crate::models::quiz::NormalizedQuiz;
use crate::services::quiz_normalizer::resolve;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 读取试卷 JSON 文件并规范化
pub async fn load_quiz_file(json_file_path: &Path) -> Result<NormalizedQuiz> {
    let content = fs::read_to_string(json_file_path)
        .await
        .with_context(|| format!("无法读取JSON文件: {}", json_file_path.display()))?;

    let quiz = resolve(&content)
        .with_context(|| format!("无法解析试卷文件: {}", json_file_path.display()))?;

    Ok(quiz)
}

/// 列出文件夹中所有 .json 文件（按文件名排序）
pub async fn list_json_files(folder_path: &str) -> Result<Vec<PathBuf>> {
    let folder = PathBuf::from(folder_path);

    if !fs::try_exists(&folder).await.unwrap_or(false) {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut json_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path);
        }
    }

    if json_files.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到 JSON 文件", folder_path);
    }

    json_files.sort();
    Ok(json_files)
}

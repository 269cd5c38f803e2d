//! Shared domain enumerations aligned with persisted status columns.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }

    /// Unknown values decode as `Draft` so they never surface publicly.
    pub fn from_column(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "published" => PostStatus::Published,
            "archived" => PostStatus::Archived,
            _ => PostStatus::Draft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl TranslationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TranslationStatus::Pending => "pending",
            TranslationStatus::InProgress => "in_progress",
            TranslationStatus::Completed => "completed",
            TranslationStatus::Failed => "failed",
        }
    }

    /// Unknown values decode as `Pending` so they are never displayed.
    pub fn from_column(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "completed" => TranslationStatus::Completed,
            "in_progress" => TranslationStatus::InProgress,
            "failed" => TranslationStatus::Failed,
            _ => TranslationStatus::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, TranslationStatus::Completed)
    }
}

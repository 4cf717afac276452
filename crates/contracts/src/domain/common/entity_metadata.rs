use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные жизненного цикла записи
///
/// `created_at` задаётся один раз и больше не меняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Время создания записи
    pub created_at: DateTime<Utc>,
    /// Время последней смены статуса
    pub updated_at: DateTime<Utc>,
    /// Версия для оптимистичных обновлений
    pub version: i32,
}

impl EntityMetadata {
    /// Метаданные для записи, созданной сейчас
    pub fn new() -> Self {
        Self::created_at(Utc::now())
    }

    /// Метаданные для записи с известным временем создания
    pub fn created_at(at: DateTime<Utc>) -> Self {
        Self {
            created_at: at,
            updated_at: at,
            version: 0,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

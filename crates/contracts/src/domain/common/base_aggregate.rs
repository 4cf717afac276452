use super::EntityMetadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Базовый агрегат с общими полями всех записей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный ID записи
    pub id: Id,
    /// Бизнес-код (например, "HO-2024-0001", "LD-0042")
    pub code: String,
    /// Описание/название
    pub description: String,
    /// Комментарий
    pub comment: Option<String>,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Создать агрегат с временем создания из системы-источника
    pub fn created_at(id: Id, code: String, description: String, at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::created_at(at),
        }
    }

    /// Обновить `updated_at` и версию после смены состояния
    pub fn touch(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

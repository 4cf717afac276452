use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные запроса на смену статуса (заметка модератора, причина
/// отклонения, оператор)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionMeta {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
}

impl TransitionMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }
}

/// Запись об одной смене статуса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange<S> {
    pub from: S,
    pub to: S,
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub meta: TransitionMeta,
}

impl<S> StatusChange<S> {
    pub fn new(from: S, to: S, meta: TransitionMeta) -> Self {
        Self {
            from,
            to,
            at: Utc::now(),
            meta,
        }
    }
}

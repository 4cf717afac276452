use super::{AggregateRoot, StatusChange};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Вариант бейджа для отображения статуса в списках и карточке записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
}

/// Закрытый набор статусов записи вместе с графом переходов
///
/// Реализации сопоставляют каждый вариант через исчерпывающий `match`:
/// статус без подписи, бейджа или списка переходов не скомпилируется.
pub trait Lifecycle:
    Copy + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Все статусы в порядке отображения
    fn all() -> &'static [Self];

    /// Статус новой записи
    fn initial() -> Self;

    /// Статусы, достижимые за один переход
    fn allowed_next(&self) -> &'static [Self];

    /// Стабильный машинный код (например, "pending")
    fn code(&self) -> &'static str;

    /// Подпись для UI
    fn label(&self) -> &'static str;

    fn badge(&self) -> BadgeVariant;

    fn is_terminal(&self) -> bool {
        self.allowed_next().is_empty()
    }

    fn can_transition_to(&self, target: Self) -> bool {
        self.allowed_next().contains(&target)
    }

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.code() == code)
    }
}

/// Агрегат со статусом жизненного цикла
pub trait Stateful: AggregateRoot + Clone {
    type Status: Lifecycle;

    fn status(&self) -> Self::Status;

    /// Применённые смены статуса, от старых к новым
    fn history(&self) -> &[StatusChange<Self::Status>];

    /// Применить смену статуса, уже проверенную по графу переходов.
    /// Устанавливает статус, дописывает историю и увеличивает версию;
    /// `created_at` не меняется.
    fn apply_status_change(&mut self, change: StatusChange<Self::Status>);
}

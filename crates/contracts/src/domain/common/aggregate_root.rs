use super::{AggregateId, EntityMetadata};

/// Трейт для корня агрегата
///
/// Определяет методы экземпляра и статические метаданные коллекции, на
/// которые опираются все страницы списков
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить бизнес-код записи (например, "HO-2024-0001")
    fn code(&self) -> &str;

    /// Получить описание/название записи
    fn description(&self) -> &str;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    /// Проверка инвариантов записи. Снимок с невалидной записью не
    /// загружается в хранилище.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Имя коллекции (например, "hotel_order")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;
}

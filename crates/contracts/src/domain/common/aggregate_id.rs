use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }
}

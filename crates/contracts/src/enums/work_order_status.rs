use serde::{Deserialize, Serialize};
use std::fmt;

/// Статусы заявки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    #[default]
    New,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl WorkOrderStatus {
    /// Получить код статуса (как в API)
    pub fn code(&self) -> &'static str {
        match self {
            WorkOrderStatus::New => "new",
            WorkOrderStatus::Assigned => "assigned",
            WorkOrderStatus::InProgress => "in_progress",
            WorkOrderStatus::Completed => "completed",
            WorkOrderStatus::Cancelled => "cancelled",
            WorkOrderStatus::Unknown => "unknown",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkOrderStatus::New => "Новая",
            WorkOrderStatus::Assigned => "Назначена",
            WorkOrderStatus::InProgress => "В работе",
            WorkOrderStatus::Completed => "Выполнена",
            WorkOrderStatus::Cancelled => "Отменена",
            WorkOrderStatus::Unknown => "Неизвестно",
        }
    }

    /// Статусы, доступные для выбора в фильтре
    pub fn all() -> [WorkOrderStatus; 5] {
        [
            WorkOrderStatus::New,
            WorkOrderStatus::Assigned,
            WorkOrderStatus::InProgress,
            WorkOrderStatus::Completed,
            WorkOrderStatus::Cancelled,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(WorkOrderStatus::New),
            "assigned" => Some(WorkOrderStatus::Assigned),
            "in_progress" => Some(WorkOrderStatus::InProgress),
            "completed" => Some(WorkOrderStatus::Completed),
            "cancelled" => Some(WorkOrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_selectable() {
        for status in WorkOrderStatus::all() {
            assert_eq!(WorkOrderStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_unknown_status_from_api() {
        let status: WorkOrderStatus = serde_json::from_str(r#""on_hold""#).unwrap();
        assert_eq!(status, WorkOrderStatus::Unknown);
        let status: WorkOrderStatus = serde_json::from_str(r#""in_progress""#).unwrap();
        assert_eq!(status, WorkOrderStatus::InProgress);
    }
}

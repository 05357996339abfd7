use crate::shared::date_utils::{format_optional_datetime, EMPTY_CELL};
use crate::shared::number_format::format_optional_money;
use contracts::domain::a001_work_order::WorkOrder;

/// Колонка таблицы заявок
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Title,
    Status,
    Company,
    Assignee,
    WorkType,
    Equipment,
    Address,
    Price,
    CreatedAt,
    CompletedAt,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Id => "№",
            Column::Title => "Заявка",
            Column::Status => "Статус",
            Column::Company => "Компания",
            Column::Assignee => "Исполнитель",
            Column::WorkType => "Тип работ",
            Column::Equipment => "Оборудование",
            Column::Address => "Адрес",
            Column::Price => "Стоимость",
            Column::CreatedAt => "Создана",
            Column::CompletedAt => "Выполнена",
        }
    }

    pub fn min_width_px(&self) -> u32 {
        match self {
            Column::Id => 60,
            Column::Title | Column::Address => 220,
            Column::Price => 100,
            _ => 130,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Id | Column::Price)
    }

    /// Текст ячейки. Статус рисуется бейджем, здесь только подпись.
    pub fn cell_text(&self, row: &WorkOrder) -> String {
        match self {
            Column::Id => row.id.to_string(),
            Column::Title => row.display_title(),
            Column::Status => row.status.display_name().to_string(),
            Column::Company => or_dash(&row.company_name),
            Column::Assignee => or_dash(&row.assigned_user_name),
            Column::WorkType => or_dash(&row.work_type_name),
            Column::Equipment => or_dash(&row.equipment_name),
            Column::Address => or_dash(&row.address),
            Column::Price => format_optional_money(row.price),
            Column::CreatedAt => format_optional_datetime(row.created_at.as_ref()),
            Column::CompletedAt => format_optional_datetime(row.completed_at.as_ref()),
        }
    }
}

fn or_dash(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::work_order_status::WorkOrderStatus;

    fn row() -> WorkOrder {
        serde_json::from_value(serde_json::json!({
            "id": 42,
            "title": "Монтаж кондиционера",
            "status": "in_progress",
            "company_name": "ООО Климат",
            "assigned_user_name": "  ",
            "price": 12500.0,
            "created_at": "2024-03-15T14:02:26Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_cell_text() {
        let r = row();
        assert_eq!(Column::Id.cell_text(&r), "42");
        assert_eq!(Column::Title.cell_text(&r), "Монтаж кондиционера");
        assert_eq!(Column::Company.cell_text(&r), "ООО Климат");
        assert_eq!(Column::Price.cell_text(&r), "12 500.00");
        assert_eq!(Column::CreatedAt.cell_text(&r), "15.03.2024 14:02");
    }

    #[test]
    fn test_missing_values_render_dash() {
        let r = row();
        assert_eq!(Column::Assignee.cell_text(&r), "—");
        assert_eq!(Column::Equipment.cell_text(&r), "—");
        assert_eq!(Column::CompletedAt.cell_text(&r), "—");
    }

    #[test]
    fn test_status_label() {
        let r = row();
        assert_eq!(r.status, WorkOrderStatus::InProgress);
        assert_eq!(Column::Status.cell_text(&r), "В работе");
    }
}

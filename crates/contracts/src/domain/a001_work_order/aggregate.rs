use crate::enums::work_order_status::WorkOrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `null` читается как значение по умолчанию, как и отсутствующее поле
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Заявка на выезд (строка списка, как её отдают эндпоинты `.../tasks/filter`)
///
/// Разные роли получают разный набор полей, поэтому всё, кроме `id`,
/// необязательно.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: WorkOrderStatus,

    /// Адрес объекта
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub company_name: Option<String>,

    /// Исполнитель (монтажник)
    #[serde(default)]
    pub assigned_user_id: Option<i64>,
    #[serde(default)]
    pub assigned_user_name: Option<String>,

    #[serde(default)]
    pub work_type_id: Option<i64>,
    #[serde(default)]
    pub work_type_name: Option<String>,

    #[serde(default)]
    pub equipment_id: Option<i64>,
    #[serde(default)]
    pub equipment_name: Option<String>,

    /// Стоимость работ
    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkOrder {
    /// Заголовок для таблицы: название или "Заявка №id"
    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            format!("Заявка №{}", self.id)
        } else {
            self.title.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_row_deserializes() {
        let order: WorkOrder = serde_json::from_str(r#"{"id": 17}"#).unwrap();
        assert_eq!(order.id, 17);
        assert_eq!(order.status, WorkOrderStatus::New);
        assert_eq!(order.display_title(), "Заявка №17");
    }

    #[test]
    fn test_null_title_and_status_read_as_defaults() {
        let orders: Vec<WorkOrder> =
            serde_json::from_str(r#"[{"id": 1, "title": null, "status": null}, {"id": 2, "title": "Замена датчика"}]"#)
                .unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].title, "");
        assert_eq!(orders[0].status, WorkOrderStatus::New);
        assert_eq!(orders[0].display_title(), "Заявка №1");
        assert_eq!(orders[1].display_title(), "Замена датчика");
    }

    #[test]
    fn test_full_row_deserializes() {
        let order: WorkOrder = serde_json::from_str(
            r#"{
                "id": 3,
                "title": "Монтаж камеры",
                "status": "completed",
                "company_id": 1,
                "company_name": "Acme",
                "price": 1500.5,
                "completed_at": "2024-03-15T14:02:26Z"
            }"#,
        )
        .unwrap();
        assert_eq!(order.status, WorkOrderStatus::Completed);
        assert_eq!(order.company_name.as_deref(), Some("Acme"));
        assert_eq!(order.display_title(), "Монтаж камеры");
        assert!(order.completed_at.is_some());
    }
}

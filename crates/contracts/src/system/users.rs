use serde::{Deserialize, Serialize};

/// Роль пользователя дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Logistics,
    Installer,
    Support,
    #[serde(other)]
    Other,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Администратор",
            UserRole::Logistics => "Логист",
            UserRole::Installer => "Монтажник",
            UserRole::Support => "Техподдержка",
            UserRole::Other => "Пользователь",
        }
    }
}

/// Профиль текущего пользователя (`GET /api/profile`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub full_name: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub stats: ProfileStats,
}

/// Сводка по заявкам и заработку
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub in_progress_tasks: u32,
    #[serde(default)]
    pub total_earnings: f64,
}

impl ProfileStats {
    /// Доля выполненных заявок в процентах (0, если заявок нет)
    pub fn completion_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            0.0
        } else {
            f64::from(self.completed_tasks) * 100.0 / f64::from(self.total_tasks)
        }
    }
}

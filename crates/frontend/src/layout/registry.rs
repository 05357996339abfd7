//! Реестр страниц - единственный источник правды для маппинга PageKey → View

use crate::domain::a001_work_order::ui::roles::{
    AdminTasksPage, CompletedTasksPage, InstallerTasksPage, LogisticsTasksPage, SupportTasksPage,
};
use crate::system::profile::ui::ProfilePage;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageKey {
    #[default]
    AdminTasks,
    LogisticsTasks,
    InstallerTasks,
    SupportTasks,
    CompletedTasks,
    Profile,
}

impl PageKey {
    pub const TASK_PAGES: [PageKey; 5] = [
        PageKey::AdminTasks,
        PageKey::LogisticsTasks,
        PageKey::InstallerTasks,
        PageKey::SupportTasks,
        PageKey::CompletedTasks,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PageKey::AdminTasks => "admin",
            PageKey::LogisticsTasks => "logistics",
            PageKey::InstallerTasks => "installer",
            PageKey::SupportTasks => "support",
            PageKey::CompletedTasks => "completed",
            PageKey::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageKey::AdminTasks => "Администратор",
            PageKey::LogisticsTasks => "Логистика",
            PageKey::InstallerTasks => "Монтажник",
            PageKey::SupportTasks => "Техподдержка",
            PageKey::CompletedTasks => "История",
            PageKey::Profile => "Профиль",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PageKey::AdminTasks => "tasks",
            PageKey::LogisticsTasks => "truck",
            PageKey::InstallerTasks => "tool",
            PageKey::SupportTasks => "support",
            PageKey::CompletedTasks => "history",
            PageKey::Profile => "user",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::TASK_PAGES
            .into_iter()
            .chain([PageKey::Profile])
            .find(|p| p.key() == key)
    }
}

pub fn render_page(page: PageKey) -> AnyView {
    match page {
        PageKey::AdminTasks => view! { <AdminTasksPage /> }.into_any(),
        PageKey::LogisticsTasks => view! { <LogisticsTasksPage /> }.into_any(),
        PageKey::InstallerTasks => view! { <InstallerTasksPage /> }.into_any(),
        PageKey::SupportTasks => view! { <SupportTasksPage /> }.into_any(),
        PageKey::CompletedTasks => view! { <CompletedTasksPage /> }.into_any(),
        PageKey::Profile => view! { <ProfilePage /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(PageKey::from_key("support"), Some(PageKey::SupportTasks));
        assert_eq!(PageKey::from_key("profile"), Some(PageKey::Profile));
        assert_eq!(PageKey::from_key("a023_purchase_of_goods"), None);
    }
}

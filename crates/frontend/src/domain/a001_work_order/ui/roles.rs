//! Страницы заявок по ролям: набор фасетов, колонок и эндпоинт.

use super::list::columns::Column;
use super::list::WorkOrderList;
use crate::domain::a001_work_order::api::{
    WorkOrderSource, ADMIN_TASKS, COMPLETED_TASKS, INSTALLER_TASKS, LOGISTICS_TASKS, SUPPORT_TASKS,
};
use crate::shared::filters::schema::{
    FACET_ASSIGNEE, FACET_COMPANY, FACET_EQUIPMENT, FACET_STATUS, FACET_TASK_ID, FACET_WORK_TYPE,
};
use crate::shared::filters::{FacetSpec, FilterSchema};
use leptos::prelude::*;

pub const ADMIN_SCHEMA: FilterSchema = FilterSchema {
    facets: &[FACET_STATUS, FACET_COMPANY, FACET_ASSIGNEE, FACET_WORK_TYPE, FACET_EQUIPMENT],
};

pub const LOGISTICS_SCHEMA: FilterSchema = FilterSchema {
    facets: &[FACET_STATUS, FACET_COMPANY, FACET_ASSIGNEE, FACET_EQUIPMENT],
};

pub const INSTALLER_SCHEMA: FilterSchema = FilterSchema {
    facets: &[FACET_STATUS, FACET_WORK_TYPE, FACET_EQUIPMENT],
};

pub const SUPPORT_SCHEMA: FilterSchema = FilterSchema {
    facets: &[FACET_TASK_ID, FACET_STATUS, FACET_COMPANY, FACET_ASSIGNEE],
};

/// История: статус фиксирован сервером, поэтому фасета статуса нет
const COMPLETED_FACETS: &[FacetSpec] = &[FACET_COMPANY, FACET_ASSIGNEE, FACET_WORK_TYPE];
pub const COMPLETED_SCHEMA: FilterSchema = FilterSchema {
    facets: COMPLETED_FACETS,
};

const ADMIN_COLUMNS: &[Column] = &[
    Column::Id,
    Column::Title,
    Column::Status,
    Column::Company,
    Column::Assignee,
    Column::WorkType,
    Column::Price,
    Column::CreatedAt,
];

const LOGISTICS_COLUMNS: &[Column] = &[
    Column::Id,
    Column::Title,
    Column::Status,
    Column::Address,
    Column::Assignee,
    Column::Equipment,
    Column::CreatedAt,
];

const INSTALLER_COLUMNS: &[Column] = &[
    Column::Id,
    Column::Title,
    Column::Status,
    Column::Address,
    Column::WorkType,
    Column::Equipment,
    Column::Price,
];

const SUPPORT_COLUMNS: &[Column] = &[
    Column::Id,
    Column::Title,
    Column::Status,
    Column::Company,
    Column::Assignee,
    Column::CreatedAt,
];

const COMPLETED_COLUMNS: &[Column] = &[
    Column::Id,
    Column::Title,
    Column::Company,
    Column::Assignee,
    Column::WorkType,
    Column::Price,
    Column::CompletedAt,
];

#[component]
pub fn AdminTasksPage() -> impl IntoView {
    view! {
        <WorkOrderList
            page_id="a001_work_order--admin"
            title="Все заявки"
            schema=ADMIN_SCHEMA
            source=WorkOrderSource::new(ADMIN_TASKS)
            columns=ADMIN_COLUMNS
        />
    }
}

#[component]
pub fn LogisticsTasksPage() -> impl IntoView {
    view! {
        <WorkOrderList
            page_id="a001_work_order--logistics"
            title="Логистика"
            schema=LOGISTICS_SCHEMA
            source=WorkOrderSource::new(LOGISTICS_TASKS)
            columns=LOGISTICS_COLUMNS
            search_placeholder="Название, адрес..."
        />
    }
}

#[component]
pub fn InstallerTasksPage() -> impl IntoView {
    view! {
        <WorkOrderList
            page_id="a001_work_order--installer"
            title="Мои заявки"
            schema=INSTALLER_SCHEMA
            source=WorkOrderSource::new(INSTALLER_TASKS)
            columns=INSTALLER_COLUMNS
        />
    }
}

#[component]
pub fn SupportTasksPage() -> impl IntoView {
    view! {
        <WorkOrderList
            page_id="a001_work_order--support"
            title="Техподдержка"
            schema=SUPPORT_SCHEMA
            source=WorkOrderSource::new(SUPPORT_TASKS)
            columns=SUPPORT_COLUMNS
            search_placeholder="Описание проблемы, адрес..."
        />
    }
}

#[component]
pub fn CompletedTasksPage() -> impl IntoView {
    view! {
        <WorkOrderList
            page_id="a001_work_order--completed"
            title="Выполненные заявки"
            schema=COMPLETED_SCHEMA
            source=WorkOrderSource::new(COMPLETED_TASKS)
            columns=COMPLETED_COLUMNS
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_support_has_task_number_facet() {
        assert!(SUPPORT_SCHEMA.facet("task_id").is_some());
        for schema in [ADMIN_SCHEMA, LOGISTICS_SCHEMA, INSTALLER_SCHEMA, COMPLETED_SCHEMA] {
            assert!(schema.facet("task_id").is_none());
        }
    }

    #[test]
    fn test_history_has_no_status_facet() {
        assert!(COMPLETED_SCHEMA.facet("status").is_none());
        assert!(!COMPLETED_COLUMNS.contains(&Column::Status));
        assert!(COMPLETED_COLUMNS.contains(&Column::CompletedAt));
    }
}

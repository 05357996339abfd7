use crate::shared::api_utils::{post_json, ApiError};
use crate::shared::filters::TaskSource;
use contracts::domain::a001_work_order::WorkOrder;
use contracts::shared::filters::FilterState;
use std::future::Future;

pub const ADMIN_TASKS: &str = "/api/admin/tasks/filter";
pub const LOGISTICS_TASKS: &str = "/api/logistics/tasks/filter";
pub const INSTALLER_TASKS: &str = "/api/installer/tasks/filter";
pub const SUPPORT_TASKS: &str = "/api/support/tasks/filter";
pub const COMPLETED_TASKS: &str = "/api/tasks/completed/filter";

/// Отфильтрованный список заявок; `null` в ответе считается пустым списком
pub async fn fetch_filtered(endpoint: &str, filter: &FilterState) -> Result<Vec<WorkOrder>, ApiError> {
    let rows: Option<Vec<WorkOrder>> = post_json(endpoint, filter).await?;
    Ok(rows.unwrap_or_default())
}

/// Источник заявок для страницы роли
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkOrderSource {
    pub endpoint: &'static str,
}

impl WorkOrderSource {
    pub const fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

impl TaskSource for WorkOrderSource {
    type Row = WorkOrder;

    fn fetch(&self, filter: FilterState) -> impl Future<Output = Result<Vec<WorkOrder>, ApiError>> + 'static {
        let endpoint = self.endpoint;
        async move { fetch_filtered(endpoint, &filter).await }
    }
}

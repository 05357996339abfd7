//! Описание фасетов страницы и эндпоинтов справочников.

use contracts::shared::catalog::FilterFacetOption;

/// Задержка фиксации текста поиска после последнего нажатия клавиши.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

pub const CATALOG_COMPANIES: &str = "/api/companies";
pub const CATALOG_ASSIGNEES: &str = "/api/users/installers";
pub const CATALOG_WORK_TYPES: &str = "/api/work-types";
pub const CATALOG_EQUIPMENT: &str = "/api/equipment";

/// Откуда берутся варианты фасета.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSource {
    /// Built-in list of `(value, label)` pairs.
    Static(&'static [(&'static str, &'static str)]),
    /// Loaded once on mount from a catalog endpoint returning `{id, name}` rows.
    Catalog(&'static str),
    /// Free input normalized into a selection (e.g. task number).
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetSpec {
    /// Key in the filter object sent to the API.
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub source: FacetSource,
}

impl FacetSpec {
    pub fn static_options(&self) -> Vec<FilterFacetOption> {
        match self.source {
            FacetSource::Static(pairs) => pairs
                .iter()
                .map(|(value, label)| FilterFacetOption::new(*value, *label))
                .collect(),
            FacetSource::Catalog(_) | FacetSource::Input => Vec::new(),
        }
    }

    pub fn catalog_endpoint(&self) -> Option<&'static str> {
        match self.source {
            FacetSource::Catalog(endpoint) => Some(endpoint),
            FacetSource::Static(_) | FacetSource::Input => None,
        }
    }
}

/// Набор фасетов одной страницы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSchema {
    pub facets: &'static [FacetSpec],
}

impl FilterSchema {
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.facets.iter().map(|f| f.key)
    }

    pub fn facet(&self, key: &str) -> Option<&'static FacetSpec> {
        self.facets.iter().find(|f| f.key == key)
    }
}

const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("new", "Новая"),
    ("assigned", "Назначена"),
    ("in_progress", "В работе"),
    ("completed", "Выполнена"),
    ("cancelled", "Отменена"),
];

pub const FACET_STATUS: FacetSpec = FacetSpec {
    key: "status",
    label: "Статус",
    placeholder: "Все статусы",
    source: FacetSource::Static(STATUS_OPTIONS),
};

pub const FACET_COMPANY: FacetSpec = FacetSpec {
    key: "company_id",
    label: "Компания",
    placeholder: "Все компании",
    source: FacetSource::Catalog(CATALOG_COMPANIES),
};

pub const FACET_ASSIGNEE: FacetSpec = FacetSpec {
    key: "assigned_user_id",
    label: "Исполнитель",
    placeholder: "Все исполнители",
    source: FacetSource::Catalog(CATALOG_ASSIGNEES),
};

pub const FACET_WORK_TYPE: FacetSpec = FacetSpec {
    key: "work_type_id",
    label: "Тип работ",
    placeholder: "Все типы работ",
    source: FacetSource::Catalog(CATALOG_WORK_TYPES),
};

pub const FACET_EQUIPMENT: FacetSpec = FacetSpec {
    key: "equipment_id",
    label: "Оборудование",
    placeholder: "Всё оборудование",
    source: FacetSource::Catalog(CATALOG_EQUIPMENT),
};

pub const FACET_TASK_ID: FacetSpec = FacetSpec {
    key: "task_id",
    label: "Номер заявки",
    placeholder: "№",
    source: FacetSource::Input,
};

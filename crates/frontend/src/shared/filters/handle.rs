//! Привязка [`FilterController`] к реактивной системе Leptos.
//!
//! Исполняет команды контроллера: запросы через `spawn_local`, таймеры дебаунса
//! через `gloo_timers::callback::Timeout` (drop отменяет таймер), по одному на
//! каждое поле ввода.

use super::controller::{Command, FetchOutcome, FilterController, Phase, TextField};
use super::schema::FilterSchema;
use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::components::filter_panel::{active_filters, ActiveFilter};
use contracts::shared::catalog::{CatalogItem, FilterFacetOption};
use contracts::shared::filters::{FacetInput, FilterState, FilterValue};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use std::future::Future;

/// Источник строк списка для страницы.
pub trait TaskSource: Copy + Send + Sync + 'static {
    type Row: Clone + Send + Sync + 'static;

    /// Fetches rows matching the complete filter snapshot.
    fn fetch(&self, filter: FilterState)
        -> impl Future<Output = Result<Vec<Self::Row>, ApiError>> + 'static;
}

pub async fn fetch_catalog(endpoint: &str) -> Result<Vec<CatalogItem>, ApiError> {
    let items: Option<Vec<CatalogItem>> = get_json(endpoint).await?;
    Ok(items.unwrap_or_default())
}

pub struct FilterControllerHandle<S: TaskSource> {
    state: RwSignal<FilterController<S::Row>>,
    timers: StoredValue<BTreeMap<TextField, Timeout>, LocalStorage>,
    source: S,
}

impl<S: TaskSource> Clone for FilterControllerHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: TaskSource> Copy for FilterControllerHandle<S> {}

/// Creates the controller for the current page and starts the initial loads.
/// Pending debounce timers are dropped together with the page.
pub fn use_filter_controller<S: TaskSource>(
    schema: FilterSchema,
    source: S,
) -> FilterControllerHandle<S> {
    let handle = FilterControllerHandle {
        state: RwSignal::new(FilterController::new(schema)),
        timers: StoredValue::new_local(BTreeMap::new()),
        source,
    };

    Effect::new(move |_| {
        let commands = handle.state.try_update(|c| c.mount()).unwrap_or_default();
        for command in commands {
            handle.run(command);
        }
    });

    on_cleanup(move || {
        handle.timers.try_update_value(BTreeMap::clear);
    });

    handle
}

impl<S: TaskSource> FilterControllerHandle<S> {
    pub fn input_search(&self, text: String) {
        self.apply(move |c| Some(c.input_search(text)));
    }

    pub fn input_facet(&self, key: &'static str, text: String) {
        self.apply(move |c| Some(c.input_facet(key, text)));
    }

    pub fn change_facet(&self, key: &'static str, input: impl Into<FacetInput>) {
        let input = input.into();
        self.apply(move |c| Some(c.change_facet(key, input)));
    }

    pub fn clear_facet(&self, key: &'static str) {
        self.apply(move |c| Some(c.clear_facet(key)));
    }

    pub fn clear_all(&self) {
        self.timers.update_value(BTreeMap::clear);
        self.apply(|c| Some(c.clear_all()));
    }

    pub fn refresh(&self) {
        self.apply(|c| Some(c.refresh()));
    }

    fn apply(&self, f: impl FnOnce(&mut FilterController<S::Row>) -> Option<Command>) {
        if let Some(Some(command)) = self.state.try_update(f) {
            self.run(command);
        }
    }

    fn run(self, command: Command) {
        let state = self.state;
        match command {
            Command::Fetch { request, filter } => {
                let source = self.source;
                log::debug!("Загрузка заявок {:?}: {:?}", request, filter);
                spawn_local(async move {
                    let result = source.fetch(filter).await;
                    if let Err(e) = &result {
                        log::error!("Не удалось загрузить заявки: {}", e);
                    }
                    let message = result.as_ref().err().map(ToString::to_string);
                    match state.try_update(|c| c.fetch_resolved(request, result)) {
                        Some(FetchOutcome::Failed) => {
                            if let (Some(window), Some(message)) = (web_sys::window(), message) {
                                let _ = window.alert_with_message(&format!(
                                    "Не удалось загрузить заявки: {}",
                                    message
                                ));
                            }
                        }
                        Some(FetchOutcome::Stale) => {
                            log::debug!("Ответ {:?} устарел и отброшен", request);
                        }
                        Some(FetchOutcome::Applied) | None => {}
                    }
                });
            }
            Command::LoadCatalog { facet, endpoint } => {
                spawn_local(async move {
                    let result = fetch_catalog(endpoint).await;
                    if let Some(Some(e)) = state.try_update(|c| c.catalog_resolved(facet, result)) {
                        log::error!("Не удалось загрузить справочник {}: {}", endpoint, e);
                    }
                });
            }
            Command::ScheduleCommit {
                field,
                ticket,
                delay_ms,
            } => {
                let timeout = Timeout::new(delay_ms, move || {
                    self.apply(move |c| c.timer_elapsed(field, ticket));
                });
                // replacing the field's stored timeout cancels the previous one
                self.timers.update_value(|timers| {
                    timers.insert(field, timeout);
                });
            }
        }
    }

    pub fn rows(&self) -> Vec<S::Row> {
        self.state.with(|c| c.rows().to_vec())
    }

    pub fn row_count(&self) -> usize {
        self.state.with(|c| c.rows().len())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|c| c.is_loading())
    }

    pub fn phase(&self) -> Phase {
        self.state.with(|c| c.phase())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|c| c.error().map(str::to_string))
    }

    pub fn pending_search(&self) -> String {
        self.state.with(|c| c.pending_search().to_string())
    }

    pub fn pending_input(&self, facet: &str) -> String {
        self.state.with(|c| c.pending_input(facet))
    }

    /// Поиск, уже попавший в фильтр (после дебаунса)
    pub fn committed_search(&self) -> String {
        self.state.with(|c| c.filter().search.clone())
    }

    pub fn options(&self, facet: &str) -> Vec<FilterFacetOption> {
        self.state.with(|c| c.options(facet).to_vec())
    }

    pub fn selected(&self, facet: &str) -> Vec<FilterValue> {
        self.state.with(|c| c.selected(facet).to_vec())
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.state.with(active_filters)
    }

    pub fn active_filter_count(&self) -> usize {
        self.state.with(|c| c.active_filter_count())
    }
}

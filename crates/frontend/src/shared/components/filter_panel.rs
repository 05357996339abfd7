//! Панель фильтров над списком заявок.
//!
//! В заголовке счётчик и кнопки списка, в теле поля фасетов и чипы
//! зафиксированных ограничений. Чип снимает своё ограничение.

use crate::shared::filters::{FacetSpec, FilterController};
use crate::shared::icons::icon;
use contracts::shared::catalog::{option_label, FilterFacetOption};
use contracts::shared::filters::FilterValue;
use leptos::prelude::*;

/// Ключ чипа строки поиска
pub const SEARCH_CHIP: &str = "search";

/// Одно активное ограничение
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveFilter {
    /// [`SEARCH_CHIP`] или ключ фасета
    pub key: &'static str,
    pub label: String,
}

/// Подпись чипа фасета: "Компания: ООО Климат, ООО Холод"
///
/// Значения без подписи в справочнике показываются как есть.
pub fn tag_label(spec: &FacetSpec, options: &[FilterFacetOption], selected: &[FilterValue]) -> Option<String> {
    if selected.is_empty() {
        return None;
    }
    let values = selected
        .iter()
        .map(|v| option_label(options, v).map_or_else(|| v.to_string(), str::to_string))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{}: {}", spec.label, values))
}

/// Чипы по зафиксированному фильтру: поиск, затем фасеты в порядке схемы.
/// Набранный, но ещё не зафиксированный текст чипа не даёт.
pub fn active_filters<T>(ctl: &FilterController<T>) -> Vec<ActiveFilter> {
    let search = ctl.filter().search.trim();
    let search_chip = (!search.is_empty()).then(|| ActiveFilter {
        key: SEARCH_CHIP,
        label: format!("Поиск: {}", search),
    });
    let facet_chips = ctl.schema().facets.iter().filter_map(|spec| {
        tag_label(spec, ctl.options(spec.key), ctl.selected(spec.key)).map(|label| ActiveFilter {
            key: spec.key,
            label,
        })
    });
    search_chip.into_iter().chain(facet_chips).collect()
}

#[component]
pub fn FilterPanel(
    #[prop(into)]
    chips: Signal<Vec<ActiveFilter>>,

    /// Receives the chip key
    on_remove: Callback<&'static str>,

    /// Header buttons
    #[prop(into)]
    actions: ViewFn,

    /// Facet fields
    children: Children,
) -> impl IntoView {
    let expanded = RwSignal::new(true);
    let count = move || chips.with(Vec::len);

    view! {
        <section class="filter-panel">
            <header class="filter-panel-header">
                <button
                    type="button"
                    class="filter-panel-header__left"
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    <Show when=move || { count() > 0 }>
                        <span class="badge badge--primary">{count}</span>
                    </Show>
                </button>
                <div class="filter-panel-header__right">{actions.run()}</div>
            </header>

            <div class=move || {
                if expanded.get() {
                    "filter-panel__collapsible"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                    <ul class="filter-panel__tags">
                        <For
                            each=move || chips.get()
                            key=|chip| chip.clone()
                            children=move |chip| view! { <FilterChip chip=chip on_remove=on_remove /> }
                        />
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FilterChip(chip: ActiveFilter, on_remove: Callback<&'static str>) -> impl IntoView {
    let key = chip.key;
    view! {
        <li class="filter-tag">
            <span>{chip.label}</span>
            <button
                type="button"
                class="filter-tag__remove"
                title="Снять фильтр"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(key);
                }
            >
                {icon("x")}
            </button>
        </li>
    }
}

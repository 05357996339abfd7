pub mod columns;

use self::columns::Column;
use crate::domain::a001_work_order::api::WorkOrderSource;
use crate::shared::components::faceted_multi_select::FacetedMultiSelect;
use crate::shared::components::filter_panel::{FilterPanel, SEARCH_CHIP};
use crate::shared::components::ui::badge::{Badge as UiBadge, StatusBadge};
use crate::shared::filters::{
    use_filter_controller, FacetSource, FacetSpec, FilterControllerHandle, FilterSchema, Phase,
};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::shared::filters::FilterValue;
use leptos::prelude::*;
use thaw::*;

type Handle = FilterControllerHandle<WorkOrderSource>;

/// Подсказка рядом со строкой поиска
pub fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::PendingDebounce => "Ввод...",
        Phase::Fetching => "Загрузка...",
        Phase::Idle | Phase::Settled => "",
    }
}

/// Список заявок с фильтрами; одна и та же страница для всех ролей
#[component]
pub fn WorkOrderList(
    /// `{entity}--{role}`
    page_id: &'static str,
    title: &'static str,
    schema: FilterSchema,
    source: WorkOrderSource,
    columns: &'static [Column],
    #[prop(optional)]
    search_placeholder: &'static str,
) -> impl IntoView {
    let ctl = use_filter_controller(schema, source);

    let search_placeholder = if search_placeholder.is_empty() {
        "Название, адрес, описание..."
    } else {
        search_placeholder
    };

    let remove_chip = Callback::new(move |key: &'static str| {
        if key == SEARCH_CHIP {
            ctl.input_search(String::new());
        } else {
            ctl.clear_facet(key);
        }
    });

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || ctl.row_count().to_string()}
                    </UiBadge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || ctl.pending_search())
                        committed=Signal::derive(move || ctl.committed_search())
                        on_input=Callback::new(move |text: String| ctl.input_search(text))
                        placeholder=search_placeholder.to_string()
                    />
                    <span class="page__hint">{move || phase_hint(ctl.phase())}</span>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    chips=Signal::derive(move || ctl.active_filters())
                    on_remove=remove_chip
                    actions=move || view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| ctl.clear_all()
                            disabled=Signal::derive(move || ctl.active_filter_count() == 0)
                        >
                            "Сбросить"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| ctl.refresh()
                            disabled=Signal::derive(move || ctl.is_loading())
                        >
                            {icon("refresh")}
                            {move || if ctl.is_loading() { " Загрузка..." } else { " Обновить" }}
                        </Button>
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End style="flex-wrap: wrap;">
                        {schema.facets.iter().map(|spec| facet_field(ctl, spec)).collect_view()}
                    </Flex>
                </FilterPanel>

                {move || ctl.error().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <Show when=move || ctl.is_loading()>
                    <div class="page__loading">
                        <Spinner />
                    </div>
                </Show>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                {columns.iter().map(|col| view! {
                                    <TableHeaderCell resizable=false attr:style=format!("min-width: {}px;", col.min_width_px())>
                                        {col.header()}
                                    </TableHeaderCell>
                                }).collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctl.rows()
                                key=|row| row.id
                                children=move |row| {
                                    columns.iter().map(|col| {
                                        let cell = match col {
                                            Column::Status => view! { <StatusBadge status=row.status /> }.into_any(),
                                            _ => col.cell_text(&row).into_any(),
                                        };
                                        let class = if col.is_numeric() { "text-right" } else { "" };
                                        view! {
                                            <TableCell class=class>
                                                <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                            </TableCell>
                                        }
                                    }).collect_view()
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || !ctl.is_loading() && ctl.row_count() == 0 && ctl.error().is_none()>
                        <div class="table__empty">"Заявок не найдено"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

fn facet_field(ctl: Handle, spec: &'static FacetSpec) -> AnyView {
    let key = spec.key;
    match spec.source {
        FacetSource::Input => view! {
            <div class="form__group">
                <label class="form__label">{spec.label}</label>
                <input
                    type="text"
                    class="form__input"
                    placeholder=spec.placeholder
                    prop:value=move || ctl.pending_input(key)
                    on:input=move |ev| ctl.input_facet(key, event_target_value(&ev))
                />
            </div>
        }
        .into_any(),
        FacetSource::Static(_) | FacetSource::Catalog(_) => view! {
            <div style="min-width: 200px;">
                <FacetedMultiSelect
                    label=spec.label.to_string()
                    options=Signal::derive(move || ctl.options(key))
                    selected=Signal::derive(move || ctl.selected(key))
                    on_change=Callback::new(move |values: Vec<FilterValue>| ctl.change_facet(key, values))
                    placeholder=spec.placeholder.to_string()
                />
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_hint() {
        assert_eq!(phase_hint(Phase::PendingDebounce), "Ввод...");
        assert_eq!(phase_hint(Phase::Settled), "");
    }
}

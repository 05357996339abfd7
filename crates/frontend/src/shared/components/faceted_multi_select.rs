use crate::shared::filters::multi_select::{clear_all, rendered_summary, toggle_option, PanelState};
use crate::shared::filters::outside_click::OutsideClickListener;
use crate::shared::icons::icon;
use contracts::shared::catalog::FilterFacetOption;
use contracts::shared::filters::FilterValue;
use leptos::prelude::*;

/// FacetedMultiSelect component - dropdown with checkboxes for one filter facet
///
/// Controlled: the parent owns `selected` and receives every change through
/// `on_change`. The widget only keeps track of whether its panel is open.
/// A press anywhere outside the widget closes the panel.
#[component]
pub fn FacetedMultiSelect(
    /// Facet caption shown above the trigger
    #[prop(optional, into)]
    label: Option<String>,

    /// Available options
    #[prop(into)]
    options: Signal<Vec<FilterFacetOption>>,

    /// Currently selected values
    #[prop(into)]
    selected: Signal<Vec<FilterValue>>,

    /// Receives the complete new selection
    on_change: Callback<Vec<FilterValue>>,

    /// Trigger text when nothing is selected
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());
    let container = NodeRef::<leptos::html::Div>::new();
    let listener = StoredValue::new_local(None::<OutsideClickListener>);

    Effect::new(move |_| {
        if let Some(el) = container.get() {
            let guard = OutsideClickListener::attach(el.into(), move |inside| {
                panel.try_update(|p| *p = p.pointer_down(inside));
            });
            listener.set_value(guard);
        }
    });

    on_cleanup(move || {
        listener.try_update_value(|l| l.take());
    });

    let toggle = move |value: FilterValue| {
        let next = selected.with_untracked(|s| toggle_option(s, &value));
        on_change.run(next);
    };

    let summary = move || selected.with(|s| options.with(|o| rendered_summary(o, s, &placeholder)));

    view! {
        <div class="multi-select" node_ref=container>
            {label.map(|l| view! { <label class="form__label">{l}</label> })}
            <button
                type="button"
                class="multi-select__trigger"
                class:multi-select__trigger--active=move || selected.with(|s| !s.is_empty())
                on:click=move |_| panel.update(|p| *p = p.toggle())
            >
                <span class="multi-select__summary">{summary}</span>
                {move || if panel.get().open {
                    icon("chevron-up")
                } else {
                    icon("chevron-down")
                }}
            </button>

            <Show when=move || panel.get().open>
                <div class="multi-select__panel">
                    <div class="multi-select__actions">
                        <button
                            type="button"
                            class="multi-select__clear"
                            disabled=move || selected.with(|s| s.is_empty())
                            on:click=move |_| on_change.run(clear_all())
                        >
                            "Очистить"
                        </button>
                    </div>
                    {move || {
                        let opts = options.get();
                        if opts.is_empty() {
                            view! {
                                <div class="multi-select__empty">"Нет вариантов"</div>
                            }.into_any()
                        } else {
                            opts.into_iter().map(|opt| {
                                let value = opt.value.clone();
                                let checked_value = opt.value.clone();
                                view! {
                                    <label class="multi-select__option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected.with(|s| s.contains(&checked_value))
                                            on:change=move |_| toggle(value.clone())
                                        />
                                        <span>{opt.label}</span>
                                    </label>
                                }
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

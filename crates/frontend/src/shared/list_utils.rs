/// UI-компоненты для списков (строка поиска)
use leptos::prelude::*;

/// Компонент поиска с кнопкой очистки
///
/// Отдаёт каждое изменение текста сразу; дебаунс делает владелец фильтра.
#[component]
pub fn SearchInput(
    /// Текст в поле ввода (ещё не зафиксированный в фильтре)
    #[prop(into)]
    value: Signal<String>,
    /// Применённый поиск (для подсветки активного фильтра)
    #[prop(into)]
    committed: Signal<String>,
    /// Callback на каждое изменение текста
    #[prop(into)]
    on_input: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !committed.get().trim().is_empty();

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=move |_| on_input.run(String::new())
                        title="Очистить"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

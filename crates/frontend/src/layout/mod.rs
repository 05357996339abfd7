pub mod global_context;
pub mod left;
pub mod registry;

use crate::shared::icons::icon;
use global_context::AppGlobalContext;
use left::Sidebar;
use leptos::prelude::*;
use registry::render_page;

/// Оболочка приложения.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="app-layout">
            <div class="top-header">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {icon("menu")}
                </button>
                <div class="top-header__brand">
                    <span class="top-header__title">"Сервисные заявки"</span>
                </div>
                <div class="top-header__page">{move || ctx.active.get().label()}</div>
            </div>

            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !is_sidebar_visible()>
                    <Sidebar />
                </div>
                <div class="app-main" data-zone="center" style="flex: 1; overflow: auto;">
                    {move || render_page(ctx.active.get())}
                </div>
            </div>
        </div>
    }
}

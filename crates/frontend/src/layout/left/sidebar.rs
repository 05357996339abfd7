//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::PageKey;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: &'static [PageKey],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        id: "tasks",
        label: "Заявки",
        items: &PageKey::TASK_PAGES,
    },
    MenuGroup {
        id: "account",
        label: "Аккаунт",
        items: &[PageKey::Profile],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let collapsed_groups = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <nav class="app-sidebar__content">
            {MENU_GROUPS.iter().map(|group| {
                let gid = group.id;
                let is_expanded = move || !collapsed_groups.with(|c| c.contains(&gid));
                view! {
                    <div>
                        <div
                            class="app-sidebar__group"
                            on:click=move |_| collapsed_groups.update(|c| {
                                if let Some(pos) = c.iter().position(|x| *x == gid) {
                                    c.remove(pos);
                                } else {
                                    c.push(gid);
                                }
                            })
                        >
                            <span>{group.label}</span>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&page| view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.active.get() == page
                                        on:click=move |_| ctx.open(page)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(page.icon())}
                                            <span>{page.label()}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

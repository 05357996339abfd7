//! PageFrame: корневая обёртка каждой страницы.
//!
//! На корневом элементе всегда есть:
//!   - `id`                : `"{entity}--{category}"`, например `"a001_work_order--admin"`
//!   - `data-page-category`: одна из констант PAGE_CAT_*

use leptos::prelude::*;

/// Список заявок: таблица с фильтрами.
pub const PAGE_CAT_LIST: &str = "list";

/// Служебная страница (профиль).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, rest)) if !entity.is_empty() && !rest.is_empty())
}

fn frame_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// PAGE_CAT_LIST or PAGE_CAT_SYSTEM
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: нестандартный id страницы {:?}", page_id);
    }

    view! {
        <div id=page_id class=frame_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_work_order--admin"));
        assert!(!is_valid_page_id("a001_work_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("profile--"));
    }

    #[test]
    fn test_frame_class() {
        assert_eq!(frame_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(frame_class(PAGE_CAT_SYSTEM, "profile"), "page page--system profile");
    }
}

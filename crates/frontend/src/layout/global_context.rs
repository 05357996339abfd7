use crate::layout::registry::PageKey;
use leptos::prelude::*;

/// Состояние оболочки: открытая страница и видимость навигации
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<PageKey>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let initial = location_hash()
            .and_then(|hash| PageKey::from_key(hash.trim_start_matches('#')))
            .unwrap_or_default();
        Self {
            active: RwSignal::new(initial),
            left_open: RwSignal::new(true),
        }
    }

    /// Переключает страницу; предыдущая размонтируется вместе с её таймерами
    pub fn open(&self, page: PageKey) {
        if self.active.get_untracked() != page {
            log::debug!("Открыта страница {}", page.key());
            if let Some(location) = web_sys::window().map(|w| w.location()) {
                let _ = location.set_hash(page.key());
            }
            self.active.set(page);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|v| *v = !*v);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn location_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

//! Логика мультиселекта фасета без привязки к DOM.
//!
//! Виджет [`FacetedMultiSelect`](crate::shared::components::faceted_multi_select::FacetedMultiSelect)
//! только вызывает эти функции и передаёт результат родителю через `on_change`.

use contracts::shared::catalog::{option_label, FilterFacetOption};
use contracts::shared::filters::{FilterSelection, FilterValue};

/// Selection after clicking `value`: removed if present, appended otherwise.
pub fn toggle_option(selected: &[FilterValue], value: &FilterValue) -> Vec<FilterValue> {
    FilterSelection::from_values(selected.iter().cloned())
        .toggled(value)
        .into()
}

pub fn clear_all() -> Vec<FilterValue> {
    Vec::new()
}

/// Текст на кнопке мультиселекта.
///
/// Пусто: плейсхолдер. Одно значение: его подпись (или плейсхолдер, если
/// варианта больше нет в справочнике). Больше одного: "N выбрано".
pub fn rendered_summary(
    options: &[FilterFacetOption],
    selected: &[FilterValue],
    placeholder: &str,
) -> String {
    match selected {
        [] => placeholder.to_string(),
        [only] => option_label(options, only)
            .unwrap_or(placeholder)
            .to_string(),
        many => format!("{} выбрано", many.len()),
    }
}

/// Состояние выпадающей панели. Единственное собственное состояние виджета.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    pub open: bool,
}

impl PanelState {
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Pointer-down landed somewhere; only a press outside closes the panel.
    pub fn pointer_down(self, inside: bool) -> Self {
        if inside {
            self
        } else {
            Self { open: false }
        }
    }
}

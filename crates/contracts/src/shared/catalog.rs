use super::filters::FilterValue;
use serde::{Deserialize, Serialize};

/// Строка справочника, как её отдают `/api/companies`, `/api/work-types` и т.п.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: FilterValue,
    pub name: String,
}

/// Вариант выбора в фасете фильтра.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterFacetOption {
    pub value: FilterValue,
    pub label: String,
}

impl FilterFacetOption {
    pub fn new(value: impl Into<FilterValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<CatalogItem> for FilterFacetOption {
    fn from(item: CatalogItem) -> Self {
        Self {
            value: item.id,
            label: item.name,
        }
    }
}

/// Maps a raw catalog into facet options, preserving order.
pub fn catalog_to_options(items: Vec<CatalogItem>) -> Vec<FilterFacetOption> {
    items.into_iter().map(FilterFacetOption::from).collect()
}

/// Looks up the label for `value`. With duplicate values the last entry wins.
pub fn option_label<'a>(options: &'a [FilterFacetOption], value: &FilterValue) -> Option<&'a str> {
    options
        .iter()
        .rev()
        .find(|o| &o.value == value)
        .map(|o| o.label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_maps_id_and_name() {
        let items: Vec<CatalogItem> =
            serde_json::from_str(r#"[{"id": 1, "name": "Acme"}]"#).unwrap();
        let options = catalog_to_options(items);
        assert_eq!(options, vec![FilterFacetOption::new(1, "Acme")]);
    }

    #[test]
    fn test_option_label_last_duplicate_wins() {
        let options = vec![
            FilterFacetOption::new(1, "First"),
            FilterFacetOption::new(1, "Second"),
        ];
        assert_eq!(option_label(&options, &FilterValue::Int(1)), Some("Second"));
        assert_eq!(option_label(&options, &FilterValue::Int(2)), None);
    }
}

use super::input::FacetInput;
use super::selection::FilterSelection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Полный набор фильтров страницы: текст поиска плюс выборка по каждому фасету.
///
/// Сериализуется плоским объектом, который и уходит в запрос списка:
/// `{"search": "ivan", "status": ["new"], "company_id": [1, 2]}`.
/// Пустой фасет означает "без ограничения".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search: String,
    #[serde(flatten)]
    facets: BTreeMap<String, FilterSelection>,
}

impl FilterState {
    /// All-empty state for the given facet names.
    pub fn empty<'a>(facet_keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            search: String::new(),
            facets: facet_keys
                .into_iter()
                .map(|k| (k.to_string(), FilterSelection::new()))
                .collect(),
        }
    }

    pub fn facet(&self, key: &str) -> Option<&FilterSelection> {
        self.facets.get(key)
    }

    pub fn facets(&self) -> impl Iterator<Item = (&str, &FilterSelection)> {
        self.facets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a new state with `key` replaced by the normalized `input`.
    /// Unknown keys are added rather than rejected.
    pub fn with_facet(&self, key: &str, input: impl Into<FacetInput>) -> Self {
        let mut next = self.clone();
        next.facets.insert(key.to_string(), input.into().normalize());
        next
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            facets: self.facets.clone(),
        }
    }

    /// Same facet names, every selection emptied, search cleared.
    pub fn cleared(&self) -> Self {
        Self::empty(self.facets.keys().map(String::as_str))
    }

    /// Number of dimensions that currently constrain the result.
    pub fn active_count(&self) -> usize {
        let facets = self.facets.values().filter(|s| !s.is_empty()).count();
        facets + usize::from(!self.search.is_empty())
    }
}

use super::value::FilterValue;
use serde::{Deserialize, Serialize};

/// Выбранные значения одного фасета.
///
/// Порядок: порядок вставки, но смысл имеет только принадлежность.
/// Все операции возвращают новую выборку и не трогают исходную.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection(Vec<FilterValue>);

impl FilterSelection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a selection from arbitrary values, dropping repeats.
    pub fn from_values(values: impl IntoIterator<Item = FilterValue>) -> Self {
        let mut out = Vec::new();
        for v in values {
            if !out.contains(&v) {
                out.push(v);
            }
        }
        Self(out)
    }

    pub fn contains(&self, value: &FilterValue) -> bool {
        self.0.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[FilterValue] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterValue> {
        self.0.iter()
    }

    pub fn with(&self, value: FilterValue) -> Self {
        if self.contains(&value) {
            return self.clone();
        }
        let mut next = self.0.clone();
        next.push(value);
        Self(next)
    }

    pub fn without(&self, value: &FilterValue) -> Self {
        Self(self.0.iter().filter(|v| *v != value).cloned().collect())
    }

    /// Убирает значение, если оно выбрано, иначе добавляет в конец.
    pub fn toggled(&self, value: &FilterValue) -> Self {
        if self.contains(value) {
            self.without(value)
        } else {
            self.with(value.clone())
        }
    }
}

impl From<Vec<FilterValue>> for FilterSelection {
    fn from(values: Vec<FilterValue>) -> Self {
        Self::from_values(values)
    }
}

impl From<FilterSelection> for Vec<FilterValue> {
    fn from(selection: FilterSelection) -> Self {
        selection.0
    }
}

impl FromIterator<FilterValue> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = FilterValue>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(values: &[i64]) -> FilterSelection {
        values.iter().copied().map(FilterValue::Int).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let original = sel(&[3, 1]);
        let added = original.toggled(&FilterValue::Int(2));
        assert_eq!(added.values(), sel(&[3, 1, 2]).values());

        let back = added.toggled(&FilterValue::Int(2));
        assert_eq!(back, original);
    }

    #[test]
    fn test_toggle_existing_removes_only_that_value() {
        let original = sel(&[5, 6, 7]);
        assert_eq!(original.toggled(&FilterValue::Int(6)), sel(&[5, 7]));
        // the source selection is untouched
        assert_eq!(original, sel(&[5, 6, 7]));
    }

    #[test]
    fn test_from_values_drops_repeats() {
        assert_eq!(sel(&[1, 1, 2, 1]).values().len(), 2);
    }

    #[test]
    fn test_serializes_as_array() {
        let s: FilterSelection = vec![FilterValue::Int(1), FilterValue::from("x")].into();
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"[1,"x"]"#);
    }
}

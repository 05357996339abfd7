use super::selection::FilterSelection;
use super::value::FilterValue;

/// Сырое значение, с которым приходит изменение фасета.
///
/// Виджеты присылают список, поле "номер заявки" присылает строку, кнопка
/// сброса присылает пустое значение. Все варианты сводятся к [`FilterSelection`] через
/// [`FacetInput::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub enum FacetInput {
    Null,
    Text(String),
    Value(FilterValue),
    List(Vec<FilterValue>),
}

impl FacetInput {
    /// `""` and `Null` become an empty selection, a list passes through,
    /// any other scalar becomes a one-element selection.
    pub fn normalize(self) -> FilterSelection {
        match self {
            FacetInput::Null => FilterSelection::new(),
            FacetInput::Text(s) if s.is_empty() => FilterSelection::new(),
            FacetInput::Text(s) => FilterSelection::from_values([FilterValue::Text(s)]),
            FacetInput::Value(FilterValue::Text(s)) if s.is_empty() => FilterSelection::new(),
            FacetInput::Value(v) => FilterSelection::from_values([v]),
            FacetInput::List(values) => FilterSelection::from_values(values),
        }
    }
}

impl From<Vec<FilterValue>> for FacetInput {
    fn from(values: Vec<FilterValue>) -> Self {
        FacetInput::List(values)
    }
}

impl From<FilterSelection> for FacetInput {
    fn from(selection: FilterSelection) -> Self {
        FacetInput::List(selection.into())
    }
}

impl From<&str> for FacetInput {
    fn from(s: &str) -> Self {
        FacetInput::Text(s.to_string())
    }
}

impl From<String> for FacetInput {
    fn from(s: String) -> Self {
        FacetInput::Text(s)
    }
}

impl From<FilterValue> for FacetInput {
    fn from(v: FilterValue) -> Self {
        FacetInput::Value(v)
    }
}

impl<T: Into<FacetInput>> From<Option<T>> for FacetInput {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FacetInput::Null)
    }
}

impl From<serde_json::Value> for FacetInput {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => FacetInput::Null,
            Value::String(s) => FacetInput::Text(s),
            Value::Array(items) => {
                FacetInput::List(items.into_iter().filter_map(json_scalar).collect())
            }
            other => json_scalar(other).map_or(FacetInput::Null, FacetInput::Value),
        }
    }
}

fn json_scalar(v: serde_json::Value) -> Option<FilterValue> {
    use serde_json::Value;
    match v {
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => FilterValue::Int(i),
            None => FilterValue::Text(n.to_string()),
        }),
        Value::String(s) => Some(FilterValue::Text(s)),
        Value::Bool(b) => Some(FilterValue::Text(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_and_null_normalize_to_empty() {
        assert!(FacetInput::from("").normalize().is_empty());
        assert!(FacetInput::Null.normalize().is_empty());
        assert!(FacetInput::from(None::<String>).normalize().is_empty());
        assert!(FacetInput::from(json!(null)).normalize().is_empty());
        assert!(FacetInput::from(json!("")).normalize().is_empty());
    }

    #[test]
    fn test_scalar_wraps_into_single_element() {
        assert_eq!(
            FacetInput::from("x").normalize().values(),
            &[FilterValue::from("x")]
        );
        assert_eq!(
            FacetInput::from(json!(42)).normalize().values(),
            &[FilterValue::Int(42)]
        );
    }

    #[test]
    fn test_list_passes_through() {
        let list = vec![FilterValue::Int(2), FilterValue::Int(1)];
        assert_eq!(FacetInput::from(list.clone()).normalize().values(), list.as_slice());
        assert_eq!(
            FacetInput::from(json!([2, 1])).normalize().values(),
            list.as_slice()
        );
    }

    #[test]
    fn test_empty_list_stays_empty() {
        assert!(FacetInput::List(Vec::new()).normalize().is_empty());
    }
}

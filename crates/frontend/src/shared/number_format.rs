//! Форматирование сумм и счётчиков для таблиц и карточек

use super::date_utils::EMPTY_CELL;

/// Форматирует число с разделителем тысяч (пробел)
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Денежная сумма: 2 знака после точки
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Сумма в ячейке таблицы; прочерк, если цена не указана
pub fn format_optional_money(value: Option<f64>) -> String {
    value.map(format_money).unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Процент без дробной части, например "75%"
pub fn format_percent(percent: f64) -> String {
    format!("{}%", format_number_with_decimals(percent, 0))
}

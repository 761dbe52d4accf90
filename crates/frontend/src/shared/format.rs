//! Форматирование сумм для подписей и таблиц

/// Сумма с двумя знаками и пробелом между разрядами: `1 234 567.89`
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Количество без лишних нулей: `12`, `0.5`
pub fn format_quantity(value: f64) -> String {
    let s = format!("{:.3}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

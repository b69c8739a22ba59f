//! Number formatting for cards and table cells.

use contracts::shared::indicators::{SummaryCard, ValueFormat};

/// Formats a number with a thousands separator (comma) and the given number
/// of decimal places.
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    // group digits from the right
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// ```
/// use frontend::shared::number_format::format_number_int;
/// assert_eq!(format_number_int(2847.0), "2,847");
/// ```
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Dollar amount without cents, as on the sales charts: `$12,400`.
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number_int(-value))
    } else {
        format!("${}", format_number_int(value))
    }
}

pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Number { decimals } => format_number_with_decimals(value, *decimals),
        ValueFormat::Percent { decimals } => {
            format!("{}%", format_number_with_decimals(value, *decimals))
        }
        ValueFormat::Integer => format_number_int(value),
    }
}

pub fn format_card(card: &SummaryCard) -> String {
    format_value(card.value, &card.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::indicators::IndicatorStatus;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(4.64, 1), "4.6");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-1234.0), "-1,234");
        assert_eq!(format_number_int(-123.0), "-123");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12400.0), "$12,400");
        assert_eq!(format_money(83000.0), "$83,000");
        assert_eq!(format_money(-50.0), "-$50");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(87.0, &ValueFormat::Percent { decimals: 0 }), "87%");
        assert_eq!(format_value(2847.0, &ValueFormat::Integer), "2,847");

        let card = SummaryCard::count("avg_rating", "Avg Supplier Rating", 0, IndicatorStatus::Neutral)
            .with_format(ValueFormat::Number { decimals: 1 })
            .with_value(4.64);
        assert_eq!(format_card(&card), "4.6");
    }
}

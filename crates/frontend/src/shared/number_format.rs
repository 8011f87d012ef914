//! Number formatting for tables: thousands separated by a space.

/// `format_number_with_decimals(1234.567, 2) == "1 234.57"`
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
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

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Soles: "S/ 1 234.50"
pub fn format_money(value: f64) -> String {
    format!("S/ {}", format_number_with_decimals(value, 2))
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

pub fn format_kg(value: f64) -> String {
    format!("{} kg", format_number_with_decimals(value, 2))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "S/ 1 234.50");
        assert_eq!(format_money(1234567.89), "S/ 1 234 567.89");
        assert_eq!(format_money(0.0), "S/ 0.00");
        assert_eq!(format_money(-1234.56), "S/ -1 234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(-1234.0), "-1 234");
        assert_eq!(format_percent(12.345), "12.3%");
    }
}

//! Date formatting for tables and exports (DD/MM/YYYY).

use chrono::{DateTime, NaiveDate, Utc};

/// "2024-03-15" -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_default()
}

/// Local time of a server timestamp, "15/03/2024 14:02".
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value
        .with_timezone(&chrono::Local)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// ISO string from the wire, e.g. "2024-03-15T14:02:26.123Z" -> "15/03/2024".
/// Returns the input unchanged when it is not a date.
pub fn format_iso_date(value: &str) -> String {
    let date_part = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(_) => value.to_string(),
    }
}

/// Value for `<input type="date">`.
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05/03/2024");
        assert_eq!(format_opt_date(None), "");
        assert_eq!(to_input_value(Some(date)), "2024-03-05");
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_iso_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_iso_date("invalid"), "invalid");
    }
}

//! Spanish date labels used by the pages.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS.get(date.month0() as usize).copied().unwrap_or_default()
}

/// `05 de marzo`
pub fn day_and_month(date: NaiveDate) -> String {
    format!("{:02} de {}", date.day(), month_name(date))
}

/// `Del 05 de marzo al 12 de marzo`
pub fn travel_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("Del {} al {}", day_and_month(start), day_and_month(end))
}

/// `Del 05 al 12 de marzo` (the start month is implied by the end).
pub fn destination_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("Del {:02} al {}", start.day(), day_and_month(end))
}

/// `05 de marzo de 2024`
pub fn long_date(date: NaiveDate) -> String {
    format!("{} de {}", day_and_month(date), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn travel_range_names_both_months() {
        assert_eq!(
            travel_range(d(2030, 3, 5), d(2030, 4, 12)),
            "Del 05 de marzo al 12 de abril"
        );
    }

    #[test]
    fn destination_range_only_names_end_month() {
        assert_eq!(
            destination_range(d(2030, 9, 1), d(2030, 9, 3)),
            "Del 01 al 03 de septiembre"
        );
    }

    #[test]
    fn long_date_includes_year() {
        assert_eq!(long_date(d(2023, 12, 24)), "24 de diciembre de 2023");
        assert_eq!(long_date(d(2024, 1, 9)), "09 de enero de 2024");
    }
}

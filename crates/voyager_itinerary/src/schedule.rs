use jiff::{Span, civil::Date};

/// Calendar date of every itinerary day, starting at the departure date.
///
/// Dates saturate at the calendar's bounds rather than failing; a tour long
/// enough to hit them does not exist in any catalog.
pub fn day_dates(departure: Date, total_days: usize) -> Vec<Date> {
    (0..total_days)
        .map(|day| departure.saturating_add(Span::new().days(day as i64)))
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_dates_follow_the_departure() {
        let dates = day_dates(date(2026, 7, 14), 3);

        assert_eq!(
            dates,
            vec![date(2026, 7, 14), date(2026, 7, 15), date(2026, 7, 16)]
        );
    }

    #[test]
    fn test_dates_cross_month_and_year_boundaries() {
        let dates = day_dates(date(2026, 12, 30), 4);

        assert_eq!(
            dates,
            vec![
                date(2026, 12, 30),
                date(2026, 12, 31),
                date(2027, 1, 1),
                date(2027, 1, 2),
            ]
        );
    }

    #[test]
    fn test_no_days_no_dates() {
        assert!(day_dates(date(2026, 7, 14), 0).is_empty());
    }
}

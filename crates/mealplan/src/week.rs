use chrono::{Datelike, Duration, NaiveDate};

/// Most recent Sunday on or before `today`.
///
/// Callers working from wall-clock time pass `Local::now().date_naive()`;
/// anchoring the result to local midnight happens at the serialization
/// boundary, so this stays a pure calendar computation.
pub fn week_start_for(today: NaiveDate) -> NaiveDate {
    today - Duration::days(today.weekday().num_days_from_sunday() as i64)
}

/// The seven calendar dates of the week beginning at `week_start`, ascending.
pub fn dates_for_week(week_start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| week_start + Duration::days(i as i64))
}

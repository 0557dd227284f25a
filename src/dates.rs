//! Date helpers for seed data and pt-BR display

use chrono::NaiveDate;

/// Calendar date from literal parts. Invalid parts map to `NaiveDate::MIN`.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// `dd/mm/yyyy`, as dates are shown to users
pub fn format_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Inclusive range check where either bound may be open
pub fn within(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    start.map_or(true, |s| date >= s) && end.map_or(true, |e| date <= e)
}

use chrono::NaiveDate;

#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// `45m`, `1h`, `1h 30m`.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    match (h, m) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Hours with two decimals, e.g. `1.25`.
#[must_use]
pub fn format_hours(minutes: u32) -> String {
    format!("{:.2}", f64::from(minutes) / 60.0)
}

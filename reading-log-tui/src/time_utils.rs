use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};

/// Today's date in the local timezone, falling back to UTC when the offset
/// cannot be determined.
pub fn local_today() -> Date {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(offset).date()
}

/// Formats a date as YYYY-MM-DD.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

pub mod claim;
pub mod macros;
pub mod project;
pub mod user;

/// Calendar-date wire format used throughout the claims API (`2024-01-31`).
pub const ISO_DATE_FORMAT: &[time::format_description::FormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

//! en-GB date rendering.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

const EN_GB_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Renders a claim period as `DD/MM/YYYY - DD/MM/YYYY`.
pub fn format_date_range(start_date: Date, end_date: Date) -> String {
    format!("{} - {}", format_date(start_date), format_date(end_date))
}

fn format_date(date: Date) -> String {
    // The format contains no invalid-input components, so formatting a valid
    // Date cannot fail.
    date.format(EN_GB_DATE_FORMAT)
        .expect("en-GB date format is well formed")
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use super::*;

    #[test]
    fn test_format_date_range_en_gb_order() {
        assert_eq!(
            format_date_range(date!(2024 - 01 - 01), date!(2024 - 12 - 31)),
            "01/01/2024 - 31/12/2024"
        );
        assert_eq!(
            format_date_range(date!(2024 - 03 - 05), date!(2024 - 08 - 25)),
            "05/03/2024 - 25/08/2024"
        );
    }

    #[test]
    fn test_format_date_range_zero_padding() {
        assert_eq!(
            format_date_range(date!(2024 - 01 - 01), date!(2024 - 01 - 09)),
            "01/01/2024 - 09/01/2024"
        );
    }

    #[test]
    fn test_format_date_range_boundaries() {
        assert_eq!(
            format_date_range(date!(2023 - 12 - 31), date!(2024 - 01 - 01)),
            "31/12/2023 - 01/01/2024"
        );
        assert_eq!(
            format_date_range(date!(1999 - 12 - 31), date!(2000 - 01 - 01)),
            "31/12/1999 - 01/01/2000"
        );
        assert_eq!(
            format_date_range(date!(2024 - 02 - 29), date!(2024 - 03 - 01)),
            "29/02/2024 - 01/03/2024"
        );
    }
}

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub struct TimeUtils;

impl TimeUtils {
    /// Display format used across every page ("DD.MM.YYYY").
    pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";
    /// Returned instead of a date whenever the input cannot be parsed.
    pub const INVALID_DATE: &str = "Invalid Date";

    /// ISO-8601 offsets RFC 3339 rejects, e.g. Python's `%z` (`+0000`).
    const OFFSET_DATETIME_FORMATS: [&str; 2] =
        ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];
    const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Format an ISO-8601 timestamp as `DD.MM.YYYY` in local time.
pub fn format_date(iso: &str) -> String {
    format_date_in(iso, &Local)
}

/// Same as [`format_date`] but against an explicit timezone.
///
/// - Instants carrying an offset (`2024-03-01T22:30:00Z`, `...+02:00`) are converted into `tz`.
/// - Naive date-times (Python's `datetime.isoformat()`) are taken as wall-clock time in `tz`.
/// - Bare dates (`2024-03-01`) are UTC midnight, then converted into `tz`.
///
/// Anything else yields [`TimeUtils::INVALID_DATE`].
pub fn format_date_in<Tz>(iso: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_instant_in(iso, tz) {
        Some(instant) => instant.format(TimeUtils::DISPLAY_DATE_FORMAT).to_string(),
        None => TimeUtils::INVALID_DATE.to_string(),
    }
}

fn parse_instant_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let iso = iso.trim();
    if iso.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(iso) {
        return Some(instant.with_timezone(tz));
    }

    for format in TimeUtils::OFFSET_DATETIME_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(iso, format) {
            return Some(instant.with_timezone(tz));
        }
    }

    for format in TimeUtils::NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(iso, format) {
            // Ambiguous wall-clock times (DST fold) resolve to the earlier instant.
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    let date = NaiveDate::parse_from_str(iso, TimeUtils::NAIVE_DATE_FORMAT).ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn naive_python_timestamp_is_local_wall_time() {
        // No offset, so the calendar date never moves regardless of the host timezone.
        assert_eq!(format_date("2024-03-07T23:59:01.123456"), "07.03.2024");
        assert_eq!(format_date("2023-11-02 08:00:00"), "02.11.2023");
    }

    #[test]
    fn day_and_month_are_zero_padded() {
        assert_eq!(format_date_in("2024-01-05T10:00:00Z", &Utc), "05.01.2024");
        assert_eq!(format_date_in("2024-12-31T10:00:00Z", &Utc), "31.12.2024");
    }

    #[test]
    fn offset_instants_convert_into_the_target_zone() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_date_in("2024-02-29T23:30:00Z", &cet), "01.03.2024");
        assert_eq!(format_date_in("2024-03-01T00:30:00+02:00", &Utc), "29.02.2024");
        assert_eq!(format_date_in("2024-03-01T06:00:03.512+0000", &Utc), "01.03.2024");
        assert_eq!(format_date_in("2024-03-01T00:30:00+0200", &Utc), "29.02.2024");
        assert_eq!(format_date_in("2024-02-29 23:30:00+0000", &cet), "01.03.2024");
    }

    #[test]
    fn bare_dates_are_utc_midnight() {
        assert_eq!(format_date_in("2024-06-15", &Utc), "15.06.2024");
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_date_in("2024-06-15", &new_york), "14.06.2024");
    }

    #[test]
    fn garbage_yields_sentinel() {
        for input in ["", "   ", "yesterday", "2024-13-40", "07.03.2024"] {
            assert_eq!(format_date(input), TimeUtils::INVALID_DATE, "input {input:?}");
        }
    }

    #[test]
    fn output_always_matches_display_shape() {
        let formatted = format_date("2019-07-04T12:00:00");
        let parts: Vec<&str> = formatted.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 4);
    }
}

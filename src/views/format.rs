use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Indonesian long date, e.g. `31 Desember 2025`.
pub fn long_date(value: &DateTime<Utc>) -> String {
    format!(
        "{} {} {}",
        value.day(),
        MONTHS[value.month0() as usize],
        value.year()
    )
}

/// Long date plus time of day, e.g. `31 Desember 2025 pukul 23.59 UTC`.
pub fn long_datetime(value: &DateTime<Utc>) -> String {
    format!(
        "{} pukul {:02}.{:02} UTC",
        long_date(value),
        value.hour(),
        value.minute()
    )
}

/// Value for an `<input type="datetime-local">`.
pub fn datetime_local(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

/// Collapse whitespace and cut to `max` characters for card previews.
pub fn excerpt(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let cut: String = flat.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_indonesian_dates() {
        let dt = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(long_date(&dt), "31 Desember 2025");
        assert_eq!(long_datetime(&dt), "31 Desember 2025 pukul 23.59 UTC");
        assert_eq!(datetime_local(&dt), "2025-12-31T23:59");
    }

    #[test]
    fn excerpt_truncates_on_chars() {
        assert_eq!(excerpt("satu  dua\ntiga", 50), "satu dua tiga");
        assert_eq!(excerpt("abcdef", 3), "abc…");
    }
}

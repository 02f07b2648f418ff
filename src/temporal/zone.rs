use chrono_tz::{America, Europe, Tz, UTC};

/// The zone date tokens are resolved in when the caller does not pick one.
///
/// Central European Time with daylight saving: midnight is `+01:00` in winter
/// and `+02:00` in summer.
pub fn home_zone() -> Tz {
    Europe::Berlin
}

/// Zone for a common abbreviation (`"CET"`, `"pst"`, ...) or an IANA name
/// (`"Europe/Lisbon"`).
///
/// Abbreviations map to a representative region so summer and winter offsets
/// both come out right: `"CET"` and `"CEST"` are the same zone.
pub fn zone_from_abbreviation(tz: &str) -> Option<Tz> {
    let zone = match tz.to_ascii_uppercase().as_str() {
        "UTC" | "GMT" | "Z" => UTC,
        "CET" | "CEST" => home_zone(),
        "WET" | "BST" => Europe::London,
        "EET" | "EEST" => Europe::Helsinki,
        "EST" | "EDT" => America::New_York,
        "CST" | "CDT" => America::Chicago,
        "MST" | "MDT" => America::Denver,
        "PST" | "PDT" => America::Los_Angeles,
        _ => return tz.parse().ok(),
    };
    Some(zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, TimeZone};

    fn offset_seconds(zone: Tz, year: i32, month: u32, day: u32) -> i32 {
        zone.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap().offset().fix().local_minus_utc()
    }

    #[test]
    fn home_zone_observes_summer_time() {
        assert_eq!(offset_seconds(home_zone(), 2017, 12, 22), 3600);
        assert_eq!(offset_seconds(home_zone(), 2018, 7, 1), 7200);
    }

    #[test]
    fn abbreviations_are_case_insensitive() {
        assert_eq!(zone_from_abbreviation("cet"), Some(home_zone()));
        assert_eq!(zone_from_abbreviation("CEST"), Some(home_zone()));
        assert_eq!(zone_from_abbreviation("PST").map(|z| offset_seconds(z, 2018, 1, 1)), Some(-8 * 3600));
        assert_eq!(zone_from_abbreviation("pdt").map(|z| offset_seconds(z, 2018, 7, 1)), Some(-7 * 3600));
        assert_eq!(zone_from_abbreviation("utc"), Some(UTC));
    }

    #[test]
    fn iana_names_pass_through() {
        assert_eq!(zone_from_abbreviation("Europe/Lisbon"), Some(Europe::Lisbon));
        assert_eq!(zone_from_abbreviation("Mars/Olympus"), None);
    }
}

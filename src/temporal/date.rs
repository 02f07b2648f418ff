//! Amazon date slot values.
//!
//! The `AMAZON.DATE` slot resolves relative phrases to one of five shapes:
//!
//! ```text
//! "today", "november twenty-fifth"   2015-11-25     normal
//! "this week", "next week"           2015-W48       week
//! "this weekend"                     2015-W48-WE    weekend
//! "this month"                       2015-11        month
//! "next year"                        2016           year
//! ```
//!
//! A trailing `X` marks an unspecified digit ("the twenty tens" is `201X`)
//! and is read as `0`.
//!
//! Week numbers count from the first Sunday of the year (week 1 starts on that
//! Sunday and week 0 is whatever comes before it). Some locales send a single
//! digit week (`2018-W1`), which is the same week as `2018-W01`. Both week
//! shapes resolve to the Sunday of the week.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone};
use regex::Captures;
use tracing::debug;

use super::zone::home_zone;

/// What kind of span a date token denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateCategory {
    Normal,
    Week,
    Weekend,
    Month,
    Year,
}

impl DateCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            DateCategory::Normal => "normal",
            DateCategory::Week => "week",
            DateCategory::Weekend => "weekend",
            DateCategory::Month => "month",
            DateCategory::Year => "year",
        }
    }
}

impl fmt::Display for DateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date token resolved to midnight of a concrete day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate<Tz: TimeZone> {
    pub date: DateTime<Tz>,
    pub category: DateCategory,
}

/// Parse a date token in the home zone.
pub fn parse_date(token: &str) -> Option<ParsedDate<chrono_tz::Tz>> {
    parse_date_in(token, &home_zone())
}

/// Parse a date token, attaching `zone` to the resulting midnight.
///
/// Returns `None` when the token has none of the five shapes or names a day
/// that does not exist (`2017-02-30`, `2017-W60`).
pub fn parse_date_in<Tz: TimeZone>(token: &str, zone: &Tz) -> Option<ParsedDate<Tz>> {
    let token = normalize_unspecified(token);
    let (category, caps) = classify(&token)?;
    let day = resolve_day(category, &caps)?;

    let midnight = day.and_hms_opt(0, 0, 0)?;
    let date = zone.from_local_datetime(&midnight).earliest()?;
    debug!(token = %token, %category, day = %day, "parsed date token");

    Some(ParsedDate { date, category })
}

fn normalize_unspecified(token: &str) -> String {
    match token.strip_suffix('X') {
        Some(head) => format!("{head}0"),
        None => token.to_string(),
    }
}

// The shapes never overlap, so the first hit is the only hit.
fn classify(token: &str) -> Option<(DateCategory, Captures<'_>)> {
    let patterns = [
        (DateCategory::Normal, regex!(r"^(\d{4})-(\d{2})-(\d{2})$")),
        (DateCategory::Week, regex!(r"^(\d{4})-W(\d{1,2})$")),
        (DateCategory::Weekend, regex!(r"^(\d{4})-W(\d{1,2})-WE$")),
        (DateCategory::Month, regex!(r"^(\d{4})-(\d{2})$")),
        (DateCategory::Year, regex!(r"^(\d{4})$")),
    ];

    patterns.into_iter().find_map(|(category, re)| re.captures(token).map(|caps| (category, caps)))
}

fn resolve_day(category: DateCategory, caps: &Captures<'_>) -> Option<NaiveDate> {
    let group = |idx: usize| -> Option<u32> { caps.get(idx)?.as_str().parse().ok() };
    let year = i32::try_from(group(1)?).ok()?;

    match category {
        DateCategory::Normal => NaiveDate::from_ymd_opt(year, group(2)?, group(3)?),
        DateCategory::Week | DateCategory::Weekend => sunday_of_week(year, group(2)?),
        DateCategory::Month => NaiveDate::from_ymd_opt(year, group(2)?, 1),
        DateCategory::Year => NaiveDate::from_ymd_opt(year, 1, 1),
    }
}

/// Sunday of `week` in a Sunday-first week-of-year numbering.
///
/// Week 0 may land in the previous year and week 53 in the next one.
pub(crate) fn sunday_of_week(year: i32, week: u32) -> Option<NaiveDate> {
    if week > 53 {
        return None;
    }

    let new_year = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let lead = i64::from(new_year.weekday().num_days_from_sunday());
    let offset = if week == 0 { -lead } else { (7 - lead) % 7 + 7 * (i64::from(week) - 1) };

    new_year.checked_add_signed(TimeDelta::days(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Weekday};
    use chrono_tz::Tz;

    fn home_midnight(year: i32, month: u32, day: u32) -> DateTime<Tz> {
        home_zone().with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn full_date_is_normal() {
        let parsed = parse_date("2017-12-22").unwrap();
        assert_eq!(parsed.date, home_midnight(2017, 12, 22));
        assert_eq!(parsed.category, DateCategory::Normal);
    }

    #[test]
    fn week_resolves_to_its_sunday() {
        let parsed = parse_date("2017-W51").unwrap();
        assert_eq!(parsed.date, home_midnight(2017, 12, 17));
        assert_eq!(parsed.category, DateCategory::Week);
    }

    #[test]
    fn single_and_double_digit_weeks_agree() {
        let english = parse_date("2018-W01").unwrap();
        let german = parse_date("2018-W1").unwrap();
        assert_eq!(english, german);
        assert_eq!(german.date, home_midnight(2018, 1, 7));
        assert_eq!(german.category, DateCategory::Week);
    }

    #[test]
    fn weekend_resolves_to_its_sunday() {
        let parsed = parse_date("2017-W51-WE").unwrap();
        assert_eq!(parsed.date, home_midnight(2017, 12, 17));
        assert_eq!(parsed.category, DateCategory::Weekend);
    }

    #[test]
    fn month_and_year_start_on_the_first() {
        let month = parse_date("2018-01").unwrap();
        assert_eq!(month.date, home_midnight(2018, 1, 1));
        assert_eq!(month.category, DateCategory::Month);

        let year = parse_date("2018").unwrap();
        assert_eq!(year.date, home_midnight(2018, 1, 1));
        assert_eq!(year.category, DateCategory::Year);
    }

    #[test]
    fn trailing_x_reads_as_zero() {
        assert_eq!(parse_date("201X"), parse_date("2010"));
        assert_eq!(parse_date("2017-W5X"), parse_date("2017-W50"));
    }

    #[test]
    fn unknown_shapes_and_impossible_days_are_none() {
        for token in ["", "tomorrow", "2017-13-40", "2017-02-30", "2017-W60", "17-12-22", "2017-W51-SA", "20XX"] {
            assert!(parse_date(token).is_none(), "{token} should not parse");
        }
    }

    #[test]
    fn summer_dates_carry_summer_offset() {
        let parsed = parse_date("2018-07-01").unwrap();
        assert_eq!(parsed.date.to_rfc3339(), "2018-07-01T00:00:00+02:00");
        assert_eq!(parsed.date.timestamp(), 1_530_396_000);

        let winter = parse_date("2018-01-07").unwrap();
        assert_eq!(winter.date.to_rfc3339(), "2018-01-07T00:00:00+01:00");
    }

    #[test]
    fn explicit_zone_is_attached() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let parsed = parse_date_in("2017-12-22", &utc).unwrap();
        assert_eq!(parsed.date, utc.with_ymd_and_hms(2017, 12, 22, 0, 0, 0).unwrap());
        assert_ne!(parsed.date, home_midnight(2017, 12, 22));
    }

    #[test]
    fn week_zero_reaches_into_previous_year() {
        // 2018-01-01 is a Monday, so the Sunday before it is 2017-12-31.
        assert_eq!(sunday_of_week(2018, 0), NaiveDate::from_ymd_opt(2017, 12, 31));
        // 2017-01-01 is a Sunday: week 0 and week 1 share it.
        assert_eq!(sunday_of_week(2017, 0), NaiveDate::from_ymd_opt(2017, 1, 1));
        assert_eq!(sunday_of_week(2017, 1), NaiveDate::from_ymd_opt(2017, 1, 1));
    }

    #[test]
    fn every_week_lands_on_sunday() {
        for year in [2015, 2016, 2020, 2024] {
            for week in 0..=53 {
                let day = sunday_of_week(year, week).unwrap();
                assert_eq!(day.weekday(), Weekday::Sun, "{year}-W{week}");
            }
        }
    }
}

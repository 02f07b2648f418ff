use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Utc};

use super::date::{DateCategory, ParsedDate, parse_date_in};

/// A closed validity window derived from a date token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityPeriod<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Build the period a date token covers, reading "now" from the wall clock.
///
/// The clock is read on every call; only the weekend rule looks at it.
pub fn create_period<Tz: TimeZone>(token: &str, zone: &Tz) -> Option<ValidityPeriod<Tz>> {
    create_period_at(token, zone, Utc::now().with_timezone(zone))
}

/// Build the period a date token covers relative to `now`.
///
/// - weekend: Saturday (or now, if Saturday has already started) to Sunday
/// - week: the six days before the week's Sunday, up to that Sunday
/// - month: first to last day of the month
/// - year: January 1st to December 31st
/// - normal: a four hour window starting at midnight
///
/// Day and hour offsets are wall-clock offsets in `zone`, so a window that
/// crosses a daylight saving switch still starts and ends on the local hour.
pub fn create_period_at<Tz: TimeZone>(token: &str, zone: &Tz, now: DateTime<Tz>) -> Option<ValidityPeriod<Tz>> {
    let ParsedDate { date, category } = parse_date_in(token, zone)?;

    let (start, end) = match category {
        DateCategory::Weekend => {
            let saturday = shift_local(&date, TimeDelta::days(-1))?;
            let start = if saturday < now { now } else { saturday };
            (start, date)
        }
        DateCategory::Week => (shift_local(&date, TimeDelta::days(-6))?, date),
        DateCategory::Month => {
            let last = last_day_of_month(date.year(), date.month())?;
            let end = date.with_day(last.day())?;
            (date, end)
        }
        DateCategory::Year => {
            let end = date.with_month(12)?.with_day(31)?;
            (date, end)
        }
        DateCategory::Normal => {
            let end = shift_local(&date, TimeDelta::hours(4))?;
            (date, end)
        }
    };

    Some(ValidityPeriod { start, end })
}

fn shift_local<Tz: TimeZone>(date: &DateTime<Tz>, delta: TimeDelta) -> Option<DateTime<Tz>> {
    let local = date.naive_local().checked_add_signed(delta)?;
    date.timezone().from_local_datetime(&local).earliest()
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::home_zone;
    use chrono_tz::Tz;

    fn home(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
        home_zone().with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
    }

    fn period_at(token: &str, now: DateTime<Tz>) -> ValidityPeriod<Tz> {
        create_period_at(token, &home_zone(), now).unwrap()
    }

    fn long_ago() -> DateTime<Tz> {
        home(2000, 1, 1, 0, 0)
    }

    #[test]
    fn weekend_runs_saturday_to_sunday() {
        let period = period_at("2017-W51-WE", long_ago());
        assert_eq!(period.start, home(2017, 12, 16, 0, 0));
        assert_eq!(period.end, home(2017, 12, 17, 0, 0));
    }

    #[test]
    fn weekend_start_is_clamped_to_now() {
        let now = home(2017, 12, 16, 14, 45);
        let period = period_at("2017-W51-WE", now);
        assert_eq!(period.start, now);
        assert_eq!(period.end, home(2017, 12, 17, 0, 0));
    }

    #[test]
    fn weekend_clamp_compares_full_instants() {
        // Exactly Saturday midnight is not in the past.
        let now = home(2017, 12, 16, 0, 0);
        assert_eq!(period_at("2017-W51-WE", now).start, now);

        let just_before = home(2017, 12, 15, 23, 59);
        assert_eq!(period_at("2017-W51-WE", just_before).start, home(2017, 12, 16, 0, 0));
    }

    #[test]
    fn week_spans_six_days_back_from_sunday() {
        let period = period_at("2017-W51", long_ago());
        assert_eq!(period.start, home(2017, 12, 11, 0, 0));
        assert_eq!(period.end, home(2017, 12, 17, 0, 0));
    }

    #[test]
    fn month_ends_on_its_last_day() {
        let january = period_at("2018-01", long_ago());
        assert_eq!(january.start, home(2018, 1, 1, 0, 0));
        assert_eq!(january.end, home(2018, 1, 31, 0, 0));

        let leap_february = period_at("2016-02", long_ago());
        assert_eq!(leap_february.end, home(2016, 2, 29, 0, 0));

        let february = period_at("2017-02", long_ago());
        assert_eq!(february.end, home(2017, 2, 28, 0, 0));

        let december = period_at("2017-12", long_ago());
        assert_eq!(december.end, home(2017, 12, 31, 0, 0));
    }

    #[test]
    fn year_spans_january_to_december() {
        let period = period_at("2018", long_ago());
        assert_eq!(period.start, home(2018, 1, 1, 0, 0));
        assert_eq!(period.end, home(2018, 12, 31, 0, 0));
    }

    #[test]
    fn normal_day_is_a_four_hour_window() {
        let period = period_at("2017-12-22", long_ago());
        assert_eq!(period.start, home(2017, 12, 22, 0, 0));
        assert_eq!(period.end, home(2017, 12, 22, 4, 0));
    }

    #[test]
    fn summer_weekend_uses_summer_offset() {
        let period = period_at("2018-W26-WE", long_ago());
        assert_eq!(period.start.to_rfc3339(), "2018-06-30T00:00:00+02:00");
        assert_eq!(period.end.to_rfc3339(), "2018-07-01T00:00:00+02:00");

        // 13:00 UTC is 15:00 in Berlin during summer.
        let now = Utc.with_ymd_and_hms(2018, 6, 30, 13, 0, 0).unwrap().with_timezone(&home_zone());
        let clamped = period_at("2018-W26-WE", now);
        assert_eq!(clamped.start, home(2018, 6, 30, 15, 0));
    }

    #[test]
    fn four_hour_window_keeps_local_hours_across_clock_changes() {
        // Clocks go forward at 02:00 on 2018-03-25 and back at 03:00 on 2018-10-28.
        let spring = period_at("2018-03-25", long_ago());
        assert_eq!(spring.start.to_rfc3339(), "2018-03-25T00:00:00+01:00");
        assert_eq!(spring.end.to_rfc3339(), "2018-03-25T04:00:00+02:00");

        let autumn = period_at("2018-10-28", long_ago());
        assert_eq!(autumn.start.to_rfc3339(), "2018-10-28T00:00:00+02:00");
        assert_eq!(autumn.end.to_rfc3339(), "2018-10-28T04:00:00+01:00");
    }

    #[test]
    fn week_after_the_switch_is_summer_time() {
        let week = period_at("2018-W13", long_ago());
        assert_eq!(week.start.to_rfc3339(), "2018-03-26T00:00:00+02:00");
        assert_eq!(week.end.to_rfc3339(), "2018-04-01T00:00:00+02:00");
    }

    #[test]
    fn unknown_token_has_no_period() {
        assert!(create_period_at("someday", &home_zone(), long_ago()).is_none());
        assert!(create_period("someday", &home_zone()).is_none());
    }

    #[test]
    fn wall_clock_variant_keeps_the_end() {
        let period = create_period("2017-W51-WE", &home_zone()).unwrap();
        assert_eq!(period.end, home(2017, 12, 17, 0, 0));
        // That weekend is long gone, so the start is clamped to the present.
        assert!(period.start > period.end);
    }
}

//! Decoding of the compact date and time grammar Amazon uses for the built-in
//! `AMAZON.DATE` and `AMAZON.TIME` slot types.
//!
//! - [`parse_time`] turns `"MO"`/`"11:30"` style values into an hour and minute.
//! - [`parse_date`] turns `"2017-W51-WE"` style values into a day plus a
//!   [`DateCategory`].
//! - [`create_period`] widens a date token into the start/end window it covers.
//!
//! Nothing here returns an error: a value that does not fit the grammar comes
//! back as `None` and the caller decides what to say to the user.

mod date;
mod period;
mod time_of_day;
mod zone;

pub use date::{DateCategory, ParsedDate, parse_date, parse_date_in};
pub use period::{ValidityPeriod, create_period, create_period_at};
pub use time_of_day::{DayPart, ParsedTime, parse_time};
pub use zone::{home_zone, zone_from_abbreviation};

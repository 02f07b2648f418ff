//! Amazon time slot values.
//!
//! The `AMAZON.TIME` slot either carries a literal `HH:MM` or one of four
//! coarse day-part codes when the user said something like "this evening".

use chrono::NaiveTime;

/// A coarse time of day as reported by the time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPart {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MO" => Some(DayPart::Morning),
            "AV" => Some(DayPart::Afternoon),
            "EV" => Some(DayPart::Evening),
            "NI" => Some(DayPart::Night),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DayPart::Morning => "MO",
            DayPart::Afternoon => "AV",
            DayPart::Evening => "EV",
            DayPart::Night => "NI",
        }
    }

    /// Clock time this day-part stands for.
    pub fn time(self) -> ParsedTime {
        let (hour, minute) = match self {
            DayPart::Morning => (8, 30),
            DayPart::Afternoon => (13, 0),
            DayPart::Evening => (18, 0),
            DayPart::Night => (21, 0),
        };
        ParsedTime { hour, minute }
    }
}

/// An (hour, minute) pair decoded from a time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParsedTime {
    pub hour: u32,
    pub minute: u32,
}

impl ParsedTime {
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

/// Decode a time slot value.
///
/// Day-part codes win over the `HH:MM` form. Anything else, including an
/// absent value, yields `None`. The numbers are passed through as sent, so
/// `"25:00"` decodes; [`ParsedTime::to_naive_time`] is where a clock range
/// applies.
pub fn parse_time(token: Option<&str>) -> Option<ParsedTime> {
    let token = token.filter(|t| !t.is_empty())?;

    if let Some(part) = DayPart::from_code(token) {
        return Some(part.time());
    }

    let (hour, minute) = token.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    Some(ParsedTime { hour, minute })
}

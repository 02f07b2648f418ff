use alexa_skill::temporal::{parse_date, parse_time};
use alexa_skill::{
    BuiltInIntents, HandlerGroup, HandlerResult, IntentError, Mapper, Outcome, ResponseOptions, Slots, build_response,
};

pub const LAUNCH_MESSAGE: &str = "Welcome to Alexa skill bot";
pub const SESSION_END_MESSAGE: &str = "Good bye";

pub fn built_ins() -> BuiltInIntents {
    BuiltInIntents::new("Say \"HI\" to us", "Sorry, I don't understand you. Could you repeat?")
}

/// The sample skill the CLI answers with.
pub struct ExampleIntents;

impl ExampleIntents {
    fn hello(_slots: &Slots) -> HandlerResult {
        Ok(Outcome::handled(build_response("Hello. Nice to meet you.", ResponseOptions::default())))
    }

    fn date_intent(slots: &Slots) -> HandlerResult {
        let value = slots.value("dateslot")?;
        let parsed = parse_date(value).ok_or_else(|| IntentError::InvalidSlot {
            slot: "dateslot".to_string(),
            reason: format!("'{value}' is not an amazon date"),
        })?;

        let mut text = format!(
            "Your date is <say-as interpret-as='date'>{}</say-as> and it is a {}",
            parsed.date.format("%Y%m%d"),
            parsed.category
        );
        // The time slot is optional.
        if let Some(time) = slots.get("timeslot").and_then(|slot| parse_time(slot.value.as_deref())) {
            text.push_str(&format!(" at {:02}:{:02}", time.hour, time.minute));
        }

        Ok(Outcome::handled(build_response(&text, ResponseOptions::default())))
    }
}

impl HandlerGroup for ExampleIntents {
    fn mapper(&self) -> Mapper {
        Mapper::new().intent("EXAMPLE.hello", Self::hello).intent("EXAMPLE.date_intent", Self::date_intent)
    }
}

mod demo_intents;

use alexa_skill::temporal::{create_period, home_zone, parse_date_in, parse_time, zone_from_abbreviation};
use alexa_skill::{Dispatcher, Messages};
use chrono_tz::Tz;
use serde_json::Value;
use std::io::{self, Read};
use tracing::{Level, info};

use crate::demo_intents::{ExampleIntents, LAUNCH_MESSAGE, SESSION_END_MESSAGE, built_ins};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let level = if config.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();

    let result = match config.mode {
        Mode::Date(token) => {
            print_date(&token, &config.zone);
            Ok(())
        }
        Mode::Time(token) => {
            print_time(&token);
            Ok(())
        }
        Mode::Dispatch(input) => dispatch(input),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

enum Mode {
    Dispatch(Option<String>),
    Date(String),
    Time(String),
}

struct CliConfig {
    mode: Mode,
    zone: Tz,
    verbose: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut mode: Option<Mode> = None;
    let mut zone = home_zone();
    let mut verbose = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("alexa-skill {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_mode(&mut mode, Mode::Dispatch(Some(value)))?;
            }
            "--date" => {
                let value = args.next().ok_or_else(|| "error: --date expects a value".to_string())?;
                set_mode(&mut mode, Mode::Date(value))?;
            }
            "--time" => {
                let value = args.next().ok_or_else(|| "error: --time expects a value".to_string())?;
                set_mode(&mut mode, Mode::Time(value))?;
            }
            "--zone" => {
                let value = args.next().ok_or_else(|| "error: --zone expects a value".to_string())?;
                zone = parse_zone(&value)?;
            }
            _ if arg.starts_with("--zone=") => zone = parse_zone(arg.trim_start_matches("--zone="))?,
            _ if arg.starts_with("--date=") => {
                set_mode(&mut mode, Mode::Date(arg.trim_start_matches("--date=").to_string()))?;
            }
            _ => return Err(format!("error: unknown option '{arg}'\n\n{}", help_text())),
        }
    }

    Ok(CliConfig { mode: mode.unwrap_or(Mode::Dispatch(None)), zone, verbose })
}

fn set_mode(slot: &mut Option<Mode>, next: Mode) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: only one of --input, --date and --time may be given".to_string());
    }
    *slot = Some(next);
    Ok(())
}

fn parse_zone(value: &str) -> Result<Tz, String> {
    zone_from_abbreviation(value)
        .ok_or_else(|| format!("error: unknown --zone '{value}' (try CET, UTC, PST or Europe/Lisbon)"))
}

fn dispatch(input: Option<String>) -> Result<(), String> {
    let raw = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };
    if raw.trim().is_empty() {
        return Err(format!("no request provided\n\n{}", help_text()));
    }

    let body: Value = serde_json::from_str(&raw).map_err(|err| format!("request is not JSON: {err}"))?;
    let messages = Messages::new(LAUNCH_MESSAGE, SESSION_END_MESSAGE);
    let dispatcher = Dispatcher::new(&built_ins(), messages, &[&ExampleIntents]).map_err(|err| err.to_string())?;

    let outcome = dispatcher.dispatch_json(&body).map_err(|err| err.to_string())?;
    info!(handled = outcome.handled, "response was handled by system");

    let json = serde_json::to_string_pretty(&outcome.response).map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn print_date(token: &str, zone: &Tz) {
    match parse_date_in(token, zone) {
        Some(parsed) => {
            println!("date:     {}", parsed.date.to_rfc3339());
            println!("category: {}", parsed.category);
        }
        None => println!("'{token}' is not a date token"),
    }

    if let Some(period) = create_period(token, zone) {
        println!("start:    {}", period.start.to_rfc3339());
        println!("end:      {}", period.end.to_rfc3339());
    }
}

fn print_time(token: &str) {
    match parse_time(Some(token)) {
        Some(time) => println!("{:02}:{:02}", time.hour, time.minute),
        None => println!("'{token}' is not a time token"),
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn help_text() -> String {
    format!(
        "alexa-skill {version}

Answers a voice-assistant webhook request with the bundled example skill, or
decodes Amazon date and time slot values.

Usage:
  alexa-skill [OPTIONS] [--input <json>]     (reads stdin without --input)
  alexa-skill [OPTIONS] --date <token>
  alexa-skill [OPTIONS] --time <token>

Options:
  -i, --input <json>     Webhook request body.
  --date <token>         Decode a date slot value (2017-W51-WE, 2018-01, ...).
  --time <token>         Decode a time slot value (MO, AV, EV, NI, HH:MM).
  --zone <zone>          Zone for decoded dates, an abbreviation or IANA name.
                         Default: {home}.
  -v, --verbose          Debug logging on stderr.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Exit codes:
  0  Success.
  1  Dispatch error.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        home = home_zone().name(),
    )
}

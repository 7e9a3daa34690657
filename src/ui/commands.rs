// Line commands for the interactive front end
//
// Each input line maps to a controller message or to one of the
// front-end-only actions (show, list, search, help, quit).

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;

use crate::models::ui::ViewType;
use crate::ui::messages::Message;

pub const HELP: &str = "\
Navigation:
  today | prev | next          move the visible period
  view month|week              switch view
  goto YYYY-MM-DD              jump to a date
Event form:
  new YYYY-MM-DD [HOUR]        open a blank form (optionally at an hour slot)
  edit ID                      open an existing event
  title TEXT | desc TEXT       set title or description
  start HH:MM | end HH:MM      set times
  color VALUE | color 1-5      set a color or pick a palette swatch
  save | delete | cancel       submit, remove or close the form
Other:
  show                         redraw the calendar
  list [--json]                print all events
  search TEXT                  find events by title or description
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Message),
    Show,
    List { json: bool },
    Search(String),
    Help,
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "today" => Command::Apply(Message::Today),
        "prev" | "previous" => Command::Apply(Message::Previous),
        "next" => Command::Apply(Message::Next),
        "view" => {
            let view: ViewType = rest.parse().map_err(|err: String| anyhow!(err))?;
            Command::Apply(Message::SwitchView(view))
        }
        "goto" => Command::Apply(Message::GoTo(parse_date(rest)?)),
        "new" => {
            let mut parts = rest.split_whitespace();
            let date = parse_date(parts.next().unwrap_or_default())?;
            match parts.next() {
                Some(hour) => {
                    let hour: u32 = hour
                        .parse()
                        .with_context(|| format!("Invalid hour '{}'", hour))?;
                    Command::Apply(Message::OpenTimeSlot(date, hour))
                }
                None => Command::Apply(Message::OpenDay(date)),
            }
        }
        "edit" => Command::Apply(Message::OpenEvent(required(rest, "edit ID")?)),
        "title" => Command::Apply(Message::UpdateTitle(rest.to_string())),
        "desc" | "description" => Command::Apply(Message::UpdateDescription(rest.to_string())),
        "start" => Command::Apply(Message::UpdateStartTime(required(rest, "start HH:MM")?)),
        "end" => Command::Apply(Message::UpdateEndTime(required(rest, "end HH:MM")?)),
        "color" | "colour" => {
            let value = required(rest, "color VALUE")?;
            match value.parse::<usize>() {
                Ok(0) => bail!("Palette swatches are numbered from 1"),
                Ok(n) => Command::Apply(Message::SelectPaletteColor(n - 1)),
                Err(_) => Command::Apply(Message::UpdateColor(value)),
            }
        }
        "save" => Command::Apply(Message::SaveEvent),
        "delete" => Command::Apply(Message::DeleteEvent),
        "cancel" | "close" => Command::Apply(Message::CloseDialog),
        "show" => Command::Show,
        "list" => match rest {
            "" => Command::List { json: false },
            "--json" => Command::List { json: true },
            other => bail!("Unknown list option '{}'", other),
        },
        "search" => Command::Search(required(rest, "search TEXT")?),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("Unknown command '{}' (type 'help')", other),
    };

    Ok(Some(command))
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (expected YYYY-MM-DD)", text))
}

fn required(rest: &str, usage: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("Usage: {}", usage);
    }
    Ok(rest.to_string())
}

use std::io::{BufRead, Write};

use anyhow::{Context, anyhow};
use chrono::Local;
use tracing::debug;

use crate::app::App;
use crate::event::{Action, Field, UiEvent};
use crate::view::ViewMode;

pub const HELP_TEXT: &str = "\
commands:
  set <field-id> <value>   raw input event (task-input, dueDate, filterDate,
                           description-input, topic-input, remove-input,
                           complete-input)
  press <action-id>        raw click event (add, remove, complete, list, day,
                           month, optionalGraphic)
  add [name]               set the task name (if given) and press add
  due <date>               set the due-date buffer (`today` for today's date)
  filter <date>            set the filter-date buffer
  desc <text>              set the description buffer
  topic <text>             set the topic buffer
  remove [n]               set the remove index (if given) and press remove
  complete [n]             set the complete index (if given) and press complete
  view <list|day|month>    switch the view mode
  graphic                  toggle the count summary
  show                     print the current fragments
  help                     this text
  quit                     leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Events(Vec<UiEvent>),
    Show,
    Help,
    Quit,
}

pub fn today_stamp() -> String {
    Local::now().format("%Y %m %d").to_string()
}

// One session line -> host command. `today` is injected so parsing stays
// deterministic under test.
pub fn parse_line(line: &str, today: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(line);
    let command = match word {
        "set" => {
            let (id, value) = split_word(rest);
            let field =
                Field::from_id(id).ok_or_else(|| anyhow!("unknown field id: {id}"))?;
            Command::Events(vec![UiEvent::input(field, expand_date(field, value, today))])
        }
        "press" => {
            let action = Action::from_id(rest)
                .ok_or_else(|| anyhow!("unknown action id: {rest}"))?;
            Command::Events(vec![UiEvent::click(action)])
        }
        "add" => {
            let mut events = Vec::new();
            if !rest.is_empty() {
                events.push(UiEvent::input(Field::TaskName, rest));
            }
            events.push(UiEvent::click(Action::Add));
            Command::Events(events)
        }
        "due" => Command::Events(vec![UiEvent::input(
            Field::DueDate,
            expand_date(Field::DueDate, rest, today),
        )]),
        "filter" => Command::Events(vec![UiEvent::input(
            Field::FilterDate,
            expand_date(Field::FilterDate, rest, today),
        )]),
        "desc" => Command::Events(vec![UiEvent::input(Field::Description, rest)]),
        "topic" => Command::Events(vec![UiEvent::input(Field::Topic, rest)]),
        "remove" => {
            let mut events = Vec::new();
            if !rest.is_empty() {
                events.push(UiEvent::input(Field::RemoveIndex, rest));
            }
            events.push(UiEvent::click(Action::Remove));
            Command::Events(events)
        }
        "complete" => {
            let mut events = Vec::new();
            if !rest.is_empty() {
                events.push(UiEvent::input(Field::CompleteIndex, rest));
            }
            events.push(UiEvent::click(Action::Complete));
            Command::Events(events)
        }
        "view" => {
            let mode = ViewMode::from_name(rest)
                .ok_or_else(|| anyhow!("unknown view mode: {rest}"))?;
            let action = match mode {
                ViewMode::List => Action::ListView,
                ViewMode::Day => Action::DayView,
                ViewMode::Month => Action::MonthView,
            };
            Command::Events(vec![UiEvent::click(action)])
        }
        "graphic" => Command::Events(vec![UiEvent::click(Action::ToggleGraphic)]),
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(anyhow!("unknown command: {other}")),
    };

    Ok(Some(command))
}

#[tracing::instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(app: &mut App, input: R, mut out: W) -> anyhow::Result<()> {
    let today = today_stamp();

    for line in input.lines() {
        let line = line.context("failed to read session input")?;

        match parse_line(&line, &today) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => {
                writeln!(out, "{HELP_TEXT}").context("failed to write to render sink")?;
            }
            Ok(Some(Command::Show)) => print_views(app, &mut out)?,
            Ok(Some(Command::Events(events))) => {
                let had_click = events
                    .iter()
                    .any(|event| matches!(event, UiEvent::Click { .. }));

                for event in events {
                    app.handle(event);
                }

                // clicks are the render triggers; inputs only touch buffers
                if had_click {
                    print_views(app, &mut out)?;
                }
            }
            Err(err) => {
                debug!(line = %line, "rejected session line");
                writeln!(out, "error: {err}").context("failed to write to render sink")?;
            }
        }
    }

    Ok(())
}

fn print_views<W: Write>(app: &App, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "== active ==")?;
    writeln!(out, "{}", app.active_view())?;
    writeln!(out, "== completed ==")?;
    writeln!(out, "{}", app.completed_view())?;
    writeln!(out, "== summary ==")?;
    writeln!(out, "{}", app.summary_view())?;
    Ok(())
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn expand_date(field: Field, value: &str, today: &str) -> String {
    if value == "today" && matches!(field, Field::DueDate | Field::FilterDate) {
        today.to_string()
    } else {
        value.to_string()
    }
}

//! Line-oriented front end over the analyzer session actor.

use std::sync::Arc;

use anyhow::{Context, Result};
use client_core::{
    session, AnalyzerState, ExampleCategory, SentimentService, SessionEvent, UserAction,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::render::{render_examples, render_state};

const HELP: &str = "\
Type a line of text to set the review draft, or a command:
  /analyze, /a                  analyze the current draft
  /train                        train the model
  /clear                        clear draft, result and error
  /example <category> <n>       load example n (positive, negative, neutral)
  /examples                     list examples
  /show                         show the current state
  /help                         show this help
  /quit                         exit";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Action(UserAction),
    ShowExamples,
    Show,
    Help,
    Quit,
    Invalid(String),
    Nothing,
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Nothing;
    }
    if !trimmed.starts_with('/') {
        return Input::Action(UserAction::SetDraft(line.to_string()));
    }

    let mut parts = trimmed.split_whitespace();
    match parts.next().unwrap_or_default() {
        "/analyze" | "/a" => Input::Action(UserAction::Analyze),
        "/train" => Input::Action(UserAction::Train),
        "/clear" => Input::Action(UserAction::Clear),
        "/examples" => Input::ShowExamples,
        "/example" => parse_example(parts.next(), parts.next()),
        "/show" => Input::Show,
        "/help" => Input::Help,
        "/quit" | "/exit" => Input::Quit,
        other => Input::Invalid(format!("unknown command '{other}'; type /help")),
    }
}

fn parse_example(category: Option<&str>, number: Option<&str>) -> Input {
    let (Some(category), Some(number)) = (category, number) else {
        return Input::Invalid("usage: /example <positive|negative|neutral> <n>".into());
    };
    let category = match category.parse::<ExampleCategory>() {
        Ok(category) => category,
        Err(err) => return Input::Invalid(err.to_string()),
    };
    match number.parse::<usize>() {
        Ok(n) if n >= 1 => Input::Action(UserAction::LoadExample {
            category,
            index: n - 1,
        }),
        _ => Input::Invalid(format!("'{number}' is not an example number (they start at 1)")),
    }
}

pub async fn run(service: Arc<dyn SentimentService>) -> Result<()> {
    let mut handle = session::spawn(service);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_rendered: Option<AnalyzerState> = None;
    let mut current = AnalyzerState::default();

    println!("{HELP}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else { break };
                match parse_input(&line) {
                    Input::Action(action) => {
                        if let Err(err) = handle.dispatch(action) {
                            println!("! {err}");
                        }
                    }
                    Input::ShowExamples => print!("{}", render_examples()),
                    Input::Show => print!("{}", render_state(&current)),
                    Input::Help => println!("{HELP}"),
                    Input::Quit => break,
                    Input::Invalid(message) => println!("! {message}"),
                    Input::Nothing => {}
                }
            }
            event = handle.next_event() => {
                let Some(event) = event else { break };
                match event {
                    SessionEvent::State(state) => {
                        if last_rendered.as_ref() != Some(&state) {
                            print!("{}", render_state(&state));
                            last_rendered = Some(state.clone());
                        }
                        current = state;
                    }
                    SessionEvent::Notice(notice) => println!("{notice}"),
                    SessionEvent::Rejected(message) => println!("! {message}"),
                }
            }
        }
    }

    debug!("interactive session ending");
    handle.shutdown().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_set_the_draft_verbatim() {
        assert_eq!(
            parse_input("  Great film! "),
            Input::Action(UserAction::SetDraft("  Great film! ".into()))
        );
        assert_eq!(parse_input("   "), Input::Nothing);
    }

    #[test]
    fn commit_shortcut_analyzes() {
        assert_eq!(parse_input("/a"), Input::Action(UserAction::Analyze));
        assert_eq!(parse_input("/analyze"), Input::Action(UserAction::Analyze));
        assert_eq!(parse_input("/train"), Input::Action(UserAction::Train));
        assert_eq!(parse_input("/quit"), Input::Quit);
    }

    #[test]
    fn example_numbers_are_one_based() {
        assert_eq!(
            parse_input("/example negative 1"),
            Input::Action(UserAction::LoadExample {
                category: ExampleCategory::Negative,
                index: 0,
            })
        );
        assert!(matches!(parse_input("/example negative 0"), Input::Invalid(_)));
        assert!(matches!(parse_input("/example mixed 1"), Input::Invalid(_)));
        assert!(matches!(parse_input("/example"), Input::Invalid(_)));
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert!(matches!(parse_input("/frobnicate"), Input::Invalid(_)));
    }
}

use std::str::FromStr;

use anyhow::{Context, Error, anyhow, bail};
use expandable_label::InteractionScope;

/// A line typed at the preview prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tap { x: f64, y: f64 },
    Toggle,
    Text(String),
    UnexpandedLines(u32),
    ExpandedLines(u32),
    Scope(InteractionScope),
    Show,
    Help,
    Quit,
}

impl Command {
    pub const HELP: &'static str = "\
commands:
  tap <x> <y>          tap at a point in the label's local coordinates
  toggle               flip the expand state directly
  text <words...>      replace the text
  lines <1-10>         rows shown while collapsed
  expanded <0-10>      rows shown while expanded (0 = unlimited)
  scope <button|text>  where taps toggle the label
  show                 print the label state
  help                 print this help
  quit                 exit";
}

fn parse_lines(value: Option<&str>, range: std::ops::RangeInclusive<u32>) -> Result<u32, Error> {
    let value = value.ok_or_else(|| anyhow!("missing line count"))?;
    let lines: u32 = value
        .parse()
        .with_context(|| format!("invalid line count {value:?}"))?;
    if !range.contains(&lines) {
        bail!(
            "line count must be between {} and {}",
            range.start(),
            range.end()
        );
    }
    Ok(lines)
}

fn parse_coordinate(value: Option<&str>) -> Result<f64, Error> {
    let value = value.ok_or_else(|| anyhow!("usage: tap <x> <y>"))?;
    value
        .parse()
        .with_context(|| format!("invalid coordinate {value:?}"))
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let command = match name {
            "tap" => Command::Tap {
                x: parse_coordinate(args.next())?,
                y: parse_coordinate(args.next())?,
            },
            "toggle" => Command::Toggle,
            "text" if rest.is_empty() => bail!("usage: text <words...>"),
            "text" => Command::Text(rest.to_string()),
            "lines" => Command::UnexpandedLines(parse_lines(args.next(), 1..=10)?),
            "expanded" => Command::ExpandedLines(parse_lines(args.next(), 0..=10)?),
            "scope" => match args.next() {
                Some("button") => Command::Scope(InteractionScope::Button),
                Some("text") => Command::Scope(InteractionScope::Text),
                _ => bail!("usage: scope <button|text>"),
            },
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command {other:?}, type `help`"),
        };
        Ok(command)
    }
}

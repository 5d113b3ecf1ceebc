//! Protocol command parsing

use std::str::FromStr;
use anyhow::{bail, ensure, Context};

use crate::core::Color;

/// Which position a `position` command loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionSpec {
    StartPos { last_move: Option<String> },
    Fen(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    IsReady,
    Position(PositionSpec),
    Moves(String),
    AllMoves(Color),
    Board,
    Fen,
    SetOption { name: String, value: String },
    Quit,
}

/// Trim a raw input line, dropping blank lines
pub fn parse_command(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(input.to_string())
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let (&name, args) = parts.split_first().context("Empty command")?;

        let command = match name {
            "isready" => Command::IsReady,
            "quit" => Command::Quit,
            "board" => Command::Board,
            "fen" => Command::Fen,
            "moves" => {
                ensure!(args.len() == 1, "moves takes exactly one square");
                Command::Moves(args[0].to_ascii_lowercase())
            }
            "allmoves" => {
                ensure!(args.len() == 1, "allmoves takes exactly one color");
                let color = match args[0] {
                    "white" => Color::White,
                    "black" => Color::Black,
                    other => bail!("Unknown color: {}", other),
                };
                Command::AllMoves(color)
            }
            "setoption" => {
                ensure!(
                    args.len() == 4 && args[0] == "name" && args[2] == "value",
                    "invalid setoption command"
                );
                Command::SetOption {
                    name: args[1].to_string(),
                    value: args[3].to_string(),
                }
            }
            "position" => Command::Position(parse_position(args)?),
            _ => bail!("Unknown command: {}", name),
        };

        Ok(command)
    }
}

fn parse_position(args: &[&str]) -> anyhow::Result<PositionSpec> {
    match args {
        ["startpos"] => Ok(PositionSpec::StartPos { last_move: None }),
        ["startpos", "lastmove", notation] => Ok(PositionSpec::StartPos {
            last_move: Some(notation.to_string()),
        }),
        ["fen", fen @ ..] if !fen.is_empty() => Ok(PositionSpec::Fen(fen.join(" "))),
        _ => bail!("invalid position command"),
    }
}

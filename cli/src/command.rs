use std::str::FromStr;

use tambola_core::Number;
use thiserror::Error;

/// One line typed during interactive play.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Deal tickets, `None` means the configured count.
    Tickets(Option<usize>),
    Draw,
    Mark(Number),
    NewGame,
    Status,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            // bare enter draws, like hitting the caller's button
            return Ok(Self::Draw);
        };
        let argument = words.next();

        Ok(match command.to_ascii_lowercase().as_str() {
            "t" | "tickets" => Self::Tickets(argument.map(parse_number::<usize>).transpose()?),
            "d" | "draw" => Self::Draw,
            "m" | "mark" => {
                let argument = argument.ok_or(InputError::MissingArgument {
                    command: "mark",
                    what: "a number",
                })?;
                Self::Mark(parse_number(argument)?)
            }
            "n" | "new" => Self::NewGame,
            "s" | "status" => Self::Status,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Err(InputError::Unknown(command.to_owned())),
        })
    }
}

fn parse_number<T: FromStr>(word: &str) -> Result<T, InputError> {
    word.parse()
        .map_err(|_| InputError::NotANumber(word.to_owned()))
}

pub const HELP: &str = "\
commands:
  t, tickets [N]   deal N tickets (default from settings)
  d, draw          call the next number (or just press enter)
  m, mark N        toggle your mark on N
  n, new           new game with the same tickets
  s, status        show tickets and statistics
  h, help          this text
  q, quit          leave";

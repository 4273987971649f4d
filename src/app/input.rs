use std::str::FromStr;
use thiserror::Error;

use crate::app::state::App;

/// A control command, one per input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Reset,
    Speed(u8),
    Step,
    Stats,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("missing argument for {0}")]
    MissingArgument(&'static str),

    #[error("speed level must be 1-9, got {0}")]
    InvalidSpeed(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Err(CommandError::Empty);
        };

        match word.to_ascii_lowercase().as_str() {
            "start" | "run" => Ok(Self::Start),
            "pause" => Ok(Self::Pause),
            "reset" => Ok(Self::Reset),
            "step" | "n" => Ok(Self::Step),
            "stats" | "s" => Ok(Self::Stats),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            "speed" => {
                let arg = parts.next().ok_or(CommandError::MissingArgument("speed"))?;
                parse_speed(arg)
            }
            // bare digits work like the number keys
            other if other.len() == 1 && other.chars().all(|c| c.is_ascii_digit()) => {
                parse_speed(other)
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_speed(arg: &str) -> Result<Command, CommandError> {
    match arg.parse::<u8>() {
        Ok(level @ 1..=9) => Ok(Command::Speed(level)),
        _ => Err(CommandError::InvalidSpeed(arg.to_string())),
    }
}

impl App {
    /// Applies a command. Returns text to show the user, if any.
    pub fn handle_command(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Reset => {
                self.reset();
                return Some(self.status_line());
            }
            Command::Speed(level) => {
                self.set_speed_level(level);
                return Some(format!(
                    "Speed: {}ms",
                    self.population().tick_interval().as_millis()
                ));
            }
            Command::Step => {
                self.step();
                return Some(self.status_line());
            }
            Command::Stats => return Some(self.status_line()),
            Command::Quit => self.quit = true,
        }
        None
    }

    /// Parses and applies one input line. Bad input is logged and ignored.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        match line.parse::<Command>() {
            Ok(command) => self.handle_command(command),
            Err(CommandError::Empty) => None,
            Err(e) => {
                tracing::warn!(input = line, error = %e, "Rejected command");
                Some(e.to_string())
            }
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};

/// Maximum length of a command argument in bytes.
pub const MAX_ARG_LEN: usize = 31;

/// The closed vocabulary of player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandCode {
    /// No command has been issued yet.
    None,
    /// The input did not match any command.
    Unknown,
    /// End the session.
    Exit,
    /// Pick up an object in the current space.
    Take,
    /// Put a carried object down in the current space.
    Drop,
    /// Fight the hostile characters in the current space.
    Attack,
    /// Talk to a friendly character in the current space.
    Chat,
    /// Walk through a link in a cardinal direction.
    Move,
    /// Read an object's description.
    Inspect,
    /// Ask a friendly character to follow.
    Recruit,
    /// Release a follower.
    Abandon,
}

/// Short form, long form, and code for every typed command, in match order.
const ALIASES: [(&str, &str, CommandCode); 9] = [
    ("e", "exit", CommandCode::Exit),
    ("t", "take", CommandCode::Take),
    ("d", "drop", CommandCode::Drop),
    ("a", "attack", CommandCode::Attack),
    ("c", "chat", CommandCode::Chat),
    ("m", "move", CommandCode::Move),
    ("i", "inspect", CommandCode::Inspect),
    ("r", "recruit", CommandCode::Recruit),
    ("ab", "abandon", CommandCode::Abandon),
];

impl CommandCode {
    /// Returns true for the commands that consume the rest of the line as
    /// an argument.
    pub fn takes_argument(self) -> bool {
        matches!(
            self,
            Self::Take
                | Self::Drop
                | Self::Move
                | Self::Inspect
                | Self::Recruit
                | Self::Abandon
                | Self::Chat
        )
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::None => "none",
            Self::Unknown => "unknown",
            Self::Exit => "exit",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Attack => "attack",
            Self::Chat => "chat",
            Self::Move => "move",
            Self::Inspect => "inspect",
            Self::Recruit => "recruit",
            Self::Abandon => "abandon",
        };
        write!(f, "{text}")
    }
}

/// OK/ERROR result of a command's last execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The handler produced an observable effect.
    Success,
    /// A precondition failed; the world is unchanged.
    Failure,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "OK"),
            Self::Failure => write!(f, "ERROR"),
        }
    }
}

/// A tokenized player command: code, argument, and last outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    code: CommandCode,
    arg: String,
    status: Outcome,
}

impl Command {
    /// A command with no code, an empty argument, and a failed status.
    pub fn new() -> Self {
        Self {
            code: CommandCode::None,
            arg: String::new(),
            status: Outcome::Failure,
        }
    }

    /// A ready-made EXIT command, used by the run loop on end of input.
    pub fn exit() -> Self {
        let mut command = Self::new();
        command.set_code(CommandCode::Exit);
        command
    }

    /// Tokenize one input line.
    ///
    /// The first whitespace-delimited token is matched case-insensitively
    /// against the alias table; an unrecognized or missing token yields
    /// [`CommandCode::Unknown`]. Argument-taking commands consume the rest
    /// of the line, trimmed of leading spaces; an empty remainder is an
    /// empty argument. An over-long argument fails silently, leaving the
    /// argument empty.
    pub fn parse_line(line: &str) -> Self {
        let mut command = Self::new();
        let line = line.trim_end_matches(['\n', '\r']);
        let Some(token) = line.split_whitespace().next() else {
            command.set_code(CommandCode::Unknown);
            return command;
        };

        let code = ALIASES
            .iter()
            .find(|(short, long, _)| {
                token.eq_ignore_ascii_case(short) || token.eq_ignore_ascii_case(long)
            })
            .map(|&(_, _, code)| code)
            .unwrap_or(CommandCode::Unknown);
        command.set_code(code);

        if code.takes_argument() {
            let rest = &line[line.find(token).unwrap_or(0) + token.len()..];
            let _ = command.set_arg(rest.trim_start_matches(' '));
        }

        command
    }

    /// The command code.
    pub fn code(&self) -> CommandCode {
        self.code
    }

    /// Replace the command code.
    pub fn set_code(&mut self, code: CommandCode) {
        self.code = code;
    }

    /// The free-text argument (empty when none was given).
    pub fn arg(&self) -> &str {
        &self.arg
    }

    /// Replace the argument. Fails, leaving it unchanged, when the text
    /// exceeds [`MAX_ARG_LEN`] bytes.
    pub fn set_arg(&mut self, arg: &str) -> WorldResult<()> {
        if arg.len() > MAX_ARG_LEN {
            return Err(WorldError::ArgumentTooLong { max: MAX_ARG_LEN });
        }
        self.arg = arg.to_string();
        Ok(())
    }

    /// The OK/ERROR status of the last execution.
    pub fn status(&self) -> Outcome {
        self.status
    }

    /// Record the outcome of an execution.
    pub fn set_status(&mut self, status: Outcome) {
        self.status = status;
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new()
    }
}

//! Abstract player commands
//!
//! Devices are handled by the host; the game only sees these commands.

use serde::{Deserialize, Serialize};

/// A player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    Fire,
    Save,
    Load,
    Quit,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeftStart => "left",
            Command::MoveLeftStop => "-left",
            Command::MoveRightStart => "right",
            Command::MoveRightStop => "-right",
            Command::Fire => "fire",
            Command::Save => "save",
            Command::Load => "load",
            Command::Quit => "quit",
        }
    }

    /// Parse a command name (as written in command scripts)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Command::MoveLeftStart),
            "-left" => Some(Command::MoveLeftStop),
            "right" => Some(Command::MoveRightStart),
            "-right" => Some(Command::MoveRightStop),
            "fire" | "space" => Some(Command::Fire),
            "save" | "s" => Some(Command::Save),
            "load" | "l" => Some(Command::Load),
            "quit" | "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

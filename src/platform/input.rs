//! Raw input to game commands

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Jump while playing, otherwise start a fresh round
    Activate,
    /// Restart button: straight to a fresh round, no ground check
    Restart,
    /// Demo mode on/off
    ToggleAutopilot,
}

/// Map a `KeyboardEvent.code` to a command
pub fn command_for_key(code: &str) -> Option<Command> {
    match code {
        "Space" | "ArrowUp" => Some(Command::Activate),
        "KeyI" => Some(Command::ToggleAutopilot),
        _ => None,
    }
}

/// Pointer press on the play surface. Presses on buttons belong to the
/// button's own handler.
pub fn command_for_pointer(on_button: bool) -> Option<Command> {
    if on_button {
        None
    } else {
        Some(Command::Activate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_keys() {
        assert_eq!(command_for_key("Space"), Some(Command::Activate));
        assert_eq!(command_for_key("ArrowUp"), Some(Command::Activate));
        assert_eq!(command_for_key("KeyI"), Some(Command::ToggleAutopilot));
        assert_eq!(command_for_key("ArrowDown"), None);
    }

    #[test]
    fn test_pointer_skips_buttons() {
        assert_eq!(command_for_pointer(false), Some(Command::Activate));
        assert_eq!(command_for_pointer(true), None);
    }
}

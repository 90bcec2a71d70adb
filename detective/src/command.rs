//! Operator command vocabulary.

/// One move of the exploration. `Quit` ends it from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Quit,
}

impl Command {
    /// Parses one operator line: trimmed, case-insensitive, full word or
    /// single letter. Anything else is unrecognized and yields `None`.
    pub fn parse(input: &str) -> Option<Command> {
        match input.trim().to_ascii_uppercase().as_str() {
            "LEFT" | "L" => Some(Command::Left),
            "RIGHT" | "R" => Some(Command::Right),
            "QUIT" | "Q" | "FINISH" | "F" => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_and_letters_both_parse() {
        assert_eq!(Command::parse("LEFT"), Some(Command::Left));
        assert_eq!(Command::parse("l"), Some(Command::Left));
        assert_eq!(Command::parse("right"), Some(Command::Right));
        assert_eq!(Command::parse("R"), Some(Command::Right));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(Command::parse("FINISH"), Some(Command::Quit));
        assert_eq!(Command::parse("f"), Some(Command::Quit));
    }

    #[test]
    fn case_and_surrounding_whitespace_are_ignored() {
        assert_eq!(Command::parse("  LeFt \n"), Some(Command::Left));
        assert_eq!(Command::parse("\tq "), Some(Command::Quit));
    }

    #[test]
    fn unknown_input_is_rejected() {
        for bad in ["", "  ", "up", "leftt", "l r", "2"] {
            assert_eq!(Command::parse(bad), None, "{bad:?} should not parse");
        }
    }
}

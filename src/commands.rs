//! Terminal command parsing (/submit, /summary, /help, /quit).

/// What a line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Fill in and submit the intake form
    Submit,
    /// Show the submitted record
    Summary,
    Help,
    Quit,
    /// Unknown `/command`
    Unknown(String),
    /// Anything else is a chat message
    Chat(String),
}

pub const HELP_LINES: &[&str] = &[
    "Commands:",
    "  /submit   fill in and submit your information",
    "  /summary  show the information you submitted",
    "  /help     show this help",
    "  /quit     leave",
    "Anything else is sent as a question.",
];

/// Parse one input line. Lines not starting with '/' are chat messages.
pub fn parse_user_command(line: &str) -> UserCommand {
    let s = line.trim();
    let Some(cmdline) = s.strip_prefix('/') else {
        return UserCommand::Chat(line.to_string());
    };

    let cmd = cmdline
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();

    match cmd.as_str() {
        "submit" | "form" => UserCommand::Submit,
        "summary" | "info" => UserCommand::Summary,
        "help" | "h" | "?" => UserCommand::Help,
        "quit" | "exit" | "q" => UserCommand::Quit,
        _ => UserCommand::Unknown(cmd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(parse_user_command("/submit"), UserCommand::Submit);
        assert_eq!(parse_user_command("  /QUIT  "), UserCommand::Quit);
        assert_eq!(parse_user_command("/exit"), UserCommand::Quit);
        assert_eq!(parse_user_command("/summary"), UserCommand::Summary);
        assert_eq!(parse_user_command("/help"), UserCommand::Help);
        assert_eq!(
            parse_user_command("/dance now"),
            UserCommand::Unknown("dance".into())
        );
    }

    #[test]
    fn test_chat_lines_are_passed_through_untrimmed() {
        assert_eq!(
            parse_user_command("  scholarships for SC students?"),
            UserCommand::Chat("  scholarships for SC students?".into())
        );
        assert_eq!(parse_user_command(""), UserCommand::Chat(String::new()));
    }
}

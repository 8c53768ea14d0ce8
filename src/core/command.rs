//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Dashboard,
    Content,
    Editor,
    Media,

    // View state commands
    Filter(Option<String>),
    Search(Option<String>),
    Clear,

    // Actions
    Export(Option<String>),
    New,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "dashboard" | "dash" | "home" => Command::Dashboard,
        "content" | "articles" | "posts" => Command::Content,
        "editor" | "edit" => Command::Editor,
        "media" | "library" => Command::Media,

        // View state
        "filter" | "status" => Command::Filter(args),
        "search" | "find" => Command::Search(args),
        "clear" | "reset" => Command::Clear,

        // Actions
        "export" | "exp" => Command::Export(args),
        "new" | "create" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("dashboard"), Command::Dashboard);
        assert_eq!(parse_command("home"), Command::Dashboard);
        assert_eq!(parse_command("posts"), Command::Content);
        assert_eq!(parse_command("EDIT"), Command::Editor);
        assert_eq!(parse_command("  library "), Command::Media);
    }

    #[test]
    fn test_parse_view_state_commands() {
        assert_eq!(parse_command("filter"), Command::Filter(None));
        assert_eq!(
            parse_command("filter draft"),
            Command::Filter(Some("draft".to_string()))
        );
        assert_eq!(
            parse_command("search Port Expansion"),
            Command::Search(Some("Port Expansion".to_string()))
        );
        assert_eq!(parse_command("search   "), Command::Search(None));
        assert_eq!(parse_command("reset"), Command::Clear);
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(parse_command("export"), Command::Export(None));
        assert_eq!(
            parse_command("export json"),
            Command::Export(Some("json".to_string()))
        );
        assert_eq!(parse_command("new"), Command::New);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}

use itertools::Itertools;

/// Query words asking for the help text instead of a roll
pub const HELP_QUERIES: [&str; 4] = ["help", "--help", "h", "-h"];

const EXAMPLES: [(&str, &str); 6] = [
    ("20", "to roll a 20-sided die. You can use any number."),
    ("5D6", "to roll five 6-sided dice in one go."),
    ("5D6+3", "to roll five 6-sided dice and add 3 to the result of each die."),
    ("5D6 +3", "(with a space) to roll five 6-sided dice and add 3 to the total."),
    ("5 d8 13D20", "to roll different dice at the same time."),
    ("help", "will show this help text."),
];

pub fn is_help(query: &str) -> bool {
    HELP_QUERIES.contains(&query.trim())
}

/// Help text, every example prefixed with `command`
pub fn text(command: &str) -> String {
    let command = command.trim();
    format!(
        "Here are some examples:\n{}\n\n ⚅ ⚂ Let's get rolling! ⚁ ⚄",
        EXAMPLES
            .iter()
            .map(|(query, what)| match command {
                "" => format!("- `{query}` {what}"),
                command => format!("- `{command} {query}` {what}"),
            })
            .format("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_queries() {
        assert!(is_help("help"));
        assert!(is_help(" -h "));
        assert!(is_help("--help"));
        assert!(!is_help("helpme"));
        assert!(!is_help("5d6"));
    }

    #[test]
    fn text_is_prefixed() {
        let help = text("!roll");
        assert!(help.starts_with("Here are some examples:\n- `!roll 20` to roll"));
        assert!(help.contains("- `!roll 5 d8 13D20` to roll different dice"));
        let bare = text("");
        assert!(bare.contains("- `5D6 +3` (with a space)"));
    }
}

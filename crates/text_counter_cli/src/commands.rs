#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    Clear,
    Show,
    Quit,
    Mono,
    Wrap(String),
    Encodings(Vec<String>),
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
/wrap <n>          set the wrap width (graphemes per line)
/encoding <a,b,..> set the encodings measured for byte length
/mono              toggle the monospace display preference
/show              render the readout again
/clear             discard the entered text
/quit              exit
Any other line is appended to the text.";

pub fn parse_slash_command(input: &str) -> Option<SlashCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or(trimmed).to_string();
    let argument = parts.next().map(str::trim).unwrap_or("");

    let parsed = match command.as_str() {
        "/help" => SlashCommand::Help,
        "/clear" => SlashCommand::Clear,
        "/show" => SlashCommand::Show,
        "/quit" => SlashCommand::Quit,
        "/mono" => SlashCommand::Mono,
        "/wrap" => SlashCommand::Wrap(argument.to_string()),
        "/encoding" | "/encodings" => SlashCommand::Encodings(
            argument
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => SlashCommand::Unknown(command),
    };

    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::{parse_slash_command, SlashCommand};

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse_slash_command("hello /wrap"), None);
        assert_eq!(parse_slash_command(""), None);
    }

    #[test]
    fn commands_carry_their_arguments() {
        assert_eq!(
            parse_slash_command("/wrap  40 "),
            Some(SlashCommand::Wrap("40".to_string()))
        );
        assert_eq!(
            parse_slash_command("/wrap"),
            Some(SlashCommand::Wrap(String::new()))
        );
        assert_eq!(
            parse_slash_command("/encoding UTF-8, Shift_JIS"),
            Some(SlashCommand::Encodings(vec![
                "UTF-8".to_string(),
                "Shift_JIS".to_string()
            ]))
        );
        assert_eq!(parse_slash_command(" /mono"), Some(SlashCommand::Mono));
        assert_eq!(
            parse_slash_command("/nope"),
            Some(SlashCommand::Unknown("/nope".to_string()))
        );
    }
}

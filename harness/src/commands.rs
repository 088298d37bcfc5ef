use herald::Urgency;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Send,
    Title(String),
    Body(String),
    Summary(String),
    Index(bool),
    Urgency(Urgency),
    Edit,
    Retract,
    RetractAll,
    Caps,
    Events,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  title <text>        set the title field
  body <text>         set the body field
  summary <text>      set the summary field
  index on|off        prefix titles with a running count
  urgency low|normal|critical
  send                send a notification from the current fields
  edit                replace the last notification with the current fields
  retract             retract the last notification
  retract-all         retract every live notification
  caps                show server and platform capabilities
  events              poll pending events now
  status              show the form and live notification count
  help                this text
  quit                exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "send" | "s" => Ok(Command::Send),
            "title" => Ok(Command::Title(rest.to_string())),
            "body" => Ok(Command::Body(rest.to_string())),
            "summary" => Ok(Command::Summary(rest.to_string())),
            "index" => match rest {
                "on" | "1" | "true" => Ok(Command::Index(true)),
                "off" | "0" | "false" => Ok(Command::Index(false)),
                other => Err(format!("index expects on or off, got '{other}'")),
            },
            "urgency" => Urgency::parse(rest)
                .map(Command::Urgency)
                .ok_or_else(|| format!("unknown urgency '{rest}'")),
            "edit" => Ok(Command::Edit),
            "retract" => Ok(Command::Retract),
            "retract-all" => Ok(Command::RetractAll),
            "caps" => Ok(Command::Caps),
            "events" => Ok(Command::Events),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command '{other}', try 'help'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_fields_keep_spaces() {
        assert_eq!(
            Command::parse("title  Build finished "),
            Ok(Command::Title("Build finished".to_string()))
        );
        assert_eq!(Command::parse("body"), Ok(Command::Body(String::new())));
    }

    #[test]
    fn test_parse_index_and_urgency() {
        assert_eq!(Command::parse("index on"), Ok(Command::Index(true)));
        assert_eq!(Command::parse("INDEX off"), Ok(Command::Index(false)));
        assert!(Command::parse("index maybe").is_err());
        assert_eq!(
            Command::parse("urgency critical"),
            Ok(Command::Urgency(Urgency::Critical))
        );
        assert!(Command::parse("urgency loud").is_err());
    }

    #[test]
    fn test_parse_buttons() {
        assert_eq!(Command::parse("send"), Ok(Command::Send));
        assert_eq!(Command::parse("retract-all"), Ok(Command::RetractAll));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert!(Command::parse("   ").is_err());
        assert!(Command::parse("hide").is_err());
    }
}

use crate::shared::errors::{AppError, AppResult};

/// One line typed into the terminal front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Plain text goes to the search box
    Search(String),
    More,
    /// 1-based position in the current list
    Open(usize),
    Back,
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.trim_start().strip_prefix(':') else {
            return Ok(ConsoleCommand::Search(line.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let argument = parts.next();

        match (name.as_str(), argument) {
            ("more" | "m", None) => Ok(ConsoleCommand::More),
            ("back" | "b", None) => Ok(ConsoleCommand::Back),
            ("help" | "h" | "?", None) => Ok(ConsoleCommand::Help),
            ("quit" | "q" | "exit", None) => Ok(ConsoleCommand::Quit),
            ("open" | "o", Some(position)) => {
                let position: usize = position.parse()?;
                if position == 0 {
                    return Err(AppError::InvalidInput(
                        "Movie positions start at 1".to_string(),
                    ));
                }
                Ok(ConsoleCommand::Open(position))
            }
            ("open" | "o", None) => Err(AppError::InvalidInput(
                "Usage: :open <position>".to_string(),
            )),
            _ => Err(AppError::InvalidInput(format!("Unknown command ':{}'", rest.trim()))),
        }
    }

    pub fn help() -> &'static str {
        "Type to search. Commands: :more, :open <n>, :back, :help, :quit"
    }
}

use std::path::PathBuf;

use thiserror::Error;
use viewer_core::{Msg, SubView};

/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `upload` without a file behaves like a picker closed without a selection.
    Upload(Option<PathBuf>),
    Go(String),
    Reset,
    DismissError,
    DismissWarning,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("nothing to dismiss called `{0}`, use `error` or `warning`")]
    UnknownBanner(String),
}

pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "upload" | "open" => {
            Command::Upload((!rest.is_empty()).then(|| PathBuf::from(rest)))
        }
        "go" | "cd" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument("go"));
            }
            Command::Go(resolve_location(rest))
        }
        "reset" => Command::Reset,
        "dismiss" => match rest.to_ascii_lowercase().as_str() {
            "error" => Command::DismissError,
            "warning" => Command::DismissWarning,
            "" => return Err(InputError::MissingArgument("dismiss")),
            other => return Err(InputError::UnknownBanner(other.to_string())),
        },
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Sub-view titles (`roles`, `IIGO`) are shortcuts for their paths; anything
/// else is taken as a literal location.
fn resolve_location(arg: &str) -> String {
    SubView::ALL
        .into_iter()
        .find(|sub_view| sub_view.title().eq_ignore_ascii_case(arg))
        .map(|sub_view| sub_view.path().to_string())
        .unwrap_or_else(|| arg.to_string())
}

impl Command {
    /// The message this command feeds into the session, if any.
    pub fn to_msg(&self) -> Option<Msg> {
        match self {
            Command::Upload(path) => Some(Msg::FileSelected(path.clone())),
            Command::Go(path) => Some(Msg::Navigate(path.clone())),
            Command::Reset => Some(Msg::ResetClicked),
            Command::DismissError => Some(Msg::DismissError),
            Command::DismissWarning => Some(Msg::DismissWarning),
            Command::Show | Command::Help | Command::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewer_core::{IIGO_VISUALISATION, ROLES_VISUALISATION};

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn upload_with_and_without_file() {
        assert_eq!(
            parse_command("upload  out/output.json "),
            Ok(Some(Command::Upload(Some(PathBuf::from("out/output.json")))))
        );
        assert_eq!(parse_command("upload"), Ok(Some(Command::Upload(None))));
    }

    #[test]
    fn go_accepts_titles_and_paths() {
        assert_eq!(
            parse_command("go roles"),
            Ok(Some(Command::Go(ROLES_VISUALISATION.to_string())))
        );
        assert_eq!(
            parse_command("GO iigo"),
            Ok(Some(Command::Go(IIGO_VISUALISATION.to_string())))
        );
        assert_eq!(
            parse_command("go /visualisations/other"),
            Ok(Some(Command::Go("/visualisations/other".to_string())))
        );
        assert_eq!(parse_command("go"), Err(InputError::MissingArgument("go")));
    }

    #[test]
    fn dismiss_targets_one_banner() {
        assert_eq!(parse_command("dismiss warning"), Ok(Some(Command::DismissWarning)));
        assert_eq!(parse_command("dismiss error"), Ok(Some(Command::DismissError)));
        assert_eq!(
            parse_command("dismiss toast"),
            Err(InputError::UnknownBanner("toast".to_string()))
        );
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert_eq!(
            parse_command("frobnicate"),
            Err(InputError::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn commands_map_to_messages() {
        assert_eq!(Command::Reset.to_msg(), Some(Msg::ResetClicked));
        assert_eq!(Command::Upload(None).to_msg(), Some(Msg::FileSelected(None)));
        assert_eq!(Command::Show.to_msg(), None);
    }
}

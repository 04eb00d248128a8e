use clap::{ArgAction, Parser, Subcommand};
use ceviri_store::Theme;

#[derive(Debug, Parser)]
#[command(name = "ceviri", version, about = "Chat-style translator between two languages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive chat session (default)
    Chat,
    /// Translate once and store the result in history
    Translate {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show or clear translation history
    History {
        /// Number of most recent entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
        #[arg(long)]
        clear: bool,
    },
    /// List supported languages
    Languages,
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    Show,
    /// Set the first language
    Lang1 { code: String },
    /// Set the second language
    Lang2 { code: String },
    /// Swap the two languages
    Swap,
    Theme { theme: Theme },
    TextSize { size: u32 },
    AutoCopy {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_translate_joins_words() {
        let cli = Cli::parse_from(["ceviri", "translate", "hello", "world"]);
        match cli.command {
            Some(Command::Translate { text }) => assert_eq!(text, vec!["hello", "world"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_settings_parsing() {
        let cli = Cli::parse_from(["ceviri", "settings", "theme", "dark"]);
        assert!(matches!(
            cli.command,
            Some(Command::Settings {
                action: Some(SettingsAction::Theme { theme: Theme::Dark })
            })
        ));

        let cli = Cli::parse_from(["ceviri", "settings", "auto-copy", "true"]);
        assert!(matches!(
            cli.command,
            Some(Command::Settings {
                action: Some(SettingsAction::AutoCopy { enabled: true })
            })
        ));
    }

    #[test]
    fn test_no_subcommand_means_chat() {
        let cli = Cli::parse_from(["ceviri"]);
        assert!(cli.command.is_none());
    }
}

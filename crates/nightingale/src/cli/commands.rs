//! CLI structure for the nightingale binary.

use clap::{Parser, Subcommand};

/// Command-line arguments for nightingale.
#[derive(Parser, Debug)]
#[command(name = "nightingale")]
#[command(about = "Gemini chat and nurse-staffing action plans in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the chat screen
    Chat,
    /// Open the staffing planner screen
    Plan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_chat_subcommand() {
        let cli = Cli::try_parse_from(["nightingale", "chat"]).unwrap();
        assert!(matches!(cli.command, Commands::Chat));
    }

    #[test]
    fn test_parses_plan_subcommand() {
        let cli = Cli::try_parse_from(["nightingale", "plan"]).unwrap();
        assert!(matches!(cli.command, Commands::Plan));
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["nightingale", "serve"]).is_err());
    }

    #[test]
    fn test_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["nightingale"]).is_err());
    }
}

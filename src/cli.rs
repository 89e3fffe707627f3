use clap::{Parser, Subcommand};

use crate::task::DEFAULT_TARGET_LANGUAGE;

/// Summarize, translate and analyze text with OpenAI from the command line.
#[derive(Parser, Debug)]
#[command(name = "ai-cli-tool", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set your OpenAI API key
    SetKey {
        /// API key to store in the config file
        key: String,
    },

    /// Summarize the provided text using OpenAI
    Summarize {
        /// Text to summarize
        text: String,
    },

    /// Translate this provided text using OpenAI API
    Translate {
        /// Text to translate
        text: String,

        /// Target language code
        #[arg(long = "to", value_name = "LANGUAGE", default_value = DEFAULT_TARGET_LANGUAGE)]
        to: String,
    },

    /// Do Sentiment Analysis on this provided text using OpenAI API
    SentimentAnalysis {
        /// Text to analyze
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use clap::error::ErrorKind;

    use super::{Cli, Command};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ai-cli-tool").chain(args.iter().copied()))
    }

    #[test]
    fn parses_set_key() {
        let cli = parse(&["set-key", "abc123"]).expect("args should parse");
        assert_eq!(
            cli.command,
            Command::SetKey {
                key: "abc123".to_string()
            }
        );
    }

    #[test]
    fn translate_defaults_target_language_to_english() {
        let cli = parse(&["translate", "bonjour"]).expect("args should parse");
        assert_eq!(
            cli.command,
            Command::Translate {
                text: "bonjour".to_string(),
                to: "en".to_string()
            }
        );
    }

    #[test]
    fn translate_accepts_target_language_flag() {
        let cli = parse(&["translate", "hello", "--to", "fr"]).expect("args should parse");
        assert_eq!(
            cli.command,
            Command::Translate {
                text: "hello".to_string(),
                to: "fr".to_string()
            }
        );
    }

    #[test]
    fn parses_summarize_and_sentiment_analysis() {
        let cli = parse(&["summarize", "some text"]).expect("args should parse");
        assert_eq!(
            cli.command,
            Command::Summarize {
                text: "some text".to_string()
            }
        );

        let cli = parse(&["sentiment-analysis", "great day"]).expect("args should parse");
        assert_eq!(
            cli.command,
            Command::SentimentAnalysis {
                text: "great day".to_string()
            }
        );
    }

    #[test]
    fn missing_positional_is_a_usage_error() {
        let err = parse(&["summarize"]).expect_err("parse should fail");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_subcommand_is_a_usage_error() {
        let err = parse(&["paraphrase", "text"]).expect_err("parse should fail");
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }
}
